//! Tower Jump - An endless vertical platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, platform stream, session)
//! - `tuning`: Data-driven game balance
//! - `settings`: Native shell configuration
//! - `platform`: Input and clock adapters at the simulation boundary
//! - `render`: World-to-screen transform and the renderer contract

pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{Settings, SettingsError};
pub use tuning::{ScrollRamp, Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate (ticks per second)
    pub const SIM_HZ: u32 = 60;
    /// Nominal timestep handed to the simulation each tick
    pub const SIM_DT: f32 = 1.0 / SIM_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the clock will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Visible window (16:9 portrait)
    pub const SCREEN_WIDTH: f32 = 480.0;
    pub const SCREEN_HEIGHT: f32 = 854.0;

    /// Player body
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const ACC_GROUND: f32 = 1.0;
    pub const ACC_AIR: f32 = 0.5;
    pub const MAX_SPEED: f32 = 5.0;
    pub const JUMP_VELOCITY: f32 = 22.0;
    /// Per-tick vertical acceleration (world Y points up)
    pub const GRAVITY: f32 = -1.0;
    /// Horizontal velocity multiplier on the ground with no input
    pub const GROUND_FRICTION: f32 = 0.8;
    /// Horizontal velocity multiplier every airborne tick
    pub const AIR_DRAG: f32 = 0.98;

    /// Platforms
    pub const PLATFORM_WIDTH: f32 = 120.0;
    pub const PLATFORM_HEIGHT: f32 = 22.0;
    pub const INITIAL_GAP_MIN: i32 = 110;
    pub const INITIAL_GAP_MAX: i32 = 130;
    pub const INITIAL_OFFSET_MAX: i32 = 140;
    /// Fraction of the theoretical jump height that a gap may use
    pub const JUMP_HEIGHT_MARGIN: f32 = 0.85;
    /// floor(0.85 * 22^2 / 2)
    pub const MAX_GAP_CAP: i32 = 205;
    /// Platforms at or below `camera_y - PRUNE_MARGIN` are dropped
    pub const PRUNE_MARGIN: f32 = 100.0;
    /// Screens of platforms kept generated above the camera
    pub const LOOKAHEAD_SCREENS: f32 = 2.0;

    /// Autoscroll and difficulty ramp
    pub const AUTOSCROLL_SPEED: f32 = 1.6;
    pub const INCREASE_EVERY: u64 = 10;
    pub const GAP_INCREASE: i32 = 10;
    pub const OFFSET_INCREASE: i32 = 10;
    pub const SCROLL_INCREASE: f32 = 0.1;
}

/// Convert a world-space height to a screen-space row (Y down)
#[inline]
pub fn world_to_screen_y(world_y: f32, camera_y: f32, screen_height: f32) -> f32 {
    screen_height - (world_y - camera_y)
}

/// Largest vertical rise a full-power jump reaches, scaled by `margin`
#[inline]
pub fn reachable_gap(jump_velocity: f32, gravity: f32, margin: f32) -> i32 {
    (margin * jump_velocity * jump_velocity / (-2.0 * gravity)).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_gap_cap_matches_jump_physics() {
        let cap = reachable_gap(consts::JUMP_VELOCITY, consts::GRAVITY, consts::JUMP_HEIGHT_MARGIN);
        assert_eq!(cap, consts::MAX_GAP_CAP);
    }

    #[test]
    fn test_world_to_screen_y() {
        // Camera bottom edge maps to the bottom screen row
        let h = consts::SCREEN_HEIGHT;
        assert_eq!(world_to_screen_y(500.0, 500.0, h), h);
        assert_eq!(world_to_screen_y(500.0 + h, 500.0, h), 0.0);
    }
}
