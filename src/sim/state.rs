//! Simulation entities and events
//!
//! World space: a single vertical axis, Y increasing upward. Screen-space
//! conversion happens only in [`crate::render`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended (terminal)
    GameOver,
}

/// A platform surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Left edge
    pub x: f32,
    /// Top surface height
    pub y: f32,
    /// Horizontal span is `[x, x + width)`
    pub width: f32,
    /// Set once when the body first rises above `y`
    pub passed: bool,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32) -> Self {
        Self {
            x,
            y,
            width,
            passed: false,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Horizontal center (autopilot target)
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// The player's body
///
/// `pos.y` is the bottom edge of the bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub grounded: bool,
}

impl Body {
    /// Spawn standing on the floor, centered horizontally
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new((tuning.screen_width - tuning.player_width) / 2.0, 0.0),
            vel: Vec2::ZERO,
            size: Vec2::new(tuning.player_width, tuning.player_height),
            grounded: true,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Top edge in world space
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }
}

/// Things that happened during a tick (observation only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Body left the ground under its own power
    Jumped,
    /// Body came down onto a platform surface
    Landed { y: f32 },
    /// Camera started climbing on its own
    AutoscrollStarted,
    ScrollSpeedUp { speed: f32 },
    /// Body rose above a platform for the first time
    PlatformPassed { y: f32, scored: bool },
    /// Generation difficulty reached a new level
    DifficultyUp { level: u64 },
    GameOver { score: u64 },
}
