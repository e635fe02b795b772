//! Body integration and platform collision
//!
//! The step is a fixed per-tick unit integration: accelerations are applied
//! once per tick and never scaled by the frame timestep.

use super::collision::lands_on;
use super::state::{Body, Platform};
use crate::tuning::Tuning;

/// Continuous horizontal input for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
}

impl MoveInput {
    /// Net target velocity; opposite keys cancel
    pub fn target_velocity(&self, max_speed: f32) -> f32 {
        let mut target = 0.0;
        if self.left {
            target -= max_speed;
        }
        if self.right {
            target += max_speed;
        }
        target
    }
}

impl Body {
    /// Advance one tick and resolve landings against `platforms`
    ///
    /// Returns the surface height the body rests on after the step, if any.
    pub fn update(&mut self, input: MoveInput, platforms: &[Platform], tuning: &Tuning) -> Option<f32> {
        let prev_y = self.pos.y;
        let was_grounded = self.grounded;

        let target = input.target_velocity(tuning.max_speed);
        if self.grounded {
            self.vel.x += tuning.acc_ground * (target - self.vel.x);
            if target.abs() < 0.1 {
                self.vel.x *= tuning.ground_friction;
            }
        } else {
            self.vel.x += tuning.acc_air * (target - self.vel.x);
            self.vel.x *= tuning.air_drag;
        }
        self.pos.x = (self.pos.x + self.vel.x).clamp(0.0, tuning.screen_width - self.width());

        self.vel.y += tuning.gravity;
        self.pos.y += self.vel.y;

        // No tie-break: the generator never stacks platforms at equal heights
        let mut support = None;
        for platform in platforms {
            if lands_on(self, prev_y, was_grounded, platform) {
                self.pos.y = platform.y;
                self.vel.y = 0.0;
                support = Some(platform.y);
            }
        }
        self.grounded = support.is_some();
        support
    }

    /// Launch upward if standing on something. Returns whether a jump happened.
    pub fn jump(&mut self, tuning: &Tuning) -> bool {
        if !self.grounded {
            return false;
        }
        self.vel.y = tuning.jump_velocity;
        self.grounded = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;

    fn floor() -> Platform {
        Platform::new(0.0, 0.0, SCREEN_WIDTH)
    }

    #[test]
    fn test_collision_snap() {
        let tuning = Tuning::default();
        let mut body = Body::new(&tuning);
        body.pos = Vec2::new(100.0, 105.0);
        body.vel = Vec2::new(0.0, -5.0);
        body.grounded = false;
        let platforms = [Platform::new(80.0, 100.0, PLATFORM_WIDTH)];

        let support = body.update(MoveInput::default(), &platforms, &tuning);
        assert_eq!(support, Some(100.0));
        assert_eq!(body.pos.y, 100.0);
        assert_eq!(body.vel.y, 0.0);
        assert!(body.grounded);
    }

    #[test]
    fn test_resting_on_floor_stays_grounded() {
        let tuning = Tuning::default();
        let mut body = Body::new(&tuning);
        let platforms = [floor()];
        for _ in 0..10 {
            body.update(MoveInput::default(), &platforms, &tuning);
            assert!(body.grounded);
            assert_eq!(body.pos.y, 0.0);
        }
    }

    #[test]
    fn test_falls_without_support() {
        let tuning = Tuning::default();
        let mut body = Body::new(&tuning);
        body.update(MoveInput::default(), &[], &tuning);
        assert!(!body.grounded);
        assert_eq!(body.vel.y, GRAVITY);
        assert_eq!(body.pos.y, GRAVITY);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let tuning = Tuning::default();
        let mut body = Body::new(&tuning);
        assert!(body.jump(&tuning));
        assert_eq!(body.vel.y, JUMP_VELOCITY);
        assert!(!body.grounded);

        // Airborne: no double jump
        body.vel.y = 3.0;
        assert!(!body.jump(&tuning));
        assert_eq!(body.vel.y, 3.0);
        assert!(!body.grounded);
    }

    #[test]
    fn test_jump_rises_through_platform_above() {
        let tuning = Tuning::default();
        let mut body = Body::new(&tuning);
        let platforms = [floor(), Platform::new(0.0, 10.0, SCREEN_WIDTH)];
        body.jump(&tuning);
        body.update(MoveInput::default(), &platforms, &tuning);
        // vy = 22 - 1, moving up, never snaps to the platform overhead
        assert_eq!(body.pos.y, 21.0);
        assert!(!body.grounded);
    }

    #[test]
    fn test_ground_acceleration_reaches_max_speed() {
        let tuning = Tuning::default();
        let mut body = Body::new(&tuning);
        let input = MoveInput {
            left: false,
            right: true,
        };
        body.update(input, &[floor()], &tuning);
        // ACC_GROUND = 1 snaps straight to target, no friction while pressing
        assert_eq!(body.vel.x, MAX_SPEED);
        assert_eq!(body.pos.x, (SCREEN_WIDTH - PLAYER_WIDTH) / 2.0 + MAX_SPEED);
    }

    #[test]
    fn test_ground_friction_without_input() {
        let tuning = Tuning::default();
        let mut body = Body::new(&tuning);
        body.vel.x = 4.0;
        body.update(MoveInput::default(), &[floor()], &tuning);
        // 4 + 1 * (0 - 4) = 0, then damped
        assert_eq!(body.vel.x, 0.0);
    }

    #[test]
    fn test_air_control_is_softer() {
        let tuning = Tuning::default();
        let mut body = Body::new(&tuning);
        body.grounded = false;
        body.pos.y = 500.0;
        let input = MoveInput {
            left: true,
            right: false,
        };
        body.update(input, &[], &tuning);
        // (0 + 0.5 * (-5 - 0)) * 0.98
        assert!((body.vel.x - (-2.45)).abs() < 1e-5);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let both = MoveInput {
            left: true,
            right: true,
        };
        assert_eq!(both.target_velocity(MAX_SPEED), 0.0);
    }

    #[test]
    fn test_walls_clamp_position() {
        let tuning = Tuning::default();
        let mut body = Body::new(&tuning);
        let right = MoveInput {
            left: false,
            right: true,
        };
        for _ in 0..200 {
            body.update(right, &[floor()], &tuning);
        }
        assert_eq!(body.pos.x, SCREEN_WIDTH - PLAYER_WIDTH);

        let left = MoveInput {
            left: true,
            right: false,
        };
        for _ in 0..200 {
            body.update(left, &[floor()], &tuning);
        }
        assert_eq!(body.pos.x, 0.0);
    }
}
