//! Demo-mode player
//!
//! Reads the session and produces held-key state the way a person would:
//! pick the next platform above, walk or drift toward its center, and tap
//! jump whenever standing and close enough.

use super::input::{InputSource, KeySnapshot};
use crate::sim::{Platform, Session};

/// Horizontal distance (body center to target center) that counts as aligned
const ALIGN_DEADZONE: f32 = 6.0;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Height of the platform currently being aimed for
    target_y: Option<f32>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target_y(&self) -> Option<f32> {
        self.target_y
    }

    /// Decide the keys to hold this tick
    pub fn decide(&mut self, session: &Session) -> KeySnapshot {
        let body = &session.body;
        let platforms = session.platforms();

        if body.grounded || self.target_y.is_none() {
            let reach = session.tuning.max_gap_cap() as f32;
            self.target_y = next_above(platforms, body.pos.y, reach).map(|p| p.y);
        }
        // Fell below the target: give up on it and take whatever comes
        if let Some(y) = self.target_y
            && !body.grounded
            && body.vel.y < 0.0
            && body.pos.y < y
        {
            self.target_y = None;
        }

        let Some(target) = self
            .target_y
            .and_then(|y| platforms.iter().find(|p| p.y == y))
        else {
            return KeySnapshot::default();
        };

        let dx = target.center_x() - body.center_x();
        // Jumping with the full air reach still to cover is fine; anything
        // further needs a run-up first
        let air_reach = target.width / 2.0 + session.tuning.max_speed * 24.0;
        KeySnapshot {
            left: dx < -ALIGN_DEADZONE,
            right: dx > ALIGN_DEADZONE,
            jump: body.grounded && dx.abs() <= air_reach,
            quit: false,
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, session: &Session) -> KeySnapshot {
        self.decide(session)
    }
}

/// Lowest platform strictly above `y` and no more than `reach` higher
fn next_above(platforms: &[Platform], y: f32, reach: f32) -> Option<&Platform> {
    platforms
        .iter()
        .filter(|p| p.y > y && p.y - y <= reach)
        .min_by(|a, b| a.y.total_cmp(&b.y))
}
