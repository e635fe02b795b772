//! Per-tick session pipeline
//!
//! Order: jump, body physics, autoscroll and scroll ramp, fail check,
//! scoring, platform generation and pruning.

use super::body::MoveInput;
use super::session::Session;
use super::state::{GameEvent, GamePhase};
use crate::tuning::ScrollRamp;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Jump key went down this tick (edge, not held state)
    pub jump: bool,
}

impl TickInput {
    pub fn movement(&self) -> MoveInput {
        MoveInput {
            left: self.left,
            right: self.right,
        }
    }
}

impl Session {
    /// Advance the session by one tick
    ///
    /// `dt` only feeds `elapsed_secs`; physics runs at a fixed unit step. A
    /// non-finite or negative `dt` is rejected and the tick does nothing.
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase == GamePhase::GameOver {
            return events;
        }
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("Rejected tick with timestep {dt}");
            return events;
        }
        self.time_ticks += 1;
        self.elapsed_secs += f64::from(dt);

        if input.jump && self.body.jump(&self.tuning) {
            events.push(GameEvent::Jumped);
        }

        let was_grounded = self.body.grounded;
        let support = self
            .body
            .update(input.movement(), self.stream.platforms(), &self.tuning);
        if let Some(y) = support
            && !was_grounded
        {
            events.push(GameEvent::Landed { y });
        }

        self.update_camera(&mut events);

        if self.autoscroll && self.body.top() < self.camera_y {
            self.phase = GamePhase::GameOver;
            log::info!(
                "Game over: score {}, camera at {:.0}, {} ticks",
                self.score,
                self.camera_y,
                self.time_ticks
            );
            events.push(GameEvent::GameOver { score: self.score });
            return events;
        }

        self.update_score(&mut events);

        self.stream.extend(self.camera_y, self.score, &self.tuning);
        self.stream.prune(self.camera_y, &self.tuning);

        events
    }

    fn update_camera(&mut self, events: &mut Vec<GameEvent>) {
        if !self.autoscroll && self.height_above_camera() > self.tuning.screen_height / 2.0 {
            self.autoscroll = true;
            log::info!("Autoscroll started at tick {}", self.time_ticks);
            events.push(GameEvent::AutoscrollStarted);
        }
        if !self.autoscroll {
            return;
        }

        self.camera_y += self.scroll_speed;

        let steps = match self.tuning.scroll_ramp {
            ScrollRamp::PerThreshold => {
                let level = self.tuning.level(self.score);
                let steps = level.saturating_sub(self.speed_level);
                self.speed_level = self.speed_level.max(level);
                steps
            }
            ScrollRamp::EveryTick => {
                let on_multiple =
                    self.score > 0 && self.score.is_multiple_of(self.tuning.increase_every);
                u64::from(on_multiple)
            }
        };
        if steps > 0 {
            self.scroll_speed += self.tuning.scroll_increase * steps as f32;
            log::debug!("Scroll speed now {:.2}", self.scroll_speed);
            events.push(GameEvent::ScrollSpeedUp {
                speed: self.scroll_speed,
            });
        }
    }

    fn update_score(&mut self, events: &mut Vec<GameEvent>) {
        let body_y = self.body.pos.y;
        for platform in self.stream.platforms_mut() {
            if platform.passed || body_y <= platform.y {
                continue;
            }
            platform.passed = true;
            // The floor never scores
            let scored = platform.y > 0.0;
            if scored {
                self.score += 1;
            }
            events.push(GameEvent::PlatformPassed {
                y: platform.y,
                scored,
            });
        }

        let level = self.tuning.level(self.score);
        if level > self.difficulty_level {
            self.difficulty_level = level;
            log::info!("Difficulty level {} at score {}", level, self.score);
            events.push(GameEvent::DifficultyUp { level });
        }
    }
}
