//! One play session
//!
//! Owns everything that changes during a run: the body, the platform stream,
//! the camera and the scoring/scroll state. A session ends in
//! [`GamePhase::GameOver`] and is never revived; start a new one instead.

use super::state::{Body, GamePhase, Platform};
use super::stream::PlatformStream;
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Session {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance values for this run
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub body: Body,
    pub stream: PlatformStream,
    /// Bottom edge of the visible window in world space
    pub camera_y: f32,
    /// Set once, never cleared
    pub autoscroll: bool,
    /// Camera climb per tick while autoscrolling
    pub scroll_speed: f32,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Sum of accepted timesteps (seconds survived)
    pub elapsed_secs: f64,
    /// Difficulty level already paid out as scroll speed
    pub(crate) speed_level: u64,
    /// Difficulty level already announced
    pub(crate) difficulty_level: u64,
}

impl Session {
    /// Create a fresh session with the floor and a full lookahead buffer
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut stream = PlatformStream::new(seed, &tuning);
        stream.extend(0.0, 0, &tuning);
        log::info!(
            "New session (seed {}, scroll ramp {})",
            seed,
            tuning.scroll_ramp.as_str()
        );
        Self {
            seed,
            phase: GamePhase::Playing,
            body: Body::new(&tuning),
            stream,
            camera_y: 0.0,
            autoscroll: false,
            scroll_speed: tuning.autoscroll_speed,
            score: 0,
            time_ticks: 0,
            elapsed_secs: 0.0,
            speed_level: 0,
            difficulty_level: 0,
            tuning,
        }
    }

    /// Session with default balance
    pub fn with_seed(seed: u64) -> Self {
        Self::new(seed, Tuning::default())
    }

    /// Throw this run away and start over with the same balance
    pub fn restart(&mut self, seed: u64) {
        *self = Self::new(seed, self.tuning.clone());
    }

    pub fn platforms(&self) -> &[Platform] {
        self.stream.platforms()
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Body bottom edge relative to the camera
    pub fn height_above_camera(&self) -> f32 {
        self.body.pos.y - self.camera_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_fresh_session() {
        let session = Session::with_seed(12345);
        assert_eq!(session.phase, GamePhase::Playing);
        assert_eq!(session.body.pos.x, (480.0 - 50.0) / 2.0);
        assert_eq!(session.body.pos.x, 215.0);
        assert_eq!(session.body.pos.y, 0.0);
        assert!(session.body.grounded);
        assert_eq!(session.score, 0);
        assert!(!session.autoscroll);
        assert_eq!(session.camera_y, 0.0);
        assert_eq!(session.scroll_speed, AUTOSCROLL_SPEED);

        let floor = &session.platforms()[0];
        assert_eq!((floor.x, floor.y), (0.0, 0.0));
        // Lookahead already generated
        assert!(session.stream.last_spawn().1 >= 2.0 * SCREEN_HEIGHT);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut session = Session::with_seed(1);
        session.score = 33;
        session.autoscroll = true;
        session.camera_y = 900.0;
        session.phase = GamePhase::GameOver;

        session.restart(2);
        assert_eq!(session.seed, 2);
        assert_eq!(session.score, 0);
        assert!(!session.autoscroll);
        assert_eq!(session.camera_y, 0.0);
        assert_eq!(session.phase, GamePhase::Playing);
        assert_eq!(session.platforms()[0].y, 0.0);
    }
}
