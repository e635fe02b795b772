//! Fixed-timestep clock
//!
//! Frame time is accumulated and paid out in whole simulation steps.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};

#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    accumulator: f32,
}

impl FixedStep {
    /// Clock paying out steps of `step` seconds
    pub fn new(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Account for `frame_dt` seconds of wall time and return how many ticks to run
    ///
    /// Non-finite or negative frame times count as zero; long stalls are capped
    /// at [`MAX_FRAME_DT`] and at most [`MAX_SUBSTEPS`] ticks are paid out.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            substeps += 1;
        }
        // Drop whatever the substep cap left behind
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.step);
        }
        substeps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pays_out_whole_steps() {
        let mut clock = FixedStep::new(0.01);
        assert_eq!(clock.advance(0.025), 2);
        // 0.005 carried over
        assert_eq!(clock.advance(0.006), 1);
    }

    #[test]
    fn test_rejects_bad_frame_times() {
        let mut clock = FixedStep::new(0.01);
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.advance(f32::INFINITY), 0);
        assert_eq!(clock.advance(-1.0), 0);
    }

    #[test]
    fn test_caps_long_stalls() {
        let mut clock = FixedStep::new(1.0 / 120.0);
        assert_eq!(clock.advance(5.0), MAX_SUBSTEPS);
        // Backlog does not snowball into the next frame
        assert!(clock.advance(0.0) <= 1);
    }
}
