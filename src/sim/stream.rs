//! Procedural platform stream
//!
//! Keeps a lookahead buffer of platforms above the camera and drops the ones
//! that have fallen far enough behind it. Platforms are only ever appended
//! upward and pruned from the low end, so the live set stays sorted by `y`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Platform;
use crate::tuning::Tuning;

/// Generation limits at a given score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty {
    pub gap_min: i32,
    pub gap_max: i32,
    pub offset_max: i32,
}

/// Compute the generation limits for `score`
pub fn difficulty(score: u64, tuning: &Tuning) -> Difficulty {
    let level = i32::try_from(tuning.level(score)).unwrap_or(i32::MAX);
    let gap_max = tuning
        .initial_gap_max
        .saturating_add(level.saturating_mul(tuning.gap_increase))
        .min(tuning.max_gap_cap())
        .max(tuning.gap_min);
    let offset_max = tuning
        .initial_offset_max
        .saturating_add(level.saturating_mul(tuning.offset_increase));
    Difficulty {
        gap_min: tuning.gap_min,
        gap_max,
        offset_max,
    }
}

/// The live platform collection plus the spawn cursor
#[derive(Debug, Clone)]
pub struct PlatformStream {
    platforms: Vec<Platform>,
    last_x: f32,
    last_y: f32,
    rng: Pcg32,
}

impl PlatformStream {
    /// Start a stream holding only the full-width floor at `(0, 0)`
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        Self {
            platforms: vec![Platform::new(0.0, 0.0, tuning.screen_width)],
            last_x: 0.0,
            last_y: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn platforms_mut(&mut self) -> &mut [Platform] {
        &mut self.platforms
    }

    /// Position of the most recently spawned platform
    pub fn last_spawn(&self) -> (f32, f32) {
        (self.last_x, self.last_y)
    }

    /// Append platforms until the lookahead buffer above `camera_y` is full
    ///
    /// Returns how many platforms were spawned.
    pub fn extend(&mut self, camera_y: f32, score: u64, tuning: &Tuning) -> usize {
        let limits = difficulty(score, tuning);
        let horizon = camera_y + tuning.lookahead_screens * tuning.screen_height;
        let max_x = tuning.screen_width - tuning.platform_width;

        let mut spawned = 0;
        while self.last_y < horizon {
            let gap = self.rng.random_range(limits.gap_min..=limits.gap_max);
            let dx = self.rng.random_range(-limits.offset_max..=limits.offset_max);
            let y = self.last_y + gap as f32;
            let x = (self.last_x + dx as f32).clamp(0.0, max_x);
            self.platforms.push(Platform::new(x, y, tuning.platform_width));
            self.last_x = x;
            self.last_y = y;
            spawned += 1;
        }
        if spawned > 0 {
            log::debug!(
                "Spawned {} platforms up to y={} (gap {}..={}, offset ±{})",
                spawned,
                self.last_y,
                limits.gap_min,
                limits.gap_max,
                limits.offset_max
            );
        }
        spawned
    }

    /// Drop every platform at or below `camera_y - prune_margin`
    ///
    /// Returns how many platforms were removed.
    pub fn prune(&mut self, camera_y: f32, tuning: &Tuning) -> usize {
        let cutoff = camera_y - tuning.prune_margin;
        // Sorted by y: everything to drop is a prefix
        let keep_from = self.platforms.partition_point(|p| p.y <= cutoff);
        if keep_from > 0 {
            self.platforms.drain(..keep_from);
            log::debug!("Pruned {} platforms at or below y={}", keep_from, cutoff);
        }
        keep_from
    }

    /// Append a hand-placed platform and move the spawn cursor onto it
    #[cfg(test)]
    pub(crate) fn push_for_test(&mut self, platform: Platform) {
        self.last_x = platform.x;
        self.last_y = platform.y;
        self.platforms.push(platform);
    }
}
