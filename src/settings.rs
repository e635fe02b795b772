//! Native shell settings
//!
//! Loaded from an optional JSON file. Unknown keys are rejected, missing
//! keys fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::SIM_HZ;
use crate::tuning::{Tuning, TuningError};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Could not read settings file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid tuning: {0}")]
    Tuning(#[from] TuningError),

    #[error("Tick rate must be between 1 and 1000 Hz, got {0}")]
    TickRate(u32),
}

/// Shell settings for a run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Run seed for reproducibility (None = derive from the clock)
    pub seed: Option<u64>,
    /// Target simulation rate
    pub tick_rate_hz: u32,
    /// Stop after this many ticks even if the run is still alive (0 = unlimited)
    pub max_ticks: u64,
    /// Sleep between frames to hold the tick rate (false = run flat out)
    pub realtime: bool,
    /// Let the autopilot play
    pub autopilot: bool,
    /// Log a frame summary every N ticks (0 = never)
    pub frame_log_every: u64,
    /// Game balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            tick_rate_hz: SIM_HZ,
            max_ticks: 60 * 60 * SIM_HZ as u64,
            realtime: false,
            autopilot: true,
            frame_log_every: SIM_HZ as u64,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON text and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&text)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` when given, falling back to defaults on any failure
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(1..=1000).contains(&self.tick_rate_hz) {
            return Err(SettingsError::TickRate(self.tick_rate_hz));
        }
        self.tuning.validate()?;
        Ok(())
    }

    /// Seconds between ticks at the configured rate
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate_hz as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert!(settings.autopilot);
        assert_eq!(settings.tick_rate_hz, 60);
    }

    #[test]
    fn test_from_json_nested_tuning() {
        let settings = Settings::from_json(
            r#"{ "seed": 7, "realtime": true, "tuning": { "autoscroll_speed": 2.0 } }"#,
        )
        .unwrap();
        assert_eq!(settings.seed, Some(7));
        assert!(settings.realtime);
        assert_eq!(settings.tuning.autoscroll_speed, 2.0);
        assert_eq!(settings.tuning.max_speed, crate::consts::MAX_SPEED);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Settings::from_json(r#"{ "volume": 1.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }

    #[test]
    fn test_bad_tick_rate() {
        let err = Settings::from_json(r#"{ "tick_rate_hz": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::TickRate(0)));
    }

    #[test]
    fn test_invalid_tuning_surfaces() {
        let err = Settings::from_json(r#"{ "tuning": { "gravity": 1.0 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Tuning(TuningError::GravityNotDownward(_))));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default(Some(Path::new("/nonexistent/tower-jump.json")));
        assert_eq!(settings.tick_rate_hz, SIM_HZ);
    }
}
