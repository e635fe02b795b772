//! Data-driven game balance
//!
//! Every physics, generation and scroll constant can be overridden from JSON.
//! Missing keys fall back to the values in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::reachable_gap;

/// How the autoscroll speed reacts to score milestones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScrollRamp {
    /// One speed step per `increase_every` points reached
    #[default]
    PerThreshold,
    /// One speed step on every tick the score sits on a positive multiple
    EveryTick,
}

impl ScrollRamp {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollRamp::PerThreshold => "per_threshold",
            ScrollRamp::EveryTick => "every_tick",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TuningError {
    #[error("Tuning value '{0}' must be finite")]
    NotFinite(&'static str),

    #[error("Tuning value '{0}' must be positive")]
    NotPositive(&'static str),

    #[error("Tuning value '{0}' must not be negative")]
    Negative(&'static str),

    #[error("Tuning JSON is malformed: {0}")]
    Json(String),

    #[error("Gravity must pull downward (negative), got {0}")]
    GravityNotDownward(f32),

    #[error("Minimum gap {gap_min} exceeds maximum gap {gap_max}")]
    GapRangeInverted { gap_min: i32, gap_max: i32 },

    #[error("Minimum gap {gap_min} exceeds reachable jump height {cap}")]
    GapUnreachable { gap_min: i32, cap: i32 },

    #[error("Platform width {platform} does not fit the {screen} wide screen")]
    PlatformTooWide { platform: f32, screen: f32 },

    #[error("Player width {player} does not fit the {screen} wide screen")]
    PlayerTooWide { player: f32, screen: f32 },
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,

    // === Body ===
    pub player_width: f32,
    pub player_height: f32,
    pub acc_ground: f32,
    pub acc_air: f32,
    pub max_speed: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub ground_friction: f32,
    pub air_drag: f32,

    // === Platform stream ===
    pub platform_width: f32,
    pub gap_min: i32,
    pub initial_gap_max: i32,
    pub initial_offset_max: i32,
    pub gap_increase: i32,
    pub offset_increase: i32,
    /// Fraction of the full jump height a gap may use
    pub jump_height_margin: f32,
    pub prune_margin: f32,
    pub lookahead_screens: f32,

    // === Autoscroll ===
    pub autoscroll_speed: f32,
    pub scroll_increase: f32,
    pub increase_every: u64,
    pub scroll_ramp: ScrollRamp,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            acc_ground: ACC_GROUND,
            acc_air: ACC_AIR,
            max_speed: MAX_SPEED,
            jump_velocity: JUMP_VELOCITY,
            gravity: GRAVITY,
            ground_friction: GROUND_FRICTION,
            air_drag: AIR_DRAG,

            platform_width: PLATFORM_WIDTH,
            gap_min: INITIAL_GAP_MIN,
            initial_gap_max: INITIAL_GAP_MAX,
            initial_offset_max: INITIAL_OFFSET_MAX,
            gap_increase: GAP_INCREASE,
            offset_increase: OFFSET_INCREASE,
            jump_height_margin: JUMP_HEIGHT_MARGIN,
            prune_margin: PRUNE_MARGIN,
            lookahead_screens: LOOKAHEAD_SCREENS,

            autoscroll_speed: AUTOSCROLL_SPEED,
            scroll_increase: SCROLL_INCREASE,
            increase_every: INCREASE_EVERY,
            scroll_ramp: ScrollRamp::PerThreshold,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| TuningError::Json(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Largest vertical gap the generator may ever produce
    pub fn max_gap_cap(&self) -> i32 {
        reachable_gap(self.jump_velocity, self.gravity, self.jump_height_margin)
    }

    /// Difficulty level reached at `score` (0 until the first milestone)
    pub fn level(&self, score: u64) -> u64 {
        score / self.increase_every.max(1)
    }

    /// Check every value the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let floats = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("acc_ground", self.acc_ground),
            ("acc_air", self.acc_air),
            ("max_speed", self.max_speed),
            ("jump_velocity", self.jump_velocity),
            ("gravity", self.gravity),
            ("ground_friction", self.ground_friction),
            ("air_drag", self.air_drag),
            ("platform_width", self.platform_width),
            ("jump_height_margin", self.jump_height_margin),
            ("prune_margin", self.prune_margin),
            ("lookahead_screens", self.lookahead_screens),
            ("autoscroll_speed", self.autoscroll_speed),
            ("scroll_increase", self.scroll_increase),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return Err(TuningError::NotFinite(name));
            }
        }

        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("jump_velocity", self.jump_velocity),
            ("platform_width", self.platform_width),
            ("jump_height_margin", self.jump_height_margin),
            ("lookahead_screens", self.lookahead_screens),
            ("autoscroll_speed", self.autoscroll_speed),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(TuningError::NotPositive(name));
            }
        }
        // Ramp steps only ever widen the generation ranges or speed up the camera
        if self.scroll_increase < 0.0 {
            return Err(TuningError::Negative("scroll_increase"));
        }
        let non_negative = [
            ("initial_offset_max", self.initial_offset_max),
            ("offset_increase", self.offset_increase),
            ("gap_increase", self.gap_increase),
        ];
        for (name, value) in non_negative {
            if value < 0 {
                return Err(TuningError::Negative(name));
            }
        }
        if self.gap_min <= 0 {
            return Err(TuningError::NotPositive("gap_min"));
        }
        if self.increase_every == 0 {
            return Err(TuningError::NotPositive("increase_every"));
        }
        if self.gravity >= 0.0 {
            return Err(TuningError::GravityNotDownward(self.gravity));
        }
        if self.gap_min > self.initial_gap_max {
            return Err(TuningError::GapRangeInverted {
                gap_min: self.gap_min,
                gap_max: self.initial_gap_max,
            });
        }
        let cap = self.max_gap_cap();
        if self.gap_min > cap {
            return Err(TuningError::GapUnreachable {
                gap_min: self.gap_min,
                cap,
            });
        }
        if self.platform_width > self.screen_width {
            return Err(TuningError::PlatformTooWide {
                platform: self.platform_width,
                screen: self.screen_width,
            });
        }
        if self.player_width > self.screen_width {
            return Err(TuningError::PlayerTooWide {
                player: self.player_width,
                screen: self.screen_width,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert_eq!(tuning.validate(), Ok(()));
        assert_eq!(tuning.max_gap_cap(), MAX_GAP_CAP);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "max_speed": 7.5, "scroll_ramp": "every_tick" }"#)
            .unwrap();
        assert_eq!(tuning.max_speed, 7.5);
        assert_eq!(tuning.scroll_ramp, ScrollRamp::EveryTick);
        assert_eq!(tuning.gravity, GRAVITY);
        assert_eq!(tuning.gap_min, INITIAL_GAP_MIN);
    }

    #[test]
    fn test_rejects_upward_gravity() {
        let tuning = Tuning {
            gravity: 0.5,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::GravityNotDownward(0.5)));
    }

    #[test]
    fn test_rejects_unreachable_gap() {
        // Weak jump: 0.85 * 10^2 / 2 = 42 < 110
        let tuning = Tuning {
            jump_velocity: 10.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::GapUnreachable { cap: 42, .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_gap_range() {
        let tuning = Tuning {
            gap_min: 150,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::GapRangeInverted { .. })
        ));
    }

    #[test]
    fn test_rejects_nan() {
        let tuning = Tuning {
            acc_air: f32::NAN,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::NotFinite("acc_air")));
    }

    #[test]
    fn test_rejects_shrinking_ramp_steps() {
        for (json, field) in [
            (r#"{ "initial_offset_max": -1 }"#, "initial_offset_max"),
            (r#"{ "initial_offset_max": 5, "offset_increase": -10 }"#, "offset_increase"),
            (r#"{ "gap_increase": -10 }"#, "gap_increase"),
            (r#"{ "scroll_increase": -0.5 }"#, "scroll_increase"),
        ] {
            assert_eq!(Tuning::from_json(json), Err(TuningError::Negative(field)));
        }
    }

    #[test]
    fn test_rejects_stalled_autoscroll() {
        let tuning = Tuning {
            autoscroll_speed: 0.0,
            ..Default::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(TuningError::NotPositive("autoscroll_speed"))
        );
        // A flat ramp is fine
        let tuning = Tuning {
            scroll_increase: 0.0,
            offset_increase: 0,
            gap_increase: 0,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Ok(()));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Json(_))
        ));
    }

    #[test]
    fn test_level() {
        let tuning = Tuning::default();
        assert_eq!(tuning.level(0), 0);
        assert_eq!(tuning.level(9), 0);
        assert_eq!(tuning.level(10), 1);
        assert_eq!(tuning.level(25), 2);
    }
}
