//! Platform abstraction layer
//!
//! Adapters between the outside world and the simulation:
//! - Key state snapshots and jump edge detection
//! - Fixed-timestep clock
//! - Demo-mode autopilot (an input source that reads the session)

pub mod autopilot;
pub mod input;
pub mod time;

pub use autopilot::Autopilot;
pub use input::{InputSource, InputTracker, KeySnapshot, ScriptedInput};
pub use time::FixedStep;
