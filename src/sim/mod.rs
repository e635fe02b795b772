//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Unit-step integration only (the frame timestep never scales physics)
//! - Seeded RNG only
//! - Platforms kept in spawn order (ascending height)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod session;
pub mod state;
pub mod stream;
pub mod tick;

pub use body::MoveInput;
pub use collision::{lands_on, spans_overlap};
pub use session::Session;
pub use state::{Body, GameEvent, GamePhase, Platform};
pub use stream::{Difficulty, PlatformStream, difficulty};
pub use tick::TickInput;
