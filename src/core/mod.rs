//! Core engine types: configuration, errors, RNG, actions, state.
//!
//! This module contains the building blocks every other module depends on.
//! Hosts configure the game via `GameConfig` rather than modifying the core.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{GameConfig, SoundCues};
pub use error::{EngineError, Result};
pub use rng::GameRng;
pub use state::{GameState, Selection, MAX_SELECTION};
