//! Core types: configuration, secret, game state, RNG, errors.
//!
//! Everything here is rendering-agnostic. The engine mutates `GameState`;
//! presentation code only ever reads it.

pub mod config;
pub mod error;
pub mod rng;
pub mod secret;
pub mod state;

pub use config::{GameConfig, ShareConfig, DEFAULT_ROWS, DEFAULT_WORD_LENGTH, MAX_DIMENSION};
pub use error::{Result, WordleError};
pub use rng::GameRng;
pub use secret::Secret;
pub use state::{GameState, GameStatus, RoundSummary, Row, ScoredRow};
