//! Guess engine and its presentation contract.
//!
//! - `KeyInput`: raw key names parsed into letter / enter / backspace
//! - `GuessEngine`: validates input, scores rows, decides transitions
//! - `GameObserver` / `GameEvent`: what the engine tells the renderer
//!
//! The engine owns the `GameState`. Renderers read it through
//! `GuessEngine::state()` and react to observer callbacks; they never
//! write to it.

pub mod event;
pub mod guess;
pub mod input;

pub use event::{GameEvent, GameObserver};
pub use guess::GuessEngine;
pub use input::{KeyInput, BACKSPACE_GLYPH};
