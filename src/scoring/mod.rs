//! Guess scoring.
//!
//! ## Key Types
//!
//! - `CellResult`: correct / present / absent for one cell
//! - `score_guess`: the two-pass, duplicate-aware scoring algorithm
//! - `KeyboardHints`: monotone best-result-per-letter table

pub mod feedback;
pub mod keyboard;

pub use feedback::{score_guess, CellResult, RowResult};
pub use keyboard::KeyboardHints;
