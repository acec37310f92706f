//! # wordle-plus
//!
//! Engine for a Wordle-style word-guessing puzzle.
//!
//! ## Design Principles
//!
//! 1. **State is the source of truth**: `GameState` holds the board,
//!    cursor and status. Renderers read it; only the engine writes it.
//!
//! 2. **Exact scoring**: the two-pass algorithm claims exact matches
//!    before displaced ones, so repeated letters are never over-counted.
//!
//! 3. **Total over input**: every key is either applied or ignored.
//!    Player input never produces an error.
//!
//! ## Modules
//!
//! - `core`: config, secret, game state, RNG, errors
//! - `scoring`: cell results, the scoring algorithm, keyboard hints
//! - `engine`: key parsing, the guess engine, observer events
//! - `words`: word list and secret selection
//! - `share`: emoji grid and share text for finished rounds
//! - `session`: word selection and engine wired together
//! - `logging`: tracing subscriber setup for hosts
//!
//! ## Example
//!
//! ```
//! use wordle_plus::{GameConfig, GameEvent, GameSession, GameStatus, WordList};
//!
//! let mut session = GameSession::builder()
//!     .config(GameConfig::new().with_word_length(5))
//!     .words(WordList::new(["eerie"], 5)?)
//!     .seed(7)
//!     .build()?;
//!
//! let mut events: Vec<GameEvent> = Vec::new();
//! for key in ["r", "e", "b", "e", "l", "enter"] {
//!     session.handle_key(key, &mut events);
//! }
//!
//! assert_eq!(session.state().status(), GameStatus::InProgress);
//! assert_eq!(session.state().current_row(), 1);
//! # Ok::<(), wordle_plus::WordleError>(())
//! ```

pub mod core;
pub mod engine;
pub mod logging;
pub mod scoring;
pub mod session;
pub mod share;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, GameState, GameStatus, Result, RoundSummary, ScoredRow, Secret,
    ShareConfig, WordleError,
};

pub use crate::engine::{GameEvent, GameObserver, GuessEngine, KeyInput};

pub use crate::scoring::{score_guess, CellResult, KeyboardHints, RowResult};

pub use crate::session::{GameSession, GameSessionBuilder};
pub use crate::share::ShareSummary;
pub use crate::words::WordList;
