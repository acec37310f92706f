//! A play session: word selection plus the guess engine.
//!
//! The session is the collaborator that supplies secrets. It owns the
//! word list and RNG, starts rounds, and forwards raw key names to the
//! engine.

use tracing::info;

use crate::core::{GameConfig, GameRng, GameState, Result, WordleError};
use crate::engine::{GameObserver, GuessEngine, KeyInput};
use crate::share::ShareSummary;
use crate::words::WordList;

/// Builder for a [`GameSession`].
#[derive(Clone, Debug, Default)]
pub struct GameSessionBuilder {
    config: GameConfig,
    words: Option<WordList>,
    seed: Option<u64>,
}

impl GameSessionBuilder {
    /// Builder with the default config, built-in word list and an
    /// entropy seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Board dimensions and share metadata.
    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Word list to draw secrets from. Defaults to the built-in list.
    #[must_use]
    pub fn words(mut self, words: WordList) -> Self {
        self.words = Some(words);
        self
    }

    /// Fix the RNG seed for reproducible rounds.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the session and start its first round.
    pub fn build(self) -> Result<GameSession> {
        self.config.validate()?;
        let words = self.words.unwrap_or_default();
        if words.word_length() != self.config.word_length {
            return Err(WordleError::InvalidConfig(format!(
                "word list has {}-letter words but the board is {} wide",
                words.word_length(),
                self.config.word_length
            )));
        }

        let mut rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let engine = GuessEngine::new(self.config, words.pick(&mut rng))?;
        info!(words = words.len(), seed = rng.seed(), "session created");

        Ok(GameSession {
            engine,
            words,
            rng,
            rounds_started: 1,
        })
    }
}

/// Owns everything needed to play consecutive rounds.
#[derive(Clone, Debug)]
pub struct GameSession {
    engine: GuessEngine,
    words: WordList,
    rng: GameRng,
    rounds_started: u32,
}

impl GameSession {
    /// Session with the default config and word list, seeded from entropy.
    pub fn new() -> Result<Self> {
        GameSessionBuilder::new().build()
    }

    /// Start configuring a session.
    #[must_use]
    pub fn builder() -> GameSessionBuilder {
        GameSessionBuilder::new()
    }

    /// Draw a fresh secret and reset the board.
    pub fn new_round<O>(&mut self, observer: &mut O) -> Result<()>
    where
        O: GameObserver + ?Sized,
    {
        let secret = self.words.pick(&mut self.rng);
        self.engine.start_round(secret, observer)?;
        self.rounds_started += 1;
        Ok(())
    }

    /// Feed a raw key name (`"enter"`, `"backspace"`, `"⌫"`, a letter).
    pub fn handle_key<O>(&mut self, key: &str, observer: &mut O) -> bool
    where
        O: GameObserver + ?Sized,
    {
        self.engine.handle_key(KeyInput::parse(key), observer)
    }

    #[must_use]
    pub fn engine(&self) -> &GuessEngine {
        &self.engine
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Rounds begun so far, including the current one.
    #[must_use]
    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    /// Share summary of the current round, once it is over.
    #[must_use]
    pub fn share_summary(&self) -> Option<ShareSummary> {
        ShareSummary::from_state(self.engine.state())
    }
}
