//! Share summary for a finished round.
//!
//! Pure projection of `GameState`: it reads the scored rows and never
//! touches game logic. Only available once the round is won or lost.
//!
//! ```text
//! Panda's Wordle+ 3/6
//!
//! ⬛🟨⬛⬛⬛⬛
//! 🟩🟩⬛🟨⬛⬛
//! 🟩🟩🟩🟩🟩🟩
//! https://panda2126.github.io/wordle-plus/
//! ```

use serde::Serialize;

use crate::core::{GameState, GameStatus, ScoredRow};

/// Everything needed to render the share text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShareSummary {
    pub title: String,
    pub status: GameStatus,
    pub tries: usize,
    pub rows: usize,
    pub grid: String,
    pub link: String,
}

impl ShareSummary {
    /// Build the summary, or `None` while the round is still in progress.
    #[must_use]
    pub fn from_state(state: &GameState) -> Option<Self> {
        let summary = state.round_summary()?;
        let config = state.config();

        Some(Self {
            title: config.share.title.clone(),
            status: summary.status,
            tries: summary.tries,
            rows: config.rows,
            grid: emoji_grid(state.scored_rows().iter().take(config.rows)),
            link: config.share.link.clone(),
        })
    }

    /// Score shown after the title: tries on a win, `X` on a loss.
    #[must_use]
    pub fn score(&self) -> String {
        match self.status {
            GameStatus::Won => self.tries.to_string(),
            _ => "X".to_string(),
        }
    }

    /// The full share text.
    #[must_use]
    pub fn text(&self) -> String {
        format!(
            "{} {}/{}\n\n{}\n{}",
            self.title,
            self.score(),
            self.rows,
            self.grid,
            self.link
        )
    }
}

impl std::fmt::Display for ShareSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

/// One line of emoji per row, joined by newlines.
pub fn emoji_grid<'a>(rows: impl IntoIterator<Item = &'a ScoredRow>) -> String {
    rows.into_iter()
        .map(|row| row.results.iter().map(|r| r.emoji()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Secret};
    use crate::engine::GuessEngine;

    fn play(secret: &str, rows: usize, guesses: &[&str]) -> GuessEngine {
        let config = GameConfig::new().with_word_length(secret.len()).with_rows(rows);
        let mut engine =
            GuessEngine::new(config, Secret::new(secret, secret.len()).unwrap()).unwrap();
        for guess in guesses {
            for c in guess.chars() {
                engine.add_letter(c, &mut ());
            }
            engine.submit_guess(&mut ());
        }
        engine
    }

    #[test]
    fn test_none_while_in_progress() {
        let engine = play("apple", 6, &["grape"]);
        assert!(ShareSummary::from_state(engine.state()).is_none());
    }

    #[test]
    fn test_won_summary() {
        let engine = play("apple", 6, &["lleap", "apple"]);
        let summary = ShareSummary::from_state(engine.state()).unwrap();

        assert_eq!(summary.score(), "2");
        assert_eq!(summary.grid, "🟨⬛🟨🟨🟨\n🟩🟩🟩🟩🟩");
        assert_eq!(
            summary.text(),
            "Panda's Wordle+ 2/6\n\n🟨⬛🟨🟨🟨\n🟩🟩🟩🟩🟩\nhttps://panda2126.github.io/wordle-plus/"
        );
        assert_eq!(summary.to_string(), summary.text());
    }

    #[test]
    fn test_lost_summary() {
        let engine = play("apple", 2, &["dizzy", "dizzy"]);
        let summary = ShareSummary::from_state(engine.state()).unwrap();

        assert_eq!(summary.status, GameStatus::Lost);
        assert_eq!(summary.score(), "X");
        assert_eq!(summary.grid.lines().count(), 2);
        assert!(summary.text().starts_with("Panda's Wordle+ X/2\n\n"));
    }

    #[test]
    fn test_emoji_grid_empty() {
        assert_eq!(emoji_grid(std::iter::empty::<&ScoredRow>()), "");
    }
}
