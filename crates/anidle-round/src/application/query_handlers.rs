//! Query handlers for the round context.
//!
//! Read-only projections of a `RoundState` for the embedding UI.

use anidle_catalog::domain::catalog::Catalog;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::comparison::Comparison;
use crate::domain::round::{GuessEntry, RoundState};

/// Read-only view of one history row.
#[derive(Debug, Clone, Serialize)]
pub struct GuessView {
    /// Guessed title.
    pub title: String,
    /// Whether the row names the answer. The give-up reveal is marked the
    /// same way as a winning guess.
    pub correct: bool,
    /// Per-attribute comparison.
    pub comparison: Comparison,
    /// When the guess was recorded.
    pub guessed_at: DateTime<Utc>,
}

/// Read-only view of a round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundView {
    /// Round identifier.
    pub round_id: Uuid,
    /// Outcome as a string.
    pub outcome: String,
    /// Guesses made by the player, not counting the give-up reveal.
    pub guess_count: usize,
    /// Guesses allowed.
    pub max_guesses: usize,
    /// The answer title, present only once the round has ended.
    pub answer: Option<String>,
    /// History rows, newest first.
    pub history: Vec<GuessView>,
    /// When the round started.
    pub started_at: DateTime<Utc>,
}

fn guess_view(entry: &GuessEntry, answer_title: &str) -> GuessView {
    GuessView {
        title: entry.record().title.clone(),
        correct: entry.record().title == answer_title,
        comparison: entry.comparison().clone(),
        guessed_at: entry.guessed_at(),
    }
}

/// Projects a round into its read-only view.
#[must_use]
pub fn get_round_view(round: &RoundState) -> RoundView {
    let answer_title = round.answer().title.as_str();
    RoundView {
        round_id: round.id,
        outcome: round.outcome().as_str().to_owned(),
        guess_count: round.guess_count(),
        max_guesses: round.max_guesses(),
        answer: round.is_over().then(|| answer_title.to_owned()),
        history: round
            .history()
            .iter()
            .map(|entry| guess_view(entry, answer_title))
            .collect(),
        started_at: round.started_at(),
    }
}

/// Catalog titles that have not been guessed in `round`, in catalog order.
/// With no round, every title is available.
#[must_use]
pub fn get_available_titles(catalog: &Catalog, round: Option<&RoundState>) -> Vec<String> {
    catalog
        .titles()
        .filter(|title| round.is_none_or(|r| !r.has_guessed(title)))
        .map(str::to_owned)
        .collect()
}
