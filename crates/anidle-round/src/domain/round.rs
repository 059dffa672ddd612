//! Round state machine.

use anidle_catalog::domain::catalog::Catalog;
use anidle_catalog::domain::record::AnimeRecord;
use anidle_core::clock::Clock;
use anidle_core::error::DomainError;
use anidle_core::rng::DeterministicRng;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::attribute::Attribute;
use super::comparison::{Comparison, compare_records};

/// Guesses allowed per round.
pub const MAX_GUESSES: usize = 20;

/// Most members shown for one set attribute of one guess.
pub const SET_DISPLAY_CAP: usize = 20;

/// Round configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRules {
    /// Guesses allowed before the round is lost. Values below 1 are raised to 1.
    pub max_guesses: usize,
    /// Cap on set comparison length.
    pub set_display_cap: usize,
    /// Attributes compared for every guess.
    pub attributes: Vec<Attribute>,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            max_guesses: MAX_GUESSES,
            set_display_cap: SET_DISPLAY_CAP,
            attributes: Attribute::ALL.to_vec(),
        }
    }
}

/// Round outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Guesses are still accepted.
    Ongoing,
    /// The answer was guessed.
    Won,
    /// The guess budget ran out, or the player gave up.
    Lost,
}

impl Outcome {
    /// Returns the outcome name as a `snake_case` string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }
}

/// One recorded guess. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessEntry {
    record: AnimeRecord,
    comparison: Comparison,
    guessed_at: DateTime<Utc>,
}

impl GuessEntry {
    /// The guessed record.
    #[must_use]
    pub fn record(&self) -> &AnimeRecord {
        &self.record
    }

    /// Comparison of the guessed record against the answer.
    #[must_use]
    pub fn comparison(&self) -> &Comparison {
        &self.comparison
    }

    /// When the guess was recorded.
    #[must_use]
    pub fn guessed_at(&self) -> DateTime<Utc> {
        self.guessed_at
    }
}

/// State of one round.
///
/// `history` is newest first. Once `outcome` leaves `Ongoing` the only
/// further change is the reveal entry pushed by [`RoundState::give_up`].
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    /// Round identifier.
    pub id: Uuid,
    pub(crate) answer: AnimeRecord,
    pub(crate) history: Vec<GuessEntry>,
    pub(crate) outcome: Outcome,
    pub(crate) revealed: bool,
    pub(crate) rules: RoundRules,
    pub(crate) started_at: DateTime<Utc>,
}

impl RoundState {
    /// Starts a round against `answer` with an empty history.
    #[must_use]
    pub fn start(answer: &AnimeRecord, mut rules: RoundRules, clock: &dyn Clock) -> Self {
        rules.max_guesses = rules.max_guesses.max(1);
        Self {
            id: Uuid::new_v4(),
            answer: answer.clone(),
            history: Vec::new(),
            outcome: Outcome::Ongoing,
            revealed: false,
            rules,
            started_at: clock.now(),
        }
    }

    /// Submits a guess by title. Returns `true` if it was the winning guess.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RoundOver` if the round has ended,
    /// `DomainError::UnknownTitle` if `title` is not in `catalog`, and
    /// `DomainError::DuplicateGuess` if `title` was already guessed. The
    /// state is unchanged in every error case.
    pub fn submit_guess(
        &mut self,
        title: &str,
        catalog: &Catalog,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Result<bool, DomainError> {
        if self.outcome != Outcome::Ongoing {
            return Err(DomainError::RoundOver);
        }
        let record = catalog
            .find_by_title(title)
            .ok_or_else(|| DomainError::UnknownTitle(title.to_owned()))?;
        if self.has_guessed(title) {
            return Err(DomainError::DuplicateGuess(title.to_owned()));
        }

        Ok(self.record_guess(record, clock, rng))
    }

    /// Gives up: forces the outcome to `Lost`, then records the answer as a
    /// final reveal guess.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RoundOver` if the round has already ended.
    pub fn give_up(
        &mut self,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Result<(), DomainError> {
        if self.outcome != Outcome::Ongoing {
            return Err(DomainError::RoundOver);
        }

        self.outcome = Outcome::Lost;
        let answer = self.answer.clone();
        self.record_guess(&answer, clock, rng);
        self.revealed = true;
        Ok(())
    }

    /// Prepends a guess and applies the outcome transitions. Transitions only
    /// fire while the round is ongoing, so the give-up reveal stays `Lost`.
    fn record_guess(
        &mut self,
        record: &AnimeRecord,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> bool {
        let comparison = compare_records(
            &self.answer,
            record,
            &self.rules.attributes,
            self.rules.set_display_cap,
            rng,
        );
        self.history.insert(
            0,
            GuessEntry {
                record: record.clone(),
                comparison,
                guessed_at: clock.now(),
            },
        );

        if self.outcome != Outcome::Ongoing {
            return false;
        }
        let won = record.title == self.answer.title;
        if won {
            self.outcome = Outcome::Won;
        } else if self.history.len() >= self.rules.max_guesses {
            self.outcome = Outcome::Lost;
        }
        won
    }

    /// Returns `true` if `title` is already in the history.
    #[must_use]
    pub fn has_guessed(&self, title: &str) -> bool {
        self.history.iter().any(|g| g.record.title == title)
    }

    /// The answer record.
    #[must_use]
    pub fn answer(&self) -> &AnimeRecord {
        &self.answer
    }

    /// Recorded guesses, newest first.
    #[must_use]
    pub fn history(&self) -> &[GuessEntry] {
        &self.history
    }

    /// Current outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns `true` once the round is won or lost.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::Ongoing
    }

    /// Whether the newest entry is the give-up reveal.
    #[must_use]
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Guesses made by the player; the give-up reveal is not counted.
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.history.len() - usize::from(self.revealed)
    }

    /// Guesses allowed in this round.
    #[must_use]
    pub fn max_guesses(&self) -> usize {
        self.rules.max_guesses
    }

    /// When the round started.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
