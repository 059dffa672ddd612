//! Command handlers for the round context.
//!
//! Each handler runs one command to completion against an explicitly owned
//! `RoundState`, logging the transition it caused.

use anidle_catalog::domain::catalog::Catalog;
use anidle_core::clock::Clock;
use anidle_core::command::Command;
use anidle_core::error::DomainError;
use anidle_core::rng::DeterministicRng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::commands::{GiveUp, StartRound, SubmitGuess};
use crate::domain::round::{RoundRules, RoundState};

/// Result of an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuessResult {
    /// Whether this guess named the answer.
    pub won: bool,
}

/// Handles the `StartRound` command: picks a random answer and returns a
/// fresh round that replaces any previous one.
pub fn handle_start_round(
    command: &StartRound,
    catalog: &Catalog,
    rules: &RoundRules,
    clock: &dyn Clock,
    rng: &mut dyn DeterministicRng,
) -> RoundState {
    let answer = catalog.pick_random_answer(rng);
    let round = RoundState::start(answer, rules.clone(), clock);

    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        round_id = %round.id,
        catalog_size = catalog.len(),
        "round started"
    );

    round
}

/// Handles the `SubmitGuess` command.
///
/// # Errors
///
/// Returns `DomainError::RoundOver`, `DomainError::UnknownTitle` or
/// `DomainError::DuplicateGuess`; `round` is unchanged in each case.
pub fn handle_submit_guess(
    command: &SubmitGuess,
    round: &mut RoundState,
    catalog: &Catalog,
    clock: &dyn Clock,
    rng: &mut dyn DeterministicRng,
) -> Result<GuessResult, DomainError> {
    let won = round
        .submit_guess(&command.title, catalog, clock, rng)
        .inspect_err(|e| {
            warn!(
                correlation_id = %command.correlation_id(),
                round_id = %round.id,
                title = %command.title,
                error = %e,
                "guess rejected"
            );
        })?;

    debug!(
        correlation_id = %command.correlation_id(),
        round_id = %round.id,
        title = %command.title,
        guess_count = round.guess_count(),
        "guess recorded"
    );
    if round.is_over() {
        info!(
            round_id = %round.id,
            outcome = round.outcome().as_str(),
            guess_count = round.guess_count(),
            "round finished"
        );
    }

    Ok(GuessResult { won })
}

/// Handles the `GiveUp` command: the round is lost and the answer is
/// revealed as the newest history entry.
///
/// # Errors
///
/// Returns `DomainError::RoundOver` if the round has already ended.
pub fn handle_give_up(
    command: &GiveUp,
    round: &mut RoundState,
    clock: &dyn Clock,
    rng: &mut dyn DeterministicRng,
) -> Result<(), DomainError> {
    round.give_up(clock, rng).inspect_err(|e| {
        warn!(
            correlation_id = %command.correlation_id(),
            round_id = %round.id,
            error = %e,
            "give up rejected"
        );
    })?;

    info!(
        correlation_id = %command.correlation_id(),
        round_id = %round.id,
        outcome = round.outcome().as_str(),
        guess_count = round.guess_count(),
        "round given up"
    );
    Ok(())
}
