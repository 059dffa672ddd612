//! Commands for the round context.

use anidle_core::command::Command;
use uuid::Uuid;

/// Command to start a fresh round with a new random answer.
#[derive(Debug, Clone)]
pub struct StartRound {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for StartRound {
    fn command_type(&self) -> &'static str {
        "round.start"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to submit a guess by title.
#[derive(Debug, Clone)]
pub struct SubmitGuess {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Exact catalog title being guessed.
    pub title: String,
}

impl Command for SubmitGuess {
    fn command_type(&self) -> &'static str {
        "round.submit_guess"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to give up the current round and reveal the answer.
#[derive(Debug, Clone)]
pub struct GiveUp {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for GiveUp {
    fn command_type(&self) -> &'static str {
        "round.give_up"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
