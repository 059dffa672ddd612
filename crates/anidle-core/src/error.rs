//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// Every variant raised by a round operation is a no-op signal: the round
/// state is left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A guess named a title that is not in the catalog.
    #[error("unknown title: {0}")]
    UnknownTitle(String),

    /// A guess named a title that is already in the round history.
    #[error("title already guessed: {0}")]
    DuplicateGuess(String),

    /// A guess or give-up arrived after the round ended.
    #[error("round is over")]
    RoundOver,

    /// A round operation arrived before any round was started.
    #[error("no active round")]
    NoActiveRound,

    /// A catalog was constructed without any records.
    #[error("catalog is empty")]
    EmptyCatalog,

    /// A catalog contained the same title twice.
    #[error("duplicate catalog title: {0}")]
    DuplicateTitle(String),

    /// An infrastructure error (reading or decoding catalog data).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
