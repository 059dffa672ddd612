//! Shared application state.

use std::sync::{Arc, Mutex, MutexGuard};

use anidle_catalog::domain::catalog::Catalog;
use anidle_core::clock::Clock;
use anidle_core::error::DomainError;
use anidle_core::rng::DeterministicRng;
use anidle_round::domain::round::{RoundRules, RoundState};

/// Application state shared across all request handlers.
///
/// Lock order is `round` before `rng`.
#[derive(Clone)]
pub struct AppState {
    /// The catalog every round is played against.
    pub catalog: Arc<Catalog>,
    /// Rules applied to new rounds.
    pub rules: Arc<RoundRules>,
    /// Clock for round and guess timestamps.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// Random source for answer picks and set shuffles.
    pub rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    /// The active round, if one has been started.
    pub round: Arc<Mutex<Option<RoundState>>>,
}

impl AppState {
    /// Create new application state with no active round.
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        rules: RoundRules,
        clock: Arc<dyn Clock + Send + Sync>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    ) -> Self {
        Self {
            catalog,
            rules: Arc::new(rules),
            clock,
            rng,
            round: Arc::new(Mutex::new(None)),
        }
    }

    /// Locks the active round slot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the mutex is poisoned.
    pub fn lock_round(&self) -> Result<MutexGuard<'_, Option<RoundState>>, DomainError> {
        self.round
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("round mutex poisoned: {e}")))
    }

    /// Locks the random source.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the mutex is poisoned.
    pub fn lock_rng(
        &self,
    ) -> Result<MutexGuard<'_, dyn DeterministicRng + Send + 'static>, DomainError> {
        self.rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))
    }
}
