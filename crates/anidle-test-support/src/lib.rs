//! Shared test doubles and fixtures for the Anidle guessing game.

mod clock;
mod fixtures;
mod rng;

pub use clock::{FixedClock, fixed_clock};
pub use fixtures::{numbered_catalog, sample_catalog, two_title_catalog};
pub use rng::{MockRng, SequenceRng};
