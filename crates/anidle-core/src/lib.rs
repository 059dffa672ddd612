//! Anidle Core — shared domain abstractions.
//!
//! This crate defines the error type, the determinism seams (clock and
//! random source) and the command trait that the catalog and round crates
//! build on. It contains no game logic.

pub mod clock;
pub mod command;
pub mod error;
pub mod rng;
