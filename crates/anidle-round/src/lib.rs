//! Anidle — Round Engine.
//!
//! Owns answer selection, guess history, per-attribute comparison and
//! terminal-state detection for one round of the guessing game.

pub mod application;
pub mod domain;
