//! Anidle API — HTTP surface over the round engine.
//!
//! The server owns exactly one active round; requests are applied to it one
//! at a time.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
