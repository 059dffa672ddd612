//! Anidle — Catalog.
//!
//! Holds the static, preloaded set of anime records every round draws its
//! answer and guesses from, and decodes catalog files into that set.

pub mod application;
pub mod domain;
