//! Catalog application services.

pub mod loader;
