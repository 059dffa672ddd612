//! Catalog domain model.

pub mod catalog;
pub mod record;
