//! Round domain model.

pub mod attribute;
pub mod commands;
pub mod comparison;
pub mod round;
