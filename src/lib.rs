//! Arithmetic mean of a sequence of numbers.

pub mod input;
pub mod stats;

pub use stats::{StatsError, Summary, average};
