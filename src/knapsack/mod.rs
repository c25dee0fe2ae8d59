//! 0/1 knapsack problem instance.
//!
//! Defines the immutable [`Item`] record and the [`Knapsack`] instance
//! that owns every pure operation the annealer consumes: objective
//! evaluation, random initialization, and single-bit-flip neighbor
//! generation.

mod types;

pub use types::{Item, Knapsack};
