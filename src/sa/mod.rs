//! Simulated Annealing (SA) over knapsack selections.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima. Candidates that exceed the capacity are discarded
//! before the acceptance test; the temperature decays geometrically on
//! every iteration regardless of the outcome.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{anneal, SaResult, SaRunner};
