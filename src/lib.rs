//! Simulated-annealing solver for the 0/1 knapsack problem.
//!
//! Given a set of items, each carrying a value and a weight, and a total
//! weight capacity, the solver searches for a selection maximizing total
//! value without exceeding the capacity. The search is stochastic local
//! search rather than exact dynamic programming:
//!
//! - **Single-bit-flip neighborhoods**: a candidate differs from the
//!   current selection in exactly one item.
//! - **Metropolis acceptance**: improving candidates are always taken,
//!   worsening ones with a probability that shrinks as the temperature
//!   drops.
//! - **Geometric cooling**: the temperature decays by a fixed factor on
//!   every iteration, shifting the search from exploration to
//!   exploitation.
//!
//! # Architecture
//!
//! The crate has two modules: [`knapsack`] defines the problem instance
//! and the pure operations on candidate selections, [`sa`] drives the
//! annealing loop. All randomness flows through a single seedable
//! generator per run, so results are reproducible given a fixed seed.
//!
//! The solver is heuristic: it is fast and usually good, but it may
//! return a suboptimal selection and carries no optimality guarantee.

pub mod knapsack;
pub mod sa;
