//! SA execution loop.

use super::config::SaConfig;
use crate::knapsack::{Item, Knapsack};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The best value is sampled into the history every this many iterations.
const HISTORY_INTERVAL: usize = 100;

/// Result of an annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// The best feasible solution found, index-aligned with the items.
    pub solution: Vec<bool>,

    /// Total value of `solution`.
    pub total_value: f64,

    /// Total weight of `solution`. Never exceeds the instance capacity.
    pub total_weight: f64,

    /// Total number of iterations executed.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Number of candidates discarded for exceeding the capacity.
    pub infeasible_neighbors: usize,

    /// Best value sampled at regular intervals for history tracking.
    pub value_history: Vec<f64>,
}

/// Executes the annealing loop.
pub struct SaRunner;

impl SaRunner {
    /// Runs the annealer with a generator seeded from the config.
    ///
    /// # Panics
    ///
    /// Panics if the config or the instance fails validation. Use
    /// [`anneal`] for a non-panicking boundary.
    pub fn run(instance: &Knapsack, config: &SaConfig) -> SaResult {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Runs the annealer against a caller-supplied generator.
    ///
    /// The generator is the single entropy source for the whole run:
    /// initial solution, neighbor choice, and acceptance draws all consume
    /// the same sequential stream, so a given generator state fully
    /// determines the result.
    ///
    /// An over-capacity initial draw is never adopted as the incumbent;
    /// the all-false selection, which is feasible for any capacity, takes
    /// its place until a feasible candidate is accepted. The returned
    /// solution therefore always fits.
    ///
    /// # Panics
    ///
    /// Panics if the config or the instance fails validation.
    pub fn run_with_rng<R: Rng>(instance: &Knapsack, config: &SaConfig, rng: &mut R) -> SaResult {
        config.validate().expect("invalid SaConfig");
        instance.validate().expect("invalid Knapsack instance");

        // Initialize
        let mut current = instance.random_solution(rng);
        let mut current_value = instance.total_value(&current);

        // The all-false selection weighs nothing, so it is feasible for any
        // capacity; the random start seeds the incumbent only when it fits.
        let (mut best, mut best_value) = if instance.total_weight(&current) <= instance.max_weight
        {
            (current.clone(), current_value)
        } else {
            (vec![false; instance.items.len()], 0.0)
        };

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut infeasible_neighbors = 0usize;

        let mut value_history = Vec::new();
        value_history.push(best_value);

        while iterations < config.max_iterations && temperature > config.stopping_temperature {
            let candidate = instance.neighbor(&current, rng);
            let candidate_weight = instance.total_weight(&candidate);

            if candidate_weight <= instance.max_weight {
                let candidate_value = instance.total_value(&candidate);
                let delta = candidate_value - current_value;

                // Metropolis acceptance criterion. delta <= 0 here puts
                // exp(delta / T) in (0, 1].
                let accept = if delta > 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    let probability = (delta / temperature).exp();
                    rng.random_range(0.0..1.0) < probability
                };

                if accept {
                    current = candidate;
                    current_value = candidate_value;
                    accepted_moves += 1;

                    // Accepted candidates passed the capacity check, so the
                    // incumbent only ever copies a feasible solution.
                    if current_value > best_value {
                        best = current.clone();
                        best_value = current_value;
                    }
                }
            } else {
                // Over-capacity candidate: discarded without an acceptance
                // draw. The iteration still counts and still cools.
                infeasible_neighbors += 1;
            }

            // Cool down
            temperature *= config.cooling_rate;
            iterations += 1;

            if iterations.is_multiple_of(HISTORY_INTERVAL) {
                value_history.push(best_value);
            }
        }

        // Final history entry
        if value_history
            .last()
            .is_none_or(|&last| (last - best_value).abs() > 1e-15)
        {
            value_history.push(best_value);
        }

        let total_weight = instance.total_weight(&best);
        SaResult {
            solution: best,
            total_value: best_value,
            total_weight,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            infeasible_neighbors,
            value_history,
        }
    }
}

/// Runs the annealer over a raw item list with the six classic scalars.
///
/// Builds the instance and the configuration, validates both up front, and
/// returns a descriptive error instead of panicking. The run is seeded from
/// OS entropy; use [`SaRunner::run`] with [`SaConfig::with_seed`] when
/// reproducibility matters.
///
/// # Examples
///
/// ```
/// use knapsack_anneal::knapsack::Item;
/// use knapsack_anneal::sa::anneal;
///
/// let items = vec![Item::new(60.0, 10.0), Item::new(100.0, 20.0)];
/// let result = anneal(items, 25.0, 100.0, 0.95, 0.1, 1_000)?;
/// assert!(result.total_weight <= 25.0);
/// # Ok::<(), String>(())
/// ```
pub fn anneal(
    items: Vec<Item>,
    max_weight: f64,
    initial_temperature: f64,
    cooling_rate: f64,
    stopping_temperature: f64,
    max_iterations: usize,
) -> Result<SaResult, String> {
    let instance = Knapsack::new(items, max_weight);
    instance.validate()?;

    let config = SaConfig::default()
        .with_initial_temperature(initial_temperature)
        .with_cooling_rate(cooling_rate)
        .with_stopping_temperature(stopping_temperature)
        .with_max_iterations(max_iterations);
    config.validate()?;

    Ok(SaRunner::run(&instance, &config))
}
