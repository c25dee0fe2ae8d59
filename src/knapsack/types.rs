//! Instance types and pure solution operations.

use rand::Rng;

/// A single knapsack item.
///
/// Values and weights must be finite and non-negative; instances carrying
/// anything else are rejected by [`Knapsack::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Profit contributed when the item is packed.
    pub value: f64,
    /// Capacity consumed when the item is packed.
    pub weight: f64,
}

impl Item {
    pub fn new(value: f64, weight: f64) -> Self {
        Self { value, weight }
    }
}

/// A 0/1 knapsack problem instance.
///
/// Candidate solutions are boolean sequences index-aligned with `items`:
/// position `i` set means item `i` is packed. Item order carries no other
/// meaning.
///
/// The instance owns the pure operations the annealer consumes. The two
/// generators are parameterized over the caller's random source, so a run
/// draws from one sequential stream and is reproducible given a seed.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knapsack {
    /// The ordered item list.
    pub items: Vec<Item>,
    /// Total weight capacity.
    pub max_weight: f64,
}

impl Knapsack {
    pub fn new(items: Vec<Item>, max_weight: f64) -> Self {
        Self { items, max_weight }
    }

    /// Validates the instance.
    pub fn validate(&self) -> Result<(), String> {
        if self.items.is_empty() {
            return Err("items must not be empty".into());
        }
        for (i, item) in self.items.iter().enumerate() {
            if !item.value.is_finite() || item.value < 0.0 {
                return Err(format!("item {i} has invalid value {}", item.value));
            }
            if !item.weight.is_finite() || item.weight < 0.0 {
                return Err(format!("item {i} has invalid weight {}", item.weight));
            }
        }
        if !self.max_weight.is_finite() || self.max_weight < 0.0 {
            return Err(format!(
                "max_weight must be finite and non-negative, got {}",
                self.max_weight
            ));
        }
        Ok(())
    }

    /// Total weight of the packed items.
    ///
    /// `solution` must be index-aligned with `items`.
    pub fn total_weight(&self, solution: &[bool]) -> f64 {
        debug_assert_eq!(solution.len(), self.items.len());
        self.items
            .iter()
            .zip(solution)
            .filter(|&(_, &packed)| packed)
            .map(|(item, _)| item.weight)
            .sum()
    }

    /// Total value of the packed items.
    ///
    /// `solution` must be index-aligned with `items`.
    pub fn total_value(&self, solution: &[bool]) -> f64 {
        debug_assert_eq!(solution.len(), self.items.len());
        self.items
            .iter()
            .zip(solution)
            .filter(|&(_, &packed)| packed)
            .map(|(item, _)| item.value)
            .sum()
    }

    /// Draws a uniformly random solution: each item is packed
    /// independently with probability 0.5.
    pub fn random_solution<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
        (0..self.items.len()).map(|_| rng.random_bool(0.5)).collect()
    }

    /// Returns a copy of `solution` with exactly one uniformly-chosen
    /// position flipped.
    ///
    /// The input is never mutated, so the caller can discard the copy
    /// and keep its current state untouched.
    ///
    /// # Panics
    ///
    /// Panics if the instance has no items.
    pub fn neighbor<R: Rng>(&self, solution: &[bool], rng: &mut R) -> Vec<bool> {
        debug_assert_eq!(solution.len(), self.items.len());
        let mut flipped = solution.to_vec();
        let index = rng.random_range(0..flipped.len());
        flipped[index] = !flipped[index];
        flipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_instance(n: usize) -> Knapsack {
        let items = (0..n)
            .map(|i| Item::new(10.0 + i as f64, 1.0 + i as f64))
            .collect();
        Knapsack::new(items, 100.0)
    }

    #[test]
    fn test_sums_of_known_selection() {
        let instance = Knapsack::new(
            vec![
                Item::new(60.0, 10.0),
                Item::new(100.0, 20.0),
                Item::new(120.0, 30.0),
            ],
            100.0,
        );
        let solution = [true, false, true];

        assert!((instance.total_weight(&solution) - 40.0).abs() < 1e-12);
        assert!((instance.total_value(&solution) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_selection_sums_to_zero() {
        let instance = small_instance(4);
        let solution = [false; 4];

        assert_eq!(instance.total_weight(&solution), 0.0);
        assert_eq!(instance.total_value(&solution), 0.0);
    }

    #[test]
    fn test_evaluators_have_no_hidden_state() {
        let instance = small_instance(6);
        let solution = [true, false, true, true, false, true];

        assert_eq!(
            instance.total_value(&solution),
            instance.total_value(&solution)
        );
        assert_eq!(
            instance.total_weight(&solution),
            instance.total_weight(&solution)
        );
    }

    #[test]
    fn test_validate_ok() {
        assert!(small_instance(3).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_items() {
        assert!(Knapsack::new(vec![], 10.0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_value() {
        let instance = Knapsack::new(vec![Item::new(-1.0, 1.0)], 10.0);
        assert!(instance.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_weight() {
        let instance = Knapsack::new(vec![Item::new(1.0, f64::NAN)], 10.0);
        assert!(instance.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_capacity() {
        let instance = Knapsack::new(vec![Item::new(1.0, 1.0)], -0.5);
        assert!(instance.validate().is_err());
    }

    #[test]
    fn test_random_solution_has_one_entry_per_item() {
        let instance = small_instance(17);
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(instance.random_solution(&mut rng).len(), 17);
    }

    #[test]
    fn test_neighbor_leaves_its_input_untouched() {
        let instance = small_instance(5);
        let mut rng = StdRng::seed_from_u64(42);
        let solution = vec![true, false, false, true, false];
        let copy = solution.clone();

        let _ = instance.neighbor(&solution, &mut rng);

        assert_eq!(solution, copy);
    }

    proptest! {
        #[test]
        fn prop_neighbor_flips_exactly_one_position(
            solution in proptest::collection::vec(any::<bool>(), 1..48),
            seed in any::<u64>(),
        ) {
            let instance = Knapsack::new(vec![Item::new(1.0, 1.0); solution.len()], 10.0);
            let mut rng = StdRng::seed_from_u64(seed);

            let flipped = instance.neighbor(&solution, &mut rng);

            prop_assert_eq!(flipped.len(), solution.len());
            let differing = solution
                .iter()
                .zip(&flipped)
                .filter(|(a, b)| a != b)
                .count();
            prop_assert_eq!(differing, 1);
        }

        #[test]
        fn prop_lockstep_reversal_preserves_the_sums(
            entries in proptest::collection::vec(
                (0.0f64..500.0, 0.0f64..500.0, any::<bool>()),
                1..32,
            ),
        ) {
            let items: Vec<Item> = entries.iter().map(|&(v, w, _)| Item::new(v, w)).collect();
            let solution: Vec<bool> = entries.iter().map(|&(_, _, packed)| packed).collect();
            let forward = Knapsack::new(items.clone(), 1e9);

            let mut reversed_items = items;
            reversed_items.reverse();
            let mut reversed_solution = solution.clone();
            reversed_solution.reverse();
            let backward = Knapsack::new(reversed_items, 1e9);

            prop_assert!(
                (forward.total_value(&solution) - backward.total_value(&reversed_solution)).abs()
                    < 1e-6
            );
            prop_assert!(
                (forward.total_weight(&solution) - backward.total_weight(&reversed_solution)).abs()
                    < 1e-6
            );
        }
    }
}
