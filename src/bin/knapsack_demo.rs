//! Demonstration driver: anneals a small classic instance and prints the
//! best selection found.

use knapsack_anneal::knapsack::{Item, Knapsack};
use knapsack_anneal::sa::{SaConfig, SaRunner};

fn main() {
    let instance = Knapsack::new(
        vec![
            Item::new(60.0, 10.0),
            Item::new(100.0, 20.0),
            Item::new(120.0, 30.0),
            Item::new(80.0, 40.0),
            Item::new(200.0, 50.0),
        ],
        100.0,
    );

    let config = SaConfig::default()
        .with_initial_temperature(100.0)
        .with_cooling_rate(0.95)
        .with_stopping_temperature(0.1)
        .with_max_iterations(10_000);

    let result = SaRunner::run(&instance, &config);

    println!("Solution: {:?}", result.solution);
    println!("Total value: {}", result.total_value);
}
