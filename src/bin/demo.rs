//! End-to-end demo: generate a random 50-item instance, solve it, and
//! report the chosen packing.

use knapsack_ga::fitness::totals;
use knapsack_ga::{ConfigError, Item, KnapsackInstance, KnapsackSolver, SolverConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates a demo catalog with values and weights uniform in
/// `1..=100`, deterministic in `seed`.
fn generate_items(size: usize, seed: u64) -> Vec<Item> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| Item::new(rng.random_range(1..=100), rng.random_range(1..=100)))
        .collect()
}

fn main() -> Result<(), ConfigError> {
    let instance = KnapsackInstance::new(generate_items(50, 57), 500);
    let config = SolverConfig::default()
        .with_population_size(30)
        .with_iterations(50_000);
    let mut solver = KnapsackSolver::new(instance, config)?;

    println!("Initial item set:");
    for item in solver.instance().items() {
        println!("{item}");
    }

    let result = solver.solve();

    println!("\nThe items chosen are:");
    for i in result.best.selected_indices() {
        println!("{}", solver.instance().item(i));
    }
    let (total_value, total_weight) = totals(&result.best, solver.instance());
    println!("For a total value of {total_value} and a total weight of {total_weight}");
    Ok(())
}
