//! Genetic algorithm engine for the 0/1 knapsack problem.
//!
//! Searches for a high-value subset of weighted items under a hard
//! capacity constraint with an evolutionary heuristic rather than exact
//! dynamic programming or branch-and-bound — useful when instances are
//! too large for exact methods or when near-optimal is good enough.
//!
//! A population of fixed-length bit genomes (one gene per catalog item)
//! is evolved for a fixed number of iterations. Each iteration expands
//! the current generation to a pool of three times its size — every
//! individual re-enters unchanged and contributes a one-gene mutant and
//! a single-point crossover child with a random partner — then the pool
//! is truncated back to the population size by fitness, non-increasing.
//! Fitness is the selected value sum, forced to 0 whenever the selected
//! weight exceeds the capacity, so every infeasible candidate ranks
//! below every feasible one with positive value.
//!
//! The engine is single-threaded, runs exactly the configured iteration
//! count, and makes no optimality guarantee.
//!
//! # Key Types
//!
//! - [`Item`] / [`KnapsackInstance`]: the problem — an ordered catalog
//!   of value/weight items plus a capacity
//! - [`Individual`] / [`Population`]: candidate solutions
//! - [`SolverConfig`]: population size, iteration count, seed
//! - [`KnapsackSolver`] / [`SolveResult`]: the run loop and its outcome
//!
//! The primitives in [`operators`], [`selection`], and [`breeder`] are
//! public for callers that want to drive the cycle themselves.
//!
//! # Example
//!
//! ```
//! use knapsack_ga::{Item, KnapsackInstance, KnapsackSolver, SolverConfig};
//!
//! // Three items, capacity 50: the optimum packs the second and third
//! // for value 220 at exactly the capacity.
//! let instance = KnapsackInstance::new(
//!     vec![Item::new(60, 10), Item::new(100, 20), Item::new(120, 30)],
//!     50,
//! );
//! let config = SolverConfig::default()
//!     .with_population_size(20)
//!     .with_iterations(300)
//!     .with_seed(42);
//!
//! let mut solver = KnapsackSolver::new(instance, config)?;
//! let result = solver.solve();
//!
//! assert_eq!(result.best_fitness, 220);
//! assert_eq!(result.best.genes(), &[false, true, true]);
//! # Ok::<(), knapsack_ga::ConfigError>(())
//! ```
//!
//! # References
//!
//! - Holland (1975), "Adaptation in Natural and Artificial Systems"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization, and
//!   Machine Learning"
//! - Martello & Toth (1990), "Knapsack Problems: Algorithms and
//!   Computer Implementations"

pub mod breeder;
pub mod config;
pub mod fitness;
pub mod individual;
pub mod instance;
pub mod operators;
pub mod selection;
pub mod solver;

pub use config::{ConfigError, SolverConfig};
pub use individual::{Individual, Population};
pub use instance::{Item, KnapsackInstance};
pub use solver::{KnapsackSolver, SolveResult};
