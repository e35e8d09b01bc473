//! The evolutionary solve loop.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::breeder::breed;
use crate::config::{ConfigError, SolverConfig};
use crate::fitness::fitness;
use crate::individual::{Individual, Population};
use crate::instance::KnapsackInstance;
use crate::operators::random_individual;
use crate::selection::select;

/// Result of a solve run: the best individual of the final generation
/// plus run statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    /// Best individual of the final generation, one selection flag per
    /// catalog item.
    pub best: Individual,

    /// Fitness of `best`. 0 means even the best selection was empty or
    /// overweight.
    pub best_fitness: u64,

    /// Number of breed-select cycles executed, always equal to the
    /// configured iteration count.
    pub iterations: usize,

    /// Best fitness per generation, recorded once for the initial
    /// population and once after each cycle; length is
    /// `iterations + 1`. Non-decreasing, since every generation
    /// re-enters the breeding pool unchanged and truncation keeps the
    /// pool's best.
    pub fitness_history: Vec<u64>,
}

/// Evolutionary solver for 0/1 knapsack instances.
///
/// Owns the problem instance, the configuration, and a single
/// run-scoped random generator that every stochastic step draws from.
/// The population lives only inside [`solve`](Self::solve); no state
/// other than the generator survives between runs.
///
/// # Example
///
/// ```
/// use knapsack_ga::{Item, KnapsackInstance, KnapsackSolver, SolverConfig};
///
/// let instance = KnapsackInstance::new(
///     vec![Item::new(60, 10), Item::new(100, 20), Item::new(120, 30)],
///     50,
/// );
/// let config = SolverConfig::default()
///     .with_population_size(20)
///     .with_iterations(300)
///     .with_seed(42);
///
/// let mut solver = KnapsackSolver::new(instance, config)?;
/// let result = solver.solve();
/// assert_eq!(result.best_fitness, 220);
/// # Ok::<(), knapsack_ga::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct KnapsackSolver {
    instance: KnapsackInstance,
    config: SolverConfig,
    rng: StdRng,
}

impl KnapsackSolver {
    /// Creates a solver for `instance` under `config`.
    ///
    /// Invalid configurations are rejected here rather than panicking
    /// mid-run. The run-scoped generator is seeded from `config.seed`
    /// when given, otherwise from process entropy.
    pub fn new(instance: KnapsackInstance, config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            instance,
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// The problem instance this solver was built for.
    pub fn instance(&self) -> &KnapsackInstance {
        &self.instance
    }

    /// The configuration this solver runs under.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Runs the evolutionary search and returns the best individual of
    /// the final generation.
    ///
    /// Seeds a fresh random generation of `population_size` feasible
    /// individuals, then executes exactly `iterations` cycles: breed
    /// the generation into a pool of three times its size, truncate the
    /// pool back down by fitness. With `iterations == 0` the loop body
    /// never runs and the result is the best of the initial population.
    ///
    /// Each call starts a new search; the owned generator continues its
    /// stream across calls, so repeated solves on one solver explore
    /// different trajectories while two solvers built with the same
    /// seed agree run for run.
    pub fn solve(&mut self) -> SolveResult {
        let mut generation: Population = (0..self.config.population_size)
            .map(|_| random_individual(&self.instance, &mut self.rng))
            .collect();

        let mut fitness_history = Vec::with_capacity(self.config.iterations + 1);
        fitness_history.push(best_of(&generation, &self.instance).1);

        for _ in 0..self.config.iterations {
            let pool = breed(&generation, &mut self.rng);
            generation = select(pool, self.config.population_size, &self.instance);
            // Selection sorts non-increasing, so the head is the generation best.
            fitness_history.push(fitness(&generation[0], &self.instance));
        }

        let (best, best_fitness) = best_of(&generation, &self.instance);
        SolveResult {
            best: best.clone(),
            best_fitness,
            iterations: self.config.iterations,
            fitness_history,
        }
    }
}

/// The highest-fitness individual of a generation and its fitness,
/// taking the first of equals.
fn best_of<'a>(
    generation: &'a [Individual],
    instance: &KnapsackInstance,
) -> (&'a Individual, u64) {
    let mut best = &generation[0];
    let mut best_fitness = fitness(best, instance);
    for individual in &generation[1..] {
        let score = fitness(individual, instance);
        if score > best_fitness {
            best = individual;
            best_fitness = score;
        }
    }
    (best, best_fitness)
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::totals;
    use crate::instance::Item;

    /// The classical three-item instance. Optimal packing is items 1
    /// and 2 for value 220 at weight exactly 50.
    fn classical_instance() -> KnapsackInstance {
        KnapsackInstance::new(
            vec![Item::new(60, 10), Item::new(100, 20), Item::new(120, 30)],
            50,
        )
    }

    #[test]
    fn test_solver_finds_classical_optimum() {
        let config = SolverConfig::default()
            .with_population_size(20)
            .with_iterations(500)
            .with_seed(42);
        let mut solver = KnapsackSolver::new(classical_instance(), config).unwrap();
        let result = solver.solve();
        assert_eq!(result.best_fitness, 220);
        assert_eq!(result.best.genes(), &[false, true, true]);
    }

    #[test]
    fn test_solve_is_deterministic_under_seed() {
        let config = SolverConfig::default()
            .with_population_size(10)
            .with_iterations(50)
            .with_seed(7);
        let mut a = KnapsackSolver::new(classical_instance(), config.clone()).unwrap();
        let mut b = KnapsackSolver::new(classical_instance(), config).unwrap();
        assert_eq!(a.solve(), b.solve());
    }

    #[test]
    fn test_fitness_history_never_degrades() {
        let config = SolverConfig::default()
            .with_population_size(10)
            .with_iterations(100)
            .with_seed(3);
        let mut solver = KnapsackSolver::new(classical_instance(), config).unwrap();
        let result = solver.solve();
        assert_eq!(result.fitness_history.len(), 101);
        for window in result.fitness_history.windows(2) {
            assert!(window[1] >= window[0]);
        }
        assert_eq!(*result.fitness_history.last().unwrap(), result.best_fitness);
    }

    #[test]
    fn test_zero_iterations_returns_best_of_initial_population() {
        let config = SolverConfig::default()
            .with_population_size(15)
            .with_iterations(0)
            .with_seed(11);
        let mut solver = KnapsackSolver::new(classical_instance(), config).unwrap();
        let result = solver.solve();
        assert_eq!(result.iterations, 0);
        assert_eq!(result.fitness_history.len(), 1);
        assert_eq!(result.fitness_history[0], result.best_fitness);
        // Initial individuals are generated feasible.
        let (value, weight) = totals(&result.best, solver.instance());
        assert!(weight <= solver.instance().capacity());
        assert_eq!(value, result.best_fitness);
    }

    #[test]
    fn test_returned_best_is_feasible() {
        let items: Vec<Item> = (1..=12).map(|i| Item::new(i * 7 % 50 + 1, i * 3)).collect();
        let config = SolverConfig::default()
            .with_population_size(12)
            .with_iterations(80)
            .with_seed(19);
        let mut solver = KnapsackSolver::new(KnapsackInstance::new(items, 40), config).unwrap();
        let result = solver.solve();
        let (value, weight) = totals(&result.best, solver.instance());
        assert!(weight <= solver.instance().capacity());
        assert_eq!(value, result.best_fitness);
    }

    #[test]
    fn test_empty_catalog_solves_to_empty_selection() {
        let config = SolverConfig::default()
            .with_population_size(5)
            .with_iterations(10)
            .with_seed(1);
        let mut solver = KnapsackSolver::new(KnapsackInstance::new(vec![], 100), config).unwrap();
        let result = solver.solve();
        assert!(result.best.is_empty());
        assert_eq!(result.best_fitness, 0);
        assert!(result.fitness_history.iter().all(|&f| f == 0));
    }

    #[test]
    fn test_zero_capacity_scores_zero() {
        let items = vec![Item::new(10, 5), Item::new(20, 3)];
        let config = SolverConfig::default()
            .with_population_size(8)
            .with_iterations(20)
            .with_seed(2);
        let mut solver = KnapsackSolver::new(KnapsackInstance::new(items, 0), config).unwrap();
        assert_eq!(solver.solve().best_fitness, 0);
    }

    #[test]
    fn test_population_of_one_still_runs() {
        let config = SolverConfig::default()
            .with_population_size(1)
            .with_iterations(200)
            .with_seed(5);
        let mut solver = KnapsackSolver::new(classical_instance(), config).unwrap();
        let result = solver.solve();
        let (_, weight) = totals(&result.best, solver.instance());
        assert!(weight <= 50 || result.best_fitness == 0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SolverConfig::default().with_population_size(0);
        let err = KnapsackSolver::new(classical_instance(), config).unwrap_err();
        assert_eq!(err, ConfigError::ZeroPopulationSize);
    }
}
