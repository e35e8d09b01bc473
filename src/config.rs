//! Solver configuration.

use thiserror::Error;

/// Error returned when a configuration cannot drive the solver.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The target population size was 0. Breeding and truncation both
    /// assume at least one individual, and an empty generation has no
    /// best to return.
    #[error("population_size must be at least 1")]
    ZeroPopulationSize,
}

/// Configuration for a knapsack solve run.
///
/// Immutable once the solver is constructed. The iteration count is the
/// only termination criterion: the loop always executes exactly
/// `iterations` breed-select cycles, with no convergence detection and
/// no early exit.
///
/// # Example
///
/// ```
/// use knapsack_ga::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_population_size(30)
///     .with_iterations(50_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Number of individuals kept after each selection. The breeding
    /// pool transiently grows to three times this. Must be at least 1.
    pub population_size: usize,

    /// Number of breed-select cycles to run. 0 is valid: the result is
    /// then the best individual of the initial random population.
    pub iterations: usize,

    /// Seed for the run-scoped random generator. `None` draws a seed
    /// from process entropy; `Some` makes the whole run reproducible.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            iterations: 500,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Sets the target population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the number of breed-select cycles.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Fixes the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::ZeroPopulationSize);
        }
        Ok(())
    }
}
