//! Breeding: expand a generation into a candidate pool three times its
//! size.

use crate::individual::{Individual, Population};
use crate::operators::{crossover, mutate};
use rand::Rng;

/// Expands a population into a candidate pool of exactly
/// `3 * population.len()` individuals.
///
/// The input individuals are carried over unchanged as the leading
/// slots, which is what makes the downstream truncation elitist: the
/// incumbent best always re-enters the pool and can only be displaced
/// by something at least as fit. Then, for each input individual in
/// order, two offspring are appended — a mutant of it, and its
/// crossover child with a partner drawn uniformly at random from the
/// input population (possibly the individual itself, which degenerates
/// to a copy).
///
/// No feasibility filtering happens here; overweight offspring are
/// zeroed by the fitness evaluator during selection. An empty input
/// yields an empty pool.
pub fn breed<R: Rng>(population: &[Individual], rng: &mut R) -> Population {
    let mut pool = Vec::with_capacity(population.len() * 3);
    pool.extend_from_slice(population);
    for individual in population {
        pool.push(mutate(individual, rng));
        let partner = &population[rng.random_range(0..population.len())];
        pool.push(crossover(individual, partner, rng));
    }
    pool
}
