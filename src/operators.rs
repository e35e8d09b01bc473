//! Genetic operators: random individual generation, single-gene
//! mutation, and single-point crossover.
//!
//! All operators are free functions drawing randomness from a
//! caller-supplied generator; the solver threads its one run-scoped RNG
//! through every call. Mutation and crossover do not check feasibility:
//! infeasible offspring are legal and are zeroed by the fitness
//! evaluator downstream.
//!
//! # References
//!
//! - Holland (1975), "Adaptation in Natural and Artificial Systems"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization, and
//!   Machine Learning"

use crate::individual::Individual;
use crate::instance::KnapsackInstance;
use rand::Rng;

// ============================================================
// Random generation
// ============================================================

/// Generates one random individual of the instance's genome length.
///
/// Walks the catalog in index order flipping a fair coin per gene. On
/// heads the item's weight is tentatively added to a running total: if
/// that total would exceed the capacity, generation stops at once — the
/// busting gene stays unselected and every remaining gene defaults to
/// unselected. Otherwise the gene is selected and the walk continues.
///
/// The early stop means generated individuals never exceed the
/// capacity, seeding the population inside the feasible region without
/// attempting any value maximization.
pub fn random_individual<R: Rng>(instance: &KnapsackInstance, rng: &mut R) -> Individual {
    let mut genes = vec![false; instance.len()];
    let mut weight = 0u64;
    for (i, item) in instance.items().iter().enumerate() {
        if rng.random_bool(0.5) {
            weight += item.weight;
            if weight > instance.capacity() {
                break;
            }
            genes[i] = true;
        }
    }
    Individual::from_genes(genes)
}

// ============================================================
// Mutation
// ============================================================

/// Returns a copy of `parent` with exactly one gene flipped.
///
/// The flipped index is uniform over `[0, N)`; a selected gene becomes
/// unselected and vice versa. Feasibility is not checked. A zero-length
/// parent is returned unchanged, having nothing to flip.
pub fn mutate<R: Rng>(parent: &Individual, rng: &mut R) -> Individual {
    if parent.is_empty() {
        return parent.clone();
    }
    let mut genes = parent.genes().to_vec();
    let index = rng.random_range(0..genes.len());
    genes[index] = !genes[index];
    Individual::from_genes(genes)
}

// ============================================================
// Crossover
// ============================================================

/// Recombines two parents by single-point crossover.
///
/// Picks an index `k` uniform over `[0, N)` and builds the child from
/// `parent1`'s genes `[0, k)` followed by `parent2`'s genes `[k, N)`.
/// The boundary gene itself comes from `parent2`, so `k == 0`
/// reproduces `parent2` exactly, and a parent crossed with itself
/// reproduces that parent for every `k`. Feasibility is not checked.
/// Zero-length parents yield a zero-length child.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn crossover<R: Rng>(parent1: &Individual, parent2: &Individual, rng: &mut R) -> Individual {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    if n == 0 {
        return parent1.clone();
    }
    let k = rng.random_range(0..n);
    let mut genes = Vec::with_capacity(n);
    genes.extend_from_slice(&parent1.genes()[..k]);
    genes.extend_from_slice(&parent2.genes()[k..]);
    Individual::from_genes(genes)
}

// ============================================================
// Tests
// ============================================================
