//! Fitness evaluation under the hard capacity constraint.

use crate::individual::Individual;
use crate::instance::KnapsackInstance;

/// Total selected value and total selected weight of an individual, in
/// one pass over the genome.
///
/// The value sum is *not* zeroed when the weight exceeds the capacity;
/// that is [`fitness`]'s job. Reporting code uses this to recover the
/// totals of a returned selection.
///
/// # Panics
/// Panics if the genome length differs from the catalog length.
pub fn totals(individual: &Individual, instance: &KnapsackInstance) -> (u64, u64) {
    assert_eq!(
        individual.len(),
        instance.len(),
        "genome length must match catalog length"
    );
    let mut value = 0u64;
    let mut weight = 0u64;
    for (gene, item) in individual.genes().iter().zip(instance.items()) {
        if *gene {
            value += item.value;
            weight += item.weight;
        }
    }
    (value, weight)
}

/// Scores an individual against an instance.
///
/// The score is the sum of the selected items' values, forced to 0 when
/// the selected weight exceeds the capacity. Infeasible individuals are
/// not partially penalized: they all score 0, ranking below every
/// feasible individual with positive value and tying with the empty
/// selection. Selected weight exactly equal to the capacity is feasible.
///
/// Pure function with no side effects; scoring the same individual twice
/// yields the same value.
///
/// # Panics
/// Panics if the genome length differs from the catalog length.
pub fn fitness(individual: &Individual, instance: &KnapsackInstance) -> u64 {
    let (value, weight) = totals(individual, instance);
    if weight > instance.capacity() {
        0
    } else {
        value
    }
}
