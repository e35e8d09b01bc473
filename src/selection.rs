//! Truncation selection: rank a candidate pool and keep the best.

use crate::fitness::fitness;
use crate::individual::{Individual, Population};
use crate::instance::KnapsackInstance;

/// Cuts a candidate pool down to `target_size` by elitist truncation.
///
/// Every candidate is scored exactly once, the pool is sorted by that
/// score in non-increasing order, and the first `target_size`
/// individuals survive; the rest are discarded. There is no stochastic
/// acceptance of weaker candidates — exploration comes entirely from
/// the operators upstream.
///
/// The sort is stable and compares fitness only, so candidates of equal
/// fitness keep their relative pool order. Because breeding places the
/// previous generation at the head of the pool, survivors of equal
/// fitness favor the incumbent generation.
///
/// # Panics
/// Panics if the pool is smaller than `target_size`.
pub fn select(pool: Population, target_size: usize, instance: &KnapsackInstance) -> Population {
    assert!(
        pool.len() >= target_size,
        "pool must be at least as large as the target population"
    );
    let mut scored: Vec<(u64, Individual)> = pool
        .into_iter()
        .map(|individual| (fitness(&individual, instance), individual))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(target_size);
    scored.into_iter().map(|(_, individual)| individual).collect()
}
