//! Problem definition: the item catalog and the knapsack capacity.

use std::fmt;

/// One knapsack item: a value gained by packing it and a weight counted
/// against the capacity.
///
/// Plain immutable data. Values and weights are non-negative integers;
/// the engine does unchecked `u64` arithmetic on them, so callers keep
/// magnitudes within the natural range of the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Value gained when the item is selected.
    pub value: u64,
    /// Weight counted against the capacity when the item is selected.
    pub weight: u64,
}

impl Item {
    /// Creates an item from its value and weight.
    pub fn new(value: u64, weight: u64) -> Self {
        Self { value, weight }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{value: {}, weight: {}}}", self.value, self.weight)
    }
}

/// A 0/1 knapsack problem instance: an ordered item catalog plus the
/// weight capacity.
///
/// The catalog is fixed for the lifetime of a solve run and defines the
/// genome length `N` for every [`Individual`](crate::Individual): gene
/// `i` selects `items()[i]`. Both the catalog and the capacity are
/// read-only inputs to every operation of the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackInstance {
    items: Vec<Item>,
    capacity: u64,
}

impl KnapsackInstance {
    /// Creates an instance from an ordered item list and a capacity.
    ///
    /// An empty catalog is allowed: it degenerates to zero-length
    /// genomes whose fitness is 0 everywhere. A capacity of 0 is also
    /// allowed; only zero-weight selections are then feasible.
    pub fn new(items: Vec<Item>, capacity: u64) -> Self {
        Self { items, capacity }
    }

    /// The ordered item catalog.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The item at catalog index `i`.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    pub fn item(&self, i: usize) -> Item {
        self.items[i]
    }

    /// The weight capacity of the knapsack.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of items in the catalog — the genome length `N`.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_display() {
        let item = Item::new(60, 10);
        assert_eq!(item.to_string(), "{value: 60, weight: 10}");
    }

    #[test]
    fn test_instance_accessors() {
        let instance = KnapsackInstance::new(vec![Item::new(60, 10), Item::new(100, 20)], 50);
        assert_eq!(instance.len(), 2);
        assert!(!instance.is_empty());
        assert_eq!(instance.capacity(), 50);
        assert_eq!(instance.item(1), Item::new(100, 20));
        assert_eq!(instance.items()[0].value, 60);
    }

    #[test]
    fn test_empty_catalog() {
        let instance = KnapsackInstance::new(vec![], 100);
        assert_eq!(instance.len(), 0);
        assert!(instance.is_empty());
        assert!(instance.items().is_empty());
    }

    #[test]
    fn test_zero_capacity_is_representable() {
        let instance = KnapsackInstance::new(vec![Item::new(10, 5)], 0);
        assert_eq!(instance.capacity(), 0);
    }
}
