//! Candidate solutions: fixed-length bit genomes and populations of them.

/// One candidate solution: a fixed-length sequence of item-selection
/// genes, where gene `i == true` means catalog item `i` is packed.
///
/// Individuals are value objects. Operators return new individuals
/// instead of mutating parents in place, and an individual's length
/// always equals the catalog length of the instance it was built
/// against. An individual stores no fitness; fitness is derived on
/// demand by [`fitness`](crate::fitness::fitness), so a genome can never
/// disagree with a cached score.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    genes: Vec<bool>,
}

/// An ordered collection of individuals. Duplicates are permitted.
///
/// Grows to three times the target population during breeding and is
/// cut back by selection each iteration.
pub type Population = Vec<Individual>;

impl Individual {
    /// Wraps a gene vector as an individual.
    pub fn from_genes(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// An individual of length `n` with every gene unselected.
    ///
    /// The empty selection is feasible for any capacity and scores 0.
    pub fn unselected(n: usize) -> Self {
        Self {
            genes: vec![false; n],
        }
    }

    /// Genome length.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the genome has zero genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The gene at index `i`.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    pub fn gene(&self, i: usize) -> bool {
        self.genes[i]
    }

    /// The full gene sequence.
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Number of selected genes.
    pub fn count_selected(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }

    /// Catalog indices of the selected genes, in ascending order.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(i, &g)| g.then_some(i))
    }
}

impl From<Vec<bool>> for Individual {
    fn from(genes: Vec<bool>) -> Self {
        Self::from_genes(genes)
    }
}
