//! # Permutations
//!
//! Relabeling of row and column indices. The geometric transforms of a sparse matrix (switching
//! and mirroring) are permutations of the indices of its sorted sparse rows.
pub use reverse::Reverse as ReversePermutation;
pub use swap::Swap as SwapPermutation;

mod reverse;
mod swap;

/// A bijection on `0..len`.
pub trait Permutation {
    /// Where an index is mapped to.
    ///
    /// # Arguments
    ///
    /// * `i`: Value in range `0..self.len()`.
    fn forward(&self, i: usize) -> usize;

    /// Relabel the indices of a sparse row and restore its order.
    ///
    /// Implementations can often move fewer items than the sort of this default does.
    ///
    /// # Arguments
    ///
    /// * `items`: `(index, value)` tuples with strictly increasing indices.
    fn forward_sorted<T>(&self, items: &mut [(usize, T)]) {
        self.forward_unsorted(items);
        items.sort_unstable_by_key(|&(i, _)| i);
    }

    /// Relabel the indices of `(index, value)` tuples without reordering them.
    fn forward_unsorted<T>(&self, items: &mut [(usize, T)]) {
        debug_assert!(items.iter().all(|&(i, _)| i < self.len()));

        for (i, _) in items {
            *i = self.forward(*i);
        }
    }

    /// Size of the domain.
    fn len(&self) -> usize;
}
