//! # Reversing
//!
//! Mirror all indices around the middle of the range.
use crate::data::linear_algebra::permutation::Permutation;

/// Map `i` to `len - 1 - i`.
pub struct Reverse {
    len: usize,
}

impl Reverse {
    /// Create a new instance for indices in `0..len`.
    pub fn new(len: usize) -> Self {
        Self { len }
    }
}

impl Permutation for Reverse {
    fn forward(&self, i: usize) -> usize {
        debug_assert!(i < self.len);

        self.len - 1 - i
    }

    /// Reversing the indices of a sorted slice reverses its order, no sorting is needed.
    fn forward_sorted<T>(&self, items: &mut [(usize, T)]) {
        debug_assert!(items.windows(2).all(|w| w[0].0 < w[1].0));

        self.forward_unsorted(items);
        items.reverse();

        debug_assert!(items.windows(2).all(|w| w[0].0 < w[1].0));
    }

    fn len(&self) -> usize {
        self.len
    }
}
