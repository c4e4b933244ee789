//! # Exchanging two indices
//!
//! Used to switch two rows or two columns of a matrix.
use crate::data::linear_algebra::permutation::Permutation;

/// Map `low` to `high` and `high` to `low`, leaving all other indices in place.
pub struct Swap {
    low: usize,
    high: usize,
    len: usize,
}

impl Swap {
    /// Create a new instance for indices in `0..len`.
    ///
    /// The two indices may be given in any order, and may be equal.
    pub fn new((i, j): (usize, usize), len: usize) -> Self {
        debug_assert!(i < len && j < len);

        Self { low: i.min(j), high: i.max(j), len }
    }
}

impl Permutation for Swap {
    fn forward(&self, i: usize) -> usize {
        debug_assert!(i < self.len);

        match i {
            i if i == self.low => self.high,
            i if i == self.high => self.low,
            i => i,
        }
    }

    /// Only items with an index in `low..=high` can change position. A value that passes other
    /// values is rotated into place, the rest of the slice is not touched.
    fn forward_sorted<T>(&self, items: &mut [(usize, T)]) {
        debug_assert!(items.windows(2).all(|w| w[0].0 < w[1].0));

        let low_position = items.partition_point(|&(i, _)| i < self.low);
        let high_position = items.partition_point(|&(i, _)| i < self.high);
        let has_low = items.get(low_position).is_some_and(|&(i, _)| i == self.low);
        let has_high = items.get(high_position).is_some_and(|&(i, _)| i == self.high);

        match (has_low, has_high) {
            (true, true) => {
                items[low_position].0 = self.high;
                items[high_position].0 = self.low;
                items.swap(low_position, high_position);
            },
            (true, false) => {
                // Last of the items below `high`
                items[low_position].0 = self.high;
                items[low_position..high_position].rotate_left(1);
            },
            (false, true) => {
                // First of the items above `low`
                items[high_position].0 = self.low;
                items[low_position..=high_position].rotate_right(1);
            },
            (false, false) => {},
        }

        debug_assert!(items.windows(2).all(|w| w[0].0 < w[1].0));
    }

    fn len(&self) -> usize {
        self.len
    }
}
