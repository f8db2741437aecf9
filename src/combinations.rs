//! Mixed-radix enumeration of the combination space.
//! Combination `I` maps to one selection index per parameter, using each
//! parameter's cardinality as the radix of its position. The last parameter
//! is the least significant digit.

use crate::error::{Error, Result};

/// Number of combinations for the given cardinalities.
///
/// Counts are `u64`, so at most `u64::MAX` combinations can be enumerated.
///
/// # Errors
/// * `Error::CombinationOverflow` if the product does not fit into `u64`
pub fn total_combinations(cardinalities: &[usize]) -> Result<u64> {
    cardinalities.iter().try_fold(1u64, |total, &cardinality| {
        total
            .checked_mul(cardinality as u64)
            .ok_or(Error::CombinationOverflow)
    })
}

/// Writes the selection vector of combination `index` into `selection`.
///
/// `selection` must have one slot per cardinality.
pub fn decompose_into(index: u64, cardinalities: &[usize], selection: &mut [usize]) {
    let mut carry = index;
    for (slot, &cardinality) in selection.iter_mut().zip(cardinalities).rev() {
        let radix = cardinality as u64;
        *slot = (carry % radix) as usize;
        carry /= radix;
    }
}

/// Selection vector of combination `index`.
pub fn decompose(index: u64, cardinalities: &[usize]) -> Vec<usize> {
    let mut selection = vec![0; cardinalities.len()];
    decompose_into(index, cardinalities, &mut selection);
    selection
}

/// One point of the combination space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    pub index: u64,
    pub selection: Vec<usize>,
}

/// Iterator over all combinations in increasing index order.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    cardinalities: &'a [usize],
    next: u64,
    total: u64,
}

impl<'a> Combinations<'a> {
    /// `total` must be the product of `cardinalities`.
    pub fn new(cardinalities: &'a [usize], total: u64) -> Self {
        Self { cardinalities, next: 0, total }
    }
}

impl Iterator for Combinations<'_> {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(Combination { index, selection: decompose(index, self.cardinalities) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        match usize::try_from(remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}
