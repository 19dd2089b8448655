//! Tour type and permutation checks.

use crate::error::{Result, SequencingError};

/// A closed tour: a permutation of all item indices, where the last item
/// connects back to the first.
///
/// # Examples
///
/// ```
/// use u_sequencing::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1], 7.5);
/// assert_eq!(tour.sequence(), &[0, 2, 1]);
/// assert_eq!(tour.len(), 3);
/// assert_eq!(tour.cost(), 7.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    sequence: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Creates a tour from a visiting sequence and its total cost.
    pub fn new(sequence: Vec<usize>, cost: f64) -> Self {
        Self { sequence, cost }
    }

    /// Creates the empty tour (cost 0).
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0.0)
    }

    /// Item indices in visiting order.
    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// Consumes the tour, returning its visiting sequence.
    pub fn into_sequence(self) -> Vec<usize> {
        self.sequence
    }

    /// Total cost, including the closing edge.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of items in the tour.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns `true` if the tour visits no items.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl Default for Tour {
    fn default() -> Self {
        Self::empty()
    }
}

/// Checks that `sequence` is a permutation of `0..size`.
///
/// # Errors
///
/// Returns [`SequencingError::LengthMismatch`], [`SequencingError::ItemOutOfRange`]
/// or [`SequencingError::DuplicateItem`] describing the first problem found.
pub fn validate_permutation(sequence: &[usize], size: usize) -> Result<()> {
    if sequence.len() != size {
        return Err(SequencingError::LengthMismatch {
            expected: size,
            actual: sequence.len(),
        });
    }
    validate_cover(sequence.iter().copied(), size)
}

/// Checks that `items` hits every index in `0..size` exactly once, given that
/// the caller already verified the count.
pub(crate) fn validate_cover(items: impl IntoIterator<Item = usize>, size: usize) -> Result<()> {
    let mut seen = vec![false; size];
    for item in items {
        if item >= size {
            return Err(SequencingError::ItemOutOfRange { item, size });
        }
        if seen[item] {
            return Err(SequencingError::DuplicateItem { item });
        }
        seen[item] = true;
    }
    Ok(())
}
