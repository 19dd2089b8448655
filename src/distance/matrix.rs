//! Dense item-to-item cost matrix.

use crate::error::{Result, SequencingError};
use crate::models::Location;

/// Travel costs between every ordered pair of items, stored row-major.
///
/// Items are addressed by index, so two items at identical coordinates stay
/// distinct. Built either from planar locations (Euclidean, symmetric) or
/// from explicit, possibly asymmetric, data.
///
/// # Examples
///
/// ```
/// use u_sequencing::models::Location;
/// use u_sequencing::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_locations(&[
///     Location::new(0.0, 0.0),
///     Location::new(3.0, 4.0),
///     Location::new(6.0, 8.0),
/// ]);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.row(2).len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    costs: Vec<f64>,
}

impl DistanceMatrix {
    /// An `n`-item matrix with every cost zero.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            costs: vec![0.0; n * n],
        }
    }

    /// Euclidean distances between `locations`, indexed by list position.
    pub fn from_locations(locations: &[Location]) -> Self {
        let mut dm = Self::new(locations.len());
        for (i, a) in locations.iter().enumerate() {
            for (j, b) in locations.iter().enumerate().skip(i + 1) {
                let d = a.distance_to(b);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Wraps a flat row-major buffer of `n * n` costs.
    ///
    /// # Errors
    ///
    /// [`SequencingError::LengthMismatch`] if `costs.len() != n * n`.
    pub fn from_data(n: usize, costs: Vec<f64>) -> Result<Self> {
        if costs.len() != n * n {
            return Err(SequencingError::LengthMismatch {
                expected: n * n,
                actual: costs.len(),
            });
        }
        Ok(Self { n, costs })
    }

    /// Builds the matrix from one row of costs per item.
    ///
    /// # Errors
    ///
    /// [`SequencingError::LengthMismatch`] if any row is not as long as the
    /// number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let mut costs = Vec::with_capacity(n * n);
        for row in rows {
            if row.len() != n {
                return Err(SequencingError::LengthMismatch {
                    expected: n,
                    actual: row.len(),
                });
            }
            costs.extend(row);
        }
        Ok(Self { n, costs })
    }

    /// Cost of going from item `from` to item `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= self.size()`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.costs[from * self.n + to]
    }

    /// Sets the cost of going from item `from` to item `to`.
    ///
    /// Only that direction changes; the reverse entry is left as it is.
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.costs[from * self.n + to] = cost;
    }

    /// Costs out of item `from`.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.costs[from * self.n..(from + 1) * self.n]
    }

    /// Number of items.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Returns `true` if `get(i, j)` and `get(j, i)` differ by at most `tol`
    /// for every pair of items.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        (0..self.n).all(|i| {
            ((i + 1)..self.n).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tol)
        })
    }

    /// The candidate closest to `from`, or `None` if there are none.
    ///
    /// Ties go to the candidate listed first.
    pub fn nearest(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let row = self.row(from);
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| row[a].total_cmp(&row[b]))
    }
}
