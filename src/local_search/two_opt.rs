//! Best-improvement 2-opt on a closed tour.
//!
//! # Algorithm
//!
//! A move `(i, j)` with `1 <= i`, `i + 2 <= j <= n` removes the edges
//! `(t[i-1], t[i])` and `(t[j-1], t[j mod n])` and reconnects the tour by
//! reversing positions `i..j`:
//!
//! ```text
//! gain = d(t[i-1], t[i]) + d(t[j-1], t[j mod n]) - d(t[i-1], t[j-1]) - d(t[i], t[j mod n])
//!      + sum over k in i..j-1 of (d(t[k], t[k+1]) - d(t[k+1], t[k]))
//! ```
//!
//! The second line is the cost of travelling the reversed segment the other
//! way. It vanishes on symmetric matrices and keeps the gain exact on
//! asymmetric ones.
//!
//! `(1, n)` is skipped: both removed edges touch `t[0]` and the reversal
//! only flips the direction of the whole cycle. Each scan evaluates every
//! move and applies only the one with the largest positive gain (ties →
//! lowest `(i, j)`). The search stops when a scan finds no improving move,
//! so the result is 2-optimal.
//!
//! # Complexity
//!
//! O(n²) per scan: the segment term is accumulated while `j` grows. Every
//! applied move lowers the cost by more than [`GAIN_TOLERANCE`], so the
//! number of scans is finite.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::evaluation::tour_length;
use crate::models::{validate_permutation, Tour};
use crate::observer::{NoopObserver, SearchObserver};

/// Minimum gain for a move to count as improving.
///
/// Gains at or below this are floating-point noise.
pub const GAIN_TOLERANCE: f64 = 1e-10;

/// A 2-opt move: reverse tour positions `i..j` (exclusive end).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoOptMove {
    /// First reversed position.
    pub i: usize,
    /// One past the last reversed position.
    pub j: usize,
    /// Cost reduction of the move.
    pub gain: f64,
}

impl TwoOptMove {
    /// Applies the move to `tour` in place.
    pub fn apply(&self, tour: &mut [usize]) {
        tour[self.i..self.j].reverse();
    }
}

/// Computes the gain of the 2-opt move `(i, j)` on `tour`.
///
/// Positive gain means the move shortens the tour. The gain is the exact
/// cost difference, including the direction change of the reversed segment
/// on asymmetric matrices.
///
/// # Panics
///
/// Panics if `i == 0`, `j > tour.len()`, or an item index is out of bounds
/// for `distances`.
pub fn two_opt_gain(tour: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let reversal: f64 = tour[i..j]
        .windows(2)
        .map(|w| distances.get(w[1], w[0]) - distances.get(w[0], w[1]))
        .sum();
    boundary_gain(tour, distances, i, j) - reversal
}

/// Gain from the two exchanged edges alone.
fn boundary_gain(tour: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let n = tour.len();
    let a = tour[i - 1];
    let b = tour[i];
    let c = tour[j - 1];
    let d = tour[j % n];

    (distances.get(a, b) + distances.get(c, d)) - (distances.get(a, c) + distances.get(b, d))
}

/// Scans every 2-opt move of `tour` and returns the one with the largest
/// gain above [`GAIN_TOLERANCE`], or `None` if the tour is 2-optimal.
///
/// Ties go to the lexicographically lowest `(i, j)`. With the `parallel`
/// feature the scan runs on the rayon pool and returns the same move.
///
/// `tour` is not checked: like [`tour_length`], this is meant for inner
/// loops over sequences already known to be permutations (see
/// [`validate_permutation`]). A sequence with repeated or missing items
/// yields moves whose gains do not describe a tour.
///
/// # Panics
///
/// Panics if an item index is out of bounds for `distances`.
pub fn best_two_opt_move(tour: &[usize], distances: &DistanceMatrix) -> Option<TwoOptMove> {
    let n = tour.len();
    if n < 4 {
        return None;
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        (1..n - 1)
            .into_par_iter()
            .filter_map(|i| best_in_row(tour, distances, i))
            .reduce_with(prefer)
    }

    #[cfg(not(feature = "parallel"))]
    {
        (1..n - 1)
            .filter_map(|i| best_in_row(tour, distances, i))
            .reduce(prefer)
    }
}

/// Best improving move with first cut `i`.
fn best_in_row(tour: &[usize], distances: &DistanceMatrix, i: usize) -> Option<TwoOptMove> {
    let n = tour.len();
    let mut best: Option<TwoOptMove> = None;
    // backward minus forward cost of the segment tour[i..j]
    let mut reversal = 0.0;
    for j in (i + 2)..=n {
        let (x, y) = (tour[j - 2], tour[j - 1]);
        reversal += distances.get(y, x) - distances.get(x, y);
        if i == 1 && j == n {
            continue;
        }
        let gain = boundary_gain(tour, distances, i, j) - reversal;
        if gain > GAIN_TOLERANCE && best.is_none_or(|b| gain > b.gain) {
            best = Some(TwoOptMove { i, j, gain });
        }
    }
    best
}

/// Picks the larger gain, or the lower `(i, j)` on equal gains.
fn prefer(a: TwoOptMove, b: TwoOptMove) -> TwoOptMove {
    if b.gain > a.gain || (b.gain == a.gain && (b.i, b.j) < (a.i, a.j)) {
        b
    } else {
        a
    }
}

/// Improves `tour` with best-improvement 2-opt until it is 2-optimal.
///
/// # Errors
///
/// Fails if `tour` is not a permutation of `0..distances.size()`.
///
/// # Examples
///
/// ```
/// use u_sequencing::models::Location;
/// use u_sequencing::distance::DistanceMatrix;
/// use u_sequencing::evaluation::tour_cost;
/// use u_sequencing::local_search::two_opt_improve;
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(1.0, 1.0),
///     Location::new(1.0, 0.0),
///     Location::new(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations);
///
/// // Crossing tour: both diagonals
/// let initial = [0, 1, 2, 3];
/// let improved = two_opt_improve(&initial, &dm).unwrap();
/// assert!(improved.cost() < tour_cost(&initial, &dm).unwrap());
/// assert!((improved.cost() - 4.0).abs() < 1e-10);
/// ```
pub fn two_opt_improve(tour: &[usize], distances: &DistanceMatrix) -> Result<Tour> {
    two_opt_improve_with_observer(tour, distances, &mut NoopObserver)
}

/// [`two_opt_improve`] reporting each applied move to `observer`.
pub fn two_opt_improve_with_observer<O>(
    tour: &[usize],
    distances: &DistanceMatrix,
    observer: &mut O,
) -> Result<Tour>
where
    O: SearchObserver + ?Sized,
{
    validate_permutation(tour, distances.size())?;

    let mut current = tour.to_vec();
    let mut cost = tour_length(&current, distances);
    let initial_cost = cost;
    let mut steps = 0usize;

    while let Some(mv) = best_two_opt_move(&current, distances) {
        mv.apply(&mut current);
        cost = tour_length(&current, distances);
        steps += 1;
        observer.on_improving_move(steps, mv.gain, cost);
    }

    tracing::debug!(
        items = current.len(),
        initial_cost,
        cost,
        moves = steps,
        "2-opt converged"
    );
    Ok(Tour::new(current, cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SequencingError;
    use crate::models::Location;
    use crate::observer::CostHistory;

    fn pentagon() -> DistanceMatrix {
        DistanceMatrix::from_locations(&[
            Location::new(2.5, 5.0),
            Location::new(0.0, 3.0),
            Location::new(5.0, 3.0),
            Location::new(1.0, 0.0),
            Location::new(4.0, 0.0),
        ])
    }

    fn scattered(n: usize) -> DistanceMatrix {
        let locations: Vec<Location> = (0..n)
            .map(|i| Location::new((i * 37 % 101) as f64, (i * 53 % 89) as f64))
            .collect();
        DistanceMatrix::from_locations(&locations)
    }

    fn skewed(n: usize) -> DistanceMatrix {
        let costs = (0..n * n)
            .map(|k| {
                let (i, j) = (k / n, k % n);
                if i == j {
                    0.0
                } else {
                    ((i * 31 + j * 17 + i * j * 7) % 97 + 1) as f64
                }
            })
            .collect();
        DistanceMatrix::from_data(n, costs).expect("square")
    }

    #[test]
    fn test_gain_matches_cost_difference() {
        let dm = scattered(9);
        let tour: Vec<usize> = (0..9).collect();
        let before = tour_length(&tour, &dm);
        let n = tour.len();
        for i in 1..n - 1 {
            for j in (i + 2)..=n {
                if i == 1 && j == n {
                    continue;
                }
                let mut after = tour.clone();
                after[i..j].reverse();
                let gain = two_opt_gain(&tour, &dm, i, j);
                assert!(
                    (before - tour_length(&after, &dm) - gain).abs() < 1e-9,
                    "gain mismatch for move ({i}, {j})"
                );
            }
        }
    }

    #[test]
    fn test_gain_exact_on_asymmetric_matrix() {
        let dm = skewed(7);
        assert!(!dm.is_symmetric(1e-10));
        let tour = vec![3, 0, 6, 1, 5, 2, 4];
        let before = tour_length(&tour, &dm);
        let n = tour.len();
        for i in 1..n - 1 {
            for j in (i + 2)..=n {
                let mut after = tour.clone();
                after[i..j].reverse();
                let gain = two_opt_gain(&tour, &dm, i, j);
                assert!(
                    (before - tour_length(&after, &dm) - gain).abs() < 1e-9,
                    "gain mismatch for move ({i}, {j})"
                );
            }
        }
    }

    #[test]
    fn test_2opt_asymmetric_converges() {
        let dm = skewed(7);
        let starts: [Vec<usize>; 3] = [
            (0..7).collect(),
            (0..7).rev().collect(),
            vec![3, 0, 6, 1, 5, 2, 4],
        ];
        for start in starts {
            let mut history = CostHistory::new();
            let tour =
                two_opt_improve_with_observer(&start, &dm, &mut history).expect("valid tour");
            let mut prev = tour_length(&start, &dm);
            for &c in &history.move_costs {
                assert!(c < prev, "cost went from {prev} to {c}");
                prev = c;
            }
            assert!((tour.cost() - tour_length(tour.sequence(), &dm)).abs() < 1e-12);
            assert!(best_two_opt_move(tour.sequence(), &dm).is_none());
        }
    }

    #[test]
    fn test_best_move_pentagon() {
        let dm = pentagon();
        let mv = best_two_opt_move(&[0, 1, 2, 3, 4], &dm).expect("improving move exists");
        assert_eq!((mv.i, mv.j), (2, 5));
        let expected = 5.0 + 27.25_f64.sqrt() - 5.0 - 10.25_f64.sqrt();
        assert!((mv.gain - expected).abs() < 1e-10);

        let mut tour = vec![0, 1, 2, 3, 4];
        mv.apply(&mut tour);
        assert_eq!(tour, vec![0, 1, 4, 3, 2]);
    }

    #[test]
    fn test_2opt_pentagon_reaches_optimum() {
        let dm = pentagon();
        let initial_cost = tour_length(&[0, 1, 2, 3, 4], &dm);
        let tour = two_opt_improve(&[0, 1, 2, 3, 4], &dm).expect("valid tour");
        let optimum = 2.0 * 10.25_f64.sqrt() + 2.0 * 10.0_f64.sqrt() + 3.0;
        assert!(tour.cost() <= initial_cost);
        assert_eq!(tour.sequence(), &[0, 1, 3, 4, 2]);
        assert!((tour.cost() - optimum).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_result_is_locally_optimal() {
        let dm = scattered(15);
        let initial: Vec<usize> = (0..15).rev().collect();
        let tour = two_opt_improve(&initial, &dm).expect("valid tour");
        assert!(best_two_opt_move(tour.sequence(), &dm).is_none());
    }

    #[test]
    fn test_2opt_costs_strictly_decrease() {
        let dm = scattered(12);
        let initial: Vec<usize> = (0..12).collect();
        let mut history = CostHistory::new();
        let tour =
            two_opt_improve_with_observer(&initial, &dm, &mut history).expect("valid tour");
        let mut prev = tour_length(&initial, &dm);
        for &c in &history.move_costs {
            assert!(c < prev, "cost went from {prev} to {c}");
            prev = c;
        }
        assert!((prev - tour.cost()).abs() < 1e-12);
    }

    #[test]
    fn test_2opt_already_optimal() {
        let dm = pentagon();
        let tour = two_opt_improve(&[0, 2, 4, 3, 1], &dm).expect("valid tour");
        assert_eq!(tour.sequence(), &[0, 2, 4, 3, 1]);
    }

    #[test]
    fn test_2opt_small_tours_unchanged() {
        let dm = DistanceMatrix::from_locations(&[Location::new(1.0, 1.0)]);
        let tour = two_opt_improve(&[0], &dm).expect("valid tour");
        assert_eq!(tour.sequence(), &[0]);
        assert_eq!(tour.cost(), 0.0);

        let dm = scattered(3);
        let tour = two_opt_improve(&[2, 0, 1], &dm).expect("valid tour");
        assert_eq!(tour.sequence(), &[2, 0, 1]);

        let tour = two_opt_improve(&[], &DistanceMatrix::new(0)).expect("valid tour");
        assert!(tour.is_empty());
    }

    #[test]
    fn test_2opt_rejects_malformed() {
        let dm = pentagon();
        assert_eq!(
            two_opt_improve(&[0, 1, 2, 3, 3], &dm),
            Err(SequencingError::DuplicateItem { item: 3 })
        );
        assert!(two_opt_improve(&[0, 1, 2], &dm).is_err());
    }

    #[test]
    fn test_prefer_breaks_ties_lexicographically() {
        let a = TwoOptMove { i: 2, j: 5, gain: 1.0 };
        let b = TwoOptMove { i: 1, j: 4, gain: 1.0 };
        assert_eq!(prefer(a, b), b);
        assert_eq!(prefer(b, a), b);
        let c = TwoOptMove { i: 3, j: 6, gain: 2.0 };
        assert_eq!(prefer(b, c), c);
    }
}
