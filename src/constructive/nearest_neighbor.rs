//! Nearest-neighbor constructive heuristic for tours.
//!
//! Builds a tour greedily: starting from item 0, always visit the nearest
//! unvisited item. The closing edge back to item 0 is only counted in the
//! tour cost.
//!
//! # Complexity
//!
//! O(n²) where n = number of items.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for the TSP. While solution
//! quality is typically 15-25% above optimal, it provides a fast baseline.

use crate::distance::DistanceMatrix;
use crate::evaluation::tour_length;
use crate::models::Tour;
use crate::observer::{NoopObserver, SearchObserver};

/// Constructs a tour using the nearest-neighbor heuristic.
///
/// Starting from item 0, greedily appends the unvisited item closest to the
/// last one added. Ties go to the lowest item index. Deterministic.
///
/// # Examples
///
/// ```
/// use u_sequencing::models::Location;
/// use u_sequencing::distance::DistanceMatrix;
/// use u_sequencing::constructive::nearest_neighbor;
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(1.0, 0.0),
///     Location::new(0.0, 1.0),
///     Location::new(1.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations);
///
/// let tour = nearest_neighbor(&dm);
/// assert_eq!(tour.sequence(), &[0, 1, 3, 2]);
/// assert!((tour.cost() - 4.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix) -> Tour {
    nearest_neighbor_with_observer(distances, &mut NoopObserver)
}

/// [`nearest_neighbor`] reporting each appended item to `observer`.
pub fn nearest_neighbor_with_observer<O>(distances: &DistanceMatrix, observer: &mut O) -> Tour
where
    O: SearchObserver + ?Sized,
{
    let n = distances.size();
    if n == 0 {
        return Tour::empty();
    }

    // Unvisited items in ascending order, so ties resolve to the lowest index
    let mut remaining: Vec<usize> = (1..n).collect();
    let mut sequence = Vec::with_capacity(n);
    sequence.push(0);
    observer.on_item_added(0, 0.0);
    let mut current = 0;

    while let Some(next) = distances.nearest(current, &remaining) {
        remaining.retain(|&item| item != next);
        sequence.push(next);
        observer.on_item_added(next, distances.get(current, next));
        current = next;
    }

    let cost = tour_length(&sequence, distances);
    tracing::debug!(items = n, cost, "nearest-neighbor tour built");
    Tour::new(sequence, cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{validate_permutation, Location};
    use crate::observer::CostHistory;

    fn unit_square() -> DistanceMatrix {
        DistanceMatrix::from_locations(&[
            Location::new(0.0, 0.0),
            Location::new(1.0, 0.0),
            Location::new(0.0, 1.0),
            Location::new(1.0, 1.0),
        ])
    }

    #[test]
    fn test_nn_unit_square() {
        let tour = nearest_neighbor(&unit_square());
        assert_eq!(tour.sequence(), &[0, 1, 3, 2]);
        assert!((tour.cost() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_line() {
        let dm = DistanceMatrix::from_locations(&[
            Location::new(0.0, 0.0),
            Location::new(3.0, 0.0),
            Location::new(1.0, 0.0),
            Location::new(2.0, 0.0),
        ]);
        let tour = nearest_neighbor(&dm);
        assert_eq!(tour.sequence(), &[0, 2, 3, 1]);
        // 1 + 1 + 1 + 3
        assert!((tour.cost() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_covers_all_items() {
        let locations: Vec<Location> = (0..12)
            .map(|i| Location::new((i * 7 % 11) as f64, (i * 5 % 13) as f64))
            .collect();
        let dm = DistanceMatrix::from_locations(&locations);
        let tour = nearest_neighbor(&dm);
        assert!(validate_permutation(tour.sequence(), 12).is_ok());
        assert_eq!(tour.sequence()[0], 0);
    }

    #[test]
    fn test_nn_empty() {
        let tour = nearest_neighbor(&DistanceMatrix::new(0));
        assert!(tour.is_empty());
        assert_eq!(tour.cost(), 0.0);
    }

    #[test]
    fn test_nn_single_item() {
        let dm = DistanceMatrix::from_locations(&[Location::new(4.0, 2.0)]);
        let tour = nearest_neighbor(&dm);
        assert_eq!(tour.sequence(), &[0]);
        assert_eq!(tour.cost(), 0.0);
    }

    #[test]
    fn test_nn_reports_items_in_order() {
        let mut history = CostHistory::new();
        let tour = nearest_neighbor_with_observer(&unit_square(), &mut history);
        assert_eq!(history.added_items, tour.sequence());
    }
}
