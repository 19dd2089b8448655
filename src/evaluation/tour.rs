//! Closed-tour cost.

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::{validate_permutation, Tour};

/// Computes the cost of a closed tour, including the edge from the last item
/// back to the first.
///
/// The result does not depend on which rotation of the cycle is passed in.
///
/// # Errors
///
/// Fails if `sequence` is not a permutation of `0..distances.size()`.
///
/// # Examples
///
/// ```
/// use u_sequencing::models::Location;
/// use u_sequencing::distance::DistanceMatrix;
/// use u_sequencing::evaluation::tour_cost;
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(1.0, 0.0),
///     Location::new(1.0, 1.0),
///     Location::new(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations);
/// let cost = tour_cost(&[0, 1, 2, 3], &dm).unwrap();
/// assert!((cost - 4.0).abs() < 1e-10);
/// assert!(tour_cost(&[0, 1, 1, 3], &dm).is_err());
/// ```
pub fn tour_cost(sequence: &[usize], distances: &DistanceMatrix) -> Result<f64> {
    validate_permutation(sequence, distances.size())?;
    Ok(tour_length(sequence, distances))
}

/// Validates `sequence` and packages it with its cost.
pub fn evaluate_tour(sequence: Vec<usize>, distances: &DistanceMatrix) -> Result<Tour> {
    let cost = tour_cost(&sequence, distances)?;
    Ok(Tour::new(sequence, cost))
}

/// Closed-tour cost without the permutation check.
///
/// Intended for inner loops over sequences already known to be valid.
/// An empty sequence costs 0.
///
/// # Panics
///
/// Panics if an index is out of bounds for `distances`.
pub fn tour_length(sequence: &[usize], distances: &DistanceMatrix) -> f64 {
    let n = sequence.len();
    (0..n)
        .map(|i| distances.get(sequence[i], sequence[(i + 1) % n]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SequencingError;
    use crate::models::Location;

    fn pentagon() -> DistanceMatrix {
        DistanceMatrix::from_locations(&[
            Location::new(2.5, 5.0),
            Location::new(0.0, 3.0),
            Location::new(5.0, 3.0),
            Location::new(1.0, 0.0),
            Location::new(4.0, 0.0),
        ])
    }

    #[test]
    fn test_tour_cost_includes_closing_edge() {
        let dm = pentagon();
        let cost = tour_cost(&[0, 1, 2, 3, 4], &dm).expect("valid tour");
        let expected = 10.25_f64.sqrt() + 5.0 + 5.0 + 3.0 + 27.25_f64.sqrt();
        assert!((cost - expected).abs() < 1e-10);
    }

    #[test]
    fn test_tour_cost_rotation_invariant() {
        let dm = pentagon();
        let a = tour_cost(&[0, 1, 2, 3, 4], &dm).expect("valid");
        let b = tour_cost(&[2, 3, 4, 0, 1], &dm).expect("valid");
        let c = tour_cost(&[4, 0, 1, 2, 3], &dm).expect("valid");
        assert!((a - b).abs() < 1e-10);
        assert!((a - c).abs() < 1e-10);
    }

    #[test]
    fn test_tour_cost_reflection_invariant() {
        let dm = pentagon();
        let a = tour_cost(&[0, 1, 2, 3, 4], &dm).expect("valid");
        let b = tour_cost(&[4, 3, 2, 1, 0], &dm).expect("valid");
        assert!((a - b).abs() < 1e-10);
    }

    #[test]
    fn test_tour_cost_rejects_malformed() {
        let dm = pentagon();
        assert_eq!(
            tour_cost(&[0, 1, 2, 2, 4], &dm),
            Err(SequencingError::DuplicateItem { item: 2 })
        );
        assert!(matches!(
            tour_cost(&[0, 1, 2], &dm),
            Err(SequencingError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_tour_cost_degenerate() {
        let empty = DistanceMatrix::new(0);
        assert_eq!(tour_cost(&[], &empty).expect("valid"), 0.0);

        let single = DistanceMatrix::from_locations(&[Location::new(7.0, 7.0)]);
        assert_eq!(tour_cost(&[0], &single).expect("valid"), 0.0);
    }

    #[test]
    fn test_evaluate_tour() {
        let dm = pentagon();
        let tour = evaluate_tour(vec![0, 2, 4, 3, 1], &dm).expect("valid");
        assert_eq!(tour.len(), 5);
        assert!((tour.cost() - tour_length(&[0, 2, 4, 3, 1], &dm)).abs() < 1e-12);
    }
}
