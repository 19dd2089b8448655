//! Random tour generator.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::evaluation::tour_length;
use crate::models::Tour;

/// Generates a uniformly random tour over all items of `distances`.
///
/// The caller supplies the random number generator, so a seeded generator
/// gives a reproducible tour.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_sequencing::distance::DistanceMatrix;
/// use u_sequencing::constructive::random_tour;
///
/// let dm = DistanceMatrix::new(6);
/// let a = random_tour(&dm, &mut StdRng::seed_from_u64(7));
/// let b = random_tour(&dm, &mut StdRng::seed_from_u64(7));
/// assert_eq!(a, b);
/// ```
pub fn random_tour<R: Rng>(distances: &DistanceMatrix, rng: &mut R) -> Tour {
    let mut sequence: Vec<usize> = (0..distances.size()).collect();
    sequence.shuffle(rng);
    let cost = tour_length(&sequence, distances);
    tracing::debug!(items = sequence.len(), cost, "random tour generated");
    Tour::new(sequence, cost)
}
