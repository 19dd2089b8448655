//! Annealing problem trait and the tour/schedule neighborhoods.

use rand::Rng;

use super::config::AnnealingConfig;
use super::runner::{AnnealingResult, AnnealingRunner};
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::evaluation::{tour_length, ScheduleEvaluator};
use crate::models::{validate_permutation, Schedule, ShopInstance, Tour};
use crate::observer::SearchObserver;

/// Defines a simulated annealing problem.
///
/// The implementor supplies cost evaluation and neighbor generation; the
/// [`AnnealingRunner`] handles temperature, acceptance, and best-so-far
/// tracking. Costs are minimized.
pub trait AnnealingProblem {
    /// The solution representation type.
    type Solution: Clone;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbor of `solution`, leaving `solution` untouched.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}

/// Draws two distinct positions in `0..len` uniformly. `len` must be at least 2.
fn two_distinct_positions<R: Rng>(len: usize, rng: &mut R) -> (usize, usize) {
    let i = rng.random_range(0..len);
    let mut j = rng.random_range(0..len - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}

/// Tour annealing: neighbors swap the items at two random positions.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_sequencing::models::Location;
/// use u_sequencing::distance::DistanceMatrix;
/// use u_sequencing::annealing::{AnnealingConfig, TourAnnealing};
/// use u_sequencing::observer::NoopObserver;
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(1.0, 1.0),
///     Location::new(1.0, 0.0),
///     Location::new(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations);
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(5.0)
///     .with_cooling_rate(0.9)
///     .with_iterations_per_temperature(50)
///     .with_min_temperature(0.01);
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let (tour, result) = TourAnnealing::new(&dm)
///     .solve(&[0, 1, 2, 3], &config, &mut rng, &mut NoopObserver)
///     .unwrap();
/// assert!((tour.cost() - 4.0).abs() < 1e-10);
/// assert!(result.accepted_moves > 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TourAnnealing<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> TourAnnealing<'a> {
    /// Creates the tour problem over `distances`.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Anneals from `initial` and returns the best tour with the run result.
    ///
    /// # Errors
    ///
    /// Fails if `initial` is not a permutation of the matrix items or the
    /// configuration is invalid.
    pub fn solve<R, O>(
        &self,
        initial: &[usize],
        config: &AnnealingConfig,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<(Tour, AnnealingResult<Vec<usize>>)>
    where
        R: Rng,
        O: SearchObserver + ?Sized,
    {
        validate_permutation(initial, self.distances.size())?;
        let result = AnnealingRunner::run_with_rng(self, initial.to_vec(), config, rng, observer)?;
        Ok((result.to_tour(), result))
    }
}

impl AnnealingProblem for TourAnnealing<'_> {
    type Solution = Vec<usize>;

    fn cost(&self, tour: &Vec<usize>) -> f64 {
        tour_length(tour, self.distances)
    }

    fn neighbor<R: Rng>(&self, tour: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        let mut next = tour.clone();
        if next.len() >= 2 {
            let (i, j) = two_distinct_positions(next.len(), rng);
            next.swap(i, j);
        }
        next
    }
}

impl AnnealingResult<Vec<usize>> {
    /// The best tour found, with its cost.
    pub fn to_tour(&self) -> Tour {
        Tour::new(self.best.clone(), self.best_cost)
    }
}

/// Schedule annealing: neighbors swap the orders in two random job slots,
/// which may sit on different machines.
///
/// Machines keep their number of jobs; orders move between them only by
/// trading places.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleAnnealing<'a> {
    evaluator: ScheduleEvaluator<'a>,
}

impl<'a> ScheduleAnnealing<'a> {
    /// Creates the schedule problem for `instance`.
    pub fn new(instance: &'a ShopInstance) -> Self {
        Self {
            evaluator: ScheduleEvaluator::new(instance),
        }
    }

    /// Anneals from `initial` and returns the best schedule with the run
    /// result.
    ///
    /// # Errors
    ///
    /// Fails if `initial` does not assign every order exactly once or the
    /// configuration is invalid.
    pub fn solve<R, O>(
        &self,
        initial: &Schedule,
        config: &AnnealingConfig,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<(Schedule, AnnealingResult<Vec<Vec<usize>>>)>
    where
        R: Rng,
        O: SearchObserver + ?Sized,
    {
        let sequences = initial.sequences();
        self.evaluator.validate(&sequences)?;
        let result = AnnealingRunner::run_with_rng(self, sequences, config, rng, observer)?;
        let schedule = self.evaluator.build_schedule(&result.best)?;
        Ok((schedule, result))
    }
}

impl AnnealingProblem for ScheduleAnnealing<'_> {
    type Solution = Vec<Vec<usize>>;

    fn cost(&self, sequences: &Vec<Vec<usize>>) -> f64 {
        self.evaluator.sequences_cost(sequences).total()
    }

    fn neighbor<R: Rng>(&self, sequences: &Vec<Vec<usize>>, rng: &mut R) -> Vec<Vec<usize>> {
        let mut next = sequences.clone();
        let slots: Vec<(usize, usize)> = next
            .iter()
            .enumerate()
            .flat_map(|(m, seq)| (0..seq.len()).map(move |i| (m, i)))
            .collect();
        if slots.len() >= 2 {
            let (p, q) = two_distinct_positions(slots.len(), rng);
            let (ma, ia) = slots[p];
            let (mb, ib) = slots[q];
            let a = next[ma][ia];
            next[ma][ia] = next[mb][ib];
            next[mb][ib] = a;
        }
        next
    }
}
