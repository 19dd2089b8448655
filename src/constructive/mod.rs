//! Constructive heuristics for building initial solutions.
//!
//! - [`nearest_neighbor`]: Greedy nearest-neighbor tour from item 0, O(n²)
//! - [`nearest_neighbor_schedule`]: Greedy (order, machine) assignment by marginal cost, O(n²m)
//! - [`random_tour`]: Uniformly random permutation, O(n)

mod nearest_neighbor;
mod nn_schedule;
mod random;

pub use nearest_neighbor::{nearest_neighbor, nearest_neighbor_with_observer};
pub use nn_schedule::{nearest_neighbor_schedule, nearest_neighbor_schedule_with_observer};
pub use random::random_tour;
