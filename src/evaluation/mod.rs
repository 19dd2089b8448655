//! Cost evaluation for tours and schedules.
//!
//! - [`tour_cost`]: closed-tour length over a distance matrix
//! - [`ScheduleEvaluator`]: per-machine timing, setups, and lateness penalties

mod schedule;
mod tour;

pub use schedule::{schedule_cost, ScheduleEvaluator};
pub use tour::{evaluate_tour, tour_cost, tour_length};
