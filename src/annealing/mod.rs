//! Simulated annealing over tours and schedules.
//!
//! A single-solution trajectory search: random swap neighbors are accepted
//! when they improve, and with probability `exp(-delta / T)` when they do
//! not. The temperature `T` falls geometrically after every fixed number of
//! iterations until it reaches the configured floor.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod problem;
mod runner;

pub use config::AnnealingConfig;
pub use problem::{AnnealingProblem, ScheduleAnnealing, TourAnnealing};
pub use runner::{AnnealingResult, AnnealingRunner};
