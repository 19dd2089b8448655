//! Domain model types for sequencing problems.
//!
//! Provides locations for routing tours, orders and machines for paint-shop
//! schedules, and the solution types: closed tours and per-machine job
//! sequences with explicit machine state.

mod location;
mod machine;
mod order;
mod schedule;
mod shop;
mod tour;

pub use location::Location;
pub use machine::Machine;
pub use order::{Colour, Order};
pub use schedule::{Job, MachineSchedule, MachineState, Schedule, ScheduleCost};
pub use shop::ShopInstance;
pub use tour::{validate_permutation, Tour};
pub(crate) use tour::validate_cover;
