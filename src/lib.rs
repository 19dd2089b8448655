//! # u-sequencing
//!
//! Sequencing optimization library: cost models, a greedy constructor,
//! best-improvement 2-opt, and simulated annealing for closed tours over a
//! distance matrix and for multi-machine paint-shop schedules with colour
//! setups and lateness penalties.
//!
//! ## Modules
//!
//! - [`models`]: Domain types (Location, Order, Machine, Tour, Schedule, ShopInstance)
//! - [`distance`]: Distance matrix and colour setup table
//! - [`evaluation`]: Tour length and schedule cost evaluation
//! - [`constructive`]: Nearest-neighbor tour and schedule construction
//! - [`local_search`]: Best-improvement 2-opt on tours and schedules
//! - [`annealing`]: Simulated annealing with swap neighborhoods
//! - [`observer`]: Progress callbacks for all searches
//! - [`error`]: Error type shared by all fallible operations
//!
//! ## Example
//!
//! ```
//! use u_sequencing::models::Location;
//! use u_sequencing::distance::DistanceMatrix;
//! use u_sequencing::constructive::nearest_neighbor;
//! use u_sequencing::local_search::two_opt_improve;
//!
//! let locations = vec![
//!     Location::new(2.5, 5.0),
//!     Location::new(0.0, 3.0),
//!     Location::new(5.0, 3.0),
//!     Location::new(1.0, 0.0),
//!     Location::new(4.0, 0.0),
//! ];
//! let dm = DistanceMatrix::from_locations(&locations);
//!
//! let start = nearest_neighbor(&dm);
//! let improved = two_opt_improve(start.sequence(), &dm).unwrap();
//! assert!(improved.cost() <= start.cost());
//! ```

pub mod annealing;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod observer;

pub use error::{Result, SequencingError};
