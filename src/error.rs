//! Error types for sequencing operations.
//!
//! Malformed solutions are contract violations: every evaluator and search
//! entry point checks its input up front and returns one of these errors
//! instead of producing a silently wrong cost.

use thiserror::Error;

/// Result type alias for sequencing operations.
pub type Result<T> = std::result::Result<T, SequencingError>;

/// Unified error type for all sequencing operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequencingError {
    /// The solution does not cover the instance exactly.
    #[error("solution has {actual} positions but the instance has {expected} items")]
    LengthMismatch {
        /// Number of items in the instance.
        expected: usize,
        /// Number of positions in the solution.
        actual: usize,
    },

    /// A solution position refers to an item the instance does not have.
    #[error("item {item} is out of range for an instance of {size} items")]
    ItemOutOfRange {
        /// Offending item index.
        item: usize,
        /// Number of items in the instance.
        size: usize,
    },

    /// An item occupies more than one position.
    #[error("item {item} appears more than once in the solution")]
    DuplicateItem {
        /// Offending item index.
        item: usize,
    },

    /// A schedule lists a different number of machine sequences than the instance has machines.
    #[error("schedule has {actual} machine sequences but the instance has {expected} machines")]
    MachineCountMismatch {
        /// Number of machines in the instance.
        expected: usize,
        /// Number of sequences supplied.
        actual: usize,
    },

    /// A machine cannot process anything in finite time.
    #[error("machine {machine} has speed {speed}; speeds must be positive and finite")]
    InvalidMachineSpeed {
        /// Index of the machine in the instance.
        machine: usize,
        /// The rejected speed.
        speed: f64,
    },

    /// Orders exist but no machine can process them.
    #[error("instance has orders but no machines")]
    NoMachines,

    /// Annealing parameters rejected by validation.
    #[error("invalid annealing configuration: {0}")]
    InvalidConfig(String),
}
