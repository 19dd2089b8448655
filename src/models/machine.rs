//! Machine type for paint-shop instances.

use serde::{Deserialize, Serialize};

use super::Order;

/// A parallel machine that processes orders one at a time.
///
/// # Examples
///
/// ```
/// use u_sequencing::models::{Machine, Order};
///
/// let m = Machine::new(0, 20.0);
/// let o = Order::new(0, 100.0, 1, 10.0, 1.0);
/// assert!((m.processing_time(&o) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    id: usize,
    speed: f64,
}

impl Machine {
    /// Creates a machine with the given ID and speed (surface per unit time).
    pub fn new(id: usize, speed: f64) -> Self {
        Self { id, speed }
    }

    /// Machine ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Surface painted per unit of time.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Time needed to paint `order` on this machine.
    pub fn processing_time(&self, order: &Order) -> f64 {
        order.surface() / self.speed
    }
}
