//! Paint-shop order type.

use serde::{Deserialize, Serialize};

/// A colour code used for setup-cost lookup.
pub type Colour = u32;

/// An order to be processed on one of the shop's machines.
///
/// The processing time of an order depends on the machine:
/// `surface / machine speed`. Finishing after `deadline` costs
/// `penalty` per unit of lateness.
///
/// # Examples
///
/// ```
/// use u_sequencing::models::Order;
///
/// let o = Order::new(0, 120.0, 2, 30.0, 5.0);
/// assert_eq!(o.colour(), 2);
/// assert_eq!(o.lateness_penalty(28.0), 0.0);
/// assert!((o.lateness_penalty(32.0) - 10.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: usize,
    surface: f64,
    colour: Colour,
    deadline: f64,
    penalty: f64,
}

impl Order {
    /// Creates a new order.
    pub fn new(id: usize, surface: f64, colour: Colour, deadline: f64, penalty: f64) -> Self {
        Self {
            id,
            surface,
            colour,
            deadline,
            penalty,
        }
    }

    /// Order ID (index into the instance's order list).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Surface to paint.
    pub fn surface(&self) -> f64 {
        self.surface
    }

    /// Colour the order is painted in.
    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// Due time.
    pub fn deadline(&self) -> f64 {
        self.deadline
    }

    /// Penalty per unit of time past the deadline.
    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    /// Penalty incurred when the order completes at `completion`.
    pub fn lateness_penalty(&self, completion: f64) -> f64 {
        (completion - self.deadline).max(0.0) * self.penalty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_new() {
        let o = Order::new(3, 50.0, 1, 20.0, 2.0);
        assert_eq!(o.id(), 3);
        assert_eq!(o.surface(), 50.0);
        assert_eq!(o.colour(), 1);
        assert_eq!(o.deadline(), 20.0);
        assert_eq!(o.penalty(), 2.0);
    }

    #[test]
    fn test_lateness_penalty() {
        let o = Order::new(0, 10.0, 0, 20.0, 3.0);
        assert_eq!(o.lateness_penalty(15.0), 0.0);
        assert_eq!(o.lateness_penalty(20.0), 0.0);
        assert!((o.lateness_penalty(25.0) - 15.0).abs() < 1e-10);
    }
}
