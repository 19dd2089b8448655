//! Paint-shop instance.

use serde::{Deserialize, Serialize};

use super::{Machine, Order};
use crate::distance::SetupTable;
use crate::error::{Result, SequencingError};

/// A paint-shop scheduling instance: orders, parallel machines, and the
/// colour-change setup table.
///
/// Orders and machines are identified by their position in these lists.
/// An instance is read-only once built and can be loaded with serde.
///
/// # Examples
///
/// ```
/// use u_sequencing::models::{Machine, Order, ShopInstance};
/// use u_sequencing::distance::SetupTable;
///
/// let shop = ShopInstance::new(
///     vec![Order::new(0, 40.0, 1, 10.0, 2.0)],
///     vec![Machine::new(0, 20.0)],
///     SetupTable::new().with_setup(0, 1, 3.0),
/// );
/// assert_eq!(shop.num_orders(), 1);
/// assert!((shop.processing_time(0, 0) - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopInstance {
    orders: Vec<Order>,
    machines: Vec<Machine>,
    #[serde(default)]
    setups: SetupTable,
}

impl ShopInstance {
    /// Creates an instance.
    pub fn new(orders: Vec<Order>, machines: Vec<Machine>, setups: SetupTable) -> Self {
        Self {
            orders,
            machines,
            setups,
        }
    }

    /// All orders.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// All machines.
    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    /// Colour-change setup table.
    pub fn setups(&self) -> &SetupTable {
        &self.setups
    }

    /// Number of orders.
    pub fn num_orders(&self) -> usize {
        self.orders.len()
    }

    /// Number of machines.
    pub fn num_machines(&self) -> usize {
        self.machines.len()
    }

    /// Checks that the orders can be processed: at least one machine when
    /// there are orders, and every machine speed positive and finite.
    ///
    /// Instances loaded with serde are not checked on load; every schedule
    /// evaluation and search calls this first.
    pub fn validate(&self) -> Result<()> {
        if self.machines.is_empty() && !self.orders.is_empty() {
            return Err(SequencingError::NoMachines);
        }
        for (machine, m) in self.machines.iter().enumerate() {
            let speed = m.speed();
            if !(speed.is_finite() && speed > 0.0) {
                return Err(SequencingError::InvalidMachineSpeed { machine, speed });
            }
        }
        Ok(())
    }

    /// Processing time of order `order` on machine `machine`.
    pub fn processing_time(&self, order: usize, machine: usize) -> f64 {
        self.machines[machine].processing_time(&self.orders[order])
    }
}
