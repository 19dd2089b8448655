//! Schedule evaluator that computes machine timing, setups, and lateness.

use crate::error::{Result, SequencingError};
use crate::models::{
    validate_cover, Job, MachineSchedule, MachineState, Schedule, ScheduleCost, ShopInstance,
};

/// Evaluates job sequences on the machines of a paint shop.
///
/// Orders on a machine are processed back to back. Before each order the
/// machine is set up for its colour; the setup time comes from the
/// instance's setup table and is only charged when the machine already has
/// a colour (its first order is free). An order finishing after its
/// deadline pays `(completion - deadline) * penalty`.
///
/// # Examples
///
/// ```
/// use u_sequencing::models::{Machine, Order, ShopInstance};
/// use u_sequencing::distance::SetupTable;
/// use u_sequencing::evaluation::ScheduleEvaluator;
///
/// let shop = ShopInstance::new(
///     vec![
///         Order::new(0, 4.0, 0, 10.0, 1.0),
///         Order::new(1, 2.0, 1, 5.0, 3.0),
///     ],
///     vec![Machine::new(0, 1.0)],
///     SetupTable::new().with_setup(0, 1, 2.0),
/// );
/// let evaluator = ScheduleEvaluator::new(&shop);
/// let schedule = evaluator.build_schedule(&[vec![0, 1]]).unwrap();
/// // order 1 completes at 4 + 2 (setup) + 2 = 8, three units late
/// assert!((schedule.cost().lateness - 9.0).abs() < 1e-10);
/// assert!((schedule.total_cost() - 17.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScheduleEvaluator<'a> {
    instance: &'a ShopInstance,
}

impl<'a> ScheduleEvaluator<'a> {
    /// Creates a new evaluator for the given instance.
    pub fn new(instance: &'a ShopInstance) -> Self {
        Self { instance }
    }

    /// The instance being evaluated.
    pub fn instance(&self) -> &'a ShopInstance {
        self.instance
    }

    /// Setup time for putting `order` on a machine in `state`.
    ///
    /// Zero when the machine has no colour yet.
    pub fn setup_time(&self, state: &MachineState, order: usize) -> f64 {
        let colour = self.instance.orders()[order].colour();
        state
            .colour
            .map_or(0.0, |prev| self.instance.setups().get(prev, colour))
    }

    /// Computes the job produced by running `order` next on `machine`.
    pub fn place(&self, state: &MachineState, machine: usize, order: usize) -> Job {
        let setup_time = self.setup_time(state, order);
        let start_time = state.completion_time;
        let completion_time =
            start_time + setup_time + self.instance.processing_time(order, machine);
        Job {
            order_id: order,
            start_time,
            setup_time,
            completion_time,
            penalty: self.instance.orders()[order].lateness_penalty(completion_time),
        }
    }

    /// Builds the schedule of a single machine from an order sequence.
    ///
    /// Does not check the sequence against the rest of the schedule.
    pub fn build_machine(&self, machine: usize, order_ids: &[usize]) -> MachineSchedule {
        let mut ms = MachineSchedule::new(self.instance.machines()[machine].id());
        for &oid in order_ids {
            let job = self.place(&ms.state(), machine, oid);
            ms.push_job(job, self.instance.orders()[oid].colour());
        }
        ms
    }

    /// Cost of running `order_ids` on `machine`, without building jobs.
    pub fn machine_cost(&self, machine: usize, order_ids: &[usize]) -> ScheduleCost {
        let mut state = MachineState::default();
        let mut cost = ScheduleCost::default();
        for &oid in order_ids {
            let job = self.place(&state, machine, oid);
            cost += ScheduleCost {
                processing: self.instance.processing_time(oid, machine),
                setup: job.setup_time,
                lateness: job.penalty,
            };
            state = MachineState {
                completion_time: job.completion_time,
                colour: Some(self.instance.orders()[oid].colour()),
            };
        }
        cost
    }

    /// Checks the instance (see [`ShopInstance::validate`]), then that
    /// `sequences` has one entry per machine and assigns every order exactly
    /// once.
    pub fn validate(&self, sequences: &[Vec<usize>]) -> Result<()> {
        self.instance.validate()?;
        let num_orders = self.instance.num_orders();
        if sequences.len() != self.instance.num_machines() {
            return Err(SequencingError::MachineCountMismatch {
                expected: self.instance.num_machines(),
                actual: sequences.len(),
            });
        }
        let assigned: usize = sequences.iter().map(Vec::len).sum();
        if assigned != num_orders {
            return Err(SequencingError::LengthMismatch {
                expected: num_orders,
                actual: assigned,
            });
        }
        validate_cover(sequences.iter().flatten().copied(), num_orders)
    }

    /// Builds a full schedule from per-machine order sequences.
    ///
    /// # Errors
    ///
    /// Fails if the sequences are not a partition of all orders over the
    /// instance's machines.
    pub fn build_schedule(&self, sequences: &[Vec<usize>]) -> Result<Schedule> {
        self.validate(sequences)?;
        let mut schedule = Schedule::new();
        for (m, seq) in sequences.iter().enumerate() {
            schedule.add_machine(self.build_machine(m, seq));
        }
        Ok(schedule)
    }

    /// Cost of per-machine order sequences, after validating them.
    pub fn evaluate(&self, sequences: &[Vec<usize>]) -> Result<ScheduleCost> {
        self.validate(sequences)?;
        Ok(self.sequences_cost(sequences))
    }

    /// Cost of per-machine order sequences without validation.
    pub fn sequences_cost(&self, sequences: &[Vec<usize>]) -> ScheduleCost {
        sequences
            .iter()
            .enumerate()
            .fold(ScheduleCost::default(), |acc, (m, seq)| {
                acc + self.machine_cost(m, seq)
            })
    }
}

/// Computes the cost of per-machine order sequences on `instance`.
///
/// Shorthand for [`ScheduleEvaluator::evaluate`].
pub fn schedule_cost(instance: &ShopInstance, sequences: &[Vec<usize>]) -> Result<ScheduleCost> {
    ScheduleEvaluator::new(instance).evaluate(sequences)
}
