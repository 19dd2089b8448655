//! Schedule, machine schedule, and job types.

use std::ops::{Add, AddAssign};

use super::Colour;

/// A single order placed on a machine, with its computed timing.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    /// Order being processed.
    pub order_id: usize,
    /// Time the machine starts on this order (setup included).
    pub start_time: f64,
    /// Colour-change setup time spent before processing.
    pub setup_time: f64,
    /// Time the order is finished.
    pub completion_time: f64,
    /// Lateness penalty incurred by this order.
    pub penalty: f64,
}

/// Running state of a machine: when it becomes free and which colour it
/// was last set up for.
///
/// A machine without a colour has not processed anything yet, so its first
/// order never pays a setup.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MachineState {
    /// Time at which the machine finishes its last assigned order.
    pub completion_time: f64,
    /// Colour of the last assigned order, if any.
    pub colour: Option<Colour>,
}

/// Cost of a schedule, split into its additive parts.
///
/// # Examples
///
/// ```
/// use u_sequencing::models::ScheduleCost;
///
/// let a = ScheduleCost { processing: 4.0, setup: 1.0, lateness: 0.0 };
/// let b = ScheduleCost { processing: 2.0, setup: 0.0, lateness: 3.0 };
/// assert_eq!((a + b).total(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScheduleCost {
    /// Sum of processing times.
    pub processing: f64,
    /// Sum of colour-change setup times.
    pub setup: f64,
    /// Sum of lateness penalties.
    pub lateness: f64,
}

impl ScheduleCost {
    /// Total cost.
    pub fn total(&self) -> f64 {
        self.processing + self.setup + self.lateness
    }
}

impl Add for ScheduleCost {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            processing: self.processing + rhs.processing,
            setup: self.setup + rhs.setup,
            lateness: self.lateness + rhs.lateness,
        }
    }
}

impl AddAssign for ScheduleCost {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// The ordered jobs assigned to one machine.
///
/// # Examples
///
/// ```
/// use u_sequencing::models::{Job, MachineSchedule};
///
/// let mut ms = MachineSchedule::new(0);
/// ms.push_job(
///     Job { order_id: 3, start_time: 0.0, setup_time: 0.0, completion_time: 4.0, penalty: 0.0 },
///     1,
/// );
/// assert_eq!(ms.order_ids(), vec![3]);
/// assert_eq!(ms.state().colour, Some(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MachineSchedule {
    machine_id: usize,
    jobs: Vec<Job>,
    state: MachineState,
    cost: ScheduleCost,
}

impl MachineSchedule {
    /// Creates an idle machine schedule.
    pub fn new(machine_id: usize) -> Self {
        Self {
            machine_id,
            jobs: Vec::new(),
            state: MachineState::default(),
            cost: ScheduleCost::default(),
        }
    }

    /// Appends a job and moves the machine state past it.
    pub fn push_job(&mut self, job: Job, colour: Colour) {
        self.cost += ScheduleCost {
            processing: job.completion_time - job.start_time - job.setup_time,
            setup: job.setup_time,
            lateness: job.penalty,
        };
        self.state = MachineState {
            completion_time: job.completion_time,
            colour: Some(colour),
        };
        self.jobs.push(job);
    }

    /// Machine this schedule belongs to.
    pub fn machine_id(&self) -> usize {
        self.machine_id
    }

    /// Jobs in processing order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Order IDs in processing order.
    pub fn order_ids(&self) -> Vec<usize> {
        self.jobs.iter().map(|j| j.order_id).collect()
    }

    /// Current machine state.
    pub fn state(&self) -> MachineState {
        self.state
    }

    /// Cost accumulated on this machine.
    pub fn cost(&self) -> ScheduleCost {
        self.cost
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Returns `true` if no order is assigned to this machine.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// A complete schedule: one job sequence per machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schedule {
    machines: Vec<MachineSchedule>,
}

impl Schedule {
    /// Creates a schedule with no machines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a machine schedule.
    pub fn add_machine(&mut self, machine: MachineSchedule) {
        self.machines.push(machine);
    }

    /// Per-machine schedules, in machine order.
    pub fn machines(&self) -> &[MachineSchedule] {
        &self.machines
    }

    /// Order IDs per machine.
    pub fn sequences(&self) -> Vec<Vec<usize>> {
        self.machines.iter().map(|m| m.order_ids()).collect()
    }

    /// Cost summed over all machines.
    pub fn cost(&self) -> ScheduleCost {
        self.machines
            .iter()
            .fold(ScheduleCost::default(), |acc, m| acc + m.cost())
    }

    /// Total cost.
    pub fn total_cost(&self) -> f64 {
        self.cost().total()
    }

    /// Number of scheduled orders across all machines.
    pub fn num_scheduled(&self) -> usize {
        self.machines.iter().map(|m| m.len()).sum()
    }
}
