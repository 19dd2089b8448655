//! Nearest-neighbor constructive heuristic for paint-shop schedules.
//!
//! Extends the nearest-neighbor idea to parallel machines: at every step,
//! each unscheduled order is tried on each machine, and the (order, machine)
//! pair with the smallest marginal cost is committed.
//!
//! The marginal cost of a pair is the lateness penalty the order would incur
//! if processing started when the machine becomes free, plus the setup time
//! for the colour change. A machine without a colour has no setup.
//!
//! # Complexity
//!
//! O(n²m) for n orders and m machines.

use crate::error::Result;
use crate::evaluation::ScheduleEvaluator;
use crate::models::{MachineSchedule, Schedule, ShopInstance};
use crate::observer::{NoopObserver, SearchObserver};

/// Constructs a schedule with the multi-machine nearest-neighbor heuristic.
///
/// Ties go to the lowest order index, then the lowest machine index.
/// Deterministic.
///
/// # Errors
///
/// Returns [`NoMachines`](crate::error::SequencingError::NoMachines) when the
/// instance has orders but no machines, and
/// [`InvalidMachineSpeed`](crate::error::SequencingError::InvalidMachineSpeed)
/// when a machine speed is not positive and finite.
///
/// # Examples
///
/// ```
/// use u_sequencing::models::{Machine, Order, ShopInstance};
/// use u_sequencing::distance::SetupTable;
/// use u_sequencing::constructive::nearest_neighbor_schedule;
///
/// let shop = ShopInstance::new(
///     vec![
///         Order::new(0, 4.0, 0, 2.0, 10.0),
///         Order::new(1, 4.0, 0, 8.0, 10.0),
///     ],
///     vec![Machine::new(0, 1.0), Machine::new(1, 1.0)],
///     SetupTable::new(),
/// );
/// let schedule = nearest_neighbor_schedule(&shop).unwrap();
/// assert_eq!(schedule.num_scheduled(), 2);
/// ```
pub fn nearest_neighbor_schedule(instance: &ShopInstance) -> Result<Schedule> {
    nearest_neighbor_schedule_with_observer(instance, &mut NoopObserver)
}

/// [`nearest_neighbor_schedule`] reporting each committed order to `observer`.
pub fn nearest_neighbor_schedule_with_observer<O>(
    instance: &ShopInstance,
    observer: &mut O,
) -> Result<Schedule>
where
    O: SearchObserver + ?Sized,
{
    instance.validate()?;
    let n = instance.num_orders();
    let m = instance.num_machines();

    let evaluator = ScheduleEvaluator::new(instance);
    let mut machines: Vec<MachineSchedule> = instance
        .machines()
        .iter()
        .map(|machine| MachineSchedule::new(machine.id()))
        .collect();
    let mut scheduled = vec![false; n];

    for _ in 0..n {
        let mut best: Option<(usize, usize, f64)> = None;
        for (order_idx, order) in instance.orders().iter().enumerate() {
            if scheduled[order_idx] {
                continue;
            }
            for (machine_idx, ms) in machines.iter().enumerate() {
                let state = ms.state();
                let finish =
                    state.completion_time + instance.processing_time(order_idx, machine_idx);
                let cost = order.lateness_penalty(finish) + evaluator.setup_time(&state, order_idx);
                if best.is_none_or(|(_, _, best_cost)| cost < best_cost) {
                    best = Some((order_idx, machine_idx, cost));
                }
            }
        }

        let Some((order_idx, machine_idx, cost)) = best else {
            break;
        };
        let ms = &mut machines[machine_idx];
        let job = evaluator.place(&ms.state(), machine_idx, order_idx);
        ms.push_job(job, instance.orders()[order_idx].colour());
        scheduled[order_idx] = true;
        observer.on_item_added(order_idx, cost);
    }

    let mut schedule = Schedule::new();
    for ms in machines {
        schedule.add_machine(ms);
    }
    tracing::debug!(
        orders = n,
        machines = m,
        cost = schedule.total_cost(),
        "nearest-neighbor schedule built"
    );
    Ok(schedule)
}
