//! Best-improvement 2-exchange on paint-shop schedules.
//!
//! # Algorithm
//!
//! Each machine's job sequence is an open path. A move `(machine, i, j)`
//! with `i < j` reverses jobs `i..=j` on that machine. Lateness depends on
//! completion times, which shift for every job from `i` onwards, so the gain
//! of a move is the drop in the machine's re-simulated cost rather than an
//! edge difference.
//!
//! Each scan evaluates every move on every machine and applies the single
//! best one (ties → lowest `(machine, i, j)`); the search stops when no move
//! gains more than [`GAIN_TOLERANCE`].
//!
//! # Complexity
//!
//! O(Σ k³) per scan for machines with k jobs each.

use super::two_opt::GAIN_TOLERANCE;
use crate::error::Result;
use crate::evaluation::ScheduleEvaluator;
use crate::models::{Schedule, ShopInstance};
use crate::observer::{NoopObserver, SearchObserver};

/// A schedule move: reverse jobs `i..=j` on `machine`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleMove {
    /// Machine index.
    pub machine: usize,
    /// First reversed job position.
    pub i: usize,
    /// Last reversed job position.
    pub j: usize,
    /// Cost reduction of the move.
    pub gain: f64,
}

impl ScheduleMove {
    /// Applies the move to per-machine order sequences in place.
    pub fn apply(&self, sequences: &mut [Vec<usize>]) {
        sequences[self.machine][self.i..=self.j].reverse();
    }
}

/// Scans every reversal on every machine and returns the one with the
/// largest gain above [`GAIN_TOLERANCE`], or `None` if no move improves.
///
/// `sequences` is not checked: like
/// [`ScheduleEvaluator::sequences_cost`], this is meant for inner loops over
/// sequences that already passed [`ScheduleEvaluator::validate`]. Repeated or
/// missing orders yield moves whose gains do not describe a schedule.
///
/// # Panics
///
/// Panics if there are more sequences than machines or an order index is out
/// of range for the instance.
pub fn best_schedule_move(
    evaluator: &ScheduleEvaluator<'_>,
    sequences: &[Vec<usize>],
) -> Option<ScheduleMove> {
    let mut best: Option<ScheduleMove> = None;
    for (machine, seq) in sequences.iter().enumerate() {
        let k = seq.len();
        if k < 2 {
            continue;
        }
        let base = evaluator.machine_cost(machine, seq).total();
        let mut candidate = seq.clone();
        for i in 0..k - 1 {
            for j in (i + 1)..k {
                candidate[i..=j].reverse();
                let gain = base - evaluator.machine_cost(machine, &candidate).total();
                candidate[i..=j].reverse();
                if gain > GAIN_TOLERANCE && best.is_none_or(|b| gain > b.gain) {
                    best = Some(ScheduleMove { machine, i, j, gain });
                }
            }
        }
    }
    best
}

/// Improves `schedule` with best-improvement 2-exchange on each machine.
///
/// Orders never change machine; only their order on a machine does.
///
/// # Errors
///
/// Fails if `schedule` does not assign every order of `instance` exactly
/// once over its machines.
///
/// # Examples
///
/// ```
/// use u_sequencing::models::{Machine, Order, ShopInstance};
/// use u_sequencing::distance::SetupTable;
/// use u_sequencing::evaluation::ScheduleEvaluator;
/// use u_sequencing::local_search::schedule_two_opt_improve;
///
/// let shop = ShopInstance::new(
///     vec![
///         Order::new(0, 5.0, 0, 100.0, 1.0),
///         Order::new(1, 1.0, 0, 1.0, 10.0),
///     ],
///     vec![Machine::new(0, 1.0)],
///     SetupTable::new(),
/// );
/// let initial = ScheduleEvaluator::new(&shop).build_schedule(&[vec![0, 1]]).unwrap();
/// let improved = schedule_two_opt_improve(&shop, &initial).unwrap();
/// assert_eq!(improved.sequences(), vec![vec![1, 0]]);
/// ```
pub fn schedule_two_opt_improve(instance: &ShopInstance, schedule: &Schedule) -> Result<Schedule> {
    schedule_two_opt_improve_with_observer(instance, schedule, &mut NoopObserver)
}

/// [`schedule_two_opt_improve`] reporting each applied move to `observer`.
pub fn schedule_two_opt_improve_with_observer<O>(
    instance: &ShopInstance,
    schedule: &Schedule,
    observer: &mut O,
) -> Result<Schedule>
where
    O: SearchObserver + ?Sized,
{
    let evaluator = ScheduleEvaluator::new(instance);
    let mut sequences = schedule.sequences();
    evaluator.validate(&sequences)?;

    let initial_cost = evaluator.sequences_cost(&sequences).total();
    let mut steps = 0usize;

    while let Some(mv) = best_schedule_move(&evaluator, &sequences) {
        mv.apply(&mut sequences);
        steps += 1;
        observer.on_improving_move(steps, mv.gain, evaluator.sequences_cost(&sequences).total());
    }

    let improved = evaluator.build_schedule(&sequences)?;
    tracing::debug!(
        orders = instance.num_orders(),
        initial_cost,
        cost = improved.total_cost(),
        moves = steps,
        "schedule 2-exchange converged"
    );
    Ok(improved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::nearest_neighbor_schedule;
    use crate::distance::SetupTable;
    use crate::error::SequencingError;
    use crate::models::{Machine, MachineSchedule, Order};
    use crate::observer::CostHistory;

    fn rush_order_shop() -> ShopInstance {
        ShopInstance::new(
            vec![
                Order::new(0, 5.0, 0, 100.0, 1.0),
                Order::new(1, 1.0, 0, 1.0, 10.0),
            ],
            vec![Machine::new(0, 1.0)],
            SetupTable::new(),
        )
    }

    fn colour_shop() -> ShopInstance {
        ShopInstance::new(
            vec![
                Order::new(0, 2.0, 0, 20.0, 1.0),
                Order::new(1, 2.0, 1, 20.0, 1.0),
                Order::new(2, 2.0, 0, 20.0, 1.0),
                Order::new(3, 2.0, 1, 20.0, 1.0),
                Order::new(4, 3.0, 0, 4.0, 3.0),
            ],
            vec![Machine::new(0, 1.0), Machine::new(1, 1.0)],
            SetupTable::new()
                .with_setup(0, 1, 4.0)
                .with_setup(1, 0, 4.0),
        )
    }

    #[test]
    fn test_reversal_moves_rush_order_first() {
        let shop = rush_order_shop();
        let eval = ScheduleEvaluator::new(&shop);
        let initial = eval.build_schedule(&[vec![0, 1]]).expect("valid");
        // order 1 completes at 6, five units late at 10 per unit
        assert!((initial.total_cost() - 56.0).abs() < 1e-10);

        let mv = best_schedule_move(&eval, &initial.sequences()).expect("improving move");
        assert_eq!((mv.machine, mv.i, mv.j), (0, 0, 1));
        assert!((mv.gain - 50.0).abs() < 1e-10);

        let improved = schedule_two_opt_improve(&shop, &initial).expect("valid");
        assert_eq!(improved.sequences(), vec![vec![1, 0]]);
        assert!((improved.total_cost() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_groups_colours_to_save_setups() {
        let shop = colour_shop();
        let eval = ScheduleEvaluator::new(&shop);
        let initial = eval
            .build_schedule(&[vec![0, 1, 2], vec![3, 4]])
            .expect("valid");
        let improved = schedule_two_opt_improve(&shop, &initial).expect("valid");
        assert!(improved.total_cost() < initial.total_cost());
        assert!(best_schedule_move(&eval, &improved.sequences()).is_none());
        // machines keep their orders
        let mut m0 = improved.sequences()[0].clone();
        m0.sort_unstable();
        assert_eq!(m0, vec![0, 1, 2]);
    }

    #[test]
    fn test_costs_strictly_decrease() {
        let shop = colour_shop();
        let eval = ScheduleEvaluator::new(&shop);
        let initial = eval
            .build_schedule(&[vec![1, 0, 3, 2, 4], vec![]])
            .expect("valid");
        let mut history = CostHistory::new();
        let improved = schedule_two_opt_improve_with_observer(&shop, &initial, &mut history)
            .expect("valid");
        let mut prev = initial.total_cost();
        for &c in &history.move_costs {
            assert!(c < prev);
            prev = c;
        }
        assert!((prev - improved.total_cost()).abs() < 1e-10);
    }

    #[test]
    fn test_improves_constructed_schedule_without_worsening() {
        let shop = colour_shop();
        let start = nearest_neighbor_schedule(&shop).expect("has machines");
        let improved = schedule_two_opt_improve(&shop, &start).expect("valid");
        assert!(improved.total_cost() <= start.total_cost() + 1e-10);
        assert_eq!(improved.num_scheduled(), shop.num_orders());
    }

    #[test]
    fn test_rejects_duplicated_order_before_scanning() {
        let shop = rush_order_shop();
        let eval = ScheduleEvaluator::new(&shop);
        let mut machine = MachineSchedule::new(0);
        let state = machine.state();
        machine.push_job(eval.place(&state, 0, 1), 0);
        let state = machine.state();
        machine.push_job(eval.place(&state, 0, 1), 0);
        let mut schedule = Schedule::new();
        schedule.add_machine(machine);
        assert_eq!(
            schedule_two_opt_improve(&shop, &schedule),
            Err(SequencingError::DuplicateItem { item: 1 })
        );
    }

    #[test]
    fn test_rejects_foreign_schedule() {
        let shop = rush_order_shop();
        let other = colour_shop();
        let schedule = ScheduleEvaluator::new(&other)
            .build_schedule(&[vec![0, 1, 2], vec![3, 4]])
            .expect("valid for other shop");
        assert!(matches!(
            schedule_two_opt_improve(&shop, &schedule),
            Err(SequencingError::MachineCountMismatch { .. })
        ));
    }
}
