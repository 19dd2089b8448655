//! Progress observers for the search algorithms.
//!
//! Every constructor and search accepts an observer that receives progress
//! events. Observers only watch: the algorithms produce the same result with
//! any observer, including [`NoopObserver`].

/// One annealing trace record: `(iteration, current cost, best cost, temperature)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    /// Iteration count (0 = initial solution).
    pub iteration: usize,
    /// Cost of the current solution after this iteration.
    pub current_cost: f64,
    /// Best cost seen so far.
    pub best_cost: f64,
    /// Temperature in effect during this iteration.
    pub temperature: f64,
}

/// Receives progress events from constructors and searches.
///
/// All methods default to doing nothing, so implementors override only the
/// events they care about.
pub trait SearchObserver {
    /// A constructor appended `item` at a marginal cost of `cost`.
    fn on_item_added(&mut self, item: usize, cost: f64) {
        let _ = (item, cost);
    }

    /// A local search applied its `step`-th improving move.
    ///
    /// `gain` is the cost reduction of the move and `cost` the total cost
    /// after applying it.
    fn on_improving_move(&mut self, step: usize, gain: f64, cost: f64) {
        let _ = (step, gain, cost);
    }

    /// Simulated annealing finished one iteration.
    fn on_annealing_step(&mut self, point: &TracePoint) {
        let _ = point;
    }

    /// Simulated annealing found a new best solution.
    fn on_new_best(&mut self, iteration: usize, cost: f64) {
        let _ = (iteration, cost);
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Observer that forwards every event to `tracing` at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_item_added(&mut self, item: usize, cost: f64) {
        tracing::trace!(item, cost, "item added");
    }

    fn on_improving_move(&mut self, step: usize, gain: f64, cost: f64) {
        tracing::trace!(step, gain, cost, "improving move applied");
    }

    fn on_annealing_step(&mut self, point: &TracePoint) {
        tracing::trace!(
            iteration = point.iteration,
            current = point.current_cost,
            best = point.best_cost,
            temperature = point.temperature,
            "annealing step"
        );
    }

    fn on_new_best(&mut self, iteration: usize, cost: f64) {
        tracing::trace!(iteration, cost, "new best solution");
    }
}

/// Observer that records the cost sequences it sees.
#[derive(Debug, Clone, Default)]
pub struct CostHistory {
    /// Total cost after each improving move of a local search.
    pub move_costs: Vec<f64>,
    /// Best cost each time annealing improved on it.
    pub best_costs: Vec<f64>,
    /// Items in the order a constructor appended them.
    pub added_items: Vec<usize>,
}

impl CostHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchObserver for CostHistory {
    fn on_item_added(&mut self, item: usize, _cost: f64) {
        self.added_items.push(item);
    }

    fn on_improving_move(&mut self, _step: usize, _gain: f64, cost: f64) {
        self.move_costs.push(cost);
    }

    fn on_new_best(&mut self, _iteration: usize, cost: f64) {
        self.best_costs.push(cost);
    }
}
