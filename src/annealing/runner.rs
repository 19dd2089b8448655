//! Annealing execution loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::AnnealingConfig;
use super::problem::AnnealingProblem;
use crate::error::Result;
use crate::observer::{NoopObserver, SearchObserver, TracePoint};

/// Result of a simulated annealing run.
#[derive(Debug, Clone)]
pub struct AnnealingResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Per-iteration trace, starting with the initial solution at iteration 0.
    /// Empty unless [`AnnealingConfig::record_trace`] is set.
    pub trace: Vec<TracePoint>,
}

impl<S: Clone> AnnealingResult<S> {
    /// Fraction of iterations whose neighbor was accepted.
    pub fn acceptance_ratio(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.accepted_moves as f64 / self.iterations as f64
        }
    }
}

/// Executes simulated annealing.
pub struct AnnealingRunner;

impl AnnealingRunner {
    /// Runs annealing from `initial` with an RNG seeded from `config.seed`
    /// (or from entropy when unset).
    ///
    /// # Errors
    ///
    /// Returns [`SequencingError::InvalidConfig`](crate::error::SequencingError::InvalidConfig)
    /// if the configuration does not validate.
    pub fn run<P: AnnealingProblem>(
        problem: &P,
        initial: P::Solution,
        config: &AnnealingConfig,
    ) -> Result<AnnealingResult<P::Solution>> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(problem, initial, config, &mut rng, &mut NoopObserver)
    }

    /// Runs annealing from `initial` drawing from `rng` and reporting to
    /// `observer`.
    ///
    /// `config.seed` is ignored; the caller owns the randomness.
    pub fn run_with_rng<P, R, O>(
        problem: &P,
        initial: P::Solution,
        config: &AnnealingConfig,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<AnnealingResult<P::Solution>>
    where
        P: AnnealingProblem,
        R: Rng,
        O: SearchObserver + ?Sized,
    {
        config.validate()?;

        let mut current = initial;
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;
        let initial_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut trace = Vec::new();
        if config.record_trace {
            trace.push(TracePoint {
                iteration: 0,
                current_cost,
                best_cost,
                temperature,
            });
        }

        while temperature > config.min_temperature {
            for _ in 0..config.iterations_per_temperature {
                let neighbor = problem.neighbor(&current, rng);
                let neighbor_cost = problem.cost(&neighbor);
                let delta = neighbor_cost - current_cost;

                // Metropolis acceptance criterion
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    rng.random::<f64>() < (-delta / temperature).exp()
                };

                iterations += 1;

                if accept {
                    current = neighbor;
                    current_cost = neighbor_cost;
                    accepted_moves += 1;

                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                        observer.on_new_best(iterations, best_cost);
                    }
                }

                let point = TracePoint {
                    iteration: iterations,
                    current_cost,
                    best_cost,
                    temperature,
                };
                observer.on_annealing_step(&point);
                if config.record_trace {
                    trace.push(point);
                }
            }

            temperature *= config.cooling_rate;
        }

        tracing::debug!(
            iterations,
            initial_cost,
            best_cost,
            accepted_moves,
            improving_moves,
            final_temperature = temperature,
            "simulated annealing finished"
        );

        Ok(AnnealingResult {
            best,
            best_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            trace,
        })
    }
}
