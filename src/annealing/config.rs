//! Annealing configuration.

use crate::error::{Result, SequencingError};

/// Configuration for a simulated annealing run.
///
/// Temperature starts at `initial_temperature`, is multiplied by
/// `cooling_rate` after every `iterations_per_temperature` iterations, and
/// the run stops once it is no longer above `min_temperature`.
///
/// # Examples
///
/// ```
/// use u_sequencing::annealing::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(50.0)
///     .with_cooling_rate(0.95)
///     .with_iterations_per_temperature(200)
///     .with_min_temperature(0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealingConfig {
    /// Starting temperature. Higher values accept more worsening moves.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Number of iterations at each temperature level.
    pub iterations_per_temperature: usize,

    /// The run stops when the temperature drops to this value.
    pub min_temperature: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Keep a per-iteration trace in the result.
    pub record_trace: bool,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling_rate: 0.995,
            iterations_per_temperature: 1000,
            min_temperature: 1e-3,
            seed: None,
            record_trace: false,
        }
    }
}

impl AnnealingConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    /// Number of temperature levels a run goes through.
    ///
    /// Zero when the configuration does not validate.
    pub fn temperature_levels(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        let mut levels = 0;
        let mut t = self.initial_temperature;
        while t > self.min_temperature {
            levels += 1;
            t *= self.cooling_rate;
        }
        levels
    }

    /// Validates the configuration.
    ///
    /// A positive `min_temperature` keeps `exp(-delta / T)` finite and
    /// guarantees the run terminates.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(SequencingError::InvalidConfig(
                "initial_temperature must be positive and finite".into(),
            ));
        }
        if !self.min_temperature.is_finite() || self.min_temperature <= 0.0 {
            return Err(SequencingError::InvalidConfig(
                "min_temperature must be positive and finite".into(),
            ));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(SequencingError::InvalidConfig(
                "min_temperature must be less than initial_temperature".into(),
            ));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(SequencingError::InvalidConfig(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if self.iterations_per_temperature == 0 {
            return Err(SequencingError::InvalidConfig(
                "iterations_per_temperature must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
