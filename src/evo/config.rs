//! Evolution configuration.
//!
//! [`EvoConfig`] holds the parameters that control the scheduling loop.

use super::error::EvoError;
use std::time::Duration;

/// When the evolution loop halts.
///
/// Both variants are checked between steps only; a step in progress is
/// never interrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopCondition {
    /// Stop after this many steps.
    Iterations(usize),
    /// Stop once this much wall-clock time has elapsed.
    TimeLimit(Duration),
}

/// Configuration for the evolution loop.
///
/// # Defaults
///
/// ```
/// use std::time::Duration;
/// use u_evo::evo::{EvoConfig, StopCondition};
///
/// let config = EvoConfig::default();
/// assert_eq!(config.stop, StopCondition::TimeLimit(Duration::from_secs(300)));
/// assert_eq!(config.dom_interval, 100);
/// assert_eq!(config.status_interval, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evo::evo::EvoConfig;
///
/// let config = EvoConfig::default()
///     .with_max_iterations(10_000)
///     .with_dom_interval(50)
///     .with_status_interval(2_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvoConfig {
    /// Iteration or wall-clock budget.
    pub stop: StopCondition,

    /// Remove dominated entries every `dom_interval` steps.
    pub dom_interval: usize,

    /// Remove dominated entries and emit a status report every
    /// `status_interval` steps.
    pub status_interval: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` keeps the engine's current random source.
    pub seed: Option<u64>,
}

impl Default for EvoConfig {
    fn default() -> Self {
        Self {
            stop: StopCondition::TimeLimit(Duration::from_secs(300)),
            dom_interval: 100,
            status_interval: 1000,
            seed: None,
        }
    }
}

impl EvoConfig {
    /// Iteration-bounded run with default intervals.
    pub fn iterations(n: usize) -> Self {
        Self::default().with_max_iterations(n)
    }

    /// Time-bounded run with default intervals.
    pub fn time_limit(limit: Duration) -> Self {
        Self::default().with_time_limit(limit)
    }

    /// Stops after `n` steps.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.stop = StopCondition::Iterations(n);
        self
    }

    /// Stops once `limit` has elapsed.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.stop = StopCondition::TimeLimit(limit);
        self
    }

    /// Stops once `ms` milliseconds have elapsed.
    pub fn with_time_limit_ms(self, ms: u64) -> Self {
        self.with_time_limit(Duration::from_millis(ms))
    }

    /// Sets how often dominated entries are removed.
    pub fn with_dom_interval(mut self, n: usize) -> Self {
        self.dom_interval = n;
        self
    }

    /// Sets how often status is reported.
    pub fn with_status_interval(mut self, n: usize) -> Self {
        self.status_interval = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), EvoError> {
        if self.dom_interval == 0 {
            return Err(EvoError::InvalidConfig("dom_interval must be at least 1".into()));
        }
        if self.status_interval == 0 {
            return Err(EvoError::InvalidConfig(
                "status_interval must be at least 1".into(),
            ));
        }
        if self.stop == StopCondition::TimeLimit(Duration::ZERO) {
            return Err(EvoError::InvalidConfig("time limit must be positive".into()));
        }
        Ok(())
    }
}
