//! Simulated workload randomness.
//!
//! # Responsibilities
//! - Decide how long simulated work takes (uniform in a configured range)
//! - Decide whether a request fails with a synthetic 500
//!
//! # Design Decisions
//! - Randomness sits behind the `RandomSource` trait so tests can force
//!   deterministic outcomes (zero delay, failure on/off)
//! - Handlers receive the source by injection; no hidden global RNG state

use std::time::Duration;

use rand::Rng;

use crate::config::schema::SimulationConfig;

/// Source of the two random decisions the hello handler makes.
pub trait RandomSource: Send + Sync {
    /// Duration the simulated work should sleep.
    fn work_delay(&self) -> Duration;

    /// True when this request should fail with a synthetic 500.
    fn should_fail(&self) -> bool;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Clone)]
pub struct SampledRandom {
    min_delay_ms: u64,
    max_delay_ms: u64,
    failure_probability: f64,
}

impl SampledRandom {
    /// Build a source from validated simulation config.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            min_delay_ms: config.min_delay_ms,
            max_delay_ms: config.max_delay_ms,
            failure_probability: config.failure_probability,
        }
    }
}

impl RandomSource for SampledRandom {
    fn work_delay(&self) -> Duration {
        // Validation guarantees min <= max; equal bounds mean a fixed delay.
        let ms = if self.min_delay_ms == self.max_delay_ms {
            self.min_delay_ms
        } else {
            rand::thread_rng().gen_range(self.min_delay_ms..=self.max_delay_ms)
        };
        Duration::from_millis(ms)
    }

    fn should_fail(&self) -> bool {
        rand::thread_rng().gen_bool(self.failure_probability)
    }
}

/// Deterministic source for tests and demos.
#[derive(Debug, Clone)]
pub struct FixedOutcome {
    /// Delay returned by every `work_delay` call.
    pub delay: Duration,
    /// Value returned by every `should_fail` call.
    pub fail: bool,
}

impl FixedOutcome {
    /// A source that never delays and never fails.
    pub fn succeeding() -> Self {
        Self {
            delay: Duration::ZERO,
            fail: false,
        }
    }

    /// A source that never delays and always fails.
    pub fn failing() -> Self {
        Self {
            delay: Duration::ZERO,
            fail: true,
        }
    }
}

impl RandomSource for FixedOutcome {
    fn work_delay(&self) -> Duration {
        self.delay
    }

    fn should_fail(&self) -> bool {
        self.fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampled_delay_stays_in_range() {
        let source = SampledRandom::from_config(&SimulationConfig {
            min_delay_ms: 5,
            max_delay_ms: 20,
            failure_probability: 0.0,
        });
        for _ in 0..100 {
            let delay = source.work_delay();
            assert!(delay >= Duration::from_millis(5));
            assert!(delay <= Duration::from_millis(20));
        }
    }

    #[test]
    fn test_equal_bounds_give_fixed_delay() {
        let source = SampledRandom::from_config(&SimulationConfig {
            min_delay_ms: 7,
            max_delay_ms: 7,
            failure_probability: 0.0,
        });
        assert_eq!(source.work_delay(), Duration::from_millis(7));
    }

    #[test]
    fn test_probability_extremes() {
        let never = SampledRandom::from_config(&SimulationConfig {
            min_delay_ms: 0,
            max_delay_ms: 0,
            failure_probability: 0.0,
        });
        let always = SampledRandom::from_config(&SimulationConfig {
            min_delay_ms: 0,
            max_delay_ms: 0,
            failure_probability: 1.0,
        });
        for _ in 0..100 {
            assert!(!never.should_fail());
            assert!(always.should_fail());
        }
    }

    #[test]
    fn test_fixed_outcome_is_deterministic() {
        let source = FixedOutcome::failing();
        assert!(source.should_fail());
        assert_eq!(source.work_delay(), Duration::ZERO);
        assert!(!FixedOutcome::succeeding().should_fail());
    }
}
