//! Count-up animation that runs once, the first time its element is visible.
//!
//! The counter is sampled with the elapsed time since it was triggered. It
//! never owns a clock; [`crate::driver::spawn_counter`] supplies one.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::{ensure_finite, KineticError, KineticResult};

/// Counter configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CounterConfig {
    pub start_value: f64,
    pub end_value: f64,
    /// Total animation time
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            start_value: 0.0,
            end_value: 0.0,
            duration_ms: 2000.0,
            easing: Easing::default(),
        }
    }
}

impl CounterConfig {
    /// Count from 0 to `end_value` with default timing.
    pub fn to(end_value: f64) -> Self {
        Self {
            end_value,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> KineticResult<()> {
        ensure_finite("startValue", self.start_value)?;
        ensure_finite("endValue", self.end_value)?;
        ensure_finite("durationMs", self.duration_ms)?;
        if self.duration_ms < 0.0 {
            return Err(KineticError::InvalidConfig(format!(
                "durationMs must not be negative (got {})",
                self.duration_ms
            )));
        }
        for (field, value) in [("startValue", self.start_value), ("endValue", self.end_value)] {
            if value.abs() >= i64::MAX as f64 {
                return Err(KineticError::InvalidConfig(format!(
                    "{field} is out of range (got {value})"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CounterStatus {
    /// Waiting for the first visibility signal
    Idle,
    Running,
    Finished,
}

/// Single-fire counter state
#[derive(Debug, Clone)]
pub struct Counter {
    config: CounterConfig,
    status: CounterStatus,
    value: i64,
}

impl Counter {
    pub fn new(config: CounterConfig) -> KineticResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            status: CounterStatus::Idle,
            value: config.start_value.floor() as i64,
        })
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Currently displayed value.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Value displayed once the animation completes.
    pub fn target(&self) -> i64 {
        self.config.end_value.floor() as i64
    }

    /// Whether the animation has ever been triggered.
    pub fn has_started(&self) -> bool {
        self.status != CounterStatus::Idle
    }

    pub fn is_running(&self) -> bool {
        self.status == CounterStatus::Running
    }

    pub fn is_finished(&self) -> bool {
        self.status == CounterStatus::Finished
    }

    /// Record a visibility signal.
    ///
    /// Returns `true` only for the first call; the animation never restarts.
    pub fn trigger(&mut self) -> bool {
        if self.has_started() {
            return false;
        }
        tracing::debug!(
            start = self.config.start_value,
            end = self.config.end_value,
            "Counter triggered"
        );
        self.status = CounterStatus::Running;
        true
    }

    /// Displayed value `elapsed` after the trigger.
    ///
    /// Once `elapsed` reaches the duration the value snaps to [`Self::target`]
    /// and the counter is finished. Sampling an idle counter shows the start.
    pub fn sample(&mut self, elapsed: Duration) -> i64 {
        match self.status {
            CounterStatus::Idle | CounterStatus::Finished => return self.value,
            CounterStatus::Running => {}
        }

        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
        if elapsed_ms >= self.config.duration_ms {
            return self.finish();
        }

        let progress = self.config.easing.apply(elapsed_ms / self.config.duration_ms);
        let span = self.config.end_value - self.config.start_value;
        let value = (self.config.start_value + progress * span).floor() as i64;

        // Frames never step backwards, even across rounding noise
        self.value = if span >= 0.0 {
            value.max(self.value).min(self.target())
        } else {
            value.min(self.value).max(self.target())
        };
        self.value
    }

    /// Jump straight to the end value.
    pub fn finish(&mut self) -> i64 {
        self.status = CounterStatus::Finished;
        self.value = self.target();
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_reaches_exact_end() {
        let mut counter = Counter::new(CounterConfig::to(1000.0)).unwrap();
        assert!(counter.trigger());

        assert_eq!(counter.sample(ms(0)), 0);
        assert_eq!(counter.sample(ms(1000)), 750);
        assert!(counter.is_running());
        assert_eq!(counter.sample(ms(2000)), 1000);
        assert!(counter.is_finished());
        assert_eq!(counter.sample(ms(5000)), 1000);
    }

    #[test]
    fn test_idle_counter_shows_start() {
        let mut counter = Counter::new(CounterConfig {
            start_value: 5.0,
            end_value: 10.0,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(counter.sample(ms(10_000)), 5);
        assert!(!counter.has_started());
    }

    #[test]
    fn test_single_fire() {
        let mut counter = Counter::new(CounterConfig::to(10.0)).unwrap();
        assert!(counter.trigger());
        counter.sample(ms(500));
        assert!(!counter.trigger());
        counter.sample(ms(2500));
        assert!(!counter.trigger());
        assert_eq!(counter.value(), 10);
    }

    #[test]
    fn test_counts_down() {
        let mut counter = Counter::new(CounterConfig {
            start_value: 100.0,
            end_value: 0.0,
            duration_ms: 100.0,
            easing: Easing::Linear,
        })
        .unwrap();
        counter.trigger();
        let values: Vec<i64> = (0..=10).map(|i| counter.sample(ms(i * 10))).collect();
        assert!(values.windows(2).all(|w| w[0] >= w[1]), "{:?}", values);
        assert_eq!(values.last(), Some(&0));
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut counter = Counter::new(CounterConfig {
            duration_ms: 0.0,
            ..CounterConfig::to(42.0)
        })
        .unwrap();
        counter.trigger();
        assert_eq!(counter.sample(Duration::ZERO), 42);
        assert!(counter.is_finished());
    }

    #[test]
    fn test_huge_duration_is_usable() {
        let mut counter = Counter::new(CounterConfig {
            duration_ms: 1e30,
            ..CounterConfig::to(10.0)
        })
        .unwrap();
        counter.trigger();
        assert_eq!(counter.sample(ms(3_600_000)), 0);
        assert_eq!(counter.sample(Duration::MAX), 0);
        assert!(counter.is_running());
        assert_eq!(counter.finish(), 10);
    }

    #[test]
    fn test_finish_snaps() {
        let mut counter = Counter::new(CounterConfig::to(7.0)).unwrap();
        assert_eq!(counter.finish(), 7);
        assert!(counter.has_started());
        assert!(!counter.trigger());
    }

    #[test]
    fn test_invalid_config_rejected() {
        for config in [
            CounterConfig::to(f64::NAN),
            CounterConfig {
                start_value: f64::NEG_INFINITY,
                ..CounterConfig::to(1.0)
            },
            CounterConfig {
                duration_ms: f64::INFINITY,
                ..CounterConfig::to(1.0)
            },
        ] {
            assert!(matches!(
                Counter::new(config),
                Err(KineticError::NonFinite { .. })
            ));
        }

        assert!(matches!(
            Counter::new(CounterConfig {
                duration_ms: -1.0,
                ..CounterConfig::to(1.0)
            }),
            Err(KineticError::InvalidConfig(_))
        ));
        assert!(matches!(
            Counter::new(CounterConfig::to(1e20)),
            Err(KineticError::InvalidConfig(_))
        ));
    }
}
