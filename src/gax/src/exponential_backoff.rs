// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Truncated [exponential backoff] with full jitter.
//!
//! The delay after attempt `n` is drawn uniformly from
//! `[0, min(maximum, initial * scaling^(n-1))]`.
//!
//! [exponential backoff]: https://en.wikipedia.org/wiki/Exponential_backoff

use std::time::{Duration, Instant};

const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(1);
const DEFAULT_MAXIMUM_DELAY: Duration = Duration::from_secs(30);
const DEFAULT_SCALING: f64 = 2.0;

/// The error type for exponential backoff creation.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("the scaling value ({0}) should be >= 1.0")]
    InvalidScalingFactor(f64),
    #[error("the initial delay ({0:?}) should be greater than zero")]
    InvalidInitialDelay(Duration),
    #[error(
        "the maximum delay ({maximum:?}) should be greater than or equal to the initial delay ({initial:?})"
    )]
    EmptyRange { maximum: Duration, initial: Duration },
}

/// Configures an [ExponentialBackoff].
///
/// # Example
/// ```
/// # use oci_sdk_gax::exponential_backoff::{Error, ExponentialBackoffBuilder};
/// use std::time::Duration;
/// let policy = ExponentialBackoffBuilder::new()
///     .with_initial_delay(Duration::from_millis(100))
///     .with_maximum_delay(Duration::from_secs(5))
///     .with_scaling(4.0)
///     .build()?;
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ExponentialBackoffBuilder {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoffBuilder {
    /// Starts from one second, doubling up to thirty seconds.
    pub fn new() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            maximum_delay: DEFAULT_MAXIMUM_DELAY,
            scaling: DEFAULT_SCALING,
        }
    }

    pub fn with_initial_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.initial_delay = v.into();
        self
    }

    pub fn with_maximum_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.maximum_delay = v.into();
        self
    }

    pub fn with_scaling<V: Into<f64>>(mut self, v: V) -> Self {
        self.scaling = v.into();
        self
    }

    /// Validates the parameters and creates the policy.
    pub fn build(self) -> Result<ExponentialBackoff, Error> {
        if self.scaling.is_nan() || self.scaling < 1.0 {
            return Err(Error::InvalidScalingFactor(self.scaling));
        }
        if self.initial_delay.is_zero() {
            return Err(Error::InvalidInitialDelay(self.initial_delay));
        }
        if self.maximum_delay < self.initial_delay {
            return Err(Error::EmptyRange {
                maximum: self.maximum_delay,
                initial: self.initial_delay,
            });
        }
        Ok(ExponentialBackoff {
            initial_delay: self.initial_delay,
            maximum_delay: self.maximum_delay,
            scaling: self.scaling,
        })
    }
}

impl Default for ExponentialBackoffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Implements truncated exponential backoff with full jitter.
#[derive(Clone, Debug)]
pub struct ExponentialBackoff {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoff {
    /// The upper bound of the delay after `attempt_count` attempts.
    fn ceiling(&self, attempt_count: u32) -> Duration {
        let exp = attempt_count.saturating_sub(1).min(i32::MAX as u32) as i32;
        let factor = self.scaling.powi(exp);
        // Compare the factors first, `mul_f64()` panics on overflow.
        if factor >= self.maximum_delay.div_duration_f64(self.initial_delay) {
            return self.maximum_delay;
        }
        self.initial_delay.mul_f64(factor)
    }

    fn jittered(&self, attempt_count: u32, rng: &mut impl rand::Rng) -> Duration {
        rng.random_range(Duration::ZERO..=self.ceiling(attempt_count))
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            maximum_delay: DEFAULT_MAXIMUM_DELAY,
            scaling: DEFAULT_SCALING,
        }
    }
}

impl crate::backoff_policy::BackoffPolicy for ExponentialBackoff {
    fn on_failure(&self, _loop_start: Instant, attempt_count: u32) -> Duration {
        self.jittered(attempt_count, &mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn build_errors() {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::ZERO)
            .build();
        assert!(matches!(b, Err(Error::InvalidInitialDelay(_))), "{b:?}");

        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(10))
            .with_maximum_delay(Duration::from_secs(5))
            .build();
        assert!(matches!(b, Err(Error::EmptyRange { .. })), "{b:?}");

        let b = ExponentialBackoffBuilder::new().with_scaling(0.5).build();
        assert!(matches!(b, Err(Error::InvalidScalingFactor(_))), "{b:?}");

        let b = ExponentialBackoffBuilder::new().with_scaling(f64::NAN).build();
        assert!(matches!(b, Err(Error::InvalidScalingFactor(_))), "{b:?}");
    }

    #[test]
    fn build_limits() {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_nanos(1))
            .with_maximum_delay(Duration::MAX)
            .with_scaling(1.0)
            .build();
        assert!(b.is_ok(), "{b:?}");
    }

    #[test]
    fn ceiling() -> anyhow::Result<()> {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(1))
            .with_maximum_delay(Duration::from_secs(30))
            .with_scaling(2.0)
            .build()?;
        assert_eq!(b.ceiling(1), Duration::from_secs(1));
        assert_eq!(b.ceiling(2), Duration::from_secs(2));
        assert_eq!(b.ceiling(3), Duration::from_secs(4));
        assert_eq!(b.ceiling(5), Duration::from_secs(16));
        assert_eq!(b.ceiling(6), Duration::from_secs(30));
        assert_eq!(b.ceiling(u32::MAX), Duration::from_secs(30));
        Ok(())
    }

    #[test]
    fn jitter_in_range() {
        let b = ExponentialBackoff::default();
        let mut rng = StdRng::seed_from_u64(42);
        for attempt in 1..20 {
            let d = b.jittered(attempt, &mut rng);
            assert!(d <= b.ceiling(attempt), "{attempt} {d:?}");
        }
    }

    #[test]
    fn on_failure() {
        use crate::backoff_policy::BackoffPolicy;
        let b = ExponentialBackoff::default();
        let d = b.on_failure(Instant::now(), 1);
        assert!(d <= Duration::from_secs(1), "{d:?}");
    }
}
