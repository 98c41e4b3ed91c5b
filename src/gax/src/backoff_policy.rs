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

//! Defines the trait for backoff policies.
//!
//! The retry loop waits between attempts so the service has time to recover.
//! [Exponential backoff] with jitter is the default.
//!
//! # Example
//! ```
//! # use oci_sdk_gax::exponential_backoff::ExponentialBackoffBuilder;
//! # use oci_sdk_gax::options::RequestOptions;
//! use std::time::Duration;
//! let policy = ExponentialBackoffBuilder::new()
//!     .with_initial_delay(Duration::from_millis(100))
//!     .with_maximum_delay(Duration::from_secs(5))
//!     .build()?;
//! let mut options = RequestOptions::default();
//! options.set_backoff_policy(policy);
//! # Ok::<(), oci_sdk_gax::exponential_backoff::Error>(())
//! ```
//!
//! [Exponential backoff]: https://en.wikipedia.org/wiki/Exponential_backoff

use std::sync::Arc;

/// Defines the trait implemented by all backoff strategies.
pub trait BackoffPolicy: Send + Sync + std::fmt::Debug {
    /// Returns the delay before the next attempt.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts so far, always non-zero.
    fn on_failure(&self, loop_start: std::time::Instant, attempt_count: u32)
    -> std::time::Duration;
}

/// A helper type to use [BackoffPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct BackoffPolicyArg(pub(crate) Arc<dyn BackoffPolicy>);

impl<T: BackoffPolicy + 'static> From<T> for BackoffPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn BackoffPolicy>> for BackoffPolicyArg {
    fn from(value: Arc<dyn BackoffPolicy>) -> Self {
        Self(value)
    }
}

impl From<BackoffPolicyArg> for Arc<dyn BackoffPolicy> {
    fn from(value: BackoffPolicyArg) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exponential_backoff::ExponentialBackoff;

    #[test]
    fn backoff_policy_arg() {
        let _ = BackoffPolicyArg::from(ExponentialBackoff::default());

        let policy: Arc<dyn BackoffPolicy> = Arc::new(ExponentialBackoff::default());
        let arg = BackoffPolicyArg::from(policy);
        let back: Arc<dyn BackoffPolicy> = arg.into();
        let delay = back.on_failure(std::time::Instant::now(), 1);
        assert!(delay <= std::time::Duration::from_secs(1), "{delay:?}");
    }
}
