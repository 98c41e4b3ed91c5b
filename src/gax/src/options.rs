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

//! Per request options.
//!
//! The client configuration sets the defaults for all requests. Applications
//! override them for a single call with [RequestOptions]. A retry policy set
//! on the request envelope itself takes precedence over both.

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;
use std::time::Duration;

/// A set of options configuring a single request.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    user_agent: Option<String>,
    attempt_timeout: Option<Duration>,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
}

impl RequestOptions {
    /// Sets the `user-agent` header for this request.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the per-attempt timeout.
    ///
    /// The overall time for a request is limited by the retry policy.
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }

    pub fn set_retry_policy<V: Into<RetryPolicyArg>>(&mut self, v: V) {
        self.retry_policy = Some(v.into().into());
    }

    pub fn retry_policy(&self) -> &Option<Arc<dyn RetryPolicy>> {
        &self.retry_policy
    }

    pub fn set_backoff_policy<V: Into<BackoffPolicyArg>>(&mut self, v: V) {
        self.backoff_policy = Some(v.into().into());
    }

    pub fn backoff_policy(&self) -> &Option<Arc<dyn BackoffPolicy>> {
        &self.backoff_policy
    }

    /// Fills any unset option from `defaults`.
    pub fn with_defaults(mut self, defaults: &RequestOptions) -> Self {
        if self.user_agent.is_none() {
            self.user_agent = defaults.user_agent.clone();
        }
        if self.attempt_timeout.is_none() {
            self.attempt_timeout = defaults.attempt_timeout;
        }
        if self.retry_policy.is_none() {
            self.retry_policy = defaults.retry_policy.clone();
        }
        if self.backoff_policy.is_none() {
            self.backoff_policy = defaults.backoff_policy.clone();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exponential_backoff::ExponentialBackoff;
    use crate::retry_policy::{LimitedAttemptCount, NeverRetry};

    #[test]
    fn setters() {
        let mut opts = RequestOptions::default();
        assert!(opts.user_agent().is_none());
        assert!(opts.attempt_timeout().is_none());
        assert!(opts.retry_policy().is_none());
        assert!(opts.backoff_policy().is_none());

        opts.set_user_agent("test-only/1.0");
        opts.set_attempt_timeout(Duration::from_secs(5));
        opts.set_retry_policy(LimitedAttemptCount::new(3));
        opts.set_backoff_policy(ExponentialBackoff::default());
        assert_eq!(opts.user_agent().as_deref(), Some("test-only/1.0"));
        assert_eq!(opts.attempt_timeout(), &Some(Duration::from_secs(5)));
        assert!(opts.retry_policy().is_some(), "{opts:?}");
        assert!(opts.backoff_policy().is_some(), "{opts:?}");
    }

    #[test]
    fn with_defaults() {
        let mut defaults = RequestOptions::default();
        defaults.set_user_agent("default-agent");
        defaults.set_attempt_timeout(Duration::from_secs(10));
        defaults.set_retry_policy(LimitedAttemptCount::new(3));

        let mut opts = RequestOptions::default();
        opts.set_attempt_timeout(Duration::from_secs(1));
        opts.set_retry_policy(NeverRetry);
        let got = opts.with_defaults(&defaults);

        assert_eq!(got.user_agent().as_deref(), Some("default-agent"));
        assert_eq!(got.attempt_timeout(), &Some(Duration::from_secs(1)));
        assert!(format!("{got:?}").contains("NeverRetry"), "{got:?}");
        assert!(got.backoff_policy().is_none(), "{got:?}");
    }
}
