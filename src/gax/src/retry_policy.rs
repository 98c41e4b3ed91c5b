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

//! Defines traits for retry policies and some common implementations.
//!
//! Requests are retried only when a retry policy is configured, either on the
//! request itself or on the client. The request policy takes precedence.
//! Without any policy the client makes a single attempt.
//!
//! Operations that create resources carry an `opc-retry-token`. The client
//! generates one when the application does not, and reuses it on every
//! attempt, so the service can deduplicate retried requests.
//!
//! # Example
//! ```
//! # use oci_sdk_gax::retry_policy::*;
//! use std::time::Duration;
//! // Retry for at most 2 minutes or at most 5 attempts, whichever limit is
//! // reached first stops the loop.
//! let policy = DefaultRetryPolicy
//!     .with_time_limit(Duration::from_secs(120))
//!     .with_attempt_limit(5);
//! ```

use crate::error::Error;
use crate::retry_result::RetryResult;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// The default number of attempts, including the initial attempt.
pub const DEFAULT_MAXIMUM_ATTEMPTS: u32 = 8;

/// Determines how errors are handled in the retry loop.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts so far, including the
    ///   initial attempt. It is always non-zero.
    /// * `error` - the error from the last attempt.
    fn on_error(&self, loop_start: Instant, attempt_count: u32, error: Error) -> RetryResult;

    /// The remaining time in the retry loop.
    ///
    /// Policies limited by time return the time left before the deadline.
    /// The retry loop uses this value to cap the next attempt timeout.
    fn remaining_time(&self, _loop_start: Instant, _attempt_count: u32) -> Option<Duration> {
        None
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct RetryPolicyArg(pub(crate) Arc<dyn RetryPolicy>);

impl<T> From<T> for RetryPolicyArg
where
    T: RetryPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl RetryPolicyArg {
    pub(crate) fn policy(&self) -> &Arc<dyn RetryPolicy> {
        &self.0
    }
}

impl From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Self {
        value.0
    }
}

/// Extension trait for [RetryPolicy].
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorate a [RetryPolicy] to limit the total elapsed time in the retry
    /// loop.
    ///
    /// # Example
    /// ```
    /// # use oci_sdk_gax::retry_policy::*;
    /// # use oci_sdk_gax::error::Error;
    /// use std::time::{Duration, Instant};
    /// let policy = DefaultRetryPolicy.with_time_limit(Duration::from_secs(10));
    /// let start = Instant::now() - Duration::from_secs(20);
    /// assert!(policy.on_error(start, 1, Error::io("reset")).is_exhausted());
    /// ```
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [RetryPolicy] to limit the number of attempts.
    ///
    /// # Example
    /// ```
    /// # use oci_sdk_gax::retry_policy::*;
    /// # use oci_sdk_gax::error::Error;
    /// use std::time::Instant;
    /// let policy = DefaultRetryPolicy.with_attempt_limit(3);
    /// assert!(policy.on_error(Instant::now(), 2, Error::io("reset")).is_continue());
    /// assert!(policy.on_error(Instant::now(), 3, Error::io("reset")).is_exhausted());
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// Retries the transient errors reported by the services.
///
/// The policy continues on:
/// - `409` responses with the `IncorrectState` code,
/// - `429` (throttled) responses,
/// - `500`, `502`, `503`, and `504` responses,
/// - transport errors and attempt timeouts.
///
/// Any other error is permanent. This policy never stops on its own, it
/// should be decorated to limit the number of attempts or the elapsed time.
#[derive(Clone, Debug)]
pub struct DefaultRetryPolicy;

impl RetryPolicy for DefaultRetryPolicy {
    fn on_error(&self, _loop_start: Instant, _attempt_count: u32, error: Error) -> RetryResult {
        if error.is_io() || error.is_timeout() {
            return RetryResult::Continue(error);
        }
        let Some(service) = error.as_service() else {
            return RetryResult::Permanent(error);
        };
        match (service.status_code(), service.code()) {
            (409, "IncorrectState") | (429, _) | (500, _) | (502, _) | (503, _) | (504, _) => {
                RetryResult::Continue(error)
            }
            _ => RetryResult::Permanent(error),
        }
    }
}

/// Retries on any error.
///
/// This policy must be decorated to limit the number of attempts or the
/// elapsed time.
#[derive(Clone, Debug)]
pub struct AlwaysRetry;

impl RetryPolicy for AlwaysRetry {
    fn on_error(&self, _loop_start: Instant, _attempt_count: u32, error: Error) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// Never retries.
///
/// Setting this policy on a request disables the client retry policy for
/// that request.
#[derive(Clone, Debug)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(&self, _loop_start: Instant, _attempt_count: u32, error: Error) -> RetryResult {
        RetryResult::Exhausted(error)
    }
}

/// A retry policy decorator that limits the total time in the retry loop.
///
/// The time includes the backoff delays. Once the deadline is reached any
/// [Continue][RetryResult::Continue] from the inner policy becomes
/// [Exhausted][RetryResult::Exhausted].
///
/// # Parameters
/// * `P` - the inner retry policy, defaults to [DefaultRetryPolicy].
#[derive(Debug)]
pub struct LimitedElapsedTime<P = DefaultRetryPolicy>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    pub fn new(maximum_duration: Duration) -> Self {
        Self::custom(DefaultRetryPolicy, maximum_duration)
    }
}

impl<P: RetryPolicy> LimitedElapsedTime<P> {
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn deadline(&self, loop_start: Instant) -> Instant {
        loop_start
            .checked_add(self.maximum_duration)
            .unwrap_or(loop_start)
    }
}

impl<P: RetryPolicy> RetryPolicy for LimitedElapsedTime<P> {
    fn on_error(&self, loop_start: Instant, attempt_count: u32, error: Error) -> RetryResult {
        match self.inner.on_error(loop_start, attempt_count, error) {
            RetryResult::Continue(e) if Instant::now() >= self.deadline(loop_start) => {
                RetryResult::Exhausted(e)
            }
            r => r,
        }
    }

    fn remaining_time(&self, loop_start: Instant, attempt_count: u32) -> Option<Duration> {
        let remaining = self
            .deadline(loop_start)
            .saturating_duration_since(Instant::now());
        match self.inner.remaining_time(loop_start, attempt_count) {
            Some(inner) => Some(std::cmp::min(remaining, inner)),
            None => Some(remaining),
        }
    }
}

/// A retry policy decorator that limits the number of attempts.
///
/// The inner decision is passed through while
/// `attempt_count < maximum_attempts`. After that any
/// [Continue][RetryResult::Continue] becomes
/// [Exhausted][RetryResult::Exhausted]. Setting the maximum to 0 or 1
/// disables retries.
///
/// # Parameters
/// * `P` - the inner retry policy, defaults to [DefaultRetryPolicy].
#[derive(Debug)]
pub struct LimitedAttemptCount<P = DefaultRetryPolicy>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    pub fn new(maximum_attempts: u32) -> Self {
        Self::custom(DefaultRetryPolicy, maximum_attempts)
    }
}

impl Default for LimitedAttemptCount {
    /// The policy used by clients configured with the default retry policy.
    fn default() -> Self {
        Self::new(DEFAULT_MAXIMUM_ATTEMPTS)
    }
}

impl<P: RetryPolicy> LimitedAttemptCount<P> {
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P: RetryPolicy> RetryPolicy for LimitedAttemptCount<P> {
    fn on_error(&self, loop_start: Instant, attempt_count: u32, error: Error) -> RetryResult {
        match self.inner.on_error(loop_start, attempt_count, error) {
            RetryResult::Continue(e) if attempt_count >= self.maximum_attempts => {
                RetryResult::Exhausted(e)
            }
            r => r,
        }
    }

    fn remaining_time(&self, loop_start: Instant, attempt_count: u32) -> Option<Duration> {
        self.inner.remaining_time(loop_start, attempt_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use test_case::test_case;

    fn service(status: u16, code: &str) -> Error {
        Error::service(ServiceError::new(status, code, "test-only"))
    }

    #[test_case(409, "IncorrectState")]
    #[test_case(429, "TooManyRequests")]
    #[test_case(500, "InternalServerError")]
    #[test_case(502, "")]
    #[test_case(503, "ServiceUnavailable")]
    #[test_case(504, "")]
    fn default_continue(status: u16, code: &str) {
        let r = DefaultRetryPolicy.on_error(Instant::now(), 1, service(status, code));
        assert!(r.is_continue(), "{r:?}");
    }

    #[test_case(400, "InvalidParameter")]
    #[test_case(401, "NotAuthenticated")]
    #[test_case(404, "NotAuthorizedOrNotFound")]
    #[test_case(409, "Conflict")]
    #[test_case(412, "NoEtagMatch")]
    fn default_permanent(status: u16, code: &str) {
        let r = DefaultRetryPolicy.on_error(Instant::now(), 1, service(status, code));
        assert!(r.is_permanent(), "{r:?}");
    }

    #[test]
    fn default_other_kinds() {
        let p = DefaultRetryPolicy;
        let now = Instant::now();
        assert!(p.on_error(now, 1, Error::io("reset")).is_continue());
        assert!(p.on_error(now, 1, Error::timeout("slow")).is_continue());
        assert!(p.on_error(now, 1, Error::deser("bad")).is_permanent());
        assert!(p.on_error(now, 1, Error::binding("missing")).is_permanent());
        assert!(p.on_error(now, 1, Error::other("other")).is_permanent());
        assert!(p.remaining_time(now, 1).is_none());
    }

    #[test]
    fn always_and_never() {
        let now = Instant::now();
        assert!(AlwaysRetry.on_error(now, 100, service(404, "")).is_continue());
        assert!(NeverRetry.on_error(now, 1, Error::io("reset")).is_exhausted());
    }

    #[test]
    fn attempt_limit() {
        let p = LimitedAttemptCount::new(3);
        let now = Instant::now();
        assert!(p.on_error(now, 1, Error::io("reset")).is_continue());
        assert!(p.on_error(now, 2, Error::io("reset")).is_continue());
        assert!(p.on_error(now, 3, Error::io("reset")).is_exhausted());
        // Permanent errors stay permanent.
        assert!(p.on_error(now, 3, service(404, "")).is_permanent());
    }

    #[test]
    fn attempt_limit_default() {
        let p = LimitedAttemptCount::default();
        let now = Instant::now();
        assert!(p.on_error(now, 7, Error::io("reset")).is_continue());
        assert!(p.on_error(now, 8, Error::io("reset")).is_exhausted());
    }

    #[test]
    fn time_limit() {
        let p = LimitedElapsedTime::new(Duration::from_secs(60));
        let recent = Instant::now() - Duration::from_secs(10);
        assert!(p.on_error(recent, 1, Error::io("reset")).is_continue());
        let remaining = p.remaining_time(recent, 1).expect("time based policy");
        assert!(remaining <= Duration::from_secs(50), "{remaining:?}");

        let old = Instant::now() - Duration::from_secs(120);
        assert!(p.on_error(old, 1, Error::io("reset")).is_exhausted());
        assert!(p.on_error(old, 1, service(404, "")).is_permanent());
        assert_eq!(p.remaining_time(old, 1), Some(Duration::ZERO));
    }

    #[test]
    fn decorators_compose() {
        let p = AlwaysRetry
            .with_time_limit(Duration::from_secs(60))
            .with_attempt_limit(2);
        let now = Instant::now();
        assert!(p.on_error(now, 1, service(404, "")).is_continue());
        assert!(p.on_error(now, 2, service(404, "")).is_exhausted());
        assert!(p.remaining_time(now, 1).is_some());
    }

    #[test]
    fn arg_conversions() {
        let _ = RetryPolicyArg::from(DefaultRetryPolicy);
        let policy: Arc<dyn RetryPolicy> = Arc::new(NeverRetry);
        let arg = RetryPolicyArg::from(policy);
        let back: Arc<dyn RetryPolicy> = arg.into();
        assert!(back.on_error(Instant::now(), 1, Error::io("x")).is_exhausted());
    }
}
