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

use super::Result;
use super::backoff_policy::BackoffPolicy;
use super::error::Error;
use super::retry_policy::RetryPolicy;
use super::retry_result::RetryResult;
use std::sync::Arc;
use std::time::Duration;

/// Runs the retry loop for a given function.
///
/// Calls `inner` until it succeeds, or until the retry policy stops the loop.
/// Between attempts waits the delay prescribed by the backoff policy, using
/// `sleep`. The loop never sleeps past the remaining time of the policy.
///
/// `inner` receives the remaining time in the loop, if the policy is time
/// based. Each call is a full attempt: the caller must rebuild any
/// consumable state, such as a binary body, inside `inner`.
///
/// Exhausted policies return an [Error::is_exhausted] error wrapping the last
/// attempt error. Permanent errors are returned unchanged.
pub async fn retry_loop<F, S, Response>(
    mut inner: F,
    sleep: S,
    operation: &str,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
) -> Result<Response>
where
    F: AsyncFnMut(Option<Duration>) -> Result<Response> + Send,
    S: AsyncFn(Duration) -> () + Send,
{
    let loop_start = tokio::time::Instant::now().into_std();
    let mut attempt_count = 0_u32;
    loop {
        let remaining_time = retry_policy.remaining_time(loop_start, attempt_count);
        attempt_count = attempt_count.saturating_add(1);
        let error = match inner(remaining_time).await {
            Ok(r) => return Ok(r),
            Err(e) => e,
        };
        let error = match retry_policy.on_error(loop_start, attempt_count, error) {
            RetryResult::Permanent(e) => {
                tracing::warn!(operation, attempt_count, "permanent error: {e}");
                return Err(e);
            }
            RetryResult::Exhausted(e) => {
                tracing::warn!(operation, attempt_count, "retry policy exhausted: {e}");
                return Err(Error::exhausted(e));
            }
            RetryResult::Continue(e) => e,
        };
        let delay = backoff_policy.on_failure(loop_start, attempt_count);
        let remaining = retry_policy.remaining_time(loop_start, attempt_count);
        if remaining.is_some_and(|r| r < delay) {
            tracing::warn!(operation, attempt_count, "no time left for the next attempt: {error}");
            return Err(Error::exhausted(error));
        }
        tracing::debug!(operation, attempt_count, ?delay, "retrying after error: {error}");
        sleep(delay).await;
    }
}

/// Computes the timeout for the next attempt, given the attempt timeout and
/// the time remaining in the retry loop.
pub fn effective_timeout(
    options: &crate::options::RequestOptions,
    remaining_time: Option<Duration>,
) -> Option<Duration> {
    match (options.attempt_timeout(), remaining_time) {
        (None, None) => None,
        (None, Some(t)) => Some(t),
        (Some(t), None) => Some(*t),
        (Some(a), Some(r)) => Some(std::cmp::min(*a, r)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use std::error::Error as _;
    use std::sync::Mutex;
    use test_case::test_case;

    #[test_case(None, None, None)]
    #[test_case(Some(Duration::from_secs(4)), Some(Duration::from_secs(4)), None)]
    #[test_case(Some(Duration::from_secs(4)), None, Some(Duration::from_secs(4)))]
    #[test_case(
        Some(Duration::from_secs(2)),
        Some(Duration::from_secs(2)),
        Some(Duration::from_secs(4))
    )]
    #[test_case(
        Some(Duration::from_secs(2)),
        Some(Duration::from_secs(4)),
        Some(Duration::from_secs(2))
    )]
    fn effective_timeouts(
        want: Option<Duration>,
        remaining: Option<Duration>,
        request: Option<Duration>,
    ) {
        let mut options = crate::options::RequestOptions::default();
        if let Some(t) = request {
            options.set_attempt_timeout(t);
        }
        assert_eq!(effective_timeout(&options, remaining), want);
    }

    #[tokio::test]
    async fn immediate_success() -> anyhow::Result<()> {
        let mut call = MockCall::new();
        call.expect_call().once().returning(|_| success());
        let inner = async move |d| call.call(d);

        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .once()
            .return_const(None);
        let backoff_policy = MockBackoffPolicy::new();

        let response = retry_loop(
            inner,
            async |_| {},
            "GetInstance",
            Arc::new(retry_policy),
            Arc::new(backoff_policy),
        )
        .await?;
        assert_eq!(response, "success");
        Ok(())
    }

    #[tokio::test]
    async fn immediate_failure() -> anyhow::Result<()> {
        let mut call = MockCall::new();
        call.expect_call().once().returning(|_| not_found());
        let inner = async move |d| call.call(d);

        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .once()
            .return_const(None);
        retry_policy
            .expect_on_error()
            .once()
            .returning(|_, _, e| RetryResult::Permanent(e));
        let backoff_policy = MockBackoffPolicy::new();

        let err = retry_loop(
            inner,
            async |_| {},
            "GetInstance",
            Arc::new(retry_policy),
            Arc::new(backoff_policy),
        )
        .await
        .unwrap_err();
        assert!(!err.is_exhausted(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(404));
        Ok(())
    }

    #[tokio::test]
    async fn retry_success() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut call = MockCall::new();
        call.expect_call()
            .once()
            .in_sequence(&mut seq)
            .returning(|_| unavailable());
        call.expect_call()
            .once()
            .in_sequence(&mut seq)
            .returning(|_| unavailable());
        call.expect_call()
            .once()
            .in_sequence(&mut seq)
            .returning(|_| success());
        let inner = async move |d| call.call(d);

        let mut retry_policy = MockRetryPolicy::new();
        retry_policy.expect_remaining_time().return_const(None);
        retry_policy
            .expect_on_error()
            .times(2)
            .returning(|_, _, e| RetryResult::Continue(e));
        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy
            .expect_on_failure()
            .times(2)
            .returning(|_, count| Duration::from_millis(10 * count as u64));

        let delays = Mutex::new(Vec::new());
        let sleep = async |d| delays.lock().expect("test lock").push(d);
        let response = retry_loop(
            inner,
            sleep,
            "LaunchInstance",
            Arc::new(retry_policy),
            Arc::new(backoff_policy),
        )
        .await?;
        assert_eq!(response, "success");
        let delays = delays.into_inner().expect("test lock");
        assert_eq!(
            delays,
            vec![Duration::from_millis(10), Duration::from_millis(20)]
        );
        Ok(())
    }

    #[tokio::test]
    async fn exhausted() -> anyhow::Result<()> {
        let mut call = MockCall::new();
        call.expect_call().times(3).returning(|_| unavailable());
        let inner = async move |d| call.call(d);

        let mut retry_policy = MockRetryPolicy::new();
        retry_policy.expect_remaining_time().return_const(None);
        retry_policy
            .expect_on_error()
            .times(3)
            .returning(|_, count, e| {
                if count >= 3 {
                    RetryResult::Exhausted(e)
                } else {
                    RetryResult::Continue(e)
                }
            });
        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy
            .expect_on_failure()
            .times(2)
            .return_const(Duration::ZERO);

        let err = retry_loop(
            inner,
            async |_| {},
            "GetVcn",
            Arc::new(retry_policy),
            Arc::new(backoff_policy),
        )
        .await
        .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(503));
        let source = err.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(source.is_some(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn transient_then_permanent() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut call = MockCall::new();
        call.expect_call()
            .once()
            .in_sequence(&mut seq)
            .returning(|_| unavailable());
        call.expect_call()
            .once()
            .in_sequence(&mut seq)
            .returning(|_| not_found());
        let inner = async move |d| call.call(d);

        let policy = Arc::new(crate::retry_policy::LimitedAttemptCount::new(5));
        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy
            .expect_on_failure()
            .once()
            .return_const(Duration::ZERO);

        let err = retry_loop(
            inner,
            async |_| {},
            "GetVcn",
            policy,
            Arc::new(backoff_policy),
        )
        .await
        .unwrap_err();
        assert!(!err.is_exhausted(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(404));
        Ok(())
    }

    #[tokio::test]
    async fn no_sleep_past_remaining_time() -> anyhow::Result<()> {
        let mut call = MockCall::new();
        call.expect_call()
            .once()
            .withf(|d| d == &Some(Duration::from_secs(5)))
            .returning(|_| unavailable());
        let inner = async move |d| call.call(d);

        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .return_const(Some(Duration::from_secs(5)));
        retry_policy
            .expect_on_error()
            .once()
            .returning(|_, _, e| RetryResult::Continue(e));
        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy
            .expect_on_failure()
            .once()
            .return_const(Duration::from_secs(10));
        let mut sleep = MockSleep::new();
        sleep.expect_sleep().never();

        let err = retry_loop(
            inner,
            async move |d| sleep.sleep(d).await,
            "GetVcn",
            Arc::new(retry_policy),
            Arc::new(backoff_policy),
        )
        .await
        .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        Ok(())
    }

    fn success() -> Result<String> {
        Ok("success".into())
    }

    fn unavailable() -> Result<String> {
        Err(Error::service(ServiceError::new(
            503,
            "ServiceUnavailable",
            "try-again",
        )))
    }

    fn not_found() -> Result<String> {
        Err(Error::service(ServiceError::new(
            404,
            "NotAuthorizedOrNotFound",
            "uh-oh",
        )))
    }

    trait Call {
        fn call(&self, d: Option<Duration>) -> Result<String>;
    }

    mockall::mock! {
        Call {}
        impl Call for Call {
            fn call(&self, d: Option<Duration>) -> Result<String>;
        }
    }

    trait Sleep {
        fn sleep(&self, d: Duration) -> impl Future<Output = ()>;
    }

    mockall::mock! {
        Sleep {}
        impl Sleep for Sleep {
            fn sleep(&self, d: Duration) -> impl Future<Output = ()> + Send;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        RetryPolicy {}
        impl RetryPolicy for RetryPolicy {
            fn on_error(&self, loop_start: std::time::Instant, attempt_count: u32, error: Error) -> RetryResult;
            fn remaining_time(&self, loop_start: std::time::Instant, attempt_count: u32) -> Option<Duration>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        BackoffPolicy {}
        impl BackoffPolicy for BackoffPolicy {
            fn on_failure(&self, loop_start: std::time::Instant, attempt_count: u32) -> Duration;
        }
    }
}
