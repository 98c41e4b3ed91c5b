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

use oci_sdk_gax::backoff_policy::BackoffPolicy;
use oci_sdk_gax::error::{Error, ServiceError};
use oci_sdk_gax::exponential_backoff::{self, ExponentialBackoffBuilder};
use oci_sdk_gax::options::RequestOptions;
use oci_sdk_gax::retry_policy::*;
use std::time::{Duration, Instant};
use test_case::test_case;

fn service(status: u16, code: &str) -> Error {
    Error::service(ServiceError::new(status, code, "test-only"))
}

#[test_case(service(503, "ServiceUnavailable"), true; "unavailable")]
#[test_case(service(409, "IncorrectState"), true; "incorrect state")]
#[test_case(service(409, "Conflict"), false; "conflict")]
#[test_case(service(404, "NotAuthorizedOrNotFound"), false; "not found")]
#[test_case(Error::io("connection reset"), true; "io")]
#[test_case(Error::timeout("attempt timeout"), true; "timeout")]
#[test_case(Error::deser("bad json"), false; "deser")]
fn composed_policy_classifies(error: Error, retryable: bool) {
    let policy = DefaultRetryPolicy
        .with_time_limit(Duration::from_secs(60))
        .with_attempt_limit(3);
    let r = policy.on_error(Instant::now(), 1, error);
    assert_eq!(r.is_continue(), retryable, "{r:?}");
    assert_eq!(r.is_permanent(), !retryable, "{r:?}");
}

#[test]
fn composed_policy_exhausts() {
    let policy = DefaultRetryPolicy
        .with_time_limit(Duration::from_secs(60))
        .with_attempt_limit(3);
    let r = policy.on_error(Instant::now(), 3, service(503, ""));
    assert!(r.is_exhausted(), "{r:?}");
    let err = r.into_error();
    assert_eq!(err.http_status_code(), Some(503), "{err:?}");
}

#[test]
fn time_limit_reports_remaining() {
    let policy = DefaultRetryPolicy
        .with_time_limit(Duration::from_secs(60))
        .with_attempt_limit(3);
    let remaining = policy
        .remaining_time(Instant::now(), 1)
        .expect("time limited policies report the remaining time");
    assert!(remaining <= Duration::from_secs(60), "{remaining:?}");
    assert!(remaining > Duration::from_secs(50), "{remaining:?}");
}

#[test]
fn never_retry() {
    let r = NeverRetry.on_error(Instant::now(), 1, service(503, ""));
    assert!(r.is_exhausted(), "{r:?}");
}

#[test]
fn backoff_is_bounded() -> anyhow::Result<()> {
    let policy = ExponentialBackoffBuilder::new()
        .with_initial_delay(Duration::from_millis(10))
        .with_maximum_delay(Duration::from_millis(50))
        .build()?;
    for attempt in 1..20 {
        let delay = policy.on_failure(Instant::now(), attempt);
        assert!(delay <= Duration::from_millis(50), "{attempt} {delay:?}");
    }
    Ok(())
}

#[test]
fn backoff_rejects_bad_ranges() {
    let got = ExponentialBackoffBuilder::new()
        .with_initial_delay(Duration::from_secs(2))
        .with_maximum_delay(Duration::from_secs(1))
        .build();
    assert!(
        matches!(got, Err(exponential_backoff::Error::EmptyRange { .. })),
        "{got:?}"
    );
    let got = ExponentialBackoffBuilder::new().with_scaling(0.5).build();
    assert!(
        matches!(got, Err(exponential_backoff::Error::InvalidScalingFactor(_))),
        "{got:?}"
    );
}

#[test]
fn request_options_fall_back_to_defaults() {
    let mut defaults = RequestOptions::default();
    defaults.set_user_agent("client-agent/1.0");
    defaults.set_retry_policy(NeverRetry);
    defaults.set_attempt_timeout(Duration::from_secs(5));

    let mut options = RequestOptions::default();
    options.set_attempt_timeout(Duration::from_secs(1));
    let merged = options.with_defaults(&defaults);

    assert_eq!(merged.user_agent().as_deref(), Some("client-agent/1.0"));
    assert_eq!(merged.attempt_timeout(), &Some(Duration::from_secs(1)));
    assert!(merged.retry_policy().is_some());
    assert!(merged.backoff_policy().is_none());
}
