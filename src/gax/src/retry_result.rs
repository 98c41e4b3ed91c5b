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

//! Retry loop control types.

use crate::error::Error;

/// The decision of a retry policy after a failed attempt.
///
/// Every variant carries the error, so decorators can replace the decision
/// of an inner policy without losing it.
///
/// # Example
/// ```
/// # use oci_sdk_gax::error::Error;
/// # use oci_sdk_gax::retry_policy::RetryPolicy;
/// # use oci_sdk_gax::retry_result::RetryResult;
/// #[derive(Debug)]
/// struct RetryIo;
/// impl RetryPolicy for RetryIo {
///     fn on_error(&self, _: std::time::Instant, attempt_count: u32, error: Error) -> RetryResult {
///         if !error.is_io() {
///             return RetryResult::Permanent(error);
///         }
///         if attempt_count >= 3 {
///             return RetryResult::Exhausted(error);
///         }
///         RetryResult::Continue(error)
///     }
/// }
/// ```
#[derive(Debug)]
pub enum RetryResult {
    /// The error cannot be fixed by retrying, stop the loop.
    Permanent(Error),

    /// The error is retryable, but the policy limits are reached.
    Exhausted(Error),

    /// The error is retryable, continue the loop.
    Continue(Error),
}

impl RetryResult {
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::Permanent(_))
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }

    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// Discards the decision and returns the error.
    pub fn into_error(self) -> Error {
        match self {
            Self::Permanent(e) | Self::Exhausted(e) | Self::Continue(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;

    #[test]
    fn predicates() {
        let r = RetryResult::Permanent(not_found());
        assert!(r.is_permanent(), "{r:?}");
        assert!(!r.is_exhausted(), "{r:?}");
        assert!(!r.is_continue(), "{r:?}");

        let r = RetryResult::Exhausted(unavailable());
        assert!(!r.is_permanent(), "{r:?}");
        assert!(r.is_exhausted(), "{r:?}");
        assert!(!r.is_continue(), "{r:?}");

        let r = RetryResult::Continue(unavailable());
        assert!(!r.is_permanent(), "{r:?}");
        assert!(!r.is_exhausted(), "{r:?}");
        assert!(r.is_continue(), "{r:?}");
    }

    #[test]
    fn into_error() {
        let e = RetryResult::Continue(unavailable()).into_error();
        assert_eq!(e.http_status_code(), Some(503));
    }

    fn not_found() -> Error {
        Error::service(ServiceError::new(404, "NotAuthorizedOrNotFound", "not found"))
    }

    fn unavailable() -> Error {
        Error::service(ServiceError::new(503, "ServiceUnavailable", "try again"))
    }
}
