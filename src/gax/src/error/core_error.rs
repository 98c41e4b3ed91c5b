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

use super::ServiceError;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. For example, the
/// service may return an error, the transport may be unable to create the
/// necessary connection to make a request, the request may fail validation
/// before it is sent, or the response may be impossible to decode.
///
/// Applications can use the `is_*()` predicates to decide how to handle each
/// error. The [Display][std::fmt::Display] implementation uses fixed
/// prefixes, and the validation messages are reported verbatim, so tests and
/// log processors can match on them.
///
/// # Example
/// ```
/// # use oci_sdk_gax::error::Error;
/// match example_function() {
///     Err(e) if e.is_validation() => println!("fix the request: {e}"),
///     Err(e) if e.as_service().is_some() => println!("service error: {e}"),
///     Err(e) => println!("some other error: {e}"),
///     Ok(_) => println!("success, how boring"),
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::io("something failed"))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error representing a failure to bind the request.
    ///
    /// The request is missing a mandatory path, query, or header parameter,
    /// or one of the parameters cannot be represented in an HTTP request.
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// The request could not be bound to an HTTP request.
    ///
    /// No request was sent. The application needs to set the mandatory
    /// fields before retrying.
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// Creates an error representing an enum validation failure.
    pub fn validation(source: super::ValidationError) -> Self {
        Self {
            kind: ErrorKind::Validation,
            source: Some(source.into()),
        }
    }

    /// The request, or the response, contains unsupported enum values.
    pub fn is_validation(&self) -> bool {
        matches!(&self.kind, ErrorKind::Validation)
    }

    /// Returns the validation details, if this is a validation error.
    pub fn as_validation(&self) -> Option<&super::ValidationError> {
        match &self.kind {
            ErrorKind::Validation => self
                .source
                .as_ref()
                .and_then(|e| e.downcast_ref::<super::ValidationError>()),
            _ => None,
        }
    }

    /// Creates an error representing a serialization problem.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error representing a deserialization problem.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// The body or one of the headers does not have the expected format.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error representing a transport problem.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Io,
            source: Some(source.into()),
        }
    }

    /// The transport could not complete the request.
    ///
    /// The request may or may not have reached the service.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// Creates an error representing a timeout.
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing an exhausted retry policy.
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Exhausted,
            source: Some(source.into()),
        }
    }

    /// The retry policy stopped the retry loop.
    ///
    /// The last error is available via [source()][StdError::source].
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    /// Creates an error with the information returned by the service.
    pub fn service(details: ServiceError) -> Self {
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// The error details returned by the service, if any.
    ///
    /// Exhausted errors report the details of the last attempt.
    pub fn as_service(&self) -> Option<&ServiceError> {
        match &self.kind {
            ErrorKind::Service(d) => Some(d.as_ref()),
            ErrorKind::Exhausted => self
                .source
                .as_ref()
                .and_then(|e| e.downcast_ref::<Error>())
                .and_then(Error::as_service),
            _ => None,
        }
    }

    /// The HTTP status code, if the service returned an error.
    pub fn http_status_code(&self) -> Option<u16> {
        self.as_service().map(ServiceError::status_code)
    }

    /// Creates an error that fits no other category.
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Other,
            source: Some(source.into()),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot bind the request to an HTTP request: {e}")
            }
            // Validation messages start with a fixed prefix, do not add more.
            (ErrorKind::Validation, Some(e)) => write!(f, "{e}"),
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Io, Some(e)) => write!(f, "the transport reports an error: {e}"),
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Exhausted, Some(e)) => write!(f, "{e}"),
            (ErrorKind::Service(d), _) => write!(f, "{d}"),
            (ErrorKind::Other, Some(e)) => {
                write!(f, "an unclassified problem making a request: {e}")
            }
            (_, None) => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

#[derive(Debug)]
enum ErrorKind {
    Binding,
    Validation,
    Serialization,
    Deserialization,
    Io,
    Timeout,
    Exhausted,
    Service(Box<ServiceError>),
    Other,
}

#[cfg(test)]
mod tests {
    use super::super::ValidationError;
    use super::*;

    #[test]
    fn binding() {
        let e = Error::binding("missing `instanceId`");
        assert!(e.is_binding(), "{e:?}");
        assert!(!e.is_validation(), "{e:?}");
        assert!(e.source().is_some(), "{e:?}");
        assert!(e.to_string().contains("missing `instanceId`"), "{e}");
    }

    #[test]
    fn validation() {
        let v = ValidationError::new(vec![
            "unsupported enum value for Action: JUMP. Supported values are: STOP.".to_string(),
        ]);
        let e = Error::validation(v.clone());
        assert!(e.is_validation(), "{e:?}");
        assert_eq!(e.as_validation(), Some(&v));
        assert!(
            e.to_string()
                .starts_with("unsupported enum value for Action: JUMP."),
            "{e}"
        );
    }

    #[test]
    fn serde() {
        let e = Error::ser("test");
        assert!(e.is_serialization(), "{e:?}");
        assert!(e.to_string().contains("test"), "{e}");

        let e = Error::deser("test");
        assert!(e.is_deserialization(), "{e:?}");
        assert!(!e.is_serialization(), "{e:?}");
        assert!(e.to_string().contains("test"), "{e}");
    }

    #[test]
    fn io_and_timeout() {
        let e = Error::io("connection reset");
        assert!(e.is_io(), "{e:?}");
        assert!(!e.is_timeout(), "{e:?}");

        let e = Error::timeout("too slow");
        assert!(e.is_timeout(), "{e:?}");
        assert!(!e.is_io(), "{e:?}");
        assert!(e.as_service().is_none(), "{e:?}");
    }

    #[test]
    fn service() {
        let details = ServiceError::new(404, "NotAuthorizedOrNotFound", "not found")
            .with_opc_request_id("req-123");
        let e = Error::service(details.clone());
        assert_eq!(e.as_service(), Some(&details));
        assert_eq!(e.http_status_code(), Some(404));
        assert!(e.to_string().contains("NotAuthorizedOrNotFound"), "{e}");
        assert!(e.source().is_none(), "{e:?}");
    }

    #[test]
    fn exhausted() {
        let details = ServiceError::new(503, "ServiceUnavailable", "try again");
        let e = Error::exhausted(Error::service(details.clone()));
        assert!(e.is_exhausted(), "{e:?}");
        assert_eq!(e.as_service(), Some(&details));
        assert_eq!(e.http_status_code(), Some(503));
        assert!(e.source().is_some(), "{e:?}");
    }

    #[test]
    fn other() {
        let e = Error::other("oops");
        assert!(!e.is_binding(), "{e:?}");
        assert!(e.to_string().contains("oops"), "{e}");
    }
}
