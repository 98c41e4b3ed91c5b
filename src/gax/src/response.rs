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

//! Response types.
//!
//! The transport returns a [RawResponse]: the status code, the headers, and
//! the body bytes. Generated response envelopes implement [FromHttpResponse]
//! to decode the body into their embedded model and project the headers
//! into typed fields. Each envelope keeps the raw response for diagnostics.
//!
//! # Example
//! ```
//! # use oci_sdk_gax::Result;
//! # use oci_sdk_gax::response::{FromHttpResponse, RawResponse};
//! #[derive(Debug, Default, serde::Deserialize)]
//! struct Vcn {
//!     id: Option<String>,
//! }
//!
//! #[derive(Debug)]
//! struct GetVcnResponse {
//!     vcn: Vcn,
//!     etag: Option<String>,
//!     raw_response: RawResponse,
//! }
//!
//! impl FromHttpResponse for GetVcnResponse {
//!     fn from_http_response(raw_response: RawResponse) -> Result<Self> {
//!         Ok(Self {
//!             vcn: raw_response.json()?,
//!             etag: raw_response.header("etag")?,
//!             raw_response,
//!         })
//!     }
//! }
//!
//! let mut headers = http::HeaderMap::new();
//! headers.insert("etag", http::HeaderValue::from_static("abc"));
//! let raw = RawResponse::new(http::StatusCode::OK, headers, r#"{"id":"ocid1.vcn"}"#.into());
//! let response = GetVcnResponse::from_http_response(raw)?;
//! assert_eq!(response.vcn.id.as_deref(), Some("ocid1.vcn"));
//! assert_eq!(response.etag.as_deref(), Some("abc"));
//! # Result::<()>::Ok(())
//! ```

use crate::Result;
use crate::error::{Error, ServiceError};
use http::{HeaderMap, StatusCode};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The HTTP response as returned by the transport.
#[derive(Clone, Debug)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: bytes::Bytes,
}

impl RawResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: bytes::Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &bytes::Bytes {
        &self.body
    }

    /// Decodes the body as JSON.
    ///
    /// An empty body, as sent with `204 No Content` and with some `200`
    /// responses, decodes to the default value.
    pub fn json<T>(&self) -> Result<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        if self.body.is_empty() {
            return Ok(T::default());
        }
        serde_json::from_slice::<T>(&self.body).map_err(Error::deser)
    }

    /// Parses a header into its typed representation.
    ///
    /// Absent headers return `Ok(None)`, malformed headers are
    /// deserialization errors.
    pub fn header<T: FromHeaderValue>(&self, name: &str) -> Result<Option<T>> {
        let Some(value) = self.headers.get(name) else {
            return Ok(None);
        };
        let value = value.to_str().map_err(|e| header_error(name, e.into()))?;
        T::from_header_value(value)
            .map(Some)
            .map_err(|e| header_error(name, e))
    }

    /// Converts non-2xx responses into service errors.
    pub fn error_for_status(self) -> Result<Self> {
        if self.status.is_success() {
            return Ok(self);
        }
        Err(Error::service(ServiceError::from_http(
            self.status.as_u16(),
            self.headers,
            &self.body,
        )))
    }
}

fn header_error(name: &str, source: BoxError) -> Error {
    Error::deser(format!("header `{name}` cannot be parsed: {source}"))
}

/// Implemented by every generated response envelope.
pub trait FromHttpResponse: Sized {
    fn from_http_response(raw_response: RawResponse) -> Result<Self>;
}

/// Types that can be parsed from a response header.
pub trait FromHeaderValue: Sized {
    fn from_header_value(value: &str) -> std::result::Result<Self, BoxError>;
}

impl FromHeaderValue for String {
    fn from_header_value(value: &str) -> std::result::Result<Self, BoxError> {
        Ok(value.to_string())
    }
}

macro_rules! parsed_header {
    ($($t:ty),*) => {
        $(
            impl FromHeaderValue for $t {
                fn from_header_value(value: &str) -> std::result::Result<Self, BoxError> {
                    Ok(value.trim().parse::<$t>()?)
                }
            }
        )*
    };
}

parsed_header!(i32, i64, u32, u64, f64, bool);

impl FromHeaderValue for wkt::Timestamp {
    fn from_header_value(value: &str) -> std::result::Result<Self, BoxError> {
        Ok(wkt::Timestamp::from_header_value(value)?)
    }
}
