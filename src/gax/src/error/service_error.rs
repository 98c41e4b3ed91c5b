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

use http::HeaderMap;

/// The error details returned by the service.
///
/// When a request fails the service responds with a non-2xx status code and
/// a JSON body such as:
///
/// ```json
/// {"code": "NotAuthorizedOrNotFound", "message": "Authorization failed or requested resource not found."}
/// ```
///
/// The `opc-request-id` header identifies the request in support tickets.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ServiceError {
    status_code: u16,
    code: String,
    message: String,
    opc_request_id: Option<String>,
    operation_name: Option<String>,
    headers: HeaderMap,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

impl ServiceError {
    /// Creates a new instance from its components.
    pub fn new<C, M>(status_code: u16, code: C, message: M) -> Self
    where
        C: Into<String>,
        M: Into<String>,
    {
        Self {
            status_code,
            code: code.into(),
            message: message.into(),
            opc_request_id: None,
            operation_name: None,
            headers: HeaderMap::new(),
        }
    }

    /// Parses the service error from a failed HTTP response.
    ///
    /// Bodies that are not in the expected format are reported verbatim in
    /// the message, with an empty code.
    pub fn from_http(status_code: u16, headers: HeaderMap, body: &[u8]) -> Self {
        let (code, message) = match serde_json::from_slice::<ErrorBody>(body) {
            Ok(b) => (b.code, b.message),
            Err(_) => (String::new(), String::from_utf8_lossy(body).into_owned()),
        };
        let opc_request_id = headers
            .get(crate::headers::OPC_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        Self {
            status_code,
            code,
            message,
            opc_request_id,
            operation_name: None,
            headers,
        }
    }

    /// The HTTP status code, such as `404`.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The service error code, such as `NotAuthorizedOrNotFound`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// A human readable description of the error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The `opc-request-id` returned with the error.
    pub fn opc_request_id(&self) -> Option<&str> {
        self.opc_request_id.as_deref()
    }

    /// The name of the operation that failed, such as `InstanceAction`.
    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    /// The HTTP headers returned with the error.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Sets the request id.
    pub fn with_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.opc_request_id = Some(v.into());
        self
    }

    /// Sets the operation name.
    pub fn with_operation_name<T: Into<String>>(mut self, v: T) -> Self {
        self.operation_name = Some(v.into());
        self
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "the service reports an error with HTTP status {} and code `{}` described as: {}",
            self.status_code, self.code, self.message
        )?;
        if let Some(operation) = &self.operation_name {
            write!(f, ", operation: {operation}")?;
        }
        if let Some(id) = &self.opc_request_id {
            write!(f, ", opc-request-id: {id}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn from_http() {
        let mut headers = HeaderMap::new();
        headers.insert("opc-request-id", HeaderValue::from_static("abc/def"));
        let body = r#"{"code": "IncorrectState", "message": "the instance is stopping"}"#;
        let got = ServiceError::from_http(409, headers.clone(), body.as_bytes());
        assert_eq!(got.status_code(), 409);
        assert_eq!(got.code(), "IncorrectState");
        assert_eq!(got.message(), "the instance is stopping");
        assert_eq!(got.opc_request_id(), Some("abc/def"));
        assert_eq!(got.headers(), &headers);
        assert_eq!(got.operation_name(), None);
    }

    #[test]
    fn from_http_bad_body() {
        let got = ServiceError::from_http(502, HeaderMap::new(), b"<html>Bad Gateway</html>");
        assert_eq!(got.status_code(), 502);
        assert_eq!(got.code(), "");
        assert_eq!(got.message(), "<html>Bad Gateway</html>");
        assert_eq!(got.opc_request_id(), None);
    }

    #[test]
    fn display() {
        let got = ServiceError::new(404, "NotAuthorizedOrNotFound", "not found")
            .with_operation_name("GetClientVpn")
            .with_opc_request_id("req-1");
        let fmt = got.to_string();
        assert!(fmt.contains("404"), "{fmt}");
        assert!(fmt.contains("`NotAuthorizedOrNotFound`"), "{fmt}");
        assert!(fmt.contains("not found"), "{fmt}");
        assert!(fmt.contains("GetClientVpn"), "{fmt}");
        assert!(fmt.contains("req-1"), "{fmt}");
    }
}
