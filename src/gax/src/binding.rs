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

//! Convert request envelopes into HTTP requests.
//!
//! Each generated request declares, for each field, where the field goes in
//! the HTTP request. The generated code feeds the fields into a [Binder],
//! which substitutes path placeholders, collects query parameters and headers,
//! and serializes the body. All the missing or malformed fields are reported
//! in a single [BindingError].

use crate::Result;
use crate::error::Error;
use crate::error::binding::{BindingError, BindingFail, FieldMismatch};
use crate::request_parameter::RequestParameter;
use crate::response::FromHttpResponse;
use crate::retry_policy::RetryPolicyArg;
use crate::validation::Validate;
use http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

/// Characters escaped in path segments and query strings.
const ESCAPED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const APPLICATION_JSON: &str = "application/json";
const OCTET_STREAM: &str = "application/octet-stream";

/// Where a request field is placed in the HTTP request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Body,
    Path,
    Query,
    Header,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Body => "body",
            Self::Path => "path",
            Self::Query => "query",
            Self::Header => "header",
        };
        f.write_str(s)
    }
}

/// How repeated query parameters are encoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollectionFormat {
    /// `name=a&name=b`
    #[default]
    Multi,
    /// `name=a,b`
    Csv,
}

/// Static binding metadata for one request field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// The field name used in error messages, e.g. `InstanceId`.
    pub field_name: &'static str,
    /// The name on the wire, e.g. `instanceId` or `opc-retry-token`.
    pub wire_name: &'static str,
    pub location: Location,
    pub required: bool,
    /// Skip the parameter when it formats to the empty string.
    pub omit_empty: bool,
    pub collection_format: CollectionFormat,
}

impl FieldDescriptor {
    const fn new(field_name: &'static str, wire_name: &'static str, location: Location) -> Self {
        Self {
            field_name,
            wire_name,
            location,
            required: false,
            omit_empty: false,
            collection_format: CollectionFormat::Multi,
        }
    }

    /// A path parameter, path parameters are always mandatory.
    pub const fn path(field_name: &'static str, wire_name: &'static str) -> Self {
        Self::new(field_name, wire_name, Location::Path).required()
    }

    pub const fn query(field_name: &'static str, wire_name: &'static str) -> Self {
        Self::new(field_name, wire_name, Location::Query)
    }

    pub const fn header(field_name: &'static str, wire_name: &'static str) -> Self {
        Self::new(field_name, wire_name, Location::Header)
    }

    pub const fn body(field_name: &'static str) -> Self {
        Self::new(field_name, "", Location::Body)
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn omit_empty(mut self) -> Self {
        self.omit_empty = true;
        self
    }

    pub const fn csv(mut self) -> Self {
        self.collection_format = CollectionFormat::Csv;
        self
    }
}

/// The static description of an operation.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    /// The operation name, used in logs and errors.
    pub name: &'static str,
    pub method: http::Method,
    /// The path relative to the endpoint, e.g. `/instances/{instanceId}`.
    pub path_template: &'static str,
}

/// A source of bytes for binary request bodies.
///
/// The retry loop opens the source once per attempt, so implementations must
/// return a fresh reader, positioned at the start, on every call.
pub trait ReopenableReader: std::fmt::Debug + Send + Sync {
    fn open(&self) -> std::io::Result<Box<dyn Read + Send>>;

    /// The length of the body, if known before reading it.
    fn content_length(&self) -> Option<u64> {
        None
    }
}

/// A binary request body.
#[derive(Clone, Debug)]
pub struct BinaryBody {
    source: Arc<dyn ReopenableReader>,
}

impl BinaryBody {
    pub fn new<T: ReopenableReader + 'static>(source: T) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// A body read from a file, the file is opened again on each attempt.
    pub fn from_path<P: Into<PathBuf>>(path: P) -> Self {
        Self::new(FileSource(path.into()))
    }

    /// Returns a fresh reader over the body contents.
    pub fn open(&self) -> std::io::Result<Box<dyn Read + Send>> {
        self.source.open()
    }

    pub fn content_length(&self) -> Option<u64> {
        self.source.content_length()
    }

    /// Reads the full body into memory.
    pub fn read_all(&self) -> std::io::Result<bytes::Bytes> {
        let mut reader = self.open()?;
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        Ok(bytes::Bytes::from(buffer))
    }
}

impl From<bytes::Bytes> for BinaryBody {
    fn from(value: bytes::Bytes) -> Self {
        Self::new(BytesSource(value))
    }
}

impl From<Vec<u8>> for BinaryBody {
    fn from(value: Vec<u8>) -> Self {
        Self::from(bytes::Bytes::from(value))
    }
}

impl From<&'static str> for BinaryBody {
    fn from(value: &'static str) -> Self {
        Self::from(bytes::Bytes::from_static(value.as_bytes()))
    }
}

#[derive(Debug)]
struct BytesSource(bytes::Bytes);

impl ReopenableReader for BytesSource {
    fn open(&self) -> std::io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(std::io::Cursor::new(self.0.clone())))
    }

    fn content_length(&self) -> Option<u64> {
        Some(self.0.len() as u64)
    }
}

#[derive(Debug)]
struct FileSource(PathBuf);

impl ReopenableReader for FileSource {
    fn open(&self) -> std::io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(std::fs::File::open(&self.0)?))
    }

    fn content_length(&self) -> Option<u64> {
        std::fs::metadata(&self.0).ok().map(|m| m.len())
    }
}

/// The body of a bound request.
#[derive(Clone, Debug, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(bytes::Bytes),
    Binary(BinaryBody),
}

/// A fully bound HTTP request, independent of the transport.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    operation: &'static str,
    method: http::Method,
    path: String,
    query: Vec<(String, String)>,
    headers: HeaderMap,
    body: RequestBody,
}

impl HttpRequest {
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn method(&self) -> &http::Method {
        &self.method
    }

    /// The path with all placeholders substituted and escaped.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query parameters, in declaration order, not escaped.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Returns the first value of a query parameter.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the value of a header, if it is set and is valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> &RequestBody {
        &self.body
    }

    /// The escaped query string, without the leading `?`.
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(k, ESCAPED),
                    utf8_percent_encode(v, ESCAPED)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// The full URI for this request against `endpoint`.
    pub fn uri(&self, endpoint: &str) -> String {
        let endpoint = endpoint.trim_end_matches('/');
        if self.query.is_empty() {
            return format!("{endpoint}{}", self.path);
        }
        format!("{endpoint}{}?{}", self.path, self.query_string())
    }
}

/// Accumulates the fields of a request into an [HttpRequest].
#[derive(Debug)]
pub struct Binder {
    operation: Operation,
    path: String,
    query: Vec<(String, String)>,
    headers: HeaderMap,
    body: RequestBody,
    mismatches: Vec<FieldMismatch>,
    // Placeholders of path fields already reported in `mismatches`.
    reported_placeholders: Vec<&'static str>,
}

impl Binder {
    pub fn new(operation: &Operation) -> Self {
        Self {
            operation: operation.clone(),
            path: operation.path_template.to_string(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
            mismatches: Vec::new(),
            reported_placeholders: Vec::new(),
        }
    }

    /// Binds a path, query, or header parameter.
    ///
    /// Absent values are skipped, unless the field is mandatory.
    pub fn parameter<P>(mut self, field: &FieldDescriptor, value: Option<&P>) -> Self
    where
        P: RequestParameter + ?Sized,
    {
        let Some(value) = value else {
            if field.required {
                self.mismatch(field, BindingFail::Unset);
            }
            return self;
        };
        let formatted = match value.format() {
            Ok(s) => s,
            Err(e) => {
                self.mismatch(field, BindingFail::Invalid(e.to_string()));
                return self;
            }
        };
        match field.location {
            Location::Path => self.path_value(field, &formatted),
            Location::Query => self.query_value(field, formatted),
            Location::Header => self.header_value(field, &formatted),
            Location::Body => self.mismatch(
                field,
                BindingFail::Invalid("body fields must use `body()`".to_string()),
            ),
        }
        self
    }

    /// Binds a repeated query parameter.
    ///
    /// Empty collections are skipped, unless the field is mandatory.
    pub fn parameters<P: RequestParameter>(mut self, field: &FieldDescriptor, values: &[P]) -> Self {
        if values.is_empty() {
            if field.required {
                self.mismatch(field, BindingFail::Unset);
            }
            return self;
        }
        let formatted = match values.iter().map(P::format).collect::<std::result::Result<Vec<_>, _>>() {
            Ok(v) => v,
            Err(e) => {
                self.mismatch(field, BindingFail::Invalid(e.to_string()));
                return self;
            }
        };
        match field.collection_format {
            CollectionFormat::Multi => formatted
                .into_iter()
                .for_each(|v| self.query.push((field.wire_name.to_string(), v))),
            CollectionFormat::Csv => self
                .query
                .push((field.wire_name.to_string(), formatted.join(","))),
        }
        self
    }

    /// Serializes the JSON body.
    pub fn body<T: serde::Serialize>(mut self, field: &FieldDescriptor, value: Option<&T>) -> Result<Self> {
        let Some(value) = value else {
            if field.required {
                self.mismatch(field, BindingFail::Unset);
            }
            return Ok(self);
        };
        let body = serde_json::to_vec(value).map_err(Error::ser)?;
        self.body = RequestBody::Json(bytes::Bytes::from(body));
        Ok(self)
    }

    /// Sets a binary body, replacing any JSON body.
    pub fn binary(mut self, body: BinaryBody) -> Self {
        self.body = RequestBody::Binary(body);
        self
    }

    /// Completes the binding.
    ///
    /// Fails if any mandatory field was missing or malformed, or if the path
    /// still contains placeholders.
    pub fn finish(mut self) -> Result<HttpRequest> {
        for placeholder in unbound_placeholders(&self.path) {
            if self
                .reported_placeholders
                .iter()
                .any(|p| *p == placeholder)
            {
                continue;
            }
            self.mismatches.push(FieldMismatch {
                field_name: placeholder,
                location: Location::Path,
                problem: BindingFail::Unbound,
            });
        }
        if !self.mismatches.is_empty() {
            return Err(Error::binding(BindingError {
                operation: self.operation.name,
                mismatches: self.mismatches,
            }));
        }
        let content_type = match &self.body {
            RequestBody::Empty => None,
            RequestBody::Json(_) => Some(APPLICATION_JSON),
            RequestBody::Binary(b) => {
                if let Some(len) = b.content_length() {
                    self.headers
                        .entry(CONTENT_LENGTH)
                        .or_insert_with(|| HeaderValue::from(len));
                }
                Some(OCTET_STREAM)
            }
        };
        if let Some(ct) = content_type {
            self.headers
                .entry(CONTENT_TYPE)
                .or_insert_with(|| HeaderValue::from_static(ct));
        }
        self.headers
            .entry(ACCEPT)
            .or_insert_with(|| HeaderValue::from_static(APPLICATION_JSON));
        Ok(HttpRequest {
            operation: self.operation.name,
            method: self.operation.method,
            path: self.path,
            query: self.query,
            headers: self.headers,
            body: self.body,
        })
    }

    fn path_value(&mut self, field: &FieldDescriptor, value: &str) {
        if value.is_empty() {
            self.mismatch(field, BindingFail::Empty);
            return;
        }
        let placeholder = format!("{{{}}}", field.wire_name);
        if !self.path.contains(&placeholder) {
            self.mismatch(
                field,
                BindingFail::Invalid(format!("the path has no `{placeholder}` placeholder")),
            );
            return;
        }
        let escaped = utf8_percent_encode(value, ESCAPED).to_string();
        self.path = self.path.replace(&placeholder, &escaped);
    }

    fn query_value(&mut self, field: &FieldDescriptor, value: String) {
        if value.is_empty() && field.omit_empty {
            return;
        }
        self.query.push((field.wire_name.to_string(), value));
    }

    fn header_value(&mut self, field: &FieldDescriptor, value: &str) {
        if value.is_empty() && field.omit_empty {
            return;
        }
        let name = match HeaderName::from_bytes(field.wire_name.as_bytes()) {
            Ok(n) => n,
            Err(e) => {
                self.mismatch(field, BindingFail::Invalid(e.to_string()));
                return;
            }
        };
        match HeaderValue::from_str(value) {
            Ok(v) => {
                self.headers.insert(name, v);
            }
            Err(e) => self.mismatch(field, BindingFail::Invalid(e.to_string())),
        }
    }

    fn mismatch(&mut self, field: &FieldDescriptor, problem: BindingFail) {
        if field.location == Location::Path {
            self.reported_placeholders.push(field.wire_name);
        }
        self.mismatches.push(FieldMismatch {
            field_name: field.field_name.to_string(),
            location: field.location,
            problem,
        });
    }
}

fn unbound_placeholders(path: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut rest = path;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        found.push(rest[start + 1..start + len].to_string());
        rest = &rest[start + len + 1..];
    }
    found
}

/// Implemented by every generated request envelope.
pub trait Request: Validate {
    /// The response envelope.
    type Response: FromHttpResponse;

    /// The static description of the operation.
    fn operation() -> Operation;

    /// Feeds the request fields into `binder`.
    fn bind(&self, binder: Binder) -> Result<Binder>;

    /// The per-request retry policy, it overrides the client policy.
    fn retry_policy(&self) -> Option<&RetryPolicyArg> {
        None
    }

    /// The binary body, if the operation sends one.
    fn binary_body(&self) -> Option<BinaryBody> {
        None
    }

    /// Sets the idempotency token if the operation has one and the
    /// application did not set it.
    fn ensure_retry_token(&mut self) {}
}

/// Validates and binds `request`.
///
/// Validation failures are returned before any binding is attempted, and no
/// request is sent in either case.
pub fn to_http_request<R: Request>(request: &R) -> Result<HttpRequest> {
    request.validate().map_err(Error::validation)?;
    let operation = R::operation();
    let mut binder = request.bind(Binder::new(&operation))?;
    if let Some(body) = request.binary_body() {
        binder = binder.binary(body);
    }
    let http_request = binder.finish()?;
    tracing::debug!(
        operation = operation.name,
        method = %http_request.method(),
        path = http_request.path(),
        "bound request"
    );
    Ok(http_request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::response::RawResponse;
    use crate::validation::EnumValidator;
    use test_case::test_case;
    use wkt::{Enumeration, UnknownEnumValue};

    const INSTANCE_ID: FieldDescriptor = FieldDescriptor::path("InstanceId", "instanceId");
    const ACTION: FieldDescriptor = FieldDescriptor::query("Action", "action").required();
    const LIMIT: FieldDescriptor = FieldDescriptor::query("Limit", "limit");
    const PAGE: FieldDescriptor = FieldDescriptor::query("Page", "page").omit_empty();
    const IDS: FieldDescriptor = FieldDescriptor::query("Ids", "id");
    const FIELDS: FieldDescriptor = FieldDescriptor::query("Fields", "fields").csv();
    const IF_MATCH: FieldDescriptor = FieldDescriptor::header("IfMatch", "if-match");
    const DETAILS: FieldDescriptor = FieldDescriptor::body("Details");

    fn operation() -> Operation {
        Operation {
            name: "InstanceAction",
            method: http::Method::POST,
            path_template: "/instances/{instanceId}",
        }
    }

    #[test]
    fn path_substitution() -> anyhow::Result<()> {
        let got = Binder::new(&operation())
            .parameter(&INSTANCE_ID, Some("ocid1.instance.oc1..a b/c"))
            .parameter(&ACTION, Some("STOP"))
            .finish()?;
        assert_eq!(got.method(), &http::Method::POST);
        assert_eq!(got.path(), "/instances/ocid1.instance.oc1..a%20b%2Fc");
        assert_eq!(got.query_value("action"), Some("STOP"));
        assert_eq!(got.header("accept"), Some("application/json"));
        assert!(got.header("content-type").is_none(), "{got:?}");
        Ok(())
    }

    #[test]
    fn missing_fields_accumulate() {
        let err = Binder::new(&operation())
            .parameter::<str>(&INSTANCE_ID, None)
            .parameter::<str>(&ACTION, None)
            .finish()
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let source = std::error::Error::source(&err)
            .and_then(|e| e.downcast_ref::<BindingError>())
            .expect("source should be a BindingError");
        assert_eq!(source.operation, "InstanceAction");
        let names: Vec<_> = source
            .mismatches
            .iter()
            .map(|m| (m.field_name.as_str(), m.location))
            .collect();
        assert_eq!(
            names,
            vec![("InstanceId", Location::Path), ("Action", Location::Query)]
        );
        assert_eq!(
            err.to_string(),
            "cannot bind the request to an HTTP request: InstanceAction: \
             path field `InstanceId` needs to be set AND query field `Action` needs to be set"
        );
    }

    #[test]
    fn unbound_placeholder_without_field() {
        let op = Operation {
            name: "GetVnicAttachment",
            method: http::Method::GET,
            path_template: "/vnicAttachments/{vnicAttachmentId}",
        };
        let err = Binder::new(&op).finish().unwrap_err();
        let source = std::error::Error::source(&err)
            .and_then(|e| e.downcast_ref::<BindingError>())
            .expect("source should be a BindingError");
        assert_eq!(
            source.mismatches,
            vec![FieldMismatch {
                field_name: "vnicAttachmentId".to_string(),
                location: Location::Path,
                problem: BindingFail::Unbound,
            }]
        );
    }

    #[test]
    fn empty_path_value_reported_once() {
        let err = Binder::new(&operation())
            .parameter(&INSTANCE_ID, Some(""))
            .parameter(&ACTION, Some("STOP"))
            .finish()
            .unwrap_err();
        let source = std::error::Error::source(&err)
            .and_then(|e| e.downcast_ref::<BindingError>())
            .expect("source should be a BindingError");
        assert_eq!(source.mismatches.len(), 1, "{source:?}");
        assert_eq!(source.mismatches[0].problem, BindingFail::Empty);
    }

    #[test]
    fn empty_path_value() {
        let err = Binder::new(&operation())
            .parameter(&INSTANCE_ID, Some(""))
            .parameter(&ACTION, Some("STOP"))
            .finish()
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("cannot be empty"), "{err}");
    }

    #[test_case(Some(""), None; "empty omitted")]
    #[test_case(Some("abc"), Some("abc"); "present")]
    #[test_case(None, None; "absent")]
    fn omit_empty(input: Option<&str>, want: Option<&str>) -> anyhow::Result<()> {
        let got = Binder::new(&operation())
            .parameter(&INSTANCE_ID, Some("i"))
            .parameter(&ACTION, Some("STOP"))
            .parameter(&PAGE, input)
            .finish()?;
        assert_eq!(got.query_value("page"), want);
        Ok(())
    }

    #[test]
    fn query_order_and_collections() -> anyhow::Result<()> {
        let got = Binder::new(&operation())
            .parameter(&INSTANCE_ID, Some("i"))
            .parameter(&LIMIT, Some(&10))
            .parameter(&ACTION, Some("STOP"))
            .parameters(&IDS, &["a", "b"])
            .parameters(&FIELDS, &["x", "y"])
            .finish()?;
        assert_eq!(
            got.query_string(),
            "limit=10&action=STOP&id=a&id=b&fields=x%2Cy"
        );
        assert_eq!(
            got.uri("https://iaas.us-ashburn-1.oraclecloud.com/20160918/"),
            "https://iaas.us-ashburn-1.oraclecloud.com/20160918/instances/i?limit=10&action=STOP&id=a&id=b&fields=x%2Cy"
        );
        Ok(())
    }

    #[test]
    fn headers() -> anyhow::Result<()> {
        let got = Binder::new(&operation())
            .parameter(&INSTANCE_ID, Some("i"))
            .parameter(&ACTION, Some("STOP"))
            .parameter(&IF_MATCH, Some("etag-1"))
            .finish()?;
        assert_eq!(got.header("if-match"), Some("etag-1"));

        let err = Binder::new(&operation())
            .parameter(&INSTANCE_ID, Some("i"))
            .parameter(&ACTION, Some("STOP"))
            .parameter(&IF_MATCH, Some("bad\nvalue"))
            .finish()
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[test]
    fn json_body() -> anyhow::Result<()> {
        let body = serde_json::json!({"actionType": "reboot"});
        let got = Binder::new(&operation())
            .parameter(&INSTANCE_ID, Some("i"))
            .parameter(&ACTION, Some("RESET"))
            .body(&DETAILS, Some(&body))?
            .finish()?;
        assert_eq!(got.header("content-type"), Some("application/json"));
        match got.body() {
            RequestBody::Json(b) => {
                let got = serde_json::from_slice::<serde_json::Value>(b)?;
                assert_eq!(got, body);
            }
            b => panic!("unexpected body {b:?}"),
        }
        Ok(())
    }

    #[test]
    fn absent_optional_body() -> anyhow::Result<()> {
        let got = Binder::new(&operation())
            .parameter(&INSTANCE_ID, Some("i"))
            .parameter(&ACTION, Some("RESET"))
            .body::<serde_json::Value>(&DETAILS, None)?
            .finish()?;
        assert!(matches!(got.body(), RequestBody::Empty), "{got:?}");
        Ok(())
    }

    #[test]
    fn binary_body() -> anyhow::Result<()> {
        let got = Binder::new(&operation())
            .parameter(&INSTANCE_ID, Some("i"))
            .parameter(&ACTION, Some("STOP"))
            .binary(BinaryBody::from("payload"))
            .finish()?;
        assert_eq!(got.header("content-type"), Some("application/octet-stream"));
        assert_eq!(got.header("content-length"), Some("7"));
        let RequestBody::Binary(body) = got.body() else {
            panic!("unexpected body {:?}", got.body());
        };
        // Each attempt reads the full body again.
        assert_eq!(body.read_all()?, "payload");
        assert_eq!(body.read_all()?, "payload");
        Ok(())
    }

    #[test]
    fn placeholders() {
        assert_eq!(unbound_placeholders("/a/{b}/c/{d}"), vec!["b", "d"]);
        assert!(unbound_placeholders("/a/b").is_empty());
        assert!(unbound_placeholders("/a/{b").is_empty());
    }

    #[derive(Clone, Debug, PartialEq)]
    enum Action {
        Stop,
        UnknownValue(UnknownEnumValue),
    }

    impl From<&str> for Action {
        fn from(value: &str) -> Self {
            match value {
                "STOP" => Self::Stop,
                _ => Self::UnknownValue(UnknownEnumValue::new(value)),
            }
        }
    }

    impl Enumeration for Action {
        fn labels() -> &'static [&'static str] {
            &["STOP"]
        }
        fn value(&self) -> &str {
            match self {
                Self::Stop => "STOP",
                Self::UnknownValue(u) => u.as_str(),
            }
        }
    }

    #[derive(Debug, Default)]
    struct Empty;

    impl FromHttpResponse for Empty {
        fn from_http_response(_: RawResponse) -> Result<Self> {
            Ok(Self)
        }
    }

    #[derive(Debug)]
    struct TestRequest {
        instance_id: Option<String>,
        action: Option<Action>,
    }

    impl Validate for TestRequest {
        fn validate(&self) -> std::result::Result<(), ValidationError> {
            EnumValidator::new()
                .check("Action", self.action.as_ref())
                .finish()
        }
    }

    impl Request for TestRequest {
        type Response = Empty;
        fn operation() -> Operation {
            operation()
        }
        fn bind(&self, binder: Binder) -> Result<Binder> {
            Ok(binder
                .parameter(&INSTANCE_ID, self.instance_id.as_deref())
                .parameter(&ACTION, self.action.as_ref().map(Enumeration::value)))
        }
    }

    #[test]
    fn request_validation_first() {
        // Both validation and binding fail, validation is reported.
        let request = TestRequest {
            instance_id: None,
            action: Some(Action::from("JUMP")),
        };
        let err = to_http_request(&request).unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        assert_eq!(
            err.to_string(),
            "unsupported enum value for Action: JUMP. Supported values are: STOP."
        );
    }

    #[test]
    fn request_success() -> anyhow::Result<()> {
        let request = TestRequest {
            instance_id: Some("ocid1.instance".to_string()),
            action: Some(Action::Stop),
        };
        let got = to_http_request(&request)?;
        assert_eq!(got.operation(), "InstanceAction");
        assert_eq!(got.path(), "/instances/ocid1.instance");
        assert_eq!(got.query_value("action"), Some("STOP"));
        Ok(())
    }
}
