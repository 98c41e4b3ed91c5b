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

//! A small service used by the HTTP client tests.

#![allow(dead_code)]

use gax::binding::{BinaryBody, Binder, FieldDescriptor, Operation, Request};
use gax::client_builder::internal::ClientConfig;
use gax::error::ValidationError;
use gax::headers::{ETAG, OPC_REQUEST_ID};
use gax::response::{FromHttpResponse, RawResponse};
use gax::retry_policy::RetryPolicyArg;
use gax::validation::Validate;
use oci_sdk_gax_internal::http::ReqwestClient;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWidgetDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct UpdateWidgetRequest {
    pub widget_id: Option<String>,
    pub details: Option<UpdateWidgetDetails>,
    pub if_match: Option<String>,
    pub opc_retry_token: Option<String>,
    pub upload: Option<BinaryBody>,
    pub retry_policy: Option<RetryPolicyArg>,
}

impl UpdateWidgetRequest {
    pub fn new<T: Into<String>>(widget_id: T) -> Self {
        Self {
            widget_id: Some(widget_id.into()),
            ..Default::default()
        }
    }
}

const WIDGET_ID: FieldDescriptor = FieldDescriptor::path("WidgetId", "widgetId");
const DETAILS: FieldDescriptor = FieldDescriptor::body("UpdateWidgetDetails");
const IF_MATCH: FieldDescriptor = FieldDescriptor::header("IfMatch", "if-match");
const OPC_RETRY_TOKEN: FieldDescriptor = FieldDescriptor::header("OpcRetryToken", "opc-retry-token");

impl Validate for UpdateWidgetRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Request for UpdateWidgetRequest {
    type Response = UpdateWidgetResponse;

    fn operation() -> Operation {
        Operation {
            name: "UpdateWidget",
            method: http::Method::PUT,
            path_template: "/widgets/{widgetId}",
        }
    }

    fn bind(&self, binder: Binder) -> gax::Result<Binder> {
        binder
            .parameter(&WIDGET_ID, self.widget_id.as_ref())
            .parameter(&IF_MATCH, self.if_match.as_ref())
            .parameter(&OPC_RETRY_TOKEN, self.opc_retry_token.as_ref())
            .body(&DETAILS, self.details.as_ref())
    }

    fn retry_policy(&self) -> Option<&RetryPolicyArg> {
        self.retry_policy.as_ref()
    }

    fn binary_body(&self) -> Option<BinaryBody> {
        self.upload.clone()
    }

    fn ensure_retry_token(&mut self) {
        gax::retry_token::ensure(&mut self.opc_retry_token);
    }
}

#[derive(Clone, Debug, Default)]
pub struct UpdateWidgetResponse {
    pub widget: Widget,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub status: u16,
}

impl FromHttpResponse for UpdateWidgetResponse {
    fn from_http_response(raw_response: RawResponse) -> gax::Result<Self> {
        Ok(Self {
            widget: raw_response.json()?,
            etag: raw_response.header(ETAG)?,
            opc_request_id: raw_response.header(OPC_REQUEST_ID)?,
            status: raw_response.status().as_u16(),
        })
    }
}

pub fn test_config(endpoint: String) -> ClientConfig {
    ClientConfig {
        endpoint: Some(endpoint),
        ..ClientConfig::default()
    }
}

/// Sends the client logs to the test output, shown for failing tests.
pub fn enable_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub fn test_client(endpoint: String) -> ReqwestClient {
    ReqwestClient::new(test_config(endpoint)).expect("test client initializes")
}
