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

/// The power actions supported by [InstanceActionRequest].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum InstanceActionAction {
    /// Powers off the instance.
    Stop,
    /// Powers on the instance.
    Start,
    /// Gracefully reboots the instance by sending a shutdown command to the operating system.
    Softreset,
    /// Powers off the instance and then powers it back on.
    Reset,
    /// Gracefully shuts down the instance by sending a shutdown command to the operating system.
    Softstop,
    Senddiagnosticinterrupt,
    Diagnosticreboot,
    Rebootmigrate,
    /// A value not known to this version of the client.
    ///
    /// The service may add new values at any time, they are preserved
    /// verbatim but fail validation.
    UnknownValue(wkt::UnknownEnumValue),
}

impl wkt::Enumeration for InstanceActionAction {
    fn labels() -> &'static [&'static str] {
        &[
            "STOP",
            "START",
            "SOFTRESET",
            "RESET",
            "SOFTSTOP",
            "SENDDIAGNOSTICINTERRUPT",
            "DIAGNOSTICREBOOT",
            "REBOOTMIGRATE",
        ]
    }

    fn value(&self) -> &str {
        match self {
            Self::Stop => "STOP",
            Self::Start => "START",
            Self::Softreset => "SOFTRESET",
            Self::Reset => "RESET",
            Self::Softstop => "SOFTSTOP",
            Self::Senddiagnosticinterrupt => "SENDDIAGNOSTICINTERRUPT",
            Self::Diagnosticreboot => "DIAGNOSTICREBOOT",
            Self::Rebootmigrate => "REBOOTMIGRATE",
            Self::UnknownValue(u) => u.as_str(),
        }
    }
}

impl std::convert::From<&str> for InstanceActionAction {
    fn from(value: &str) -> Self {
        match value {
            "STOP" => Self::Stop,
            "START" => Self::Start,
            "SOFTRESET" => Self::Softreset,
            "RESET" => Self::Reset,
            "SOFTSTOP" => Self::Softstop,
            "SENDDIAGNOSTICINTERRUPT" => Self::Senddiagnosticinterrupt,
            "DIAGNOSTICREBOOT" => Self::Diagnosticreboot,
            "REBOOTMIGRATE" => Self::Rebootmigrate,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value)),
        }
    }
}

impl std::fmt::Display for InstanceActionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(wkt::Enumeration::value(self))
    }
}

impl serde::ser::Serialize for InstanceActionAction {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        wkt::internal::serialize_enum(self, serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for InstanceActionAction {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        wkt::internal::deserialize_enum(deserializer, "InstanceActionAction")
    }
}

/// Gets information about the specified instance.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct GetInstanceRequest {
    /// The OCID of the instance.
    pub instance_id: std::option::Option<std::string::String>,

    /// Unique identifier for the request.
    /// If you need to contact Oracle about a particular request, provide the request ID.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// Overrides the retry policy of the client for this request.
    pub retry_policy: std::option::Option<gax::retry_policy::RetryPolicyArg>,
}

impl GetInstanceRequest {
    const INSTANCE_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::path("InstanceId", "instanceId");
    const OPC_REQUEST_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::header("OpcRequestId", "opc-request-id");

    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [instance_id][Self::instance_id].
    pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [opc_request_id][Self::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the retry policy for this request.
    pub fn with_retry_policy<V: std::convert::Into<gax::retry_policy::RetryPolicyArg>>(mut self, v: V) -> Self {
        self.retry_policy = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for GetInstanceRequest {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

impl gax::binding::Request for GetInstanceRequest {
    type Response = GetInstanceResponse;

    fn operation() -> gax::binding::Operation {
        gax::binding::Operation {
            name: "GetInstance",
            method: http::Method::GET,
            path_template: "/instances/{instanceId}",
        }
    }

    fn bind(&self, binder: gax::binding::Binder) -> gax::Result<gax::binding::Binder> {
        let binder = binder
            .parameter(&Self::INSTANCE_ID, self.instance_id.as_ref())
            .parameter(&Self::OPC_REQUEST_ID, self.opc_request_id.as_ref());
        std::result::Result::Ok(binder)
    }

    fn retry_policy(&self) -> std::option::Option<&gax::retry_policy::RetryPolicyArg> {
        self.retry_policy.as_ref()
    }
}

/// The response of a [GetInstanceRequest].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct GetInstanceResponse {
    /// The instance.
    pub instance: crate::model::Instance,

    /// The entity tag of the resource, use it in `if-match` to update it safely.
    pub etag: std::option::Option<std::string::String>,

    /// The request identifier assigned by the service, include it in support requests.
    pub opc_request_id: std::option::Option<std::string::String>,

    raw_response: std::option::Option<gax::response::RawResponse>,
}

impl GetInstanceResponse {
    /// The HTTP response, as returned by the service.
    pub fn raw_response(&self) -> std::option::Option<&gax::response::RawResponse> {
        self.raw_response.as_ref()
    }
}

impl gax::response::FromHttpResponse for GetInstanceResponse {
    fn from_http_response(raw_response: gax::response::RawResponse) -> gax::Result<Self> {
        std::result::Result::Ok(Self {
            instance: raw_response.json()?,
            etag: raw_response.header(gax::headers::ETAG)?,
            opc_request_id: raw_response.header(gax::headers::OPC_REQUEST_ID)?,
            raw_response: std::option::Option::Some(raw_response),
        })
    }
}

/// Creates a new instance in the specified compartment and availability domain.
///
/// The shape and the source details determine the hardware and the boot
/// volume of the instance.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct LaunchInstanceRequest {
    /// A token that uniquely identifies a request so it can be retried in case of a timeout or
    /// server error without risk of executing that same action again.
    ///
    /// The client generates a token when this field is unset.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// Unique identifier for the request.
    /// If you need to contact Oracle about a particular request, provide the request ID.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// Instance details.
    pub launch_instance_details: std::option::Option<crate::model::LaunchInstanceDetails>,

    /// Overrides the retry policy of the client for this request.
    pub retry_policy: std::option::Option<gax::retry_policy::RetryPolicyArg>,
}

impl LaunchInstanceRequest {
    const OPC_RETRY_TOKEN: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::header("OpcRetryToken", "opc-retry-token");
    const OPC_REQUEST_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::header("OpcRequestId", "opc-request-id");
    const LAUNCH_INSTANCE_DETAILS: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::body("LaunchInstanceDetails").required();

    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [opc_retry_token][Self::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [opc_request_id][Self::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [launch_instance_details][Self::launch_instance_details].
    pub fn set_launch_instance_details<T: std::convert::Into<crate::model::LaunchInstanceDetails>>(mut self, v: T) -> Self {
        self.launch_instance_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets the retry policy for this request.
    pub fn with_retry_policy<V: std::convert::Into<gax::retry_policy::RetryPolicyArg>>(mut self, v: V) -> Self {
        self.retry_policy = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for LaunchInstanceRequest {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

impl gax::binding::Request for LaunchInstanceRequest {
    type Response = LaunchInstanceResponse;

    fn operation() -> gax::binding::Operation {
        gax::binding::Operation {
            name: "LaunchInstance",
            method: http::Method::POST,
            path_template: "/instances",
        }
    }

    fn bind(&self, binder: gax::binding::Binder) -> gax::Result<gax::binding::Binder> {
        binder
            .parameter(&Self::OPC_RETRY_TOKEN, self.opc_retry_token.as_ref())
            .parameter(&Self::OPC_REQUEST_ID, self.opc_request_id.as_ref())
            .body(&Self::LAUNCH_INSTANCE_DETAILS, self.launch_instance_details.as_ref())
    }

    fn retry_policy(&self) -> std::option::Option<&gax::retry_policy::RetryPolicyArg> {
        self.retry_policy.as_ref()
    }

    fn ensure_retry_token(&mut self) {
        gax::retry_token::ensure(&mut self.opc_retry_token);
    }
}

/// The response of a [LaunchInstanceRequest].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct LaunchInstanceResponse {
    /// The new instance.
    pub instance: crate::model::Instance,

    /// The entity tag of the resource, use it in `if-match` to update it safely.
    pub etag: std::option::Option<std::string::String>,

    /// The request identifier assigned by the service, include it in support requests.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// The OCID of the work request tracking the operation.
    pub opc_work_request_id: std::option::Option<std::string::String>,

    raw_response: std::option::Option<gax::response::RawResponse>,
}

impl LaunchInstanceResponse {
    /// The HTTP response, as returned by the service.
    pub fn raw_response(&self) -> std::option::Option<&gax::response::RawResponse> {
        self.raw_response.as_ref()
    }
}

impl gax::response::FromHttpResponse for LaunchInstanceResponse {
    fn from_http_response(raw_response: gax::response::RawResponse) -> gax::Result<Self> {
        std::result::Result::Ok(Self {
            instance: raw_response.json()?,
            etag: raw_response.header(gax::headers::ETAG)?,
            opc_request_id: raw_response.header(gax::headers::OPC_REQUEST_ID)?,
            opc_work_request_id: raw_response.header("opc-work-request-id")?,
            raw_response: std::option::Option::Some(raw_response),
        })
    }
}

/// Performs one of the power actions on the specified instance.
///
/// The `action` determines the operation, for example `STOP` or `SOFTRESET`.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct InstanceActionRequest {
    /// The OCID of the instance.
    pub instance_id: std::option::Option<std::string::String>,

    /// The action to perform on the instance.
    pub action: std::option::Option<InstanceActionAction>,

    /// A token that uniquely identifies a request so it can be retried in case of a timeout or
    /// server error without risk of executing that same action again.
    ///
    /// The client generates a token when this field is unset.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control.
    /// The resource is updated or deleted only if the etag you provide matches the current etag value of the resource.
    pub if_match: std::option::Option<std::string::String>,

    /// Unique identifier for the request.
    /// If you need to contact Oracle about a particular request, provide the request ID.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// Optional parameters for the power action.
    pub instance_power_action_details: std::option::Option<crate::model::InstancePowerActionDetails>,

    /// Overrides the retry policy of the client for this request.
    pub retry_policy: std::option::Option<gax::retry_policy::RetryPolicyArg>,
}

impl InstanceActionRequest {
    const INSTANCE_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::path("InstanceId", "instanceId");
    const ACTION: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("Action", "action").required();
    const OPC_RETRY_TOKEN: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::header("OpcRetryToken", "opc-retry-token");
    const IF_MATCH: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::header("IfMatch", "if-match");
    const OPC_REQUEST_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::header("OpcRequestId", "opc-request-id");
    const INSTANCE_POWER_ACTION_DETAILS: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::body("InstancePowerActionDetails");

    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [instance_id][Self::instance_id].
    pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [action][Self::action].
    pub fn set_action<T: std::convert::Into<InstanceActionAction>>(mut self, v: T) -> Self {
        self.action = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [opc_retry_token][Self::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [if_match][Self::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [opc_request_id][Self::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [instance_power_action_details][Self::instance_power_action_details].
    pub fn set_instance_power_action_details<T: std::convert::Into<crate::model::InstancePowerActionDetails>>(mut self, v: T) -> Self {
        self.instance_power_action_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets the retry policy for this request.
    pub fn with_retry_policy<V: std::convert::Into<gax::retry_policy::RetryPolicyArg>>(mut self, v: V) -> Self {
        self.retry_policy = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for InstanceActionRequest {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        gax::validation::EnumValidator::new()
            .check("Action", self.action.as_ref())
            .finish()
    }
}

impl gax::binding::Request for InstanceActionRequest {
    type Response = InstanceActionResponse;

    fn operation() -> gax::binding::Operation {
        gax::binding::Operation {
            name: "InstanceAction",
            method: http::Method::POST,
            path_template: "/instances/{instanceId}",
        }
    }

    fn bind(&self, binder: gax::binding::Binder) -> gax::Result<gax::binding::Binder> {
        binder
            .parameter(&Self::INSTANCE_ID, self.instance_id.as_ref())
            .parameter(&Self::ACTION, self.action.as_ref().map(wkt::Enumeration::value))
            .parameter(&Self::OPC_RETRY_TOKEN, self.opc_retry_token.as_ref())
            .parameter(&Self::IF_MATCH, self.if_match.as_ref())
            .parameter(&Self::OPC_REQUEST_ID, self.opc_request_id.as_ref())
            .body(&Self::INSTANCE_POWER_ACTION_DETAILS, self.instance_power_action_details.as_ref())
    }

    fn retry_policy(&self) -> std::option::Option<&gax::retry_policy::RetryPolicyArg> {
        self.retry_policy.as_ref()
    }

    fn ensure_retry_token(&mut self) {
        gax::retry_token::ensure(&mut self.opc_retry_token);
    }
}

/// The response of a [InstanceActionRequest].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct InstanceActionResponse {
    /// The instance, with its new lifecycle state.
    pub instance: crate::model::Instance,

    /// The entity tag of the resource, use it in `if-match` to update it safely.
    pub etag: std::option::Option<std::string::String>,

    /// The request identifier assigned by the service, include it in support requests.
    pub opc_request_id: std::option::Option<std::string::String>,

    raw_response: std::option::Option<gax::response::RawResponse>,
}

impl InstanceActionResponse {
    /// The HTTP response, as returned by the service.
    pub fn raw_response(&self) -> std::option::Option<&gax::response::RawResponse> {
        self.raw_response.as_ref()
    }
}

impl gax::response::FromHttpResponse for InstanceActionResponse {
    fn from_http_response(raw_response: gax::response::RawResponse) -> gax::Result<Self> {
        std::result::Result::Ok(Self {
            instance: raw_response.json()?,
            etag: raw_response.header(gax::headers::ETAG)?,
            opc_request_id: raw_response.header(gax::headers::OPC_REQUEST_ID)?,
            raw_response: std::option::Option::Some(raw_response),
        })
    }
}

/// Updates certain fields on the specified instance.
///
/// Fields that are not provided in the request are not updated.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct UpdateInstanceRequest {
    /// The OCID of the instance.
    pub instance_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a timeout or
    /// server error without risk of executing that same action again.
    ///
    /// The client generates a token when this field is unset.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control.
    /// The resource is updated or deleted only if the etag you provide matches the current etag value of the resource.
    pub if_match: std::option::Option<std::string::String>,

    /// Unique identifier for the request.
    /// If you need to contact Oracle about a particular request, provide the request ID.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// Update instance fields.
    pub update_instance_details: std::option::Option<crate::model::UpdateInstanceDetails>,

    /// Overrides the retry policy of the client for this request.
    pub retry_policy: std::option::Option<gax::retry_policy::RetryPolicyArg>,
}

impl UpdateInstanceRequest {
    const INSTANCE_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::path("InstanceId", "instanceId");
    const OPC_RETRY_TOKEN: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::header("OpcRetryToken", "opc-retry-token");
    const IF_MATCH: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::header("IfMatch", "if-match");
    const OPC_REQUEST_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::header("OpcRequestId", "opc-request-id");
    const UPDATE_INSTANCE_DETAILS: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::body("UpdateInstanceDetails").required();

    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [instance_id][Self::instance_id].
    pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [opc_retry_token][Self::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [if_match][Self::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [opc_request_id][Self::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [update_instance_details][Self::update_instance_details].
    pub fn set_update_instance_details<T: std::convert::Into<crate::model::UpdateInstanceDetails>>(mut self, v: T) -> Self {
        self.update_instance_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets the retry policy for this request.
    pub fn with_retry_policy<V: std::convert::Into<gax::retry_policy::RetryPolicyArg>>(mut self, v: V) -> Self {
        self.retry_policy = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for UpdateInstanceRequest {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

impl gax::binding::Request for UpdateInstanceRequest {
    type Response = UpdateInstanceResponse;

    fn operation() -> gax::binding::Operation {
        gax::binding::Operation {
            name: "UpdateInstance",
            method: http::Method::PUT,
            path_template: "/instances/{instanceId}",
        }
    }

    fn bind(&self, binder: gax::binding::Binder) -> gax::Result<gax::binding::Binder> {
        binder
            .parameter(&Self::INSTANCE_ID, self.instance_id.as_ref())
            .parameter(&Self::OPC_RETRY_TOKEN, self.opc_retry_token.as_ref())
            .parameter(&Self::IF_MATCH, self.if_match.as_ref())
            .parameter(&Self::OPC_REQUEST_ID, self.opc_request_id.as_ref())
            .body(&Self::UPDATE_INSTANCE_DETAILS, self.update_instance_details.as_ref())
    }

    fn retry_policy(&self) -> std::option::Option<&gax::retry_policy::RetryPolicyArg> {
        self.retry_policy.as_ref()
    }

    fn ensure_retry_token(&mut self) {
        gax::retry_token::ensure(&mut self.opc_retry_token);
    }
}

/// The response of a [UpdateInstanceRequest].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct UpdateInstanceResponse {
    /// The updated instance.
    pub instance: crate::model::Instance,

    /// The entity tag of the resource, use it in `if-match` to update it safely.
    pub etag: std::option::Option<std::string::String>,

    /// The request identifier assigned by the service, include it in support requests.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// The OCID of the work request tracking the operation.
    pub opc_work_request_id: std::option::Option<std::string::String>,

    raw_response: std::option::Option<gax::response::RawResponse>,
}

impl UpdateInstanceResponse {
    /// The HTTP response, as returned by the service.
    pub fn raw_response(&self) -> std::option::Option<&gax::response::RawResponse> {
        self.raw_response.as_ref()
    }
}

impl gax::response::FromHttpResponse for UpdateInstanceResponse {
    fn from_http_response(raw_response: gax::response::RawResponse) -> gax::Result<Self> {
        std::result::Result::Ok(Self {
            instance: raw_response.json()?,
            etag: raw_response.header(gax::headers::ETAG)?,
            opc_request_id: raw_response.header(gax::headers::OPC_REQUEST_ID)?,
            opc_work_request_id: raw_response.header("opc-work-request-id")?,
            raw_response: std::option::Option::Some(raw_response),
        })
    }
}

/// Permanently terminates the specified instance.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct TerminateInstanceRequest {
    /// The OCID of the instance.
    pub instance_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control.
    /// The resource is updated or deleted only if the etag you provide matches the current etag value of the resource.
    pub if_match: std::option::Option<std::string::String>,

    /// Whether to preserve the boot volume used to launch the instance.
    pub preserve_boot_volume: std::option::Option<bool>,

    /// Whether to preserve the data volumes created when the instance was launched.
    pub preserve_data_volumes_created_at_launch: std::option::Option<bool>,

    /// Unique identifier for the request.
    /// If you need to contact Oracle about a particular request, provide the request ID.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// Overrides the retry policy of the client for this request.
    pub retry_policy: std::option::Option<gax::retry_policy::RetryPolicyArg>,
}

impl TerminateInstanceRequest {
    const INSTANCE_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::path("InstanceId", "instanceId");
    const IF_MATCH: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::header("IfMatch", "if-match");
    const PRESERVE_BOOT_VOLUME: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("PreserveBootVolume", "preserveBootVolume");
    const PRESERVE_DATA_VOLUMES_CREATED_AT_LAUNCH: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("PreserveDataVolumesCreatedAtLaunch", "preserveDataVolumesCreatedAtLaunch");
    const OPC_REQUEST_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::header("OpcRequestId", "opc-request-id");

    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [instance_id][Self::instance_id].
    pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [if_match][Self::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [preserve_boot_volume][Self::preserve_boot_volume].
    pub fn set_preserve_boot_volume<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.preserve_boot_volume = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [preserve_data_volumes_created_at_launch][Self::preserve_data_volumes_created_at_launch].
    pub fn set_preserve_data_volumes_created_at_launch<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.preserve_data_volumes_created_at_launch = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [opc_request_id][Self::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the retry policy for this request.
    pub fn with_retry_policy<V: std::convert::Into<gax::retry_policy::RetryPolicyArg>>(mut self, v: V) -> Self {
        self.retry_policy = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for TerminateInstanceRequest {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

impl gax::binding::Request for TerminateInstanceRequest {
    type Response = TerminateInstanceResponse;

    fn operation() -> gax::binding::Operation {
        gax::binding::Operation {
            name: "TerminateInstance",
            method: http::Method::DELETE,
            path_template: "/instances/{instanceId}",
        }
    }

    fn bind(&self, binder: gax::binding::Binder) -> gax::Result<gax::binding::Binder> {
        let binder = binder
            .parameter(&Self::INSTANCE_ID, self.instance_id.as_ref())
            .parameter(&Self::IF_MATCH, self.if_match.as_ref())
            .parameter(&Self::PRESERVE_BOOT_VOLUME, self.preserve_boot_volume.as_ref())
            .parameter(&Self::PRESERVE_DATA_VOLUMES_CREATED_AT_LAUNCH, self.preserve_data_volumes_created_at_launch.as_ref())
            .parameter(&Self::OPC_REQUEST_ID, self.opc_request_id.as_ref());
        std::result::Result::Ok(binder)
    }

    fn retry_policy(&self) -> std::option::Option<&gax::retry_policy::RetryPolicyArg> {
        self.retry_policy.as_ref()
    }
}

/// The response of a [TerminateInstanceRequest].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct TerminateInstanceResponse {
    /// The request identifier assigned by the service, include it in support requests.
    pub opc_request_id: std::option::Option<std::string::String>,

    raw_response: std::option::Option<gax::response::RawResponse>,
}

impl TerminateInstanceResponse {
    /// The HTTP response, as returned by the service.
    pub fn raw_response(&self) -> std::option::Option<&gax::response::RawResponse> {
        self.raw_response.as_ref()
    }
}

impl gax::response::FromHttpResponse for TerminateInstanceResponse {
    fn from_http_response(raw_response: gax::response::RawResponse) -> gax::Result<Self> {
        std::result::Result::Ok(Self {
            opc_request_id: raw_response.header(gax::headers::OPC_REQUEST_ID)?,
            raw_response: std::option::Option::Some(raw_response),
        })
    }
}

/// Lists the instances in the specified compartment.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ListInstancesRequest {
    /// The OCID of the compartment.
    pub compartment_id: std::option::Option<std::string::String>,

    /// The name of the availability domain.
    pub availability_domain: std::option::Option<std::string::String>,

    /// The OCID of the compute capacity reservation.
    pub capacity_reservation_id: std::option::Option<std::string::String>,

    /// A filter to return only resources that match the given display name exactly.
    pub display_name: std::option::Option<std::string::String>,

    /// For list pagination. The maximum number of results per page.
    pub limit: std::option::Option<i32>,

    /// For list pagination. The value of the `opc-next-page` header from the previous "List" call.
    pub page: std::option::Option<std::string::String>,

    /// The field to sort by. `TIMECREATED` sorts in descending order by default,
    /// `DISPLAYNAME` sorts in ascending order by default.
    pub sort_by: std::option::Option<crate::model::SortBy>,

    /// The sort order to use, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// A filter to only return resources that match the given lifecycle state.
    pub lifecycle_state: std::option::Option<crate::model::InstanceLifecycleState>,

    /// Unique identifier for the request.
    /// If you need to contact Oracle about a particular request, provide the request ID.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// Overrides the retry policy of the client for this request.
    pub retry_policy: std::option::Option<gax::retry_policy::RetryPolicyArg>,
}

impl ListInstancesRequest {
    const COMPARTMENT_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("CompartmentId", "compartmentId").required();
    const AVAILABILITY_DOMAIN: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("AvailabilityDomain", "availabilityDomain");
    const CAPACITY_RESERVATION_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("CapacityReservationId", "capacityReservationId");
    const DISPLAY_NAME: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("DisplayName", "displayName");
    const LIMIT: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("Limit", "limit");
    const PAGE: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("Page", "page");
    const SORT_BY: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("SortBy", "sortBy").omit_empty();
    const SORT_ORDER: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("SortOrder", "sortOrder").omit_empty();
    const LIFECYCLE_STATE: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("LifecycleState", "lifecycleState").omit_empty();
    const OPC_REQUEST_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::header("OpcRequestId", "opc-request-id");

    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][Self::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [availability_domain][Self::availability_domain].
    pub fn set_availability_domain<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.availability_domain = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [capacity_reservation_id][Self::capacity_reservation_id].
    pub fn set_capacity_reservation_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.capacity_reservation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][Self::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [limit][Self::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [page][Self::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [sort_by][Self::sort_by].
    pub fn set_sort_by<T: std::convert::Into<crate::model::SortBy>>(mut self, v: T) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [sort_order][Self::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][Self::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<crate::model::InstanceLifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [opc_request_id][Self::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the retry policy for this request.
    pub fn with_retry_policy<V: std::convert::Into<gax::retry_policy::RetryPolicyArg>>(mut self, v: V) -> Self {
        self.retry_policy = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for ListInstancesRequest {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        gax::validation::EnumValidator::new()
            .check("SortBy", self.sort_by.as_ref())
            .check("SortOrder", self.sort_order.as_ref())
            .check("LifecycleState", self.lifecycle_state.as_ref())
            .finish()
    }
}

impl gax::binding::Request for ListInstancesRequest {
    type Response = ListInstancesResponse;

    fn operation() -> gax::binding::Operation {
        gax::binding::Operation {
            name: "ListInstances",
            method: http::Method::GET,
            path_template: "/instances",
        }
    }

    fn bind(&self, binder: gax::binding::Binder) -> gax::Result<gax::binding::Binder> {
        let binder = binder
            .parameter(&Self::COMPARTMENT_ID, self.compartment_id.as_ref())
            .parameter(&Self::AVAILABILITY_DOMAIN, self.availability_domain.as_ref())
            .parameter(&Self::CAPACITY_RESERVATION_ID, self.capacity_reservation_id.as_ref())
            .parameter(&Self::DISPLAY_NAME, self.display_name.as_ref())
            .parameter(&Self::LIMIT, self.limit.as_ref())
            .parameter(&Self::PAGE, self.page.as_ref())
            .parameter(&Self::SORT_BY, self.sort_by.as_ref().map(wkt::Enumeration::value))
            .parameter(&Self::SORT_ORDER, self.sort_order.as_ref().map(wkt::Enumeration::value))
            .parameter(&Self::LIFECYCLE_STATE, self.lifecycle_state.as_ref().map(wkt::Enumeration::value))
            .parameter(&Self::OPC_REQUEST_ID, self.opc_request_id.as_ref());
        std::result::Result::Ok(binder)
    }

    fn retry_policy(&self) -> std::option::Option<&gax::retry_policy::RetryPolicyArg> {
        self.retry_policy.as_ref()
    }
}

impl gax::paginator::PageableRequest for ListInstancesRequest {
    fn set_page(&mut self, page: std::option::Option<std::string::String>) {
        self.page = page;
    }
}

/// The response of a [ListInstancesRequest].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ListInstancesResponse {
    /// The instances in this page.
    pub items: std::vec::Vec<crate::model::Instance>,

    /// The cursor for the next page, absent on the last page.
    pub opc_next_page: std::option::Option<std::string::String>,

    /// The request identifier assigned by the service, include it in support requests.
    pub opc_request_id: std::option::Option<std::string::String>,

    raw_response: std::option::Option<gax::response::RawResponse>,
}

impl ListInstancesResponse {
    /// The HTTP response, as returned by the service.
    pub fn raw_response(&self) -> std::option::Option<&gax::response::RawResponse> {
        self.raw_response.as_ref()
    }
}

impl gax::response::FromHttpResponse for ListInstancesResponse {
    fn from_http_response(raw_response: gax::response::RawResponse) -> gax::Result<Self> {
        std::result::Result::Ok(Self {
            items: raw_response.json()?,
            opc_next_page: raw_response.header(gax::headers::OPC_NEXT_PAGE)?,
            opc_request_id: raw_response.header(gax::headers::OPC_REQUEST_ID)?,
            raw_response: std::option::Option::Some(raw_response),
        })
    }
}

impl gax::paginator::PageableResponse for ListInstancesResponse {
    type PageItem = crate::model::Instance;

    fn next_page(&self) -> std::option::Option<&str> {
        self.opc_next_page.as_deref()
    }

    fn into_items(self) -> std::vec::Vec<crate::model::Instance> {
        self.items
    }
}

/// Attaches the specified storage volume to the specified instance.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct AttachVolumeRequest {
    /// A token that uniquely identifies a request so it can be retried in case of a timeout or
    /// server error without risk of executing that same action again.
    ///
    /// The client generates a token when this field is unset.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// Unique identifier for the request.
    /// If you need to contact Oracle about a particular request, provide the request ID.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// Attach volume request.
    pub attach_volume_details: std::option::Option<crate::model::AttachVolumeDetails>,

    /// Overrides the retry policy of the client for this request.
    pub retry_policy: std::option::Option<gax::retry_policy::RetryPolicyArg>,
}

impl AttachVolumeRequest {
    const OPC_RETRY_TOKEN: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::header("OpcRetryToken", "opc-retry-token");
    const OPC_REQUEST_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::header("OpcRequestId", "opc-request-id");
    const ATTACH_VOLUME_DETAILS: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::body("AttachVolumeDetails").required();

    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [opc_retry_token][Self::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [opc_request_id][Self::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [attach_volume_details][Self::attach_volume_details].
    pub fn set_attach_volume_details<T: std::convert::Into<crate::model::AttachVolumeDetails>>(mut self, v: T) -> Self {
        self.attach_volume_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets the retry policy for this request.
    pub fn with_retry_policy<V: std::convert::Into<gax::retry_policy::RetryPolicyArg>>(mut self, v: V) -> Self {
        self.retry_policy = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for AttachVolumeRequest {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

impl gax::binding::Request for AttachVolumeRequest {
    type Response = AttachVolumeResponse;

    fn operation() -> gax::binding::Operation {
        gax::binding::Operation {
            name: "AttachVolume",
            method: http::Method::POST,
            path_template: "/volumeAttachments",
        }
    }

    fn bind(&self, binder: gax::binding::Binder) -> gax::Result<gax::binding::Binder> {
        binder
            .parameter(&Self::OPC_RETRY_TOKEN, self.opc_retry_token.as_ref())
            .parameter(&Self::OPC_REQUEST_ID, self.opc_request_id.as_ref())
            .body(&Self::ATTACH_VOLUME_DETAILS, self.attach_volume_details.as_ref())
    }

    fn retry_policy(&self) -> std::option::Option<&gax::retry_policy::RetryPolicyArg> {
        self.retry_policy.as_ref()
    }

    fn ensure_retry_token(&mut self) {
        gax::retry_token::ensure(&mut self.opc_retry_token);
    }
}

/// The response of a [AttachVolumeRequest].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct AttachVolumeResponse {
    /// The new volume attachment.
    pub volume_attachment: std::option::Option<crate::model::VolumeAttachment>,

    /// The entity tag of the resource, use it in `if-match` to update it safely.
    pub etag: std::option::Option<std::string::String>,

    /// The request identifier assigned by the service, include it in support requests.
    pub opc_request_id: std::option::Option<std::string::String>,

    raw_response: std::option::Option<gax::response::RawResponse>,
}

impl AttachVolumeResponse {
    /// The HTTP response, as returned by the service.
    pub fn raw_response(&self) -> std::option::Option<&gax::response::RawResponse> {
        self.raw_response.as_ref()
    }
}

impl gax::response::FromHttpResponse for AttachVolumeResponse {
    fn from_http_response(raw_response: gax::response::RawResponse) -> gax::Result<Self> {
        std::result::Result::Ok(Self {
            volume_attachment: raw_response.json()?,
            etag: raw_response.header(gax::headers::ETAG)?,
            opc_request_id: raw_response.header(gax::headers::OPC_REQUEST_ID)?,
            raw_response: std::option::Option::Some(raw_response),
        })
    }
}

/// Lists the volume attachments in the specified compartment.
///
/// You can filter the list by specifying an instance OCID, a volume OCID, or both.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ListVolumeAttachmentsRequest {
    /// The OCID of the compartment.
    pub compartment_id: std::option::Option<std::string::String>,

    /// The name of the availability domain.
    pub availability_domain: std::option::Option<std::string::String>,

    /// For list pagination. The maximum number of results per page.
    pub limit: std::option::Option<i32>,

    /// For list pagination. The value of the `opc-next-page` header from the previous "List" call.
    pub page: std::option::Option<std::string::String>,

    /// The OCID of the instance.
    pub instance_id: std::option::Option<std::string::String>,

    /// The OCID of the volume.
    pub volume_id: std::option::Option<std::string::String>,

    /// Unique identifier for the request.
    /// If you need to contact Oracle about a particular request, provide the request ID.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// Overrides the retry policy of the client for this request.
    pub retry_policy: std::option::Option<gax::retry_policy::RetryPolicyArg>,
}

impl ListVolumeAttachmentsRequest {
    const COMPARTMENT_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("CompartmentId", "compartmentId").required();
    const AVAILABILITY_DOMAIN: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("AvailabilityDomain", "availabilityDomain");
    const LIMIT: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("Limit", "limit");
    const PAGE: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("Page", "page");
    const INSTANCE_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("InstanceId", "instanceId");
    const VOLUME_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("VolumeId", "volumeId");
    const OPC_REQUEST_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::header("OpcRequestId", "opc-request-id");

    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][Self::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [availability_domain][Self::availability_domain].
    pub fn set_availability_domain<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.availability_domain = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [limit][Self::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [page][Self::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [instance_id][Self::instance_id].
    pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [volume_id][Self::volume_id].
    pub fn set_volume_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.volume_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [opc_request_id][Self::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the retry policy for this request.
    pub fn with_retry_policy<V: std::convert::Into<gax::retry_policy::RetryPolicyArg>>(mut self, v: V) -> Self {
        self.retry_policy = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for ListVolumeAttachmentsRequest {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

impl gax::binding::Request for ListVolumeAttachmentsRequest {
    type Response = ListVolumeAttachmentsResponse;

    fn operation() -> gax::binding::Operation {
        gax::binding::Operation {
            name: "ListVolumeAttachments",
            method: http::Method::GET,
            path_template: "/volumeAttachments",
        }
    }

    fn bind(&self, binder: gax::binding::Binder) -> gax::Result<gax::binding::Binder> {
        let binder = binder
            .parameter(&Self::COMPARTMENT_ID, self.compartment_id.as_ref())
            .parameter(&Self::AVAILABILITY_DOMAIN, self.availability_domain.as_ref())
            .parameter(&Self::LIMIT, self.limit.as_ref())
            .parameter(&Self::PAGE, self.page.as_ref())
            .parameter(&Self::INSTANCE_ID, self.instance_id.as_ref())
            .parameter(&Self::VOLUME_ID, self.volume_id.as_ref())
            .parameter(&Self::OPC_REQUEST_ID, self.opc_request_id.as_ref());
        std::result::Result::Ok(binder)
    }

    fn retry_policy(&self) -> std::option::Option<&gax::retry_policy::RetryPolicyArg> {
        self.retry_policy.as_ref()
    }
}

impl gax::paginator::PageableRequest for ListVolumeAttachmentsRequest {
    fn set_page(&mut self, page: std::option::Option<std::string::String>) {
        self.page = page;
    }
}

/// The response of a [ListVolumeAttachmentsRequest].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ListVolumeAttachmentsResponse {
    /// The volume attachments in this page.
    pub items: std::vec::Vec<crate::model::VolumeAttachment>,

    /// The cursor for the next page, absent on the last page.
    pub opc_next_page: std::option::Option<std::string::String>,

    /// The request identifier assigned by the service, include it in support requests.
    pub opc_request_id: std::option::Option<std::string::String>,

    raw_response: std::option::Option<gax::response::RawResponse>,
}

impl ListVolumeAttachmentsResponse {
    /// The HTTP response, as returned by the service.
    pub fn raw_response(&self) -> std::option::Option<&gax::response::RawResponse> {
        self.raw_response.as_ref()
    }
}

impl gax::response::FromHttpResponse for ListVolumeAttachmentsResponse {
    fn from_http_response(raw_response: gax::response::RawResponse) -> gax::Result<Self> {
        std::result::Result::Ok(Self {
            items: raw_response.json()?,
            opc_next_page: raw_response.header(gax::headers::OPC_NEXT_PAGE)?,
            opc_request_id: raw_response.header(gax::headers::OPC_REQUEST_ID)?,
            raw_response: std::option::Option::Some(raw_response),
        })
    }
}

impl gax::paginator::PageableResponse for ListVolumeAttachmentsResponse {
    type PageItem = crate::model::VolumeAttachment;

    fn next_page(&self) -> std::option::Option<&str> {
        self.opc_next_page.as_deref()
    }

    fn into_items(self) -> std::vec::Vec<crate::model::VolumeAttachment> {
        self.items
    }
}

/// Gets the specified instance configuration.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct GetInstanceConfigurationRequest {
    /// The OCID of the instance configuration.
    pub instance_configuration_id: std::option::Option<std::string::String>,

    /// Unique identifier for the request.
    /// If you need to contact Oracle about a particular request, provide the request ID.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// Overrides the retry policy of the client for this request.
    pub retry_policy: std::option::Option<gax::retry_policy::RetryPolicyArg>,
}

impl GetInstanceConfigurationRequest {
    const INSTANCE_CONFIGURATION_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::path("InstanceConfigurationId", "instanceConfigurationId");
    const OPC_REQUEST_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::header("OpcRequestId", "opc-request-id");

    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [instance_configuration_id][Self::instance_configuration_id].
    pub fn set_instance_configuration_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_configuration_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [opc_request_id][Self::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the retry policy for this request.
    pub fn with_retry_policy<V: std::convert::Into<gax::retry_policy::RetryPolicyArg>>(mut self, v: V) -> Self {
        self.retry_policy = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for GetInstanceConfigurationRequest {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

impl gax::binding::Request for GetInstanceConfigurationRequest {
    type Response = GetInstanceConfigurationResponse;

    fn operation() -> gax::binding::Operation {
        gax::binding::Operation {
            name: "GetInstanceConfiguration",
            method: http::Method::GET,
            path_template: "/instanceConfigurations/{instanceConfigurationId}",
        }
    }

    fn bind(&self, binder: gax::binding::Binder) -> gax::Result<gax::binding::Binder> {
        let binder = binder
            .parameter(&Self::INSTANCE_CONFIGURATION_ID, self.instance_configuration_id.as_ref())
            .parameter(&Self::OPC_REQUEST_ID, self.opc_request_id.as_ref());
        std::result::Result::Ok(binder)
    }

    fn retry_policy(&self) -> std::option::Option<&gax::retry_policy::RetryPolicyArg> {
        self.retry_policy.as_ref()
    }
}

/// The response of a [GetInstanceConfigurationRequest].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct GetInstanceConfigurationResponse {
    /// The instance configuration.
    pub instance_configuration: crate::model::InstanceConfiguration,

    /// The entity tag of the resource, use it in `if-match` to update it safely.
    pub etag: std::option::Option<std::string::String>,

    /// The request identifier assigned by the service, include it in support requests.
    pub opc_request_id: std::option::Option<std::string::String>,

    raw_response: std::option::Option<gax::response::RawResponse>,
}

impl GetInstanceConfigurationResponse {
    /// The HTTP response, as returned by the service.
    pub fn raw_response(&self) -> std::option::Option<&gax::response::RawResponse> {
        self.raw_response.as_ref()
    }
}

impl gax::response::FromHttpResponse for GetInstanceConfigurationResponse {
    fn from_http_response(raw_response: gax::response::RawResponse) -> gax::Result<Self> {
        std::result::Result::Ok(Self {
            instance_configuration: raw_response.json()?,
            etag: raw_response.header(gax::headers::ETAG)?,
            opc_request_id: raw_response.header(gax::headers::OPC_REQUEST_ID)?,
            raw_response: std::option::Option::Some(raw_response),
        })
    }
}
