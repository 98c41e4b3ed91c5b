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

/// The network resource types accepted by [ListDrgAttachmentsRequest].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ListDrgAttachmentsAttachmentType {
    Vcn,
    VirtualCircuit,
    RemotePeeringConnection,
    IpsecTunnel,
    All,
    /// A value not known to this version of the client.
    ///
    /// The service may add new values at any time, they are preserved
    /// verbatim but fail validation.
    UnknownValue(wkt::UnknownEnumValue),
}

impl wkt::Enumeration for ListDrgAttachmentsAttachmentType {
    fn labels() -> &'static [&'static str] {
        &[
            "VCN",
            "VIRTUAL_CIRCUIT",
            "REMOTE_PEERING_CONNECTION",
            "IPSEC_TUNNEL",
            "ALL",
        ]
    }

    fn value(&self) -> &str {
        match self {
            Self::Vcn => "VCN",
            Self::VirtualCircuit => "VIRTUAL_CIRCUIT",
            Self::RemotePeeringConnection => "REMOTE_PEERING_CONNECTION",
            Self::IpsecTunnel => "IPSEC_TUNNEL",
            Self::All => "ALL",
            Self::UnknownValue(u) => u.as_str(),
        }
    }
}

impl std::convert::From<&str> for ListDrgAttachmentsAttachmentType {
    fn from(value: &str) -> Self {
        match value {
            "VCN" => Self::Vcn,
            "VIRTUAL_CIRCUIT" => Self::VirtualCircuit,
            "REMOTE_PEERING_CONNECTION" => Self::RemotePeeringConnection,
            "IPSEC_TUNNEL" => Self::IpsecTunnel,
            "ALL" => Self::All,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value)),
        }
    }
}

impl std::fmt::Display for ListDrgAttachmentsAttachmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(wkt::Enumeration::value(self))
    }
}

impl serde::ser::Serialize for ListDrgAttachmentsAttachmentType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        wkt::internal::serialize_enum(self, serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for ListDrgAttachmentsAttachmentType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        wkt::internal::deserialize_enum(deserializer, "ListDrgAttachmentsAttachmentType")
    }
}

/// Attaches the specified DRG to the specified network resource.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct CreateDrgAttachmentRequest {
    /// A token that uniquely identifies a request so it can be retried in case of a timeout or
    /// server error without risk of executing that same action again.
    ///
    /// The client generates a token when this field is unset.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// Unique identifier for the request.
    /// If you need to contact Oracle about a particular request, provide the request ID.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// Details for creating a `DrgAttachment`.
    pub create_drg_attachment_details: std::option::Option<crate::model::CreateDrgAttachmentDetails>,

    /// Overrides the retry policy of the client for this request.
    pub retry_policy: std::option::Option<gax::retry_policy::RetryPolicyArg>,
}

impl CreateDrgAttachmentRequest {
    const OPC_RETRY_TOKEN: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::header("OpcRetryToken", "opc-retry-token");
    const OPC_REQUEST_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::header("OpcRequestId", "opc-request-id");
    const CREATE_DRG_ATTACHMENT_DETAILS: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::body("CreateDrgAttachmentDetails").required();

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

    /// Sets the value of [create_drg_attachment_details][Self::create_drg_attachment_details].
    pub fn set_create_drg_attachment_details<T: std::convert::Into<crate::model::CreateDrgAttachmentDetails>>(mut self, v: T) -> Self {
        self.create_drg_attachment_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets the retry policy for this request.
    pub fn with_retry_policy<V: std::convert::Into<gax::retry_policy::RetryPolicyArg>>(mut self, v: V) -> Self {
        self.retry_policy = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for CreateDrgAttachmentRequest {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

impl gax::binding::Request for CreateDrgAttachmentRequest {
    type Response = CreateDrgAttachmentResponse;

    fn operation() -> gax::binding::Operation {
        gax::binding::Operation {
            name: "CreateDrgAttachment",
            method: http::Method::POST,
            path_template: "/drgAttachments",
        }
    }

    fn bind(&self, binder: gax::binding::Binder) -> gax::Result<gax::binding::Binder> {
        binder
            .parameter(&Self::OPC_RETRY_TOKEN, self.opc_retry_token.as_ref())
            .parameter(&Self::OPC_REQUEST_ID, self.opc_request_id.as_ref())
            .body(&Self::CREATE_DRG_ATTACHMENT_DETAILS, self.create_drg_attachment_details.as_ref())
    }

    fn retry_policy(&self) -> std::option::Option<&gax::retry_policy::RetryPolicyArg> {
        self.retry_policy.as_ref()
    }

    fn ensure_retry_token(&mut self) {
        gax::retry_token::ensure(&mut self.opc_retry_token);
    }
}

/// The response of a [CreateDrgAttachmentRequest].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct CreateDrgAttachmentResponse {
    /// The new DRG attachment.
    pub drg_attachment: crate::model::DrgAttachment,

    /// The entity tag of the resource, use it in `if-match` to update it safely.
    pub etag: std::option::Option<std::string::String>,

    /// The request identifier assigned by the service, include it in support requests.
    pub opc_request_id: std::option::Option<std::string::String>,

    raw_response: std::option::Option<gax::response::RawResponse>,
}

impl CreateDrgAttachmentResponse {
    /// The HTTP response, as returned by the service.
    pub fn raw_response(&self) -> std::option::Option<&gax::response::RawResponse> {
        self.raw_response.as_ref()
    }
}

impl gax::response::FromHttpResponse for CreateDrgAttachmentResponse {
    fn from_http_response(raw_response: gax::response::RawResponse) -> gax::Result<Self> {
        std::result::Result::Ok(Self {
            drg_attachment: raw_response.json()?,
            etag: raw_response.header(gax::headers::ETAG)?,
            opc_request_id: raw_response.header(gax::headers::OPC_REQUEST_ID)?,
            raw_response: std::option::Option::Some(raw_response),
        })
    }
}

/// Gets the information for the specified DRG attachment.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct GetDrgAttachmentRequest {
    /// The OCID of the DRG attachment.
    pub drg_attachment_id: std::option::Option<std::string::String>,

    /// Unique identifier for the request.
    /// If you need to contact Oracle about a particular request, provide the request ID.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// Overrides the retry policy of the client for this request.
    pub retry_policy: std::option::Option<gax::retry_policy::RetryPolicyArg>,
}

impl GetDrgAttachmentRequest {
    const DRG_ATTACHMENT_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::path("DrgAttachmentId", "drgAttachmentId");
    const OPC_REQUEST_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::header("OpcRequestId", "opc-request-id");

    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [drg_attachment_id][Self::drg_attachment_id].
    pub fn set_drg_attachment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.drg_attachment_id = std::option::Option::Some(v.into());
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

impl gax::validation::Validate for GetDrgAttachmentRequest {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

impl gax::binding::Request for GetDrgAttachmentRequest {
    type Response = GetDrgAttachmentResponse;

    fn operation() -> gax::binding::Operation {
        gax::binding::Operation {
            name: "GetDrgAttachment",
            method: http::Method::GET,
            path_template: "/drgAttachments/{drgAttachmentId}",
        }
    }

    fn bind(&self, binder: gax::binding::Binder) -> gax::Result<gax::binding::Binder> {
        let binder = binder
            .parameter(&Self::DRG_ATTACHMENT_ID, self.drg_attachment_id.as_ref())
            .parameter(&Self::OPC_REQUEST_ID, self.opc_request_id.as_ref());
        std::result::Result::Ok(binder)
    }

    fn retry_policy(&self) -> std::option::Option<&gax::retry_policy::RetryPolicyArg> {
        self.retry_policy.as_ref()
    }
}

/// The response of a [GetDrgAttachmentRequest].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct GetDrgAttachmentResponse {
    /// The DRG attachment.
    pub drg_attachment: crate::model::DrgAttachment,

    /// The entity tag of the resource, use it in `if-match` to update it safely.
    pub etag: std::option::Option<std::string::String>,

    /// The request identifier assigned by the service, include it in support requests.
    pub opc_request_id: std::option::Option<std::string::String>,

    raw_response: std::option::Option<gax::response::RawResponse>,
}

impl GetDrgAttachmentResponse {
    /// The HTTP response, as returned by the service.
    pub fn raw_response(&self) -> std::option::Option<&gax::response::RawResponse> {
        self.raw_response.as_ref()
    }
}

impl gax::response::FromHttpResponse for GetDrgAttachmentResponse {
    fn from_http_response(raw_response: gax::response::RawResponse) -> gax::Result<Self> {
        std::result::Result::Ok(Self {
            drg_attachment: raw_response.json()?,
            etag: raw_response.header(gax::headers::ETAG)?,
            opc_request_id: raw_response.header(gax::headers::OPC_REQUEST_ID)?,
            raw_response: std::option::Option::Some(raw_response),
        })
    }
}

/// Lists the DRG attachments for the specified compartment.
///
/// You can filter the results by VCN, by DRG, or by attachment type.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ListDrgAttachmentsRequest {
    /// The OCID of the compartment.
    pub compartment_id: std::option::Option<std::string::String>,

    /// The OCID of the VCN.
    pub vcn_id: std::option::Option<std::string::String>,

    /// The OCID of the DRG.
    pub drg_id: std::option::Option<std::string::String>,

    /// For list pagination. The maximum number of results per page.
    pub limit: std::option::Option<i32>,

    /// For list pagination. The value of the `opc-next-page` header from the previous "List" call.
    pub page: std::option::Option<std::string::String>,

    /// The OCID of the resource (virtual circuit, VCN, IPSec tunnel, or remote peering connection) attached to the DRG.
    pub network_id: std::option::Option<std::string::String>,

    /// The type for the network resource attached to the DRG.
    pub attachment_type: std::option::Option<ListDrgAttachmentsAttachmentType>,

    /// The OCID of the DRG route table assigned to the DRG attachment.
    pub drg_route_table_id: std::option::Option<std::string::String>,

    /// A filter to return only resources that match the given display name exactly.
    pub display_name: std::option::Option<std::string::String>,

    /// The field to sort by. `TIMECREATED` sorts in descending order by default,
    /// `DISPLAYNAME` sorts in ascending order by default.
    pub sort_by: std::option::Option<crate::model::SortBy>,

    /// The sort order to use, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// A filter to return only resources that match the specified lifecycle state.
    pub lifecycle_state: std::option::Option<crate::model::DrgAttachmentLifecycleState>,

    /// Unique identifier for the request.
    /// If you need to contact Oracle about a particular request, provide the request ID.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// Overrides the retry policy of the client for this request.
    pub retry_policy: std::option::Option<gax::retry_policy::RetryPolicyArg>,
}

impl ListDrgAttachmentsRequest {
    const COMPARTMENT_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("CompartmentId", "compartmentId").required();
    const VCN_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("VcnId", "vcnId");
    const DRG_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("DrgId", "drgId");
    const LIMIT: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("Limit", "limit");
    const PAGE: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("Page", "page");
    const NETWORK_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("NetworkId", "networkId");
    const ATTACHMENT_TYPE: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("AttachmentType", "attachmentType").omit_empty();
    const DRG_ROUTE_TABLE_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("DrgRouteTableId", "drgRouteTableId");
    const DISPLAY_NAME: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("DisplayName", "displayName");
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

    /// Sets the value of [vcn_id][Self::vcn_id].
    pub fn set_vcn_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.vcn_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [drg_id][Self::drg_id].
    pub fn set_drg_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.drg_id = std::option::Option::Some(v.into());
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

    /// Sets the value of [network_id][Self::network_id].
    pub fn set_network_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.network_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [attachment_type][Self::attachment_type].
    pub fn set_attachment_type<T: std::convert::Into<ListDrgAttachmentsAttachmentType>>(mut self, v: T) -> Self {
        self.attachment_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [drg_route_table_id][Self::drg_route_table_id].
    pub fn set_drg_route_table_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.drg_route_table_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][Self::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
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
    pub fn set_lifecycle_state<T: std::convert::Into<crate::model::DrgAttachmentLifecycleState>>(mut self, v: T) -> Self {
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

impl gax::validation::Validate for ListDrgAttachmentsRequest {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        gax::validation::EnumValidator::new()
            .check("AttachmentType", self.attachment_type.as_ref())
            .check("SortBy", self.sort_by.as_ref())
            .check("SortOrder", self.sort_order.as_ref())
            .check("LifecycleState", self.lifecycle_state.as_ref())
            .finish()
    }
}

impl gax::binding::Request for ListDrgAttachmentsRequest {
    type Response = ListDrgAttachmentsResponse;

    fn operation() -> gax::binding::Operation {
        gax::binding::Operation {
            name: "ListDrgAttachments",
            method: http::Method::GET,
            path_template: "/drgAttachments",
        }
    }

    fn bind(&self, binder: gax::binding::Binder) -> gax::Result<gax::binding::Binder> {
        let binder = binder
            .parameter(&Self::COMPARTMENT_ID, self.compartment_id.as_ref())
            .parameter(&Self::VCN_ID, self.vcn_id.as_ref())
            .parameter(&Self::DRG_ID, self.drg_id.as_ref())
            .parameter(&Self::LIMIT, self.limit.as_ref())
            .parameter(&Self::PAGE, self.page.as_ref())
            .parameter(&Self::NETWORK_ID, self.network_id.as_ref())
            .parameter(&Self::ATTACHMENT_TYPE, self.attachment_type.as_ref().map(wkt::Enumeration::value))
            .parameter(&Self::DRG_ROUTE_TABLE_ID, self.drg_route_table_id.as_ref())
            .parameter(&Self::DISPLAY_NAME, self.display_name.as_ref())
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

impl gax::paginator::PageableRequest for ListDrgAttachmentsRequest {
    fn set_page(&mut self, page: std::option::Option<std::string::String>) {
        self.page = page;
    }
}

/// The response of a [ListDrgAttachmentsRequest].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ListDrgAttachmentsResponse {
    /// The DRG attachments in this page.
    pub items: std::vec::Vec<crate::model::DrgAttachment>,

    /// The cursor for the next page, absent on the last page.
    pub opc_next_page: std::option::Option<std::string::String>,

    /// The request identifier assigned by the service, include it in support requests.
    pub opc_request_id: std::option::Option<std::string::String>,

    raw_response: std::option::Option<gax::response::RawResponse>,
}

impl ListDrgAttachmentsResponse {
    /// The HTTP response, as returned by the service.
    pub fn raw_response(&self) -> std::option::Option<&gax::response::RawResponse> {
        self.raw_response.as_ref()
    }
}

impl gax::response::FromHttpResponse for ListDrgAttachmentsResponse {
    fn from_http_response(raw_response: gax::response::RawResponse) -> gax::Result<Self> {
        std::result::Result::Ok(Self {
            items: raw_response.json()?,
            opc_next_page: raw_response.header(gax::headers::OPC_NEXT_PAGE)?,
            opc_request_id: raw_response.header(gax::headers::OPC_REQUEST_ID)?,
            raw_response: std::option::Option::Some(raw_response),
        })
    }
}

impl gax::paginator::PageableResponse for ListDrgAttachmentsResponse {
    type PageItem = crate::model::DrgAttachment;

    fn next_page(&self) -> std::option::Option<&str> {
        self.opc_next_page.as_deref()
    }

    fn into_items(self) -> std::vec::Vec<crate::model::DrgAttachment> {
        self.items
    }
}

/// Gets the specified flow log configuration.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct GetFlowLogConfigRequest {
    /// The OCID of the flow log configuration.
    pub flow_log_config_id: std::option::Option<std::string::String>,

    /// Unique identifier for the request.
    /// If you need to contact Oracle about a particular request, provide the request ID.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// Overrides the retry policy of the client for this request.
    pub retry_policy: std::option::Option<gax::retry_policy::RetryPolicyArg>,
}

impl GetFlowLogConfigRequest {
    const FLOW_LOG_CONFIG_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::path("FlowLogConfigId", "flowLogConfigId");
    const OPC_REQUEST_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::header("OpcRequestId", "opc-request-id");

    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [flow_log_config_id][Self::flow_log_config_id].
    pub fn set_flow_log_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.flow_log_config_id = std::option::Option::Some(v.into());
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

impl gax::validation::Validate for GetFlowLogConfigRequest {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

impl gax::binding::Request for GetFlowLogConfigRequest {
    type Response = GetFlowLogConfigResponse;

    fn operation() -> gax::binding::Operation {
        gax::binding::Operation {
            name: "GetFlowLogConfig",
            method: http::Method::GET,
            path_template: "/flowLogConfigs/{flowLogConfigId}",
        }
    }

    fn bind(&self, binder: gax::binding::Binder) -> gax::Result<gax::binding::Binder> {
        let binder = binder
            .parameter(&Self::FLOW_LOG_CONFIG_ID, self.flow_log_config_id.as_ref())
            .parameter(&Self::OPC_REQUEST_ID, self.opc_request_id.as_ref());
        std::result::Result::Ok(binder)
    }

    fn retry_policy(&self) -> std::option::Option<&gax::retry_policy::RetryPolicyArg> {
        self.retry_policy.as_ref()
    }
}

/// The response of a [GetFlowLogConfigRequest].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct GetFlowLogConfigResponse {
    /// The flow log configuration.
    pub flow_log_config: crate::model::FlowLogConfig,

    /// The entity tag of the resource, use it in `if-match` to update it safely.
    pub etag: std::option::Option<std::string::String>,

    /// The request identifier assigned by the service, include it in support requests.
    pub opc_request_id: std::option::Option<std::string::String>,

    raw_response: std::option::Option<gax::response::RawResponse>,
}

impl GetFlowLogConfigResponse {
    /// The HTTP response, as returned by the service.
    pub fn raw_response(&self) -> std::option::Option<&gax::response::RawResponse> {
        self.raw_response.as_ref()
    }
}

impl gax::response::FromHttpResponse for GetFlowLogConfigResponse {
    fn from_http_response(raw_response: gax::response::RawResponse) -> gax::Result<Self> {
        std::result::Result::Ok(Self {
            flow_log_config: raw_response.json()?,
            etag: raw_response.header(gax::headers::ETAG)?,
            opc_request_id: raw_response.header(gax::headers::OPC_REQUEST_ID)?,
            raw_response: std::option::Option::Some(raw_response),
        })
    }
}

/// Lists the flow log configurations in the specified compartment.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ListFlowLogConfigsRequest {
    /// The OCID of the compartment.
    pub compartment_id: std::option::Option<std::string::String>,

    /// For list pagination. The maximum number of results per page.
    pub limit: std::option::Option<i32>,

    /// For list pagination. The value of the `opc-next-page` header from the previous "List" call.
    pub page: std::option::Option<std::string::String>,

    /// A filter to return only resources that match the given display name exactly.
    pub display_name: std::option::Option<std::string::String>,

    /// The field to sort by. `TIMECREATED` sorts in descending order by default,
    /// `DISPLAYNAME` sorts in ascending order by default.
    pub sort_by: std::option::Option<crate::model::SortBy>,

    /// The sort order to use, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// A filter to return only resources that match the specified lifecycle state.
    pub lifecycle_state: std::option::Option<crate::model::FlowLogConfigLifecycleState>,

    /// Unique identifier for the request.
    /// If you need to contact Oracle about a particular request, provide the request ID.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// Overrides the retry policy of the client for this request.
    pub retry_policy: std::option::Option<gax::retry_policy::RetryPolicyArg>,
}

impl ListFlowLogConfigsRequest {
    const COMPARTMENT_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("CompartmentId", "compartmentId").required();
    const LIMIT: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("Limit", "limit");
    const PAGE: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("Page", "page");
    const DISPLAY_NAME: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::query("DisplayName", "displayName");
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

    /// Sets the value of [display_name][Self::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
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
    pub fn set_lifecycle_state<T: std::convert::Into<crate::model::FlowLogConfigLifecycleState>>(mut self, v: T) -> Self {
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

impl gax::validation::Validate for ListFlowLogConfigsRequest {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        gax::validation::EnumValidator::new()
            .check("SortBy", self.sort_by.as_ref())
            .check("SortOrder", self.sort_order.as_ref())
            .check("LifecycleState", self.lifecycle_state.as_ref())
            .finish()
    }
}

impl gax::binding::Request for ListFlowLogConfigsRequest {
    type Response = ListFlowLogConfigsResponse;

    fn operation() -> gax::binding::Operation {
        gax::binding::Operation {
            name: "ListFlowLogConfigs",
            method: http::Method::GET,
            path_template: "/flowLogConfigs",
        }
    }

    fn bind(&self, binder: gax::binding::Binder) -> gax::Result<gax::binding::Binder> {
        let binder = binder
            .parameter(&Self::COMPARTMENT_ID, self.compartment_id.as_ref())
            .parameter(&Self::LIMIT, self.limit.as_ref())
            .parameter(&Self::PAGE, self.page.as_ref())
            .parameter(&Self::DISPLAY_NAME, self.display_name.as_ref())
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

impl gax::paginator::PageableRequest for ListFlowLogConfigsRequest {
    fn set_page(&mut self, page: std::option::Option<std::string::String>) {
        self.page = page;
    }
}

/// The response of a [ListFlowLogConfigsRequest].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ListFlowLogConfigsResponse {
    /// The flow log configurations in this page.
    pub items: std::vec::Vec<crate::model::FlowLogConfig>,

    /// The cursor for the next page, absent on the last page.
    pub opc_next_page: std::option::Option<std::string::String>,

    /// The request identifier assigned by the service, include it in support requests.
    pub opc_request_id: std::option::Option<std::string::String>,

    raw_response: std::option::Option<gax::response::RawResponse>,
}

impl ListFlowLogConfigsResponse {
    /// The HTTP response, as returned by the service.
    pub fn raw_response(&self) -> std::option::Option<&gax::response::RawResponse> {
        self.raw_response.as_ref()
    }
}

impl gax::response::FromHttpResponse for ListFlowLogConfigsResponse {
    fn from_http_response(raw_response: gax::response::RawResponse) -> gax::Result<Self> {
        std::result::Result::Ok(Self {
            items: raw_response.json()?,
            opc_next_page: raw_response.header(gax::headers::OPC_NEXT_PAGE)?,
            opc_request_id: raw_response.header(gax::headers::OPC_REQUEST_ID)?,
            raw_response: std::option::Option::Some(raw_response),
        })
    }
}

impl gax::paginator::PageableResponse for ListFlowLogConfigsResponse {
    type PageItem = crate::model::FlowLogConfig;

    fn next_page(&self) -> std::option::Option<&str> {
        self.opc_next_page.as_deref()
    }

    fn into_items(self) -> std::vec::Vec<crate::model::FlowLogConfig> {
        self.items
    }
}

/// Gets the specified client VPN endpoint.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct GetClientVpnRequest {
    /// The OCID of the client VPN endpoint.
    pub client_vpn_id: std::option::Option<std::string::String>,

    /// Unique identifier for the request.
    /// If you need to contact Oracle about a particular request, provide the request ID.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// Overrides the retry policy of the client for this request.
    pub retry_policy: std::option::Option<gax::retry_policy::RetryPolicyArg>,
}

impl GetClientVpnRequest {
    const CLIENT_VPN_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::path("ClientVpnId", "clientVpnId");
    const OPC_REQUEST_ID: gax::binding::FieldDescriptor =
        gax::binding::FieldDescriptor::header("OpcRequestId", "opc-request-id");

    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [client_vpn_id][Self::client_vpn_id].
    pub fn set_client_vpn_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.client_vpn_id = std::option::Option::Some(v.into());
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

impl gax::validation::Validate for GetClientVpnRequest {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

impl gax::binding::Request for GetClientVpnRequest {
    type Response = GetClientVpnResponse;

    fn operation() -> gax::binding::Operation {
        gax::binding::Operation {
            name: "GetClientVpn",
            method: http::Method::GET,
            path_template: "/clientVpns/{clientVpnId}",
        }
    }

    fn bind(&self, binder: gax::binding::Binder) -> gax::Result<gax::binding::Binder> {
        let binder = binder
            .parameter(&Self::CLIENT_VPN_ID, self.client_vpn_id.as_ref())
            .parameter(&Self::OPC_REQUEST_ID, self.opc_request_id.as_ref());
        std::result::Result::Ok(binder)
    }

    fn retry_policy(&self) -> std::option::Option<&gax::retry_policy::RetryPolicyArg> {
        self.retry_policy.as_ref()
    }
}

/// The response of a [GetClientVpnRequest].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct GetClientVpnResponse {
    /// The client VPN endpoint.
    pub client_vpn: crate::model::ClientVpn,

    /// The entity tag of the resource, use it in `if-match` to update it safely.
    pub etag: std::option::Option<std::string::String>,

    /// The request identifier assigned by the service, include it in support requests.
    pub opc_request_id: std::option::Option<std::string::String>,

    raw_response: std::option::Option<gax::response::RawResponse>,
}

impl GetClientVpnResponse {
    /// The HTTP response, as returned by the service.
    pub fn raw_response(&self) -> std::option::Option<&gax::response::RawResponse> {
        self.raw_response.as_ref()
    }
}

impl gax::response::FromHttpResponse for GetClientVpnResponse {
    fn from_http_response(raw_response: gax::response::RawResponse) -> gax::Result<Self> {
        std::result::Result::Ok(Self {
            client_vpn: raw_response.json()?,
            etag: raw_response.header(gax::headers::ETAG)?,
            opc_request_id: raw_response.header(gax::headers::OPC_REQUEST_ID)?,
            raw_response: std::option::Option::Some(raw_response),
        })
    }
}
