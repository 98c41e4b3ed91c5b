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

/// The current state of a [DrgAttachment].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DrgAttachmentLifecycleState {
    Attaching,
    Attached,
    Detaching,
    Detached,
    /// A value not known to this version of the client.
    ///
    /// The service may add new values at any time, they are preserved
    /// verbatim but fail validation.
    UnknownValue(wkt::UnknownEnumValue),
}

impl wkt::Enumeration for DrgAttachmentLifecycleState {
    fn labels() -> &'static [&'static str] {
        &[
            "ATTACHING",
            "ATTACHED",
            "DETACHING",
            "DETACHED",
        ]
    }

    fn value(&self) -> &str {
        match self {
            Self::Attaching => "ATTACHING",
            Self::Attached => "ATTACHED",
            Self::Detaching => "DETACHING",
            Self::Detached => "DETACHED",
            Self::UnknownValue(u) => u.as_str(),
        }
    }
}

impl std::convert::From<&str> for DrgAttachmentLifecycleState {
    fn from(value: &str) -> Self {
        match value {
            "ATTACHING" => Self::Attaching,
            "ATTACHED" => Self::Attached,
            "DETACHING" => Self::Detaching,
            "DETACHED" => Self::Detached,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value)),
        }
    }
}

impl std::fmt::Display for DrgAttachmentLifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(wkt::Enumeration::value(self))
    }
}

impl serde::ser::Serialize for DrgAttachmentLifecycleState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        wkt::internal::serialize_enum(self, serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for DrgAttachmentLifecycleState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        wkt::internal::deserialize_enum(deserializer, "DrgAttachmentLifecycleState")
    }
}

/// Indicates whether the VCN CIDRs or the individual subnet CIDRs are imported from the attachment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum VcnDrgAttachmentNetworkCreateDetailsVcnRouteType {
    VcnCidrs,
    SubnetCidrs,
    /// A value not known to this version of the client.
    ///
    /// The service may add new values at any time, they are preserved
    /// verbatim but fail validation.
    UnknownValue(wkt::UnknownEnumValue),
}

impl wkt::Enumeration for VcnDrgAttachmentNetworkCreateDetailsVcnRouteType {
    fn labels() -> &'static [&'static str] {
        &[
            "VCN_CIDRS",
            "SUBNET_CIDRS",
        ]
    }

    fn value(&self) -> &str {
        match self {
            Self::VcnCidrs => "VCN_CIDRS",
            Self::SubnetCidrs => "SUBNET_CIDRS",
            Self::UnknownValue(u) => u.as_str(),
        }
    }
}

impl std::convert::From<&str> for VcnDrgAttachmentNetworkCreateDetailsVcnRouteType {
    fn from(value: &str) -> Self {
        match value {
            "VCN_CIDRS" => Self::VcnCidrs,
            "SUBNET_CIDRS" => Self::SubnetCidrs,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value)),
        }
    }
}

impl std::fmt::Display for VcnDrgAttachmentNetworkCreateDetailsVcnRouteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(wkt::Enumeration::value(self))
    }
}

impl serde::ser::Serialize for VcnDrgAttachmentNetworkCreateDetailsVcnRouteType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        wkt::internal::serialize_enum(self, serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for VcnDrgAttachmentNetworkCreateDetailsVcnRouteType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        wkt::internal::deserialize_enum(deserializer, "VcnDrgAttachmentNetworkCreateDetailsVcnRouteType")
    }
}

/// The current state of a [FlowLogConfig].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FlowLogConfigLifecycleState {
    Provisioning,
    Available,
    Updating,
    Terminating,
    Terminated,
    /// A value not known to this version of the client.
    ///
    /// The service may add new values at any time, they are preserved
    /// verbatim but fail validation.
    UnknownValue(wkt::UnknownEnumValue),
}

impl wkt::Enumeration for FlowLogConfigLifecycleState {
    fn labels() -> &'static [&'static str] {
        &[
            "PROVISIONING",
            "AVAILABLE",
            "UPDATING",
            "TERMINATING",
            "TERMINATED",
        ]
    }

    fn value(&self) -> &str {
        match self {
            Self::Provisioning => "PROVISIONING",
            Self::Available => "AVAILABLE",
            Self::Updating => "UPDATING",
            Self::Terminating => "TERMINATING",
            Self::Terminated => "TERMINATED",
            Self::UnknownValue(u) => u.as_str(),
        }
    }
}

impl std::convert::From<&str> for FlowLogConfigLifecycleState {
    fn from(value: &str) -> Self {
        match value {
            "PROVISIONING" => Self::Provisioning,
            "AVAILABLE" => Self::Available,
            "UPDATING" => Self::Updating,
            "TERMINATING" => Self::Terminating,
            "TERMINATED" => Self::Terminated,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value)),
        }
    }
}

impl std::fmt::Display for FlowLogConfigLifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(wkt::Enumeration::value(self))
    }
}

impl serde::ser::Serialize for FlowLogConfigLifecycleState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        wkt::internal::serialize_enum(self, serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for FlowLogConfigLifecycleState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        wkt::internal::deserialize_enum(deserializer, "FlowLogConfigLifecycleState")
    }
}

/// The type of traffic to log.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FlowLogConfigFlowLogType {
    All,
    Reject,
    Accept,
    /// A value not known to this version of the client.
    ///
    /// The service may add new values at any time, they are preserved
    /// verbatim but fail validation.
    UnknownValue(wkt::UnknownEnumValue),
}

impl wkt::Enumeration for FlowLogConfigFlowLogType {
    fn labels() -> &'static [&'static str] {
        &[
            "ALL",
            "REJECT",
            "ACCEPT",
        ]
    }

    fn value(&self) -> &str {
        match self {
            Self::All => "ALL",
            Self::Reject => "REJECT",
            Self::Accept => "ACCEPT",
            Self::UnknownValue(u) => u.as_str(),
        }
    }
}

impl std::convert::From<&str> for FlowLogConfigFlowLogType {
    fn from(value: &str) -> Self {
        match value {
            "ALL" => Self::All,
            "REJECT" => Self::Reject,
            "ACCEPT" => Self::Accept,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value)),
        }
    }
}

impl std::fmt::Display for FlowLogConfigFlowLogType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(wkt::Enumeration::value(self))
    }
}

impl serde::ser::Serialize for FlowLogConfigFlowLogType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        wkt::internal::serialize_enum(self, serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for FlowLogConfigFlowLogType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        wkt::internal::deserialize_enum(deserializer, "FlowLogConfigFlowLogType")
    }
}

/// The current state of a [ClientVpn].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ClientVpnLifecycleState {
    Creating,
    Active,
    Inactive,
    Failed,
    Deleted,
    Deleting,
    Updating,
    /// A value not known to this version of the client.
    ///
    /// The service may add new values at any time, they are preserved
    /// verbatim but fail validation.
    UnknownValue(wkt::UnknownEnumValue),
}

impl wkt::Enumeration for ClientVpnLifecycleState {
    fn labels() -> &'static [&'static str] {
        &[
            "CREATING",
            "ACTIVE",
            "INACTIVE",
            "FAILED",
            "DELETED",
            "DELETING",
            "UPDATING",
        ]
    }

    fn value(&self) -> &str {
        match self {
            Self::Creating => "CREATING",
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Failed => "FAILED",
            Self::Deleted => "DELETED",
            Self::Deleting => "DELETING",
            Self::Updating => "UPDATING",
            Self::UnknownValue(u) => u.as_str(),
        }
    }
}

impl std::convert::From<&str> for ClientVpnLifecycleState {
    fn from(value: &str) -> Self {
        match value {
            "CREATING" => Self::Creating,
            "ACTIVE" => Self::Active,
            "INACTIVE" => Self::Inactive,
            "FAILED" => Self::Failed,
            "DELETED" => Self::Deleted,
            "DELETING" => Self::Deleting,
            "UPDATING" => Self::Updating,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value)),
        }
    }
}

impl std::fmt::Display for ClientVpnLifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(wkt::Enumeration::value(self))
    }
}

impl serde::ser::Serialize for ClientVpnLifecycleState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        wkt::internal::serialize_enum(self, serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for ClientVpnLifecycleState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        wkt::internal::deserialize_enum(deserializer, "ClientVpnLifecycleState")
    }
}

/// The authentication mode of a [ClientVpn].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ClientVpnAuthenticationMode {
    Ldap,
    Radius,
    Local,
    /// A value not known to this version of the client.
    ///
    /// The service may add new values at any time, they are preserved
    /// verbatim but fail validation.
    UnknownValue(wkt::UnknownEnumValue),
}

impl wkt::Enumeration for ClientVpnAuthenticationMode {
    fn labels() -> &'static [&'static str] {
        &[
            "LDAP",
            "RADIUS",
            "LOCAL",
        ]
    }

    fn value(&self) -> &str {
        match self {
            Self::Ldap => "LDAP",
            Self::Radius => "RADIUS",
            Self::Local => "LOCAL",
            Self::UnknownValue(u) => u.as_str(),
        }
    }
}

impl std::convert::From<&str> for ClientVpnAuthenticationMode {
    fn from(value: &str) -> Self {
        match value {
            "LDAP" => Self::Ldap,
            "RADIUS" => Self::Radius,
            "LOCAL" => Self::Local,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value)),
        }
    }
}

impl std::fmt::Display for ClientVpnAuthenticationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(wkt::Enumeration::value(self))
    }
}

impl serde::ser::Serialize for ClientVpnAuthenticationMode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        wkt::internal::serialize_enum(self, serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for ClientVpnAuthenticationMode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        wkt::internal::deserialize_enum(deserializer, "ClientVpnAuthenticationMode")
    }
}

/// The network resource to attach to a DRG.
///
/// Network types unknown to this client decode into
/// [DrgAttachmentNetworkCreateDetails::Unknown], the shared `id` attribute
/// is still available through [DrgAttachmentNetworkCreateDetails::id].
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum DrgAttachmentNetworkCreateDetails {
    /// The `VCN` variant.
    Vcn(VcnDrgAttachmentNetworkCreateDetails),
    /// A network type not known to this version of the client.
    Unknown(gax::polymorphic::Holder<DrgAttachmentNetworkCreateDetails>),
}

impl DrgAttachmentNetworkCreateDetails {
    /// The value of the `type` discriminator.
    pub fn discriminator(&self) -> &str {
        match self {
            Self::Vcn(_) => "VCN",
            Self::Unknown(h) => h.discriminator(),
        }
    }

    /// The OCID of the network attached to the DRG.
    pub fn id(&self) -> std::option::Option<&str> {
        match self {
            Self::Vcn(v) => v.id.as_deref(),
            Self::Unknown(h) => h.shell().id.as_deref(),
        }
    }
}

/// The attributes shared by all the [DrgAttachmentNetworkCreateDetails] variants.
#[doc(hidden)]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DrgAttachmentNetworkCreateDetailsShell {
    pub id: std::option::Option<std::string::String>,
}

impl gax::polymorphic::Discriminated for DrgAttachmentNetworkCreateDetails {
    const NAME: &'static str = "DrgAttachmentNetworkCreateDetails";
    const DISCRIMINATOR: &'static str = "type";
    type Shell = DrgAttachmentNetworkCreateDetailsShell;

    fn decode_variant(
        discriminator: &str,
        raw: &serde_json::value::RawValue,
    ) -> std::option::Option<serde_json::Result<Self>> {
        use gax::polymorphic::decode;
        let v = match discriminator {
            "VCN" => decode(raw).map(Self::Vcn),
            _ => return std::option::Option::None,
        };
        std::option::Option::Some(v)
    }

    fn unknown(holder: gax::polymorphic::Holder<Self>) -> Self {
        Self::Unknown(holder)
    }
}

impl serde::ser::Serialize for DrgAttachmentNetworkCreateDetails {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use gax::polymorphic::Tagged;
        use serde::ser::Serialize as _;
        match self {
            Self::Vcn(v) => Tagged::new("type", "VCN", v).serialize(serializer),
            Self::Unknown(h) => h.serialize(serializer),
        }
    }
}

impl<'de> serde::de::Deserialize<'de> for DrgAttachmentNetworkCreateDetails {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        gax::polymorphic::deserialize(deserializer)
    }
}

impl gax::validation::Validate for DrgAttachmentNetworkCreateDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        use gax::validation::Validate as _;
        match self {
            Self::Vcn(v) => v.validate(),
            Self::Unknown(_) => std::result::Result::Ok(()),
        }
    }
}

impl std::convert::From<VcnDrgAttachmentNetworkCreateDetails> for DrgAttachmentNetworkCreateDetails {
    fn from(value: VcnDrgAttachmentNetworkCreateDetails) -> Self {
        Self::Vcn(value)
    }
}

/// Attaches a VCN to a DRG.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct VcnDrgAttachmentNetworkCreateDetails {
    /// The OCID of the VCN.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// The OCID of the route table the DRG attachment uses.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub route_table_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub vcn_route_type: std::option::Option<VcnDrgAttachmentNetworkCreateDetailsVcnRouteType>,
}

impl VcnDrgAttachmentNetworkCreateDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [route_table_id][Self::route_table_id].
    pub fn set_route_table_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.route_table_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [vcn_route_type][Self::vcn_route_type].
    pub fn set_vcn_route_type<T: std::convert::Into<VcnDrgAttachmentNetworkCreateDetailsVcnRouteType>>(mut self, v: T) -> Self {
        self.vcn_route_type = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for VcnDrgAttachmentNetworkCreateDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        gax::validation::EnumValidator::new()
            .check("VcnRouteType", self.vcn_route_type.as_ref())
            .finish()
    }
}

/// The network resource attached to a DRG.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum DrgAttachmentNetworkDetails {
    /// The `VCN` variant.
    Vcn(VcnDrgAttachmentNetworkDetails),
    /// The `IPSEC_TUNNEL` variant.
    IpsecTunnel(IpsecTunnelAttachmentDetails),
    /// The `VIRTUAL_CIRCUIT` variant.
    VirtualCircuit(VirtualCircuitDrgAttachmentNetworkDetails),
    /// The `REMOTE_PEERING_CONNECTION` variant.
    RemotePeeringConnection(RemotePeeringConnectionDrgAttachmentNetworkDetails),
    /// A network type not known to this version of the client.
    Unknown(gax::polymorphic::Holder<DrgAttachmentNetworkDetails>),
}

impl DrgAttachmentNetworkDetails {
    /// The value of the `type` discriminator.
    pub fn discriminator(&self) -> &str {
        match self {
            Self::Vcn(_) => "VCN",
            Self::IpsecTunnel(_) => "IPSEC_TUNNEL",
            Self::VirtualCircuit(_) => "VIRTUAL_CIRCUIT",
            Self::RemotePeeringConnection(_) => "REMOTE_PEERING_CONNECTION",
            Self::Unknown(h) => h.discriminator(),
        }
    }

    /// The OCID of the network attached to the DRG.
    pub fn id(&self) -> std::option::Option<&str> {
        match self {
            Self::Vcn(v) => v.id.as_deref(),
            Self::IpsecTunnel(v) => v.id.as_deref(),
            Self::VirtualCircuit(v) => v.id.as_deref(),
            Self::RemotePeeringConnection(v) => v.id.as_deref(),
            Self::Unknown(h) => h.shell().id.as_deref(),
        }
    }
}

/// The attributes shared by all the [DrgAttachmentNetworkDetails] variants.
#[doc(hidden)]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DrgAttachmentNetworkDetailsShell {
    pub id: std::option::Option<std::string::String>,
}

impl gax::polymorphic::Discriminated for DrgAttachmentNetworkDetails {
    const NAME: &'static str = "DrgAttachmentNetworkDetails";
    const DISCRIMINATOR: &'static str = "type";
    type Shell = DrgAttachmentNetworkDetailsShell;

    fn decode_variant(
        discriminator: &str,
        raw: &serde_json::value::RawValue,
    ) -> std::option::Option<serde_json::Result<Self>> {
        use gax::polymorphic::decode;
        let v = match discriminator {
            "VCN" => decode(raw).map(Self::Vcn),
            "IPSEC_TUNNEL" => decode(raw).map(Self::IpsecTunnel),
            "VIRTUAL_CIRCUIT" => decode(raw).map(Self::VirtualCircuit),
            "REMOTE_PEERING_CONNECTION" => decode(raw).map(Self::RemotePeeringConnection),
            _ => return std::option::Option::None,
        };
        std::option::Option::Some(v)
    }

    fn unknown(holder: gax::polymorphic::Holder<Self>) -> Self {
        Self::Unknown(holder)
    }
}

impl serde::ser::Serialize for DrgAttachmentNetworkDetails {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use gax::polymorphic::Tagged;
        use serde::ser::Serialize as _;
        match self {
            Self::Vcn(v) => Tagged::new("type", "VCN", v).serialize(serializer),
            Self::IpsecTunnel(v) => Tagged::new("type", "IPSEC_TUNNEL", v).serialize(serializer),
            Self::VirtualCircuit(v) => Tagged::new("type", "VIRTUAL_CIRCUIT", v).serialize(serializer),
            Self::RemotePeeringConnection(v) => Tagged::new("type", "REMOTE_PEERING_CONNECTION", v).serialize(serializer),
            Self::Unknown(h) => h.serialize(serializer),
        }
    }
}

impl<'de> serde::de::Deserialize<'de> for DrgAttachmentNetworkDetails {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        gax::polymorphic::deserialize(deserializer)
    }
}

impl gax::validation::Validate for DrgAttachmentNetworkDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        use gax::validation::Validate as _;
        match self {
            Self::Vcn(v) => v.validate(),
            Self::IpsecTunnel(v) => v.validate(),
            Self::VirtualCircuit(v) => v.validate(),
            Self::RemotePeeringConnection(v) => v.validate(),
            Self::Unknown(_) => std::result::Result::Ok(()),
        }
    }
}

impl std::convert::From<VcnDrgAttachmentNetworkDetails> for DrgAttachmentNetworkDetails {
    fn from(value: VcnDrgAttachmentNetworkDetails) -> Self {
        Self::Vcn(value)
    }
}

impl std::convert::From<IpsecTunnelAttachmentDetails> for DrgAttachmentNetworkDetails {
    fn from(value: IpsecTunnelAttachmentDetails) -> Self {
        Self::IpsecTunnel(value)
    }
}

impl std::convert::From<VirtualCircuitDrgAttachmentNetworkDetails> for DrgAttachmentNetworkDetails {
    fn from(value: VirtualCircuitDrgAttachmentNetworkDetails) -> Self {
        Self::VirtualCircuit(value)
    }
}

impl std::convert::From<RemotePeeringConnectionDrgAttachmentNetworkDetails> for DrgAttachmentNetworkDetails {
    fn from(value: RemotePeeringConnectionDrgAttachmentNetworkDetails) -> Self {
        Self::RemotePeeringConnection(value)
    }
}

/// A VCN attached to a DRG.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct VcnDrgAttachmentNetworkDetails {
    /// The OCID of the VCN.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// The OCID of the route table the DRG attachment uses.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub route_table_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub vcn_route_type: std::option::Option<VcnDrgAttachmentNetworkCreateDetailsVcnRouteType>,
}

impl VcnDrgAttachmentNetworkDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [route_table_id][Self::route_table_id].
    pub fn set_route_table_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.route_table_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [vcn_route_type][Self::vcn_route_type].
    pub fn set_vcn_route_type<T: std::convert::Into<VcnDrgAttachmentNetworkCreateDetailsVcnRouteType>>(mut self, v: T) -> Self {
        self.vcn_route_type = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for VcnDrgAttachmentNetworkDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        gax::validation::EnumValidator::new()
            .check("VcnRouteType", self.vcn_route_type.as_ref())
            .finish()
    }
}

/// An IPSec tunnel attached to a DRG.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IpsecTunnelAttachmentDetails {
    /// The OCID of the IPSec tunnel.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// The OCID of the IPSec connection that contains the attached tunnel.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ipsec_connection_id: std::option::Option<std::string::String>,

    /// The OCID of the virtual circuit attachment used as the transport.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transport_attachment_id: std::option::Option<std::string::String>,
}

impl IpsecTunnelAttachmentDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [ipsec_connection_id][Self::ipsec_connection_id].
    pub fn set_ipsec_connection_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.ipsec_connection_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [transport_attachment_id][Self::transport_attachment_id].
    pub fn set_transport_attachment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.transport_attachment_id = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for IpsecTunnelAttachmentDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

/// A virtual circuit attached to a DRG.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct VirtualCircuitDrgAttachmentNetworkDetails {
    /// The OCID of the virtual circuit.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_bgp_enabled: std::option::Option<bool>,
}

impl VirtualCircuitDrgAttachmentNetworkDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_bgp_enabled][Self::is_bgp_enabled].
    pub fn set_is_bgp_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_bgp_enabled = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for VirtualCircuitDrgAttachmentNetworkDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

/// A remote peering connection attached to a DRG.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RemotePeeringConnectionDrgAttachmentNetworkDetails {
    /// The OCID of the remote peering connection.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,
}

impl RemotePeeringConnectionDrgAttachmentNetworkDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for RemotePeeringConnectionDrgAttachmentNetworkDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

/// The details to attach a network resource to a DRG.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateDrgAttachmentDetails {
    /// A user-friendly name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// The OCID of the DRG.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub drg_id: std::option::Option<std::string::String>,

    /// The OCID of the DRG route table assigned to the attachment.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub drg_route_table_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network_details: std::option::Option<DrgAttachmentNetworkCreateDetails>,

    /// Defined tags for this resource, each key is predefined and scoped to a namespace.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,

    /// Free-form tags for this resource.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    /// Deprecated. Use `network_details` instead.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub route_table_id: std::option::Option<std::string::String>,

    /// Deprecated. Use `network_details` instead.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub vcn_id: std::option::Option<std::string::String>,
}

impl CreateDrgAttachmentDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][Self::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [drg_id][Self::drg_id].
    pub fn set_drg_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.drg_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [drg_route_table_id][Self::drg_route_table_id].
    pub fn set_drg_route_table_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.drg_route_table_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [network_details][Self::network_details].
    pub fn set_network_details<T: std::convert::Into<DrgAttachmentNetworkCreateDetails>>(mut self, v: T) -> Self {
        self.network_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [defined_tags][Self::defined_tags].
    pub fn set_defined_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::collections::HashMap<std::string::String, serde_json::Value>>,
    {
        use std::iter::Iterator;
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [freeform_tags][Self::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [route_table_id][Self::route_table_id].
    pub fn set_route_table_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.route_table_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [vcn_id][Self::vcn_id].
    pub fn set_vcn_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.vcn_id = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for CreateDrgAttachmentDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

/// A link between a DRG and a VCN, or another network resource.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DrgAttachment {
    /// The OCID of the compartment containing the DRG attachment.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// The OCID of the DRG.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub drg_id: std::option::Option<std::string::String>,

    /// The DRG attachment's Oracle ID (OCID).
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// The DRG attachment's current state.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<DrgAttachmentLifecycleState>,

    /// The date and time the DRG attachment was created, in RFC 3339 format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub time_created: std::option::Option<wkt::Timestamp>,

    /// The OCID of the DRG route table assigned to the attachment.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub drg_route_table_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network_details: std::option::Option<DrgAttachmentNetworkDetails>,

    /// Defined tags for this resource, each key is predefined and scoped to a namespace.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,

    /// Free-form tags for this resource.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    /// Whether the DRG attachment and attached network live in a different tenancy than the DRG.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_cross_tenancy: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub export_drg_route_distribution_id: std::option::Option<std::string::String>,
}

impl DrgAttachment {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][Self::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][Self::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [drg_id][Self::drg_id].
    pub fn set_drg_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.drg_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][Self::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<DrgAttachmentLifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][Self::time_created].
    pub fn set_time_created<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [drg_route_table_id][Self::drg_route_table_id].
    pub fn set_drg_route_table_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.drg_route_table_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [network_details][Self::network_details].
    pub fn set_network_details<T: std::convert::Into<DrgAttachmentNetworkDetails>>(mut self, v: T) -> Self {
        self.network_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [defined_tags][Self::defined_tags].
    pub fn set_defined_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::collections::HashMap<std::string::String, serde_json::Value>>,
    {
        use std::iter::Iterator;
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [freeform_tags][Self::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [is_cross_tenancy][Self::is_cross_tenancy].
    pub fn set_is_cross_tenancy<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_cross_tenancy = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [export_drg_route_distribution_id][Self::export_drg_route_distribution_id].
    pub fn set_export_drg_route_distribution_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.export_drg_route_distribution_id = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for DrgAttachment {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        gax::validation::EnumValidator::new()
            .check("LifecycleState", self.lifecycle_state.as_ref())
            .finish()
    }
}

/// Where to store the flow logs.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum FlowLogDestination {
    /// The `OBJECT_STORAGE` variant.
    ObjectStorage(FlowLogObjectStorageDestination),
    /// A destination type not known to this version of the client.
    Unknown(gax::polymorphic::Holder<FlowLogDestination>),
}

impl FlowLogDestination {
    /// The value of the `destinationType` discriminator.
    pub fn discriminator(&self) -> &str {
        match self {
            Self::ObjectStorage(_) => "OBJECT_STORAGE",
            Self::Unknown(h) => h.discriminator(),
        }
    }
}

/// The attributes shared by all the [FlowLogDestination] variants.
#[doc(hidden)]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FlowLogDestinationShell {}

impl gax::polymorphic::Discriminated for FlowLogDestination {
    const NAME: &'static str = "FlowLogDestination";
    const DISCRIMINATOR: &'static str = "destinationType";
    type Shell = FlowLogDestinationShell;

    fn decode_variant(
        discriminator: &str,
        raw: &serde_json::value::RawValue,
    ) -> std::option::Option<serde_json::Result<Self>> {
        use gax::polymorphic::decode;
        let v = match discriminator {
            "OBJECT_STORAGE" => decode(raw).map(Self::ObjectStorage),
            _ => return std::option::Option::None,
        };
        std::option::Option::Some(v)
    }

    fn unknown(holder: gax::polymorphic::Holder<Self>) -> Self {
        Self::Unknown(holder)
    }
}

impl serde::ser::Serialize for FlowLogDestination {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use gax::polymorphic::Tagged;
        use serde::ser::Serialize as _;
        match self {
            Self::ObjectStorage(v) => Tagged::new("destinationType", "OBJECT_STORAGE", v).serialize(serializer),
            Self::Unknown(h) => h.serialize(serializer),
        }
    }
}

impl<'de> serde::de::Deserialize<'de> for FlowLogDestination {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        gax::polymorphic::deserialize(deserializer)
    }
}

impl gax::validation::Validate for FlowLogDestination {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        use gax::validation::Validate as _;
        match self {
            Self::ObjectStorage(v) => v.validate(),
            Self::Unknown(_) => std::result::Result::Ok(()),
        }
    }
}

impl std::convert::From<FlowLogObjectStorageDestination> for FlowLogDestination {
    fn from(value: FlowLogObjectStorageDestination) -> Self {
        Self::ObjectStorage(value)
    }
}

/// Stores the flow logs in an Object Storage bucket.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FlowLogObjectStorageDestination {
    /// The Object Storage bucket name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub bucket_name: std::option::Option<std::string::String>,

    /// The Object Storage namespace.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub namespace_name: std::option::Option<std::string::String>,
}

impl FlowLogObjectStorageDestination {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bucket_name][Self::bucket_name].
    pub fn set_bucket_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.bucket_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [namespace_name][Self::namespace_name].
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for FlowLogObjectStorageDestination {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

/// A flow log configuration.
///
/// It determines which traffic to log and where to store the log entries.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FlowLogConfig {
    /// The OCID of the compartment containing the flow log configuration.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    /// Defined tags for this resource, each key is predefined and scoped to a namespace.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,

    /// A user-friendly name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// The type of traffic to log.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub flow_log_type: std::option::Option<FlowLogConfigFlowLogType>,

    /// Free-form tags for this resource.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    /// The OCID of the flow log configuration.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// The flow log configuration's current state.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<FlowLogConfigLifecycleState>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub flow_log_destination: std::option::Option<FlowLogDestination>,

    /// The date and time the flow log configuration was created, in RFC 3339 format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub time_created: std::option::Option<wkt::Timestamp>,
}

impl FlowLogConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][Self::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [defined_tags][Self::defined_tags].
    pub fn set_defined_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::collections::HashMap<std::string::String, serde_json::Value>>,
    {
        use std::iter::Iterator;
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [display_name][Self::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [flow_log_type][Self::flow_log_type].
    pub fn set_flow_log_type<T: std::convert::Into<FlowLogConfigFlowLogType>>(mut self, v: T) -> Self {
        self.flow_log_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][Self::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][Self::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<FlowLogConfigLifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [flow_log_destination][Self::flow_log_destination].
    pub fn set_flow_log_destination<T: std::convert::Into<FlowLogDestination>>(mut self, v: T) -> Self {
        self.flow_log_destination = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][Self::time_created].
    pub fn set_time_created<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for FlowLogConfig {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        gax::validation::EnumValidator::new()
            .check("FlowLogType", self.flow_log_type.as_ref())
            .check("LifecycleState", self.lifecycle_state.as_ref())
            .finish()
    }
}

/// The certificate used by a client VPN endpoint.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum SslCertDetails {
    /// The `PEM` variant.
    Pem(PemSslCertDetails),
    /// A content type not known to this version of the client.
    Unknown(gax::polymorphic::Holder<SslCertDetails>),
}

impl SslCertDetails {
    /// The value of the `contentType` discriminator.
    pub fn discriminator(&self) -> &str {
        match self {
            Self::Pem(_) => "PEM",
            Self::Unknown(h) => h.discriminator(),
        }
    }
}

/// The attributes shared by all the [SslCertDetails] variants.
#[doc(hidden)]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SslCertDetailsShell {}

impl gax::polymorphic::Discriminated for SslCertDetails {
    const NAME: &'static str = "SslCertDetails";
    const DISCRIMINATOR: &'static str = "contentType";
    type Shell = SslCertDetailsShell;

    fn decode_variant(
        discriminator: &str,
        raw: &serde_json::value::RawValue,
    ) -> std::option::Option<serde_json::Result<Self>> {
        use gax::polymorphic::decode;
        let v = match discriminator {
            "PEM" => decode(raw).map(Self::Pem),
            _ => return std::option::Option::None,
        };
        std::option::Option::Some(v)
    }

    fn unknown(holder: gax::polymorphic::Holder<Self>) -> Self {
        Self::Unknown(holder)
    }
}

impl serde::ser::Serialize for SslCertDetails {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use gax::polymorphic::Tagged;
        use serde::ser::Serialize as _;
        match self {
            Self::Pem(v) => Tagged::new("contentType", "PEM", v).serialize(serializer),
            Self::Unknown(h) => h.serialize(serializer),
        }
    }
}

impl<'de> serde::de::Deserialize<'de> for SslCertDetails {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        gax::polymorphic::deserialize(deserializer)
    }
}

impl gax::validation::Validate for SslCertDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        use gax::validation::Validate as _;
        match self {
            Self::Pem(v) => v.validate(),
            Self::Unknown(_) => std::result::Result::Ok(()),
        }
    }
}

impl std::convert::From<PemSslCertDetails> for SslCertDetails {
    fn from(value: PemSslCertDetails) -> Self {
        Self::Pem(value)
    }
}

/// A PEM encoded certificate.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PemSslCertDetails {
    /// The PEM encoded certificate.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub certificate: std::option::Option<std::string::String>,

    /// The PEM encoded private key.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub private_key: std::option::Option<std::string::String>,
}

impl PemSslCertDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [certificate][Self::certificate].
    pub fn set_certificate<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.certificate = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [private_key][Self::private_key].
    pub fn set_private_key<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.private_key = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for PemSslCertDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

/// A client VPN endpoint.
///
/// Remote users connect to the endpoint using an OpenVPN client.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ClientVpn {
    /// The OCID of the client VPN endpoint.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// The OCID of the compartment containing the endpoint.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    /// A user-friendly name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// The current state of the endpoint.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<ClientVpnLifecycleState>,

    /// How the endpoint authenticates its users.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub authentication_mode: std::option::Option<ClientVpnAuthenticationMode>,

    /// The OCID of the VCN the endpoint is attached to.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub vcn_id: std::option::Option<std::string::String>,

    /// The OCID of the subnet the endpoint is attached to.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub subnet_id: std::option::Option<std::string::String>,

    /// The CIDR block used to assign addresses to the VPN clients.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_subnet_cidr: std::option::Option<std::string::String>,

    /// The DNS servers pushed to the VPN clients.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub dns_servers: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ssl_cert: std::option::Option<SslCertDetails>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_rewrite_to_cidr_enabled: std::option::Option<bool>,

    /// The date and time the endpoint was created, in RFC 3339 format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub time_created: std::option::Option<wkt::Timestamp>,

    /// Defined tags for this resource, each key is predefined and scoped to a namespace.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,

    /// Free-form tags for this resource.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,
}

impl ClientVpn {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][Self::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][Self::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][Self::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<ClientVpnLifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [authentication_mode][Self::authentication_mode].
    pub fn set_authentication_mode<T: std::convert::Into<ClientVpnAuthenticationMode>>(mut self, v: T) -> Self {
        self.authentication_mode = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [vcn_id][Self::vcn_id].
    pub fn set_vcn_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.vcn_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [subnet_id][Self::subnet_id].
    pub fn set_subnet_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.subnet_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [client_subnet_cidr][Self::client_subnet_cidr].
    pub fn set_client_subnet_cidr<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.client_subnet_cidr = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dns_servers][Self::dns_servers].
    pub fn set_dns_servers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.dns_servers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [ssl_cert][Self::ssl_cert].
    pub fn set_ssl_cert<T: std::convert::Into<SslCertDetails>>(mut self, v: T) -> Self {
        self.ssl_cert = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_rewrite_to_cidr_enabled][Self::is_rewrite_to_cidr_enabled].
    pub fn set_is_rewrite_to_cidr_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_rewrite_to_cidr_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][Self::time_created].
    pub fn set_time_created<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [defined_tags][Self::defined_tags].
    pub fn set_defined_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::collections::HashMap<std::string::String, serde_json::Value>>,
    {
        use std::iter::Iterator;
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [freeform_tags][Self::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

impl gax::validation::Validate for ClientVpn {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        gax::validation::EnumValidator::new()
            .check("LifecycleState", self.lifecycle_state.as_ref())
            .check("AuthenticationMode", self.authentication_mode.as_ref())
            .finish()
    }
}
