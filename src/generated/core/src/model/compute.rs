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

/// The current state of an [Instance].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum InstanceLifecycleState {
    Moving,
    Provisioning,
    Running,
    Starting,
    Stopping,
    Stopped,
    CreatingImage,
    Terminating,
    Terminated,
    /// A value not known to this version of the client.
    ///
    /// The service may add new values at any time, they are preserved
    /// verbatim but fail validation.
    UnknownValue(wkt::UnknownEnumValue),
}

impl wkt::Enumeration for InstanceLifecycleState {
    fn labels() -> &'static [&'static str] {
        &[
            "MOVING",
            "PROVISIONING",
            "RUNNING",
            "STARTING",
            "STOPPING",
            "STOPPED",
            "CREATING_IMAGE",
            "TERMINATING",
            "TERMINATED",
        ]
    }

    fn value(&self) -> &str {
        match self {
            Self::Moving => "MOVING",
            Self::Provisioning => "PROVISIONING",
            Self::Running => "RUNNING",
            Self::Starting => "STARTING",
            Self::Stopping => "STOPPING",
            Self::Stopped => "STOPPED",
            Self::CreatingImage => "CREATING_IMAGE",
            Self::Terminating => "TERMINATING",
            Self::Terminated => "TERMINATED",
            Self::UnknownValue(u) => u.as_str(),
        }
    }
}

impl std::convert::From<&str> for InstanceLifecycleState {
    fn from(value: &str) -> Self {
        match value {
            "MOVING" => Self::Moving,
            "PROVISIONING" => Self::Provisioning,
            "RUNNING" => Self::Running,
            "STARTING" => Self::Starting,
            "STOPPING" => Self::Stopping,
            "STOPPED" => Self::Stopped,
            "CREATING_IMAGE" => Self::CreatingImage,
            "TERMINATING" => Self::Terminating,
            "TERMINATED" => Self::Terminated,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value)),
        }
    }
}

impl std::fmt::Display for InstanceLifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(wkt::Enumeration::value(self))
    }
}

impl serde::ser::Serialize for InstanceLifecycleState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        wkt::internal::serialize_enum(self, serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for InstanceLifecycleState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        wkt::internal::deserialize_enum(deserializer, "InstanceLifecycleState")
    }
}

/// Specifies the configuration mode for launching virtual machine (VM) instances.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum InstanceLaunchMode {
    /// VM instances launch with iSCSI boot and VFIO devices.
    Native,
    /// VM instances launch with emulated devices, such as the E1000 network driver.
    Emulated,
    /// VM instances launch with paravirtualized devices using VirtIO drivers.
    Paravirtualized,
    /// VM instances launch with custom configuration settings.
    Custom,
    /// A value not known to this version of the client.
    ///
    /// The service may add new values at any time, they are preserved
    /// verbatim but fail validation.
    UnknownValue(wkt::UnknownEnumValue),
}

impl wkt::Enumeration for InstanceLaunchMode {
    fn labels() -> &'static [&'static str] {
        &[
            "NATIVE",
            "EMULATED",
            "PARAVIRTUALIZED",
            "CUSTOM",
        ]
    }

    fn value(&self) -> &str {
        match self {
            Self::Native => "NATIVE",
            Self::Emulated => "EMULATED",
            Self::Paravirtualized => "PARAVIRTUALIZED",
            Self::Custom => "CUSTOM",
            Self::UnknownValue(u) => u.as_str(),
        }
    }
}

impl std::convert::From<&str> for InstanceLaunchMode {
    fn from(value: &str) -> Self {
        match value {
            "NATIVE" => Self::Native,
            "EMULATED" => Self::Emulated,
            "PARAVIRTUALIZED" => Self::Paravirtualized,
            "CUSTOM" => Self::Custom,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value)),
        }
    }
}

impl std::fmt::Display for InstanceLaunchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(wkt::Enumeration::value(self))
    }
}

impl serde::ser::Serialize for InstanceLaunchMode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        wkt::internal::serialize_enum(self, serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for InstanceLaunchMode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        wkt::internal::deserialize_enum(deserializer, "InstanceLaunchMode")
    }
}

/// The number of NUMA nodes per socket of a bare metal platform.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PlatformConfigNumaNodesPerSocket {
    Nps0,
    Nps1,
    Nps2,
    Nps4,
    /// A value not known to this version of the client.
    ///
    /// The service may add new values at any time, they are preserved
    /// verbatim but fail validation.
    UnknownValue(wkt::UnknownEnumValue),
}

impl wkt::Enumeration for PlatformConfigNumaNodesPerSocket {
    fn labels() -> &'static [&'static str] {
        &[
            "NPS0",
            "NPS1",
            "NPS2",
            "NPS4",
        ]
    }

    fn value(&self) -> &str {
        match self {
            Self::Nps0 => "NPS0",
            Self::Nps1 => "NPS1",
            Self::Nps2 => "NPS2",
            Self::Nps4 => "NPS4",
            Self::UnknownValue(u) => u.as_str(),
        }
    }
}

impl std::convert::From<&str> for PlatformConfigNumaNodesPerSocket {
    fn from(value: &str) -> Self {
        match value {
            "NPS0" => Self::Nps0,
            "NPS1" => Self::Nps1,
            "NPS2" => Self::Nps2,
            "NPS4" => Self::Nps4,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value)),
        }
    }
}

impl std::fmt::Display for PlatformConfigNumaNodesPerSocket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(wkt::Enumeration::value(self))
    }
}

impl serde::ser::Serialize for PlatformConfigNumaNodesPerSocket {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        wkt::internal::serialize_enum(self, serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for PlatformConfigNumaNodesPerSocket {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        wkt::internal::deserialize_enum(deserializer, "PlatformConfigNumaNodesPerSocket")
    }
}

/// The current state of a [VolumeAttachment].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum VolumeAttachmentLifecycleState {
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

impl wkt::Enumeration for VolumeAttachmentLifecycleState {
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

impl std::convert::From<&str> for VolumeAttachmentLifecycleState {
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

impl std::fmt::Display for VolumeAttachmentLifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(wkt::Enumeration::value(self))
    }
}

impl serde::ser::Serialize for VolumeAttachmentLifecycleState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        wkt::internal::serialize_enum(self, serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for VolumeAttachmentLifecycleState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        wkt::internal::deserialize_enum(deserializer, "VolumeAttachmentLifecycleState")
    }
}

/// The platform configuration for the instance.
///
/// The `type` discriminator selects the variant. Values unknown to this
/// version of the client decode into [PlatformConfig::Unknown], which
/// encodes back to the original JSON.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum PlatformConfig {
    /// The `AMD_MILAN_BM` variant.
    AmdMilanBm(AmdMilanBmPlatformConfig),
    /// The `AMD_ROME_BM` variant.
    AmdRomeBm(AmdRomeBmPlatformConfig),
    /// The `INTEL_ICELAKE_BM` variant.
    IntelIcelakeBm(IntelIcelakeBmPlatformConfig),
    /// The `AMD_VM` variant.
    AmdVm(AmdVmPlatformConfig),
    /// The `INTEL_VM` variant.
    IntelVm(IntelVmPlatformConfig),
    /// A platform configuration not known to this version of the client.
    Unknown(gax::polymorphic::Holder<PlatformConfig>),
}

impl PlatformConfig {
    /// The value of the `type` discriminator.
    pub fn discriminator(&self) -> &str {
        match self {
            Self::AmdMilanBm(_) => "AMD_MILAN_BM",
            Self::AmdRomeBm(_) => "AMD_ROME_BM",
            Self::IntelIcelakeBm(_) => "INTEL_ICELAKE_BM",
            Self::AmdVm(_) => "AMD_VM",
            Self::IntelVm(_) => "INTEL_VM",
            Self::Unknown(h) => h.discriminator(),
        }
    }

    /// Whether Secure Boot is enabled on the instance.
    pub fn is_secure_boot_enabled(&self) -> std::option::Option<bool> {
        match self {
            Self::AmdMilanBm(v) => v.is_secure_boot_enabled,
            Self::AmdRomeBm(v) => v.is_secure_boot_enabled,
            Self::IntelIcelakeBm(v) => v.is_secure_boot_enabled,
            Self::AmdVm(v) => v.is_secure_boot_enabled,
            Self::IntelVm(v) => v.is_secure_boot_enabled,
            Self::Unknown(h) => h.shell().is_secure_boot_enabled,
        }
    }

    /// Whether the Trusted Platform Module (TPM) is enabled on the instance.
    pub fn is_trusted_platform_module_enabled(&self) -> std::option::Option<bool> {
        match self {
            Self::AmdMilanBm(v) => v.is_trusted_platform_module_enabled,
            Self::AmdRomeBm(v) => v.is_trusted_platform_module_enabled,
            Self::IntelIcelakeBm(v) => v.is_trusted_platform_module_enabled,
            Self::AmdVm(v) => v.is_trusted_platform_module_enabled,
            Self::IntelVm(v) => v.is_trusted_platform_module_enabled,
            Self::Unknown(h) => h.shell().is_trusted_platform_module_enabled,
        }
    }

    /// Whether the Measured Boot feature is enabled on the instance.
    pub fn is_measured_boot_enabled(&self) -> std::option::Option<bool> {
        match self {
            Self::AmdMilanBm(v) => v.is_measured_boot_enabled,
            Self::AmdRomeBm(v) => v.is_measured_boot_enabled,
            Self::IntelIcelakeBm(v) => v.is_measured_boot_enabled,
            Self::AmdVm(v) => v.is_measured_boot_enabled,
            Self::IntelVm(v) => v.is_measured_boot_enabled,
            Self::Unknown(h) => h.shell().is_measured_boot_enabled,
        }
    }

    /// Whether the instance is a confidential instance.
    pub fn is_memory_encryption_enabled(&self) -> std::option::Option<bool> {
        match self {
            Self::AmdMilanBm(v) => v.is_memory_encryption_enabled,
            Self::AmdRomeBm(v) => v.is_memory_encryption_enabled,
            Self::IntelIcelakeBm(v) => v.is_memory_encryption_enabled,
            Self::AmdVm(v) => v.is_memory_encryption_enabled,
            Self::IntelVm(v) => v.is_memory_encryption_enabled,
            Self::Unknown(h) => h.shell().is_memory_encryption_enabled,
        }
    }
}

/// The attributes shared by all the [PlatformConfig] variants.
#[doc(hidden)]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PlatformConfigShell {
    pub is_secure_boot_enabled: std::option::Option<bool>,
    pub is_trusted_platform_module_enabled: std::option::Option<bool>,
    pub is_measured_boot_enabled: std::option::Option<bool>,
    pub is_memory_encryption_enabled: std::option::Option<bool>,
}

impl gax::polymorphic::Discriminated for PlatformConfig {
    const NAME: &'static str = "PlatformConfig";
    const DISCRIMINATOR: &'static str = "type";
    type Shell = PlatformConfigShell;

    fn decode_variant(
        discriminator: &str,
        raw: &serde_json::value::RawValue,
    ) -> std::option::Option<serde_json::Result<Self>> {
        use gax::polymorphic::decode;
        let v = match discriminator {
            "AMD_MILAN_BM" => decode(raw).map(Self::AmdMilanBm),
            "AMD_ROME_BM" => decode(raw).map(Self::AmdRomeBm),
            "INTEL_ICELAKE_BM" => decode(raw).map(Self::IntelIcelakeBm),
            "AMD_VM" => decode(raw).map(Self::AmdVm),
            "INTEL_VM" => decode(raw).map(Self::IntelVm),
            _ => return std::option::Option::None,
        };
        std::option::Option::Some(v)
    }

    fn unknown(holder: gax::polymorphic::Holder<Self>) -> Self {
        Self::Unknown(holder)
    }
}

impl serde::ser::Serialize for PlatformConfig {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use gax::polymorphic::Tagged;
        use serde::ser::Serialize as _;
        match self {
            Self::AmdMilanBm(v) => Tagged::new("type", "AMD_MILAN_BM", v).serialize(serializer),
            Self::AmdRomeBm(v) => Tagged::new("type", "AMD_ROME_BM", v).serialize(serializer),
            Self::IntelIcelakeBm(v) => Tagged::new("type", "INTEL_ICELAKE_BM", v).serialize(serializer),
            Self::AmdVm(v) => Tagged::new("type", "AMD_VM", v).serialize(serializer),
            Self::IntelVm(v) => Tagged::new("type", "INTEL_VM", v).serialize(serializer),
            Self::Unknown(h) => h.serialize(serializer),
        }
    }
}

impl<'de> serde::de::Deserialize<'de> for PlatformConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        gax::polymorphic::deserialize(deserializer)
    }
}

impl gax::validation::Validate for PlatformConfig {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        use gax::validation::Validate as _;
        match self {
            Self::AmdMilanBm(v) => v.validate(),
            Self::AmdRomeBm(v) => v.validate(),
            Self::IntelIcelakeBm(v) => v.validate(),
            Self::AmdVm(v) => v.validate(),
            Self::IntelVm(v) => v.validate(),
            Self::Unknown(_) => std::result::Result::Ok(()),
        }
    }
}

impl std::convert::From<AmdMilanBmPlatformConfig> for PlatformConfig {
    fn from(value: AmdMilanBmPlatformConfig) -> Self {
        Self::AmdMilanBm(value)
    }
}

impl std::convert::From<AmdRomeBmPlatformConfig> for PlatformConfig {
    fn from(value: AmdRomeBmPlatformConfig) -> Self {
        Self::AmdRomeBm(value)
    }
}

impl std::convert::From<IntelIcelakeBmPlatformConfig> for PlatformConfig {
    fn from(value: IntelIcelakeBmPlatformConfig) -> Self {
        Self::IntelIcelakeBm(value)
    }
}

impl std::convert::From<AmdVmPlatformConfig> for PlatformConfig {
    fn from(value: AmdVmPlatformConfig) -> Self {
        Self::AmdVm(value)
    }
}

impl std::convert::From<IntelVmPlatformConfig> for PlatformConfig {
    fn from(value: IntelVmPlatformConfig) -> Self {
        Self::IntelVm(value)
    }
}

/// The platform configuration of a bare metal instance with the BM.Standard.E4.128 shape.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AmdMilanBmPlatformConfig {
    /// Whether Secure Boot is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_secure_boot_enabled: std::option::Option<bool>,

    /// Whether the Trusted Platform Module (TPM) is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_trusted_platform_module_enabled: std::option::Option<bool>,

    /// Whether the Measured Boot feature is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_measured_boot_enabled: std::option::Option<bool>,

    /// Whether the instance is a confidential instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_memory_encryption_enabled: std::option::Option<bool>,

    /// The number of NUMA nodes per socket (NPS).
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub numa_nodes_per_socket: std::option::Option<PlatformConfigNumaNodesPerSocket>,

    /// Whether symmetric multithreading is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_symmetric_multi_threading_enabled: std::option::Option<bool>,

    /// Whether the Access Control Service is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_access_control_service_enabled: std::option::Option<bool>,

    /// Whether virtualization instructions are available.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub are_virtual_instructions_enabled: std::option::Option<bool>,

    /// Whether the input-output memory management unit is enabled.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_input_output_memory_management_unit_enabled: std::option::Option<bool>,

    /// The percentage of cores enabled.
    /// Values between 0 and 100, the service rejects values that do not map to a whole number of cores.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub percentage_of_cores_enabled: std::option::Option<i32>,
}

impl AmdMilanBmPlatformConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [is_secure_boot_enabled][Self::is_secure_boot_enabled].
    pub fn set_is_secure_boot_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_secure_boot_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_trusted_platform_module_enabled][Self::is_trusted_platform_module_enabled].
    pub fn set_is_trusted_platform_module_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_trusted_platform_module_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_measured_boot_enabled][Self::is_measured_boot_enabled].
    pub fn set_is_measured_boot_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_measured_boot_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_memory_encryption_enabled][Self::is_memory_encryption_enabled].
    pub fn set_is_memory_encryption_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_memory_encryption_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [numa_nodes_per_socket][Self::numa_nodes_per_socket].
    pub fn set_numa_nodes_per_socket<T: std::convert::Into<PlatformConfigNumaNodesPerSocket>>(mut self, v: T) -> Self {
        self.numa_nodes_per_socket = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_symmetric_multi_threading_enabled][Self::is_symmetric_multi_threading_enabled].
    pub fn set_is_symmetric_multi_threading_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_symmetric_multi_threading_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_access_control_service_enabled][Self::is_access_control_service_enabled].
    pub fn set_is_access_control_service_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_access_control_service_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [are_virtual_instructions_enabled][Self::are_virtual_instructions_enabled].
    pub fn set_are_virtual_instructions_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.are_virtual_instructions_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_input_output_memory_management_unit_enabled][Self::is_input_output_memory_management_unit_enabled].
    pub fn set_is_input_output_memory_management_unit_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_input_output_memory_management_unit_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [percentage_of_cores_enabled][Self::percentage_of_cores_enabled].
    pub fn set_percentage_of_cores_enabled<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.percentage_of_cores_enabled = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for AmdMilanBmPlatformConfig {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        gax::validation::EnumValidator::new()
            .check("NumaNodesPerSocket", self.numa_nodes_per_socket.as_ref())
            .finish()
    }
}

/// The platform configuration of a bare metal instance with the BM.Standard.E3.128 shape.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AmdRomeBmPlatformConfig {
    /// Whether Secure Boot is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_secure_boot_enabled: std::option::Option<bool>,

    /// Whether the Trusted Platform Module (TPM) is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_trusted_platform_module_enabled: std::option::Option<bool>,

    /// Whether the Measured Boot feature is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_measured_boot_enabled: std::option::Option<bool>,

    /// Whether the instance is a confidential instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_memory_encryption_enabled: std::option::Option<bool>,

    /// The number of NUMA nodes per socket (NPS).
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub numa_nodes_per_socket: std::option::Option<PlatformConfigNumaNodesPerSocket>,

    /// Whether symmetric multithreading is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_symmetric_multi_threading_enabled: std::option::Option<bool>,

    /// Whether the Access Control Service is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_access_control_service_enabled: std::option::Option<bool>,

    /// Whether virtualization instructions are available.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub are_virtual_instructions_enabled: std::option::Option<bool>,

    /// Whether the input-output memory management unit is enabled.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_input_output_memory_management_unit_enabled: std::option::Option<bool>,

    /// The percentage of cores enabled.
    /// Values between 0 and 100, the service rejects values that do not map to a whole number of cores.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub percentage_of_cores_enabled: std::option::Option<i32>,
}

impl AmdRomeBmPlatformConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [is_secure_boot_enabled][Self::is_secure_boot_enabled].
    pub fn set_is_secure_boot_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_secure_boot_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_trusted_platform_module_enabled][Self::is_trusted_platform_module_enabled].
    pub fn set_is_trusted_platform_module_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_trusted_platform_module_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_measured_boot_enabled][Self::is_measured_boot_enabled].
    pub fn set_is_measured_boot_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_measured_boot_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_memory_encryption_enabled][Self::is_memory_encryption_enabled].
    pub fn set_is_memory_encryption_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_memory_encryption_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [numa_nodes_per_socket][Self::numa_nodes_per_socket].
    pub fn set_numa_nodes_per_socket<T: std::convert::Into<PlatformConfigNumaNodesPerSocket>>(mut self, v: T) -> Self {
        self.numa_nodes_per_socket = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_symmetric_multi_threading_enabled][Self::is_symmetric_multi_threading_enabled].
    pub fn set_is_symmetric_multi_threading_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_symmetric_multi_threading_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_access_control_service_enabled][Self::is_access_control_service_enabled].
    pub fn set_is_access_control_service_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_access_control_service_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [are_virtual_instructions_enabled][Self::are_virtual_instructions_enabled].
    pub fn set_are_virtual_instructions_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.are_virtual_instructions_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_input_output_memory_management_unit_enabled][Self::is_input_output_memory_management_unit_enabled].
    pub fn set_is_input_output_memory_management_unit_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_input_output_memory_management_unit_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [percentage_of_cores_enabled][Self::percentage_of_cores_enabled].
    pub fn set_percentage_of_cores_enabled<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.percentage_of_cores_enabled = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for AmdRomeBmPlatformConfig {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        gax::validation::EnumValidator::new()
            .check("NumaNodesPerSocket", self.numa_nodes_per_socket.as_ref())
            .finish()
    }
}

/// The platform configuration of a bare metal instance with the BM.Standard3.64 shape.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IntelIcelakeBmPlatformConfig {
    /// Whether Secure Boot is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_secure_boot_enabled: std::option::Option<bool>,

    /// Whether the Trusted Platform Module (TPM) is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_trusted_platform_module_enabled: std::option::Option<bool>,

    /// Whether the Measured Boot feature is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_measured_boot_enabled: std::option::Option<bool>,

    /// Whether the instance is a confidential instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_memory_encryption_enabled: std::option::Option<bool>,

    /// The number of NUMA nodes per socket (NPS).
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub numa_nodes_per_socket: std::option::Option<PlatformConfigNumaNodesPerSocket>,

    /// Whether symmetric multithreading is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_symmetric_multi_threading_enabled: std::option::Option<bool>,

    /// Whether the input-output memory management unit is enabled.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_input_output_memory_management_unit_enabled: std::option::Option<bool>,

    /// The percentage of cores enabled.
    /// Values between 0 and 100, the service rejects values that do not map to a whole number of cores.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub percentage_of_cores_enabled: std::option::Option<i32>,
}

impl IntelIcelakeBmPlatformConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [is_secure_boot_enabled][Self::is_secure_boot_enabled].
    pub fn set_is_secure_boot_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_secure_boot_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_trusted_platform_module_enabled][Self::is_trusted_platform_module_enabled].
    pub fn set_is_trusted_platform_module_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_trusted_platform_module_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_measured_boot_enabled][Self::is_measured_boot_enabled].
    pub fn set_is_measured_boot_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_measured_boot_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_memory_encryption_enabled][Self::is_memory_encryption_enabled].
    pub fn set_is_memory_encryption_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_memory_encryption_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [numa_nodes_per_socket][Self::numa_nodes_per_socket].
    pub fn set_numa_nodes_per_socket<T: std::convert::Into<PlatformConfigNumaNodesPerSocket>>(mut self, v: T) -> Self {
        self.numa_nodes_per_socket = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_symmetric_multi_threading_enabled][Self::is_symmetric_multi_threading_enabled].
    pub fn set_is_symmetric_multi_threading_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_symmetric_multi_threading_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_input_output_memory_management_unit_enabled][Self::is_input_output_memory_management_unit_enabled].
    pub fn set_is_input_output_memory_management_unit_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_input_output_memory_management_unit_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [percentage_of_cores_enabled][Self::percentage_of_cores_enabled].
    pub fn set_percentage_of_cores_enabled<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.percentage_of_cores_enabled = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for IntelIcelakeBmPlatformConfig {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        gax::validation::EnumValidator::new()
            .check("NumaNodesPerSocket", self.numa_nodes_per_socket.as_ref())
            .finish()
    }
}

/// The platform configuration of a virtual machine instance using an AMD platform.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AmdVmPlatformConfig {
    /// Whether Secure Boot is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_secure_boot_enabled: std::option::Option<bool>,

    /// Whether the Trusted Platform Module (TPM) is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_trusted_platform_module_enabled: std::option::Option<bool>,

    /// Whether the Measured Boot feature is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_measured_boot_enabled: std::option::Option<bool>,

    /// Whether the instance is a confidential instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_memory_encryption_enabled: std::option::Option<bool>,

    /// Whether symmetric multithreading is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_symmetric_multi_threading_enabled: std::option::Option<bool>,
}

impl AmdVmPlatformConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [is_secure_boot_enabled][Self::is_secure_boot_enabled].
    pub fn set_is_secure_boot_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_secure_boot_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_trusted_platform_module_enabled][Self::is_trusted_platform_module_enabled].
    pub fn set_is_trusted_platform_module_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_trusted_platform_module_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_measured_boot_enabled][Self::is_measured_boot_enabled].
    pub fn set_is_measured_boot_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_measured_boot_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_memory_encryption_enabled][Self::is_memory_encryption_enabled].
    pub fn set_is_memory_encryption_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_memory_encryption_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_symmetric_multi_threading_enabled][Self::is_symmetric_multi_threading_enabled].
    pub fn set_is_symmetric_multi_threading_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_symmetric_multi_threading_enabled = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for AmdVmPlatformConfig {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

/// The platform configuration of a virtual machine instance using an Intel platform.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IntelVmPlatformConfig {
    /// Whether Secure Boot is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_secure_boot_enabled: std::option::Option<bool>,

    /// Whether the Trusted Platform Module (TPM) is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_trusted_platform_module_enabled: std::option::Option<bool>,

    /// Whether the Measured Boot feature is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_measured_boot_enabled: std::option::Option<bool>,

    /// Whether the instance is a confidential instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_memory_encryption_enabled: std::option::Option<bool>,

    /// Whether symmetric multithreading is enabled on the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_symmetric_multi_threading_enabled: std::option::Option<bool>,
}

impl IntelVmPlatformConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [is_secure_boot_enabled][Self::is_secure_boot_enabled].
    pub fn set_is_secure_boot_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_secure_boot_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_trusted_platform_module_enabled][Self::is_trusted_platform_module_enabled].
    pub fn set_is_trusted_platform_module_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_trusted_platform_module_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_measured_boot_enabled][Self::is_measured_boot_enabled].
    pub fn set_is_measured_boot_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_measured_boot_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_memory_encryption_enabled][Self::is_memory_encryption_enabled].
    pub fn set_is_memory_encryption_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_memory_encryption_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_symmetric_multi_threading_enabled][Self::is_symmetric_multi_threading_enabled].
    pub fn set_is_symmetric_multi_threading_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_symmetric_multi_threading_enabled = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for IntelVmPlatformConfig {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

/// The source of the boot volume of an instance.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum InstanceSourceDetails {
    /// The `image` variant.
    Image(InstanceSourceViaImageDetails),
    /// The `bootVolume` variant.
    BootVolume(InstanceSourceViaBootVolumeDetails),
    /// A source type not known to this version of the client.
    Unknown(gax::polymorphic::Holder<InstanceSourceDetails>),
}

impl InstanceSourceDetails {
    /// The value of the `sourceType` discriminator.
    pub fn discriminator(&self) -> &str {
        match self {
            Self::Image(_) => "image",
            Self::BootVolume(_) => "bootVolume",
            Self::Unknown(h) => h.discriminator(),
        }
    }
}

/// The attributes shared by all the [InstanceSourceDetails] variants.
#[doc(hidden)]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstanceSourceDetailsShell {}

impl gax::polymorphic::Discriminated for InstanceSourceDetails {
    const NAME: &'static str = "InstanceSourceDetails";
    const DISCRIMINATOR: &'static str = "sourceType";
    type Shell = InstanceSourceDetailsShell;

    fn decode_variant(
        discriminator: &str,
        raw: &serde_json::value::RawValue,
    ) -> std::option::Option<serde_json::Result<Self>> {
        use gax::polymorphic::decode;
        let v = match discriminator {
            "image" => decode(raw).map(Self::Image),
            "bootVolume" => decode(raw).map(Self::BootVolume),
            _ => return std::option::Option::None,
        };
        std::option::Option::Some(v)
    }

    fn unknown(holder: gax::polymorphic::Holder<Self>) -> Self {
        Self::Unknown(holder)
    }
}

impl serde::ser::Serialize for InstanceSourceDetails {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use gax::polymorphic::Tagged;
        use serde::ser::Serialize as _;
        match self {
            Self::Image(v) => Tagged::new("sourceType", "image", v).serialize(serializer),
            Self::BootVolume(v) => Tagged::new("sourceType", "bootVolume", v).serialize(serializer),
            Self::Unknown(h) => h.serialize(serializer),
        }
    }
}

impl<'de> serde::de::Deserialize<'de> for InstanceSourceDetails {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        gax::polymorphic::deserialize(deserializer)
    }
}

impl gax::validation::Validate for InstanceSourceDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        use gax::validation::Validate as _;
        match self {
            Self::Image(v) => v.validate(),
            Self::BootVolume(v) => v.validate(),
            Self::Unknown(_) => std::result::Result::Ok(()),
        }
    }
}

impl std::convert::From<InstanceSourceViaImageDetails> for InstanceSourceDetails {
    fn from(value: InstanceSourceViaImageDetails) -> Self {
        Self::Image(value)
    }
}

impl std::convert::From<InstanceSourceViaBootVolumeDetails> for InstanceSourceDetails {
    fn from(value: InstanceSourceViaBootVolumeDetails) -> Self {
        Self::BootVolume(value)
    }
}

/// Boots the instance from an image.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstanceSourceViaImageDetails {
    /// The OCID of the image used to boot the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_id: std::option::Option<std::string::String>,

    /// The size of the boot volume in GBs.
    /// Minimum value is 50 GB and maximum value is 32,768 GB (32 TB).
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub boot_volume_size_in_gbs: std::option::Option<i64>,

    /// The number of volume performance units (VPUs) applied to the boot volume, per GB.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub boot_volume_vpus_per_gb: std::option::Option<i64>,

    /// The OCID of the Vault service key to assign as the master encryption key for the boot volume.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key_id: std::option::Option<std::string::String>,
}

impl InstanceSourceViaImageDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [image_id][Self::image_id].
    pub fn set_image_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [boot_volume_size_in_gbs][Self::boot_volume_size_in_gbs].
    pub fn set_boot_volume_size_in_gbs<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.boot_volume_size_in_gbs = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [boot_volume_vpus_per_gb][Self::boot_volume_vpus_per_gb].
    pub fn set_boot_volume_vpus_per_gb<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.boot_volume_vpus_per_gb = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [kms_key_id][Self::kms_key_id].
    pub fn set_kms_key_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.kms_key_id = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for InstanceSourceViaImageDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

/// Boots the instance from an existing boot volume.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstanceSourceViaBootVolumeDetails {
    /// The OCID of the boot volume used to boot the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub boot_volume_id: std::option::Option<std::string::String>,
}

impl InstanceSourceViaBootVolumeDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [boot_volume_id][Self::boot_volume_id].
    pub fn set_boot_volume_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.boot_volume_id = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for InstanceSourceViaBootVolumeDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

/// A compute host.
///
/// The image used to launch the instance determines its operating system
/// and other software. The shape specified during the launch process
/// determines the number of CPUs and memory allocated to the instance.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Instance {
    /// The availability domain the instance is running in, for example `Uocm:PHX-AD-1`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub availability_domain: std::option::Option<std::string::String>,

    /// The OCID of the compute capacity reservation this instance is launched under.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub capacity_reservation_id: std::option::Option<std::string::String>,

    /// The OCID of the compartment that contains the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    /// The OCID of the dedicated virtual machine host that the instance is placed on.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub dedicated_vm_host_id: std::option::Option<std::string::String>,

    /// Defined tags for this resource, each key is predefined and scoped to a namespace.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,

    /// A user-friendly name, it does not have to be unique and it is changeable.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// The name of the fault domain the instance is running in.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub fault_domain: std::option::Option<std::string::String>,

    /// Free-form tags for this resource, simple key-value pairs with no predefined name, type, or namespace.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    /// The OCID of the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// Deprecated. Use `source_details` instead.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_id: std::option::Option<std::string::String>,

    /// When a bare metal or virtual machine instance boots, the iPXE firmware
    /// that runs on the instance is configured to run an iPXE script to
    /// continue the boot process.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ipxe_script: std::option::Option<std::string::String>,

    /// The configuration mode for launching virtual machine (VM) instances.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub launch_mode: std::option::Option<InstanceLaunchMode>,

    /// The current state of the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<InstanceLifecycleState>,

    /// Custom metadata that you provide.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub metadata: std::collections::HashMap<std::string::String, std::string::String>,

    /// The region that contains the availability domain the instance is running in.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    /// The shape of the instance, the shape determines the number of CPUs and the amount of memory.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub shape: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_details: std::option::Option<InstanceSourceDetails>,

    /// The date and time the instance was created, in RFC 3339 format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub time_created: std::option::Option<wkt::Timestamp>,

    /// The date and time the instance is expected to be stopped or started, in RFC 3339 format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub time_maintenance_reboot_due: std::option::Option<wkt::Timestamp>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub platform_config: std::option::Option<PlatformConfig>,

    /// The OCID of the instance configuration used to source launch details for this instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_configuration_id: std::option::Option<std::string::String>,
}

impl Instance {
    pub fn new() -> Self {
        std::default::Default::default()
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

    /// Sets the value of [compartment_id][Self::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dedicated_vm_host_id][Self::dedicated_vm_host_id].
    pub fn set_dedicated_vm_host_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.dedicated_vm_host_id = std::option::Option::Some(v.into());
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

    /// Sets the value of [fault_domain][Self::fault_domain].
    pub fn set_fault_domain<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.fault_domain = std::option::Option::Some(v.into());
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

    /// Sets the value of [image_id][Self::image_id].
    pub fn set_image_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [ipxe_script][Self::ipxe_script].
    pub fn set_ipxe_script<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.ipxe_script = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [launch_mode][Self::launch_mode].
    pub fn set_launch_mode<T: std::convert::Into<InstanceLaunchMode>>(mut self, v: T) -> Self {
        self.launch_mode = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][Self::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<InstanceLifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [metadata][Self::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.metadata = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [region][Self::region].
    pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [shape][Self::shape].
    pub fn set_shape<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.shape = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_details][Self::source_details].
    pub fn set_source_details<T: std::convert::Into<InstanceSourceDetails>>(mut self, v: T) -> Self {
        self.source_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][Self::time_created].
    pub fn set_time_created<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_maintenance_reboot_due][Self::time_maintenance_reboot_due].
    pub fn set_time_maintenance_reboot_due<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.time_maintenance_reboot_due = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [platform_config][Self::platform_config].
    pub fn set_platform_config<T: std::convert::Into<PlatformConfig>>(mut self, v: T) -> Self {
        self.platform_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [instance_configuration_id][Self::instance_configuration_id].
    pub fn set_instance_configuration_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_configuration_id = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for Instance {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        gax::validation::EnumValidator::new()
            .check("LaunchMode", self.launch_mode.as_ref())
            .check("LifecycleState", self.lifecycle_state.as_ref())
            .finish()
    }
}

/// Instance launch details.
///
/// Use the `source_details` parameter to specify whether a boot volume or
/// an image should be used to launch a new instance.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LaunchInstanceDetails {
    /// The availability domain of the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub availability_domain: std::option::Option<std::string::String>,

    /// The OCID of the compartment.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    /// The OCID of the compute capacity reservation this instance is launched under.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub capacity_reservation_id: std::option::Option<std::string::String>,

    /// The OCID of the dedicated virtual machine host to place the instance on.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub dedicated_vm_host_id: std::option::Option<std::string::String>,

    /// Defined tags for this resource, each key is predefined and scoped to a namespace.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,

    /// A user-friendly name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// A fault domain is a grouping of hardware and infrastructure within an availability domain.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub fault_domain: std::option::Option<std::string::String>,

    /// Free-form tags for this resource, simple key-value pairs with no predefined name, type, or namespace.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    /// Deprecated. Use `create_vnic_details.hostname_label` instead.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hostname_label: std::option::Option<std::string::String>,

    /// Deprecated. Use `source_details` instead.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_id: std::option::Option<std::string::String>,

    /// The iPXE script to run when the instance boots.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ipxe_script: std::option::Option<std::string::String>,

    /// Custom metadata key/value pairs that you provide, such as the SSH public key required to connect to the instance.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub metadata: std::collections::HashMap<std::string::String, std::string::String>,

    /// The shape of an instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub shape: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_details: std::option::Option<InstanceSourceDetails>,

    /// Deprecated. Use `create_vnic_details.subnet_id` instead.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub subnet_id: std::option::Option<std::string::String>,

    /// Whether to enable in-transit encryption for the data volume's paravirtualized attachment.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_pv_encryption_in_transit_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub platform_config: std::option::Option<PlatformConfig>,

    /// The OCID of the instance configuration containing the launch details.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_configuration_id: std::option::Option<std::string::String>,
}

impl LaunchInstanceDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [availability_domain][Self::availability_domain].
    pub fn set_availability_domain<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.availability_domain = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][Self::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [capacity_reservation_id][Self::capacity_reservation_id].
    pub fn set_capacity_reservation_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.capacity_reservation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dedicated_vm_host_id][Self::dedicated_vm_host_id].
    pub fn set_dedicated_vm_host_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.dedicated_vm_host_id = std::option::Option::Some(v.into());
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

    /// Sets the value of [fault_domain][Self::fault_domain].
    pub fn set_fault_domain<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.fault_domain = std::option::Option::Some(v.into());
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

    /// Sets the value of [hostname_label][Self::hostname_label].
    pub fn set_hostname_label<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.hostname_label = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [image_id][Self::image_id].
    pub fn set_image_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [ipxe_script][Self::ipxe_script].
    pub fn set_ipxe_script<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.ipxe_script = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [metadata][Self::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.metadata = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [shape][Self::shape].
    pub fn set_shape<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.shape = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_details][Self::source_details].
    pub fn set_source_details<T: std::convert::Into<InstanceSourceDetails>>(mut self, v: T) -> Self {
        self.source_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [subnet_id][Self::subnet_id].
    pub fn set_subnet_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.subnet_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_pv_encryption_in_transit_enabled][Self::is_pv_encryption_in_transit_enabled].
    pub fn set_is_pv_encryption_in_transit_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_pv_encryption_in_transit_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [platform_config][Self::platform_config].
    pub fn set_platform_config<T: std::convert::Into<PlatformConfig>>(mut self, v: T) -> Self {
        self.platform_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [instance_configuration_id][Self::instance_configuration_id].
    pub fn set_instance_configuration_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_configuration_id = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for LaunchInstanceDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

/// The mutable attributes of an [Instance].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateInstanceDetails {
    /// Defined tags for this resource, each key is predefined and scoped to a namespace.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,

    /// A user-friendly name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// Free-form tags for this resource, simple key-value pairs with no predefined name, type, or namespace.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    /// The new fault domain, the instance is rebooted to move it.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub fault_domain: std::option::Option<std::string::String>,

    /// The new shape, the instance is rebooted to resize it.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub shape: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub launch_mode: std::option::Option<InstanceLaunchMode>,
}

impl UpdateInstanceDetails {
    pub fn new() -> Self {
        std::default::Default::default()
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

    /// Sets the value of [fault_domain][Self::fault_domain].
    pub fn set_fault_domain<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.fault_domain = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [shape][Self::shape].
    pub fn set_shape<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.shape = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [launch_mode][Self::launch_mode].
    pub fn set_launch_mode<T: std::convert::Into<InstanceLaunchMode>>(mut self, v: T) -> Self {
        self.launch_mode = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for UpdateInstanceDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        gax::validation::EnumValidator::new()
            .check("LaunchMode", self.launch_mode.as_ref())
            .finish()
    }
}

/// Optional parameters for an instance power action.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum InstancePowerActionDetails {
    /// The `reset` variant.
    Reset(ResetActionDetails),
    /// The `softreset` variant.
    SoftReset(SoftResetActionDetails),
    /// The `rebootmigrate` variant.
    RebootMigrate(RebootMigrateActionDetails),
    /// An action type not known to this version of the client.
    Unknown(gax::polymorphic::Holder<InstancePowerActionDetails>),
}

impl InstancePowerActionDetails {
    /// The value of the `actionType` discriminator.
    pub fn discriminator(&self) -> &str {
        match self {
            Self::Reset(_) => "reset",
            Self::SoftReset(_) => "softreset",
            Self::RebootMigrate(_) => "rebootmigrate",
            Self::Unknown(h) => h.discriminator(),
        }
    }
}

/// The attributes shared by all the [InstancePowerActionDetails] variants.
#[doc(hidden)]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstancePowerActionDetailsShell {}

impl gax::polymorphic::Discriminated for InstancePowerActionDetails {
    const NAME: &'static str = "InstancePowerActionDetails";
    const DISCRIMINATOR: &'static str = "actionType";
    type Shell = InstancePowerActionDetailsShell;

    fn decode_variant(
        discriminator: &str,
        raw: &serde_json::value::RawValue,
    ) -> std::option::Option<serde_json::Result<Self>> {
        use gax::polymorphic::decode;
        let v = match discriminator {
            "reset" => decode(raw).map(Self::Reset),
            "softreset" => decode(raw).map(Self::SoftReset),
            "rebootmigrate" => decode(raw).map(Self::RebootMigrate),
            _ => return std::option::Option::None,
        };
        std::option::Option::Some(v)
    }

    fn unknown(holder: gax::polymorphic::Holder<Self>) -> Self {
        Self::Unknown(holder)
    }
}

impl serde::ser::Serialize for InstancePowerActionDetails {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use gax::polymorphic::Tagged;
        use serde::ser::Serialize as _;
        match self {
            Self::Reset(v) => Tagged::new("actionType", "reset", v).serialize(serializer),
            Self::SoftReset(v) => Tagged::new("actionType", "softreset", v).serialize(serializer),
            Self::RebootMigrate(v) => Tagged::new("actionType", "rebootmigrate", v).serialize(serializer),
            Self::Unknown(h) => h.serialize(serializer),
        }
    }
}

impl<'de> serde::de::Deserialize<'de> for InstancePowerActionDetails {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        gax::polymorphic::deserialize(deserializer)
    }
}

impl gax::validation::Validate for InstancePowerActionDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        use gax::validation::Validate as _;
        match self {
            Self::Reset(v) => v.validate(),
            Self::SoftReset(v) => v.validate(),
            Self::RebootMigrate(v) => v.validate(),
            Self::Unknown(_) => std::result::Result::Ok(()),
        }
    }
}

impl std::convert::From<ResetActionDetails> for InstancePowerActionDetails {
    fn from(value: ResetActionDetails) -> Self {
        Self::Reset(value)
    }
}

impl std::convert::From<SoftResetActionDetails> for InstancePowerActionDetails {
    fn from(value: SoftResetActionDetails) -> Self {
        Self::SoftReset(value)
    }
}

impl std::convert::From<RebootMigrateActionDetails> for InstancePowerActionDetails {
    fn from(value: RebootMigrateActionDetails) -> Self {
        Self::RebootMigrate(value)
    }
}

/// Parameters for the `RESET` instance action.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResetActionDetails {
    /// For bare metal instances, whether to migrate to a new host during the reset.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub allow_dense_reboot_migration: std::option::Option<bool>,
}

impl ResetActionDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [allow_dense_reboot_migration][Self::allow_dense_reboot_migration].
    pub fn set_allow_dense_reboot_migration<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.allow_dense_reboot_migration = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for ResetActionDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

/// Parameters for the `SOFTRESET` instance action.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SoftResetActionDetails {
    /// For bare metal instances, whether to migrate to a new host during the reset.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub allow_dense_reboot_migration: std::option::Option<bool>,
}

impl SoftResetActionDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [allow_dense_reboot_migration][Self::allow_dense_reboot_migration].
    pub fn set_allow_dense_reboot_migration<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.allow_dense_reboot_migration = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for SoftResetActionDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

/// Parameters for the `REBOOTMIGRATE` instance action.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RebootMigrateActionDetails {
    /// For bare metal instances with local storage, whether the local storage is deleted during the migration.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub delete_local_storage: std::option::Option<bool>,

    /// If set, the migration is scheduled at this time instead of running immediately.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub time_scheduled: std::option::Option<wkt::Timestamp>,
}

impl RebootMigrateActionDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [delete_local_storage][Self::delete_local_storage].
    pub fn set_delete_local_storage<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.delete_local_storage = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_scheduled][Self::time_scheduled].
    pub fn set_time_scheduled<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.time_scheduled = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for RebootMigrateActionDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

/// The details to attach a volume to an instance.
///
/// The `type` discriminator selects the attachment type.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum AttachVolumeDetails {
    /// The `iscsi` variant.
    Iscsi(AttachIScsiVolumeDetails),
    /// The `paravirtualized` variant.
    Paravirtualized(AttachParavirtualizedVolumeDetails),
    /// The `emulated` variant.
    Emulated(AttachEmulatedVolumeDetails),
    /// The `service_determined` variant.
    ServiceDetermined(AttachServiceDeterminedVolumeDetails),
    /// An attachment type not known to this version of the client.
    Unknown(gax::polymorphic::Holder<AttachVolumeDetails>),
}

impl AttachVolumeDetails {
    /// The value of the `type` discriminator.
    pub fn discriminator(&self) -> &str {
        match self {
            Self::Iscsi(_) => "iscsi",
            Self::Paravirtualized(_) => "paravirtualized",
            Self::Emulated(_) => "emulated",
            Self::ServiceDetermined(_) => "service_determined",
            Self::Unknown(h) => h.discriminator(),
        }
    }

    /// The device name, one of the values returned by `ListInstanceDevices`.
    pub fn device(&self) -> std::option::Option<&str> {
        match self {
            Self::Iscsi(v) => v.device.as_deref(),
            Self::Paravirtualized(v) => v.device.as_deref(),
            Self::Emulated(v) => v.device.as_deref(),
            Self::ServiceDetermined(v) => v.device.as_deref(),
            Self::Unknown(h) => h.shell().device.as_deref(),
        }
    }

    /// A user-friendly name, it does not have to be unique.
    pub fn display_name(&self) -> std::option::Option<&str> {
        match self {
            Self::Iscsi(v) => v.display_name.as_deref(),
            Self::Paravirtualized(v) => v.display_name.as_deref(),
            Self::Emulated(v) => v.display_name.as_deref(),
            Self::ServiceDetermined(v) => v.display_name.as_deref(),
            Self::Unknown(h) => h.shell().display_name.as_deref(),
        }
    }

    /// The OCID of the instance.
    pub fn instance_id(&self) -> std::option::Option<&str> {
        match self {
            Self::Iscsi(v) => v.instance_id.as_deref(),
            Self::Paravirtualized(v) => v.instance_id.as_deref(),
            Self::Emulated(v) => v.instance_id.as_deref(),
            Self::ServiceDetermined(v) => v.instance_id.as_deref(),
            Self::Unknown(h) => h.shell().instance_id.as_deref(),
        }
    }

    /// Whether the attachment is read-only.
    pub fn is_read_only(&self) -> std::option::Option<bool> {
        match self {
            Self::Iscsi(v) => v.is_read_only,
            Self::Paravirtualized(v) => v.is_read_only,
            Self::Emulated(v) => v.is_read_only,
            Self::ServiceDetermined(v) => v.is_read_only,
            Self::Unknown(h) => h.shell().is_read_only,
        }
    }

    /// Whether the attachment is shareable with other instances.
    pub fn is_shareable(&self) -> std::option::Option<bool> {
        match self {
            Self::Iscsi(v) => v.is_shareable,
            Self::Paravirtualized(v) => v.is_shareable,
            Self::Emulated(v) => v.is_shareable,
            Self::ServiceDetermined(v) => v.is_shareable,
            Self::Unknown(h) => h.shell().is_shareable,
        }
    }

    /// The OCID of the volume.
    pub fn volume_id(&self) -> std::option::Option<&str> {
        match self {
            Self::Iscsi(v) => v.volume_id.as_deref(),
            Self::Paravirtualized(v) => v.volume_id.as_deref(),
            Self::Emulated(v) => v.volume_id.as_deref(),
            Self::ServiceDetermined(v) => v.volume_id.as_deref(),
            Self::Unknown(h) => h.shell().volume_id.as_deref(),
        }
    }
}

/// The attributes shared by all the [AttachVolumeDetails] variants.
#[doc(hidden)]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AttachVolumeDetailsShell {
    pub device: std::option::Option<std::string::String>,
    pub display_name: std::option::Option<std::string::String>,
    pub instance_id: std::option::Option<std::string::String>,
    pub is_read_only: std::option::Option<bool>,
    pub is_shareable: std::option::Option<bool>,
    pub volume_id: std::option::Option<std::string::String>,
}

impl gax::polymorphic::Discriminated for AttachVolumeDetails {
    const NAME: &'static str = "AttachVolumeDetails";
    const DISCRIMINATOR: &'static str = "type";
    type Shell = AttachVolumeDetailsShell;

    fn decode_variant(
        discriminator: &str,
        raw: &serde_json::value::RawValue,
    ) -> std::option::Option<serde_json::Result<Self>> {
        use gax::polymorphic::decode;
        let v = match discriminator {
            "iscsi" => decode(raw).map(Self::Iscsi),
            "paravirtualized" => decode(raw).map(Self::Paravirtualized),
            "emulated" => decode(raw).map(Self::Emulated),
            "service_determined" => decode(raw).map(Self::ServiceDetermined),
            _ => return std::option::Option::None,
        };
        std::option::Option::Some(v)
    }

    fn unknown(holder: gax::polymorphic::Holder<Self>) -> Self {
        Self::Unknown(holder)
    }
}

impl serde::ser::Serialize for AttachVolumeDetails {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use gax::polymorphic::Tagged;
        use serde::ser::Serialize as _;
        match self {
            Self::Iscsi(v) => Tagged::new("type", "iscsi", v).serialize(serializer),
            Self::Paravirtualized(v) => Tagged::new("type", "paravirtualized", v).serialize(serializer),
            Self::Emulated(v) => Tagged::new("type", "emulated", v).serialize(serializer),
            Self::ServiceDetermined(v) => Tagged::new("type", "service_determined", v).serialize(serializer),
            Self::Unknown(h) => h.serialize(serializer),
        }
    }
}

impl<'de> serde::de::Deserialize<'de> for AttachVolumeDetails {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        gax::polymorphic::deserialize(deserializer)
    }
}

impl gax::validation::Validate for AttachVolumeDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        use gax::validation::Validate as _;
        match self {
            Self::Iscsi(v) => v.validate(),
            Self::Paravirtualized(v) => v.validate(),
            Self::Emulated(v) => v.validate(),
            Self::ServiceDetermined(v) => v.validate(),
            Self::Unknown(_) => std::result::Result::Ok(()),
        }
    }
}

impl std::convert::From<AttachIScsiVolumeDetails> for AttachVolumeDetails {
    fn from(value: AttachIScsiVolumeDetails) -> Self {
        Self::Iscsi(value)
    }
}

impl std::convert::From<AttachParavirtualizedVolumeDetails> for AttachVolumeDetails {
    fn from(value: AttachParavirtualizedVolumeDetails) -> Self {
        Self::Paravirtualized(value)
    }
}

impl std::convert::From<AttachEmulatedVolumeDetails> for AttachVolumeDetails {
    fn from(value: AttachEmulatedVolumeDetails) -> Self {
        Self::Emulated(value)
    }
}

impl std::convert::From<AttachServiceDeterminedVolumeDetails> for AttachVolumeDetails {
    fn from(value: AttachServiceDeterminedVolumeDetails) -> Self {
        Self::ServiceDetermined(value)
    }
}

/// Attaches a volume using iSCSI.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AttachIScsiVolumeDetails {
    /// The device name, one of the values returned by `ListInstanceDevices`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub device: std::option::Option<std::string::String>,

    /// A user-friendly name, it does not have to be unique.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// The OCID of the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_id: std::option::Option<std::string::String>,

    /// Whether the attachment is read-only.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_read_only: std::option::Option<bool>,

    /// Whether the attachment is shareable with other instances.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_shareable: std::option::Option<bool>,

    /// The OCID of the volume.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_id: std::option::Option<std::string::String>,

    /// Whether to use CHAP authentication for the volume attachment.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub use_chap: std::option::Option<bool>,

    /// The in-transit encryption type.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub encryption_in_transit_type: std::option::Option<std::string::String>,
}

impl AttachIScsiVolumeDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [device][Self::device].
    pub fn set_device<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.device = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][Self::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [instance_id][Self::instance_id].
    pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_read_only][Self::is_read_only].
    pub fn set_is_read_only<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_read_only = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_shareable][Self::is_shareable].
    pub fn set_is_shareable<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_shareable = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [volume_id][Self::volume_id].
    pub fn set_volume_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.volume_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [use_chap][Self::use_chap].
    pub fn set_use_chap<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.use_chap = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [encryption_in_transit_type][Self::encryption_in_transit_type].
    pub fn set_encryption_in_transit_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.encryption_in_transit_type = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for AttachIScsiVolumeDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

/// Attaches a volume using paravirtualized devices.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AttachParavirtualizedVolumeDetails {
    /// The device name, one of the values returned by `ListInstanceDevices`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub device: std::option::Option<std::string::String>,

    /// A user-friendly name, it does not have to be unique.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// The OCID of the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_id: std::option::Option<std::string::String>,

    /// Whether the attachment is read-only.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_read_only: std::option::Option<bool>,

    /// Whether the attachment is shareable with other instances.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_shareable: std::option::Option<bool>,

    /// The OCID of the volume.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_id: std::option::Option<std::string::String>,

    /// Whether to enable in-transit encryption for the attachment.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_pv_encryption_in_transit_enabled: std::option::Option<bool>,
}

impl AttachParavirtualizedVolumeDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [device][Self::device].
    pub fn set_device<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.device = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][Self::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [instance_id][Self::instance_id].
    pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_read_only][Self::is_read_only].
    pub fn set_is_read_only<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_read_only = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_shareable][Self::is_shareable].
    pub fn set_is_shareable<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_shareable = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [volume_id][Self::volume_id].
    pub fn set_volume_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.volume_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_pv_encryption_in_transit_enabled][Self::is_pv_encryption_in_transit_enabled].
    pub fn set_is_pv_encryption_in_transit_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_pv_encryption_in_transit_enabled = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for AttachParavirtualizedVolumeDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

/// Attaches a volume using emulated devices.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AttachEmulatedVolumeDetails {
    /// The device name, one of the values returned by `ListInstanceDevices`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub device: std::option::Option<std::string::String>,

    /// A user-friendly name, it does not have to be unique.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// The OCID of the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_id: std::option::Option<std::string::String>,

    /// Whether the attachment is read-only.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_read_only: std::option::Option<bool>,

    /// Whether the attachment is shareable with other instances.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_shareable: std::option::Option<bool>,

    /// The OCID of the volume.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_id: std::option::Option<std::string::String>,
}

impl AttachEmulatedVolumeDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [device][Self::device].
    pub fn set_device<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.device = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][Self::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [instance_id][Self::instance_id].
    pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_read_only][Self::is_read_only].
    pub fn set_is_read_only<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_read_only = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_shareable][Self::is_shareable].
    pub fn set_is_shareable<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_shareable = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [volume_id][Self::volume_id].
    pub fn set_volume_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.volume_id = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for AttachEmulatedVolumeDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

/// Lets the service choose the attachment type.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AttachServiceDeterminedVolumeDetails {
    /// The device name, one of the values returned by `ListInstanceDevices`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub device: std::option::Option<std::string::String>,

    /// A user-friendly name, it does not have to be unique.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// The OCID of the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_id: std::option::Option<std::string::String>,

    /// Whether the attachment is read-only.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_read_only: std::option::Option<bool>,

    /// Whether the attachment is shareable with other instances.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_shareable: std::option::Option<bool>,

    /// The OCID of the volume.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_id: std::option::Option<std::string::String>,
}

impl AttachServiceDeterminedVolumeDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [device][Self::device].
    pub fn set_device<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.device = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][Self::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [instance_id][Self::instance_id].
    pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_read_only][Self::is_read_only].
    pub fn set_is_read_only<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_read_only = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_shareable][Self::is_shareable].
    pub fn set_is_shareable<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_shareable = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [volume_id][Self::volume_id].
    pub fn set_volume_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.volume_id = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for AttachServiceDeterminedVolumeDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

/// A base object for all types of attachments between a storage volume and an instance.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum VolumeAttachment {
    /// The `iscsi` variant.
    Iscsi(IScsiVolumeAttachment),
    /// The `paravirtualized` variant.
    Paravirtualized(ParavirtualizedVolumeAttachment),
    /// The `emulated` variant.
    Emulated(EmulatedVolumeAttachment),
    /// An attachment type not known to this version of the client.
    Unknown(gax::polymorphic::Holder<VolumeAttachment>),
}

impl VolumeAttachment {
    /// The value of the `attachmentType` discriminator.
    pub fn discriminator(&self) -> &str {
        match self {
            Self::Iscsi(_) => "iscsi",
            Self::Paravirtualized(_) => "paravirtualized",
            Self::Emulated(_) => "emulated",
            Self::Unknown(h) => h.discriminator(),
        }
    }

    /// The availability domain of the instance, for example `Uocm:PHX-AD-1`.
    pub fn availability_domain(&self) -> std::option::Option<&str> {
        match self {
            Self::Iscsi(v) => v.availability_domain.as_deref(),
            Self::Paravirtualized(v) => v.availability_domain.as_deref(),
            Self::Emulated(v) => v.availability_domain.as_deref(),
            Self::Unknown(h) => h.shell().availability_domain.as_deref(),
        }
    }

    /// The OCID of the compartment.
    pub fn compartment_id(&self) -> std::option::Option<&str> {
        match self {
            Self::Iscsi(v) => v.compartment_id.as_deref(),
            Self::Paravirtualized(v) => v.compartment_id.as_deref(),
            Self::Emulated(v) => v.compartment_id.as_deref(),
            Self::Unknown(h) => h.shell().compartment_id.as_deref(),
        }
    }

    /// The device name.
    pub fn device(&self) -> std::option::Option<&str> {
        match self {
            Self::Iscsi(v) => v.device.as_deref(),
            Self::Paravirtualized(v) => v.device.as_deref(),
            Self::Emulated(v) => v.device.as_deref(),
            Self::Unknown(h) => h.shell().device.as_deref(),
        }
    }

    /// A user-friendly name.
    pub fn display_name(&self) -> std::option::Option<&str> {
        match self {
            Self::Iscsi(v) => v.display_name.as_deref(),
            Self::Paravirtualized(v) => v.display_name.as_deref(),
            Self::Emulated(v) => v.display_name.as_deref(),
            Self::Unknown(h) => h.shell().display_name.as_deref(),
        }
    }

    /// The OCID of the volume attachment.
    pub fn id(&self) -> std::option::Option<&str> {
        match self {
            Self::Iscsi(v) => v.id.as_deref(),
            Self::Paravirtualized(v) => v.id.as_deref(),
            Self::Emulated(v) => v.id.as_deref(),
            Self::Unknown(h) => h.shell().id.as_deref(),
        }
    }

    /// The OCID of the instance the volume is attached to.
    pub fn instance_id(&self) -> std::option::Option<&str> {
        match self {
            Self::Iscsi(v) => v.instance_id.as_deref(),
            Self::Paravirtualized(v) => v.instance_id.as_deref(),
            Self::Emulated(v) => v.instance_id.as_deref(),
            Self::Unknown(h) => h.shell().instance_id.as_deref(),
        }
    }

    /// Whether the attachment was created in read-only mode.
    pub fn is_read_only(&self) -> std::option::Option<bool> {
        match self {
            Self::Iscsi(v) => v.is_read_only,
            Self::Paravirtualized(v) => v.is_read_only,
            Self::Emulated(v) => v.is_read_only,
            Self::Unknown(h) => h.shell().is_read_only,
        }
    }

    /// Whether the attachment is shareable.
    pub fn is_shareable(&self) -> std::option::Option<bool> {
        match self {
            Self::Iscsi(v) => v.is_shareable,
            Self::Paravirtualized(v) => v.is_shareable,
            Self::Emulated(v) => v.is_shareable,
            Self::Unknown(h) => h.shell().is_shareable,
        }
    }

    /// The current state of the volume attachment.
    pub fn lifecycle_state(&self) -> std::option::Option<&VolumeAttachmentLifecycleState> {
        match self {
            Self::Iscsi(v) => v.lifecycle_state.as_ref(),
            Self::Paravirtualized(v) => v.lifecycle_state.as_ref(),
            Self::Emulated(v) => v.lifecycle_state.as_ref(),
            Self::Unknown(h) => h.shell().lifecycle_state.as_ref(),
        }
    }

    /// The date and time the volume was attached, in RFC 3339 format.
    pub fn time_created(&self) -> std::option::Option<wkt::Timestamp> {
        match self {
            Self::Iscsi(v) => v.time_created,
            Self::Paravirtualized(v) => v.time_created,
            Self::Emulated(v) => v.time_created,
            Self::Unknown(h) => h.shell().time_created,
        }
    }

    /// The OCID of the volume.
    pub fn volume_id(&self) -> std::option::Option<&str> {
        match self {
            Self::Iscsi(v) => v.volume_id.as_deref(),
            Self::Paravirtualized(v) => v.volume_id.as_deref(),
            Self::Emulated(v) => v.volume_id.as_deref(),
            Self::Unknown(h) => h.shell().volume_id.as_deref(),
        }
    }
}

/// The attributes shared by all the [VolumeAttachment] variants.
#[doc(hidden)]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct VolumeAttachmentShell {
    pub availability_domain: std::option::Option<std::string::String>,
    pub compartment_id: std::option::Option<std::string::String>,
    pub device: std::option::Option<std::string::String>,
    pub display_name: std::option::Option<std::string::String>,
    pub id: std::option::Option<std::string::String>,
    pub instance_id: std::option::Option<std::string::String>,
    pub is_read_only: std::option::Option<bool>,
    pub is_shareable: std::option::Option<bool>,
    pub lifecycle_state: std::option::Option<VolumeAttachmentLifecycleState>,
    pub time_created: std::option::Option<wkt::Timestamp>,
    pub volume_id: std::option::Option<std::string::String>,
}

impl gax::polymorphic::Discriminated for VolumeAttachment {
    const NAME: &'static str = "VolumeAttachment";
    const DISCRIMINATOR: &'static str = "attachmentType";
    type Shell = VolumeAttachmentShell;

    fn decode_variant(
        discriminator: &str,
        raw: &serde_json::value::RawValue,
    ) -> std::option::Option<serde_json::Result<Self>> {
        use gax::polymorphic::decode;
        let v = match discriminator {
            "iscsi" => decode(raw).map(Self::Iscsi),
            "paravirtualized" => decode(raw).map(Self::Paravirtualized),
            "emulated" => decode(raw).map(Self::Emulated),
            _ => return std::option::Option::None,
        };
        std::option::Option::Some(v)
    }

    fn unknown(holder: gax::polymorphic::Holder<Self>) -> Self {
        Self::Unknown(holder)
    }
}

impl serde::ser::Serialize for VolumeAttachment {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use gax::polymorphic::Tagged;
        use serde::ser::Serialize as _;
        match self {
            Self::Iscsi(v) => Tagged::new("attachmentType", "iscsi", v).serialize(serializer),
            Self::Paravirtualized(v) => Tagged::new("attachmentType", "paravirtualized", v).serialize(serializer),
            Self::Emulated(v) => Tagged::new("attachmentType", "emulated", v).serialize(serializer),
            Self::Unknown(h) => h.serialize(serializer),
        }
    }
}

impl<'de> serde::de::Deserialize<'de> for VolumeAttachment {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        gax::polymorphic::deserialize(deserializer)
    }
}

impl gax::validation::Validate for VolumeAttachment {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        use gax::validation::Validate as _;
        match self {
            Self::Iscsi(v) => v.validate(),
            Self::Paravirtualized(v) => v.validate(),
            Self::Emulated(v) => v.validate(),
            Self::Unknown(_) => std::result::Result::Ok(()),
        }
    }
}

impl std::convert::From<IScsiVolumeAttachment> for VolumeAttachment {
    fn from(value: IScsiVolumeAttachment) -> Self {
        Self::Iscsi(value)
    }
}

impl std::convert::From<ParavirtualizedVolumeAttachment> for VolumeAttachment {
    fn from(value: ParavirtualizedVolumeAttachment) -> Self {
        Self::Paravirtualized(value)
    }
}

impl std::convert::From<EmulatedVolumeAttachment> for VolumeAttachment {
    fn from(value: EmulatedVolumeAttachment) -> Self {
        Self::Emulated(value)
    }
}

/// An iSCSI volume attachment.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IScsiVolumeAttachment {
    /// The availability domain of the instance, for example `Uocm:PHX-AD-1`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub availability_domain: std::option::Option<std::string::String>,

    /// The OCID of the compartment.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    /// The device name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub device: std::option::Option<std::string::String>,

    /// A user-friendly name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// The OCID of the volume attachment.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// The OCID of the instance the volume is attached to.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_id: std::option::Option<std::string::String>,

    /// Whether the attachment was created in read-only mode.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_read_only: std::option::Option<bool>,

    /// Whether the attachment is shareable.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_shareable: std::option::Option<bool>,

    /// The current state of the volume attachment.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<VolumeAttachmentLifecycleState>,

    /// The date and time the volume was attached, in RFC 3339 format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub time_created: std::option::Option<wkt::Timestamp>,

    /// The OCID of the volume.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_id: std::option::Option<std::string::String>,

    /// The CHAP user name, if CHAP authentication is enabled.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub chap_username: std::option::Option<std::string::String>,

    /// The volume's iSCSI IP address.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ipv4: std::option::Option<std::string::String>,

    /// The target volume's iSCSI Qualified Name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub iqn: std::option::Option<std::string::String>,

    /// The volume's iSCSI port, usually 3260.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub port: std::option::Option<i32>,
}

impl IScsiVolumeAttachment {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [availability_domain][Self::availability_domain].
    pub fn set_availability_domain<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.availability_domain = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][Self::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [device][Self::device].
    pub fn set_device<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.device = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][Self::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [instance_id][Self::instance_id].
    pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_read_only][Self::is_read_only].
    pub fn set_is_read_only<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_read_only = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_shareable][Self::is_shareable].
    pub fn set_is_shareable<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_shareable = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][Self::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<VolumeAttachmentLifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][Self::time_created].
    pub fn set_time_created<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [volume_id][Self::volume_id].
    pub fn set_volume_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.volume_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [chap_username][Self::chap_username].
    pub fn set_chap_username<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.chap_username = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [ipv4][Self::ipv4].
    pub fn set_ipv4<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.ipv4 = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [iqn][Self::iqn].
    pub fn set_iqn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.iqn = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [port][Self::port].
    pub fn set_port<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.port = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for IScsiVolumeAttachment {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        gax::validation::EnumValidator::new()
            .check("LifecycleState", self.lifecycle_state.as_ref())
            .finish()
    }
}

/// A paravirtualized volume attachment.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ParavirtualizedVolumeAttachment {
    /// The availability domain of the instance, for example `Uocm:PHX-AD-1`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub availability_domain: std::option::Option<std::string::String>,

    /// The OCID of the compartment.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    /// The device name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub device: std::option::Option<std::string::String>,

    /// A user-friendly name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// The OCID of the volume attachment.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// The OCID of the instance the volume is attached to.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_id: std::option::Option<std::string::String>,

    /// Whether the attachment was created in read-only mode.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_read_only: std::option::Option<bool>,

    /// Whether the attachment is shareable.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_shareable: std::option::Option<bool>,

    /// The current state of the volume attachment.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<VolumeAttachmentLifecycleState>,

    /// The date and time the volume was attached, in RFC 3339 format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub time_created: std::option::Option<wkt::Timestamp>,

    /// The OCID of the volume.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_id: std::option::Option<std::string::String>,

    /// Whether in-transit encryption is enabled for the attachment.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_pv_encryption_in_transit_enabled: std::option::Option<bool>,
}

impl ParavirtualizedVolumeAttachment {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [availability_domain][Self::availability_domain].
    pub fn set_availability_domain<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.availability_domain = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][Self::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [device][Self::device].
    pub fn set_device<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.device = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][Self::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [instance_id][Self::instance_id].
    pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_read_only][Self::is_read_only].
    pub fn set_is_read_only<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_read_only = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_shareable][Self::is_shareable].
    pub fn set_is_shareable<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_shareable = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][Self::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<VolumeAttachmentLifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][Self::time_created].
    pub fn set_time_created<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [volume_id][Self::volume_id].
    pub fn set_volume_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.volume_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_pv_encryption_in_transit_enabled][Self::is_pv_encryption_in_transit_enabled].
    pub fn set_is_pv_encryption_in_transit_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_pv_encryption_in_transit_enabled = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for ParavirtualizedVolumeAttachment {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        gax::validation::EnumValidator::new()
            .check("LifecycleState", self.lifecycle_state.as_ref())
            .finish()
    }
}

/// An emulated volume attachment.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EmulatedVolumeAttachment {
    /// The availability domain of the instance, for example `Uocm:PHX-AD-1`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub availability_domain: std::option::Option<std::string::String>,

    /// The OCID of the compartment.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    /// The device name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub device: std::option::Option<std::string::String>,

    /// A user-friendly name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// The OCID of the volume attachment.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// The OCID of the instance the volume is attached to.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_id: std::option::Option<std::string::String>,

    /// Whether the attachment was created in read-only mode.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_read_only: std::option::Option<bool>,

    /// Whether the attachment is shareable.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_shareable: std::option::Option<bool>,

    /// The current state of the volume attachment.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<VolumeAttachmentLifecycleState>,

    /// The date and time the volume was attached, in RFC 3339 format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub time_created: std::option::Option<wkt::Timestamp>,

    /// The OCID of the volume.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_id: std::option::Option<std::string::String>,
}

impl EmulatedVolumeAttachment {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [availability_domain][Self::availability_domain].
    pub fn set_availability_domain<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.availability_domain = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][Self::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [device][Self::device].
    pub fn set_device<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.device = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][Self::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [instance_id][Self::instance_id].
    pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_read_only][Self::is_read_only].
    pub fn set_is_read_only<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_read_only = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_shareable][Self::is_shareable].
    pub fn set_is_shareable<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_shareable = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][Self::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<VolumeAttachmentLifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][Self::time_created].
    pub fn set_time_created<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [volume_id][Self::volume_id].
    pub fn set_volume_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.volume_id = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for EmulatedVolumeAttachment {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        gax::validation::EnumValidator::new()
            .check("LifecycleState", self.lifecycle_state.as_ref())
            .finish()
    }
}

/// An instance configuration is a template that defines the settings to use when creating compute instances.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstanceConfiguration {
    /// The OCID of the compartment containing the instance configuration.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    /// Defined tags for this resource, each key is predefined and scoped to a namespace.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,

    /// A user-friendly name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// Free-form tags for this resource, simple key-value pairs with no predefined name, type, or namespace.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    /// The OCID of the instance configuration.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_details: std::option::Option<InstanceConfigurationInstanceDetails>,

    /// Parameters that were not specified when the instance configuration was created,
    /// but that are required to launch an instance from it.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub deferred_fields: std::vec::Vec<std::string::String>,

    /// The date and time the instance configuration was created, in RFC 3339 format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub time_created: std::option::Option<wkt::Timestamp>,
}

impl InstanceConfiguration {
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

    /// Sets the value of [instance_details][Self::instance_details].
    pub fn set_instance_details<T: std::convert::Into<InstanceConfigurationInstanceDetails>>(mut self, v: T) -> Self {
        self.instance_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [deferred_fields][Self::deferred_fields].
    pub fn set_deferred_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.deferred_fields = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [time_created][Self::time_created].
    pub fn set_time_created<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for InstanceConfiguration {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

/// The instances launched from an instance configuration.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum InstanceConfigurationInstanceDetails {
    /// The `compute` variant.
    Compute(ComputeInstanceDetails),
    /// An instance type not known to this version of the client.
    Unknown(gax::polymorphic::Holder<InstanceConfigurationInstanceDetails>),
}

impl InstanceConfigurationInstanceDetails {
    /// The value of the `instanceType` discriminator.
    pub fn discriminator(&self) -> &str {
        match self {
            Self::Compute(_) => "compute",
            Self::Unknown(h) => h.discriminator(),
        }
    }
}

/// The attributes shared by all the [InstanceConfigurationInstanceDetails] variants.
#[doc(hidden)]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstanceConfigurationInstanceDetailsShell {}

impl gax::polymorphic::Discriminated for InstanceConfigurationInstanceDetails {
    const NAME: &'static str = "InstanceConfigurationInstanceDetails";
    const DISCRIMINATOR: &'static str = "instanceType";
    type Shell = InstanceConfigurationInstanceDetailsShell;

    fn decode_variant(
        discriminator: &str,
        raw: &serde_json::value::RawValue,
    ) -> std::option::Option<serde_json::Result<Self>> {
        use gax::polymorphic::decode;
        let v = match discriminator {
            "compute" => decode(raw).map(Self::Compute),
            _ => return std::option::Option::None,
        };
        std::option::Option::Some(v)
    }

    fn unknown(holder: gax::polymorphic::Holder<Self>) -> Self {
        Self::Unknown(holder)
    }
}

impl serde::ser::Serialize for InstanceConfigurationInstanceDetails {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use gax::polymorphic::Tagged;
        use serde::ser::Serialize as _;
        match self {
            Self::Compute(v) => Tagged::new("instanceType", "compute", v).serialize(serializer),
            Self::Unknown(h) => h.serialize(serializer),
        }
    }
}

impl<'de> serde::de::Deserialize<'de> for InstanceConfigurationInstanceDetails {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        gax::polymorphic::deserialize(deserializer)
    }
}

impl gax::validation::Validate for InstanceConfigurationInstanceDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        use gax::validation::Validate as _;
        match self {
            Self::Compute(v) => v.validate(),
            Self::Unknown(_) => std::result::Result::Ok(()),
        }
    }
}

impl std::convert::From<ComputeInstanceDetails> for InstanceConfigurationInstanceDetails {
    fn from(value: ComputeInstanceDetails) -> Self {
        Self::Compute(value)
    }
}

/// Compute instances launched from an instance configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ComputeInstanceDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub launch_details: std::option::Option<InstanceConfigurationLaunchInstanceDetails>,
}

impl ComputeInstanceDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [launch_details][Self::launch_details].
    pub fn set_launch_details<T: std::convert::Into<InstanceConfigurationLaunchInstanceDetails>>(mut self, v: T) -> Self {
        self.launch_details = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for ComputeInstanceDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        std::result::Result::Ok(())
    }
}

/// The launch details of the instances created from an instance configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstanceConfigurationLaunchInstanceDetails {
    /// The availability domain of the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub availability_domain: std::option::Option<std::string::String>,

    /// The OCID of the compartment.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    /// The OCID of the compute capacity reservation this instance is launched under.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub capacity_reservation_id: std::option::Option<std::string::String>,

    /// The OCID of the dedicated virtual machine host to place the instance on.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub dedicated_vm_host_id: std::option::Option<std::string::String>,

    /// Defined tags for this resource, each key is predefined and scoped to a namespace.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,

    /// A user-friendly name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// A fault domain is a grouping of hardware and infrastructure within an availability domain.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub fault_domain: std::option::Option<std::string::String>,

    /// Free-form tags for this resource, simple key-value pairs with no predefined name, type, or namespace.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    /// Deprecated. Use `create_vnic_details.hostname_label` instead.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hostname_label: std::option::Option<std::string::String>,

    /// Deprecated. Use `source_details` instead.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_id: std::option::Option<std::string::String>,

    /// The iPXE script to run when the instance boots.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ipxe_script: std::option::Option<std::string::String>,

    /// Custom metadata key/value pairs that you provide, such as the SSH public key required to connect to the instance.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub metadata: std::collections::HashMap<std::string::String, std::string::String>,

    /// The shape of an instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub shape: std::option::Option<std::string::String>,

    /// The configuration mode for launching virtual machine (VM) instances.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub launch_mode: std::option::Option<InstanceLaunchMode>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_details: std::option::Option<InstanceSourceDetails>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub platform_config: std::option::Option<PlatformConfig>,
}

impl InstanceConfigurationLaunchInstanceDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [availability_domain][Self::availability_domain].
    pub fn set_availability_domain<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.availability_domain = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][Self::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [capacity_reservation_id][Self::capacity_reservation_id].
    pub fn set_capacity_reservation_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.capacity_reservation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dedicated_vm_host_id][Self::dedicated_vm_host_id].
    pub fn set_dedicated_vm_host_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.dedicated_vm_host_id = std::option::Option::Some(v.into());
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

    /// Sets the value of [fault_domain][Self::fault_domain].
    pub fn set_fault_domain<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.fault_domain = std::option::Option::Some(v.into());
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

    /// Sets the value of [hostname_label][Self::hostname_label].
    pub fn set_hostname_label<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.hostname_label = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [image_id][Self::image_id].
    pub fn set_image_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [ipxe_script][Self::ipxe_script].
    pub fn set_ipxe_script<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.ipxe_script = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [metadata][Self::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.metadata = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [shape][Self::shape].
    pub fn set_shape<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.shape = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [launch_mode][Self::launch_mode].
    pub fn set_launch_mode<T: std::convert::Into<InstanceLaunchMode>>(mut self, v: T) -> Self {
        self.launch_mode = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_details][Self::source_details].
    pub fn set_source_details<T: std::convert::Into<InstanceSourceDetails>>(mut self, v: T) -> Self {
        self.source_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [platform_config][Self::platform_config].
    pub fn set_platform_config<T: std::convert::Into<PlatformConfig>>(mut self, v: T) -> Self {
        self.platform_config = std::option::Option::Some(v.into());
        self
    }
}

impl gax::validation::Validate for InstanceConfigurationLaunchInstanceDetails {
    fn validate(&self) -> std::result::Result<(), gax::error::ValidationError> {
        gax::validation::EnumValidator::new()
            .check("LaunchMode", self.launch_mode.as_ref())
            .finish()
    }
}
