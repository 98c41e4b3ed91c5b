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

use gax::validation::Validate;
use oci_sdk_core::model::{
    ClientVpn, ClientVpnAuthenticationMode, ClientVpnLifecycleState, Instance,
    InstanceLifecycleState, PlatformConfig,
};
use oci_sdk_core::requests::compute::{InstanceActionAction, InstanceActionRequest};
use oci_sdk_core::requests::virtual_network::ListDrgAttachmentsRequest;
use serde_json::json;
use wkt::Enumeration;

type Result = anyhow::Result<()>;

#[test]
fn composite_message() -> Result {
    let vpn = serde_json::from_str::<ClientVpn>(
        r#"{"id":"ocid1.clientvpn.oc1..aaaa","lifecycleState":"BOGUS","authenticationMode":"ALSO_BOGUS"}"#,
    )?;
    let err = vpn.validate().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("unsupported enum value for LifecycleState: BOGUS."), "{message}");
    assert!(message.contains("unsupported enum value for AuthenticationMode: ALSO_BOGUS."), "{message}");
    assert_eq!(
        message,
        [
            "unsupported enum value for LifecycleState: BOGUS. Supported values are: CREATING,ACTIVE,INACTIVE,FAILED,DELETED,DELETING,UPDATING.",
            "unsupported enum value for AuthenticationMode: ALSO_BOGUS. Supported values are: LDAP,RADIUS,LOCAL.",
        ]
        .join("\n")
    );
    Ok(())
}

#[test]
fn unknown_values_survive_decoding() -> Result {
    let vpn = serde_json::from_str::<ClientVpn>(r#"{"lifecycleState":"HIBERNATING"}"#)?;
    let state = vpn.lifecycle_state.as_ref().expect("state is present");
    assert!(!state.is_known(), "{state:?}");
    assert_eq!(state.value(), "HIBERNATING");
    assert_eq!(serde_json::to_value(&vpn)?, json!({"lifecycleState": "HIBERNATING"}));
    Ok(())
}

#[test]
fn valid_records() -> Result {
    let vpn = ClientVpn::new()
        .set_lifecycle_state(ClientVpnLifecycleState::Active)
        .set_authentication_mode(ClientVpnAuthenticationMode::Radius);
    vpn.validate()?;

    // Absent and empty values are valid.
    ClientVpn::new().validate()?;
    let empty = serde_json::from_str::<ClientVpn>(r#"{"lifecycleState":""}"#)?;
    empty.validate()?;

    // The lookup ignores case.
    let lower = serde_json::from_str::<ClientVpn>(r#"{"authenticationMode":"local"}"#)?;
    lower.validate()?;
    Ok(())
}

#[test]
fn nested_records_are_not_visited() -> Result {
    let instance = serde_json::from_str::<Instance>(
        r#"{"lifecycleState":"RUNNING","platformConfig":{"type":"AMD_ROME_BM","numaNodesPerSocket":"NPS8"}}"#,
    )?;
    assert_eq!(instance.lifecycle_state, Some(InstanceLifecycleState::Running));
    instance.validate()?;

    let Some(platform @ PlatformConfig::AmdRomeBm(_)) = &instance.platform_config else {
        panic!("unexpected platform config {instance:?}");
    };
    let err = platform.validate().unwrap_err();
    assert!(err.to_string().starts_with("unsupported enum value for NumaNodesPerSocket: NPS8."), "{err}");
    Ok(())
}

#[test]
fn unknown_union_is_valid() -> Result {
    let platform = serde_json::from_str::<PlatformConfig>(r#"{"type":"FUTURE_BM","numaNodesPerSocket":"NPS8"}"#)?;
    platform.validate()?;
    Ok(())
}

#[test]
fn request_enum_parameters() {
    let request = InstanceActionRequest::new()
        .set_instance_id("ocid1.instance.oc1..aaaa")
        .set_action(InstanceActionAction::from("HIBERNATE"));
    let err = gax::binding::to_http_request(&request).unwrap_err();
    assert!(err.is_validation(), "{err:?}");
    let details = err.as_validation().expect("validation details");
    assert_eq!(
        details.messages(),
        &["unsupported enum value for Action: HIBERNATE. Supported values are: STOP,START,SOFTRESET,RESET,SOFTSTOP,SENDDIAGNOSTICINTERRUPT,DIAGNOSTICREBOOT,REBOOTMIGRATE.".to_string()]
    );

    let request = ListDrgAttachmentsRequest::new()
        .set_compartment_id("ocid1.compartment.oc1..aaaa")
        .set_attachment_type("TUNNEL");
    let err = gax::binding::to_http_request(&request).unwrap_err();
    assert!(err.is_validation(), "{err:?}");
}
