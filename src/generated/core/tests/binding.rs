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

use gax::binding::{RequestBody, to_http_request};
use oci_sdk_core::model::{
    AttachVolumeDetails, AttachParavirtualizedVolumeDetails, InstanceLifecycleState,
    InstancePowerActionDetails, SortBy, SortOrder, SoftResetActionDetails,
};
use oci_sdk_core::requests::compute::{
    AttachVolumeRequest, GetInstanceRequest, InstanceActionAction, InstanceActionRequest,
    LaunchInstanceRequest, ListInstancesRequest, TerminateInstanceRequest,
};
use oci_sdk_core::requests::virtual_network::ListFlowLogConfigsRequest;
use pretty_assertions::assert_eq;
use serde_json::json;

type Result = anyhow::Result<()>;

fn json_body(body: &RequestBody) -> anyhow::Result<serde_json::Value> {
    match body {
        RequestBody::Json(bytes) => Ok(serde_json::from_slice(bytes)?),
        b => anyhow::bail!("expected a JSON body, got {b:?}"),
    }
}

#[test]
fn instance_action() -> Result {
    let request = InstanceActionRequest::new()
        .set_instance_id("ocid1.inst.x")
        .set_action(InstanceActionAction::Stop)
        .set_opc_retry_token("tkn");
    let got = to_http_request(&request)?;
    assert_eq!(got.method(), &http::Method::POST);
    assert_eq!(got.path(), "/instances/ocid1.inst.x");
    assert!(got.path().contains("ocid1.inst.x"), "{got:?}");
    assert_eq!(got.query(), &[("action".to_string(), "STOP".to_string())]);
    assert_eq!(got.header("opc-retry-token"), Some("tkn"));
    assert_eq!(got.header("if-match"), None);
    assert!(matches!(got.body(), RequestBody::Empty), "{got:?}");
    Ok(())
}

#[test]
fn instance_action_with_details() -> Result {
    let request = InstanceActionRequest::new()
        .set_instance_id("ocid1.inst.x")
        .set_action(InstanceActionAction::Softreset)
        .set_if_match("etag-1")
        .set_instance_power_action_details(InstancePowerActionDetails::from(
            SoftResetActionDetails::new().set_allow_dense_reboot_migration(true),
        ));
    let got = to_http_request(&request)?;
    assert_eq!(got.query_value("action"), Some("SOFTRESET"));
    assert_eq!(got.header("if-match"), Some("etag-1"));
    assert_eq!(
        json_body(got.body())?,
        json!({"actionType": "softreset", "allowDenseRebootMigration": true})
    );
    Ok(())
}

#[test]
fn list_keeps_absent_fields_absent() -> Result {
    let request = ListFlowLogConfigsRequest::new().set_compartment_id("ocid1.compartment.oc1..aaaa");
    let got = to_http_request(&request)?;
    assert_eq!(got.path(), "/flowLogConfigs");
    assert_eq!(
        got.query(),
        &[("compartmentId".to_string(), "ocid1.compartment.oc1..aaaa".to_string())]
    );
    for name in ["limit", "page", "sortBy", "sortOrder", "lifecycleState"] {
        assert_eq!(got.query_value(name), None, "{name}");
    }
    let names: Vec<&str> = got.headers().keys().map(|k| k.as_str()).collect();
    assert_eq!(names, vec!["accept"]);
    Ok(())
}

#[test]
fn list_parameters_in_declaration_order() -> Result {
    let request = ListInstancesRequest::new()
        .set_compartment_id("c")
        .set_display_name("web server")
        .set_limit(25)
        .set_page("p2")
        .set_sort_by(SortBy::Displayname)
        .set_sort_order(SortOrder::Asc)
        .set_lifecycle_state(InstanceLifecycleState::Running)
        .set_opc_request_id("req-1");
    let got = to_http_request(&request)?;
    let query: Vec<(&str, &str)> = got
        .query()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(
        query,
        vec![
            ("compartmentId", "c"),
            ("displayName", "web server"),
            ("limit", "25"),
            ("page", "p2"),
            ("sortBy", "DISPLAYNAME"),
            ("sortOrder", "ASC"),
            ("lifecycleState", "RUNNING"),
        ]
    );
    assert_eq!(got.header("opc-request-id"), Some("req-1"));
    assert!(
        got.uri("https://iaas.example.com/").starts_with("https://iaas.example.com/instances?compartmentId=c&displayName=web%20server&limit=25"),
        "{}",
        got.uri("https://iaas.example.com")
    );
    Ok(())
}

#[test]
fn missing_path_parameter() {
    let request = GetInstanceRequest::new();
    let err = to_http_request(&request).unwrap_err();
    assert!(err.is_binding(), "{err:?}");
    assert_eq!(
        err.to_string(),
        "cannot bind the request to an HTTP request: GetInstance: path field `InstanceId` needs to be set"
    );
}

#[test]
fn missing_query_parameter() {
    let request = InstanceActionRequest::new().set_instance_id("ocid1.inst.x");
    let err = to_http_request(&request).unwrap_err();
    assert!(err.is_binding(), "{err:?}");
    assert!(err.to_string().contains("Action"), "{err}");

    let request = ListFlowLogConfigsRequest::new().set_limit(10);
    let err = to_http_request(&request).unwrap_err();
    assert!(err.is_binding(), "{err:?}");
}

#[test]
fn missing_body() {
    let err = to_http_request(&LaunchInstanceRequest::new()).unwrap_err();
    assert!(err.is_binding(), "{err:?}");
    assert!(err.to_string().contains("LaunchInstanceDetails"), "{err}");
}

#[test]
fn path_parameters_are_escaped() -> Result {
    let request = TerminateInstanceRequest::new()
        .set_instance_id("a/b c")
        .set_preserve_boot_volume(false);
    let got = to_http_request(&request)?;
    assert_eq!(got.method(), &http::Method::DELETE);
    assert_eq!(got.path(), "/instances/a%2Fb%20c");
    assert_eq!(got.query_value("preserveBootVolume"), Some("false"));
    Ok(())
}

#[test]
fn union_body() -> Result {
    let request = AttachVolumeRequest::new().set_attach_volume_details(AttachVolumeDetails::from(
        AttachParavirtualizedVolumeDetails::new()
            .set_instance_id("i")
            .set_volume_id("v")
            .set_is_pv_encryption_in_transit_enabled(true),
    ));
    let got = to_http_request(&request)?;
    assert_eq!(got.path(), "/volumeAttachments");
    assert_eq!(
        json_body(got.body())?,
        json!({
            "type": "paravirtualized",
            "instanceId": "i",
            "volumeId": "v",
            "isPvEncryptionInTransitEnabled": true,
        })
    );
    // The client sets the token before binding, binding alone does not.
    assert_eq!(got.header("opc-retry-token"), None);
    Ok(())
}
