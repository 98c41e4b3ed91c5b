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

use oci_sdk_core::model::{
    AmdRomeBmPlatformConfig, AttachVolumeDetails, ComputeInstanceDetails,
    DrgAttachmentNetworkCreateDetails, InstanceConfiguration,
    InstanceConfigurationInstanceDetails, InstanceConfigurationLaunchInstanceDetails, InstanceLaunchMode,
    PlatformConfig, PlatformConfigNumaNodesPerSocket, VcnDrgAttachmentNetworkCreateDetails,
    VolumeAttachment,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use test_case::test_case;

type Result = anyhow::Result<()>;

#[test]
fn encode_injects_discriminator() -> Result {
    let config = PlatformConfig::from(
        AmdRomeBmPlatformConfig::new()
            .set_is_secure_boot_enabled(true)
            .set_numa_nodes_per_socket(PlatformConfigNumaNodesPerSocket::Nps2),
    );
    let got = serde_json::to_value(&config)?;
    assert_eq!(
        got,
        json!({
            "type": "AMD_ROME_BM",
            "isSecureBootEnabled": true,
            "numaNodesPerSocket": "NPS2",
        })
    );

    // The variant itself has no discriminator field.
    let variant = serde_json::to_value(AmdRomeBmPlatformConfig::new().set_is_secure_boot_enabled(true))?;
    assert_eq!(variant, json!({"isSecureBootEnabled": true}));
    Ok(())
}

#[test]
fn decode_known_discriminator() -> Result {
    let input = r#"{"type":"iscsi","displayName":"d1","isReadOnly":true}"#;
    let got = serde_json::from_str::<AttachVolumeDetails>(input)?;
    assert_eq!(got.discriminator(), "iscsi");
    let AttachVolumeDetails::Iscsi(details) = &got else {
        panic!("expected the iscsi variant, got {got:?}");
    };
    assert_eq!(details.display_name.as_deref(), Some("d1"));
    assert_eq!(details.is_read_only, Some(true));
    assert_eq!(got.display_name(), Some("d1"));
    assert_eq!(got.is_read_only(), Some(true));
    Ok(())
}

#[test]
fn decode_unknown_discriminator() -> Result {
    let input = r#"{"type":"FUTURE_KIND","id":"abc"}"#;
    let got = serde_json::from_str::<DrgAttachmentNetworkCreateDetails>(input)?;
    let DrgAttachmentNetworkCreateDetails::Unknown(holder) = &got else {
        panic!("expected an unknown variant, got {got:?}");
    };
    assert_eq!(holder.discriminator(), "FUTURE_KIND");
    assert_eq!(got.discriminator(), "FUTURE_KIND");
    assert_eq!(got.id(), Some("abc"));

    let encoded = serde_json::to_value(&got)?;
    assert_eq!(encoded, json!({"type": "FUTURE_KIND", "id": "abc"}));
    Ok(())
}

#[test]
fn unknown_preserves_every_field() -> Result {
    let input = json!({
        "type": "SOME_NEW_PLATFORM",
        "isSecureBootEnabled": true,
        "brandNewField": {"nested": [1, 2, 3]},
    });
    let got = serde_json::from_str::<PlatformConfig>(&input.to_string())?;
    assert!(matches!(got, PlatformConfig::Unknown(_)), "{got:?}");
    assert_eq!(got.is_secure_boot_enabled(), Some(true));
    assert_eq!(got.is_measured_boot_enabled(), None);
    assert_eq!(serde_json::to_value(&got)?, input);
    Ok(())
}

#[test_case(json!({"id": "abc"}); "missing")]
#[test_case(json!({"type": "", "id": "abc"}); "empty")]
#[test_case(json!({"type": null, "id": "abc"}); "null")]
fn absent_discriminator_is_unknown(input: Value) -> Result {
    let got = serde_json::from_str::<DrgAttachmentNetworkCreateDetails>(&input.to_string())?;
    assert!(matches!(got, DrgAttachmentNetworkCreateDetails::Unknown(_)), "{got:?}");
    assert_eq!(got.id(), Some("abc"));
    Ok(())
}

#[test]
fn discriminator_is_case_sensitive() -> Result {
    let got = serde_json::from_str::<DrgAttachmentNetworkCreateDetails>(&json!({"type": "vcn"}).to_string())?;
    assert!(matches!(got, DrgAttachmentNetworkCreateDetails::Unknown(_)), "{got:?}");
    let got = serde_json::from_str::<DrgAttachmentNetworkCreateDetails>(&json!({"type": "VCN"}).to_string())?;
    assert!(matches!(got, DrgAttachmentNetworkCreateDetails::Vcn(_)), "{got:?}");
    Ok(())
}

#[test]
fn known_variant_round_trip() -> Result {
    let input = DrgAttachmentNetworkCreateDetails::from(
        VcnDrgAttachmentNetworkCreateDetails::new()
            .set_id("ocid1.vcn.oc1..aaaa")
            .set_route_table_id("ocid1.routetable.oc1..bbbb"),
    );
    let json = serde_json::to_value(&input)?;
    assert_eq!(
        json,
        json!({"type": "VCN", "id": "ocid1.vcn.oc1..aaaa", "routeTableId": "ocid1.routetable.oc1..bbbb"})
    );
    let got = serde_json::from_str::<DrgAttachmentNetworkCreateDetails>(&json.to_string())?;
    assert_eq!(got, input);
    Ok(())
}

#[test]
fn nested_polymorphic_fields() -> Result {
    let input = json!({
        "id": "ocid1.instanceconfiguration.oc1..aaaa",
        "instanceDetails": {
            "instanceType": "compute",
            "launchDetails": {
                "shape": "BM.Standard.E4.128",
                "launchMode": "NATIVE",
                "platformConfig": {
                    "type": "AMD_MILAN_BM",
                    "isSymmetricMultiThreadingEnabled": false,
                    "percentageOfCoresEnabled": 50,
                },
            },
        },
    });
    let got = serde_json::from_str::<InstanceConfiguration>(&input.to_string())?;
    let Some(InstanceConfigurationInstanceDetails::Compute(compute)) = &got.instance_details else {
        panic!("expected compute instance details, got {got:?}");
    };
    let launch = compute.launch_details.as_ref().expect("launch details are present");
    assert_eq!(launch.shape.as_deref(), Some("BM.Standard.E4.128"));
    assert_eq!(launch.launch_mode, Some(InstanceLaunchMode::Native));
    let Some(PlatformConfig::AmdMilanBm(platform)) = &launch.platform_config else {
        panic!("expected an AMD Milan platform config, got {launch:?}");
    };
    assert_eq!(platform.is_symmetric_multi_threading_enabled, Some(false));
    assert_eq!(platform.percentage_of_cores_enabled, Some(50));

    assert_eq!(serde_json::to_value(&got)?, input);
    Ok(())
}

#[test]
fn nested_unknown_inside_known() -> Result {
    let input = json!({
        "instanceType": "compute",
        "launchDetails": {
            "platformConfig": {"type": "QUANTUM_BM", "qubits": 128},
        },
    });
    let got = serde_json::from_str::<InstanceConfigurationInstanceDetails>(&input.to_string())?;
    let InstanceConfigurationInstanceDetails::Compute(ComputeInstanceDetails {
        launch_details: Some(InstanceConfigurationLaunchInstanceDetails { platform_config: Some(platform), .. }),
        ..
    }) = &got
    else {
        panic!("unexpected decoding {got:?}");
    };
    assert_eq!(platform.discriminator(), "QUANTUM_BM");
    assert_eq!(serde_json::to_value(&got)?, input);
    Ok(())
}

#[test]
fn unknown_resolves_after_the_fact() -> Result {
    let holder = gax::polymorphic::Holder::<VolumeAttachment>::from_json(
        r#"{"attachmentType":"paravirtualized","isPvEncryptionInTransitEnabled":true}"#,
    )?;
    let got = holder.resolve()?;
    let VolumeAttachment::Paravirtualized(v) = &got else {
        panic!("expected a paravirtualized attachment, got {got:?}");
    };
    assert_eq!(v.is_pv_encryption_in_transit_enabled, Some(true));
    Ok(())
}

#[test]
fn list_of_unions() -> Result {
    let input = json!([
        {"attachmentType": "iscsi", "id": "a", "port": 3260},
        {"attachmentType": "emulated", "id": "b"},
        {"attachmentType": "nvme", "id": "c"},
    ]);
    let got = serde_json::from_str::<Vec<VolumeAttachment>>(&input.to_string())?;
    let kinds: Vec<_> = got.iter().map(VolumeAttachment::discriminator).collect();
    assert_eq!(kinds, vec!["iscsi", "emulated", "nvme"]);
    let ids: Vec<_> = got.iter().map(VolumeAttachment::id).collect();
    assert_eq!(ids, vec![Some("a"), Some("b"), Some("c")]);
    Ok(())
}
