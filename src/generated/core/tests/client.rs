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

#[cfg(test)]
mod tests {
    use futures::TryStreamExt;
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::retry_policy::{AlwaysRetry, RetryPolicyExt};
    use httptest::{Expectation, Server, cycle, matchers::*, responders::*};
    use oci_sdk_core::client::{Compute, VirtualNetwork};
    use oci_sdk_core::model::{
        InstanceLifecycleState, InstanceSourceDetails, InstanceSourceViaImageDetails,
        LaunchInstanceDetails, PlatformConfig,
    };
    use oci_sdk_core::requests::compute::{
        InstanceActionAction, InstanceActionRequest, LaunchInstanceRequest, ListInstancesRequest,
    };
    use oci_sdk_core::requests::virtual_network::{GetClientVpnRequest, ListDrgAttachmentsRequest};
    use serde_json::json;
    use std::time::Duration;

    type Result = anyhow::Result<()>;

    async fn compute(server: &Server) -> anyhow::Result<Compute> {
        let client = Compute::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .build()
            .await?;
        Ok(client)
    }

    fn json_response(body: serde_json::Value) -> impl httptest::responders::Responder {
        status_code(200)
            .insert_header("content-type", "application/json")
            .body(body.to_string())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn launch_instance() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/instances"),
                request::headers(contains(("opc-retry-token", matches("^[A-Za-z0-9]{30}$")))),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({
                    "availabilityDomain": "Uocm:PHX-AD-1",
                    "compartmentId": "ocid1.compartment.oc1..aaaa",
                    "shape": "VM.Standard.E4.Flex",
                    "sourceDetails": {"sourceType": "image", "imageId": "ocid1.image.oc1..bbbb"},
                })))),
            ])
            .respond_with(
                status_code(200)
                    .insert_header("content-type", "application/json")
                    .insert_header("etag", "etag-1")
                    .insert_header("opc-request-id", "req-1")
                    .insert_header("opc-work-request-id", "ocid1.workrequest.oc1..dddd")
                    .body(
                        json!({
                            "id": "ocid1.instance.oc1..cccc",
                            "lifecycleState": "PROVISIONING",
                            "platformConfig": {"type": "AMD_VM", "isMeasuredBootEnabled": false},
                        })
                        .to_string(),
                    ),
            ),
        );

        let client = compute(&server).await?;
        let details = LaunchInstanceDetails::new()
            .set_availability_domain("Uocm:PHX-AD-1")
            .set_compartment_id("ocid1.compartment.oc1..aaaa")
            .set_shape("VM.Standard.E4.Flex")
            .set_source_details(InstanceSourceDetails::from(
                InstanceSourceViaImageDetails::new().set_image_id("ocid1.image.oc1..bbbb"),
            ));
        let response = client
            .launch_instance(LaunchInstanceRequest::new().set_launch_instance_details(details))
            .send()
            .await?;
        assert_eq!(response.instance.id.as_deref(), Some("ocid1.instance.oc1..cccc"));
        assert_eq!(
            response.instance.lifecycle_state,
            Some(InstanceLifecycleState::Provisioning)
        );
        assert!(
            matches!(&response.instance.platform_config, Some(PlatformConfig::AmdVm(_))),
            "{response:?}"
        );
        assert_eq!(response.etag.as_deref(), Some("etag-1"));
        assert_eq!(response.opc_request_id.as_deref(), Some("req-1"));
        assert_eq!(
            response.opc_work_request_id.as_deref(),
            Some("ocid1.workrequest.oc1..dddd")
        );
        let raw = response.raw_response().expect("raw response is retained");
        assert_eq!(raw.status(), 200);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn instance_action() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/instances/ocid1.inst.x"),
                request::query(url_decoded(contains(("action", "STOP")))),
                request::headers(contains(("opc-retry-token", "tkn"))),
                request::body(""),
            ])
            .respond_with(json_response(json!({
                "id": "ocid1.inst.x",
                "lifecycleState": "STOPPING",
            }))),
        );

        let client = compute(&server).await?;
        let response = client
            .instance_action(
                InstanceActionRequest::new()
                    .set_instance_id("ocid1.inst.x")
                    .set_action(InstanceActionAction::Stop)
                    .set_opc_retry_token("tkn"),
            )
            .send()
            .await?;
        assert_eq!(
            response.instance.lifecycle_state,
            Some(InstanceLifecycleState::Stopping)
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_by_item() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/instances"),
                request::query(url_decoded(contains(("compartmentId", "c")))),
                request::query(url_decoded(not(contains(key("page"))))),
            ])
            .respond_with(
                status_code(200)
                    .insert_header("opc-next-page", "p2")
                    .body(json!([{"id": "i-1"}, {"id": "i-2"}]).to_string()),
            ),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/instances"),
                request::query(url_decoded(contains(("page", "p2")))),
            ])
            .respond_with(json_response(json!([{"id": "i-3"}]))),
        );

        let client = compute(&server).await?;
        let items: Vec<_> = client
            .list_instances(ListInstancesRequest::new().set_compartment_id("c"))
            .by_item()
            .try_collect()
            .await?;
        let ids: Vec<_> = items.iter().filter_map(|i| i.id.as_deref()).collect();
        assert_eq!(ids, vec!["i-1", "i-2", "i-3"]);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_by_page_starts_at_request_page() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/drgAttachments"),
                request::query(url_decoded(contains(("page", "start")))),
                request::query(url_decoded(contains(("attachmentType", "VCN")))),
            ])
            .respond_with(
                status_code(200)
                    .insert_header("opc-next-page", "next")
                    .body(json!([{"id": "a-1", "networkDetails": {"type": "VCN", "id": "v-1"}}]).to_string()),
            ),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/drgAttachments"),
                request::query(url_decoded(contains(("page", "next")))),
            ])
            .respond_with(json_response(json!([]))),
        );

        let client = VirtualNetwork::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .build()
            .await?;
        let mut pages = client
            .list_drg_attachments(
                ListDrgAttachmentsRequest::new()
                    .set_compartment_id("c")
                    .set_attachment_type("VCN")
                    .set_page("start"),
            )
            .by_page();
        let first = pages.next().await.expect("first page")?;
        assert_eq!(first.opc_next_page.as_deref(), Some("next"));
        assert_eq!(first.items.len(), 1);
        let network = first.items[0].network_details.as_ref().expect("network details");
        assert_eq!(network.id(), Some("v-1"));
        let second = pages.next().await.expect("second page")?;
        assert!(second.items.is_empty(), "{second:?}");
        assert!(pages.next().await.is_none());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn service_error() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/clientVpns/missing")).respond_with(
                status_code(404)
                    .insert_header("opc-request-id", "req-404")
                    .body(json!({"code": "NotAuthorizedOrNotFound", "message": "not found"}).to_string()),
            ),
        );

        let client = VirtualNetwork::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .build()
            .await?;
        let err = client
            .get_client_vpn(GetClientVpnRequest::new().set_client_vpn_id("missing"))
            .send()
            .await
            .unwrap_err();
        let svc = err.as_service().expect("a service error");
        assert_eq!(svc.status_code(), 404);
        assert_eq!(svc.code(), "NotAuthorizedOrNotFound");
        assert_eq!(svc.message(), "not found");
        assert_eq!(svc.opc_request_id(), Some("req-404"));
        assert_eq!(svc.operation_name(), Some("GetClientVpn"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_with_same_token() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/instances/i"),
                request::headers(contains(("opc-retry-token", "tkn"))),
            ])
            .times(2)
            .respond_with(cycle![
                status_code(503).body(json!({"code": "ServiceUnavailable", "message": "try again"}).to_string()),
                json_response(json!({"id": "i", "lifecycleState": "STARTING"})),
            ]),
        );

        let backoff = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(1))
            .build()?;
        let client = compute(&server).await?;
        let response = client
            .instance_action(
                InstanceActionRequest::new()
                    .set_instance_id("i")
                    .set_action("START")
                    .set_opc_retry_token("tkn"),
            )
            .with_retry_policy(AlwaysRetry.with_attempt_limit(3))
            .with_backoff_policy(backoff)
            .send()
            .await?;
        assert_eq!(
            response.instance.lifecycle_state,
            Some(InstanceLifecycleState::Starting)
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing_endpoint() {
        let err = Compute::builder().build().await.unwrap_err();
        assert!(err.is_endpoint(), "{err:?}");
    }
}
