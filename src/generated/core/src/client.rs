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

use crate::builder::RequestBuilder;
use gax::client_builder::Result as BuilderResult;
use gax::client_builder::internal::ClientConfig;
use gaxi::http::ReqwestClient;
use std::sync::Arc;

/// Manages compute instances, their power state, and their volume attachments.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use oci_sdk_core::client::Compute;
/// let client = Compute::builder().with_region("us-ashburn-1").build().await?;
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// Use [Compute::builder] to set the endpoint, or the region used to
/// compute it, and the default retry and backoff policies.
///
/// # Pooling and Cloning
///
/// `Compute` holds a connection pool internally, it is advised to
/// create one and reuse it. Cloning is cheap, the clones share the pool.
#[derive(Clone, Debug)]
pub struct Compute {
    inner: Arc<ReqwestClient>,
}

impl Compute {
    /// Returns a builder for [Compute].
    pub fn builder() -> crate::builder::compute::ClientBuilder {
        gax::client_builder::internal::new_builder(crate::builder::compute::client::Factory)
    }

    pub(crate) async fn new(config: ClientConfig) -> BuilderResult<Self> {
        let inner = ReqwestClient::new(config)?;
        tracing::debug!(endpoint = inner.endpoint(), "created Compute client");
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Gets information about the specified instance.
    pub fn get_instance(
        &self,
        request: crate::requests::compute::GetInstanceRequest,
    ) -> crate::builder::compute::GetInstance {
        RequestBuilder::new(self.inner.clone(), request)
    }

    /// Creates a new instance in the specified compartment and availability domain.
    ///
    /// The shape and the source details determine the hardware and the boot
    /// volume of the instance.
    pub fn launch_instance(
        &self,
        request: crate::requests::compute::LaunchInstanceRequest,
    ) -> crate::builder::compute::LaunchInstance {
        RequestBuilder::new(self.inner.clone(), request)
    }

    /// Performs one of the power actions on the specified instance.
    ///
    /// The `action` determines the operation, for example `STOP` or `SOFTRESET`.
    pub fn instance_action(
        &self,
        request: crate::requests::compute::InstanceActionRequest,
    ) -> crate::builder::compute::InstanceAction {
        RequestBuilder::new(self.inner.clone(), request)
    }

    /// Updates certain fields on the specified instance.
    ///
    /// Fields that are not provided in the request are not updated.
    pub fn update_instance(
        &self,
        request: crate::requests::compute::UpdateInstanceRequest,
    ) -> crate::builder::compute::UpdateInstance {
        RequestBuilder::new(self.inner.clone(), request)
    }

    /// Permanently terminates the specified instance.
    pub fn terminate_instance(
        &self,
        request: crate::requests::compute::TerminateInstanceRequest,
    ) -> crate::builder::compute::TerminateInstance {
        RequestBuilder::new(self.inner.clone(), request)
    }

    /// Lists the instances in the specified compartment.
    ///
    /// Use `by_page()` or `by_item()` on the builder to iterate over all the results.
    pub fn list_instances(
        &self,
        request: crate::requests::compute::ListInstancesRequest,
    ) -> crate::builder::compute::ListInstances {
        RequestBuilder::new(self.inner.clone(), request)
    }

    /// Attaches the specified storage volume to the specified instance.
    pub fn attach_volume(
        &self,
        request: crate::requests::compute::AttachVolumeRequest,
    ) -> crate::builder::compute::AttachVolume {
        RequestBuilder::new(self.inner.clone(), request)
    }

    /// Lists the volume attachments in the specified compartment.
    ///
    /// You can filter the list by specifying an instance OCID, a volume OCID, or both.
    ///
    /// Use `by_page()` or `by_item()` on the builder to iterate over all the results.
    pub fn list_volume_attachments(
        &self,
        request: crate::requests::compute::ListVolumeAttachmentsRequest,
    ) -> crate::builder::compute::ListVolumeAttachments {
        RequestBuilder::new(self.inner.clone(), request)
    }

    /// Gets the specified instance configuration.
    pub fn get_instance_configuration(
        &self,
        request: crate::requests::compute::GetInstanceConfigurationRequest,
    ) -> crate::builder::compute::GetInstanceConfiguration {
        RequestBuilder::new(self.inner.clone(), request)
    }
}

/// Manages DRG attachments, flow log configurations, and client VPN endpoints.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use oci_sdk_core::client::VirtualNetwork;
/// let client = VirtualNetwork::builder().with_region("us-ashburn-1").build().await?;
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// Use [VirtualNetwork::builder] to set the endpoint, or the region used to
/// compute it, and the default retry and backoff policies.
///
/// # Pooling and Cloning
///
/// `VirtualNetwork` holds a connection pool internally, it is advised to
/// create one and reuse it. Cloning is cheap, the clones share the pool.
#[derive(Clone, Debug)]
pub struct VirtualNetwork {
    inner: Arc<ReqwestClient>,
}

impl VirtualNetwork {
    /// Returns a builder for [VirtualNetwork].
    pub fn builder() -> crate::builder::virtual_network::ClientBuilder {
        gax::client_builder::internal::new_builder(crate::builder::virtual_network::client::Factory)
    }

    pub(crate) async fn new(config: ClientConfig) -> BuilderResult<Self> {
        let inner = ReqwestClient::new(config)?;
        tracing::debug!(endpoint = inner.endpoint(), "created VirtualNetwork client");
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Attaches the specified DRG to the specified network resource.
    pub fn create_drg_attachment(
        &self,
        request: crate::requests::virtual_network::CreateDrgAttachmentRequest,
    ) -> crate::builder::virtual_network::CreateDrgAttachment {
        RequestBuilder::new(self.inner.clone(), request)
    }

    /// Gets the information for the specified DRG attachment.
    pub fn get_drg_attachment(
        &self,
        request: crate::requests::virtual_network::GetDrgAttachmentRequest,
    ) -> crate::builder::virtual_network::GetDrgAttachment {
        RequestBuilder::new(self.inner.clone(), request)
    }

    /// Lists the DRG attachments for the specified compartment.
    ///
    /// You can filter the results by VCN, by DRG, or by attachment type.
    ///
    /// Use `by_page()` or `by_item()` on the builder to iterate over all the results.
    pub fn list_drg_attachments(
        &self,
        request: crate::requests::virtual_network::ListDrgAttachmentsRequest,
    ) -> crate::builder::virtual_network::ListDrgAttachments {
        RequestBuilder::new(self.inner.clone(), request)
    }

    /// Gets the specified flow log configuration.
    pub fn get_flow_log_config(
        &self,
        request: crate::requests::virtual_network::GetFlowLogConfigRequest,
    ) -> crate::builder::virtual_network::GetFlowLogConfig {
        RequestBuilder::new(self.inner.clone(), request)
    }

    /// Lists the flow log configurations in the specified compartment.
    ///
    /// Use `by_page()` or `by_item()` on the builder to iterate over all the results.
    pub fn list_flow_log_configs(
        &self,
        request: crate::requests::virtual_network::ListFlowLogConfigsRequest,
    ) -> crate::builder::virtual_network::ListFlowLogConfigs {
        RequestBuilder::new(self.inner.clone(), request)
    }

    /// Gets the specified client VPN endpoint.
    pub fn get_client_vpn(
        &self,
        request: crate::requests::virtual_network::GetClientVpnRequest,
    ) -> crate::builder::virtual_network::GetClientVpn {
        RequestBuilder::new(self.inner.clone(), request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::compute::GetInstanceRequest;
    use crate::requests::virtual_network::GetClientVpnRequest;

    #[tokio::test]
    async fn compute_regional_endpoint() -> anyhow::Result<()> {
        let client = Compute::builder().with_region("us-ashburn-1").build().await?;
        assert_eq!(
            client.inner.endpoint(),
            "https://iaas.us-ashburn-1.oraclecloud.com/20160918"
        );
        let request = GetInstanceRequest::new().set_instance_id("ocid1.instance.oc1..x");
        let http = gax::binding::to_http_request(&request)?;
        assert_eq!(
            http.uri(client.inner.endpoint()),
            "https://iaas.us-ashburn-1.oraclecloud.com/20160918/instances/ocid1.instance.oc1..x"
        );
        Ok(())
    }

    #[tokio::test]
    async fn virtual_network_regional_endpoint() -> anyhow::Result<()> {
        let client = VirtualNetwork::builder()
            .with_region("eu-frankfurt-1")
            .build()
            .await?;
        let request = GetClientVpnRequest::new().set_client_vpn_id("vpn-1");
        let http = gax::binding::to_http_request(&request)?;
        assert_eq!(
            http.uri(client.inner.endpoint()),
            "https://iaas.eu-frankfurt-1.oraclecloud.com/20160918/clientVpns/vpn-1"
        );
        Ok(())
    }

    #[tokio::test]
    async fn explicit_endpoint_is_the_service_root() -> anyhow::Result<()> {
        let client = Compute::builder()
            .with_region("us-ashburn-1")
            .with_endpoint("http://localhost:8080/20160918/")
            .build()
            .await?;
        assert_eq!(client.inner.endpoint(), "http://localhost:8080/20160918");
        Ok(())
    }
}
