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

use gax::backoff_policy::BackoffPolicyArg;
use gax::binding::Request;
use gax::options::RequestOptions;
use gax::paginator::{PageableRequest, PageableResponse, Paginator};
use gax::retry_policy::RetryPolicyArg;
use gaxi::http::ReqwestClient;
use std::sync::Arc;

/// A builder for a single request.
///
/// The clients return one of these for each operation. Use the `with_*`
/// methods to override the client configuration for this request only, and
/// [send][RequestBuilder::send] to make the request.
#[derive(Clone, Debug)]
pub struct RequestBuilder<R> {
    inner: Arc<ReqwestClient>,
    request: R,
    options: RequestOptions,
}

impl<R> RequestBuilder<R>
where
    R: Request,
{
    pub(crate) fn new(inner: Arc<ReqwestClient>, request: R) -> Self {
        Self {
            inner,
            request,
            options: RequestOptions::default(),
        }
    }

    /// Replaces the request.
    pub fn with_request<V: Into<R>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Replaces all the request options.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sets the retry policy for this request.
    ///
    /// A retry policy set on the request envelope itself takes precedence.
    pub fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.options.set_retry_policy(v);
        self
    }

    /// Sets the backoff policy for this request.
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.options.set_backoff_policy(v);
        self
    }

    /// Sets the timeout for each attempt.
    pub fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.options.set_attempt_timeout(v);
        self
    }

    /// Sets the `user-agent` header for this request.
    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.options.set_user_agent(v);
        self
    }

    /// Sends the request.
    pub async fn send(self) -> crate::Result<R::Response> {
        self.inner.execute(self.request, self.options).await
    }
}

impl<R> RequestBuilder<R>
where
    R: Request + PageableRequest + Clone + Send + Sync + 'static,
    R::Response: PageableResponse + Send + 'static,
{
    /// Streams the responses, one per page.
    ///
    /// The first request uses the `page` set in the request, if any, and the
    /// following requests use the `opc-next-page` header of the previous
    /// response.
    pub fn by_page(self) -> Paginator<R::Response, crate::Error> {
        let Self {
            inner,
            request,
            options,
        } = self;
        let execute = move |page: Option<String>| {
            let inner = inner.clone();
            let mut request = request.clone();
            let options = options.clone();
            if page.is_some() {
                request.set_page(page);
            }
            async move { inner.execute(request, options).await }
        };
        Paginator::new(None, execute)
    }

    /// Streams the items of every page.
    pub fn by_item(
        self,
    ) -> impl futures::Stream<Item = crate::Result<<R::Response as PageableResponse>::PageItem>>
    where
        <R::Response as PageableResponse>::PageItem: Send,
    {
        self.by_page().items()
    }
}

pub mod compute {
    //! Request builders for [Compute][crate::client::Compute].

    /// A builder for [Compute][crate::client::Compute].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use oci_sdk_core::*;
    /// # use builder::compute::ClientBuilder;
    /// # use client::Compute;
    /// let builder: ClientBuilder = Compute::builder();
    /// let client = builder
    ///     .with_endpoint("https://iaas.us-phoenix-1.oraclecloud.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use crate::client::Compute;
        #[derive(Debug)]
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Compute;
            const BASE_PATH: &'static str = "20160918";
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// The request builder for [Compute::get_instance][crate::client::Compute::get_instance] calls.
    pub type GetInstance = super::RequestBuilder<crate::requests::compute::GetInstanceRequest>;

    /// The request builder for [Compute::launch_instance][crate::client::Compute::launch_instance] calls.
    pub type LaunchInstance = super::RequestBuilder<crate::requests::compute::LaunchInstanceRequest>;

    /// The request builder for [Compute::instance_action][crate::client::Compute::instance_action] calls.
    pub type InstanceAction = super::RequestBuilder<crate::requests::compute::InstanceActionRequest>;

    /// The request builder for [Compute::update_instance][crate::client::Compute::update_instance] calls.
    pub type UpdateInstance = super::RequestBuilder<crate::requests::compute::UpdateInstanceRequest>;

    /// The request builder for [Compute::terminate_instance][crate::client::Compute::terminate_instance] calls.
    pub type TerminateInstance = super::RequestBuilder<crate::requests::compute::TerminateInstanceRequest>;

    /// The request builder for [Compute::list_instances][crate::client::Compute::list_instances] calls.
    pub type ListInstances = super::RequestBuilder<crate::requests::compute::ListInstancesRequest>;

    /// The request builder for [Compute::attach_volume][crate::client::Compute::attach_volume] calls.
    pub type AttachVolume = super::RequestBuilder<crate::requests::compute::AttachVolumeRequest>;

    /// The request builder for [Compute::list_volume_attachments][crate::client::Compute::list_volume_attachments] calls.
    pub type ListVolumeAttachments = super::RequestBuilder<crate::requests::compute::ListVolumeAttachmentsRequest>;

    /// The request builder for [Compute::get_instance_configuration][crate::client::Compute::get_instance_configuration] calls.
    pub type GetInstanceConfiguration = super::RequestBuilder<crate::requests::compute::GetInstanceConfigurationRequest>;
}

pub mod virtual_network {
    //! Request builders for [VirtualNetwork][crate::client::VirtualNetwork].

    /// A builder for [VirtualNetwork][crate::client::VirtualNetwork].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use oci_sdk_core::*;
    /// # use builder::virtual_network::ClientBuilder;
    /// # use client::VirtualNetwork;
    /// let builder: ClientBuilder = VirtualNetwork::builder();
    /// let client = builder
    ///     .with_endpoint("https://iaas.us-phoenix-1.oraclecloud.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use crate::client::VirtualNetwork;
        #[derive(Debug)]
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = VirtualNetwork;
            const BASE_PATH: &'static str = "20160918";
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// The request builder for [VirtualNetwork::create_drg_attachment][crate::client::VirtualNetwork::create_drg_attachment] calls.
    pub type CreateDrgAttachment = super::RequestBuilder<crate::requests::virtual_network::CreateDrgAttachmentRequest>;

    /// The request builder for [VirtualNetwork::get_drg_attachment][crate::client::VirtualNetwork::get_drg_attachment] calls.
    pub type GetDrgAttachment = super::RequestBuilder<crate::requests::virtual_network::GetDrgAttachmentRequest>;

    /// The request builder for [VirtualNetwork::list_drg_attachments][crate::client::VirtualNetwork::list_drg_attachments] calls.
    pub type ListDrgAttachments = super::RequestBuilder<crate::requests::virtual_network::ListDrgAttachmentsRequest>;

    /// The request builder for [VirtualNetwork::get_flow_log_config][crate::client::VirtualNetwork::get_flow_log_config] calls.
    pub type GetFlowLogConfig = super::RequestBuilder<crate::requests::virtual_network::GetFlowLogConfigRequest>;

    /// The request builder for [VirtualNetwork::list_flow_log_configs][crate::client::VirtualNetwork::list_flow_log_configs] calls.
    pub type ListFlowLogConfigs = super::RequestBuilder<crate::requests::virtual_network::ListFlowLogConfigsRequest>;

    /// The request builder for [VirtualNetwork::get_client_vpn][crate::client::VirtualNetwork::get_client_vpn] calls.
    pub type GetClientVpn = super::RequestBuilder<crate::requests::virtual_network::GetClientVpnRequest>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(compute::ListInstances: Clone, std::fmt::Debug, Send, Sync);
    assert_impl_all!(virtual_network::GetClientVpn: Clone, std::fmt::Debug, Send, Sync);
    assert_impl_all!(crate::client::Compute: Clone, std::fmt::Debug, Send, Sync);
    assert_impl_all!(crate::client::VirtualNetwork: Clone, std::fmt::Debug, Send, Sync);
    assert_impl_all!(
        Paginator<crate::requests::compute::ListInstancesResponse, crate::Error>: Send
    );
}
