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

//! Provide types for client construction.
//!
//! Each client type defines a `builder()` function returning a
//! [ClientBuilder]. The builder collects the endpoint, or the region used to
//! compute it, the default retry and backoff policies, and the user agent.
//!
//! ## Example: create a client for a region.
//!
//! ```
//! # use oci_sdk_gax::client_builder::examples;
//! # use oci_sdk_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder().with_region("us-ashburn-1").build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: create a client with a different endpoint
//!
//! ```
//! # use oci_sdk_gax::client_builder::examples;
//! # use oci_sdk_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_endpoint("https://iaas.example.com")
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, neither an endpoint nor a region was configured.
    pub fn is_endpoint(&self) -> bool {
        matches!(&self.0, ErrorKind::Endpoint)
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn endpoint() -> Self {
        Self(ErrorKind::Endpoint)
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("the client needs an endpoint or a region")]
    Endpoint,
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client.
#[derive(Clone, Debug)]
pub struct ClientBuilder<F> {
    config: internal::ClientConfig,
    factory: F,
}

impl<F> ClientBuilder<F> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint, it takes precedence over the region.
    ///
    /// ```
    /// # use oci_sdk_gax::client_builder::examples;
    /// # use oci_sdk_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_endpoint("http://localhost:8080")
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Sets the region.
    ///
    /// The endpoint is `https://iaas.{region}.oraclecloud.com` followed by the
    /// API version path of the service, for example `/20160918`. An explicit
    /// endpoint is used as-is and must include that path.
    pub fn with_region<V: Into<String>>(mut self, v: V) -> Self {
        self.config.region = Some(v.into());
        self
    }

    /// Sets the default `user-agent` header.
    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.config.user_agent = Some(v.into());
        self
    }

    /// Sets the default retry policy.
    ///
    /// Without a retry policy each request is attempted once.
    ///
    /// ```
    /// # use oci_sdk_gax::client_builder::examples;
    /// # use oci_sdk_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// use oci_sdk_gax::retry_policy::{DefaultRetryPolicy, RetryPolicyExt};
    /// let client = Client::builder()
    ///     .with_region("us-phoenix-1")
    ///     .with_retry_policy(DefaultRetryPolicy.with_attempt_limit(5))
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.config.retry_policy = Some(v.into().into());
        self
    }

    /// Sets the default backoff policy.
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.backoff_policy = Some(v.into().into());
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;

        /// The API version path appended to regional endpoints.
        const BASE_PATH: &'static str = "";

        fn build(self, config: ClientConfig) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, C>(factory: F) -> super::ClientBuilder<F>
    where
        F: ClientFactory<Client = C>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig {
                base_path: F::BASE_PATH,
                ..ClientConfig::default()
            },
        }
    }

    #[derive(Clone, Debug, Default)]
    pub struct ClientConfig {
        pub endpoint: Option<String>,
        pub region: Option<String>,
        pub user_agent: Option<String>,
        pub retry_policy: Option<Arc<dyn RetryPolicy>>,
        pub backoff_policy: Option<Arc<dyn BackoffPolicy>>,
        pub base_path: &'static str,
    }

    impl ClientConfig {
        /// The explicit endpoint, else the regional endpoint and base path.
        pub fn resolve_endpoint(&self) -> Result<String> {
            if let Some(e) = &self.endpoint {
                return Ok(e.trim_end_matches('/').to_string());
            }
            let region = self.region.as_deref().ok_or_else(Error::endpoint)?;
            let host = format!("https://iaas.{region}.oraclecloud.com");
            match self.base_path.trim_matches('/') {
                "" => Ok(host),
                path => Ok(format!("{host}/{path}")),
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! Helper types used in the rustdoc examples.

    use super::Result;
    use super::internal::ClientConfig;

    #[allow(dead_code)]
    #[derive(Debug)]
    pub struct Client(ClientConfig, String);
    impl Client {
        /// Create a builder to initialize new instances of this client.
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: ClientConfig) -> Result<Self> {
            let endpoint = config.resolve_endpoint()?;
            Ok(Self(config, endpoint))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory>;
        #[derive(Debug)]
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Client = super::Client;
            async fn build(
                self,
                config: super::ClientConfig,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use test_case::test_case;

        #[tokio::test]
        async fn missing_endpoint() {
            let err = Client::builder().build().await.unwrap_err();
            assert!(err.is_endpoint(), "{err:?}");
            assert!(!err.is_transport(), "{err:?}");
        }

        #[tokio::test]
        async fn region() -> anyhow::Result<()> {
            let client = Client::builder().with_region("us-ashburn-1").build().await?;
            assert_eq!(client.1, "https://iaas.us-ashburn-1.oraclecloud.com");
            let config = client.0;
            assert!(config.retry_policy.is_none(), "{config:?}");
            assert!(config.backoff_policy.is_none(), "{config:?}");
            assert!(config.user_agent.is_none(), "{config:?}");
            Ok(())
        }

        #[test_case("20160918")]
        #[test_case("/20160918/")]
        fn region_with_base_path(base_path: &'static str) -> anyhow::Result<()> {
            let config = ClientConfig {
                region: Some("us-ashburn-1".to_string()),
                base_path,
                ..ClientConfig::default()
            };
            assert_eq!(
                config.resolve_endpoint()?,
                "https://iaas.us-ashburn-1.oraclecloud.com/20160918"
            );
            Ok(())
        }

        #[test]
        fn endpoint_ignores_base_path() -> anyhow::Result<()> {
            let config = ClientConfig {
                endpoint: Some("http://localhost:8080/".to_string()),
                region: Some("us-ashburn-1".to_string()),
                base_path: "20160918",
                ..ClientConfig::default()
            };
            assert_eq!(config.resolve_endpoint()?, "http://localhost:8080");
            Ok(())
        }

        #[tokio::test]
        async fn endpoint_wins() -> anyhow::Result<()> {
            let client = Client::builder()
                .with_region("us-ashburn-1")
                .with_endpoint("http://localhost:8080/")
                .build()
                .await?;
            assert_eq!(client.1, "http://localhost:8080");
            Ok(())
        }

        #[tokio::test]
        async fn policies() -> anyhow::Result<()> {
            use crate::retry_policy::{AlwaysRetry, RetryPolicyExt};
            let client = Client::builder()
                .with_region("eu-frankfurt-1")
                .with_user_agent("test-only")
                .with_retry_policy(AlwaysRetry.with_attempt_limit(3))
                .with_backoff_policy(crate::exponential_backoff::ExponentialBackoff::default())
                .build()
                .await?;
            let config = client.0;
            assert_eq!(config.user_agent.as_deref(), Some("test-only"));
            assert!(config.retry_policy.is_some(), "{config:?}");
            assert!(config.backoff_policy.is_some(), "{config:?}");
            Ok(())
        }

        #[test]
        fn transport_error() {
            let err = crate::client_builder::Error::transport("bad tls");
            assert!(err.is_transport(), "{err:?}");
            assert!(std::error::Error::source(&err).is_some(), "{err:?}");
        }
    }
}
