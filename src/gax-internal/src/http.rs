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

use futures::Stream;
use gax::Result;
use gax::backoff_policy::BackoffPolicy;
use gax::binding::{BinaryBody, HttpRequest, Request, RequestBody};
use gax::client_builder::Error as BuilderError;
use gax::client_builder::internal::ClientConfig;
use gax::error::{Error, ServiceError};
use gax::exponential_backoff::ExponentialBackoff;
use gax::options::RequestOptions;
use gax::response::{FromHttpResponse, RawResponse};
use gax::retry_policy::RetryPolicy;
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = concat!("oci-sdk-rust/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    endpoint: String,
    defaults: RequestOptions,
}

impl ReqwestClient {
    pub fn new(config: ClientConfig) -> gax::client_builder::Result<Self> {
        let endpoint = config.resolve_endpoint()?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let mut defaults = RequestOptions::default();
        defaults.set_user_agent(config.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()));
        if let Some(p) = config.retry_policy {
            defaults.set_retry_policy(p);
        }
        if let Some(p) = config.backoff_policy {
            defaults.set_backoff_policy(p);
        }
        Ok(Self {
            inner,
            endpoint,
            defaults,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Binds `request`, sends it, and binds the response.
    ///
    /// The retry token, if the operation has one, is set before binding, so
    /// every attempt carries the same token. The policy on the request wins
    /// over `options`, which win over the client defaults. Without any
    /// policy the request is attempted once.
    pub async fn execute<R: Request>(
        &self,
        mut request: R,
        options: RequestOptions,
    ) -> Result<R::Response> {
        request.ensure_retry_token();
        let http_request = gax::binding::to_http_request(&request)?;
        let mut options = options;
        if let Some(p) = request.retry_policy() {
            options.set_retry_policy(p.clone());
        }
        let options = options.with_defaults(&self.defaults);
        let policy = options.retry_policy().clone();
        let raw = match policy {
            None => self.request_attempt(&http_request, &options, None).await?,
            Some(policy) => self.retry_loop(http_request, options, policy).await?,
        };
        R::Response::from_http_response(raw)
    }

    async fn retry_loop(
        &self,
        request: HttpRequest,
        options: RequestOptions,
        retry_policy: Arc<dyn RetryPolicy>,
    ) -> Result<RawResponse> {
        let backoff = self.get_backoff_policy(&options);
        let operation = request.operation();
        let this = self.clone();
        let inner = async move |d| this.request_attempt(&request, &options, d).await;
        let sleep = async |d| tokio::time::sleep(d).await;
        gax::retry_loop_internal::retry_loop(inner, sleep, operation, retry_policy, backoff).await
    }

    async fn request_attempt(
        &self,
        request: &HttpRequest,
        options: &RequestOptions,
        remaining_time: Option<Duration>,
    ) -> Result<RawResponse> {
        let mut builder = self
            .inner
            .request(request.method().clone(), request.uri(&self.endpoint))
            .headers(request.headers().clone());
        if let Some(user_agent) = options.user_agent() {
            builder = builder.header(
                reqwest::header::USER_AGENT,
                reqwest::header::HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        builder = match request.body() {
            RequestBody::Empty => builder,
            RequestBody::Json(payload) => builder.body(payload.clone()),
            RequestBody::Binary(payload) => builder.body(open_binary(payload).await?),
        };
        builder = gax::retry_loop_internal::effective_timeout(options, remaining_time)
            .into_iter()
            .fold(builder, |b, t| b.timeout(t));

        let response = builder.send().await.map_err(Self::map_send_error)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(Self::map_send_error)?;
        if !status.is_success() {
            let error = ServiceError::from_http(status.as_u16(), headers, &body)
                .with_operation_name(request.operation());
            tracing::debug!(operation = request.operation(), %status, "service error");
            return Err(Error::service(error));
        }
        Ok(RawResponse::new(status, headers, body))
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }

    pub(crate) fn get_backoff_policy(&self, options: &RequestOptions) -> Arc<dyn BackoffPolicy> {
        options
            .backoff_policy()
            .clone()
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }
}

/// Opens the binary body and streams its contents.
///
/// The reader is opened anew for each attempt. Failing to open it is a
/// serialization error, the retry policies never retry those.
async fn open_binary(body: &BinaryBody) -> Result<reqwest::Body> {
    let body = body.clone();
    let reader = tokio::task::spawn_blocking(move || body.open())
        .await
        .map_err(Error::other)?
        .map_err(Error::ser)?;
    Ok(reqwest::Body::wrap_stream(chunks(reader)))
}

const CHUNK_SIZE: usize = 64 * 1024;

/// Reads `reader` on the blocking pool, one chunk at a time.
fn chunks(
    reader: Box<dyn Read + Send>,
) -> impl Stream<Item = std::io::Result<bytes::Bytes>> + Send + 'static {
    futures::stream::unfold(Some(reader), |state| async move {
        let mut reader = state?;
        let chunk = tokio::task::spawn_blocking(move || {
            let mut buffer = vec![0_u8; CHUNK_SIZE];
            let count = loop {
                match reader.read(&mut buffer) {
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                    r => break r?,
                }
            };
            buffer.truncate(count);
            Ok::<_, std::io::Error>((reader, buffer))
        })
        .await;
        match chunk {
            Ok(Ok((_, buffer))) if buffer.is_empty() => None,
            Ok(Ok((reader, buffer))) => Some((Ok(bytes::Bytes::from(buffer)), Some(reader))),
            Ok(Err(e)) => Some((Err(e), None)),
            Err(e) => Some((Err(std::io::Error::other(e)), None)),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::binding::ReopenableReader;
    use gax::retry_policy::{AlwaysRetry, RetryPolicyExt};
    use std::io::Read;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn config(endpoint: &str) -> ClientConfig {
        ClientConfig {
            endpoint: Some(endpoint.to_string()),
            ..ClientConfig::default()
        }
    }

    #[test]
    fn defaults() -> anyhow::Result<()> {
        let client = ReqwestClient::new(config("http://localhost:1234/"))?;
        assert_eq!(client.endpoint(), "http://localhost:1234");
        assert_eq!(
            client.defaults.user_agent().as_deref(),
            Some(DEFAULT_USER_AGENT)
        );
        assert!(client.defaults.retry_policy().is_none(), "{client:?}");
        assert!(client.defaults.backoff_policy().is_none(), "{client:?}");
        Ok(())
    }

    #[test]
    fn with_policies() -> anyhow::Result<()> {
        let mut config = config("http://localhost:1234");
        config.user_agent = Some("test-only".to_string());
        config.retry_policy = Some(Arc::new(AlwaysRetry.with_attempt_limit(2)));
        config.backoff_policy = Some(Arc::new(ExponentialBackoff::default()));
        let client = ReqwestClient::new(config)?;
        assert_eq!(client.defaults.user_agent().as_deref(), Some("test-only"));
        assert!(client.defaults.retry_policy().is_some(), "{client:?}");
        assert!(client.defaults.backoff_policy().is_some(), "{client:?}");
        Ok(())
    }

    #[test]
    fn missing_endpoint() {
        let err = ReqwestClient::new(ClientConfig::default()).unwrap_err();
        assert!(err.is_endpoint(), "{err:?}");
    }

    #[test]
    fn map_send_error_kinds() {
        // An invalid URL fails before any I/O.
        let err = reqwest::Client::new()
            .get("http://[invalid")
            .build()
            .unwrap_err();
        let got = ReqwestClient::map_send_error(err);
        assert!(got.is_io(), "{got:?}");
    }

    #[derive(Debug, Default)]
    struct CountingSource {
        opened: AtomicUsize,
    }

    impl ReopenableReader for CountingSource {
        fn open(&self) -> std::io::Result<Box<dyn Read + Send>> {
            self.opened.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(std::io::Cursor::new(b"payload".to_vec())))
        }
        fn content_length(&self) -> Option<u64> {
            Some(7)
        }
    }

    #[tokio::test]
    async fn open_binary_reopens() -> anyhow::Result<()> {
        let source = Arc::new(CountingSource::default());
        let body = BinaryBody::new(SharedSource(source.clone()));
        let _first = open_binary(&body).await?;
        let _second = open_binary(&body).await?;
        assert_eq!(source.opened.load(Ordering::SeqCst), 2);
        Ok(())
    }

    #[tokio::test]
    async fn open_binary_failure() {
        let body = BinaryBody::from_path("/does/not/exist/body.bin");
        let err = open_binary(&body).await.unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
    }

    #[tokio::test]
    async fn chunks_cover_the_body() -> anyhow::Result<()> {
        use futures::TryStreamExt;
        let payload: Vec<u8> = (0..(2 * CHUNK_SIZE + 5)).map(|i| (i % 251) as u8).collect();
        let reader: Box<dyn Read + Send> = Box::new(std::io::Cursor::new(payload.clone()));
        let got: Vec<bytes::Bytes> = chunks(reader).try_collect().await?;
        let sizes: Vec<usize> = got.iter().map(bytes::Bytes::len).collect();
        assert_eq!(sizes, vec![CHUNK_SIZE, CHUNK_SIZE, 5]);
        assert_eq!(got.concat(), payload);
        Ok(())
    }

    #[derive(Debug)]
    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk on fire"))
        }
    }

    #[tokio::test]
    async fn chunks_stop_on_error() {
        use futures::StreamExt;
        let got: Vec<_> = chunks(Box::new(FailingReader)).collect().await;
        assert_eq!(got.len(), 1);
        let err = got[0].as_ref().unwrap_err();
        assert_eq!(err.to_string(), "disk on fire");
    }

    #[derive(Debug)]
    struct SharedSource(Arc<CountingSource>);

    impl ReopenableReader for SharedSource {
        fn open(&self) -> std::io::Result<Box<dyn Read + Send>> {
            self.0.open()
        }
        fn content_length(&self) -> Option<u64> {
            self.0.content_length()
        }
    }
}
