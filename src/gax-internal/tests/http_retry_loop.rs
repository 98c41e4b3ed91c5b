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

mod mock_service;

#[cfg(test)]
mod tests {
    use super::mock_service::*;
    use gax::backoff_policy::BackoffPolicy;
    use gax::binding::{BinaryBody, ReopenableReader};
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::options::RequestOptions;
    use gax::retry_policy::{AlwaysRetry, DefaultRetryPolicy, RetryPolicyExt};
    use http::StatusCode;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use oci_sdk_gax_internal::http::ReqwestClient;
    use serde_json::json;
    use std::io::Read;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    type Result = anyhow::Result<()>;

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_retry_success() -> Result {
        let server = start(vec![transient(), transient(), success()]);
        let mut config = test_config(format!("http://{}", server.addr()));
        config.retry_policy = Some(Arc::new(DefaultRetryPolicy.with_attempt_limit(5)));
        config.backoff_policy = Some(Arc::new(test_backoff()));
        let client = ReqwestClient::new(config)?;

        let response = client
            .execute(UpdateWidgetRequest::new("w-1"), RequestOptions::default())
            .await?;
        assert_eq!(response.widget.id.as_deref(), Some("w-1"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_too_many_transients() -> Result {
        enable_tracing();
        let server = start(vec![transient(), transient(), transient()]);
        let mut config = test_config(format!("http://{}", server.addr()));
        config.retry_policy = Some(Arc::new(DefaultRetryPolicy.with_attempt_limit(3)));
        config.backoff_policy = Some(Arc::new(test_backoff()));
        let client = ReqwestClient::new(config)?;

        let err = client
            .execute(UpdateWidgetRequest::new("w-1"), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_permanent_error() -> Result {
        enable_tracing();
        let server = start(vec![permanent()]);
        let mut config = test_config(format!("http://{}", server.addr()));
        config.retry_policy = Some(Arc::new(DefaultRetryPolicy.with_attempt_limit(5)));
        config.backoff_policy = Some(Arc::new(test_backoff()));
        let client = ReqwestClient::new(config)?;

        let err = client
            .execute(UpdateWidgetRequest::new("w-1"), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(!err.is_exhausted(), "{err:?}");
        let service = err.as_service().expect("service error details");
        assert_eq!(service.status_code(), 400);
        assert_eq!(service.code(), "InvalidParameter");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn no_policy_single_attempt() -> Result {
        let server = start(vec![transient()]);
        let client = test_client(format!("http://{}", server.addr()));

        let err = client
            .execute(UpdateWidgetRequest::new("w-1"), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(!err.is_exhausted(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn request_policy_wins() -> Result {
        let server = start(vec![transient(), transient()]);
        let mut config = test_config(format!("http://{}", server.addr()));
        config.retry_policy = Some(Arc::new(DefaultRetryPolicy.with_attempt_limit(5)));
        config.backoff_policy = Some(Arc::new(test_backoff()));
        let client = ReqwestClient::new(config)?;

        let mut options = RequestOptions::default();
        options.set_retry_policy(AlwaysRetry.with_attempt_limit(4));
        let request = UpdateWidgetRequest {
            retry_policy: Some(AlwaysRetry.with_attempt_limit(2).into()),
            ..UpdateWidgetRequest::new("w-1")
        };
        let err = client.execute(request, options).await.unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn options_policy_wins() -> Result {
        let server = start(vec![transient(), transient()]);
        let mut config = test_config(format!("http://{}", server.addr()));
        config.retry_policy = Some(Arc::new(DefaultRetryPolicy.with_attempt_limit(5)));
        let client = ReqwestClient::new(config)?;

        let mut options = RequestOptions::default();
        options.set_retry_policy(DefaultRetryPolicy.with_attempt_limit(2));
        options.set_backoff_policy(test_backoff());
        let err = client
            .execute(UpdateWidgetRequest::new("w-1"), options)
            .await
            .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_token_on_every_attempt() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/widgets/w-1"),
                request::headers(contains(("opc-retry-token", matches("^[A-Za-z0-9]{30}$")))),
            ])
            .times(2)
            .respond_with(cycle(vec![
                to_responder(transient()),
                to_responder(success()),
            ])),
        );
        let client = test_client(format!("http://{}", server.addr()));
        let mut options = RequestOptions::default();
        options.set_retry_policy(DefaultRetryPolicy.with_attempt_limit(3));
        options.set_backoff_policy(test_backoff());
        client
            .execute(UpdateWidgetRequest::new("w-1"), options)
            .await?;
        Ok(())
    }

    #[derive(Debug, Default)]
    struct CountingSource(Arc<AtomicUsize>);

    impl ReopenableReader for CountingSource {
        fn open(&self) -> std::io::Result<Box<dyn Read + Send>> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(std::io::Cursor::new(b"payload".to_vec())))
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn binary_body_reopened() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/widgets/w-1"),
                request::body("payload"),
            ])
            .times(3)
            .respond_with(cycle(vec![
                to_responder(transient()),
                to_responder(transient()),
                to_responder(success()),
            ])),
        );
        let client = test_client(format!("http://{}", server.addr()));
        let opened = Arc::new(AtomicUsize::new(0));
        let request = UpdateWidgetRequest {
            upload: Some(BinaryBody::new(CountingSource(opened.clone()))),
            ..UpdateWidgetRequest::new("w-1")
        };
        let mut options = RequestOptions::default();
        options.set_retry_policy(DefaultRetryPolicy.with_attempt_limit(5));
        options.set_backoff_policy(test_backoff());
        client.execute(request, options).await?;
        assert_eq!(opened.load(Ordering::SeqCst), 3);
        Ok(())
    }

    fn success() -> (StatusCode, String) {
        let response = json!({
            "id": "w-1",
            "displayName": "done"
        });
        (StatusCode::OK, response.to_string())
    }

    fn transient() -> (StatusCode, String) {
        let status = json!({
            "code": "ServiceUnavailable",
            "message": "try-again",
        });
        (StatusCode::SERVICE_UNAVAILABLE, status.to_string())
    }

    fn permanent() -> (StatusCode, String) {
        let status = json!({
            "code": "InvalidParameter",
            "message": "uh-oh",
        });
        (StatusCode::BAD_REQUEST, status.to_string())
    }

    fn test_backoff() -> impl BackoffPolicy {
        ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(1))
            .build()
            .expect("hard-coded policy is valid")
    }

    fn start(responses: Vec<(StatusCode, String)>) -> Server {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("PUT", "/widgets/w-1"))
                .times(responses.len())
                .respond_with(cycle(responses.into_iter().map(to_responder).collect())),
        );
        server
    }

    fn to_responder((status, body): (StatusCode, String)) -> Box<dyn Responder> {
        Box::new(
            status_code(status.as_u16())
                .insert_header("content-type", "application/json")
                .body(body),
        )
    }
}
