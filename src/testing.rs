//! Test transport that records requests and answers with a canned response.

use crate::types::HttpClient;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use http::Extensions;
use reqwest::{Method, Request, Response, StatusCode};
use reqwest_middleware::{ClientBuilder, Middleware, Next};
use serde_json::Value;
use url::Url;

/// A request seen by the [`MockTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: Url,
    /// The body, if it was JSON.
    pub body: Option<Value>,
}

/// Answers every request with the same response without touching the network.
#[derive(Debug, Clone)]
pub struct MockTransport {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    /// Responds with `body` as JSON and a 200 status.
    pub fn json(body: Value) -> Self {
        Self::text(body.to_string())
    }

    /// Responds with `body` as-is and a 200 status.
    pub fn text<T>(body: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            status: StatusCode::OK,
            body: body.into(),
            delay: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = StatusCode::from_u16(status).unwrap();
        self
    }

    /// Waits before responding.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Every request seen so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request seen so far.
    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();

        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].clone()
    }

    /// A client that sends every request to this transport.
    pub fn client(&self) -> HttpClient {
        ClientBuilder::new(reqwest::Client::new())
            .with(self.clone())
            .build()
    }
}

#[async_trait::async_trait]
impl Middleware for MockTransport {
    async fn handle(
        &self,
        request: Request,
        _extensions: &mut Extensions,
        _next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let body = request.body()
            .and_then(|body| body.as_bytes())
            .and_then(|bytes| serde_json::from_slice(bytes).ok());

        self.requests.lock().unwrap().push(RecordedRequest {
            method: request.method().clone(),
            url: request.url().clone(),
            body,
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let response = http::Response::builder()
            .status(self.status)
            .header("content-type", "application/json")
            .body(self.body.clone())
            .unwrap();

        Ok(Response::from(response))
    }
}
