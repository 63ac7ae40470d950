//! The seam between the client and whatever actually moves bytes.
//!
//! Native builds send through `reqwest`; browser builds through the Fetch
//! API via `gloo-net`. Futures are not required to be `Send` because the
//! browser's are not.

use crate::{FetchError, Method, RequestBuilder, Response};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

/// Sends a request and buffers the full response.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        (**self).send(request).await
    }
}

/// Transport backed by a shared `reqwest` client.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let method = match request.method() {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, request.url());
        for (key, value) in request.headers() {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body() {
            builder = builder.body(body.to_vec());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::RequestError(e.to_string()))?
            .to_vec();

        Ok(Response::new(status, headers, body))
    }
}

/// Transport backed by the browser Fetch API.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        use gloo_net::http::{Method as FetchMethod, RequestBuilder as FetchRequest};

        let method = match request.method() {
            Method::Get => FetchMethod::GET,
            Method::Post => FetchMethod::POST,
        };

        let mut builder = FetchRequest::new(request.url()).method(method);
        for (key, value) in request.headers() {
            builder = builder.header(key, value);
        }

        let outgoing = match request.body() {
            Some(body) => {
                let text = String::from_utf8(body.to_vec())
                    .map_err(|e| FetchError::RequestError(e.to_string()))?;
                builder.body(text)
            }
            None => builder.build(),
        }
        .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let response = outgoing
            .send()
            .await
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let status = response.status();
        let headers: HashMap<String, String> = response.headers().entries().collect();
        let body = response
            .binary()
            .await
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        Ok(Response::new(status, headers, body))
    }
}

/// In-memory transport that replays scripted responses in order and
/// records every request it was handed.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<Response, FetchError>>>,
    requests: Mutex<Vec<RequestBuilder>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 response with a JSON body.
    pub fn push_json(&self, value: serde_json::Value) {
        self.push(Ok(Response::json_ok(&value)));
    }

    /// Queue a response with the given status and raw body.
    pub fn push_status(&self, status: u16, body: &str) {
        self.push(Ok(Response::new(
            status,
            HashMap::new(),
            body.as_bytes().to_vec(),
        )));
    }

    /// Queue a transport-level failure.
    pub fn push_error(&self, error: FetchError) {
        self.push(Err(error));
    }

    pub fn push(&self, result: Result<Response, FetchError>) {
        lock(&self.responses).push_back(result);
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RequestBuilder> {
        lock(&self.requests).clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let url = request.url().to_string();
        lock(&self.requests).push(request);
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::RequestError(format!("no scripted response for {}", url))))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
