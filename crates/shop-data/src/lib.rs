//! HTTP client and typed backend API for the storefront.
//!
//! Provides a small builder API over a pluggable [`Transport`], the typed
//! endpoints of the storefront backend, and [`StorefrontSession`], which
//! drives the catalog and checkout round trips against the state
//! containers in `shop_commerce`.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_data::{ApiConfig, HttpTransport, StorefrontApi};
//!
//! let config = ApiConfig::from_env()?;
//! let api = StorefrontApi::new(HttpTransport::new(), &config);
//!
//! let categories = api.categories().await?;
//! ```

mod api;
mod config;
mod error;
mod request;
mod response;
mod session;
mod transport;

pub use api::StorefrontApi;
pub use config::{ApiConfig, ConfigError, DEFAULT_BACKEND_URL};
pub use error::{FailureKind, FetchError};
pub use request::{Method, RequestBuilder};
pub use response::Response;
pub use session::StorefrontSession;
pub use transport::{MockTransport, Transport};

#[cfg(not(target_arch = "wasm32"))]
pub use transport::HttpTransport;

#[cfg(target_arch = "wasm32")]
pub use transport::BrowserTransport;

use std::collections::HashMap;

/// HTTP client for making outbound requests.
#[derive(Debug, Clone)]
pub struct FetchClient<T> {
    transport: T,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl<T: Transport> FetchClient<T> {
    /// Create a new HTTP client over `transport`.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            base_url: None,
            default_headers: HashMap::new(),
        }
    }

    /// Prepend `base_url` to every relative request path.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder<'_, T> {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder<'_, T> {
        self.request(Method::Post, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder<'_, T> {
        let mut builder = RequestBuilder::new(method, self.resolve(url.into()));
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            client: self,
            builder,
        }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn resolve(&self, url: String) -> String {
        match &self.base_url {
            Some(base) if !url.starts_with("http://") && !url.starts_with("https://") => {
                format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    url.trim_start_matches('/')
                )
            }
            _ => url,
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder<'a, T> {
    client: &'a FetchClient<T>,
    builder: RequestBuilder,
}

impl<T: Transport> ClientRequestBuilder<'_, T> {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<B: serde::Serialize>(mut self, value: &B) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Send the request and return the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        tracing::debug!(
            method = self.builder.method().as_str(),
            url = self.builder.url(),
            "sending request"
        );
        self.client.transport.send(self.builder).await
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        ApiConfig, FetchClient, FetchError, Method, Response, StorefrontApi, StorefrontSession,
        Transport,
    };
}
