//! HTTP fetch layer.

use std::collections::HashMap;

use tracing::debug;

use crate::{endpoint::Request, error::FetchError};

/// Something that can answer a GET request with a text body.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    /// Issue the request and return the response body.
    async fn get(&self, request: &Request) -> Result<String, FetchError>;
}

/// Fetcher backed by a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the client's default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fetcher around an already configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    async fn get(&self, request: &Request) -> Result<String, FetchError> {
        debug!("GET {}", request.url);
        let transport = |source| FetchError::Transport {
            url: request.url.clone(),
            source,
        };

        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, *value);
        }

        let response = builder.send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: request.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        debug!("received {} bytes from {}", body.len(), request.url);
        Ok(body)
    }
}

/// Fetcher serving canned bodies keyed by URL.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    bodies: HashMap<String, String>,
}

impl StaticFetcher {
    /// Create an empty fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for requests to `url`.
    pub fn with(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.bodies.insert(url.into(), body.into());
        self
    }
}

impl Fetch for StaticFetcher {
    async fn get(&self, request: &Request) -> Result<String, FetchError> {
        self.bodies
            .get(&request.url)
            .cloned()
            .ok_or_else(|| FetchError::Missing {
                url: request.url.clone(),
            })
    }
}
