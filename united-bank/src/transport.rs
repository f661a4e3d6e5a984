//! HTTP transport interface

use crate::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// POST
    Post,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// Outbound HTTP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Method
    pub method: HttpMethod,
    /// Absolute URL
    pub url: String,
    /// Headers in send order
    pub headers: Vec<(String, String)>,
    /// Body
    pub body: Option<Bytes>,
}

/// HTTP response, whatever its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code
    pub status: u16,
    /// Body as text
    pub body: String,
}

/// HTTP transport
///
/// Implementations must hand back 4xx/5xx responses as `Ok(HttpResponse)`;
/// only failures to complete the exchange are errors.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform one request
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse>;
}

#[async_trait]
impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse> {
        (**self).request(request).await
    }
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
    timeout_seconds: u64,
}

impl ReqwestHttpClient {
    /// Create new transport with a per-request timeout
    pub fn new(timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| Error::Connection(e.to_string()))?;

        Ok(Self {
            client,
            timeout_seconds,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse> {
        let method = match request.method {
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let operation = format!("{} {}", request.method, request.url);
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    seconds: self.timeout_seconds,
                    operation: operation.clone(),
                }
            } else {
                Error::Connection(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Connection(format!("{}: failed to read body: {}", operation, e)))?;

        Ok(HttpResponse { status, body })
    }
}
