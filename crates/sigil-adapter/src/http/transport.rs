/*
[INPUT]:  Request descriptions (method, headers, body) and target URLs
[OUTPUT]: Buffered HTTP responses from a pluggable transport
[POS]:    HTTP layer - transport capability and reqwest default
[UPDATE]: When the transport contract or default client behavior changes
*/

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::http::{ClientConfig, Result, SigilError};

/// A single outbound request as the gateway describes it.
///
/// The method defaults to POST when left unset.
#[derive(Debug, Clone, Default)]
pub struct TransportRequest {
    pub method: Option<Method>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl TransportRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// Buffered HTTP response.
///
/// The body is read from the wire exactly once and kept in memory so it can
/// be decoded as JSON and still re-read as text after a failed parse.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Body as text (lossy for non-UTF-8 payloads)
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON; a parse failure carries the raw body text
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| SigilError::Json {
            message: e.to_string(),
            body: self.text(),
        })
    }
}

/// Trait for performing outbound HTTP calls
///
/// The plain transport and the payment-capable transport honor the same
/// contract; payment transports additionally complete an on-chain payment
/// before or during the call.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, url: &str, request: TransportRequest) -> Result<TransportResponse>;
}

/// Default transport backed by reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    /// Create a transport with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a transport with custom timeouts
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, url: &str, request: TransportRequest) -> Result<TransportResponse> {
        let method = request.method.unwrap_or(Method::POST);
        let mut builder = self.http_client.request(method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse::new(status, body))
    }
}
