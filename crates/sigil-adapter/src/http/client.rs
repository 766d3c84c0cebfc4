/*
[INPUT]:  HTTP configuration (base URL, timeouts, transport, token store)
[OUTPUT]: Configured client ready for authorized API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing the authorized-call contract
*/

use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::Url;
use tracing::warn;

use crate::auth::{MemoryTokenStore, TokenStore};
use crate::http::{ReqwestTransport, Result, SigilError, Transport, TransportRequest, TransportResponse};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main client for the Sigil trading-signal API
pub struct SigilClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    token_store: Arc<dyn TokenStore>,
    payment_client: RwLock<Option<Arc<dyn Transport>>>,
}

impl SigilClient {
    /// Create a new client with default configuration
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, ClientConfig::default())
    }

    /// Create a new client with custom timeouts
    pub fn with_config(base_url: &str, config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::with_config(&config)?);
        Self::with_transport(base_url, transport)
    }

    /// Create a new client with an explicit transport
    pub fn with_transport(base_url: &str, transport: Arc<dyn Transport>) -> Result<Self> {
        Url::parse(base_url)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            token_store: Arc::new(MemoryTokenStore::new()),
            payment_client: RwLock::new(None),
        })
    }

    /// Replace the token store (memory store by default)
    pub fn with_token_store(mut self, token_store: Arc<dyn TokenStore>) -> Self {
        self.token_store = token_store;
        self
    }

    /// Set or replace the payment client used for paid endpoints
    pub fn set_payment_client(&self, payment_client: Arc<dyn Transport>) {
        *self.payment_client.write().unwrap() = Some(payment_client);
    }

    /// Get the configured payment client, if any
    pub fn payment_client(&self) -> Option<Arc<dyn Transport>> {
        self.payment_client.read().unwrap().clone()
    }

    /// Get the token store
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.token_store
    }

    /// Base URL with the trailing slash stripped
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Build a full URL for an endpoint path
    pub(crate) fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Issue an authorized call with the stored bearer token.
    ///
    /// Fails without touching the network when no token is stored. A 401
    /// clears the stored token before the error propagates, so a later call
    /// cannot reuse a dead token.
    pub async fn authed_request(
        &self,
        endpoint: &str,
        request: TransportRequest,
    ) -> Result<TransportResponse> {
        let token = self
            .token_store
            .get()
            .await
            .ok_or(SigilError::NotAuthenticated)?;

        let request = attach_bearer(request, &token);
        let response = self.transport.send(&self.url(endpoint), request).await?;
        self.interpret_status(response).await
    }

    /// Map the standard response-status taxonomy onto the error types
    pub(crate) async fn interpret_status(
        &self,
        response: TransportResponse,
    ) -> Result<TransportResponse> {
        match response.status().as_u16() {
            401 => {
                self.token_store.clear().await;
                warn!("session token rejected (401), cleared stored token");
                Err(SigilError::AuthExpired)
            }
            status if status >= 400 => Err(SigilError::RequestFailed {
                status,
                body: response.text(),
            }),
            _ => Ok(response),
        }
    }
}

/// Attach the bearer token, and a JSON content type only when a body is present
pub(crate) fn attach_bearer(mut request: TransportRequest, token: &str) -> TransportRequest {
    request
        .headers
        .push(("Authorization".to_string(), format!("Bearer {token}")));
    if request.body.is_some() {
        request
            .headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
    }
    request
}
