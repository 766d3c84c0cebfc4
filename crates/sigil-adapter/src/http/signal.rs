/*
[INPUT]:  Signal requests and the configured payment transport
[OUTPUT]: Paid signal analysis results
[POS]:    HTTP layer - paid signal endpoint (requires bearer auth + payment)
[UPDATE]: When the signal endpoint or payment routing changes
*/

use reqwest::Method;
use tracing::warn;

use crate::http::client::attach_bearer;
use crate::http::{Result, SigilClient, SigilError, TransportRequest};
use crate::types::{SignalRequest, SignalResponse};

impl SigilClient {
    /// Request a paid signal analysis
    ///
    /// POST /api/analyze/signal, routed through the configured payment
    /// transport. The bearer token is attached here directly because the
    /// transport is swapped for the payment-capable one. A 402 means the
    /// payment flow did not complete and is distinct from generic failures.
    pub async fn request_signal(&self, request: SignalRequest) -> Result<SignalResponse> {
        let payment_client = self
            .payment_client()
            .ok_or_else(|| SigilError::Config("no payment client configured".to_string()))?;

        let token = self
            .token_store()
            .get()
            .await
            .ok_or(SigilError::NotAuthenticated)?;

        let transport_request = attach_bearer(
            TransportRequest::new()
                .method(Method::POST)
                .body(serde_json::to_vec(&request)?),
            &token,
        );

        let response = payment_client
            .send(&self.url("/api/analyze/signal"), transport_request)
            .await?;

        match response.status().as_u16() {
            401 => {
                self.token_store().clear().await;
                warn!("session token rejected (401) on paid call, cleared stored token");
                Err(SigilError::AuthExpired)
            }
            402 => Err(SigilError::PaymentRequired {
                body: response.text(),
            }),
            status if status >= 400 => Err(SigilError::RequestFailed {
                status,
                body: response.text(),
            }),
            _ => response.json(),
        }
    }
}
