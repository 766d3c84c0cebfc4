/*
[INPUT]:  Wallet or secret-key signing capability and the challenge endpoints
[OUTPUT]: Stored session token and authenticated session info
[POS]:    Auth layer - orchestrates the challenge/response flow
[UPDATE]: When auth endpoints or flow steps change
*/

use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, info};

use crate::auth::{SecretKeyInput, WalletSigner};
use crate::http::{Result, SigilClient, SigilError, TransportRequest, TransportResponse};

/// Server-issued challenge material
///
/// The challenge text and its correlation token must be signed and returned
/// together, unmodified. A challenge is consumed by exactly one exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct Challenge {
    pub challenge: String,
    #[serde(rename = "challengeToken")]
    pub challenge_token: String,
}

/// Result of a successful authentication exchange
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub wallet: String,
}

#[derive(Debug, Deserialize)]
struct ExchangeResponse {
    token: Option<String>,
}

impl SigilClient {
    /// Authenticate by delegating challenge signing to a wallet.
    ///
    /// 1. Fetch challenge
    /// 2. Sign the UTF-8 challenge bytes with the wallet
    /// 3. Exchange the signed challenge for a session token
    /// 4. Store the token
    pub async fn authenticate_with_wallet(
        &self,
        wallet: &dyn WalletSigner,
    ) -> Result<AuthSession> {
        let challenge = self.fetch_challenge().await?;
        let signature = wallet.sign_message(challenge.challenge.as_bytes()).await?;
        self.exchange_token(wallet.address(), &signature, &challenge.challenge_token)
            .await
    }

    /// Authenticate with a local secret key.
    ///
    /// The key is normalized once (32-byte seed or 64-byte secret key), the
    /// challenge is signed locally with detached Ed25519, and the exchange
    /// runs through the same code path as the wallet flow.
    pub async fn authenticate_with_secret_key(
        &self,
        secret_key: impl Into<SecretKeyInput>,
    ) -> Result<AuthSession> {
        let signer = secret_key.into().into_signer()?;
        let challenge = self.fetch_challenge().await?;
        let signature = signer.sign(challenge.challenge.as_bytes());
        self.exchange_token(
            signer.public_key_base58(),
            &signature.to_bytes(),
            &challenge.challenge_token,
        )
        .await
    }

    /// Step 1: fetch a challenge from the server
    ///
    /// GET /api/auth/challenge
    async fn fetch_challenge(&self) -> Result<Challenge> {
        let request = TransportRequest::new().method(Method::GET);
        let response = self
            .transport()
            .send(&self.url("/api/auth/challenge"), request)
            .await?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(SigilError::ChallengeFetch {
                status,
                message: response.text(),
            });
        }

        let challenge: Challenge = response.json()?;
        debug!(token = %challenge.challenge_token, "fetched auth challenge");
        Ok(challenge)
    }

    /// Step 2: exchange the signed challenge for a session token
    ///
    /// POST /api/auth with `{wallet, signature, challengeToken}`; both
    /// authentication paths funnel through here so wire behavior and error
    /// formatting stay identical.
    async fn exchange_token(
        &self,
        wallet: &str,
        signature: &[u8],
        challenge_token: &str,
    ) -> Result<AuthSession> {
        let body = serde_json::json!({
            "wallet": wallet,
            "signature": bs58::encode(signature).into_string(),
            "challengeToken": challenge_token,
        });

        let request = TransportRequest::new()
            .method(Method::POST)
            .header("Content-Type", "application/json")
            .body(serde_json::to_vec(&body)?);

        let response = self.transport().send(&self.url("/api/auth"), request).await?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(SigilError::Exchange {
                status,
                message: exchange_error_message(&response),
            });
        }

        let exchange: ExchangeResponse = response.json()?;
        let token = exchange.token.ok_or_else(|| SigilError::Exchange {
            status,
            message: "response missing token".to_string(),
        })?;

        self.token_store().set(token.clone()).await;
        info!(wallet, "authenticated");

        Ok(AuthSession {
            token,
            wallet: wallet.to_string(),
        })
    }
}

/// Prefer the body's `error` field; fall back to a status-coded message
fn exchange_error_message(response: &TransportResponse) -> String {
    response
        .json::<serde_json::Value>()
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|error| error.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            format!(
                "authentication failed with status {}",
                response.status().as_u16()
            )
        })
}
