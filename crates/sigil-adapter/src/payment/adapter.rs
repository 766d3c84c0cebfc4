/*
[INPUT]:  Payment-capable transport and an account provisioner
[OUTPUT]: Paid calls that self-heal a missing funding account once
[POS]:    Payment layer - bounded remediation retry around the payment transport
[UPDATE]: When the remediation trigger or retry policy changes
*/

use std::sync::Arc;

use async_trait::async_trait;
use solana_keypair::Keypair;
use tracing::{debug, warn};

use crate::http::{Result, Transport, TransportRequest, TransportResponse};
use crate::payment::{AtaProvisioner, RpcAtaProvisioner};

/// Retry progression for a single paid call. The call is retried at most
/// once: a second missing-account failure propagates un-remediated.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RetryState {
    Initial,
    Remediating(String),
    Retried,
}

/// Payment transport wrapper that provisions a missing associated token
/// account and retries the original call exactly once.
pub struct FundedPaymentTransport {
    inner: Arc<dyn Transport>,
    provisioner: Arc<dyn AtaProvisioner>,
}

impl FundedPaymentTransport {
    pub fn new(inner: Arc<dyn Transport>, provisioner: Arc<dyn AtaProvisioner>) -> Self {
        Self { inner, provisioner }
    }

    /// Wrap a payment-capable transport with RPC-backed account provisioning
    pub fn with_rpc(inner: Arc<dyn Transport>, rpc_url: &str, payer: Keypair) -> Self {
        Self::new(inner, Arc::new(RpcAtaProvisioner::new(rpc_url, payer)))
    }
}

#[async_trait]
impl Transport for FundedPaymentTransport {
    async fn send(&self, url: &str, request: TransportRequest) -> Result<TransportResponse> {
        let mut state = RetryState::Initial;
        loop {
            if let RetryState::Remediating(mint) = &state {
                warn!(%mint, "payment account missing, provisioning associated token account");
                self.provisioner.ensure_token_account(mint).await?;
                state = RetryState::Retried;
            }

            let err = match self.inner.send(url, request.clone()).await {
                Ok(response) => return Ok(response),
                Err(err) => err,
            };

            state = match state {
                RetryState::Initial => match extract_missing_ata_mint(&err.to_string()) {
                    Some(mint) => RetryState::Remediating(mint),
                    None => return Err(err),
                },
                RetryState::Remediating(_) | RetryState::Retried => {
                    debug!("paid call failed again after remediation, propagating");
                    return Err(err);
                }
            };
        }
    }
}

/// Extract the mint address from a missing-token-account failure message.
///
/// The trigger is a message that names a missing token account and carries
/// a `mint <base58>` marker whose address decodes to exactly 32 bytes.
pub(crate) fn extract_missing_ata_mint(message: &str) -> Option<String> {
    if !message.to_ascii_lowercase().contains("token account") {
        return None;
    }

    let tokens: Vec<&str> = message.split_whitespace().collect();
    for pair in tokens.windows(2) {
        let key = pair[0].trim_matches(|c: char| !c.is_ascii_alphanumeric());
        if !key.eq_ignore_ascii_case("mint") {
            continue;
        }

        let candidate = pair[1].trim_matches(|c: char| !c.is_ascii_alphanumeric());
        if let Ok(decoded) = bs58::decode(candidate).into_vec() {
            if decoded.len() == 32 {
                return Some(candidate.to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINT: &str = "4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T";

    #[test]
    fn test_extracts_mint_from_failure_message() {
        let message = format!(
            "payment failed: no associated token account found for mint {MINT} (owner 9xQe...)"
        );
        assert_eq!(extract_missing_ata_mint(&message), Some(MINT.to_string()));
    }

    #[test]
    fn test_extracts_mint_with_trailing_punctuation() {
        let message = format!("missing token account for mint {MINT}.");
        assert_eq!(extract_missing_ata_mint(&message), Some(MINT.to_string()));
    }

    #[test]
    fn test_ignores_messages_without_account_marker() {
        let message = format!("transfer rejected for mint {MINT}");
        assert_eq!(extract_missing_ata_mint(&message), None);
    }

    #[test]
    fn test_ignores_non_base58_candidate() {
        let message = "no associated token account for mint not-an-address";
        assert_eq!(extract_missing_ata_mint(message), None);
    }

    #[test]
    fn test_ignores_wrong_length_candidate() {
        // "abc" is valid base58 but far from 32 bytes
        let message = "no associated token account for mint abc";
        assert_eq!(extract_missing_ata_mint(message), None);
    }
}
