/*
[INPUT]:  Challenge bytes to sign and wallet identity
[OUTPUT]: Detached signature bytes for authentication
[POS]:    Auth layer - wallet integration abstraction
[UPDATE]: When adding new wallet types or changing the signing contract
*/

use async_trait::async_trait;

use crate::http::Result;

/// Trait for wallet signing operations
///
/// Implement this for your wallet integration (Phantom, hardware wallets,
/// remote signers). The trait is async to support external signers.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// Get the wallet address (base58-encoded public key)
    fn address(&self) -> &str;

    /// Sign a message and return the detached signature bytes
    async fn sign_message(&self, message: &[u8]) -> Result<Vec<u8>>;
}

/// Mock wallet signer for testing
#[derive(Debug, Clone)]
pub struct MockWalletSigner {
    address: String,
    signature: Vec<u8>,
}

impl MockWalletSigner {
    /// Create a new mock signer with a predetermined signature
    pub fn new(address: &str, signature: Vec<u8>) -> Self {
        Self {
            address: address.to_string(),
            signature,
        }
    }
}

#[async_trait]
impl WalletSigner for MockWalletSigner {
    fn address(&self) -> &str {
        &self.address
    }

    async fn sign_message(&self, _message: &[u8]) -> Result<Vec<u8>> {
        Ok(self.signature.clone())
    }
}
