/*
[INPUT]:  Message bytes and secret key material
[OUTPUT]: Ed25519 detached signatures and base58-encoded public keys
[POS]:    Auth layer - local cryptographic signing
[UPDATE]: When changing signing algorithm or key format
*/

use async_trait::async_trait;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier};
use rand::rngs::OsRng;

use crate::auth::WalletSigner;
use crate::http::{Result, SigilError};

/// Ed25519 signer for local challenge signing
#[derive(Debug)]
pub struct Ed25519Signer {
    signing_key: SigningKey,
    address: String,
}

impl Ed25519Signer {
    fn from_signing_key(signing_key: SigningKey) -> Self {
        let address = bs58::encode(signing_key.verifying_key().as_bytes()).into_string();
        Self {
            signing_key,
            address,
        }
    }

    /// Generate a new random keypair
    pub fn generate() -> Self {
        Self::from_signing_key(SigningKey::generate(&mut OsRng))
    }

    /// Create a signer from a 32-byte signing seed
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self::from_signing_key(SigningKey::from_bytes(seed))
    }

    /// Create a signer from a full 64-byte secret key (seed + public key).
    ///
    /// Fails when the embedded public key does not match the seed.
    pub fn from_keypair_bytes(bytes: &[u8; 64]) -> Result<Self> {
        let signing_key = SigningKey::from_keypair_bytes(bytes)
            .map_err(|e| SigilError::Config(format!("Invalid 64-byte secret key: {e}")))?;
        Ok(Self::from_signing_key(signing_key))
    }

    /// Sign a message and return the detached signature
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.signing_key.sign(message)
    }

    /// Get the public key in base58 encoding (the wallet address)
    pub fn public_key_base58(&self) -> &str {
        &self.address
    }

    /// Get the raw public key bytes
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Verify a signature against a message
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.signing_key
            .verifying_key()
            .verify(message, signature)
            .is_ok()
    }
}

#[async_trait]
impl WalletSigner for Ed25519Signer {
    fn address(&self) -> &str {
        &self.address
    }

    async fn sign_message(&self, message: &[u8]) -> Result<Vec<u8>> {
        Ok(self.sign(message).to_bytes().to_vec())
    }
}
