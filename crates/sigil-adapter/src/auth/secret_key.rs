/*
[INPUT]:  Secret key material in one of several encodings
[OUTPUT]: Normalized local Ed25519 signer
[POS]:    Auth layer - secret key input normalization
[UPDATE]: When accepted key encodings change
*/

use solana_keypair::Keypair;

use crate::auth::Ed25519Signer;
use crate::http::{Result, SigilError};

/// Secret key material accepted by `authenticate_with_secret_key`.
///
/// A base58 string is decoded to raw bytes; raw bytes are used as-is; a
/// structured keypair contributes its 64 secret-key bytes. After
/// normalization the byte length must be exactly 32 (a signing seed) or 64
/// (a full secret key).
#[derive(Debug)]
pub enum SecretKeyInput {
    Base58(String),
    Bytes(Vec<u8>),
    Keypair(Keypair),
}

impl SecretKeyInput {
    /// Normalize into a local Ed25519 signer with one exhaustive dispatch.
    ///
    /// Any decoded length other than 32 or 64 bytes is a fatal input error;
    /// no partial recovery is attempted and the network is never contacted.
    pub fn into_signer(self) -> Result<Ed25519Signer> {
        let bytes = match self {
            SecretKeyInput::Keypair(keypair) => keypair.to_bytes().to_vec(),
            SecretKeyInput::Base58(encoded) => bs58::decode(encoded.trim())
                .into_vec()
                .map_err(|e| SigilError::Config(format!("Invalid base58 secret key: {e}")))?,
            SecretKeyInput::Bytes(bytes) => bytes,
        };

        match bytes.len() {
            32 => {
                let mut seed = [0u8; 32];
                seed.copy_from_slice(&bytes);
                Ok(Ed25519Signer::from_seed(&seed))
            }
            64 => {
                let mut secret = [0u8; 64];
                secret.copy_from_slice(&bytes);
                Ed25519Signer::from_keypair_bytes(&secret)
            }
            len => Err(SigilError::SecretKeyFormat { len }),
        }
    }
}

impl From<&str> for SecretKeyInput {
    fn from(encoded: &str) -> Self {
        SecretKeyInput::Base58(encoded.to_string())
    }
}

impl From<String> for SecretKeyInput {
    fn from(encoded: String) -> Self {
        SecretKeyInput::Base58(encoded)
    }
}

impl From<Vec<u8>> for SecretKeyInput {
    fn from(bytes: Vec<u8>) -> Self {
        SecretKeyInput::Bytes(bytes)
    }
}

impl From<&[u8]> for SecretKeyInput {
    fn from(bytes: &[u8]) -> Self {
        SecretKeyInput::Bytes(bytes.to_vec())
    }
}

impl From<[u8; 32]> for SecretKeyInput {
    fn from(seed: [u8; 32]) -> Self {
        SecretKeyInput::Bytes(seed.to_vec())
    }
}

impl From<[u8; 64]> for SecretKeyInput {
    fn from(secret: [u8; 64]) -> Self {
        SecretKeyInput::Bytes(secret.to_vec())
    }
}

impl From<Keypair> for SecretKeyInput {
    fn from(keypair: Keypair) -> Self {
        SecretKeyInput::Keypair(keypair)
    }
}
