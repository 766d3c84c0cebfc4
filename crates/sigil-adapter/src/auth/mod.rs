/*
[INPUT]:  Authentication configuration and signing capabilities
[OUTPUT]: Session tokens, signed challenges, and auth errors
[POS]:    Auth layer - handles Sigil API authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod manager;
pub mod secret_key;
pub mod signer;
pub mod token;
pub mod wallet;

pub use manager::{AuthSession, Challenge};
pub use secret_key::SecretKeyInput;
pub use signer::Ed25519Signer;
pub use token::{MemoryTokenStore, TokenStore};
pub use wallet::{MockWalletSigner, WalletSigner};
