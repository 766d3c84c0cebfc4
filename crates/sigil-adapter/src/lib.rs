/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Sigil adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod payment;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    AuthSession,
    Challenge,
    Ed25519Signer,
    MemoryTokenStore,
    MockWalletSigner,
    SecretKeyInput,
    TokenStore,
    WalletSigner,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    ReqwestTransport,
    Result,
    SigilClient,
    SigilError,
    Transport,
    TransportRequest,
    TransportResponse,
};

// Re-export payment transport types
pub use payment::{AtaProvisioner, FundedPaymentTransport, RpcAtaProvisioner};

// Re-export all types
pub use types::*;
