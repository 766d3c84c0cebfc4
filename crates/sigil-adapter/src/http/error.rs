/*
[INPUT]:  Error sources (HTTP, API status codes, crypto input, payment)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Sigil adapter
#[derive(Error, Debug)]
pub enum SigilError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error (bad setup, no payment client)
    #[error("Configuration error: {0}")]
    Config(String),

    /// No session token is stored; authenticate first
    #[error("Not authenticated: no session token stored")]
    NotAuthenticated,

    /// Challenge fetch returned an error status
    #[error("Challenge fetch failed (status {status}): {message}")]
    ChallengeFetch { status: u16, message: String },

    /// Token exchange was rejected by the server
    #[error("Token exchange failed (status {status}): {message}")]
    Exchange { status: u16, message: String },

    /// Session token was rejected; the stored token has been cleared
    #[error("Session expired, please re-authenticate")]
    AuthExpired,

    /// Paid call returned 402: the payment flow did not complete
    #[error("Payment required (status 402): {body}")]
    PaymentRequired { body: String },

    /// API returned a non-auth, non-payment error status
    #[error("Request failed (status {status}): {body}")]
    RequestFailed { status: u16, body: String },

    /// Secret key bytes were neither a 32-byte seed nor a 64-byte secret key
    #[error("Invalid secret key length: expected 32 or 64 bytes, got {len}")]
    SecretKeyFormat { len: usize },

    /// Response body was not valid JSON where JSON was expected
    #[error("Invalid JSON response: {message}; body: {body}")]
    Json { message: String, body: String },

    /// Payment transport or account provisioning failed
    #[error("Payment transport error: {0}")]
    Payment(String),

    /// Serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl SigilError {
    /// Check if the error indicates an authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            SigilError::NotAuthenticated
                | SigilError::AuthExpired
                | SigilError::ChallengeFetch { .. }
                | SigilError::Exchange { .. }
        )
    }

    /// Check if the error came from the payment path
    pub fn is_payment_error(&self) -> bool {
        matches!(
            self,
            SigilError::PaymentRequired { .. } | SigilError::Payment(_)
        )
    }
}

/// Result type alias for Sigil operations
pub type Result<T> = std::result::Result<T, SigilError>;
