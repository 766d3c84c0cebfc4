/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod history;
pub mod signal;
pub mod transport;

pub use client::{ClientConfig, SigilClient};
pub use error::{Result, SigilError};
pub use transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};
