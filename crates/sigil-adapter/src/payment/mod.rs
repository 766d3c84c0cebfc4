/*
[INPUT]:  Payment-capable transports and Solana RPC access
[OUTPUT]: Self-healing paid request transport
[POS]:    Payment layer - x402 transport wrapping and account provisioning
[UPDATE]: When payment transport wiring or remediation changes
*/

pub mod adapter;
pub mod provisioner;

pub use adapter::FundedPaymentTransport;
pub use provisioner::{AtaProvisioner, RpcAtaProvisioner};
