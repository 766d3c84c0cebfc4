/*
[INPUT]:  Payment transport wiring and a signal request
[OUTPUT]: Paid signal analysis with consensus
[POS]:    Examples - paid signal flow demonstration
[UPDATE]: When payment wiring or the signal endpoint changes
*/

use std::sync::Arc;

use sigil_adapter::*;
use solana_keypair::Keypair;

/// Example: paid signal request through a funded payment transport
///
/// 1. Create and authenticate the client
/// 2. Wrap a payment-capable transport so a missing associated token
///    account is provisioned automatically
/// 3. Request a signal analysis and print the consensus
#[tokio::main]
async fn main() {
    println!("=== Sigil Paid Signal Example ===\n");

    let base_url =
        std::env::var("SIGIL_BASE_URL").unwrap_or_else(|_| "https://api.sigil.trade".to_string());
    let rpc_url = std::env::var("SOLANA_RPC_URL")
        .unwrap_or_else(|_| "https://api.mainnet-beta.solana.com".to_string());

    let client = match SigilClient::new(&base_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let secret_key = match std::env::var("SIGIL_SECRET_KEY") {
        Ok(key) => key,
        Err(_) => {
            println!("Set SIGIL_SECRET_KEY to run this example. Exiting.");
            return;
        }
    };

    // The payer funds the associated token account when provisioning runs;
    // SIGIL_PAYER_KEY is a base58-encoded 64-byte keypair.
    let payer = match std::env::var("SIGIL_PAYER_KEY") {
        Ok(key) => Keypair::from_base58_string(&key),
        Err(_) => {
            println!("Set SIGIL_PAYER_KEY to run this example. Exiting.");
            return;
        }
    };

    if let Err(e) = client.authenticate_with_secret_key(secret_key).await {
        eprintln!("Authentication failed: {}", e);
        return;
    }
    println!("✓ Authenticated");

    // In production the inner transport completes the x402 payment flow;
    // the plain transport here just demonstrates the wiring.
    let inner: Arc<dyn Transport> = match ReqwestTransport::new() {
        Ok(t) => Arc::new(t),
        Err(e) => {
            eprintln!("Failed to build transport: {}", e);
            return;
        }
    };
    client.set_payment_client(Arc::new(FundedPaymentTransport::with_rpc(
        inner, &rpc_url, payer,
    )));
    println!("✓ Payment transport configured");

    let request = SignalRequest::new("SOL", "4h")
        .with_metadata(serde_json::json!({"source": "example"}));
    match client.request_signal(request).await {
        Ok(signal) => println!("✓ Consensus: {}", signal.consensus),
        Err(e) => eprintln!("Signal request failed: {}", e),
    }
}
