/*
[INPUT]:  Secret key material and the Sigil API base URL
[OUTPUT]: Authenticated session and recent signal history
[POS]:    Examples - authentication and history walkthrough
[UPDATE]: When auth flow or history parameters change
*/

use sigil_adapter::*;

/// Example: secret-key authentication + history
///
/// 1. Create the client
/// 2. Authenticate with a base58 secret key (SIGIL_SECRET_KEY)
/// 3. Fetch the first page of history
#[tokio::main]
async fn main() {
    println!("=== Sigil Authentication Example ===\n");

    let base_url =
        std::env::var("SIGIL_BASE_URL").unwrap_or_else(|_| "https://api.sigil.trade".to_string());

    let client = match SigilClient::new(&base_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created for {}", base_url);

    let secret_key = match std::env::var("SIGIL_SECRET_KEY") {
        Ok(key) => key,
        Err(_) => {
            println!("\nSet SIGIL_SECRET_KEY to a base58 32-byte seed or 64-byte secret key");
            println!("to run the full flow. Exiting.");
            return;
        }
    };

    let session = match client.authenticate_with_secret_key(secret_key).await {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Authentication failed: {}", e);
            return;
        }
    };
    println!("✓ Authenticated as {}", session.wallet);

    let query = HistoryQuery {
        all: false,
        limit: Some(HistoryLimit::Count(10)),
        page: Some(1),
    };
    match client.get_history(query).await {
        Ok(result) => {
            println!("✓ {} history entries", result.history.len());
            match result.pagination {
                Some(pagination) => println!("  pagination: {:?}", pagination),
                None => println!("  no pagination metadata"),
            }
        }
        Err(e) => eprintln!("History fetch failed: {}", e),
    }
}
