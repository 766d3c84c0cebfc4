/*
[INPUT]:  Mock authentication responses
[OUTPUT]: Test results for the challenge/response flow
[POS]:    Integration tests - authentication
[UPDATE]: When auth endpoints or flow changes
*/

mod common;

use common::{setup_mock_server, test_client, test_seed};
use sigil_adapter::{Ed25519Signer, MockWalletSigner, SigilError};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn challenge_mock(challenge: &str, challenge_token: &str) -> Mock {
    Mock::given(method("GET"))
        .and(path("/api/auth/challenge"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "challenge": challenge,
            "challengeToken": challenge_token,
        })))
}

#[tokio::test]
async fn test_wallet_flow_signs_challenge_bytes() {
    let server = setup_mock_server().await;
    let client = test_client(&server);

    // A local signer stands in for the wallet; the exchange body must carry
    // the base58 encoding of its detached signature over the challenge text.
    let signer = Ed25519Signer::from_seed(&test_seed());
    let expected_signature = bs58::encode(signer.sign(b"sign me").to_bytes()).into_string();

    challenge_mock("sign me", "ctoken-wallet")
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth"))
        .and(body_json(serde_json::json!({
            "wallet": signer.public_key_base58(),
            "signature": expected_signature,
            "challengeToken": "ctoken-wallet",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "wallet-session",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = assert_ok!(client.authenticate_with_wallet(&signer).await);

    assert_eq!(session.token, "wallet-session");
    assert_eq!(session.wallet, signer.public_key_base58());
    assert_eq!(
        client.token_store().get().await,
        Some("wallet-session".to_string())
    );
}

#[tokio::test]
async fn test_wallet_flow_accepts_canned_mock_signature() {
    let server = setup_mock_server().await;
    let client = test_client(&server);

    let wallet = MockWalletSigner::new("9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin", vec![1; 64]);

    challenge_mock("sign me", "ctoken-mock").mount(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/auth"))
        .and(body_json(serde_json::json!({
            "wallet": "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin",
            "signature": bs58::encode(vec![1u8; 64]).into_string(),
            "challengeToken": "ctoken-mock",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "mock-session",
        })))
        .mount(&server)
        .await;

    let session = assert_ok!(client.authenticate_with_wallet(&wallet).await);
    assert_eq!(session.token, "mock-session");
}

#[tokio::test]
async fn test_secret_key_flow_shares_exchange_path() {
    let server = setup_mock_server().await;
    let client = test_client(&server);

    let signer = Ed25519Signer::from_seed(&test_seed());
    let expected_signature = bs58::encode(signer.sign(b"sign me").to_bytes()).into_string();

    challenge_mock("sign me", "ctoken-secret").mount(&server).await;

    // Same endpoint and body shape as the wallet flow
    Mock::given(method("POST"))
        .and(path("/api/auth"))
        .and(body_json(serde_json::json!({
            "wallet": signer.public_key_base58(),
            "signature": expected_signature,
            "challengeToken": "ctoken-secret",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "secret-session",
        })))
        .mount(&server)
        .await;

    let session = assert_ok!(client.authenticate_with_secret_key(test_seed()).await);
    assert_eq!(session.token, "secret-session");
    assert_eq!(session.wallet, signer.public_key_base58());
}

#[tokio::test]
async fn test_signature_base58_roundtrip() {
    let signer = Ed25519Signer::from_seed(&test_seed());
    let signature = signer.sign(b"roundtrip payload");

    let encoded = bs58::encode(signature.to_bytes()).into_string();
    let decoded = bs58::decode(&encoded).into_vec().unwrap();

    assert_eq!(decoded, signature.to_bytes().to_vec());
}

#[tokio::test]
async fn test_secret_key_length_error_skips_network() {
    let server = setup_mock_server().await;
    let client = test_client(&server);

    challenge_mock("sign me", "ctoken-unused")
        .expect(0)
        .mount(&server)
        .await;

    let err = client
        .authenticate_with_secret_key(vec![0u8; 33])
        .await
        .unwrap_err();

    match err {
        SigilError::SecretKeyFormat { len } => assert_eq!(len, 33),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(client.token_store().get().await.is_none());
}

#[tokio::test]
async fn test_challenge_with_undecodable_body() {
    let server = setup_mock_server().await;
    let client = test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/auth/challenge"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway error</html>"))
        .mount(&server)
        .await;

    let err = client
        .authenticate_with_secret_key(test_seed())
        .await
        .unwrap_err();

    match err {
        SigilError::Json { body, .. } => assert!(body.contains("gateway error")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_exchange_generic_status_message_without_error_field() {
    let server = setup_mock_server().await;
    let client = test_client(&server);

    challenge_mock("sign me", "ctoken-err").mount(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/auth"))
        .respond_with(ResponseTemplate::new(500).set_body_string("proxy blew up"))
        .mount(&server)
        .await;

    let err = client
        .authenticate_with_secret_key(test_seed())
        .await
        .unwrap_err();

    match err {
        SigilError::Exchange { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("500"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
