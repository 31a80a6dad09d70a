//! Integration test for the full issuance flow against devnet.
//!
//! Ignored because it needs network access, a funded devnet keypair, and
//! pinning credentials. Run with:
//! ```bash
//! PAYER_KEYPAIR=payer.json cargo test --test devnet_issue -- --ignored
//! ```

use launchpad_sdk::prelude::*;
use solana_keypair::Keypair;

// A 1x1 transparent PNG, enough for the pinning backend to accept.
const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0d, 0x0a, 0x2d, 0xb4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

fn payer_from_env() -> Keypair {
    let path = std::env::var("PAYER_KEYPAIR").expect("PAYER_KEYPAIR not set");
    let bytes = std::fs::read_to_string(path).expect("keypair file unreadable");
    let bytes: Vec<u8> = serde_json::from_str(&bytes).expect("keypair file is not a JSON array");
    Keypair::try_from(bytes.as_slice()).expect("invalid keypair bytes")
}

#[tokio::test]
#[ignore]
async fn issue_token_on_devnet() {
    dotenvy::dotenv().ok();

    let config = PinningConfig::from_env().expect("pinning credentials not configured");
    let payer = payer_from_env();

    let request = IssuanceRequest::new(
        "Devnet Demo",
        "DMO",
        "issued by the launchpad-sdk integration test",
        TINY_PNG.to_vec(),
        ImageFormat::Png,
        6,
        1000,
    )
    .expect("request should validate");

    let mut launchpad = Launchpad::devnet(config);
    let result = launchpad
        .issue(request, &payer)
        .await
        .expect("issuance should succeed");

    assert_eq!(result.supplied_amount, 1_000_000_000);
    println!(
        "mint: {} holding account: {}",
        result.mint, result.holding_account
    );
}
