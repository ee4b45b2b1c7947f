//! Live round-trip test against the configured completion endpoint.
//!
//! Requires NEXUS_API_KEY (and optionally NEXUS_API_URL) in the environment
//! or a .env file.
//!
//! Run with: cargo test --package nexus_client --features api

use nexus_client::{NexusClient, NexusConfig, extract_display_text};
use nexus_core::GenerationRequest;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_generate_round_trip() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = NexusConfig::from_env()?;
    let client = NexusClient::from_config(&config);

    let request = GenerationRequest::builder()
        .prompt("Say 'test' and nothing else.".to_string())
        .max_tokens(50u32)
        .temperature(0.0f32)
        .build()?;

    let raw = client.generate(&request).await?;
    let text = extract_display_text(&raw);

    assert!(!text.is_empty());
    println!("Response: {}", text);
    Ok(())
}
