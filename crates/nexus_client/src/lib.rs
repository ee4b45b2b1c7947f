//! Nexus request dispatcher and response normalizer.
//!
//! This crate provides the client half of the Nexus workspace: a
//! [`NexusClient`] that POSTs a [`nexus_core::GenerationRequest`] to a
//! Groq-style completion endpoint with retry-with-backoff semantics, and
//! [`extract_display_text`], which turns the untyped response payload into
//! a single display string regardless of which response dialect the
//! endpoint speaks.
//!
//! The caller composes the two linearly:
//!
//! ```no_run
//! use nexus_client::{NexusClient, NexusConfig, extract_display_text};
//! use nexus_core::GenerationRequest;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = NexusConfig::from_env()?;
//! let client = NexusClient::from_config(&config);
//!
//! let request = GenerationRequest::builder()
//!     .prompt("Write a friendly greeting in Hindi".to_string())
//!     .build()?;
//!
//! let raw = client.generate(&request).await?;
//! println!("{}", extract_display_text(&raw));
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod dto;
mod normalize;
mod retry;

pub use client::{NexusClient, REQUEST_TIMEOUT};
pub use config::{DEFAULT_API_URL, NexusConfig, NexusConfigBuilder};
pub use dto::GenerationPayload;
pub use normalize::extract_display_text;
pub use retry::post_with_retries;
