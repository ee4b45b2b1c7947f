//! Core data types for the Nexus LLM client.
//!
//! This crate provides the foundation data types shared by the dispatcher
//! and the terminal front-end.

mod request;
mod response;
mod retry;

pub use request::{
    GenerationRequest, GenerationRequestBuilder, MAX_TOKENS_CEILING, MAX_TOKENS_FLOOR,
    TEMPERATURE_CEILING, TEMPERATURE_FLOOR,
};
pub use response::RawResponse;
pub use retry::RetryPolicy;
