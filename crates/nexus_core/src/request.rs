//! Generation request type and parameter bounds.

use serde::{Deserialize, Serialize};

/// Lowest accepted `max_tokens` value.
pub const MAX_TOKENS_FLOOR: u32 = 50;
/// Highest accepted `max_tokens` value.
pub const MAX_TOKENS_CEILING: u32 = 1000;
/// Lowest accepted sampling temperature.
pub const TEMPERATURE_FLOOR: f32 = 0.0;
/// Highest accepted sampling temperature.
pub const TEMPERATURE_CEILING: f32 = 1.0;

/// A single text generation request.
///
/// Immutable once built; construct a fresh one per call. The builder
/// rejects out-of-range parameters.
///
/// # Examples
///
/// ```
/// use nexus_core::GenerationRequest;
///
/// let request = GenerationRequest::builder()
///     .prompt("Write a friendly greeting in Hindi".to_string())
///     .max_tokens(200u32)
///     .temperature(0.2f32)
///     .build()
///     .expect("Valid request");
///
/// assert_eq!(*request.max_tokens(), 200);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct GenerationRequest {
    /// The text prompt to complete
    prompt: String,
    /// Maximum tokens to generate (50-1000)
    #[builder(default = "200")]
    max_tokens: u32,
    /// Sampling temperature (0.0-1.0)
    #[builder(default = "0.2")]
    temperature: f32,
}

impl GenerationRequest {
    /// Returns a builder for constructing a GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}

impl GenerationRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(max_tokens) = self.max_tokens
            && !(MAX_TOKENS_FLOOR..=MAX_TOKENS_CEILING).contains(&max_tokens)
        {
            return Err(format!(
                "max_tokens must be between {} and {}, got {}",
                MAX_TOKENS_FLOOR, MAX_TOKENS_CEILING, max_tokens
            ));
        }

        if let Some(temperature) = self.temperature
            && !(TEMPERATURE_FLOOR..=TEMPERATURE_CEILING).contains(&temperature)
        {
            return Err(format!(
                "temperature must be between {} and {}, got {}",
                TEMPERATURE_FLOOR, TEMPERATURE_CEILING, temperature
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = GenerationRequest::builder()
            .prompt("hello".to_string())
            .build()
            .expect("Valid request");

        assert_eq!(*request.max_tokens(), 200);
        assert_eq!(*request.temperature(), 0.2);
    }

    #[test]
    fn test_max_tokens_out_of_range() {
        let too_low = GenerationRequest::builder()
            .prompt("hello".to_string())
            .max_tokens(10u32)
            .build();
        assert!(too_low.is_err());

        let too_high = GenerationRequest::builder()
            .prompt("hello".to_string())
            .max_tokens(5000u32)
            .build();
        assert!(too_high.is_err());
    }

    #[test]
    fn test_temperature_out_of_range() {
        let result = GenerationRequest::builder()
            .prompt("hello".to_string())
            .temperature(1.5f32)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        for (max_tokens, temperature) in [(MAX_TOKENS_FLOOR, 0.0), (MAX_TOKENS_CEILING, 1.0)] {
            let request = GenerationRequest::builder()
                .prompt("hello".to_string())
                .max_tokens(max_tokens)
                .temperature(temperature)
                .build();
            assert!(request.is_ok());
        }
    }
}
