//! Wire-format payload for the completion endpoint.

use nexus_core::GenerationRequest;
use serde::Serialize;

/// JSON body sent to the endpoint: `{prompt, max_tokens, temperature}`.
#[derive(Debug, Clone, Serialize, derive_getters::Getters)]
pub struct GenerationPayload {
    /// The text prompt to complete
    prompt: String,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Sampling temperature
    temperature: f32,
}

impl From<&GenerationRequest> for GenerationPayload {
    fn from(req: &GenerationRequest) -> Self {
        Self {
            prompt: req.prompt().clone(),
            max_tokens: *req.max_tokens(),
            temperature: *req.temperature(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_wire_format() {
        let request = GenerationRequest::builder()
            .prompt("hello".to_string())
            .max_tokens(100u32)
            .temperature(0.5f32)
            .build()
            .expect("Valid request");

        let payload = GenerationPayload::from(&request);
        let body = serde_json::to_value(&payload).expect("Serializable payload");

        assert_eq!(
            body,
            serde_json::json!({
                "prompt": "hello",
                "max_tokens": 100,
                "temperature": 0.5,
            })
        );
    }
}
