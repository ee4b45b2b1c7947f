//! Response decode error types.

/// JSON decode error with source location.
///
/// Raised when a transport call succeeds but the body is not valid JSON.
/// Never retried.
#[derive(Debug, Clone)]
pub struct DecodeError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl DecodeError {
    /// Create a new DecodeError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Decode Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for DecodeError {}
