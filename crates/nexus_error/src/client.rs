//! Client error type combining transport and decode failures.

use crate::{DecodeError, RetryableError, TransportError};

/// Client-level error variants.
#[derive(Debug, Clone, derive_more::From)]
pub enum ClientErrorKind {
    /// Transport failure persisting past the retry budget
    Transport(TransportError),
    /// Response body was not valid JSON
    Decode(DecodeError),
}

impl std::fmt::Display for ClientErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientErrorKind::Transport(e) => write!(f, "{}", e),
            ClientErrorKind::Decode(e) => write!(f, "{}", e),
        }
    }
}

/// Dispatcher error with kind discrimination.
///
/// # Examples
///
/// ```
/// use nexus_error::{ClientError, ClientErrorKind, DecodeError, RetryableError};
///
/// let err = ClientError::from(DecodeError::new("expected value at line 1"));
/// assert!(matches!(err.kind(), ClientErrorKind::Decode(_)));
/// assert!(!err.is_retryable());
/// ```
#[derive(Debug, Clone)]
pub struct ClientError(Box<ClientErrorKind>);

impl ClientError {
    /// Create a new error from a kind.
    pub fn new(kind: ClientErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ClientErrorKind {
        &self.0
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Client Error: {}", self.0)
    }
}

impl std::error::Error for ClientError {}

impl<T> From<T> for ClientError
where
    T: Into<ClientErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

impl RetryableError for ClientError {
    fn is_retryable(&self) -> bool {
        match self.kind() {
            ClientErrorKind::Transport(e) => e.is_retryable(),
            ClientErrorKind::Decode(_) => false,
        }
    }
}

/// Result type for dispatcher operations.
pub type ClientResult<T> = std::result::Result<T, ClientError>;
