//! Transport error types and retry classification.

/// Transport-level error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransportErrorKind {
    /// Connection could not be established or was dropped mid-request
    Connection(String),
    /// Request exceeded the per-attempt timeout
    Timeout(String),
    /// Endpoint answered with a non-2xx status
    Http {
        /// HTTP status code
        status_code: u16,
        /// Response body or status text
        message: String,
    },
}

impl std::fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportErrorKind::Connection(msg) => write!(f, "Connection failed: {}", msg),
            TransportErrorKind::Timeout(msg) => write!(f, "Request timed out: {}", msg),
            TransportErrorKind::Http {
                status_code,
                message,
            } => write!(f, "HTTP {} error: {}", status_code, message),
        }
    }
}

/// Transport error with source location tracking.
///
/// # Examples
///
/// ```
/// use nexus_error::{RetryableError, TransportError, TransportErrorKind};
///
/// let err = TransportError::new(TransportErrorKind::Http {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// });
///
/// assert!(err.is_retryable());
/// assert!(format!("{}", err).contains("503"));
/// ```
#[derive(Debug, Clone)]
pub struct TransportError {
    /// The kind of error that occurred
    pub kind: TransportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TransportError {
    /// Create a new TransportError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Transport Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for TransportError {}

/// Trait for errors that support retry logic.
///
/// Transient errors should return true from [`is_retryable`](Self::is_retryable)
/// so the dispatcher re-sends the request after a backoff; permanent errors
/// return false and surface immediately.
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for TransportError {
    /// Every transport failure (connection, timeout, non-2xx status) is
    /// transient from the dispatcher's point of view.
    fn is_retryable(&self) -> bool {
        true
    }
}
