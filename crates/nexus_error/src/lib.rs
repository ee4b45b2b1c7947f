//! Error types for the Nexus LLM client.
//!
//! This crate provides the foundation error types used throughout the Nexus
//! workspace. Consumer-specific modules are feature-gated: `client` for the
//! dispatcher errors, `tui` for the terminal front-end.

#[cfg(feature = "client")]
mod client;
mod config;
#[cfg(feature = "client")]
mod decode;
#[cfg(feature = "client")]
mod transport;
#[cfg(feature = "tui")]
mod tui;

#[cfg(feature = "client")]
pub use client::{ClientError, ClientErrorKind, ClientResult};
pub use config::{ConfigError, ConfigErrorKind};
#[cfg(feature = "client")]
pub use decode::DecodeError;
#[cfg(feature = "client")]
pub use transport::{RetryableError, TransportError, TransportErrorKind};
#[cfg(feature = "tui")]
pub use tui::TuiError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum NexusErrorKind {
    /// Configuration error
    Config(ConfigError),
    /// Dispatcher error
    #[cfg(feature = "client")]
    Client(ClientError),
    /// Terminal front-end error
    #[cfg(feature = "tui")]
    Tui(TuiError),
}

impl std::fmt::Display for NexusErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NexusErrorKind::Config(e) => write!(f, "{}", e),
            #[cfg(feature = "client")]
            NexusErrorKind::Client(e) => write!(f, "{}", e),
            #[cfg(feature = "tui")]
            NexusErrorKind::Tui(e) => write!(f, "{}", e),
        }
    }
}

/// Nexus error with kind discrimination.
#[derive(Debug)]
pub struct NexusError(Box<NexusErrorKind>);

impl NexusError {
    /// Create a new error from a kind.
    pub fn new(kind: NexusErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &NexusErrorKind {
        &self.0
    }
}

impl std::fmt::Display for NexusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Nexus Error: {}", self.0)
    }
}

impl std::error::Error for NexusError {}

// Generic From implementation for any type that converts to NexusErrorKind
impl<T> From<T> for NexusError
where
    T: Into<NexusErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Nexus operations.
pub type NexusResult<T> = std::result::Result<T, NexusError>;
