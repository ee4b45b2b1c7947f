//! Configuration error types.

/// Configuration error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConfigErrorKind {
    /// API key not found in environment
    MissingApiKey,
    /// Environment variable held an unparseable value
    InvalidValue {
        /// Variable name
        var: String,
        /// The offending value
        value: String,
    },
}

impl std::fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigErrorKind::MissingApiKey => {
                write!(f, "NEXUS_API_KEY environment variable not set")
            }
            ConfigErrorKind::InvalidValue { var, value } => {
                write!(f, "Invalid value for {}: {}", var, value)
            }
        }
    }
}

/// Configuration error with source location tracking.
///
/// # Examples
///
/// ```
/// use nexus_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("NEXUS_API_KEY"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ConfigError {}
