use thiserror::Error;

/// Errors surfaced by the reporter.
#[derive(Error, Debug)]
pub enum MetricsinkError {
    /// Invalid or rejected configuration, detected at construction time.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The destination store rejected or could not accept a document.
    #[error("Sink error: {0}")]
    Sink(String),

    /// A document could not be serialized to its wire form.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A value serialized to an unexpected wire shape.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Underlying IO failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The reporter's background thread is already running.
    #[error("Reporter already running")]
    AlreadyRunning,
}

/// Result type alias for metricsink operations.
pub type Result<T> = std::result::Result<T, MetricsinkError>;

impl MetricsinkError {
    /// Creates a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a new sink error
    pub fn sink<S: Into<String>>(msg: S) -> Self {
        Self::Sink(msg.into())
    }

    /// Returns the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Sink(_) => "sink",
            Self::Serialization(_) | Self::SerializationError(_) => "serialization",
            Self::Io(_) => "io",
            Self::AlreadyRunning => "lifecycle",
        }
    }
}
