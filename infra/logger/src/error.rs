use std::borrow::Cow;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during logger initialization.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// Failure when configuring the rolling file appender (e.g., invalid path).
    #[error("rolling file appender error: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    /// Occurs if a global tracing subscriber has already been initialized in
    /// the current process.
    #[error("tracing subscriber error: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),

    /// The log directory could not be created.
    #[error("failed to create log directory {path}: {source}")]
    LogDirectory { source: std::io::Error, path: PathBuf },

    /// Invalid configuration supplied to the logger builder.
    #[error("invalid logger configuration: {message}")]
    InvalidConfiguration { message: Cow<'static, str> },
}
