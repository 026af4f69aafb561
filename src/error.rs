//! Error types for the lesson runner

use thiserror::Error;

/// Main error type for running lessons
///
/// These are failures of the session itself (closed input, a token that is not
/// a number, a missing lesson). Arithmetic mistakes made by the user inside a
/// lesson are reported with `E:` lines on the transcript and are not errors.
#[derive(Debug, Error)]
pub enum LessonError {
    #[error("Unexpected end of input")]
    UnexpectedEof,

    #[error("Invalid input '{token}': expected {expected}")]
    InvalidInput {
        token: String,
        expected: &'static str,
    },

    #[error("Unknown lesson: '{0}'")]
    UnknownLesson(String),

    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        field: String,
    },

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LessonError {
    /// Create an input error for a token that failed to parse
    pub fn invalid_input(token: &str, expected: &'static str) -> Self {
        LessonError::InvalidInput {
            token: token.to_string(),
            expected,
        }
    }

    /// Whether the error was caused by what the user typed
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            LessonError::UnexpectedEof | LessonError::InvalidInput { .. }
        )
    }
}

/// Type alias for the main result type used throughout the library
pub type LessonResult<T> = Result<T, LessonError>;

/// Logging configuration and initialization
pub mod logging {
    use std::env;
    use tracing::Level;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    /// Logging output format
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum LogFormat {
        Human,
        Json,
    }

    /// Logging configuration
    ///
    /// Logs always go to stderr; stdout belongs to the lesson transcript.
    #[derive(Debug, Clone)]
    pub struct LoggingConfig {
        pub level: Level,
        pub format: LogFormat,
    }

    impl Default for LoggingConfig {
        fn default() -> Self {
            Self {
                level: Level::WARN,
                format: LogFormat::Human,
            }
        }
    }

    /// Initialize structured logging with the given configuration
    pub fn init_logging(
        config: LoggingConfig,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let env_filter = EnvFilter::builder()
            .with_default_directive(config.level.into())
            .from_env_lossy();

        let registry = tracing_subscriber::registry().with(env_filter);

        match config.format {
            LogFormat::Human => {
                let fmt_layer = fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr);
                registry.with(fmt_layer).try_init()?;
            }
            LogFormat::Json => {
                let fmt_layer = fmt::layer()
                    .json()
                    .with_target(true)
                    .with_span_events(fmt::format::FmtSpan::CLOSE)
                    .with_writer(std::io::stderr);
                registry.with(fmt_layer).try_init()?;
            }
        }

        Ok(())
    }

    /// Read `LESSONS_LOG_LEVEL` and `LESSONS_LOG_FORMAT` into a config
    pub fn config_from_env() -> LoggingConfig {
        let level = env::var("LESSONS_LOG_LEVEL")
            .ok()
            .and_then(|s| s.parse::<Level>().ok())
            .unwrap_or(Level::WARN);

        let format = match env::var("LESSONS_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Human,
        };

        LoggingConfig { level, format }
    }

    /// Initialize logging with environment-based configuration
    pub fn init_from_env() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        init_logging(config_from_env())
    }
}
