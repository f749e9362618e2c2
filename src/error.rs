//! Error types for configuration materialization.

use thiserror::Error;

/// Errors surfaced while materializing a configuration.
///
/// A failed construction never yields a partially initialized store; the
/// caller sees either a fully tagged configuration or one of these.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A resolution-path source could not be introspected, e.g. the task
    /// execution context conceals its search path.
    #[error("resolution context unavailable: {0}")]
    ResolutionContextUnavailable(String),

    /// A mandatory resource was not found anywhere on the search path.
    #[error("required resource '{name}' not found on search path")]
    RequiredResourceMissing { name: String },

    /// A resource file was found but could not be loaded or its values
    /// could not be coerced to strings.
    #[error("failed to load resource '{name}': {source}")]
    ResourceLoad {
        name: String,
        #[source]
        source: config::ConfigError,
    },

    /// Logging setup rejected the supplied configuration.
    #[error("invalid logging configuration: {0}")]
    Logging(String),
}
