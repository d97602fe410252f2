//! depsort primitives - shared enums, configuration carriers and errors
//!
//! Everything the config, logger and graph layers agree on lives here, so
//! none of them has to depend on another just to name a setting.

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

// Shared macros and patterns
mod shared;
use shared::impl_value_enum_parsing;

/// Available log output streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(try_from = "String")]
pub enum LogOutput {
    /// STDERR
    #[value(alias = "err")]
    Stderr,
    /// STDOUT
    #[value(alias = "out")]
    Stdout,
}

/// Log levels for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

/// Output formats for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum LogFormat {
    /// TEXT
    /// alias: text, txt, plain
    Text,

    /// JSON
    /// alias: json
    Json,

    /// YAML
    /// alias: yaml, yml, pretty
    Yaml,
}

/// Whether ANSI colors should be used for log output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(try_from = "String")]
pub enum ColorIntent {
    /// Ask the terminal
    Auto,
    #[value(alias = "force", alias = "on")]
    Always,
    #[value(alias = "off", alias = "none")]
    Never,
}

/// How the closure walker descends into dependencies.
///
/// Both strategies visit children in declared order and produce identical
/// closures; `Iterative` keeps the DFS stack on the heap for very deep chains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(try_from = "String")]
pub enum TraversalStrategy {
    #[default]
    #[value(alias = "dfs", alias = "recursion")]
    Recursive,
    #[value(alias = "stack", alias = "explicit-stack")]
    Iterative,
}

// ============================================================================
// LOGGER CONFIGURATION TYPES
// ============================================================================

/// Logger configuration resolved from [`crate::config::Config`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
    /// Emit ANSI escapes (ignored for JSON)
    pub ansi: bool,
}

/// Operation name and progress attached to log events as structured fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogContext {
    pub operation: String,
    pub total_items: Option<u64>,
    pub current_item: Option<u64>,
}

impl LogContext {
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            total_items: None,
            current_item: None,
        }
    }

    pub fn with_progress(operation: &str, total: u64) -> Self {
        Self {
            operation: operation.to_string(),
            total_items: Some(total),
            current_item: None,
        }
    }

    pub fn set_progress(&mut self, current: u64) {
        self.current_item = Some(current);
    }

    /// Emit `message` at `level` with `operation`, `current` and `total` fields
    pub fn log(&self, level: LogLevel, message: &str) {
        let operation = self.operation.as_str();
        let (current, total) = (self.current_item, self.total_items);
        match level {
            LogLevel::Error => tracing::error!(operation, current, total, "{message}"),
            LogLevel::Warning => tracing::warn!(operation, current, total, "{message}"),
            LogLevel::Info => tracing::info!(operation, current, total, "{message}"),
            LogLevel::Debug => tracing::debug!(operation, current, total, "{message}"),
            LogLevel::Trace => tracing::trace!(operation, current, total, "{message}"),
        }
    }
}

// ============================================================================
// STRUCTURED ERROR TYPES
// ============================================================================

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load environment file '{file}': {source}")]
    EnvFileError {
        file: String,
        source: dotenvy::Error,
    },

    #[error("Failed to parse environment variables: {source}")]
    EnvironmentParsingFailed {
        #[from]
        source: envy::Error,
    },

    #[error("Configuration validation failed: {reason}")]
    ValidationFailed { reason: String },

    #[error("Failed to parse configuration value '{value}': {reason}")]
    ParseError { value: String, reason: String },
}

/// Logger initialization errors
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to initialize tracing subscriber: {reason}")]
    InitializationFailed { reason: String },

    #[error("Logger already initialized")]
    AlreadyInitialized,
}

impl LogLevel {
    /// Convert a 0..=4 verbosity count to a level; anything above 4 is trace
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Error,
            1 => LogLevel::Warning,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            4.. => LogLevel::Trace,
        }
    }

    /// Directive name understood by `tracing_subscriber::EnvFilter`
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warning => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl ValueEnum for LogLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Error,
            Self::Warning,
            Self::Info,
            Self::Debug,
            Self::Trace,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Error => Some(
                clap::builder::PossibleValue::new("error")
                    .alias("err")
                    .alias("fatal"),
            ),
            Self::Warning => Some(clap::builder::PossibleValue::new("warn").alias("warning")),
            Self::Info => Some(clap::builder::PossibleValue::new("info").alias("information")),
            Self::Debug => Some(clap::builder::PossibleValue::new("debug")),
            Self::Trace => Some(
                clap::builder::PossibleValue::new("trace")
                    .alias("tracing")
                    .alias("verbose"),
            ),
        }
    }
}

impl ValueEnum for LogFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Text, Self::Json, Self::Yaml]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Text => Some(
                clap::builder::PossibleValue::new("text")
                    .alias("txt")
                    .alias("plain"),
            ),
            Self::Json => Some(clap::builder::PossibleValue::new("json")),
            Self::Yaml => Some(
                clap::builder::PossibleValue::new("yaml")
                    .alias("yml")
                    .alias("pretty"),
            ),
        }
    }
}

// Generate FromStr/TryFrom<String> for all ValueEnum types
impl_value_enum_parsing!(LogLevel, "invalid log level");
impl_value_enum_parsing!(LogFormat, "invalid log format");
impl_value_enum_parsing!(LogOutput, "invalid log output stream");
impl_value_enum_parsing!(ColorIntent, "invalid color intent");
impl_value_enum_parsing!(TraversalStrategy, "invalid traversal strategy");

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
