use crate::primitives::*;
use indicatif::ProgressStyle;
use std::sync::{Mutex, OnceLock, PoisonError};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Global logger instance - ensures single initialization
static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Held from the initialized check until `GLOBAL_LOGGER` is set
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Progress bar template for batch closure spans
const PROGRESS_TEMPLATE: &str = "{span_child_prefix}{spinner} {span_name} [{bar:30}] {pos}/{len}";

/// Handle to the process-wide tracing subscriber installed by [`Logger::init`]
#[derive(Debug)]
pub struct Logger {
    config: LoggerConfig,
}

impl Logger {
    /// Install the global subscriber. Library code only emits `tracing` events;
    /// nothing is printed until the embedding program calls this once.
    pub fn init(config: LoggerConfig) -> Result<&'static Self, LoggerError> {
        let _guard = INIT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        if GLOBAL_LOGGER.get().is_some() {
            return Err(LoggerError::AlreadyInitialized);
        }

        let style = ProgressStyle::with_template(PROGRESS_TEMPLATE).map_err(|e| {
            LoggerError::InitializationFailed {
                reason: e.to_string(),
            }
        })?;
        let indicatif_layer = IndicatifLayer::new().with_progress_style(style);

        // RUST_LOG wins; otherwise depsort at the configured level
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(filter_directives(config.level)));

        let fmt_layer = match (config.output, config.format) {
            (LogOutput::Stderr, LogFormat::Text) => fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .with_ansi(config.ansi)
                .compact()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Json) => fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Yaml) => fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .with_ansi(config.ansi)
                .pretty()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Text) => fmt::layer()
                .with_writer(indicatif_layer.get_stdout_writer())
                .with_ansi(config.ansi)
                .compact()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Json) => fmt::layer()
                .with_writer(indicatif_layer.get_stdout_writer())
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Yaml) => fmt::layer()
                .with_writer(indicatif_layer.get_stdout_writer())
                .with_ansi(config.ansi)
                .pretty()
                .boxed(),
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(indicatif_layer)
            .try_init()
            .map_err(|e| match GLOBAL_LOGGER.get() {
                Some(_) => LoggerError::AlreadyInitialized,
                None => LoggerError::InitializationFailed {
                    reason: e.to_string(),
                },
            })?;

        let logger = GLOBAL_LOGGER.get_or_init(|| Logger {
            config: config.clone(),
        });

        tracing::info!(
            level = ?config.level,
            format = ?config.format,
            output = ?config.output,
            ansi = config.ansi,
            "Logger initialized"
        );

        Ok(logger)
    }

    /// Get reference to the global logger instance
    pub fn global() -> Option<&'static Self> {
        GLOBAL_LOGGER.get()
    }

    pub fn is_initialized() -> bool {
        GLOBAL_LOGGER.get().is_some()
    }

    /// Settings the subscriber was installed with
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }
}

/// `EnvFilter` directives: depsort at `level`, other crates at warn or quieter
pub fn filter_directives(level: LogLevel) -> String {
    let level_str = level.as_directive();
    let others = if level <= LogLevel::Warning {
        level_str
    } else {
        LogLevel::Warning.as_directive()
    };
    format!("depsort_lib={level_str},{others}")
}

/// Create a span for operations that should show progress bars
#[macro_export]
macro_rules! progress_span {
    ($operation:expr) => {
        tracing::info_span!("progress", operation = $operation)
    };
    ($operation:expr, total = $total:expr) => {
        tracing::info_span!("progress", operation = $operation, total = $total)
    };
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
