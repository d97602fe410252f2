//! Configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> .env files -> env vars -> `merge_with`.

use crate::primitives::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

pub mod env;

pub use env::ColorEnvironment;

/// Prefix of every depsort environment variable
pub const ENV_PREFIX: &str = "DEPSORT_";

/// Env files read by [`Config::load`]; later files override earlier ones
pub const ENV_FILES: [&str; 2] = [".env", ".env.local"];

/// Default configuration values
pub mod defaults {
    use crate::primitives::{ColorIntent, LogFormat, LogOutput, TraversalStrategy};

    pub const LOG_LEVEL: u8 = 0; // Error-only logging by default
    pub const LOG_FORMAT: LogFormat = LogFormat::Text;
    pub const LOG_OUTPUT: LogOutput = LogOutput::Stderr;
    pub const COLOR: ColorIntent = ColorIntent::Auto;
    pub const TRAVERSAL: TraversalStrategy = TraversalStrategy::Recursive;
    pub const JOBS: usize = 2;
}

/// Default value functions for serde
mod default_fns {
    use super::defaults;
    use crate::primitives::{ColorIntent, LogFormat, LogOutput, TraversalStrategy};

    pub fn log_level() -> u8 {
        defaults::LOG_LEVEL
    }

    pub fn log_format() -> LogFormat {
        defaults::LOG_FORMAT
    }

    pub fn log_output() -> LogOutput {
        defaults::LOG_OUTPUT
    }

    pub fn color() -> ColorIntent {
        defaults::COLOR
    }

    pub fn traversal() -> TraversalStrategy {
        defaults::TRAVERSAL
    }

    pub fn jobs() -> usize {
        defaults::JOBS
    }
}

/// depsort configuration, read from `DEPSORT_*` variables
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Output format (text, json, yaml)
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[serde(default = "default_fns::color")]
    pub color: ColorIntent,

    /// Closure walker (recursive, iterative)
    #[serde(default = "default_fns::traversal")]
    pub traversal: TraversalStrategy,

    /// Worker threads for batch closure queries
    #[serde(default = "default_fns::jobs")]
    pub jobs: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
            traversal: default_fns::traversal(),
            jobs: default_fns::jobs(),
        }
    }
}

impl Config {
    /// Load config: defaults -> `.env` -> `.env.local` -> process env.
    ///
    /// Env files are read, never exported; missing files are skipped.
    pub fn load() -> Result<Self, ConfigError> {
        let mut vars: HashMap<String, String> = HashMap::new();
        for env_file in ENV_FILES {
            vars.extend(read_env_file(Path::new(env_file))?);
        }
        vars.extend(std::env::vars());

        Self::from_vars(vars)
    }

    /// Load from a single env file, ignoring the process environment
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::EnvFileError {
                file: path.display().to_string(),
                source: dotenvy::Error::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "env file not found",
                )),
            });
        }
        Self::from_vars(read_env_file(path)?)
    }

    /// Build a config from `(KEY, value)` pairs as found in an environment
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: Vec<(String, String)> = vars.into_iter().collect();

        let mut config: Config = envy::prefixed(ENV_PREFIX).from_iter(vars.iter().cloned())?;

        // An explicit DEPSORT_COLOR beats the NO_COLOR/FORCE_COLOR conventions
        let color_key = format!("{ENV_PREFIX}COLOR");
        if !vars.iter().any(|(key, _)| key.eq_ignore_ascii_case(&color_key)) {
            config.color = ColorEnvironment::from_vars(vars)?.resolve(config.color);
        }

        config.validate()?;
        Ok(config)
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        if other.log_level != defaults::LOG_LEVEL {
            self.log_level = other.log_level;
        }
        if other.log_format != defaults::LOG_FORMAT {
            self.log_format = other.log_format;
        }
        if other.log_output != defaults::LOG_OUTPUT {
            self.log_output = other.log_output;
        }
        if other.color != defaults::COLOR {
            self.color = other.color;
        }
        if other.traversal != defaults::TRAVERSAL {
            self.traversal = other.traversal;
        }
        if other.jobs != defaults::JOBS {
            self.jobs = other.jobs;
        }

        self
    }

    /// Validate the final configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jobs == 0 {
            return Err(ConfigError::ValidationFailed {
                reason: "jobs must be at least 1".to_string(),
            });
        }
        if self.log_level > 4 {
            return Err(ConfigError::ValidationFailed {
                reason: format!("log_level {} is outside 0..=4", self.log_level),
            });
        }
        Ok(())
    }

    /// Resolve the logger settings, probing the terminal when color is `auto`
    pub fn to_logger_config(&self) -> LoggerConfig {
        let ansi = match self.color {
            ColorIntent::Always => true,
            ColorIntent::Never => false,
            ColorIntent::Auto => {
                let term = match self.log_output {
                    LogOutput::Stderr => console::Term::stderr(),
                    LogOutput::Stdout => console::Term::stdout(),
                };
                term.features().colors_supported()
            }
        };

        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            ansi,
        }
    }
}

/// Read `KEY=value` pairs from an env file; a missing file yields nothing
fn read_env_file(path: &Path) -> Result<Vec<(String, String)>, ConfigError> {
    let to_config_error = |source: dotenvy::Error| ConfigError::EnvFileError {
        file: path.display().to_string(),
        source,
    };

    match dotenvy::from_path_iter(path) {
        Ok(iter) => iter
            .collect::<Result<Vec<_>, _>>()
            .map_err(to_config_error),
        Err(e) if e.not_found() => Ok(Vec::new()),
        Err(e) => Err(to_config_error(e)),
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
