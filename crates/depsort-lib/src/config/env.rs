//! Unprefixed color conventions (`CI`, `FORCE_COLOR`, `NO_COLOR`, `CLICOLOR`)
//!
//! [`Config::from_vars`](super::Config::from_vars) consults these only when
//! `DEPSORT_COLOR` is absent. They decide whether the log subscriber may emit
//! ANSI escapes and nothing else.

use crate::primitives::{ColorIntent, ConfigError};
use serde::Deserialize;

/// Color-related variables found in a depsort environment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorEnvironment {
    pub no_color: Option<String>,
    /// `0`/`false` turns color off, `1`..`3`/`true` forces it on
    pub force_color: Option<String>,
    pub clicolor: Option<String>,
    /// Presence alone disables color; CI logs end up in files
    pub ci: Option<String>,
}

impl ColorEnvironment {
    /// Read the conventions from the running process
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars).map_err(|e| ConfigError::EnvironmentParsingFailed { source: e })
    }

    /// The intent these variables impose, if any.
    ///
    /// `CI` outranks `FORCE_COLOR`, which outranks `NO_COLOR` and `CLICOLOR=0`.
    pub fn forced_intent(&self) -> Option<ColorIntent> {
        if self.ci.is_some() {
            return Some(ColorIntent::Never);
        }

        match self.force_color.as_deref() {
            Some("0" | "false") => return Some(ColorIntent::Never),
            Some("1" | "2" | "3" | "true") => return Some(ColorIntent::Always),
            _ => {}
        }

        let no_color = self.no_color.as_deref().is_some_and(|v| !v.is_empty());
        let clicolor_off = self.clicolor.as_deref() == Some("0");
        (no_color || clicolor_off).then_some(ColorIntent::Never)
    }

    /// Color intent for the logger given the value from depsort's own config
    pub fn resolve(&self, configured: ColorIntent) -> ColorIntent {
        self.forced_intent().unwrap_or(configured)
    }
}

#[cfg(test)]
mod tests {
    include!("env.test.rs");
}
