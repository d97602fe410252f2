//! Module identity
//!
//! A [`Module`] is nothing more than its name. Two values with the same name
//! are the same module, wherever they were created, which is what lets the
//! graph key its registry, visited marks and results by value.

use super::GraphError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A named unit of buildable code
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Module {
    name: String,
}

impl Module {
    /// Create a module, rejecting names a build tool could not pass around
    pub fn new(name: impl Into<String>) -> Result<Self, GraphError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn validate_name(name: &str) -> Result<(), GraphError> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.chars().any(char::is_whitespace) {
        "name contains whitespace"
    } else if name.chars().any(char::is_control) {
        "name contains control characters"
    } else {
        return Ok(());
    };

    Err(GraphError::InvalidModuleName {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for Module {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

// Hash/Eq agree with `str`, so registries keyed by `Module` can be probed with `&str`
impl Borrow<str> for Module {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl TryFrom<String> for Module {
    type Error = GraphError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Module::new(name)
    }
}

impl TryFrom<&str> for Module {
    type Error = GraphError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Module::new(name)
    }
}

impl From<Module> for String {
    fn from(module: Module) -> Self {
        module.name
    }
}

#[cfg(test)]
mod tests {
    include!("module.test.rs");
}
