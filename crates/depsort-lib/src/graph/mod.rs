//! # Graph Module
//!
//! Module dependency graph and the ordered transitive closure computed over it.
//!
//! ## Modules
//!
//! - [`module`] - `Module` identity type
//! - [`builder`] - Append-only construction phase
//! - [`dependency_graph`] - Frozen graph, closure and schedule queries
//! - [`traversal`] - Post-order walker with cycle detection
//!
//! Construction and querying are split by type: a [`GraphBuilder`] only grows,
//! and [`GraphBuilder::build`] hands back a [`DependencyGraph`] that can no
//! longer be mutated and is safe to share across threads.

use std::fmt;
use thiserror::Error;

pub mod builder;
pub mod dependency_graph;
pub mod module;
pub mod traversal;

pub use builder::GraphBuilder;
pub use dependency_graph::DependencyGraph;
pub use module::Module;

/// Errors raised while building or querying a dependency graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Circular dependency detected: {cycle}")]
    CircularDependency { cycle: Cycle },

    #[error("Duplicate module: {name}")]
    DuplicateModule { name: String },

    #[error("Module not registered in this graph: {name}")]
    ModuleNotFound { name: String },

    #[error("Invalid module name {name:?}: {reason}")]
    InvalidModuleName { name: String, reason: String },
}

/// A dependency loop, as walked: `path[0]` depends on `path[1]`, and so on,
/// with the last entry equal to the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    path: Vec<Module>,
}

impl Cycle {
    pub(crate) fn new(path: Vec<Module>) -> Self {
        debug_assert!(path.len() >= 2);
        debug_assert_eq!(path.first(), path.last());
        Self { path }
    }

    /// Modules along the loop; the first one is repeated at the end
    pub fn path(&self) -> &[Module] {
        &self.path
    }

    /// Distinct modules taking part in the loop
    pub fn modules(&self) -> &[Module] {
        &self.path[..self.path.len() - 1]
    }

    /// The edge that closed the loop, as `(dependent, dependency)`
    pub fn closing_edge(&self) -> (&Module, &Module) {
        let n = self.path.len();
        (&self.path[n - 2], &self.path[n - 1])
    }

    /// Whether `name` takes part in the loop
    pub fn contains(&self, name: &str) -> bool {
        self.modules().iter().any(|m| m.name() == name)
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, module) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            f.write_str(module.name())?;
        }
        Ok(())
    }
}

impl GraphError {
    /// The cycle carried by a `CircularDependency` error
    pub fn cycle(&self) -> Option<&Cycle> {
        match self {
            GraphError::CircularDependency { cycle } => Some(cycle),
            _ => None,
        }
    }
}
