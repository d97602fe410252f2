//! Construction phase of a dependency graph
//!
//! Modules are registered once and edges are only ever appended. Nothing is
//! computed until [`GraphBuilder::build`] freezes the graph.

use super::{Cycle, DependencyGraph, GraphError, Module};
use crate::config::Config;
use crate::primitives::TraversalStrategy;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Append-only builder for a [`DependencyGraph`]
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Edges point from dependent to dependency; the weight is the edge's
    /// position in the dependent's declared list.
    graph: DiGraph<Module, usize>,
    node_map: HashMap<Module, NodeIndex>,
    strategy: TraversalStrategy,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder whose frozen graph answers queries with `strategy`
    pub fn with_traversal(strategy: TraversalStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_traversal(config.traversal)
    }

    /// Validate `name` and register it as a new module
    pub fn add_module(&mut self, name: impl Into<String>) -> Result<Module, GraphError> {
        let module = Module::new(name)?;
        self.register(module.clone())?;
        Ok(module)
    }

    /// Register an already constructed module
    pub fn register(&mut self, module: Module) -> Result<(), GraphError> {
        if self.node_map.contains_key(&module) {
            return Err(GraphError::DuplicateModule {
                name: module.name().to_string(),
            });
        }

        trace!(module = %module, "registering module");
        let idx = self.graph.add_node(module.clone());
        self.node_map.insert(module, idx);
        Ok(())
    }

    /// Declare that `from` depends on `to`.
    ///
    /// Re-declaring an existing edge leaves the declared order untouched.
    /// A self-edge is rejected as a one-module cycle.
    pub fn add_dependency(&mut self, from: &Module, to: &Module) -> Result<(), GraphError> {
        self.add_dependency_by_name(from.name(), to.name())
    }

    pub fn add_dependency_by_name(&mut self, from: &str, to: &str) -> Result<(), GraphError> {
        let from_idx = self.index_of(from)?;
        let to_idx = self.index_of(to)?;

        if from_idx == to_idx {
            let module = self.graph[from_idx].clone();
            debug!(module = %module, "rejecting self-dependency");
            return Err(GraphError::CircularDependency {
                cycle: Cycle::new(vec![module.clone(), module]),
            });
        }

        if self.graph.contains_edge(from_idx, to_idx) {
            trace!(from, to, "dependency already declared");
            return Ok(());
        }

        let position = self.graph.edges(from_idx).count();
        self.graph.add_edge(from_idx, to_idx, position);
        trace!(from, to, position, "dependency declared");
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    pub fn module_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Freeze the graph; no module or edge can be added afterwards
    pub fn build(self) -> DependencyGraph {
        debug!(
            modules = self.graph.node_count(),
            edges = self.graph.edge_count(),
            strategy = ?self.strategy,
            "freezing dependency graph"
        );
        DependencyGraph::from_parts(self.graph, self.node_map, self.strategy)
    }

    fn index_of(&self, name: &str) -> Result<NodeIndex, GraphError> {
        self.node_map
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::ModuleNotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    include!("builder.test.rs");
}
