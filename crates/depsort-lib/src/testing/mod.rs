//! Graph fixtures for tests
//!
//! Lets tests describe a graph as a list of `(dependent, dependency)` pairs
//! and assert on relative positions instead of exact sequences.

use crate::graph::{DependencyGraph, GraphBuilder, GraphError, Module};
use crate::primitives::TraversalStrategy;

/// Graph built from an edge list; modules are registered in order of first
/// appearance, edges in list order.
#[derive(Debug)]
pub struct GraphFixture {
    pub graph: DependencyGraph,
}

impl GraphFixture {
    pub fn from_edges(edges: &[(&str, &str)]) -> Result<Self, GraphError> {
        Self::with_modules(&[], edges, TraversalStrategy::default())
    }

    /// Register `modules` first (in order), then any module an edge mentions
    pub fn with_modules(
        modules: &[&str],
        edges: &[(&str, &str)],
        strategy: TraversalStrategy,
    ) -> Result<Self, GraphError> {
        let mut builder = GraphBuilder::with_traversal(strategy);
        let names = modules
            .iter()
            .copied()
            .chain(edges.iter().flat_map(|&(from, to)| [from, to]));
        for name in names {
            if !builder.contains(name) {
                builder.add_module(name)?;
            }
        }
        for &(from, to) in edges {
            builder.add_dependency_by_name(from, to)?;
        }

        Ok(Self {
            graph: builder.build(),
        })
    }

    /// Panics if `name` was never registered
    pub fn module(&self, name: &str) -> Module {
        match self.graph.get(name) {
            Some(module) => module.clone(),
            None => panic!("fixture has no module named {name}"),
        }
    }

    /// Closure of `name` as plain names
    pub fn closure_names(&self, name: &str) -> Result<Vec<String>, GraphError> {
        Ok(names(&self.graph.closure(&self.module(name))?))
    }
}

pub fn names(modules: &[Module]) -> Vec<String> {
    modules.iter().map(|m| m.name().to_string()).collect()
}

/// Index of `name` in `order`; panics when absent
pub fn position_of(order: &[Module], name: &str) -> usize {
    match order.iter().position(|m| m.name() == name) {
        Some(index) => index,
        None => panic!("{name} missing from {:?}", names(order)),
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
