//! Exhaustive small-graph generation for property tests
//!
//! Every DAG over `n` nodes can be written with edges pointing from a higher
//! index to a lower one, so walking all subsets of those pairs covers every
//! acyclic shape up to relabelling. Declaration order is varied separately by
//! reversing the edge list.

use anyhow::Result;
use depsort_lib::testing::GraphFixture;
use depsort_lib::TraversalStrategy;
use std::collections::BTreeSet;

/// One generated graph: node `i` is named `m{i}`
#[derive(Debug, Clone)]
pub struct DagSpec {
    pub nodes: usize,
    /// `(dependent, dependency)` pairs in declaration order
    pub edges: Vec<(usize, usize)>,
}

impl DagSpec {
    pub fn name(index: usize) -> String {
        format!("m{index}")
    }

    /// Indices reachable from `from` through one or more edges
    pub fn reachable(&self, from: usize) -> BTreeSet<usize> {
        let mut seen = BTreeSet::new();
        let mut stack = vec![from];
        while let Some(node) = stack.pop() {
            for &(a, b) in &self.edges {
                if a == node && seen.insert(b) {
                    stack.push(b);
                }
            }
        }
        seen
    }

    /// Same edges, each module's dependencies declared in reverse
    pub fn reversed_declarations(&self) -> Self {
        let mut edges = self.edges.clone();
        edges.reverse();
        Self {
            nodes: self.nodes,
            edges,
        }
    }

    pub fn fixture(&self, strategy: TraversalStrategy) -> Result<GraphFixture> {
        let modules: Vec<String> = (0..self.nodes).map(Self::name).collect();
        let module_refs: Vec<&str> = modules.iter().map(String::as_str).collect();
        let edge_names: Vec<(String, String)> = self
            .edges
            .iter()
            .map(|&(a, b)| (Self::name(a), Self::name(b)))
            .collect();
        let edge_refs: Vec<(&str, &str)> = edge_names
            .iter()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();

        Ok(GraphFixture::with_modules(
            &module_refs,
            &edge_refs,
            strategy,
        )?)
    }
}

/// Every DAG on `nodes` nodes whose edges point from higher to lower index
pub fn all_dags(nodes: usize) -> impl Iterator<Item = DagSpec> {
    let pairs: Vec<(usize, usize)> = (0..nodes)
        .flat_map(|a| (0..a).map(move |b| (a, b)))
        .collect();
    let total = 1u64 << pairs.len();

    (0..total).map(move |mask| DagSpec {
        nodes,
        edges: pairs
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, &pair)| pair)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dag_counts() {
        assert_eq!(all_dags(1).count(), 1);
        assert_eq!(all_dags(3).count(), 8);
        assert_eq!(all_dags(4).count(), 64);
    }

    #[test]
    fn test_reachable_follows_chains() {
        let spec = DagSpec {
            nodes: 4,
            edges: vec![(3, 2), (2, 0), (1, 0)],
        };
        assert_eq!(spec.reachable(3), BTreeSet::from([2, 0]));
        assert!(spec.reachable(0).is_empty());
    }
}
