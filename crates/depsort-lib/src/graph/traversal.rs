//! Post-order walker with three-state cycle detection
//!
//! The walker only sees adjacency lists (`deps[node]`, in declared order); it
//! knows nothing about names. Every node moves through
//! unvisited → in progress → finished exactly once per walker. Reaching a node
//! that is still in progress means the current DFS path loops back on itself.
//!
//! The recursive and iterative visits push to `post_order` in the same order,
//! so callers can pick either without changing results.

use crate::primitives::TraversalStrategy;
use petgraph::graph::NodeIndex;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Finished,
}

/// Nodes along a loop, first node repeated at the end
pub(crate) type CyclePath = Vec<NodeIndex>;

pub(crate) struct Walker<'g> {
    deps: &'g [Box<[NodeIndex]>],
    marks: Vec<Mark>,
    /// Current DFS path, pinned roots included
    path: Vec<NodeIndex>,
    post_order: Vec<NodeIndex>,
}

impl<'g> Walker<'g> {
    pub(crate) fn new(deps: &'g [Box<[NodeIndex]>]) -> Self {
        Self {
            deps,
            marks: vec![Mark::Unvisited; deps.len()],
            path: Vec::new(),
            post_order: Vec::new(),
        }
    }

    /// Put `root` on the path without ever finishing it.
    ///
    /// The root is then never emitted, and any edge leading back to it is
    /// reported as a cycle instead of being skipped.
    pub(crate) fn pin(&mut self, root: NodeIndex) {
        self.enter(root);
    }

    pub(crate) fn visit(
        &mut self,
        node: NodeIndex,
        strategy: TraversalStrategy,
    ) -> Result<(), CyclePath> {
        match strategy {
            TraversalStrategy::Recursive => self.visit_recursive(node),
            TraversalStrategy::Iterative => self.visit_iterative(node),
        }
    }

    /// Finished nodes, each after everything it depends on
    pub(crate) fn into_post_order(self) -> Vec<NodeIndex> {
        self.post_order
    }

    fn visit_recursive(&mut self, node: NodeIndex) -> Result<(), CyclePath> {
        if !self.should_enter(node)? {
            return Ok(());
        }

        self.enter(node);
        let deps = self.deps;
        for &child in deps[node.index()].iter() {
            self.visit_recursive(child)?;
        }
        self.leave();
        Ok(())
    }

    fn visit_iterative(&mut self, start: NodeIndex) -> Result<(), CyclePath> {
        if !self.should_enter(start)? {
            return Ok(());
        }

        self.enter(start);
        // One cursor per node this call pushed onto `path`
        let mut cursors: Vec<usize> = vec![0];
        let deps = self.deps;

        while let Some(cursor) = cursors.last_mut() {
            let Some(&node) = self.path.last() else {
                break;
            };

            match deps[node.index()].get(*cursor) {
                Some(&child) => {
                    *cursor += 1;
                    if self.should_enter(child)? {
                        self.enter(child);
                        cursors.push(0);
                    }
                }
                None => {
                    cursors.pop();
                    self.leave();
                }
            }
        }

        Ok(())
    }

    /// `Ok(false)` for finished nodes, `Err` for nodes still on the path
    fn should_enter(&self, node: NodeIndex) -> Result<bool, CyclePath> {
        match self.marks[node.index()] {
            Mark::Unvisited => Ok(true),
            Mark::Finished => Ok(false),
            Mark::InProgress => Err(self.cycle_to(node)),
        }
    }

    fn enter(&mut self, node: NodeIndex) {
        trace!(node = node.index(), depth = self.path.len(), "entering node");
        self.marks[node.index()] = Mark::InProgress;
        self.path.push(node);
    }

    fn leave(&mut self) {
        if let Some(node) = self.path.pop() {
            self.marks[node.index()] = Mark::Finished;
            self.post_order.push(node);
        }
    }

    fn cycle_to(&self, node: NodeIndex) -> CyclePath {
        let start = self
            .path
            .iter()
            .position(|&n| n == node)
            .unwrap_or_default();
        let mut cycle = self.path[start..].to_vec();
        cycle.push(node);
        cycle
    }
}

#[cfg(test)]
mod tests {
    include!("traversal.test.rs");
}
