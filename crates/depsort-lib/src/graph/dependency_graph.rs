//! Frozen dependency graph with ordered closure queries
//!
//! Every query walks the edges from scratch with its own [`Walker`]; the graph
//! itself holds no per-query state, so a `&DependencyGraph` can be handed to
//! any number of threads at once.

use super::traversal::{CyclePath, Walker};
use super::{Cycle, GraphError, Module};
use crate::primitives::{LogContext, LogLevel, TraversalStrategy};
use crate::progress_span;
use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use std::thread;
use tracing::{debug, trace};
use tracing_indicatif::span_ext::IndicatifSpanExt;

/// Immutable module graph produced by [`super::GraphBuilder::build`]
#[derive(Debug)]
pub struct DependencyGraph {
    /// Directed graph: nodes = modules, edges = dependent → dependency
    graph: DiGraph<Module, usize>,
    /// Map from module name to node index for fast lookup
    node_map: HashMap<Module, NodeIndex>,
    /// Direct dependencies per node, in declared order
    deps: Vec<Box<[NodeIndex]>>,
    strategy: TraversalStrategy,
}

impl DependencyGraph {
    pub(crate) fn from_parts(
        graph: DiGraph<Module, usize>,
        node_map: HashMap<Module, NodeIndex>,
        strategy: TraversalStrategy,
    ) -> Self {
        let deps = graph
            .node_indices()
            .map(|node| {
                let mut edges: Vec<(usize, NodeIndex)> = graph
                    .edges(node)
                    .map(|edge| (*edge.weight(), edge.target()))
                    .collect();
                edges.sort_unstable_by_key(|&(position, _)| position);
                edges.into_iter().map(|(_, target)| target).collect()
            })
            .collect();

        Self {
            graph,
            node_map,
            deps,
            strategy,
        }
    }

    /// Every module reachable from `module`, each listed before the modules it
    /// depends on. `module` itself is never part of the result.
    pub fn closure(&self, module: &Module) -> Result<Vec<Module>, GraphError> {
        self.closure_with(module, self.strategy)
    }

    /// [`Self::closure`] with an explicit traversal strategy
    pub fn closure_with(
        &self,
        module: &Module,
        strategy: TraversalStrategy,
    ) -> Result<Vec<Module>, GraphError> {
        let root = self.index_of(module.name())?;
        debug!(module = %module, ?strategy, "computing closure");

        let mut walker = Walker::new(&self.deps);
        walker.pin(root);
        for &child in self.deps[root.index()].iter() {
            walker
                .visit(child, strategy)
                .map_err(|path| self.cycle_error(path))?;
        }

        // Post-order lists dependencies first; the closure wants dependents first
        let closure: Vec<Module> = walker
            .into_post_order()
            .into_iter()
            .rev()
            .map(|idx| self.graph[idx].clone())
            .collect();

        trace!(module = %module, size = closure.len(), "closure computed");
        Ok(closure)
    }

    /// The closure in link order: each module after everything it depends on
    pub fn link_order(&self, module: &Module) -> Result<Vec<Module>, GraphError> {
        let mut order = self.closure(module)?;
        order.reverse();
        Ok(order)
    }

    /// One closure per module, in registration order, spread over `jobs`
    /// worker threads.
    ///
    /// On failure the error of the earliest registered module is returned.
    pub fn closures(&self, jobs: usize) -> Result<Vec<(Module, Vec<Module>)>, GraphError> {
        let modules: Vec<&Module> = self.modules().collect();
        let jobs = jobs.clamp(1, modules.len().max(1));
        let chunk_size = modules.len().div_ceil(jobs).max(1);

        let span = progress_span!("closures", total = modules.len());
        span.pb_set_length(modules.len() as u64);
        let _entered = span.enter();

        let mut context = LogContext::with_progress("closures", modules.len() as u64);
        context.log(LogLevel::Debug, &format!("computing closures on {jobs} workers"));

        let chunks: Vec<Vec<Result<Vec<Module>, GraphError>>> = thread::scope(|scope| {
            let handles: Vec<_> = modules
                .chunks(chunk_size)
                .map(|chunk| {
                    let span = span.clone();
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|module| {
                                let result = self.closure(module);
                                span.pb_inc(1);
                                result
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(results) => results,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        });

        let results: Vec<Result<Vec<Module>, GraphError>> = chunks.into_iter().flatten().collect();
        context.set_progress(results.iter().filter(|r| r.is_ok()).count() as u64);
        context.log(LogLevel::Debug, "closures finished");

        modules
            .into_iter()
            .zip(results)
            .map(|(module, result)| result.map(|closure| (module.clone(), closure)))
            .collect()
    }

    /// A schedule for the whole graph: every module after all of its
    /// dependencies, roots taken in registration order.
    pub fn build_order(&self) -> Result<Vec<Module>, GraphError> {
        let mut walker = Walker::new(&self.deps);
        for node in self.graph.node_indices() {
            walker
                .visit(node, self.strategy)
                .map_err(|path| self.cycle_error(path))?;
        }

        Ok(walker
            .into_post_order()
            .into_iter()
            .map(|idx| self.graph[idx].clone())
            .collect())
    }

    /// Direct dependencies of `module`, in declared order
    pub fn dependencies(&self, module: &Module) -> Result<Vec<Module>, GraphError> {
        let idx = self.index_of(module.name())?;
        Ok(self.deps[idx.index()]
            .iter()
            .map(|&dep| self.graph[dep].clone())
            .collect())
    }

    /// Modules that directly depend on `module`, in registration order
    pub fn dependents(&self, module: &Module) -> Result<Vec<Module>, GraphError> {
        let idx = self.index_of(module.name())?;
        let mut sources: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(idx, Direction::Incoming)
            .collect();
        sources.sort_unstable();

        Ok(sources
            .into_iter()
            .map(|source| self.graph[source].clone())
            .collect())
    }

    /// Check if the graph contains cycles anywhere, reachable or not
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// First cycle met when walking every module in registration order
    pub fn detect_cycle(&self) -> Option<Cycle> {
        match self.build_order() {
            Err(GraphError::CircularDependency { cycle }) => Some(cycle),
            _ => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    /// Look up the registered module called `name`
    pub fn get(&self, name: &str) -> Option<&Module> {
        let idx = self.node_map.get(name)?;
        Some(&self.graph[*idx])
    }

    /// All modules, in registration order
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.graph.node_weights()
    }

    pub fn module_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn traversal(&self) -> TraversalStrategy {
        self.strategy
    }

    fn index_of(&self, name: &str) -> Result<NodeIndex, GraphError> {
        self.node_map
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::ModuleNotFound {
                name: name.to_string(),
            })
    }

    fn cycle_error(&self, path: CyclePath) -> GraphError {
        let cycle = Cycle::new(path.into_iter().map(|idx| self.graph[idx].clone()).collect());
        debug!(%cycle, "dependency cycle found");
        GraphError::CircularDependency { cycle }
    }
}

#[cfg(test)]
mod tests {
    include!("dependency_graph.test.rs");
}
