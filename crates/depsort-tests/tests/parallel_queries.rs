//! Independent closure queries over one frozen graph from many threads

use anyhow::Result;
use depsort_lib::{Config, DependencyGraph, GraphBuilder, Module};
use std::sync::Arc;
use std::thread;

/// Layered graph: every module in layer `l` depends on every module of `l - 1`
fn layered_graph(layers: usize, width: usize) -> Result<(DependencyGraph, Vec<Module>)> {
    let mut builder = GraphBuilder::new();
    let mut all = Vec::new();
    let mut previous: Vec<Module> = Vec::new();

    for layer in 0..layers {
        let mut current = Vec::new();
        for slot in 0..width {
            let module = builder.add_module(format!("l{layer}_{slot}"))?;
            for dep in &previous {
                builder.add_dependency(&module, dep)?;
            }
            current.push(module);
        }
        all.extend(current.iter().cloned());
        previous = current;
    }

    Ok((builder.build(), all))
}

#[test]
fn shared_graph_answers_concurrent_queries() -> Result<()> {
    let (graph, modules) = layered_graph(6, 4)?;
    let graph = Arc::new(graph);

    let expected: Vec<Vec<Module>> = modules
        .iter()
        .map(|m| graph.closure(m))
        .collect::<Result<_, _>>()?;

    let handles: Vec<_> = modules
        .iter()
        .cloned()
        .map(|module| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || graph.closure(&module))
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        let closure = handle.join().expect("query thread panicked")?;
        assert_eq!(closure, expected);
    }
    Ok(())
}

#[test]
fn batch_closures_cover_every_module() -> Result<()> {
    let (graph, modules) = layered_graph(5, 3)?;
    let config = Config {
        jobs: 4,
        ..Config::default()
    };

    let all = graph.closures(config.jobs)?;
    let order: Vec<&Module> = all.iter().map(|(m, _)| m).collect();
    assert_eq!(order, modules.iter().collect::<Vec<_>>());

    // top layer reaches all four layers below it
    let (_, top) = all.last().expect("non-empty graph");
    assert_eq!(top.len(), 4 * 3);
    Ok(())
}
