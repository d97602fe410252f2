//! Cyclic graphs must fail every query that reaches the loop

use anyhow::Result;
use depsort_lib::{GraphBuilder, GraphError, TraversalStrategy};
use depsort_tests::{GraphFixture, names};

#[test]
fn two_module_cycle_names_both_modules() -> Result<()> {
    let fixture = GraphFixture::from_edges(&[("a", "b"), ("b", "a")])?;

    for name in ["a", "b"] {
        let err = fixture.graph.closure(&fixture.module(name)).unwrap_err();
        let cycle = err.cycle().expect("cycle error");
        assert!(cycle.contains("a") && cycle.contains("b"));
        assert!(err.to_string().starts_with("Circular dependency detected: "));
    }
    Ok(())
}

#[test]
fn long_cycle_is_reported_in_walk_order() -> Result<()> {
    for strategy in [TraversalStrategy::Recursive, TraversalStrategy::Iterative] {
        let fixture = GraphFixture::with_modules(
            &[],
            &[("app", "a"), ("a", "b"), ("b", "c"), ("c", "d"), ("d", "b")],
            strategy,
        )?;

        let err = fixture.graph.closure(&fixture.module("app")).unwrap_err();
        let cycle = err.cycle().expect("cycle error");
        assert_eq!(names(cycle.path()), vec!["b", "c", "d", "b"]);
        let (from, to) = cycle.closing_edge();
        assert_eq!((from.name(), to.name()), ("d", "b"));
    }
    Ok(())
}

#[test]
fn self_edge_rejected_at_construction() -> Result<()> {
    let mut builder = GraphBuilder::new();
    let a = builder.add_module("a")?;

    let err = builder.add_dependency(&a, &a).unwrap_err();
    assert!(matches!(err, GraphError::CircularDependency { .. }));

    let graph = builder.build();
    assert!(graph.closure(&a)?.is_empty());
    assert!(!graph.has_cycles());
    Ok(())
}

#[test]
fn cycle_fails_whole_graph_schedule() -> Result<()> {
    let fixture = GraphFixture::from_edges(&[("top", "x"), ("x", "y"), ("y", "z"), ("z", "x")])?;

    assert!(fixture.graph.has_cycles());
    assert!(fixture.graph.build_order().is_err());
    assert!(fixture.graph.closures(2).is_err());

    let cycle = fixture.graph.detect_cycle().expect("cycle");
    assert_eq!(names(cycle.modules()), vec!["x", "y", "z"]);
    Ok(())
}
