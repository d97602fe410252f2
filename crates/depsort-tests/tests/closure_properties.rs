//! Ordering properties checked over every small DAG

use anyhow::Result;
use depsort_lib::TraversalStrategy;
use depsort_tests::{DagSpec, all_dags, position_of};
use std::collections::BTreeSet;

const MAX_NODES: usize = 5;

fn for_every_dag(mut check: impl FnMut(&DagSpec, TraversalStrategy) -> Result<()>) -> Result<()> {
    for nodes in 1..=MAX_NODES {
        for spec in all_dags(nodes) {
            for strategy in [TraversalStrategy::Recursive, TraversalStrategy::Iterative] {
                check(&spec, strategy)?;
                check(&spec.reversed_declarations(), strategy)?;
            }
        }
    }
    Ok(())
}

#[test]
fn closure_is_exactly_the_reachable_set() -> Result<()> {
    for_every_dag(|spec, strategy| {
        let fixture = spec.fixture(strategy)?;
        for node in 0..spec.nodes {
            let closure = fixture.closure_names(&DagSpec::name(node))?;
            let unique: BTreeSet<&String> = closure.iter().collect();
            assert_eq!(unique.len(), closure.len(), "duplicates in {closure:?}");

            let expected: BTreeSet<String> =
                spec.reachable(node).into_iter().map(DagSpec::name).collect();
            let actual: BTreeSet<String> = closure.into_iter().collect();
            assert_eq!(actual, expected, "{spec:?} node {node}");
        }
        Ok(())
    })
}

#[test]
fn closure_never_contains_its_root() -> Result<()> {
    for_every_dag(|spec, strategy| {
        let fixture = spec.fixture(strategy)?;
        for node in 0..spec.nodes {
            let name = DagSpec::name(node);
            assert!(!fixture.closure_names(&name)?.contains(&name));
        }
        Ok(())
    })
}

#[test]
fn dependents_precede_their_dependencies() -> Result<()> {
    for_every_dag(|spec, strategy| {
        let fixture = spec.fixture(strategy)?;
        for root in 0..spec.nodes {
            let closure = fixture.graph.closure(&fixture.module(&DagSpec::name(root)))?;
            for &(a, b) in &spec.edges {
                let (a, b) = (DagSpec::name(a), DagSpec::name(b));
                let members: Vec<&str> = closure.iter().map(|m| m.name()).collect();
                if members.contains(&a.as_str()) && members.contains(&b.as_str()) {
                    assert!(
                        position_of(&closure, &a) < position_of(&closure, &b),
                        "{a} must precede {b} in {members:?}"
                    );
                }
            }
        }
        Ok(())
    })
}

#[test]
fn strategies_produce_identical_sequences() -> Result<()> {
    for nodes in 1..=MAX_NODES {
        for spec in all_dags(nodes) {
            let recursive = spec.fixture(TraversalStrategy::Recursive)?;
            let iterative = spec.fixture(TraversalStrategy::Iterative)?;
            for node in 0..nodes {
                let name = DagSpec::name(node);
                assert_eq!(recursive.closure_names(&name)?, iterative.closure_names(&name)?);
            }
        }
    }
    Ok(())
}

#[test]
fn build_order_schedules_dependencies_first() -> Result<()> {
    for_every_dag(|spec, strategy| {
        let fixture = spec.fixture(strategy)?;
        let order = fixture.graph.build_order()?;
        assert_eq!(order.len(), spec.nodes);
        for &(a, b) in &spec.edges {
            assert!(position_of(&order, &DagSpec::name(b)) < position_of(&order, &DagSpec::name(a)));
        }
        Ok(())
    })
}
