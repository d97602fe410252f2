// Tests for ordered closure queries on a frozen graph

use super::*;
use crate::graph::GraphBuilder;
use crate::testing::{GraphFixture, names, position_of};

const STRATEGIES: [TraversalStrategy; 2] =
    [TraversalStrategy::Recursive, TraversalStrategy::Iterative];

fn fixture(edges: &[(&str, &str)]) -> GraphFixture {
    GraphFixture::from_edges(edges).unwrap()
}

fn closure_of(fixture: &GraphFixture, name: &str) -> Vec<String> {
    fixture.closure_names(name).unwrap()
}

// ============================================================================
// Linear chains
// ============================================================================

#[test]
fn test_two_step_chain() {
    let f = fixture(&[("t3", "t2"), ("t2", "t1")]);

    assert_eq!(closure_of(&f, "t3"), vec!["t2", "t1"]);
    assert_eq!(closure_of(&f, "t2"), vec!["t1"]);
    assert!(closure_of(&f, "t1").is_empty());
}

#[test]
fn test_three_step_chain_stays_contiguous() {
    let f = fixture(&[("t4", "t3"), ("t3", "t2"), ("t2", "t1")]);

    assert_eq!(closure_of(&f, "t4"), vec!["t3", "t2", "t1"]);
    assert_eq!(closure_of(&f, "t3"), vec!["t2", "t1"]);
    assert_eq!(closure_of(&f, "t2"), vec!["t1"]);
}

// ============================================================================
// Shared dependencies declared in different orders
// ============================================================================

#[test]
fn test_all_pairs_declared_shallow_first() {
    let f = fixture(&[
        ("t4", "t2"),
        ("t4", "t3"),
        ("t4", "t1"),
        ("t3", "t2"),
        ("t3", "t1"),
        ("t2", "t1"),
    ]);

    assert_eq!(closure_of(&f, "t4"), vec!["t3", "t2", "t1"]);
    assert_eq!(closure_of(&f, "t3"), vec!["t2", "t1"]);
    assert_eq!(closure_of(&f, "t2"), vec!["t1"]);
}

#[test]
fn test_all_pairs_declared_deepest_first() {
    let f = fixture(&[
        ("t4", "t1"),
        ("t4", "t2"),
        ("t4", "t3"),
        ("t3", "t2"),
        ("t3", "t1"),
        ("t2", "t1"),
    ]);

    assert_eq!(closure_of(&f, "t4"), vec!["t3", "t2", "t1"]);
    assert_eq!(closure_of(&f, "t3"), vec!["t2", "t1"]);
    assert_eq!(closure_of(&f, "t2"), vec!["t1"]);
}

fn assert_two_branch_constraints(f: &GraphFixture) {
    let t6 = f.graph.closure(&f.module("t6")).unwrap();
    assert_eq!(t6.len(), 5);

    // t4 pulls its own chain in right behind it
    assert_eq!(position_of(&t6, "t3"), position_of(&t6, "t4") + 1);
    assert!(position_of(&t6, "t5") < position_of(&t6, "t2"));
    assert!(position_of(&t6, "t5") < position_of(&t6, "t1"));
    assert!(position_of(&t6, "t2") < position_of(&t6, "t1"));
    assert!(position_of(&t6, "t3") < position_of(&t6, "t2"));

    assert_eq!(closure_of(f, "t5"), vec!["t2", "t1"]);
    assert_eq!(closure_of(f, "t4"), vec!["t3", "t2", "t1"]);
    assert_eq!(closure_of(f, "t3"), vec!["t2", "t1"]);
    assert_eq!(closure_of(f, "t2"), vec!["t1"]);
}

#[test]
fn test_two_branches_short_branch_declared_first() {
    let f = fixture(&[
        ("t6", "t5"),
        ("t6", "t4"),
        ("t5", "t2"),
        ("t4", "t3"),
        ("t3", "t2"),
        ("t2", "t1"),
    ]);

    assert_two_branch_constraints(&f);
    assert_eq!(closure_of(&f, "t6"), vec!["t4", "t3", "t5", "t2", "t1"]);
}

#[test]
fn test_two_branches_long_branch_declared_first() {
    let f = fixture(&[
        ("t6", "t4"),
        ("t6", "t5"),
        ("t5", "t2"),
        ("t4", "t3"),
        ("t3", "t2"),
        ("t2", "t1"),
    ]);

    assert_two_branch_constraints(&f);
    assert_eq!(closure_of(&f, "t6"), vec!["t5", "t4", "t3", "t2", "t1"]);
}

#[test]
fn test_diamond_lists_shared_dependency_once() {
    let f = fixture(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]);

    let closure = closure_of(&f, "a");
    assert_eq!(closure, vec!["c", "b", "d"]);
}

// ============================================================================
// Strategies and edge bookkeeping
// ============================================================================

#[test]
fn test_strategies_agree() {
    let f = fixture(&[
        ("app", "net"),
        ("app", "ui"),
        ("net", "io"),
        ("ui", "gfx"),
        ("gfx", "io"),
        ("io", "sys"),
        ("ui", "sys"),
    ]);

    for module in f.graph.modules() {
        let recursive = f
            .graph
            .closure_with(module, TraversalStrategy::Recursive)
            .unwrap();
        let iterative = f
            .graph
            .closure_with(module, TraversalStrategy::Iterative)
            .unwrap();
        assert_eq!(recursive, iterative, "strategies differ for {module}");
    }
}

#[test]
fn test_repeated_edge_is_idempotent() {
    let once = fixture(&[("c", "a"), ("c", "b"), ("b", "a")]);
    let twice = fixture(&[("c", "a"), ("c", "b"), ("b", "a"), ("c", "a")]);

    assert_eq!(once.graph.edge_count(), twice.graph.edge_count());
    assert_eq!(closure_of(&once, "c"), closure_of(&twice, "c"));
    assert_eq!(
        names(&twice.graph.dependencies(&twice.module("c")).unwrap()),
        vec!["a", "b"]
    );
}

#[test]
fn test_dependencies_keep_declared_order() {
    let f = fixture(&[("root", "z"), ("root", "a"), ("root", "m")]);
    let deps = f.graph.dependencies(&f.module("root")).unwrap();
    assert_eq!(names(&deps), vec!["z", "a", "m"]);
}

#[test]
fn test_dependents_in_registration_order() {
    let f = fixture(&[("x", "base"), ("y", "base"), ("z", "other")]);
    let dependents = f.graph.dependents(&f.module("base")).unwrap();
    assert_eq!(names(&dependents), vec!["x", "y"]);
    assert!(f.graph.dependents(&f.module("x")).unwrap().is_empty());
}

#[test]
fn test_query_with_equal_module_value() {
    let f = fixture(&[("t2", "t1")]);
    let outside = Module::new("t2").unwrap();
    assert_eq!(names(&f.graph.closure(&outside).unwrap()), vec!["t1"]);
}

#[test]
fn test_unknown_module_query_fails() {
    let f = fixture(&[("t2", "t1")]);
    let ghost = Module::new("ghost").unwrap();

    let err = f.graph.closure(&ghost).unwrap_err();
    assert_eq!(
        err,
        GraphError::ModuleNotFound {
            name: "ghost".to_string()
        }
    );
}

// ============================================================================
// Whole-graph queries
// ============================================================================

#[test]
fn test_link_order_is_reversed_closure() {
    let f = fixture(&[("t4", "t3"), ("t3", "t2"), ("t2", "t1")]);
    let link = f.graph.link_order(&f.module("t4")).unwrap();
    assert_eq!(names(&link), vec!["t1", "t2", "t3"]);
}

#[test]
fn test_build_order_respects_every_edge() {
    let f = fixture(&[
        ("app", "net"),
        ("app", "ui"),
        ("net", "io"),
        ("ui", "io"),
        ("tool", "io"),
    ]);

    let order = f.graph.build_order().unwrap();
    assert_eq!(order.len(), f.graph.module_count());
    for module in f.graph.modules() {
        for dep in f.graph.dependencies(module).unwrap() {
            assert!(
                position_of(&order, dep.name()) < position_of(&order, module.name()),
                "{dep} must be built before {module}"
            );
        }
    }
}

#[test]
fn test_parallel_closures_match_sequential() {
    let f = fixture(&[
        ("t6", "t5"),
        ("t6", "t4"),
        ("t5", "t2"),
        ("t4", "t3"),
        ("t3", "t2"),
        ("t2", "t1"),
    ]);

    for jobs in [1, 2, 3, 16] {
        let all = f.graph.closures(jobs).unwrap();
        assert_eq!(all.len(), f.graph.module_count());
        for (module, closure) in all {
            assert_eq!(closure, f.graph.closure(&module).unwrap());
        }
    }
}

#[test]
fn test_closures_on_empty_graph() {
    let graph = GraphBuilder::new().build();
    assert!(graph.closures(4).unwrap().is_empty());
    assert!(graph.build_order().unwrap().is_empty());
}

#[test]
fn test_graph_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DependencyGraph>();
}

// ============================================================================
// Cycles
// ============================================================================

#[test]
fn test_cycle_through_root_is_rejected() {
    for strategy in STRATEGIES {
        let f = GraphFixture::with_modules(&[], &[("a", "b"), ("b", "a")], strategy).unwrap();
        let err = f.graph.closure(&f.module("a")).unwrap_err();

        let cycle = err.cycle().expect("cycle error");
        assert_eq!(names(cycle.path()), vec!["a", "b", "a"]);
        let (from, to) = cycle.closing_edge();
        assert_eq!((from.name(), to.name()), ("b", "a"));
    }
}

#[test]
fn test_cycle_below_root_is_rejected() {
    let f = fixture(&[("app", "a"), ("a", "b"), ("b", "c"), ("c", "a")]);
    let err = f.graph.closure(&f.module("app")).unwrap_err();

    let cycle = err.cycle().expect("cycle error");
    assert!(!cycle.contains("app"));
    assert_eq!(cycle.to_string(), "a → b → c → a");
}

#[test]
fn test_unreachable_cycle_does_not_affect_closure() {
    let f = fixture(&[("app", "lib"), ("x", "y"), ("y", "x")]);

    assert_eq!(closure_of(&f, "app"), vec!["lib"]);
    assert!(f.graph.has_cycles());
    assert!(f.graph.closure(&f.module("x")).is_err());
}

#[test]
fn test_detect_cycle_matches_has_cycles() {
    let acyclic = fixture(&[("a", "b"), ("b", "c")]);
    assert!(!acyclic.graph.has_cycles());
    assert!(acyclic.graph.detect_cycle().is_none());

    let cyclic = fixture(&[("a", "b"), ("b", "c"), ("c", "b")]);
    assert!(cyclic.graph.has_cycles());
    let cycle = cyclic.graph.detect_cycle().unwrap();
    assert_eq!(names(cycle.modules()), vec!["b", "c"]);
}

#[test]
fn test_build_order_fails_on_cycle() {
    let f = fixture(&[("a", "b"), ("b", "a")]);
    assert!(matches!(
        f.graph.build_order(),
        Err(GraphError::CircularDependency { .. })
    ));
}

#[test]
fn test_parallel_closures_report_first_failing_module() {
    // "ok" is registered first and succeeds; "a" is the first failure
    let f = fixture(&[("ok", "leaf"), ("a", "b"), ("b", "a")]);
    let err = f.graph.closures(3).unwrap_err();
    let cycle = err.cycle().expect("cycle error");
    assert_eq!(cycle.path().first().map(Module::name), Some("a"));
}
