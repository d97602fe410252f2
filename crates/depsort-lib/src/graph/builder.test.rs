use super::*;

#[test]
fn test_new_builder_is_empty() {
    let builder = GraphBuilder::new();
    assert_eq!(builder.module_count(), 0);
    assert_eq!(builder.edge_count(), 0);
}

#[test]
fn test_add_module_returns_registered_value() {
    let mut builder = GraphBuilder::new();
    let core = builder.add_module("core").unwrap();

    assert_eq!(core.name(), "core");
    assert!(builder.contains("core"));
    assert_eq!(builder.module_count(), 1);
}

#[test]
fn test_duplicate_module_rejected() {
    let mut builder = GraphBuilder::new();
    builder.add_module("core").unwrap();

    let err = builder.add_module("core").unwrap_err();
    assert_eq!(
        err,
        GraphError::DuplicateModule {
            name: "core".to_string()
        }
    );

    let err = builder.register(Module::new("core").unwrap()).unwrap_err();
    assert!(matches!(err, GraphError::DuplicateModule { .. }));
    assert_eq!(builder.module_count(), 1);
}

#[test]
fn test_invalid_name_not_registered() {
    let mut builder = GraphBuilder::new();
    assert!(matches!(
        builder.add_module(" "),
        Err(GraphError::InvalidModuleName { .. })
    ));
    assert_eq!(builder.module_count(), 0);
}

#[test]
fn test_add_dependency_edge() {
    let mut builder = GraphBuilder::new();
    let a = builder.add_module("a").unwrap();
    let b = builder.add_module("b").unwrap();

    builder.add_dependency(&a, &b).unwrap();
    assert_eq!(builder.edge_count(), 1);
}

#[test]
fn test_repeated_dependency_not_duplicated() {
    let mut builder = GraphBuilder::new();
    let a = builder.add_module("a").unwrap();
    let b = builder.add_module("b").unwrap();
    let c = builder.add_module("c").unwrap();

    builder.add_dependency(&a, &b).unwrap();
    builder.add_dependency(&a, &c).unwrap();
    builder.add_dependency(&a, &b).unwrap();
    builder.add_dependency_by_name("a", "c").unwrap();

    assert_eq!(builder.edge_count(), 2);
}

#[test]
fn test_dependency_on_unregistered_module() {
    let mut builder = GraphBuilder::new();
    let a = builder.add_module("a").unwrap();
    let stranger = Module::new("stranger").unwrap();

    let err = builder.add_dependency(&a, &stranger).unwrap_err();
    assert_eq!(
        err,
        GraphError::ModuleNotFound {
            name: "stranger".to_string()
        }
    );

    let err = builder.add_dependency_by_name("nobody", "a").unwrap_err();
    assert!(matches!(err, GraphError::ModuleNotFound { .. }));
    assert_eq!(builder.edge_count(), 0);
}

#[test]
fn test_self_dependency_is_a_cycle() {
    let mut builder = GraphBuilder::new();
    let a = builder.add_module("a").unwrap();

    let err = builder.add_dependency(&a, &a).unwrap_err();
    let cycle = err.cycle().expect("self edge should be reported as a cycle");
    assert_eq!(cycle.path(), &[a.clone(), a.clone()]);
    assert_eq!(cycle.to_string(), "a → a");
    assert_eq!(builder.edge_count(), 0);
}

#[test]
fn test_build_carries_strategy() {
    let graph = GraphBuilder::with_traversal(TraversalStrategy::Iterative).build();
    assert_eq!(graph.traversal(), TraversalStrategy::Iterative);
    assert_eq!(GraphBuilder::new().build().traversal(), TraversalStrategy::Recursive);
}

#[test]
fn test_from_config_uses_configured_traversal() {
    let config = Config {
        traversal: TraversalStrategy::Iterative,
        ..Config::default()
    };
    let graph = GraphBuilder::from_config(&config).build();
    assert_eq!(graph.traversal(), TraversalStrategy::Iterative);
}

#[test]
fn test_build_preserves_counts() {
    let mut builder = GraphBuilder::new();
    let a = builder.add_module("a").unwrap();
    let b = builder.add_module("b").unwrap();
    builder.add_dependency(&a, &b).unwrap();

    let graph = builder.build();
    assert_eq!(graph.module_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.contains("a"));
    assert_eq!(graph.get("b"), Some(&b));
}
