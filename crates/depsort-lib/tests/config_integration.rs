use depsort_lib::config::Config;
use depsort_lib::primitives::{ColorIntent, ConfigError, LogFormat, TraversalStrategy};
use depsort_lib::GraphBuilder;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_from_env_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    fs::write(
        &path,
        "# depsort settings\nDEPSORT_TRAVERSAL=iterative\nDEPSORT_JOBS=4\nDEPSORT_LOG_FORMAT=json\n",
    )
    .unwrap();

    let config = Config::from_env_file(&path).unwrap();
    assert_eq!(config.traversal, TraversalStrategy::Iterative);
    assert_eq!(config.jobs, 4);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.log_level, 0);
}

#[test]
fn test_env_file_conventions_apply() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, "NO_COLOR=1\n").unwrap();

    let config = Config::from_env_file(&path).unwrap();
    assert_eq!(config.color, ColorIntent::Never);
}

#[test]
fn test_missing_env_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::from_env_file(&dir.path().join("absent.env"));
    assert!(matches!(result, Err(ConfigError::EnvFileError { .. })));
}

#[test]
fn test_malformed_env_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, "DEPSORT_JOBS='4\n").unwrap();

    let result = Config::from_env_file(&path);
    assert!(matches!(result, Err(ConfigError::EnvFileError { .. })));
}

#[test]
fn test_configured_graph_produces_same_closures() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, "DEPSORT_TRAVERSAL=stack\n").unwrap();
    let config = Config::from_env_file(&path).unwrap();

    let build = |mut builder: GraphBuilder| {
        let t1 = builder.add_module("t1").unwrap();
        let t2 = builder.add_module("t2").unwrap();
        let t3 = builder.add_module("t3").unwrap();
        builder.add_dependency(&t3, &t1).unwrap();
        builder.add_dependency(&t3, &t2).unwrap();
        builder.add_dependency(&t2, &t1).unwrap();
        (builder.build(), t3)
    };

    let (iterative, t3) = build(GraphBuilder::from_config(&config));
    let (recursive, _) = build(GraphBuilder::new());

    assert_eq!(iterative.traversal(), TraversalStrategy::Iterative);
    assert_eq!(
        iterative.closure(&t3).unwrap(),
        recursive.closure(&t3).unwrap()
    );
}
