use super::*;

fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.log_level, 0);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_output, LogOutput::Stderr);
    assert_eq!(config.color, ColorIntent::Auto);
    assert_eq!(config.traversal, TraversalStrategy::Recursive);
    assert_eq!(config.jobs, 2);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_environment_yields_defaults() {
    let config = Config::from_vars(Vec::new()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_prefixed_variables_are_read() {
    let config = Config::from_vars(vars(&[
        ("DEPSORT_LOG_LEVEL", "3"),
        ("DEPSORT_LOG_FORMAT", "json"),
        ("DEPSORT_LOG_OUTPUT", "stdout"),
        ("DEPSORT_TRAVERSAL", "iterative"),
        ("DEPSORT_JOBS", "8"),
    ]))
    .unwrap();

    assert_eq!(config.log_level, 3);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.log_output, LogOutput::Stdout);
    assert_eq!(config.traversal, TraversalStrategy::Iterative);
    assert_eq!(config.jobs, 8);
}

#[test]
fn test_enum_aliases_accepted() {
    let config = Config::from_vars(vars(&[
        ("DEPSORT_TRAVERSAL", "stack"),
        ("DEPSORT_LOG_FORMAT", "yml"),
    ]))
    .unwrap();

    assert_eq!(config.traversal, TraversalStrategy::Iterative);
    assert_eq!(config.log_format, LogFormat::Yaml);
}

#[test]
fn test_unprefixed_variables_are_ignored() {
    let config = Config::from_vars(vars(&[("JOBS", "9"), ("TRAVERSAL", "iterative")])).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_invalid_enum_value_fails() {
    let result = Config::from_vars(vars(&[("DEPSORT_TRAVERSAL", "sideways")]));
    assert!(matches!(
        result,
        Err(ConfigError::EnvironmentParsingFailed { .. })
    ));
}

#[test]
fn test_zero_jobs_fails_validation() {
    let result = Config::from_vars(vars(&[("DEPSORT_JOBS", "0")]));
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_log_level_out_of_range_fails_validation() {
    let config = Config {
        log_level: 9,
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_no_color_applies_without_explicit_setting() {
    let config = Config::from_vars(vars(&[("NO_COLOR", "1")])).unwrap();
    assert_eq!(config.color, ColorIntent::Never);
}

#[test]
fn test_explicit_color_beats_conventions() {
    let config = Config::from_vars(vars(&[
        ("NO_COLOR", "1"),
        ("DEPSORT_COLOR", "always"),
    ]))
    .unwrap();
    assert_eq!(config.color, ColorIntent::Always);
}

#[test]
fn test_merge_takes_non_default_values() {
    let base = Config {
        jobs: 6,
        ..Config::default()
    };
    let overrides = Config {
        log_level: 2,
        traversal: TraversalStrategy::Iterative,
        ..Config::default()
    };

    let merged = base.merge_with(overrides);
    assert_eq!(merged.log_level, 2);
    assert_eq!(merged.traversal, TraversalStrategy::Iterative);
    // default-valued fields in the override leave the base alone
    assert_eq!(merged.jobs, 6);
}

#[test]
fn test_logger_config_from_explicit_color() {
    let config = Config {
        log_level: 4,
        color: ColorIntent::Never,
        ..Config::default()
    };
    let logger_config = config.to_logger_config();
    assert_eq!(logger_config.level, LogLevel::Trace);
    assert!(!logger_config.ansi);

    let config = Config {
        color: ColorIntent::Always,
        ..Config::default()
    };
    assert!(config.to_logger_config().ansi);
}

#[test]
fn test_load_matches_process_environment() {
    // The crate directory ships no env files, so load sees only the process env
    assert!(ENV_FILES.iter().all(|file| !Path::new(file).exists()));

    let loaded = Config::load().unwrap();
    assert_eq!(loaded, Config::from_vars(std::env::vars()).unwrap());
    assert!(loaded.validate().is_ok());
}
