use super::*;

#[test]
fn test_log_level_from_verbosity() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(200), LogLevel::Trace);
}

#[test]
fn test_log_level_ordering() {
    assert!(LogLevel::Error < LogLevel::Warning);
    assert!(LogLevel::Debug < LogLevel::Trace);
}

#[test]
fn test_log_level_aliases_parse() {
    assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warning);
    assert_eq!("fatal".parse::<LogLevel>().unwrap(), LogLevel::Error);
    assert_eq!("VERBOSE".parse::<LogLevel>().unwrap(), LogLevel::Trace);
}

#[test]
fn test_log_format_aliases_parse() {
    assert_eq!("txt".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("yml".parse::<LogFormat>().unwrap(), LogFormat::Yaml);
    assert_eq!(" json ".parse::<LogFormat>().unwrap(), LogFormat::Json);
}

#[test]
fn test_traversal_strategy_aliases_parse() {
    assert_eq!(
        "stack".parse::<TraversalStrategy>().unwrap(),
        TraversalStrategy::Iterative
    );
    assert_eq!(
        "dfs".parse::<TraversalStrategy>().unwrap(),
        TraversalStrategy::Recursive
    );
    assert_eq!(TraversalStrategy::default(), TraversalStrategy::Recursive);
}

#[test]
fn test_color_intent_aliases_parse() {
    assert_eq!("off".parse::<ColorIntent>().unwrap(), ColorIntent::Never);
    assert_eq!("force".parse::<ColorIntent>().unwrap(), ColorIntent::Always);
    assert_eq!("auto".parse::<ColorIntent>().unwrap(), ColorIntent::Auto);
}

#[test]
fn test_invalid_value_reports_parse_error() {
    let err = "sideways".parse::<TraversalStrategy>().unwrap_err();
    match err {
        ConfigError::ParseError { value, reason } => {
            assert_eq!(value, "sideways");
            assert_eq!(reason, "invalid traversal strategy");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_try_from_string_matches_from_str() {
    let parsed = LogOutput::try_from("stdout".to_string()).unwrap();
    assert_eq!(parsed, LogOutput::Stdout);
    assert!(LogOutput::try_from("printer".to_string()).is_err());
}

#[test]
fn test_log_level_directive_names() {
    assert_eq!(LogLevel::Warning.as_directive(), "warn");
    assert_eq!(LogLevel::Trace.as_directive(), "trace");
}

#[test]
fn test_log_level_try_from_string() {
    // LogLevel has an `Error` variant of its own
    assert_eq!(LogLevel::try_from("error".to_string()).unwrap(), LogLevel::Error);
    assert_eq!(LogLevel::try_from(" Debug ".to_string()).unwrap(), LogLevel::Debug);
    assert!(matches!(
        LogLevel::try_from("loud".to_string()),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_log_context_creation() {
    let context = LogContext::new("closure");
    assert_eq!(context.operation, "closure");
    assert_eq!(context.total_items, None);
    assert_eq!(context.current_item, None);
}

#[test]
fn test_log_context_with_progress() {
    let mut context = LogContext::with_progress("closures", 12);
    assert_eq!(context.total_items, Some(12));
    assert_eq!(context.current_item, None);

    context.set_progress(5);
    assert_eq!(context.current_item, Some(5));

    // No subscriber is required to emit
    for level in [LogLevel::Error, LogLevel::Info, LogLevel::Trace] {
        context.log(level, "progress update");
    }
}
