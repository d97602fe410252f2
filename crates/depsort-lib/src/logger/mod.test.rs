use super::*;

#[test]
fn test_filter_directives_quiet_levels() {
    assert_eq!(filter_directives(LogLevel::Error), "depsort_lib=error,error");
    assert_eq!(filter_directives(LogLevel::Warning), "depsort_lib=warn,warn");
}

#[test]
fn test_filter_directives_keep_other_crates_at_warn() {
    assert_eq!(filter_directives(LogLevel::Debug), "depsort_lib=debug,warn");
    assert_eq!(filter_directives(LogLevel::Trace), "depsort_lib=trace,warn");
}

#[test]
fn test_filter_directives_parse() {
    for level in [LogLevel::Error, LogLevel::Info, LogLevel::Trace] {
        assert!(EnvFilter::try_new(filter_directives(level)).is_ok());
    }
}

#[test]
fn test_progress_template_is_valid() {
    assert!(ProgressStyle::with_template(PROGRESS_TEMPLATE).is_ok());
}

#[test]
fn test_concurrent_init_installs_once() {
    let config = LoggerConfig {
        level: LogLevel::Error,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        ansi: false,
    };

    // Only this test installs a subscriber in this test binary
    let results: Vec<Result<&'static Logger, LoggerError>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| Logger::init(config.clone())))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(
        results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, LoggerError::AlreadyInitialized))
    );

    assert!(Logger::is_initialized());
    assert_eq!(Logger::global().unwrap().config(), &config);
    assert!(matches!(
        Logger::init(config),
        Err(LoggerError::AlreadyInitialized)
    ));
}
