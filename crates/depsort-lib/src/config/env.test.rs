use super::*;

fn color_env(vars: &[(&str, &str)]) -> ColorEnvironment {
    ColorEnvironment::from_vars(
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
    )
    .unwrap()
}

#[test]
fn test_no_variables_keep_configured_color() {
    let env = color_env(&[]);
    assert_eq!(env.forced_intent(), None);
    assert_eq!(env.resolve(ColorIntent::Auto), ColorIntent::Auto);
    assert_eq!(env.resolve(ColorIntent::Always), ColorIntent::Always);
}

#[test]
fn test_no_color_disables() {
    let env = color_env(&[("NO_COLOR", "1")]);
    assert_eq!(env.resolve(ColorIntent::Auto), ColorIntent::Never);
}

#[test]
fn test_empty_no_color_is_ignored() {
    let env = color_env(&[("NO_COLOR", "")]);
    assert_eq!(env.resolve(ColorIntent::Auto), ColorIntent::Auto);
}

#[test]
fn test_clicolor_zero_disables() {
    let env = color_env(&[("CLICOLOR", "0")]);
    assert_eq!(env.resolve(ColorIntent::Always), ColorIntent::Never);
    assert_eq!(color_env(&[("CLICOLOR", "1")]).forced_intent(), None);
}

#[test]
fn test_force_color_beats_no_color() {
    let env = color_env(&[("NO_COLOR", "1"), ("FORCE_COLOR", "1")]);
    assert_eq!(env.resolve(ColorIntent::Auto), ColorIntent::Always);

    let env = color_env(&[("CLICOLOR", "0"), ("FORCE_COLOR", "true")]);
    assert_eq!(env.resolve(ColorIntent::Never), ColorIntent::Always);
}

#[test]
fn test_force_color_off() {
    let env = color_env(&[("FORCE_COLOR", "false")]);
    assert_eq!(env.resolve(ColorIntent::Always), ColorIntent::Never);
}

#[test]
fn test_force_color_invalid_value_ignored() {
    let env = color_env(&[("FORCE_COLOR", "sometimes")]);
    assert_eq!(env.resolve(ColorIntent::Auto), ColorIntent::Auto);
}

#[test]
fn test_ci_always_disables() {
    let env = color_env(&[("CI", "true"), ("FORCE_COLOR", "1")]);
    assert_eq!(env.forced_intent(), Some(ColorIntent::Never));
    assert_eq!(env.resolve(ColorIntent::Always), ColorIntent::Never);
}

#[test]
fn test_unrelated_variables_are_ignored() {
    let env = color_env(&[("PATH", "/usr/bin"), ("DEPSORT_JOBS", "4")]);
    assert!(env.ci.is_none());
    assert!(env.no_color.is_none());
}

#[test]
fn test_load_reads_process_environment() {
    let env = ColorEnvironment::load().unwrap();
    assert_eq!(env.ci.is_some(), std::env::var_os("CI").is_some());
}
