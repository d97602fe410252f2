use super::*;
use std::collections::HashSet;

#[test]
fn test_module_equality_is_by_name() {
    let a = Module::new("core").unwrap();
    let b = Module::new(String::from("core")).unwrap();
    let c = Module::new("util").unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_hash_set_lookup_by_str() {
    let mut set = HashSet::new();
    set.insert(Module::new("core").unwrap());

    assert!(set.contains("core"));
    assert!(!set.contains("util"));
}

#[test]
fn test_empty_name_rejected() {
    let err = Module::new("").unwrap_err();
    assert!(matches!(err, GraphError::InvalidModuleName { .. }));
}

#[test]
fn test_whitespace_name_rejected() {
    let err = Module::new("my module").unwrap_err();
    match err {
        GraphError::InvalidModuleName { name, reason } => {
            assert_eq!(name, "my module");
            assert!(reason.contains("whitespace"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_display_is_the_name() {
    let module = Module::new("Transmute").unwrap();
    assert_eq!(module.to_string(), "Transmute");
    assert_eq!(module.as_ref(), "Transmute");
}

#[test]
fn test_serializes_as_bare_string() {
    let module = Module::new("t1").unwrap();
    assert_eq!(serde_json::to_string(&module).unwrap(), "\"t1\"");

    let back: Module = serde_json::from_str("\"t1\"").unwrap();
    assert_eq!(back, module);
}

#[test]
fn test_deserialize_validates_name() {
    let result: Result<Module, _> = serde_json::from_str("\"\"");
    assert!(result.is_err());
}
