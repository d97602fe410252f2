use super::*;

#[test]
fn test_fixture_registers_in_first_appearance_order() {
    let fixture = GraphFixture::from_edges(&[("b", "a"), ("c", "b")]).unwrap();
    let registered: Vec<&str> = fixture.graph.modules().map(|m| m.name()).collect();
    assert_eq!(registered, vec!["b", "a", "c"]);
}

#[test]
fn test_fixture_explicit_modules_come_first() {
    let fixture = GraphFixture::with_modules(
        &["lonely", "a"],
        &[("b", "a")],
        TraversalStrategy::Iterative,
    )
    .unwrap();
    let registered: Vec<&str> = fixture.graph.modules().map(|m| m.name()).collect();
    assert_eq!(registered, vec!["lonely", "a", "b"]);
    assert_eq!(fixture.graph.traversal(), TraversalStrategy::Iterative);
}

#[test]
fn test_position_of() {
    let fixture = GraphFixture::from_edges(&[("c", "b"), ("b", "a")]).unwrap();
    let closure = fixture.graph.closure(&fixture.module("c")).unwrap();
    assert_eq!(position_of(&closure, "b"), 0);
    assert_eq!(position_of(&closure, "a"), 1);
}

#[test]
#[should_panic(expected = "fixture has no module named ghost")]
fn test_unknown_module_panics() {
    let fixture = GraphFixture::from_edges(&[("b", "a")]).unwrap();
    fixture.module("ghost");
}
