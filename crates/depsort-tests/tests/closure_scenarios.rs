//! End-to-end ordering scenarios through the public builder API

use anyhow::Result;
use depsort_lib::{DependencyGraph, GraphBuilder, Module};
use depsort_tests::position_of;

/// Register `t1..=tn` and return them in that order
fn modules(builder: &mut GraphBuilder, n: usize) -> Result<Vec<Module>> {
    (1..=n)
        .map(|i| {
            builder
                .add_module(format!("t{i}"))
                .map_err(anyhow::Error::from)
        })
        .collect()
}

#[test]
fn chain_of_three() -> Result<()> {
    let mut builder = GraphBuilder::new();
    let t = modules(&mut builder, 3)?;
    builder.add_dependency(&t[2], &t[1])?;
    builder.add_dependency(&t[1], &t[0])?;
    let graph = builder.build();

    assert_eq!(graph.closure(&t[2])?, vec![t[1].clone(), t[0].clone()]);
    assert_eq!(graph.closure(&t[1])?, vec![t[0].clone()]);
    Ok(())
}

#[test]
fn fully_connected_four_declared_out_of_order() -> Result<()> {
    let mut builder = GraphBuilder::new();
    let t = modules(&mut builder, 4)?;
    builder.add_dependency(&t[3], &t[1])?;
    builder.add_dependency(&t[3], &t[2])?;
    builder.add_dependency(&t[3], &t[0])?;
    builder.add_dependency(&t[2], &t[1])?;
    builder.add_dependency(&t[2], &t[0])?;
    builder.add_dependency(&t[1], &t[0])?;
    let graph = builder.build();

    assert_eq!(
        graph.closure(&t[3])?,
        vec![t[2].clone(), t[1].clone(), t[0].clone()]
    );
    assert_eq!(graph.closure(&t[2])?, vec![t[1].clone(), t[0].clone()]);
    assert_eq!(graph.closure(&t[1])?, vec![t[0].clone()]);
    Ok(())
}

#[test]
fn fully_connected_four_declared_in_order() -> Result<()> {
    let mut builder = GraphBuilder::new();
    let t = modules(&mut builder, 4)?;
    builder.add_dependency(&t[3], &t[0])?;
    builder.add_dependency(&t[3], &t[1])?;
    builder.add_dependency(&t[3], &t[2])?;
    builder.add_dependency(&t[2], &t[1])?;
    builder.add_dependency(&t[2], &t[0])?;
    builder.add_dependency(&t[1], &t[0])?;
    let graph = builder.build();

    assert_eq!(
        graph.closure(&t[3])?,
        vec![t[2].clone(), t[1].clone(), t[0].clone()]
    );
    Ok(())
}

#[test]
fn chain_of_four() -> Result<()> {
    let mut builder = GraphBuilder::new();
    let t = modules(&mut builder, 4)?;
    builder.add_dependency(&t[3], &t[2])?;
    builder.add_dependency(&t[2], &t[1])?;
    builder.add_dependency(&t[1], &t[0])?;
    let graph = builder.build();

    assert_eq!(
        graph.closure(&t[3])?,
        vec![t[2].clone(), t[1].clone(), t[0].clone()]
    );
    assert_eq!(graph.closure(&t[2])?, vec![t[1].clone(), t[0].clone()]);
    Ok(())
}

fn two_branch_graph(long_branch_first: bool) -> Result<(DependencyGraph, Vec<Module>)> {
    let mut builder = GraphBuilder::new();
    let t = modules(&mut builder, 6)?;
    if long_branch_first {
        builder.add_dependency(&t[5], &t[3])?;
        builder.add_dependency(&t[5], &t[4])?;
    } else {
        builder.add_dependency(&t[5], &t[4])?;
        builder.add_dependency(&t[5], &t[3])?;
    }
    builder.add_dependency(&t[4], &t[1])?;
    builder.add_dependency(&t[3], &t[2])?;
    builder.add_dependency(&t[2], &t[1])?;
    builder.add_dependency(&t[1], &t[0])?;
    Ok((builder.build(), t))
}

#[test]
fn two_branches_keep_relative_order_either_way() -> Result<()> {
    for long_branch_first in [false, true] {
        let (graph, t) = two_branch_graph(long_branch_first)?;
        let t6 = graph.closure(&t[5])?;

        assert_eq!(position_of(&t6, "t3"), position_of(&t6, "t4") + 1);
        assert!(position_of(&t6, "t5") < position_of(&t6, "t2"));
        assert!(position_of(&t6, "t5") < position_of(&t6, "t1"));
        assert!(position_of(&t6, "t2") < position_of(&t6, "t1"));
        assert!(position_of(&t6, "t3") < position_of(&t6, "t2"));

        assert_eq!(graph.closure(&t[4])?, vec![t[1].clone(), t[0].clone()]);
        assert_eq!(
            graph.closure(&t[3])?,
            vec![t[2].clone(), t[1].clone(), t[0].clone()]
        );
    }
    Ok(())
}

#[test]
fn closure_serializes_as_name_list() -> Result<()> {
    let mut builder = GraphBuilder::new();
    let t = modules(&mut builder, 3)?;
    builder.add_dependency(&t[2], &t[1])?;
    builder.add_dependency(&t[1], &t[0])?;
    let graph = builder.build();

    let closure = graph.closure(&t[2])?;
    let json = serde_json::to_string(&closure)?;
    assert_eq!(json, r#"["t2","t1"]"#);

    let back: Vec<Module> = serde_json::from_str(&json)?;
    assert_eq!(back, closure);
    Ok(())
}
