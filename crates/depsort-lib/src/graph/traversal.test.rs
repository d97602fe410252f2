use super::*;

const STRATEGIES: [TraversalStrategy; 2] =
    [TraversalStrategy::Recursive, TraversalStrategy::Iterative];

fn adjacency(lists: &[&[usize]]) -> Vec<Box<[NodeIndex]>> {
    lists
        .iter()
        .map(|deps| deps.iter().map(|&i| NodeIndex::new(i)).collect())
        .collect()
}

fn indices(nodes: &[NodeIndex]) -> Vec<usize> {
    nodes.iter().map(|n| n.index()).collect()
}

/// Pin `root`, visit its children, return the raw post-order
fn closure_post_order(
    deps: &[Box<[NodeIndex]>],
    root: usize,
    strategy: TraversalStrategy,
) -> Result<Vec<usize>, Vec<usize>> {
    let mut walker = Walker::new(deps);
    let root = NodeIndex::new(root);
    walker.pin(root);
    for &child in deps[root.index()].iter() {
        walker.visit(child, strategy).map_err(|c| indices(&c))?;
    }
    Ok(indices(&walker.into_post_order()))
}

#[test]
fn test_post_order_emits_dependencies_first() {
    // 3 -> 2 -> 1 -> 0
    let deps = adjacency(&[&[], &[0], &[1], &[2]]);
    for strategy in STRATEGIES {
        assert_eq!(closure_post_order(&deps, 3, strategy).unwrap(), vec![0, 1, 2]);
    }
}

#[test]
fn test_root_is_never_emitted() {
    let deps = adjacency(&[&[], &[0]]);
    for strategy in STRATEGIES {
        let order = closure_post_order(&deps, 1, strategy).unwrap();
        assert!(!order.contains(&1));
    }
}

#[test]
fn test_shared_node_emitted_once() {
    // 3 -> {1, 2}, 1 -> 0, 2 -> 0
    let deps = adjacency(&[&[], &[0], &[0], &[1, 2]]);
    for strategy in STRATEGIES {
        assert_eq!(closure_post_order(&deps, 3, strategy).unwrap(), vec![0, 1, 2]);
    }
}

#[test]
fn test_back_edge_to_root_is_a_cycle() {
    // 0 -> 1 -> 0
    let deps = adjacency(&[&[1], &[0]]);
    for strategy in STRATEGIES {
        let cycle = closure_post_order(&deps, 0, strategy).unwrap_err();
        assert_eq!(cycle, vec![0, 1, 0]);
    }
}

#[test]
fn test_cycle_below_root_reports_only_the_loop() {
    // 0 -> 1 -> 2 -> 3 -> 1
    let deps = adjacency(&[&[1], &[2], &[3], &[1]]);
    for strategy in STRATEGIES {
        let cycle = closure_post_order(&deps, 0, strategy).unwrap_err();
        assert_eq!(cycle, vec![1, 2, 3, 1]);
    }
}

#[test]
fn test_unpinned_walk_covers_every_root() {
    // 0 -> 1, 2 isolated, 3 -> 2
    let deps = adjacency(&[&[1], &[], &[], &[2]]);
    for strategy in STRATEGIES {
        let mut walker = Walker::new(&deps);
        for i in 0..deps.len() {
            walker.visit(NodeIndex::new(i), strategy).unwrap();
        }
        assert_eq!(indices(&walker.into_post_order()), vec![1, 0, 2, 3]);
    }
}

#[test]
fn test_deep_chain_iterative() {
    // i -> i - 1 for a chain long enough to matter for the heap-based walk
    let n = 50_000;
    let deps: Vec<Box<[NodeIndex]>> = (0..n)
        .map(|i| {
            if i == 0 {
                Vec::new().into_boxed_slice()
            } else {
                vec![NodeIndex::new(i - 1)].into_boxed_slice()
            }
        })
        .collect();

    let order = closure_post_order(&deps, n - 1, TraversalStrategy::Iterative).unwrap();
    assert_eq!(order.len(), n - 1);
    assert_eq!(order.first(), Some(&0));
    assert_eq!(order.last(), Some(&(n - 2)));
}
