//! Queries over plain adjacency maps.

use std::collections::{BTreeMap, HashMap, HashSet};

use graphwalk_core::{can_reach, reachable, unreachable, Dedup};
use indexmap::IndexMap;

use crate::helpers::{init_tracing, walkers};

const EDGES: [(&str, &[&str]); 3] = [("A", &["B"]), ("B", &[]), ("C", &["A"])];

fn adjacency<M: FromIterator<(&'static str, Vec<&'static str>)>>() -> M {
    EDGES
        .iter()
        .map(|(key, successors)| (*key, successors.to_vec()))
        .collect()
}

#[test]
fn test_unreachable_from_a_is_c() {
    init_tracing();
    let expected = HashSet::from(["C"]);

    assert_eq!(unreachable(&adjacency::<HashMap<_, _>>(), Some(&"A")), expected);
    assert_eq!(unreachable(&adjacency::<BTreeMap<_, _>>(), Some(&"A")), expected);
    assert_eq!(unreachable(&adjacency::<IndexMap<_, _>>(), Some(&"A")), expected);
}

#[test]
fn test_unreachable_from_c_is_empty() {
    init_tracing();
    let graph: HashMap<_, _> = adjacency();
    for walker in walkers(Dedup::Identity) {
        assert!(walker.unreachable(&graph, Some(&"C")).is_empty());
    }
}

#[test]
fn test_unknown_or_absent_start_leaves_every_key() {
    init_tracing();
    let graph: BTreeMap<_, _> = adjacency();
    let all = HashSet::from(["A", "B", "C"]);

    assert_eq!(unreachable(&graph, Some(&"Z")), all);
    assert_eq!(unreachable(&graph, None), all);
}

#[test]
fn test_can_reach_against_direction() {
    init_tracing();
    let graph: IndexMap<_, _> = adjacency();

    assert!(can_reach(&graph, Some(&"C"), Some(&"B")));
    assert!(!can_reach(&graph, Some(&"B"), Some(&"C")));
    assert_eq!(reachable(&graph, Some(&"C")), ["C", "A", "B"]);
}
