//! Fuzz target for adjacency-map reachability.
//!
//! Successor values need not be keys; those must be treated as sinks and the
//! reachable and unreachable sets must partition the keys.
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_adjacency_map
//! ```

#![no_main]

use std::collections::{HashMap, HashSet};

use graphwalk_core::{can_reach, reachable, unreachable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (HashMap<u8, Vec<u8>>, u8)| {
    let (graph, start) = input;

    let reached: HashSet<u8> = reachable(&graph, Some(&start)).into_iter().collect();
    let unreached = unreachable(&graph, Some(&start));

    assert!(!unreached.contains(&start));
    for key in graph.keys() {
        assert_ne!(reached.contains(key), unreached.contains(key), "key {key} in both or neither");
        assert_eq!(can_reach(&graph, Some(&start), Some(key)), reached.contains(key));
    }
});
