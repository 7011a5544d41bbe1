//! Fuzz target for vertex-graph queries.
//!
//! Builds a graph with arbitrary labels, cycles and self-loops and runs every
//! query under both strategies to find:
//! - Panics on, or non-empty answers for, handles issued by another graph
//! - Non-termination on cyclic input
//! - Divergence between recursive and iterative walks
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_traversal
//! ```

#![no_main]

use arbitrary::Arbitrary;
use graphwalk_core::{Dedup, Strategy, TraversalConfig, VertexGraph, VertexId, Walker};
use libfuzzer_sys::fuzz_target;

/// Fuzzing input for a small labeled graph.
#[derive(Arbitrary, Debug)]
struct GraphInput {
    /// Vertex labels (truncated to a reasonable count)
    labels: Vec<String>,
    /// Edges as raw indices, reduced modulo the vertex count
    edges: Vec<(u16, u16)>,
    /// Start index; past the vertex count it names a handle from another graph
    start: u16,
    /// Short-word threshold
    k: u8,
    /// Use label-keyed dedup
    by_label: bool,
}

fuzz_target!(|input: GraphInput| {
    // Limit graph size to keep iterations fast
    let max_vertices = 512;
    let labels: Vec<String> = input.labels.into_iter().take(max_vertices).collect();
    if labels.is_empty() {
        return;
    }

    let mut graph = VertexGraph::with_capacity(labels.len());
    let ids: Vec<VertexId> = labels.into_iter().map(|l| graph.add_vertex(l)).collect();
    for (from, to) in input.edges.into_iter().take(max_vertices * 4) {
        let from = ids[usize::from(from) % ids.len()];
        let to = ids[usize::from(to) % ids.len()];
        graph.add_edge(from, to).expect("edge endpoints are in range");
    }

    // Handles are minted by a separate graph so indices past `ids` are
    // genuinely foreign to `graph`
    let start_index = usize::from(input.start) % (max_vertices * 2);
    let mut issuer = VertexGraph::with_capacity(start_index + 1);
    let mut minted = issuer.add_vertex(());
    for _ in 0..start_index {
        minted = issuer.add_vertex(());
    }
    let foreign = !graph.contains(minted);
    let start = Some(minted);
    let dedup = if input.by_label { Dedup::Label } else { Dedup::Identity };
    let k = usize::from(input.k);

    let mut outputs = Vec::new();
    for strategy in [Strategy::Recursive, Strategy::Iterative] {
        let walker = Walker::new(TraversalConfig::new(strategy, dedup));
        let mut short: Vec<String> = Vec::new();
        let mut loopers: Vec<String> = Vec::new();
        walker
            .print_short_words(&graph, start, k, &mut short)
            .expect("vec sink never fails");
        walker
            .print_self_loopers(&graph, start, &mut loopers)
            .expect("vec sink never fails");
        outputs.push((short, loopers, walker.longest_word(&graph, start)));
    }
    assert_eq!(outputs[0], outputs[1], "strategies diverged");

    let walker = Walker::default();
    if foreign {
        // A foreign start must behave exactly like an absent one
        let (short, loopers, longest) = &outputs[0];
        assert!(short.is_empty() && loopers.is_empty() && longest.is_empty());
        assert!(!walker.can_reach(&graph, Some(&minted), Some(&minted)));
        assert!(walker.reachable(&graph, Some(&minted)).is_empty());
        for id in &ids {
            assert!(!walker.can_reach(&graph, Some(&minted), Some(id)));
            assert!(!walker.can_reach(&graph, Some(id), Some(&minted)));
        }
    } else {
        for id in &ids {
            let _ = walker.trace_reach(&graph, Some(&minted), Some(id));
        }
    }
});
