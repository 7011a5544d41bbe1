//! Shared builders for scenario tests.

use graphwalk_core::{
    Dedup, FlightNetwork, Result, Strategy, TraversalConfig, VertexGraph, VertexId, Walker,
};

/// Installs a test-writer subscriber once; later calls are no-ops.
///
/// Set `RUST_LOG=graphwalk_core=trace` to see per-node traversal events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Walkers for every strategy with the given dedup policy.
pub fn walkers(dedup: Dedup) -> [Walker; 2] {
    [Strategy::Recursive, Strategy::Iterative]
        .map(|strategy| Walker::new(TraversalConfig::new(strategy, dedup)))
}

/// Builds a string-labeled vertex graph. Edges index into `labels`.
pub fn word_graph(
    labels: &[&str],
    edges: &[(usize, usize)],
) -> Result<(VertexGraph<String>, Vec<VertexId>)> {
    let mut graph = VertexGraph::with_capacity(labels.len());
    let ids: Vec<VertexId> = labels
        .iter()
        .map(|label| graph.add_vertex((*label).to_string()))
        .collect();
    for &(from, to) in edges {
        graph.add_edge(ids[from], ids[to])?;
    }
    Ok((graph, ids))
}

/// Builds a flight network from airport codes and `(from, to)` routes.
pub fn flight_network(codes: &[&str], routes: &[(&str, &str)]) -> Result<FlightNetwork> {
    let mut network = FlightNetwork::new();
    for code in codes {
        network.add_airport(code)?;
    }
    for (from, to) in routes {
        network.add_route(from, to)?;
    }
    Ok(network)
}
