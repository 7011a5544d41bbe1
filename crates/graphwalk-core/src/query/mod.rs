//! Analytical queries built on the depth-first engine.
//!
//! Each query validates its inputs, creates a fresh visited-set and
//! accumulator, runs one walk and discards all per-call state on return.
//! Absent inputs never fail: print queries emit nothing, [`longest_word`]
//! returns `""`, [`can_reach`] returns `false` and [`unreachable`] returns
//! every key.
//!
//! The free functions run with [`TraversalConfig::default`]; use a
//! [`Walker`] to pick a strategy or label-based dedup.
//!
//! # Example
//!
//! ```rust
//! use graphwalk_core::graph::VertexGraph;
//! use graphwalk_core::query::{longest_word, print_short_words};
//!
//! let mut graph = VertexGraph::new();
//! let a = graph.add_vertex("cat".to_string());
//! let b = graph.add_vertex("elephant".to_string());
//! graph.add_edge(a, b).unwrap();
//! graph.add_edge(b, a).unwrap();
//!
//! assert_eq!(longest_word(&graph, Some(a)), "elephant");
//!
//! let mut short: Vec<String> = Vec::new();
//! print_short_words(&graph, Some(a), 4, &mut short).unwrap();
//! assert_eq!(short, vec!["cat".to_string()]);
//! ```

mod loops;
mod reach;
mod sink;
mod words;


use std::collections::HashSet;
use std::hash::Hash;
use std::ops::ControlFlow;

use crate::config::{Dedup, TraversalConfig};
use crate::error::Result;
use crate::graph::{Adjacency, DepthFirst, KeyedAdjacency, VertexGraph, VertexId, VisitedSet};

pub use reach::Reachability;
pub use sink::{LabelSink, LineSink};

/// Runs queries with a fixed [`TraversalConfig`].
///
/// The strategy applies to every query. The dedup policy only applies to the
/// vertex-graph queries ([`print_short_words`](Walker::print_short_words),
/// [`longest_word`](Walker::longest_word) and
/// [`print_self_loopers`](Walker::print_self_loopers)); [`can_reach`](Walker::can_reach),
/// [`reachable`](Walker::reachable) and [`unreachable`](Walker::unreachable)
/// always key the visited-set by node identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Walker {
    config: TraversalConfig,
}

impl Walker {
    /// Creates a walker with the given configuration.
    #[must_use]
    pub fn new(config: TraversalConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    fn engine<'g, G: Adjacency + ?Sized>(&self, graph: &'g G) -> DepthFirst<'g, G> {
        DepthFirst::new(graph, self.config.strategy)
    }

    /// Walks a vertex graph from `start` under the configured dedup policy.
    ///
    /// Returns the walk outcome and the number of visited-set entries.
    fn walk_vertices<T, B, V>(
        &self,
        graph: &VertexGraph<T>,
        start: VertexId,
        mut visit: V,
    ) -> (ControlFlow<B>, usize)
    where
        T: Eq + Hash,
        V: FnMut(VertexId) -> ControlFlow<B>,
    {
        let engine = self.engine(graph);
        match self.config.dedup {
            Dedup::Identity => {
                let mut visited = VisitedSet::new();
                let flow = engine.walk(Some(&start), &mut visited, |id| visit(*id));
                (flow, visited.len())
            }
            Dedup::Label => {
                let mut visited = VisitedSet::new();
                let flow = engine.walk_keyed(
                    Some(&start),
                    &mut visited,
                    |id| graph[*id].label(),
                    |id| visit(*id),
                );
                (flow, visited.len())
            }
        }
    }
}

/// Resolves an optional start handle, treating foreign handles as absent.
fn resolve_start<T>(graph: &VertexGraph<T>, start: Option<VertexId>) -> Option<VertexId> {
    start.filter(|id| graph.contains(*id))
}

/// Emits every reachable label shorter than `k` characters, once each, in
/// depth-first pre-order.
///
/// # Errors
///
/// Returns `Error::Sink` if the sink fails; the walk stops at that label.
pub fn print_short_words<T, S>(
    graph: &VertexGraph<T>,
    start: Option<VertexId>,
    k: usize,
    sink: S,
) -> Result<()>
where
    T: AsRef<str> + Eq + Hash,
    S: LabelSink<T>,
{
    Walker::default().print_short_words(graph, start, k, sink)
}

/// Returns the longest reachable label, the first one in pre-order on ties.
#[must_use]
pub fn longest_word<T>(graph: &VertexGraph<T>, start: Option<VertexId>) -> String
where
    T: AsRef<str> + Eq + Hash,
{
    Walker::default().longest_word(graph, start)
}

/// Emits the label of every reachable vertex that is its own neighbor.
///
/// # Errors
///
/// Returns `Error::Sink` if the sink fails.
pub fn print_self_loopers<T, S>(
    graph: &VertexGraph<T>,
    start: Option<VertexId>,
    sink: S,
) -> Result<()>
where
    T: Eq + Hash,
    S: LabelSink<T>,
{
    Walker::default().print_self_loopers(graph, start, sink)
}

/// Returns true if `destination` is reachable from `start`.
pub fn can_reach<G: Adjacency + ?Sized>(
    graph: &G,
    start: Option<&G::Node>,
    destination: Option<&G::Node>,
) -> bool {
    Walker::default().can_reach(graph, start, destination)
}

/// Returns every node reachable from `start`, itself included, in pre-order.
#[must_use]
pub fn reachable<G: Adjacency + ?Sized>(graph: &G, start: Option<&G::Node>) -> Vec<G::Node> {
    Walker::default().reachable(graph, start)
}

/// Returns the keys of `graph` that are not reachable from `starting`.
#[must_use]
pub fn unreachable<G: KeyedAdjacency + ?Sized>(
    graph: &G,
    starting: Option<&G::Node>,
) -> HashSet<G::Node> {
    Walker::default().unreachable(graph, starting)
}
