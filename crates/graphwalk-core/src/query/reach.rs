//! Reachability queries.

use std::collections::HashSet;
use std::ops::ControlFlow;

use crate::graph::{Adjacency, KeyedAdjacency, VisitedSet};

use super::Walker;

/// Outcome of an instrumented reachability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reachability {
    /// Whether the destination was found.
    pub reachable: bool,
    /// Nodes entered into the visited-set before the search ended.
    pub visited: usize,
}

impl Walker {
    /// Returns true if `destination` is reachable from `start` via zero or
    /// more edges. Zero edges only counts when both denote the same node.
    /// Handles issued by another graph count as absent endpoints.
    pub fn can_reach<G: Adjacency + ?Sized>(
        &self,
        graph: &G,
        start: Option<&G::Node>,
        destination: Option<&G::Node>,
    ) -> bool {
        self.trace_reach(graph, start, destination).reachable
    }

    /// Like [`can_reach`](Self::can_reach), also reporting how many nodes the
    /// search visited. The search stops at the first sighting of the
    /// destination.
    pub fn trace_reach<G: Adjacency + ?Sized>(
        &self,
        graph: &G,
        start: Option<&G::Node>,
        destination: Option<&G::Node>,
    ) -> Reachability {
        let endpoints = (
            start.filter(|node| graph.contains_node(node)),
            destination.filter(|node| graph.contains_node(node)),
        );
        let (Some(start), Some(destination)) = endpoints else {
            tracing::debug!(query = "can_reach", "Missing endpoint, not reachable");
            return Reachability::default();
        };
        if start == destination {
            return Reachability {
                reachable: true,
                visited: 0,
            };
        }

        let mut visited = VisitedSet::new();
        let flow = self.engine(graph).walk(Some(start), &mut visited, |node| {
            if node == destination {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        let outcome = Reachability {
            reachable: flow.is_break(),
            visited: visited.len(),
        };
        tracing::debug!(
            query = "can_reach",
            reachable = outcome.reachable,
            visited = outcome.visited,
            "Query finished"
        );
        outcome
    }

    /// Returns every node reachable from `start`, itself included, in
    /// first-visitation order.
    #[must_use]
    pub fn reachable<G: Adjacency + ?Sized>(
        &self,
        graph: &G,
        start: Option<&G::Node>,
    ) -> Vec<G::Node> {
        self.engine(graph).reachable(start)
    }

    /// Returns the keys of `graph` not reachable from `starting`.
    ///
    /// `starting` itself is reachable by the zero-edge rule and is therefore
    /// never in the result. A start that is not a key reaches nothing else,
    /// and an absent start leaves every key unreachable.
    #[must_use]
    pub fn unreachable<G: KeyedAdjacency + ?Sized>(
        &self,
        graph: &G,
        starting: Option<&G::Node>,
    ) -> HashSet<G::Node> {
        let mut visited = VisitedSet::new();
        let _ = self
            .engine(graph)
            .walk::<(), _>(starting, &mut visited, |_| ControlFlow::Continue(()));

        let unreached: HashSet<G::Node> = graph
            .keys()
            .filter(|key| !visited.contains(key))
            .cloned()
            .collect();
        tracing::debug!(
            query = "unreachable",
            reached = visited.len(),
            unreachable = unreached.len(),
            "Query finished"
        );
        unreached
    }
}
