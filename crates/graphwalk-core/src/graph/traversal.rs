//! Depth-first traversal engine.
//!
//! Every query in this crate is a [`DepthFirst`] walk with a different visit
//! action. The walk marks a node visited *before* descending into its
//! successors, so self-loops and longer cycles terminate, and it applies the
//! visit action exactly once per node, in pre-order, following adjacency order.
//!
//! The action returns [`ControlFlow`]; `Break` stops the walk at once and is
//! handed back to the caller.

use std::ops::ControlFlow;

use crate::config::Strategy;

use super::adjacency::Adjacency;
use super::visited::VisitedSet;

/// Reusable depth-first walker over one graph.
#[derive(Debug)]
pub struct DepthFirst<'g, G: ?Sized> {
    graph: &'g G,
    strategy: Strategy,
}

impl<G: ?Sized> Clone for DepthFirst<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: ?Sized> Copy for DepthFirst<'_, G> {}

impl<'g, G: Adjacency + ?Sized> DepthFirst<'g, G> {
    /// Creates a walker using the given execution strategy.
    #[must_use]
    pub fn new(graph: &'g G, strategy: Strategy) -> Self {
        Self { graph, strategy }
    }

    /// Returns the execution strategy.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Walks from `start`, keying the visited-set by node identity.
    ///
    /// Returns immediately if `start` is `None`, foreign to the graph or
    /// already visited.
    pub fn walk<B, V>(
        &self,
        start: Option<&G::Node>,
        visited: &mut VisitedSet<G::Node>,
        visit: V,
    ) -> ControlFlow<B>
    where
        V: FnMut(&G::Node) -> ControlFlow<B>,
    {
        self.walk_keyed(start, visited, <G::Node as Clone>::clone, visit)
    }

    /// Walks from `start`, keying the visited-set by `key(node)`.
    ///
    /// Nodes whose key was already seen are neither visited nor expanded. A
    /// start the graph does not contain is treated as absent.
    pub fn walk_keyed<K, B, F, V>(
        &self,
        start: Option<&G::Node>,
        visited: &mut VisitedSet<K>,
        key: F,
        mut visit: V,
    ) -> ControlFlow<B>
    where
        K: Eq + std::hash::Hash,
        F: Fn(&G::Node) -> K,
        V: FnMut(&G::Node) -> ControlFlow<B>,
    {
        let Some(start) = start.filter(|node| self.graph.contains_node(node)) else {
            return ControlFlow::Continue(());
        };
        match self.strategy {
            Strategy::Recursive => {
                descend(self.graph, start, 0, visited, &key, &mut visit)
            }
            Strategy::Iterative => walk_stack(self.graph, start, visited, &key, &mut visit),
        }
    }

    /// Returns every node reachable from `start` (itself included) in
    /// first-visitation order.
    #[must_use]
    pub fn reachable(&self, start: Option<&G::Node>) -> Vec<G::Node> {
        let mut order = Vec::new();
        let mut visited = VisitedSet::new();
        let _ = self.walk::<(), _>(start, &mut visited, |node| {
            order.push(node.clone());
            ControlFlow::Continue(())
        });
        order
    }
}

fn descend<G, K, B, F, V>(
    graph: &G,
    node: &G::Node,
    depth: usize,
    visited: &mut VisitedSet<K>,
    key: &F,
    visit: &mut V,
) -> ControlFlow<B>
where
    G: Adjacency + ?Sized,
    K: Eq + std::hash::Hash,
    F: Fn(&G::Node) -> K,
    V: FnMut(&G::Node) -> ControlFlow<B>,
{
    if !visited.try_visit(key(node)) {
        return ControlFlow::Continue(());
    }
    tracing::trace!(depth, visited = visited.len(), "Node visited");
    visit(node)?;

    for next in graph.successors(node) {
        descend(graph, next, depth + 1, visited, key, visit)?;
    }
    ControlFlow::Continue(())
}

/// Same visiting order as [`descend`], with one frame per open node kept on
/// the heap instead of the call stack.
fn walk_stack<G, K, B, F, V>(
    graph: &G,
    start: &G::Node,
    visited: &mut VisitedSet<K>,
    key: &F,
    visit: &mut V,
) -> ControlFlow<B>
where
    G: Adjacency + ?Sized,
    K: Eq + std::hash::Hash,
    F: Fn(&G::Node) -> K,
    V: FnMut(&G::Node) -> ControlFlow<B>,
{
    if !visited.try_visit(key(start)) {
        return ControlFlow::Continue(());
    }
    tracing::trace!(depth = 0usize, visited = visited.len(), "Node visited");
    visit(start)?;

    let mut frames = vec![graph.successors(start).iter()];
    while let Some(frame) = frames.last_mut() {
        let Some(next) = frame.next() else {
            frames.pop();
            continue;
        };
        if !visited.try_visit(key(next)) {
            continue;
        }
        tracing::trace!(depth = frames.len(), visited = visited.len(), "Node visited");
        visit(next)?;
        frames.push(graph.successors(next).iter());
    }
    ControlFlow::Continue(())
}
