//! Self-loop detection.

use std::hash::Hash;
use std::ops::ControlFlow;

use crate::error::Result;
use crate::graph::{VertexGraph, VertexId};

use super::{resolve_start, LabelSink, Walker};

impl Walker {
    /// Emits the label of every reachable vertex whose neighbor list contains
    /// itself, in first-visitation order.
    ///
    /// The self-loop test is always by vertex identity: a neighbor that merely
    /// carries an equal label does not count.
    pub fn print_self_loopers<T, S>(
        &self,
        graph: &VertexGraph<T>,
        start: Option<VertexId>,
        mut sink: S,
    ) -> Result<()>
    where
        T: Eq + Hash,
        S: LabelSink<T>,
    {
        let Some(start) = resolve_start(graph, start) else {
            tracing::debug!(query = "print_self_loopers", "No start vertex, nothing to emit");
            return Ok(());
        };

        let mut emitted = 0usize;
        let (flow, visited) = self.walk_vertices(graph, start, |id| {
            if graph.has_self_loop(id) {
                if let Err(err) = sink.emit(graph[id].label()) {
                    return ControlFlow::Break(err);
                }
                emitted += 1;
            }
            ControlFlow::Continue(())
        });

        tracing::debug!(query = "print_self_loopers", visited, emitted, "Query finished");
        if let ControlFlow::Break(err) = flow {
            tracing::warn!(query = "print_self_loopers", error = %err, "Sink rejected a label");
            return Err(err.into());
        }
        Ok(())
    }
}
