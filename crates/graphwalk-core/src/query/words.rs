//! Word queries over string-labeled vertex graphs.

use std::hash::Hash;
use std::ops::ControlFlow;

use crate::error::Result;
use crate::graph::{VertexGraph, VertexId};

use super::{resolve_start, LabelSink, Walker};

/// Label length in Unicode scalar values.
fn word_len<T: AsRef<str> + ?Sized>(label: &T) -> usize {
    label.as_ref().chars().count()
}

impl Walker {
    /// Emits every reachable label shorter than `k` characters, once per
    /// visited vertex, in depth-first pre-order.
    ///
    /// With [`Dedup::Identity`](crate::config::Dedup::Identity) two vertices
    /// sharing a label each emit it; with
    /// [`Dedup::Label`](crate::config::Dedup::Label) it is emitted once.
    pub fn print_short_words<T, S>(
        &self,
        graph: &VertexGraph<T>,
        start: Option<VertexId>,
        k: usize,
        mut sink: S,
    ) -> Result<()>
    where
        T: AsRef<str> + Eq + Hash,
        S: LabelSink<T>,
    {
        let Some(start) = resolve_start(graph, start) else {
            tracing::debug!(query = "print_short_words", "No start vertex, nothing to emit");
            return Ok(());
        };

        let mut emitted = 0usize;
        let (flow, visited) = self.walk_vertices(graph, start, |id| {
            let label = graph[id].label();
            if word_len(label) < k {
                if let Err(err) = sink.emit(label) {
                    return ControlFlow::Break(err);
                }
                emitted += 1;
            }
            ControlFlow::Continue(())
        });

        tracing::debug!(query = "print_short_words", k, visited, emitted, "Query finished");
        if let ControlFlow::Break(err) = flow {
            tracing::warn!(query = "print_short_words", error = %err, "Sink rejected a label");
            return Err(err.into());
        }
        Ok(())
    }

    /// Returns the longest label reachable from `start`, including its own.
    ///
    /// Among labels of equal length the first one in pre-order wins. Returns
    /// an empty string when `start` is absent.
    #[must_use]
    pub fn longest_word<T>(&self, graph: &VertexGraph<T>, start: Option<VertexId>) -> String
    where
        T: AsRef<str> + Eq + Hash,
    {
        let Some(start) = resolve_start(graph, start) else {
            return String::new();
        };

        let mut longest: Option<(&T, usize)> = None;
        let (_, visited) = self.walk_vertices::<_, (), _>(graph, start, |id| {
            let label = graph[id].label();
            let len = word_len(label);
            if longest.is_none_or(|(_, best)| len > best) {
                longest = Some((label, len));
            }
            ControlFlow::Continue(())
        });

        let word = longest.map_or_else(String::new, |(label, _)| label.as_ref().to_owned());
        tracing::debug!(query = "longest_word", visited, len = word_len(&word), "Query finished");
        word
    }
}
