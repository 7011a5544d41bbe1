//! Graph access traits used by the traversal engine.
//!
//! Any graph representation can be walked once it implements [`Adjacency`].
//! Plain maps from a value to its successor values implement it directly,
//! treating values that are not keys as sinks with no outgoing edges.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

/// Trait for graph traversal: any graph store can implement this.
pub trait Adjacency {
    /// Node handle. Equality and hashing define node identity for a walk.
    type Node: Clone + Eq + Hash;

    /// Returns the direct successors of `node` in adjacency order.
    ///
    /// Nodes without recorded adjacency return an empty slice; this must never
    /// panic for a node the graph does not know.
    fn successors(&self, node: &Self::Node) -> &[Self::Node];

    /// Returns true if `node` may be walked in this graph.
    ///
    /// Arena graphs reject handles issued by another graph. Maps accept any
    /// value, since a non-key is a valid sink.
    fn contains_node(&self, _node: &Self::Node) -> bool {
        true
    }
}

/// Graphs that can enumerate their nodes (the keys of an adjacency map).
pub trait KeyedAdjacency: Adjacency {
    /// Iterates over every key of the graph.
    fn keys(&self) -> impl Iterator<Item = &Self::Node>;

    /// Returns true if `node` is a key of the graph.
    fn contains_key(&self, node: &Self::Node) -> bool;
}

impl<T, S> Adjacency for HashMap<T, Vec<T>, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    type Node = T;

    fn successors(&self, node: &T) -> &[T] {
        self.get(node).map_or(&[], Vec::as_slice)
    }
}

impl<T, S> KeyedAdjacency for HashMap<T, Vec<T>, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    fn keys(&self) -> impl Iterator<Item = &T> {
        HashMap::keys(self)
    }

    fn contains_key(&self, node: &T) -> bool {
        HashMap::contains_key(self, node)
    }
}

impl<T> Adjacency for BTreeMap<T, Vec<T>>
where
    T: Clone + Ord + Hash,
{
    type Node = T;

    fn successors(&self, node: &T) -> &[T] {
        self.get(node).map_or(&[], Vec::as_slice)
    }
}

impl<T> KeyedAdjacency for BTreeMap<T, Vec<T>>
where
    T: Clone + Ord + Hash,
{
    fn keys(&self) -> impl Iterator<Item = &T> {
        BTreeMap::keys(self)
    }

    fn contains_key(&self, node: &T) -> bool {
        BTreeMap::contains_key(self, node)
    }
}

impl<T, S> Adjacency for IndexMap<T, Vec<T>, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    type Node = T;

    fn successors(&self, node: &T) -> &[T] {
        self.get(node).map_or(&[], Vec::as_slice)
    }
}

impl<T, S> KeyedAdjacency for IndexMap<T, Vec<T>, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    fn keys(&self) -> impl Iterator<Item = &T> {
        IndexMap::keys(self)
    }

    fn contains_key(&self, node: &T) -> bool {
        IndexMap::contains_key(self, node)
    }
}
