//! Graph model and traversal engine.
//!
//! Three representations share one walker:
//! - [`VertexGraph`]: labeled vertices with identity-based handles
//! - [`FlightNetwork`]: airports connected by outbound flights
//! - adjacency maps (`HashMap`, `BTreeMap`, `IndexMap` from a value to its
//!   successor values)
//!
//! # Example
//!
//! ```rust
//! use graphwalk_core::config::Strategy;
//! use graphwalk_core::graph::{DepthFirst, VertexGraph};
//!
//! let mut graph = VertexGraph::new();
//! let a = graph.add_vertex("a");
//! let b = graph.add_vertex("b");
//! graph.add_edge(a, b).unwrap();
//! graph.add_edge(b, a).unwrap();
//!
//! let order = DepthFirst::new(&graph, Strategy::Iterative).reachable(Some(&a));
//! assert_eq!(order, vec![a, b]);
//! ```

mod adjacency;
mod airport;
pub mod traversal;
mod vertex;
mod visited;


pub use adjacency::{Adjacency, KeyedAdjacency};
pub use airport::{Airport, AirportId, FlightNetwork};
pub use traversal::DepthFirst;
pub use vertex::{Vertex, VertexGraph, VertexId};
pub use visited::VisitedSet;
