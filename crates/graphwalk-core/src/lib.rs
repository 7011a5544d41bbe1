//! # `graphwalk` Core
//!
//! Cycle-safe depth-first traversal over labeled directed graphs, and the
//! reachability queries built on it.
//!
//! ## Features
//!
//! - **Three graph shapes**: labeled vertex arenas, airport flight networks and
//!   plain adjacency maps (`HashMap`, `BTreeMap`, `IndexMap`)
//! - **One engine**: pre-order DFS that marks nodes before descending, so
//!   self-loops and cycles always terminate
//! - **Two strategies**: call-stack recursion or an explicit frame stack,
//!   with identical visiting order
//! - **Five queries**: short words, longest word, self-loopers, point-to-point
//!   reachability and the unreachable key set
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::{HashMap, HashSet};
//! use graphwalk_core::graph::FlightNetwork;
//! use graphwalk_core::query::{can_reach, unreachable};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut network = FlightNetwork::new();
//!     let jfk = network.add_airport("JFK")?;
//!     let lhr = network.add_airport("LHR")?;
//!     let lax = network.add_airport("LAX")?;
//!     network.add_flight(jfk, lhr)?;
//!     network.add_flight(lhr, jfk)?;
//!
//!     assert!(can_reach(&network, Some(&jfk), Some(&lhr)));
//!     assert!(!can_reach(&network, Some(&jfk), Some(&lax)));
//!
//!     let graph = HashMap::from([("A", vec!["B"]), ("B", vec![]), ("C", vec!["A"])]);
//!     assert_eq!(unreachable(&graph, Some(&"A")), HashSet::from(["C"]));
//!     Ok(())
//! }
//! ```
//!
//! Logging goes through `tracing`; the crate never installs a subscriber.

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(test, allow(clippy::doc_markdown, clippy::uninlined_format_args))]

pub mod config;
pub mod error;
pub mod graph;
pub mod query;


pub use config::{ConfigError, Dedup, Strategy, TraversalConfig};
pub use error::{Error, Result};
pub use graph::{
    Adjacency, Airport, AirportId, DepthFirst, FlightNetwork, KeyedAdjacency, Vertex, VertexGraph,
    VertexId, VisitedSet,
};
pub use query::{
    can_reach, longest_word, print_self_loopers, print_short_words, reachable, unreachable,
    LabelSink, LineSink, Reachability, Walker,
};
