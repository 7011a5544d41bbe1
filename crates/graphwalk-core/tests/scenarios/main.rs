//! End-to-end scenarios for the traversal queries.
//!
//! Each submodule builds a small graph of one kind and runs the public
//! queries against it under both walk strategies.

mod adjacency_maps;
mod flights;
mod helpers;
mod words;
