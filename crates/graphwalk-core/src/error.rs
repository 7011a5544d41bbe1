//! Error types for graphwalk-core.
//!
//! Queries themselves never fail on graph input: absent starts and missing
//! adjacency degrade to empty results. Errors only come from building graphs,
//! writing to an output sink, or loading configuration.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by graph construction, sinks and configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// A vertex id does not belong to the graph it was used with.
    #[error("Vertex {0} not found")]
    VertexNotFound(usize),

    /// No airport is registered under the given code.
    #[error("Airport '{0}' not found")]
    AirportNotFound(String),

    /// An airport with the same code is already registered.
    #[error("Airport '{0}' already exists")]
    AirportExists(String),

    /// Airport codes must contain at least one non-whitespace character.
    #[error("Invalid airport code: {0:?}")]
    InvalidAirportCode(String),

    /// The output sink rejected a label.
    #[error("Sink error: {0}")]
    Sink(#[from] std::io::Error),

    /// Configuration could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for graphwalk operations.
pub type Result<T> = std::result::Result<T, Error>;
