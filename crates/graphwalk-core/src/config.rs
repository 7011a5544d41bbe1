//! Traversal configuration.
//!
//! Settings are layered with `figment`: built-in defaults, then an optional
//! TOML file, then `GRAPHWALK_*` environment variables.
//!
//! ```toml
//! # graphwalk.toml
//! strategy = "recursive"
//! dedup = "label"
//! ```

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "graphwalk.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "GRAPHWALK_";

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    /// A provider produced a value that does not fit the schema.
    #[error("failed to extract configuration: {0}")]
    Extract(#[from] figment::Error),
}

/// How the depth-first walk is executed.
///
/// Both strategies visit nodes in exactly the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Call-stack recursion. Depth is bounded by the thread's stack size.
    Recursive,
    /// Explicit frame stack on the heap.
    #[default]
    Iterative,
}

/// What the visited-set is keyed by in vertex-graph queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dedup {
    /// Distinct vertices are distinct nodes even when their labels are equal.
    #[default]
    Identity,
    /// Vertices with equal labels are collapsed: once a label has been seen,
    /// further vertices carrying it are neither reported nor expanded.
    Label,
}

/// Configuration shared by every query a [`Walker`](crate::Walker) runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Walk execution strategy.
    pub strategy: Strategy,
    /// Visited-set keying for the vertex-graph word and self-loop queries.
    /// Reachability queries ignore it and always dedup by node identity.
    pub dedup: Dedup,
}

impl TraversalConfig {
    /// Creates a config with the given strategy and dedup policy.
    #[must_use]
    pub fn new(strategy: Strategy, dedup: Dedup) -> Self {
        Self { strategy, dedup }
    }

    /// Sets the walk strategy (builder pattern).
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the dedup policy (builder pattern).
    #[must_use]
    pub fn with_dedup(mut self, dedup: Dedup) -> Self {
        self.dedup = dedup;
        self
    }

    /// Loads defaults, `graphwalk.toml` from the working directory if present,
    /// then `GRAPHWALK_*` environment overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Extract` if a provider holds an invalid value.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment().merge(Toml::file(CONFIG_FILE_NAME)))
    }

    /// Like [`load`](Self::load) but reads an explicit TOML file, which must exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::FileNotFound` if `path` is not a file, or
    /// `ConfigError::Extract` if a provider holds an invalid value.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Self::extract(Self::figment().merge(Toml::file(path)))
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        tracing::debug!(
            strategy = ?config.strategy,
            dedup = ?config.dedup,
            "Traversal configuration loaded"
        );
        Ok(config)
    }
}
