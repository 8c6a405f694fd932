//! Error kinds shared by every crate in the workspace.
//!
//! All validation happens synchronously at entry; the DP crates are total
//! on valid inputs. Internal consistency bugs (memo-key collisions,
//! decomposition preconditions) are asserted, not raised here.

use thiserror::Error;

/// Errors produced by the public API surface of this workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An input forest was empty when a non-empty forest was required.
    #[error("pointless concept: {0}")]
    PointlessConcept(String),

    /// An input is not an ordered directed forest (cycle, multiple parents,
    /// undirected edge in a directed context).
    #[error("unsupported graph: {0}")]
    UnsupportedGraph(String),

    /// A `node_affinity` argument was not one of the recognized tags.
    #[error("invalid node_affinity: {0}")]
    InvalidAffinity(String),

    /// A requested `impl` tag is not among `available_impls_*`.
    #[error("invalid impl {requested:?}, available: {available:?}")]
    InvalidImpl {
        /// The tag the caller asked for.
        requested: String,
        /// Tags this operation actually supports.
        available: Vec<String>,
    },

    /// A balanced-sequence argument is not balanced, or references a token
    /// outside `open_to_close`'s domain.
    #[error("invalid sequence: {0}")]
    InvalidSequence(String),
}

/// Convenience alias used throughout the workspace's library crates.
pub type Result<T> = std::result::Result<T, Error>;
