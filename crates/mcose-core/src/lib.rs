// crates/mcose-core/src/lib.rs

//! Core types shared across the MCOSE/MCOSI workspace: the token alphabet,
//! the balanced-sequence container, the ordered-forest adapter contract,
//! node-affinity selection, and the shared `Error` type.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]

pub mod affinity;
pub mod error;
pub mod forest;
pub mod sequence;
pub mod token;

pub use affinity::NodeAffinity;
pub use error::{Error, Result};
pub use forest::{Forest, OrderedForest};
pub use sequence::Sequence;
pub use token::{OpenToClose, Token, TokenId, TokenKind};
