// crates/mcose-dp/src/lib.rs

//! The memoized balanced-sequence dynamic program: longest common balanced
//! embedding/isomorphism over token sequences, and the tree-level facades
//! built on top of them.

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

pub mod embedding;
pub mod facade;
pub mod isomorphism;
pub mod memo;
pub mod reconstruct;
pub mod strategy;
pub mod tree_embedding;
pub mod tree_isomorphism;

pub use embedding::longest_common_balanced_embedding;
pub use isomorphism::longest_common_balanced_isomorphism;
pub use memo::{DpResult, Memo, Witness};
pub use reconstruct::reconstruct;
pub use strategy::{
    available_impls, available_impls_longest_common_balanced_embedding,
    available_impls_longest_common_balanced_isomorphism, Strategy,
};
pub use tree_embedding::{maximum_common_ordered_subtree_embedding, MatchResult};
pub use tree_isomorphism::maximum_common_ordered_subtree_isomorphism;
