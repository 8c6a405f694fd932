// crates/mcose-seq/src/lib.rs

//! Tree/forest &harr; balanced-sequence codec, the decomposition primitive,
//! and the external container encodings.

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

pub mod codec;
pub mod container;
pub mod decompose;

pub use codec::{seq_to_tree, tree_to_seq, Encoded};
pub use container::{decode, encode, ContainerType, ExternalSequence, ItemType};
pub use decompose::decompose;
