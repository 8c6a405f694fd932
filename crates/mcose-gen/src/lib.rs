// crates/mcose-gen/src/lib.rs

//! Random balanced sequences, random ordered forests, and ascii
//! pretty-printing — the generation/visualization adapters around the core
//! DP, external to it.

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

pub mod display;
pub mod random;

pub use display::forest_str;
pub use random::{random_balanced_sequence, random_ordered_forest};
