//! Reconstruction: turn a DP-returned sub-sequence back into an induced
//! forest, reusing the codec's inverse direction.

use mcose_core::{Forest, Result, Sequence, TokenId};
use mcose_seq::seq_to_tree;
use std::collections::HashMap;
use std::hash::Hash;

/// Decode `sub` (a sub-sequence of some encoded forest) back into the
/// forest it induces, recovering each surviving node's original label via
/// `label_of`.
///
/// # Errors
/// Returns [`mcose_core::Error::InvalidSequence`] if `sub` is not balanced
/// or references a token absent from `open_to_node` — both implementation
/// bugs in the DP if they ever happen on a DP-produced witness.
pub fn reconstruct<N, L>(
    sub: &Sequence,
    open_to_node: &HashMap<TokenId, N>,
    label_of: impl Fn(N) -> L,
) -> Result<Forest<L>>
where
    N: Copy + Eq + Hash + std::fmt::Debug,
    L: Clone + Eq + Hash,
{
    seq_to_tree(sub, open_to_node, label_of)
}
