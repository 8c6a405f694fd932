//! Top-level entry point: maximum common ordered subtree embedding over two
//! tree-level forests.

use crate::embedding::longest_common_balanced_embedding;
use crate::facade::Setup;
use crate::reconstruct::reconstruct;
use crate::strategy::Strategy;
use mcose_core::{Forest, NodeAffinity, OrderedForest, Result};

/// The two induced embeddings and their shared value.
#[derive(Debug)]
pub struct MatchResult<L> {
    /// The embedded subtree induced in `T1`.
    pub embedding1: Forest<L>,
    /// The embedded subtree induced in `T2`.
    pub embedding2: Forest<L>,
    /// Total matched affinity (node count, under boolean affinity).
    pub value: f64,
}

/// Compute the maximum common ordered subtree embedding of `t1` and `t2`.
///
/// 1. Validates both inputs are ordered directed forests (see
///    [`mcose_seq::tree_to_seq`]).
/// 2. Encodes them into one namespaced token space.
/// 3. Runs [`longest_common_balanced_embedding`] with an affinity closure
///    derived from `node_affinity`.
/// 4. Decodes the winning sub-sequences back into fresh forests.
///
/// # Errors
/// Propagates [`mcose_core::Error::PointlessConcept`] for an empty input
/// forest or [`mcose_core::Error::UnsupportedGraph`] for a non-forest
/// input.
#[tracing::instrument(skip_all, fields(strategy = ?strategy))]
pub fn maximum_common_ordered_subtree_embedding<F>(
    t1: &F,
    t2: &F,
    node_affinity: &NodeAffinity<F::Label>,
    strategy: Strategy,
) -> Result<MatchResult<F::Label>>
where
    F: OrderedForest,
    F::Label: Eq,
{
    let setup = Setup::<F>::build(t1, t2)?;
    let affinity = setup.affinity_closure(node_affinity);

    let (witness, value) = longest_common_balanced_embedding(
        &setup.s1,
        &setup.s2,
        &setup.open_to_close,
        &affinity,
        strategy,
    );

    let embedding1 = reconstruct(&witness.sub1, &setup.open_to_node1, |n| t1.label(n))?;
    let embedding2 = reconstruct(&witness.sub2, &setup.open_to_node2, |n| t2.label(n))?;

    tracing::debug!(value, nodes1 = embedding1.node_count(), nodes2 = embedding2.node_count(), "embedding computed");

    Ok(MatchResult {
        embedding1,
        embedding2,
        value,
    })
}
