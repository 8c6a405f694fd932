//! Top-level entry point: maximum common ordered subtree isomorphism over
//! two tree-level forests.

use crate::facade::Setup;
use crate::isomorphism::longest_common_balanced_isomorphism;
use crate::reconstruct::reconstruct;
use crate::strategy::Strategy;
use crate::tree_embedding::MatchResult;
use mcose_core::{NodeAffinity, OrderedForest, Result};

/// Compute the maximum common ordered subtree isomorphism of `t1` and
/// `t2`. Same contract as
/// [`crate::tree_embedding::maximum_common_ordered_subtree_embedding`], but
/// the underlying recurrence forbids edge contraction: only whole leaf
/// subtrees may be pruned.
///
/// # Errors
/// Propagates [`mcose_core::Error::PointlessConcept`] for an empty input
/// forest or [`mcose_core::Error::UnsupportedGraph`] for a non-forest
/// input.
#[tracing::instrument(skip_all, fields(strategy = ?strategy))]
pub fn maximum_common_ordered_subtree_isomorphism<F>(
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

    let (witness, value) = longest_common_balanced_isomorphism(
        &setup.s1,
        &setup.s2,
        &setup.open_to_close,
        &affinity,
        strategy,
    );

    let embedding1 = reconstruct(&witness.sub1, &setup.open_to_node1, |n| t1.label(n))?;
    let embedding2 = reconstruct(&witness.sub2, &setup.open_to_node2, |n| t2.label(n))?;

    tracing::debug!(value, nodes1 = embedding1.node_count(), nodes2 = embedding2.node_count(), "isomorphism computed");

    Ok(MatchResult {
        embedding1,
        embedding2,
        value,
    })
}
