//! Shared setup for the two tree-level entry points: encode both forests
//! into one namespaced token space and build the label-level affinity
//! closure the raw DP consumes.

use mcose_core::{NodeAffinity, OpenToClose, OrderedForest, Result, Sequence, TokenId};
use mcose_seq::tree_to_seq;
use std::collections::HashMap;

/// Everything `maximum_common_ordered_subtree_{embedding,isomorphism}` need
/// to drive the raw DP and reconstruct its result.
pub struct Setup<F: OrderedForest> {
    pub s1: Sequence,
    pub s2: Sequence,
    pub open_to_close: OpenToClose,
    pub open_to_node1: HashMap<TokenId, F::Node>,
    pub open_to_node2: HashMap<TokenId, F::Node>,
    label1: HashMap<TokenId, F::Label>,
    label2: HashMap<TokenId, F::Label>,
}

impl<F: OrderedForest> Setup<F> {
    /// Encode `t1` and `t2` into a single namespaced token space.
    ///
    /// # Errors
    /// Propagates [`mcose_core::Error::PointlessConcept`] or
    /// [`mcose_core::Error::UnsupportedGraph`] from the codec.
    pub fn build(t1: &F, t2: &F) -> Result<Self> {
        let enc1 = tree_to_seq(t1, 0)?;
        let n1 = TokenId::try_from(t1.node_count()).unwrap_or(u32::MAX);
        let enc2 = tree_to_seq(t2, 2 * n1)?;

        let label1 = enc1
            .open_to_node
            .iter()
            .map(|(&tok, &node)| (tok, t1.label(node)))
            .collect();
        let label2 = enc2
            .open_to_node
            .iter()
            .map(|(&tok, &node)| (tok, t2.label(node)))
            .collect();

        Ok(Self {
            s1: enc1.sequence,
            s2: enc2.sequence,
            open_to_close: enc1.open_to_close.merge(enc2.open_to_close),
            open_to_node1: enc1.open_to_node,
            open_to_node2: enc2.open_to_node,
            label1,
            label2,
        })
    }

    /// Build the token-level affinity closure the raw DP takes, from a
    /// label-level [`NodeAffinity`].
    pub fn affinity_closure<'a>(
        &'a self,
        node_affinity: &'a NodeAffinity<F::Label>,
    ) -> impl Fn(TokenId, TokenId) -> Option<f64> + 'a
    where
        F::Label: Eq,
    {
        move |a: TokenId, b: TokenId| {
            let la = self.label1.get(&a)?;
            let lb = self.label2.get(&b)?;
            node_affinity.score(la, lb)
        }
    }
}
