//! Bijective encoding between an ordered forest and a balanced sequence.

use mcose_core::{Error, OpenToClose, OrderedForest, Result, Sequence, Token, TokenId, TokenKind};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Everything the DP and the reconstruction step need to go back and forth
/// between a forest and its balanced-sequence encoding.
pub struct Encoded<N> {
    /// The balanced sequence itself.
    pub sequence: Sequence,
    /// Open id -> close id, for every node in the forest.
    pub open_to_close: OpenToClose,
    /// Open id -> original node handle.
    pub open_to_node: HashMap<TokenId, N>,
    /// Original node handle -> its open id.
    pub node_to_open: HashMap<N, TokenId>,
}

enum Frame<N> {
    Enter(N),
    Leave(TokenId),
}

/// Encode `forest` as a balanced sequence.
///
/// Token ids are assigned in DFS pre-order starting at `offset`: opens
/// occupy `[offset, offset + n)`, closes occupy `[offset + n, offset + 2n)`
/// where `n = forest.node_count()`. Passing a nonzero `offset` for a second
/// forest keeps the two forests' token alphabets disjoint, per the
/// namespacing invariant.
///
/// # Errors
/// - [`Error::PointlessConcept`] if the forest has no nodes.
/// - [`Error::UnsupportedGraph`] if the container reports it isn't
///   directed, or a node is reachable more than once (a cycle or a node
///   with multiple parents).
pub fn tree_to_seq<F>(forest: &F, offset: TokenId) -> Result<Encoded<F::Node>>
where
    F: OrderedForest,
    F::Node: Hash,
{
    if !forest.is_directed() {
        return Err(Error::UnsupportedGraph(
            "forest container does not report is_directed()".to_string(),
        ));
    }
    let n = forest.node_count();
    if n == 0 {
        return Err(Error::PointlessConcept(
            "forest has no nodes".to_string(),
        ));
    }
    let n = TokenId::try_from(n).map_err(|_| {
        Error::UnsupportedGraph("forest has more nodes than fit in a TokenId".to_string())
    })?;

    let mut tokens = Vec::with_capacity(2 * n as usize);
    let mut open_to_close = OpenToClose::new();
    let mut open_to_node = HashMap::new();
    let mut node_to_open = HashMap::new();
    let mut visited = HashSet::new();

    let mut stack: Vec<Frame<F::Node>> = Vec::new();
    for root in forest.roots().into_iter().rev() {
        stack.push(Frame::Enter(root));
    }

    let mut next_idx: TokenId = 0;
    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(node) => {
                if !visited.insert(node) {
                    return Err(Error::UnsupportedGraph(format!(
                        "node {node:?} reached more than once (cycle or multiple parents)"
                    )));
                }
                let idx = next_idx;
                next_idx += 1;
                let open_id = offset + idx;
                let close_id = offset + n + idx;

                open_to_close.insert(open_id, close_id);
                open_to_node.insert(open_id, node);
                node_to_open.insert(node, open_id);
                tokens.push(Token::open(open_id));

                stack.push(Frame::Leave(close_id));
                for child in forest.children(node).into_iter().rev() {
                    stack.push(Frame::Enter(child));
                }
            }
            Frame::Leave(close_id) => {
                tokens.push(Token::close(close_id));
            }
        }
    }

    if visited.len() as TokenId != n {
        return Err(Error::UnsupportedGraph(
            "forest's declared node_count does not match the nodes reachable from its roots"
                .to_string(),
        ));
    }

    Ok(Encoded {
        sequence: Sequence::from_tokens(tokens),
        open_to_close,
        open_to_node,
        node_to_open,
    })
}

/// Decode a balanced sub-sequence back into an ordered forest, using
/// `open_to_node` to recover the original node identity for each surviving
/// open token and `label_of` to recover its label.
///
/// # Errors
/// Returns [`Error::InvalidSequence`] if `subseq` is not balanced, or if it
/// references an open token absent from `open_to_node`.
pub fn seq_to_tree<N, L>(
    subseq: &Sequence,
    open_to_node: &HashMap<TokenId, N>,
    label_of: impl Fn(N) -> L,
) -> Result<mcose_core::Forest<L>>
where
    N: Copy + Eq + Hash + std::fmt::Debug,
    L: Clone + Eq + Hash,
{
    let mut forest = mcose_core::Forest::new();
    let mut node_to_forest_idx: HashMap<N, u32> = HashMap::new();
    let mut open_stack: Vec<N> = Vec::new();

    for tok in subseq.iter() {
        match tok.kind {
            TokenKind::Open => {
                let node = *open_to_node.get(&tok.id).ok_or_else(|| {
                    Error::InvalidSequence(format!(
                        "open token {} has no corresponding node",
                        tok.id
                    ))
                })?;
                let parent_idx = open_stack
                    .last()
                    .and_then(|parent| node_to_forest_idx.get(parent))
                    .copied();
                let idx = match parent_idx {
                    Some(p) => forest.add_child(p, label_of(node)),
                    None => forest.add_root(label_of(node)),
                };
                node_to_forest_idx.insert(node, idx);
                open_stack.push(node);
            }
            TokenKind::Close => {
                if open_stack.pop().is_none() {
                    return Err(Error::InvalidSequence(
                        "close token with no matching open on the stack".to_string(),
                    ));
                }
            }
        }
    }

    if !open_stack.is_empty() {
        return Err(Error::InvalidSequence(
            "sequence ended with unclosed open tokens".to_string(),
        ));
    }

    Ok(forest)
}
