//! Seeded random balanced sequences and ordered forests.
//!
//! Each tree in the forest is sampled uniformly via a random Prüfer sequence
//! (there is a bijection between Prüfer sequences of length `k - 2` and
//! labeled trees on `k` nodes), then rooted at its first node and oriented
//! by a DFS over the resulting undirected tree — the same construction
//! `networkx_algo_common_subtree.utils.random_tree` uses. The `n` nodes
//! requested are split across a random number of independently-grown trees,
//! since the operations this crate feeds are defined over forests, not just
//! single trees.

use mcose_core::{Error, Forest, OpenToClose, Result, Sequence};
use mcose_seq::{container, tree_to_seq};
use rand::{rngs::StdRng, Rng as _, SeedableRng};

/// Probability that any given node boundary starts a new tree, when
/// splitting `n` nodes into a random forest of trees.
const NEW_TREE_PROBABILITY: f64 = 0.15;

/// Decode a Prüfer sequence of length `k - 2` over labels `0..k` into the
/// undirected tree's edge list.
fn prufer_to_edges(seq: &[usize], k: usize) -> Vec<(usize, usize)> {
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    let mut degree = vec![1usize; k];
    for &node in seq {
        degree[node] += 1;
    }

    let mut leaves: BinaryHeap<Reverse<usize>> = (0..k)
        .filter(|&i| degree[i] == 1)
        .map(Reverse)
        .collect();

    let mut edges = Vec::with_capacity(k.saturating_sub(1));
    for &node in seq {
        let Reverse(leaf) = leaves.pop().expect("a leaf always exists mid-decode");
        edges.push((leaf, node));
        degree[leaf] -= 1;
        degree[node] -= 1;
        if degree[node] == 1 {
            leaves.push(Reverse(node));
        }
    }

    let mut remaining: Vec<usize> = (0..k).filter(|&i| degree[i] == 1).collect();
    remaining.sort_unstable();
    if let [a, b] = remaining[..] {
        edges.push((a, b));
    }
    edges
}

/// Split `n` into a random composition (the sizes of each tree in the
/// forest) by flipping a biased coin at every node boundary.
fn random_tree_sizes(n: usize, rng: &mut StdRng) -> Vec<usize> {
    let mut sizes = Vec::new();
    let mut current = 1usize;
    for _ in 0..n.saturating_sub(1) {
        if rng.random_bool(NEW_TREE_PROBABILITY) {
            sizes.push(current);
            current = 1;
        } else {
            current += 1;
        }
    }
    sizes.push(current);
    sizes
}

/// Grow one uniformly random tree of `k` nodes (labeled `offset..offset+k`),
/// rooted at `offset`, as a new root-level tree appended to `forest`.
fn grow_random_tree(forest: &mut Forest<usize>, k: usize, offset: usize, rng: &mut StdRng) {
    if k == 1 {
        forest.add_root(offset);
        return;
    }

    let prufer: Vec<usize> = (0..k - 2).map(|_| rng.random_range(0..k)).collect();
    let edges = prufer_to_edges(&prufer, k);

    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); k];
    for (a, b) in edges {
        adjacency[a].push(b);
        adjacency[b].push(a);
    }
    for neighbors in &mut adjacency {
        neighbors.sort_unstable();
    }

    let mut node_idx: Vec<Option<u32>> = vec![None; k];
    node_idx[0] = Some(forest.add_root(offset));

    let mut visited = vec![false; k];
    visited[0] = true;
    let mut stack = vec![0usize];
    while let Some(u) = stack.pop() {
        let parent_idx = node_idx[u].expect("every stacked node already has an index");
        for &v in adjacency[u].iter().rev() {
            if !visited[v] {
                visited[v] = true;
                node_idx[v] = Some(forest.add_child(parent_idx, offset + v));
                stack.push(v);
            }
        }
    }
}

/// A uniformly random ordered directed forest of `n` nodes, labeled by each
/// node's identity (`0..n`), split across a random number of trees.
///
/// # Errors
/// Returns [`Error::PointlessConcept`] if `n == 0`.
pub fn random_ordered_forest(n: usize, seed: u64) -> Result<Forest<usize>> {
    if n == 0 {
        return Err(Error::PointlessConcept(
            "cannot build a tree on zero nodes".to_string(),
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let sizes = random_tree_sizes(n, &mut rng);

    let mut forest = Forest::new();
    let mut offset = 0usize;
    for size in sizes {
        grow_random_tree(&mut forest, size, offset, &mut rng);
        offset += size;
    }

    Ok(forest)
}

/// A random balanced sequence of `2n` tokens encoding a random ordered
/// forest of `n` nodes, rendered through (and back out of) the requested
/// container mode.
///
/// # Panics
/// Panics if `n == 0` (see [`random_ordered_forest`]); callers that want a
/// graceful error should call [`random_ordered_forest`] directly.
#[must_use]
pub fn random_balanced_sequence(
    n: usize,
    item_type: container::ItemType,
    container_type: container::ContainerType,
    seed: u64,
) -> (Sequence, OpenToClose) {
    let forest =
        random_ordered_forest(n, seed).expect("n == 0 is a programmer error at this boundary");
    let encoded = tree_to_seq(&forest, 0).expect("freshly generated forests are always valid");

    let external = container::encode(&encoded.sequence, item_type, container_type);
    let sequence = container::decode(&external).expect("round trip of a freshly encoded sequence");

    (sequence, encoded.open_to_close)
}
