//! End-to-end scenarios and quantified invariants from spec section 8.

use mcose_core::{Error, Forest, NodeAffinity, OrderedForest, Result};
use mcose_dp::{
    maximum_common_ordered_subtree_embedding, maximum_common_ordered_subtree_isomorphism, Strategy,
};

fn path(labels: &[&'static str]) -> Forest<&'static str> {
    let mut f = Forest::new();
    let mut prev = None;
    for &label in labels {
        let id = match prev {
            Some(p) => f.add_child(p, label),
            None => f.add_root(label),
        };
        prev = Some(id);
    }
    f
}

fn star(center: &'static str, leaves: &[&'static str]) -> Forest<&'static str> {
    let mut f = Forest::new();
    let root = f.add_root(center);
    for &leaf in leaves {
        f.add_child(root, leaf);
    }
    f
}

fn balanced_binary(depth: u32) -> Forest<usize> {
    let mut f = Forest::new();
    let root = f.add_root(0);
    let mut frontier = vec![root];
    let mut next_label = 1usize;
    for _ in 0..depth {
        let mut next_frontier = Vec::new();
        for parent in frontier {
            for _ in 0..2 {
                let child = f.add_child(parent, next_label);
                next_label += 1;
                next_frontier.push(child);
            }
        }
        frontier = next_frontier;
    }
    f
}

#[test]
fn s1_path_subset_embeds_into_longer_path() {
    let t1 = path(&["a", "b"]);
    let t2 = path(&["a", "b", "c"]);
    let result = maximum_common_ordered_subtree_embedding(
        &t1,
        &t2,
        &NodeAffinity::Eq,
        Strategy::Iterative,
    )
    .unwrap();
    assert!((result.value - 2.0).abs() < f64::EPSILON);
    assert_eq!(result.embedding1.node_count(), 2);
    assert_eq!(result.embedding2.node_count(), 2);
}

#[test]
fn s2_disconnected_forest_always_true_affinity() {
    let mut t1: Forest<()> = Forest::new();
    let r0 = t1.add_root(());
    t1.add_child(r0, ());
    let r2 = t1.add_root(());
    t1.add_child(r2, ());
    let r4 = t1.add_root(());
    let n5 = t1.add_child(r4, ());
    t1.add_child(n5, ());

    let mut t2: Forest<()> = Forest::new();
    let root = t2.add_root(());
    let c1 = t2.add_child(root, ());
    t2.add_child(c1, ());
    t2.add_child(root, ());

    let result =
        maximum_common_ordered_subtree_embedding(&t1, &t2, &NodeAffinity::Always, Strategy::Iterative)
            .unwrap();
    assert!((result.value - 3.0).abs() < f64::EPSILON);
}

#[test]
fn s3_self_embedding_is_total() {
    let t = balanced_binary(2);
    let result =
        maximum_common_ordered_subtree_embedding(&t, &t, &NodeAffinity::Eq, Strategy::Iterative)
            .unwrap();
    assert!((result.value - 7.0).abs() < f64::EPSILON);
    assert_eq!(result.embedding1.node_count(), t.node_count());
    assert_eq!(result.embedding2.node_count(), t.node_count());
}

#[test]
fn s6_isomorphism_cannot_contract_a_star_into_a_path() {
    let t1 = star("root", &["b", "c"]);
    let t2 = path(&["root", "b", "c"]);

    let iso = maximum_common_ordered_subtree_isomorphism(
        &t1,
        &t2,
        &NodeAffinity::Eq,
        Strategy::Iterative,
    )
    .unwrap();
    assert!((iso.value - 2.0).abs() < f64::EPSILON);

    let iso_identical = maximum_common_ordered_subtree_isomorphism(
        &t2,
        &t2,
        &NodeAffinity::Eq,
        Strategy::Iterative,
    )
    .unwrap();
    assert!((iso_identical.value - 3.0).abs() < f64::EPSILON);
}

#[test]
fn invariant_symmetry() {
    let t1 = path(&["a", "b"]);
    let t2 = path(&["a", "b", "c"]);
    let fwd =
        maximum_common_ordered_subtree_embedding(&t1, &t2, &NodeAffinity::Eq, Strategy::Iterative)
            .unwrap();
    let bwd =
        maximum_common_ordered_subtree_embedding(&t2, &t1, &NodeAffinity::Eq, Strategy::Iterative)
            .unwrap();
    assert!((fwd.value - bwd.value).abs() < f64::EPSILON);
}

#[test]
fn invariant_isomorphism_never_exceeds_embedding() {
    let t1 = star("root", &["b", "c"]);
    let t2 = path(&["root", "b", "c"]);
    let emb =
        maximum_common_ordered_subtree_embedding(&t1, &t2, &NodeAffinity::Eq, Strategy::Iterative)
            .unwrap();
    let iso = maximum_common_ordered_subtree_isomorphism(
        &t1,
        &t2,
        &NodeAffinity::Eq,
        Strategy::Iterative,
    )
    .unwrap();
    assert!(iso.value <= emb.value);
}

#[test]
fn invariant_implementations_agree_on_value() {
    let t1 = balanced_binary(2);
    let t2 = balanced_binary(2);
    let recursive = maximum_common_ordered_subtree_embedding(
        &t1,
        &t2,
        &NodeAffinity::Eq,
        Strategy::Recursive,
    )
    .unwrap();
    let iterative = maximum_common_ordered_subtree_embedding(
        &t1,
        &t2,
        &NodeAffinity::Eq,
        Strategy::Iterative,
    )
    .unwrap();
    assert!((recursive.value - iterative.value).abs() < f64::EPSILON);
}

#[test]
fn invariant_empty_forest_is_pointless() {
    let empty: Forest<&'static str> = Forest::new();
    let non_empty = path(&["a"]);
    let err = maximum_common_ordered_subtree_embedding(
        &empty,
        &non_empty,
        &NodeAffinity::Eq,
        Strategy::Iterative,
    )
    .unwrap_err();
    assert!(matches!(err, Error::PointlessConcept(_)));
}

/// A hand-rolled graph whose declared node count cannot be reached without
/// revisiting a node — exercises the cycle/multi-parent rejection path that
/// `Forest` cannot construct by its own API.
struct CyclicGraph;

impl OrderedForest for CyclicGraph {
    type Node = u32;
    type Label = ();

    fn roots(&self) -> Vec<u32> {
        vec![0]
    }

    fn children(&self, node: u32) -> Vec<u32> {
        match node {
            0 => vec![1],
            1 => vec![0],
            _ => vec![],
        }
    }

    fn label(&self, _node: u32) {}

    fn node_count(&self) -> usize {
        2
    }

    fn is_directed(&self) -> bool {
        true
    }
}

#[test]
fn invariant_cyclic_input_is_unsupported() {
    let cyclic = CyclicGraph;
    let result: Result<_> = maximum_common_ordered_subtree_embedding(
        &cyclic,
        &cyclic,
        &NodeAffinity::Always,
        Strategy::Iterative,
    );
    assert!(matches!(result, Err(Error::UnsupportedGraph(_))));
}
