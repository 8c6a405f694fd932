//! Quantified invariants for the random forest/sequence generators: same
//! seed gives the same output, and every generated sequence is genuinely
//! balanced regardless of size or container mode.

use mcose_core::TokenKind;
use mcose_gen::{random_balanced_sequence, random_ordered_forest};
use mcose_seq::container::{ContainerType, ItemType};
use proptest::prelude::*;

fn is_balanced(seq: &mcose_core::Sequence) -> bool {
    let mut depth = 0i64;
    for tok in seq.iter() {
        match tok.kind {
            TokenKind::Open => depth += 1,
            TokenKind::Close => depth -= 1,
        }
        if depth < 0 {
            return false;
        }
    }
    depth == 0
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// Generating a forest twice with the same `(n, seed)` gives the same
    /// sequence of labels and the same shape.
    #[test]
    fn same_seed_is_deterministic(n in 1usize..40, seed in any::<u64>()) {
        let first = random_ordered_forest(n, seed).expect("n > 0");
        let second = random_ordered_forest(n, seed).expect("n > 0");
        prop_assert_eq!(first, second);
    }

    /// Every generated forest has exactly `n` nodes and at least one root.
    #[test]
    fn generated_forest_has_the_requested_node_count(n in 1usize..40, seed in any::<u64>()) {
        use mcose_core::OrderedForest;

        let forest = random_ordered_forest(n, seed).expect("n > 0");
        prop_assert_eq!(forest.node_count(), n);
        prop_assert!(!forest.roots().is_empty());
    }

    /// `random_balanced_sequence` always produces a genuinely balanced
    /// sequence of tokens, whatever the container mode or size.
    #[test]
    fn random_balanced_sequence_is_always_balanced(
        n in 1usize..60,
        seed in any::<u64>(),
        use_chars in any::<bool>(),
        use_tuple in any::<bool>(),
    ) {
        let item_type = if use_chars { ItemType::Chr } else { ItemType::Number };
        let container_type = if use_tuple { ContainerType::Tuple } else { ContainerType::List };

        let (seq, open_to_close) = random_balanced_sequence(n, item_type, container_type, seed);
        prop_assert_eq!(seq.len(), 2 * n);
        prop_assert!(is_balanced(&seq));

        for tok in seq.iter() {
            if tok.kind == TokenKind::Open {
                prop_assert!(open_to_close.close_of(tok.id).is_some());
            }
        }
    }
}
