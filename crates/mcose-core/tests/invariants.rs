//! Quantified invariants for the token alphabet and the balanced-sequence
//! container.

use mcose_core::{Sequence, Token};
use proptest::prelude::*;

fn arb_tokens() -> impl Strategy<Value = Vec<Token>> {
    prop::collection::vec((0u32..64, any::<bool>()), 0..40).prop_map(|spec| {
        spec.into_iter()
            .map(|(id, open)| if open { Token::open(id) } else { Token::close(id) })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// Splitting a sequence anywhere and concatenating the two halves
    /// reconstructs the original sequence.
    #[test]
    fn split_then_concat_is_identity(tokens in arb_tokens(), at_raw in 0usize..64) {
        let seq = Sequence::from_tokens(tokens);
        let at = at_raw.min(seq.len());
        let (left, right) = seq.split_at(at);
        prop_assert_eq!(left.concat(&right), seq);
    }

    /// Two sequences built from the same tokens via different split/concat
    /// histories compare equal and hash equal — the memo table relies on
    /// this (content-based, not provenance-based) equality.
    #[test]
    fn equal_content_hashes_equal_regardless_of_provenance(tokens in arb_tokens(), at_raw in 0usize..64) {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let whole = Sequence::from_tokens(tokens.clone());
        let at = at_raw.min(whole.len());
        let (left, right) = whole.split_at(at);
        let rebuilt = left.concat(&right);
        let fresh = Sequence::from_tokens(tokens);

        prop_assert_eq!(&rebuilt, &fresh);

        let mut h_rebuilt = DefaultHasher::new();
        let mut h_fresh = DefaultHasher::new();
        rebuilt.hash(&mut h_rebuilt);
        fresh.hash(&mut h_fresh);
        prop_assert_eq!(h_rebuilt.finish(), h_fresh.finish());
    }

    /// `slice(from, to)` always agrees with two nested `split_at` calls.
    #[test]
    fn slice_matches_nested_split(tokens in arb_tokens(), a in 0usize..64, b in 0usize..64) {
        let seq = Sequence::from_tokens(tokens);
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        let from = from.min(seq.len());
        let to = to.min(seq.len());

        let sliced = seq.slice(from, to);
        let (_, rest) = seq.split_at(from);
        let (expected, _) = rest.split_at(to - from);

        prop_assert_eq!(sliced, expected);
    }
}
