//! The shared memo table: `(s1, s2) -> (witness, value)`.
//!
//! Keys are stored as owned [`Sequence`]s, whose `Hash`/`Eq` are
//! content-based (see `mcose_core::sequence`). That is what gives us the
//! correctness property the spec requires: two sub-sequences that are
//! value-equal but arose from different split/concat provenance collapse
//! onto the same memo entry instead of each paying for their own subtree of
//! work.

use mcose_core::Sequence;
use std::collections::HashMap;

/// The surviving sub-sequence of each input that realizes a DP value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Witness {
    /// Matched sub-sequence of the first input.
    pub sub1: Sequence,
    /// Matched sub-sequence of the second input.
    pub sub2: Sequence,
}

impl Witness {
    /// The witness for value `0`: nothing matched on either side.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            sub1: Sequence::empty(),
            sub2: Sequence::empty(),
        }
    }
}

/// A `(witness, value)` pair, as stored in the memo and returned by the
/// top-level DP entry points.
pub type DpResult = (Witness, f64);

/// Memoization table for one top-level DP call. Not shared across calls.
#[derive(Default)]
pub struct Memo {
    table: HashMap<(Sequence, Sequence), DpResult>,
}

impl Memo {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Look up a previously computed result for `(s1, s2)`.
    #[must_use]
    pub fn get(&self, s1: &Sequence, s2: &Sequence) -> Option<&DpResult> {
        self.table.get(&(s1.clone(), s2.clone()))
    }

    /// Record the result for `(s1, s2)`.
    pub fn insert(&mut self, s1: Sequence, s2: Sequence, result: DpResult) {
        self.table.insert((s1, s2), result);
    }

    /// Number of distinct sub-problems solved so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no sub-problems have been solved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
