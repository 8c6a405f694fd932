//! The token alphabet: open/close symbols, one disjoint pair per forest node.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An opaque symbol identifier drawn from a finite alphabet `Σ`.
///
/// Open ids and close ids live in disjoint ranges by construction (see
/// `mcose_seq::codec`), so `TokenId` alone never tells you whether a symbol
/// opens or closes a node — pair it with [`TokenKind`] via [`Token`].
pub type TokenId = u32;

/// Whether a token opens or closes a node's span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// First occurrence of a node (DFS pre-order visit).
    Open,
    /// Last occurrence of a node (DFS post-order departure).
    Close,
}

/// A single symbol in a balanced sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Identity of the node this token belongs to.
    pub id: TokenId,
    /// Open or close.
    pub kind: TokenKind,
}

impl Token {
    /// Construct an open token for `id`.
    #[inline]
    #[must_use]
    pub const fn open(id: TokenId) -> Self {
        Self {
            id,
            kind: TokenKind::Open,
        }
    }

    /// Construct a close token for `id`.
    #[inline]
    #[must_use]
    pub const fn close(id: TokenId) -> Self {
        Self {
            id,
            kind: TokenKind::Close,
        }
    }

    /// Whether this token opens a node.
    #[inline]
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self.kind, TokenKind::Open)
    }

    /// Whether this token closes a node.
    #[inline]
    #[must_use]
    pub const fn is_close(self) -> bool {
        matches!(self.kind, TokenKind::Close)
    }
}

/// A total injective map from open token ids to their matching close token id.
///
/// Built once by the codec and never mutated afterwards; every sub-sequence
/// produced by decomposition or dropping a subtree is a subset of the same
/// original token set, so a single map is valid for the whole recursion.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OpenToClose(HashMap<TokenId, TokenId>);

impl OpenToClose {
    /// An empty map.
    #[must_use]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Record that `open` closes at `close`. Panics on a duplicate open id;
    /// this is an implementation bug in the codec, not a user error.
    pub fn insert(&mut self, open: TokenId, close: TokenId) {
        let prior = self.0.insert(open, close);
        debug_assert!(prior.is_none(), "open token id {open} assigned twice");
    }

    /// Look up the close id matching `open`, if `open` is a known open id.
    #[must_use]
    pub fn close_of(&self, open: TokenId) -> Option<TokenId> {
        self.0.get(&open).copied()
    }

    /// Number of open/close pairs recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether any pairs are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge two namespaced maps (e.g. `T1`'s and `T2`'s) into one, used only
    /// by callers that genuinely need a single combined view; the DP itself
    /// always takes two separate maps.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }
}
