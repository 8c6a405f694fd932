//! The balanced-sequence container.
//!
//! A [`Sequence`] is a view over a shared, immutable token buffer: slicing
//! off a prefix/suffix never copies tokens, and concatenating two sequences
//! that are not adjacent in the original buffer just appends a second
//! chunk. This gives the DP the "cheap reference to a prefix" and "cheap
//! concatenation" the balanced-sequence recursion leans on, without a full
//! rope/finger-tree: the chunk list stays short in practice because each
//! `decompose` only ever removes a handful of tokens at a time.

use crate::token::Token;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// One contiguous run of tokens inside the shared buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Chunk {
    start: u32,
    len: u32,
}

/// A balanced sequence of tokens: a concatenation of zero or more chunks
/// drawn from a shared, never-mutated token buffer.
#[derive(Clone, Debug)]
pub struct Sequence {
    buf: Arc<[Token]>,
    chunks: Arc<[Chunk]>,
    len: u32,
}

impl Sequence {
    /// Wrap a freshly built token vector as a single-chunk sequence.
    #[must_use]
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let len = u32::try_from(tokens.len()).expect("sequence too large for u32 indices");
        let buf: Arc<[Token]> = Arc::from(tokens);
        let chunks: Arc<[Chunk]> = if len == 0 {
            Arc::from(Vec::new())
        } else {
            Arc::from(vec![Chunk { start: 0, len }])
        };
        Self { buf, chunks, len }
    }

    /// The empty sequence.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            buf: Arc::from(Vec::new()),
            chunks: Arc::from(Vec::new()),
            len: 0,
        }
    }

    /// Number of tokens.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether this sequence has no tokens (the empty forest).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first token, if any.
    #[must_use]
    pub fn first(&self) -> Option<Token> {
        let chunk = self.chunks.first()?;
        Some(self.buf[chunk.start as usize])
    }

    /// Iterate tokens in order. Cheap: walks the (short) chunk list and
    /// slices into the shared buffer.
    pub fn iter(&self) -> impl Iterator<Item = Token> + '_ {
        self.chunks
            .iter()
            .flat_map(move |c| self.buf[c.start as usize..(c.start + c.len) as usize].iter().copied())
    }

    /// Split into `(self[..at], self[at..])`. `at` is a token offset in
    /// `0..=len()`.
    #[must_use]
    pub fn split_at(&self, at: usize) -> (Self, Self) {
        assert!(at <= self.len(), "split offset out of range");
        let at = at as u32;

        let mut left = Vec::new();
        let mut right = Vec::new();
        let mut seen = 0u32;

        for &c in self.chunks.iter() {
            if seen >= at {
                right.push(c);
                continue;
            }
            let remaining_for_left = at - seen;
            if c.len <= remaining_for_left {
                left.push(c);
                seen += c.len;
            } else {
                left.push(Chunk {
                    start: c.start,
                    len: remaining_for_left,
                });
                right.push(Chunk {
                    start: c.start + remaining_for_left,
                    len: c.len - remaining_for_left,
                });
                seen += c.len;
            }
        }

        (
            Self {
                buf: self.buf.clone(),
                chunks: Arc::from(left),
                len: at,
            },
            Self {
                buf: self.buf.clone(),
                chunks: Arc::from(right),
                len: self.len - at,
            },
        )
    }

    /// Sub-sequence `self[from..to]` (token offsets).
    #[must_use]
    pub fn slice(&self, from: usize, to: usize) -> Self {
        let (_, rest) = self.split_at(from);
        let (mid, _) = rest.split_at(to - from);
        mid
    }

    /// Concatenate `self` then `other`. Adjacent chunks from the same
    /// buffer are merged so repeated concatenation doesn't grow the chunk
    /// list unboundedly for the common case (re-joining a head and tail
    /// that were only separated by the dropped root).
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let same_buf = Arc::ptr_eq(&self.buf, &other.buf);
        let mut merged: Vec<Chunk> = self.chunks.to_vec();

        if same_buf {
            if let (Some(last), Some(first)) = (merged.last().copied(), other.chunks.first().copied())
            {
                if last.start + last.len == first.start {
                    merged.pop();
                    merged.push(Chunk {
                        start: last.start,
                        len: last.len + first.len,
                    });
                    merged.extend(other.chunks.iter().skip(1).copied());
                    return Self {
                        buf: self.buf.clone(),
                        chunks: Arc::from(merged),
                        len: self.len + other.len,
                    };
                }
            }
        }

        merged.extend(other.chunks.iter().copied());
        Self {
            buf: self.buf.clone(),
            chunks: Arc::from(merged),
            len: self.len + other.len,
        }
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for Sequence {}

impl Hash for Sequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for t in self.iter() {
            t.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Token;

    fn seq(spec: &[(u32, bool)]) -> Sequence {
        let toks = spec
            .iter()
            .map(|&(id, open)| if open { Token::open(id) } else { Token::close(id) })
            .collect();
        Sequence::from_tokens(toks)
    }

    #[test]
    fn split_and_concat_roundtrip() {
        let s = seq(&[(0, true), (1, true), (1, false), (0, false)]);
        let (a, b) = s.split_at(2);
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 2);
        let rejoined = a.concat(&b);
        assert_eq!(rejoined, s);
    }

    #[test]
    fn equal_content_different_provenance_hashes_equal() {
        let s = seq(&[(0, true), (1, true), (1, false), (0, false)]);
        let (head, tail) = s.split_at(1);
        let (head, _close) = head.split_at(0); // head is empty here, just exercising the API
        let (_open, rest) = s.split_at(1);
        let _ = head;
        let _ = tail;
        let _ = rest;

        let dropped = {
            let (_o, after_open) = s.split_at(1);
            let (inner, after_c) = after_open.split_at(2);
            inner.concat(&after_c)
        };
        let expected = seq(&[(1, true), (1, false)]);
        assert_eq!(dropped, expected);

        let mut h1 = std::collections::hash_map::DefaultHasher::new();
        let mut h2 = std::collections::hash_map::DefaultHasher::new();
        dropped.hash(&mut h1);
        expected.hash(&mut h2);
        assert_eq!(h1.finish(), h2.finish());
    }

    #[test]
    fn empty_sequence_has_no_first_token() {
        assert!(Sequence::empty().first().is_none());
        assert!(Sequence::empty().is_empty());
    }
}
