//! The decomposition primitive both DP recurrences are built on.
//!
//! Every non-empty balanced sequence `s` splits uniquely as
//! `s = a . tail`, where `a` is the span of `s`'s first node
//! (`a = open . head . close`) and `tail` is whatever follows it at depth 0.

use mcose_core::{Error, Result, Sequence};

/// Split `s` into `(a, head, tail)`.
///
/// - `a` is `s`'s leading node's full span (open token, its subtree, close token).
/// - `head` is `a` with the outermost open/close pair stripped — the
///   balanced sequence for the leading node's children.
/// - `tail` is everything in `s` after `a` — the balanced sequence for the
///   leading node's younger siblings and their subtrees.
///
/// All three are cheap views over `s`'s shared buffer; no tokens are copied.
///
/// # Errors
/// Returns [`Error::InvalidSequence`] if `s` is empty.
pub fn decompose(s: &Sequence) -> Result<(Sequence, Sequence, Sequence)> {
    if s.is_empty() {
        return Err(Error::InvalidSequence(
            "cannot decompose the empty sequence".to_string(),
        ));
    }

    let mut depth: i64 = 0;
    let mut a_len = 0usize;
    for tok in s.iter() {
        depth += if tok.is_open() { 1 } else { -1 };
        a_len += 1;
        if depth == 0 {
            break;
        }
    }
    debug_assert_eq!(
        depth, 0,
        "malformed balanced sequence: depth never returned to zero"
    );

    let (a, tail) = s.split_at(a_len);
    let (_open, rest) = a.split_at(1);
    let (head, _close) = rest.split_at(rest.len() - 1);
    Ok((a, head, tail))
}
