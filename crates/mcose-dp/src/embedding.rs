//! Longest common balanced embedding: the unrestricted recurrence (section
//! 4.D). Both `drop-first-subtree` moves are always legal, which is what
//! lets the embedding DP contract edges (delete a node, reparent its
//! children in place).

use crate::memo::{DpResult, Memo, Witness};
use crate::strategy::Strategy;
use mcose_core::{OpenToClose, Sequence, TokenId};
use mcose_seq::decompose;
use std::collections::HashSet;

type AffinityFn<'a> = dyn Fn(TokenId, TokenId) -> Option<f64> + 'a;

/// `s` decomposed into its leading subtree's three views, plus the root
/// token's id (needed to evaluate affinity without re-reading `open`).
struct Split {
    head: Sequence,
    tail: Sequence,
    open: Sequence,
    close: Sequence,
    open_id: TokenId,
}

fn split(s: &Sequence, open_to_close: &OpenToClose) -> Split {
    let (a, head, tail) = decompose(s).expect("caller only splits non-empty sequences");
    let open = a.slice(0, 1);
    let close = a.slice(a.len() - 1, a.len());
    let open_id = open.first().expect("a is non-empty").id;
    debug_assert_eq!(
        close.first().map(|t| t.id),
        open_to_close.close_of(open_id),
        "decompose's matched close disagrees with open_to_close"
    );
    Split {
        head,
        tail,
        open,
        close,
        open_id,
    }
}

/// The three candidate sub-problems the recurrence reduces `(x, y)` to, plus
/// enough of each side's split to build a witness once they're solved.
struct Deps {
    drop1: (Sequence, Sequence),
    drop2: (Sequence, Sequence),
    matched: Option<(f64, (Sequence, Sequence), (Sequence, Sequence))>,
    s1: Split,
    s2: Split,
}

fn compute_deps(
    x: &Sequence,
    y: &Sequence,
    open_to_close: &OpenToClose,
    affinity: &AffinityFn<'_>,
) -> Deps {
    let s1 = split(x, open_to_close);
    let s2 = split(y, open_to_close);
    let drop1 = (s1.head.concat(&s1.tail), y.clone());
    let drop2 = (x.clone(), s2.head.concat(&s2.tail));
    let matched = affinity(s1.open_id, s2.open_id).map(|score| {
        (
            score,
            (s1.head.clone(), s2.head.clone()),
            (s1.tail.clone(), s2.tail.clone()),
        )
    });
    Deps {
        drop1,
        drop2,
        matched,
        s1,
        s2,
    }
}

/// Combine already-solved dependencies into `(x, y)`'s result.
///
/// Ties are broken match-candidate first, then drop-`s1`, then drop-`s2`,
/// per the recurrence's stated tie-breaking order.
fn combine(deps: &Deps, memo: &Memo) -> DpResult {
    let (drop1_w, drop1_v) = memo
        .get(&deps.drop1.0, &deps.drop1.1)
        .cloned()
        .expect("drop-s1 dependency already solved");
    let (drop2_w, drop2_v) = memo
        .get(&deps.drop2.0, &deps.drop2.1)
        .cloned()
        .expect("drop-s2 dependency already solved");

    let drop1_candidate: DpResult = (drop1_w, drop1_v);
    let drop2_candidate: DpResult = (drop2_w, drop2_v);

    let matched_candidate: Option<DpResult> = deps.matched.as_ref().map(|(score, head, tail)| {
        let (head_w, head_v) = memo
            .get(&head.0, &head.1)
            .cloned()
            .expect("head dependency already solved");
        let (tail_w, tail_v) = memo
            .get(&tail.0, &tail.1)
            .cloned()
            .expect("tail dependency already solved");
        let sub1 = deps
            .s1
            .open
            .concat(&head_w.sub1)
            .concat(&deps.s1.close)
            .concat(&tail_w.sub1);
        let sub2 = deps
            .s2
            .open
            .concat(&head_w.sub2)
            .concat(&deps.s2.close)
            .concat(&tail_w.sub2);
        (Witness { sub1, sub2 }, head_v + tail_v + score)
    });

    pick_best(drop1_candidate, drop2_candidate, matched_candidate)
}

fn pick_best(drop1: DpResult, drop2: DpResult, matched: Option<DpResult>) -> DpResult {
    if let Some(m) = matched {
        if m.1 >= drop1.1 && m.1 >= drop2.1 {
            return m;
        }
    }
    if drop1.1 >= drop2.1 {
        drop1
    } else {
        drop2
    }
}

/// Top-down, explicit work stack (no host recursion): each pair is pushed
/// once to queue its dependencies, then a second time to combine them once
/// they're memoized. Mirrors the descend/after-children shape of an
/// explicit-stack DFS.
fn recursive(
    s1: &Sequence,
    s2: &Sequence,
    open_to_close: &OpenToClose,
    affinity: &AffinityFn<'_>,
) -> DpResult {
    let mut memo = Memo::new();
    let mut stack: Vec<(Sequence, Sequence, bool)> = vec![(s1.clone(), s2.clone(), false)];

    while let Some((x, y, ready_to_combine)) = stack.pop() {
        if memo.get(&x, &y).is_some() {
            continue;
        }
        if x.is_empty() || y.is_empty() {
            memo.insert(x, y, (Witness::empty(), 0.0));
            continue;
        }

        let deps = compute_deps(&x, &y, open_to_close, affinity);

        if !ready_to_combine {
            stack.push((x.clone(), y.clone(), true));
            stack.push((deps.drop1.0.clone(), deps.drop1.1.clone(), false));
            stack.push((deps.drop2.0.clone(), deps.drop2.1.clone(), false));
            if let Some((_, head, tail)) = &deps.matched {
                stack.push((head.0.clone(), head.1.clone(), false));
                stack.push((tail.0.clone(), tail.1.clone(), false));
            }
            continue;
        }

        let result = combine(&deps, &memo);
        memo.insert(x, y, result);
    }

    memo.get(s1, s2)
        .cloned()
        .expect("top-level pair was resolved")
}

/// Bottom-up: enumerate the reachable sub-problem closure once, sort by
/// combined token length ascending, then fill without recursion.
fn iterative(
    s1: &Sequence,
    s2: &Sequence,
    open_to_close: &OpenToClose,
    affinity: &AffinityFn<'_>,
) -> DpResult {
    let mut seen: HashSet<(Sequence, Sequence)> = HashSet::new();
    let mut order: Vec<(Sequence, Sequence)> = Vec::new();
    let mut frontier = vec![(s1.clone(), s2.clone())];

    while let Some((x, y)) = frontier.pop() {
        if !seen.insert((x.clone(), y.clone())) {
            continue;
        }
        if x.is_empty() || y.is_empty() {
            order.push((x, y));
            continue;
        }
        let deps = compute_deps(&x, &y, open_to_close, affinity);
        frontier.push(deps.drop1.clone());
        frontier.push(deps.drop2.clone());
        if let Some((_, head, tail)) = &deps.matched {
            frontier.push(head.clone());
            frontier.push(tail.clone());
        }
        order.push((x, y));
    }

    order.sort_by_key(|(a, b)| a.len() + b.len());

    let mut memo = Memo::new();
    for (x, y) in order {
        if memo.get(&x, &y).is_some() {
            continue;
        }
        if x.is_empty() || y.is_empty() {
            memo.insert(x, y, (Witness::empty(), 0.0));
            continue;
        }
        let deps = compute_deps(&x, &y, open_to_close, affinity);
        let result = combine(&deps, &memo);
        memo.insert(x, y, result);
    }

    memo.get(s1, s2)
        .cloned()
        .expect("top-level pair was resolved")
}

/// Longest common balanced embedding of `s1` and `s2`: the maximum-value
/// pair of sub-sequences reachable from each by dropping top-level
/// subtrees and/or matching roots and recursing into head/tail.
///
/// `affinity` scores a candidate root match; `None` means the pair may
/// never be matched.
#[must_use]
pub fn longest_common_balanced_embedding(
    s1: &Sequence,
    s2: &Sequence,
    open_to_close: &OpenToClose,
    affinity: &dyn Fn(TokenId, TokenId) -> Option<f64>,
    strategy: Strategy,
) -> DpResult {
    match strategy {
        Strategy::Recursive => recursive(s1, s2, open_to_close, affinity),
        Strategy::Iterative => iterative(s1, s2, open_to_close, affinity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcose_core::Token;
    use std::collections::HashMap;

    /// A labeled path `labels[0] -> labels[1] -> ...`, with token ids drawn
    /// starting at `offset` (disjoint ranges across forests, as the codec
    /// guarantees).
    fn path(labels: &[&'static str], offset: u32) -> (Sequence, OpenToClose, HashMap<TokenId, &'static str>) {
        let n = labels.len() as u32;
        let mut tokens = Vec::new();
        let mut otc = OpenToClose::new();
        let mut label_of = HashMap::new();
        for (idx, &label) in labels.iter().enumerate() {
            let idx = idx as u32;
            let open_id = offset + idx;
            let close_id = offset + n + idx;
            otc.insert(open_id, close_id);
            label_of.insert(open_id, label);
            tokens.push(Token::open(open_id));
        }
        for idx in (0..n).rev() {
            tokens.push(Token::close(offset + n + idx));
        }
        (Sequence::from_tokens(tokens), otc, label_of)
    }

    #[test]
    fn both_strategies_agree_on_a_simple_path_pair() {
        // s1 = path(a -> b), s2 = path(a -> b -> c): S1 from spec section 8.
        let (s1, otc1, labels1) = path(&["a", "b"], 0);
        let (s2, otc2, labels2) = path(&["a", "b", "c"], 4);
        let otc = otc1.merge(otc2);

        let affinity = |t1: TokenId, t2: TokenId| -> Option<f64> {
            if labels1.get(&t1) == labels2.get(&t2) {
                Some(1.0)
            } else {
                None
            }
        };

        for strategy in [Strategy::Recursive, Strategy::Iterative] {
            let (_, value) =
                longest_common_balanced_embedding(&s1, &s2, &otc, &affinity, strategy);
            assert!((value - 2.0).abs() < f64::EPSILON, "strategy {strategy:?}");
        }
    }

    #[test]
    fn empty_input_yields_zero() {
        let (_, otc, _) = path(&["a"], 0);
        let always_none = |_: TokenId, _: TokenId| None;
        let (_, value) = longest_common_balanced_embedding(
            &Sequence::empty(),
            &Sequence::empty(),
            &otc,
            &always_none,
            Strategy::Iterative,
        );
        assert_eq!(value, 0.0);
    }
}
