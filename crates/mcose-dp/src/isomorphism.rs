//! Longest common balanced isomorphism: the restricted recurrence (section
//! 4.E). Dropping a whole first subtree (recursing on `tail1`/`tail2` alone)
//! is pure leaf-upward pruning and is always legal, exactly as in embedding.
//! What embedding allows and isomorphism forbids is *reparenting*: splicing
//! a dropped root's own children (`head`) up to join its former siblings
//! (embedding's `head.concat(tail)` drop). Isomorphism's drop never keeps
//! `head` around, so no edge is ever contracted.

use crate::memo::{DpResult, Memo, Witness};
use crate::strategy::Strategy;
use mcose_core::{OpenToClose, Sequence, TokenId};
use mcose_seq::decompose;
use std::collections::HashSet;

type AffinityFn<'a> = dyn Fn(TokenId, TokenId) -> Option<f64> + 'a;

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

struct Deps {
    /// Dropping `a1` (the whole first subtree of `s1`) outright: pure
    /// leaf-upward pruning, always legal — never an edge contraction,
    /// regardless of whether `head1` is empty.
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
    let drop1 = (s1.tail.clone(), y.clone());
    let drop2 = (x.clone(), s2.tail.clone());
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

fn combine(deps: &Deps, memo: &Memo) -> DpResult {
    // Matching nothing at this pair is always a legal (if weak) candidate.
    let mut best: DpResult = (Witness::empty(), 0.0);

    {
        let (dx, dy) = &deps.drop1;
        let candidate = memo
            .get(dx, dy)
            .cloned()
            .expect("drop-s1 dependency already solved");
        if candidate.1 > best.1 {
            best = candidate;
        }
    }
    {
        let (dx, dy) = &deps.drop2;
        let candidate = memo
            .get(dx, dy)
            .cloned()
            .expect("drop-s2 dependency already solved");
        if candidate.1 > best.1 {
            best = candidate;
        }
    }
    if let Some((score, head, tail)) = &deps.matched {
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
        let matched_value = head_v + tail_v + score;
        if matched_value >= best.1 {
            best = (Witness { sub1, sub2 }, matched_value);
        }
    }

    best
}

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
            let (dx, dy) = &deps.drop1;
            stack.push((dx.clone(), dy.clone(), false));
            let (dx, dy) = &deps.drop2;
            stack.push((dx.clone(), dy.clone(), false));
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

/// Longest common balanced isomorphism of `s1` and `s2`: like
/// [`crate::embedding::longest_common_balanced_embedding`], but dropping a
/// subtree always discards it whole (never splices its children up past
/// it), so no edge is ever contracted.
#[must_use]
pub fn longest_common_balanced_isomorphism(
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
