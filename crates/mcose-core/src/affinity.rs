//! Node-affinity selection at the tree-level API boundary.
//!
//! The balanced-sequence DP itself never sees labels — it takes a closure
//! over token ids (see `mcose_dp`). [`NodeAffinity`] is the tree-level
//! knob described in spec section 6: `"eq"`, `"auto"`, "always true", or a
//! user callback, all defined over node *labels*.

use std::sync::Arc;

/// How two nodes' labels are scored for a match.
///
/// `"auto"`'s exact semantics vary across prior art; here it is fixed to be
/// identical to `"eq"` (label equality) since every [`super::forest::OrderedForest`]
/// in this workspace always carries a label — see `DESIGN.md` for the
/// rationale.
#[derive(Clone)]
pub enum NodeAffinity<L> {
    /// Boolean label equality; matched pairs score `1.0`.
    Eq,
    /// Alias for [`NodeAffinity::Eq`] in this implementation.
    Auto,
    /// Every pair matches with score `1.0`, regardless of label.
    Always,
    /// A user-supplied scorer. `None` means "no match"; `Some(score)` must
    /// be non-negative, and `Some(0.0)` is indistinguishable from a
    /// mismatch.
    Custom(Arc<dyn Fn(&L, &L) -> Option<f64> + Send + Sync>),
}

impl<L> std::fmt::Debug for NodeAffinity<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eq => write!(f, "NodeAffinity::Eq"),
            Self::Auto => write!(f, "NodeAffinity::Auto"),
            Self::Always => write!(f, "NodeAffinity::Always"),
            Self::Custom(_) => write!(f, "NodeAffinity::Custom(..)"),
        }
    }
}

impl<L: Eq> NodeAffinity<L> {
    /// Score a candidate match between two labels. `None` means the nodes
    /// may not be matched; `Some(score)` is the (non-negative) affinity
    /// contributed if they are.
    #[must_use]
    pub fn score(&self, a: &L, b: &L) -> Option<f64> {
        match self {
            Self::Eq | Self::Auto => {
                if a == b {
                    Some(1.0)
                } else {
                    None
                }
            }
            Self::Always => Some(1.0),
            Self::Custom(f) => f(a, b),
        }
    }

    /// Parse the string tags from spec section 6 (`"eq"`, `"auto"`).
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidAffinity`] for any other tag.
    pub fn from_tag(tag: &str) -> crate::Result<Self> {
        match tag {
            "eq" => Ok(Self::Eq),
            "auto" => Ok(Self::Auto),
            other => Err(crate::Error::InvalidAffinity(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_and_auto_agree() {
        let eq = NodeAffinity::<&'static str>::Eq;
        let auto = NodeAffinity::<&'static str>::Auto;
        assert_eq!(eq.score(&"a", &"a"), auto.score(&"a", &"a"));
        assert_eq!(eq.score(&"a", &"b"), auto.score(&"a", &"b"));
        assert_eq!(eq.score(&"a", &"a"), Some(1.0));
        assert_eq!(eq.score(&"a", &"b"), None);
    }

    #[test]
    fn always_matches_everything() {
        let always = NodeAffinity::<&'static str>::Always;
        assert_eq!(always.score(&"a", &"b"), Some(1.0));
    }

    #[test]
    fn custom_scorer_runs() {
        let custom: NodeAffinity<i32> = NodeAffinity::Custom(Arc::new(|a: &i32, b: &i32| {
            if (a - b).abs() <= 1 {
                Some(0.5)
            } else {
                None
            }
        }));
        assert_eq!(custom.score(&3, &4), Some(0.5));
        assert_eq!(custom.score(&3, &9), None);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!(NodeAffinity::<&'static str>::from_tag("bogus").is_err());
    }
}
