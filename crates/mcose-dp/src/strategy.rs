//! The `impl` knob shared by every DP entry point.

use mcose_core::{Error, Result};

/// Which DP evaluation strategy to run. Both produce identical values on
/// every input; witnesses agree up to the tie-breaking rule in the
/// recurrence (match candidate, then drop-`s1`, then drop-`s2`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Top-down, via an explicit work stack (no host recursion) consulting
    /// the memo lazily — only sub-problems actually reached are solved.
    Recursive,
    /// Bottom-up: the reachable sub-problem closure is enumerated once,
    /// sorted by combined length ascending, and filled without recursion.
    /// Usually faster in practice; no per-frame overhead.
    Iterative,
}

impl Strategy {
    /// Parse the `"recursive"` / `"iterative"` tags from spec section 6.
    ///
    /// # Errors
    /// Returns [`Error::InvalidImpl`] for any other tag.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "recursive" => Ok(Self::Recursive),
            "iterative" => Ok(Self::Iterative),
            other => Err(Error::InvalidImpl {
                requested: other.to_string(),
                available: available_impls(),
            }),
        }
    }
}

impl Default for Strategy {
    /// Iterative is the default: same contract, no recursion overhead.
    fn default() -> Self {
        Self::Iterative
    }
}

/// The `impl` tags accepted by `longest_common_balanced_embedding` and
/// `longest_common_balanced_isomorphism`.
#[must_use]
pub fn available_impls() -> Vec<String> {
    vec!["recursive".to_string(), "iterative".to_string()]
}

/// The `impl` tags accepted by
/// [`crate::maximum_common_ordered_subtree_embedding`] and
/// [`crate::longest_common_balanced_embedding`].
#[must_use]
pub fn available_impls_longest_common_balanced_embedding() -> Vec<String> {
    available_impls()
}

/// The `impl` tags accepted by
/// [`crate::maximum_common_ordered_subtree_isomorphism`] and
/// [`crate::longest_common_balanced_isomorphism`].
#[must_use]
pub fn available_impls_longest_common_balanced_isomorphism() -> Vec<String> {
    available_impls()
}
