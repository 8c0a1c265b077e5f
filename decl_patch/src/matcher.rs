//! Pairing of base and patch sequences by identity name.
//!
//! One algorithm serves members, class-level decorators, and per-member
//! decorators: index the patch side by name, walk the base side in order
//! emitting paired or base-only entries, then emit whatever the base side
//! never claimed, in patch order. No entry is matched twice.

use std::collections::HashMap;

use crate::model::{Decorator, Member};

/// Items addressable by a stable identity name.
pub trait Named {
    /// Returns the item's identity for matching.
    fn name(&self) -> &str;
}

impl Named for Member {
    fn name(&self) -> &str {
        match self {
            Self::Field(field) => field.name(),
            Self::Method(method) => method.name(),
        }
    }
}

impl Named for Decorator {
    fn name(&self) -> &str {
        Self::name(self)
    }
}

/// A correspondence entry produced by [`pair_by_name`]; at least one side is
/// always present.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pairing<'a, T> {
    /// Present only in the base sequence; passes through unchanged.
    BaseOnly(&'a T),
    /// Present only in the patch sequence; passes through unchanged.
    PatchOnly(&'a T),
    /// Present in both sequences; subject to the merge policy.
    Matched {
        /// The base side of the pair.
        base: &'a T,
        /// The patch side of the pair.
        patch: &'a T,
    },
}

/// Pairs two ordered sequences by name.
///
/// Base-originated entries come first, in base order; unclaimed patch
/// entries follow in patch order. Duplicate names within one input bind to
/// the first occurrence, and later duplicates fall through as unpaired
/// entries.
///
/// # Examples
///
/// ```rust
/// use decl_patch::{Decorator, Pairing, pair_by_name};
///
/// let base = vec![Decorator::new("deca")];
/// let patch = vec![Decorator::new("deca"), Decorator::new("decb")];
/// let pairings = pair_by_name(&base, &patch);
/// assert!(matches!(pairings.first(), Some(Pairing::Matched { .. })));
/// assert!(matches!(pairings.get(1), Some(Pairing::PatchOnly(_))));
/// ```
#[must_use]
pub fn pair_by_name<'a, T: Named>(base: &'a [T], patch: &'a [T]) -> Vec<Pairing<'a, T>> {
    let mut unclaimed: HashMap<&str, usize> = HashMap::with_capacity(patch.len());
    for (index, entry) in patch.iter().enumerate() {
        unclaimed.entry(entry.name()).or_insert(index);
    }

    let mut claimed = vec![false; patch.len()];
    let mut pairings = Vec::with_capacity(base.len() + patch.len());
    for entry in base {
        if let Some(index) = unclaimed.remove(entry.name()) {
            if let Some(flag) = claimed.get_mut(index) {
                *flag = true;
            }
            if let Some(counterpart) = patch.get(index) {
                pairings.push(Pairing::Matched {
                    base: entry,
                    patch: counterpart,
                });
            }
        } else {
            pairings.push(Pairing::BaseOnly(entry));
        }
    }

    for (index, entry) in patch.iter().enumerate() {
        if !claimed.get(index).copied().unwrap_or(false) {
            pairings.push(Pairing::PatchOnly(entry));
        }
    }

    pairings
}
