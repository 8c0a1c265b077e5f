//! Per-attribute resolution rules for matched pairs.
//!
//! The policy is a pure function family over `(base, patch, precedence)`.
//! It is only ever applied to *paired* entries; unpaired members and
//! decorators pass through the merge untouched and never consult the
//! precedence at all.

use crate::matcher::{Pairing, pair_by_name};
use crate::model::{Decorator, Field, Member, Method};

/// Which side of a merge wins when both define the same attribute.
///
/// Built once from the caller's override flag and threaded explicitly into
/// every policy call; there is no ambient or process-wide state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Precedence {
    /// The base attribute survives (override flag unset).
    Base,
    /// The patch attribute survives (override flag set).
    Patch,
}

impl Precedence {
    /// Builds a precedence from the caller-facing override flag.
    #[must_use]
    pub const fn from_override(patch_wins: bool) -> Self {
        if patch_wins { Self::Patch } else { Self::Base }
    }

    /// Selects the winning value from a matched pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decl_patch::Precedence;
    ///
    /// assert_eq!(Precedence::Base.pick(1, 2), 1);
    /// assert_eq!(Precedence::Patch.pick(1, 2), 2);
    /// ```
    #[must_use]
    pub fn pick<T>(self, base: T, patch: T) -> T {
        match self {
            Self::Base => base,
            Self::Patch => patch,
        }
    }
}

/// Merges a matched pair of fields.
///
/// Visibility, type annotation, and initializer (presence and expression)
/// all come from the winning side; the two decorator lists are merged
/// independently. The name is the matching key and is taken from base.
#[must_use]
pub fn merge_field(base: &Field, patch: &Field, precedence: Precedence) -> Field {
    let winner = precedence.pick(base, patch);
    Field::new(base.name())
        .with_visibility(winner.visibility())
        .with_decorators(merge_decorator_lists(
            base.decorators(),
            patch.decorators(),
            precedence,
        ))
        .with_type_annotation(winner.type_annotation().cloned())
        .with_initializer(winner.initializer().cloned())
}

/// Merges a matched pair of methods.
///
/// Visibility, parameter list, return type, and body move as one
/// indivisible bundle from the winning side; there is no finer-grained
/// combination of one side's signature with the other's body. Decorator
/// lists are merged independently.
#[must_use]
pub fn merge_method(base: &Method, patch: &Method, precedence: Precedence) -> Method {
    let winner = precedence.pick(base, patch);
    Method::new(base.name())
        .with_visibility(winner.visibility())
        .with_decorators(merge_decorator_lists(
            base.decorators(),
            patch.decorators(),
            precedence,
        ))
        .with_parameters(winner.parameters().clone())
        .with_return_type(winner.return_type().cloned())
        .with_body(winner.body().clone())
}

/// Merges a matched pair of decorators: the winning side's argument list
/// survives, presence included.
#[must_use]
pub fn merge_decorator(base: &Decorator, patch: &Decorator, precedence: Precedence) -> Decorator {
    let winner = precedence.pick(base, patch);
    Decorator::new(base.name()).with_arguments(winner.arguments().cloned())
}

/// Merges two ordered decorator lists: base decorators keep base order,
/// patch-only decorators are appended in patch order, and name collisions
/// resolve through [`merge_decorator`].
#[must_use]
pub fn merge_decorator_lists(
    base: &[Decorator],
    patch: &[Decorator],
    precedence: Precedence,
) -> Vec<Decorator> {
    pair_by_name(base, patch)
        .into_iter()
        .map(|pairing| match pairing {
            Pairing::BaseOnly(only) | Pairing::PatchOnly(only) => only.clone(),
            Pairing::Matched {
                base: paired_base,
                patch: paired_patch,
            } => merge_decorator(paired_base, paired_patch, precedence),
        })
        .collect()
}

/// Merges a matched pair of members, dispatching on kind.
///
/// When base and patch disagree on the kind (a field and a method sharing
/// one name), no sub-attribute merge is meaningful; the winning side's
/// member passes through whole and the degradation is logged.
#[must_use]
pub fn merge_member(base: &Member, patch: &Member, precedence: Precedence) -> Member {
    match (base, patch) {
        (Member::Field(base_field), Member::Field(patch_field)) => {
            Member::Field(merge_field(base_field, patch_field, precedence))
        }
        (Member::Method(base_method), Member::Method(patch_method)) => {
            Member::Method(merge_method(base_method, patch_method, precedence))
        }
        (mismatched_base, mismatched_patch) => {
            tracing::warn!(
                member = mismatched_base.name(),
                "base and patch disagree on member kind; taking the winning side verbatim"
            );
            precedence.pick(mismatched_base, mismatched_patch).clone()
        }
    }
}
