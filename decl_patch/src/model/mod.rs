//! In-memory representation of class-like declarations.
//!
//! The types here are pure data: a [`Declaration`] owns its decorators and
//! members exclusively, and nothing in the model mutates after
//! construction. Trees are built once (by the parser or by the merger),
//! consumed by the printer, and discarded. Sub-trees the merge never
//! interprets (initializers, parameter lists, bodies, decorator arguments)
//! are carried as [`OpaqueText`] so the winning side of a merge is shared
//! rather than deep-copied.

mod decorator;
mod member;

pub use decorator::Decorator;
pub use member::{Field, Member, Method, Visibility};

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// An uninterpreted span of source text carried through the merge verbatim.
///
/// Cloning an `OpaqueText` bumps a reference count; merged trees share the
/// winning side's text with the input tree it came from.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpaqueText(Arc<str>);

impl OpaqueText {
    /// Returns the underlying text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the span contains no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for OpaqueText {
    fn from(text: &str) -> Self {
        Self(Arc::from(text))
    }
}

impl From<String> for OpaqueText {
    fn from(text: String) -> Self {
        Self(Arc::from(text))
    }
}

impl fmt::Display for OpaqueText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A class-like declaration: name, decorators, optional heritage clause,
/// and an ordered member list.
///
/// # Examples
///
/// ```rust
/// use decl_patch::{Declaration, Field, Member, Visibility};
///
/// let decl = Declaration::new("Widget").with_members(vec![Member::Field(
///     Field::new("id").with_visibility(Visibility::Private),
/// )]);
/// assert_eq!(decl.name(), "Widget");
/// assert_eq!(decl.members().len(), 1);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    name: String,
    decorators: Vec<Decorator>,
    heritage: Option<OpaqueText>,
    members: Vec<Member>,
}

impl Declaration {
    /// Creates a declaration with the given name and no decorators,
    /// heritage, or members.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decorators: Vec::new(),
            heritage: None,
            members: Vec::new(),
        }
    }

    /// Replaces the declaration's decorator list.
    #[must_use]
    pub fn with_decorators(mut self, decorators: Vec<Decorator>) -> Self {
        self.decorators = decorators;
        self
    }

    /// Replaces the heritage clause (the raw text between the name and the
    /// opening brace, e.g. `extends Base`).
    #[must_use]
    pub fn with_heritage(mut self, heritage: Option<OpaqueText>) -> Self {
        self.heritage = heritage;
        self
    }

    /// Replaces the declaration's member list.
    #[must_use]
    pub fn with_members(mut self, members: Vec<Member>) -> Self {
        self.members = members;
        self
    }

    /// Returns the declaration name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered class-level decorators.
    #[must_use]
    pub fn decorators(&self) -> &[Decorator] {
        &self.decorators
    }

    /// Returns the heritage clause, if any.
    #[must_use]
    pub fn heritage(&self) -> Option<&OpaqueText> {
        self.heritage.as_ref()
    }

    /// Returns the ordered member list.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_text_shares_rather_than_copies() {
        let original = OpaqueText::from("let c = 5;");
        let shared = original.clone();
        assert_eq!(original, shared);
        assert_eq!(shared.as_str(), "let c = 5;");
    }

    #[test]
    fn declaration_builders_accumulate() {
        let decl = Declaration::new("a")
            .with_heritage(Some(OpaqueText::from("extends b")))
            .with_decorators(vec![Decorator::new("deca")]);
        assert_eq!(decl.name(), "a");
        assert_eq!(decl.heritage().map(OpaqueText::as_str), Some("extends b"));
        assert_eq!(decl.decorators().len(), 1);
        assert!(decl.members().is_empty());
    }
}
