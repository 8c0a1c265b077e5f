//! Members of a class-like declaration: fields and methods.

use serde::{Deserialize, Serialize};

use super::{Decorator, OpaqueText};

/// Access modifier attached to a member.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// `public`.
    Public,
    /// `private`.
    Private,
    /// `protected`.
    Protected,
    /// No modifier written in the source.
    #[default]
    Unspecified,
}

impl Visibility {
    /// Returns the source keyword, or `None` for [`Visibility::Unspecified`].
    #[must_use]
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Public => Some("public"),
            Self::Private => Some("private"),
            Self::Protected => Some("protected"),
            Self::Unspecified => None,
        }
    }

    /// Looks a keyword up, returning `None` for anything outside the closed
    /// modifier set.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            "protected" => Some(Self::Protected),
            _ => None,
        }
    }
}

/// A single class member, either a field or a method.
///
/// The variant is *not* part of a member's identity; matching across base
/// and patch is by name alone.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Member {
    /// A field, with an optional initializer.
    Field(Field),
    /// A method, with a parameter list and a body.
    Method(Method),
}

impl Member {
    /// Returns the member name, its identity for matching.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Field(field) => field.name(),
            Self::Method(method) => method.name(),
        }
    }

    /// Returns the member's visibility modifier.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        match self {
            Self::Field(field) => field.visibility(),
            Self::Method(method) => method.visibility(),
        }
    }

    /// Returns the member's own decorators.
    #[must_use]
    pub fn decorators(&self) -> &[Decorator] {
        match self {
            Self::Field(field) => field.decorators(),
            Self::Method(method) => method.decorators(),
        }
    }
}

/// A field member: optional type annotation and optional initializer, both
/// opaque.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Field {
    name: String,
    visibility: Visibility,
    decorators: Vec<Decorator>,
    type_annotation: Option<OpaqueText>,
    initializer: Option<OpaqueText>,
}

impl Field {
    /// Creates a field with no modifier, decorators, annotation, or
    /// initializer.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Unspecified,
            decorators: Vec::new(),
            type_annotation: None,
            initializer: None,
        }
    }

    /// Replaces the visibility modifier.
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Replaces the field's decorator list.
    #[must_use]
    pub fn with_decorators(mut self, decorators: Vec<Decorator>) -> Self {
        self.decorators = decorators;
        self
    }

    /// Replaces the type annotation.
    #[must_use]
    pub fn with_type_annotation(mut self, type_annotation: Option<OpaqueText>) -> Self {
        self.type_annotation = type_annotation;
        self
    }

    /// Replaces the initializer expression.
    #[must_use]
    pub fn with_initializer(mut self, initializer: Option<OpaqueText>) -> Self {
        self.initializer = initializer;
        self
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the visibility modifier.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns the field's decorators.
    #[must_use]
    pub fn decorators(&self) -> &[Decorator] {
        &self.decorators
    }

    /// Returns the type annotation, if any.
    #[must_use]
    pub fn type_annotation(&self) -> Option<&OpaqueText> {
        self.type_annotation.as_ref()
    }

    /// Returns the initializer expression, if any.
    #[must_use]
    pub fn initializer(&self) -> Option<&OpaqueText> {
        self.initializer.as_ref()
    }
}

/// A method member: opaque parameter list, optional return type, and an
/// opaque body copied wholesale from whichever side wins a merge.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Method {
    name: String,
    visibility: Visibility,
    decorators: Vec<Decorator>,
    parameters: OpaqueText,
    return_type: Option<OpaqueText>,
    body: OpaqueText,
}

impl Method {
    /// Creates a method with an empty parameter list and body.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Unspecified,
            decorators: Vec::new(),
            parameters: OpaqueText::from(""),
            return_type: None,
            body: OpaqueText::from(""),
        }
    }

    /// Replaces the visibility modifier.
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Replaces the method's decorator list.
    #[must_use]
    pub fn with_decorators(mut self, decorators: Vec<Decorator>) -> Self {
        self.decorators = decorators;
        self
    }

    /// Replaces the parameter list (the verbatim text between the
    /// parentheses).
    #[must_use]
    pub fn with_parameters(mut self, parameters: OpaqueText) -> Self {
        self.parameters = parameters;
        self
    }

    /// Replaces the return type annotation.
    #[must_use]
    pub fn with_return_type(mut self, return_type: Option<OpaqueText>) -> Self {
        self.return_type = return_type;
        self
    }

    /// Replaces the body (the verbatim text between the braces).
    #[must_use]
    pub fn with_body(mut self, body: OpaqueText) -> Self {
        self.body = body;
        self
    }

    /// Returns the method name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the visibility modifier.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns the method's decorators.
    #[must_use]
    pub fn decorators(&self) -> &[Decorator] {
        &self.decorators
    }

    /// Returns the verbatim parameter list.
    #[must_use]
    pub const fn parameters(&self) -> &OpaqueText {
        &self.parameters
    }

    /// Returns the return type annotation, if any.
    #[must_use]
    pub fn return_type(&self) -> Option<&OpaqueText> {
        self.return_type.as_ref()
    }

    /// Returns the verbatim body.
    #[must_use]
    pub const fn body(&self) -> &OpaqueText {
        &self.body
    }
}
