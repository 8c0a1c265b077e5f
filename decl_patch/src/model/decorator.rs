//! Decorator annotations attached to declarations and members.

use serde::{Deserialize, Serialize};

use super::OpaqueText;

/// A decorator: a name plus an optional, uninterpreted argument list.
///
/// Identity is the name alone; `@deca(true)` and `@deca(false)` are the
/// same decorator with conflicting arguments.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Decorator {
    name: String,
    arguments: Option<OpaqueText>,
}

impl Decorator {
    /// Creates a decorator without arguments.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: None,
        }
    }

    /// Replaces the argument list. `Some("")` renders as an empty pair of
    /// parentheses; `None` renders bare.
    #[must_use]
    pub fn with_arguments(mut self, arguments: Option<OpaqueText>) -> Self {
        self.arguments = arguments;
        self
    }

    /// Returns the decorator name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the argument list, if any.
    #[must_use]
    pub fn arguments(&self) -> Option<&OpaqueText> {
        self.arguments.as_ref()
    }
}
