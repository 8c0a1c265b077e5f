//! JSON serialisation helpers for declaration trees.
//!
//! Available behind the default-on `json` feature; tooling that consumes
//! the merged tree (rather than rendered source) round-trips through these
//! helpers.

use crate::model::Declaration;

/// Serialises a declaration tree to pretty-printed JSON.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] when serialisation fails.
pub fn to_json(decl: &Declaration) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(decl)
}

/// Parses a declaration tree from its JSON representation.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] when the payload does not describe a
/// declaration tree.
pub fn from_json(data: &str) -> Result<Declaration, serde_json::Error> {
    serde_json::from_str(data)
}
