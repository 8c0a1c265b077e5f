//! Error types produced by the declaration loaders.
//!
//! The merge itself is a pure total function and defines no failure modes;
//! everything here belongs to the fallible collaborators around it, namely
//! reading input files and parsing their contents.

use camino::Utf8PathBuf;
use std::fmt;
use thiserror::Error;

use crate::parse::ParseError;

/// Which input declaration an error refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SourceRole {
    /// The template declaration being patched.
    Base,
    /// The declaration supplying overrides and additions.
    Patch,
}

impl fmt::Display for SourceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => f.write_str("base"),
            Self::Patch => f.write_str("patch"),
        }
    }
}

/// Errors that can occur while loading declarations for a merge.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MergeError {
    /// One of the two inputs failed to parse.
    #[error("failed to parse the {role} declaration: {source}")]
    Parse {
        /// Which input failed.
        role: SourceRole,
        /// The underlying syntax error.
        #[source]
        source: ParseError,
    },

    /// Reading an input file failed.
    #[error("declaration file error in '{path}': {source}")]
    File {
        /// Path of the unreadable file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl MergeError {
    /// Wraps a syntax error with the input it came from.
    #[must_use]
    pub(crate) const fn parse(role: SourceRole, source: ParseError) -> Self {
        Self::Parse { role, source }
    }

    /// Wraps an I/O error with the path it came from.
    #[must_use]
    pub(crate) const fn file(path: Utf8PathBuf, source: std::io::Error) -> Self {
        Self::File { path, source }
    }
}

/// Convenience alias for results carrying a [`MergeError`].
pub type MergeResult<T> = Result<T, MergeError>;
