//! Syntax errors reported by the declaration parser.

use thiserror::Error;

/// Errors produced while parsing a class declaration.
///
/// Positions are 1-based and refer to the character the parser was looking
/// at when it gave up.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum ParseError {
    /// The source did not begin with a (possibly prefixed) class keyword.
    #[error("expected a class declaration at line {line}, column {column}")]
    ExpectedClass {
        /// Line of the offending token.
        line: u32,
        /// Column of the offending token.
        column: u32,
    },

    /// The source ended in the middle of a construct.
    #[error("unexpected end of input while parsing {context} (line {line}, column {column})")]
    UnexpectedEof {
        /// The construct being parsed when input ran out.
        context: &'static str,
        /// Line where input ended.
        line: u32,
        /// Column where input ended.
        column: u32,
    },

    /// An unexpected character appeared where a known token was required.
    #[error("expected {expected} at line {line}, column {column}, found '{found}'")]
    Unexpected {
        /// Description of what the parser required.
        expected: &'static str,
        /// The character found instead.
        found: char,
        /// Line of the offending character.
        line: u32,
        /// Column of the offending character.
        column: u32,
    },
}
