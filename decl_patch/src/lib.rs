//! Core crate for the `decl-patch` structural merge tooling.
//!
//! `decl_patch` merges two versions of a class-like declaration, a *base*
//! (the template or upstream definition) and a *patch* (the customisation
//! layered on top), into one combined declaration. Members, class-level
//! decorators, and per-member decorators are matched by name; every
//! conflicting attribute (initializer, method signature and body,
//! visibility modifier, decorator arguments) resolves through a single
//! override flag, while unpaired entries always pass through exactly as
//! authored. The merge itself is a pure total function; parsing and
//! printing are the fallible collaborators around it.
//!
//! # Examples
//!
//! ```rust
//! let base = "class a {\n    private b = 1;\n}\n";
//! let patch = "class a {\n    private b = 2;\n    private c;\n}\n";
//!
//! let kept = decl_patch::merge_sources(base, patch, false)?;
//! assert!(kept.contains("private b = 1;"));
//! assert!(kept.contains("private c;"));
//!
//! let overridden = decl_patch::merge_sources(base, patch, true)?;
//! assert!(overridden.contains("private b = 2;"));
//! # Ok::<(), decl_patch::MergeError>(())
//! ```

mod error;
mod matcher;
mod merge;
mod model;
mod parse;
mod policy;
mod print;

#[cfg(feature = "json")]
pub mod json;

pub use error::{MergeError, MergeResult, SourceRole};
pub use matcher::{Named, Pairing, pair_by_name};
pub use merge::{load_merged_declaration, merge_declarations, merge_files, merge_sources};
pub use model::{Declaration, Decorator, Field, Member, Method, OpaqueText, Visibility};
pub use parse::{ParseError, parse_declaration};
pub use policy::{
    Precedence, merge_decorator, merge_decorator_lists, merge_field, merge_member, merge_method,
};
pub use print::render_declaration;
