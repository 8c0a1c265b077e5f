//! The declaration merger and its caller-facing entry points.
//!
//! [`merge_declarations`] orchestrates the class-level attributes and the
//! member list; [`merge_sources`] and [`merge_files`] wrap it with the
//! parser and printer so callers can go from source text (or files) to
//! merged source text in one call, mirroring the shape
//! `merge(override, base, patch) -> text` of the original tool.

use camino::Utf8Path;

use crate::error::{MergeError, MergeResult, SourceRole};
use crate::matcher::{Pairing, pair_by_name};
use crate::model::Declaration;
use crate::parse::parse_declaration;
use crate::policy::{Precedence, merge_decorator_lists, merge_member};
use crate::print::render_declaration;

/// Merges a patch declaration over a base declaration.
///
/// The result is a freshly constructed tree: base-originated members keep
/// base's relative order, patch-only members are appended in patch order,
/// and every conflicting attribute resolves through `precedence`. Both
/// inputs are left untouched; opaque sub-trees are shared with whichever
/// input supplied them.
///
/// # Examples
///
/// ```rust
/// use decl_patch::{Declaration, Field, Member, Precedence, merge_declarations};
///
/// let base = Declaration::new("a")
///     .with_members(vec![Member::Field(Field::new("b"))]);
/// let patch = Declaration::new("a")
///     .with_members(vec![Member::Field(Field::new("c"))]);
/// let merged = merge_declarations(&base, &patch, Precedence::Base);
/// let names: Vec<&str> = merged.members().iter().map(Member::name).collect();
/// assert_eq!(names, ["b", "c"]);
/// ```
#[must_use]
pub fn merge_declarations(
    base: &Declaration,
    patch: &Declaration,
    precedence: Precedence,
) -> Declaration {
    let decorators = merge_decorator_lists(base.decorators(), patch.decorators(), precedence);
    let heritage = precedence.pick(base.heritage(), patch.heritage()).cloned();
    let members = pair_by_name(base.members(), patch.members())
        .into_iter()
        .map(|pairing| match pairing {
            Pairing::BaseOnly(only) | Pairing::PatchOnly(only) => only.clone(),
            Pairing::Matched {
                base: paired_base,
                patch: paired_patch,
            } => merge_member(paired_base, paired_patch, precedence),
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        declaration = base.name(),
        members = members.len(),
        "assembled merged declaration"
    );

    Declaration::new(base.name())
        .with_decorators(decorators)
        .with_heritage(heritage)
        .with_members(members)
}

/// Parses two class sources, merges them, and renders the combined class.
///
/// # Examples
///
/// ```rust
/// let base = "class a {\n    private b = 1;\n}\n";
/// let patch = "class a {\n    private b = 2;\n}\n";
/// let merged = decl_patch::merge_sources(base, patch, false)?;
/// assert!(merged.contains("private b = 1;"));
/// # Ok::<(), decl_patch::MergeError>(())
/// ```
///
/// # Errors
///
/// Returns a [`MergeError::Parse`] naming the offending input when either
/// source is not a well-formed class declaration.
pub fn merge_sources(base: &str, patch: &str, patch_override: bool) -> MergeResult<String> {
    let base_decl =
        parse_declaration(base).map_err(|source| MergeError::parse(SourceRole::Base, source))?;
    let patch_decl =
        parse_declaration(patch).map_err(|source| MergeError::parse(SourceRole::Patch, source))?;
    let merged = merge_declarations(
        &base_decl,
        &patch_decl,
        Precedence::from_override(patch_override),
    );
    Ok(render_declaration(&merged))
}

/// Reads, parses, and merges two declaration files, returning the merged
/// tree for callers that want to inspect or serialise it rather than print
/// it.
///
/// # Errors
///
/// Returns a [`MergeError::File`] when either path cannot be read, or a
/// [`MergeError::Parse`] when either file's contents fail to parse.
pub fn load_merged_declaration(
    base: &Utf8Path,
    patch: &Utf8Path,
    patch_override: bool,
) -> MergeResult<Declaration> {
    let base_text = read_input(base)?;
    let patch_text = read_input(patch)?;
    let base_decl = parse_declaration(&base_text)
        .map_err(|source| MergeError::parse(SourceRole::Base, source))?;
    let patch_decl = parse_declaration(&patch_text)
        .map_err(|source| MergeError::parse(SourceRole::Patch, source))?;
    Ok(merge_declarations(
        &base_decl,
        &patch_decl,
        Precedence::from_override(patch_override),
    ))
}

/// Reads, parses, and merges two declaration files, rendering the combined
/// class; this is the original tool's file-level entry point.
///
/// # Errors
///
/// Returns a [`MergeError::File`] when either path cannot be read, or a
/// [`MergeError::Parse`] when either file's contents fail to parse.
pub fn merge_files(base: &Utf8Path, patch: &Utf8Path, patch_override: bool) -> MergeResult<String> {
    let merged = load_merged_declaration(base, patch, patch_override)?;
    Ok(render_declaration(&merged))
}

fn read_input(path: &Utf8Path) -> MergeResult<String> {
    std::fs::read_to_string(path).map_err(|source| MergeError::file(path.to_path_buf(), source))
}
