//! Library interface for the `declpatch` command-line tool.
//!
//! The binary is a thin wrapper: argument definitions live in [`cli`],
//! failure shapes in [`error`], writers in [`output`], and the pipeline in
//! [`run`], so integration tests can drive the tool without spawning a
//! process.

pub mod cli;
pub mod error;
pub mod output;

use crate::cli::{Args, OutputFormat};
use crate::error::DeclpatchError;

/// Executes the merge described by parsed CLI arguments.
///
/// # Errors
///
/// Returns a [`DeclpatchError`] when an input cannot be read or parsed, or
/// when the output cannot be produced.
pub fn run(args: &Args) -> Result<(), DeclpatchError> {
    let payload = render_payload(args)?;
    output::write_merged(args.out.as_deref(), &payload)
}

fn render_payload(args: &Args) -> Result<String, DeclpatchError> {
    match args.format {
        OutputFormat::Source => {
            Ok(decl_patch::merge_files(&args.base, &args.patch, args.patch_override)?)
        }
        OutputFormat::Json => {
            let merged =
                decl_patch::load_merged_declaration(&args.base, &args.patch, args.patch_override)?;
            let mut rendered = decl_patch::json::to_json(&merged)?;
            rendered.push('\n');
            Ok(rendered)
        }
    }
}
