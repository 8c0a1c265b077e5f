//! Command-line interface definitions for `declpatch`.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};

/// Output formats supported by `declpatch`.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Emit the merged declaration as source text.
    Source,
    /// Emit the merged declaration tree as JSON.
    Json,
}

impl OutputFormat {
    /// Returns the CLI-friendly string for this output format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Json => "json",
        }
    }
}

/// Parsed CLI arguments for `declpatch`.
#[derive(Debug, Parser)]
#[command(name = "declpatch")]
#[command(about = "Merge a patch class declaration over a base declaration")]
#[command(version)]
pub struct Args {
    /// Path to the base declaration file.
    pub base: Utf8PathBuf,
    /// Path to the patch declaration file.
    pub patch: Utf8PathBuf,
    /// Prefer the patch side for every conflicting attribute.
    #[arg(long = "override")]
    pub patch_override: bool,
    /// File to write instead of standard output.
    #[arg(long, value_name = "path")]
    pub out: Option<Utf8PathBuf>,
    /// Output format selection.
    #[arg(long, value_enum, default_value_t = OutputFormat::Source)]
    pub format: OutputFormat,
}
