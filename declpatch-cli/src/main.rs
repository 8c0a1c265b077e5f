//! CLI entrypoint for `declpatch`.

use clap::Parser;

use declpatch_cli::cli::Args;
use declpatch_cli::error::DeclpatchError;

fn main() -> Result<(), DeclpatchError> {
    declpatch_cli::run(&Args::parse())
}
