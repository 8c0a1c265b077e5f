//! Base/patch fixture corpus for the merge suites.
//!
//! Each pair is a base class and the patch layered over it, exercising
//! exactly one kind of conflict (or addition) at a time.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};

/// Base for the "patch adds a field" scenario.
pub const FIELD_ADDED_BASE: &str = "class a {\n    private a;\n    private b = 1;\n}\n";
/// Patch adding `private c;` to [`FIELD_ADDED_BASE`].
pub const FIELD_ADDED_PATCH: &str = "class a {\n    private c;\n}\n";

/// Base for the "field initializer conflict" scenario.
pub const FIELD_VALUE_BASE: &str = "class a {\n    private b = 1;\n}\n";
/// Patch giving `b` a different initializer.
pub const FIELD_VALUE_PATCH: &str = "class a {\n    private b = 2;\n}\n";

/// Base for the "field modifier conflict" scenario.
pub const FIELD_MODIFIER_BASE: &str = "class a {\n    private b;\n}\n";
/// Patch giving `b` a different modifier.
pub const FIELD_MODIFIER_PATCH: &str = "class a {\n    public b;\n}\n";

/// Base for the "patch adds a method" scenario.
pub const METHOD_ADDED_BASE: &str =
    "class a {\n    private b(a:any): void {\n        let c = 5;\n    }\n}\n";
/// Patch adding a method `c` to [`METHOD_ADDED_BASE`].
pub const METHOD_ADDED_PATCH: &str =
    "class a {\n    private c(b:any): number {\n        return 3;\n    }\n}\n";

/// Base for the "method body conflict" scenario.
pub const METHOD_BODY_BASE: &str =
    "class a {\n    private b(a:any): void {\n        let c = 5;\n    }\n}\n";
/// Patch giving `b` a different body.
pub const METHOD_BODY_PATCH: &str =
    "class a {\n    private b(a:any): void {\n        let d = 6;\n    }\n}\n";

/// Base for the "method modifier conflict" scenario.
pub const METHOD_MODIFIER_BASE: &str = "class a {\n    private b(a:any): void {\n    }\n}\n";
/// Patch giving `b` a different modifier.
pub const METHOD_MODIFIER_PATCH: &str = "class a {\n    public b(a:any): void {\n    }\n}\n";

/// Base for the "patch adds a class decorator" scenario.
pub const DECORATOR_ADDED_BASE: &str = "@deca\nclass a {\n}\n";
/// Patch adding `@decb` alongside the base's `@deca`.
pub const DECORATOR_ADDED_PATCH: &str = "@decb\nclass a {\n}\n";

/// Base for the "decorator argument conflict" scenario.
pub const DECORATOR_ARGS_BASE: &str = "@deca(true)\nclass a {\n}\n";
/// Patch flipping the `@deca` argument and adding a patch-only `@decb`.
pub const DECORATOR_ARGS_PATCH: &str = "@deca(false)\n@decb\nclass a {\n}\n";

/// Writes a base/patch pair into `dir` as `base.ts` / `patch.ts`,
/// returning the created paths.
///
/// # Errors
///
/// Returns an error when either file cannot be written.
pub fn write_pair(
    dir: &Utf8Path,
    base: &str,
    patch: &str,
) -> anyhow::Result<(Utf8PathBuf, Utf8PathBuf)> {
    let base_path = dir.join("base.ts");
    let patch_path = dir.join("patch.ts");
    std::fs::write(&base_path, base)
        .with_context(|| format!("writing base fixture to {base_path}"))?;
    std::fs::write(&patch_path, patch)
        .with_context(|| format!("writing patch fixture to {patch_path}"))?;
    Ok((base_path, patch_path))
}
