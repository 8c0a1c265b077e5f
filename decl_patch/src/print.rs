//! Rendering of declaration trees back to source text.
//!
//! The printer is the parser's inverse collaborator: opaque
//! captures are emitted verbatim, except that method bodies are dedented to
//! their common margin and re-indented at the output depth so merged
//! declarations print uniformly wherever their bodies came from.

use crate::model::{Declaration, Decorator, Field, Member, Method, Visibility};

const INDENT: &str = "    ";

/// Renders a declaration as source text.
///
/// # Examples
///
/// ```rust
/// use decl_patch::{parse_declaration, render_declaration};
///
/// let decl = parse_declaration("class a { private b = 1; }")?;
/// assert_eq!(render_declaration(&decl), "class a {\n    private b = 1;\n}\n");
/// # Ok::<(), decl_patch::ParseError>(())
/// ```
#[must_use]
pub fn render_declaration(decl: &Declaration) -> String {
    let mut out = String::new();
    for decorator in decl.decorators() {
        render_decorator(&mut out, "", decorator);
    }
    out.push_str("class ");
    out.push_str(decl.name());
    if let Some(heritage) = decl.heritage() {
        out.push(' ');
        out.push_str(heritage.as_str());
    }
    out.push_str(" {\n");
    for member in decl.members() {
        match member {
            Member::Field(field) => render_field(&mut out, field),
            Member::Method(method) => render_method(&mut out, method),
        }
    }
    out.push_str("}\n");
    out
}

fn render_decorator(out: &mut String, indent: &str, decorator: &Decorator) {
    out.push_str(indent);
    out.push('@');
    out.push_str(decorator.name());
    if let Some(arguments) = decorator.arguments() {
        out.push('(');
        out.push_str(arguments.as_str());
        out.push(')');
    }
    out.push('\n');
}

fn render_visibility(out: &mut String, visibility: Visibility) {
    if let Some(keyword) = visibility.keyword() {
        out.push_str(keyword);
        out.push(' ');
    }
}

fn render_field(out: &mut String, field: &Field) {
    for decorator in field.decorators() {
        render_decorator(out, INDENT, decorator);
    }
    out.push_str(INDENT);
    render_visibility(out, field.visibility());
    out.push_str(field.name());
    if let Some(annotation) = field.type_annotation() {
        out.push_str(": ");
        out.push_str(annotation.as_str());
    }
    if let Some(initializer) = field.initializer() {
        out.push_str(" = ");
        out.push_str(initializer.as_str());
    }
    out.push_str(";\n");
}

fn render_method(out: &mut String, method: &Method) {
    for decorator in method.decorators() {
        render_decorator(out, INDENT, decorator);
    }
    out.push_str(INDENT);
    render_visibility(out, method.visibility());
    out.push_str(method.name());
    out.push('(');
    out.push_str(method.parameters().as_str());
    out.push(')');
    if let Some(return_type) = method.return_type() {
        out.push_str(": ");
        out.push_str(return_type.as_str());
    }
    out.push_str(" {\n");
    render_body(out, method.body().as_str());
    out.push_str(INDENT);
    out.push_str("}\n");
}

/// Emits a body dedented to its common margin and re-indented two levels
/// deep; interior blank lines survive, surrounding blank lines do not.
fn render_body(out: &mut String, body: &str) {
    let margin = common_margin(body);
    let lines: Vec<&str> = body.lines().collect();
    let start = lines.iter().position(|line| !line.trim().is_empty());
    let end = lines.iter().rposition(|line| !line.trim().is_empty());
    let (Some(start_index), Some(end_index)) = (start, end) else {
        return;
    };
    for line in lines
        .iter()
        .take(end_index.saturating_add(1))
        .skip(start_index)
    {
        if line.trim().is_empty() {
            out.push('\n');
            continue;
        }
        out.push_str(INDENT);
        out.push_str(INDENT);
        let dedented: String = line.chars().skip(margin).collect();
        out.push_str(dedented.trim_end());
        out.push('\n');
    }
}

fn common_margin(body: &str) -> usize {
    body.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().take_while(|ch| ch.is_whitespace()).count())
        .min()
        .unwrap_or(0)
}
