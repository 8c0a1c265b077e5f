//! Parsing of class-declaration source text into the declaration model.
//!
//! The accepted grammar is exactly the data model: optional decorators
//! (`@name` or `@name(args)`), optional `export` / `default` / `abstract`
//! prefixes, the `class` keyword, a name, an optional heritage clause
//! carried verbatim up to the opening brace, and a member list of fields
//! and methods. Initializers, type annotations, parameter lists, bodies,
//! and decorator arguments are captured as opaque text, never interpreted.
//! Each source must contain a single class declaration; stray semicolons
//! are tolerated, anything else after the closing brace is an error.

mod error;
mod scanner;

pub use error::ParseError;

use scanner::Scanner;

use crate::model::{Declaration, Decorator, Field, Member, Method, OpaqueText, Visibility};

/// Parses a single class declaration from source text.
///
/// # Examples
///
/// ```rust
/// use decl_patch::{Member, parse_declaration};
///
/// let decl = parse_declaration("class a {\n    private b = 1;\n}\n")?;
/// assert_eq!(decl.name(), "a");
/// let names: Vec<&str> = decl.members().iter().map(Member::name).collect();
/// assert_eq!(names, ["b"]);
/// # Ok::<(), decl_patch::ParseError>(())
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first syntax problem, with its
/// line and column.
pub fn parse_declaration(source: &str) -> Result<Declaration, ParseError> {
    let mut scanner = Scanner::new(source);
    let decorators = parse_decorators(&mut scanner)?;
    let name = parse_class_header(&mut scanner)?;

    let heritage_text = scanner.take_until("the class body", &['{'])?;
    let heritage_trimmed = heritage_text.trim();
    let heritage = if heritage_trimmed.is_empty() {
        None
    } else {
        Some(OpaqueText::from(heritage_trimmed))
    };

    scanner.expect('{', "'{' to open the class body")?;
    let mut members = Vec::new();
    loop {
        scanner.skip_trivia();
        match scanner.peek() {
            Some('}') => {
                scanner.bump();
                break;
            }
            Some(';') => {
                scanner.bump();
            }
            Some(_) => members.push(parse_member(&mut scanner)?),
            None => return Err(scanner.unexpected_eof("the class body")),
        }
    }

    scanner.skip_trivia();
    while scanner.eat(';') {
        scanner.skip_trivia();
    }
    if let Some(found) = scanner.peek() {
        return Err(scanner.unexpected("the end of input", found));
    }

    Ok(Declaration::new(name)
        .with_decorators(decorators)
        .with_heritage(heritage)
        .with_members(members))
}

/// Consumes optional prefixes and the `class` keyword, returning the class
/// name.
fn parse_class_header(scanner: &mut Scanner) -> Result<String, ParseError> {
    loop {
        scanner.skip_trivia();
        let Some(keyword) = scanner.take_identifier() else {
            return Err(scanner.expected_class());
        };
        match keyword.as_str() {
            "export" | "default" | "abstract" => {}
            "class" => break,
            _ => return Err(scanner.expected_class()),
        }
    }
    scanner.skip_trivia();
    scanner.identifier_or("a class name", "the class name")
}

/// Consumes zero or more decorators at the cursor.
fn parse_decorators(scanner: &mut Scanner) -> Result<Vec<Decorator>, ParseError> {
    let mut decorators = Vec::new();
    scanner.skip_trivia();
    while scanner.eat('@') {
        let name = scanner.identifier_or("a decorator name", "a decorator")?;
        scanner.skip_trivia();
        let arguments = if scanner.peek() == Some('(') {
            let raw = scanner.take_balanced('(', ')', "the decorator argument list")?;
            Some(OpaqueText::from(raw.trim()))
        } else {
            None
        };
        decorators.push(Decorator::new(name).with_arguments(arguments));
        scanner.skip_trivia();
    }
    Ok(decorators)
}

/// Parses one member: decorators, modifiers from the closed visibility
/// set, the name, then a field or method tail.
fn parse_member(scanner: &mut Scanner) -> Result<Member, ParseError> {
    let decorators = parse_decorators(scanner)?;
    scanner.skip_trivia();

    let mut visibility = Visibility::Unspecified;
    let mut name = scanner.identifier_or("a member name", "a class member")?;
    while let Some(modifier) = Visibility::from_keyword(&name) {
        visibility = modifier;
        scanner.skip_trivia();
        name = scanner.identifier_or("a member name", "a class member")?;
    }

    scanner.skip_trivia();
    match scanner.peek() {
        Some('(') => parse_method_tail(scanner, name, visibility, decorators),
        Some(':' | '=' | ';') => parse_field_tail(scanner, name, visibility, decorators),
        Some(found) => Err(scanner.unexpected("'(', ':', '=', or ';'", found)),
        None => Err(scanner.unexpected_eof("a class member")),
    }
}

fn parse_field_tail(
    scanner: &mut Scanner,
    name: String,
    visibility: Visibility,
    decorators: Vec<Decorator>,
) -> Result<Member, ParseError> {
    let mut type_annotation = None;
    if scanner.eat(':') {
        let annotation_text = scanner.take_until("the field type annotation", &['=', ';', '}'])?;
        let annotation_trimmed = annotation_text.trim();
        if !annotation_trimmed.is_empty() {
            type_annotation = Some(OpaqueText::from(annotation_trimmed));
        }
    }

    let mut initializer = None;
    if scanner.eat('=') {
        let initializer_text = scanner.take_until("the field initializer", &[';', '}'])?;
        let initializer_trimmed = initializer_text.trim();
        if !initializer_trimmed.is_empty() {
            initializer = Some(OpaqueText::from(initializer_trimmed));
        }
    }

    scanner.expect(';', "';' to end the field")?;
    Ok(Member::Field(
        Field::new(name)
            .with_visibility(visibility)
            .with_decorators(decorators)
            .with_type_annotation(type_annotation)
            .with_initializer(initializer),
    ))
}

fn parse_method_tail(
    scanner: &mut Scanner,
    name: String,
    visibility: Visibility,
    decorators: Vec<Decorator>,
) -> Result<Member, ParseError> {
    let parameters_raw = scanner.take_balanced('(', ')', "the method parameter list")?;

    scanner.skip_trivia();
    let mut return_type = None;
    if scanner.eat(':') {
        let return_text = scanner.take_until("the method return type", &['{'])?;
        let return_trimmed = return_text.trim();
        if !return_trimmed.is_empty() {
            return_type = Some(OpaqueText::from(return_trimmed));
        }
    }

    scanner.skip_trivia();
    let body_raw = scanner.take_balanced('{', '}', "the method body")?;

    Ok(Member::Method(
        Method::new(name)
            .with_visibility(visibility)
            .with_decorators(decorators)
            .with_parameters(OpaqueText::from(parameters_raw.trim()))
            .with_return_type(return_type)
            .with_body(OpaqueText::from(body_raw)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OpaqueText;

    fn parsed(source: &str) -> Declaration {
        parse_declaration(source).unwrap_or_else(|error| panic!("parse failed: {error}"))
    }

    #[test]
    fn parses_fields_with_modifier_annotation_and_initializer() {
        let decl = parsed("class a {\n    private b: number = 1;\n    c;\n}\n");
        let Some(Member::Field(field)) = decl.members().first() else {
            panic!("expected a field");
        };
        assert_eq!(field.name(), "b");
        assert_eq!(field.visibility(), Visibility::Private);
        assert_eq!(field.type_annotation().map(OpaqueText::as_str), Some("number"));
        assert_eq!(field.initializer().map(OpaqueText::as_str), Some("1"));
        let Some(Member::Field(bare)) = decl.members().get(1) else {
            panic!("expected a second field");
        };
        assert_eq!(bare.visibility(), Visibility::Unspecified);
        assert_eq!(bare.initializer(), None);
    }

    #[test]
    fn parses_methods_with_verbatim_parameters_and_body() {
        let decl = parsed("class a {\n    public b(a:any, c:number): void {\n        let c = 5;\n    }\n}\n");
        let Some(Member::Method(method)) = decl.members().first() else {
            panic!("expected a method");
        };
        assert_eq!(method.parameters().as_str(), "a:any, c:number");
        assert_eq!(method.return_type().map(OpaqueText::as_str), Some("void"));
        assert!(method.body().as_str().contains("let c = 5;"));
    }

    #[test]
    fn parses_class_and_member_decorators() {
        let decl = parsed("@deca(true)\n@decb\nclass a {\n    @decc(1, 2)\n    private b;\n}\n");
        assert_eq!(decl.decorators().len(), 2);
        assert_eq!(
            decl.decorators().first().and_then(Decorator::arguments).map(OpaqueText::as_str),
            Some("true")
        );
        assert_eq!(decl.decorators().get(1).and_then(Decorator::arguments), None);
        let Some(member) = decl.members().first() else {
            panic!("expected a member");
        };
        assert_eq!(
            member.decorators().first().and_then(Decorator::arguments).map(OpaqueText::as_str),
            Some("1, 2")
        );
    }

    #[test]
    fn captures_the_heritage_clause_verbatim() {
        let decl = parsed("export class a extends b implements c {\n}\n");
        assert_eq!(
            decl.heritage().map(OpaqueText::as_str),
            Some("extends b implements c")
        );
    }

    #[test]
    fn braces_inside_string_literals_do_not_close_the_body() {
        let decl = parsed("class a {\n    b() {\n        let s = \"}\";\n    }\n}\n");
        let Some(Member::Method(method)) = decl.members().first() else {
            panic!("expected a method");
        };
        assert!(method.body().as_str().contains("\"}\""));
    }

    #[test]
    fn comments_and_stray_semicolons_are_tolerated() {
        let decl = parsed("// header\nclass a {\n    /* note */\n    private b;;\n};\n");
        assert_eq!(decl.members().len(), 1);
    }

    #[test]
    fn rejects_sources_without_a_class_keyword() {
        assert!(matches!(
            parse_declaration("const a = 1;"),
            Err(ParseError::ExpectedClass { .. })
        ));
    }

    #[test]
    fn rejects_unterminated_bodies() {
        assert!(matches!(
            parse_declaration("class a {\n    b() {\n"),
            Err(ParseError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn rejects_fields_without_a_terminating_semicolon() {
        assert!(matches!(
            parse_declaration("class a {\n    private b = 1\n}\n"),
            Err(ParseError::Unexpected { .. })
        ));
    }

    #[test]
    fn rejects_trailing_input_after_the_class() {
        assert!(matches!(
            parse_declaration("class a {}\nclass b {}\n"),
            Err(ParseError::Unexpected { .. })
        ));
    }
}
