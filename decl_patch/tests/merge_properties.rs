//! Declaration-level merge properties over hand-built trees: pass-through
//! of unpaired entries, the ordering invariant, override symmetry, and the
//! no-duplication guarantee.

use decl_patch::{
    Declaration, Decorator, Field, Member, Method, OpaqueText, Precedence, Visibility,
    merge_declarations,
};
use rstest::rstest;

fn field(name: &str) -> Member {
    Member::Field(Field::new(name).with_visibility(Visibility::Private))
}

fn method(name: &str, body: &str) -> Member {
    Member::Method(
        Method::new(name)
            .with_parameters(OpaqueText::from("a:any"))
            .with_body(OpaqueText::from(body)),
    )
}

fn member_names(decl: &Declaration) -> Vec<&str> {
    decl.members().iter().map(Member::name).collect()
}

#[rstest]
#[case::base_precedence(Precedence::Base)]
#[case::patch_precedence(Precedence::Patch)]
fn disjoint_member_sets_pass_through_unchanged(#[case] precedence: Precedence) {
    let base = Declaration::new("a").with_members(vec![field("x"), method("y", "let c = 5;")]);
    let patch = Declaration::new("a").with_members(vec![field("p"), method("q", "let d = 6;")]);

    let merged = merge_declarations(&base, &patch, precedence);

    let mut expected: Vec<Member> = base.members().to_vec();
    expected.extend_from_slice(patch.members());
    assert_eq!(merged.members(), expected.as_slice());
}

#[test]
fn base_order_is_kept_and_patch_extras_trail_in_patch_order() {
    let base = Declaration::new("a").with_members(vec![field("one"), field("two"), field("three")]);
    let patch = Declaration::new("a").with_members(vec![
        field("extra_late"),
        field("two"),
        field("extra_early"),
    ]);

    let merged = merge_declarations(&base, &patch, Precedence::Patch);
    assert_eq!(
        member_names(&merged),
        ["one", "two", "three", "extra_late", "extra_early"]
    );
}

#[test]
fn paired_names_appear_exactly_once() {
    let base = Declaration::new("a").with_members(vec![field("b"), field("c")]);
    let patch = Declaration::new("a").with_members(vec![field("c"), field("d")]);

    let merged = merge_declarations(&base, &patch, Precedence::Base);
    let mut names = member_names(&merged);
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), merged.members().len());
}

#[rstest]
#[case::base_wins(Precedence::Base, Some("1"))]
#[case::patch_wins(Precedence::Patch, None)]
fn initializer_presence_tracks_the_winning_side(
    #[case] precedence: Precedence,
    #[case] expected: Option<&str>,
) {
    let base = Declaration::new("a").with_members(vec![Member::Field(
        Field::new("b").with_initializer(Some(OpaqueText::from("1"))),
    )]);
    let patch = Declaration::new("a").with_members(vec![Member::Field(Field::new("b"))]);

    let merged = merge_declarations(&base, &patch, precedence);
    let Some(Member::Field(merged_field)) = merged.members().first() else {
        panic!("expected one field");
    };
    assert_eq!(merged_field.initializer().map(OpaqueText::as_str), expected);
}

#[rstest]
#[case::base_wins(Precedence::Base, "let c = 5;")]
#[case::patch_wins(Precedence::Patch, "let d = 6;")]
fn method_bodies_are_taken_wholesale(#[case] precedence: Precedence, #[case] expected: &str) {
    let base = Declaration::new("a").with_members(vec![method("b", "let c = 5;")]);
    let patch = Declaration::new("a").with_members(vec![method("b", "let d = 6;")]);

    let merged = merge_declarations(&base, &patch, precedence);
    let Some(Member::Method(merged_method)) = merged.members().first() else {
        panic!("expected one method");
    };
    assert_eq!(merged_method.body().as_str(), expected);
}

#[test]
fn class_name_comes_from_base_even_when_inputs_disagree() {
    let base = Declaration::new("a");
    let patch = Declaration::new("b");
    let merged = merge_declarations(&base, &patch, Precedence::Patch);
    assert_eq!(merged.name(), "a");
}

#[rstest]
#[case::base_wins(Precedence::Base, Some("extends b"))]
#[case::patch_wins(Precedence::Patch, None)]
fn heritage_follows_the_winning_side_including_absence(
    #[case] precedence: Precedence,
    #[case] expected: Option<&str>,
) {
    let base = Declaration::new("a").with_heritage(Some(OpaqueText::from("extends b")));
    let patch = Declaration::new("a");
    let merged = merge_declarations(&base, &patch, precedence);
    assert_eq!(merged.heritage().map(OpaqueText::as_str), expected);
}

#[rstest]
#[case::base_wins(Precedence::Base, "true")]
#[case::patch_wins(Precedence::Patch, "false")]
fn member_decorator_arguments_follow_the_same_flag(
    #[case] precedence: Precedence,
    #[case] expected: &str,
) {
    let base = Declaration::new("a").with_members(vec![Member::Field(
        Field::new("b").with_decorators(vec![
            Decorator::new("deca").with_arguments(Some(OpaqueText::from("true"))),
        ]),
    )]);
    let patch = Declaration::new("a").with_members(vec![Member::Field(
        Field::new("b").with_decorators(vec![
            Decorator::new("deca").with_arguments(Some(OpaqueText::from("false"))),
            Decorator::new("decb"),
        ]),
    )]);

    let merged = merge_declarations(&base, &patch, precedence);
    let Some(Member::Field(merged_field)) = merged.members().first() else {
        panic!("expected one field");
    };
    assert_eq!(
        merged_field
            .decorators()
            .first()
            .and_then(Decorator::arguments)
            .map(OpaqueText::as_str),
        Some(expected)
    );
    assert_eq!(
        merged_field.decorators().get(1).map(Decorator::name),
        Some("decb")
    );
}

#[test]
fn inputs_are_left_untouched_by_the_merge() {
    let base = Declaration::new("a").with_members(vec![field("b")]);
    let patch = Declaration::new("a").with_members(vec![field("b"), field("c")]);
    let base_before = base.clone();
    let patch_before = patch.clone();

    let _merged = merge_declarations(&base, &patch, Precedence::Patch);
    assert_eq!(base, base_before);
    assert_eq!(patch, patch_before);
}
