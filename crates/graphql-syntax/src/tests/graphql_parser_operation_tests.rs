//! Tests for operation and fragment definitions, including selections.
//!
//! <https://spec.graphql.org/September2025/#sec-Language.Operations>

use crate::ast;
use crate::tests::ast_utils::extract_fragment;
use crate::tests::ast_utils::extract_operation;
use crate::tests::ast_utils::first_field;
use crate::tests::utils::parse;
use crate::tests::utils::parse_err;
use crate::GraphQLSyntaxErrorKind;
use crate::ReservedNameContext;

// =============================================================================
// Operations
// =============================================================================

/// Verifies that a named query operation parses with its name and selection
/// set.
#[test]
fn named_query() {
    let op = extract_operation("query GetUser { name }");
    assert_eq!(op.kind, ast::OperationKind::Query);
    assert_eq!(op.name.as_ref().map(|n| n.as_str()), Some("GetUser"));
    assert_eq!(op.selection_set.selections.len(), 1);
}

/// Verifies that an anonymous keyword-form query parses with `name: None`.
#[test]
fn anonymous_query_with_keyword() {
    let op = extract_operation("query { name }");
    assert_eq!(op.kind, ast::OperationKind::Query);
    assert!(op.name.is_none());
}

/// Verifies that the query shorthand (a bare selection set) parses as an
/// anonymous query.
#[test]
fn query_shorthand() {
    let op = extract_operation("{ name }");
    assert_eq!(op.kind, ast::OperationKind::Query);
    assert!(op.name.is_none());
    assert!(op.variable_definitions.is_empty());
    let field = first_field(&op.selection_set);
    assert_eq!(field.name.as_str(), "name");
}

/// Verifies mutation and subscription operations parse with their
/// respective kinds.
#[test]
fn mutation_and_subscription() {
    let mutation = extract_operation("mutation M { createUser { id } }");
    assert_eq!(mutation.kind, ast::OperationKind::Mutation);

    let subscription = extract_operation("subscription S { events }");
    assert_eq!(subscription.kind, ast::OperationKind::Subscription);
}

/// Verifies variable definitions with types, default values, and
/// directives.
#[test]
fn variable_definitions() {
    let op = extract_operation(
        "query Q($id: ID!, $limit: Int = 10 @tag) { user }",
    );
    assert_eq!(op.variable_definitions.len(), 2);

    let id = &op.variable_definitions[0];
    assert_eq!(id.name.as_str(), "id");
    assert!(id.default_value.is_none());

    let limit = &op.variable_definitions[1];
    assert_eq!(limit.name.as_str(), "limit");
    assert!(matches!(
        limit.default_value,
        Some(ast::Value::Int(_)),
    ));
    assert_eq!(limit.directives.len(), 1);
}

/// Verifies that an empty variable definition list `()` is rejected.
#[test]
fn empty_variable_definitions_rejected() {
    let error = parse_err("query Q() { user }");
    assert!(matches!(
        error.kind(),
        GraphQLSyntaxErrorKind::UnexpectedToken { .. },
    ));
}

/// Verifies that operations accept directives between the variable list and
/// the selection set.
#[test]
fn operation_directives() {
    let op = extract_operation("query Q @cached @traced { user }");
    assert_eq!(op.directives.len(), 2);
    assert_eq!(op.directives[0].name.as_str(), "cached");
}

/// Verifies that an empty selection set is rejected: selection sets require
/// at least one selection.
#[test]
fn empty_selection_set_rejected() {
    let error = parse_err("query Q { }");
    assert!(matches!(
        error.kind(),
        GraphQLSyntaxErrorKind::UnexpectedToken { .. },
    ));
}

/// Verifies that an empty document is rejected: a document requires at
/// least one definition.
#[test]
fn empty_document_rejected() {
    for source in ["", "   \n\t", "# only a comment"] {
        let error = parse_err(source);
        assert!(
            matches!(
                error.kind(),
                GraphQLSyntaxErrorKind::UnexpectedEof { .. },
            ),
            "`{source}` should fail with an unexpected-eof error",
        );
    }
}

// =============================================================================
// Fields
// =============================================================================

/// Verifies field parsing with alias, arguments, directives, and a nested
/// selection set.
#[test]
fn field_with_everything() {
    let op = extract_operation(
        "{ person: user(id: 4) @include(if: true) { name } }",
    );
    let field = first_field(&op.selection_set);

    assert_eq!(field.alias.as_ref().map(|n| n.as_str()), Some("person"));
    assert_eq!(field.name.as_str(), "user");
    assert_eq!(field.response_name().as_str(), "person");
    assert_eq!(field.arguments.len(), 1);
    assert_eq!(field.directives.len(), 1);
    assert!(field.selection_set.is_some());
}

/// Verifies that `response_name()` falls back to the field name when no
/// alias is present.
#[test]
fn response_name_without_alias() {
    let op = extract_operation("{ user }");
    let field = first_field(&op.selection_set);
    assert!(field.alias.is_none());
    assert_eq!(field.response_name().as_str(), "user");
}

/// Verifies that `true`, `false`, and `null` are usable as field names
/// (they are lexed as dedicated kinds but remain valid names).
#[test]
fn keyword_literals_as_field_names() {
    let op = extract_operation("{ true false null }");
    let names: Vec<_> = op
        .selection_set
        .selections
        .iter()
        .map(|sel| match sel {
            ast::Selection::Field(field) => field.name.as_str(),
            other => panic!("expected a field, got {other:?}"),
        })
        .collect();
    assert_eq!(names, ["true", "false", "null"]);
}

/// Verifies that an empty argument list `()` on a field is rejected.
#[test]
fn empty_argument_list_rejected() {
    let error = parse_err("{ user() }");
    assert!(matches!(
        error.kind(),
        GraphQLSyntaxErrorKind::UnexpectedToken { .. },
    ));
}

// =============================================================================
// Fragments
// =============================================================================

/// Verifies fragment definition parsing: name, type condition, selection
/// set.
#[test]
fn fragment_definition() {
    let frag = extract_fragment("fragment userFields on User { name id }");
    assert_eq!(frag.name.as_str(), "userFields");
    assert_eq!(frag.type_condition.name.as_str(), "User");
    assert_eq!(frag.selection_set.selections.len(), 2);
}

/// Verifies that `on` is rejected as a fragment name.
#[test]
fn fragment_named_on_is_reserved() {
    let error = parse_err("fragment on on User { name }");
    assert!(matches!(
        error.kind(),
        GraphQLSyntaxErrorKind::ReservedName { name, context }
            if name == "on"
                && *context == ReservedNameContext::FragmentName,
    ));
}

/// Verifies fragment spread parsing inside a selection set.
#[test]
fn fragment_spread() {
    let op = extract_operation("{ ...userFields @skip(if: $b) }");
    match &op.selection_set.selections[0] {
        ast::Selection::FragmentSpread(spread) => {
            assert_eq!(spread.name.as_str(), "userFields");
            assert_eq!(spread.directives.len(), 1);
        }
        other => panic!("expected a fragment spread, got {other:?}"),
    }
}

/// Verifies inline fragments with and without a type condition.
#[test]
fn inline_fragments() {
    let op = extract_operation("{ ... on User { name } ... { id } }");

    match &op.selection_set.selections[0] {
        ast::Selection::InlineFragment(frag) => {
            assert_eq!(
                frag.type_condition.as_ref().map(|tc| tc.name.as_str()),
                Some("User"),
            );
        }
        other => panic!("expected an inline fragment, got {other:?}"),
    }
    match &op.selection_set.selections[1] {
        ast::Selection::InlineFragment(frag) => {
            assert!(frag.type_condition.is_none());
        }
        other => panic!("expected an inline fragment, got {other:?}"),
    }
}

/// Verifies that an inline fragment with only directives (no type
/// condition) still parses.
#[test]
fn inline_fragment_directives_only() {
    let op = extract_operation("{ ... @include(if: $x) { id } }");
    match &op.selection_set.selections[0] {
        ast::Selection::InlineFragment(frag) => {
            assert!(frag.type_condition.is_none());
            assert_eq!(frag.directives.len(), 1);
        }
        other => panic!("expected an inline fragment, got {other:?}"),
    }
}

// =============================================================================
// Document-level structure
// =============================================================================

/// Verifies that multiple definitions parse in source order and that the
/// executable/type-system iterators partition them.
#[test]
fn mixed_document_partitions() {
    let doc = parse(
        "query Q { a }\n\
         type User { id: ID }\n\
         fragment F on User { id }",
    );
    assert_eq!(doc.definitions.len(), 3);
    assert_eq!(doc.executable_definitions().count(), 2);
    assert_eq!(doc.type_system_definitions().count(), 1);
}

/// Verifies that an anonymous shorthand query can be followed by more
/// definitions.
#[test]
fn shorthand_followed_by_fragment() {
    let doc = parse("{ ...f } fragment f on Query { a }");
    assert_eq!(doc.definitions.len(), 2);
}
