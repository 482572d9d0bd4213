//! Helpers for digging expected nodes out of parsed documents.

use crate::ast;
use crate::tests::utils::parse;

/// Parses a document and returns its sole definition as an operation.
pub fn extract_operation(source: &str) -> ast::OperationDefinition<'_> {
    match single_definition(source) {
        ast::Definition::OperationDefinition(op) => op,
        other => panic!("expected an operation definition, got {other:?}"),
    }
}

/// Parses a document and returns its sole definition as a fragment.
pub fn extract_fragment(source: &str) -> ast::FragmentDefinition<'_> {
    match single_definition(source) {
        ast::Definition::FragmentDefinition(frag) => frag,
        other => panic!("expected a fragment definition, got {other:?}"),
    }
}

/// Parses a document and returns its sole definition as a type definition.
pub fn extract_type_definition(source: &str) -> ast::TypeDefinition<'_> {
    match single_definition(source) {
        ast::Definition::TypeDefinition(def) => def,
        other => panic!("expected a type definition, got {other:?}"),
    }
}

/// Parses a document and returns its sole definition as a type extension.
pub fn extract_type_extension(source: &str) -> ast::TypeExtension<'_> {
    match single_definition(source) {
        ast::Definition::TypeExtension(ext) => ext,
        other => panic!("expected a type extension, got {other:?}"),
    }
}

/// Parses a document and returns its sole definition.
pub fn single_definition(source: &str) -> ast::Definition<'_> {
    let doc = parse(source);
    assert_eq!(
        doc.definitions.len(),
        1,
        "expected exactly one definition in `{source}`",
    );
    doc.definitions.into_iter().next().unwrap()
}

/// Returns the first selection of a selection set as a field.
pub fn first_field<'a, 'src>(
    selection_set: &'a ast::SelectionSet<'src>,
) -> &'a ast::Field<'src> {
    match selection_set.selections.first() {
        Some(ast::Selection::Field(field)) => field,
        other => panic!("expected a field selection, got {other:?}"),
    }
}

/// Returns the value of the first argument of a field.
pub fn first_argument_value<'a, 'src>(
    field: &'a ast::Field<'src>,
) -> &'a ast::Value<'src> {
    &field
        .arguments
        .first()
        .expect("expected at least one argument")
        .value
}

/// Parses shorthand `{ field(name: <value>) }` and returns the argument
/// value.
pub fn extract_value(value_source: &str) -> ast::Value<'static> {
    let source = format!("{{ field(arg: {value_source}) }}");
    let op = extract_operation(Box::leak(source.into_boxed_str()));
    let field = first_field(&op.selection_set);
    first_argument_value(field).clone()
}
