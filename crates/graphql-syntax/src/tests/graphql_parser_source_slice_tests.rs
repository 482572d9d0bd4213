//! Tests for source reconstruction via `AstNode`: every node's span must
//! slice back to exactly the text it was parsed from.

use crate::ast;
use crate::ast::AstNode;
use crate::tests::ast_utils::extract_operation;
use crate::tests::ast_utils::first_field;
use crate::tests::utils::parse;

/// Verifies that a document's span reconstructs the entire source,
/// including surrounding trivia.
#[test]
fn document_reconstructs_whole_source() {
    let source = "# header\nquery Q { a b c }\n# footer\n";
    let doc = parse(source);
    assert_eq!(doc.to_source(source), source);
}

/// Verifies per-definition reconstruction in a multi-definition document.
#[test]
fn definitions_reconstruct_their_text() {
    let source = "query Q { a }  type User { id: ID }";
    let doc = parse(source);
    assert_eq!(doc.definitions[0].to_source(source), "query Q { a }");
    assert_eq!(
        doc.definitions[1].to_source(source),
        "type User { id: ID }",
    );
}

/// Verifies that field spans cover alias through nested selection set.
#[test]
fn field_reconstruction() {
    let source = "{ person: user(id: 4) @skip(if: true) { name } }";
    let op = extract_operation(source);
    let field = first_field(&op.selection_set);
    assert_eq!(
        field.to_source(source),
        "person: user(id: 4) @skip(if: true) { name }",
    );
}

/// Verifies that value spans reconstruct literally, preserving the exact
/// numeric and string spellings.
#[test]
fn value_reconstruction_preserves_spelling() {
    let source = r#"{ f(a: 1.50e+1, b: "x\ny", c: [1, 2], d: {k: V}) }"#;
    let op = extract_operation(source);
    let field = first_field(&op.selection_set);
    let reconstructed: Vec<_> = field
        .arguments
        .iter()
        .map(|arg| arg.value.to_source(source))
        .collect();
    assert_eq!(
        reconstructed,
        ["1.50e+1", r#""x\ny""#, "[1, 2]", "{k: V}"],
    );
}

/// Verifies that interior whitespace and commas inside a span are
/// preserved verbatim.
#[test]
fn interior_trivia_preserved() {
    let source = "{ f(a: [ 1 , 2 , 3 ]) }";
    let op = extract_operation(source);
    let field = first_field(&op.selection_set);
    assert_eq!(
        field.arguments[0].value.to_source(source),
        "[ 1 , 2 , 3 ]",
    );
}

/// Verifies `append_source` accumulates into an existing sink.
#[test]
fn append_source_accumulates() {
    let source = "{ a b }";
    let op = extract_operation(source);
    let mut sink = String::new();
    for selection in &op.selection_set.selections {
        selection.append_source(&mut sink, source);
        sink.push(' ');
    }
    assert_eq!(sink, "a b ");
}

/// Verifies reconstruction of type system definitions with descriptions:
/// the description is part of the definition's span.
#[test]
fn description_included_in_definition_span() {
    let source = "\"A user.\" type User { id: ID }";
    let doc = parse(source);
    assert_eq!(doc.definitions[0].to_source(source), source);
}

/// Verifies variable definition reconstruction includes the `$` sigil.
#[test]
fn variable_definition_includes_sigil() {
    let source = "query Q($id: ID! = \"0\") { f }";
    let op = extract_operation(source);
    assert_eq!(
        op.variable_definitions[0].to_source(source),
        "$id: ID! = \"0\"",
    );
}
