//! Tests for the best-effort syntax classifier.

use crate::SyntaxClassification;
use crate::SyntaxClassificationKind;
use crate::SyntaxClassifier;

/// Classifies `source` and returns `(kind, classified_text)` pairs for
/// easier assertions.
fn classify(source: &str) -> Vec<(SyntaxClassificationKind, &str)> {
    let mut classifier = SyntaxClassifier::new();
    classifier.parse(source);
    classifier
        .classifications()
        .iter()
        .map(|c| {
            (
                c.kind,
                &source[c.start as usize..(c.start + c.length) as usize],
            )
        })
        .collect()
}

use SyntaxClassificationKind::*;

/// Verifies classification of a small type definition: keywords, type and
/// field names, and punctuation.
#[test]
fn classify_type_definition() {
    let classified = classify("type Foo { id: ID }");
    assert_eq!(
        classified,
        vec![
            (Keyword, "type"),
            (TypeName, "Foo"),
            (Punctuation, "{"),
            (FieldName, "id"),
            (Punctuation, ":"),
            (TypeName, "ID"),
            (Punctuation, "}"),
        ],
    );
}

/// Verifies that malformed input keeps every classification produced
/// before the point of failure.
#[test]
fn partial_results_on_malformed_input() {
    let classified = classify("type Foo { id: ");
    assert_eq!(
        classified,
        vec![
            (Keyword, "type"),
            (TypeName, "Foo"),
            (Punctuation, "{"),
            (FieldName, "id"),
            (Punctuation, ":"),
        ],
    );
}

/// Verifies classification of an executable document: operation names,
/// aliases, arguments, variables, directives, and fragments.
#[test]
fn classify_operation() {
    let classified = classify(
        "query Q($id: ID!) { u: user(id: $id) @skip(if: true) { ...f } }",
    );
    assert_eq!(
        classified,
        vec![
            (Keyword, "query"),
            (OperationName, "Q"),
            (Punctuation, "("),
            (Punctuation, "$"),
            (VariableName, "id"),
            (Punctuation, ":"),
            (TypeName, "ID"),
            (Punctuation, "!"),
            (Punctuation, ")"),
            (Punctuation, "{"),
            (AliasName, "u"),
            (Punctuation, ":"),
            (FieldName, "user"),
            (Punctuation, "("),
            (ArgumentName, "id"),
            (Punctuation, ":"),
            (Punctuation, "$"),
            (VariableName, "id"),
            (Punctuation, ")"),
            (Punctuation, "@"),
            (DirectiveName, "skip"),
            (Punctuation, "("),
            (ArgumentName, "if"),
            (Punctuation, ":"),
            (BooleanLiteral, "true"),
            (Punctuation, ")"),
            (Punctuation, "{"),
            (Punctuation, "..."),
            (FragmentName, "f"),
            (Punctuation, "}"),
            (Punctuation, "}"),
        ],
    );
}

/// Verifies that comments and commas classify as trivia of the following
/// token, including trailing trivia before end of input.
#[test]
fn comments_and_commas() {
    let classified = classify("# intro\n{ a, b }\n# outro");
    assert_eq!(
        classified,
        vec![
            (Comment, "# intro"),
            (Punctuation, "{"),
            (FieldName, "a"),
            (Punctuation, ","),
            (FieldName, "b"),
            (Punctuation, "}"),
            (Comment, "# outro"),
        ],
    );
}

/// Verifies that literal values classify by their literal kind.
#[test]
fn literal_kinds() {
    let classified =
        classify(r#"{ f(a: 1, b: 1.5, c: "s", d: null, e: RED) }"#);
    let literals: Vec<_> = classified
        .iter()
        .filter(|(kind, _)| {
            matches!(
                kind,
                IntLiteral | FloatLiteral | StringLiteral | NullLiteral
                    | EnumValueName,
            )
        })
        .map(|&(kind, text)| (kind, text))
        .collect();
    assert_eq!(
        literals,
        vec![
            (IntLiteral, "1"),
            (FloatLiteral, "1.5"),
            (StringLiteral, "\"s\""),
            (NullLiteral, "null"),
            (EnumValueName, "RED"),
        ],
    );
}

/// Verifies that descriptions classify as `Description`, not
/// `StringLiteral`.
#[test]
fn descriptions() {
    let classified = classify("\"doc\" scalar X");
    assert_eq!(
        classified,
        vec![
            (Description, "\"doc\""),
            (Keyword, "scalar"),
            (TypeName, "X"),
        ],
    );
}

/// Verifies that each parse replaces the previous results entirely.
#[test]
fn reparse_replaces_results() {
    let mut classifier = SyntaxClassifier::new();
    classifier.parse("type A { f: Int }");
    let first_len = classifier.classifications().len();
    assert!(first_len > 0);

    classifier.parse("scalar B");
    let classified: Vec<_> = classifier
        .classifications()
        .iter()
        .map(|c| c.kind)
        .collect();
    assert_eq!(classified, vec![Keyword, TypeName]);
}

/// Verifies that a failed re-parse still replaces the previous results
/// rather than mixing with them.
#[test]
fn failed_reparse_still_replaces() {
    let mut classifier = SyntaxClassifier::new();
    classifier.parse("type A { f: Int }");
    classifier.parse("%");
    assert!(classifier.classifications().is_empty());
}

/// Verifies that classifications come out in ascending source order.
#[test]
fn ascending_order() {
    let mut classifier = SyntaxClassifier::new();
    classifier.parse(
        "query Q { a b(x: [1, 2]) { c } } fragment f on T { d }",
    );
    let starts: Vec<_> = classifier
        .classifications()
        .iter()
        .map(|c| c.start)
        .collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    assert_eq!(starts, sorted);
}

// =============================================================================
// Range queries
// =============================================================================

/// Verifies the overlap filter, including the inclusive-touch semantics at
/// both window edges.
#[test]
fn range_query_is_inclusive() {
    let mut classifier = SyntaxClassifier::new();
    // "type Foo" — `type` covers [0, 4), `Foo` covers [5, 8).
    classifier.parse("type Foo");

    let all: Vec<_> =
        classifier.get_syntax_classifications(0, 8).collect();
    assert_eq!(all.len(), 2);

    // A window ending exactly at a classification's start still matches.
    let touching: Vec<_> =
        classifier.get_syntax_classifications(0, 5).collect();
    assert_eq!(touching.len(), 2);

    // A zero-length window inside `type` matches only `type`.
    let inside: Vec<_> =
        classifier.get_syntax_classifications(2, 0).collect();
    assert_eq!(inside.len(), 1);
    assert_eq!(inside[0].kind, Keyword);

    // A window past everything matches nothing.
    let beyond: Vec<_> =
        classifier.get_syntax_classifications(20, 5).collect();
    assert!(beyond.is_empty());
}

/// Verifies `SyntaxClassification::end` and `overlaps_range` directly.
#[test]
fn classification_overlap_math() {
    let classification = SyntaxClassification {
        kind: Keyword,
        start: 10,
        length: 4,
    };
    assert_eq!(classification.end(), 14);
    assert!(classification.overlaps_range(14, 2));
    assert!(classification.overlaps_range(8, 2));
    assert!(classification.overlaps_range(11, 0));
    assert!(!classification.overlaps_range(15, 2));
    assert!(!classification.overlaps_range(0, 9));
}

/// Verifies that parsing the same source twice yields identical results.
#[test]
fn classification_is_deterministic() {
    let source = "type User implements Node { id: ID! name: String }";
    let first = classify(source);
    let second = classify(source);
    assert_eq!(first, second);
}
