//! Tests for input value parsing.
//!
//! <https://spec.graphql.org/September2025/#sec-Input-Values>

use crate::ast;
use crate::tests::ast_utils::extract_operation;
use crate::tests::ast_utils::extract_value;
use crate::tests::ast_utils::first_field;
use crate::tests::utils::parse_err;
use crate::GraphQLSyntaxErrorKind;

// =============================================================================
// Scalar literals
// =============================================================================

/// Verifies int value parsing and `as_i32` conversion.
#[test]
fn int_values() {
    match extract_value("-42") {
        ast::Value::Int(int) => {
            assert_eq!(int.raw, "-42");
            assert_eq!(int.as_i32(), Ok(-42));
        }
        other => panic!("expected an int value, got {other:?}"),
    }
}

/// Verifies that an int literal overflowing `i32` keeps its raw text but
/// fails `as_i32` conversion: range checking is deferred to the caller.
#[test]
fn int_value_overflow_is_deferred() {
    match extract_value("2147483648") {
        ast::Value::Int(int) => {
            assert_eq!(int.raw, "2147483648");
            assert!(int.as_i32().is_err());
        }
        other => panic!("expected an int value, got {other:?}"),
    }
}

/// Verifies float value parsing, format tagging, and `as_f64` conversion.
#[test]
fn float_values() {
    match extract_value("1.5") {
        ast::Value::Float(float) => {
            assert_eq!(float.format, crate::token::FloatFormat::FixedPoint);
            assert_eq!(float.as_f64(), Ok(1.5));
        }
        other => panic!("expected a float value, got {other:?}"),
    }

    match extract_value("1.5e10") {
        ast::Value::Float(float) => {
            assert_eq!(
                float.format,
                crate::token::FloatFormat::Exponential,
            );
            assert_eq!(float.as_f64(), Ok(1.5e10));
        }
        other => panic!("expected a float value, got {other:?}"),
    }
}

/// Verifies that string values keep the raw inner text and that `cooked`
/// resolves escape sequences.
#[test]
fn string_values() {
    match extract_value(r#""a\nb A""#) {
        ast::Value::String(string) => {
            assert!(!string.block);
            assert_eq!(string.value, r"a\nb A");
            assert_eq!(string.cooked().unwrap(), "a\nb A");
        }
        other => panic!("expected a string value, got {other:?}"),
    }
}

/// Verifies that block string values strip common indentation when cooked.
#[test]
fn block_string_values() {
    match extract_value("\"\"\"\n    hello\n    world\n\"\"\"") {
        ast::Value::String(string) => {
            assert!(string.block);
            assert_eq!(string.cooked().unwrap(), "hello\nworld");
        }
        other => panic!("expected a string value, got {other:?}"),
    }
}

/// Verifies boolean and null literal parsing.
#[test]
fn boolean_and_null_values() {
    assert!(matches!(
        extract_value("true"),
        ast::Value::Boolean(ast::BooleanValue { value: true, .. }),
    ));
    assert!(matches!(
        extract_value("false"),
        ast::Value::Boolean(ast::BooleanValue { value: false, .. }),
    ));
    assert!(matches!(extract_value("null"), ast::Value::Null(_)));
}

/// Verifies that a bare name in value position parses as an enum value.
#[test]
fn enum_values() {
    match extract_value("RED") {
        ast::Value::Enum(enum_value) => {
            assert_eq!(enum_value.value, "RED");
        }
        other => panic!("expected an enum value, got {other:?}"),
    }
}

// =============================================================================
// Variables
// =============================================================================

/// Verifies variable value parsing; the stored name excludes the `$` but
/// the span includes it.
#[test]
fn variable_values() {
    match extract_value("$userId") {
        ast::Value::Variable(var) => {
            assert_eq!(var.name.as_str(), "userId");
        }
        other => panic!("expected a variable value, got {other:?}"),
    }
}

/// Verifies that variables are rejected in variable default values (a
/// const context).
#[test]
fn variable_rejected_in_variable_default() {
    let error = parse_err("query Q($a: Int = $b) { f }");
    assert!(matches!(
        error.kind(),
        GraphQLSyntaxErrorKind::UnexpectedToken { .. },
    ));
    // The error should explain which context forbids variables.
    assert!(error
        .notes()
        .iter()
        .any(|note| note.message.contains("variable")));
}

/// Verifies that variables are rejected in schema-side default values.
#[test]
fn variable_rejected_in_input_default() {
    let error = parse_err("input I { x: Int = $y }");
    assert!(matches!(
        error.kind(),
        GraphQLSyntaxErrorKind::UnexpectedToken { .. },
    ));
}

/// Verifies that variables are rejected in directive-definition argument
/// defaults.
#[test]
fn variable_rejected_in_directive_definition_default() {
    let error = parse_err("directive @d(a: Int = $v) on FIELD");
    assert!(matches!(
        error.kind(),
        GraphQLSyntaxErrorKind::UnexpectedToken { .. },
    ));
}

// =============================================================================
// Composite values
// =============================================================================

/// Verifies list value parsing, including nesting and the empty list.
#[test]
fn list_values() {
    match extract_value("[1, [2, 3], []]") {
        ast::Value::List(list) => {
            assert_eq!(list.values.len(), 3);
            assert!(matches!(list.values[0], ast::Value::Int(_)));
            match &list.values[1] {
                ast::Value::List(inner) => {
                    assert_eq!(inner.values.len(), 2)
                }
                other => panic!("expected a list value, got {other:?}"),
            }
            match &list.values[2] {
                ast::Value::List(inner) => assert!(inner.values.is_empty()),
                other => panic!("expected a list value, got {other:?}"),
            }
        }
        other => panic!("expected a list value, got {other:?}"),
    }
}

/// Verifies object value parsing, including the empty object.
#[test]
fn object_values() {
    match extract_value(r#"{ name: "x", nested: { on: true } }"#) {
        ast::Value::Object(object) => {
            assert_eq!(object.fields.len(), 2);
            assert_eq!(object.fields[0].name.as_str(), "name");
            // Keywords are valid object field names.
            match &object.fields[1].value {
                ast::Value::Object(nested) => {
                    assert_eq!(nested.fields[0].name.as_str(), "on");
                }
                other => panic!("expected an object value, got {other:?}"),
            }
        }
        other => panic!("expected an object value, got {other:?}"),
    }

    assert!(matches!(
        extract_value("{}"),
        ast::Value::Object(ast::ObjectValue { fields, .. })
            if fields.is_empty(),
    ));
}

/// Verifies that `span()` on a composite value covers the whole literal
/// including delimiters.
#[test]
fn value_spans_cover_delimiters() {
    let op = extract_operation("{ f(a: [1, 2]) }");
    let field = first_field(&op.selection_set);
    let value = &field.arguments[0].value;
    let byte_span = value.span().byte_span();
    assert_eq!(byte_span.start, 7);
    assert_eq!(byte_span.end, 13);
}

/// Verifies that a value position holding a punctuator fails.
#[test]
fn non_value_token_rejected() {
    let error = parse_err("{ f(a: :) }");
    assert!(matches!(
        error.kind(),
        GraphQLSyntaxErrorKind::UnexpectedToken { .. },
    ));
}
