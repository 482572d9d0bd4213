//! Tests for `StrGraphQLTokenSource`.

use crate::token::FloatFormat;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTriviaToken;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLSyntaxError;
use crate::GraphQLSyntaxErrorKind;
use std::borrow::Cow;

/// Helper to collect all tokens from a source string, asserting the lex
/// succeeds.
fn lex_tokens(source: &str) -> Vec<GraphQLToken<'_>> {
    StrGraphQLTokenSource::new(source)
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|error| {
            panic!("expected `{source}` to lex cleanly, got: {error}")
        })
}

/// Helper to collect all token kinds from a source string.
fn token_kinds(source: &str) -> Vec<GraphQLTokenKind<'_>> {
    lex_tokens(source)
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

/// Helper to extract the terminal lexical error from a source string.
fn lex_error(source: &str) -> GraphQLSyntaxError {
    StrGraphQLTokenSource::new(source)
        .find_map(Result::err)
        .unwrap_or_else(|| {
            panic!("expected `{source}` to produce a lexical error")
        })
}

// =============================================================================
// Punctuators
// =============================================================================

/// Verifies that all single-character punctuators are lexed correctly.
///
/// <https://spec.graphql.org/September2025/#sec-Punctuators>
#[test]
fn punctuators() {
    let kinds = token_kinds("{ } ( ) [ ] : = @ ! $ & |");
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::CurlyBraceClose,
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::ParenClose,
            GraphQLTokenKind::SquareBracketOpen,
            GraphQLTokenKind::SquareBracketClose,
            GraphQLTokenKind::Colon,
            GraphQLTokenKind::Equals,
            GraphQLTokenKind::At,
            GraphQLTokenKind::Bang,
            GraphQLTokenKind::Dollar,
            GraphQLTokenKind::Ampersand,
            GraphQLTokenKind::Pipe,
            GraphQLTokenKind::Eof,
        ]
    );
}

/// Verifies that adjacent punctuators are lexed as separate tokens without
/// requiring whitespace.
#[test]
fn punctuators_adjacent_without_whitespace() {
    let kinds = token_kinds("{}[]()");
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::CurlyBraceClose,
            GraphQLTokenKind::SquareBracketOpen,
            GraphQLTokenKind::SquareBracketClose,
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::ParenClose,
            GraphQLTokenKind::Eof,
        ]
    );
}

/// Verifies that `...` is lexed as a single `Ellipsis` token.
#[test]
fn ellipsis() {
    let kinds = token_kinds("...");
    assert_eq!(
        kinds,
        vec![GraphQLTokenKind::Ellipsis, GraphQLTokenKind::Eof]
    );
}

/// Verifies that fewer than three dots is a terminal `InvalidSpread` error.
#[test]
fn two_dots_is_invalid_spread() {
    let error = lex_error("..");
    assert!(matches!(
        error.kind(),
        GraphQLSyntaxErrorKind::InvalidSpread,
    ));
}

/// Verifies that four dots lexes `...` then fails on the lone trailing dot.
#[test]
fn four_dots_is_ellipsis_then_error() {
    let results: Vec<_> = StrGraphQLTokenSource::new("....").collect();
    assert_eq!(results.len(), 2);
    assert!(matches!(
        results[0].as_ref().unwrap().kind,
        GraphQLTokenKind::Ellipsis,
    ));
    assert!(matches!(
        results[1].as_ref().unwrap_err().kind(),
        GraphQLSyntaxErrorKind::InvalidSpread,
    ));
}

// =============================================================================
// Names and keyword-literals
// =============================================================================

/// Verifies that names are lexed with zero-copy borrowed values.
#[test]
fn names_are_borrowed() {
    let tokens = lex_tokens("hello _world __typename x123");
    let values: Vec<_> = tokens
        .iter()
        .filter_map(|token| match &token.kind {
            GraphQLTokenKind::Name(name) => Some(name),
            _ => None,
        })
        .collect();
    assert_eq!(values, ["hello", "_world", "__typename", "x123"]);
    for value in values {
        assert!(matches!(value, Cow::Borrowed(_)));
    }
}

/// Verifies that `true`, `false`, and `null` lex as dedicated token kinds
/// rather than generic names.
#[test]
fn boolean_and_null_literals() {
    let kinds = token_kinds("true false null");
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::True,
            GraphQLTokenKind::False,
            GraphQLTokenKind::Null,
            GraphQLTokenKind::Eof,
        ]
    );
}

/// Verifies that names merely containing a literal keyword stay names.
#[test]
fn names_containing_literals_are_names() {
    let kinds = token_kinds("truthy nullable falsey");
    assert!(kinds[..3]
        .iter()
        .all(|kind| matches!(kind, GraphQLTokenKind::Name(_))));
}

// =============================================================================
// Numbers
// =============================================================================

/// Verifies integer literal lexing, including negative values and zero.
#[test]
fn int_literals() {
    let kinds = token_kinds("0 4 -42 1234567890");
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::IntValue(Cow::Borrowed("0")),
            GraphQLTokenKind::IntValue(Cow::Borrowed("4")),
            GraphQLTokenKind::IntValue(Cow::Borrowed("-42")),
            GraphQLTokenKind::IntValue(Cow::Borrowed("1234567890")),
            GraphQLTokenKind::Eof,
        ]
    );
}

/// Verifies that a fractional part marks the literal as a fixed-point
/// float.
#[test]
fn fixed_point_float_literals() {
    let kinds = token_kinds("1.5 -0.25");
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::FloatValue {
                raw: Cow::Borrowed("1.5"),
                format: FloatFormat::FixedPoint,
            },
            GraphQLTokenKind::FloatValue {
                raw: Cow::Borrowed("-0.25"),
                format: FloatFormat::FixedPoint,
            },
            GraphQLTokenKind::Eof,
        ]
    );
}

/// Verifies that an exponent marks the literal as exponential, even when a
/// fractional part is also present.
#[test]
fn exponential_float_literals() {
    let kinds = token_kinds("1e10 1.5e10 2E-3 6e+4");
    let formats: Vec<_> = kinds
        .iter()
        .filter_map(|kind| match kind {
            GraphQLTokenKind::FloatValue { format, .. } => Some(*format),
            _ => None,
        })
        .collect();
    assert_eq!(formats, vec![FloatFormat::Exponential; 4]);
}

/// Verifies that integer literals with leading zeros are rejected.
///
/// <https://spec.graphql.org/September2025/#sec-Int-Value>
#[test]
fn leading_zero_is_invalid() {
    let error = lex_error("042");
    assert!(matches!(
        error.kind(),
        GraphQLSyntaxErrorKind::InvalidNumber,
    ));
    assert!(error.message().contains("leading zero"));
}

/// Verifies that a bare `-` with no digits is rejected.
#[test]
fn bare_minus_is_invalid() {
    let error = lex_error("-");
    assert!(matches!(
        error.kind(),
        GraphQLSyntaxErrorKind::InvalidNumber,
    ));
}

/// Verifies that an exponent with no digits is rejected.
#[test]
fn empty_exponent_is_invalid() {
    for source in ["1e", "1e+", "1.5E-"] {
        let error = lex_error(source);
        assert!(
            matches!(error.kind(), GraphQLSyntaxErrorKind::InvalidNumber),
            "`{source}` should be an invalid number",
        );
    }
}

/// Verifies that a trailing dot is not consumed as part of a number: `1.`
/// lexes the int `1`, then fails on the lone dot.
#[test]
fn int_followed_by_lone_dot() {
    let results: Vec<_> = StrGraphQLTokenSource::new("1.").collect();
    assert_eq!(
        results[0].as_ref().unwrap().kind,
        GraphQLTokenKind::IntValue(Cow::Borrowed("1")),
    );
    assert!(matches!(
        results[1].as_ref().unwrap_err().kind(),
        GraphQLSyntaxErrorKind::InvalidSpread,
    ));
}

// =============================================================================
// Strings
// =============================================================================

/// Verifies single-line string lexing with a zero-copy raw value (escape
/// sequences are validated but not cooked by the lexer).
#[test]
fn single_line_strings() {
    let kinds = token_kinds(r#""hello" "a\nb" "é""#);
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::StringValue {
                value: Cow::Borrowed("hello"),
                block: false,
            },
            GraphQLTokenKind::StringValue {
                value: Cow::Borrowed(r"a\nb"),
                block: false,
            },
            GraphQLTokenKind::StringValue {
                value: Cow::Borrowed(r"é"),
                block: false,
            },
            GraphQLTokenKind::Eof,
        ]
    );
}

/// Verifies block string lexing, including embedded newlines and quotes.
#[test]
fn block_strings() {
    let kinds = token_kinds("\"\"\"line one\nline \"two\" end\"\"\"");
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::StringValue {
                value: Cow::Borrowed("line one\nline \"two\" end"),
                block: true,
            },
            GraphQLTokenKind::Eof,
        ]
    );
}

/// Verifies that a block string ends at the first unescaped `"""`, even
/// when more quotes follow immediately.
#[test]
fn block_string_ends_at_first_terminator() {
    let mut source = StrGraphQLTokenSource::new("\"\"\"ab\"\"\"\"");
    let token = source.next().unwrap().unwrap();
    assert_eq!(
        token.kind,
        GraphQLTokenKind::StringValue {
            value: Cow::Borrowed("ab"),
            block: true,
        },
    );
    // The stray trailing quote opens a new, unterminated string.
    let error = source.next().unwrap().unwrap_err();
    assert!(matches!(
        error.kind(),
        GraphQLSyntaxErrorKind::UnterminatedString,
    ));
}

/// Verifies that the escaped terminator `\"""` does not end a block string.
#[test]
fn block_string_escaped_terminator() {
    let kinds = token_kinds(r#""""a \""" b""""#);
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::StringValue {
                value: Cow::Borrowed(r#"a \""" b"#),
                block: true,
            },
            GraphQLTokenKind::Eof,
        ]
    );
}

/// Verifies that an unterminated string at end of input is a terminal
/// error.
#[test]
fn unterminated_string() {
    let error = lex_error(r#""abc"#);
    assert!(matches!(
        error.kind(),
        GraphQLSyntaxErrorKind::UnterminatedString,
    ));
}

/// Verifies that a raw line terminator inside a single-line string is
/// rejected.
#[test]
fn newline_in_single_line_string() {
    let error = lex_error("\"ab\ncd\"");
    assert!(matches!(
        error.kind(),
        GraphQLSyntaxErrorKind::UnterminatedString,
    ));
}

/// Verifies that an unterminated block string is a terminal error.
#[test]
fn unterminated_block_string() {
    let error = lex_error("\"\"\"abc\ndef");
    assert!(matches!(
        error.kind(),
        GraphQLSyntaxErrorKind::UnterminatedBlockString,
    ));
}

/// Verifies that unknown escape sequences are rejected with the sequence
/// recorded in the error kind.
#[test]
fn invalid_escape_sequence() {
    let error = lex_error(r#""a\qb""#);
    assert!(matches!(
        error.kind(),
        GraphQLSyntaxErrorKind::InvalidEscapeSequence { sequence }
            if sequence == r"\q",
    ));
}

/// Verifies that `\u` escapes require exactly four hex digits.
#[test]
fn truncated_unicode_escape() {
    let error = lex_error(r#""\u12g4""#);
    assert!(matches!(
        error.kind(),
        GraphQLSyntaxErrorKind::InvalidEscapeSequence { .. },
    ));
}

// =============================================================================
// Trivia: comments and commas
// =============================================================================

/// Verifies that comments attach as trivia to the following token, with the
/// leading `#` and padding trimmed from the recorded value.
#[test]
fn comment_attaches_to_following_token() {
    let tokens = lex_tokens("# leading comment\nname");
    assert_eq!(tokens[0].kind, GraphQLTokenKind::name_borrowed("name"));
    assert_eq!(tokens[0].preceding_trivia.len(), 1);
    assert!(matches!(
        &tokens[0].preceding_trivia[0],
        GraphQLTriviaToken::Comment { value, .. }
            if value == "leading comment",
    ));
}

/// Verifies that commas are preserved as trivia rather than discarded.
#[test]
fn commas_are_trivia() {
    let tokens = lex_tokens("a, b");
    assert_eq!(tokens[1].kind, GraphQLTokenKind::name_borrowed("b"));
    assert_eq!(tokens[1].preceding_trivia.len(), 1);
    assert!(matches!(
        tokens[1].preceding_trivia[0],
        GraphQLTriviaToken::Comma { .. },
    ));
}

/// Verifies that trivia after the last real token attaches to the `Eof`
/// token.
#[test]
fn trailing_trivia_attaches_to_eof() {
    let tokens = lex_tokens("name # trailing");
    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, GraphQLTokenKind::Eof);
    assert_eq!(eof.preceding_trivia.len(), 1);
}

/// Verifies that multiple adjacent trivia items accumulate in source order
/// on the next token.
#[test]
fn multiple_trivia_accumulate_in_order() {
    let tokens = lex_tokens("# one\n, # two\nname");
    let trivia = &tokens[0].preceding_trivia;
    assert_eq!(trivia.len(), 3);
    assert!(matches!(trivia[0], GraphQLTriviaToken::Comment { .. }));
    assert!(matches!(trivia[1], GraphQLTriviaToken::Comma { .. }));
    assert!(matches!(trivia[2], GraphQLTriviaToken::Comment { .. }));
}

// =============================================================================
// Positions and spans
// =============================================================================

/// Verifies that line and column tracking is 0-based and advances across
/// newlines.
#[test]
fn positions_across_lines() {
    let tokens = lex_tokens("a\n  b");
    let a_start = &tokens[0].span.start_inclusive;
    assert_eq!((a_start.line(), a_start.col()), (0, 0));
    let b_start = &tokens[1].span.start_inclusive;
    assert_eq!((b_start.line(), b_start.col()), (1, 2));
}

/// Verifies that `\r\n` counts as a single line terminator.
#[test]
fn crlf_counts_as_one_newline() {
    let tokens = lex_tokens("a\r\nb");
    let b_start = &tokens[1].span.start_inclusive;
    assert_eq!((b_start.line(), b_start.col()), (1, 0));
}

/// Verifies that a comment immediately after a bare `\r` does not swallow
/// the newline that ends the comment.
#[test]
fn comment_after_cr_keeps_line_count() {
    let tokens = lex_tokens("\r#c\nx");
    let x_start = &tokens[0].span.start_inclusive;
    assert_eq!((x_start.line(), x_start.col()), (2, 0));
}

/// Verifies that token spans carry correct byte offsets, with the end
/// exclusive.
#[test]
fn byte_offsets_are_half_open() {
    let tokens = lex_tokens("ab cd");
    let span = tokens[1].span.byte_span();
    assert_eq!((span.start, span.end), (3, 5));
}

/// Verifies that a UTF-8 BOM is skipped as whitespace.
#[test]
fn bom_is_skipped() {
    let kinds = token_kinds("\u{FEFF}name");
    assert_eq!(kinds[0], GraphQLTokenKind::name_borrowed("name"));
}

/// Verifies that non-ASCII characters advance byte offsets by their UTF-8
/// length but columns by one.
#[test]
fn multibyte_characters_in_comment() {
    let tokens = lex_tokens("# héllo\nname");
    let name_span = tokens[0].span.byte_span();
    // "# héllo\n" is 9 bytes: the é occupies two.
    assert_eq!(name_span.start, 9);
}

// =============================================================================
// Errors and stream termination
// =============================================================================

/// Verifies that a character that cannot start any token is an
/// `UnexpectedCharacter` error.
#[test]
fn unexpected_character() {
    let error = lex_error("query %");
    assert!(matches!(
        error.kind(),
        GraphQLSyntaxErrorKind::UnexpectedCharacter { found: '%' },
    ));
}

/// Verifies that the iterator terminates after the first error: lexical
/// errors are not recoverable.
#[test]
fn iterator_stops_after_error() {
    let results: Vec<_> = StrGraphQLTokenSource::new("% name").collect();
    assert_eq!(results.len(), 1);
    assert!(results[0].is_err());
}

/// Verifies that the iterator yields exactly one `Eof` and then stops.
#[test]
fn iterator_stops_after_eof() {
    let results: Vec<_> = StrGraphQLTokenSource::new("name").collect();
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].as_ref().unwrap().kind, GraphQLTokenKind::Eof);
}

/// Verifies that empty input produces a single `Eof` token at position
/// zero.
#[test]
fn empty_input_is_one_eof() {
    let tokens = lex_tokens("");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, GraphQLTokenKind::Eof);
    assert_eq!(tokens[0].span.start_inclusive.byte_offset(), 0);
}
