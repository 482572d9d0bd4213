use crate::token::CookGraphQLStringError;
use crate::token::FloatFormat;
use std::borrow::Cow;
use std::num::ParseFloatError;
use std::num::ParseIntError;

/// The kind of a GraphQL token.
///
/// Literal values (`IntValue`, `FloatValue`, `StringValue`) store only the
/// raw source text; numeric and string decoding happens on demand via the
/// `parse_*`/`cook_*` methods.
///
/// # Lifetime Parameter
///
/// The `'src` lifetime enables zero-copy lexing: the lexer borrows string
/// slices directly from the source text using `Cow::Borrowed`. Owned
/// variants exist for tokens constructed without backing source text (tests,
/// synthetic tokens).
///
/// # Negative Numeric Literals
///
/// Negative numbers like `-123` are lexed as single tokens (e.g.
/// `IntValue("-123")`), not as separate minus and number tokens. This
/// matches the GraphQL spec's grammar for `IntValue`/`FloatValue`.
///
/// # String Values
///
/// `StringValue` stores the *inner* content of the literal — the delimiting
/// `"` or `"""` quotes are excluded — together with a `block` flag
/// distinguishing block strings from single-line strings. The flag matters
/// both for cooking (block strings get the common-indent stripping
/// algorithm) and for the AST, which preserves the distinction.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    // =========================================================================
    // Punctuators (no allocation needed)
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals (raw source text only)
    // =========================================================================
    /// A GraphQL name/identifier.
    Name(Cow<'src, str>),

    /// Raw source text of an integer literal, including optional negative
    /// sign (e.g. `"-123"`, `"0"`).
    ///
    /// Use `parse_int_value()` to parse the raw text into an `i32`.
    IntValue(Cow<'src, str>),

    /// Raw source text of a float literal, including optional negative sign
    /// (e.g. `"-1.23e-4"`, `"0.5"`), tagged with its lexical form.
    ///
    /// Use `parse_float_value()` to parse the raw text into an `f64`.
    FloatValue {
        raw: Cow<'src, str>,
        format: FloatFormat,
    },

    /// Inner content of a string literal, delimiting quotes excluded
    /// (e.g. `hello\nworld` for the source `"hello\nworld"`).
    ///
    /// Use `cook_string_value()` to process escape sequences (and, for block
    /// strings, indentation stripping) and get the semantic value.
    StringValue {
        value: Cow<'src, str>,
        block: bool,
    },

    // =========================================================================
    // Boolean and null (distinct from Name for type safety)
    // =========================================================================
    /// The `true` literal.
    True,
    /// The `false` literal.
    False,
    /// The `null` literal.
    Null,

    // =========================================================================
    // End of input
    // =========================================================================
    /// End of input. The associated `GraphQLToken` may carry trailing trivia.
    Eof,
}

impl<'src> GraphQLTokenKind<'src> {
    // =========================================================================
    // Helper constructors
    // =========================================================================

    /// Create a `Name` token from a borrowed string slice (zero-copy).
    #[inline]
    pub fn name_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::Name(Cow::Borrowed(s))
    }

    /// Create a `Name` token from an owned `String`.
    #[inline]
    pub fn name_owned(s: String) -> Self {
        GraphQLTokenKind::Name(Cow::Owned(s))
    }

    /// Create an `IntValue` token from a borrowed string slice (zero-copy).
    #[inline]
    pub fn int_value_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::IntValue(Cow::Borrowed(s))
    }

    /// Create a `FloatValue` token from a borrowed string slice (zero-copy).
    #[inline]
    pub fn float_value_borrowed(s: &'src str, format: FloatFormat) -> Self {
        GraphQLTokenKind::FloatValue {
            raw: Cow::Borrowed(s),
            format,
        }
    }

    /// Create a `StringValue` token from a borrowed inner-content slice
    /// (zero-copy).
    #[inline]
    pub fn string_value_borrowed(s: &'src str, block: bool) -> Self {
        GraphQLTokenKind::StringValue {
            value: Cow::Borrowed(s),
            block,
        }
    }

    // =========================================================================
    // Query methods
    // =========================================================================

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns the string representation of this token if it is a
    /// punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::Ampersand => Some("&"),
            GraphQLTokenKind::At => Some("@"),
            GraphQLTokenKind::Bang => Some("!"),
            GraphQLTokenKind::Colon => Some(":"),
            GraphQLTokenKind::CurlyBraceClose => Some("}"),
            GraphQLTokenKind::CurlyBraceOpen => Some("{"),
            GraphQLTokenKind::Dollar => Some("$"),
            GraphQLTokenKind::Ellipsis => Some("..."),
            GraphQLTokenKind::Equals => Some("="),
            GraphQLTokenKind::ParenClose => Some(")"),
            GraphQLTokenKind::ParenOpen => Some("("),
            GraphQLTokenKind::Pipe => Some("|"),
            GraphQLTokenKind::SquareBracketClose => Some("]"),
            GraphQLTokenKind::SquareBracketOpen => Some("["),

            GraphQLTokenKind::Name(_)
            | GraphQLTokenKind::IntValue(_)
            | GraphQLTokenKind::FloatValue { .. }
            | GraphQLTokenKind::StringValue { .. }
            | GraphQLTokenKind::True
            | GraphQLTokenKind::False
            | GraphQLTokenKind::Null
            | GraphQLTokenKind::Eof => None,
        }
    }

    /// Returns `true` if this token is a value literal (`IntValue`,
    /// `FloatValue`, `StringValue`, `True`, `False`, or `Null`).
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            GraphQLTokenKind::IntValue(_)
                | GraphQLTokenKind::FloatValue { .. }
                | GraphQLTokenKind::StringValue { .. }
                | GraphQLTokenKind::True
                | GraphQLTokenKind::False
                | GraphQLTokenKind::Null
        )
    }

    /// Parse an `IntValue`'s raw text to `i32` (the GraphQL `Int` range).
    ///
    /// Returns `None` if this is not an `IntValue`, or `Some(Err(...))` if
    /// parsing fails (e.g. overflow).
    pub fn parse_int_value(&self) -> Option<Result<i32, ParseIntError>> {
        match self {
            GraphQLTokenKind::IntValue(raw) => Some(raw.parse()),
            _ => None,
        }
    }

    /// Parse a `FloatValue`'s raw text to `f64`.
    ///
    /// Returns `None` if this is not a `FloatValue`, or `Some(Err(...))` if
    /// parsing fails.
    pub fn parse_float_value(&self) -> Option<Result<f64, ParseFloatError>> {
        match self {
            GraphQLTokenKind::FloatValue { raw, .. } => Some(raw.parse()),
            _ => None,
        }
    }

    /// Cook a `StringValue`'s raw content into its semantic value.
    ///
    /// - For single-line strings: processes `\n`, `\r`, `\t`, `\\`, `\"`,
    ///   `\/`, `\b`, `\f`, and `\uXXXX` escape sequences.
    /// - For block strings: applies the common-indent stripping algorithm
    ///   per the GraphQL spec, then processes the `\"""` escape only.
    ///
    /// Returns `None` if this is not a `StringValue`, or `Some(Err(...))` if
    /// cooking fails.
    pub fn cook_string_value(&self) -> Option<Result<String, CookGraphQLStringError>> {
        match self {
            GraphQLTokenKind::StringValue { value, block } => Some(if *block {
                Ok(cook_block_string(value))
            } else {
                cook_single_line_string(value)
            }),
            _ => None,
        }
    }
}

/// Decode the escape sequences of a single-line string's inner content.
pub(crate) fn cook_single_line_string(
    content: &str,
) -> Result<String, CookGraphQLStringError> {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('/') => result.push('/'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('u') => {
                let mut hex = String::with_capacity(4);
                for _ in 0..4 {
                    match chars.next() {
                        Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                        _ => {
                            return Err(CookGraphQLStringError::InvalidUnicodeEscape(
                                format!("\\u{hex}"),
                            ));
                        }
                    }
                }
                let code_point = u32::from_str_radix(&hex, 16).expect("4 hex digits");
                match char::from_u32(code_point) {
                    Some(c) => result.push(c),
                    None => {
                        return Err(CookGraphQLStringError::InvalidUnicodeEscape(
                            format!("\\u{hex}"),
                        ));
                    }
                }
            }
            Some(other) => {
                return Err(CookGraphQLStringError::InvalidEscapeSequence(format!(
                    "\\{other}"
                )));
            }
            None => {
                return Err(CookGraphQLStringError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            }
        }
    }

    Ok(result)
}

/// Cook a block string's inner content per the GraphQL spec's `BlockStringValue`
/// algorithm: unescape `\"""`, strip the common indentation of all lines but
/// the first, and drop leading/trailing blank lines.
pub(crate) fn cook_block_string(content: &str) -> String {
    let content = content.replace("\\\"\"\"", "\"\"\"");

    let lines: Vec<&str> = content.lines().collect();

    // Common indentation is computed over all lines except the first,
    // ignoring blank lines.
    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !block_string_line_is_blank(line))
        .map(|line| block_string_indent_len(line))
        .min()
        .unwrap_or(0);

    let mut result_lines: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                *line
            } else {
                // Indentation is spaces and tabs only (one byte each), so
                // this slice always lands on a char boundary.
                &line[common_indent.min(block_string_indent_len(line))..]
            }
        })
        .collect();

    while result_lines
        .first()
        .is_some_and(|l| block_string_line_is_blank(l))
    {
        result_lines.remove(0);
    }
    while result_lines
        .last()
        .is_some_and(|l| block_string_line_is_blank(l))
    {
        result_lines.pop();
    }

    result_lines.join("\n")
}

/// The number of leading indentation bytes on a block string line. GraphQL
/// whitespace is space and tab only; other Unicode whitespace is content.
fn block_string_indent_len(line: &str) -> usize {
    line.bytes()
        .take_while(|b| matches!(b, b' ' | b'\t'))
        .count()
}

/// `true` when a block string line contains nothing but spaces and tabs.
fn block_string_line_is_blank(line: &str) -> bool {
    block_string_indent_len(line) == line.len()
}
