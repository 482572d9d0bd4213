//! A [`GraphQLTokenSource`] that lexes from a `&str` input.
//!
//! This lexer implements zero-copy lexing: token values borrow directly from
//! the source string using `Cow::Borrowed`, avoiding allocations for names,
//! numbers, and strings.
//!
//! # Features
//!
//! - **Zero-copy lexing**: Token values borrow from the source text
//! - **Lookup-table dispatch**: The start of every token is classified with
//!   the precomputed ASCII tables in [`crate::char_class`]
//! - **Comment preservation**: GraphQL `#` comments are captured as trivia
//! - **Terminal errors**: The first lexical error ends the stream; there is
//!   no error recovery inside the lexer
//!
//! # Usage
//!
//! ```rust
//! use graphql_syntax::token_source::StrGraphQLTokenSource;
//!
//! let source = "{ name }";
//! let lexer = StrGraphQLTokenSource::new(source);
//! for token in lexer {
//!     println!("{:?}", token.unwrap().kind);
//! }
//! // Output:
//! // CurlyBraceOpen
//! // Name("name")
//! // CurlyBraceClose
//! // Eof
//! ```
//!
//! [`GraphQLTokenSource`]: crate::token_source::GraphQLTokenSource

use crate::char_class;
use crate::smallvec;
use crate::token::FloatFormat;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTriviaToken;
use crate::token::GraphQLTriviaTokenVec;
use crate::GraphQLSourceSpan;
use crate::GraphQLSyntaxError;
use crate::GraphQLSyntaxErrorKind;
use crate::SourcePosition;
use std::borrow::Cow;
use std::path::Path;

/// A [`GraphQLTokenSource`] that lexes from a `&str` input.
///
/// Produces [`GraphQLToken`]s with zero-copy string values. The `'src`
/// lifetime ties token values to the source string. Instances are
/// single-use: create a fresh one per document revision.
///
/// See module documentation for details.
///
/// [`GraphQLTokenSource`]: crate::token_source::GraphQLTokenSource
pub struct StrGraphQLTokenSource<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    ///
    /// The remaining text to lex is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current 0-based character column within the line.
    curr_col: usize,

    /// Whether the previous character was `\r`.
    ///
    /// Used to handle `\r\n` as a single newline: when we see `\r`, we set
    /// this flag; if the next character is `\n`, we skip it without
    /// incrementing the line number again.
    last_char_was_cr: bool,

    /// Trivia (comments, commas) accumulated before the next token.
    pending_trivia: GraphQLTriviaTokenVec<'src>,

    /// Whether the EOF token (or a terminal error) has been emitted.
    finished: bool,

    /// Optional file path for error messages and spans.
    file_path: Option<&'src Path>,
}

impl<'src> StrGraphQLTokenSource<'src> {
    /// Creates a new token source from a string slice.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col: 0,
            last_char_was_cr: false,
            pending_trivia: smallvec![],
            finished: false,
            file_path: None,
        }
    }

    /// Creates a new token source with an associated file path.
    ///
    /// The file path is included in token spans for error reporting.
    pub fn with_file_path(source: &'src str, path: &'src Path) -> Self {
        Self {
            file_path: Some(path),
            ..Self::new(source)
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    /// Returns the remaining source text to be lexed.
    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    /// Returns the current source position.
    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(self.curr_line, self.curr_col, self.curr_byte_offset)
    }

    /// Peeks at the next character without consuming it.
    ///
    /// Returns `None` if at end of input.
    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Peeks at the nth character ahead without consuming.
    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// Handles advancing the byte offset by the character's UTF-8 length,
    /// incrementing the line number on newlines (`\n`, `\r`, `\r\n`), and
    /// tracking the character column.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        let byte_len = ch.len_utf8();

        if ch == '\n' {
            if self.last_char_was_cr {
                // The \n of a \r\n pair; line was already incremented at \r.
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col += 1;
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += byte_len;
        Some(ch)
    }

    /// Creates a `GraphQLSourceSpan` from a start position to the current
    /// position.
    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        let end = self.curr_position();
        if let Some(path) = self.file_path {
            GraphQLSourceSpan::with_file(start, end, path.to_path_buf())
        } else {
            GraphQLSourceSpan::new(start, end)
        }
    }

    // =========================================================================
    // Token and error creation helpers
    // =========================================================================

    /// Creates a token carrying the accumulated trivia.
    fn make_token(
        &mut self,
        kind: GraphQLTokenKind<'src>,
        span: GraphQLSourceSpan,
    ) -> GraphQLToken<'src> {
        GraphQLToken {
            kind,
            preceding_trivia: std::mem::take(&mut self.pending_trivia),
            span,
        }
    }

    /// Creates a terminal lexical error spanning from `start` to the current
    /// position.
    fn make_error(
        &self,
        message: impl Into<String>,
        start: SourcePosition,
        kind: GraphQLSyntaxErrorKind,
    ) -> GraphQLSyntaxError {
        GraphQLSyntaxError::new(message, self.make_span(start), kind)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    /// Advances to the next token, skipping whitespace and collecting
    /// trivia.
    ///
    /// Returns exactly one `Eof` token at end of input; calling again after
    /// that keeps returning `Eof` tokens (the iterator wrapper stops at the
    /// first one). Lexical errors are terminal.
    pub fn next_token(&mut self) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        loop {
            self.skip_whitespace();

            let start = self.curr_position();

            let Some(ch) = self.peek_char() else {
                let span = self.make_span(start);
                return Ok(self.make_token(GraphQLTokenKind::Eof, span));
            };

            // Trivia: comments and commas are accumulated, not returned.
            if ch == '#' {
                self.lex_comment(start);
                continue;
            }
            if ch == ',' {
                self.consume();
                let span = self.make_span(start);
                self.pending_trivia.push(GraphQLTriviaToken::Comma { span });
                continue;
            }

            if char_class::is_punctuator(ch) {
                self.consume();
                let span = self.make_span(start);
                let kind = match ch {
                    '!' => GraphQLTokenKind::Bang,
                    '$' => GraphQLTokenKind::Dollar,
                    '&' => GraphQLTokenKind::Ampersand,
                    '(' => GraphQLTokenKind::ParenOpen,
                    ')' => GraphQLTokenKind::ParenClose,
                    ':' => GraphQLTokenKind::Colon,
                    '=' => GraphQLTokenKind::Equals,
                    '@' => GraphQLTokenKind::At,
                    '[' => GraphQLTokenKind::SquareBracketOpen,
                    ']' => GraphQLTokenKind::SquareBracketClose,
                    '{' => GraphQLTokenKind::CurlyBraceOpen,
                    '|' => GraphQLTokenKind::Pipe,
                    '}' => GraphQLTokenKind::CurlyBraceClose,
                    _ => unreachable!("punctuator table and match arms disagree"),
                };
                return Ok(self.make_token(kind, span));
            }

            return match ch {
                '.' => self.lex_spread(start),
                '"' => self.lex_string(start),
                c if char_class::is_name_start(c) => Ok(self.lex_name(start)),
                c if char_class::is_digit_or_minus(c) => self.lex_number(start),
                c => {
                    self.consume();
                    Err(self.make_error(
                        format!(
                            "unexpected character `{c}` (U+{:04X})",
                            c as u32,
                        ),
                        start,
                        GraphQLSyntaxErrorKind::UnexpectedCharacter { found: c },
                    ))
                }
            };
        }
    }

    // =========================================================================
    // Whitespace handling
    // =========================================================================

    /// Skips whitespace characters.
    ///
    /// Per the GraphQL spec, these are "ignored tokens":
    /// - Space (U+0020)
    /// - Tab (U+0009)
    /// - Line terminators: LF (U+000A), CR (U+000D), CRLF
    /// - BOM (U+FEFF)
    ///
    /// Commas are also ignored tokens in GraphQL but are handled separately
    /// to preserve them as trivia.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | '\u{FEFF}' => {
                    self.consume();
                }
                _ => break,
            }
        }
    }

    // =========================================================================
    // Comment lexing
    // =========================================================================

    /// Lexes a comment and adds it to pending trivia.
    ///
    /// A comment starts with `#` and extends to the end of the line. The
    /// recorded value trims the leading `#` along with any spaces/tabs
    /// following it.
    fn lex_comment(&mut self, start: SourcePosition) {
        let content_start = self.curr_byte_offset;

        // memchr finds the end of line in one pass; everything before it is
        // comment bytes we can consume blindly (a comment can contain any
        // non-line-terminator character).
        let rest = self.remaining().as_bytes();
        let line_len = memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len());
        self.curr_byte_offset += line_len;
        self.curr_col += self.source[content_start..self.curr_byte_offset]
            .chars()
            .count();
        // The comment bytes bypass consume(), so a \r immediately before
        // the `#` must not pair with a \n after the comment.
        self.last_char_was_cr = false;

        let content = &self.source[content_start..self.curr_byte_offset];
        let value = content.trim_start_matches(['#', ' ', '\t']);
        let span = self.make_span(start);

        self.pending_trivia.push(GraphQLTriviaToken::Comment {
            value: Cow::Borrowed(value),
            span,
        });
    }

    // =========================================================================
    // Spread operator lexing
    // =========================================================================

    /// Lexes the `...` spread operator.
    ///
    /// Exactly three adjacent dots are required; one or two dots (or dots
    /// separated by anything) are an invalid-spread error.
    fn lex_spread(&mut self, start: SourcePosition) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        let mut dots = 0;
        while dots < 3 && self.peek_char() == Some('.') {
            self.consume();
            dots += 1;
        }

        if dots == 3 {
            let span = self.make_span(start);
            return Ok(self.make_token(GraphQLTokenKind::Ellipsis, span));
        }

        let mut error = self.make_error(
            format!("invalid spread operator: expected `...`, found {dots} dot(s)"),
            start,
            GraphQLSyntaxErrorKind::InvalidSpread,
        );
        error.add_help("the spread operator is exactly three adjacent dots: `...`");
        Err(error)
    }

    // =========================================================================
    // Name lexing
    // =========================================================================

    /// Lexes a name.
    ///
    /// Names match the pattern `/[_A-Za-z][_0-9A-Za-z]*/`. The literals
    /// `true`, `false`, and `null` are emitted as distinct token kinds.
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let name_start = self.curr_byte_offset;

        // First character was already validated as a name start.
        self.consume();

        while let Some(ch) = self.peek_char() {
            if char_class::is_name_continue(ch) {
                self.consume();
            } else {
                break;
            }
        }

        let name = &self.source[name_start..self.curr_byte_offset];
        let span = self.make_span(start);

        let kind = match name {
            "true" => GraphQLTokenKind::True,
            "false" => GraphQLTokenKind::False,
            "null" => GraphQLTokenKind::Null,
            _ => GraphQLTokenKind::name_borrowed(name),
        };

        self.make_token(kind, span)
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Lexes an integer or float literal.
    ///
    /// Handles:
    /// - Optional negative sign: `-`
    /// - Integer part: `0` or `[1-9][0-9]*`
    /// - Optional fractional part: `.[0-9]+` (marks the literal a
    ///   fixed-point float)
    /// - Optional exponent: `[eE][+-]?[0-9]+` (marks the literal an
    ///   exponential float, overriding fixed-point)
    fn lex_number(&mut self, start: SourcePosition) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        let num_start = self.curr_byte_offset;
        let mut format = None;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if let Some(ch) = self.peek_char()
                    && char_class::is_digit(ch)
                {
                    self.consume();
                    let mut error = self.make_error(
                        format!(
                            "invalid number `{}`: leading zeros are not allowed",
                            &self.source[num_start..self.curr_byte_offset],
                        ),
                        start,
                        GraphQLSyntaxErrorKind::InvalidNumber,
                    );
                    error.add_help("remove the leading zero");
                    return Err(error);
                }
            }
            Some(ch) if char_class::is_digit(ch) => {
                self.consume();
                while let Some(ch) = self.peek_char() {
                    if char_class::is_digit(ch) {
                        self.consume();
                    } else {
                        break;
                    }
                }
            }
            _ => {
                // A bare `-` with no digits after it.
                return Err(self.make_error(
                    "invalid number: expected a digit after `-`",
                    start,
                    GraphQLSyntaxErrorKind::InvalidNumber,
                ));
            }
        }

        // Fractional part. A following `.` that isn't followed by a digit is
        // left in place (it may be a malformed spread; the next next_token
        // call reports it).
        if self.peek_char() == Some('.')
            && let Some(ch) = self.peek_char_nth(1)
            && char_class::is_digit(ch)
        {
            format = Some(FloatFormat::FixedPoint);
            self.consume();
            while let Some(ch) = self.peek_char() {
                if char_class::is_digit(ch) {
                    self.consume();
                } else {
                    break;
                }
            }
        }

        // Exponent part.
        if let Some(ch) = self.peek_char()
            && (ch == 'e' || ch == 'E')
        {
            format = Some(FloatFormat::Exponential);
            self.consume();

            if let Some(ch) = self.peek_char()
                && (ch == '+' || ch == '-')
            {
                self.consume();
            }

            if !matches!(self.peek_char(), Some(ch) if char_class::is_digit(ch)) {
                return Err(self.make_error(
                    format!(
                        "invalid number `{}`: exponent must have at least one digit",
                        &self.source[num_start..self.curr_byte_offset],
                    ),
                    start,
                    GraphQLSyntaxErrorKind::InvalidNumber,
                ));
            }
            while let Some(ch) = self.peek_char() {
                if char_class::is_digit(ch) {
                    self.consume();
                } else {
                    break;
                }
            }
        }

        let num_text = &self.source[num_start..self.curr_byte_offset];
        let span = self.make_span(start);

        let kind = match format {
            Some(format) => GraphQLTokenKind::float_value_borrowed(num_text, format),
            None => GraphQLTokenKind::int_value_borrowed(num_text),
        };

        Ok(self.make_token(kind, span))
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    /// Lexes a string literal (single-line or block string).
    fn lex_string(&mut self, start: SourcePosition) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start);
        }

        self.consume(); // opening "
        let content_start = self.curr_byte_offset;

        loop {
            match self.peek_char() {
                None => {
                    let mut error = self.make_error(
                        "unterminated string literal",
                        start.clone(),
                        GraphQLSyntaxErrorKind::UnterminatedString,
                    );
                    error.add_help("add a closing `\"`");
                    return Err(error);
                }
                Some('\n') | Some('\r') => {
                    let mut error = self.make_error(
                        "unterminated string literal",
                        start.clone(),
                        GraphQLSyntaxErrorKind::UnterminatedString,
                    );
                    error.add_note(
                        "single-line strings cannot contain unescaped line terminators",
                    );
                    error.add_help(
                        "use a block string (triple quotes) for multi-line \
                         strings, or escape the newline with `\\n`",
                    );
                    return Err(error);
                }
                Some('"') => {
                    let content = &self.source[content_start..self.curr_byte_offset];
                    self.consume(); // closing "
                    let span = self.make_span(start);
                    return Ok(self.make_token(
                        GraphQLTokenKind::string_value_borrowed(content, false),
                        span,
                    ));
                }
                Some('\\') => {
                    let escape_start = self.curr_position();
                    self.consume();
                    match self.peek_char() {
                        Some(c) if char_class::is_escape_char(c) => {
                            self.consume();
                            if c == 'u' {
                                self.lex_unicode_escape_digits(escape_start)?;
                            }
                        }
                        Some(c) => {
                            self.consume();
                            return Err(self.make_error(
                                format!("invalid escape sequence `\\{c}`"),
                                escape_start,
                                GraphQLSyntaxErrorKind::InvalidEscapeSequence {
                                    sequence: format!("\\{c}"),
                                },
                            ));
                        }
                        None => {
                            return Err(self.make_error(
                                "invalid escape sequence at end of input",
                                escape_start,
                                GraphQLSyntaxErrorKind::InvalidEscapeSequence {
                                    sequence: "\\".to_string(),
                                },
                            ));
                        }
                    }
                }
                Some(c) if c.is_control() => {
                    // Raw control characters are not SourceCharacters inside
                    // single-line strings.
                    self.consume();
                    return Err(self.make_error(
                        format!(
                            "unterminated string literal: raw control character \
                             U+{:04X} in string",
                            c as u32,
                        ),
                        start.clone(),
                        GraphQLSyntaxErrorKind::UnterminatedString,
                    ));
                }
                Some(_) => {
                    self.consume();
                }
            }
        }
    }

    /// Validates the four hex digits of a `\uXXXX` escape.
    fn lex_unicode_escape_digits(
        &mut self,
        escape_start: SourcePosition,
    ) -> Result<(), GraphQLSyntaxError> {
        for _ in 0..4 {
            match self.peek_char() {
                Some(c) if c.is_ascii_hexdigit() => {
                    self.consume();
                }
                _ => {
                    let sequence = &self.source
                        [escape_start.byte_offset()..self.curr_byte_offset];
                    return Err(self.make_error(
                        format!(
                            "invalid escape sequence `{sequence}`: `\\u` must \
                             be followed by 4 hex digits",
                        ),
                        escape_start.clone(),
                        GraphQLSyntaxErrorKind::InvalidEscapeSequence {
                            sequence: sequence.to_string(),
                        },
                    ));
                }
            }
        }
        Ok(())
    }

    /// Lexes a block string literal.
    ///
    /// A block string runs until an unescaped `"""`, may contain newlines
    /// (line/column bookkeeping is maintained by `consume`), honors the
    /// `\"""` escaped-terminator sequence, and rejects raw control
    /// characters other than tab and line terminators.
    fn lex_block_string(&mut self, start: SourcePosition) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        // Consume opening """
        self.consume();
        self.consume();
        self.consume();
        let content_start = self.curr_byte_offset;

        loop {
            match self.peek_char() {
                None => {
                    let mut error = self.make_error(
                        "unterminated block string",
                        start.clone(),
                        GraphQLSyntaxErrorKind::UnterminatedBlockString,
                    );
                    error.add_help("add a closing `\"\"\"`");
                    return Err(error);
                }
                Some('\\') => {
                    if self.remaining().starts_with("\\\"\"\"") {
                        self.consume(); // backslash
                        self.consume();
                        self.consume();
                        self.consume();
                    } else {
                        self.consume();
                    }
                }
                Some('"') => {
                    if self.remaining().starts_with("\"\"\"") {
                        let content = &self.source[content_start..self.curr_byte_offset];
                        self.consume();
                        self.consume();
                        self.consume();
                        let span = self.make_span(start);
                        return Ok(self.make_token(
                            GraphQLTokenKind::string_value_borrowed(content, true),
                            span,
                        ));
                    }
                    self.consume();
                }
                Some(c) if c.is_control() && c != '\t' && c != '\n' && c != '\r' => {
                    self.consume();
                    return Err(self.make_error(
                        format!(
                            "unterminated block string: raw control character \
                             U+{:04X} in block string",
                            c as u32,
                        ),
                        start.clone(),
                        GraphQLSyntaxErrorKind::UnterminatedBlockString,
                    ));
                }
                Some(_) => {
                    self.consume();
                }
            }
        }
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = Result<GraphQLToken<'src>, GraphQLSyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();

        match &result {
            Ok(token) if matches!(token.kind, GraphQLTokenKind::Eof) => {
                self.finished = true;
            }
            Err(_) => {
                self.finished = true;
            }
            Ok(_) => {}
        }

        Some(result)
    }
}
