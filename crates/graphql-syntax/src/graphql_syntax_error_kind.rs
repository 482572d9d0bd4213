use crate::ReservedNameContext;

/// Categorizes syntax errors for programmatic handling.
///
/// Each variant contains the minimal data needed for programmatic decisions.
/// Human-readable context (suggestions, explanations) belongs in the `notes`
/// field of `GraphQLSyntaxError`.
///
/// The `#[error(...)]` messages are concise/programmatic. Full human-readable
/// messages are in `GraphQLSyntaxError.message`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLSyntaxErrorKind {
    // =========================================================================
    // Lexical errors
    // =========================================================================
    /// A character that cannot start any token.
    ///
    /// # Example
    /// ```text
    /// type User ? { }
    ///           ^ unexpected `?` (U+003F)
    /// ```
    #[error("unexpected character `{found}`")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
    },

    /// A single-line string that reached end of line or end of input, or
    /// contained a raw control character, before its closing `"`.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A block string that reached end of input before its closing `"""`.
    #[error("unterminated block string")]
    UnterminatedBlockString,

    /// A `\` escape outside the allowed set (`" \ / b f n r t u`), or a
    /// malformed `\u` escape.
    #[error("invalid escape sequence: `{sequence}`")]
    InvalidEscapeSequence {
        /// The offending escape text (e.g. `"\\q"`).
        sequence: String,
    },

    /// A malformed numeric literal: leading zero followed by a digit, a bare
    /// `-` with no digits, or an exponent with no digits.
    #[error("invalid number")]
    InvalidNumber,

    /// A `.` that does not begin an adjacent `...` spread operator.
    ///
    /// # Example
    /// ```text
    /// { .. frag }
    ///   ^^ invalid spread — expected `...`
    /// ```
    #[error("invalid spread operator")]
    InvalidSpread,

    // =========================================================================
    // Syntactic errors
    // =========================================================================
    /// Expected specific token(s) but found something else.
    ///
    /// This is the most common error type — the parser expected certain
    /// tokens based on grammar rules but encountered something unexpected.
    ///
    /// # Example
    /// ```text
    /// type User { name String }
    ///                  ^^^^^^ expected `:`, found `String`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// What tokens were expected (e.g. `[":", "{", "@"]`).
        expected: Vec<String>,
        /// Description of what was found (e.g. `"String"` or `"}"`).
        found: String,
    },

    /// Unexpected end of input while parsing.
    #[error("unexpected end of input")]
    UnexpectedEof {
        /// What was expected when end of input was encountered.
        expected: Vec<String>,
    },

    /// A directive location name outside the fixed `DirectiveLocation`
    /// enumeration.
    ///
    /// # Example
    /// ```text
    /// directive @foo on FEILD
    ///                   ^^^^^ unknown directive location
    /// ```
    #[error("invalid directive location: `{name}`")]
    InvalidDirectiveLocation {
        /// The name that failed to match a directive location.
        name: String,
    },

    /// Reserved name used in a context where it's not allowed.
    ///
    /// # Example
    /// ```text
    /// fragment on on User { name }
    ///          ^^ fragment name cannot be `on`
    /// ```
    #[error("reserved name: `{name}`")]
    ReservedName {
        /// The reserved name that was used (e.g. `"on"`, `"true"`).
        name: String,
        /// The context where this name is not allowed.
        context: ReservedNameContext,
    },

    /// An `extend` form with neither directives nor a body.
    ///
    /// # Example
    /// ```text
    /// extend type Foo
    ///                ^ extension must add directives, interfaces, or fields
    /// ```
    #[error("empty type extension")]
    EmptyTypeExtension,

    /// A `!` applied to a type that is already non-null.
    ///
    /// # Example
    /// ```text
    /// field: String!!
    ///               ^ `!` cannot follow a non-null type
    /// ```
    #[error("invalid non-null wrapper")]
    InvalidNonNull,
}
