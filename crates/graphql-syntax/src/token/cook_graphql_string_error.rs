/// Error returned when cooking a GraphQL string value fails.
///
/// "Cooking" turns the raw token content into the semantic string value:
/// escape-sequence decoding for single-line strings, common-indent stripping
/// for block strings. The lexer already validates escape sequences, so
/// cooking a lexed token normally succeeds; these errors surface when
/// cooking string content constructed by hand.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CookGraphQLStringError {
    /// An invalid escape sequence was encountered (e.g. `\q`).
    #[error("invalid escape sequence: `{0}`")]
    InvalidEscapeSequence(String),

    /// An invalid Unicode escape sequence was encountered (e.g. `\uZZZZ` or
    /// a surrogate code point).
    #[error("invalid unicode escape: `{0}`")]
    InvalidUnicodeEscape(String),
}
