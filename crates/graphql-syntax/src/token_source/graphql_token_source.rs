use crate::token::GraphQLToken;
use crate::GraphQLSyntaxError;

/// Marker trait for [`GraphQLToken`] lexers (iterators that generate
/// [`GraphQLToken`]s, or a terminal [`GraphQLSyntaxError`]).
///
/// This trait enables extensibility over different sources of GraphQL text
/// to be parsed:
/// [`StrGraphQLTokenSource`](crate::token_source::StrGraphQLTokenSource) is
/// a lexer over `&str`; other token sources (pre-recorded token vectors in
/// tests, etc.) only need to implement [`Iterator`].
///
/// Lexers are responsible for:
/// - Skipping whitespace (an "ignored token" per the GraphQL spec)
/// - Accumulating trivia (comments, commas) and attaching it to the next
///   token
/// - Emitting a final token with
///   [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof) carrying
///   any trailing trivia
/// - Yielding `Err` exactly once for the first lexical error, after which
///   the stream is finished (lexical errors are terminal; there is no
///   recovery)
///
/// # Lifetime Parameter
///
/// The `'src` lifetime represents the source text that tokens are lexed
/// from. For string-based lexers, this enables zero-copy lexing where token
/// values borrow directly from the input. Token sources that allocate should
/// use `'static`.
pub trait GraphQLTokenSource<'src>:
    Iterator<Item = Result<GraphQLToken<'src>, GraphQLSyntaxError>>
{
}

impl<'src, T> GraphQLTokenSource<'src> for T where
    T: Iterator<Item = Result<GraphQLToken<'src>, GraphQLSyntaxError>>
{
}
