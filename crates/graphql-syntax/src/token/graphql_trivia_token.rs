use crate::GraphQLSourceSpan;
use std::borrow::Cow;

/// A "trivia token" is a token that doesn't affect parsing but is still
/// preserved (e.g. for tooling use).
///
/// Trivia includes comments and commas, which are attached to the following
/// token as "preceding trivia". This allows formatters, linters, and the
/// syntax classifier to observe these elements without the parser needing to
/// handle them explicitly.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTriviaToken<'src> {
    /// A GraphQL comment, which starts with `#` and extends to the end of
    /// the line.
    Comment {
        /// The comment text with leading `#`, space, and tab characters
        /// trimmed. Borrows from the source text.
        value: Cow<'src, str>,
        /// The source location of the comment (including the leading `#`).
        span: GraphQLSourceSpan,
    },

    /// A comma separator. In GraphQL, commas are optional and treated as
    /// whitespace, but we preserve them as trivia.
    Comma {
        /// The source location of the comma.
        span: GraphQLSourceSpan,
    },
}

impl GraphQLTriviaToken<'_> {
    /// Returns the source location of this trivia token.
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            GraphQLTriviaToken::Comment { span, .. } => span,
            GraphQLTriviaToken::Comma { span } => span,
        }
    }
}
