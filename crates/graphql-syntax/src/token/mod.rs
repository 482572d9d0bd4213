//! This module provides the core token types used by the GraphQL lexer and
//! the parser.

mod cook_graphql_string_error;
mod float_format;
mod graphql_token;
mod graphql_token_kind;
mod graphql_trivia_token;

pub use cook_graphql_string_error::CookGraphQLStringError;
pub(crate) use graphql_token_kind::cook_block_string;
pub(crate) use graphql_token_kind::cook_single_line_string;
pub use float_format::FloatFormat;
pub use graphql_token::GraphQLToken;
pub use graphql_token::GraphQLTriviaTokenVec;
pub use graphql_token_kind::GraphQLTokenKind;
pub use graphql_trivia_token::GraphQLTriviaToken;
