//! Token sources: lexers that feed the parser and the classifier.

mod graphql_token_source;
mod str_graphql_token_source;

pub use graphql_token_source::GraphQLTokenSource;
pub use str_graphql_token_source::StrGraphQLTokenSource;

#[cfg(test)]
mod tests;
