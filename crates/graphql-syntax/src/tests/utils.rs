//! Various test utils.

use crate::ast;
use crate::smallvec;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLParser;
use crate::GraphQLSourceSpan;
use crate::GraphQLSyntaxError;
use crate::SourcePosition;

/// Parses a document, panicking with the error's diagnostic output on
/// failure.
pub fn parse(source: &str) -> ast::Document<'_> {
    GraphQLParser::new(source)
        .parse_document()
        .unwrap_or_else(|error| {
            panic!(
                "expected `{source}` to parse:\n{}",
                error.format_detailed(Some(source)),
            )
        })
}

/// Parses a document, panicking if it unexpectedly succeeds.
pub fn parse_err(source: &str) -> GraphQLSyntaxError {
    match GraphQLParser::new(source).parse_document() {
        Ok(doc) => panic!(
            "expected `{source}` to fail to parse, got {} definition(s)",
            doc.definitions.len(),
        ),
        Err(error) => error,
    }
}

/// Creates a mock token with the given kind and a zero-width span at the
/// origin.
///
/// Uses `'static` lifetime since test tokens use owned strings.
pub fn mock_token(kind: GraphQLTokenKind<'static>) -> GraphQLToken<'static> {
    let pos = SourcePosition::new(0, 0, 0);
    GraphQLToken {
        kind,
        preceding_trivia: smallvec![],
        span: GraphQLSourceSpan::new(pos.clone(), pos),
    }
}

/// Creates a mock Name token with the given name.
pub fn mock_name_token(name: &str) -> GraphQLToken<'static> {
    mock_token(GraphQLTokenKind::name_owned(name.to_string()))
}

/// Creates a mock Eof token.
pub fn mock_eof_token() -> GraphQLToken<'static> {
    mock_token(GraphQLTokenKind::Eof)
}
