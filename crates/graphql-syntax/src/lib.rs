//! A zero-copy GraphQL syntax library: lexer, recursive-descent parser, and
//! best-effort syntax classifier for editor tooling.
//!
//! The three layers share one token pipeline. [`token_source`] produces
//! tokens lazily from source text, [`GraphQLTokenStream`] adds buffered
//! lookahead on top, and both [`GraphQLParser`] (strict, AST-producing) and
//! [`SyntaxClassifier`] (lenient, classification-producing) drive that
//! stream.
//!
//! # Parsing
//!
//! ```rust,ignore
//! use graphql_syntax::GraphQLParser;
//!
//! let source = "query GetUser { user(id: 4) { name } }";
//! let document = GraphQLParser::new(source).parse_document()?;
//! ```
//!
//! Parsing is all-or-nothing: the first syntax error terminates the parse
//! and is returned as a [`GraphQLSyntaxError`] carrying a source span, a
//! structured [`GraphQLSyntaxErrorKind`], and optional notes.
//!
//! # Classification
//!
//! ```rust,ignore
//! use graphql_syntax::SyntaxClassifier;
//!
//! let mut classifier = SyntaxClassifier::new();
//! classifier.parse("type Foo { id: ");
//! // Everything up to the point of failure is classified.
//! let classifications = classifier.get_syntax_classifications(0, 15);
//! ```

pub mod ast;
mod byte_span;
mod char_class;
mod classifier;
mod graphql_error_note;
mod graphql_parser;
mod graphql_source_span;
mod graphql_syntax_error;
mod graphql_syntax_error_kind;
mod graphql_token_stream;
mod keyword;
mod reserved_name_context;
mod source_position;
pub mod token;
pub mod token_source;

pub use byte_span::ByteSpan;
pub use classifier::SyntaxClassification;
pub use classifier::SyntaxClassificationKind;
pub use classifier::SyntaxClassifier;
pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNoteKind;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_parser::GraphQLParser;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_syntax_error::GraphQLSyntaxError;
pub use graphql_syntax_error_kind::GraphQLSyntaxErrorKind;
pub use graphql_token_stream::GraphQLTokenStream;
pub use keyword::Keyword;
pub use reserved_name_context::ReservedNameContext;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;

#[cfg(test)]
mod tests;
