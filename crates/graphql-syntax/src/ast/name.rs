use std::borrow::Cow;

use crate::ast::ast_node::impl_ast_node_source_slice;
use crate::GraphQLSourceSpan;

/// A GraphQL [name](https://spec.graphql.org/September2025/#sec-Names)
/// (identifier).
///
/// Names are used for type names, field names, argument names, directive
/// names, enum values, and more. The `value` field borrows from the source
/// text when possible (`Cow::Borrowed`) or owns the string when the source
/// is not available (`Cow::Owned`).
#[derive(Clone, Debug, PartialEq)]
pub struct Name<'src> {
    pub value: Cow<'src, str>,
    pub span: GraphQLSourceSpan,
}

impl Name<'_> {
    /// The name as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl_ast_node_source_slice!(field: Name);
