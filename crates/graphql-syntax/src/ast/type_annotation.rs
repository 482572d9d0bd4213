use crate::ast::ast_node::impl_ast_node_source_slice;
use crate::ast::Name;
use crate::GraphQLSourceSpan;

/// A GraphQL
/// [type reference](https://spec.graphql.org/September2025/#sec-Type-References)
/// as written in a variable definition, field definition, or input value
/// definition.
///
/// Type annotations nest: `[Int!]!` is a non-null wrapping a list wrapping
/// a non-null wrapping the named type `Int`. The grammar forbids a non-null
/// wrapping another non-null directly (`Int!!`), which the parser rejects.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation<'src> {
    Named(NamedTypeAnnotation<'src>),
    List(ListTypeAnnotation<'src>),
    NonNull(NonNullTypeAnnotation<'src>),
}

impl<'src> TypeAnnotation<'src> {
    /// The source span covering this annotation (including any `[` `]` `!`
    /// wrappers).
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            TypeAnnotation::Named(t) => &t.span,
            TypeAnnotation::List(t) => &t.span,
            TypeAnnotation::NonNull(t) => &t.span,
        }
    }

    /// The innermost named type this annotation refers to.
    ///
    /// e.g. `[[Int!]]!` -> `Int`.
    pub fn innermost_name(&self) -> &Name<'src> {
        match self {
            TypeAnnotation::Named(t) => &t.name,
            TypeAnnotation::List(t) => t.inner.innermost_name(),
            TypeAnnotation::NonNull(t) => t.inner.innermost_name(),
        }
    }
}

/// A bare named type reference (e.g. `Int`, `User`).
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation<'src> {
    pub name: Name<'src>,
    pub span: GraphQLSourceSpan,
}

/// A list type reference (e.g. `[Int]`). The span includes the brackets.
#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation<'src> {
    pub inner: Box<TypeAnnotation<'src>>,
    pub span: GraphQLSourceSpan,
}

/// A non-null type reference (e.g. `Int!`). The span includes the `!`.
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullTypeAnnotation<'src> {
    pub inner: Box<TypeAnnotation<'src>>,
    pub span: GraphQLSourceSpan,
}

impl_ast_node_source_slice!(method: TypeAnnotation);
impl_ast_node_source_slice!(
    field: NamedTypeAnnotation,
    ListTypeAnnotation,
    NonNullTypeAnnotation,
);
