use crate::ast::ast_node::impl_ast_node_source_slice;
use crate::ast::DirectiveDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::GraphQLSourceSpan;

/// A parsed GraphQL
/// [document](https://spec.graphql.org/September2025/#sec-Document): the
/// root of the AST.
///
/// Documents may freely mix executable definitions (operations, fragments)
/// and type system definitions (schema, types, directives, extensions);
/// restricting a document to one kind or the other is a validation concern,
/// not a parsing concern.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'src> {
    pub definitions: Vec<Definition<'src>>,
    /// Covers the entire source text, including trailing trivia before
    /// end of input.
    pub span: GraphQLSourceSpan,
}

impl<'src> Document<'src> {
    /// Iterate the executable definitions (operations and fragments) in
    /// this document, in source order.
    pub fn executable_definitions(
        &self,
    ) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions.iter().filter(|def| def.is_executable())
    }

    /// Iterate the type system definitions and extensions in this
    /// document, in source order.
    pub fn type_system_definitions(
        &self,
    ) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions.iter().filter(|def| !def.is_executable())
    }
}

/// A single top-level definition within a [`Document`].
#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'src> {
    DirectiveDefinition(DirectiveDefinition<'src>),
    FragmentDefinition(FragmentDefinition<'src>),
    OperationDefinition(OperationDefinition<'src>),
    SchemaDefinition(SchemaDefinition<'src>),
    SchemaExtension(SchemaExtension<'src>),
    TypeDefinition(TypeDefinition<'src>),
    TypeExtension(TypeExtension<'src>),
}

impl Definition<'_> {
    /// `true` for operation and fragment definitions, `false` for type
    /// system definitions and extensions.
    pub fn is_executable(&self) -> bool {
        matches!(
            self,
            Definition::FragmentDefinition(_)
                | Definition::OperationDefinition(_),
        )
    }

    /// The source span covering this definition.
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            Definition::DirectiveDefinition(def) => &def.span,
            Definition::FragmentDefinition(def) => &def.span,
            Definition::OperationDefinition(def) => &def.span,
            Definition::SchemaDefinition(def) => &def.span,
            Definition::SchemaExtension(def) => &def.span,
            Definition::TypeDefinition(def) => def.span(),
            Definition::TypeExtension(def) => def.span(),
        }
    }
}

impl_ast_node_source_slice!(field: Document);
impl_ast_node_source_slice!(method: Definition);
