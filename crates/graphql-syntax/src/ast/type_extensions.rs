use crate::ast::ast_node::impl_ast_node_source_slice;
use crate::ast::DirectiveAnnotation;
use crate::ast::EnumValueDefinition;
use crate::ast::FieldDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::ast::RootOperationTypeDefinition;
use crate::GraphQLSourceSpan;

/// A
/// [schema extension](https://spec.graphql.org/September2025/#sec-Schema-Extension)
/// (e.g. `extend schema @tag { mutation: Mutation }`).
///
/// An extension must actually extend something: the parser rejects
/// `extend schema` with neither directives nor root operation types.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaExtension<'src> {
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub root_operation_types: Vec<RootOperationTypeDefinition<'src>>,
    pub span: GraphQLSourceSpan,
}

/// A GraphQL
/// [type extension](https://spec.graphql.org/September2025/#sec-Type-Extensions):
/// one of the six type kinds.
///
/// Every extension form must add at least one thing (directives, implements
/// interfaces, fields, members, or values); the parser rejects extensions
/// that add nothing.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeExtension<'src> {
    Enum(EnumTypeExtension<'src>),
    InputObject(InputObjectTypeExtension<'src>),
    Interface(InterfaceTypeExtension<'src>),
    Object(ObjectTypeExtension<'src>),
    Scalar(ScalarTypeExtension<'src>),
    Union(UnionTypeExtension<'src>),
}

impl<'src> TypeExtension<'src> {
    /// The name of the extended type.
    pub fn name(&self) -> &Name<'src> {
        match self {
            TypeExtension::Enum(ext) => &ext.name,
            TypeExtension::InputObject(ext) => &ext.name,
            TypeExtension::Interface(ext) => &ext.name,
            TypeExtension::Object(ext) => &ext.name,
            TypeExtension::Scalar(ext) => &ext.name,
            TypeExtension::Union(ext) => &ext.name,
        }
    }

    /// The source span covering this extension.
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            TypeExtension::Enum(ext) => &ext.span,
            TypeExtension::InputObject(ext) => &ext.span,
            TypeExtension::Interface(ext) => &ext.span,
            TypeExtension::Object(ext) => &ext.span,
            TypeExtension::Scalar(ext) => &ext.span,
            TypeExtension::Union(ext) => &ext.span,
        }
    }
}

/// A scalar type extension (e.g. `extend scalar DateTime @tag`). Must add
/// at least one directive.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeExtension<'src> {
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub span: GraphQLSourceSpan,
}

/// An object type extension (e.g. `extend type User { age: Int }`).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeExtension<'src> {
    pub name: Name<'src>,
    pub interfaces: Vec<Name<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
    pub span: GraphQLSourceSpan,
}

/// An interface type extension (e.g. `extend interface Node @tag`).
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeExtension<'src> {
    pub name: Name<'src>,
    pub interfaces: Vec<Name<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
    pub span: GraphQLSourceSpan,
}

/// A union type extension (e.g. `extend union Pet = Hamster`).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeExtension<'src> {
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub members: Vec<Name<'src>>,
    pub span: GraphQLSourceSpan,
}

/// An enum type extension (e.g. `extend enum Color { MAUVE }`).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeExtension<'src> {
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub values: Vec<EnumValueDefinition<'src>>,
    pub span: GraphQLSourceSpan,
}

/// An input object type extension (e.g. `extend input Point { z: Int }`).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeExtension<'src> {
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<InputValueDefinition<'src>>,
    pub span: GraphQLSourceSpan,
}

impl_ast_node_source_slice!(method: TypeExtension);
impl_ast_node_source_slice!(
    field: SchemaExtension,
    ScalarTypeExtension,
    ObjectTypeExtension,
    InterfaceTypeExtension,
    UnionTypeExtension,
    EnumTypeExtension,
    InputObjectTypeExtension,
);
