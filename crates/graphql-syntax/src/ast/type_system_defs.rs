use std::borrow::Cow;

use crate::ast::ast_node::impl_ast_node_source_slice;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::OperationKind;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::GraphQLSourceSpan;

// =========================================================
// Descriptions
// =========================================================

/// A
/// [description](https://spec.graphql.org/September2025/#sec-Descriptions)
/// string preceding a type system definition.
///
/// Like [`StringValue`](crate::ast::StringValue), `value` holds the inner
/// content with delimiters excluded and escapes unresolved.
#[derive(Clone, Debug, PartialEq)]
pub struct Description<'src> {
    pub value: Cow<'src, str>,
    /// `true` when the description was a `"""block string"""`.
    pub block: bool,
    pub span: GraphQLSourceSpan,
}

// =========================================================
// Schema definition
// =========================================================

/// A
/// [schema definition](https://spec.graphql.org/September2025/#sec-Schema)
/// (e.g. `schema { query: Query }`).
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub root_operation_types: Vec<RootOperationTypeDefinition<'src>>,
    pub span: GraphQLSourceSpan,
}

/// One `query: TypeName` entry in a schema definition or schema extension.
#[derive(Clone, Debug, PartialEq)]
pub struct RootOperationTypeDefinition<'src> {
    pub operation_kind: OperationKind,
    pub named_type: Name<'src>,
    pub span: GraphQLSourceSpan,
}

// =========================================================
// Type definitions
// =========================================================

/// A GraphQL
/// [type definition](https://spec.graphql.org/September2025/#sec-Types):
/// one of the six type kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition<'src> {
    Enum(EnumTypeDefinition<'src>),
    InputObject(InputObjectTypeDefinition<'src>),
    Interface(InterfaceTypeDefinition<'src>),
    Object(ObjectTypeDefinition<'src>),
    Scalar(ScalarTypeDefinition<'src>),
    Union(UnionTypeDefinition<'src>),
}

impl<'src> TypeDefinition<'src> {
    /// The name of the defined type.
    pub fn name(&self) -> &Name<'src> {
        match self {
            TypeDefinition::Enum(def) => &def.name,
            TypeDefinition::InputObject(def) => &def.name,
            TypeDefinition::Interface(def) => &def.name,
            TypeDefinition::Object(def) => &def.name,
            TypeDefinition::Scalar(def) => &def.name,
            TypeDefinition::Union(def) => &def.name,
        }
    }

    /// The source span covering this definition.
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            TypeDefinition::Enum(def) => &def.span,
            TypeDefinition::InputObject(def) => &def.span,
            TypeDefinition::Interface(def) => &def.span,
            TypeDefinition::Object(def) => &def.span,
            TypeDefinition::Scalar(def) => &def.span,
            TypeDefinition::Union(def) => &def.span,
        }
    }
}

/// A
/// [scalar type definition](https://spec.graphql.org/September2025/#sec-Scalars)
/// (e.g. `scalar DateTime @specifiedBy(url: "...")`).
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub span: GraphQLSourceSpan,
}

/// An
/// [object type definition](https://spec.graphql.org/September2025/#sec-Objects)
/// (e.g. `type User implements Node { id: ID! }`).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub interfaces: Vec<Name<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
    pub span: GraphQLSourceSpan,
}

/// An
/// [interface type definition](https://spec.graphql.org/September2025/#sec-Interfaces)
/// (e.g. `interface Node { id: ID! }`).
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub interfaces: Vec<Name<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
    pub span: GraphQLSourceSpan,
}

/// A
/// [union type definition](https://spec.graphql.org/September2025/#sec-Unions)
/// (e.g. `union Pet = Cat | Dog`).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub members: Vec<Name<'src>>,
    pub span: GraphQLSourceSpan,
}

/// An
/// [enum type definition](https://spec.graphql.org/September2025/#sec-Enums)
/// (e.g. `enum Color { RED GREEN BLUE }`).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub values: Vec<EnumValueDefinition<'src>>,
    pub span: GraphQLSourceSpan,
}

/// An
/// [input object type definition](https://spec.graphql.org/September2025/#sec-Input-Objects)
/// (e.g. `input Point { x: Int y: Int }`).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<InputValueDefinition<'src>>,
    pub span: GraphQLSourceSpan,
}

// =========================================================
// Member definitions
// =========================================================

/// A field definition within an object or interface type (e.g.
/// `user(id: ID!): User @deprecated`).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub type_annotation: TypeAnnotation<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub span: GraphQLSourceSpan,
}

/// An
/// [input value definition](https://spec.graphql.org/September2025/#sec-Input-Values):
/// an argument definition or input object field (e.g.
/// `id: ID! = "0" @tag`).
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub type_annotation: TypeAnnotation<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub span: GraphQLSourceSpan,
}

/// An enum value definition within an enum type (e.g.
/// `RED @deprecated(reason: "use CRIMSON")`).
///
/// The value name may not be `true`, `false`, or `null` (the parser
/// rejects these as reserved).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub span: GraphQLSourceSpan,
}

impl_ast_node_source_slice!(method: TypeDefinition);
impl_ast_node_source_slice!(
    field: Description,
    SchemaDefinition,
    RootOperationTypeDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    InputObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    EnumValueDefinition,
);
