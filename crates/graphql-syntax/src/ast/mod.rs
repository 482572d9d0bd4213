//! AST types for parsed GraphQL documents.
//!
//! This module provides a zero-copy AST: all node types that carry strings
//! are parameterized over a `'src` lifetime and borrow from the source text
//! via [`Cow<'src, str>`]. Every node carries a [`GraphQLSourceSpan`]
//! covering exactly the tokens consumed for its production, which is what
//! makes lossless source-slice reconstruction (via [`AstNode`]) possible.
//!
//! # Example
//!
//! ```rust,ignore
//! use graphql_syntax::GraphQLParser;
//!
//! let source = "type Query { hello: String }";
//! let doc = GraphQLParser::new(source).parse_document()?;
//! ```
//!
//! [`Cow<'src, str>`]: std::borrow::Cow
//! [`GraphQLSourceSpan`]: crate::GraphQLSourceSpan

mod ast_node;
mod directive;
mod document;
mod executable_defs;
mod name;
mod type_annotation;
mod type_extensions;
mod type_system_defs;
mod values;

pub use ast_node::AstNode;
pub use directive::DirectiveAnnotation;
pub use directive::DirectiveDefinition;
pub use directive::DirectiveLocation;
pub use directive::DirectiveLocationAnnotation;
pub use document::Definition;
pub use document::Document;
pub use executable_defs::Argument;
pub use executable_defs::Field;
pub use executable_defs::FragmentDefinition;
pub use executable_defs::FragmentSpread;
pub use executable_defs::InlineFragment;
pub use executable_defs::OperationDefinition;
pub use executable_defs::OperationKind;
pub use executable_defs::Selection;
pub use executable_defs::SelectionSet;
pub use executable_defs::TypeCondition;
pub use executable_defs::VariableDefinition;
pub use name::Name;
pub use type_annotation::ListTypeAnnotation;
pub use type_annotation::NamedTypeAnnotation;
pub use type_annotation::NonNullTypeAnnotation;
pub use type_annotation::TypeAnnotation;
pub use type_extensions::EnumTypeExtension;
pub use type_extensions::InputObjectTypeExtension;
pub use type_extensions::InterfaceTypeExtension;
pub use type_extensions::ObjectTypeExtension;
pub use type_extensions::ScalarTypeExtension;
pub use type_extensions::SchemaExtension;
pub use type_extensions::TypeExtension;
pub use type_extensions::UnionTypeExtension;
pub use type_system_defs::Description;
pub use type_system_defs::EnumTypeDefinition;
pub use type_system_defs::EnumValueDefinition;
pub use type_system_defs::FieldDefinition;
pub use type_system_defs::InputObjectTypeDefinition;
pub use type_system_defs::InputValueDefinition;
pub use type_system_defs::InterfaceTypeDefinition;
pub use type_system_defs::ObjectTypeDefinition;
pub use type_system_defs::RootOperationTypeDefinition;
pub use type_system_defs::ScalarTypeDefinition;
pub use type_system_defs::SchemaDefinition;
pub use type_system_defs::TypeDefinition;
pub use type_system_defs::UnionTypeDefinition;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::FloatValue;
pub use values::IntValue;
pub use values::ListValue;
pub use values::NullValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::Value;
pub use values::VariableValue;
