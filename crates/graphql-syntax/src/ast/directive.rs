use crate::ast::ast_node::impl_ast_node_source_slice;
use crate::ast::Argument;
use crate::ast::Description;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::GraphQLSourceSpan;

/// A directive applied to some piece of syntax (e.g.
/// `@deprecated(reason: "use v2")`).
///
/// See the
/// [Directives](https://spec.graphql.org/September2025/#sec-Language.Directives)
/// section of the spec. The span covers the `@` sigil, the name, and the
/// argument list if present.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation<'src> {
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub span: GraphQLSourceSpan,
}

/// A directive definition (e.g.
/// `directive @skip(if: Boolean!) on FIELD | FRAGMENT_SPREAD`).
///
/// See the
/// [Type System Directives](https://spec.graphql.org/September2025/#sec-Type-System.Directives)
/// section of the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocationAnnotation>,
    pub span: GraphQLSourceSpan,
}

/// One location name in a directive definition's `on` list, with its
/// source span.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveLocationAnnotation {
    pub location: DirectiveLocation,
    pub span: GraphQLSourceSpan,
}

/// The set of valid
/// [directive locations](https://spec.graphql.org/September2025/#sec-Type-System.Directives).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLocation {
    // Executable directive locations
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,

    // Type system directive locations
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    /// Map a location name as written in source (e.g. `FIELD_DEFINITION`)
    /// to its enum value. Returns `None` for anything that is not a valid
    /// directive location.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "QUERY" => DirectiveLocation::Query,
            "MUTATION" => DirectiveLocation::Mutation,
            "SUBSCRIPTION" => DirectiveLocation::Subscription,
            "FIELD" => DirectiveLocation::Field,
            "FRAGMENT_DEFINITION" => DirectiveLocation::FragmentDefinition,
            "FRAGMENT_SPREAD" => DirectiveLocation::FragmentSpread,
            "INLINE_FRAGMENT" => DirectiveLocation::InlineFragment,
            "VARIABLE_DEFINITION" => DirectiveLocation::VariableDefinition,
            "SCHEMA" => DirectiveLocation::Schema,
            "SCALAR" => DirectiveLocation::Scalar,
            "OBJECT" => DirectiveLocation::Object,
            "FIELD_DEFINITION" => DirectiveLocation::FieldDefinition,
            "ARGUMENT_DEFINITION" => DirectiveLocation::ArgumentDefinition,
            "INTERFACE" => DirectiveLocation::Interface,
            "UNION" => DirectiveLocation::Union,
            "ENUM" => DirectiveLocation::Enum,
            "ENUM_VALUE" => DirectiveLocation::EnumValue,
            "INPUT_OBJECT" => DirectiveLocation::InputObject,
            "INPUT_FIELD_DEFINITION" => {
                DirectiveLocation::InputFieldDefinition
            },
            _ => return None,
        })
    }

    /// The location name as written in GraphQL source.
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => {
                "INPUT_FIELD_DEFINITION"
            },
        }
    }
}

impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl_ast_node_source_slice!(field: DirectiveAnnotation, DirectiveDefinition);
impl_ast_node_source_slice!(plain: DirectiveLocationAnnotation);
