use crate::ast::ast_node::impl_ast_node_source_slice;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::GraphQLSourceSpan;

// =========================================================
// Operations
// =========================================================

/// The kind of a GraphQL operation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// The operation keyword as written in GraphQL source.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An
/// [operation definition](https://spec.graphql.org/September2025/#sec-Language.Operations):
/// a query, mutation, or subscription.
///
/// Anonymous query shorthand (a bare selection set at document top level)
/// parses as an `OperationKind::Query` with `name: None` and no variable
/// definitions.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'src> {
    pub kind: OperationKind,
    pub name: Option<Name<'src>>,
    pub variable_definitions: Vec<VariableDefinition<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub span: GraphQLSourceSpan,
}

/// A
/// [variable definition](https://spec.graphql.org/September2025/#sec-Language.Variables)
/// in an operation's variable list (e.g. `$id: ID! = "0"`).
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'src> {
    /// The variable name without the `$` sigil; the span of the name
    /// covers only the identifier.
    pub name: Name<'src>,
    pub type_annotation: TypeAnnotation<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    /// Covers from the `$` sigil through the end of the default value or
    /// directives.
    pub span: GraphQLSourceSpan,
}

// =========================================================
// Selections
// =========================================================

/// A braced set of
/// [selections](https://spec.graphql.org/September2025/#sec-Selection-Sets).
/// The span includes the braces.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet<'src> {
    pub selections: Vec<Selection<'src>>,
    pub span: GraphQLSourceSpan,
}

/// A single entry in a [`SelectionSet`].
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

impl Selection<'_> {
    /// The source span covering this selection.
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            Selection::Field(s) => &s.span,
            Selection::FragmentSpread(s) => &s.span,
            Selection::InlineFragment(s) => &s.span,
        }
    }
}

/// A
/// [field selection](https://spec.graphql.org/September2025/#sec-Language.Fields)
/// (e.g. `userId: user(id: 4) @include(if: $b) { name }`).
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    pub alias: Option<Name<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
    pub span: GraphQLSourceSpan,
}

impl<'src> Field<'src> {
    /// The name this field appears under in the response: the alias when
    /// present, the field name otherwise.
    pub fn response_name(&self) -> &Name<'src> {
        self.alias.as_ref().unwrap_or(&self.name)
    }
}

/// A single `name: value` argument in a field, directive, or fragment
/// argument list.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
    pub span: GraphQLSourceSpan,
}

/// A
/// [fragment spread](https://spec.graphql.org/September2025/#sec-Language.Fragments)
/// (e.g. `...userFields @skip(if: $b)`). The span includes the `...`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'src> {
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub span: GraphQLSourceSpan,
}

/// An
/// [inline fragment](https://spec.graphql.org/September2025/#sec-Inline-Fragments)
/// (e.g. `... on User { name }`). The type condition is optional; a bare
/// `... { name }` applies to the enclosing type. The span includes the
/// `...`.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'src> {
    pub type_condition: Option<TypeCondition<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub span: GraphQLSourceSpan,
}

// =========================================================
// Fragments
// =========================================================

/// A
/// [fragment definition](https://spec.graphql.org/September2025/#sec-Language.Fragments)
/// (e.g. `fragment userFields on User { name }`).
///
/// The fragment name may not be `on` (the parser rejects it as reserved).
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'src> {
    pub name: Name<'src>,
    pub type_condition: TypeCondition<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub span: GraphQLSourceSpan,
}

/// A type condition (`on SomeType`) in a fragment definition or inline
/// fragment. The span covers the `on` keyword and the type name.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeCondition<'src> {
    pub name: Name<'src>,
    pub span: GraphQLSourceSpan,
}

impl_ast_node_source_slice!(method: Selection);
impl_ast_node_source_slice!(
    field: OperationDefinition,
    VariableDefinition,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    TypeCondition,
);
