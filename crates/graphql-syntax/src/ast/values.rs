use std::borrow::Cow;
use std::num::ParseFloatError;
use std::num::ParseIntError;

use crate::ast::ast_node::impl_ast_node_source_slice;
use crate::ast::Name;
use crate::token::cook_block_string;
use crate::token::cook_single_line_string;
use crate::token::CookGraphQLStringError;
use crate::token::FloatFormat;
use crate::GraphQLSourceSpan;

// =========================================================
// Value enum
// =========================================================

/// A GraphQL input value.
///
/// Represents all possible GraphQL value literals as defined in the
/// [Input Values](https://spec.graphql.org/September2025/#sec-Input-Values)
/// section of the spec.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    Boolean(BooleanValue),
    Enum(EnumValue<'src>),
    Float(FloatValue<'src>),
    Int(IntValue<'src>),
    List(ListValue<'src>),
    Null(NullValue),
    Object(ObjectValue<'src>),
    String(StringValue<'src>),
    Variable(VariableValue<'src>),
}

impl Value<'_> {
    /// The source span covering this value.
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            Value::Boolean(v) => &v.span,
            Value::Enum(v) => &v.span,
            Value::Float(v) => &v.span,
            Value::Int(v) => &v.span,
            Value::List(v) => &v.span,
            Value::Null(v) => &v.span,
            Value::Object(v) => &v.span,
            Value::String(v) => &v.span,
            Value::Variable(v) => &v.span,
        }
    }
}

// =========================================================
// Scalar value types
// =========================================================

/// A GraphQL integer value.
///
/// Per the
/// [Int Value](https://spec.graphql.org/September2025/#sec-Int-Value)
/// section of the spec, Int is a signed 32-bit integer. The raw source
/// digits are kept verbatim (zero-copy); conversion to `i32` is deferred to
/// [`IntValue::as_i32`] so that consumers that only reprint the document
/// never pay for (or fail on) numeric conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue<'src> {
    /// The raw digit characters exactly as written in the source,
    /// including any leading `-`.
    pub raw: Cow<'src, str>,
    pub span: GraphQLSourceSpan,
}

impl IntValue<'_> {
    /// Parse the raw digits as an `i32`.
    ///
    /// Fails on overflow/underflow; the lexer guarantees the digits are
    /// otherwise well formed.
    pub fn as_i32(&self) -> Result<i32, ParseIntError> {
        self.raw.parse()
    }
}

/// A GraphQL float value.
///
/// Per the
/// [Float Value](https://spec.graphql.org/September2025/#sec-Float-Value)
/// section of the spec, Float is a double-precision floating-point value
/// (IEEE 754). The raw source characters are kept verbatim along with the
/// [`FloatFormat`] the lexer observed; conversion to `f64` is deferred to
/// [`FloatValue::as_f64`].
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue<'src> {
    /// The raw characters exactly as written in the source.
    pub raw: Cow<'src, str>,
    /// Whether the literal used exponent notation or a plain fractional
    /// part.
    pub format: FloatFormat,
    pub span: GraphQLSourceSpan,
}

impl FloatValue<'_> {
    /// Parse the raw characters as an `f64`.
    pub fn as_f64(&self) -> Result<f64, ParseFloatError> {
        self.raw.parse()
    }
}

/// A GraphQL string value.
///
/// Per the
/// [String Value](https://spec.graphql.org/September2025/#sec-String-Value)
/// section of the spec, string values may be quoted strings or block
/// strings. `value` holds the *inner* content exactly as written in the
/// source (delimiters excluded, escape sequences unresolved); call
/// [`StringValue::cooked`] to resolve escapes and strip block-string
/// indentation.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue<'src> {
    /// The inner content between the delimiters, escapes unresolved.
    pub value: Cow<'src, str>,
    /// `true` when the literal was a `"""block string"""`.
    pub block: bool,
    pub span: GraphQLSourceSpan,
}

impl StringValue<'_> {
    /// The semantic string value: escape sequences resolved for quoted
    /// strings, common indentation and blank first/last lines stripped for
    /// block strings.
    pub fn cooked(&self) -> Result<String, CookGraphQLStringError> {
        if self.block {
            Ok(cook_block_string(&self.value))
        } else {
            cook_single_line_string(&self.value)
        }
    }
}

/// A GraphQL boolean value (`true` or `false`).
///
/// See the
/// [Boolean Value](https://spec.graphql.org/September2025/#sec-Boolean-Value)
/// section of the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub value: bool,
    pub span: GraphQLSourceSpan,
}

/// A GraphQL null literal.
///
/// See the
/// [Null Value](https://spec.graphql.org/September2025/#sec-Null-Value)
/// section of the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct NullValue {
    pub span: GraphQLSourceSpan,
}

/// A GraphQL enum value (an unquoted name that is not `true`, `false`, or
/// `null`).
///
/// See the
/// [Enum Value](https://spec.graphql.org/September2025/#sec-Enum-Value)
/// section of the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue<'src> {
    pub value: Cow<'src, str>,
    pub span: GraphQLSourceSpan,
}

// =========================================================
// Variable value
// =========================================================

/// A variable reference in a GraphQL value position (e.g., `$id`).
///
/// See the
/// [Variables](https://spec.graphql.org/September2025/#sec-Language.Variables)
/// section of the spec. The span covers the `$` sigil and the name; `name`
/// holds the variable name without the sigil.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableValue<'src> {
    pub name: Name<'src>,
    pub span: GraphQLSourceSpan,
}

// =========================================================
// Composite value types
// =========================================================

/// A GraphQL list value (e.g., `[1, 2, 3]`).
///
/// See the
/// [List Value](https://spec.graphql.org/September2025/#sec-List-Value)
/// section of the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct ListValue<'src> {
    pub values: Vec<Value<'src>>,
    pub span: GraphQLSourceSpan,
}

/// A GraphQL input object value (e.g., `{x: 1, y: 2}`).
///
/// See the
/// [Input Object Values](https://spec.graphql.org/September2025/#sec-Input-Object-Values)
/// section of the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue<'src> {
    pub fields: Vec<ObjectField<'src>>,
    pub span: GraphQLSourceSpan,
}

/// A single field within a GraphQL
/// [input object value](https://spec.graphql.org/September2025/#sec-Input-Object-Values).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
    pub span: GraphQLSourceSpan,
}

impl_ast_node_source_slice!(method: Value);
impl_ast_node_source_slice!(
    field: IntValue,
    FloatValue,
    StringValue,
    EnumValue,
    VariableValue,
    ListValue,
    ObjectValue,
    ObjectField,
);
impl_ast_node_source_slice!(plain: BooleanValue, NullValue);
