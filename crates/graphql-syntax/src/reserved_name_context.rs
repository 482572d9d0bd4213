/// Contexts where certain names are reserved in GraphQL.
///
/// Some names have special meaning in specific contexts and cannot be used
/// as identifiers there. This enum is used by
/// `GraphQLSyntaxErrorKind::ReservedName` to indicate which context rejected
/// the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedNameContext {
    /// Fragment names cannot be `on` (it introduces the type condition).
    ///
    /// Invalid: `fragment on on User { ... }`
    FragmentName,

    /// Enum values cannot be `true`, `false`, or `null`.
    ///
    /// Invalid: `enum Bool { true false }` — these would be ambiguous with
    /// boolean/null literals in value contexts.
    EnumValue,
}

impl ReservedNameContext {
    /// Returns a human-readable description for error messages.
    pub fn description(&self) -> &'static str {
        match self {
            ReservedNameContext::FragmentName => "fragment name",
            ReservedNameContext::EnumValue => "enum value",
        }
    }
}
