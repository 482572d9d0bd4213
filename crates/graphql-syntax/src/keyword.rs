/// The reserved keywords that drive definition dispatch in the parser.
///
/// GraphQL has no reserved words at the lexical level: every keyword is an
/// ordinary `Name` token whose meaning depends on position. Interning the
/// keyword once per `Name` token (instead of repeated string comparisons at
/// every dispatch site) keeps the parser's match arms cheap and readable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Keyword {
    Query,
    Mutation,
    Subscription,
    Fragment,
    On,
    Schema,
    Scalar,
    Type,
    Interface,
    Union,
    Enum,
    Input,
    Extend,
    Directive,
    Implements,
    Repeatable,
}

impl Keyword {
    /// Maps a name to its keyword, if it is one.
    pub fn from_name(name: &str) -> Option<Keyword> {
        match name {
            "query" => Some(Keyword::Query),
            "mutation" => Some(Keyword::Mutation),
            "subscription" => Some(Keyword::Subscription),
            "fragment" => Some(Keyword::Fragment),
            "on" => Some(Keyword::On),
            "schema" => Some(Keyword::Schema),
            "scalar" => Some(Keyword::Scalar),
            "type" => Some(Keyword::Type),
            "interface" => Some(Keyword::Interface),
            "union" => Some(Keyword::Union),
            "enum" => Some(Keyword::Enum),
            "input" => Some(Keyword::Input),
            "extend" => Some(Keyword::Extend),
            "directive" => Some(Keyword::Directive),
            "implements" => Some(Keyword::Implements),
            "repeatable" => Some(Keyword::Repeatable),
            _ => None,
        }
    }

    /// Returns the keyword's source spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Query => "query",
            Keyword::Mutation => "mutation",
            Keyword::Subscription => "subscription",
            Keyword::Fragment => "fragment",
            Keyword::On => "on",
            Keyword::Schema => "schema",
            Keyword::Scalar => "scalar",
            Keyword::Type => "type",
            Keyword::Interface => "interface",
            Keyword::Union => "union",
            Keyword::Enum => "enum",
            Keyword::Input => "input",
            Keyword::Extend => "extend",
            Keyword::Directive => "directive",
            Keyword::Implements => "implements",
            Keyword::Repeatable => "repeatable",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
