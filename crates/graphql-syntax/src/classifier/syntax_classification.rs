use serde::Deserialize;
use serde::Serialize;

/// How editor tooling should highlight a classified source range.
///
/// Identifier categories are disambiguated by grammatical position during
/// the classification scan: the same lexical `Name` token classifies as
/// `TypeName` after `type`, `FieldName` inside a selection set, and so on.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize,
)]
pub enum SyntaxClassificationKind {
    /// A `# ...` comment.
    Comment,
    /// A string literal in description position.
    Description,
    /// A grammatical keyword (`type`, `query`, `on`, ...).
    Keyword,
    /// The name of a query/mutation/subscription operation.
    OperationName,
    /// A type name: definitions, extensions, type references, type
    /// conditions, implements lists, union members.
    TypeName,
    /// A field name: selections, field definitions, input fields, object
    /// value keys.
    FieldName,
    /// A field alias (the name before `:` in a selection).
    AliasName,
    /// An argument name, in both argument lists and argument definitions.
    ArgumentName,
    /// A directive name (after `@`).
    DirectiveName,
    /// A fragment name: definitions and spreads.
    FragmentName,
    /// A variable name (after `$`).
    VariableName,
    /// An enum value, in value positions, enum definitions, and directive
    /// location lists.
    EnumValueName,
    /// An integer literal.
    IntLiteral,
    /// A float literal.
    FloatLiteral,
    /// A string literal in value (non-description) position.
    StringLiteral,
    /// `true` or `false`.
    BooleanLiteral,
    /// `null`.
    NullLiteral,
    /// Any punctuator, including commas.
    Punctuation,
}

/// A classified half-open byte range of source text: `(kind, start,
/// length)`.
///
/// Classifications are produced independently per
/// [`SyntaxClassifier::parse`](crate::SyntaxClassifier::parse) call and are
/// not linked to AST nodes.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize,
)]
pub struct SyntaxClassification {
    pub kind: SyntaxClassificationKind,
    /// Byte offset of the first classified byte.
    pub start: u32,
    /// Length of the classified range in bytes.
    pub length: u32,
}

impl SyntaxClassification {
    /// Byte offset one past the last classified byte.
    pub fn end(&self) -> u32 {
        self.start.saturating_add(self.length)
    }

    /// `true` when this classification's `[start, end]` range overlaps the
    /// query window `[query_start, query_start + query_length]`.
    ///
    /// Bounds are inclusive on both sides, so a classification that merely
    /// touches the window still matches.
    pub fn overlaps_range(&self, query_start: u32, query_length: u32) -> bool {
        let query_end = query_start.saturating_add(query_length);
        self.start <= query_end && query_start <= self.end()
    }
}
