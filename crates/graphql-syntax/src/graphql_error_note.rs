use crate::GraphQLSourceSpan;
use smallvec::SmallVec;

/// The kind of an error note (determines the rendering prefix).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphQLErrorNoteKind {
    /// Explanatory context (`note:` prefix).
    General,
    /// An actionable suggestion (`help:` prefix).
    Help,
}

/// An error note providing additional context about a syntax error.
///
/// Notes augment the primary error message with explanatory context,
/// actionable suggestions, or related source locations (e.g. "string started
/// here").
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLErrorNote {
    /// The kind of note (determines rendering prefix).
    pub kind: GraphQLErrorNoteKind,

    /// The note message.
    pub message: String,

    /// Optional span pointing to a related location.
    pub span: Option<GraphQLSourceSpan>,
}

impl GraphQLErrorNote {
    /// Creates a general note without a span.
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            span: None,
        }
    }

    /// Creates a general note with a span.
    pub fn general_with_span(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
    ) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            span: Some(span),
        }
    }

    /// Creates a help note without a span.
    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Help,
            message: message.into(),
            span: None,
        }
    }
}

/// Type alias for error notes.
///
/// Uses SmallVec since most errors have 0-2 notes, avoiding heap allocation
/// in the common case.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
