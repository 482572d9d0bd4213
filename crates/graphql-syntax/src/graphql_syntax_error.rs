use crate::GraphQLErrorNote;
use crate::GraphQLErrorNoteKind;
use crate::GraphQLErrorNotes;
use crate::GraphQLSourceSpan;
use crate::GraphQLSyntaxErrorKind;

/// A syntax error with location information and contextual notes.
///
/// One `GraphQLSyntaxError` terminates an entire lex/parse attempt: the
/// lexer and parser never recover, so a failed parse carries exactly one of
/// these. This structure provides enough information for both human-readable
/// CLI output and programmatic handling by tools.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLSyntaxError {
    /// Human-readable primary error message.
    ///
    /// Examples: "expected `:`, found `String`", "unterminated string
    /// literal".
    message: String,

    /// The primary span where the error was detected.
    ///
    /// - For "unexpected token" errors: the unexpected token's span
    /// - For "expected X" errors: where X should have appeared
    /// - For lexical errors: the offending character or literal
    span: GraphQLSourceSpan,

    /// Categorized error kind for programmatic handling.
    ///
    /// Enables tools to pattern-match on error types without parsing
    /// messages.
    kind: GraphQLSyntaxErrorKind,

    /// Additional notes providing context, suggestions, and related
    /// locations.
    notes: GraphQLErrorNotes,
}

impl GraphQLSyntaxError {
    /// Creates a new syntax error with no notes.
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLSyntaxErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: GraphQLErrorNotes::new(),
        }
    }

    /// Creates a new syntax error with notes.
    pub fn with_notes(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLSyntaxErrorKind,
        notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes,
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the primary span where the error was detected.
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &GraphQLSyntaxErrorKind {
        &self.kind
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    /// Adds a general note without a span.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::general(message));
    }

    /// Adds a help note without a span.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: expected `:`, found `String`
    ///   --> schema.graphql:5:12
    ///    |
    ///  5 |     userName String
    ///    |              ^^^^^^
    ///    = help: did you mean `userName: String`?
    /// ```
    ///
    /// # Arguments
    /// - `source`: Optional source text for snippet extraction. If `None`,
    ///   snippets are omitted but line/column info is still shown.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');

        let file_name = self
            .span
            .file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string());
        let line = self.span.start_inclusive.line() + 1;
        let column = self.span.start_inclusive.col() + 1;
        output.push_str(&format!("  --> {file_name}:{line}:{column}\n"));

        if let Some(src) = source
            && let Some(snippet) = format_source_snippet(src, &self.span)
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            let prefix = match note.kind {
                GraphQLErrorNoteKind::General => "note",
                GraphQLErrorNoteKind::Help => "help",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));

            if let (Some(note_span), Some(src)) = (&note.span, source)
                && let Some(snippet) = format_source_snippet(src, note_span)
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// schema.graphql:5:12: error: expected `:`, found `String`
    /// ```
    pub fn format_oneline(&self) -> String {
        let file_name = self
            .span
            .file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string());
        let line = self.span.start_inclusive.line() + 1;
        let column = self.span.start_inclusive.col() + 1;

        format!("{file_name}:{line}:{column}: error: {}", self.message)
    }
}

/// Formats a source snippet with a caret underline for `span`.
fn format_source_snippet(source: &str, span: &GraphQLSourceSpan) -> Option<String> {
    let lines: Vec<&str> = source.lines().collect();
    let line_num = span.start_inclusive.line();

    // Line numbers are 0-indexed internally.
    if line_num >= lines.len() {
        return None;
    }

    let line_content = lines[line_num];
    let display_line_num = line_num + 1;
    let line_num_width = display_line_num.to_string().len().max(2);

    let mut output = String::new();

    output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
    output.push_str(&format!(
        "{display_line_num:>line_num_width$} | {line_content}\n"
    ));

    let col_start = span.start_inclusive.col();
    let col_end = if span.end_exclusive.line() == line_num {
        span.end_exclusive.col()
    } else {
        line_content.chars().count()
    };
    let underline_len = if col_end > col_start {
        col_end - col_start
    } else {
        1
    };

    output.push_str(&format!(
        "{:>width$} | {:>padding$}{}\n",
        "",
        "",
        "^".repeat(underline_len),
        width = line_num_width,
        padding = col_start
    ));

    Some(output)
}
