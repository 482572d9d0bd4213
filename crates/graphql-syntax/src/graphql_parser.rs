//! Recursive descent parser for GraphQL documents.

use std::borrow::Cow;
use std::path::Path;

use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLSourceSpan;
use crate::GraphQLSyntaxError;
use crate::GraphQLSyntaxErrorKind;
use crate::GraphQLTokenStream;
use crate::Keyword;
use crate::ReservedNameContext;
use crate::SourcePosition;

// =============================================================================
// Const contexts
// =============================================================================

/// Tracks whether the value currently being parsed sits in a position where
/// variable references (`$foo`) are allowed.
///
/// Const positions (variable default values, directive arguments on type
/// system constructs, input value default values) reject variables with a
/// context-specific note.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ConstContext {
    AllowVariables,
    VariableDefaultValue,
    DirectiveArgument,
    InputDefaultValue,
}

impl ConstContext {
    fn forbids_variables(self) -> bool {
        self != ConstContext::AllowVariables
    }

    fn description(self) -> &'static str {
        match self {
            ConstContext::AllowVariables => {
                unreachable!("description() called on AllowVariables")
            },
            ConstContext::VariableDefaultValue => "variable default values",
            ConstContext::DirectiveArgument => "const directive arguments",
            ConstContext::InputDefaultValue => "input value default values",
        }
    }
}

/// What the next token at document level begins. Computed up front so that
/// the `peek()` borrow is released before dispatching into `&mut self`
/// grammar methods.
enum DefinitionStart {
    AnonymousOperation,
    Described,
    Keyword(Option<Keyword>),
    Eof,
    Other,
}

// =============================================================================
// Main parser struct
// =============================================================================

/// A recursive descent parser for GraphQL documents.
///
/// Generic over the token source, enabling parsing from both string input
/// ([`StrGraphQLTokenSource`]) and synthetic token vectors in tests.
///
/// A parser instance is single-use: [`parse_document`] consumes it. The
/// first syntax error (lexical or grammatical) terminates the entire parse;
/// there is no recovery and no partial AST. Callers that need resilience to
/// malformed input should use
/// [`SyntaxClassifier`](crate::SyntaxClassifier) instead.
///
/// # Usage
///
/// ```
/// use graphql_syntax::ast;
/// use graphql_syntax::GraphQLParser;
///
/// let source = "type Query { hello: String }";
/// let doc = GraphQLParser::new(source).parse_document().unwrap();
///
/// assert!(matches!(
///     doc.definitions[0],
///     ast::Definition::TypeDefinition(_),
/// ));
/// ```
///
/// [`parse_document`]: GraphQLParser::parse_document
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    /// The underlying token stream with lookahead support.
    token_stream: GraphQLTokenStream<'src, TTokenSource>,

    /// End position of the most recently consumed token, used to close
    /// node spans at the last token actually consumed for a production.
    last_end_position: Option<SourcePosition>,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    /// Creates a new parser from a string-like source.
    ///
    /// Accepts any type that can be referenced as a `str`, including
    /// `&str`, `&String`, and `&Cow<str>`.
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::new(source.as_ref()))
    }

    /// Creates a new parser from a string source, tagging every span (and
    /// therefore every error) with `file_path`.
    pub fn with_file_path(source: &'src str, file_path: &'src Path) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::with_file_path(
            source, file_path,
        ))
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>>
    GraphQLParser<'src, TTokenSource>
{
    /// Creates a new parser from a token source.
    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            last_end_position: None,
        }
    }

    /// Parses a complete GraphQL document.
    ///
    /// Documents may freely mix executable definitions and type system
    /// definitions; a document must contain at least one definition.
    pub fn parse_document(
        mut self,
    ) -> Result<ast::Document<'src>, GraphQLSyntaxError> {
        let mut definitions = Vec::new();
        while !self.token_stream.is_at_end()? {
            definitions.push(self.parse_definition()?);
        }
        if definitions.is_empty() {
            return Err(self.unexpected_token(vec!["definition".to_string()]));
        }

        // The Eof token closes the document span and carries the file path.
        let eof = self.consume_token()?;
        let span = GraphQLSourceSpan {
            start_inclusive: SourcePosition::new(0, 0, 0),
            end_exclusive: eof.span.end_exclusive,
            file_path: eof.span.file_path,
        };
        Ok(ast::Document { definitions, span })
    }

    // =========================================================================
    // Token expectation helpers
    // =========================================================================

    /// Consumes the next token, recording its end position for span
    /// bookkeeping.
    fn consume_token(
        &mut self,
    ) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        let token = self.token_stream.consume()?;
        self.last_end_position = Some(token.span.end_exclusive.clone());
        Ok(token)
    }

    /// Expects a specific token kind (payloads ignored) and consumes it.
    fn expect(
        &mut self,
        expected_kind: &GraphQLTokenKind,
    ) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        if self.peek_is(expected_kind)? {
            self.consume_token()
        } else {
            Err(self.unexpected_token(vec![Self::token_kind_display(
                expected_kind,
            )]))
        }
    }

    /// Expects a name token and returns it as an [`ast::Name`].
    ///
    /// Per the GraphQL spec, `true`, `false`, and `null` match the Name
    /// grammar and are valid names in most contexts. The lexer tokenizes
    /// them as distinct kinds for type safety in value positions, but this
    /// method accepts them as names.
    fn expect_name(&mut self) -> Result<ast::Name<'src>, GraphQLSyntaxError> {
        let is_name = matches!(
            self.token_stream.peek()?.kind,
            GraphQLTokenKind::Name(_)
                | GraphQLTokenKind::True
                | GraphQLTokenKind::False
                | GraphQLTokenKind::Null,
        );
        if !is_name {
            return Err(self.unexpected_token(vec!["name".to_string()]));
        }

        let token = self.consume_token()?;
        let value = match token.kind {
            GraphQLTokenKind::Name(name) => name,
            GraphQLTokenKind::True => Cow::Borrowed("true"),
            GraphQLTokenKind::False => Cow::Borrowed("false"),
            GraphQLTokenKind::Null => Cow::Borrowed("null"),
            _ => unreachable!("expect_name: non-name token after peek check"),
        };
        Ok(ast::Name {
            value,
            span: token.span,
        })
    }

    /// Expects a specific keyword name and consumes it.
    fn expect_keyword(
        &mut self,
        keyword: Keyword,
    ) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        if self.peek_keyword()? == Some(keyword) {
            self.consume_token()
        } else {
            Err(self.unexpected_token(vec![keyword.as_str().to_string()]))
        }
    }

    /// Peeks the next token's keyword, if it is a `Name` token whose value
    /// is one of the interned [`Keyword`]s.
    fn peek_keyword(&mut self) -> Result<Option<Keyword>, GraphQLSyntaxError> {
        Ok(match &self.token_stream.peek()?.kind {
            GraphQLTokenKind::Name(name) => Keyword::from_name(name),
            _ => None,
        })
    }

    /// `true` when the next token is a `Name` matching `keyword`.
    fn peek_is_keyword(
        &mut self,
        keyword: Keyword,
    ) -> Result<bool, GraphQLSyntaxError> {
        Ok(self.peek_keyword()? == Some(keyword))
    }

    /// `true` when the next token matches `kind` (payloads ignored).
    fn peek_is(
        &mut self,
        kind: &GraphQLTokenKind,
    ) -> Result<bool, GraphQLSyntaxError> {
        Ok(Self::token_kinds_match(
            &self.token_stream.peek()?.kind,
            kind,
        ))
    }

    /// Clones the next token's span without consuming it.
    fn peek_span(&mut self) -> Result<GraphQLSourceSpan, GraphQLSyntaxError> {
        Ok(self.token_stream.peek()?.span.clone())
    }

    /// Closes a node span: from the start of `start_span` through the end
    /// of the most recently consumed token.
    fn make_span(&self, start_span: GraphQLSourceSpan) -> GraphQLSourceSpan {
        let end = self
            .last_end_position
            .clone()
            .unwrap_or_else(|| start_span.end_exclusive.clone());
        GraphQLSourceSpan {
            start_inclusive: start_span.start_inclusive,
            end_exclusive: end,
            file_path: start_span.file_path,
        }
    }

    /// Builds an "unexpected token" (or "unexpected end of input") error
    /// at the next token, without consuming it.
    ///
    /// If the token stream itself has failed (lexical error), that error
    /// is returned instead.
    fn unexpected_token(&mut self, expected: Vec<String>) -> GraphQLSyntaxError {
        let token = match self.token_stream.peek() {
            Ok(token) => token,
            Err(error) => return error,
        };
        let expected_list = Self::format_expected(&expected);
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            GraphQLSyntaxError::new(
                format!("expected {expected_list}, found end of input"),
                token.span.clone(),
                GraphQLSyntaxErrorKind::UnexpectedEof { expected },
            )
        } else {
            let found = Self::token_kind_display(&token.kind);
            let span = token.span.clone();
            GraphQLSyntaxError::new(
                format!("expected {expected_list}, found `{found}`"),
                span,
                GraphQLSyntaxErrorKind::UnexpectedToken { expected, found },
            )
        }
    }

    /// Formats an expected-token list for error messages:
    /// `` `a` ``, `` `a` or `b` ``, `` `a`, `b`, or `c` ``.
    fn format_expected(expected: &[String]) -> String {
        match expected {
            [] => "a token".to_string(),
            [only] => format!("`{only}`"),
            [first, second] => format!("`{first}` or `{second}`"),
            [init @ .., last] => {
                let init = init
                    .iter()
                    .map(|e| format!("`{e}`"))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{init}, or `{last}`")
            },
        }
    }

    /// Human-readable display of a token kind for error messages.
    fn token_kind_display(kind: &GraphQLTokenKind) -> String {
        match kind {
            GraphQLTokenKind::Name(name) => name.to_string(),
            GraphQLTokenKind::IntValue(raw) => raw.to_string(),
            GraphQLTokenKind::FloatValue { raw, .. } => raw.to_string(),
            GraphQLTokenKind::StringValue { .. } => "string".to_string(),
            GraphQLTokenKind::True => "true".to_string(),
            GraphQLTokenKind::False => "false".to_string(),
            GraphQLTokenKind::Null => "null".to_string(),
            GraphQLTokenKind::Eof => "end of input".to_string(),
            punctuator => punctuator
                .as_punctuator_str()
                .unwrap_or("<unknown>")
                .to_string(),
        }
    }

    /// `true` when two token kinds share a discriminant (payloads
    /// ignored, so any `Name` matches any other `Name`).
    fn token_kinds_match(
        actual: &GraphQLTokenKind,
        expected: &GraphQLTokenKind,
    ) -> bool {
        std::mem::discriminant(actual) == std::mem::discriminant(expected)
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn parse_definition(
        &mut self,
    ) -> Result<ast::Definition<'src>, GraphQLSyntaxError> {
        let start = match &self.token_stream.peek()?.kind {
            GraphQLTokenKind::CurlyBraceOpen => {
                DefinitionStart::AnonymousOperation
            },
            GraphQLTokenKind::StringValue { .. } => DefinitionStart::Described,
            GraphQLTokenKind::Name(name) => {
                DefinitionStart::Keyword(Keyword::from_name(name))
            },
            GraphQLTokenKind::Eof => DefinitionStart::Eof,
            _ => DefinitionStart::Other,
        };

        match start {
            DefinitionStart::AnonymousOperation => {
                Ok(ast::Definition::OperationDefinition(
                    self.parse_anonymous_operation()?,
                ))
            },
            DefinitionStart::Described => {
                let description = self.parse_description()?;
                self.parse_described_definition(description)
            },
            DefinitionStart::Keyword(keyword) => match keyword {
                Some(
                    Keyword::Query | Keyword::Mutation | Keyword::Subscription,
                ) => Ok(ast::Definition::OperationDefinition(
                    self.parse_operation_definition()?,
                )),
                Some(Keyword::Fragment) => {
                    Ok(ast::Definition::FragmentDefinition(
                        self.parse_fragment_definition()?,
                    ))
                },
                Some(Keyword::Extend) => self.parse_extension(),
                _ => self.parse_described_definition(None),
            },
            DefinitionStart::Eof | DefinitionStart::Other => {
                Err(self.unexpected_token(vec!["definition".to_string()]))
            },
        }
    }

    /// Parses a type system definition, with an optional already-parsed
    /// description.
    ///
    /// Also the fallthrough for undescribed type system definitions, so an
    /// unrecognized keyword lands here and produces the definition-keyword
    /// expectation error.
    fn parse_described_definition(
        &mut self,
        description: Option<ast::Description<'src>>,
    ) -> Result<ast::Definition<'src>, GraphQLSyntaxError> {
        match self.peek_keyword()? {
            Some(Keyword::Schema) => Ok(ast::Definition::SchemaDefinition(
                self.parse_schema_definition(description)?,
            )),
            Some(
                Keyword::Scalar
                | Keyword::Type
                | Keyword::Interface
                | Keyword::Union
                | Keyword::Enum
                | Keyword::Input,
            ) => Ok(ast::Definition::TypeDefinition(
                self.parse_type_definition(description)?,
            )),
            Some(Keyword::Directive) => {
                Ok(ast::Definition::DirectiveDefinition(
                    self.parse_directive_definition(description)?,
                ))
            },
            _ => Err(self.unexpected_token(vec![
                "schema".to_string(),
                "scalar".to_string(),
                "type".to_string(),
                "interface".to_string(),
                "union".to_string(),
                "enum".to_string(),
                "input".to_string(),
                "directive".to_string(),
            ])),
        }
    }

    /// Span start for a described construct: the description's start when
    /// present, the next token's otherwise.
    fn described_start_span(
        &mut self,
        description: &Option<ast::Description<'src>>,
    ) -> Result<GraphQLSourceSpan, GraphQLSyntaxError> {
        match description {
            Some(description) => Ok(description.span.clone()),
            None => self.peek_span(),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    fn parse_anonymous_operation(
        &mut self,
    ) -> Result<ast::OperationDefinition<'src>, GraphQLSyntaxError> {
        let start_span = self.peek_span()?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::OperationDefinition {
            kind: ast::OperationKind::Query,
            name: None,
            variable_definitions: Vec::new(),
            directives: Vec::new(),
            selection_set,
            span: self.make_span(start_span),
        })
    }

    fn parse_operation_definition(
        &mut self,
    ) -> Result<ast::OperationDefinition<'src>, GraphQLSyntaxError> {
        let start_span = self.peek_span()?;
        let kind = match self.peek_keyword()? {
            Some(Keyword::Query) => ast::OperationKind::Query,
            Some(Keyword::Mutation) => ast::OperationKind::Mutation,
            Some(Keyword::Subscription) => ast::OperationKind::Subscription,
            _ => {
                return Err(self.unexpected_token(vec![
                    "query".to_string(),
                    "mutation".to_string(),
                    "subscription".to_string(),
                ]));
            },
        };
        self.consume_token()?;

        let name = if self.peek_is_name()? {
            Some(self.expect_name()?)
        } else {
            None
        };
        let variable_definitions =
            if self.peek_is(&GraphQLTokenKind::ParenOpen)? {
                self.parse_variable_definitions()?
            } else {
                Vec::new()
            };
        let directives =
            self.parse_directive_annotations(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::OperationDefinition {
            kind,
            name,
            variable_definitions,
            directives,
            selection_set,
            span: self.make_span(start_span),
        })
    }

    /// `true` when the next token can serve as a name (`Name`, `true`,
    /// `false`, or `null`).
    fn peek_is_name(&mut self) -> Result<bool, GraphQLSyntaxError> {
        Ok(matches!(
            self.token_stream.peek()?.kind,
            GraphQLTokenKind::Name(_)
                | GraphQLTokenKind::True
                | GraphQLTokenKind::False
                | GraphQLTokenKind::Null,
        ))
    }

    fn parse_variable_definitions(
        &mut self,
    ) -> Result<Vec<ast::VariableDefinition<'src>>, GraphQLSyntaxError> {
        self.expect(&GraphQLTokenKind::ParenOpen)?;
        if self.peek_is(&GraphQLTokenKind::ParenClose)? {
            // `query Foo()` — the grammar requires at least one definition
            return Err(
                self.unexpected_token(vec!["variable definition".to_string()])
            );
        }

        let mut definitions = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::ParenClose)? {
            definitions.push(self.parse_variable_definition()?);
        }
        self.expect(&GraphQLTokenKind::ParenClose)?;
        Ok(definitions)
    }

    fn parse_variable_definition(
        &mut self,
    ) -> Result<ast::VariableDefinition<'src>, GraphQLSyntaxError> {
        let start_span = self.peek_span()?;
        self.expect(&GraphQLTokenKind::Dollar)?;
        let name = self.expect_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let type_annotation = self.parse_type_annotation()?;

        let default_value = if self.peek_is(&GraphQLTokenKind::Equals)? {
            self.consume_token()?;
            Some(self.parse_value(ConstContext::VariableDefaultValue)?)
        } else {
            None
        };
        let directives =
            self.parse_directive_annotations(ConstContext::DirectiveArgument)?;

        Ok(ast::VariableDefinition {
            name,
            type_annotation,
            default_value,
            directives,
            span: self.make_span(start_span),
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn parse_selection_set(
        &mut self,
    ) -> Result<ast::SelectionSet<'src>, GraphQLSyntaxError> {
        let start_span = self.peek_span()?;
        self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            // `{ }` — selection sets must select at least one thing
            return Err(self.unexpected_token(vec!["selection".to_string()]));
        }

        let mut selections = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            selections.push(self.parse_selection()?);
        }
        self.expect(&GraphQLTokenKind::CurlyBraceClose)?;

        Ok(ast::SelectionSet {
            selections,
            span: self.make_span(start_span),
        })
    }

    fn parse_selection(
        &mut self,
    ) -> Result<ast::Selection<'src>, GraphQLSyntaxError> {
        if self.peek_is(&GraphQLTokenKind::Ellipsis)? {
            self.parse_fragment_spread_or_inline_fragment()
        } else if self.peek_is_name()? {
            Ok(ast::Selection::Field(self.parse_field()?))
        } else {
            Err(self.unexpected_token(vec![
                "field".to_string(),
                "...".to_string(),
            ]))
        }
    }

    fn parse_field(&mut self) -> Result<ast::Field<'src>, GraphQLSyntaxError> {
        let start_span = self.peek_span()?;
        let first_name = self.expect_name()?;
        let (alias, name) = if self.peek_is(&GraphQLTokenKind::Colon)? {
            self.consume_token()?;
            (Some(first_name), self.expect_name()?)
        } else {
            (None, first_name)
        };

        let arguments = if self.peek_is(&GraphQLTokenKind::ParenOpen)? {
            self.parse_arguments(ConstContext::AllowVariables)?
        } else {
            Vec::new()
        };
        let directives =
            self.parse_directive_annotations(ConstContext::AllowVariables)?;
        let selection_set = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)?
        {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(ast::Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            span: self.make_span(start_span),
        })
    }

    /// Parses a selection beginning with `...`: a fragment spread when a
    /// fragment name follows, an inline fragment when `on`, `@`, or `{`
    /// follows.
    fn parse_fragment_spread_or_inline_fragment(
        &mut self,
    ) -> Result<ast::Selection<'src>, GraphQLSyntaxError> {
        let start_span = self.peek_span()?;
        self.expect(&GraphQLTokenKind::Ellipsis)?;

        let is_inline = self.peek_is_keyword(Keyword::On)?
            || self.peek_is(&GraphQLTokenKind::At)?
            || self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)?;
        if is_inline {
            let type_condition = if self.peek_is_keyword(Keyword::On)? {
                Some(self.parse_type_condition()?)
            } else {
                None
            };
            let directives = self
                .parse_directive_annotations(ConstContext::AllowVariables)?;
            let selection_set = self.parse_selection_set()?;
            Ok(ast::Selection::InlineFragment(ast::InlineFragment {
                type_condition,
                directives,
                selection_set,
                span: self.make_span(start_span),
            }))
        } else {
            let name = self.expect_name()?;
            let directives = self
                .parse_directive_annotations(ConstContext::AllowVariables)?;
            Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
                name,
                directives,
                span: self.make_span(start_span),
            }))
        }
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    fn parse_fragment_definition(
        &mut self,
    ) -> Result<ast::FragmentDefinition<'src>, GraphQLSyntaxError> {
        let start_span = self.peek_span()?;
        self.expect_keyword(Keyword::Fragment)?;

        let name = self.expect_name()?;
        if name.value == "on" {
            let mut error = GraphQLSyntaxError::new(
                "fragment name cannot be `on`",
                name.span,
                GraphQLSyntaxErrorKind::ReservedName {
                    name: "on".to_string(),
                    context: ReservedNameContext::FragmentName,
                },
            );
            error.add_note(
                "`on` introduces the fragment's type condition, so a \
                 fragment named `on` would be ambiguous",
            );
            return Err(error);
        }

        let type_condition = self.parse_type_condition()?;
        let directives =
            self.parse_directive_annotations(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            span: self.make_span(start_span),
        })
    }

    fn parse_type_condition(
        &mut self,
    ) -> Result<ast::TypeCondition<'src>, GraphQLSyntaxError> {
        let start_span = self.peek_span()?;
        self.expect_keyword(Keyword::On)?;
        let name = self.expect_name()?;
        Ok(ast::TypeCondition {
            name,
            span: self.make_span(start_span),
        })
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value(
        &mut self,
        const_context: ConstContext,
    ) -> Result<ast::Value<'src>, GraphQLSyntaxError> {
        let token = self.consume_token()?;
        match token.kind {
            GraphQLTokenKind::IntValue(raw) => {
                Ok(ast::Value::Int(ast::IntValue {
                    raw,
                    span: token.span,
                }))
            },
            GraphQLTokenKind::FloatValue { raw, format } => {
                Ok(ast::Value::Float(ast::FloatValue {
                    raw,
                    format,
                    span: token.span,
                }))
            },
            GraphQLTokenKind::StringValue { value, block } => {
                Ok(ast::Value::String(ast::StringValue {
                    value,
                    block,
                    span: token.span,
                }))
            },
            GraphQLTokenKind::True => {
                Ok(ast::Value::Boolean(ast::BooleanValue {
                    value: true,
                    span: token.span,
                }))
            },
            GraphQLTokenKind::False => {
                Ok(ast::Value::Boolean(ast::BooleanValue {
                    value: false,
                    span: token.span,
                }))
            },
            GraphQLTokenKind::Null => Ok(ast::Value::Null(ast::NullValue {
                span: token.span,
            })),
            GraphQLTokenKind::Name(name) => {
                Ok(ast::Value::Enum(ast::EnumValue {
                    value: name,
                    span: token.span,
                }))
            },
            GraphQLTokenKind::Dollar => {
                if const_context.forbids_variables() {
                    let mut error = GraphQLSyntaxError::new(
                        "variables are not allowed here",
                        token.span,
                        GraphQLSyntaxErrorKind::UnexpectedToken {
                            expected: vec!["value".to_string()],
                            found: "$".to_string(),
                        },
                    );
                    error.add_note(format!(
                        "{} must be constant",
                        const_context.description(),
                    ));
                    return Err(error);
                }
                let name = self.expect_name()?;
                Ok(ast::Value::Variable(ast::VariableValue {
                    name,
                    span: self.make_span(token.span),
                }))
            },
            GraphQLTokenKind::SquareBracketOpen => {
                let mut values = Vec::new();
                while !self.peek_is(&GraphQLTokenKind::SquareBracketClose)? {
                    values.push(self.parse_value(const_context)?);
                }
                self.expect(&GraphQLTokenKind::SquareBracketClose)?;
                Ok(ast::Value::List(ast::ListValue {
                    values,
                    span: self.make_span(token.span),
                }))
            },
            GraphQLTokenKind::CurlyBraceOpen => {
                let mut fields = Vec::new();
                while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
                    let field_start = self.peek_span()?;
                    let name = self.expect_name()?;
                    self.expect(&GraphQLTokenKind::Colon)?;
                    let value = self.parse_value(const_context)?;
                    fields.push(ast::ObjectField {
                        name,
                        value,
                        span: self.make_span(field_start),
                    });
                }
                self.expect(&GraphQLTokenKind::CurlyBraceClose)?;
                Ok(ast::Value::Object(ast::ObjectValue {
                    fields,
                    span: self.make_span(token.span),
                }))
            },
            other => {
                let expected = vec!["value".to_string()];
                if matches!(other, GraphQLTokenKind::Eof) {
                    Err(GraphQLSyntaxError::new(
                        "expected a value, found end of input",
                        token.span,
                        GraphQLSyntaxErrorKind::UnexpectedEof { expected },
                    ))
                } else {
                    let found = Self::token_kind_display(&other);
                    Err(GraphQLSyntaxError::new(
                        format!("expected a value, found `{found}`"),
                        token.span,
                        GraphQLSyntaxErrorKind::UnexpectedToken {
                            expected,
                            found,
                        },
                    ))
                }
            },
        }
    }

    // =========================================================================
    // Type annotations
    // =========================================================================

    fn parse_type_annotation(
        &mut self,
    ) -> Result<ast::TypeAnnotation<'src>, GraphQLSyntaxError> {
        let start_span = self.peek_span()?;
        let base = if self.peek_is(&GraphQLTokenKind::SquareBracketOpen)? {
            self.consume_token()?;
            let inner = self.parse_type_annotation()?;
            self.expect(&GraphQLTokenKind::SquareBracketClose)?;
            ast::TypeAnnotation::List(ast::ListTypeAnnotation {
                inner: Box::new(inner),
                span: self.make_span(start_span.clone()),
            })
        } else {
            let name = self.expect_name()?;
            ast::TypeAnnotation::Named(ast::NamedTypeAnnotation {
                span: name.span.clone(),
                name,
            })
        };

        if !self.peek_is(&GraphQLTokenKind::Bang)? {
            return Ok(base);
        }
        self.consume_token()?;
        if self.peek_is(&GraphQLTokenKind::Bang)? {
            let span = self.peek_span()?;
            let mut error = GraphQLSyntaxError::new(
                "`!` cannot be applied to a type that is already non-null",
                span,
                GraphQLSyntaxErrorKind::InvalidNonNull,
            );
            error.add_help("remove the extra `!`");
            return Err(error);
        }
        Ok(ast::TypeAnnotation::NonNull(ast::NonNullTypeAnnotation {
            inner: Box::new(base),
            span: self.make_span(start_span),
        }))
    }

    // =========================================================================
    // Directive annotations
    // =========================================================================

    fn parse_directive_annotations(
        &mut self,
        const_context: ConstContext,
    ) -> Result<Vec<ast::DirectiveAnnotation<'src>>, GraphQLSyntaxError> {
        let mut directives = Vec::new();
        while self.peek_is(&GraphQLTokenKind::At)? {
            directives.push(self.parse_directive_annotation(const_context)?);
        }
        Ok(directives)
    }

    fn parse_directive_annotation(
        &mut self,
        const_context: ConstContext,
    ) -> Result<ast::DirectiveAnnotation<'src>, GraphQLSyntaxError> {
        let start_span = self.peek_span()?;
        self.expect(&GraphQLTokenKind::At)?;
        let name = self.expect_name()?;
        let arguments = if self.peek_is(&GraphQLTokenKind::ParenOpen)? {
            self.parse_arguments(const_context)?
        } else {
            Vec::new()
        };
        Ok(ast::DirectiveAnnotation {
            name,
            arguments,
            span: self.make_span(start_span),
        })
    }

    fn parse_arguments(
        &mut self,
        const_context: ConstContext,
    ) -> Result<Vec<ast::Argument<'src>>, GraphQLSyntaxError> {
        self.expect(&GraphQLTokenKind::ParenOpen)?;
        if self.peek_is(&GraphQLTokenKind::ParenClose)? {
            // `field()` — argument lists must be non-empty when present
            return Err(self.unexpected_token(vec!["argument".to_string()]));
        }

        let mut arguments = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::ParenClose)? {
            let start_span = self.peek_span()?;
            let name = self.expect_name()?;
            self.expect(&GraphQLTokenKind::Colon)?;
            let value = self.parse_value(const_context)?;
            arguments.push(ast::Argument {
                name,
                value,
                span: self.make_span(start_span),
            });
        }
        self.expect(&GraphQLTokenKind::ParenClose)?;
        Ok(arguments)
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    fn parse_description(
        &mut self,
    ) -> Result<Option<ast::Description<'src>>, GraphQLSyntaxError> {
        if !self.peek_is(&GraphQLTokenKind::StringValue {
            value: Cow::Borrowed(""),
            block: false,
        })? {
            return Ok(None);
        }
        let token = self.consume_token()?;
        match token.kind {
            GraphQLTokenKind::StringValue { value, block } => {
                Ok(Some(ast::Description {
                    value,
                    block,
                    span: token.span,
                }))
            },
            _ => unreachable!("parse_description: non-string after peek"),
        }
    }

    fn parse_schema_definition(
        &mut self,
        description: Option<ast::Description<'src>>,
    ) -> Result<ast::SchemaDefinition<'src>, GraphQLSyntaxError> {
        let start_span = self.described_start_span(&description)?;
        self.expect_keyword(Keyword::Schema)?;
        let directives =
            self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        let root_operation_types = self.parse_root_operation_types()?;
        Ok(ast::SchemaDefinition {
            description,
            directives,
            root_operation_types,
            span: self.make_span(start_span),
        })
    }

    fn parse_root_operation_types(
        &mut self,
    ) -> Result<Vec<ast::RootOperationTypeDefinition<'src>>, GraphQLSyntaxError>
    {
        self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            return Err(self
                .unexpected_token(vec!["root operation type".to_string()]));
        }

        let mut root_operation_types = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            root_operation_types.push(self.parse_root_operation_type()?);
        }
        self.expect(&GraphQLTokenKind::CurlyBraceClose)?;
        Ok(root_operation_types)
    }

    fn parse_root_operation_type(
        &mut self,
    ) -> Result<ast::RootOperationTypeDefinition<'src>, GraphQLSyntaxError>
    {
        let start_span = self.peek_span()?;
        let operation_kind = match self.peek_keyword()? {
            Some(Keyword::Query) => ast::OperationKind::Query,
            Some(Keyword::Mutation) => ast::OperationKind::Mutation,
            Some(Keyword::Subscription) => ast::OperationKind::Subscription,
            _ => {
                return Err(self.unexpected_token(vec![
                    "query".to_string(),
                    "mutation".to_string(),
                    "subscription".to_string(),
                ]));
            },
        };
        self.consume_token()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let named_type = self.expect_name()?;
        Ok(ast::RootOperationTypeDefinition {
            operation_kind,
            named_type,
            span: self.make_span(start_span),
        })
    }

    fn parse_type_definition(
        &mut self,
        description: Option<ast::Description<'src>>,
    ) -> Result<ast::TypeDefinition<'src>, GraphQLSyntaxError> {
        match self.peek_keyword()? {
            Some(Keyword::Scalar) => Ok(ast::TypeDefinition::Scalar(
                self.parse_scalar_type_definition(description)?,
            )),
            Some(Keyword::Type) => Ok(ast::TypeDefinition::Object(
                self.parse_object_type_definition(description)?,
            )),
            Some(Keyword::Interface) => Ok(ast::TypeDefinition::Interface(
                self.parse_interface_type_definition(description)?,
            )),
            Some(Keyword::Union) => Ok(ast::TypeDefinition::Union(
                self.parse_union_type_definition(description)?,
            )),
            Some(Keyword::Enum) => Ok(ast::TypeDefinition::Enum(
                self.parse_enum_type_definition(description)?,
            )),
            Some(Keyword::Input) => Ok(ast::TypeDefinition::InputObject(
                self.parse_input_object_type_definition(description)?,
            )),
            _ => Err(self.unexpected_token(vec![
                "scalar".to_string(),
                "type".to_string(),
                "interface".to_string(),
                "union".to_string(),
                "enum".to_string(),
                "input".to_string(),
            ])),
        }
    }

    fn parse_scalar_type_definition(
        &mut self,
        description: Option<ast::Description<'src>>,
    ) -> Result<ast::ScalarTypeDefinition<'src>, GraphQLSyntaxError> {
        let start_span = self.described_start_span(&description)?;
        self.expect_keyword(Keyword::Scalar)?;
        let name = self.expect_name()?;
        let directives =
            self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        Ok(ast::ScalarTypeDefinition {
            description,
            name,
            directives,
            span: self.make_span(start_span),
        })
    }

    fn parse_object_type_definition(
        &mut self,
        description: Option<ast::Description<'src>>,
    ) -> Result<ast::ObjectTypeDefinition<'src>, GraphQLSyntaxError> {
        let start_span = self.described_start_span(&description)?;
        self.expect_keyword(Keyword::Type)?;
        let name = self.expect_name()?;
        let interfaces = self.parse_optional_implements_interfaces()?;
        let directives =
            self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        let fields = self.parse_optional_fields_definition()?;
        Ok(ast::ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            span: self.make_span(start_span),
        })
    }

    fn parse_interface_type_definition(
        &mut self,
        description: Option<ast::Description<'src>>,
    ) -> Result<ast::InterfaceTypeDefinition<'src>, GraphQLSyntaxError> {
        let start_span = self.described_start_span(&description)?;
        self.expect_keyword(Keyword::Interface)?;
        let name = self.expect_name()?;
        let interfaces = self.parse_optional_implements_interfaces()?;
        let directives =
            self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        let fields = self.parse_optional_fields_definition()?;
        Ok(ast::InterfaceTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            span: self.make_span(start_span),
        })
    }

    fn parse_union_type_definition(
        &mut self,
        description: Option<ast::Description<'src>>,
    ) -> Result<ast::UnionTypeDefinition<'src>, GraphQLSyntaxError> {
        let start_span = self.described_start_span(&description)?;
        self.expect_keyword(Keyword::Union)?;
        let name = self.expect_name()?;
        let directives =
            self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        let members = if self.peek_is(&GraphQLTokenKind::Equals)? {
            self.parse_union_member_types()?
        } else {
            Vec::new()
        };
        Ok(ast::UnionTypeDefinition {
            description,
            name,
            directives,
            members,
            span: self.make_span(start_span),
        })
    }

    fn parse_union_member_types(
        &mut self,
    ) -> Result<Vec<ast::Name<'src>>, GraphQLSyntaxError> {
        self.expect(&GraphQLTokenKind::Equals)?;
        // Leading `|` is permitted: `union U = | A | B`
        if self.peek_is(&GraphQLTokenKind::Pipe)? {
            self.consume_token()?;
        }
        let mut members = vec![self.expect_name()?];
        while self.peek_is(&GraphQLTokenKind::Pipe)? {
            self.consume_token()?;
            members.push(self.expect_name()?);
        }
        Ok(members)
    }

    fn parse_enum_type_definition(
        &mut self,
        description: Option<ast::Description<'src>>,
    ) -> Result<ast::EnumTypeDefinition<'src>, GraphQLSyntaxError> {
        let start_span = self.described_start_span(&description)?;
        self.expect_keyword(Keyword::Enum)?;
        let name = self.expect_name()?;
        let directives =
            self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        let values = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            self.parse_enum_values_definition()?
        } else {
            Vec::new()
        };
        Ok(ast::EnumTypeDefinition {
            description,
            name,
            directives,
            values,
            span: self.make_span(start_span),
        })
    }

    fn parse_enum_values_definition(
        &mut self,
    ) -> Result<Vec<ast::EnumValueDefinition<'src>>, GraphQLSyntaxError> {
        self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            return Err(
                self.unexpected_token(vec!["enum value".to_string()])
            );
        }

        let mut values = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            values.push(self.parse_enum_value_definition()?);
        }
        self.expect(&GraphQLTokenKind::CurlyBraceClose)?;
        Ok(values)
    }

    fn parse_enum_value_definition(
        &mut self,
    ) -> Result<ast::EnumValueDefinition<'src>, GraphQLSyntaxError> {
        let description = self.parse_description()?;
        let start_span = self.described_start_span(&description)?;

        // `true`, `false`, and `null` are names, but not valid enum values
        let reserved = match &self.token_stream.peek()?.kind {
            GraphQLTokenKind::True => Some("true"),
            GraphQLTokenKind::False => Some("false"),
            GraphQLTokenKind::Null => Some("null"),
            _ => None,
        };
        if let Some(reserved) = reserved {
            let span = self.peek_span()?;
            let mut error = GraphQLSyntaxError::new(
                format!("enum value cannot be `{reserved}`"),
                span,
                GraphQLSyntaxErrorKind::ReservedName {
                    name: reserved.to_string(),
                    context: ReservedNameContext::EnumValue,
                },
            );
            error.add_note(
                "`true`, `false`, and `null` would be ambiguous with the \
                 corresponding value literals",
            );
            return Err(error);
        }

        let name = self.expect_name()?;
        let directives =
            self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        Ok(ast::EnumValueDefinition {
            description,
            name,
            directives,
            span: self.make_span(start_span),
        })
    }

    fn parse_input_object_type_definition(
        &mut self,
        description: Option<ast::Description<'src>>,
    ) -> Result<ast::InputObjectTypeDefinition<'src>, GraphQLSyntaxError> {
        let start_span = self.described_start_span(&description)?;
        self.expect_keyword(Keyword::Input)?;
        let name = self.expect_name()?;
        let directives =
            self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        let fields = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            self.parse_input_fields_definition()?
        } else {
            Vec::new()
        };
        Ok(ast::InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
            span: self.make_span(start_span),
        })
    }

    fn parse_optional_implements_interfaces(
        &mut self,
    ) -> Result<Vec<ast::Name<'src>>, GraphQLSyntaxError> {
        if !self.peek_is_keyword(Keyword::Implements)? {
            return Ok(Vec::new());
        }
        self.expect_keyword(Keyword::Implements)?;
        // Leading `&` is permitted: `implements & A & B`
        if self.peek_is(&GraphQLTokenKind::Ampersand)? {
            self.consume_token()?;
        }
        let mut interfaces = vec![self.expect_name()?];
        while self.peek_is(&GraphQLTokenKind::Ampersand)? {
            self.consume_token()?;
            interfaces.push(self.expect_name()?);
        }
        Ok(interfaces)
    }

    fn parse_optional_fields_definition(
        &mut self,
    ) -> Result<Vec<ast::FieldDefinition<'src>>, GraphQLSyntaxError> {
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            self.parse_fields_definition()
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_fields_definition(
        &mut self,
    ) -> Result<Vec<ast::FieldDefinition<'src>>, GraphQLSyntaxError> {
        self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            return Err(
                self.unexpected_token(vec!["field definition".to_string()])
            );
        }

        let mut fields = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            fields.push(self.parse_field_definition()?);
        }
        self.expect(&GraphQLTokenKind::CurlyBraceClose)?;
        Ok(fields)
    }

    fn parse_field_definition(
        &mut self,
    ) -> Result<ast::FieldDefinition<'src>, GraphQLSyntaxError> {
        let description = self.parse_description()?;
        let start_span = self.described_start_span(&description)?;
        let name = self.expect_name()?;
        let arguments = if self.peek_is(&GraphQLTokenKind::ParenOpen)? {
            self.parse_arguments_definition()?
        } else {
            Vec::new()
        };
        self.expect(&GraphQLTokenKind::Colon)?;
        let type_annotation = self.parse_type_annotation()?;
        let directives =
            self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        Ok(ast::FieldDefinition {
            description,
            name,
            arguments,
            type_annotation,
            directives,
            span: self.make_span(start_span),
        })
    }

    fn parse_arguments_definition(
        &mut self,
    ) -> Result<Vec<ast::InputValueDefinition<'src>>, GraphQLSyntaxError> {
        self.expect(&GraphQLTokenKind::ParenOpen)?;
        if self.peek_is(&GraphQLTokenKind::ParenClose)? {
            return Err(self
                .unexpected_token(vec!["argument definition".to_string()]));
        }

        let mut arguments = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::ParenClose)? {
            arguments.push(self.parse_input_value_definition()?);
        }
        self.expect(&GraphQLTokenKind::ParenClose)?;
        Ok(arguments)
    }

    fn parse_input_fields_definition(
        &mut self,
    ) -> Result<Vec<ast::InputValueDefinition<'src>>, GraphQLSyntaxError> {
        self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            return Err(self
                .unexpected_token(vec!["input field definition".to_string()]));
        }

        let mut fields = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            fields.push(self.parse_input_value_definition()?);
        }
        self.expect(&GraphQLTokenKind::CurlyBraceClose)?;
        Ok(fields)
    }

    fn parse_input_value_definition(
        &mut self,
    ) -> Result<ast::InputValueDefinition<'src>, GraphQLSyntaxError> {
        let description = self.parse_description()?;
        let start_span = self.described_start_span(&description)?;
        let name = self.expect_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let type_annotation = self.parse_type_annotation()?;
        let default_value = if self.peek_is(&GraphQLTokenKind::Equals)? {
            self.consume_token()?;
            Some(self.parse_value(ConstContext::InputDefaultValue)?)
        } else {
            None
        };
        let directives =
            self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        Ok(ast::InputValueDefinition {
            description,
            name,
            type_annotation,
            default_value,
            directives,
            span: self.make_span(start_span),
        })
    }

    // =========================================================================
    // Directive definitions
    // =========================================================================

    fn parse_directive_definition(
        &mut self,
        description: Option<ast::Description<'src>>,
    ) -> Result<ast::DirectiveDefinition<'src>, GraphQLSyntaxError> {
        let start_span = self.described_start_span(&description)?;
        self.expect_keyword(Keyword::Directive)?;
        self.expect(&GraphQLTokenKind::At)?;
        let name = self.expect_name()?;
        let arguments = if self.peek_is(&GraphQLTokenKind::ParenOpen)? {
            self.parse_arguments_definition()?
        } else {
            Vec::new()
        };
        let repeatable = if self.peek_is_keyword(Keyword::Repeatable)? {
            self.consume_token()?;
            true
        } else {
            false
        };
        self.expect_keyword(Keyword::On)?;
        let locations = self.parse_directive_locations()?;
        Ok(ast::DirectiveDefinition {
            description,
            name,
            arguments,
            repeatable,
            locations,
            span: self.make_span(start_span),
        })
    }

    fn parse_directive_locations(
        &mut self,
    ) -> Result<Vec<ast::DirectiveLocationAnnotation>, GraphQLSyntaxError>
    {
        // Leading `|` is permitted: `on | FIELD | INLINE_FRAGMENT`
        if self.peek_is(&GraphQLTokenKind::Pipe)? {
            self.consume_token()?;
        }
        let mut locations = vec![self.parse_directive_location()?];
        while self.peek_is(&GraphQLTokenKind::Pipe)? {
            self.consume_token()?;
            locations.push(self.parse_directive_location()?);
        }
        Ok(locations)
    }

    fn parse_directive_location(
        &mut self,
    ) -> Result<ast::DirectiveLocationAnnotation, GraphQLSyntaxError> {
        let name = self.expect_name()?;
        match ast::DirectiveLocation::from_name(&name.value) {
            Some(location) => Ok(ast::DirectiveLocationAnnotation {
                location,
                span: name.span,
            }),
            None => {
                let mut error = GraphQLSyntaxError::new(
                    format!("invalid directive location `{}`", name.value),
                    name.span,
                    GraphQLSyntaxErrorKind::InvalidDirectiveLocation {
                        name: name.value.to_string(),
                    },
                );
                error.add_help(
                    "directive locations are the SCREAMING_SNAKE_CASE names \
                     from the GraphQL spec, e.g. `FIELD_DEFINITION` or \
                     `INLINE_FRAGMENT`",
                );
                Err(error)
            },
        }
    }

    // =========================================================================
    // Type extensions
    // =========================================================================

    fn parse_extension(
        &mut self,
    ) -> Result<ast::Definition<'src>, GraphQLSyntaxError> {
        let start_span = self.peek_span()?;
        self.expect_keyword(Keyword::Extend)?;
        match self.peek_keyword()? {
            Some(Keyword::Schema) => Ok(ast::Definition::SchemaExtension(
                self.parse_schema_extension(start_span)?,
            )),
            Some(Keyword::Scalar) => {
                Ok(ast::Definition::TypeExtension(ast::TypeExtension::Scalar(
                    self.parse_scalar_type_extension(start_span)?,
                )))
            },
            Some(Keyword::Type) => {
                Ok(ast::Definition::TypeExtension(ast::TypeExtension::Object(
                    self.parse_object_type_extension(start_span)?,
                )))
            },
            Some(Keyword::Interface) => Ok(ast::Definition::TypeExtension(
                ast::TypeExtension::Interface(
                    self.parse_interface_type_extension(start_span)?,
                ),
            )),
            Some(Keyword::Union) => {
                Ok(ast::Definition::TypeExtension(ast::TypeExtension::Union(
                    self.parse_union_type_extension(start_span)?,
                )))
            },
            Some(Keyword::Enum) => {
                Ok(ast::Definition::TypeExtension(ast::TypeExtension::Enum(
                    self.parse_enum_type_extension(start_span)?,
                )))
            },
            Some(Keyword::Input) => Ok(ast::Definition::TypeExtension(
                ast::TypeExtension::InputObject(
                    self.parse_input_object_type_extension(start_span)?,
                ),
            )),
            _ => Err(self.unexpected_token(vec![
                "schema".to_string(),
                "scalar".to_string(),
                "type".to_string(),
                "interface".to_string(),
                "union".to_string(),
                "enum".to_string(),
                "input".to_string(),
            ])),
        }
    }

    /// Builds the error for an `extend` form that adds nothing.
    fn empty_type_extension_error(
        &self,
        span: GraphQLSourceSpan,
        may_add: &str,
    ) -> GraphQLSyntaxError {
        let mut error = GraphQLSyntaxError::new(
            "this extension does not extend anything",
            span,
            GraphQLSyntaxErrorKind::EmptyTypeExtension,
        );
        error.add_help(format!("add {may_add}"));
        error
    }

    fn parse_schema_extension(
        &mut self,
        start_span: GraphQLSourceSpan,
    ) -> Result<ast::SchemaExtension<'src>, GraphQLSyntaxError> {
        self.expect_keyword(Keyword::Schema)?;
        let directives =
            self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        let root_operation_types =
            if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
                self.parse_root_operation_types()?
            } else {
                Vec::new()
            };
        if directives.is_empty() && root_operation_types.is_empty() {
            return Err(self.empty_type_extension_error(
                self.make_span(start_span),
                "directives or root operation types",
            ));
        }
        Ok(ast::SchemaExtension {
            directives,
            root_operation_types,
            span: self.make_span(start_span),
        })
    }

    fn parse_scalar_type_extension(
        &mut self,
        start_span: GraphQLSourceSpan,
    ) -> Result<ast::ScalarTypeExtension<'src>, GraphQLSyntaxError> {
        self.expect_keyword(Keyword::Scalar)?;
        let name = self.expect_name()?;
        let directives =
            self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        if directives.is_empty() {
            return Err(self.empty_type_extension_error(
                self.make_span(start_span),
                "directives",
            ));
        }
        Ok(ast::ScalarTypeExtension {
            name,
            directives,
            span: self.make_span(start_span),
        })
    }

    fn parse_object_type_extension(
        &mut self,
        start_span: GraphQLSourceSpan,
    ) -> Result<ast::ObjectTypeExtension<'src>, GraphQLSyntaxError> {
        self.expect_keyword(Keyword::Type)?;
        let name = self.expect_name()?;
        let interfaces = self.parse_optional_implements_interfaces()?;
        let directives =
            self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        let fields = self.parse_optional_fields_definition()?;
        if interfaces.is_empty() && directives.is_empty() && fields.is_empty()
        {
            return Err(self.empty_type_extension_error(
                self.make_span(start_span),
                "interfaces, directives, or fields",
            ));
        }
        Ok(ast::ObjectTypeExtension {
            name,
            interfaces,
            directives,
            fields,
            span: self.make_span(start_span),
        })
    }

    fn parse_interface_type_extension(
        &mut self,
        start_span: GraphQLSourceSpan,
    ) -> Result<ast::InterfaceTypeExtension<'src>, GraphQLSyntaxError> {
        self.expect_keyword(Keyword::Interface)?;
        let name = self.expect_name()?;
        let interfaces = self.parse_optional_implements_interfaces()?;
        let directives =
            self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        let fields = self.parse_optional_fields_definition()?;
        if interfaces.is_empty() && directives.is_empty() && fields.is_empty()
        {
            return Err(self.empty_type_extension_error(
                self.make_span(start_span),
                "interfaces, directives, or fields",
            ));
        }
        Ok(ast::InterfaceTypeExtension {
            name,
            interfaces,
            directives,
            fields,
            span: self.make_span(start_span),
        })
    }

    fn parse_union_type_extension(
        &mut self,
        start_span: GraphQLSourceSpan,
    ) -> Result<ast::UnionTypeExtension<'src>, GraphQLSyntaxError> {
        self.expect_keyword(Keyword::Union)?;
        let name = self.expect_name()?;
        let directives =
            self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        let members = if self.peek_is(&GraphQLTokenKind::Equals)? {
            self.parse_union_member_types()?
        } else {
            Vec::new()
        };
        if directives.is_empty() && members.is_empty() {
            return Err(self.empty_type_extension_error(
                self.make_span(start_span),
                "directives or member types",
            ));
        }
        Ok(ast::UnionTypeExtension {
            name,
            directives,
            members,
            span: self.make_span(start_span),
        })
    }

    fn parse_enum_type_extension(
        &mut self,
        start_span: GraphQLSourceSpan,
    ) -> Result<ast::EnumTypeExtension<'src>, GraphQLSyntaxError> {
        self.expect_keyword(Keyword::Enum)?;
        let name = self.expect_name()?;
        let directives =
            self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        let values = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            self.parse_enum_values_definition()?
        } else {
            Vec::new()
        };
        if directives.is_empty() && values.is_empty() {
            return Err(self.empty_type_extension_error(
                self.make_span(start_span),
                "directives or enum values",
            ));
        }
        Ok(ast::EnumTypeExtension {
            name,
            directives,
            values,
            span: self.make_span(start_span),
        })
    }

    fn parse_input_object_type_extension(
        &mut self,
        start_span: GraphQLSourceSpan,
    ) -> Result<ast::InputObjectTypeExtension<'src>, GraphQLSyntaxError> {
        self.expect_keyword(Keyword::Input)?;
        let name = self.expect_name()?;
        let directives =
            self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        let fields = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            self.parse_input_fields_definition()?
        } else {
            Vec::new()
        };
        if directives.is_empty() && fields.is_empty() {
            return Err(self.empty_type_extension_error(
                self.make_span(start_span),
                "directives or input fields",
            ));
        }
        Ok(ast::InputObjectTypeExtension {
            name,
            directives,
            fields,
            span: self.make_span(start_span),
        })
    }
}
