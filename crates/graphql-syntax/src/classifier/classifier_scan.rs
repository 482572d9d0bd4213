//! The lightweight grammar scan behind [`SyntaxClassifier`].
//!
//! Shares the lexer with the parser but builds no AST: it walks the token
//! stream in grammar order and appends one classification per construct it
//! recognizes. Where the parser enforces well-formedness rules (non-empty
//! constructs, reserved names, `!!`), the scan stays lenient — its job is
//! to classify as much as possible, and any error it does hit is swallowed
//! by the caller anyway.
//!
//! [`SyntaxClassifier`]: crate::SyntaxClassifier

use crate::classifier::SyntaxClassification;
use crate::classifier::SyntaxClassificationKind;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTriviaToken;
use crate::token_source::GraphQLTokenSource;
use crate::GraphQLSourceSpan;
use crate::GraphQLSyntaxError;
use crate::GraphQLSyntaxErrorKind;
use crate::GraphQLTokenStream;
use crate::Keyword;

pub(crate) struct ClassifierScan<'src, 'sink, TTokenSource>
where
    TTokenSource: GraphQLTokenSource<'src>,
{
    token_stream: GraphQLTokenStream<'src, TTokenSource>,

    /// Classifications appended so far. Borrowed from the classifier so
    /// that everything appended before a mid-scan failure survives.
    sink: &'sink mut Vec<SyntaxClassification>,
}

impl<'src, 'sink, TTokenSource: GraphQLTokenSource<'src>>
    ClassifierScan<'src, 'sink, TTokenSource>
{
    pub(crate) fn new(
        token_source: TTokenSource,
        sink: &'sink mut Vec<SyntaxClassification>,
    ) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            sink,
        }
    }

    /// Scans the whole document, appending classifications in ascending
    /// source order until end of input or the first error.
    pub(crate) fn run(&mut self) -> Result<(), GraphQLSyntaxError> {
        while !self.token_stream.is_at_end()? {
            self.scan_definition()?;
        }
        // Trailing comments and commas ride on the Eof token.
        let eof = self.token_stream.consume()?;
        self.classify_trivia(&eof);
        Ok(())
    }

    // =========================================================================
    // Emission helpers
    // =========================================================================

    fn push(&mut self, span: &GraphQLSourceSpan, kind: SyntaxClassificationKind) {
        let byte_span = span.byte_span();
        self.sink.push(SyntaxClassification {
            kind,
            start: byte_span.start,
            length: byte_span.end - byte_span.start,
        });
    }

    /// Classifies a token's preceding trivia: comments as `Comment`, commas
    /// as `Punctuation`.
    fn classify_trivia(&mut self, token: &GraphQLToken<'src>) {
        for trivia in token.preceding_trivia.clone() {
            match trivia {
                GraphQLTriviaToken::Comment { span, .. } => {
                    self.push(&span, SyntaxClassificationKind::Comment);
                },
                GraphQLTriviaToken::Comma { span } => {
                    self.push(&span, SyntaxClassificationKind::Punctuation);
                },
            }
        }
    }

    /// Consumes the next token, classifying its trivia and (unless it is
    /// `Eof`) the token itself as `kind`.
    fn consume_as(
        &mut self,
        kind: SyntaxClassificationKind,
    ) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        let token = self.token_stream.consume()?;
        self.classify_trivia(&token);
        if !matches!(token.kind, GraphQLTokenKind::Eof) {
            self.push(&token.span, kind);
        }
        Ok(token)
    }

    /// Expects the next token to match `kind` (payloads ignored) and
    /// classifies it as `Punctuation`.
    fn expect_punct(
        &mut self,
        kind: &GraphQLTokenKind,
    ) -> Result<(), GraphQLSyntaxError> {
        if !self.peek_is(kind)? {
            return Err(self.scan_error());
        }
        self.consume_as(SyntaxClassificationKind::Punctuation)?;
        Ok(())
    }

    /// Expects a name-ish token (`Name`, `true`, `false`, `null`) and
    /// classifies it as `kind`.
    fn expect_name_as(
        &mut self,
        kind: SyntaxClassificationKind,
    ) -> Result<(), GraphQLSyntaxError> {
        if !self.peek_is_name()? {
            return Err(self.scan_error());
        }
        self.consume_as(kind)?;
        Ok(())
    }

    /// Expects the given keyword and classifies it as `Keyword`.
    fn expect_keyword(
        &mut self,
        keyword: Keyword,
    ) -> Result<(), GraphQLSyntaxError> {
        if self.peek_keyword()? != Some(keyword) {
            return Err(self.scan_error());
        }
        self.consume_as(SyntaxClassificationKind::Keyword)?;
        Ok(())
    }

    /// Builds the terminal error for an unclassifiable token. The caller
    /// discards it along with the message, so this stays minimal.
    fn scan_error(&mut self) -> GraphQLSyntaxError {
        let token = match self.token_stream.peek() {
            Ok(token) => token,
            Err(error) => return error,
        };
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            GraphQLSyntaxError::new(
                "unexpected end of input",
                token.span.clone(),
                GraphQLSyntaxErrorKind::UnexpectedEof {
                    expected: Vec::new(),
                },
            )
        } else {
            GraphQLSyntaxError::new(
                "unexpected token",
                token.span.clone(),
                GraphQLSyntaxErrorKind::UnexpectedToken {
                    expected: Vec::new(),
                    found: token
                        .kind
                        .as_punctuator_str()
                        .unwrap_or("token")
                        .to_string(),
                },
            )
        }
    }

    // =========================================================================
    // Peek helpers
    // =========================================================================

    fn peek_is(
        &mut self,
        kind: &GraphQLTokenKind,
    ) -> Result<bool, GraphQLSyntaxError> {
        Ok(std::mem::discriminant(&self.token_stream.peek()?.kind)
            == std::mem::discriminant(kind))
    }

    fn peek_is_name(&mut self) -> Result<bool, GraphQLSyntaxError> {
        Ok(matches!(
            self.token_stream.peek()?.kind,
            GraphQLTokenKind::Name(_)
                | GraphQLTokenKind::True
                | GraphQLTokenKind::False
                | GraphQLTokenKind::Null,
        ))
    }

    fn peek_keyword(&mut self) -> Result<Option<Keyword>, GraphQLSyntaxError> {
        Ok(match &self.token_stream.peek()?.kind {
            GraphQLTokenKind::Name(name) => Keyword::from_name(name),
            _ => None,
        })
    }

    fn peek_is_keyword(
        &mut self,
        keyword: Keyword,
    ) -> Result<bool, GraphQLSyntaxError> {
        Ok(self.peek_keyword()? == Some(keyword))
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn scan_definition(&mut self) -> Result<(), GraphQLSyntaxError> {
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            return self.scan_selection_set();
        }
        if self.peek_is(&GraphQLTokenKind::StringValue {
            value: std::borrow::Cow::Borrowed(""),
            block: false,
        })? {
            self.consume_as(SyntaxClassificationKind::Description)?;
            return self.scan_type_system_definition();
        }
        match self.peek_keyword()? {
            Some(
                Keyword::Query | Keyword::Mutation | Keyword::Subscription,
            ) => self.scan_operation_definition(),
            Some(Keyword::Fragment) => self.scan_fragment_definition(),
            Some(Keyword::Extend) => self.scan_extension(),
            Some(_) => self.scan_type_system_definition(),
            None => Err(self.scan_error()),
        }
    }

    fn scan_type_system_definition(
        &mut self,
    ) -> Result<(), GraphQLSyntaxError> {
        match self.peek_keyword()? {
            Some(Keyword::Schema) => self.scan_schema_definition(),
            Some(Keyword::Scalar) => self.scan_scalar_definition(),
            Some(Keyword::Type | Keyword::Interface) => {
                self.scan_object_like_definition()
            },
            Some(Keyword::Union) => self.scan_union_definition(),
            Some(Keyword::Enum) => self.scan_enum_definition(),
            Some(Keyword::Input) => self.scan_input_definition(),
            Some(Keyword::Directive) => self.scan_directive_definition(),
            _ => Err(self.scan_error()),
        }
    }

    // =========================================================================
    // Operations and fragments
    // =========================================================================

    fn scan_operation_definition(
        &mut self,
    ) -> Result<(), GraphQLSyntaxError> {
        self.consume_as(SyntaxClassificationKind::Keyword)?;
        if self.peek_is_name()? {
            self.consume_as(SyntaxClassificationKind::OperationName)?;
        }
        if self.peek_is(&GraphQLTokenKind::ParenOpen)? {
            self.scan_variable_definitions()?;
        }
        self.scan_directives()?;
        self.scan_selection_set()
    }

    fn scan_variable_definitions(
        &mut self,
    ) -> Result<(), GraphQLSyntaxError> {
        self.expect_punct(&GraphQLTokenKind::ParenOpen)?;
        while !self.peek_is(&GraphQLTokenKind::ParenClose)? {
            self.expect_punct(&GraphQLTokenKind::Dollar)?;
            self.expect_name_as(SyntaxClassificationKind::VariableName)?;
            self.expect_punct(&GraphQLTokenKind::Colon)?;
            self.scan_type_annotation()?;
            if self.peek_is(&GraphQLTokenKind::Equals)? {
                self.expect_punct(&GraphQLTokenKind::Equals)?;
                self.scan_value()?;
            }
            self.scan_directives()?;
        }
        self.expect_punct(&GraphQLTokenKind::ParenClose)
    }

    fn scan_fragment_definition(
        &mut self,
    ) -> Result<(), GraphQLSyntaxError> {
        self.expect_keyword(Keyword::Fragment)?;
        self.expect_name_as(SyntaxClassificationKind::FragmentName)?;
        self.scan_type_condition()?;
        self.scan_directives()?;
        self.scan_selection_set()
    }

    fn scan_type_condition(&mut self) -> Result<(), GraphQLSyntaxError> {
        self.expect_keyword(Keyword::On)?;
        self.expect_name_as(SyntaxClassificationKind::TypeName)
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn scan_selection_set(&mut self) -> Result<(), GraphQLSyntaxError> {
        self.expect_punct(&GraphQLTokenKind::CurlyBraceOpen)?;
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            self.scan_selection()?;
        }
        self.expect_punct(&GraphQLTokenKind::CurlyBraceClose)
    }

    fn scan_selection(&mut self) -> Result<(), GraphQLSyntaxError> {
        if self.peek_is(&GraphQLTokenKind::Ellipsis)? {
            self.expect_punct(&GraphQLTokenKind::Ellipsis)?;
            let is_inline = self.peek_is_keyword(Keyword::On)?
                || self.peek_is(&GraphQLTokenKind::At)?
                || self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)?;
            if is_inline {
                if self.peek_is_keyword(Keyword::On)? {
                    self.scan_type_condition()?;
                }
                self.scan_directives()?;
                self.scan_selection_set()
            } else {
                self.expect_name_as(SyntaxClassificationKind::FragmentName)?;
                self.scan_directives()
            }
        } else {
            self.scan_field()
        }
    }

    fn scan_field(&mut self) -> Result<(), GraphQLSyntaxError> {
        if !self.peek_is_name()? {
            return Err(self.scan_error());
        }
        let has_alias = matches!(
            self.token_stream.peek_nth(1)?.kind,
            GraphQLTokenKind::Colon,
        );
        if has_alias {
            self.expect_name_as(SyntaxClassificationKind::AliasName)?;
            self.expect_punct(&GraphQLTokenKind::Colon)?;
        }
        self.expect_name_as(SyntaxClassificationKind::FieldName)?;
        if self.peek_is(&GraphQLTokenKind::ParenOpen)? {
            self.scan_arguments()?;
        }
        self.scan_directives()?;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            self.scan_selection_set()?;
        }
        Ok(())
    }

    fn scan_arguments(&mut self) -> Result<(), GraphQLSyntaxError> {
        self.expect_punct(&GraphQLTokenKind::ParenOpen)?;
        while !self.peek_is(&GraphQLTokenKind::ParenClose)? {
            self.expect_name_as(SyntaxClassificationKind::ArgumentName)?;
            self.expect_punct(&GraphQLTokenKind::Colon)?;
            self.scan_value()?;
        }
        self.expect_punct(&GraphQLTokenKind::ParenClose)
    }

    fn scan_directives(&mut self) -> Result<(), GraphQLSyntaxError> {
        while self.peek_is(&GraphQLTokenKind::At)? {
            self.expect_punct(&GraphQLTokenKind::At)?;
            self.expect_name_as(SyntaxClassificationKind::DirectiveName)?;
            if self.peek_is(&GraphQLTokenKind::ParenOpen)? {
                self.scan_arguments()?;
            }
        }
        Ok(())
    }

    // =========================================================================
    // Values and type annotations
    // =========================================================================

    fn scan_value(&mut self) -> Result<(), GraphQLSyntaxError> {
        let literal = match &self.token_stream.peek()?.kind {
            GraphQLTokenKind::IntValue(_) => {
                Some(SyntaxClassificationKind::IntLiteral)
            },
            GraphQLTokenKind::FloatValue { .. } => {
                Some(SyntaxClassificationKind::FloatLiteral)
            },
            GraphQLTokenKind::StringValue { .. } => {
                Some(SyntaxClassificationKind::StringLiteral)
            },
            GraphQLTokenKind::True | GraphQLTokenKind::False => {
                Some(SyntaxClassificationKind::BooleanLiteral)
            },
            GraphQLTokenKind::Null => {
                Some(SyntaxClassificationKind::NullLiteral)
            },
            GraphQLTokenKind::Name(_) => {
                Some(SyntaxClassificationKind::EnumValueName)
            },
            _ => None,
        };
        if let Some(literal) = literal {
            self.consume_as(literal)?;
            return Ok(());
        }

        if self.peek_is(&GraphQLTokenKind::Dollar)? {
            self.expect_punct(&GraphQLTokenKind::Dollar)?;
            return self
                .expect_name_as(SyntaxClassificationKind::VariableName);
        }
        if self.peek_is(&GraphQLTokenKind::SquareBracketOpen)? {
            self.expect_punct(&GraphQLTokenKind::SquareBracketOpen)?;
            while !self.peek_is(&GraphQLTokenKind::SquareBracketClose)? {
                self.scan_value()?;
            }
            return self.expect_punct(&GraphQLTokenKind::SquareBracketClose);
        }
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            self.expect_punct(&GraphQLTokenKind::CurlyBraceOpen)?;
            while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
                self.expect_name_as(SyntaxClassificationKind::FieldName)?;
                self.expect_punct(&GraphQLTokenKind::Colon)?;
                self.scan_value()?;
            }
            return self.expect_punct(&GraphQLTokenKind::CurlyBraceClose);
        }
        Err(self.scan_error())
    }

    fn scan_type_annotation(&mut self) -> Result<(), GraphQLSyntaxError> {
        if self.peek_is(&GraphQLTokenKind::SquareBracketOpen)? {
            self.expect_punct(&GraphQLTokenKind::SquareBracketOpen)?;
            self.scan_type_annotation()?;
            self.expect_punct(&GraphQLTokenKind::SquareBracketClose)?;
        } else {
            self.expect_name_as(SyntaxClassificationKind::TypeName)?;
        }
        if self.peek_is(&GraphQLTokenKind::Bang)? {
            self.expect_punct(&GraphQLTokenKind::Bang)?;
        }
        Ok(())
    }

    /// Classifies a description string when one starts the next construct.
    fn scan_optional_description(
        &mut self,
    ) -> Result<(), GraphQLSyntaxError> {
        if self.peek_is(&GraphQLTokenKind::StringValue {
            value: std::borrow::Cow::Borrowed(""),
            block: false,
        })? {
            self.consume_as(SyntaxClassificationKind::Description)?;
        }
        Ok(())
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    fn scan_schema_definition(&mut self) -> Result<(), GraphQLSyntaxError> {
        self.expect_keyword(Keyword::Schema)?;
        self.scan_directives()?;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            self.scan_root_operation_types()?;
        }
        Ok(())
    }

    fn scan_root_operation_types(
        &mut self,
    ) -> Result<(), GraphQLSyntaxError> {
        self.expect_punct(&GraphQLTokenKind::CurlyBraceOpen)?;
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            match self.peek_keyword()? {
                Some(
                    Keyword::Query
                    | Keyword::Mutation
                    | Keyword::Subscription,
                ) => {
                    self.consume_as(SyntaxClassificationKind::Keyword)?;
                },
                _ => return Err(self.scan_error()),
            }
            self.expect_punct(&GraphQLTokenKind::Colon)?;
            self.expect_name_as(SyntaxClassificationKind::TypeName)?;
        }
        self.expect_punct(&GraphQLTokenKind::CurlyBraceClose)
    }

    fn scan_scalar_definition(&mut self) -> Result<(), GraphQLSyntaxError> {
        self.expect_keyword(Keyword::Scalar)?;
        self.expect_name_as(SyntaxClassificationKind::TypeName)?;
        self.scan_directives()
    }

    /// `type` and `interface` definitions share a shape.
    fn scan_object_like_definition(
        &mut self,
    ) -> Result<(), GraphQLSyntaxError> {
        self.consume_as(SyntaxClassificationKind::Keyword)?;
        self.expect_name_as(SyntaxClassificationKind::TypeName)?;
        self.scan_optional_implements()?;
        self.scan_directives()?;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            self.scan_fields_definition()?;
        }
        Ok(())
    }

    fn scan_optional_implements(&mut self) -> Result<(), GraphQLSyntaxError> {
        if !self.peek_is_keyword(Keyword::Implements)? {
            return Ok(());
        }
        self.expect_keyword(Keyword::Implements)?;
        if self.peek_is(&GraphQLTokenKind::Ampersand)? {
            self.expect_punct(&GraphQLTokenKind::Ampersand)?;
        }
        self.expect_name_as(SyntaxClassificationKind::TypeName)?;
        while self.peek_is(&GraphQLTokenKind::Ampersand)? {
            self.expect_punct(&GraphQLTokenKind::Ampersand)?;
            self.expect_name_as(SyntaxClassificationKind::TypeName)?;
        }
        Ok(())
    }

    fn scan_fields_definition(&mut self) -> Result<(), GraphQLSyntaxError> {
        self.expect_punct(&GraphQLTokenKind::CurlyBraceOpen)?;
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            self.scan_optional_description()?;
            self.expect_name_as(SyntaxClassificationKind::FieldName)?;
            if self.peek_is(&GraphQLTokenKind::ParenOpen)? {
                self.scan_arguments_definition()?;
            }
            self.expect_punct(&GraphQLTokenKind::Colon)?;
            self.scan_type_annotation()?;
            self.scan_directives()?;
        }
        self.expect_punct(&GraphQLTokenKind::CurlyBraceClose)
    }

    fn scan_arguments_definition(
        &mut self,
    ) -> Result<(), GraphQLSyntaxError> {
        self.expect_punct(&GraphQLTokenKind::ParenOpen)?;
        while !self.peek_is(&GraphQLTokenKind::ParenClose)? {
            self.scan_optional_description()?;
            self.expect_name_as(SyntaxClassificationKind::ArgumentName)?;
            self.expect_punct(&GraphQLTokenKind::Colon)?;
            self.scan_type_annotation()?;
            if self.peek_is(&GraphQLTokenKind::Equals)? {
                self.expect_punct(&GraphQLTokenKind::Equals)?;
                self.scan_value()?;
            }
            self.scan_directives()?;
        }
        self.expect_punct(&GraphQLTokenKind::ParenClose)
    }

    fn scan_union_definition(&mut self) -> Result<(), GraphQLSyntaxError> {
        self.expect_keyword(Keyword::Union)?;
        self.expect_name_as(SyntaxClassificationKind::TypeName)?;
        self.scan_directives()?;
        if self.peek_is(&GraphQLTokenKind::Equals)? {
            self.expect_punct(&GraphQLTokenKind::Equals)?;
            if self.peek_is(&GraphQLTokenKind::Pipe)? {
                self.expect_punct(&GraphQLTokenKind::Pipe)?;
            }
            self.expect_name_as(SyntaxClassificationKind::TypeName)?;
            while self.peek_is(&GraphQLTokenKind::Pipe)? {
                self.expect_punct(&GraphQLTokenKind::Pipe)?;
                self.expect_name_as(SyntaxClassificationKind::TypeName)?;
            }
        }
        Ok(())
    }

    fn scan_enum_definition(&mut self) -> Result<(), GraphQLSyntaxError> {
        self.expect_keyword(Keyword::Enum)?;
        self.expect_name_as(SyntaxClassificationKind::TypeName)?;
        self.scan_directives()?;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            self.scan_enum_values_definition()?;
        }
        Ok(())
    }

    fn scan_enum_values_definition(
        &mut self,
    ) -> Result<(), GraphQLSyntaxError> {
        self.expect_punct(&GraphQLTokenKind::CurlyBraceOpen)?;
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            self.scan_optional_description()?;
            self.expect_name_as(SyntaxClassificationKind::EnumValueName)?;
            self.scan_directives()?;
        }
        self.expect_punct(&GraphQLTokenKind::CurlyBraceClose)
    }

    fn scan_input_definition(&mut self) -> Result<(), GraphQLSyntaxError> {
        self.expect_keyword(Keyword::Input)?;
        self.expect_name_as(SyntaxClassificationKind::TypeName)?;
        self.scan_directives()?;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            self.scan_input_fields_definition()?;
        }
        Ok(())
    }

    fn scan_input_fields_definition(
        &mut self,
    ) -> Result<(), GraphQLSyntaxError> {
        self.expect_punct(&GraphQLTokenKind::CurlyBraceOpen)?;
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            self.scan_optional_description()?;
            self.expect_name_as(SyntaxClassificationKind::FieldName)?;
            self.expect_punct(&GraphQLTokenKind::Colon)?;
            self.scan_type_annotation()?;
            if self.peek_is(&GraphQLTokenKind::Equals)? {
                self.expect_punct(&GraphQLTokenKind::Equals)?;
                self.scan_value()?;
            }
            self.scan_directives()?;
        }
        self.expect_punct(&GraphQLTokenKind::CurlyBraceClose)
    }

    fn scan_directive_definition(
        &mut self,
    ) -> Result<(), GraphQLSyntaxError> {
        self.expect_keyword(Keyword::Directive)?;
        self.expect_punct(&GraphQLTokenKind::At)?;
        self.expect_name_as(SyntaxClassificationKind::DirectiveName)?;
        if self.peek_is(&GraphQLTokenKind::ParenOpen)? {
            self.scan_arguments_definition()?;
        }
        if self.peek_is_keyword(Keyword::Repeatable)? {
            self.consume_as(SyntaxClassificationKind::Keyword)?;
        }
        self.expect_keyword(Keyword::On)?;
        if self.peek_is(&GraphQLTokenKind::Pipe)? {
            self.expect_punct(&GraphQLTokenKind::Pipe)?;
        }
        self.expect_name_as(SyntaxClassificationKind::EnumValueName)?;
        while self.peek_is(&GraphQLTokenKind::Pipe)? {
            self.expect_punct(&GraphQLTokenKind::Pipe)?;
            self.expect_name_as(SyntaxClassificationKind::EnumValueName)?;
        }
        Ok(())
    }

    // =========================================================================
    // Extensions
    // =========================================================================

    fn scan_extension(&mut self) -> Result<(), GraphQLSyntaxError> {
        self.expect_keyword(Keyword::Extend)?;
        match self.peek_keyword()? {
            Some(Keyword::Schema) => self.scan_schema_definition(),
            Some(Keyword::Scalar) => self.scan_scalar_definition(),
            Some(Keyword::Type | Keyword::Interface) => {
                self.scan_object_like_definition()
            },
            Some(Keyword::Union) => self.scan_union_definition(),
            Some(Keyword::Enum) => self.scan_enum_definition(),
            Some(Keyword::Input) => self.scan_input_definition(),
            _ => Err(self.scan_error()),
        }
    }
}
