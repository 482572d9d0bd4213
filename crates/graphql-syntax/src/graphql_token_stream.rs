//! Buffered token stream with bounded lookahead over a
//! [`GraphQLTokenSource`].

use std::collections::VecDeque;

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::GraphQLSourceSpan;
use crate::GraphQLSyntaxError;
use crate::SourcePosition;

/// Buffered token stream with bounded lookahead over a
/// [`GraphQLTokenSource`].
///
/// This structure accepts any [`GraphQLTokenSource`] and provides lookahead
/// capabilities while maintaining efficient streaming behavior. It
/// centralizes buffering, peeking, and lookahead logic.
///
/// Since trivia is already attached to tokens by the lexer, consumers can
/// simply call `peek()` and `consume()` without worrying about trivia.
///
/// # Terminal errors
///
/// The first lexical error from the underlying source is *latched*: every
/// subsequent `peek`/`consume` that would need to pull past the error
/// returns a clone of the same error. Tokens buffered before the error
/// remain accessible, which is what lets the classifier keep everything it
/// classified before a failure.
///
/// # Internal Buffer Management
///
/// Tokens are stored in a [`VecDeque`] ring buffer. Unconsumed tokens are
/// buffered at the back; `consume()` pops from the front and returns the
/// owned token via O(1) `pop_front()`. If a consumer reads past the `Eof`
/// token, further reads keep producing `Eof` tokens anchored at the end of
/// input.
pub struct GraphQLTokenStream<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_source: TTokenSource,

    /// Ring buffer of unconsumed tokens. Grows at the back via
    /// `ensure_buffer_has()`; consumed from the front via `pop_front()`.
    buffer: VecDeque<GraphQLToken<'src>>,

    /// The first lexical error, if one has occurred.
    latched_error: Option<GraphQLSyntaxError>,

    /// A trivia-free copy of the `Eof` token, used to satisfy reads past the
    /// end of the stream.
    eof_token: Option<GraphQLToken<'src>>,
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLTokenStream<'src, TTokenSource> {
    /// Creates a new token stream from a token source.
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            buffer: VecDeque::new(),
            latched_error: None,
            eof_token: None,
        }
    }

    /// Advance to the next token and return it as an owned value.
    pub fn consume(&mut self) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        self.ensure_buffer_has(1)?;
        Ok(self
            .buffer
            .pop_front()
            .expect("ensure_buffer_has(1) guarantees a buffered token"))
    }

    /// Peek at the next token without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Result<&GraphQLToken<'src>, GraphQLSyntaxError> {
        self.peek_nth(0)
    }

    /// Peek at the nth token ahead (0-indexed from the next unconsumed
    /// token).
    ///
    /// `peek_nth(0)` is equivalent to `peek()`. Fills the buffer up to `n+1`
    /// elements if needed.
    pub fn peek_nth(&mut self, n: usize) -> Result<&GraphQLToken<'src>, GraphQLSyntaxError> {
        self.ensure_buffer_has(n + 1)?;
        Ok(self
            .buffer
            .get(n)
            .expect("ensure_buffer_has(n + 1) guarantees n + 1 buffered tokens"))
    }

    /// Check if we've reached the end of the stream (the next token is
    /// `Eof`).
    pub fn is_at_end(&mut self) -> Result<bool, GraphQLSyntaxError> {
        Ok(matches!(self.peek()?.kind, GraphQLTokenKind::Eof))
    }

    /// Fill the buffer to ensure it has at least `count` unconsumed
    /// elements.
    ///
    /// Returns the latched lexical error if the buffer cannot be filled
    /// without pulling past it.
    fn ensure_buffer_has(&mut self, count: usize) -> Result<(), GraphQLSyntaxError> {
        while self.buffer.len() < count {
            if let Some(error) = &self.latched_error {
                return Err(error.clone());
            }
            match self.token_source.next() {
                Some(Ok(token)) => {
                    if matches!(token.kind, GraphQLTokenKind::Eof) {
                        self.eof_token = Some(GraphQLToken::new(
                            GraphQLTokenKind::Eof,
                            token.span.clone(),
                        ));
                    }
                    self.buffer.push_back(token);
                }
                Some(Err(error)) => {
                    self.latched_error = Some(error.clone());
                    return Err(error);
                }
                None => {
                    // Source exhausted: keep producing Eof tokens so that
                    // lookahead past the end is well defined.
                    let eof = self.eof_token.clone().unwrap_or_else(|| {
                        let zero = SourcePosition::new(0, 0, 0);
                        GraphQLToken::new(
                            GraphQLTokenKind::Eof,
                            GraphQLSourceSpan::new(zero.clone(), zero),
                        )
                    });
                    self.buffer.push_back(eof);
                }
            }
        }
        Ok(())
    }
}
