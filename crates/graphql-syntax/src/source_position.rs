/// Source position information produced by the lexer.
///
/// This is a pure data struct with no mutation methods. Lexers are
/// responsible for computing position values as they scan input.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col`: character count within the current line (characters, not bytes:
///   a 4-byte character still advances the column by 1)
/// - `byte_offset`: byte offset within the whole document
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    /// Line number (0-based: first line is 0)
    line: usize,

    /// Character count within current line (0-based: first position is 0)
    col: usize,

    /// Byte offset from start of document (0-based: first byte is 0)
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new `SourcePosition`.
    ///
    /// # Arguments
    /// - `line`: 0-based line number (0 = first line)
    /// - `col`: 0-based character count within the current line
    /// - `byte_offset`: 0-based byte offset from document start
    pub fn new(line: usize, col: usize, byte_offset: usize) -> Self {
        Self {
            line,
            col,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character count within the current line.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
