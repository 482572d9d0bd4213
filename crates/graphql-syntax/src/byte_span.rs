/// Compact byte-offset span. 8 bytes per value.
///
/// Represents a half-open interval `[start, end)` of byte offsets into the
/// source text. Both offsets are 0-based.
///
/// `u32` offsets support documents up to 4 GiB, which is far more than any
/// GraphQL document encountered in practice.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[repr(C)]
pub struct ByteSpan {
    /// Byte offset of the first byte of the span (0-based, inclusive).
    pub start: u32,
    /// Byte offset one past the last byte of the span (0-based, exclusive).
    pub end: u32,
}

impl ByteSpan {
    /// Creates a new `ByteSpan` from start (inclusive) and end (exclusive)
    /// byte offsets.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if this span overlaps the half-open interval
    /// `[start, start + length)`.
    pub fn overlaps_range(&self, start: u32, length: u32) -> bool {
        self.start < start.saturating_add(length) && self.end > start
    }
}
