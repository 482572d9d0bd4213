use crate::GraphQLSourceSpan;

/// Append the source text for `span` to `sink` by slicing directly from
/// `source` via byte offsets (zero-copy, lossless).
pub(crate) fn append_span_source_slice(
    span: &GraphQLSourceSpan,
    sink: &mut String,
    source: &str,
) {
    let start = span.start_inclusive.byte_offset();
    let end = span.end_exclusive.byte_offset();
    debug_assert!(
        start <= end,
        "append_span_source_slice: inverted span (start {start} > end {end})",
    );
    debug_assert!(
        end <= source.len(),
        "append_span_source_slice: span byte range {}..{} exceeds source \
         length {}",
        start,
        end,
        source.len(),
    );
    sink.push_str(&source[start..end]);
}

/// Trait implemented by all AST node types. Provides source reconstruction
/// methods.
///
/// All AST node types implement this trait via `#[inherent] impl AstNode`,
/// giving each node both inherent methods (no trait import needed) and a
/// trait bound for generic utilities (error formatters, linters, etc.).
///
/// Since every node's span covers exactly the tokens consumed for its
/// production, reconstruction slices
/// `&source[span.start.byte_offset..span.end.byte_offset]` out of the
/// original source text. Zero allocation beyond the sink itself, and
/// lossless: trivia between the node's tokens is preserved verbatim.
pub trait AstNode {
    /// Append this node's source representation to `sink` by slicing
    /// `source` at this node's span.
    ///
    /// `source` must be the exact source text this node was parsed from;
    /// slicing an unrelated string yields garbage (or panics on
    /// out-of-bounds offsets in debug builds).
    fn append_source(&self, sink: &mut String, source: &str);

    /// Return this node as a source string.
    ///
    /// Convenience wrapper around [`append_source`](AstNode::append_source).
    fn to_source(&self, source: &str) -> String {
        let mut s = String::new();
        self.append_source(&mut s, source);
        s
    }
}

/// Implements [`AstNode`] for span-carrying node types.
///
/// `field:` variants slice at the node's public `span` field (`plain:` for
/// nodes without a `'src` lifetime); `method:` variants (enums) slice at
/// the span returned by the node's `span()` accessor.
macro_rules! impl_ast_node_source_slice {
    (field: $($node:ident),+ $(,)?) => {$(
        #[::inherent::inherent]
        impl crate::ast::AstNode for $node<'_> {
            pub fn append_source(&self, sink: &mut String, source: &str) {
                crate::ast::ast_node::append_span_source_slice(
                    &self.span, sink, source,
                );
            }
        }
    )+};
    (plain: $($node:ident),+ $(,)?) => {$(
        #[::inherent::inherent]
        impl crate::ast::AstNode for $node {
            pub fn append_source(&self, sink: &mut String, source: &str) {
                crate::ast::ast_node::append_span_source_slice(
                    &self.span, sink, source,
                );
            }
        }
    )+};
    (method: $($node:ident),+ $(,)?) => {$(
        #[::inherent::inherent]
        impl crate::ast::AstNode for $node<'_> {
            pub fn append_source(&self, sink: &mut String, source: &str) {
                crate::ast::ast_node::append_span_source_slice(
                    self.span(), sink, source,
                );
            }
        }
    )+};
}

pub(crate) use impl_ast_node_source_slice;
