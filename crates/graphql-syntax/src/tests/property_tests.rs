//! Property tests over arbitrary inputs: the pipeline must never panic,
//! and its outputs must uphold ordering invariants regardless of input.

use crate::ast::AstNode;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLParser;
use crate::SyntaxClassifier;
use proptest::prelude::*;

proptest! {
    /// Lexing arbitrary input must never panic, and the byte spans of the
    /// produced tokens must be ascending and non-overlapping.
    #[test]
    fn lexer_spans_are_ordered(source in "\\PC*") {
        let mut prev_end = 0usize;
        for result in StrGraphQLTokenSource::new(&source) {
            let Ok(token) = result else { break };
            let start = token.span.start_inclusive.byte_offset();
            let end = token.span.end_exclusive.byte_offset();
            prop_assert!(start <= end);
            prop_assert!(start >= prev_end);
            prev_end = end;
        }
    }

    /// Parsing arbitrary input must never panic. Errors are fine.
    #[test]
    fn parser_never_panics(source in "\\PC*") {
        let _ = GraphQLParser::new(&source).parse_document();
    }

    /// The classifier must never fail and must produce ascending,
    /// non-overlapping classifications for any input.
    #[test]
    fn classifier_output_is_ordered(source in "\\PC*") {
        let mut classifier = SyntaxClassifier::new();
        classifier.parse(&source);
        let mut prev_end = 0u32;
        for classification in classifier.classifications() {
            prop_assert!(classification.start >= prev_end);
            prev_end = classification.end();
        }
    }

    /// Well-formed single-field shorthand queries parse, and the field
    /// reconstructs its own source text exactly.
    #[test]
    fn field_names_round_trip(name in "[_A-Za-z][_0-9A-Za-z]{0,20}") {
        prop_assume!(name != "true" && name != "false" && name != "null");
        let source = format!("{{ {name} }}");
        let doc = GraphQLParser::new(&source)
            .parse_document()
            .expect("single-field query must parse");
        prop_assert_eq!(
            doc.definitions[0].to_source(&source),
            source.as_str(),
        );
    }

    /// Classifying the same input twice must yield identical results.
    #[test]
    fn classifier_is_deterministic(source in "\\PC*") {
        let mut first = SyntaxClassifier::new();
        first.parse(&source);
        let mut second = SyntaxClassifier::new();
        second.parse(&source);
        prop_assert_eq!(
            first.classifications(),
            second.classifications(),
        );
    }
}
