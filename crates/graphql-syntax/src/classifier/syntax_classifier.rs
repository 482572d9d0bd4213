use crate::classifier::ClassifierScan;
use crate::classifier::SyntaxClassification;
use crate::token_source::StrGraphQLTokenSource;

/// An incremental source of syntax classifications for editor tooling.
///
/// A `SyntaxClassifier` holds the classifications produced by its most
/// recent [`parse`](SyntaxClassifier::parse) call. `parse` never fails: on
/// malformed input it keeps every classification produced before the point
/// of failure, so partially-typed documents still highlight up to where
/// they stop making sense.
///
/// # Example
///
/// ```rust,ignore
/// use graphql_syntax::SyntaxClassifier;
///
/// let mut classifier = SyntaxClassifier::new();
/// classifier.parse("type Query { hello: String }");
/// for classification in classifier.get_syntax_classifications(0, 10) {
///     // ...
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct SyntaxClassifier {
    classifications: Vec<SyntaxClassification>,
}

impl SyntaxClassifier {
    /// Creates a classifier with no stored classifications.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans `source` and replaces the stored classifications with the
    /// result.
    ///
    /// The previous parse's classifications are discarded whether or not
    /// the scan reaches end of input; they never mix with the new ones.
    pub fn parse(&mut self, source: &str) {
        let mut sink = Vec::new();
        let mut scan = ClassifierScan::new(
            StrGraphQLTokenSource::new(source),
            &mut sink,
        );
        // A failed scan still leaves everything before the failure in the
        // sink; the error itself carries nothing the classifier reports.
        let _ = scan.run();
        self.classifications = sink;
    }

    /// All classifications from the most recent parse, in ascending source
    /// order.
    pub fn classifications(&self) -> &[SyntaxClassification] {
        &self.classifications
    }

    /// The classifications whose `[start, end]` byte range overlaps the
    /// window `[start, start + length]` (inclusive bounds on both sides),
    /// in ascending source order.
    pub fn get_syntax_classifications(
        &self,
        start: u32,
        length: u32,
    ) -> impl Iterator<Item = &SyntaxClassification> {
        self.classifications
            .iter()
            .filter(move |classification| {
                classification.overlaps_range(start, length)
            })
    }
}
