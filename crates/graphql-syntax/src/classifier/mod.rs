//! Grammar-aware syntax classification for editor tooling.

mod classifier_scan;
mod syntax_classification;
mod syntax_classifier;

pub(crate) use classifier_scan::ClassifierScan;
pub use syntax_classification::SyntaxClassification;
pub use syntax_classification::SyntaxClassificationKind;
pub use syntax_classifier::SyntaxClassifier;
