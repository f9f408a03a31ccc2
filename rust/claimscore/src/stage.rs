//! The three pipeline stages a report covers.

use std::fmt;

/// A granularity at which the pipeline is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Only the choice of documents matters; sentences are taken from gold.
    DocumentRetrieval,
    /// Retrieved sentences must cover a full evidence set, labels from gold.
    SentenceRetrieval,
    /// Retrieved sentences with predicted labels.
    FullPipeline,
}

impl Stage {
    pub const ALL: [Stage; 3] = [
        Stage::DocumentRetrieval,
        Stage::SentenceRetrieval,
        Stage::FullPipeline,
    ];

    /// Human-readable name used in the text report.
    pub fn title(self) -> &'static str {
        match self {
            Stage::DocumentRetrieval => "Document Retrieval",
            Stage::SentenceRetrieval => "Sentence Retrieval",
            Stage::FullPipeline => "Full pipeline",
        }
    }

    /// Key used in the JSON report.
    pub fn key(self) -> &'static str {
        match self {
            Stage::DocumentRetrieval => "document_retrieval",
            Stage::SentenceRetrieval => "sentence_retrieval",
            Stage::FullPipeline => "full_pipeline",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
