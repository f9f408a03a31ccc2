//! Scoring tuples: the unit the scorer compares.
//!
//! Both kinds are keyed by `(claim_id, doc_id)` and carry a label. A gold
//! tuple holds the alternative evidence sets for its document; a prediction
//! tuple holds a flat sentence list whose length is its weight.

use std::collections::BTreeSet;

use crate::label::Label;
use crate::record::{ClaimId, DocId, EvidenceSet};

/// Gold annotation for one `(claim, document)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct GoldTuple {
    pub claim_id: ClaimId,
    pub doc_id: DocId,
    pub label: Label,
    pub evidence_sets: Vec<EvidenceSet>,
}

impl GoldTuple {
    /// Sentences this pair contributes to the recall denominator: the size
    /// of every evidence set, summed.
    pub fn weight(&self) -> usize {
        self.evidence_sets.iter().map(EvidenceSet::len).sum()
    }
}

/// One stage's prediction for a `(claim, document)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PredTuple {
    pub claim_id: ClaimId,
    pub doc_id: DocId,
    pub label: Label,
    pub sentences: Vec<usize>,
}

impl PredTuple {
    /// Sentences this prediction contributes to the precision denominator.
    /// Repeated indices count every time they appear.
    pub fn weight(&self) -> usize {
        self.sentences.len()
    }

    pub fn retrieved(&self) -> BTreeSet<usize> {
        self.sentences.iter().copied().collect()
    }
}
