//! Input records: the gold dataset and the two prediction streams.
//!
//! These mirror the newline-delimited JSON records the pipeline produces:
//!
//! ```text
//! dataset:            {"id": 1, "label": "SUPPORT", "evidence": {"3": [{"sentences": [1, 2]}]}}
//! sentence retrieval: {"claim_id": 1, "evidence": {"3": [1, 2, 6]}}
//! label prediction:   {"claim_id": 1, "labels": {"3": {"label": "SUPPORT"}}}
//! ```
//!
//! Document ids are kept as the raw map keys here and normalized to
//! [`DocId`] when tuples are built, so a malformed key is reported with the
//! claim it belongs to. Map keys keep their input order.

use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ScoreError;
use crate::label::Label;

/// Opaque claim identifier, shared by all three input streams.
///
/// JSON integers and strings are both accepted and compared by their
/// canonical text, so `7` and `"7"` name the same claim. A lookup keyed on
/// the raw JSON type would treat them as distinct; this one does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "RawClaimId")]
pub struct ClaimId(String);

impl ClaimId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClaimId {
    fn from(value: &str) -> Self {
        ClaimId(value.to_string())
    }
}

impl From<String> for ClaimId {
    fn from(value: String) -> Self {
        ClaimId(value)
    }
}

macro_rules! claim_id_from_integer {
    ($($int:ty),*) => {
        $(
            impl From<$int> for ClaimId {
                fn from(value: $int) -> Self {
                    ClaimId(value.to_string())
                }
            }
        )*
    };
}

claim_id_from_integer!(i32, i64, u32, u64, usize);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawClaimId {
    Integer(i64),
    Text(String),
}

impl From<RawClaimId> for ClaimId {
    fn from(raw: RawClaimId) -> Self {
        match raw {
            RawClaimId::Integer(value) => value.into(),
            RawClaimId::Text(value) => value.into(),
        }
    }
}

/// A document id normalized to integer form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocId(pub i64);

impl DocId {
    /// Normalize a document key from one of the claim's maps.
    pub fn parse(claim_id: &ClaimId, key: &str) -> Result<Self, ScoreError> {
        key.trim()
            .parse::<i64>()
            .map(DocId)
            .map_err(|error| ScoreError::InputFormat {
                context: format!("claim '{claim_id}', document '{key}'"),
                reason: format!("document id is not an integer ({error})"),
            })
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One alternative justification: sentences that jointly support or
/// contradict the claim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EvidenceSet {
    pub sentences: BTreeSet<usize>,
}

impl EvidenceSet {
    pub fn new(sentences: impl IntoIterator<Item = usize>) -> Self {
        EvidenceSet {
            sentences: sentences.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// True when `retrieved` contains every sentence of this set.
    pub fn is_covered_by(&self, retrieved: &BTreeSet<usize>) -> bool {
        self.sentences.is_subset(retrieved)
    }
}

/// A gold-annotated claim from the dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct Claim {
    pub id: ClaimId,
    pub label: Label,
    /// Evidence sets keyed by raw document id.
    #[serde(default)]
    pub evidence: IndexMap<String, Vec<EvidenceSet>>,
}

impl Claim {
    pub fn new(id: impl Into<ClaimId>, label: Label) -> Self {
        Claim {
            id: id.into(),
            label,
            evidence: IndexMap::new(),
        }
    }

    pub fn with_evidence<S, I>(mut self, doc: impl ToString, sets: S) -> Self
    where
        S: IntoIterator<Item = I>,
        I: IntoIterator<Item = usize>,
    {
        self.evidence.insert(
            doc.to_string(),
            sets.into_iter().map(EvidenceSet::new).collect(),
        );
        self
    }

    /// Gold evidence sets for a document, if the claim has any for it.
    pub fn evidence_for(&self, doc: &str) -> Option<&[EvidenceSet]> {
        self.evidence
            .get(doc)
            .map(Vec::as_slice)
            .filter(|sets| !sets.is_empty())
    }
}

/// Sentences retrieved for one claim, per document.
#[derive(Debug, Clone, Deserialize)]
pub struct SentenceRetrieval {
    pub claim_id: ClaimId,
    pub evidence: IndexMap<String, Vec<usize>>,
}

impl SentenceRetrieval {
    pub fn new(claim_id: impl Into<ClaimId>) -> Self {
        SentenceRetrieval {
            claim_id: claim_id.into(),
            evidence: IndexMap::new(),
        }
    }

    pub fn with_document(
        mut self,
        doc: impl ToString,
        sentences: impl IntoIterator<Item = usize>,
    ) -> Self {
        self.evidence
            .insert(doc.to_string(), sentences.into_iter().collect());
        self
    }
}

/// Per-document label for one claim, as predicted by the NLI stage.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelPrediction {
    pub claim_id: ClaimId,
    pub labels: IndexMap<String, PredictedLabel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PredictedLabel {
    pub label: Label,
}

impl LabelPrediction {
    pub fn new(claim_id: impl Into<ClaimId>) -> Self {
        LabelPrediction {
            claim_id: claim_id.into(),
            labels: IndexMap::new(),
        }
    }

    pub fn with_label(mut self, doc: impl ToString, label: Label) -> Self {
        self.labels.insert(doc.to_string(), PredictedLabel { label });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn claim_ids_accept_integers_and_strings() {
        let from_int: ClaimId = serde_json::from_str("7").unwrap();
        let from_str: ClaimId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(from_int, from_str);
        assert_eq!(from_int, ClaimId::from(7));
    }

    #[test]
    fn parses_dataset_record_and_ignores_extra_fields() {
        let line = r#"{"id": 13, "claim": "Some claim.", "label": "CONTRADICT",
            "evidence": {"42": [{"sentences": [4, 1]}, {"sentences": [7]}]}, "cited_doc_ids": [42]}"#;
        let claim: Claim = serde_json::from_str(line).unwrap();

        assert_eq!(claim.id, ClaimId::from(13));
        assert_eq!(claim.label, Label::Contradict);
        let sets = claim.evidence_for("42").unwrap();
        assert_eq!(sets, &[EvidenceSet::new([1, 4]), EvidenceSet::new([7])]);
    }

    #[test]
    fn missing_evidence_means_none() {
        let claim: Claim = serde_json::from_str(r#"{"id": 2, "label": "NOT_ENOUGH_INFO"}"#).unwrap();
        assert!(claim.evidence.is_empty());
        assert_eq!(claim.evidence_for("5"), None);
    }

    #[test]
    fn empty_evidence_list_counts_as_no_evidence() {
        let claim = Claim::new(1, Label::Support).with_evidence(5, Vec::<Vec<usize>>::new());
        assert_eq!(claim.evidence_for("5"), None);
    }

    #[test]
    fn prediction_maps_keep_input_order() {
        let line = r#"{"claim_id": 1, "evidence": {"9": [0], "2": [3, 1], "5": []}}"#;
        let retrieval: SentenceRetrieval = serde_json::from_str(line).unwrap();
        let docs: Vec<&str> = retrieval.evidence.keys().map(String::as_str).collect();
        assert_eq!(docs, vec!["9", "2", "5"]);
        assert_eq!(retrieval.evidence["2"], vec![3, 1]);
    }

    #[test]
    fn parses_label_prediction() {
        let line = r#"{"claim_id": "c-1", "labels": {"3": {"label": "SUPPORT", "confidence": [0.1, 0.9, 0.0]}}}"#;
        let prediction: LabelPrediction = serde_json::from_str(line).unwrap();
        assert_eq!(prediction.claim_id.as_str(), "c-1");
        assert_eq!(prediction.labels["3"].label, Label::Support);
    }

    #[test]
    fn doc_ids_must_be_integers() {
        let claim_id = ClaimId::from(4);
        assert_eq!(DocId::parse(&claim_id, "12").unwrap(), DocId(12));
        assert_eq!(DocId::parse(&claim_id, " 0012 ").unwrap(), DocId(12));

        let error = DocId::parse(&claim_id, "doc-12").unwrap_err();
        assert!(matches!(error, ScoreError::InputFormat { .. }));
        assert!(error.to_string().contains("claim '4', document 'doc-12'"));
    }

    #[test]
    fn evidence_set_coverage() {
        let set = EvidenceSet::new([1, 2]);
        assert!(set.is_covered_by(&BTreeSet::from([1, 2, 6])));
        assert!(!set.is_covered_by(&BTreeSet::from([2, 3])));
    }
}
