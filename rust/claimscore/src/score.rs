//! Set-overlap scorer: sentence-level credit for one category.
//!
//! Accounting is by sentence, not by set:
//!
//! - the recall denominator sums the size of every gold evidence set;
//! - the precision denominator sums the length of every prediction;
//! - a prediction earns `len(es)` for each gold evidence set `es` of the same
//!   `(claim, document)` that it fully contains.
//!
//! With gold `[{1, 2}, {4}]` and a prediction `{1, 2, 6}`, hits are 2,
//! precision is 2/3 and recall is 2/3.

use std::collections::HashMap;

use crate::label::Category;
use crate::record::{ClaimId, DocId};
use crate::tuple::{GoldTuple, PredTuple};

/// Harmonic mean of precision and recall, 0 when both are 0.
pub fn f1_score(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Unrounded result for one category.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryScore {
    pub hits: usize,
    pub true_total: usize,
    pub pred_total: usize,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl CategoryScore {
    pub fn from_counts(hits: usize, true_total: usize, pred_total: usize) -> Self {
        let precision = ratio(hits, pred_total);
        let recall = ratio(hits, true_total);
        CategoryScore {
            hits,
            true_total,
            pred_total,
            precision,
            recall,
            f1: f1_score(precision, recall),
        }
    }
}

/// Gold tuples of one category, grouped by claim and document.
#[derive(Debug)]
pub struct GoldIndex<'a> {
    by_claim: HashMap<&'a ClaimId, HashMap<DocId, Vec<&'a GoldTuple>>>,
    true_total: usize,
}

impl<'a> GoldIndex<'a> {
    pub fn new(category: Category, trues: &'a [GoldTuple]) -> Self {
        let mut by_claim: HashMap<&'a ClaimId, HashMap<DocId, Vec<&'a GoldTuple>>> =
            HashMap::new();
        let mut true_total = 0;
        for gold in trues.iter().filter(|gold| category.includes(gold.label)) {
            true_total += gold.weight();
            by_claim
                .entry(&gold.claim_id)
                .or_default()
                .entry(gold.doc_id)
                .or_default()
                .push(gold);
        }
        GoldIndex {
            by_claim,
            true_total,
        }
    }

    /// Gold tuples sharing the prediction's claim and document.
    pub fn matching(&self, claim_id: &ClaimId, doc_id: DocId) -> &[&'a GoldTuple] {
        self.by_claim
            .get(claim_id)
            .and_then(|docs| docs.get(&doc_id))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn true_total(&self) -> usize {
        self.true_total
    }

    /// Sentences a prediction earns: the size of every matching gold
    /// evidence set it fully contains.
    pub fn hits(&self, pred: &PredTuple) -> usize {
        let matching = self.matching(&pred.claim_id, pred.doc_id);
        if matching.is_empty() {
            return 0;
        }
        let retrieved = pred.retrieved();
        matching
            .iter()
            .flat_map(|gold| &gold.evidence_sets)
            .filter(|set| set.is_covered_by(&retrieved))
            .map(|set| set.len())
            .sum()
    }
}

/// Score one category of a stage's predictions against gold.
pub fn score_category(category: Category, trues: &[GoldTuple], preds: &[PredTuple]) -> CategoryScore {
    let index = GoldIndex::new(category, trues);

    let mut hits = 0;
    let mut pred_total = 0;
    for pred in preds.iter().filter(|pred| category.includes(pred.label)) {
        pred_total += pred.weight();
        hits += index.hits(pred);
    }

    CategoryScore::from_counts(hits, index.true_total(), pred_total)
}
