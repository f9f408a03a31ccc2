//! Gold extractor: flattens annotated claims into gold tuples.

use crate::error::ScoreError;
use crate::record::{Claim, DocId};
use crate::tuple::GoldTuple;

/// One gold tuple per `(claim, document)` pair that has evidence.
///
/// Every claim is extracted regardless of label; `NOT_ENOUGH_INFO` tuples
/// (if a dataset carries evidence for them) fall outside both scored
/// categories.
pub fn gold_tuples<'a>(
    claims: impl IntoIterator<Item = &'a Claim>,
) -> Result<Vec<GoldTuple>, ScoreError> {
    let mut trues = Vec::new();
    for claim in claims {
        for (doc, sets) in &claim.evidence {
            if sets.is_empty() {
                continue;
            }
            trues.push(GoldTuple {
                claim_id: claim.id.clone(),
                doc_id: DocId::parse(&claim.id, doc)?,
                label: claim.label,
                evidence_sets: sets.clone(),
            });
        }
    }
    Ok(trues)
}
