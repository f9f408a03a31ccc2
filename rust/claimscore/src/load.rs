//! Record loader: assembles parsed records into scoring inputs.
//!
//! The two prediction streams come from one synchronized pipeline run, so
//! they must line up record for record. That is checked once, here; the
//! projections rely on it afterwards. Gold lookups are not pre-validated: a
//! prediction for an unknown claim fails when a projection asks for it.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::ScoreError;
use crate::record::{Claim, ClaimId, LabelPrediction, SentenceRetrieval};

/// The gold dataset plus both prediction streams, aligned and held in
/// memory for one scoring pass.
#[derive(Debug, Clone)]
pub struct Inputs {
    dataset: IndexMap<ClaimId, Claim>,
    retrievals: Vec<SentenceRetrieval>,
    predictions: Vec<LabelPrediction>,
}

impl Inputs {
    pub fn new(
        dataset: impl IntoIterator<Item = Claim>,
        retrievals: Vec<SentenceRetrieval>,
        predictions: Vec<LabelPrediction>,
    ) -> Result<Self, ScoreError> {
        check_alignment(&retrievals, &predictions)?;

        let mut by_id = IndexMap::new();
        for claim in dataset {
            match by_id.entry(claim.id.clone()) {
                Entry::Occupied(mut entry) => {
                    tracing::warn!(claim_id = %claim.id, "duplicate claim in dataset, keeping the later record");
                    entry.insert(claim);
                }
                Entry::Vacant(entry) => {
                    entry.insert(claim);
                }
            }
        }

        tracing::debug!(
            claims = by_id.len(),
            retrievals = retrievals.len(),
            predictions = predictions.len(),
            "assembled scoring inputs"
        );

        Ok(Inputs {
            dataset: by_id,
            retrievals,
            predictions,
        })
    }

    /// Look up a gold claim.
    pub fn claim(&self, id: &ClaimId) -> Result<&Claim, ScoreError> {
        self.dataset
            .get(id)
            .ok_or_else(|| ScoreError::MissingReference { claim_id: id.clone() })
    }

    /// Gold claims in dataset order.
    pub fn claims(&self) -> impl Iterator<Item = &Claim> {
        self.dataset.values()
    }

    pub fn retrievals(&self) -> &[SentenceRetrieval] {
        &self.retrievals
    }

    /// Retrieval and label prediction for the same claim, in stream order.
    pub fn aligned(&self) -> impl Iterator<Item = (&SentenceRetrieval, &LabelPrediction)> {
        self.retrievals.iter().zip(&self.predictions)
    }
}

fn check_alignment(
    retrievals: &[SentenceRetrieval],
    predictions: &[LabelPrediction],
) -> Result<(), ScoreError> {
    if retrievals.len() != predictions.len() {
        return Err(ScoreError::LengthMismatch {
            retrievals: retrievals.len(),
            predictions: predictions.len(),
        });
    }

    for (index, (retrieval, prediction)) in retrievals.iter().zip(predictions).enumerate() {
        if retrieval.claim_id != prediction.claim_id {
            return Err(ScoreError::Alignment {
                index,
                retrieval: retrieval.claim_id.clone(),
                prediction: prediction.claim_id.clone(),
            });
        }
    }

    Ok(())
}
