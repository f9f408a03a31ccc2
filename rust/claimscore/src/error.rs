//! Error types for loading and scoring.

use thiserror::Error;

use crate::record::ClaimId;

/// Every failure is fatal to the run: there is no partial report.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("{context}: {reason}")]
    InputFormat { context: String, reason: String },

    #[error(
        "claim id mismatch at position {index}: sentence retrieval has '{retrieval}', label prediction has '{prediction}'"
    )]
    Alignment {
        index: usize,
        retrieval: ClaimId,
        prediction: ClaimId,
    },

    #[error("sentence retrieval has {retrievals} records but label prediction has {predictions}")]
    LengthMismatch { retrievals: usize, predictions: usize },

    #[error("claim '{claim_id}' is not in the dataset")]
    MissingReference { claim_id: ClaimId },

    #[error(
        "label predicted for document '{doc_id}' of claim '{claim_id}', which sentence retrieval did not return"
    )]
    MissingRetrieval { claim_id: ClaimId, doc_id: String },
}
