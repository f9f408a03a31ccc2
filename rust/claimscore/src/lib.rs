//! # Claimscore: evidence-set scoring for fact-verification pipelines
//!
//! Scores a three-stage fact-verification pipeline (document retrieval,
//! sentence retrieval, label prediction) against a gold-annotated claim
//! dataset. Each stage gets precision, recall and F1 for the two directional
//! labels (`SUPPORT` and `CONTRADICT`) plus their macro-F1.
//!
//! ## Core Ideas
//!
//! - **Sentence-level accounting**: every gold evidence set counts with its
//!   size, so a document annotated with the sets `{1, 2}` and `{4}` is worth
//!   three sentences of recall.
//! - **Superset credit**: a prediction earns the sentences of an evidence set
//!   only when it retrieves *all* of them. Partial overlap earns nothing.
//! - **Stage projections**: the raw pipeline output is projected three ways,
//!   so the same scorer isolates document selection, sentence selection and
//!   the end-to-end result.
//!
//! ## Architecture
//!
//! ```text
//! Records → Inputs (gold map, aligned predictions)
//!   → Gold tuples ─────────────┐
//!   → Projection (per stage) ──┴→ Category scorer (SUPPORT, CONTRADICT)
//!                                   → Metrics (macro-F1, rounded) → Report
//! ```
//!
//! ## Example
//!
//! ```
//! use claimscore::{Claim, Inputs, Label, LabelPrediction, SentenceRetrieval, evaluate};
//!
//! let dataset = vec![Claim::new(1, Label::Support).with_evidence(3, [vec![1, 2], vec![4]])];
//! let retrievals = vec![SentenceRetrieval::new(1).with_document(3, [1, 2, 6])];
//! let predictions = vec![LabelPrediction::new(1).with_label(3, Label::Support)];
//!
//! let inputs = Inputs::new(dataset, retrievals, predictions).unwrap();
//! let report = evaluate(&inputs).unwrap();
//!
//! assert_eq!(report.sentence_retrieval.precision_support, 0.6667);
//! assert_eq!(report.document_retrieval.recall_support, 1.0);
//! ```

pub mod error;
pub mod gold;
pub mod label;
pub mod load;
pub mod project;
pub mod record;
pub mod report;
pub mod score;
pub mod stage;
pub mod tuple;

pub use error::ScoreError;
pub use gold::gold_tuples;
pub use label::{Category, Label};
pub use load::Inputs;
pub use project::{document_predictions, pipeline_predictions, project, retrieval_predictions};
pub use record::{Claim, ClaimId, DocId, EvidenceSet, LabelPrediction, PredictedLabel, SentenceRetrieval};
pub use report::{Metrics, Report, evaluate, score_stage};
pub use score::{CategoryScore, GoldIndex, f1_score, score_category};
pub use stage::Stage;
pub use tuple::{GoldTuple, PredTuple};
