//! Aggregator and reporter: per-stage metrics and the final report.

use std::fmt;

use serde::Serialize;

use crate::error::ScoreError;
use crate::gold::gold_tuples;
use crate::label::Category;
use crate::load::Inputs;
use crate::project::project;
use crate::score::{CategoryScore, score_category};
use crate::stage::Stage;
use crate::tuple::{GoldTuple, PredTuple};

/// Round to four decimal places, ties to even.
///
/// Goes through fixed-precision formatting, which rounds the exact binary
/// value, so `1/32` becomes `0.0312`.
fn round4(value: f64) -> f64 {
    format!("{value:.4}").parse().unwrap_or(value)
}

/// Rounded metrics for one stage.
///
/// Serializes with flat keys, `macro_f1` first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub macro_f1: f64,
    pub f1_support: f64,
    pub precision_support: f64,
    pub recall_support: f64,
    pub f1_contradict: f64,
    pub precision_contradict: f64,
    pub recall_contradict: f64,
}

impl Metrics {
    /// Combine the two category scores. Macro-F1 is the plain mean of the
    /// unrounded per-category F1s; every value is rounded afterwards.
    pub fn from_scores(support: &CategoryScore, contradict: &CategoryScore) -> Self {
        let macro_f1 = (support.f1 + contradict.f1) / 2.0;
        Metrics {
            macro_f1: round4(macro_f1),
            f1_support: round4(support.f1),
            precision_support: round4(support.precision),
            recall_support: round4(support.recall),
            f1_contradict: round4(contradict.f1),
            precision_contradict: round4(contradict.precision),
            recall_contradict: round4(contradict.recall),
        }
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Score one stage's predictions in both categories.
pub fn score_stage(stage: Stage, trues: &[GoldTuple], preds: &[PredTuple]) -> Metrics {
    let [support, contradict] = Category::ALL.map(|category| {
        let score = score_category(category, trues, preds);
        tracing::debug!(
            %stage,
            %category,
            hits = score.hits,
            true_total = score.true_total,
            pred_total = score.pred_total,
            "scored category"
        );
        score
    });
    Metrics::from_scores(&support, &contradict)
}

/// Metrics for all three stages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    pub document_retrieval: Metrics,
    pub sentence_retrieval: Metrics,
    pub full_pipeline: Metrics,
}

impl Report {
    pub fn stage(&self, stage: Stage) -> &Metrics {
        match stage {
            Stage::DocumentRetrieval => &self.document_retrieval,
            Stage::SentenceRetrieval => &self.sentence_retrieval,
            Stage::FullPipeline => &self.full_pipeline,
        }
    }

    pub fn stages(&self) -> impl Iterator<Item = (Stage, &Metrics)> {
        Stage::ALL.into_iter().map(|stage| (stage, self.stage(stage)))
    }
}

/// One line per stage, metrics aligned in a column.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (stage, metrics) in self.stages() {
            let title = format!("{}:", stage.title());
            writeln!(f, "{title:<20}{metrics}")?;
        }
        Ok(())
    }
}

/// Score every stage of the pipeline.
pub fn evaluate(inputs: &Inputs) -> Result<Report, ScoreError> {
    let trues = gold_tuples(inputs.claims())?;
    tracing::debug!(gold = trues.len(), "extracted gold tuples");

    let run = |stage: Stage| -> Result<Metrics, ScoreError> {
        let preds = project(stage, inputs)?;
        tracing::debug!(%stage, predictions = preds.len(), "projected predictions");
        Ok(score_stage(stage, &trues, &preds))
    };

    Ok(Report {
        document_retrieval: run(Stage::DocumentRetrieval)?,
        sentence_retrieval: run(Stage::SentenceRetrieval)?,
        full_pipeline: run(Stage::FullPipeline)?,
    })
}
