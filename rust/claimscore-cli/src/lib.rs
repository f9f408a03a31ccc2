//! # Claimscore CLI
//!
//! Reads the gold dataset and the two prediction streams from JSONL files,
//! scores them with [`claimscore`], and renders the report.
//!
//! ```bash
//! claimscore --dataset claims_dev.jsonl \
//!     --sentence-retrieval sentence_retrieval.jsonl \
//!     --label-prediction label_prediction.jsonl
//! ```
//!
//! Set `RUST_LOG=claimscore=debug` to see per-stage tuple and hit counts on
//! standard error.

mod cli;
pub use cli::*;

mod jsonl;
pub use jsonl::*;

use std::path::Path;

use anyhow::{Context, Result};
use claimscore::{Claim, Inputs, LabelPrediction, Report, SentenceRetrieval};

/// Load and align the three input files.
pub fn load_inputs(
    dataset: &Path,
    sentence_retrieval: &Path,
    label_prediction: &Path,
) -> Result<Inputs> {
    let claims: Vec<Claim> = read_jsonl(dataset)?;
    let retrievals: Vec<SentenceRetrieval> = read_jsonl(sentence_retrieval)?;
    let predictions: Vec<LabelPrediction> = read_jsonl(label_prediction)?;

    Inputs::new(claims, retrievals, predictions).with_context(|| {
        format!(
            "{} and {} are not aligned",
            sentence_retrieval.display(),
            label_prediction.display()
        )
    })
}

/// Render a report in the requested format.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Run a full scoring pass for parsed command line arguments.
pub fn run(cli: &ClaimscoreCli) -> Result<String> {
    let inputs = load_inputs(&cli.dataset, &cli.sentence_retrieval, &cli.label_prediction)?;
    let report = claimscore::evaluate(&inputs).context("scoring failed")?;
    render(&report, cli.format)
}
