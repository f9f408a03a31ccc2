use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "claimscore")]
#[command(bin_name = "claimscore")]
#[command(about = "Score a fact-verification pipeline against a gold dataset", long_about = None)]
pub struct ClaimscoreCli {
    /// Gold dataset, one claim per line
    #[arg(long)]
    pub dataset: PathBuf,

    /// Sentence-retrieval predictions, one record per claim
    #[arg(long)]
    pub sentence_retrieval: PathBuf,

    /// Label predictions, aligned record for record with sentence retrieval
    #[arg(long, alias = "label_prediction")]
    pub label_prediction: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per stage
    Text,
    /// A single JSON object keyed by stage
    Json,
}
