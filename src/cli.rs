use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::client::DEFAULT_BASE_URL;

#[derive(Debug, Parser)]
#[command(name = "ultraviab-score", version, about = "Organ viability scoring CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score an assessment against the remote service (local fallback on failure)
    Predict(PredictArgs),
    /// Score an assessment with the local heuristic only, offline
    Score(ScoreArgs),
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    #[arg(long, help = "Assessment JSON file")]
    pub input: PathBuf,

    #[arg(long, default_value = DEFAULT_BASE_URL, help = "Scoring service base URL")]
    pub endpoint: String,

    #[arg(long, help = "Write the analysis result as JSON to this path")]
    pub json: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ScoreArgs {
    #[arg(long, help = "Assessment JSON file")]
    pub input: PathBuf,

    #[arg(long, help = "Write the analysis result as JSON to this path")]
    pub json: Option<PathBuf>,
}
