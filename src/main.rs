use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use ultraviab_score::assessment::Assessment;
use ultraviab_score::cli::{Cli, Commands};
use ultraviab_score::client::ViabilityClient;
use ultraviab_score::io;
use ultraviab_score::request::build_request;
use ultraviab_score::schema::v1::AnalysisResult;
use ultraviab_score::scores::fallback::compute_fallback;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Predict(args) => {
            let assessment = read_assessment(&args.input)?;
            let client = ViabilityClient::new(&args.endpoint)?;
            tracing::info!(endpoint = %client.endpoint(), "submitting assessment");
            let result = client.predict(&assessment);
            emit(&result, args.json.as_deref())?;
        }
        Commands::Score(args) => {
            let assessment = read_assessment(&args.input)?;
            let request = build_request(&assessment);
            let result = compute_fallback(&request);
            emit(&result, args.json.as_deref())?;
        }
    }

    Ok(())
}

fn read_assessment(path: &Path) -> Result<Assessment> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let assessment: Assessment = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse assessment {}", path.display()))?;
    Ok(assessment)
}

fn emit(result: &AnalysisResult, json_path: Option<&Path>) -> Result<()> {
    print!("{}", io::summary::format_summary(result));
    if let Some(path) = json_path {
        io::write_json(path, result)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
}
