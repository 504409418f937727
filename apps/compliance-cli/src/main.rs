//! Compliance CLI - assess a business profile from the command line
//!
//! Reads a `BusinessProfile` JSON document from the path given as the
//! first argument (or stdin when no argument is given), runs the
//! engine, and prints the resulting compliance plan as JSON.

use std::io::Read;

use anyhow::{Context, Result};
use compliance_engine::ComplianceEngine;
use compliance_types::BusinessProfile;
use tracing::info;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("compliance_cli=info".parse()?),
        )
        .init();

    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read profile from {path}"))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read profile from stdin")?;
            buffer
        }
    };

    let profile: BusinessProfile =
        serde_json::from_str(&raw).context("profile is not valid JSON")?;

    let engine = ComplianceEngine::new();
    let plan = engine
        .assess(Some(&profile))
        .context("compliance assessment failed")?;

    info!(
        obligations = plan.obligations.len(),
        total_cost = plan.total_cost,
        "assessment complete"
    );

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
