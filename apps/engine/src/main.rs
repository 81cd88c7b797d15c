use std::io::Read;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use engine::config::{Config, OutputFormat};
use engine::{Engine, SkillsProfile};

/// Reads a JSON skills profile from stdin, runs the analysis pipeline, and
/// prints the report to stdout as JSON (default) or rendered text
/// (`OUTPUT_FORMAT=text`).
fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting skills engine v{}", env!("CARGO_PKG_VERSION"));

    let engine = Engine::new()?;

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read profile from stdin")?;
    let profile: SkillsProfile =
        serde_json::from_str(&input).context("stdin must contain a JSON skills profile")?;

    let report = engine.analyze(&profile)?;

    match config.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!("Matched jobs:");
            for job in &report.jobs {
                println!(
                    "  {} (score {}, demand {}, {})",
                    job.title, job.relevance_score, job.demand_level, job.average_salary
                );
            }
            println!("\nUpskilling resources:");
            for resource in &report.resources {
                println!(
                    "  {} [{}] ({}, {})",
                    resource.title, resource.resource_type, resource.provider, resource.duration
                );
            }
            println!();
            print!("{}", report.cv.render_text());
        }
    }

    Ok(())
}
