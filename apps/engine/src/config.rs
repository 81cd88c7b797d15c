use anyhow::{bail, Result};

/// How the binary prints an analysis report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Binary configuration loaded from environment variables. Everything has
/// a default; `.env` is loaded if present.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    pub output_format: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let raw = std::env::var("OUTPUT_FORMAT").unwrap_or_else(|_| "json".to_string());
        let output_format = match raw.as_str() {
            "json" => OutputFormat::Json,
            "text" => OutputFormat::Text,
            other => bail!("OUTPUT_FORMAT must be 'json' or 'text', got '{other}'"),
        };

        Ok(Config {
            rust_log,
            output_format,
        })
    }
}
