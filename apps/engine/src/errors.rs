use thiserror::Error;

/// Application-level error type.
///
/// Matching and resolution are total over their inputs and never fail;
/// errors surface only from profile validation, catalog construction, and
/// the binary's I/O edges.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
