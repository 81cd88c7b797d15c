//! Skill-to-job matching engine.
//!
//! Matches a free-text description of a person's skills against a static
//! catalog of job categories, resolves upskilling resources for the
//! matched jobs, and composes a printable CV mock-up:
//!
//! skills text → keyword matcher → ranked jobs → resource resolver →
//! resources, with the jobs also feeding the CV composer.
//!
//! The catalog is built and validated once at startup and never mutated;
//! every analysis call is independent and side-effect-free.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod errors;
pub mod generation;
pub mod matching;
pub mod models;

pub use crate::engine::{AnalysisReport, Engine};
pub use crate::errors::AppError;
pub use crate::models::profile::SkillsProfile;
