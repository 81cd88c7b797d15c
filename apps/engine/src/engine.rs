//! Analysis pipeline — the one entry point callers use.
//!
//! Flow: validate profile → match jobs → resolve resources → compose CV.
//! The engine is immutable after construction; `analyze` takes `&self` and
//! may be called repeatedly or from multiple threads without coordination.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::errors::AppError;
use crate::generation::cv_composer::{compose_cv, CvDocument};
use crate::matching::matcher::{KeywordSkillMatcher, SkillMatcher};
use crate::matching::resolver::resolve_resources;
use crate::models::job::JobRecord;
use crate::models::profile::SkillsProfile;
use crate::models::resource::ResourceRecord;

/// Full result of one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub report_id: Uuid,
    pub jobs: Vec<JobRecord>,
    pub resources: Vec<ResourceRecord>,
    pub cv: CvDocument,
}

/// Process-wide read-only state: the validated catalog plus the pluggable
/// matcher backend. Built once at startup, shared by reference afterwards.
pub struct Engine {
    catalog: Catalog,
    matcher: Arc<dyn SkillMatcher>,
}

impl Engine {
    /// Builds an engine over the builtin catalog with the default keyword
    /// matcher. Fails fast if the catalog data is inconsistent.
    pub fn new() -> Result<Self, AppError> {
        Self::with_matcher(Arc::new(KeywordSkillMatcher))
    }

    /// Same as `new`, with a caller-supplied matcher backend.
    pub fn with_matcher(matcher: Arc<dyn SkillMatcher>) -> Result<Self, AppError> {
        let catalog = Catalog::builtin();
        catalog.validate()?;
        Ok(Engine { catalog, matcher })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs the full pipeline for one profile.
    ///
    /// The only failure mode is profile validation; matching, resolution,
    /// and composition are total.
    pub fn analyze(&self, profile: &SkillsProfile) -> Result<AnalysisReport, AppError> {
        profile.validate()?;

        let report_id = Uuid::new_v4();
        info!("report {report_id}: analyzing profile for '{}'", profile.name);

        let jobs = self.matcher.match_jobs(&self.catalog, &profile.skills);
        info!("report {report_id}: matched {} job(s)", jobs.len());

        let resources = resolve_resources(&self.catalog, &jobs);
        info!("report {report_id}: resolved {} resource(s)", resources.len());

        let cv = compose_cv(profile, &jobs);

        Ok(AnalysisReport {
            report_id,
            jobs,
            resources,
            cv,
        })
    }
}
