//! Static catalog of job categories, job records, and upskilling resources.
//!
//! The catalog is built once at startup and never mutated. Both tables are
//! ordered `(Category, records)` pairs so that matching and reverse lookups
//! walk categories in definition order. `validate` makes the cross-table
//! consistency rules explicit and fails fast instead of degrading silently
//! at lookup time.

mod data;

pub mod category;

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::catalog::category::Category;
use crate::errors::AppError;
use crate::models::job::JobRecord;
use crate::models::resource::ResourceRecord;

pub struct Catalog {
    jobs: Vec<(Category, Vec<JobRecord>)>,
    resources: Vec<(Category, Vec<ResourceRecord>)>,
    fallback: Vec<JobRecord>,
}

impl Catalog {
    /// Builds the builtin catalog. Call `validate` before serving lookups.
    pub fn builtin() -> Self {
        Catalog {
            jobs: Category::ALL
                .iter()
                .map(|&category| (category, data::jobs_for(category)))
                .collect(),
            resources: Category::ALL
                .iter()
                .map(|&category| (category, data::resources_for(category)))
                .collect(),
            fallback: data::fallback_jobs(),
        }
    }

    /// Checks the catalog's consistency rules:
    ///
    /// - every category appears in both the job and the resource table;
    /// - job ids are unique across the whole catalog;
    /// - fallback job ids do not collide with category-owned job ids;
    /// - resource ids are unique within their category.
    ///
    /// Resource ids reused ACROSS categories are logged as a warning rather
    /// than rejected: the resolver dedups by id, so such reuse would merge
    /// unrelated resources, but it is an authoring decision, not a broken
    /// catalog.
    pub fn validate(&self) -> Result<(), AppError> {
        for category in Category::ALL {
            if !self.jobs.iter().any(|(c, _)| *c == category) {
                return Err(AppError::Catalog(format!(
                    "category '{category}' missing from the job table"
                )));
            }
            if !self.resources.iter().any(|(c, _)| *c == category) {
                return Err(AppError::Catalog(format!(
                    "category '{category}' has jobs but no resource list"
                )));
            }
        }

        let mut job_ids = HashSet::new();
        for (category, jobs) in &self.jobs {
            for job in jobs {
                if !job_ids.insert(job.id.as_str()) {
                    return Err(AppError::Catalog(format!(
                        "duplicate job id '{}' (category '{category}')",
                        job.id
                    )));
                }
            }
        }
        for job in &self.fallback {
            if job_ids.contains(job.id.as_str()) {
                return Err(AppError::Catalog(format!(
                    "fallback job id '{}' collides with a category-owned job",
                    job.id
                )));
            }
        }

        let mut resource_owner: HashMap<&str, Category> = HashMap::new();
        for (category, resources) in &self.resources {
            let mut local_ids = HashSet::new();
            for resource in resources {
                if !local_ids.insert(resource.id.as_str()) {
                    return Err(AppError::Catalog(format!(
                        "duplicate resource id '{}' within category '{category}'",
                        resource.id
                    )));
                }
                if let Some(owner) = resource_owner.insert(resource.id.as_str(), *category) {
                    warn!(
                        "resource id '{}' reused across categories '{owner}' and \
                         '{category}'; resolver dedup will merge them",
                        resource.id
                    );
                }
            }
        }

        Ok(())
    }

    /// Job records owned by a category, in authored order.
    pub fn jobs_for(&self, category: Category) -> &[JobRecord] {
        self.jobs
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, jobs)| jobs.as_slice())
            .unwrap_or(&[])
    }

    /// Resource records associated with a category, in authored order.
    pub fn resources_for(&self, category: Category) -> &[ResourceRecord] {
        self.resources
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, resources)| resources.as_slice())
            .unwrap_or(&[])
    }

    /// The fixed generic entry-level jobs returned when nothing matches.
    pub fn fallback_jobs(&self) -> &[JobRecord] {
        &self.fallback
    }

    /// First category (in definition order) whose job list owns `job_id`.
    /// Fallback jobs belong to no category.
    pub fn category_of_job(&self, job_id: &str) -> Option<Category> {
        self.jobs
            .iter()
            .find(|(_, jobs)| jobs.iter().any(|job| job.id == job_id))
            .map(|(category, _)| *category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::DemandLevel;

    fn make_job(id: &str, score: u8) -> JobRecord {
        JobRecord {
            id: id.to_string(),
            title: format!("Job {id}"),
            description: String::new(),
            relevance_score: score,
            requirements: vec![],
            average_salary: String::new(),
            demand_level: DemandLevel::Medium,
        }
    }

    #[test]
    fn test_builtin_catalog_validates() {
        Catalog::builtin().validate().expect("builtin catalog must be consistent");
    }

    #[test]
    fn test_every_category_has_jobs_and_resources() {
        let catalog = Catalog::builtin();
        for category in Category::ALL {
            assert!(
                !catalog.jobs_for(category).is_empty(),
                "{category} has no jobs"
            );
            assert!(
                !catalog.resources_for(category).is_empty(),
                "{category} has no resources"
            );
        }
    }

    #[test]
    fn test_fallback_is_two_fixed_jobs() {
        let catalog = Catalog::builtin();
        let fallback = catalog.fallback_jobs();
        assert_eq!(fallback.len(), 2);
        assert_eq!(fallback[0].title, "Customer Service Representative");
        assert_eq!(fallback[1].title, "Retail Associate");
    }

    #[test]
    fn test_category_of_job_resolves_owner() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.category_of_job("construction-1"),
            Some(Category::Construction)
        );
        assert_eq!(catalog.category_of_job("tech-2"), Some(Category::Technology));
    }

    #[test]
    fn test_fallback_jobs_have_no_category() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.category_of_job("general-1"), None);
        assert_eq!(catalog.category_of_job("general-2"), None);
    }

    #[test]
    fn test_duplicate_job_id_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.jobs[1].1.push(make_job("construction-1", 50));
        let err = catalog.validate().unwrap_err();
        assert!(
            err.to_string().contains("construction-1"),
            "Error was: {err}"
        );
    }

    #[test]
    fn test_fallback_id_collision_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.fallback.push(make_job("cooking-1", 50));
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("fallback"), "Error was: {err}");
    }

    #[test]
    fn test_missing_resource_list_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.resources.retain(|(c, _)| *c != Category::Teaching);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("teaching"), "Error was: {err}");
    }

    #[test]
    fn test_duplicate_resource_id_within_category_rejected() {
        let mut catalog = Catalog::builtin();
        let duplicate = catalog.resources[0].1[0].clone();
        catalog.resources[0].1.push(duplicate);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("osha-10"), "Error was: {err}");
    }
}
