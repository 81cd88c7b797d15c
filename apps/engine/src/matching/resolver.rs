//! Resource Resolver — reverse-maps matched jobs to upskilling resources.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::models::job::JobRecord;
use crate::models::resource::ResourceRecord;

/// Upper bound on returned resources.
pub const MAX_RESOURCES: usize = 3;

/// Resolves upskilling resources for a list of matched jobs.
///
/// Each job is traced back to the first category (in catalog order) that
/// owns its id; that category's full resource list is appended. The result
/// is deduplicated by resource id (first occurrence wins) and capped at
/// `MAX_RESOURCES`. Jobs owned by no category — the fallback jobs —
/// contribute nothing; this is not an error.
pub fn resolve_resources(catalog: &Catalog, jobs: &[JobRecord]) -> Vec<ResourceRecord> {
    let mut collected: Vec<ResourceRecord> = Vec::new();
    for job in jobs {
        if let Some(category) = catalog.category_of_job(&job.id) {
            collected.extend_from_slice(catalog.resources_for(category));
        }
    }

    let mut seen = HashSet::new();
    let mut unique: Vec<ResourceRecord> = Vec::new();
    for resource in collected {
        if seen.insert(resource.id.clone()) {
            unique.push(resource);
        }
    }

    unique.truncate(MAX_RESOURCES);
    unique
}
