use serde::{Deserialize, Serialize};

/// Kind of upskilling resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    Course,
    Certification,
    Workshop,
    #[serde(rename = "Free Resource")]
    FreeResource,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ResourceType::Course => "Course",
            ResourceType::Certification => "Certification",
            ResourceType::Workshop => "Workshop",
            ResourceType::FreeResource => "Free Resource",
        };
        f.write_str(label)
    }
}

/// A statically authored training or certification opportunity.
///
/// `id` is unique within its category's list only — global uniqueness across
/// categories is not guaranteed. Catalog validation flags cross-category
/// reuse; the resolver dedups by id regardless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub id: String,
    pub title: String,
    pub provider: String,
    pub duration: String,
    pub resource_type: ResourceType,
    /// May be a `#` placeholder.
    pub url: String,
    pub description: String,
}
