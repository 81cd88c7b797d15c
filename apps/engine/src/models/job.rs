use serde::{Deserialize, Serialize};

/// Employer demand for a job, as authored in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandLevel {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DemandLevel::High => "High",
            DemandLevel::Medium => "Medium",
            DemandLevel::Low => "Low",
        };
        f.write_str(label)
    }
}

/// A statically authored job opportunity.
///
/// `relevance_score` is fixed per record (0–100) — it is NOT computed from
/// user input. Ranking is a stable descending sort over these static scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Unique across the whole catalog, fallback list included.
    pub id: String,
    pub title: String,
    pub description: String,
    pub relevance_score: u8,
    pub requirements: Vec<String>,
    /// Free-form, display-only.
    pub average_salary: String,
    pub demand_level: DemandLevel,
}
