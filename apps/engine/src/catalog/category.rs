use serde::{Deserialize, Serialize};

/// A fixed skill domain. Serves as the join key between job records and
/// upskilling resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Construction,
    Cooking,
    Healthcare,
    Teaching,
    Technology,
}

impl Category {
    /// Canonical iteration order. Matching and reverse lookups walk
    /// categories in this order, so it must stay stable.
    pub const ALL: [Category; 5] = [
        Category::Construction,
        Category::Cooking,
        Category::Healthcare,
        Category::Teaching,
        Category::Technology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Construction => "construction",
            Category::Cooking => "cooking",
            Category::Healthcare => "healthcare",
            Category::Teaching => "teaching",
            Category::Technology => "technology",
        }
    }

    /// Trigger substrings for keyword matching: the category name, a crude
    /// stem (the name with its trailing three characters cut, so "cooking"
    /// → "cook", "healthcare" → "healthc"), and the per-category synonyms.
    /// A category matches when ANY trigger is contained in the lowercased
    /// input — plain substring containment, no word boundaries.
    pub fn triggers(&self) -> &'static [&'static str] {
        match self {
            Category::Construction => &["construction", "construct", "build", "repair"],
            Category::Cooking => &["cooking", "cook", "food", "kitchen"],
            Category::Healthcare => &["healthcare", "healthc", "care", "medical"],
            // For teaching the stem and the synonym coincide ("teach").
            Category::Teaching => &["teaching", "teach", "education"],
            Category::Technology => &["technology", "technol", "computer", "tech"],
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
