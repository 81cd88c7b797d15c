//! Skill Matcher — pluggable, trait-based matcher from free-text skills to
//! ranked job records.
//!
//! Default: `KeywordSkillMatcher` (pure substring containment, fast,
//! deterministic, fully testable). The trait seam exists so a semantic
//! backend can be swapped in at startup without touching callers.

use crate::catalog::category::Category;
use crate::catalog::Catalog;
use crate::models::job::JobRecord;

/// Upper bound on returned job matches.
pub const MAX_JOB_MATCHES: usize = 4;

/// The skill matcher trait. Implement this to swap matching backends
/// without touching the pipeline or caller code.
///
/// Implementations must be total: any input string yields a non-empty
/// result (the catalog's fallback jobs at minimum) and never errors.
pub trait SkillMatcher: Send + Sync {
    fn match_jobs(&self, catalog: &Catalog, skills_text: &str) -> Vec<JobRecord>;
}

/// Keyword matcher over the catalog's per-category trigger substrings.
///
/// Algorithm:
/// 1. Lowercase the input.
/// 2. For each category in definition order, append ALL of its job records
///    when any trigger substring is contained in the text.
/// 3. Empty accumulator → the fixed two-job fallback list.
/// 4. Otherwise stable-sort descending by `relevance_score` (ties keep
///    category insertion order) and keep the first `MAX_JOB_MATCHES`.
///
/// Matching is purely substring-based — "cartechnology" matches the
/// technology category. That looseness is part of the contract; callers
/// rely on these exact semantics.
pub struct KeywordSkillMatcher;

impl SkillMatcher for KeywordSkillMatcher {
    fn match_jobs(&self, catalog: &Catalog, skills_text: &str) -> Vec<JobRecord> {
        let normalized = skills_text.to_lowercase();

        let mut matches: Vec<JobRecord> = Vec::new();
        for category in Category::ALL {
            let hit = category
                .triggers()
                .iter()
                .any(|trigger| normalized.contains(trigger));
            if hit {
                matches.extend_from_slice(catalog.jobs_for(category));
            }
        }

        if matches.is_empty() {
            return catalog.fallback_jobs().to_vec();
        }

        // Stable sort: equal scores keep their accumulation order.
        matches.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
        matches.truncate(MAX_JOB_MATCHES);
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn match_ids(skills_text: &str) -> Vec<String> {
        let catalog = Catalog::builtin();
        KeywordSkillMatcher
            .match_jobs(&catalog, skills_text)
            .into_iter()
            .map(|job| job.id)
            .collect()
    }

    #[test]
    fn test_construction_keywords_match_both_construction_jobs() {
        for input in ["construction", "I like to build things", "appliance repair"] {
            let ids = match_ids(input);
            assert!(ids.contains(&"construction-1".to_string()), "input: {input}");
            assert!(ids.contains(&"construction-2".to_string()), "input: {input}");
        }
    }

    #[test]
    fn test_no_match_returns_fallback_in_fixed_order() {
        for input in ["", "xyz123", "I enjoy painting and gardening"] {
            assert_eq!(match_ids(input), vec!["general-1", "general-2"], "input: {input}");
        }
    }

    #[test]
    fn test_output_is_bounded_and_never_empty() {
        for input in ["", "cooking", "construction cooking healthcare teaching technology"] {
            let ids = match_ids(input);
            assert!(!ids.is_empty(), "input: {input}");
            assert!(ids.len() <= MAX_JOB_MATCHES, "input: {input}");
        }
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        // cooking: 90, 85 — healthcare: 85, 90. Stable descending sort keeps
        // accumulation order within each score band.
        let ids = match_ids("cooking and healthcare work");
        assert_eq!(
            ids,
            vec!["cooking-1", "healthcare-2", "cooking-2", "healthcare-1"]
        );
    }

    #[test]
    fn test_all_categories_matched_keeps_top_four() {
        let catalog = Catalog::builtin();
        let jobs = KeywordSkillMatcher
            .match_jobs(&catalog, "construction cooking healthcare teaching technology");
        assert_eq!(jobs.len(), MAX_JOB_MATCHES);
        // Top scores across the whole catalog: 95, 95, 90, 90.
        assert_eq!(jobs[0].relevance_score, 95);
        assert_eq!(jobs[1].relevance_score, 95);
        assert_eq!(jobs[2].relevance_score, 90);
        assert_eq!(jobs[3].relevance_score, 90);
        assert_eq!(jobs[0].id, "construction-1");
        assert_eq!(jobs[1].id, "teaching-2");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let ids = match_ids("COOKING in a professional KITCHEN");
        assert!(ids.contains(&"cooking-1".to_string()));
    }

    #[test]
    fn test_substring_semantics_have_no_word_boundaries() {
        // "cartechnology" contains "technology" — a known heuristic
        // weakness that is part of the contract.
        let ids = match_ids("cartechnology");
        assert_eq!(ids, vec!["tech-1", "tech-2"]);
    }

    #[test]
    fn test_stem_matches_singular_forms() {
        // "cook" and "teach" trigger via the trailing-three-chars stem.
        assert!(match_ids("I cook at home").contains(&"cooking-1".to_string()));
        assert!(match_ids("I teach children").contains(&"teaching-1".to_string()));
    }

    #[test]
    fn test_matcher_is_idempotent() {
        let catalog = Catalog::builtin();
        let first = KeywordSkillMatcher.match_jobs(&catalog, "food and childcare");
        let second = KeywordSkillMatcher.match_jobs(&catalog, "food and childcare");
        assert_eq!(first, second);
    }

    #[test]
    fn test_construction_scenario_exact_result() {
        let ids = match_ids("I have experience in construction, building homes and basic repairs");
        assert_eq!(ids, vec!["construction-1", "construction-2"]);
    }
}
