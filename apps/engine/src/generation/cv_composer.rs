//! CV Composer — builds a printable CV document from a validated profile
//! and the matched jobs.
//!
//! Text composition only. PDF rendering is out of scope; `render_text`
//! produces the plain-text mock-up.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::job::JobRecord;
use crate::models::profile::SkillsProfile;

/// Key-skill entries drawn from matched job requirements.
pub const MAX_KEY_SKILLS: usize = 8;
/// Target roles listed on the CV.
pub const MAX_TARGET_ROLES: usize = 3;

/// No phone number is collected; the mock-up carries a placeholder.
const PHONE_PLACEHOLDER: &str = "+1 (555) 123-4567";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub location: String,
    pub phone: String,
}

/// A composed CV. All sections are plain text, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvDocument {
    pub personal: PersonalInfo,
    pub professional_summary: String,
    /// At most `MAX_KEY_SKILLS`, deduplicated, drawn from job requirements.
    pub key_skills: Vec<String>,
    /// Titles of the top matched jobs, at most `MAX_TARGET_ROLES`.
    pub target_roles: Vec<String>,
    pub skills_text: String,
    pub experience_text: String,
    pub additional_notes: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// Composes a CV document from the profile and the matched jobs, in match
/// order.
pub fn compose_cv(profile: &SkillsProfile, jobs: &[JobRecord]) -> CvDocument {
    CvDocument {
        personal: PersonalInfo {
            name: profile.name.clone(),
            email: profile.email.clone(),
            location: profile.location.clone(),
            phone: PHONE_PLACEHOLDER.to_string(),
        },
        professional_summary: build_summary(profile),
        key_skills: collect_key_skills(jobs),
        target_roles: jobs
            .iter()
            .take(MAX_TARGET_ROLES)
            .map(|job| job.title.clone())
            .collect(),
        skills_text: profile.skills.clone(),
        experience_text: profile.experience.clone(),
        additional_notes: build_additional_notes(&profile.location),
        generated_at: Utc::now(),
    }
}

/// Leads with the first comma-separated token of the skills text, falling
/// back to "various fields" when that token is blank.
fn build_summary(profile: &SkillsProfile) -> String {
    let lead = profile
        .skills
        .split(',')
        .next()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .unwrap_or("various fields");
    let location = &profile.location;
    format!(
        "Dedicated professional with diverse experience in {lead}. Proven ability to \
         adapt quickly to new environments and contribute effectively to team goals. \
         Seeking opportunities to leverage my skills and experience in {location}'s \
         job market."
    )
}

/// First `MAX_KEY_SKILLS` requirement strings across the jobs in order,
/// then deduplicated keeping first occurrence. The cap applies BEFORE
/// dedup, so duplicates shrink the final list.
fn collect_key_skills(jobs: &[JobRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    jobs.iter()
        .flat_map(|job| job.requirements.iter())
        .take(MAX_KEY_SKILLS)
        .filter(|skill| seen.insert(skill.as_str()))
        .cloned()
        .collect()
}

fn build_additional_notes(location: &str) -> Vec<String> {
    vec![
        "Multilingual professional with strong cross-cultural communication skills".to_string(),
        "Adaptable and quick to learn new systems and processes".to_string(),
        "Strong work ethic and commitment to professional development".to_string(),
        format!("Authorized to work in {location}"),
    ]
}

impl CvDocument {
    /// Renders the printable plain-text mock-up, sections in display order.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.personal.name);
        out.push('\n');
        out.push_str(&format!(
            "{} | {} | {}\n\n",
            self.personal.email, self.personal.location, self.personal.phone
        ));
        push_section(&mut out, "PROFESSIONAL SUMMARY", &self.professional_summary);
        push_list_section(&mut out, "TARGET POSITIONS", &self.target_roles);
        push_list_section(&mut out, "KEY SKILLS & COMPETENCIES", &self.key_skills);
        push_section(&mut out, "SKILLS & ABILITIES", &self.skills_text);
        push_section(&mut out, "EXPERIENCE & BACKGROUND", &self.experience_text);
        push_list_section(&mut out, "ADDITIONAL INFORMATION", &self.additional_notes);
        out
    }
}

fn push_section(out: &mut String, header: &str, body: &str) {
    out.push_str(header);
    out.push('\n');
    out.push_str(body);
    out.push_str("\n\n");
}

fn push_list_section(out: &mut String, header: &str, items: &[String]) {
    out.push_str(header);
    out.push('\n');
    for item in items {
        out.push_str("- ");
        out.push_str(item);
        out.push('\n');
    }
    out.push('\n');
}
