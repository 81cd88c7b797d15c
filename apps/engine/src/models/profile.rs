use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// User-provided background, held only for the duration of one analysis.
/// Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsProfile {
    pub name: String,
    pub email: String,
    pub location: String,
    /// Free-text description of skills and abilities.
    pub skills: String,
    /// Free-text work history and background.
    pub experience: String,
}

impl SkillsProfile {
    /// Every field must be non-empty after trimming. No format checks —
    /// email and location are accepted as-is.
    pub fn validate(&self) -> Result<(), AppError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("location", &self.location),
            ("skills", &self.skills),
            ("experience", &self.experience),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "field '{field}' must not be empty"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_profile() -> SkillsProfile {
        SkillsProfile {
            name: "Amara Diallo".to_string(),
            email: "amara@example.com".to_string(),
            location: "Berlin".to_string(),
            skills: "Cooking, food preparation".to_string(),
            experience: "Five years in restaurant kitchens".to_string(),
        }
    }

    #[test]
    fn test_complete_profile_is_valid() {
        assert!(make_profile().validate().is_ok());
    }

    #[test]
    fn test_empty_skills_rejected() {
        let mut profile = make_profile();
        profile.skills = String::new();
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("skills"), "Error was: {err}");
    }

    #[test]
    fn test_whitespace_only_field_rejected() {
        let mut profile = make_profile();
        profile.name = "   ".to_string();
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("name"), "Error was: {err}");
    }

    #[test]
    fn test_each_field_is_required() {
        for field in ["name", "email", "location", "skills", "experience"] {
            let mut profile = make_profile();
            match field {
                "name" => profile.name = String::new(),
                "email" => profile.email = String::new(),
                "location" => profile.location = String::new(),
                "skills" => profile.skills = String::new(),
                _ => profile.experience = String::new(),
            }
            let err = profile.validate().unwrap_err();
            assert!(
                err.to_string().contains(field),
                "Expected error naming '{field}', got: {err}"
            );
        }
    }
}
