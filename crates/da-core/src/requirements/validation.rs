//! Per-step validation for the requirements wizard.
//!
//! Each step validates only the fields it collects; the final confirmation
//! step re-checks everything required before submission.

use std::collections::BTreeMap;

use super::model::PartialRequirements;

/// Number of wizard steps (project type, complexity/budget, features,
/// confirmation).
pub const STEP_COUNT: u32 = 4;

/// Minimum trimmed length of the project description.
pub const MIN_DESCRIPTION_LEN: usize = 20;

/// Field name → message map. Empty means the step is valid.
pub type ValidationErrors = BTreeMap<String, String>;

/// Validate the snapshot against the rules of `step` (1-based).
pub fn validate_step(step: u32, data: &PartialRequirements) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    match step {
        1 => {
            if data.project_type.as_deref().unwrap_or("").is_empty() {
                errors.insert("projectType".into(), "select a project type".into());
            }
            if data.target_platform.as_deref().unwrap_or(&[]).is_empty() {
                errors.insert(
                    "targetPlatform".into(),
                    "select at least one target platform".into(),
                );
            }
        }
        2 => {
            match data.complexity {
                Some(1..=5) => {}
                _ => {
                    errors.insert("complexity".into(), "rate the project complexity".into());
                }
            }
            if data.budget.is_none() {
                errors.insert("budget".into(), "select a budget bracket".into());
            }
            if let Some(size) = data.team_size {
                if !(1..=100).contains(&size) {
                    errors.insert(
                        "teamSize".into(),
                        "team size must be between 1 and 100".into(),
                    );
                }
            }
        }
        3 => {
            if data.features.as_deref().unwrap_or(&[]).is_empty() {
                errors.insert("features".into(), "add at least one feature".into());
            }
            if data.description.as_deref().unwrap_or("").trim().len() < MIN_DESCRIPTION_LEN {
                errors.insert(
                    "description".into(),
                    format!("description needs at least {MIN_DESCRIPTION_LEN} characters"),
                );
            }
        }
        _ => {
            // Final confirmation: everything required must be present.
            if data.project_type.as_deref().unwrap_or("").is_empty() {
                errors.insert("projectType".into(), "project type is missing".into());
            }
            if data.target_platform.as_deref().unwrap_or(&[]).is_empty() {
                errors.insert("targetPlatform".into(), "target platform is missing".into());
            }
            if data.complexity.is_none() {
                errors.insert("complexity".into(), "complexity rating is missing".into());
            }
            if data.budget.is_none() {
                errors.insert("budget".into(), "budget bracket is missing".into());
            }
            if data.features.as_deref().unwrap_or(&[]).is_empty() {
                errors.insert("features".into(), "feature list is missing".into());
            }
            if data.description.as_deref().unwrap_or("").is_empty() {
                errors.insert("description".into(), "project description is missing".into());
            }
        }
    }

    errors
}

/// Label for the 1..=5 complexity scale.
pub fn complexity_label(complexity: u8) -> &'static str {
    match complexity {
        1 => "very simple",
        2 => "simple",
        3 => "moderate",
        4 => "complex",
        5 => "very complex",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::Budget;

    fn valid_snapshot() -> PartialRequirements {
        PartialRequirements {
            project_type: Some("web".into()),
            target_platform: Some(vec!["desktop".into()]),
            complexity: Some(3),
            budget: Some(Budget::Medium),
            features: Some(vec!["auth".into()]),
            description: Some("a project description that is long enough".into()),
            ..Default::default()
        }
    }

    #[test]
    fn empty_snapshot_fails_step_one() {
        let errors = validate_step(1, &PartialRequirements::default());
        assert!(errors.contains_key("projectType"));
        assert!(errors.contains_key("targetPlatform"));
    }

    #[test]
    fn complexity_outside_scale_is_rejected() {
        let mut data = valid_snapshot();
        data.complexity = Some(6);
        assert!(validate_step(2, &data).contains_key("complexity"));

        data.complexity = Some(0);
        assert!(validate_step(2, &data).contains_key("complexity"));
    }

    #[test]
    fn team_size_is_optional_but_bounded() {
        let mut data = valid_snapshot();
        assert!(validate_step(2, &data).is_empty());

        data.team_size = Some(101);
        assert!(validate_step(2, &data).contains_key("teamSize"));

        data.team_size = Some(100);
        assert!(validate_step(2, &data).is_empty());
    }

    #[test]
    fn short_description_fails_step_three() {
        let mut data = valid_snapshot();
        data.description = Some("too short".into());
        assert!(validate_step(3, &data).contains_key("description"));
    }

    #[test]
    fn whitespace_does_not_count_toward_description_length() {
        let mut data = valid_snapshot();
        data.description = Some(format!("short{}", " ".repeat(40)));
        assert!(validate_step(3, &data).contains_key("description"));
    }

    #[test]
    fn complexity_scale_is_fully_labelled() {
        for complexity in 1..=5 {
            assert_ne!(complexity_label(complexity), "unknown");
        }
        assert_eq!(complexity_label(0), "unknown");
    }

    #[test]
    fn confirmation_step_checks_all_required_fields() {
        assert!(validate_step(4, &valid_snapshot()).is_empty());

        let errors = validate_step(4, &PartialRequirements::default());
        assert_eq!(errors.len(), 6);
    }
}
