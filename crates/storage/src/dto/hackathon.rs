use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload for recording a new hackathon entry.
///
/// Required fields mirror the creation form: project name, event name,
/// description and both dates. `end_date >= start_date` is deliberately
/// not validated.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateHackathonRequest {
    #[validate(length(min = 1, max = 255, message = "Project name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "Hackathon event is required"))]
    pub event_name: String,

    #[validate(length(min = 1, message = "Project description is required"))]
    pub description: String,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    #[validate(range(min = 1, message = "Team size must be at least 1"))]
    pub team_size: u32,

    pub role: String,

    pub technologies: Vec<String>,

    #[validate(url(message = "GitHub link must be a valid URL"))]
    pub github_link: Option<String>,

    #[validate(url(message = "Demo link must be a valid URL"))]
    pub demo_link: Option<String>,

    #[validate(url(message = "Certificate link must be a valid URL"))]
    pub certificate_link: Option<String>,

    pub achievements: String,

    pub placement: Option<String>,
}

/// Request payload for editing an existing entry; unset fields keep their
/// stored values, and an empty string clears an optional field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateHackathonRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub event_name: Option<String>,

    #[validate(length(min = 1))]
    pub description: Option<String>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,

    #[validate(range(min = 1))]
    pub team_size: Option<u32>,

    pub role: Option<String>,

    pub technologies: Option<Vec<String>>,

    #[validate(custom(function = "validate_link_or_clear"))]
    pub github_link: Option<String>,

    #[validate(custom(function = "validate_link_or_clear"))]
    pub demo_link: Option<String>,

    #[validate(custom(function = "validate_link_or_clear"))]
    pub certificate_link: Option<String>,

    pub achievements: Option<String>,

    pub placement: Option<String>,
}

// Validation helper: empty means "clear the stored link", anything else
// must be a URL.
fn validate_link_or_clear(link: &str) -> Result<(), validator::ValidationError> {
    use validator::ValidateUrl;

    if link.is_empty() || link.validate_url() {
        Ok(())
    } else {
        Err(validator::ValidationError::new("url"))
    }
}
