use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::vacancy::Vacancy;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVacancyPayload {
    #[validate(required(message = "position is required"))]
    pub position: Option<String>,
    #[validate(required(message = "years of experience is required"))]
    pub years_of_experience: Option<i64>,
    #[validate(
        required(message = "status should be either open or close"),
        custom(function = "validate_status")
    )]
    pub status: Option<String>,
    #[validate(required(message = "description is required"))]
    pub description: Option<String>,
}

fn validate_status(status: &str) -> Result<(), ValidationError> {
    if status == "open" || status == "close" {
        Ok(())
    } else {
        let mut err = ValidationError::new("status");
        err.message = Some("status should be either open or close".into());
        Err(err)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApplyVacancyPayload {
    #[validate(required(message = "vacancy id is required"))]
    pub vacancy_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VacancyListQuery {
    pub years: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyResponse {
    pub id: String,
    pub position: String,
    pub description: String,
    pub years_of_experience: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyListResponse {
    pub data: Vec<VacancyResponse>,
}

impl From<Vacancy> for VacancyResponse {
    fn from(value: Vacancy) -> Self {
        Self {
            id: value.id.map(|id| id.to_hex()).unwrap_or_default(),
            position: value.position,
            description: value.description,
            years_of_experience: value.years_of_experience,
            status: value.status.as_str().to_string(),
            created_at: value.created_at,
        }
    }
}
