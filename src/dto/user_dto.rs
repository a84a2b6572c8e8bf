use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::{Application, User};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserPayload {
    #[validate(required(message = "first name is required"))]
    pub first_name: Option<String>,
    #[validate(required(message = "last name is required"))]
    pub last_name: Option<String>,
    #[validate(
        required(message = "Please include a valid email"),
        email(message = "Please include a valid email")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "Please enter a password with 6 or more characters"),
        length(min = 6, message = "Please enter a password with 6 or more characters")
    )]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginUserPayload {
    #[validate(
        required(message = "Please include a valid email"),
        email(message = "Please include a valid email")
    )]
    pub email: Option<String>,
    #[validate(required(message = "Password is required"))]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    pub vacancy_id: String,
    pub applied_at: DateTime<Utc>,
}

/// The user record as returned by the API; the password hash never leaves
/// the store layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub vacancies: Vec<ApplicationResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<Application> for ApplicationResponse {
    fn from(value: Application) -> Self {
        Self {
            vacancy_id: value.vacancy_id.to_hex(),
            applied_at: value.applied_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id.map(|id| id.to_hex()).unwrap_or_default(),
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            vacancies: value.vacancies.into_iter().map(Into::into).collect(),
            created_at: value.created_at,
        }
    }
}
