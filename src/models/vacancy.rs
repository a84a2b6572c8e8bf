use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Wire and stored status values are `"open"` and `"close"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VacancyStatus {
    Open,
    Close,
}

impl VacancyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VacancyStatus::Open => "open",
            VacancyStatus::Close => "close",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vacancy {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub position: String,
    pub description: String,
    pub years_of_experience: i64,
    pub status: VacancyStatus,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Vacancy {
    pub fn new(
        position: String,
        description: String,
        years_of_experience: i64,
        status: VacancyStatus,
    ) -> Self {
        Self {
            id: None,
            position,
            description,
            years_of_experience,
            status,
            created_at: Utc::now(),
        }
    }
}
