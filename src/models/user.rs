use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// One entry in a user's application history. The array is append-only and
/// insertion-ordered; the daily cap is computed by scanning it, never from a
/// separately maintained counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub vacancy_id: ObjectId,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    #[serde(default)]
    pub vacancies: Vec<Application>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(first_name: String, last_name: String, email: String, password_hash: String) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            email,
            password_hash,
            vacancies: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
