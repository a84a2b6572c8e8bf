pub mod company_dto;
pub mod user_dto;
pub mod vacancy_dto;

use serde::{Deserialize, Serialize};

/// Confirmation body returned by the create endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
