use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fields are optional at the serde level so presence failures surface as
/// itemized validation messages rather than a deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCompanyPayload {
    #[validate(required(message = "name is required"))]
    pub name: Option<String>,
    #[validate(
        required(message = "Please include a valid email"),
        email(message = "Please include a valid email")
    )]
    pub email: Option<String>,
    #[validate(required(message = "description is required"))]
    pub description: Option<String>,
}
