use axum::{extract::State, response::IntoResponse};
use validator::Validate;

use crate::{
    dto::{company_dto::CreateCompanyPayload, MessageResponse},
    error::Result,
    extract::Json,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/company/create",
    request_body = CreateCompanyPayload,
    responses(
        (status = 200, description = "Company created"),
        (status = 400, description = "Invalid payload or duplicate email"),
        (status = 401, description = "Missing or invalid credential")
    )
)]
#[axum::debug_handler]
pub async fn create_company(
    State(state): State<AppState>,
    Json(payload): Json<CreateCompanyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state.company_service.create(payload).await?;
    Ok(Json(MessageResponse::new("Company successfully created")))
}
