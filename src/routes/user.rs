use axum::{extract::State, response::IntoResponse, Extension};
use validator::Validate;

use crate::{
    dto::user_dto::{LoginUserPayload, RegisterUserPayload, TokenResponse, UserResponse},
    error::{Error, Result},
    extract::Json,
    middleware::auth::Claims,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/user/register",
    request_body = RegisterUserPayload,
    responses(
        (status = 200, description = "User registered; returns a bearer token"),
        (status = 400, description = "Invalid payload or duplicate email")
    )
)]
#[axum::debug_handler]
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let token = state.user_service.register(payload).await?;
    Ok(Json(TokenResponse { token }))
}

#[utoipa::path(
    post,
    path = "/api/user/login",
    request_body = LoginUserPayload,
    responses(
        (status = 200, description = "Returns a bearer token"),
        (status = 400, description = "Invalid credentials")
    )
)]
#[axum::debug_handler]
pub async fn login_user(
    State(state): State<AppState>,
    Json(payload): Json<LoginUserPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let token = state.user_service.login(payload).await?;
    Ok(Json(TokenResponse { token }))
}

#[utoipa::path(
    get,
    path = "/api/user/me",
    responses(
        (status = 200, description = "The authenticated user"),
        (status = 400, description = "Token subject no longer exists"),
        (status = 401, description = "Missing or invalid credential")
    )
)]
#[axum::debug_handler]
pub async fn current_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let user_id = claims.user_id()?;
    let user = state
        .user_service
        .find_by_id(&user_id)
        .await?
        .ok_or_else(|| Error::NotFound("user not found".to_string()))?;
    Ok(Json(UserResponse::from(user)))
}
