use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Extension,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    dto::{
        user_dto::UserResponse,
        vacancy_dto::{
            ApplyVacancyPayload, CreateVacancyPayload, VacancyListQuery, VacancyListResponse,
        },
        MessageResponse,
    },
    error::Result,
    extract::Json,
    middleware::auth::Claims,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/vacancy/create",
    request_body = CreateVacancyPayload,
    responses(
        (status = 200, description = "Vacancy created"),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid credential")
    )
)]
#[axum::debug_handler]
pub async fn create_vacancy(
    State(state): State<AppState>,
    Json(payload): Json<CreateVacancyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state.vacancy_service.create(payload).await?;
    Ok(Json(MessageResponse::new("vacancy successfully created")))
}

#[utoipa::path(
    get,
    path = "/api/vacancy/list",
    params(
        ("years" = Option<i64>, Query, description = "Exact years-of-experience filter; implies open vacancies only")
    ),
    responses(
        (status = 200, description = "List of vacancies"),
        (status = 401, description = "Missing or invalid credential")
    )
)]
#[axum::debug_handler]
pub async fn list_vacancies(
    State(state): State<AppState>,
    Query(query): Query<VacancyListQuery>,
) -> Result<impl IntoResponse> {
    let items = state.vacancy_service.list(query).await?;
    Ok(Json(VacancyListResponse {
        data: items.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/vacancy/apply",
    request_body = ApplyVacancyPayload,
    responses(
        (status = 200, description = "Application recorded; returns the updated user"),
        (status = 400, description = "Unknown vacancy, duplicate application, or daily cap reached"),
        (status = 401, description = "Missing or invalid credential")
    )
)]
#[axum::debug_handler]
pub async fn apply_to_vacancy(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<ApplyVacancyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user_id = claims.user_id()?;
    let vacancy_id = payload.vacancy_id.unwrap_or_default();

    let user = state
        .application_service
        .apply(&user_id, &vacancy_id, Utc::now())
        .await?;

    Ok(Json(UserResponse::from(user)))
}
