use axum::response::IntoResponse;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API is up")
    )
)]
#[axum::debug_handler]
pub async fn root() -> impl IntoResponse {
    "API Running"
}
