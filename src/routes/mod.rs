pub mod company;
pub mod health;
pub mod user;
pub mod vacancy;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(health::root))
        .route("/api/user/register", post(user::register_user))
        .route("/api/user/login", post(user::login_user));

    let protected = Router::new()
        .route("/api/user/me", get(user::current_user))
        .route("/api/company/create", post(company::create_company))
        .route("/api/vacancy/create", post(vacancy::create_vacancy))
        .route("/api/vacancy/list", get(vacancy::list_vacancies))
        .route("/api/vacancy/apply", post(vacancy::apply_to_vacancy))
        .layer(axum::middleware::from_fn(
            crate::middleware::auth::require_bearer_auth,
        ));

    public.merge(protected).with_state(state)
}
