pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    application_service::ApplicationService, company_service::CompanyService,
    user_service::UserService, vacancy_service::VacancyService,
};

#[derive(Clone)]
pub struct AppState {
    pub db: mongodb::Database,
    pub company_service: CompanyService,
    pub vacancy_service: VacancyService,
    pub user_service: UserService,
    pub application_service: ApplicationService,
}

impl AppState {
    pub fn new(db: mongodb::Database) -> Self {
        let company_service = CompanyService::new(db.clone());
        let vacancy_service = VacancyService::new(db.clone());
        let user_service = UserService::new(db.clone());
        let application_service = ApplicationService::new(db.clone());

        Self {
            db,
            company_service,
            vacancy_service,
            user_service,
            application_service,
        }
    }
}
