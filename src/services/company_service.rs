use mongodb::bson::doc;
use mongodb::Database;

use crate::database;
use crate::dto::company_dto::CreateCompanyPayload;
use crate::error::{is_duplicate_key, Error, Result};
use crate::models::company::Company;

#[derive(Clone)]
pub struct CompanyService {
    db: Database,
}

impl CompanyService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Registers a company. The payload has already passed validation, so the
    /// required fields are present.
    pub async fn create(&self, payload: CreateCompanyPayload) -> Result<()> {
        let email = payload.email.unwrap_or_default();
        let companies = self.db.collection::<Company>(database::COMPANIES);

        if companies.find_one(doc! { "email": &email }).await?.is_some() {
            return Err(Error::Conflict("Company already exists".to_string()));
        }

        let company = Company::new(
            payload.name.unwrap_or_default(),
            email,
            payload.description.unwrap_or_default(),
        );

        companies.insert_one(&company).await.map_err(|e| {
            if is_duplicate_key(&e) {
                Error::Conflict("Company already exists".to_string())
            } else {
                Error::Database(e)
            }
        })?;

        Ok(())
    }
}
