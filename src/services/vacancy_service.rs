use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Database;

use crate::database;
use crate::dto::vacancy_dto::{CreateVacancyPayload, VacancyListQuery};
use crate::error::{Error, Result};
use crate::models::vacancy::{Vacancy, VacancyStatus};

#[derive(Clone)]
pub struct VacancyService {
    db: Database,
}

impl VacancyService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn create(&self, payload: CreateVacancyPayload) -> Result<()> {
        let status = match payload.status.as_deref() {
            Some("open") => VacancyStatus::Open,
            Some("close") => VacancyStatus::Close,
            _ => {
                return Err(Error::BadRequest(
                    "status should be either open or close".to_string(),
                ))
            }
        };

        let vacancy = Vacancy::new(
            payload.position.unwrap_or_default(),
            payload.description.unwrap_or_default(),
            payload.years_of_experience.unwrap_or_default(),
            status,
        );

        self.db
            .collection::<Vacancy>(database::VACANCIES)
            .insert_one(&vacancy)
            .await?;

        Ok(())
    }

    /// With a `years` filter: exact experience match, open vacancies only.
    /// Without one: every vacancy, closed ones included, in store order.
    pub async fn list(&self, query: VacancyListQuery) -> Result<Vec<Vacancy>> {
        let cursor = self
            .db
            .collection::<Vacancy>(database::VACANCIES)
            .find(list_filter(&query))
            .await?;

        Ok(cursor.try_collect().await?)
    }
}

fn list_filter(query: &VacancyListQuery) -> mongodb::bson::Document {
    match query.years {
        Some(years) => doc! { "years_of_experience": years, "status": "open" },
        None => doc! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_filter_is_exact_and_open_only() {
        let filter = list_filter(&VacancyListQuery { years: Some(5) });
        assert_eq!(filter, doc! { "years_of_experience": 5_i64, "status": "open" });
    }

    #[test]
    fn no_filter_returns_everything() {
        assert_eq!(list_filter(&VacancyListQuery::default()), doc! {});
    }
}
