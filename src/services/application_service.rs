//! The vacancy-application rule: one application per vacancy per user, at
//! most three applications per user per calendar day.

use chrono::{DateTime, Utc};
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime, Document};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::Database;

use crate::database;
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::models::vacancy::Vacancy;
use crate::utils::time::{day_bounds, same_calendar_day};

pub const DAILY_APPLICATION_LIMIT: usize = 3;

/// Decides whether `user` may apply to `vacancy_id` at instant `now`.
///
/// This is the rule in its entirety; [`ApplicationService::apply`] encodes the
/// same predicates into the filter of a guarded update so that concurrent
/// applications by one user cannot both slip past the checks, and calls this
/// function afterwards only to name which predicate rejected.
pub fn check_application(user: &User, vacancy_id: &ObjectId, now: DateTime<Utc>) -> Result<()> {
    if user.vacancies.iter().any(|a| a.vacancy_id == *vacancy_id) {
        return Err(Error::Conflict(
            "User already apply to this vacancy".to_string(),
        ));
    }

    // Scans every entry, not just recent ones; the count is derived, never
    // persisted.
    let applied_today = user
        .vacancies
        .iter()
        .filter(|a| same_calendar_day(a.applied_at, now))
        .count();
    if applied_today >= DAILY_APPLICATION_LIMIT {
        return Err(Error::Conflict(
            "Candidates cannot apply for more than three jobs per day".to_string(),
        ));
    }

    Ok(())
}

/// Filter for the guarded update: matches the user document only while both
/// predicates of [`check_application`] hold, so filter and append happen in
/// one store operation.
fn apply_filter(user_id: ObjectId, vacancy_id: ObjectId, now: DateTime<Utc>) -> Document {
    let (day_start, day_end) = day_bounds(now);
    doc! {
        "_id": user_id,
        "vacancies.vacancy_id": { "$ne": vacancy_id },
        "$expr": { "$lt": [
            { "$size": { "$filter": {
                "input": { "$ifNull": ["$vacancies", []] },
                "as": "app",
                "cond": { "$and": [
                    { "$gte": ["$$app.applied_at", BsonDateTime::from_chrono(day_start)] },
                    { "$lt": ["$$app.applied_at", BsonDateTime::from_chrono(day_end)] },
                ] },
            } } },
            DAILY_APPLICATION_LIMIT as i64,
        ] },
    }
}

/// Appends one application entry, stamped with the instant the rule was
/// evaluated against.
fn apply_update(vacancy_id: ObjectId, now: DateTime<Utc>) -> Document {
    doc! {
        "$push": { "vacancies": {
            "vacancy_id": vacancy_id,
            "applied_at": BsonDateTime::from_chrono(now),
        } },
    }
}

#[derive(Clone)]
pub struct ApplicationService {
    db: Database,
}

impl ApplicationService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Applies `user_id` to `vacancy_id`, returning the updated user record.
    ///
    /// The dedup and daily-cap predicates live in the filter of a single
    /// `find_one_and_update`, so the append is linearized per user by the
    /// store. A miss is classified by re-reading the document and replaying
    /// [`check_application`] against it.
    pub async fn apply(
        &self,
        user_id: &ObjectId,
        vacancy_id: &str,
        now: DateTime<Utc>,
    ) -> Result<User> {
        let vacancy_oid = ObjectId::parse_str(vacancy_id)
            .map_err(|_| Error::NotFound("can't find vacancy".to_string()))?;

        self.db
            .collection::<Vacancy>(database::VACANCIES)
            .find_one(doc! { "_id": vacancy_oid })
            .await?
            .ok_or_else(|| Error::NotFound("can't find vacancy".to_string()))?;

        let users = self.db.collection::<User>(database::USERS);
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = users
            .find_one_and_update(
                apply_filter(*user_id, vacancy_oid, now),
                apply_update(vacancy_oid, now),
            )
            .with_options(options)
            .await?;

        if let Some(user) = updated {
            return Ok(user);
        }

        // The guarded update matched nothing. Re-read with the same identity
        // and replay the rule to name the rejection.
        let user = users
            .find_one(doc! { "_id": *user_id })
            .await?
            .ok_or_else(|| Error::NotFound("user not found".to_string()))?;
        check_application(&user, &vacancy_oid, now)?;

        // The rule passes against the re-read document, so the state moved
        // between the update and the read. Nothing is retried automatically.
        Err(Error::Internal(
            "user document changed during application".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn guarded_filter_encodes_both_predicates() {
        let user_id = ObjectId::new();
        let vacancy_id = ObjectId::new();
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 9, 30, 0).unwrap();
        let midnight = Utc.with_ymd_and_hms(2026, 8, 30, 0, 0, 0).unwrap();
        let next_midnight = Utc.with_ymd_and_hms(2026, 8, 31, 0, 0, 0).unwrap();

        let expected = doc! {
            "_id": user_id,
            "vacancies.vacancy_id": { "$ne": vacancy_id },
            "$expr": { "$lt": [
                { "$size": { "$filter": {
                    "input": { "$ifNull": ["$vacancies", []] },
                    "as": "app",
                    "cond": { "$and": [
                        { "$gte": ["$$app.applied_at", BsonDateTime::from_chrono(midnight)] },
                        { "$lt": ["$$app.applied_at", BsonDateTime::from_chrono(next_midnight)] },
                    ] },
                } } },
                3_i64,
            ] },
        };
        assert_eq!(apply_filter(user_id, vacancy_id, now), expected);
    }

    #[test]
    fn append_update_pushes_one_timestamped_entry() {
        let vacancy_id = ObjectId::new();
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 9, 30, 0).unwrap();

        let expected = doc! {
            "$push": { "vacancies": {
                "vacancy_id": vacancy_id,
                "applied_at": BsonDateTime::from_chrono(now),
            } },
        };
        assert_eq!(apply_update(vacancy_id, now), expected);
    }
}
