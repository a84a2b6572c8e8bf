use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Database;

use crate::database;
use crate::dto::user_dto::{LoginUserPayload, RegisterUserPayload};
use crate::error::{is_duplicate_key, Error, Result};
use crate::models::user::User;
use crate::utils::{crypto, token};

#[derive(Clone)]
pub struct UserService {
    db: Database,
}

impl UserService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Registers an applicant and returns a bearer token for the new account.
    pub async fn register(&self, payload: RegisterUserPayload) -> Result<String> {
        let email = payload.email.unwrap_or_default();
        let users = self.db.collection::<User>(database::USERS);

        if users.find_one(doc! { "email": &email }).await?.is_some() {
            return Err(Error::Conflict("User already exists".to_string()));
        }

        let password_hash = crypto::hash_password(&payload.password.unwrap_or_default())?;
        let user = User::new(
            payload.first_name.unwrap_or_default(),
            payload.last_name.unwrap_or_default(),
            email,
            password_hash,
        );

        let inserted = users.insert_one(&user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                Error::Conflict("User already exists".to_string())
            } else {
                Error::Database(e)
            }
        })?;

        let user_id = inserted
            .inserted_id
            .as_object_id()
            .ok_or_else(|| Error::Internal("inserted user id was not an ObjectId".to_string()))?;

        token::issue_token(&user_id)
    }

    pub async fn login(&self, payload: LoginUserPayload) -> Result<String> {
        let email = payload.email.unwrap_or_default();
        let users = self.db.collection::<User>(database::USERS);

        // One message for both unknown email and bad password.
        let user = users
            .find_one(doc! { "email": &email })
            .await?
            .ok_or_else(|| Error::BadRequest("Invalid Credentials".to_string()))?;

        let password = payload.password.unwrap_or_default();
        if !crypto::verify_password(&password, &user.password_hash)? {
            return Err(Error::BadRequest("Invalid Credentials".to_string()));
        }

        let user_id = user
            .id
            .ok_or_else(|| Error::Internal("user document has no id".to_string()))?;

        token::issue_token(&user_id)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>> {
        let users = self.db.collection::<User>(database::USERS);
        Ok(users.find_one(doc! { "_id": *id }).await?)
    }
}
