use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use mongodb::bson::oid::ObjectId;

use crate::config::get_config;
use crate::error::Result;
use crate::middleware::auth::Claims;

/// Issues a bearer token whose subject is the user's document id.
pub fn issue_token(user_id: &ObjectId) -> Result<String> {
    let config = get_config();
    let expires_at = Utc::now() + Duration::seconds(config.jwt_ttl_seconds);
    let claims = Claims {
        sub: user_id.to_hex(),
        exp: expires_at.timestamp() as usize,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )?;
    Ok(token)
}
