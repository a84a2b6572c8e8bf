use crate::config::get_config;
use crate::error::Result;
use mongodb::{
    bson::doc,
    options::{ClientOptions, IndexOptions},
    Client, Database, IndexModel,
};
use tracing::info;

pub const COMPANIES: &str = "companies";
pub const USERS: &str = "users";
pub const VACANCIES: &str = "vacancies";

/// Connects to MongoDB and verifies the connection with a ping.
pub async fn connect() -> Result<Database> {
    let config = get_config();

    let mut options = ClientOptions::parse(&config.database_url).await?;
    options.app_name = Some("jobboard-backend".to_string());

    let client = Client::with_options(options)?;
    let db = client.database(&config.database_name);

    db.run_command(doc! { "ping": 1 }).await?;
    info!("Connected to MongoDB database {}", config.database_name);

    Ok(db)
}

/// Email uniqueness is enforced by the store, not by application checks;
/// the pre-insert lookups only exist to produce friendly error messages.
pub async fn ensure_indexes(db: &Database) -> Result<()> {
    let email_unique = |name: &str| {
        IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(name.to_string())
                    .build(),
            )
            .build()
    };

    db.collection::<crate::models::user::User>(USERS)
        .create_indexes([email_unique("users_email_unique")])
        .await?;
    db.collection::<crate::models::company::Company>(COMPANIES)
        .create_indexes([email_unique("companies_email_unique")])
        .await?;

    Ok(())
}
