pub mod error;
pub mod models;
pub mod repository;
pub mod test_utils;

pub use error::{DbError, DbResult};
pub use mongodb::bson;
pub use repository::{MongoRepository, SeedRepository};

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use util::config::{AppConfig, DEFAULT_DATABASE};

/// Opens a client for `config.mongo_uri` and returns a handle to the target database.
///
/// The database is `MONGO_DATABASE` when set, otherwise the one named in the
/// connection string, otherwise [`DEFAULT_DATABASE`]. A `ping` is issued so an
/// unreachable server fails here rather than on the first write.
pub async fn connect(config: &AppConfig) -> DbResult<Database> {
    let mut options = ClientOptions::parse(&config.mongo_uri).await?;
    options.app_name = Some(config.project_name.clone());
    let client = Client::with_options(options)?;

    let db = match config.mongo_database.as_deref() {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
    };

    db.run_command(doc! { "ping": 1 }, None).await?;
    tracing::info!(database = db.name(), "connected to MongoDB");

    Ok(db)
}
