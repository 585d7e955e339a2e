use mongodb::{Client, Database};
use std::env;

use crate::error::OpsError;

pub async fn connect() -> Result<Database, OpsError> {
    let uri = env::var("MONGODB_URI").map_err(|_| OpsError::MissingConfig("MONGODB_URI".into()))?;
    let db_name = env::var("MONGODB_DATABASE").unwrap_or_else(|_| "hrops".to_string());

    let client = Client::with_uri_str(&uri).await?;
    Ok(client.database(&db_name))
}

pub fn require_env(name: &str) -> Result<String, OpsError> {
    env::var(name).map_err(|_| OpsError::MissingConfig(name.to_string()))
}
