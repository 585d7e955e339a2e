use bson::doc;
use mongodb::Database;
use tracing::info;

use crate::error::OpsError;
use crate::modules::users::model::UserAccount;

const COLLECTION_NAME: &str = "users";

/// Absent user is a valid `None`, never an error.
pub async fn find_by_email(db: &Database, email: &str) -> Result<Option<UserAccount>, OpsError> {
    let coll = db.collection::<UserAccount>(COLLECTION_NAME);
    Ok(coll.find_one(doc! { "email": email }).await?)
}

/// Create the account if no document with its email exists. Returns whether a
/// document was written.
pub async fn ensure_account(db: &Database, account: UserAccount) -> Result<bool, OpsError> {
    if find_by_email(db, &account.email).await?.is_some() {
        info!(email = %account.email, "account already exists");
        return Ok(false);
    }

    let coll = db.collection::<UserAccount>(COLLECTION_NAME);
    coll.insert_one(&account).await?;
    info!(email = %account.email, role = %account.role, "account created");
    Ok(true)
}
