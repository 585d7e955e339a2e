use thiserror::Error;

use crate::ops::drain::DrainAborted;

#[derive(Error, Debug)]
pub enum OpsError {
    #[error("document store unavailable: {0}")]
    Store(#[from] mongodb::error::Error),
    #[error("backup file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Drain(#[from] DrainAborted),
    #[error("missing configuration: {0} must be set")]
    MissingConfig(String),
    #[error("operator declined confirmation")]
    ConfirmationDeclined,
}

/// MongoDB reports authorization failures as command error code 13
/// (`Unauthorized`). Multi-collection runs skip such collections instead of
/// aborting.
pub fn is_permission_denied(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        mongodb::error::ErrorKind::Command(cmd) => cmd.code == 13,
        _ => false,
    }
}
