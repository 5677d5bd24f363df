use thiserror::Error;

use crate::db::DatabaseError;

/// Errors surfaced by the workflow operations (front desk, exam room,
/// cashier). Validation failures never write any state.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Required field is empty: {field}")]
    Validation { field: &'static str },

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<rusqlite::Error> for WorkflowError {
    fn from(e: rusqlite::Error) -> Self {
        WorkflowError::Database(DatabaseError::Sqlite(e))
    }
}

/// Presence check for required form fields.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), WorkflowError> {
    if value.trim().is_empty() {
        return Err(WorkflowError::Validation { field });
    }
    Ok(())
}
