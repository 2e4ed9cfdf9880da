//! Error taxonomy for note operations.
//!
//! Every failure is caught at the operation boundary and surfaced to the
//! user as a dialog; none of these terminate the application.

use thiserror::Error;

/// Errors produced by the note service.
#[derive(Debug, Error)]
pub enum NoteError {
    /// The store could not be opened or queried. Fatal to the operation
    /// attempted, not to the application.
    #[error("note store unavailable: {0}")]
    StoreUnavailable(#[from] sea_orm::DbErr),

    /// An operation referenced an identifier with no matching row.
    #[error("note {0} not found")]
    NotFound(i32),

    /// Writing an exported note to disk failed. The store is untouched.
    #[error("export failed: {0}")]
    ExportFailed(#[from] std::io::Error),
}
