use std::path::PathBuf;
use thiserror::Error;

/// Why a single raw ledger row could not become a transaction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum RecordError {
    /// Date text is not `DD/MM/YYYY` or names a day that does not exist.
    #[error("Malformed date '{text}' (expected DD/MM/YYYY)")]
    MalformedDate { text: String },

    /// Amount text is not a decimal number once thousands separators are removed.
    #[error("Malformed amount '{text}'")]
    MalformedAmount { text: String },

    #[error("Expected 3 fields (date, description, amount), found {fields}")]
    MalformedRecord { fields: usize },

    #[error("Field {field} is not valid UTF-8")]
    MalformedEncoding { field: usize },
}

/// Errors that end a ledger run.
#[derive(Error, Debug)]
pub(crate) enum LedgerError {
    #[error("Failed to open ledger {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read ledger row {position}: {source}")]
    Read {
        position: usize,
        #[source]
        source: csv::Error,
    },

    /// A row was rejected while running with the abort policy.
    #[error("Row {position} [{raw}]: {source}")]
    Rejected {
        position: usize,
        raw: String,
        #[source]
        source: RecordError,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid period key '{0}' (expected e.g. 2023-March)")]
pub(crate) struct ParsePeriodKeyError(pub(crate) String);

/// Errors from building, writing or re-reading the exported documents.
#[derive(Error, Debug)]
pub(crate) enum ExportError {
    /// A breakdown entry would overwrite the `total` field of its parent object.
    #[error("'{key}' under '{parent}' collides with the reserved \"total\" field")]
    ReservedKey { parent: String, key: String },

    #[error("'{0}' has no \"total\" field")]
    MissingTotal(String),

    #[error(transparent)]
    PeriodKey(#[from] ParsePeriodKeyError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
