use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Contact with id {0} Not found")]
    NotFound(u64),

    #[error("Unrecognized field: '{0}' (expected name, email or phone)")]
    InvalidField(String),

    #[error("No contact is being created or edited")]
    NoActiveDraft,

    #[error("Could not fetch seed contacts: {0}")]
    SeedFetchFailed(String),

    #[error("Malformed contact record: {0}")]
    MalformedRecord(String),

    #[error("Invalid number format: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Validation failed: {0}")]
    Validation(String),
}

// Every reqwest failure (connect, status, body decode) surfaces as a seed failure
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::SeedFetchFailed(err.to_string())
    }
}
