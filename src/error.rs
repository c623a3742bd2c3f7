use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Not Found")]
    NotFound,

    #[error("Forbidden")]
    Forbidden,

    #[error("Backend returned {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("HTTP error")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Message shown to the user as a transient notification. Validation
    /// failures carry their own text; everything else collapses to one
    /// generic retry message.
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Validation(msg) => msg,
            _ => "An error occurred. Please try again.",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
