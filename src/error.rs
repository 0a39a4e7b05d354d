use std::fmt;

#[derive(Debug)]
pub enum UiError {
    ValidationError(String),
    BackendError(String),
    ExportError(String),
    ImportError(String),
    EmptyResultError,
    NetworkError(String),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::ValidationError(msg) => write!(f, "{}", msg),
            UiError::BackendError(msg) => write!(f, "Error: {}", msg),
            UiError::ExportError(msg) => write!(f, "Error: {}", msg),
            UiError::ImportError(msg) => write!(f, "Error: {}", msg),
            UiError::EmptyResultError => write!(
                f,
                "No images were generated. Please try again with a different prompt."
            ),
            UiError::NetworkError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for UiError {}

pub type Result<T> = std::result::Result<T, UiError>;
