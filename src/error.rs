use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtFindError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Directory not found: {}", .path.display())]
    MissingRoot { path: PathBuf },

    #[error("Not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("Failed to read {}: {message}", .path.display())]
    Walk { path: PathBuf, message: String },

    #[error("Failed to write log file {}: {source}", .path.display())]
    LogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for ExtFindError {
    fn user_message(&self) -> String {
        match self {
            ExtFindError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            ExtFindError::MissingRoot { path } => {
                format!("Directory not found -> {}", path.display())
            }
            ExtFindError::NotADirectory { path } => {
                format!("Not a directory -> {}", path.display())
            }
            ExtFindError::Walk { path, message } => {
                format!("Skipping {}: {}", path.display(), message)
            }
            ExtFindError::LogWrite { source, .. } => {
                format!("Error saving log file: {}", source)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            ExtFindError::Config { .. } => Some(
                "Check your configuration file syntax, or run with --generate-config to create a fresh one.".to_string()
            ),
            ExtFindError::MissingRoot { .. } => Some(
                "Check the spelling of the directory, or pass an absolute path.".to_string()
            ),
            ExtFindError::Walk { .. } => Some(
                "Ensure you have read permission for the directory being searched.".to_string()
            ),
            ExtFindError::LogWrite { .. } => Some(
                "Make sure the parent directory of --output exists and is writable.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ExtFindError {
    fn from(error: toml::de::Error) -> Self {
        ExtFindError::Config {
            message: error.to_string(),
        }
    }
}

impl From<walkdir::Error> for ExtFindError {
    fn from(error: walkdir::Error) -> Self {
        let path = error.path().map(PathBuf::from).unwrap_or_default();
        let message = match error.io_error() {
            Some(io) if io.kind() == std::io::ErrorKind::PermissionDenied => {
                "permission denied".to_string()
            }
            Some(io) => io.to_string(),
            None => error.to_string(),
        };
        ExtFindError::Walk { path, message }
    }
}

pub type Result<T> = std::result::Result<T, ExtFindError>;
