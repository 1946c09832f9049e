use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}:{line}: invalid code {code:?}: {message}")]
    InvalidCode {
        path: PathBuf,
        line: u64,
        code: String,
        message: String,
    },

    #[error("could not determine the application directories")]
    NoAppDirs,

    #[error("download from {url} failed: {message}")]
    Download { url: String, message: String },

    #[error("timeout is set to 5m to relieve server load, try in {retry_in}s again")]
    RateLimited { retry_in: u64 },

    #[error("invalid timestamp in {path}: {message}")]
    Timestamp { path: PathBuf, message: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Csv {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StandardsError>;
