use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
