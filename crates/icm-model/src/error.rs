use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("owner code {0:?} must be 3 letters")]
    InvalidOwnerCode(String),
    #[error("equipment category id {0:?} must be a letter")]
    InvalidCategoryId(char),
    #[error("serial number {0:?} must be 6 digits")]
    InvalidSerialNumber(String),
    #[error("serial number {0} is out of range 0..=999999")]
    SerialOutOfRange(u32),
    #[error("no owner codes available to generate container numbers")]
    NoOwners,
    #[error("count must be greater than 0")]
    ZeroCount,
}

pub type Result<T> = std::result::Result<T, ModelError>;
