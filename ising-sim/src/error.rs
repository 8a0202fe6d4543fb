use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IsingError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, IsingError>;
