use thiserror::Error;

#[derive(Error, Debug)]
pub enum SjrError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("JSON decode error: {0}")]
    Decode(#[source] anyhow::Error),
    #[error("JSON encode error: {0}")]
    Encode(#[source] anyhow::Error),
    #[error("\"{path}\" path not found")]
    PathNotFound { path: String },
    #[error("\"{path}\" is not a string field")]
    NotAString { path: String },
    #[error("Division by zero: total weight is 0")]
    DivisionByZero,
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),
}

impl SjrError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn path_not_found(path: impl Into<String>) -> Self {
        Self::PathNotFound { path: path.into() }
    }
}

pub type Result<T> = std::result::Result<T, SjrError>;
