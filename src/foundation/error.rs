pub type DenseGridResult<T> = Result<T, DenseGridError>;

#[derive(thiserror::Error, Debug)]
pub enum DenseGridError {
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DenseGridError {
    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        Self::InvalidDimension(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for DenseGridError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}
