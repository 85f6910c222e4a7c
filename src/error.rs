use std::path::PathBuf;

pub type UnveilResult<T> = Result<T, UnveilError>;

#[derive(thiserror::Error, Debug)]
pub enum UnveilError {
    #[error("file not found: '{}'", .0.display())]
    FileNotFound(PathBuf),

    #[error("invalid permutation: {0}")]
    Permutation(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UnveilError {
    pub fn permutation(msg: impl Into<String>) -> Self {
        Self::Permutation(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
