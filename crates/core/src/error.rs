use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhpscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("file search error: {0}")]
    Search(String),
    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, PhpscopeError>;
