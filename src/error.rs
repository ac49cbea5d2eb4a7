use thiserror::Error;

/// Library error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("item sequence must contain at least one item")]
    EmptySequence,

    #[error("invalid key press `{0}`, expected SECONDS=KEY")]
    InvalidKeyPress(String),
}

pub type Result<T> = std::result::Result<T, Error>;
