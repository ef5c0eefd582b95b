use thiserror::Error;

/// Errors raised by board manipulation, the oracle helpers and the AI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Bad symbols, bad board shape, out of range indices
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    // A move was requested where none can be made
    #[error("invalid state: {message}")]
    InvalidState { message: String },

    #[error("cell {index} is already occupied")]
    OccupiedCell { index: usize },
}

impl Error {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument { message: message.into() }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Error::InvalidState { message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
