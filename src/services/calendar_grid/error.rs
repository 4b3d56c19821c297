use thiserror::Error;

/// Errors raised by the calendar grid engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// A month, year or cell dimension outside its accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GridError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        GridError::InvalidArgument(message.into())
    }
}
