use crate::{Placeholder, Shape, ValueKind};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// No renderer is registered for the kind of a parameter.
    #[error("Unsupported type: {0}")]
    UnsupportedType(ValueKind),
    /// A parameter was supplied but its placeholder does not appear in the statement.
    #[error("Could not resolve {kind} parameter {0}", kind = .0.kind())]
    UnresolvedPlaceholder(Placeholder),
    /// The statement still contains a placeholder after binding.
    #[error("Unbound parameter present: {0}")]
    UnboundPlaceholderRemaining(Placeholder),
    #[error("Expected a {expected} destination, got a {actual}")]
    ShapeMismatch { expected: Shape, actual: Shape },
    #[error("{0}")]
    Conversion(String),
    #[error(transparent)]
    Driver(#[from] anyhow::Error),
}

impl Error {
    /// Wraps any driver side error, keeping its source chain.
    pub fn driver<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Driver(anyhow::Error::new(error))
    }

    pub fn msg(message: impl Into<String>) -> Self {
        Error::Driver(anyhow::Error::msg(message.into()))
    }

    pub fn is_binding(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedType(..)
                | Error::UnresolvedPlaceholder(..)
                | Error::UnboundPlaceholderRemaining(..)
        )
    }
}
