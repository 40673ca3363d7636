//! Types for working with errors produced by gridsql.

use std::any::type_name;

/// A specialized `Result` type for gridsql.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all the ways a method can fail within gridsql.
///
/// The `Display` output of each variant is the exact message callers observe.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An optional feature of the database-access API that the driver does not provide, or a
    /// capability argument outside the supported set.
    #[error("{0}")]
    FeatureNotSupported(String),

    /// [`Wrapper::unwrap`](crate::Wrapper::unwrap) was asked for a type the receiver does not
    /// wrap.
    #[error("Cannot unwrap to {type_name}")]
    Unwrap { type_name: &'static str },

    /// The connection has been closed.
    #[error("Connection is closed")]
    ConnectionClosed,

    /// The statement has been closed.
    #[error("Statement is closed")]
    StatementClosed,

    /// An argument was outside its valid range.
    #[error("{0}")]
    InvalidArgument(String),

    /// The connection options are inconsistent.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl Error {
    pub(crate) fn unsupported(message: impl Into<String>) -> Self {
        Error::FeatureNotSupported(message.into())
    }

    pub(crate) fn unwrap_to<T: ?Sized>() -> Self {
        Error::Unwrap {
            type_name: type_name::<T>(),
        }
    }

    /// Returns `true` if this error reports an unsupported feature or capability.
    pub fn is_feature_not_supported(&self) -> bool {
        matches!(self, Error::FeatureNotSupported(_))
    }
}
