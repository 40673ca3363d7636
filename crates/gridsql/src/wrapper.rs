use std::any::Any;

use crate::{Error, Result, statement::PreparedStatement};

/// Access to the concrete types behind a driver handle.
///
/// A handle wraps its own type and, optionally, one delegate it exposes through
/// [`delegate`](Self::delegate). Unwrapping returns a reference to the handle or delegate
/// itself, never a copy.
pub trait Wrapper: Any {
    #[doc(hidden)]
    fn delegate(&self) -> Option<&dyn Any> {
        None
    }

    /// Returns `true` if [`unwrap::<T>`](Self::unwrap) would succeed.
    fn is_wrapper_for<T: Any>(&self) -> bool
    where
        Self: Sized,
    {
        let this: &dyn Any = self;
        this.is::<T>() || self.delegate().is_some_and(|inner| inner.is::<T>())
    }

    /// Returns this handle, or its delegate, as a `T`.
    fn unwrap<T: Any>(&self) -> Result<&T>
    where
        Self: Sized,
    {
        let this: &dyn Any = self;
        this.downcast_ref::<T>()
            .or_else(|| self.delegate().and_then(|inner| inner.downcast_ref::<T>()))
            .ok_or_else(Error::unwrap_to::<T>)
    }
}

impl Wrapper for crate::Connection {}

impl Wrapper for crate::Statement {}

impl Wrapper for PreparedStatement {
    fn delegate(&self) -> Option<&dyn Any> {
        Some(&self.statement)
    }
}
