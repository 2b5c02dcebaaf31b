use crate::BoxError;
use std::fmt::{self, Debug, Display};

/// A type-erased error.
///
/// Returned wherever the concrete error does not matter to the caller,
/// e.g. when a JSON rule table fails to load or an enum value is unknown.
/// The original error remains reachable through [`OpaqueError::downcast_ref`]
/// and the [`source`](std::error::Error::source) chain.
#[repr(transparent)]
pub struct OpaqueError(BoxError);

impl OpaqueError {
    /// Wrap any `std` error.
    pub fn from_std(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(error))
    }

    /// Create an error which only carries a message.
    pub fn from_display(msg: impl Display + Debug + Send + Sync + 'static) -> Self {
        Self::from_std(MessageError(msg))
    }

    /// Try to get a reference to the wrapped error as `T`.
    ///
    /// This only looks at the error directly wrapped by this [`OpaqueError`],
    /// use [`ErrorExt::root_cause`](crate::ErrorExt::root_cause) to reach
    /// the error at the bottom of a context chain.
    #[must_use]
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: std::error::Error + 'static,
    {
        self.0.downcast_ref()
    }

    /// Unwrap the [`BoxError`] wrapped by this [`OpaqueError`].
    #[must_use]
    pub fn into_boxed(self) -> BoxError {
        self.0
    }
}

impl Debug for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl std::error::Error for OpaqueError {
    // transparent: the wrapped error is not part of the chain itself
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

/// Error made out of a message alone.
pub(crate) struct MessageError<M>(pub(crate) M);

impl<M: Debug> Debug for MessageError<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl<M: Display> Display for MessageError<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<M: Display + Debug> std::error::Error for MessageError<M> {}
