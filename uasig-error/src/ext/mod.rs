use std::fmt::{self, Debug, Display};

mod opaque;
pub use opaque::OpaqueError;
use opaque::MessageError;

/// Attach a description of what was being attempted
/// to the error of a [`Result`], or to a missing [`Option`] value.
///
/// ```
/// use uasig_error::ErrorContext;
///
/// let err = "2k".parse::<usize>().context("parse max length").unwrap_err();
/// assert_eq!(err.to_string(), "parse max length: invalid digit found in string");
///
/// let err = None::<&str>.context("rule token").unwrap_err();
/// assert_eq!(err.to_string(), "rule token: value is missing");
/// ```
pub trait ErrorContext: sealed::SealedContext {
    /// Value kept in case of success.
    type Value;

    /// Wrap the error, if any, with the given context.
    fn context<C>(self, context: C) -> Result<Self::Value, OpaqueError>
    where
        C: Display + Send + Sync + 'static;

    /// Same as [`ErrorContext::context`], but only builds
    /// the context when there is an error to wrap.
    fn with_context<C, F>(self, context: F) -> Result<Self::Value, OpaqueError>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ErrorContext for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    type Value = T;

    fn context<C>(self, context: C) -> Result<T, OpaqueError>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|error| error.context(context))
    }

    fn with_context<C, F>(self, context: F) -> Result<T, OpaqueError>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| error.context(context()))
    }
}

impl<T> ErrorContext for Option<T> {
    type Value = T;

    fn context<C>(self, context: C) -> Result<T, OpaqueError>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| MessageError(MISSING_VALUE).context(context))
    }

    fn with_context<C, F>(self, context: F) -> Result<T, OpaqueError>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| MessageError(MISSING_VALUE).context(context()))
    }
}

const MISSING_VALUE: &str = "value is missing";

/// Methods available on any thread safe error.
///
/// ```
/// use uasig_error::{ErrorExt, OpaqueError};
///
/// let err = OpaqueError::from_display("unknown token").context("load rules");
/// assert_eq!(err.to_string(), "load rules: unknown token");
/// assert_eq!(err.root_cause().to_string(), "unknown token");
/// ```
pub trait ErrorExt: sealed::SealedError {
    /// Wrap this error with the given context.
    fn context<C>(self, context: C) -> OpaqueError
    where
        C: Display + Send + Sync + 'static;

    /// Follow the [`source`](std::error::Error::source) chain to its end.
    fn root_cause(&self) -> &(dyn std::error::Error + 'static);
}

impl<E> ErrorExt for E
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> OpaqueError
    where
        C: Display + Send + Sync + 'static,
    {
        OpaqueError::from_std(ContextError {
            context,
            error: self,
        })
    }

    fn root_cause(&self) -> &(dyn std::error::Error + 'static) {
        let mut cause: &(dyn std::error::Error + 'static) = self;
        while let Some(source) = cause.source() {
            cause = source;
        }
        cause
    }
}

/// An error prefixed by what was being attempted.
struct ContextError<C, E> {
    context: C,
    error: E,
}

impl<C: Display, E: Debug> Debug for ContextError<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextError")
            .field("context", &format_args!("{}", self.context))
            .field("error", &self.error)
            .finish()
    }
}

impl<C: Display, E: Display> Display for ContextError<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.error)
    }
}

impl<C, E> std::error::Error for ContextError<C, E>
where
    C: Display,
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

mod sealed {
    pub trait SealedContext {}

    impl<T, E> SealedContext for Result<T, E> where E: std::error::Error + Send + Sync + 'static {}
    impl<T> SealedContext for Option<T> {}

    pub trait SealedError {}

    impl<E> SealedError for E where E: std::error::Error + Send + Sync + 'static {}
}
