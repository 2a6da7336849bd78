//! Result type alias and context extension.

use super::context::ErrorContext;
use super::listick_error::ListickError;

/// Result using [`ListickError`].
pub type ListickResult<T> = Result<T, ListickError>;

/// Attach [`ErrorContext`] to a failing result.
pub trait ResultExt<T> {
    /// # Example
    ///
    /// ```ignore
    /// use listick::error::{ErrorContext, ResultExt};
    ///
    /// let config = std::fs::read_to_string(&path)
    ///     .context(ErrorContext::new("read_config").with_target(path.display().to_string()))?;
    /// ```
    fn context(self, ctx: ErrorContext) -> ListickResult<T>;

    /// Like [`ResultExt::context`], building the context only on error.
    fn with_context<F>(self, f: F) -> ListickResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<ListickError>,
{
    fn context(self, ctx: ErrorContext) -> ListickResult<T> {
        self.map_err(|e| e.into().with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> ListickResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}
