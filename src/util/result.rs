use std::error::Error;

/// Panicking escape hatch for the operator-based accessors (`Index`), which can't return a
/// [`Result`] themselves.
pub(crate) trait ResultExtension<T> {
    /// Unwraps an [`Ok`], otherwise panics with the [`Display`](std::fmt::Display) message of the
    /// error, so the panic reads like the error that caused it.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        self.unwrap_or_else(|error| panic!("{error}"))
    }
}
