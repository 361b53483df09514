use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to create the temporary directory or write a fixture file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A fixture path tried to escape the command root.
    ///
    /// Paths passed to the builder must be relative and must not contain `..`.
    #[error("Fixture path must be relative to the command root: {0}")]
    InvalidPath(String),
}
