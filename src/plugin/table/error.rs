/// Error type for table generation
use thiserror::Error;

/// Failure reported by a table's row generation.
///
/// The adapter turns any variant into a code-1 response with the display
/// form as the diagnostic text; nothing here is fatal to the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("{0}")]
    Generate(String),

    /// Generation observed the cancellation token and stopped early.
    #[error("generation cancelled")]
    Cancelled,
}

impl From<String> for TableError {
    fn from(message: String) -> Self {
        TableError::Generate(message)
    }
}

impl From<&str> for TableError {
    fn from(message: &str) -> Self {
        TableError::Generate(message.to_owned())
    }
}
