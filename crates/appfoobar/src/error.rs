//! Error types for appfoobar

use thiserror::Error;

/// Error type for holder accessors that require a reference
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolderError {
    /// The holder does not currently reference a value
    #[error("No value referenced")]
    Absent,
}

/// Result type alias for appfoobar operations
pub type Result<T> = std::result::Result<T, HolderError>;
