//! # appfoobar
//!
//! A holder for a single optional, non-owning reference to an `f64`.
//!
//! [`ValueHolder`] borrows a value owned somewhere else and exposes it
//! through a getter and a guarded setter. The setter ignores an absent
//! candidate, so once a reference is held it can be replaced but never
//! cleared.
//!
//! ```
//! use appfoobar::ValueHolder;
//!
//! let d = 3.25;
//! let mut holder = ValueHolder::new();
//! assert!(holder.value().is_none());
//!
//! holder.set_value(Some(&d));
//! holder.set_value(None);
//! assert_eq!(holder.value(), Some(&3.25));
//! ```
//!
//! ## Features
//!
//! - **`tracing`** (default): emits a `trace`-level event on the
//!   `appfoobar::holder` target whenever a held reference is replaced

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod holder;

// Re-export main types
pub use error::{HolderError, Result};
pub use holder::ValueHolder;

/// appfoobar version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
