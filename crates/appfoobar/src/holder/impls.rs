//! ValueHolder predicates, extractors and From traits

use super::ValueHolder;
use crate::error::{HolderError, Result};

// ═══════════════════════════════════════════════════════════════════
// Predicates
// ═══════════════════════════════════════════════════════════════════

impl ValueHolder<'_> {
    /// Check if a reference is held
    pub const fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Check if no reference is held
    pub const fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// Check if the held reference points at `candidate` itself.
    ///
    /// Compares addresses, not values: two distinct `f64`s that are equal do
    /// not refer to each other.
    pub fn refers_to(&self, candidate: &f64) -> bool {
        self.value.is_some_and(|held| std::ptr::eq(held, candidate))
    }
}

// ═══════════════════════════════════════════════════════════════════
// Extractors
// ═══════════════════════════════════════════════════════════════════

impl<'a> ValueHolder<'a> {
    /// The held reference, or [`HolderError::Absent`]
    pub fn try_value(&self) -> Result<&'a f64> {
        self.value.ok_or(HolderError::Absent)
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Implementations
// ═══════════════════════════════════════════════════════════════════

impl<'a> From<&'a f64> for ValueHolder<'a> {
    fn from(value: &'a f64) -> Self {
        ValueHolder::with_value(Some(value))
    }
}

impl<'a> From<Option<&'a f64>> for ValueHolder<'a> {
    fn from(value: Option<&'a f64>) -> Self {
        ValueHolder::with_value(value)
    }
}
