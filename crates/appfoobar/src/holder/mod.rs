//! The non-owning value holder

mod display;
mod impls;

/// Holds an optional reference to an `f64` owned elsewhere.
///
/// The holder never allocates, copies or frees the referenced value. The
/// lifetime `'a` ties it to whoever owns the `f64`, so the referent is
/// guaranteed to outlive the holder.
///
/// State is changed only through [`ValueHolder::set_value`], which replaces
/// the reference when given `Some` and leaves it untouched when given `None`.
#[derive(Clone, Copy, Default)]
pub struct ValueHolder<'a> {
    value: Option<&'a f64>,
}

impl<'a> ValueHolder<'a> {
    /// Create a holder with no reference.
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Create a holder with an initial reference, which may be absent.
    pub const fn with_value(value: Option<&'a f64>) -> Self {
        Self { value }
    }

    /// The current reference, if any.
    pub const fn value(&self) -> Option<&'a f64> {
        self.value
    }

    /// Replace the held reference with `value`.
    ///
    /// `None` is ignored: the existing reference (or its absence) is kept.
    pub fn set_value(&mut self, value: Option<&'a f64>) {
        if let Some(value) = value {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                target: "appfoobar::holder",
                replaced_absent = self.value.is_none(),
                "value reference replaced"
            );
            self.value = Some(value);
        }
    }
}
