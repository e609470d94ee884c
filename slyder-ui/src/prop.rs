//! Callback handles shared between a control and its host.
//!
//! ## Usage
//!
//! Wrap a value-change handler in [`CallbackWith`] and register it on a
//! control. Handles are cheap to clone and compare by identity, so a host can
//! tell whether the handler it installed is still the active one.

use std::sync::Arc;

/// Stable, comparable slot handle for any shared callable trait object.
///
/// `Slot` compares by identity (`Arc::ptr_eq`).
struct Slot<F: ?Sized> {
    inner: Arc<F>,
}

impl<F: ?Sized> Slot<F> {
    fn from_shared(handler: Arc<F>) -> Self {
        Self { inner: handler }
    }

    fn get(&self) -> &F {
        &self.inner
    }
}

impl<F: ?Sized> Clone for Slot<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: ?Sized> PartialEq for Slot<F> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Stable, comparable callback handle for `Fn(T) -> R`.
///
/// Used for value-change handlers:
///
/// ```
/// use std::sync::{Arc, atomic::{AtomicU64, Ordering}};
/// use slyder_ui::prop::CallbackWith;
///
/// let last = Arc::new(AtomicU64::new(0));
/// let sink = Arc::clone(&last);
/// let on_change = CallbackWith::new(move |value: f64| {
///     sink.store(value.to_bits(), Ordering::SeqCst);
/// });
///
/// on_change.call(0.75);
/// assert_eq!(f64::from_bits(last.load(Ordering::SeqCst)), 0.75);
/// assert!(on_change == on_change.clone());
/// ```
pub struct CallbackWith<T, R = ()> {
    slot: Slot<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            slot: Slot::from_shared(Arc::new(handler)),
        }
    }

    /// Invoke the callback with an argument.
    pub fn call(&self, value: T) -> R {
        (self.slot.get())(value)
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T, R> std::fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackWith")
            .field("handler", &Arc::as_ptr(&self.slot.inner))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    #[test]
    fn test_clones_compare_equal_distinct_handlers_do_not() {
        let a = CallbackWith::new(|_: f64| {});
        let b = CallbackWith::new(|_: f64| {});
        assert!(a == a.clone());
        assert!(a != b);
    }

    #[test]
    fn test_call_reaches_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let callback: CallbackWith<f64> = (move |_: f64| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .into();
        callback.call(1.0);
        callback.clone().call(2.0);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_return_value_passes_through() {
        let double = CallbackWith::new(|v: f64| v * 2.0);
        assert_eq!(double.call(4.0), 8.0);
    }
}
