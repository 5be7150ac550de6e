//! Thread-safe handle around a curve.

use std::sync::{Arc, PoisonError, RwLock};

/// Shared, lock-protected curve.
///
/// Readers run concurrently; a writer gets exclusive access. Clones share
/// the same curve. A lock poisoned by a panicking closure is recovered, since
/// every curve operation leaves the curve in a consistent state.
///
/// # Example
///
/// ```
/// use curve_core::market_data::curves::{RateCurve, SharedCurve};
///
/// let shared = SharedCurve::new(RateCurve::new());
/// let writer = shared.clone();
///
/// std::thread::spawn(move || {
///     writer.write(|c| c.add_point(1.0, 0.03)).unwrap();
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(shared.read(|c| c.interpolate_rate(1.0)), 0.03);
/// ```
#[derive(Debug, Default)]
pub struct SharedCurve<C> {
    inner: Arc<RwLock<C>>,
}

impl<C> SharedCurve<C> {
    /// Wraps `curve` in a new handle.
    pub fn new(curve: C) -> Self {
        Self {
            inner: Arc::new(RwLock::new(curve)),
        }
    }

    /// Runs `f` under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Runs `f` under the write lock.
    pub fn write<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl<C: Clone> SharedCurve<C> {
    /// Returns a copy of the current curve.
    pub fn snapshot(&self) -> C {
        self.read(C::clone)
    }
}

impl<C> Clone for SharedCurve<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
