//! Observable values whose identity may change over time.
//!
//! An [`Observable<T>`] is the observation primitive consumed by the
//! collection bridge: a view model exposes its data as an observable when the
//! whole collection can be replaced (reloaded from storage, refetched from the
//! network, ...). Every [`set`](Observable::set) is delivered to subscribers,
//! even when the new value equals the old one.

use std::fmt;

use parking_lot::RwLock;

use crate::logging::targets;
use crate::signal::{ConnectionGuard, Signal};

/// A value cell that broadcasts every replacement.
///
/// Subscribing with [`observe`](Self::observe) does not replay the current
/// value; callers that need it read [`get`](Self::get) first.
///
/// # Example
///
/// ```
/// use horizon_mvvm_core::Observable;
///
/// let rows = Observable::new(vec!["a", "b"]);
/// let _guard = rows.observe(|rows| println!("{} rows", rows.len()));
/// rows.set(vec!["a", "b", "c"]);
/// ```
pub struct Observable<T> {
    value: RwLock<T>,
    emitted: Signal<T>,
}

impl<T: Clone + Send + Sync + 'static> Observable<T> {
    /// Create an observable holding an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
            emitted: Signal::new(),
        }
    }

    /// Get a copy of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the current value without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Replace the value and notify every subscriber.
    pub fn set(&self, value: T) {
        *self.value.write() = value.clone();
        tracing::trace!(
            target: targets::OBSERVABLE,
            subscribers = self.emitted.connection_count(),
            "observable replaced"
        );
        self.emitted.emit(value);
    }

    /// Subscribe to replacements.
    ///
    /// The callback runs synchronously inside [`set`](Self::set). Dropping the
    /// returned guard unsubscribes; emissions already dispatched are not
    /// cancelled.
    pub fn observe<F>(&self, on_emit: F) -> ConnectionGuard
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.emitted.connect_scoped(on_emit)
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.emitted.connection_count()
    }
}

impl<T: Clone + Default + Send + Sync + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &*self.value.read())
            .field("emitted", &self.emitted)
            .finish()
    }
}

static_assertions::assert_impl_all!(Observable<Vec<String>>: Send, Sync);
