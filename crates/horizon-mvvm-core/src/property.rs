//! Reactive properties for view models.
//!
//! A [`Property<T>`] is a value cell with built-in change notification: a
//! successful [`set`](Property::set) emits the new value on the property's
//! [`changed`](Property::changed) signal. View models expose their bindable
//! fields as properties, and field binders connect to `changed` to keep the
//! rendered view in sync.
//!
//! # Example
//!
//! ```
//! use horizon_mvvm_core::Property;
//!
//! let title = Property::new("Inbox".to_string());
//! let _guard = title.changed().connect_scoped(|value| {
//!     println!("title is now {value}");
//! });
//!
//! assert!(title.set("Archive".to_string()));
//! assert!(!title.set("Archive".to_string())); // unchanged, nothing emitted
//! ```

use std::fmt;

use parking_lot::RwLock;

use crate::logging::targets;
use crate::signal::Signal;

/// A reactive property that notifies when its value changes.
///
/// Notification is edge-triggered: setting a value equal to the current one
/// is a no-op. Use [`crate::Observable`] when every assignment must be
/// observed, regardless of equality.
pub struct Property<T> {
    value: RwLock<T>,
    changed: Signal<T>,
}

impl<T: Clone + Send + Sync + 'static> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
            changed: Signal::new(),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, consider using `with()` instead.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value without change notification.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }

    /// The signal emitted after each effective change.
    pub fn changed(&self) -> &Signal<T> {
        &self.changed
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// When the value changes, `changed` is emitted after the lock is
    /// released, so slots may read the property.
    pub fn set(&self, value: T) -> bool {
        self.replace(value).is_some()
    }

    /// Set the value, returning the old value if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let old = {
            let mut current = self.value.write();
            if *current == value {
                return None;
            }
            std::mem::replace(&mut *current, value.clone())
        };
        tracing::trace!(target: targets::PROPERTY, "property changed");
        self.changed.emit(value);
        Some(old)
    }
}

impl<T: Clone + Default + Send + Sync + 'static> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug + Send + Sync + 'static> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}
