//! The observer seam: field-level binding of view models onto views.

use std::fmt;
use std::sync::Arc;

use horizon_mvvm_core::{ConnectionGuard, Property};
use parking_lot::Mutex;

use super::converter::Converter;
use crate::collection::Template;
use crate::view_model::ViewModel;

/// Performs live binding between view models and rendered views.
///
/// An observer is created for one bind pass of a controller and owns every
/// subscription made during that pass, including the collection bridge's.
/// Dropping the observer therefore tears down all live bindings of the pass.
/// The list delegate refers to its observer weakly and never extends its
/// lifetime.
pub trait ViewObserver: Send + Sync + 'static {
    /// The view type this observer binds onto.
    type View;

    /// Binds `view_model` onto `target`, rendered with `template`.
    fn bind<M: ViewModel>(&self, view_model: Arc<M>, template: &Template, target: &Self::View);

    /// Keeps `subscription` alive for as long as the observer lives.
    fn retain(&self, subscription: ConnectionGuard);
}

/// A bag of subscriptions released together.
///
/// Observers typically embed one and forward [`ViewObserver::retain`] to it.
#[derive(Default)]
pub struct SubscriptionBag {
    subscriptions: Mutex<Vec<ConnectionGuard>>,
}

impl SubscriptionBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a subscription.
    pub fn push(&self, subscription: ConnectionGuard) {
        self.subscriptions.lock().push(subscription);
    }

    /// Number of held subscriptions.
    pub fn len(&self) -> usize {
        self.subscriptions.lock().len()
    }

    /// Returns `true` if the bag holds nothing.
    pub fn is_empty(&self) -> bool {
        self.subscriptions.lock().is_empty()
    }

    /// Drops every held subscription.
    pub fn clear(&self) {
        let released = std::mem::take(&mut *self.subscriptions.lock());
        drop(released);
    }
}

impl fmt::Debug for SubscriptionBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionBag")
            .field("len", &self.len())
            .finish()
    }
}

/// Pushes the current value of `property` into `sink`, then every change.
///
/// The returned guard ends the binding; hand it to
/// [`ViewObserver::retain`] to tie it to the observer. The sink never runs
/// under the property's lock, so it may write back to `property`.
pub fn bind_property<T, F>(property: &Property<T>, sink: F) -> ConnectionGuard
where
    T: Clone + Send + Sync + 'static,
    F: Fn(&T) + Send + Sync + 'static,
{
    let current = property.get();
    sink(&current);
    property.changed().connect_scoped(sink)
}

/// Like [`bind_property`], passing each value through `converter` first.
pub fn bind_property_with<C, F>(
    property: &Property<C::Value>,
    converter: C,
    sink: F,
) -> ConnectionGuard
where
    C: Converter,
    C::Value: Clone + Send + Sync + 'static,
    F: Fn(C::Output) + Send + Sync + 'static,
{
    bind_property(property, move |value| sink(converter.convert(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::converter_fn;

    #[test]
    fn test_bind_property_pushes_current_then_changes() {
        let title = Property::new("a".to_string());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = seen.clone();
        let guard = bind_property(&title, move |v: &String| seen_clone.lock().push(v.clone()));

        title.set("b".to_string());
        drop(guard);
        title.set("c".to_string());

        assert_eq!(*seen.lock(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_sink_may_write_back_to_property() {
        let name = Arc::new(Property::new("ada".to_string()));

        let weak = Arc::downgrade(&name);
        let _guard = bind_property(&name, move |v: &String| {
            if let Some(name) = weak.upgrade() {
                name.set(v.to_uppercase());
            }
        });
        assert_eq!(name.get(), "ADA");

        name.set("bob".to_string());
        assert_eq!(name.get(), "BOB");
    }

    #[test]
    fn test_bind_property_with_converter() {
        let unread = Property::new(3usize);
        let label = Arc::new(Mutex::new(String::new()));

        let label_clone = label.clone();
        let _guard = bind_property_with(
            &unread,
            converter_fn(|n: &usize| format!("{n} unread")),
            move |text| *label_clone.lock() = text,
        );
        assert_eq!(*label.lock(), "3 unread");

        unread.set(4);
        assert_eq!(*label.lock(), "4 unread");
    }

    #[test]
    fn test_bag_releases_subscriptions() {
        let value = Property::new(0);
        let bag = SubscriptionBag::new();
        bag.push(bind_property(&value, |_| {}));
        bag.push(bind_property(&value, |_| {}));

        assert_eq!(value.changed().connection_count(), 2);
        bag.clear();
        assert!(bag.is_empty());
        assert_eq!(value.changed().connection_count(), 0);
    }
}
