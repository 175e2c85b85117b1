//! The component view controller.
//!
//! A [`ComponentViewController`] owns a [`ComponentView`] and drives its
//! [`ControllerLifecycle`] from the host toolkit's controller callbacks:
//!
//! | Host event            | Controller method                     |
//! |-----------------------|---------------------------------------|
//! | view model assigned   | [`set_view_model`](ComponentViewController::set_view_model) |
//! | view finished loading | [`view_did_load`](ComponentViewController::view_did_load)   |
//! | view about to appear  | [`view_will_appear`](ComponentViewController::view_will_appear) |

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use horizon_mvvm_core::Signal;
use horizon_mvvm_core::logging::targets;
use parking_lot::Mutex;

use super::lifecycle::{ComponentView, ControllerLifecycle, LifecycleState};

type ChildController = Arc<dyn Any + Send + Sync>;

/// Connects a [`ComponentView`] to its view model.
pub struct ComponentViewController<V: ComponentView> {
    view: Arc<V>,
    lifecycle: ControllerLifecycle<V>,
    view_loaded: AtomicBool,
    children: Mutex<Vec<ChildController>>,
    /// Emitted once, when the controller is first prepared.
    pub loaded: Signal<()>,
    /// Emitted once, when the view first appears with a view model.
    pub mounted: Signal<()>,
}

impl<V: ComponentView> ComponentViewController<V> {
    /// Creates a controller for `view`.
    ///
    /// The view counts as loaded from here on. `make_observer` builds the
    /// observer of each bind pass.
    pub fn new<F>(view: V, make_observer: F) -> Self
    where
        F: Fn() -> V::Observer + Send + Sync + 'static,
    {
        let controller = Self {
            view: Arc::new(view),
            lifecycle: ControllerLifecycle::new(make_observer),
            view_loaded: AtomicBool::new(false),
            children: Mutex::new(Vec::new()),
            loaded: Signal::new(),
            mounted: Signal::new(),
        };
        controller.view_did_load();
        controller
    }

    /// The controlled view.
    pub fn view(&self) -> &Arc<V> {
        &self.view
    }

    /// The attached view model.
    pub fn view_model(&self) -> Option<Arc<V::ViewModel>> {
        self.lifecycle.view_model()
    }

    /// The lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    /// The observer of the latest bind pass.
    pub fn observer(&self) -> Option<Arc<V::Observer>> {
        self.lifecycle.observer()
    }

    /// Attaches a view model and, if the view is loaded, binds it.
    ///
    /// Every call re-binds, even with the same view model.
    pub fn set_view_model(&self, view_model: Arc<V::ViewModel>) {
        self.lifecycle.attach_view_model(view_model);
        if self.view_loaded.load(Ordering::Acquire) {
            self.prepare_if_needed();
            self.lifecycle.bind_view(&self.view);
        }
    }

    /// Host callback: the view finished loading.
    pub fn view_did_load(&self) {
        self.view_loaded.store(true, Ordering::Release);
        if self.lifecycle.view_model().is_some() {
            self.prepare_if_needed();
            self.lifecycle.bind_view(&self.view);
        }
    }

    /// Host callback: the view is about to appear.
    pub fn view_will_appear(&self) {
        if self.lifecycle.mount_once() {
            self.mounted.emit(());
        }
    }

    fn prepare_if_needed(&self) {
        if self.lifecycle.prepare() {
            self.loaded.emit(());
        }
    }

    /// Adds a child controller. Adding the same controller twice is a no-op.
    ///
    /// Returns `true` if the child was added.
    pub fn add_child<C: ComponentView>(&self, child: Arc<ComponentViewController<C>>) -> bool {
        let child: ChildController = child;
        let mut children = self.children.lock();
        if children.iter().any(|existing| same_controller(existing, &child)) {
            tracing::trace!(target: targets::LIFECYCLE, "child controller already added");
            return false;
        }
        children.push(child);
        true
    }

    /// Number of child controllers.
    pub fn child_count(&self) -> usize {
        self.children.lock().len()
    }

    /// Finds the child controller whose view is `view`.
    pub fn child_for_view<C: ComponentView>(&self, view: &Arc<C>) -> Option<Arc<ComponentViewController<C>>> {
        let children = self.children.lock().clone();
        children
            .into_iter()
            .filter_map(|child| child.downcast::<ComponentViewController<C>>().ok())
            .find(|controller| Arc::ptr_eq(controller.view(), view))
    }
}

fn same_controller(a: &ChildController, b: &ChildController) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

impl<V: ComponentView> fmt::Debug for ComponentViewController<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentViewController")
            .field("lifecycle", &self.lifecycle)
            .field("view_loaded", &self.view_loaded.load(Ordering::Relaxed))
            .field("children", &self.child_count())
            .finish()
    }
}
