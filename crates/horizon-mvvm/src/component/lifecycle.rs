//! Controller lifecycle sequencing.
//!
//! ```text
//! Unprepared ──prepare──> Prepared ──bind_view──> ViewBound ──mount_once──> Mounted
//!                                        ^            │
//!                                        └─bind_view──┘
//! ```
//!
//! Binding may happen any number of times, each pass with a fresh observer.
//! Mounting happens at most once for the lifetime of the lifecycle.

use std::fmt;
use std::sync::Arc;

use horizon_mvvm_core::PerfSpan;
use horizon_mvvm_core::logging::{span_names, targets};
use parking_lot::Mutex;

use crate::binding::ViewObserver;
use crate::view_model::ViewModel;

/// A view that knows how to bind a view model.
pub trait ComponentView: Send + Sync + 'static {
    /// The view model this view renders.
    type ViewModel: ViewModel;

    /// The observer type created for each bind pass.
    type Observer: ViewObserver;

    /// Binds `view_model` onto this view.
    ///
    /// Subscriptions made here must be handed to `observer`, which is
    /// released when the next bind pass starts.
    fn bind(&self, observer: &Arc<Self::Observer>, view_model: &Arc<Self::ViewModel>);
}

/// Where a controller is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LifecycleState {
    /// Nothing has happened yet.
    #[default]
    Unprepared,
    /// A view model was attached to a loaded view.
    Prepared,
    /// The view has been bound at least once.
    ViewBound,
    /// The view appeared and the mount hook ran. Terminal.
    Mounted,
}

struct LifecycleInner<V: ComponentView> {
    state: LifecycleState,
    view_model: Option<Arc<V::ViewModel>>,
    observer: Option<Arc<V::Observer>>,
}

/// Sequences preparation, binding and mounting for one controller.
pub struct ControllerLifecycle<V: ComponentView> {
    inner: Mutex<LifecycleInner<V>>,
    make_observer: Box<dyn Fn() -> V::Observer + Send + Sync>,
}

impl<V: ComponentView> ControllerLifecycle<V> {
    /// Creates a lifecycle that builds observers with `make_observer`.
    pub fn new<F>(make_observer: F) -> Self
    where
        F: Fn() -> V::Observer + Send + Sync + 'static,
    {
        Self {
            inner: Mutex::new(LifecycleInner {
                state: LifecycleState::Unprepared,
                view_model: None,
                observer: None,
            }),
            make_observer: Box::new(make_observer),
        }
    }

    /// The current state.
    pub fn state(&self) -> LifecycleState {
        self.inner.lock().state
    }

    /// The attached view model.
    pub fn view_model(&self) -> Option<Arc<V::ViewModel>> {
        self.inner.lock().view_model.clone()
    }

    /// The observer of the latest bind pass.
    pub fn observer(&self) -> Option<Arc<V::Observer>> {
        self.inner.lock().observer.clone()
    }

    /// Attaches a view model, replacing any previous one.
    ///
    /// Does not bind; the owner decides when to.
    pub fn attach_view_model(&self, view_model: Arc<V::ViewModel>) {
        self.inner.lock().view_model = Some(view_model);
    }

    /// Moves `Unprepared` to `Prepared`. Returns `true` the one time it does.
    pub fn prepare(&self) -> bool {
        let mut inner = self.inner.lock();
        if inner.state != LifecycleState::Unprepared {
            return false;
        }
        inner.state = LifecycleState::Prepared;
        tracing::debug!(target: targets::LIFECYCLE, "controller prepared");
        true
    }

    /// Binds the view with a fresh observer.
    ///
    /// Without a view model this does nothing and returns `false`. Otherwise
    /// the previous observer, and every subscription it held, is released
    /// before `view` is bound again.
    pub fn bind_view(&self, view: &V) -> bool {
        let Some(view_model) = self.view_model() else {
            tracing::trace!(target: targets::LIFECYCLE, "bind_view without a view model ignored");
            return false;
        };

        let observer = Arc::new((self.make_observer)());
        let previous = {
            let mut inner = self.inner.lock();
            if inner.state < LifecycleState::ViewBound {
                inner.state = LifecycleState::ViewBound;
            }
            inner.observer.replace(Arc::clone(&observer))
        };
        drop(previous);

        let _perf = PerfSpan::new(span_names::BIND_VIEW);
        view.bind(&observer, &view_model);
        true
    }

    /// Runs the mount hook once for the lifetime of this lifecycle.
    ///
    /// Returns `true` only on the call that mounted. Calls before a view
    /// model is attached and prepared are ignored and do not use up the
    /// mount.
    pub fn mount_once(&self) -> bool {
        let view_model = {
            let mut inner = self.inner.lock();
            match (inner.state, inner.view_model.clone()) {
                (LifecycleState::Mounted, _) => return false,
                (LifecycleState::Unprepared, _) | (_, None) => {
                    tracing::trace!(target: targets::LIFECYCLE, "mount before preparation ignored");
                    return false;
                }
                (_, Some(view_model)) => {
                    inner.state = LifecycleState::Mounted;
                    view_model
                }
            }
        };

        tracing::debug!(target: targets::LIFECYCLE, "mounting");
        view_model.will_mount();
        true
    }
}

impl<V: ComponentView> fmt::Debug for ControllerLifecycle<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("ControllerLifecycle")
            .field("state", &inner.state)
            .field("has_view_model", &inner.view_model.is_some())
            .field("has_observer", &inner.observer.is_some())
            .finish()
    }
}
