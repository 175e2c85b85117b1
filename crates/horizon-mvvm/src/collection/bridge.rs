//! The observation bridge: re-installs a fresh data source on every emission
//! of an observable collection.

use std::sync::Arc;

use horizon_mvvm_core::Observable;
use horizon_mvvm_core::logging::targets;

use super::delegate::DataSourceHost;
use crate::binding::ViewObserver;

/// Subscribes `host` to `observable`.
///
/// Every emission builds a fresh data source from the emitted collection and
/// installs it, reloading the widget once. The current value is not replayed
/// on subscription.
///
/// The subscription is handed to `observer`, so dropping the observer (the
/// end of a bind pass) disconnects it. The callback itself holds only weak
/// handles to `host` and `observer`; emissions that find either gone are
/// ignored.
pub fn observe_collection<H>(host: &Arc<H>, observer: &Arc<H::Observer>, observable: &Observable<H::Data>)
where
    H: DataSourceHost,
    H::Data: Clone + Send + Sync + 'static,
{
    let weak_host = Arc::downgrade(host);
    let weak_observer = Arc::downgrade(observer);

    let subscription = observable.observe(move |data| {
        match (weak_host.upgrade(), weak_observer.upgrade()) {
            (Some(host), Some(observer)) => {
                tracing::debug!(target: targets::BRIDGE, "collection emitted, reinstalling data source");
                host.become_data_source(&observer, data.clone());
            }
            _ => tracing::trace!(target: targets::BRIDGE, "emission ignored, binding released"),
        }
    });
    observer.retain(subscription);
}
