//! Entry points binding a collection view model onto a list widget.
//!
//! These are what a [`ComponentView`](crate::component::ComponentView)
//! calls from its `bind` hook:
//!
//! ```ignore
//! impl ComponentView for ContactsView {
//!     type ViewModel = ContactList;
//!     type Observer = CellBinder;
//!
//!     fn bind(&self, observer: &Arc<CellBinder>, view_model: &Arc<ContactList>) {
//!         bind_list::<_, _, ItemsDataSource<Contact>, _>(&self.table, view_model, observer);
//!     }
//! }
//! ```

use std::sync::Arc;

use super::observer::ViewObserver;
use crate::collection::{
    DataSource, DataSourceHost, ListDelegate, SectionedDataSource, SectionedListDelegate,
    observe_collection,
};
use crate::view_model::{CollectionData, CollectionViewModel, SectionedCollectionViewModel};
use crate::widget::ListWidget;

/// Binds a flat list.
///
/// Installs a new [`ListDelegate`] on `widget` and feeds it the view model's
/// data. Static data is installed once. Observed data is installed as it is
/// now and again on every later emission, for as long as `observer` lives.
/// Either way the widget reloads once here.
#[tracing::instrument(level = "debug", skip_all, name = "bind_list")]
pub fn bind_list<W, VM, DS, O>(
    widget: &Arc<W>,
    view_model: &Arc<VM>,
    observer: &Arc<O>,
) -> Arc<ListDelegate<W, VM, DS, O>>
where
    W: ListWidget,
    VM: CollectionViewModel,
    DS: DataSource<Data = VM::Data, Item = VM::Item>,
    O: ViewObserver<View = W::View>,
{
    let delegate = ListDelegate::attach(widget, view_model);
    feed(&delegate, observer, view_model.data());
    delegate
}

/// Binds a sectioned list. See [`bind_list`].
#[tracing::instrument(level = "debug", skip_all, name = "bind_sectioned_list")]
pub fn bind_sectioned_list<W, VM, DS, O>(
    widget: &Arc<W>,
    view_model: &Arc<VM>,
    observer: &Arc<O>,
) -> Arc<SectionedListDelegate<W, VM, DS, O>>
where
    W: ListWidget,
    VM: SectionedCollectionViewModel,
    DS: SectionedDataSource<Data = VM::Data, Item = VM::Item, Section = VM::Section>,
    O: ViewObserver<View = W::View>,
{
    let delegate = SectionedListDelegate::attach(widget, view_model);
    feed(&delegate, observer, view_model.data());
    delegate
}

fn feed<H>(host: &Arc<H>, observer: &Arc<H::Observer>, data: CollectionData<H::Data>)
where
    H: DataSourceHost,
    H::Data: Clone + Send + Sync + 'static,
{
    match data {
        CollectionData::Static(data) => host.become_data_source(observer, data),
        CollectionData::Observed(observable) => {
            host.become_data_source(observer, observable.get());
            observe_collection(host, observer, &observable);
        }
    }
}
