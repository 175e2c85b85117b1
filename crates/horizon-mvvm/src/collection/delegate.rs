//! The list delegate: the bridge between a widget's positional callbacks and
//! a typed view-model tree.
//!
//! # Architecture
//!
//! - **Widget**: asks positional questions through [`ListCallbacks`]
//! - **Data source**: answers "what lives at this position"
//! - **View model**: builds item view models on demand
//! - **Observer**: binds those view models onto dequeued views
//!
//! The delegate owns its [`TemplateCache`] and its current data source. It
//! refers to the widget, the collection view model and the observer through
//! weak handles only. Its state lock is never held across a call into the
//! widget, the data source or the observer.
//!
//! # Usage
//!
//! ```ignore
//! use horizon_mvvm::collection::{ItemsDataSource, ListDelegate};
//!
//! let delegate = ListDelegate::<_, _, ItemsDataSource<Contact>, _>::attach(&widget, &view_model);
//! delegate.become_data_source(&observer, contacts);
//! ```

use std::fmt;
use std::sync::{Arc, Weak};

use horizon_mvvm_core::PerfSpan;
use horizon_mvvm_core::logging::{span_names, targets};
use parking_lot::{Mutex, RwLock};

use super::data_source::DataSource;
use super::identifier::{SectionKind, TemplateKey};
use super::index::IndexPath;
use super::template::{Template, TemplateCache};
use crate::binding::ViewObserver;
use crate::config::ListMetrics;
use crate::view_model::{CollectionViewModel, ItemViewModel};
use crate::widget::{ListCallbacks, ListLayout, ListWidget};

/// Something a fresh data snapshot can be installed into.
///
/// Implemented by both list delegate shapes; the observation bridge and the
/// binding entry points drive delegates through this trait.
pub trait DataSourceHost: Send + Sync + 'static {
    /// The collection type a data source is built from.
    type Data;

    /// The observer binding this host's views.
    type Observer: ViewObserver;

    /// Builds a data source over `data`, installs it and reloads the widget.
    ///
    /// `observer` becomes the observer used for subsequent binds.
    fn become_data_source(&self, observer: &Arc<Self::Observer>, data: Self::Data);
}

struct DelegateState<DS> {
    templates: TemplateCache,
    data_source: Option<Arc<DS>>,
}

/// A flat list delegate.
///
/// # Type parameters
///
/// - `W`: the widget the delegate is installed on
/// - `VM`: the collection view model
/// - `DS`: the data-source adapter, built from `VM::Data`
/// - `O`: the observer binding item view models onto `W::View`
pub struct ListDelegate<W, VM, DS, O> {
    widget: Weak<W>,
    view_model: Weak<VM>,
    observer: RwLock<Weak<O>>,
    state: Mutex<DelegateState<DS>>,
}

impl<W, VM, DS, O> ListDelegate<W, VM, DS, O>
where
    W: ListWidget,
    VM: CollectionViewModel,
    DS: DataSource<Data = VM::Data, Item = VM::Item>,
    O: ViewObserver<View = W::View>,
{
    /// Creates a delegate that is not yet installed on the widget.
    ///
    /// Most callers want [`attach`](Self::attach) instead.
    pub fn new(widget: &Arc<W>, view_model: &Arc<VM>) -> Self {
        Self {
            widget: Arc::downgrade(widget),
            view_model: Arc::downgrade(view_model),
            observer: RwLock::new(Weak::new()),
            state: Mutex::new(DelegateState {
                templates: TemplateCache::new(),
                data_source: None,
            }),
        }
    }

    /// Creates a delegate and installs it on `widget`.
    ///
    /// The widget keeps the delegate alive; the returned handle may be
    /// dropped freely.
    pub fn attach(widget: &Arc<W>, view_model: &Arc<VM>) -> Arc<Self> {
        let delegate = Arc::new(Self::new(widget, view_model));
        widget.set_delegate(Arc::clone(&delegate) as Arc<dyn ListCallbacks<W::View>>);
        delegate
    }

    /// Sets the observer used for subsequent binds.
    pub fn set_observer(&self, observer: &Arc<O>) {
        *self.observer.write() = Arc::downgrade(observer);
    }

    /// Installs `source` and reloads the widget exactly once.
    ///
    /// No diffing is attempted: a source equal to the previous one still
    /// reloads.
    pub fn set_data_source(&self, source: DS) {
        let previous = self.state.lock().data_source.replace(Arc::new(source));
        tracing::debug!(
            target: targets::DELEGATE,
            replaced = previous.is_some(),
            "data source installed"
        );
        drop(previous);

        match self.widget.upgrade() {
            Some(widget) => {
                let _perf = PerfSpan::new(span_names::RELOAD);
                widget.reload_data();
            }
            None => tracing::trace!(target: targets::DELEGATE, "widget dropped, reload skipped"),
        }
    }

    /// The currently installed data source.
    pub fn data_source(&self) -> Option<Arc<DS>> {
        self.state.lock().data_source.clone()
    }

    /// Number of templates resolved so far.
    pub fn template_count(&self) -> usize {
        self.state.lock().templates.len()
    }

    pub(crate) fn observer(&self) -> Option<Arc<O>> {
        self.observer.read().upgrade()
    }

    pub(crate) fn view_model(&self) -> Option<Arc<VM>> {
        self.view_model.upgrade()
    }

    /// The widget, which must outlive any callback it drives.
    pub(crate) fn widget(&self) -> Arc<W> {
        self.widget
            .upgrade()
            .unwrap_or_else(|| panic!("list widget dropped while driving its delegate"))
    }

    pub(crate) fn require_data_source(&self) -> Arc<DS> {
        self.data_source()
            .unwrap_or_else(|| panic!("view requested before a data source was installed"))
    }

    /// Resolves the template for `key`, registering it with the widget the
    /// first time the key is met.
    ///
    /// The state lock is released while the data source and the widget run,
    /// so `register` may call back into this delegate.
    pub(crate) fn resolve_template<F>(&self, widget: &W, key: &TemplateKey, resolve: F) -> Arc<Template>
    where
        F: FnOnce() -> Template,
    {
        let cached = self.state.lock().templates.get(key).cloned();
        if let Some(template) = cached {
            return template;
        }

        let template = resolve();
        widget.register(&template, key);
        self.state.lock().templates.find_or_create(key, || template)
    }

    fn item_view_model(&self, position: IndexPath) -> Option<VM::ItemViewModel> {
        let source = self.data_source()?;
        let item = source.item_at(position).item?;
        let view_model = self.view_model()?;
        Some(view_model.create_item_view_model(item))
    }

    fn dimension<L, M>(&self, from_layout: L, from_metrics: M) -> f32
    where
        L: FnOnce(&dyn ListLayout) -> Option<f32>,
        M: FnOnce(&ListMetrics) -> f32,
    {
        let Some(widget) = self.widget.upgrade() else {
            return from_metrics(&ListMetrics::default());
        };
        widget
            .layout()
            .and_then(|layout| from_layout(layout.as_ref()))
            .unwrap_or_else(|| from_metrics(&widget.metrics()))
    }

    pub(crate) fn number_of_sections_impl(&self) -> usize {
        self.data_source()
            .map_or(0, |source| source.number_of_sections())
    }

    pub(crate) fn number_of_items_impl(&self, section: usize) -> usize {
        self.data_source()
            .map_or(0, |source| source.number_of_items_in_section(section))
    }

    /// # Panics
    ///
    /// Panics if no data source is installed or `position` is out of range.
    pub(crate) fn cell_for_item_impl(&self, position: IndexPath) -> W::View {
        let widget = self.widget();
        let source = self.require_data_source();
        let slot = source.item_at(position);

        let key = TemplateKey::item(slot.identifier.clone());
        let template = self.resolve_template(&widget, &key, || source.item_template(&slot.identifier));
        let view = widget.dequeue_reusable_cell(&slot.identifier, position);

        let Some(item) = slot.item else {
            tracing::trace!(target: targets::DELEGATE, %position, "placeholder row left unbound");
            return view;
        };

        match (self.view_model(), self.observer()) {
            (Some(view_model), Some(observer)) => {
                let item_view_model = Arc::new(view_model.create_item_view_model(item));
                observer.bind(item_view_model, &template, &view);
            }
            _ => tracing::trace!(target: targets::DELEGATE, %position, "no live observer, cell left unbound"),
        }
        view
    }

    pub(crate) fn should_select_impl(&self, position: IndexPath) -> Option<IndexPath> {
        self.item_view_model(position)
            .filter(|item| item.select().is_some())
            .map(|_| position)
    }

    pub(crate) fn did_select_impl(&self, position: IndexPath) {
        let Some(item) = self.item_view_model(position) else {
            tracing::trace!(target: targets::DELEGATE, %position, "selected row has no view model");
            return;
        };
        match item.select() {
            Some(command) => command.execute(),
            None => tracing::trace!(target: targets::DELEGATE, %position, "row has no select command"),
        }
    }

    pub(crate) fn should_deselect_impl(&self, position: IndexPath) -> Option<IndexPath> {
        self.item_view_model(position)
            .filter(|item| item.unselect().is_some())
            .map(|_| position)
    }

    pub(crate) fn did_deselect_impl(&self, position: IndexPath) {
        let Some(item) = self.item_view_model(position) else {
            tracing::trace!(target: targets::DELEGATE, %position, "deselected row has no view model");
            return;
        };
        match item.unselect() {
            Some(command) => command.execute(),
            None => tracing::trace!(target: targets::DELEGATE, %position, "row has no unselect command"),
        }
    }

    pub(crate) fn height_for_item_impl(&self, position: IndexPath) -> f32 {
        self.dimension(|layout| layout.height_for_item(position), |m| m.row_height)
    }

    pub(crate) fn estimated_height_for_item_impl(&self, position: IndexPath) -> f32 {
        self.dimension(
            |layout| layout.estimated_height_for_item(position),
            |m| m.estimated_row_height,
        )
    }

    pub(crate) fn height_for_section_impl(&self, section: usize, kind: SectionKind) -> f32 {
        self.dimension(
            |layout| layout.height_for_section(section, kind),
            |m| m.section_height(kind),
        )
    }

    pub(crate) fn estimated_height_for_section_impl(&self, section: usize, kind: SectionKind) -> f32 {
        self.dimension(
            |layout| layout.estimated_height_for_section(section, kind),
            |m| m.estimated_section_height(kind),
        )
    }
}

impl<W, VM, DS, O> DataSourceHost for ListDelegate<W, VM, DS, O>
where
    W: ListWidget,
    VM: CollectionViewModel,
    DS: DataSource<Data = VM::Data, Item = VM::Item>,
    O: ViewObserver<View = W::View>,
{
    type Data = VM::Data;
    type Observer = O;

    fn become_data_source(&self, observer: &Arc<O>, data: VM::Data) {
        self.set_observer(observer);
        self.set_data_source(DS::from_data(data));
    }
}

impl<W, VM, DS, O> ListCallbacks<W::View> for ListDelegate<W, VM, DS, O>
where
    W: ListWidget,
    VM: CollectionViewModel,
    DS: DataSource<Data = VM::Data, Item = VM::Item>,
    O: ViewObserver<View = W::View>,
{
    fn number_of_sections(&self) -> usize {
        self.number_of_sections_impl()
    }

    fn number_of_items(&self, section: usize) -> usize {
        self.number_of_items_impl(section)
    }

    fn cell_for_item(&self, position: IndexPath) -> W::View {
        self.cell_for_item_impl(position)
    }

    fn should_select(&self, position: IndexPath) -> Option<IndexPath> {
        self.should_select_impl(position)
    }

    fn did_select(&self, position: IndexPath) {
        self.did_select_impl(position)
    }

    fn should_deselect(&self, position: IndexPath) -> Option<IndexPath> {
        self.should_deselect_impl(position)
    }

    fn did_deselect(&self, position: IndexPath) {
        self.did_deselect_impl(position)
    }

    fn height_for_item(&self, position: IndexPath) -> f32 {
        self.height_for_item_impl(position)
    }

    fn estimated_height_for_item(&self, position: IndexPath) -> f32 {
        self.estimated_height_for_item_impl(position)
    }

    fn height_for_section(&self, section: usize, kind: SectionKind) -> f32 {
        self.height_for_section_impl(section, kind)
    }

    fn estimated_height_for_section(&self, section: usize, kind: SectionKind) -> f32 {
        self.estimated_height_for_section_impl(section, kind)
    }
}

impl<W, VM, DS, O> fmt::Debug for ListDelegate<W, VM, DS, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ListDelegate")
            .field("templates", &state.templates.len())
            .field("has_data_source", &state.data_source.is_some())
            .field("widget_alive", &(self.widget.strong_count() > 0))
            .finish()
    }
}
