//! The sectioned list delegate.
//!
//! Wraps a [`ListDelegate`] and adds header/footer resolution. Section views
//! are keyed by `(identifier, kind)` in the same template cache as items.

use std::fmt;
use std::sync::Arc;

use horizon_mvvm_core::logging::targets;

use super::data_source::SectionedDataSource;
use super::delegate::{DataSourceHost, ListDelegate};
use super::identifier::{SectionKind, TemplateKey};
use super::index::IndexPath;
use crate::binding::ViewObserver;
use crate::view_model::SectionedCollectionViewModel;
use crate::widget::{ListCallbacks, ListWidget};

/// A list delegate with per-section header and footer views.
pub struct SectionedListDelegate<W, VM, DS, O> {
    base: ListDelegate<W, VM, DS, O>,
}

impl<W, VM, DS, O> SectionedListDelegate<W, VM, DS, O>
where
    W: ListWidget,
    VM: SectionedCollectionViewModel,
    DS: SectionedDataSource<Data = VM::Data, Item = VM::Item, Section = VM::Section>,
    O: ViewObserver<View = W::View>,
{
    /// Creates a delegate and installs it on `widget`.
    pub fn attach(widget: &Arc<W>, view_model: &Arc<VM>) -> Arc<Self> {
        let delegate = Arc::new(Self {
            base: ListDelegate::new(widget, view_model),
        });
        widget.set_delegate(Arc::clone(&delegate) as Arc<dyn ListCallbacks<W::View>>);
        delegate
    }

    /// The flat delegate this one extends.
    pub fn base(&self) -> &ListDelegate<W, VM, DS, O> {
        &self.base
    }

    /// Installs `source` and reloads the widget exactly once.
    pub fn set_data_source(&self, source: DS) {
        self.base.set_data_source(source);
    }

    /// Builds the header or footer view for `section`.
    ///
    /// Resolution does not depend on the section's item count: an empty
    /// section still gets its header. A section view model is created and
    /// bound only when the resolved template asks for one.
    ///
    /// # Panics
    ///
    /// Panics if no data source is installed or `section` is out of range.
    pub fn section_view(&self, section: usize, kind: SectionKind) -> W::View {
        let widget = self.base.widget();
        let source = self.base.require_data_source();
        let slot = source.section_at(section);

        let key = TemplateKey::section(slot.identifier.clone(), kind);
        let template = self
            .base
            .resolve_template(&widget, &key, || source.section_template(&slot.identifier, kind));
        let view = widget.dequeue_reusable_section_view(&slot.identifier, kind);

        if !template.needs_view_model() {
            return view;
        }

        match (self.base.view_model(), self.base.observer()) {
            (Some(view_model), Some(observer)) => {
                let section_view_model = Arc::new(view_model.create_section_view_model(slot.section));
                observer.bind(section_view_model, &template, &view);
            }
            _ => tracing::trace!(
                target: targets::DELEGATE,
                section,
                %kind,
                "no live observer, section view left unbound"
            ),
        }
        view
    }
}

impl<W, VM, DS, O> DataSourceHost for SectionedListDelegate<W, VM, DS, O>
where
    W: ListWidget,
    VM: SectionedCollectionViewModel,
    DS: SectionedDataSource<Data = VM::Data, Item = VM::Item, Section = VM::Section>,
    O: ViewObserver<View = W::View>,
{
    type Data = VM::Data;
    type Observer = O;

    fn become_data_source(&self, observer: &Arc<O>, data: VM::Data) {
        self.base.become_data_source(observer, data);
    }
}

impl<W, VM, DS, O> ListCallbacks<W::View> for SectionedListDelegate<W, VM, DS, O>
where
    W: ListWidget,
    VM: SectionedCollectionViewModel,
    DS: SectionedDataSource<Data = VM::Data, Item = VM::Item, Section = VM::Section>,
    O: ViewObserver<View = W::View>,
{
    fn number_of_sections(&self) -> usize {
        self.base.number_of_sections_impl()
    }

    fn number_of_items(&self, section: usize) -> usize {
        self.base.number_of_items_impl(section)
    }

    fn cell_for_item(&self, position: IndexPath) -> W::View {
        self.base.cell_for_item_impl(position)
    }

    fn view_for_section(&self, section: usize, kind: SectionKind) -> Option<W::View> {
        Some(self.section_view(section, kind))
    }

    fn should_select(&self, position: IndexPath) -> Option<IndexPath> {
        self.base.should_select_impl(position)
    }

    fn did_select(&self, position: IndexPath) {
        self.base.did_select_impl(position)
    }

    fn should_deselect(&self, position: IndexPath) -> Option<IndexPath> {
        self.base.should_deselect_impl(position)
    }

    fn did_deselect(&self, position: IndexPath) {
        self.base.did_deselect_impl(position)
    }

    fn height_for_item(&self, position: IndexPath) -> f32 {
        self.base.height_for_item_impl(position)
    }

    fn estimated_height_for_item(&self, position: IndexPath) -> f32 {
        self.base.estimated_height_for_item_impl(position)
    }

    fn height_for_section(&self, section: usize, kind: SectionKind) -> f32 {
        self.base.height_for_section_impl(section, kind)
    }

    fn estimated_height_for_section(&self, section: usize, kind: SectionKind) -> f32 {
        self.base.estimated_height_for_section_impl(section, kind)
    }
}

impl<W, VM, DS, O> fmt::Debug for SectionedListDelegate<W, VM, DS, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionedListDelegate")
            .field("base", &self.base)
            .finish()
    }
}
