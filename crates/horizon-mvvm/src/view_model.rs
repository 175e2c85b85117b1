//! View-model capability traits.
//!
//! A list screen is described by a tree of view models:
//!
//! ```text
//! CollectionViewModel ──creates──> ItemViewModel      (one per row, on demand)
//!         │
//!         └──(sectioned)──creates──> SectionViewModel (one per header/footer, on demand)
//! ```
//!
//! Item and section view models are never materialized up front and never
//! cached: the delegate calls the factory every time it needs one, so
//! factories must be cheap and free of side effects.

use std::sync::Arc;

use horizon_mvvm_core::{Command, Observable};

/// Base trait for every view model.
pub trait ViewModel: Send + Sync + 'static {
    /// Called once, the first time the owning controller becomes visible.
    fn will_mount(&self) {}
}

/// A row view model.
///
/// Rows are selectable when they expose a `select` command. The default
/// implementation exposes neither command, making the row inert.
pub trait ItemViewModel: ViewModel {
    /// Command run when the row is selected.
    fn select(&self) -> Option<&Command> {
        None
    }

    /// Command run when the row is deselected.
    fn unselect(&self) -> Option<&Command> {
        None
    }
}

/// How a collection view model exposes its data.
///
/// `Static` data is installed once per bind. `Observed` data is installed on
/// every emission of the observable, each emission forcing a full reload.
pub enum CollectionData<D> {
    /// A fixed snapshot.
    Static(D),
    /// A collection that may be replaced over time.
    Observed(Arc<Observable<D>>),
}

impl<D: Clone + Send + Sync + 'static> CollectionData<D> {
    /// The data as it is right now.
    pub fn snapshot(&self) -> D {
        match self {
            Self::Static(data) => data.clone(),
            Self::Observed(observable) => observable.get(),
        }
    }
}

impl<D: Clone> Clone for CollectionData<D> {
    fn clone(&self) -> Self {
        match self {
            Self::Static(data) => Self::Static(data.clone()),
            Self::Observed(observable) => Self::Observed(Arc::clone(observable)),
        }
    }
}

/// The root view model of a list.
///
/// The associated `Data` and `Item` types must match those of the data source
/// the list is bound with; the compiler enforces the pairing at the binding
/// call site, so no runtime casts are needed.
pub trait CollectionViewModel: ViewModel {
    /// The collection type the data source is built from.
    type Data: Clone + Send + Sync + 'static;

    /// The raw row type.
    type Item;

    /// The row view model produced by [`create_item_view_model`](Self::create_item_view_model).
    type ItemViewModel: ItemViewModel;

    /// The list's data, fixed or observed.
    fn data(&self) -> CollectionData<Self::Data>;

    /// Builds the view model for one row.
    fn create_item_view_model(&self, item: Self::Item) -> Self::ItemViewModel;
}

/// A collection view model whose sections have their own view models.
pub trait SectionedCollectionViewModel: CollectionViewModel {
    /// The raw section payload type.
    type Section;

    /// The header/footer view model type.
    type SectionViewModel: ViewModel;

    /// Builds the view model for a section header or footer.
    ///
    /// `section` is `None` when the data source has no payload for the
    /// section.
    fn create_section_view_model(&self, section: Option<Self::Section>) -> Self::SectionViewModel;
}
