//! The native list widget seam.
//!
//! The binding engine does not render anything. A toolkit integrates by
//! implementing [`ListWidget`] for its list/table widget, and by driving the
//! [`ListCallbacks`] object the engine installs on it.
//!
//! # Ownership
//!
//! ```text
//! widget ──Arc──> delegate (ListCallbacks)
//!    ^                │
//!    └──── Weak ──────┘
//! ```
//!
//! The widget owns its delegate. The delegate only holds a weak handle back,
//! so dropping the widget releases the whole structure.

use std::sync::Arc;

use crate::collection::{Identifier, IndexPath, SectionKind, Template, TemplateKey};
use crate::config::ListMetrics;

/// A list widget with a reuse pool.
pub trait ListWidget: Send + Sync + 'static {
    /// The reusable view type (cells, headers and footers).
    type View: Send + Sync + 'static;

    /// Registers `template` in the reuse pool under `key`.
    ///
    /// Called at most once per key for the lifetime of a delegate, with no
    /// delegate lock held: an implementation may query its delegate (for
    /// example `number_of_items` to size the pool) from here.
    fn register(&self, template: &Template, key: &TemplateKey);

    /// Dequeues a reusable cell registered under `identifier`.
    fn dequeue_reusable_cell(&self, identifier: &Identifier, position: IndexPath) -> Self::View;

    /// Dequeues a reusable header or footer view registered under `identifier`.
    fn dequeue_reusable_section_view(&self, identifier: &Identifier, kind: SectionKind)
    -> Self::View;

    /// Takes ownership of the delegate that will answer this widget's queries.
    ///
    /// Replaces (and thereby releases) any previous delegate.
    fn set_delegate(&self, delegate: Arc<dyn ListCallbacks<Self::View>>);

    /// Discards every visible row and re-queries the delegate.
    fn reload_data(&self);

    /// Optional layout overrides.
    fn layout(&self) -> Option<Arc<dyn ListLayout>> {
        None
    }

    /// Fallback dimensions used when the layout has no answer.
    fn metrics(&self) -> ListMetrics {
        ListMetrics::default()
    }
}

/// The positional callback surface a widget drives.
///
/// Every query is answered against the data source installed at the time of
/// the call.
pub trait ListCallbacks<V>: Send + Sync {
    /// Number of sections.
    fn number_of_sections(&self) -> usize;

    /// Number of rows in `section`.
    fn number_of_items(&self, section: usize) -> usize;

    /// Builds (dequeues and binds) the cell for `position`.
    fn cell_for_item(&self, position: IndexPath) -> V;

    /// Builds the header or footer view for `section`, if the list has one.
    fn view_for_section(&self, _section: usize, _kind: SectionKind) -> Option<V> {
        None
    }

    /// The position to select, or `None` to suppress selection.
    fn should_select(&self, position: IndexPath) -> Option<IndexPath>;

    /// Called after the widget selected `position`.
    fn did_select(&self, position: IndexPath);

    /// The position to deselect, or `None` to keep it selected.
    fn should_deselect(&self, position: IndexPath) -> Option<IndexPath>;

    /// Called after the widget deselected `position`.
    fn did_deselect(&self, position: IndexPath);

    /// Row height.
    fn height_for_item(&self, position: IndexPath) -> f32;

    /// Estimated row height, used before a row is laid out.
    fn estimated_height_for_item(&self, position: IndexPath) -> f32;

    /// Header or footer height.
    fn height_for_section(&self, section: usize, kind: SectionKind) -> f32;

    /// Estimated header or footer height.
    fn estimated_height_for_section(&self, section: usize, kind: SectionKind) -> f32;
}

/// Optional per-position dimension overrides.
///
/// Returning `None` falls back to the widget's [`ListMetrics`].
pub trait ListLayout: Send + Sync {
    /// Row height at `position`.
    fn height_for_item(&self, _position: IndexPath) -> Option<f32> {
        None
    }

    /// Estimated row height at `position`.
    fn estimated_height_for_item(&self, _position: IndexPath) -> Option<f32> {
        None
    }

    /// Header or footer height of `section`.
    fn height_for_section(&self, _section: usize, _kind: SectionKind) -> Option<f32> {
        None
    }

    /// Estimated header or footer height of `section`.
    fn estimated_height_for_section(&self, _section: usize, _kind: SectionKind) -> Option<f32> {
        None
    }
}
