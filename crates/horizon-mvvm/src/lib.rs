//! Horizon MVVM - view-model driven list binding.
//!
//! This crate wires a native list widget to a tree of view models:
//!
//! - [`collection`]: identifiers, templates, data sources and list delegates
//! - [`binding`]: binding entry points, observers and value converters
//! - [`component`]: component controllers and their lifecycle
//! - [`widget`]: the traits a toolkit implements for its list widget
//! - [`config`]: fallback list metrics, loadable from TOML
//!
//! The observation primitives (signals, properties, observables, commands)
//! come from `horizon-mvvm-core` and are re-exported here.
//!
//! # Example
//!
//! ```ignore
//! use horizon_mvvm::prelude::*;
//!
//! let controller = ComponentViewController::new(ContactsView::new(table), CellBinder::new);
//! controller.set_view_model(Arc::new(ContactList::load()));
//! controller.view_will_appear();
//! ```

pub use horizon_mvvm_core::*;

pub mod binding;
pub mod collection;
pub mod component;
pub mod config;
pub mod prelude;
pub mod view_model;
pub mod widget;

#[cfg(test)]
mod test_support;

static_assertions::assert_impl_all!(collection::TemplateCache: Send, Sync);
static_assertions::assert_impl_all!(config::ListMetrics: Send, Sync, Copy);
static_assertions::assert_impl_all!(binding::SubscriptionBag: Send, Sync);
