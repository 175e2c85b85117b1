//! Collection binding: identifiers, templates, data sources and delegates.
//!
//! This module contains everything between a native list widget and a
//! collection view model:
//!
//! - [`IndexPath`], [`Identifier`], [`TemplateKey`] - addressing
//! - [`Template`], [`TemplateCache`] - one-time template resolution
//! - [`DataSource`], [`SectionedDataSource`] - positional views over data
//! - [`ListDelegate`], [`SectionedListDelegate`] - the widget callbacks
//! - [`observe_collection`] - reinstalls data on every emission

mod bridge;
mod data_source;
mod delegate;
mod identifier;
mod index;
mod sectioned;
mod template;

pub use bridge::observe_collection;
pub use data_source::{
    DataSource, ItemRow, ItemSlot, ItemsDataSource, SectionRow, SectionSlot, SectionedDataSource,
    SectionsDataSource,
};
pub use delegate::{DataSourceHost, ListDelegate};
pub use identifier::{Identifier, SectionKind, TemplateKey};
pub use index::IndexPath;
pub use sectioned::SectionedListDelegate;
pub use template::{Template, TemplateCache};
