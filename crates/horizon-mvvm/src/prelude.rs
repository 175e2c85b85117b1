//! Prelude module for Horizon MVVM.
//!
//! ```ignore
//! use horizon_mvvm::prelude::*;
//! ```
//!
//! This provides access to:
//! - Observation primitives (`Signal`, `Property`, `Observable`, `Command`)
//! - View model traits
//! - Collection addressing, data sources and delegates
//! - Binding entry points and the observer seam
//! - Component controllers

// ============================================================================
// Observation
// ============================================================================

pub use horizon_mvvm_core::{Command, ConnectionGuard, Observable, Property, Signal};

// ============================================================================
// View Models
// ============================================================================

pub use crate::view_model::{
    CollectionData, CollectionViewModel, ItemViewModel, SectionedCollectionViewModel, ViewModel,
};

// ============================================================================
// Collections
// ============================================================================

pub use crate::collection::{
    DataSource, Identifier, IndexPath, ItemRow, ItemsDataSource, ListDelegate, SectionKind,
    SectionRow, SectionedDataSource, SectionedListDelegate, SectionsDataSource, Template,
    TemplateKey,
};

// ============================================================================
// Binding
// ============================================================================

pub use crate::binding::{
    Converter, SubscriptionBag, ViewObserver, bind_list, bind_property, bind_sectioned_list,
};

// ============================================================================
// Widgets and Components
// ============================================================================

pub use crate::component::{ComponentView, ComponentViewController};
pub use crate::config::ListMetrics;
pub use crate::widget::{ListCallbacks, ListLayout, ListWidget};
