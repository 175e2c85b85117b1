//! Data-source adapters: positional, read-only views over view-model data.
//!
//! A data source translates "position" into "identifier + optional payload".
//! The list delegate builds a fresh data source from a snapshot of the view
//! model's data each time the data is (re)installed, and never mutates it.
//!
//! Two contracts are defined:
//!
//! - [`DataSource`] - counts, item lookup and item templates
//! - [`SectionedDataSource`] - adds section lookup and header/footer templates
//!
//! with one concrete implementation each:
//!
//! - [`ItemsDataSource`] - a flat list of rows (always one section)
//! - [`SectionsDataSource`] - a list of `(section, rows)` pairs
//!
//! # Out-of-range positions
//!
//! Asking for a section or item that does not exist is a programming error of
//! the integrating widget and panics. An absent payload (a placeholder row) is
//! a normal state and is reported as `None`.

use super::identifier::{Identifier, SectionKind};
use super::index::IndexPath;
use super::template::Template;

/// What lives at a row position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSlot<T> {
    /// The row's identifier; selects its template and reuse key.
    pub identifier: Identifier,
    /// The raw item, absent for placeholder rows.
    pub item: Option<T>,
}

/// What lives at a section position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSlot<S> {
    /// The section's identifier; selects its header/footer templates.
    pub identifier: Identifier,
    /// The raw section payload, if any.
    pub section: Option<S>,
}

/// A read-only positional view over a collection of rows.
///
/// Implementations are built from a snapshot with [`from_data`](Self::from_data)
/// and must give stable answers for the lifetime of that snapshot.
pub trait DataSource: Send + Sync + 'static {
    /// The collection type the data source is built from.
    type Data;

    /// The raw item type handed to the view model's item factory.
    type Item: Clone + Send + Sync + 'static;

    /// Builds a data source over a snapshot of `data`.
    fn from_data(data: Self::Data) -> Self
    where
        Self: Sized;

    /// Number of sections. Flat sources have exactly one.
    fn number_of_sections(&self) -> usize {
        1
    }

    /// Number of rows in `section`.
    ///
    /// # Panics
    ///
    /// Panics if `section` is out of range.
    fn number_of_items_in_section(&self, section: usize) -> usize;

    /// The identifier and optional raw item at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    fn item_at(&self, position: IndexPath) -> ItemSlot<Self::Item>;

    /// Resolves the template for a row identifier.
    ///
    /// Called by the delegate only the first time an identifier is met.
    fn item_template(&self, identifier: &Identifier) -> Template;
}

/// A data source whose sections carry their own identity and payload.
pub trait SectionedDataSource: DataSource {
    /// The raw section payload handed to the section view-model factory.
    type Section: Clone + Send + Sync + 'static;

    /// The identifier and optional payload of `section`.
    ///
    /// # Panics
    ///
    /// Panics if `section` is out of range.
    fn section_at(&self, section: usize) -> SectionSlot<Self::Section>;

    /// Resolves the header or footer template for a section identifier.
    fn section_template(&self, identifier: &Identifier, kind: SectionKind) -> Template;
}

/// A row type that knows its own visual role.
///
/// # Example
///
/// ```
/// use horizon_mvvm::collection::{Identifier, ItemRow};
///
/// #[derive(Clone)]
/// enum Message {
///     Text(String),
///     Photo(String),
/// }
///
/// impl ItemRow for Message {
///     fn identifier(&self) -> Identifier {
///         match self {
///             Message::Text(_) => "text".into(),
///             Message::Photo(_) => "photo".into(),
///         }
///     }
/// }
/// ```
pub trait ItemRow: Clone + Send + Sync + 'static {
    /// The identifier selecting this row's template.
    fn identifier(&self) -> Identifier;

    /// The template for an identifier. Defaults to a bound template named
    /// after the identifier.
    fn template(identifier: &Identifier) -> Template {
        Template::new(identifier.to_string())
    }

    /// Identifier of the row shown in place of an empty list, if any.
    fn placeholder() -> Option<Identifier> {
        None
    }
}

/// A section type that knows its own visual role.
pub trait SectionRow: Clone + Send + Sync + 'static {
    /// The identifier selecting this section's header/footer templates.
    fn identifier(&self) -> Identifier;

    /// The template for a section identifier and kind. Defaults to a bound
    /// template named `"{identifier}.{kind}"`.
    fn template(identifier: &Identifier, kind: SectionKind) -> Template {
        Template::new(format!("{identifier}.{kind}"))
    }
}

/// A flat, single-section data source.
///
/// When the snapshot is empty and the row type declares a
/// [`placeholder`](ItemRow::placeholder), the source reports a single
/// placeholder row with no raw item.
#[derive(Debug, Clone)]
pub struct ItemsDataSource<T> {
    items: Vec<T>,
}

impl<T: ItemRow> ItemsDataSource<T> {
    /// Creates a data source over `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// The snapshot's rows.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    fn shows_placeholder(&self) -> Option<Identifier> {
        if self.items.is_empty() {
            T::placeholder()
        } else {
            None
        }
    }

    fn check_section(section: usize) {
        assert!(
            section == 0,
            "section {section} out of range for a flat list (1 section)"
        );
    }
}

impl<T: ItemRow> DataSource for ItemsDataSource<T> {
    type Data = Vec<T>;
    type Item = T;

    fn from_data(data: Vec<T>) -> Self {
        Self::new(data)
    }

    fn number_of_items_in_section(&self, section: usize) -> usize {
        Self::check_section(section);
        if self.shows_placeholder().is_some() {
            1
        } else {
            self.items.len()
        }
    }

    fn item_at(&self, position: IndexPath) -> ItemSlot<T> {
        Self::check_section(position.section());

        if let Some(identifier) = self.shows_placeholder() {
            assert!(
                position.item() == 0,
                "item {position} out of range (placeholder only)"
            );
            return ItemSlot {
                identifier,
                item: None,
            };
        }

        let item = self.items.get(position.item()).unwrap_or_else(|| {
            panic!(
                "item {position} out of range ({} items)",
                self.items.len()
            )
        });
        ItemSlot {
            identifier: item.identifier(),
            item: Some(item.clone()),
        }
    }

    fn item_template(&self, identifier: &Identifier) -> Template {
        T::template(identifier)
    }
}

/// A data source over `(section, rows)` pairs.
#[derive(Debug, Clone)]
pub struct SectionsDataSource<S, T> {
    sections: Vec<(S, Vec<T>)>,
}

impl<S: SectionRow, T: ItemRow> SectionsDataSource<S, T> {
    /// Creates a data source over `sections`.
    pub fn new(sections: Vec<(S, Vec<T>)>) -> Self {
        Self { sections }
    }

    fn entry(&self, section: usize) -> &(S, Vec<T>) {
        self.sections.get(section).unwrap_or_else(|| {
            panic!(
                "section {section} out of range ({} sections)",
                self.sections.len()
            )
        })
    }
}

impl<S: SectionRow, T: ItemRow> DataSource for SectionsDataSource<S, T> {
    type Data = Vec<(S, Vec<T>)>;
    type Item = T;

    fn from_data(data: Self::Data) -> Self {
        Self::new(data)
    }

    fn number_of_sections(&self) -> usize {
        self.sections.len()
    }

    fn number_of_items_in_section(&self, section: usize) -> usize {
        self.entry(section).1.len()
    }

    fn item_at(&self, position: IndexPath) -> ItemSlot<T> {
        let (_, rows) = self.entry(position.section());
        let item = rows.get(position.item()).unwrap_or_else(|| {
            panic!("item {position} out of range ({} items)", rows.len())
        });
        ItemSlot {
            identifier: item.identifier(),
            item: Some(item.clone()),
        }
    }

    fn item_template(&self, identifier: &Identifier) -> Template {
        T::template(identifier)
    }
}

impl<S: SectionRow, T: ItemRow> SectionedDataSource for SectionsDataSource<S, T> {
    type Section = S;

    fn section_at(&self, section: usize) -> SectionSlot<S> {
        let (payload, _) = self.entry(section);
        SectionSlot {
            identifier: payload.identifier(),
            section: Some(payload.clone()),
        }
    }

    fn section_template(&self, identifier: &Identifier, kind: SectionKind) -> Template {
        S::template(identifier, kind)
    }
}
