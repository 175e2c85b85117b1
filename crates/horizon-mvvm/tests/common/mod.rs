//! A contacts screen used by the integration tests.

#![allow(dead_code)]

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use horizon_mvvm::binding::{SubscriptionBag, ViewObserver, bind_property};
use horizon_mvvm::collection::{
    Identifier, IndexPath, ItemRow, SectionKind, SectionRow, SectionsDataSource, Template,
    TemplateKey,
};
use horizon_mvvm::component::ComponentView;
use horizon_mvvm::view_model::{
    CollectionData, CollectionViewModel, ItemViewModel, SectionedCollectionViewModel, ViewModel,
};
use horizon_mvvm::widget::{ListCallbacks, ListWidget};
use horizon_mvvm::{Command, ConnectionGuard, Observable, Property};
use parking_lot::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub favorite: bool,
}

impl Contact {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            favorite: false,
        }
    }

    pub fn favorite(name: &str) -> Self {
        Self {
            name: name.to_string(),
            favorite: true,
        }
    }
}

impl ItemRow for Contact {
    fn identifier(&self) -> Identifier {
        if self.favorite {
            "favorite".into()
        } else {
            "contact".into()
        }
    }

    fn placeholder() -> Option<Identifier> {
        Some("empty".into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letter(pub char);

impl SectionRow for Letter {
    fn identifier(&self) -> Identifier {
        "letter".into()
    }
}

/// A rendered cell or section view.
#[derive(Debug)]
pub struct Cell {
    pub identifier: String,
    pub label: Mutex<String>,
}

impl Cell {
    pub fn label(&self) -> String {
        self.label.lock().clone()
    }
}

#[derive(Default)]
pub struct TableWidget {
    delegate: Mutex<Option<Arc<dyn ListCallbacks<Arc<Cell>>>>>,
    registrations: Mutex<Vec<TemplateKey>>,
    reloads: AtomicUsize,
}

impl TableWidget {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn delegate(&self) -> Arc<dyn ListCallbacks<Arc<Cell>>> {
        self.delegate.lock().clone().expect("no delegate installed")
    }

    pub fn reloads(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }

    pub fn registrations(&self) -> Vec<TemplateKey> {
        self.registrations.lock().clone()
    }

    /// Builds every visible row the way a real table would after a reload.
    pub fn render(&self) -> Vec<Vec<Arc<Cell>>> {
        let delegate = self.delegate();
        (0..delegate.number_of_sections())
            .map(|section| {
                (0..delegate.number_of_items(section))
                    .map(|item| delegate.cell_for_item(IndexPath::new(section, item)))
                    .collect()
            })
            .collect()
    }

    fn cell(identifier: &Identifier) -> Arc<Cell> {
        Arc::new(Cell {
            identifier: identifier.to_string(),
            label: Mutex::new(String::new()),
        })
    }
}

impl ListWidget for TableWidget {
    type View = Arc<Cell>;

    fn register(&self, _template: &Template, key: &TemplateKey) {
        self.registrations.lock().push(key.clone());
    }

    fn dequeue_reusable_cell(&self, identifier: &Identifier, _position: IndexPath) -> Arc<Cell> {
        Self::cell(identifier)
    }

    fn dequeue_reusable_section_view(&self, identifier: &Identifier, _kind: SectionKind) -> Arc<Cell> {
        Self::cell(identifier)
    }

    fn set_delegate(&self, delegate: Arc<dyn ListCallbacks<Arc<Cell>>>) {
        *self.delegate.lock() = Some(delegate);
    }

    fn reload_data(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }
}

/// Binds contact titles into cell labels.
#[derive(Default)]
pub struct CellBinder {
    subscriptions: SubscriptionBag,
    binds: AtomicUsize,
}

impl CellBinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn binds(&self) -> usize {
        self.binds.load(Ordering::SeqCst)
    }

    pub fn subscriptions(&self) -> usize {
        self.subscriptions.len()
    }
}

impl ViewObserver for CellBinder {
    type View = Arc<Cell>;

    fn bind<M: ViewModel>(&self, view_model: Arc<M>, _template: &Template, target: &Arc<Cell>) {
        self.binds.fetch_add(1, Ordering::SeqCst);
        let view_model: Arc<dyn Any + Send + Sync> = view_model;
        if let Ok(contact) = view_model.downcast::<ContactItem>() {
            let cell = Arc::clone(target);
            self.retain(bind_property(&contact.title, move |title: &String| {
                *cell.label.lock() = title.clone();
            }));
        }
    }

    fn retain(&self, subscription: ConnectionGuard) {
        self.subscriptions.push(subscription);
    }
}

pub struct ContactItem {
    pub title: Property<String>,
    select: Command,
}

impl ContactItem {
    /// A row whose select command logs the contact's name into `opened`.
    pub fn new(contact: Contact, opened: &Arc<Mutex<Vec<String>>>) -> Self {
        let opened = Arc::clone(opened);
        let name = contact.name.clone();
        Self {
            title: Property::new(contact.name),
            select: Command::new("open_contact", move || opened.lock().push(name.clone())),
        }
    }
}

impl ViewModel for ContactItem {}

impl ItemViewModel for ContactItem {
    fn select(&self) -> Option<&Command> {
        Some(&self.select)
    }
}

pub struct LetterHeader {
    pub letter: Option<char>,
}

impl ViewModel for LetterHeader {}

/// The address book: contacts grouped by initial, replaceable at runtime.
pub struct AddressBook {
    pub groups: Arc<Observable<Vec<(Letter, Vec<Contact>)>>>,
    pub opened: Arc<Mutex<Vec<String>>>,
    pub mounts: AtomicUsize,
}

impl AddressBook {
    pub fn new(groups: Vec<(Letter, Vec<Contact>)>) -> Self {
        Self {
            groups: Arc::new(Observable::new(groups)),
            opened: Arc::default(),
            mounts: AtomicUsize::new(0),
        }
    }
}

impl ViewModel for AddressBook {
    fn will_mount(&self) {
        self.mounts.fetch_add(1, Ordering::SeqCst);
    }
}

impl CollectionViewModel for AddressBook {
    type Data = Vec<(Letter, Vec<Contact>)>;
    type Item = Contact;
    type ItemViewModel = ContactItem;

    fn data(&self) -> CollectionData<Self::Data> {
        CollectionData::Observed(Arc::clone(&self.groups))
    }

    fn create_item_view_model(&self, item: Contact) -> ContactItem {
        ContactItem::new(item, &self.opened)
    }
}

impl SectionedCollectionViewModel for AddressBook {
    type Section = Letter;
    type SectionViewModel = LetterHeader;

    fn create_section_view_model(&self, section: Option<Letter>) -> LetterHeader {
        LetterHeader {
            letter: section.map(|Letter(c)| c),
        }
    }
}

pub struct AddressBookView {
    pub table: Arc<TableWidget>,
}

impl AddressBookView {
    pub fn new() -> Self {
        Self {
            table: TableWidget::new(),
        }
    }
}

impl ComponentView for AddressBookView {
    type ViewModel = AddressBook;
    type Observer = CellBinder;

    fn bind(&self, observer: &Arc<CellBinder>, view_model: &Arc<AddressBook>) {
        horizon_mvvm::binding::bind_sectioned_list::<_, _, SectionsDataSource<Letter, Contact>, _>(
            &self.table,
            view_model,
            observer,
        );
    }
}

pub fn install_test_subscriber() -> tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();
    tracing::subscriber::set_default(subscriber)
}
