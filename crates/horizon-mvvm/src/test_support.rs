//! Recording mocks shared by the unit tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use horizon_mvvm_core::{Command, ConnectionGuard, Observable};
use parking_lot::Mutex;

use crate::binding::{SubscriptionBag, ViewObserver, bind_list};
use crate::collection::{
    Identifier, IndexPath, ItemRow, ItemsDataSource, SectionKind, SectionRow, Template,
    TemplateKey,
};
use crate::component::ComponentView;
use crate::config::ListMetrics;
use crate::view_model::{
    CollectionData, CollectionViewModel, ItemViewModel, SectionedCollectionViewModel, ViewModel,
};
use crate::widget::{ListCallbacks, ListLayout, ListWidget};

// Rows and sections

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: String,
}

impl Row {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string() }
    }
}

impl ItemRow for Row {
    fn identifier(&self) -> Identifier {
        self.name.clone().into()
    }
}

/// A row type whose empty lists show a "loading" placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spinner;

impl ItemRow for Spinner {
    fn identifier(&self) -> Identifier {
        "spinner".into()
    }

    fn placeholder() -> Option<Identifier> {
        Some("loading".into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
}

impl Group {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string() }
    }
}

impl SectionRow for Group {
    fn identifier(&self) -> Identifier {
        self.name.clone().into()
    }

    fn template(identifier: &Identifier, kind: SectionKind) -> Template {
        if identifier.as_str() == "divider" {
            Template::decoration("divider")
        } else {
            Template::new(format!("{identifier}.{kind}"))
        }
    }
}

// Widget

#[derive(Debug, Clone, PartialEq)]
pub struct TestView {
    pub identifier: String,
    pub serial: usize,
}

#[derive(Default)]
pub struct RecordingWidget {
    delegate: Mutex<Option<Arc<dyn ListCallbacks<TestView>>>>,
    registered: Mutex<Vec<String>>,
    reloads: AtomicUsize,
    dequeued: AtomicUsize,
    layout: Mutex<Option<Arc<dyn ListLayout>>>,
    metrics: Mutex<ListMetrics>,
    sizes_pool_on_register: AtomicBool,
    pool_sizes: Mutex<Vec<usize>>,
}

impl RecordingWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// A widget whose `register` asks the delegate for the item count of
    /// section 0, the way a pool sized to the list would.
    pub fn sizing_pool() -> Self {
        let widget = Self::default();
        widget.sizes_pool_on_register.store(true, Ordering::SeqCst);
        widget
    }

    pub fn pool_sizes(&self) -> Vec<usize> {
        self.pool_sizes.lock().clone()
    }

    pub fn has_delegate(&self) -> bool {
        self.delegate.lock().is_some()
    }

    pub fn number_of_items(&self, section: usize) -> usize {
        let delegate = self.delegate.lock().clone();
        delegate.map_or(0, |delegate| delegate.number_of_items(section))
    }

    pub fn reload_count(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }

    pub fn registered(&self) -> Vec<String> {
        self.registered.lock().clone()
    }

    pub fn set_layout(&self, layout: Arc<dyn ListLayout>) {
        *self.layout.lock() = Some(layout);
    }

    pub fn set_metrics(&self, metrics: ListMetrics) {
        *self.metrics.lock() = metrics;
    }

    fn next_view(&self, identifier: &Identifier) -> TestView {
        TestView {
            identifier: identifier.to_string(),
            serial: self.dequeued.fetch_add(1, Ordering::SeqCst),
        }
    }
}

impl ListWidget for RecordingWidget {
    type View = TestView;

    fn register(&self, _template: &Template, key: &TemplateKey) {
        if self.sizes_pool_on_register.load(Ordering::SeqCst) {
            let size = self.number_of_items(0);
            self.pool_sizes.lock().push(size);
        }
        self.registered.lock().push(key.to_string());
    }

    fn dequeue_reusable_cell(&self, identifier: &Identifier, _position: IndexPath) -> TestView {
        self.next_view(identifier)
    }

    fn dequeue_reusable_section_view(&self, identifier: &Identifier, _kind: SectionKind) -> TestView {
        self.next_view(identifier)
    }

    fn set_delegate(&self, delegate: Arc<dyn ListCallbacks<TestView>>) {
        *self.delegate.lock() = Some(delegate);
    }

    fn reload_data(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }

    fn layout(&self) -> Option<Arc<dyn ListLayout>> {
        self.layout.lock().clone()
    }

    fn metrics(&self) -> ListMetrics {
        *self.metrics.lock()
    }
}

pub struct FixedLayout {
    pub item: Option<f32>,
    pub header: Option<f32>,
}

impl ListLayout for FixedLayout {
    fn height_for_item(&self, _position: IndexPath) -> Option<f32> {
        self.item
    }

    fn height_for_section(&self, _section: usize, kind: SectionKind) -> Option<f32> {
        match kind {
            SectionKind::Header => self.header,
            SectionKind::Footer => None,
        }
    }
}

// Observer

#[derive(Debug, Clone)]
pub struct BindRecord {
    pub template: String,
    pub target: TestView,
}

#[derive(Default)]
pub struct RecordingObserver {
    bag: SubscriptionBag,
    binds: Mutex<Vec<BindRecord>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn binds(&self) -> Vec<BindRecord> {
        self.binds.lock().clone()
    }

    pub fn bind_count(&self) -> usize {
        self.binds.lock().len()
    }

    pub fn retained(&self) -> usize {
        self.bag.len()
    }
}

impl ViewObserver for RecordingObserver {
    type View = TestView;

    fn bind<M: ViewModel>(&self, _view_model: Arc<M>, template: &Template, target: &TestView) {
        self.binds.lock().push(BindRecord {
            template: template.name().to_string(),
            target: target.clone(),
        });
    }

    fn retain(&self, subscription: ConnectionGuard) {
        self.bag.push(subscription);
    }
}

// View models

pub struct RowItem {
    select: Option<Command>,
    unselect: Option<Command>,
}

impl RowItem {
    fn inert() -> Self {
        Self {
            select: None,
            unselect: None,
        }
    }
}

impl ViewModel for RowItem {}

impl ItemViewModel for RowItem {
    fn select(&self) -> Option<&Command> {
        self.select.as_ref()
    }

    fn unselect(&self) -> Option<&Command> {
        self.unselect.as_ref()
    }
}

fn recording_command(name: &'static str, row: &Row, log: &Arc<Mutex<Vec<String>>>) -> Command {
    let row = row.name.clone();
    let log = Arc::clone(log);
    Command::new(name, move || log.lock().push(row.clone()))
}

/// A static list. Rows named `"plain"` expose no commands.
#[derive(Default)]
pub struct RowList {
    rows: Vec<Row>,
    created: AtomicUsize,
    mounts: AtomicUsize,
    commands_disabled: AtomicBool,
    selected: Arc<Mutex<Vec<String>>>,
    unselected: Arc<Mutex<Vec<String>>>,
}

impl RowList {
    pub fn new(names: &[&str]) -> Self {
        Self {
            rows: names.iter().copied().map(Row::new).collect(),
            ..Self::default()
        }
    }

    pub fn rows(&self) -> Vec<Row> {
        self.rows.clone()
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn mount_count(&self) -> usize {
        self.mounts.load(Ordering::SeqCst)
    }

    pub fn selected(&self) -> Vec<String> {
        self.selected.lock().clone()
    }

    pub fn unselected(&self) -> Vec<String> {
        self.unselected.lock().clone()
    }

    pub fn disable_commands(&self) {
        self.commands_disabled.store(true, Ordering::SeqCst);
    }
}

impl ViewModel for RowList {
    fn will_mount(&self) {
        self.mounts.fetch_add(1, Ordering::SeqCst);
    }
}

impl CollectionViewModel for RowList {
    type Data = Vec<Row>;
    type Item = Row;
    type ItemViewModel = RowItem;

    fn data(&self) -> CollectionData<Vec<Row>> {
        CollectionData::Static(self.rows.clone())
    }

    fn create_item_view_model(&self, item: Row) -> RowItem {
        self.created.fetch_add(1, Ordering::SeqCst);
        if item.name == "plain" {
            return RowItem::inert();
        }

        let enabled = !self.commands_disabled.load(Ordering::SeqCst);
        let select = recording_command("select", &item, &self.selected);
        let unselect = recording_command("unselect", &item, &self.unselected);
        select.set_enabled(enabled);
        unselect.set_enabled(enabled);
        RowItem {
            select: Some(select),
            unselect: Some(unselect),
        }
    }
}

#[derive(Default)]
pub struct SpinnerList {
    created: AtomicUsize,
}

impl SpinnerList {
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl ViewModel for SpinnerList {}

impl CollectionViewModel for SpinnerList {
    type Data = Vec<Spinner>;
    type Item = Spinner;
    type ItemViewModel = RowItem;

    fn data(&self) -> CollectionData<Vec<Spinner>> {
        CollectionData::Static(Vec::new())
    }

    fn create_item_view_model(&self, _item: Spinner) -> RowItem {
        self.created.fetch_add(1, Ordering::SeqCst);
        RowItem::inert()
    }
}

/// A list whose rows live in an [`Observable`].
pub struct LiveRowList {
    rows: Arc<Observable<Vec<Row>>>,
}

impl LiveRowList {
    pub fn new(names: &[&str]) -> Self {
        Self {
            rows: Arc::new(Observable::new(names.iter().copied().map(Row::new).collect())),
        }
    }

    pub fn replace(&self, names: &[&str]) {
        self.rows.set(names.iter().copied().map(Row::new).collect());
    }
}

impl ViewModel for LiveRowList {}

impl CollectionViewModel for LiveRowList {
    type Data = Vec<Row>;
    type Item = Row;
    type ItemViewModel = RowItem;

    fn data(&self) -> CollectionData<Vec<Row>> {
        CollectionData::Observed(Arc::clone(&self.rows))
    }

    fn create_item_view_model(&self, _item: Row) -> RowItem {
        RowItem::inert()
    }
}

pub struct GroupHeader {
    pub title: Option<String>,
}

impl ViewModel for GroupHeader {}

pub struct GroupList {
    groups: Vec<(Group, Vec<Row>)>,
    sections_created: Mutex<Vec<String>>,
    selected: Arc<Mutex<Vec<String>>>,
}

impl GroupList {
    pub fn new(groups: Vec<(&str, Vec<&str>)>) -> Self {
        Self {
            groups: groups
                .into_iter()
                .map(|(name, rows)| (Group::new(name), rows.into_iter().map(Row::new).collect()))
                .collect(),
            sections_created: Mutex::new(Vec::new()),
            selected: Arc::default(),
        }
    }

    pub fn groups(&self) -> Vec<(Group, Vec<Row>)> {
        self.groups.clone()
    }

    pub fn sections_created(&self) -> Vec<String> {
        self.sections_created.lock().clone()
    }
}

impl ViewModel for GroupList {}

impl CollectionViewModel for GroupList {
    type Data = Vec<(Group, Vec<Row>)>;
    type Item = Row;
    type ItemViewModel = RowItem;

    fn data(&self) -> CollectionData<Self::Data> {
        CollectionData::Static(self.groups.clone())
    }

    fn create_item_view_model(&self, item: Row) -> RowItem {
        RowItem {
            select: Some(recording_command("select", &item, &self.selected)),
            unselect: None,
        }
    }
}

impl SectionedCollectionViewModel for GroupList {
    type Section = Group;
    type SectionViewModel = GroupHeader;

    fn create_section_view_model(&self, section: Option<Group>) -> GroupHeader {
        let title = section.map(|group| group.name);
        if let Some(title) = &title {
            self.sections_created.lock().push(title.clone());
        }
        GroupHeader { title }
    }
}

// Component

pub struct RowScreen {
    pub widget: Arc<RecordingWidget>,
}

impl RowScreen {
    pub fn new() -> Self {
        Self {
            widget: Arc::new(RecordingWidget::new()),
        }
    }
}

impl ComponentView for RowScreen {
    type ViewModel = RowList;
    type Observer = RecordingObserver;

    fn bind(&self, observer: &Arc<RecordingObserver>, view_model: &Arc<RowList>) {
        bind_list::<_, _, ItemsDataSource<Row>, _>(&self.widget, view_model, observer);
    }
}
