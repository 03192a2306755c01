//! Select widget construction and interaction.

use std::sync::atomic::{AtomicUsize, Ordering};

use pagedom::{Document, NodeId, Rect};

use crate::config::{Environment, SelectConfig};
use crate::error::SelectyError;
use crate::events::{EventResult, SelectionChanged};
use crate::host::{HostEntries, HostRef};
use crate::option::{OptionGroup, SelectOption};
use crate::replica::Replica;
use crate::selection::SelectionState;
use crate::tags;

/// Unique identifier for a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(usize);

impl WidgetId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__selecty_{}", self.0)
    }
}

/// Whether the item list is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenState {
    #[default]
    Closed,
    Open,
}

/// What a pointer press landed on, from one widget's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The summary control.
    Summary,
    /// A selectable item.
    Item(usize),
    /// An item whose option is disabled.
    DisabledItem(usize),
    /// A group header row.
    GroupHeader,
    /// Inside the list but not on any row.
    ListArea,
    /// A row in the list that no longer maps to a known index.
    Stale,
    /// Anywhere else, including nothing at all.
    Outside,
}

/// Outcome of constructing a widget on a host.
#[derive(Debug)]
pub enum Mount {
    /// Replica built; the widget takes part in page interaction.
    Interactive(SelectWidget),
    /// Touch environment; the host stays native and visible.
    Degraded(DegradedWidget),
}

/// A host left to the native control, with a decorative arrow next to it.
#[derive(Debug, Clone)]
pub struct DegradedWidget {
    host: NodeId,
    arrow: NodeId,
}

impl DegradedWidget {
    fn attach(doc: &mut Document, host: NodeId, viewport: Rect) -> Self {
        let bounds = pagedom::layout(doc, viewport)
            .get(&host)
            .copied()
            .unwrap_or_default();

        doc.add_tag(host, tags::DEGRADED_HOST);

        let arrow = doc.create_element("div");
        doc.add_tag(arrow, tags::ARROW);
        let middle = bounds.top().saturating_add(bounds.height / 2);
        doc.set_style(arrow, "top", format!("{middle}px"));
        doc.set_style(arrow, "right", format!("{}px", bounds.left()));
        doc.insert_after(host, arrow);

        log::info!("touch environment, host {host} keeps its native control");
        Self { host, arrow }
    }

    pub fn host(&self) -> NodeId {
        self.host
    }

    pub fn arrow(&self) -> NodeId {
        self.arrow
    }
}

/// A dropdown replica kept in sync with its host `select`.
///
/// # Example
///
/// ```
/// use pagedom::{Document, Markup};
/// use selecty::{Environment, Mount, SelectConfig, SelectWidget};
///
/// let mut doc = Document::new();
/// let body = doc.body();
/// doc.insert(
///     body,
///     Markup::element("select")
///         .id("fruit")
///         .child(Markup::element("option").text("Apple"))
///         .child(Markup::element("option").text("Pear").flag("selected", true)),
/// );
///
/// let mount = SelectWidget::mount(&mut doc, "#fruit", &SelectConfig::default(), &Environment::default());
/// let Ok(Mount::Interactive(widget)) = mount else { panic!("expected a replica") };
/// assert_eq!(widget.summary(), "Pear");
/// assert_eq!(widget.selected_indices(), vec![1]);
/// ```
#[derive(Debug)]
pub struct SelectWidget {
    id: WidgetId,
    host: NodeId,
    options: Vec<SelectOption>,
    groups: Vec<OptionGroup>,
    /// Host `option` element per option index.
    host_options: Vec<NodeId>,
    selection: SelectionState,
    replica: Replica,
    state: OpenState,
    separator: String,
    summary: String,
}

impl SelectWidget {
    /// Build a widget for `host`.
    ///
    /// On error nothing in the document has been changed.
    pub fn mount(
        doc: &mut Document,
        host: impl Into<HostRef>,
        config: &SelectConfig,
        env: &Environment,
    ) -> Result<Mount, SelectyError> {
        let touch = env.is_touch(config)?;
        Self::mount_classified(doc, host.into(), config, env.viewport(), touch)
    }

    /// [`SelectWidget::mount`] with the touch classification already made,
    /// so a page matches its user agent once.
    pub(crate) fn mount_classified(
        doc: &mut Document,
        host_ref: HostRef,
        config: &SelectConfig,
        viewport: Rect,
        touch: bool,
    ) -> Result<Mount, SelectyError> {
        let host = host_ref.resolve(doc)?;

        let entries = HostEntries::read(doc, host);
        if entries.is_empty() {
            return Err(SelectyError::EmptyOptionSet(host));
        }

        if touch {
            return Ok(Mount::Degraded(DegradedWidget::attach(doc, host, viewport)));
        }

        let multiple = doc.has_attr(host, "multiple");
        let disabled = doc.has_attr(host, "disabled");
        let selection =
            SelectionState::initialize(multiple, disabled, &entries.preselected, &entries.options);

        let replica = Replica::build(doc, &entries, disabled);
        if !doc.insert_after(host, replica.wrapper()) {
            return Err(SelectyError::InvalidHostReference(host_ref.to_string()));
        }
        doc.set_hidden(host, true);

        let mut widget = Self {
            id: WidgetId::new(),
            host,
            options: entries.options,
            groups: entries.groups,
            host_options: entries.option_nodes,
            selection,
            replica,
            state: OpenState::Closed,
            separator: config.separator.clone(),
            summary: String::new(),
        };
        widget.update_selected(doc);

        log::debug!(
            "SelectWidget::mount id={} host={} options={} groups={} multiple={} disabled={}",
            widget.id,
            host,
            widget.options.len(),
            widget.groups.len(),
            multiple,
            disabled
        );

        Ok(Mount::Interactive(widget))
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn host(&self) -> NodeId {
        self.host
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn groups(&self) -> &[OptionGroup] {
        &self.groups
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection.indices()
    }

    /// Text currently shown in the summary control.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn state(&self) -> OpenState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == OpenState::Open
    }

    pub fn is_multiple(&self) -> bool {
        self.selection.is_multiple()
    }

    /// Disabled widgets render but never react to input.
    pub fn is_disabled(&self) -> bool {
        self.selection.is_disabled()
    }

    pub fn replica(&self) -> &Replica {
        &self.replica
    }

    /// Values a form submission would read from the host.
    pub fn form_values(&self, doc: &Document) -> Vec<String> {
        doc.form_values(self.host)
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Rewrite host flags, item tags and the summary from the selection.
    pub fn update_selected(&mut self, doc: &mut Document) {
        self.summary = self.replica.render(
            doc,
            &self.host_options,
            &self.options,
            &self.selection,
            &self.separator,
        );
        log::debug!(
            "SelectWidget::update_selected id={} selected={:?} summary={:?}",
            self.id,
            self.selection.indices(),
            self.summary
        );
    }

    // -------------------------------------------------------------------------
    // Open/close
    // -------------------------------------------------------------------------

    /// Show the list. Returns true if the state changed.
    pub fn open(&mut self, doc: &mut Document) -> bool {
        if self.is_disabled() || self.is_open() {
            return false;
        }
        self.replica.set_open(doc, true);
        doc.add_tag(self.host, tags::ACTIVE);
        self.state = OpenState::Open;
        log::debug!("SelectWidget::open id={}", self.id);
        true
    }

    /// Hide the list. Returns true if the state changed.
    pub fn close(&mut self, doc: &mut Document) -> bool {
        if !self.is_open() {
            return false;
        }
        self.replica.set_open(doc, false);
        doc.remove_tag(self.host, tags::ACTIVE);
        self.state = OpenState::Closed;
        log::debug!("SelectWidget::close id={}", self.id);
        true
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    /// Classify the node a pointer press landed on.
    pub fn target(&self, doc: &Document, node: Option<NodeId>) -> Target {
        let Some(node) = node else {
            return Target::Outside;
        };

        if doc.is_inclusive_descendant_of(node, self.replica.summary()) {
            return Target::Summary;
        }

        let list = self.replica.list();
        if node == list {
            return Target::ListArea;
        }
        if !doc.is_descendant_of(node, list) {
            return Target::Outside;
        }

        // Climb to the row directly under the list
        let mut row = node;
        while let Some(parent) = doc.parent(row) {
            if parent == list {
                break;
            }
            row = parent;
        }

        if self.replica.is_header(row) {
            return Target::GroupHeader;
        }

        let carried = doc.attr(row, "data-index").and_then(|v| v.parse::<usize>().ok());
        match self.replica.index_of(row) {
            Some(index) if carried == Some(index) => {
                if self.options[index].disabled {
                    Target::DisabledItem(index)
                } else {
                    Target::Item(index)
                }
            }
            _ => Target::Stale,
        }
    }

    /// Handle a press routed through the document listener while open.
    ///
    /// Returns the change notification if the selection changed.
    pub fn handle_document_click(
        &mut self,
        doc: &mut Document,
        node: Option<NodeId>,
    ) -> (EventResult, Option<SelectionChanged>) {
        if !self.is_open() {
            return (EventResult::Ignored, None);
        }

        match self.target(doc, node) {
            Target::Item(index) => (EventResult::Consumed, self.commit(doc, index)),
            Target::Outside => {
                self.close(doc);
                (EventResult::Consumed, None)
            }
            Target::Stale => {
                log::debug!("SelectWidget id={} ignoring stale target {:?}", self.id, node);
                (EventResult::Consumed, None)
            }
            Target::DisabledItem(_) | Target::GroupHeader | Target::ListArea => {
                (EventResult::Consumed, None)
            }
            Target::Summary => (EventResult::Ignored, None),
        }
    }

    /// Commit a click on item `index`.
    ///
    /// Multi-select toggles and stays open; single-select replaces and
    /// closes. Returns a notification only if the selection changed.
    pub fn commit(&mut self, doc: &mut Document, index: usize) -> Option<SelectionChanged> {
        if !self.is_open() || self.is_disabled() {
            return None;
        }

        let before = self.selection.indices();
        if !self.selection.commit(index, &self.options) {
            log::debug!("SelectWidget id={} rejected commit of {}", self.id, index);
            return None;
        }
        self.update_selected(doc);

        if !self.is_multiple() {
            self.close(doc);
        }

        let selected = self.selection.indices();
        (selected != before).then(|| SelectionChanged {
            widget: self.id,
            selected,
            trigger: index,
        })
    }
}
