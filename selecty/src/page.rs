//! Page-scoped widget registry and input routing.
//!
//! The page owns the document and every widget mounted on it. It does not
//! decide anything on the widgets' behalf: it finds the widget an event
//! belongs to, scans for other open widgets when one is activated, and
//! holds the document listeners only while some widget is open.

use std::collections::HashSet;

use pagedom::{
    Document, InputEvent, Key, LayoutResult, ListenerId, ListenerKind, NodeId, RawInput,
};

use crate::config::{Environment, SelectConfig};
use crate::error::SelectyError;
use crate::events::{EventResult, SelectionChanged};
use crate::host::HostRef;
use crate::widget::{DegradedWidget, Mount, SelectWidget, Target, WidgetId};

/// Document listeners held while a widget is open.
#[derive(Debug, Clone, Copy)]
struct DocumentListeners {
    click: ListenerId,
    key: ListenerId,
}

/// Tally of a [`Page::mount_all`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MountReport {
    pub mounted: usize,
    pub degraded: usize,
    pub failed: usize,
}

#[derive(Debug)]
pub struct Page {
    document: Document,
    config: SelectConfig,
    environment: Environment,
    widgets: Vec<SelectWidget>,
    degraded: Vec<DegradedWidget>,
    /// Hosts construction was attempted for, successful or not.
    processed: HashSet<NodeId>,
    listeners: Option<DocumentListeners>,
    changes: Vec<SelectionChanged>,
    /// Touch classification of the environment, once it has been made.
    touch: Option<bool>,
}

impl Page {
    pub fn new(document: Document, config: SelectConfig, environment: Environment) -> Self {
        Self {
            document,
            config,
            environment,
            widgets: Vec::new(),
            degraded: Vec::new(),
            processed: HashSet::new(),
            listeners: None,
            changes: Vec::new(),
            touch: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable access for host-page scripting. Changing replica nodes
    /// behind a widget's back is tolerated but can make rows stale.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    // -------------------------------------------------------------------------
    // Mounting
    // -------------------------------------------------------------------------

    /// Construct a widget on `host` and register it on this page.
    ///
    /// Returns the widget id, or None when the environment degraded the
    /// host to its native control. Each host is attempted once; failures
    /// are logged here and returned.
    pub fn mount(&mut self, host: impl Into<HostRef>) -> Result<Option<WidgetId>, SelectyError> {
        let host = host.into();
        match self.try_mount(&host) {
            Ok(Mount::Interactive(widget)) => {
                let id = widget.id();
                self.widgets.push(widget);
                Ok(Some(id))
            }
            Ok(Mount::Degraded(degraded)) => {
                self.degraded.push(degraded);
                Ok(None)
            }
            Err(err) => {
                log::error!("selecty: cannot mount {host}: {err}");
                Err(err)
            }
        }
    }

    fn try_mount(&mut self, host: &HostRef) -> Result<Mount, SelectyError> {
        let node = host.resolve(&self.document)?;
        if !self.processed.insert(node) {
            return Err(SelectyError::AlreadyMounted(node));
        }
        let touch = self.is_touch()?;
        SelectWidget::mount_classified(
            &mut self.document,
            HostRef::Node(node),
            &self.config,
            self.environment.viewport(),
            touch,
        )
    }

    /// Match the user agent against the touch pattern on first use. A bad
    /// pattern is not cached, so every mount reports it.
    fn is_touch(&mut self) -> Result<bool, SelectyError> {
        if let Some(touch) = self.touch {
            return Ok(touch);
        }
        let touch = self.environment.is_touch(&self.config)?;
        self.touch = Some(touch);
        Ok(touch)
    }

    /// Page-load hook: construct widgets for every element carrying the
    /// marker attribute that has not been processed yet.
    pub fn mount_all(&mut self) -> MountReport {
        let hosts = self
            .document
            .elements_with_attr(&self.config.marker_attribute);
        let mut report = MountReport::default();

        for host in hosts {
            if self.processed.contains(&host) {
                continue;
            }
            match self.mount(host) {
                Ok(Some(_)) => report.mounted += 1,
                Ok(None) => report.degraded += 1,
                Err(_) => report.failed += 1,
            }
        }

        log::info!(
            "selecty: mounted {} widget(s), {} degraded, {} failed",
            report.mounted,
            report.degraded,
            report.failed
        );
        report
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn widgets(&self) -> &[SelectWidget] {
        &self.widgets
    }

    pub fn degraded(&self) -> &[DegradedWidget] {
        &self.degraded
    }

    pub fn widget(&self, id: WidgetId) -> Option<&SelectWidget> {
        self.widgets.iter().find(|widget| widget.id() == id)
    }

    /// Widget whose host has the given element id.
    pub fn widget_for(&self, host_id: &str) -> Option<&SelectWidget> {
        let host = self.document.get_element_by_id(host_id)?;
        self.widgets.iter().find(|widget| widget.host() == host)
    }

    /// The open widget, if any.
    pub fn open_widget(&self) -> Option<WidgetId> {
        self.widgets
            .iter()
            .find(|widget| widget.is_open())
            .map(SelectWidget::id)
    }

    pub fn layout(&self) -> LayoutResult {
        pagedom::layout(&self.document, self.environment.viewport())
    }

    /// Centre cell of `node`'s box, for driving pointer input at it.
    pub fn center_of(&self, node: NodeId) -> Option<(u16, u16)> {
        self.layout()
            .get(&node)
            .filter(|rect| !rect.is_empty())
            .map(|rect| rect.center())
    }

    /// Whether the document listeners are currently held.
    pub fn listening(&self) -> bool {
        self.listeners.is_some()
    }

    /// Drain the selection notifications collected since the last call.
    pub fn take_changes(&mut self) -> Vec<SelectionChanged> {
        std::mem::take(&mut self.changes)
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Route device input; it is normalized first.
    pub fn dispatch_raw(&mut self, input: &RawInput) -> EventResult {
        match input.normalize() {
            Some(event) => self.dispatch(event),
            None => EventResult::Ignored,
        }
    }

    pub fn dispatch(&mut self, event: InputEvent) -> EventResult {
        let result = match event {
            InputEvent::PointerDown { x, y } => self.pointer_down(x, y),
            InputEvent::KeyDown {
                key: Key::Escape, ..
            } => self.escape(),
            InputEvent::KeyDown { .. } => EventResult::Ignored,
        };
        self.sync_listeners();
        result
    }

    /// Activate a widget's summary control as if it had been clicked.
    pub fn activate(&mut self, id: WidgetId) -> EventResult {
        let result = match self.widgets.iter().position(|widget| widget.id() == id) {
            Some(position) => self.activate_at(position),
            None => EventResult::Ignored,
        };
        self.sync_listeners();
        result
    }

    fn pointer_down(&mut self, x: u16, y: u16) -> EventResult {
        let layout = self.layout();
        let node = pagedom::hit_test(&self.document, &layout, x, y);
        log::trace!("pointer down at ({x}, {y}) hit {node:?}");

        let summary_owner = self.widgets.iter().position(|widget| {
            !widget.is_disabled() && widget.target(&self.document, node) == Target::Summary
        });
        if let Some(position) = summary_owner {
            return self.activate_at(position);
        }

        // Document click listener: only live while some widget is open
        if self.listeners.is_none() {
            return EventResult::Ignored;
        }

        let mut result = EventResult::Ignored;
        for widget in self.widgets.iter_mut().filter(|widget| widget.is_open()) {
            let (handled, change) = widget.handle_document_click(&mut self.document, node);
            if handled.is_handled() {
                result = EventResult::Consumed;
            }
            if let Some(change) = change {
                log::debug!("selection changed: {change:?}");
                self.changes.push(change);
            }
        }
        result
    }

    fn activate_at(&mut self, position: usize) -> EventResult {
        if self.widgets[position].is_disabled() {
            return EventResult::Ignored;
        }

        if self.widgets[position].is_open() {
            self.widgets[position].close(&mut self.document);
            return EventResult::Consumed;
        }

        // Single-open: close whatever else is open before opening
        for (i, other) in self.widgets.iter_mut().enumerate() {
            if i != position && other.close(&mut self.document) {
                log::debug!("closed {} to open another widget", other.id());
            }
        }
        self.widgets[position].open(&mut self.document);
        EventResult::Consumed
    }

    fn escape(&mut self) -> EventResult {
        if self.listeners.is_none() {
            return EventResult::Ignored;
        }
        let mut result = EventResult::Ignored;
        for widget in &mut self.widgets {
            if widget.close(&mut self.document) {
                result = EventResult::Consumed;
            }
        }
        result
    }

    /// Acquire the document listeners on the first open, release them when
    /// the last widget closes.
    fn sync_listeners(&mut self) {
        let any_open = self.widgets.iter().any(SelectWidget::is_open);
        match (any_open, self.listeners) {
            (true, None) => {
                let registry = self.document.listeners_mut();
                self.listeners = Some(DocumentListeners {
                    click: registry.add(ListenerKind::Click),
                    key: registry.add(ListenerKind::KeyDown),
                });
                log::debug!("document listeners acquired");
            }
            (false, Some(listeners)) => {
                let registry = self.document.listeners_mut();
                registry.remove(listeners.click);
                registry.remove(listeners.key);
                self.listeners = None;
                log::debug!("document listeners released");
            }
            _ => {}
        }
    }
}
