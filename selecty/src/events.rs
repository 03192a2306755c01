//! Notifications and dispatch results.

use crate::widget::WidgetId;

/// Emitted whenever a click commits a selection that differs from the
/// previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    /// Widget whose selection changed.
    pub widget: WidgetId,
    /// Full selection after the commit, ascending.
    pub selected: Vec<usize>,
    /// Index of the item that was clicked.
    pub trigger: usize,
}

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, nothing on the page reacted.
    Ignored,
    /// Event was consumed by a widget.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}
