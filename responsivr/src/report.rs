//! What a run did, in text or JSON.

use std::fmt;

use selecty::{MountReport, Page, SelectionChanged, SelectWidget};
use serde::Serialize;

use crate::script::Outcome;

#[derive(Debug, Serialize)]
pub struct PageReport {
    pub mounted: usize,
    pub degraded: usize,
    pub failed: usize,
    pub widgets: Vec<WidgetReport>,
    /// Ids of hosts left to their native control.
    pub native: Vec<String>,
    pub steps: Vec<StepReport>,
    pub changes: Vec<ChangeReport>,
}

#[derive(Debug, Serialize)]
pub struct WidgetReport {
    pub id: String,
    pub host: String,
    pub open: bool,
    pub multiple: bool,
    pub disabled: bool,
    pub selected: Vec<usize>,
    pub summary: String,
    /// What a form submission would send.
    pub values: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct StepReport {
    pub step: String,
    pub handled: bool,
}

#[derive(Debug, Serialize)]
pub struct ChangeReport {
    pub widget: String,
    pub selected: Vec<usize>,
    pub trigger: usize,
}

impl From<SelectionChanged> for ChangeReport {
    fn from(change: SelectionChanged) -> Self {
        Self {
            widget: change.widget.to_string(),
            selected: change.selected,
            trigger: change.trigger,
        }
    }
}

fn host_name(page: &Page, host: pagedom::NodeId) -> String {
    page.document()
        .attr(host, "id")
        .map(str::to_string)
        .unwrap_or_else(|| host.to_string())
}

impl WidgetReport {
    fn new(page: &Page, widget: &SelectWidget) -> Self {
        Self {
            id: widget.id().to_string(),
            host: host_name(page, widget.host()),
            open: widget.is_open(),
            multiple: widget.is_multiple(),
            disabled: widget.is_disabled(),
            selected: widget.selected_indices(),
            summary: widget.summary().to_string(),
            values: widget.form_values(page.document()),
        }
    }
}

impl PageReport {
    /// Snapshot the page, draining its pending notifications.
    pub fn collect(page: &mut Page, mount: MountReport, outcomes: Vec<Outcome>) -> Self {
        let changes = page.take_changes().into_iter().map(Into::into).collect();
        Self {
            mounted: mount.mounted,
            degraded: mount.degraded,
            failed: mount.failed,
            widgets: page
                .widgets()
                .iter()
                .map(|widget| WidgetReport::new(page, widget))
                .collect(),
            native: page
                .degraded()
                .iter()
                .map(|degraded| host_name(page, degraded.host()))
                .collect(),
            steps: outcomes
                .into_iter()
                .map(|outcome| StepReport {
                    step: outcome.step.to_string(),
                    handled: outcome.result.is_handled(),
                })
                .collect(),
            changes,
        }
    }
}

impl fmt::Display for PageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "mounted {}, degraded {}, failed {}",
            self.mounted, self.degraded, self.failed
        )?;

        for step in &self.steps {
            let mark = if step.handled { "+" } else { "-" };
            writeln!(f, "  {mark} {}", step.step)?;
        }

        for widget in &self.widgets {
            let mut flags = vec![if widget.open { "open" } else { "closed" }];
            if widget.multiple {
                flags.push("multiple");
            }
            if widget.disabled {
                flags.push("disabled");
            }
            writeln!(
                f,
                "#{} [{}] {:?} selected={:?} values={:?}",
                widget.host,
                flags.join(" "),
                widget.summary,
                widget.selected,
                widget.values
            )?;
        }

        for host in &self.native {
            writeln!(f, "#{host} [native]")?;
        }

        for change in &self.changes {
            writeln!(
                f,
                "changed {} -> {:?} (clicked {})",
                change.widget, change.selected, change.trigger
            )?;
        }
        Ok(())
    }
}
