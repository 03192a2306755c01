//! The synthetic DOM structure that stands in for the host `select`.
//!
//! ```text
//! div.selecty
//!   a.selecty-selected          summary label
//!   ul.selecty-options          hidden while closed
//!     li.optgroup               one per group header
//!     li[data-index]            one per option
//! ```

use pagedom::{Document, NodeId};

use crate::host::{Entry, HostEntries};
use crate::option::{GroupId, SelectOption};
use crate::selection::SelectionState;
use crate::tags;

#[derive(Debug, Clone)]
pub struct Replica {
    wrapper: NodeId,
    summary: NodeId,
    list: NodeId,
    /// Item node per option index.
    items: Vec<NodeId>,
    /// Header node per group id.
    headers: Vec<NodeId>,
}

impl Replica {
    /// Create the replica nodes, detached. The caller inserts
    /// [`Replica::wrapper`] into the document.
    pub fn build(doc: &mut Document, entries: &HostEntries, disabled: bool) -> Self {
        let wrapper = doc.create_element("div");
        doc.add_tag(wrapper, tags::WRAPPER);
        if disabled {
            doc.add_tag(wrapper, tags::DISABLED);
        }

        let summary = doc.create_element("a");
        doc.add_tag(summary, tags::SUMMARY);
        doc.append_child(wrapper, summary);

        let list = doc.create_element("ul");
        doc.add_tag(list, tags::LIST);
        doc.set_hidden(list, true);
        doc.append_child(wrapper, list);

        let mut items = Vec::with_capacity(entries.options.len());
        let mut headers = Vec::with_capacity(entries.groups.len());

        for entry in &entries.order {
            let li = doc.create_element("li");
            match *entry {
                Entry::Group(GroupId(group)) => {
                    let group = &entries.groups[group];
                    doc.set_text(li, &group.label);
                    doc.add_tag(li, tags::GROUP_HEADER);
                    headers.push(li);
                }
                Entry::Option(index) => {
                    let option = &entries.options[index];
                    doc.set_text(li, &option.label);
                    doc.set_attr(li, "data-value", option.value.clone());
                    doc.set_attr(li, "data-index", index.to_string());
                    if option.group.is_some() {
                        doc.add_tag(li, tags::GROUP_OPTION);
                    }
                    if option.disabled {
                        doc.add_tag(li, tags::DISABLED);
                    }
                    items.push(li);
                }
            }
            doc.append_child(list, li);
        }

        Self {
            wrapper,
            summary,
            list,
            items,
            headers,
        }
    }

    pub fn wrapper(&self) -> NodeId {
        self.wrapper
    }

    pub fn summary(&self) -> NodeId {
        self.summary
    }

    pub fn list(&self) -> NodeId {
        self.list
    }

    /// Item node of option `index`.
    pub fn item(&self, index: usize) -> Option<NodeId> {
        self.items.get(index).copied()
    }

    pub fn items(&self) -> &[NodeId] {
        &self.items
    }

    pub fn headers(&self) -> &[NodeId] {
        &self.headers
    }

    /// Make the host options, the items and the summary agree with `state`.
    /// Returns the new summary label.
    pub fn render(
        &self,
        doc: &mut Document,
        host_options: &[NodeId],
        options: &[SelectOption],
        state: &SelectionState,
        separator: &str,
    ) -> String {
        for (host_option, item) in host_options.iter().zip(&self.items) {
            doc.remove_attr(*host_option, "selected");
            doc.remove_tag(*item, tags::SELECTED);
        }

        let mut labels = Vec::with_capacity(state.len());
        for index in state.iter() {
            let (Some(host_option), Some(item), Some(option)) = (
                host_options.get(index),
                self.items.get(index),
                options.get(index),
            ) else {
                log::warn!("selected index {index} has no matching option");
                continue;
            };
            doc.set_attr(*host_option, "selected", "selected");
            doc.add_tag(*item, tags::SELECTED);
            labels.push(option.label.as_str());
        }

        let label = match labels.as_slice() {
            [] => options
                .first()
                .map(|option| option.label.clone())
                .unwrap_or_default(),
            _ if state.is_multiple() => labels.join(separator),
            [.., last] => last.to_string(),
        };

        doc.set_text(self.summary, &label);
        label
    }

    /// Show or hide the item list.
    pub fn set_open(&self, doc: &mut Document, open: bool) {
        doc.set_tag(self.list, tags::ACTIVE, open);
        doc.set_hidden(self.list, !open);
    }

    /// Option index carried by an item node, if `node` is one of ours.
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.items.iter().position(|item| *item == node)
    }

    pub fn is_header(&self, node: NodeId) -> bool {
        self.headers.contains(&node)
    }
}
