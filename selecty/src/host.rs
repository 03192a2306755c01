//! Resolving host controls and reading their entries.

use std::fmt;

use pagedom::{Document, NodeId};

use crate::error::SelectyError;
use crate::option::{GroupId, OptionGroup, SelectOption};

/// How a caller names the host `select`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRef {
    /// Element id; a leading `#` is accepted and stripped.
    Id(String),
    Node(NodeId),
}

impl From<&str> for HostRef {
    fn from(s: &str) -> Self {
        Self::Id(s.strip_prefix('#').unwrap_or(s).to_string())
    }
}

impl From<String> for HostRef {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<NodeId> for HostRef {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl fmt::Display for HostRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Node(node) => write!(f, "{node}"),
        }
    }
}

impl HostRef {
    /// Resolve to a connected `select` element.
    pub fn resolve(&self, doc: &Document) -> Result<NodeId, SelectyError> {
        let node = match self {
            Self::Id(id) => doc.get_element_by_id(id),
            Self::Node(node) => Some(*node).filter(|node| doc.is_connected(*node)),
        }
        .filter(|node| doc.element(*node).is_some())
        .ok_or_else(|| SelectyError::InvalidHostReference(self.to_string()))?;

        if !doc.is_tag(node, "select") {
            return Err(SelectyError::NotASelect {
                node,
                tag: doc.tag_name(node).unwrap_or_default().to_string(),
            });
        }
        Ok(node)
    }
}

/// A host entry in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Group(GroupId),
    Option(usize),
}

/// Everything read from a host `select` at construction.
#[derive(Debug, Clone, Default)]
pub struct HostEntries {
    pub options: Vec<SelectOption>,
    pub groups: Vec<OptionGroup>,
    /// The host `option` element for each option index.
    pub option_nodes: Vec<NodeId>,
    /// Indices of options carrying `selected`, ascending.
    pub preselected: Vec<usize>,
    pub order: Vec<Entry>,
}

impl HostEntries {
    /// Walk the children of `host`: `optgroup` elements contribute a header
    /// followed by their own `option`s, bare `option`s are ungrouped.
    /// Anything else is skipped.
    pub fn read(doc: &Document, host: NodeId) -> Self {
        let mut entries = Self::default();

        for child in doc.child_elements(host) {
            if doc.is_tag(child, "optgroup") {
                let id = GroupId(entries.groups.len());
                let disabled = doc.has_attr(child, "disabled");
                entries.groups.push(OptionGroup {
                    id,
                    label: doc.attr(child, "label").unwrap_or_default().to_string(),
                    disabled,
                });
                entries.order.push(Entry::Group(id));

                for option in doc.child_elements(child) {
                    if doc.is_tag(option, "option") {
                        entries.push_option(doc, option, Some(id), disabled);
                    }
                }
            } else if doc.is_tag(child, "option") {
                entries.push_option(doc, child, None, false);
            } else {
                log::warn!(
                    "skipping <{}> inside select {host}",
                    doc.tag_name(child).unwrap_or_default()
                );
            }
        }

        entries
    }

    fn push_option(
        &mut self,
        doc: &Document,
        node: NodeId,
        group: Option<GroupId>,
        group_disabled: bool,
    ) {
        let index = self.options.len();
        if doc.has_attr(node, "selected") {
            self.preselected.push(index);
        }
        self.options.push(SelectOption {
            index,
            label: doc.text_content(node).trim().to_string(),
            value: doc.option_value(node),
            disabled: group_disabled || doc.has_attr(node, "disabled"),
            group,
        });
        self.option_nodes.push(node);
        self.order.push(Entry::Option(index));
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
