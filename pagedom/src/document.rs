//! In-memory document tree.
//!
//! Nodes live in an arena owned by the [`Document`] and are addressed by
//! [`NodeId`]. Detaching a node never frees its slot, so handles held by
//! widgets stay valid; [`Document::is_connected`] tells whether a node is
//! still reachable from the root.

use crate::listeners::ListenerRegistry;
use crate::node::{ElementData, Markup, Node, NodeId, NodeKind, StyleTags};

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    body: NodeId,
    listeners: ListenerRegistry,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing a single `body` element.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: vec![Node::new(NodeKind::Document)],
            root: NodeId(0),
            body: NodeId(0),
            listeners: ListenerRegistry::new(),
        };
        let body = doc.create_element("body");
        doc.append_child(doc.root, body);
        doc.body = body;
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn listeners_mut(&mut self) -> &mut ListenerRegistry {
        &mut self.listeners
    }

    // -------------------------------------------------------------------------
    // Creation
    // -------------------------------------------------------------------------

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element(ElementData::new(tag)))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Text(text.into()))
    }

    /// Build `markup` and append it to `parent`. Returns the subtree root.
    pub fn insert(&mut self, parent: NodeId, markup: Markup) -> NodeId {
        let id = self.build(markup);
        self.append_child(parent, id);
        id
    }

    fn build(&mut self, markup: Markup) -> NodeId {
        match markup {
            Markup::Text(text) => self.create_text(text),
            Markup::Element {
                tag,
                attrs,
                tags,
                hidden,
                children,
            } => {
                let mut data = ElementData::new(tag);
                data.tags = tags;
                data.hidden = hidden;
                for (name, value) in attrs {
                    if name == "class" {
                        for tag in StyleTags::parse(&value).iter() {
                            data.tags.add(tag);
                        }
                    } else {
                        data.attrs.insert(name, value);
                    }
                }
                let id = self.push(NodeKind::Element(data));
                for child in children {
                    let child = self.build(child);
                    self.append_child(id, child);
                }
                id
            }
        }
    }

    /// Nodes allocated in the arena, attached or not.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(kind));
        id
    }

    // -------------------------------------------------------------------------
    // Tree structure
    // -------------------------------------------------------------------------

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::children).unwrap_or(&[])
    }

    /// Append `child` as the last child of `parent`, detaching it first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if !self.can_adopt(parent, child) {
            return false;
        }
        self.detach(child);
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
        true
    }

    /// Insert `node` as the next sibling of `reference`.
    ///
    /// Returns false when `reference` has no parent.
    pub fn insert_after(&mut self, reference: NodeId, node: NodeId) -> bool {
        let Some(parent) = self.parent(reference) else {
            return false;
        };
        if !self.can_adopt(parent, node) || node == reference {
            return false;
        }
        self.detach(node);
        let siblings = &mut self.nodes[parent.0].children;
        let position = siblings
            .iter()
            .position(|id| *id == reference)
            .map_or(siblings.len(), |i| i + 1);
        siblings.insert(position, node);
        self.nodes[node.0].parent = Some(parent);
        true
    }

    /// Remove `id` from its parent. The node and its subtree stay allocated.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        self.nodes[parent.0].children.retain(|child| *child != id);
        self.nodes[id.0].parent = None;
    }

    fn can_adopt(&self, parent: NodeId, child: NodeId) -> bool {
        self.node(parent).is_some()
            && self.node(child).is_some()
            && child != self.root
            && parent != child
            && !self.is_descendant_of(parent, child)
    }

    /// True if `id` is a strict descendant of `ancestor`.
    pub fn is_descendant_of(&self, id: NodeId, ancestor: NodeId) -> bool {
        let mut cursor = self.parent(id);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    /// True if `id` is `ancestor` or lies inside it.
    pub fn is_inclusive_descendant_of(&self, id: NodeId, ancestor: NodeId) -> bool {
        id == ancestor || self.is_descendant_of(id, ancestor)
    }

    /// True if `id` exists and is reachable from the document root.
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.node(id).is_some() && self.is_inclusive_descendant_of(id, self.root)
    }

    /// Pre-order list of the descendants of `id` (excluding `id`).
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev());
        }
        out
    }

    /// Child elements of `id` in document order, skipping text nodes.
    pub fn child_elements(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|child| self.element(*child).is_some())
            .collect()
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.node(id).and_then(Node::element)
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.nodes.get_mut(id.0).and_then(Node::element_mut)
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|element| element.tag.as_str())
    }

    pub fn is_tag(&self, id: NodeId, tag: &str) -> bool {
        self.element(id).is_some_and(|element| element.is(tag))
    }

    /// First connected element whose `id` attribute equals `id`.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.descendants(self.root)
            .into_iter()
            .find(|node| self.attr(*node, "id") == Some(id))
    }

    /// Connected elements carrying attribute `name`, in document order.
    pub fn elements_with_attr(&self, name: &str) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|node| self.has_attr(*node, name))
            .collect()
    }

    /// Connected elements with the given tag, in document order.
    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|node| self.is_tag(*node, tag))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Attributes
    // -------------------------------------------------------------------------

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)
            .and_then(|element| element.attrs.get(name))
            .map(String::as_str)
    }

    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        if let Some(element) = self.element_mut(id) {
            element.attrs.insert(name.to_string(), value.into());
        }
    }

    /// Returns true if the attribute was present.
    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> bool {
        self.element_mut(id)
            .is_some_and(|element| element.attrs.remove(name).is_some())
    }

    // -------------------------------------------------------------------------
    // Style tags and visibility
    // -------------------------------------------------------------------------

    pub fn tags(&self, id: NodeId) -> Option<&StyleTags> {
        self.element(id).map(|element| &element.tags)
    }

    pub fn has_tag(&self, id: NodeId, tag: &str) -> bool {
        self.tags(id).is_some_and(|tags| tags.contains(tag))
    }

    pub fn add_tag(&mut self, id: NodeId, tag: &str) -> bool {
        self.element_mut(id)
            .is_some_and(|element| element.tags.add(tag))
    }

    pub fn remove_tag(&mut self, id: NodeId, tag: &str) -> bool {
        self.element_mut(id)
            .is_some_and(|element| element.tags.remove(tag))
    }

    pub fn set_tag(&mut self, id: NodeId, tag: &str, active: bool) -> bool {
        self.element_mut(id)
            .is_some_and(|element| element.tags.set(tag, active))
    }

    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) {
        if let Some(element) = self.element_mut(id) {
            element.hidden = hidden;
        }
    }

    /// True if `id` or one of its ancestors is hidden.
    pub fn is_hidden(&self, id: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if self.element(current).is_some_and(|element| element.hidden) {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    pub fn set_style(&mut self, id: NodeId, property: &str, value: impl Into<String>) {
        if let Some(element) = self.element_mut(id) {
            element.style.insert(property.to_string(), value.into());
        }
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.element(id)
            .and_then(|element| element.style.get(property))
            .map(String::as_str)
    }

    // -------------------------------------------------------------------------
    // Text
    // -------------------------------------------------------------------------

    /// Concatenated text of `id` and its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.node(id).map(Node::kind) {
            Some(NodeKind::Text(text)) => out.push_str(text),
            Some(_) => {
                for child in self.children(id) {
                    self.collect_text(*child, out);
                }
            }
            None => {}
        }
    }

    /// Replace the children of `id` with a single text node. An existing
    /// sole text child is rewritten in place.
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        if self.element(id).is_none() {
            return;
        }
        let only = match self.children(id) {
            [child] => Some(*child),
            _ => None,
        };
        if let Some(child) = only {
            if let NodeKind::Text(existing) = &mut self.nodes[child.0].kind {
                existing.clear();
                existing.push_str(text);
                return;
            }
        }
        for child in self.children(id).to_vec() {
            self.detach(child);
        }
        if !text.is_empty() {
            let node = self.create_text(text);
            self.append_child(id, node);
        }
    }

    // -------------------------------------------------------------------------
    // Forms
    // -------------------------------------------------------------------------

    /// Values a form submission would read from a `select` element: every
    /// descendant `option` carrying `selected`, by `value` attribute or text.
    pub fn form_values(&self, select: NodeId) -> Vec<String> {
        self.descendants(select)
            .into_iter()
            .filter(|node| self.is_tag(*node, "option") && self.has_attr(*node, "selected"))
            .map(|node| self.option_value(node))
            .collect()
    }

    /// The submitted value of an `option`: its `value` attribute, falling
    /// back to its trimmed text.
    pub fn option_value(&self, option: NodeId) -> String {
        match self.attr(option, "value") {
            Some(value) => value.to_string(),
            None => self.text_content(option).trim().to_string(),
        }
    }
}
