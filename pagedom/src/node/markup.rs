use super::StyleTags;

/// Declarative description of a subtree, inserted with
/// [`Document::insert`](crate::Document::insert).
///
/// # Example
///
/// ```
/// use pagedom::{Document, Markup};
///
/// let mut doc = Document::new();
/// let body = doc.body();
/// let select = doc.insert(
///     body,
///     Markup::element("select")
///         .id("size")
///         .child(Markup::element("option").attr("value", "s").text("Small"))
///         .child(Markup::element("option").attr("value", "m").text("Medium")),
/// );
/// assert_eq!(doc.children(select).len(), 2);
/// ```
#[derive(Debug, Clone)]
pub enum Markup {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        tags: StyleTags,
        hidden: bool,
        children: Vec<Markup>,
    },
    Text(String),
}

impl Markup {
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element {
            tag: tag.into(),
            attrs: Vec::new(),
            tags: StyleTags::new(),
            hidden: false,
            children: Vec::new(),
        }
    }

    pub fn text_node(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Element { attrs, .. } = &mut self {
            attrs.push((name.into(), value.into()));
        }
        self
    }

    /// Set a boolean attribute such as `selected` or `disabled`.
    pub fn flag(self, name: impl Into<String>, on: bool) -> Self {
        if on {
            self.attr(name, "")
        } else {
            self
        }
    }

    pub fn tag(mut self, tag: &str) -> Self {
        if let Self::Element { tags, .. } = &mut self {
            tags.add(tag);
        }
        self
    }

    pub fn hidden(mut self, hide: bool) -> Self {
        if let Self::Element { hidden, .. } = &mut self {
            *hidden = hide;
        }
        self
    }

    /// Append a text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Self::Text(text.into()))
    }

    pub fn child(mut self, child: Markup) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Markup>) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.extend(new_children);
        }
        self
    }
}
