use crate::document::Document;
use crate::layout::LayoutResult;
use crate::node::NodeId;

/// Find the deepest laid-out element at the given coordinates.
/// Returns None if the point misses every box.
pub fn hit_test(doc: &Document, layout: &LayoutResult, x: u16, y: u16) -> Option<NodeId> {
    hit_test_node(doc, layout, doc.root(), x, y)
}

/// Like [`hit_test`], but only searches the subtree rooted at `scope`.
pub fn hit_test_within(
    doc: &Document,
    layout: &LayoutResult,
    scope: NodeId,
    x: u16,
    y: u16,
) -> Option<NodeId> {
    hit_test_node(doc, layout, scope, x, y)
}

fn hit_test_node(
    doc: &Document,
    layout: &LayoutResult,
    id: NodeId,
    x: u16,
    y: u16,
) -> Option<NodeId> {
    match layout.get(&id) {
        Some(rect) if !rect.contains(x, y) => return None,
        // Only the document root is traversed without a box of its own.
        None if id != doc.root() => return None,
        _ => {}
    }

    // Later siblings are painted last, so they win
    for child in doc.children(id).iter().rev() {
        if let Some(found) = hit_test_node(doc, layout, *child, x, y) {
            return Some(found);
        }
    }

    layout.get(&id).map(|_| id)
}
