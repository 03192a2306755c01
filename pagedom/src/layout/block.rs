use std::collections::HashMap;

use super::Rect;
use crate::document::Document;
use crate::node::{ElementData, NodeId, NodeKind};
use crate::text::{row_count, widest_line};

pub type LayoutResult = HashMap<NodeId, Rect>;

/// Lay the document out as a vertical flow of blocks inside `viewport`.
///
/// Every element stacks its children top to bottom; an element is as wide
/// as its widest child (text shrinks to fit, wraps at the viewport edge)
/// and as tall as the sum of its children; an empty `a` or `li` still gets
/// one cell. Hidden elements and their subtrees get no box, so they can't
/// be hit.
pub fn layout(doc: &Document, viewport: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let (_, height) = layout_children(
        doc,
        doc.root(),
        viewport.x,
        viewport.y,
        viewport.width,
        &mut result,
    );
    log::trace!("layout: {} boxes, content height {}", result.len(), height);
    result
}

fn layout_node(
    doc: &Document,
    id: NodeId,
    x: u16,
    y: u16,
    available: u16,
    result: &mut LayoutResult,
) -> (u16, u16) {
    let Some(node) = doc.node(id) else {
        return (0, 0);
    };

    match node.kind() {
        NodeKind::Text(text) => text_extent(text, available),
        NodeKind::Document => layout_children(doc, id, x, y, available, result),
        NodeKind::Element(element) => {
            if element.hidden {
                return (0, 0);
            }
            let (mut width, mut height) = layout_children(doc, id, x, y, available, result);
            if is_row(element) && available > 0 {
                width = width.max(1);
                height = height.max(1);
            }
            result.insert(id, Rect::new(x, y, width, height));
            (width, height)
        }
    }
}

/// Links and list items keep one clickable cell even when empty.
fn is_row(element: &ElementData) -> bool {
    element.is("a") || element.is("li")
}

fn layout_children(
    doc: &Document,
    id: NodeId,
    x: u16,
    y: u16,
    available: u16,
    result: &mut LayoutResult,
) -> (u16, u16) {
    let mut width = 0u16;
    let mut height = 0u16;

    for child in doc.children(id) {
        let (w, h) = layout_node(doc, *child, x, y.saturating_add(height), available, result);
        width = width.max(w);
        height = height.saturating_add(h);
    }

    (width.min(available), height)
}

fn text_extent(text: &str, available: u16) -> (u16, u16) {
    let max = usize::from(available);
    let width = widest_line(text, max);
    let rows = row_count(text, max);
    (clamp_u16(width), clamp_u16(rows))
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
