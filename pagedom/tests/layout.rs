use pagedom::{hit_test, hit_test_within, layout, Document, Markup, Rect};

fn menu(doc: &mut Document) -> (pagedom::NodeId, Vec<pagedom::NodeId>) {
    let body = doc.body();
    let list = doc.insert(
        body,
        Markup::element("ul")
            .child(Markup::element("li").text("Apple"))
            .child(Markup::element("li").text("Kiwi"))
            .child(Markup::element("li").text("Watermelon")),
    );
    let items = doc.child_elements(list);
    (list, items)
}

// ============================================================================
// Block Layout
// ============================================================================

#[test]
fn test_children_stack_vertically() {
    let mut doc = Document::new();
    let (list, items) = menu(&mut doc);

    let boxes = layout(&doc, Rect::from_size(40, 20));

    assert_eq!(boxes[&items[0]], Rect::new(0, 0, 5, 1));
    assert_eq!(boxes[&items[1]], Rect::new(0, 1, 4, 1));
    assert_eq!(boxes[&items[2]], Rect::new(0, 2, 10, 1));
    // Parent wraps its widest child and all rows
    assert_eq!(boxes[&list], Rect::new(0, 0, 10, 3));
}

#[test]
fn test_viewport_offset_is_respected() {
    let mut doc = Document::new();
    let (list, _) = menu(&mut doc);

    let boxes = layout(&doc, Rect::new(3, 5, 40, 20));
    assert_eq!(boxes[&list], Rect::new(3, 5, 10, 3));
}

#[test]
fn test_hidden_subtree_has_no_box_and_takes_no_space() {
    let mut doc = Document::new();
    let body = doc.body();
    let hidden = doc.insert(body, Markup::element("p").text("gone").hidden(true));
    let (list, items) = menu(&mut doc);

    let boxes = layout(&doc, Rect::from_size(40, 20));
    assert!(!boxes.contains_key(&hidden));
    assert_eq!(boxes[&list].y, 0);
    assert_eq!(boxes[&items[2]].y, 2);
}

#[test]
fn test_long_text_wraps_to_viewport() {
    let mut doc = Document::new();
    let body = doc.body();
    let para = doc.insert(body, Markup::element("p").text("abcdefghij"));

    let boxes = layout(&doc, Rect::from_size(4, 20));
    assert_eq!(boxes[&para], Rect::new(0, 0, 4, 3));
}

#[test]
fn test_wide_glyphs_use_display_width() {
    let mut doc = Document::new();
    let body = doc.body();
    let para = doc.insert(body, Markup::element("p").text("日本語"));

    let boxes = layout(&doc, Rect::from_size(40, 20));
    assert_eq!(boxes[&para].width, 6);
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_returns_deepest_element() {
    let mut doc = Document::new();
    let (list, items) = menu(&mut doc);
    let boxes = layout(&doc, Rect::from_size(40, 20));

    assert_eq!(hit_test(&doc, &boxes, 1, 1), Some(items[1]));
    // Inside the list but right of the short "Kiwi" row
    assert_eq!(hit_test(&doc, &boxes, 6, 1), Some(list));
    // Below everything
    assert_eq!(hit_test(&doc, &boxes, 0, 10), None);
}

#[test]
fn test_hit_test_skips_hidden() {
    let mut doc = Document::new();
    let (list, items) = menu(&mut doc);
    doc.set_hidden(list, true);
    let boxes = layout(&doc, Rect::from_size(40, 20));

    assert_eq!(hit_test(&doc, &boxes, 0, 0), None);
    assert!(!boxes.contains_key(&items[0]));
}

#[test]
fn test_hit_test_within_scope() {
    let mut doc = Document::new();
    let body = doc.body();
    let header = doc.insert(body, Markup::element("h1").text("Title"));
    let (list, items) = menu(&mut doc);
    let boxes = layout(&doc, Rect::from_size(40, 20));

    assert_eq!(hit_test_within(&doc, &boxes, list, 0, 1), Some(items[0]));
    assert_eq!(hit_test_within(&doc, &boxes, list, 0, 0), None);
    assert_eq!(hit_test(&doc, &boxes, 0, 0), Some(header));
}

#[test]
fn test_empty_rows_keep_one_cell() {
    let mut doc = Document::new();
    let body = doc.body();
    let link = doc.insert(body, Markup::element("a"));
    let list = doc.insert(
        body,
        Markup::element("ul")
            .child(Markup::element("li"))
            .child(Markup::element("li").text("Kiwi")),
    );
    let spacer = doc.insert(body, Markup::element("div"));
    let items = doc.child_elements(list);

    let boxes = layout(&doc, Rect::from_size(40, 20));

    assert_eq!(boxes[&link], Rect::new(0, 0, 1, 1));
    assert_eq!(boxes[&items[0]], Rect::new(0, 1, 1, 1));
    assert_eq!(boxes[&items[1]], Rect::new(0, 2, 4, 1));
    // Other empty elements still collapse
    assert!(boxes[&spacer].is_empty());
    assert_eq!(hit_test(&doc, &boxes, 0, 0), Some(link));
    assert_eq!(hit_test(&doc, &boxes, 0, 1), Some(items[0]));
}
