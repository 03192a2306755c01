use pagedom::{Document, Markup};

fn sample_select(doc: &mut Document) -> pagedom::NodeId {
    let body = doc.body();
    doc.insert(
        body,
        Markup::element("select")
            .id("size")
            .attr("class", "wide  primary")
            .child(Markup::element("option").attr("value", "s").text("Small"))
            .child(
                Markup::element("optgroup")
                    .attr("label", "Large")
                    .child(Markup::element("option").text(" Large ").flag("selected", true))
                    .child(Markup::element("option").attr("value", "xl").text("Huge")),
            ),
    )
}

// ============================================================================
// Tree Structure
// ============================================================================

#[test]
fn test_insert_builds_subtree_in_order() {
    let mut doc = Document::new();
    let select = sample_select(&mut doc);

    let children = doc.child_elements(select);
    assert_eq!(children.len(), 2);
    assert!(doc.is_tag(children[0], "option"));
    assert!(doc.is_tag(children[1], "OPTGROUP"));
    assert_eq!(doc.child_elements(children[1]).len(), 2);
}

#[test]
fn test_insert_after_places_sibling() {
    let mut doc = Document::new();
    let body = doc.body();
    let first = doc.insert(body, Markup::element("p").id("first"));
    let last = doc.insert(body, Markup::element("p").id("last"));

    let middle = doc.create_element("div");
    assert!(doc.insert_after(first, middle));
    assert_eq!(doc.children(body), &[first, middle, last]);

    // Moving an attached node detaches it from its old position first
    assert!(doc.insert_after(last, first));
    assert_eq!(doc.children(body), &[middle, last, first]);
}

#[test]
fn test_insert_after_requires_parent() {
    let mut doc = Document::new();
    let orphan = doc.create_element("div");
    let node = doc.create_element("span");
    assert!(!doc.insert_after(orphan, node));
    assert_eq!(doc.parent(node), None);
}

#[test]
fn test_descendants_are_preorder() {
    let mut doc = Document::new();
    let select = sample_select(&mut doc);

    let tags: Vec<_> = doc
        .descendants(select)
        .into_iter()
        .filter_map(|id| doc.tag_name(id).map(str::to_string))
        .collect();
    assert_eq!(tags, vec!["option", "optgroup", "option", "option"]);
}

#[test]
fn test_get_element_by_id_ignores_detached() {
    let mut doc = Document::new();
    let select = sample_select(&mut doc);
    assert_eq!(doc.get_element_by_id("size"), Some(select));

    doc.detach(select);
    assert_eq!(doc.get_element_by_id("size"), None);
    assert_eq!(doc.get_element_by_id(""), None);
}

// ============================================================================
// Attributes and Tags
// ============================================================================

#[test]
fn test_class_attribute_becomes_style_tags() {
    let mut doc = Document::new();
    let select = sample_select(&mut doc);

    assert!(doc.has_tag(select, "wide"));
    assert!(doc.has_tag(select, "primary"));
    assert!(!doc.has_attr(select, "class"));
}

#[test]
fn test_attribute_set_and_remove() {
    let mut doc = Document::new();
    let select = sample_select(&mut doc);

    assert!(!doc.has_attr(select, "multiple"));
    doc.set_attr(select, "multiple", "");
    assert!(doc.has_attr(select, "multiple"));
    assert!(doc.remove_attr(select, "multiple"));
    assert!(!doc.remove_attr(select, "multiple"));
}

#[test]
fn test_tags_on_text_node_are_ignored() {
    let mut doc = Document::new();
    let text = doc.create_text("plain");
    assert!(!doc.add_tag(text, "selected"));
    assert!(!doc.has_tag(text, "selected"));
}

#[test]
fn test_hidden_is_inherited() {
    let mut doc = Document::new();
    let select = sample_select(&mut doc);
    let option = doc.child_elements(select)[0];

    assert!(!doc.is_hidden(option));
    doc.set_hidden(select, true);
    assert!(doc.is_hidden(option));
    assert!(doc.is_connected(option));
}

#[test]
fn test_elements_with_attr_in_document_order() {
    let mut doc = Document::new();
    let body = doc.body();
    let a = doc.insert(body, Markup::element("select").attr("data-selecty", ""));
    doc.insert(body, Markup::element("select"));
    let c = doc.insert(
        body,
        Markup::element("div").child(Markup::element("select").attr("data-selecty", "")),
    );
    let nested = doc.child_elements(c)[0];

    assert_eq!(doc.elements_with_attr("data-selecty"), vec![a, nested]);
    assert_eq!(doc.elements_by_tag("select").len(), 3);
}

// ============================================================================
// Text and Forms
// ============================================================================

#[test]
fn test_set_text_replaces_children() {
    let mut doc = Document::new();
    let body = doc.body();
    let link = doc.insert(body, Markup::element("a").text("one").child(Markup::element("b").text("two")));
    assert_eq!(doc.text_content(link), "onetwo");

    doc.set_text(link, "three");
    assert_eq!(doc.text_content(link), "three");
    assert_eq!(doc.children(link).len(), 1);

    doc.set_text(link, "");
    assert_eq!(doc.text_content(link), "");
    assert_eq!(doc.children(link).len(), 1);
}

#[test]
fn test_set_text_reuses_sole_text_node() {
    let mut doc = Document::new();
    let body = doc.body();
    let link = doc.insert(body, Markup::element("a").text("start"));
    let text = doc.children(link)[0];
    let allocated = doc.node_count();

    for round in 0..500 {
        doc.set_text(link, &format!("label {round}"));
        doc.set_text(link, "");
    }

    assert_eq!(doc.node_count(), allocated);
    assert_eq!(doc.children(link), &[text]);
    assert_eq!(doc.text_content(link), "");
}

#[test]
fn test_set_text_on_empty_element_allocates_once() {
    let mut doc = Document::new();
    let body = doc.body();
    let link = doc.insert(body, Markup::element("a"));

    doc.set_text(link, "");
    assert!(doc.children(link).is_empty());

    doc.set_text(link, "first");
    let allocated = doc.node_count();
    doc.set_text(link, "second");
    assert_eq!(doc.node_count(), allocated);
    assert_eq!(doc.text_content(link), "second");
}

#[test]
fn test_form_values_reads_selected_options() {
    let mut doc = Document::new();
    let select = sample_select(&mut doc);
    assert_eq!(doc.form_values(select), vec!["Large".to_string()]);

    let first = doc.child_elements(select)[0];
    doc.set_attr(first, "selected", "selected");
    assert_eq!(
        doc.form_values(select),
        vec!["s".to_string(), "Large".to_string()]
    );
}
