mod support;

use selecty::{EventResult, Mount, Page, SelectConfig, SelectWidget};
use support::*;

fn open(page: &mut Page, host_id: &str) {
    let id = widget(page, host_id).id();
    assert_eq!(page.activate(id), EventResult::Consumed);
    assert!(widget(page, host_id).is_open());
}

// ============================================================================
// Single Select
// ============================================================================

#[test]
fn test_single_select_commit_replaces_and_closes() {
    let mut page = page_with(vec![select("s", vec![selected("A"), option("B"), option("C")])]);
    {
        let w = widget(&page, "s");
        assert_eq!(w.selected_indices(), vec![0]);
        assert_eq!(w.summary(), "A");
    }

    open(&mut page, "s");
    assert_eq!(click_item(&mut page, "s", 2), EventResult::Consumed);

    let w = widget(&page, "s");
    assert_eq!(w.selected_indices(), vec![2]);
    assert_eq!(w.summary(), "C");
    assert!(!w.is_open());
    assert_in_sync(&page, "s");
    assert_eq!(w.form_values(page.document()), vec!["c".to_string()]);
}

#[test]
fn test_single_select_never_holds_more_than_one() {
    let mut page = page_with(vec![select(
        "s",
        vec![option("A"), option("B"), disabled("C"), option("D")],
    )]);

    for index in [3, 1, 2, 0, 3, 3, 1] {
        // A disabled row leaves the list open
        if !widget(&page, "s").is_open() {
            open(&mut page, "s");
        }
        click_item(&mut page, "s", index);
        let w = widget(&page, "s");
        assert!(w.selected_indices().len() <= 1);
        assert!(!w.selected_indices().is_empty());
        assert_in_sync(&page, "s");
    }
    assert_eq!(widget(&page, "s").selected_indices(), vec![1]);
}

#[test]
fn test_reselecting_current_item_closes_without_change() {
    let mut page = page_with(vec![select("s", vec![option("A"), selected("B")])]);
    page.take_changes();

    open(&mut page, "s");
    click_item(&mut page, "s", 1);

    assert!(!widget(&page, "s").is_open());
    assert_eq!(widget(&page, "s").selected_indices(), vec![1]);
    assert!(page.take_changes().is_empty());
}

// ============================================================================
// Multi Select
// ============================================================================

#[test]
fn test_multi_select_toggles_and_stays_open() {
    let mut page = page_with(vec![multi("m", vec![option("A"), option("B"), option("C")])]);

    open(&mut page, "m");
    click_item(&mut page, "m", 0);
    click_item(&mut page, "m", 2);

    let w = widget(&page, "m");
    assert_eq!(w.selected_indices(), vec![0, 2]);
    assert_eq!(w.summary(), "A, C");
    assert!(w.is_open());
    assert_in_sync(&page, "m");
    assert_eq!(
        w.form_values(page.document()),
        vec!["a".to_string(), "c".to_string()]
    );
}

#[test]
fn test_multi_select_summary_is_ascending() {
    let mut page = page_with(vec![multi("m", vec![option("A"), option("B"), option("C")])]);

    open(&mut page, "m");
    click_item(&mut page, "m", 2);
    click_item(&mut page, "m", 1);

    assert_eq!(widget(&page, "m").selected_indices(), vec![0, 1, 2]);
    assert_eq!(widget(&page, "m").summary(), "A, B, C");
}

#[test]
fn test_toggling_off_last_selection_repairs_to_first() {
    let mut page = page_with(vec![multi("m", vec![option("A"), selected("B"), option("C")])]);
    assert_eq!(widget(&page, "m").selected_indices(), vec![1]);

    open(&mut page, "m");
    click_item(&mut page, "m", 1);

    let w = widget(&page, "m");
    assert_eq!(w.selected_indices(), vec![0]);
    assert_eq!(w.summary(), "A");
    assert_in_sync(&page, "m");
}

#[test]
fn test_click_twice_returns_to_first() {
    let mut page = page_with(vec![multi("m", vec![option("A"), option("B"), option("C")])]);

    open(&mut page, "m");
    click_item(&mut page, "m", 1);
    assert_eq!(widget(&page, "m").selected_indices(), vec![0, 1]);
    click_item(&mut page, "m", 1);

    assert_eq!(widget(&page, "m").selected_indices(), vec![0]);
    assert_eq!(widget(&page, "m").summary(), "A");
}

#[test]
fn test_custom_separator() {
    let mut page = page_with_config(
        vec![multi("m", vec![selected("A"), option("B"), selected("C")])],
        SelectConfig::new().separator(" | "),
    );
    assert_eq!(widget(&page, "m").summary(), "A | C");

    open(&mut page, "m");
    click_item(&mut page, "m", 1);
    assert_eq!(widget(&page, "m").summary(), "A | B | C");
}

// ============================================================================
// No-op Clicks
// ============================================================================

#[test]
fn test_disabled_item_click_is_absorbed() {
    let mut page = page_with(vec![multi("m", vec![option("A"), disabled("B"), option("C")])]);

    open(&mut page, "m");
    assert_eq!(click_item(&mut page, "m", 1), EventResult::Consumed);

    let w = widget(&page, "m");
    assert_eq!(w.selected_indices(), vec![0]);
    assert!(w.is_open());
    assert!(page.take_changes().is_empty());
}

#[test]
fn test_disabled_group_disables_its_options() {
    let mut page = page_with(vec![select(
        "s",
        vec![
            option("A"),
            group("Locked", vec![option("B")]).flag("disabled", true),
        ],
    )]);
    assert!(widget(&page, "s").options()[1].disabled);

    open(&mut page, "s");
    click_item(&mut page, "s", 1);
    assert_eq!(widget(&page, "s").selected_indices(), vec![0]);
    assert!(widget(&page, "s").is_open());
}

#[test]
fn test_group_header_click_keeps_list_open() {
    let mut page = page_with(vec![select(
        "s",
        vec![group("Fruit", vec![option("Apple"), option("Pear")])],
    )]);

    open(&mut page, "s");
    let header = widget(&page, "s").replica().headers()[0];
    let point = page.center_of(header).unwrap();
    assert_eq!(click_at(&mut page, point), EventResult::Consumed);

    let w = widget(&page, "s");
    assert!(w.is_open());
    assert_eq!(w.selected_indices(), vec![0]);
}

#[test]
fn test_stale_row_is_ignored() {
    let mut page = page_with(vec![select("s", vec![option("A"), option("B")])]);
    open(&mut page, "s");

    let item = widget(&page, "s").replica().item(1).unwrap();
    page.document_mut().set_attr(item, "data-index", "7");
    click_item(&mut page, "s", 1);

    let w = widget(&page, "s");
    assert!(w.is_open());
    assert_eq!(w.selected_indices(), vec![0]);
}

#[test]
fn test_commit_requires_open_list() {
    let mut doc = document_with(vec![select("s", vec![option("A"), option("B")])]);
    let mount = SelectWidget::mount(&mut doc, "#s", &SelectConfig::default(), &desktop());
    let Ok(Mount::Interactive(mut w)) = mount else {
        panic!("expected an interactive widget");
    };

    assert_eq!(w.commit(&mut doc, 1), None);
    assert_eq!(w.selected_indices(), vec![0]);

    assert!(w.open(&mut doc));
    let change = w.commit(&mut doc, 1).expect("selection changed");
    assert_eq!(change.selected, vec![1]);
    assert!(!w.is_open());
}

// ============================================================================
// Notifications
// ============================================================================

#[test]
fn test_changes_carry_selection_and_trigger() {
    let mut page = page_with(vec![multi("m", vec![option("A"), option("B"), option("C")])]);
    let id = widget(&page, "m").id();

    open(&mut page, "m");
    click_item(&mut page, "m", 2);
    click_item(&mut page, "m", 0);

    let changes = page.take_changes();
    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].widget, id);
    assert_eq!(changes[0].selected, vec![0, 2]);
    assert_eq!(changes[0].trigger, 2);
    // Toggling 0 off leaves 2 alone
    assert_eq!(changes[1].selected, vec![2]);
    assert_eq!(changes[1].trigger, 0);

    assert!(page.take_changes().is_empty());
}

#[test]
fn test_rerendering_does_not_grow_the_document() {
    let mut page = page_with(vec![multi("m", vec![option("A"), option("B"), option("C")])]);
    open(&mut page, "m");
    let allocated = page.document().node_count();

    for _ in 0..200 {
        click_item(&mut page, "m", 1);
    }

    assert_eq!(page.document().node_count(), allocated);
    assert_eq!(widget(&page, "m").selected_indices(), vec![0]);
    assert_in_sync(&page, "m");
}
