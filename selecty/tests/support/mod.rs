#![allow(dead_code)]

use pagedom::{Document, InputEvent, Markup, Rect};
use selecty::{EventResult, Environment, Page, SelectConfig, SelectWidget};

pub const DESKTOP: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:120.0) Gecko/20100101 Firefox/120.0";
pub const PHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) Mobile/15E148";

pub fn option(label: &str) -> Markup {
    Markup::element("option")
        .attr("value", label.to_lowercase())
        .text(label)
}

pub fn selected(label: &str) -> Markup {
    option(label).flag("selected", true)
}

pub fn disabled(label: &str) -> Markup {
    option(label).flag("disabled", true)
}

pub fn group(label: &str, options: Vec<Markup>) -> Markup {
    Markup::element("optgroup")
        .attr("label", label)
        .children(options)
}

pub fn select(id: &str, entries: Vec<Markup>) -> Markup {
    Markup::element("select")
        .id(id)
        .attr("data-selecty", "")
        .children(entries)
}

pub fn multi(id: &str, entries: Vec<Markup>) -> Markup {
    select(id, entries).flag("multiple", true)
}

pub fn document_with(hosts: Vec<Markup>) -> Document {
    let mut doc = Document::new();
    let body = doc.body();
    for host in hosts {
        doc.insert(body, host);
    }
    doc
}

pub fn desktop() -> Environment {
    Environment::new(DESKTOP).with_viewport(Rect::from_size(80, 40))
}

/// Page with every host mounted on a desktop environment.
pub fn page_with(hosts: Vec<Markup>) -> Page {
    page_with_config(hosts, SelectConfig::default())
}

pub fn page_with_config(hosts: Vec<Markup>, config: SelectConfig) -> Page {
    let mut page = Page::new(document_with(hosts), config, desktop());
    page.mount_all();
    page
}

pub fn widget<'a>(page: &'a Page, host_id: &str) -> &'a SelectWidget {
    page.widget_for(host_id)
        .unwrap_or_else(|| panic!("no widget for #{host_id}"))
}

pub fn click_at(page: &mut Page, (x, y): (u16, u16)) -> EventResult {
    page.dispatch(InputEvent::PointerDown { x, y })
}

pub fn click_summary(page: &mut Page, host_id: &str) -> EventResult {
    let summary = widget(page, host_id).replica().summary();
    let point = page.center_of(summary).expect("summary is laid out");
    click_at(page, point)
}

/// Click the list row of option `index`; the list must be open.
pub fn click_item(page: &mut Page, host_id: &str, index: usize) -> EventResult {
    let item = widget(page, host_id)
        .replica()
        .item(index)
        .expect("item exists");
    let point = page.center_of(item).expect("item is laid out");
    click_at(page, point)
}

/// Click somewhere no element covers.
pub fn click_outside(page: &mut Page) -> EventResult {
    click_at(page, (79, 39))
}

/// Option indices whose host `option` carries `selected`.
pub fn native_selected(page: &Page, host_id: &str) -> Vec<usize> {
    let doc = page.document();
    let host = doc.get_element_by_id(host_id).expect("host exists");
    doc.descendants(host)
        .into_iter()
        .filter(|node| doc.is_tag(*node, "option"))
        .enumerate()
        .filter(|(_, node)| doc.has_attr(*node, "selected"))
        .map(|(index, _)| index)
        .collect()
}

/// Option indices whose replica item carries the `selected` tag.
pub fn synthetic_selected(page: &Page, host_id: &str) -> Vec<usize> {
    let doc = page.document();
    widget(page, host_id)
        .replica()
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| doc.has_tag(**item, "selected"))
        .map(|(index, _)| index)
        .collect()
}

/// Host flags, replica tags and the widget's own record all agree.
pub fn assert_in_sync(page: &Page, host_id: &str) {
    let indices = widget(page, host_id).selected_indices();
    assert!(!indices.is_empty(), "selection is never empty at rest");
    assert_eq!(native_selected(page, host_id), indices, "host flags");
    assert_eq!(synthetic_selected(page, host_id), indices, "replica tags");
}
