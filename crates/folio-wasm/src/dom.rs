//! Small DOM helpers shared by the feature bindings.
//!
//! Lookups of optional elements return `Option`/empty `Vec`: a missing node is
//! the normal way for a page to opt out of a feature.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, NodeList, Window};

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

pub(crate) fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))
}

pub(crate) fn body(doc: &Document) -> Result<HtmlElement, JsValue> {
    doc.body().ok_or_else(|| JsValue::from_str("No body"))
}

/// First match for `selector`; invalid selectors count as no match.
pub(crate) fn find(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok().flatten()
}

pub(crate) fn find_all(doc: &Document, selector: &str) -> Vec<Element> {
    doc.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

pub(crate) fn find_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn set_class(el: &Element, class: &str, on: bool) {
    if el.class_list().toggle_with_force(class, on).is_err() {
        tracing::warn!(class, on, "failed to update class list");
    }
}

pub(crate) fn set_attribute(el: &Element, name: &str, value: &str) {
    if el.set_attribute(name, value).is_err() {
        tracing::warn!(name, value, "failed to set attribute");
    }
}

pub(crate) fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

/// Hide or show an element regardless of its stylesheet display value.
pub(crate) fn set_displayed(el: &Element, displayed: bool) {
    let Some(el) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = el.style();
    let result = if displayed {
        style.remove_property("display").map(|_| ())
    } else {
        style.set_property("display", "none")
    };
    if result.is_err() {
        tracing::warn!(displayed, "failed to update display");
    }
}

/// Element the event was dispatched to.
pub(crate) fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Nearest ancestor-or-self of the event's element matching `selector`.
pub(crate) fn closest(event: &Event, selector: &str) -> Option<Element> {
    event_element(event)?.closest(selector).ok().flatten()
}

pub(crate) fn now_ms() -> f64 {
    window()
        .ok()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_default()
}
