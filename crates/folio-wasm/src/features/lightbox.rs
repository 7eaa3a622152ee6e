//! Photo lightbox binding.
//!
//! Photos are discovered from the active highlight panel each time the modal
//! opens, so switching panels never leaves a stale gallery behind.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{
    activation_label, GalleryIndex, ImageRef, Input, Key, Lightbox, LightboxView, PanelQuery,
    ScrollLock, SiteConfig, Transition,
};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlImageElement, KeyboardEvent, Node, TouchEvent};

use crate::dom;

const OPEN_CLASS: &str = "active";

/// Photo targets inside the active highlight panel.
struct DomPanels {
    doc: Document,
    panel: String,
    photo: String,
}

/// The `<img>` carrying a photo target's source: the target itself or its
/// first image descendant.
fn photo_image(target: &Element) -> Option<Element> {
    if target.tag_name().eq_ignore_ascii_case("img") {
        return Some(target.clone());
    }
    target.query_selector("img").ok().flatten()
}

fn alt_text(target: &Element) -> String {
    photo_image(target)
        .and_then(|img| img.get_attribute("alt"))
        .unwrap_or_default()
}

impl PanelQuery for DomPanels {
    type Image = Element;

    fn active_panel_images(&self) -> Option<Vec<Element>> {
        let panel = dom::find(&self.doc, &self.panel)?;
        Some(dom::find_all_in(&panel, &self.photo))
    }

    fn describe(&self, target: &Element) -> ImageRef {
        let src = photo_image(target)
            .and_then(|img| img.get_attribute("src"))
            .unwrap_or_default();
        ImageRef::new(src, alt_text(target))
    }
}

struct LightboxDom {
    modal: Element,
    content: Option<Element>,
    image: Option<Element>,
    counter: Option<Element>,
    prev: Option<Element>,
    next: Option<Element>,
    panels: DomPanels,
    state: RefCell<Lightbox>,
}

impl LightboxDom {
    fn set_visible(&self, open: bool) {
        dom::set_class(&self.modal, OPEN_CLASS, open);
        dom::set_attribute(&self.modal, "aria-hidden", if open { "false" } else { "true" });
    }

    fn render(&self, view: &LightboxView) {
        if let Some(img) = self
            .image
            .as_ref()
            .and_then(|el| el.dyn_ref::<HtmlImageElement>())
        {
            img.set_src(&view.image.src);
            img.set_alt(&view.image.alt);
        }
        if let Some(counter) = &self.counter {
            dom::set_text(counter, &view.counter);
        }
        for control in [&self.prev, &self.next].into_iter().flatten() {
            dom::set_displayed(control, view.show_navigation);
        }
    }

    fn show(&self, transition: Transition) {
        match transition {
            Transition::Moved(view) => self.render(&view),
            Transition::Closed => self.set_visible(false),
            Transition::Ignored => {}
        }
    }

    fn open(&self, target: &Element) {
        let gallery = GalleryIndex::discover(&self.panels);
        let opened = self.state.borrow_mut().open_from(gallery, target);
        match opened {
            Ok(view) => {
                self.render(&view);
                self.set_visible(true);
            }
            Err(err) => tracing::debug!("lightbox not opened: {err}"),
        }
    }

    fn handle(&self, input: Input) {
        let transition = self.state.borrow_mut().handle(input);
        self.show(transition);
    }

    fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    fn is_backdrop(&self, event: &Event) -> bool {
        let Some(target) = dom::event_element(event) else {
            return false;
        };
        if target == self.modal {
            return true;
        }
        let node: &Node = &target;
        match &self.content {
            Some(content) => !content.contains(Some(node)),
            None => false,
        }
    }
}

/// Live lightbox wiring. Dropping it detaches the listeners and releases the
/// scroll lock if the modal is still open.
pub struct LightboxControls {
    _listeners: Vec<EventListener>,
    dom: Rc<LightboxDom>,
}

impl Drop for LightboxControls {
    fn drop(&mut self) {
        if self.dom.state.borrow_mut().close() {
            self.dom.set_visible(false);
        }
    }
}

fn touch_x(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().item(0)?;
    Some(f64::from(touch.screen_x()))
}

pub(crate) fn install(
    doc: &Document,
    config: &SiteConfig,
    lock: &ScrollLock,
) -> Result<Option<LightboxControls>, JsValue> {
    let selectors = &config.selectors;
    let Some(modal) = dom::find(doc, &selectors.lightbox) else {
        return Ok(None);
    };

    for photo in dom::find_all(doc, &selectors.photo) {
        photo.set_attribute("tabindex", "0")?;
        photo.set_attribute("role", "button")?;
        photo.set_attribute("aria-label", &activation_label(&alt_text(&photo)))?;
    }

    let lightbox = Rc::new(LightboxDom {
        content: modal
            .query_selector(&selectors.lightbox_content)
            .ok()
            .flatten(),
        image: dom::find(doc, &selectors.lightbox_image),
        counter: dom::find(doc, &selectors.lightbox_counter),
        prev: dom::find(doc, &selectors.lightbox_prev),
        next: dom::find(doc, &selectors.lightbox_next),
        panels: DomPanels {
            doc: doc.clone(),
            panel: selectors.active_panel.clone(),
            photo: selectors.photo.clone(),
        },
        state: RefCell::new(Lightbox::new(&config.lightbox).with_scroll_lock(lock.clone())),
        modal,
    });
    let mut listeners = Vec::new();

    {
        let lightbox = Rc::clone(&lightbox);
        let photo = selectors.photo.clone();
        listeners.push(EventListener::new(doc, "click", move |event| {
            if let Some(target) = dom::closest(event, &photo) {
                lightbox.open(&target);
            }
        }));
    }

    {
        let lightbox = Rc::clone(&lightbox);
        let photo = selectors.photo.clone();
        let options = EventListenerOptions::enable_prevent_default();
        listeners.push(EventListener::new_with_options(
            doc,
            "keydown",
            options,
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let key = Key::from_key_name(&event.key());
                if lightbox.is_open() {
                    lightbox.handle(Input::Key(key));
                } else if key.activates() {
                    if let Some(target) = dom::closest(event, &photo) {
                        event.prevent_default();
                        lightbox.open(&target);
                    }
                }
            },
        ));
    }

    for (control, input) in [
        (&lightbox.prev, Input::PreviousControl),
        (&lightbox.next, Input::NextControl),
        (&dom::find(doc, &selectors.lightbox_close), Input::CloseControl),
    ] {
        let Some(control) = control else {
            continue;
        };
        let lightbox = Rc::clone(&lightbox);
        listeners.push(EventListener::new(control, "click", move |event| {
            event.stop_propagation();
            lightbox.handle(input);
        }));
    }

    {
        let target = lightbox.modal.clone();
        let click = Rc::clone(&lightbox);
        listeners.push(EventListener::new(&target, "click", move |event| {
            let on_backdrop = click.is_backdrop(event);
            click.handle(Input::ModalClick { on_backdrop });
        }));

        let start = Rc::clone(&lightbox);
        listeners.push(EventListener::new(&target, "touchstart", move |event| {
            if let Some(x) = touch_x(event) {
                start.state.borrow_mut().touch_start(x);
            }
        }));

        let end = Rc::clone(&lightbox);
        listeners.push(EventListener::new(&target, "touchend", move |event| {
            if let Some(x) = touch_x(event) {
                let transition = end.state.borrow_mut().touch_end(x);
                end.show(transition);
            }
        }));
    }

    lightbox.set_visible(false);
    tracing::debug!("lightbox installed");
    Ok(Some(LightboxControls {
        _listeners: listeners,
        dom: lightbox,
    }))
}
