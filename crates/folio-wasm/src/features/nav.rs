//! Header navigation binding.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{
    section_href, Intersection, MobileMenu, ScrollHeader, ScrollLock, SectionTracker, SiteConfig,
};
use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom;
use crate::viewport::ViewportSubscription;

const SCROLLED_CLASS: &str = "nav--scrolled";
const OVERLAY_CLASS: &str = "nav__overlay";

/// Live header navigation wiring. Dropping it detaches every listener and
/// removes the generated overlay.
pub struct Navigation {
    _listeners: Vec<EventListener>,
    _sections: Option<ViewportSubscription>,
    overlay: Element,
}

impl Drop for Navigation {
    fn drop(&mut self) {
        self.overlay.remove();
    }
}

struct Menu {
    state: RefCell<MobileMenu>,
    hamburger: Element,
    links: Element,
    overlay: Element,
}

impl Menu {
    fn render(&self, open: bool) {
        dom::set_class(&self.hamburger, "active", open);
        dom::set_class(&self.links, "open", open);
        dom::set_class(&self.overlay, "active", open);
    }

    fn toggle(&self) {
        let open = self.state.borrow_mut().toggle();
        self.render(open);
    }

    fn close(&self) {
        if self.state.borrow_mut().close() {
            self.render(false);
        }
    }
}

pub(crate) fn install(
    doc: &Document,
    config: &SiteConfig,
    lock: &ScrollLock,
) -> Result<Option<Navigation>, JsValue> {
    let selectors = &config.selectors;
    let (Some(nav), Some(hamburger), Some(links)) = (
        dom::find(doc, &selectors.nav),
        dom::find(doc, &selectors.hamburger),
        dom::find(doc, &selectors.nav_links),
    ) else {
        return Ok(None);
    };
    let link_items = Rc::new(dom::find_all_in(&links, &selectors.nav_link));
    let window = dom::window()?;
    let mut listeners = Vec::new();

    let header = ScrollHeader::new(&config.nav);
    let update_header = {
        let window = window.clone();
        move || {
            let scroll_y = window.scroll_y().unwrap_or_default();
            dom::set_class(&nav, SCROLLED_CLASS, header.is_scrolled(scroll_y));
        }
    };
    update_header();
    listeners.push(EventListener::new(&window, "scroll", move |_| update_header()));

    let overlay = doc.create_element("div")?;
    overlay.set_class_name(OVERLAY_CLASS);
    dom::body(doc)?.append_child(&overlay)?;

    let menu = Rc::new(Menu {
        state: RefCell::new(MobileMenu::new().with_scroll_lock(lock.clone())),
        hamburger: hamburger.clone(),
        links,
        overlay: overlay.clone(),
    });
    for target in [&hamburger, &overlay] {
        let menu = Rc::clone(&menu);
        listeners.push(EventListener::new(target, "click", move |_| menu.toggle()));
    }
    for link in link_items.iter() {
        let menu = Rc::clone(&menu);
        listeners.push(EventListener::new(link, "click", move |_| menu.close()));
    }

    let sections = track_sections(doc, config, link_items)?;
    tracing::debug!("navigation installed");
    Ok(Some(Navigation {
        _listeners: listeners,
        _sections: sections,
        overlay,
    }))
}

fn track_sections(
    doc: &Document,
    config: &SiteConfig,
    links: Rc<Vec<Element>>,
) -> Result<Option<ViewportSubscription>, JsValue> {
    let sections = dom::find_all(doc, &config.selectors.sections);
    if sections.is_empty() {
        return Ok(None);
    }

    let mut tracker = SectionTracker::new();
    for section in &sections {
        tracker.track(section.id());
    }
    let policy = *tracker.policy();
    let tracker = RefCell::new(tracker);

    let subscription = ViewportSubscription::new(&policy, move |entries, _| {
        let batch = entries.iter().map(|entry| Intersection {
            target: entry.target().id(),
            is_intersecting: entry.is_intersecting(),
        });
        let mut tracker = tracker.borrow_mut();
        let Some(active) = tracker.on_batch(batch) else {
            return;
        };
        let href = section_href(active);
        for link in links.iter() {
            let is_active = link.get_attribute("href").as_deref() == Some(href.as_str());
            dom::set_class(link, "active", is_active);
        }
    })?;
    for section in &sections {
        subscription.observe(section);
    }
    Ok(Some(subscription))
}
