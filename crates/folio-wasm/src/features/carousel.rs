//! Project carousel binding.

use std::rc::Rc;

use folio_core::{Carousel, Direction, SiteConfig};
use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;

const DOT_CLASS: &str = "carousel__dot";

/// Live carousel wiring. Dropping it detaches the listeners and removes the
/// generated dots.
pub struct CarouselControls {
    _listeners: Vec<EventListener>,
    dots: Rc<Vec<Element>>,
}

impl Drop for CarouselControls {
    fn drop(&mut self) {
        for dot in self.dots.iter() {
            dot.remove();
        }
    }
}

fn offset_left(el: &Element) -> f64 {
    el.dyn_ref::<HtmlElement>()
        .map_or(0.0, |el| f64::from(el.offset_left()))
}

fn offset_width(el: &Element) -> f64 {
    el.dyn_ref::<HtmlElement>()
        .map_or(0.0, |el| f64::from(el.offset_width()))
}

fn scroll_options(left: f64) -> ScrollToOptions {
    let options = ScrollToOptions::new();
    options.set_left(left);
    options.set_behavior(ScrollBehavior::Smooth);
    options
}

pub(crate) fn install(
    doc: &Document,
    config: &SiteConfig,
) -> Result<Option<CarouselControls>, JsValue> {
    let selectors = &config.selectors;
    let Some(track) = dom::find(doc, &selectors.carousel_track) else {
        return Ok(None);
    };
    let slides = Rc::new(dom::find_all_in(&track, &selectors.carousel_slide));
    let carousel = Rc::new(Carousel::new(slides.len(), &config.carousel));
    let mut listeners = Vec::new();

    let mut dots = Vec::with_capacity(slides.len());
    if let Some(container) = dom::find(doc, &selectors.carousel_dots) {
        for index in 0..slides.len() {
            let dot = doc.create_element("button")?;
            dot.set_class_name(DOT_CLASS);
            dom::set_class(&dot, "active", index == 0);
            dot.set_attribute("aria-label", &Carousel::dot_label(index))?;
            container.append_child(&dot)?;

            let track = track.clone();
            let slides = Rc::clone(&slides);
            listeners.push(EventListener::new(&dot, "click", move |_| {
                if let Some(slide) = slides.get(index) {
                    let left = Carousel::offset_for(offset_left(slide), offset_left(&track));
                    track.scroll_to_with_scroll_to_options(&scroll_options(left));
                }
            }));
            dots.push(dot);
        }
    }
    let dots = Rc::new(dots);

    for (selector, direction) in [
        (&selectors.carousel_prev, Direction::Previous),
        (&selectors.carousel_next, Direction::Next),
    ] {
        let Some(button) = dom::find(doc, selector) else {
            continue;
        };
        let track = track.clone();
        let carousel = Rc::clone(&carousel);
        listeners.push(EventListener::new(&button, "click", move |_| {
            track.scroll_by_with_scroll_to_options(&scroll_options(carousel.step(direction)));
        }));
    }

    {
        let scrolled = track.clone();
        let dots = Rc::clone(&dots);
        listeners.push(EventListener::new(&track, "scroll", move |_| {
            let Some(first) = slides.first() else {
                return;
            };
            let scroll_left = f64::from(scrolled.scroll_left());
            let Some(active) = carousel.active_index(scroll_left, offset_width(first)) else {
                return;
            };
            for (index, dot) in dots.iter().enumerate() {
                dom::set_class(dot, "active", index == active);
            }
        }));
    }

    tracing::debug!(dots = dots.len(), "carousel installed");
    Ok(Some(CarouselControls {
        _listeners: listeners,
        dots,
    }))
}
