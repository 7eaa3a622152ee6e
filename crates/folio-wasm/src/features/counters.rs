//! Stat counter binding.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{CounterAnimation, CounterSpec, ObserverPolicy, SiteConfig, ViewportObserver};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom;
use crate::frame;
use crate::viewport::{indexed, ViewportSubscription};

pub(crate) fn install(
    doc: &Document,
    config: &SiteConfig,
) -> Result<Option<ViewportSubscription>, JsValue> {
    let counters = Rc::new(dom::find_all(doc, &config.selectors.stat_counter));
    if counters.is_empty() {
        return Ok(None);
    }

    let policy = ObserverPolicy::counter(&config.counter);
    let mut tracked = ViewportObserver::new(policy);
    for index in 0..counters.len() {
        tracked.observe(index);
    }
    let tracked = RefCell::new(tracked);
    let attribute = config.selectors.stat_count_attribute.clone();
    let duration_ms = config.counter.duration_ms;

    let observed = Rc::clone(&counters);
    let subscription = ViewportSubscription::new(&policy, move |entries, observer| {
        let fired = tracked.borrow_mut().dispatch(indexed(&entries, &observed));
        for index in fired {
            let element = observed[index].clone();
            observer.unobserve(&element);
            start(element, &attribute, duration_ms);
        }
    })?;
    for counter in counters.iter() {
        subscription.observe(counter);
    }
    tracing::debug!(count = counters.len(), "stat counters installed");
    Ok(Some(subscription))
}

fn start(element: Element, attribute: &str, duration_ms: f64) {
    let raw = element.get_attribute(attribute).unwrap_or_default();
    let spec = match CounterSpec::parse(&raw) {
        Ok(spec) => spec,
        Err(err) => {
            tracing::debug!("counter skipped: {err}");
            return;
        }
    };
    let animation = CounterAnimation::new(spec, duration_ms).started_at(dom::now_ms());
    frame::spawn(animation, move |animation: &CounterAnimation| {
        dom::set_text(&element, animation.text());
    });
}
