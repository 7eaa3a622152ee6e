//! Scroll reveal binding.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{RevealCoordinator, SiteConfig};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom;
use crate::viewport::{indexed, ViewportSubscription};

const REVEALED_CLASS: &str = "revealed";

/// Live scroll reveal. Dropping it disconnects the observer and cancels
/// reveals still waiting on their stagger delay.
pub struct RevealEffect {
    _subscription: ViewportSubscription,
    _staggered: Rc<RefCell<Vec<Timeout>>>,
}

pub(crate) fn install(
    doc: &Document,
    config: &SiteConfig,
) -> Result<Option<RevealEffect>, JsValue> {
    let targets = Rc::new(dom::find_all(doc, &config.selectors.reveal));
    if targets.is_empty() {
        return Ok(None);
    }

    let mut coordinator = RevealCoordinator::new(&config.reveal);
    for index in 0..targets.len() {
        coordinator.track(index);
    }
    let policy = *coordinator.policy();
    let coordinator = RefCell::new(coordinator);
    let staggered = Rc::new(RefCell::new(Vec::new()));

    let observed = Rc::clone(&targets);
    let pending = Rc::clone(&staggered);
    let subscription = ViewportSubscription::new(&policy, move |entries, observer| {
        let steps = coordinator
            .borrow_mut()
            .on_batch(indexed(&entries, &observed));
        for step in steps {
            let element = observed[step.target].clone();
            observer.unobserve(&element);
            if step.delay_ms == 0 {
                dom::set_class(&element, REVEALED_CLASS, true);
            } else {
                let timeout = Timeout::new(step.delay_ms, move || {
                    dom::set_class(&element, REVEALED_CLASS, true);
                });
                pending.borrow_mut().push(timeout);
            }
        }
    })?;
    for target in targets.iter() {
        subscription.observe(target);
    }
    tracing::debug!(count = targets.len(), "scroll reveal installed");
    Ok(Some(RevealEffect {
        _subscription: subscription,
        _staggered: staggered,
    }))
}
