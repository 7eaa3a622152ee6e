//! Hero typewriter binding.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{SiteConfig, Typewriter};
use gloo::timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::dom;

struct TypeLoop {
    machine: Typewriter,
    element: Element,
    pending: Option<Timeout>,
}

/// Running typewriter. Dropping it cancels the pending step.
pub struct TypewriterEffect {
    state: Rc<RefCell<TypeLoop>>,
}

impl Drop for TypewriterEffect {
    fn drop(&mut self) {
        self.state.borrow_mut().pending.take();
    }
}

pub(crate) fn install(doc: &Document, config: &SiteConfig) -> Option<TypewriterEffect> {
    let element = dom::find(doc, &config.selectors.typewriter)?;
    let machine = match Typewriter::new(&config.typewriter) {
        Ok(machine) => machine,
        Err(err) => {
            tracing::debug!("typewriter disabled: {err}");
            return None;
        }
    };
    let delay = machine.start_delay_ms();
    let state = Rc::new(RefCell::new(TypeLoop {
        machine,
        element,
        pending: None,
    }));
    schedule(&state, delay);
    Some(TypewriterEffect { state })
}

fn schedule(state: &Rc<RefCell<TypeLoop>>, delay_ms: u32) {
    let next = Rc::clone(state);
    let timeout = Timeout::new(delay_ms, move || {
        let delay = {
            let mut guard = next.borrow_mut();
            let step = guard.machine.step();
            dom::set_text(&guard.element, &step.text);
            step.next_delay_ms
        };
        schedule(&next, delay);
    });
    state.borrow_mut().pending = Some(timeout);
}
