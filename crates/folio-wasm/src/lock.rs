//! Body overflow sink for the shared scroll lock.

use folio_core::{LockSink, ScrollLock};
use web_sys::HtmlElement;

struct BodyOverflow {
    body: HtmlElement,
}

impl LockSink for BodyOverflow {
    fn apply(&self, locked: bool) {
        let style = self.body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if result.is_err() {
            tracing::warn!(locked, "failed to update body overflow");
        }
    }
}

/// The page's scroll lock, applied to `body.style.overflow`.
pub(crate) fn body_scroll_lock(body: HtmlElement) -> ScrollLock {
    ScrollLock::new(BodyOverflow { body })
}
