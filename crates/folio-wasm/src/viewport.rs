//! `IntersectionObserver` subscriptions.

use folio_core::{Intersection, ObserverPolicy};
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type BatchCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// A live intersection observer configured from an [`ObserverPolicy`].
///
/// Dropping the subscription disconnects the observer.
pub(crate) struct ViewportSubscription {
    observer: IntersectionObserver,
    _callback: BatchCallback,
}

impl ViewportSubscription {
    /// `on_batch` receives every report of one callback invocation plus the
    /// observer, so one-shot targets can be unobserved from inside the batch.
    pub(crate) fn new<F>(policy: &ObserverPolicy, mut on_batch: F) -> Result<Self, JsValue>
    where
        F: FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
    {
        let callback =
            BatchCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                let entries = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .collect();
                on_batch(entries, &observer);
            });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(policy.threshold));
        init.set_root_margin(&policy.root_margin.to_string());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub(crate) fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Translate browser entries into reports keyed by position in `targets`.
/// Entries for unknown elements are dropped.
pub(crate) fn indexed(
    entries: &[IntersectionObserverEntry],
    targets: &[Element],
) -> Vec<Intersection<usize>> {
    entries
        .iter()
        .filter_map(|entry| {
            let target = entry.target();
            let index = targets.iter().position(|el| *el == target)?;
            Some(Intersection {
                target: index,
                is_intersecting: entry.is_intersecting(),
            })
        })
        .collect()
}
