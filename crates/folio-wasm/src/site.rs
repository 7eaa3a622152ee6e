//! Wires every page behavior onto the current document.

use std::cell::RefCell;

use folio_core::{ScrollLock, SiteConfig};
use wasm_bindgen::JsValue;

use crate::dom;
use crate::features::{
    self, CarouselControls, LightboxControls, Navigation, RevealEffect, TypewriterEffect,
};
use crate::lock::body_scroll_lock;
use crate::viewport::ViewportSubscription;

/// Every installed behavior on the page.
///
/// A behavior whose elements are missing, or whose setup failed, is simply
/// absent; the others keep working. Dropping the site detaches everything.
pub struct Site {
    scroll_lock: ScrollLock,
    navigation: Option<Navigation>,
    typewriter: Option<TypewriterEffect>,
    reveal: Option<RevealEffect>,
    counters: Option<ViewportSubscription>,
    carousel: Option<CarouselControls>,
    lightbox: Option<LightboxControls>,
}

fn settle<T>(feature: &str, installed: Result<Option<T>, JsValue>) -> Option<T> {
    match installed {
        Ok(Some(handle)) => Some(handle),
        Ok(None) => {
            tracing::debug!(feature, "not present on page");
            None
        }
        Err(err) => {
            tracing::warn!(feature, "setup failed: {err:?}");
            None
        }
    }
}

impl Site {
    /// Install every behavior on the current document.
    ///
    /// Only a missing `window`, `document` or `<body>` is an error.
    pub fn install(config: &SiteConfig) -> Result<Self, JsValue> {
        let doc = dom::document()?;
        let scroll_lock = body_scroll_lock(dom::body(&doc)?);

        let site = Self {
            navigation: settle("navigation", features::nav::install(&doc, config, &scroll_lock)),
            typewriter: features::typewriter::install(&doc, config),
            reveal: settle("reveal", features::reveal::install(&doc, config)),
            counters: settle("counters", features::counters::install(&doc, config)),
            carousel: settle("carousel", features::carousel::install(&doc, config)),
            lightbox: settle("lightbox", features::lightbox::install(&doc, config, &scroll_lock)),
            scroll_lock,
        };
        tracing::info!(features = site.installed(), "site ready");
        Ok(site)
    }

    /// Number of behaviors that found their elements.
    pub fn installed(&self) -> usize {
        [
            self.navigation.is_some(),
            self.typewriter.is_some(),
            self.reveal.is_some(),
            self.counters.is_some(),
            self.carousel.is_some(),
            self.lightbox.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    /// The shared body scroll lock.
    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

pub(crate) fn is_installed() -> bool {
    SITE.with(|site| site.borrow().is_some())
}

/// Install `config` unless a site is already live.
pub(crate) fn install_once(config: &SiteConfig) -> Result<(), JsValue> {
    if is_installed() {
        tracing::info!("already initialized, ignoring");
        return Ok(());
    }
    let site = Site::install(config)?;
    SITE.with(|slot| *slot.borrow_mut() = Some(site));
    Ok(())
}
