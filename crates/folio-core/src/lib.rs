//! Platform-independent behavior for the portfolio page.
//!
//! Every interactive feature of the site is modelled here as a small state
//! machine that knows nothing about the DOM. The `folio-wasm` crate binds
//! these to browser events and elements.
//!
//! # Modules
//!
//! - [`observer`] - viewport policies and one-shot subscription bookkeeping
//! - [`reveal`] - staggered scroll reveal
//! - [`counter`] - eased count-up for statistic numbers
//! - [`gallery`] - active-panel photo discovery
//! - [`lightbox`] - modal photo viewer state machine and input unification
//! - [`nav`] - header, mobile menu and active-section tracking
//! - [`typewriter`] - hero typing effect
//! - [`carousel`] - project carousel geometry
//! - [`lock`] - reference-counted scroll lock shared by overlays
//! - [`scheduler`] - cooperative per-frame tasks
//!
//! # Example
//!
//! ```
//! use folio_core::{GallerySet, ImageRef, Input, Key, Lightbox, LightboxConfig, Transition};
//!
//! let images: GallerySet = ["a.jpg", "b.jpg", "c.jpg"]
//!     .into_iter()
//!     .map(|src| ImageRef::new(src, ""))
//!     .collect();
//!
//! let mut lightbox = Lightbox::new(&LightboxConfig::default());
//! lightbox.open(images, 2).unwrap();
//!
//! match lightbox.handle(Input::Key(Key::ArrowRight)) {
//!     Transition::Moved(view) => assert_eq!(view.counter, "1 / 3"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

#![warn(missing_docs)]

pub mod carousel;
pub mod config;
pub mod counter;
mod error;
pub mod gallery;
pub mod lightbox;
pub mod lock;
pub mod nav;
pub mod observer;
pub mod reveal;
pub mod scheduler;
pub mod typewriter;

pub use carousel::{Carousel, Direction};
pub use config::{
    CarouselConfig, CounterConfig, LightboxConfig, NavConfig, RevealConfig, Selectors, SiteConfig,
    TypewriterConfig, DEFAULT_PHRASES,
};
pub use counter::{ease_out_cubic, CounterAnimation, CounterSpec, DisplayMode};
pub use error::{FolioError, Result};
pub use gallery::{GalleryIndex, GallerySet, ImageRef, PanelQuery};
pub use lightbox::{
    activation_label, Command, Input, Key, Lightbox, LightboxState, LightboxView, SwipeTracker,
    Transition,
};
pub use lock::{LockSink, ScrollLock, ScrollLockGuard};
pub use nav::{section_href, MobileMenu, ScrollHeader, SectionTracker};
pub use observer::{Inset, Intersection, ObserverPolicy, RootMargin, Trigger, ViewportObserver};
pub use reveal::{RevealCoordinator, RevealStep};
pub use scheduler::{run_frames, FrameTask, Tick};
pub use typewriter::{TypeStep, Typewriter};
