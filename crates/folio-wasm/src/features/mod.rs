//! One binding per page behavior. Each `install` returns `Ok(None)` when the
//! page lacks the elements the behavior needs.

pub(crate) mod carousel;
pub(crate) mod counters;
pub(crate) mod lightbox;
pub(crate) mod nav;
pub(crate) mod reveal;
pub(crate) mod typewriter;

pub use carousel::CarouselControls;
pub use lightbox::LightboxControls;
pub use nav::Navigation;
pub use reveal::RevealEffect;
pub use typewriter::TypewriterEffect;
