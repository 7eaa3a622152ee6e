//! Site configuration.
//!
//! Every timing, threshold and DOM selector the page behaviors depend on lives
//! here. All sections deserialize with defaults for missing fields, so a page
//! can override a single value from JavaScript without restating the rest.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Phrases cycled by the hero typewriter when none are configured.
pub const DEFAULT_PHRASES: [&str; 5] = [
    "build distributed systems.",
    "design scalable platforms.",
    "engineer reliable infrastructure.",
    "love clean code.",
    "ship production software.",
];

/// Top-level configuration for every page behavior.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Header and section tracking.
    pub nav: NavConfig,
    /// Hero typewriter.
    pub typewriter: TypewriterConfig,
    /// Scroll reveal.
    pub reveal: RevealConfig,
    /// Stat counters.
    pub counter: CounterConfig,
    /// Project carousel.
    pub carousel: CarouselConfig,
    /// Photo lightbox.
    pub lightbox: LightboxConfig,
    /// Element lookups.
    pub selectors: Selectors,
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the typewriter phrases.
    pub fn phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.typewriter.phrases = phrases.into_iter().map(Into::into).collect();
        self
    }

    /// Delay between consecutive reveals in one batch.
    pub fn reveal_stagger_ms(mut self, stagger_ms: u32) -> Self {
        self.reveal.stagger_ms = stagger_ms;
        self
    }

    /// Counter animation length.
    pub fn counter_duration_ms(mut self, duration_ms: f64) -> Self {
        self.counter.duration_ms = duration_ms;
        self
    }

    /// Minimum horizontal travel for a lightbox swipe.
    pub fn swipe_threshold_px(mut self, threshold: f64) -> Self {
        self.lightbox.swipe_threshold_px = threshold;
        self
    }

    /// Replace every selector.
    pub fn selectors(mut self, selectors: Selectors) -> Self {
        self.selectors = selectors;
        self
    }
}

/// Header and section tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    /// Scroll offset past which the header switches to its compact style.
    pub scrolled_offset_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_offset_px: 50.0,
        }
    }
}

/// Hero typewriter timings (milliseconds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypewriterConfig {
    /// Phrases cycled in order.
    pub phrases: Vec<String>,
    /// Delay after typing one character.
    pub type_delay_ms: u32,
    /// Delay after deleting one character.
    pub delete_delay_ms: u32,
    /// Pause once a phrase is fully typed.
    pub hold_delay_ms: u32,
    /// Pause once a phrase is fully deleted.
    pub next_phrase_delay_ms: u32,
    /// Delay before the first step.
    pub start_delay_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect(),
            type_delay_ms: 80,
            delete_delay_ms: 40,
            hold_delay_ms: 2000,
            next_phrase_delay_ms: 400,
            start_delay_ms: 1000,
        }
    }
}

/// Scroll reveal policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    /// Extra delay per element within one intersection batch.
    pub stagger_ms: u32,
    /// Visible fraction that triggers a reveal.
    pub threshold: f64,
    /// How far the bottom of the viewport is pulled in before an element counts as visible.
    pub bottom_inset_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            stagger_ms: 80,
            threshold: 0.1,
            bottom_inset_px: 50.0,
        }
    }
}

/// Stat counter animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CounterConfig {
    /// Animation length.
    pub duration_ms: f64,
    /// Visible fraction that starts the count.
    pub threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1500.0,
            threshold: 0.5,
        }
    }
}

/// Project carousel geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Distance scrolled by the prev/next buttons.
    pub scroll_step_px: f64,
    /// Gap between slides, used to map scroll offset to a slide index.
    pub slide_gap_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            scroll_step_px: 344.0,
            slide_gap_px: 24.0,
        }
    }
}

/// Photo lightbox input handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LightboxConfig {
    /// Horizontal travel a swipe must exceed (strictly) to navigate.
    pub swipe_threshold_px: f64,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: 50.0,
        }
    }
}

/// DOM contract between the page markup and the behaviors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    /// Header container.
    pub nav: String,
    /// Mobile menu toggle.
    pub hamburger: String,
    /// Nav link list.
    pub nav_links: String,
    /// Links inside the list.
    pub nav_link: String,
    /// Sections tracked for the active link.
    pub sections: String,
    /// Typewriter host.
    pub typewriter: String,
    /// Scroll reveal targets.
    pub reveal: String,
    /// Stat counter numbers.
    pub stat_counter: String,
    /// Attribute holding a counter's target.
    pub stat_count_attribute: String,
    /// Carousel scroll container.
    pub carousel_track: String,
    /// Carousel previous button.
    pub carousel_prev: String,
    /// Carousel next button.
    pub carousel_next: String,
    /// Container receiving generated dots.
    pub carousel_dots: String,
    /// Slides inside the track.
    pub carousel_slide: String,
    /// The highlight panel currently shown.
    pub active_panel: String,
    /// Photo targets that open the lightbox.
    pub photo: String,
    /// Lightbox modal.
    pub lightbox: String,
    /// Modal content; clicks outside it close the lightbox.
    pub lightbox_content: String,
    /// Image showing the current photo.
    pub lightbox_image: String,
    /// Close control.
    pub lightbox_close: String,
    /// Previous control.
    pub lightbox_prev: String,
    /// Next control.
    pub lightbox_next: String,
    /// `index / total` label.
    pub lightbox_counter: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav: "#nav".into(),
            hamburger: "#hamburger".into(),
            nav_links: "#navLinks".into(),
            nav_link: ".nav__link".into(),
            sections: ".section[id]".into(),
            typewriter: "#typewriter".into(),
            reveal: ".reveal".into(),
            stat_counter: ".stat-card__number[data-count]".into(),
            stat_count_attribute: "data-count".into(),
            carousel_track: "#carouselTrack".into(),
            carousel_prev: "#carouselPrev".into(),
            carousel_next: "#carouselNext".into(),
            carousel_dots: "#carouselDots".into(),
            carousel_slide: ".carousel__slide".into(),
            active_panel: ".highlight-panel.active".into(),
            photo: ".highlight-photo".into(),
            lightbox: "#lightbox".into(),
            lightbox_content: ".lightbox__content".into(),
            lightbox_image: "#lightboxImg".into(),
            lightbox_close: "#lightboxClose".into(),
            lightbox_prev: "#lightboxPrev".into(),
            lightbox_next: "#lightboxNext".into(),
            lightbox_counter: "#lightboxCounter".into(),
        }
    }
}
