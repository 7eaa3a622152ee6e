//! Project carousel geometry.

use crate::config::CarouselConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which way a carousel button scrolls.
pub enum Direction {
    /// Towards the first slide.
    Previous,
    /// Towards the last slide.
    Next,
}

#[derive(Debug, Clone, PartialEq)]
/// Scroll geometry for a horizontal slide track.
pub struct Carousel {
    slide_count: usize,
    step_px: f64,
    gap_px: f64,
}

impl Carousel {
    /// Geometry for `slide_count` slides.
    pub fn new(slide_count: usize, config: &CarouselConfig) -> Self {
        Self {
            slide_count,
            step_px: config.scroll_step_px,
            gap_px: config.slide_gap_px,
        }
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Accessible label for the dot that jumps to `index`.
    pub fn dot_label(index: usize) -> String {
        format!("Go to slide {}", index + 1)
    }

    /// Signed horizontal scroll for a prev/next button.
    pub fn step(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Previous => -self.step_px,
            Direction::Next => self.step_px,
        }
    }

    /// Scroll offset that aligns a slide's left edge with the track's.
    pub fn offset_for(slide_offset_left: f64, track_offset_left: f64) -> f64 {
        slide_offset_left - track_offset_left
    }

    /// Slide whose dot should be active for the track's scroll position.
    ///
    /// `None` when there are no slides or the slide width is unknown.
    pub fn active_index(&self, scroll_left: f64, slide_width: f64) -> Option<usize> {
        let pitch = slide_width + self.gap_px;
        if self.slide_count == 0 || pitch <= 0.0 {
            return None;
        }
        let raw = (scroll_left / pitch).round().max(0.0) as usize;
        Some(raw.min(self.slide_count - 1))
    }
}
