//! Animated statistic counters.
//!
//! A counter counts up from zero to its declared target over a fixed
//! duration with a cubic ease-out. Targets with a fractional part render with
//! one decimal digit for the whole animation; integral targets render as
//! rounded integers.

use crate::error::{FolioError, Result};
use crate::scheduler::{FrameTask, Tick};

/// How intermediate and final values are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Rounded to a whole number.
    Integer,
    /// Exactly one fractional digit.
    Decimal,
}

/// Cubic ease-out over `progress` in `[0, 1]` (clamped).
#[inline]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Parsed counter target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterSpec {
    target: f64,
    mode: DisplayMode,
}

impl CounterSpec {
    /// `target` must be finite.
    pub fn new(target: f64) -> Result<Self> {
        if !target.is_finite() {
            return Err(FolioError::InvalidCounterTarget {
                value: target.to_string(),
            });
        }
        let mode = if target.fract() != 0.0 {
            DisplayMode::Decimal
        } else {
            DisplayMode::Integer
        };
        Ok(Self { target, mode })
    }

    /// Parse a declared target the way the browser's `parseFloat` does:
    /// leading whitespace is skipped and the longest numeric prefix wins
    /// (`"98%"` is 98).
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || FolioError::InvalidCounterTarget {
            value: raw.to_string(),
        };
        let s = raw.trim_start();
        let numeric_len = s
            .chars()
            .take_while(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
            .count();
        let target = (1..=numeric_len)
            .rev()
            .find_map(|end| s[..end].parse::<f64>().ok())
            .ok_or_else(invalid)?;
        Self::new(target).map_err(|_| invalid())
    }

    /// The number counted up to.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// How values are rendered.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Displayed value at `progress` through the animation.
    pub fn value_at(&self, progress: f64) -> f64 {
        self.target * ease_out_cubic(progress)
    }

    /// Render `value` in this counter's display mode.
    pub fn render(&self, value: f64) -> String {
        match self.mode {
            // `+ 0.0` folds negative zero so the first frame of a negative
            // target does not read "-0.0".
            DisplayMode::Decimal => format!("{:.1}", value + 0.0),
            DisplayMode::Integer => (value.round() as i64).to_string(),
        }
    }
}

/// One counter's count-up, driven one animation frame at a time.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    spec: CounterSpec,
    duration_ms: f64,
    start_ms: Option<f64>,
    text: String,
    finished: bool,
}

impl CounterAnimation {
    /// The animation clock starts at the first tick unless [`Self::started_at`] is used.
    pub fn new(spec: CounterSpec, duration_ms: f64) -> Self {
        Self {
            spec,
            duration_ms,
            start_ms: None,
            text: spec.render(0.0),
            finished: false,
        }
    }

    /// Pin the animation start instead of taking it from the first tick.
    pub fn started_at(mut self, start_ms: f64) -> Self {
        self.start_ms = Some(start_ms);
        self
    }

    /// The parsed target.
    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    /// Text for the most recent frame.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the final value has been shown.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn progress_at(&self, now_ms: f64, start_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }
}

impl FrameTask for CounterAnimation {
    fn tick(&mut self, now_ms: f64) -> Tick {
        if self.finished {
            return Tick::Done;
        }
        let start = *self.start_ms.get_or_insert(now_ms);
        let progress = self.progress_at(now_ms, start);
        self.text = self.spec.render(self.spec.value_at(progress));
        if progress < 1.0 {
            Tick::Continue
        } else {
            self.finished = true;
            Tick::Done
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::run_frames;
    use approx::assert_relative_eq;

    fn frames(step: f64) -> impl Iterator<Item = f64> {
        (0..).map(move |i| i as f64 * step)
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.5), 1.0);
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_relative_eq!(ease_out_cubic(0.5), 0.875);
    }

    #[test]
    fn completion_hits_target_exactly() {
        for target in [0.0, 1.0, 4.5, 99.9, 120.0, 12_345.0, -3.0] {
            let spec = CounterSpec::new(target).expect("finite");
            assert_eq!(spec.value_at(1.0), target);
        }
    }

    #[test]
    fn decimal_target_ends_at_one_digit() {
        let mut anim = CounterAnimation::new(CounterSpec::parse("4.5").unwrap(), 1500.0);
        assert_eq!(anim.spec().mode(), DisplayMode::Decimal);
        let mut texts = Vec::new();
        let mut ticks = 0;
        for now in frames(16.0) {
            ticks += 1;
            let done = anim.tick(now).is_done();
            texts.push(anim.text().to_string());
            if done {
                break;
            }
        }
        assert_eq!(anim.text(), "4.5");
        assert!(texts.iter().all(|t| t.split('.').nth(1).map(str::len) == Some(1)));
        assert!(ticks > 90);
        assert!(anim.is_finished());
    }

    #[test]
    fn integer_target_ends_without_decimal() {
        let mut anim = CounterAnimation::new(CounterSpec::parse("120").unwrap(), 1500.0);
        run_frames(&mut anim, frames(16.0));
        assert_eq!(anim.text(), "120");
        assert_eq!(anim.tick(10_000.0), Tick::Done);
    }

    #[test]
    fn midway_value_follows_curve() {
        let spec = CounterSpec::new(200.0).unwrap();
        let mut anim = CounterAnimation::new(spec, 1000.0).started_at(0.0);
        assert_eq!(anim.tick(500.0), Tick::Continue);
        assert_eq!(anim.text(), "175");
    }

    #[test]
    fn frame_before_start_clamps_to_zero() {
        let mut anim =
            CounterAnimation::new(CounterSpec::new(4.5).unwrap(), 1500.0).started_at(100.0);
        assert_eq!(anim.tick(90.0), Tick::Continue);
        assert_eq!(anim.text(), "0.0");
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut anim = CounterAnimation::new(CounterSpec::new(7.0).unwrap(), 0.0);
        assert_eq!(anim.tick(5.0), Tick::Done);
        assert_eq!(anim.text(), "7");
    }

    #[test]
    fn parse_is_lenient_like_the_browser() {
        assert_eq!(CounterSpec::parse(" 98%").unwrap().target(), 98.0);
        assert_eq!(CounterSpec::parse("4.5+").unwrap().target(), 4.5);
        assert_eq!(CounterSpec::parse("1e3").unwrap().target(), 1000.0);
        assert_eq!(CounterSpec::parse("10e").unwrap().target(), 10.0);
        assert_eq!(CounterSpec::parse("2.0").unwrap().mode(), DisplayMode::Integer);
    }

    #[test]
    fn parse_rejects_non_numbers() {
        for raw in ["", "abc", "-", "Infinity", "NaN"] {
            assert_eq!(
                CounterSpec::parse(raw),
                Err(FolioError::InvalidCounterTarget {
                    value: raw.to_string()
                })
            );
        }
    }

    #[test]
    fn negative_zero_renders_plainly() {
        let spec = CounterSpec::new(-2.5).unwrap();
        assert_eq!(spec.render(spec.value_at(0.0)), "0.0");
        let spec = CounterSpec::new(-2.0).unwrap();
        assert_eq!(spec.render(spec.value_at(0.0)), "0");
    }
}
