//! Cooperative per-frame tasks.
//!
//! A [`FrameTask`] is ticked once per animation frame with the frame
//! timestamp and reports whether it wants another frame. The platform driver
//! reschedules only on [`Tick::Continue`]; nothing ever blocks.

/// Outcome of a single frame tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Schedule another frame.
    Continue,
    /// Stop; the task is complete.
    Done,
}

impl Tick {
    /// Whether this is [`Tick::Done`].
    pub fn is_done(self) -> bool {
        self == Tick::Done
    }
}

/// Work performed once per animation frame until it reports completion.
pub trait FrameTask {
    /// Advance to the frame at `now_ms` (monotonic milliseconds).
    fn tick(&mut self, now_ms: f64) -> Tick;
}

impl<F> FrameTask for F
where
    F: FnMut(f64) -> Tick,
{
    fn tick(&mut self, now_ms: f64) -> Tick {
        self(now_ms)
    }
}

/// Drive `task` over a sequence of frame timestamps, stopping at the first
/// [`Tick::Done`]. Returns the number of frames consumed.
///
/// The browser binding uses `requestAnimationFrame` instead; this exists for
/// deterministic driving off a recorded clock.
pub fn run_frames<T, I>(task: &mut T, frames: I) -> usize
where
    T: FrameTask + ?Sized,
    I: IntoIterator<Item = f64>,
{
    let mut count = 0;
    for now in frames {
        count += 1;
        if task.tick(now).is_done() {
            break;
        }
    }
    count
}
