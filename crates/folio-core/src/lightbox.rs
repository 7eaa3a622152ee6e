//! Photo lightbox state machine.
//!
//! The lightbox is either `Closed` or `Open` on a gallery snapshot with a
//! current index. Pointer, keyboard and touch input are all reduced to the
//! same three [`Command`]s before touching the state, and every transition
//! that lands in `Open` yields a [`LightboxView`] describing what to render.

use crate::config::LightboxConfig;
use crate::error::{FolioError, Result};
use crate::gallery::{GalleryIndex, GallerySet, ImageRef};
use crate::lock::{ScrollLock, ScrollLockGuard};

/// Keys the lightbox and photo targets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Closes the lightbox.
    Escape,
    /// Previous image.
    ArrowLeft,
    /// Next image.
    ArrowRight,
    /// Activates a focused photo.
    Enter,
    /// Activates a focused photo.
    Space,
    /// Anything else; ignored.
    Other,
}

impl Key {
    /// Map a `KeyboardEvent.key` value. Legacy Edge names are accepted too.
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            _ => Key::Other,
        }
    }

    /// Whether this key activates a focused photo target.
    pub fn activates(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// Accessible label for a photo target.
pub fn activation_label(alt: &str) -> String {
    let alt = alt.trim();
    if alt.is_empty() {
        "View photo".to_string()
    } else {
        format!("View photo: {alt}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Lightbox action every input reduces to.
pub enum Command {
    /// Show the following image, wrapping to the first.
    Next,
    /// Show the preceding image, wrapping to the last.
    Previous,
    /// Close the modal.
    Close,
}

/// Raw input reaching the open lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A key pressed while the lightbox is open.
    Key(Key),
    /// The next button.
    NextControl,
    /// The previous button.
    PreviousControl,
    /// The close button.
    CloseControl,
    /// A click inside the modal. Only clicks landing on the backdrop itself close it.
    ModalClick {
        /// Whether the click missed the modal content.
        on_backdrop: bool,
    },
}

impl Input {
    /// The command this input triggers, if any.
    pub fn command(self) -> Option<Command> {
        match self {
            Input::Key(Key::Escape) | Input::CloseControl => Some(Command::Close),
            Input::Key(Key::ArrowRight) | Input::NextControl => Some(Command::Next),
            Input::Key(Key::ArrowLeft) | Input::PreviousControl => Some(Command::Previous),
            Input::ModalClick { on_backdrop: true } => Some(Command::Close),
            Input::Key(_) | Input::ModalClick { on_backdrop: false } => None,
        }
    }
}

/// Horizontal swipe detection.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold_px: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    /// Swipes must travel strictly more than `threshold_px`.
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            start_x: None,
        }
    }

    /// Record where a touch began.
    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish the gesture. Travel must strictly exceed the threshold:
    /// dragging left moves to the next image, dragging right to the previous.
    pub fn end(&mut self, x: f64) -> Option<Command> {
        let start = self.start_x.take()?;
        let travel = start - x;
        if travel > self.threshold_px {
            Some(Command::Next)
        } else if -travel > self.threshold_px {
            Some(Command::Previous)
        } else {
            None
        }
    }
}

/// What the modal should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView {
    /// Photo to show.
    pub image: ImageRef,
    /// Zero-based position in the gallery.
    pub index: usize,
    /// Gallery size.
    pub total: usize,
    /// `"index / total"`, 1-based.
    pub counter: String,
    /// Prev/next controls are hidden for single-image galleries.
    pub show_navigation: bool,
}

impl LightboxView {
    fn of(images: &GallerySet, index: usize) -> Self {
        let total = images.len();
        Self {
            image: images[index].clone(),
            index,
            total,
            counter: format!("{} / {}", index + 1, total),
            show_navigation: total > 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Whether the modal is showing, and what.
pub enum LightboxState {
    /// Nothing on screen.
    #[default]
    Closed,
    /// Showing one image of a gallery snapshot.
    Open {
        /// Gallery discovered when the modal opened.
        images: GallerySet,
        /// Zero-based position of the image on screen.
        index: usize,
    },
}

/// Result of feeding a command or input to the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Now showing a different image.
    Moved(LightboxView),
    /// The modal closed.
    Closed,
    /// Nothing changed.
    Ignored,
}

#[derive(Debug)]
/// Modal photo viewer.
pub struct Lightbox {
    state: LightboxState,
    swipe: SwipeTracker,
    scroll_lock: Option<ScrollLock>,
    guard: Option<ScrollLockGuard>,
}

impl Lightbox {
    /// A closed lightbox.
    pub fn new(config: &LightboxConfig) -> Self {
        Self {
            state: LightboxState::Closed,
            swipe: SwipeTracker::new(config.swipe_threshold_px),
            scroll_lock: None,
            guard: None,
        }
    }

    /// Hold `lock` for as long as the lightbox is open.
    pub fn with_scroll_lock(mut self, lock: ScrollLock) -> Self {
        self.scroll_lock = Some(lock);
        self
    }

    /// Current state.
    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    /// Whether the modal is showing.
    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// Zero-based index of the image on screen.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open { index, .. } => Some(index),
            LightboxState::Closed => None,
        }
    }

    /// What to render, if open.
    pub fn view(&self) -> Option<LightboxView> {
        match &self.state {
            LightboxState::Open { images, index } => Some(LightboxView::of(images, *index)),
            LightboxState::Closed => None,
        }
    }

    /// Open on `images` at `index`. An empty set or out-of-range index leaves
    /// the state untouched.
    pub fn open(&mut self, images: GallerySet, index: usize) -> Result<LightboxView> {
        if images.is_empty() {
            return Err(FolioError::EmptyGallery);
        }
        if index >= images.len() {
            return Err(FolioError::ImageNotInGallery);
        }
        let view = LightboxView::of(&images, index);
        self.state = LightboxState::Open { images, index };
        if self.guard.is_none() {
            self.guard = self.scroll_lock.as_ref().map(ScrollLock::acquire);
        }
        tracing::debug!(index, total = view.total, "lightbox opened");
        Ok(view)
    }

    /// Open on a freshly discovered gallery at the activated image.
    pub fn open_from<I: PartialEq>(
        &mut self,
        gallery: GalleryIndex<I>,
        activated: &I,
    ) -> Result<LightboxView> {
        if gallery.is_empty() {
            return Err(FolioError::EmptyGallery);
        }
        let index = gallery
            .index_of(activated)
            .ok_or(FolioError::ImageNotInGallery)?;
        self.open(gallery.into_set(), index)
    }

    /// Returns `false` if the lightbox was already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = LightboxState::Closed;
        self.swipe.start_x = None;
        self.guard = None;
        tracing::debug!("lightbox closed");
        true
    }

    /// Advance one image, wrapping. `None` while closed.
    pub fn next(&mut self) -> Option<LightboxView> {
        self.step(GallerySet::next_index)
    }

    /// Go back one image, wrapping. `None` while closed.
    pub fn previous(&mut self) -> Option<LightboxView> {
        self.step(GallerySet::previous_index)
    }

    fn step(&mut self, f: fn(&GallerySet, usize) -> Option<usize>) -> Option<LightboxView> {
        let LightboxState::Open { images, index } = &mut self.state else {
            return None;
        };
        *index = f(images, *index)?;
        Some(LightboxView::of(images, *index))
    }

    /// Run `command` against the current state.
    pub fn apply(&mut self, command: Command) -> Transition {
        let outcome = match command {
            Command::Next => self.next().map(Transition::Moved),
            Command::Previous => self.previous().map(Transition::Moved),
            Command::Close => self.close().then_some(Transition::Closed),
        };
        outcome.unwrap_or(Transition::Ignored)
    }

    /// Route pointer or keyboard input. Everything is ignored while closed.
    pub fn handle(&mut self, input: Input) -> Transition {
        match input.command() {
            Some(command) if self.is_open() => self.apply(command),
            _ => Transition::Ignored,
        }
    }

    /// Start tracking a swipe. Ignored while closed.
    pub fn touch_start(&mut self, x: f64) {
        if self.is_open() {
            self.swipe.start(x);
        }
    }

    /// Finish a swipe and navigate if it travelled far enough.
    pub fn touch_end(&mut self, x: f64) -> Transition {
        match self.swipe.end(x) {
            Some(command) if self.is_open() => self.apply(command),
            _ => Transition::Ignored,
        }
    }
}
