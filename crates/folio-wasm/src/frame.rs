//! Drives [`FrameTask`]s on `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{FrameTask, Tick};
use gloo::render::{request_animation_frame, AnimationFrame};

struct FrameLoop<T> {
    task: T,
    render: Box<dyn FnMut(&T)>,
    frame: Option<AnimationFrame>,
}

/// Tick `task` once per animation frame, calling `render` after every tick,
/// until the task reports [`Tick::Done`].
///
/// The loop keeps itself alive through its pending frame and frees itself
/// after the last tick.
pub(crate) fn spawn<T, R>(task: T, render: R)
where
    T: FrameTask + 'static,
    R: FnMut(&T) + 'static,
{
    let state = Rc::new(RefCell::new(FrameLoop {
        task,
        render: Box::new(render),
        frame: None,
    }));
    schedule(&state);
}

fn schedule<T: FrameTask + 'static>(state: &Rc<RefCell<FrameLoop<T>>>) {
    let next = Rc::clone(state);
    let frame = request_animation_frame(move |now| {
        let tick = {
            let mut guard = next.borrow_mut();
            let frame_loop = &mut *guard;
            let tick = frame_loop.task.tick(now);
            (frame_loop.render)(&frame_loop.task);
            tick
        };
        match tick {
            Tick::Continue => schedule(&next),
            Tick::Done => {
                next.borrow_mut().frame.take();
            }
        }
    });
    state.borrow_mut().frame = Some(frame);
}
