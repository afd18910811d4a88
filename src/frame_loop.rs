// Self-rescheduling animation loop. Each frame runs the tick and then asks the
// scheduler for the next frame, so frames never overlap and at most one is
// pending at a time. The loop keeps itself alive through the pending
// callback; dropping the FrameLoop handle does not stop it, cancel() does.

use crate::utils;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub trait FrameScheduler {
    type Handle;

    // Invoke `callback` once, on the next display frame
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<Self::Handle, JsValue>;

    fn cancel_frame(&self, handle: Self::Handle) -> Result<(), JsValue>;
}

// window.requestAnimationFrame
pub struct AnimationFrameScheduler {
    window: web_sys::Window,
}

impl AnimationFrameScheduler {
    pub fn new(window: web_sys::Window) -> Self {
        AnimationFrameScheduler { window }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    type Handle = i32;

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<i32, JsValue> {
        // The closure frees itself after its single call. A cancelled frame
        // never calls it, so its box stays behind.
        let callback = Closure::once_into_js(callback);
        self.window
            .request_animation_frame(callback.unchecked_ref())
    }

    fn cancel_frame(&self, handle: i32) -> Result<(), JsValue> {
        self.window.cancel_animation_frame(handle)
    }
}

type Tick = Box<dyn FnMut() -> Result<(), JsValue>>;

struct LoopState<F: FrameScheduler> {
    scheduler: F,
    tick: RefCell<Tick>,
    pending: RefCell<Option<F::Handle>>,
    cancelled: Cell<bool>,
    frames: Cell<u64>,
}

pub struct FrameLoop<F: FrameScheduler> {
    state: Rc<LoopState<F>>,
}

impl<F: FrameScheduler + 'static> FrameLoop<F> {
    // Runs the first frame right away, then keeps requesting one frame at a
    // time from the scheduler
    pub fn start<T>(scheduler: F, tick: T) -> Result<Self, JsValue>
    where
        T: FnMut() -> Result<(), JsValue> + 'static,
    {
        let state = Rc::new(LoopState {
            scheduler,
            tick: RefCell::new(Box::new(tick)),
            pending: RefCell::new(None),
            cancelled: Cell::new(false),
            frames: Cell::new(0),
        });

        (&mut *state.tick.borrow_mut())()?;
        state.frames.set(1);
        schedule_next(&state)?;

        Ok(FrameLoop { state })
    }

    // Frames run so far, including the first synchronous one
    pub fn frames(&self) -> u64 {
        self.state.frames.get()
    }

    pub fn is_running(&self) -> bool {
        !self.state.cancelled.get()
    }

    // Stops the loop and drops the tick, and with it whatever the tick
    // captured. A scheduler may still hold on to the cancelled callback
    // (requestAnimationFrame never frees it), but that only keeps the small
    // loop state alive, not the tick.
    pub fn cancel(&self) -> Result<(), JsValue> {
        self.state.cancelled.set(true);
        if let Ok(mut tick) = self.state.tick.try_borrow_mut() {
            *tick = Box::new(|| Ok(()));
        }
        let pending = self.state.pending.borrow_mut().take();
        match pending {
            Some(handle) => self.state.scheduler.cancel_frame(handle),
            None => Ok(()),
        }
    }
}

fn schedule_next<F: FrameScheduler + 'static>(state: &Rc<LoopState<F>>) -> Result<(), JsValue> {
    let next = Rc::clone(state);
    let handle = state
        .scheduler
        .request_frame(Box::new(move || run_frame(&next)))?;
    *state.pending.borrow_mut() = Some(handle);
    Ok(())
}

fn run_frame<F: FrameScheduler + 'static>(state: &Rc<LoopState<F>>) {
    state.pending.borrow_mut().take();
    if state.cancelled.get() {
        return;
    }

    // Nothing to hand a frame error back to, so report it and keep going
    if let Err(err) = (&mut *state.tick.borrow_mut())() {
        utils::log_error("particle frame failed", &err);
    }
    state.frames.set(state.frames.get() + 1);

    if let Err(err) = schedule_next(state) {
        utils::log_error("failed to request next animation frame", &err);
    }
}

#[cfg(test)]
pub mod manual {
    use super::FrameScheduler;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;
    use wasm_bindgen::JsValue;

    // Scheduler driven by hand from tests: frames only run on tick()
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queue: Rc<RefCell<VecDeque<(usize, Box<dyn FnOnce()>)>>>,
        next_id: Rc<Cell<usize>>,
        max_pending: Rc<Cell<usize>>,
    }

    impl ManualScheduler {
        pub fn pending(&self) -> usize {
            self.queue.borrow().len()
        }

        pub fn max_pending(&self) -> usize {
            self.max_pending.get()
        }

        // Runs the oldest pending frame, false if nothing was scheduled
        pub fn tick(&self) -> bool {
            let next = self.queue.borrow_mut().pop_front();
            match next {
                Some((_, callback)) => {
                    callback();
                    true
                }
                None => false,
            }
        }
    }

    impl FrameScheduler for ManualScheduler {
        type Handle = usize;

        fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<usize, JsValue> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            let mut queue = self.queue.borrow_mut();
            queue.push_back((id, callback));
            self.max_pending.set(self.max_pending.get().max(queue.len()));
            Ok(id)
        }

        fn cancel_frame(&self, handle: usize) -> Result<(), JsValue> {
            self.queue.borrow_mut().retain(|(id, _)| *id != handle);
            Ok(())
        }
    }
}
