use std::cell::RefCell;
use std::rc::Rc;

use classifier_engine::{FrameHandle, FrameScheduler};
use log::warn;
use wasm_bindgen::prelude::*;

/// The closure `requestAnimationFrame` calls. Filled in after the animator
/// exists, since the closure needs a handle back to it.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `FrameScheduler` backed by `window.requestAnimationFrame`.
pub struct RafScheduler {
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(callback: FrameCallback) -> Self {
        Self { callback }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let window = web_sys::window()?;
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            warn!("confetti: frame requested before the callback was installed");
            return None;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameHandle(id)),
            Err(err) => {
                warn!("confetti: requestAnimationFrame failed: {:?}", err);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(handle.0);
        }
    }
}
