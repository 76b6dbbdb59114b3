use std::cell::RefCell;
use std::rc::Rc;

use classifier_engine::{Animator, AnimatorCommand, AnimatorConfig};
use wasm_bindgen::prelude::*;

use crate::scheduler::{FrameCallback, RafScheduler};
use crate::surface::CanvasHost;

pub type WebAnimator = Animator<CanvasHost, RafScheduler>;

/// An animator shared between its owner and its own frame callback.
pub type SharedAnimator = Rc<RefCell<WebAnimator>>;

/// Build an animator drawing into `#container_id` and driven by
/// `requestAnimationFrame`.
pub fn shared_animator(config: AnimatorConfig, container_id: &str, canvas_id: &str) -> SharedAnimator {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let animator = Rc::new(RefCell::new(Animator::new(
        config,
        CanvasHost::new(container_id, canvas_id),
        RafScheduler::new(Rc::clone(&callback)),
    )));

    // Weak, so dropping the last owner frees the animator and its closure
    let weak = Rc::downgrade(&animator);
    *callback.borrow_mut() = Some(Closure::new(move |now: f64| {
        if let Some(animator) = weak.upgrade() {
            animator.borrow_mut().frame(now);
        }
    }));
    animator
}

/// Confetti animator exported to JavaScript.
///
/// ```js
/// const confetti = new ConfettiHandle("confetti-container");
/// confetti.start();
/// setTimeout(() => confetti.stop(), 600);
/// ```
#[wasm_bindgen]
pub struct ConfettiHandle {
    inner: SharedAnimator,
}

impl ConfettiHandle {
    pub fn from_shared(inner: SharedAnimator) -> Self {
        Self { inner }
    }

    fn apply(&self, command: AnimatorCommand) {
        self.inner.borrow_mut().apply(command);
    }
}

#[wasm_bindgen]
impl ConfettiHandle {
    /// Create an animator with default tuning, mounting into `container_id`.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str) -> ConfettiHandle {
        Self::from_shared(shared_animator(AnimatorConfig::default(), container_id, "confetti-canvas"))
    }

    pub fn start(&self) {
        self.apply(AnimatorCommand::Start);
    }

    pub fn stop(&self) {
        self.apply(AnimatorCommand::Stop);
    }

    pub fn clear(&self) {
        self.apply(AnimatorCommand::Clear);
    }

    pub fn pause(&self) {
        self.apply(AnimatorCommand::Pause);
    }

    pub fn resume(&self) {
        self.apply(AnimatorCommand::Resume);
    }

    pub fn toggle(&self) {
        self.apply(AnimatorCommand::Toggle);
    }

    pub fn toggle_pause(&self) {
        self.apply(AnimatorCommand::TogglePause);
    }

    pub fn is_streaming(&self) -> bool {
        self.inner.borrow().is_streaming()
    }

    pub fn is_paused(&self) -> bool {
        self.inner.borrow().is_paused()
    }

    pub fn particle_count(&self) -> u32 {
        self.inner.borrow().particle_count() as u32
    }
}
