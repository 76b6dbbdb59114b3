use log::{debug, trace};

use crate::api::config::AnimatorConfig;
use crate::core::scheduler::{FrameHandle, FrameScheduler};
use crate::renderer::traits::{DrawingSurface, SurfaceHost};
use crate::systems::confetti::ConfettiState;

/// A lifecycle operation, so scripted sequences can be stored and replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorCommand {
    Start,
    Stop,
    Clear,
    Pause,
    Resume,
    Toggle,
    TogglePause,
}

/// Confetti animator: particle state, a mounted drawing surface and the
/// frame loop that steps one and paints the other.
///
/// Each instance is independent; callers own it (usually behind
/// `Rc<RefCell<_>>` in the browser) and the host's frame callback calls
/// `frame` for every request made through the scheduler.
///
/// No operation fails. A missing host container or a zero particle budget
/// turns `start` into a no-op.
pub struct Animator<H: SurfaceHost, S: FrameScheduler> {
    state: ConfettiState,
    host: H,
    surface: Option<H::Surface>,
    scheduler: S,
    pending: Option<FrameHandle>,
}

impl<H: SurfaceHost, S: FrameScheduler> Animator<H, S> {
    pub fn new(config: AnimatorConfig, host: H, scheduler: S) -> Self {
        Self {
            state: ConfettiState::new(config),
            host,
            surface: None,
            scheduler,
            pending: None,
        }
    }

    /// Mount the surface (reusing one already mounted), replace the particles
    /// with a fresh burst and start streaming.
    pub fn start(&mut self) {
        if self.state.config().max_count == 0 {
            debug!("confetti: max_count is zero, start ignored");
            return;
        }
        if self.surface.is_none() {
            match self.host.mount() {
                Some(surface) => self.surface = Some(surface),
                None => {
                    debug!("confetti: host container unavailable, start ignored");
                    return;
                }
            }
        }
        let Some(surface) = self.surface.as_ref() else {
            return;
        };
        let viewport = surface.size();
        self.state.restart(viewport);
        self.cancel_pending();
        self.schedule();
    }

    /// Stop streaming, cancel the pending frame and unmount the surface.
    /// Particles are kept until `clear` or the next `start`.
    pub fn stop(&mut self) {
        self.state.set_streaming(false);
        self.cancel_pending();
        if let Some(surface) = self.surface.take() {
            self.host.unmount(surface);
            debug!("confetti: stopped with {} particles left", self.state.particles.len());
        }
    }

    /// `stop` plus dropping every particle.
    pub fn clear(&mut self) {
        self.stop();
        self.state.clear_particles();
    }

    /// Freeze the animation on its current frame.
    pub fn pause(&mut self) {
        self.state.set_paused(true);
        self.cancel_pending();
    }

    /// Re-enter the frame loop from the current particle state.
    pub fn resume(&mut self) {
        self.state.set_paused(false);
        if self.surface.is_some() && self.pending.is_none() && self.state.should_continue() {
            self.schedule();
        }
    }

    pub fn toggle(&mut self) {
        if self.state.is_streaming() {
            self.stop();
        } else {
            self.start();
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.state.is_paused() {
            self.resume();
        } else {
            self.pause();
        }
    }

    pub fn apply(&mut self, command: AnimatorCommand) {
        match command {
            AnimatorCommand::Start => self.start(),
            AnimatorCommand::Stop => self.stop(),
            AnimatorCommand::Clear => self.clear(),
            AnimatorCommand::Pause => self.pause(),
            AnimatorCommand::Resume => self.resume(),
            AnimatorCommand::Toggle => self.toggle(),
            AnimatorCommand::TogglePause => self.toggle_pause(),
        }
    }

    /// Frame callback body: update, redraw, reschedule.
    ///
    /// Does nothing while paused or when no surface is mounted, so a frame
    /// that slips through after `stop` never draws.
    pub fn frame(&mut self, now_ms: f64) {
        self.pending = None;
        if self.state.is_paused() {
            return;
        }
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        let elapsed = self.state.tick_clock(now_ms);
        trace!("confetti: frame after {:.1} ms, {} particles", elapsed, self.state.particles.len());

        let viewport = surface.size();
        self.state.update(viewport);

        surface.clear();
        for stroke in self.state.strokes() {
            surface.stroke(&stroke);
        }

        if self.state.should_continue() {
            self.schedule();
        } else {
            debug!("confetti: burst finished, frame loop ended");
        }
    }

    pub fn is_streaming(&self) -> bool {
        self.state.is_streaming()
    }

    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// Whether a frame callback is currently scheduled.
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    pub fn particle_count(&self) -> usize {
        self.state.particles.len()
    }

    pub fn state(&self) -> &ConfettiState {
        &self.state
    }

    pub fn surface(&self) -> Option<&H::Surface> {
        self.surface.as_ref()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn schedule(&mut self) {
        self.pending = self.scheduler.request_frame();
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}
