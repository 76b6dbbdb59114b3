//! Confetti particle system: state, per-frame physics and draw pass.
//!
//! `ConfettiState` is platform-free. `Animator` owns one and decides when to
//! step it; the state itself knows nothing about surfaces or scheduling.

mod palette;
mod particle;
mod rng;

use glam::Vec2;
use log::debug;

pub use palette::{BURST_PALETTE, STREAM_PALETTE};
pub use particle::Particle;
pub use rng::Rng;

use crate::api::config::AnimatorConfig;
use crate::core::time::FrameClock;
use crate::renderer::color::Rgba;
use crate::renderer::traits::Stroke;

/// Particles plus the flags and accumulators that drive them.
pub struct ConfettiState {
    pub particles: Vec<Particle>,
    streaming: bool,
    paused: bool,
    /// Shared oscillation accumulator, radians.
    wave_angle: f32,
    clock: FrameClock,
    rng: Rng,
    config: AnimatorConfig,
}

impl ConfettiState {
    pub fn new(config: AnimatorConfig) -> Self {
        ConfettiState {
            particles: Vec::with_capacity(config.max_count),
            streaming: false,
            paused: false,
            wave_angle: 0.0,
            clock: FrameClock::new(),
            rng: Rng::new(config.seed),
            config,
        }
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    pub fn set_streaming(&mut self, streaming: bool) {
        self.streaming = streaming;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn wave_angle(&self) -> f32 {
        self.wave_angle
    }

    /// Drop every particle and start a fresh streaming burst of
    /// `max_count` particles spread over one viewport height above the top edge.
    pub fn restart(&mut self, viewport: Vec2) {
        self.particles.clear();
        for _ in 0..self.config.max_count {
            let position = Vec2::new(
                self.rng.next_f32() * viewport.x,
                self.rng.next_f32() * viewport.y - viewport.y,
            );
            let color = self.pick_color(&BURST_PALETTE, 1.0);
            let p = Particle::random(&mut self.rng, position, color);
            self.particles.push(p);
        }
        self.streaming = true;
        self.clock.reset();
        debug!("confetti: burst of {} particles", self.particles.len());
    }

    pub fn clear_particles(&mut self) {
        self.particles.clear();
    }

    /// Record frame time. Returns milliseconds since the previous frame.
    pub fn tick_clock(&mut self, now_ms: f64) -> f64 {
        self.clock.tick(now_ms)
    }

    /// Advance every particle by one frame and apply the boundary policy.
    ///
    /// A particle leaving the visible area is replaced in place just above the
    /// top edge while streaming and the collection is at or below `max_count`;
    /// otherwise it is removed.
    pub fn update(&mut self, viewport: Vec2) {
        self.wave_angle += self.config.wave_increment;

        let mut i = 0;
        while i < self.particles.len() {
            let p = &mut self.particles[i];
            p.tick(self.wave_angle, &self.config);
            if p.is_outside(viewport, self.config.edge_margin) {
                if self.streaming && self.particles.len() <= self.config.max_count {
                    let fresh = self.recycled(viewport.x);
                    self.particles[i] = fresh;
                } else {
                    self.particles.remove(i);
                    continue;
                }
            }
            i += 1;
        }
    }

    /// Strokes for the current frame, in particle order.
    pub fn strokes(&self) -> impl Iterator<Item = Stroke> + '_ {
        self.particles.iter().map(Particle::stroke)
    }

    /// Whether the frame loop should keep running.
    pub fn should_continue(&self) -> bool {
        !self.particles.is_empty() || self.streaming
    }

    fn recycled(&mut self, width: f32) -> Particle {
        let position = Vec2::new(self.rng.next_f32() * width, self.config.respawn_y);
        let color = self.pick_color(&STREAM_PALETTE, self.config.alpha);
        Particle::random(&mut self.rng, position, color)
    }

    fn pick_color(&mut self, palette: &[Rgba], alpha: f32) -> Rgba {
        self.rng
            .pick(palette)
            .copied()
            .unwrap_or(Rgba::rgb(255, 255, 255))
            .with_alpha(alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn state(max_count: usize) -> ConfettiState {
        ConfettiState::new(AnimatorConfig {
            max_count,
            ..AnimatorConfig::default()
        })
    }

    #[test]
    fn restart_fills_to_max_count_above_viewport() {
        let mut s = state(50);
        s.restart(VIEWPORT);
        assert_eq!(s.particles.len(), 50);
        assert!(s.is_streaming());
        for p in &s.particles {
            assert!(p.position.y <= 0.0 && p.position.y >= -VIEWPORT.y);
            assert!(p.position.x >= 0.0 && p.position.x < VIEWPORT.x);
            assert!(BURST_PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn restart_discards_previous_particles() {
        let mut s = state(10);
        s.restart(VIEWPORT);
        let extra = s.particles[0].clone();
        s.particles.push(extra);
        s.restart(VIEWPORT);
        assert_eq!(s.particles.len(), 10);
    }

    #[test]
    fn update_advances_wave_angle() {
        let mut s = state(1);
        s.update(VIEWPORT);
        s.update(VIEWPORT);
        assert!((s.wave_angle() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn streaming_holds_count_at_max() {
        let mut s = state(40);
        s.restart(VIEWPORT);
        for _ in 0..2000 {
            s.update(VIEWPORT);
            assert!(s.particles.len() <= 40);
        }
        assert_eq!(s.particles.len(), 40);
    }

    #[test]
    fn streaming_recycles_at_top_edge_with_stream_palette() {
        let mut s = state(1);
        s.restart(VIEWPORT);
        s.particles[0].position = Vec2::new(400.0, VIEWPORT.y + 50.0);
        s.update(VIEWPORT);
        assert_eq!(s.particles.len(), 1);
        let p = &s.particles[0];
        assert_eq!(p.position.y, -10.0);
        let alpha = s.config().alpha;
        assert!(STREAM_PALETTE.iter().any(|c| c.with_alpha(alpha) == p.color));
    }

    #[test]
    fn not_streaming_only_removes() {
        let mut s = state(30);
        s.restart(VIEWPORT);
        s.set_streaming(false);
        let mut previous = s.particles.len();
        let mut frames = 0;
        while s.should_continue() {
            s.update(VIEWPORT);
            assert!(s.particles.len() <= previous);
            previous = s.particles.len();
            frames += 1;
            assert!(frames < 10_000, "burst never drained");
        }
        assert!(s.particles.is_empty());
    }

    #[test]
    fn removal_does_not_skip_next_particle() {
        let mut s = state(3);
        s.restart(VIEWPORT);
        s.set_streaming(false);
        // Two adjacent particles already past the bottom edge
        s.particles[0].position = Vec2::new(100.0, VIEWPORT.y + 100.0);
        s.particles[1].position = Vec2::new(100.0, VIEWPORT.y + 100.0);
        s.particles[2].position = Vec2::new(100.0, 100.0);
        s.update(VIEWPORT);
        assert_eq!(s.particles.len(), 1);
        assert!(s.particles[0].position.y < VIEWPORT.y);
    }

    #[test]
    fn over_capacity_removes_even_while_streaming() {
        let mut s = state(2);
        s.restart(VIEWPORT);
        let extra = s.particles[0].clone();
        s.particles.push(extra);
        for p in &mut s.particles {
            p.position.y = VIEWPORT.y + 100.0;
        }
        s.update(VIEWPORT);
        // First exit removes (3 > 2), the next two are recycled
        assert_eq!(s.particles.len(), 2);
    }

    #[test]
    fn strokes_follow_particles() {
        let mut s = state(5);
        s.restart(VIEWPORT);
        let strokes: Vec<Stroke> = s.strokes().collect();
        assert_eq!(strokes.len(), 5);
        assert_eq!(strokes[0], s.particles[0].stroke());
    }

    #[test]
    fn should_continue_rules() {
        let mut s = state(1);
        assert!(!s.should_continue());
        s.set_streaming(true);
        assert!(s.should_continue());
        s.set_streaming(false);
        s.restart(VIEWPORT);
        s.set_streaming(false);
        assert!(s.should_continue());
        s.clear_particles();
        assert!(!s.should_continue());
    }
}
