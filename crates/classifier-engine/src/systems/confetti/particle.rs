//! A single confetti piece.

use std::f32::consts::PI;

use glam::Vec2;

use super::rng::Rng;
use crate::api::config::AnimatorConfig;
use crate::renderer::color::Rgba;
use crate::renderer::traits::Stroke;

/// One confetti piece: a short tilted stroke that sways while falling.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Stroke width, fixed at creation.
    pub diameter: f32,
    /// Constant draw offset in [-10, 0).
    pub tilt: f32,
    /// Phase of the horizontal sway.
    pub tilt_angle: f32,
    pub tilt_angle_increment: f32,
    pub color: Rgba,
}

impl Particle {
    /// A particle at `position` with randomized shape and sway.
    pub fn random(rng: &mut Rng, position: Vec2, color: Rgba) -> Self {
        Particle {
            position,
            diameter: rng.range(5.0, 15.0),
            tilt: rng.range(-10.0, 0.0),
            tilt_angle_increment: rng.range(0.05, 0.12),
            tilt_angle: rng.range(0.0, PI),
            color,
        }
    }

    /// Advance one frame. `wave_angle` is the shared oscillation accumulator.
    pub fn tick(&mut self, wave_angle: f32, config: &AnimatorConfig) {
        self.position.x += self.tilt_angle.sin() * config.sway;
        self.position.y += ((wave_angle + self.diameter).cos() + config.speed) * config.fall_scale;
        self.tilt_angle += self.tilt_angle_increment;
    }

    /// True once the particle has left the visible area: past either side
    /// by more than `margin`, or below the bottom edge.
    pub fn is_outside(&self, viewport: Vec2, margin: f32) -> bool {
        self.position.x > viewport.x + margin
            || self.position.x < -margin
            || self.position.y > viewport.y
    }

    /// The diagonal segment drawn for this particle.
    pub fn stroke(&self) -> Stroke {
        let anchor = self.position + Vec2::splat(self.tilt);
        let half = self.diameter / 2.0;
        Stroke {
            from: Vec2::new(anchor.x + half, anchor.y),
            to: Vec2::new(anchor.x, anchor.y + self.tilt + half),
            width: self.diameter,
            color: self.color,
        }
    }
}
