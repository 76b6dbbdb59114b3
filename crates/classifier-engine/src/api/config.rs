use serde::{Deserialize, Serialize};

use crate::prediction::{CelebrationScript, PredictionController, SUCCESS_THRESHOLD_PERCENT};

/// Tuning for the confetti animator. Every field has a default, so a
/// partial JSON object is enough to override a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Particles in a burst, and the ceiling kept while streaming (default: 100).
    pub max_count: usize,
    /// Constant fall term added to the wave (default: 4).
    pub speed: f32,
    /// Opacity of recycled particles (default: 0.8).
    pub alpha: f32,
    /// Wave accumulator step per frame, radians (default: 0.01).
    pub wave_increment: f32,
    /// Horizontal sway amplitude per frame (default: 2).
    pub sway: f32,
    /// Scale applied to the vertical step (default: 0.5).
    pub fall_scale: f32,
    /// Allowed horizontal overshoot before a particle counts as gone (default: 20).
    pub edge_margin: f32,
    /// Y coordinate recycled particles re-enter at (default: -10).
    pub respawn_y: f32,
    /// RNG seed (default: 42).
    pub seed: u64,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            max_count: 100,
            speed: 4.0,
            alpha: 0.8,
            wave_increment: 0.01,
            sway: 2.0,
            fall_scale: 0.5,
            edge_margin: 20.0,
            respawn_y: -10.0,
            seed: 42,
        }
    }
}

/// Page-level configuration, passed as JSON to the web bridge at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prediction endpoint (default: `/predict`).
    pub endpoint: String,
    /// Id of the element the confetti canvas is mounted into.
    pub container_id: String,
    /// Id given to the mounted canvas.
    pub canvas_id: String,
    /// Delay between starting and stopping the celebration (default: 600 ms).
    pub stop_delay_ms: u32,
    /// Delay between stopping and clearing the celebration (default: 1000 ms).
    pub clear_delay_ms: u32,
    /// Confidence percentage that turns the bar green and plays the
    /// celebration (default: 120, which a clamped percentage never reaches).
    pub success_threshold_percent: u32,
    /// Console log level: error, warn, info, debug or trace (default: info).
    pub log_level: String,
    pub animator: AnimatorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: "/predict".to_string(),
            container_id: "confetti-container".to_string(),
            canvas_id: "confetti-canvas".to_string(),
            stop_delay_ms: 600,
            clear_delay_ms: 1000,
            success_threshold_percent: SUCCESS_THRESHOLD_PERCENT,
            log_level: "info".to_string(),
            animator: AnimatorConfig::default(),
        }
    }
}

/// Error raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON could not be parsed into an `AppConfig`.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppConfig {
    /// Parse a configuration from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn celebration(&self) -> CelebrationScript {
        CelebrationScript::new(self.stop_delay_ms, self.clear_delay_ms)
    }

    /// A page controller wired with this configuration.
    pub fn controller(&self) -> PredictionController {
        PredictionController::new(self.celebration(), self.success_threshold_percent)
    }

    /// The configured log level, falling back to `Info` for unknown names.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
