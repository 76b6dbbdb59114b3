pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod prediction;

// Re-export key types at crate root for convenience
pub use api::animator::{Animator, AnimatorCommand};
pub use api::config::{AnimatorConfig, AppConfig, ConfigError};
pub use core::scheduler::{FrameHandle, FrameScheduler, QueuedScheduler};
pub use core::time::FrameClock;
pub use renderer::color::Rgba;
pub use renderer::traits::{DrawingSurface, Stroke, SurfaceHost};
pub use renderer::recording::{RecordingHost, RecordingSurface};
pub use systems::confetti::{ConfettiState, Particle, Rng, BURST_PALETTE, STREAM_PALETTE};
pub use prediction::{
    CategoryBar, BarColor, CelebrationScript, MachineType, PageState, Prediction,
    PredictionController, PredictionError, PredictionRequest, PredictionResponse,
    ResultView, SensorField, SensorForm,
};
