//! Prediction page logic: form validation, the `/predict` exchange types,
//! the result view model and the page state machine.
//!
//! Nothing here touches the DOM or the network; the web bridge reads the form,
//! performs the request and renders whatever `PageState` says.

mod celebration;
mod controller;
mod error;
mod request;
mod response;
mod view;

pub use celebration::CelebrationScript;
pub use controller::{PageState, PredictionController};
pub use error::PredictionError;
pub use request::{MachineType, PredictionRequest, SensorField, SensorForm};
pub use response::{Prediction, PredictionResponse};
pub use view::{capitalize_first, BarColor, CategoryBar, ResultView, SUCCESS_THRESHOLD_PERCENT};
