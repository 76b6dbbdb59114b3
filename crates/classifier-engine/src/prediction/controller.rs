use log::{debug, info, warn};

use super::celebration::CelebrationScript;
use super::error::PredictionError;
use super::request::{PredictionRequest, SensorForm};
use super::response::PredictionResponse;
use super::view::{ResultView, SUCCESS_THRESHOLD_PERCENT};

/// Which part of the page is visible.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    /// Nothing submitted yet, or an error was dismissed.
    Placeholder,
    /// A request is in flight.
    Loading,
    Results(ResultView),
    /// A dismissible error message.
    Error(String),
}

/// State machine behind the prediction form.
///
/// The caller reads the form, sends the request returned by `submit`, and
/// feeds the outcome back through `receive`. There is no request
/// generation: whichever response arrives last is shown.
#[derive(Debug, Clone)]
pub struct PredictionController {
    state: PageState,
    celebration: CelebrationScript,
    /// Confidence percentage that triggers the celebration.
    success_threshold: u32,
}

impl PredictionController {
    pub fn new(celebration: CelebrationScript, success_threshold: u32) -> Self {
        Self {
            state: PageState::Placeholder,
            celebration,
            success_threshold,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Validate the form. Returns the request to send and enters `Loading`,
    /// or enters `Error` and returns `None`.
    pub fn submit(&mut self, form: &SensorForm) -> Option<PredictionRequest> {
        match form.validate() {
            Ok(request) => {
                if request.known_machine_type().is_none() {
                    warn!("predict: unknown machine type {:?}, sending as-is", request.machine_type);
                }
                debug!("predict: submitting {:?}", request);
                self.state = PageState::Loading;
                Some(request)
            }
            Err(err) => {
                self.fail(err);
                None
            }
        }
    }

    /// Apply the service outcome. Returns the celebration to play, if the
    /// result qualifies.
    pub fn receive(
        &mut self,
        outcome: Result<PredictionResponse, PredictionError>,
    ) -> Option<CelebrationScript> {
        match outcome.and_then(PredictionResponse::into_outcome) {
            Ok(prediction) => {
                info!(
                    "predict: {} ({:.1}%)",
                    prediction.label,
                    prediction.confidence * 100.0
                );
                let view = ResultView::from_prediction(&prediction, self.success_threshold);
                let celebrate = view.celebrate;
                self.state = PageState::Results(view);
                celebrate.then_some(self.celebration)
            }
            Err(err) => {
                self.fail(err);
                None
            }
        }
    }

    /// Hide the error and show the placeholder again.
    pub fn dismiss_error(&mut self) {
        if matches!(self.state, PageState::Error(_)) {
            self.state = PageState::Placeholder;
        }
    }

    fn fail(&mut self, err: PredictionError) {
        warn!("predict: {}", err);
        self.state = PageState::Error(err.to_string());
    }
}

impl Default for PredictionController {
    fn default() -> Self {
        Self::new(CelebrationScript::default(), SUCCESS_THRESHOLD_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::view::BarColor;

    fn form() -> SensorForm {
        SensorForm {
            air_temp: "300.2".into(),
            process_temp: "310.1".into(),
            rot_speed: "1400".into(),
            torque: "50.5".into(),
            tool_wear: "120".into(),
            machine_type: "L".into(),
        }
    }

    fn ok_response(confidence: f64) -> Result<PredictionResponse, PredictionError> {
        Ok(PredictionResponse {
            prediction: Some("normal".into()),
            confidence: Some(confidence),
            ..PredictionResponse::default()
        })
    }

    #[test]
    fn starts_on_placeholder() {
        let c = PredictionController::default();
        assert_eq!(c.state(), &PageState::Placeholder);
    }

    #[test]
    fn valid_submit_enters_loading() {
        let mut c = PredictionController::default();
        let request = c.submit(&form()).unwrap();
        assert_eq!(request.rot_speed, 1400.0);
        assert_eq!(c.state(), &PageState::Loading);
    }

    #[test]
    fn invalid_submit_never_produces_request() {
        let mut c = PredictionController::default();
        let bad = SensorForm {
            air_temp: "abc".into(),
            ..form()
        };
        assert!(c.submit(&bad).is_none());
        assert_eq!(
            c.state(),
            &PageState::Error("Please enter a valid numerical value for air temp".into())
        );
    }

    #[test]
    fn success_shows_results_without_celebration() {
        let mut c = PredictionController::default();
        c.submit(&form());
        let celebration = c.receive(ok_response(0.95));
        assert!(celebration.is_none());
        match c.state() {
            PageState::Results(view) => {
                assert_eq!(view.label, "Normal");
                assert_eq!(view.bar_width(), "95%");
                assert_eq!(view.bar_color, BarColor::Primary);
            }
            other => panic!("expected results, got {:?}", other),
        }
    }

    #[test]
    fn lowered_threshold_returns_celebration() {
        let script = CelebrationScript::new(100, 200);
        let mut c = PredictionController::new(script, 90);
        c.submit(&form());
        assert_eq!(c.receive(ok_response(0.95)), Some(script));
        match c.state() {
            PageState::Results(view) => assert_eq!(view.bar_color, BarColor::Success),
            other => panic!("expected results, got {:?}", other),
        }
        assert!(c.receive(ok_response(0.85)).is_none());
    }

    #[test]
    fn service_error_hides_results() {
        let mut c = PredictionController::default();
        c.submit(&form());
        let outcome = Ok(PredictionResponse {
            error: Some("model unavailable".into()),
            ..PredictionResponse::default()
        });
        assert!(c.receive(outcome).is_none());
        assert_eq!(c.state(), &PageState::Error("model unavailable".into()));
    }

    #[test]
    fn http_error_reports_status() {
        let mut c = PredictionController::default();
        c.submit(&form());
        c.receive(Err(PredictionError::Http(500)));
        assert_eq!(c.state(), &PageState::Error("Error: HTTP error! Status: 500".into()));
    }

    #[test]
    fn dismiss_returns_to_placeholder() {
        let mut c = PredictionController::default();
        c.receive(Err(PredictionError::Transport("Failed to fetch".into())));
        c.dismiss_error();
        assert_eq!(c.state(), &PageState::Placeholder);
    }

    #[test]
    fn dismiss_leaves_results_alone() {
        let mut c = PredictionController::default();
        c.receive(ok_response(0.7));
        c.dismiss_error();
        assert!(matches!(c.state(), PageState::Results(_)));
    }

    #[test]
    fn late_response_overwrites_newer_state() {
        let mut c = PredictionController::default();
        c.submit(&form());
        c.receive(ok_response(0.7));
        c.submit(&form());
        c.receive(Err(PredictionError::Http(502)));
        // Responses are applied in arrival order
        c.receive(ok_response(0.3));
        match c.state() {
            PageState::Results(view) => assert_eq!(view.confidence_percent, 30),
            other => panic!("expected results, got {:?}", other),
        }
    }
}
