//! The single `POST /predict` exchange.

use classifier_engine::{PredictionError, PredictionRequest, PredictionResponse};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// Send `request` to `endpoint` and decode the JSON answer.
/// A non-2xx status is an error regardless of the body.
pub async fn request_prediction(
    endpoint: &str,
    request: &PredictionRequest,
) -> Result<PredictionResponse, PredictionError> {
    let body = serde_json::to_string(request).map_err(|e| PredictionError::Transport(e.to_string()))?;

    let headers = Headers::new().map_err(transport)?;
    headers.set("Content-Type", "application/json").map_err(transport)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));
    let http_request = Request::new_with_str_and_init(endpoint, &init).map_err(transport)?;

    let window = web_sys::window().ok_or_else(|| PredictionError::Transport("no window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&http_request))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(transport)?;

    if !response.ok() {
        return Err(PredictionError::Http(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(transport)?
        .as_string()
        .ok_or_else(|| PredictionError::Decode("response body is not text".to_string()))?;
    PredictionResponse::from_json(&text)
}

/// Turn a thrown JS value into a transport error, keeping `Error.message`.
fn transport(value: JsValue) -> PredictionError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    PredictionError::Transport(message)
}
