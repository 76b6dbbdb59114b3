//! Browser bridge for the machine-failure classifier page.
//!
//! ```js
//! import init, { page_init } from "./pkg/classifier_web.js";
//! await init();
//! page_init(JSON.stringify({ endpoint: "/predict" }));
//! ```

pub mod dom;
pub mod fetch;
pub mod handle;
pub mod page;
pub mod scheduler;
pub mod surface;
pub mod timer;

use classifier_engine::AppConfig;
use wasm_bindgen::prelude::*;

pub use handle::{shared_animator, ConfettiHandle, SharedAnimator};
pub use page::PageController;

/// Bind the prediction page. `config_json` may override any `AppConfig`
/// field; omitted fields keep their defaults.
#[wasm_bindgen]
pub fn page_init(config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = match config_json.as_deref() {
        Some(json) => AppConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => AppConfig::default(),
    };
    let _ = console_log::init_with_level(config.log_level());

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let view = dom::PageView::bind(document)?;
    let confetti = shared_animator(config.animator.clone(), &config.container_id, &config.canvas_id);

    PageController::new(&config, view, confetti).attach()?;
    log::info!("classifier: page initialized (endpoint {})", config.endpoint);
    Ok(())
}
