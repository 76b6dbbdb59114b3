use log::warn;
use wasm_bindgen::prelude::*;

/// Run `task` once after `delay_ms` via `window.setTimeout`.
/// The callback frees itself after running.
pub fn set_timeout(delay_ms: u32, task: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(task);
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    if let Err(err) =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
    {
        warn!("timer: setTimeout failed: {:?}", err);
    }
}
