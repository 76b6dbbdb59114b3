//! Canvas 2D implementation of the engine's surface traits.

use glam::Vec2;
use classifier_engine::{DrawingSurface, Stroke, SurfaceHost};
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

/// Full-viewport overlay that never intercepts clicks.
const CANVAS_STYLE: &str =
    "position:absolute;top:0;left:0;pointer-events:none;z-index:9999;width:100%;height:100%";

/// Mounts a fresh `<canvas>` into the element with `container_id`.
pub struct CanvasHost {
    container_id: String,
    canvas_id: String,
}

impl CanvasHost {
    pub fn new(container_id: impl Into<String>, canvas_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            canvas_id: canvas_id.into(),
        }
    }
}

/// A mounted canvas, kept sized to the window while it lives.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    on_resize: Closure<dyn FnMut()>,
}

impl SurfaceHost for CanvasHost {
    type Surface = CanvasSurface;

    fn mount(&mut self) -> Option<CanvasSurface> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let Some(container) = document.get_element_by_id(&self.container_id) else {
            debug!("confetti: no #{} on the page", self.container_id);
            return None;
        };

        let canvas: HtmlCanvasElement = document.create_element("canvas").ok()?.dyn_into().ok()?;
        canvas.set_id(&self.canvas_id);
        let _ = canvas.set_attribute("style", CANVAS_STYLE);
        container.append_child(&canvas).ok()?;

        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
        let Some(context) = context else {
            warn!("confetti: 2d context unavailable");
            canvas.remove();
            return None;
        };

        fit_to_window(&window, &canvas);
        let resized = canvas.clone();
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            if let Some(window) = web_sys::window() {
                fit_to_window(&window, &resized);
            }
        });
        let _ = window.add_event_listener_with_callback_and_bool(
            "resize",
            on_resize.as_ref().unchecked_ref(),
            true,
        );

        Some(CanvasSurface {
            canvas,
            context,
            on_resize,
        })
    }

    fn unmount(&mut self, surface: CanvasSurface) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback_and_bool(
                "resize",
                surface.on_resize.as_ref().unchecked_ref(),
                true,
            );
        }
        surface.canvas.remove();
    }
}

impl DrawingSurface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        let size = self.size();
        self.context.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn stroke(&mut self, stroke: &Stroke) {
        let ctx = &self.context;
        ctx.begin_path();
        ctx.set_line_width(stroke.width as f64);
        ctx.set_stroke_style_str(&stroke.color.to_css());
        ctx.move_to(stroke.from.x as f64, stroke.from.y as f64);
        ctx.line_to(stroke.to.x as f64, stroke.to.y as f64);
        ctx.stroke();
    }
}

fn fit_to_window(window: &Window, canvas: &HtmlCanvasElement) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}
