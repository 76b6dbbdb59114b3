//! Wires the prediction form, the result view and the confetti together.

use std::cell::RefCell;
use std::rc::Rc;

use classifier_engine::{AppConfig, CelebrationScript, PredictionController};
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};

use crate::dom::PageView;
use crate::fetch::request_prediction;
use crate::handle::SharedAnimator;
use crate::timer::set_timeout;

pub struct PageController {
    endpoint: String,
    logic: RefCell<PredictionController>,
    view: PageView,
    confetti: SharedAnimator,
}

impl PageController {
    pub fn new(config: &AppConfig, view: PageView, confetti: SharedAnimator) -> Rc<Self> {
        Rc::new(Self {
            endpoint: config.endpoint.clone(),
            logic: RefCell::new(config.controller()),
            view,
            confetti,
        })
    }

    /// Install the click handlers. They live for the rest of the page.
    pub fn attach(self: &Rc<Self>) -> Result<(), JsValue> {
        let page = Rc::clone(self);
        listen(&self.view.submit_button, move |event: Event| {
            event.prevent_default();
            page.submit();
        })?;

        let page = Rc::clone(self);
        listen(&self.view.error_dismiss, move |_: Event| {
            page.logic.borrow_mut().dismiss_error();
            page.render();
        })?;

        self.render();
        Ok(())
    }

    fn submit(self: &Rc<Self>) {
        let form = self.view.read_form();
        let request = self.logic.borrow_mut().submit(&form);
        self.render();
        let Some(request) = request else {
            return;
        };

        let page = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = request_prediction(&page.endpoint, &request).await;
            let celebration = page.logic.borrow_mut().receive(outcome);
            page.render();
            if let Some(script) = celebration {
                page.celebrate(script);
            }
        });
    }

    fn render(&self) {
        self.view.render(self.logic.borrow().state());
    }

    fn celebrate(&self, script: CelebrationScript) {
        debug!("page: celebrating {:?}", script);
        for (offset, command) in script.steps() {
            if offset == 0 {
                self.confetti.borrow_mut().apply(command);
                continue;
            }
            let confetti = Rc::clone(&self.confetti);
            set_timeout(offset, move || confetti.borrow_mut().apply(command));
        }
    }
}

fn listen(target: &Element, handler: impl FnMut(Event) + 'static) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
