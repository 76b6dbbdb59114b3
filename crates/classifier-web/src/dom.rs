//! DOM bindings for the prediction page.

use classifier_engine::{CategoryBar, PageState, ResultView, SensorForm};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, FormData, HtmlElement, HtmlFormElement};

use crate::timer::set_timeout;

/// Class that hides an element.
const HIDDEN: &str = "d-none";
/// Delay before category bars grow to their width, so the transition plays.
const BAR_GROW_DELAY_MS: u32 = 100;
/// Delay before the label fade-in animation is re-applied.
const LABEL_FADE_DELAY_MS: u32 = 10;

/// Handles to every element the page controller reads or writes.
pub struct PageView {
    document: Document,
    pub submit_button: Element,
    pub error_dismiss: Element,
    form: HtmlFormElement,
    results: Element,
    placeholder: Element,
    error: Element,
    error_message: Element,
    prediction_label: HtmlElement,
    confidence_bar: HtmlElement,
    confidence_value: Element,
    all_categories: Element,
    category_icon: Element,
    loading: Element,
}

impl PageView {
    /// Look up all page elements. Fails naming the first missing id.
    pub fn bind(document: Document) -> Result<Self, JsValue> {
        let find = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))
        };
        let find_html = |id: &str| -> Result<HtmlElement, JsValue> { Ok(find(id)?.dyn_into()?) };

        Ok(Self {
            submit_button: find("submit-btn")?,
            error_dismiss: find("error-dismiss")?,
            form: find("parameter-form")?.dyn_into()?,
            results: find("results-section")?,
            placeholder: find("placeholder-section")?,
            error: find("error-section")?,
            error_message: find("error-message")?,
            prediction_label: find_html("prediction-label")?,
            confidence_bar: find_html("confidence-bar")?,
            confidence_value: find("confidence-value")?,
            all_categories: find("all-categories")?,
            category_icon: find("category-icon")?,
            loading: find("loading-overlay")?,
            document,
        })
    }

    /// Read the current form values by input name.
    pub fn read_form(&self) -> SensorForm {
        match FormData::new_with_form(&self.form) {
            Ok(data) => SensorForm::from_lookup(|name| data.get(name).as_string()),
            Err(_) => SensorForm::default(),
        }
    }

    /// Show exactly the sections `state` calls for.
    pub fn render(&self, state: &PageState) {
        let loading = matches!(state, PageState::Loading);
        set_visible(&self.loading, loading);
        set_visible(&self.placeholder, matches!(state, PageState::Placeholder));
        set_visible(&self.results, matches!(state, PageState::Results(_)));
        set_visible(&self.error, matches!(state, PageState::Error(_)));

        match state {
            PageState::Results(view) => self.render_results(view),
            PageState::Error(message) => self.error_message.set_text_content(Some(message)),
            PageState::Placeholder | PageState::Loading => {}
        }
    }

    fn render_results(&self, view: &ResultView) {
        self.prediction_label.set_text_content(Some(&view.label));
        restart_fade_in(&self.prediction_label);

        let width = view.bar_width();
        let style = self.confidence_bar.style();
        let _ = style.set_property("width", &width);
        let _ = style.set_property("background-color", view.bar_color.css());
        self.confidence_value.set_text_content(Some(&width));

        self.category_icon.set_class_name(view.icon_class);

        if !view.categories.is_empty() {
            self.all_categories.set_text_content(None);
            for bar in &view.categories {
                if let Err(err) = self.append_category(bar) {
                    log::warn!("page: could not render category {}: {:?}", bar.name, err);
                }
            }
        }

        if view.demo_mode {
            self.show_demo_badge();
        }
    }

    fn append_category(&self, bar: &CategoryBar) -> Result<(), JsValue> {
        let row: HtmlElement = self.element("div", "category-bar")?.dyn_into()?;
        row.style().set_property("animation-delay", &bar.animation_delay())?;

        let label = self.element("div", "category-label")?;
        let name = self.element("span", "name")?;
        name.set_text_content(Some(&bar.name));
        let value = self.element("span", "value")?;
        value.set_text_content(Some(&format!("{}%", bar.percent)));
        label.append_child(&name)?;
        label.append_child(&value)?;

        let track = self.element("div", "category-progress")?;
        let class = if bar.is_highest {
            "category-progress-bar highest"
        } else {
            "category-progress-bar"
        };
        let fill: HtmlElement = self.element("div", class)?.dyn_into()?;
        fill.style().set_property("width", "0%")?;
        track.append_child(&fill)?;

        row.append_child(&label)?;
        row.append_child(&track)?;
        self.all_categories.append_child(&row)?;

        let width = bar.width();
        set_timeout(BAR_GROW_DELAY_MS, move || {
            let _ = fill.style().set_property("width", &width);
        });
        Ok(())
    }

    fn show_demo_badge(&self) {
        if self.document.get_element_by_id("demo-badge").is_some() {
            return;
        }
        let Ok(Some(header)) = self.document.query_selector(".result-header") else {
            return;
        };
        let Ok(badge) = self.element("div", "demo-badge") else {
            return;
        };
        badge.set_id("demo-badge");
        badge.set_text_content(Some("Demo Mode"));
        let _ = badge.set_attribute(
            "title",
            "Currently using random predictions for demonstration purposes",
        );
        let _ = header.append_child(&badge);
    }

    fn element(&self, tag: &str, class: &str) -> Result<Element, JsValue> {
        let el = self.document.create_element(tag)?;
        el.set_class_name(class);
        Ok(el)
    }
}

fn set_visible(el: &Element, visible: bool) {
    let classes = el.class_list();
    let _ = if visible {
        classes.remove_1(HIDDEN)
    } else {
        classes.add_1(HIDDEN)
    };
}

fn restart_fade_in(label: &HtmlElement) {
    let _ = label.style().set_property("animation", "none");
    let label = label.clone();
    set_timeout(LABEL_FADE_DELAY_MS, move || {
        let _ = label.style().set_property("animation", "fadeIn 0.8s ease");
    });
}
