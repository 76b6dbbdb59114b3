//! View model for a successful prediction.

use super::response::Prediction;

/// Default percentage at or above which the bar turns green and confetti plays.
///
/// Percentages are clamped to 0..=100, so this never triggers. The value is
/// kept as deployed; configure a lower threshold to enable the celebration.
pub const SUCCESS_THRESHOLD_PERCENT: u32 = 120;

/// Percentage at or above which the bar uses the primary color.
pub const PRIMARY_THRESHOLD_PERCENT: u32 = 50;

/// Fill color of the confidence bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    Success,
    Primary,
    Warning,
}

impl BarColor {
    pub fn for_percent(percent: u32, success_threshold: u32) -> Self {
        if percent >= success_threshold {
            Self::Success
        } else if percent >= PRIMARY_THRESHOLD_PERCENT {
            Self::Primary
        } else {
            Self::Warning
        }
    }

    /// CSS value for `background-color`.
    pub fn css(&self) -> &'static str {
        match self {
            Self::Success => "var(--success-color)",
            Self::Primary => "var(--primary-color)",
            Self::Warning => "var(--warning-color)",
        }
    }
}

/// One row of the per-category breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBar {
    /// Category name, first letter capitalized.
    pub name: String,
    pub percent: u32,
    /// Whether this is the predicted category.
    pub is_highest: bool,
    /// Entrance animation delay in seconds.
    pub delay_secs: f32,
}

impl CategoryBar {
    pub fn width(&self) -> String {
        format!("{}%", self.percent)
    }

    pub fn animation_delay(&self) -> String {
        format!("{:.1}s", self.delay_secs)
    }
}

/// Everything the results section displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub label: String,
    pub confidence_percent: u32,
    pub bar_color: BarColor,
    /// Font Awesome classes for the category icon.
    pub icon_class: &'static str,
    /// Sorted by confidence, highest first.
    pub categories: Vec<CategoryBar>,
    pub demo_mode: bool,
    /// Whether to play the confetti celebration.
    pub celebrate: bool,
}

impl ResultView {
    pub fn from_prediction(prediction: &Prediction, success_threshold: u32) -> Self {
        let percent = confidence_percent(prediction.confidence);
        let bar_color = BarColor::for_percent(percent, success_threshold);

        let mut ranked: Vec<(&String, f64)> = prediction
            .all_confidences
            .iter()
            .flatten()
            .map(|(name, value)| (name, *value))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let categories = ranked
            .into_iter()
            .enumerate()
            .map(|(index, (name, value))| CategoryBar {
                name: capitalize_first(name),
                percent: confidence_percent(value),
                is_highest: name.to_lowercase() == prediction.label.to_lowercase(),
                delay_secs: 0.1 * (index + 1) as f32,
            })
            .collect();

        ResultView {
            label: capitalize_first(&prediction.label),
            confidence_percent: percent,
            bar_color,
            icon_class: icon_class(&prediction.label),
            categories,
            demo_mode: prediction.demo_mode,
            celebrate: bar_color == BarColor::Success,
        }
    }

    /// Bar width and value text, e.g. `95%`.
    pub fn bar_width(&self) -> String {
        format!("{}%", self.confidence_percent)
    }
}

/// `round(confidence * 100)`, clamped to 0..=100.
pub fn confidence_percent(confidence: f64) -> u32 {
    (confidence * 100.0).round().clamp(0.0, 100.0) as u32
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn icon_class(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "normal" => "fas fa-check-circle",
        "failure" => "fas fa-exclamation-triangle",
        _ => "fas fa-question-circle",
    }
}
