// src/client/view.rs
use serde_json::Value;

use super::{AnalysisResult, ClientError};

const COLOR_WEAK: &str = "#ff4d4d";
const COLOR_MODERATE: &str = "#ffa534";
const COLOR_STRONG: &str = "#4caf50";
const COLOR_VERY_STRONG: &str = "#006400";

const PLACEHOLDER: &str = "—";
const PROMPT_TEXT: &str = "Start typing to analyze...";

/// Everything the meter displays, computed in one place.
///
/// The view model is deliberately plain data so rendering can be tested
/// without a UI: bar geometry, colors and all text fields are resolved here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterView {
    pub bar_width_pct: u8,
    pub bar_color: &'static str,
    pub strength_text: String,
    pub length: String,
    pub charset: String,
    pub combinations: String,
    pub entropy: String,
    pub crack_time: String,
}

impl MeterView {
    /// State shown before any input, and after the field is cleared.
    pub fn placeholder() -> Self {
        Self {
            bar_width_pct: 0,
            bar_color: COLOR_WEAK,
            strength_text: PROMPT_TEXT.to_string(),
            length: PLACEHOLDER.to_string(),
            charset: PLACEHOLDER.to_string(),
            combinations: PLACEHOLDER.to_string(),
            entropy: PLACEHOLDER.to_string(),
            crack_time: PLACEHOLDER.to_string(),
        }
    }

    /// Map an analysis result onto the meter.
    pub fn from_analysis(result: &AnalysisResult) -> Self {
        let (bar_width_pct, bar_color) = match result.strength.as_str() {
            "Weak" => (20, COLOR_WEAK),
            "Moderate" => (45, COLOR_MODERATE),
            "Strong" => (70, COLOR_STRONG),
            "Very Strong" => (100, COLOR_VERY_STRONG),
            // Unrecognized labels render an empty bar
            _ => (0, COLOR_WEAK),
        };

        Self {
            bar_width_pct,
            bar_color,
            strength_text: format!(
                "{} — {}",
                result.strength,
                result.feedback.as_deref().unwrap_or_default()
            ),
            length: verbatim(&result.length),
            charset: verbatim(&result.charset),
            combinations: verbatim(&result.combinations),
            entropy: format!("{:.2} bits", result.entropy),
            crack_time: verbatim(&result.time_1e9),
        }
    }

    /// Inline error state for a failed analysis request.
    pub fn from_error(err: &ClientError) -> Self {
        Self {
            strength_text: format!("Analysis unavailable: {err}"),
            ..Self::placeholder()
        }
    }
}

// Display-ready values pass through untouched; strings must not pick up
// JSON quoting.
fn verbatim(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Show/hide state of the password field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityToggle {
    visible: bool,
}

impl VisibilityToggle {
    /// Field starts obscured.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// HTML input type for the field.
    pub fn input_type(&self) -> &'static str {
        if self.visible {
            "text"
        } else {
            "password"
        }
    }

    /// Whether the toggle control carries its "visible" class.
    pub fn is_active(&self) -> bool {
        self.visible
    }

    /// Accessibility label for the toggle control.
    pub fn aria_label(&self) -> &'static str {
        if self.visible {
            "Hide password"
        } else {
            "Show password"
        }
    }
}
