//! Rules for intersection-triggered reveal animations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealOptions {
    /// Minimum visible ratio before an element counts as revealed.
    pub threshold: f64,
    /// Margin applied to the viewport, in CSS syntax.
    pub root_margin: String,
    /// Keep the element revealed after it first enters.
    pub once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            once: true,
        }
    }
}

impl RevealOptions {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn repeating(mut self) -> Self {
        self.once = false;
        self
    }
}

/// Visibility after an observer entry.
pub fn next_visibility(
    currently_revealed: bool,
    is_intersecting: bool,
    ratio: f64,
    options: &RevealOptions,
) -> bool {
    if currently_revealed && options.once {
        return true;
    }
    is_intersecting && ratio >= options.threshold
}

/// Progress bar width once its card has been revealed.
pub fn progress_width(revealed: bool, target_percent: u8) -> String {
    if revealed {
        format!("{}%", target_percent.min(100))
    } else {
        "0%".to_string()
    }
}
