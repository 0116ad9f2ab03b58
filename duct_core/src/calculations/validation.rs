//! # Result Validation
//!
//! The non-failing counterpart to the formula functions. Bad interim input
//! (a field mid-edit, say) produces error strings instead of an `Err`, so a
//! UI can keep rendering and show the feedback as banners.

use serde::{Deserialize, Serialize};

use super::CalculationEngine;

/// Accumulated validation feedback for one velocity/width pair.
///
/// ## JSON Example
///
/// ```json
/// {
///   "is_valid": true,
///   "errors": [],
///   "warnings": ["Velocity 1501 fpm exceeds the recommended maximum of 1500 fpm"],
///   "suggestions": ["Consider increasing duct width to 10\""]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// `errors.is_empty()`
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

impl ValidationReport {
    /// An empty, valid report
    pub fn new() -> Self {
        Self {
            is_valid: true,
            ..Self::default()
        }
    }

    /// Record an error; the report becomes invalid.
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.is_valid = false;
    }

    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn push_suggestion(&mut self, message: impl Into<String>) {
        self.suggestions.push(message.into());
    }

    /// Valid with nothing to warn about
    pub fn is_clean(&self) -> bool {
        self.is_valid && self.warnings.is_empty()
    }
}

impl CalculationEngine {
    /// Validate a computed velocity against the duct width it came from.
    ///
    /// Never fails. Negative velocity and non-positive width each add an
    /// error. Velocity strictly above the recommended maximum adds one
    /// warning plus, when [`suggest_width`](Self::suggest_width) finds one,
    /// one suggestion.
    ///
    /// ```rust
    /// use duct_core::calculations::validate_calculation_results;
    ///
    /// let report = validate_calculation_results(1501.0, 8.0);
    /// assert!(report.is_valid);
    /// assert_eq!(report.warnings.len(), 1);
    /// assert_eq!(report.suggestions.len(), 1);
    ///
    /// let report = validate_calculation_results(-1000.0, -8.0);
    /// assert!(!report.is_valid);
    /// assert_eq!(report.errors.len(), 2);
    /// ```
    pub fn validate_calculation_results(&self, velocity: f64, current_width: f64) -> ValidationReport {
        let mut report = ValidationReport::new();

        if !velocity.is_finite() {
            report.push_error("velocity must be a finite number");
        } else if velocity < 0.0 {
            report.push_error("velocity cannot be negative");
        }

        if !current_width.is_finite() {
            report.push_error("width must be a finite number");
        } else if current_width <= 0.0 {
            report.push_error("width must be greater than zero");
        }

        let max = self.config.max_recommended_velocity_fpm;
        if report.is_valid && velocity > max {
            report.push_warning(format!(
                "Velocity {} fpm exceeds the recommended maximum of {} fpm",
                velocity, max
            ));
            if let Some(width) = self.suggest_width(current_width, velocity) {
                report.push_suggestion(format!("Consider increasing duct width to {}\"", width));
            }
        }

        report
    }
}
