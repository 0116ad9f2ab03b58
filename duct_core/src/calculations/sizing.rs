//! Standard width suggestion for over-velocity segments.

use super::CalculationEngine;

impl CalculationEngine {
    /// Smallest standard width larger than `current_width` that brings the
    /// velocity down to `target_velocity`.
    ///
    /// The airflow is recovered from `current_width` and `velocity`, then each
    /// larger standard width is tried in ascending order. When none reaches the
    /// target the largest standard width is returned as a best effort.
    ///
    /// Returns `None` when `velocity <= target_velocity`, when `current_width`
    /// is not a positive number, or when no standard width exceeds it.
    ///
    /// ```rust
    /// use duct_core::calculations::suggest_optimal_width;
    ///
    /// assert_eq!(suggest_optimal_width(8.0, 1200.0, 1500.0), None);
    /// assert_eq!(suggest_optimal_width(8.0, 1800.0, 1500.0), Some(10.0));
    /// ```
    pub fn suggest_optimal_width(&self, current_width: f64, velocity: f64, target_velocity: f64) -> Option<f64> {
        // NaN in either velocity fails the comparison too
        if !(velocity > target_velocity) {
            return None;
        }
        if !current_width.is_finite() || current_width <= 0.0 {
            return None;
        }

        let cfm = self.recovered_airflow_cfm(velocity, current_width);
        let widths = &self.config.standard_widths_in;

        // table is ascending, so the last entry is the largest
        let suggestion = widths
            .iter()
            .copied()
            .filter(|w| *w > current_width)
            .find(|w| matches!(self.calculate_velocity(cfm, *w), Ok(v) if v <= target_velocity))
            .or_else(|| widths.last().copied().filter(|w| *w > current_width));

        tracing::debug!(
            current_width,
            velocity,
            target_velocity,
            cfm,
            suggestion = ?suggestion,
            "width suggestion"
        );
        suggestion
    }

    /// [`suggest_optimal_width`](Self::suggest_optimal_width) at the
    /// configured default target velocity.
    pub fn suggest_width(&self, current_width: f64, velocity: f64) -> Option<f64> {
        self.suggest_optimal_width(current_width, velocity, self.config.default_target_velocity_fpm)
    }
}
