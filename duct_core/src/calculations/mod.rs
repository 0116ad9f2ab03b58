//! # Duct Calculations
//!
//! The calculation engine and its operations. Two result shapes are used:
//!
//! - `CalcResult<f64>` - formula functions, failing fast with
//!   [`CalcError::InvalidInput`](crate::errors::CalcError::InvalidInput)
//! - [`ValidationReport`] - accumulated, never-failing feedback for UI banners
//!
//! Every operation exists as a method on [`CalculationEngine`] (for custom
//! configurations) and as a free function bound to the standard engine.
//!
//! ## Available Calculations
//!
//! - [`airflow`] - Velocity, friction rate, velocity pressure
//! - [`sizing`] - Standard width suggestion
//! - [`validation`] - Non-failing result validation
//! - [`segment`] - One drawn segment end to end
//!
//! ## Example
//!
//! ```rust
//! use duct_core::calculations::{calculate_friction, calculate_pressure, calculate_velocity};
//!
//! let velocity = calculate_velocity(500.0, 8.0).unwrap();
//! assert_eq!(velocity, 1432.0);
//!
//! let friction = calculate_friction(velocity, 8.0, 25.0).unwrap();
//! let pressure = calculate_pressure(velocity).unwrap();
//! assert!(friction > 0.0 && pressure > 0.0);
//! ```

pub mod airflow;
pub mod segment;
pub mod sizing;
pub mod validation;

use once_cell::sync::Lazy;

use crate::config::EngineConfig;
use crate::errors::CalcResult;

pub use segment::{DuctSegmentInput, SegmentResult};
pub use validation::ValidationReport;

/// Stateless duct calculation engine over an immutable [`EngineConfig`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculationEngine {
    config: EngineConfig,
}

static STANDARD_ENGINE: Lazy<CalculationEngine> = Lazy::new(CalculationEngine::default);

/// The process-wide engine built from [`EngineConfig::standard`].
pub fn standard_engine() -> &'static CalculationEngine {
    &STANDARD_ENGINE
}

impl CalculationEngine {
    /// Build an engine, rejecting an unusable configuration.
    pub fn new(config: EngineConfig) -> CalcResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this engine closes over
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

// ============================================================================
// Standard-engine shorthands
// ============================================================================

/// Velocity (fpm) of `cfm` through a square duct of side `width` (in).
pub fn calculate_velocity(cfm: f64, width: f64) -> CalcResult<f64> {
    standard_engine().calculate_velocity(cfm, width)
}

/// Friction rate (in.wc per 100 ft); `length` is validated but not applied.
pub fn calculate_friction(velocity: f64, width: f64, length: f64) -> CalcResult<f64> {
    standard_engine().calculate_friction(velocity, width, length)
}

/// Velocity pressure (in.wc).
pub fn calculate_pressure(velocity: f64) -> CalcResult<f64> {
    standard_engine().calculate_pressure(velocity)
}

/// Smallest larger standard width bringing velocity to `target_velocity`.
pub fn suggest_optimal_width(current_width: f64, velocity: f64, target_velocity: f64) -> Option<f64> {
    standard_engine().suggest_optimal_width(current_width, velocity, target_velocity)
}

/// [`suggest_optimal_width`] at the default 1500 fpm target.
pub fn suggest_width(current_width: f64, velocity: f64) -> Option<f64> {
    standard_engine().suggest_width(current_width, velocity)
}

/// Non-failing validation of a velocity/width pair.
pub fn validate_calculation_results(velocity: f64, current_width: f64) -> ValidationReport {
    standard_engine().validate_calculation_results(velocity, current_width)
}

/// Run a drawn segment through the standard engine.
pub fn analyze_segment(input: &DuctSegmentInput) -> CalcResult<SegmentResult> {
    standard_engine().analyze_segment(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_engine_uses_standard_config() {
        assert_eq!(standard_engine().config(), &EngineConfig::standard());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let cfg = EngineConfig {
            sq_in_per_sq_ft: -1.0,
            ..EngineConfig::default()
        };
        let err = CalculationEngine::new(cfg).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CalculationEngine>();
    }
}
