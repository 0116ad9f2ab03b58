//! # Duct Segment Analysis
//!
//! Runs one drawn segment through the engine in collaborator order:
//! velocity, then friction and velocity pressure, then validation.
//!
//! ## Example
//!
//! ```rust
//! use duct_core::calculations::segment::DuctSegmentInput;
//! use duct_core::calculations::analyze_segment;
//!
//! let input = DuctSegmentInput::new("Supply trunk", 8.0, 500.0, 25.0);
//! let result = analyze_segment(&input).unwrap();
//!
//! assert_eq!(result.velocity_fpm, 1432.0);
//! assert!(result.validation.is_clean());
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::duct::friction_loss_over_run;
use crate::errors::{require_non_negative, require_positive, CalcResult};
use crate::format::{format_calculation_result, round_to};
use crate::materials::DuctMaterial;

use super::{CalculationEngine, ValidationReport};

/// Engineering properties of a drawn duct segment.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "S-1",
///   "width_in": 8.0,
///   "airflow_cfm": 500.0,
///   "length_ft": 25.0,
///   "material": "galvanized-steel"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuctSegmentInput {
    /// User label (e.g., "S-1", "Return to AHU-2")
    pub label: String,

    /// Square duct side in inches
    pub width_in: f64,

    /// Airflow in CFM
    pub airflow_cfm: f64,

    /// Run length in feet
    pub length_ft: f64,

    #[serde(default)]
    pub material: DuctMaterial,
}

impl DuctSegmentInput {
    pub fn new(label: impl Into<String>, width_in: f64, airflow_cfm: f64, length_ft: f64) -> Self {
        Self {
            label: label.into(),
            width_in,
            airflow_cfm,
            length_ft,
            material: DuctMaterial::default(),
        }
    }

    pub fn with_material(mut self, material: DuctMaterial) -> Self {
        self.material = material;
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("width_in", self.width_in)?;
        require_non_negative("airflow_cfm", self.airflow_cfm)?;
        require_positive("length_ft", self.length_ft)?;
        Ok(())
    }
}

/// Derived values for one segment.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "S-1",
///   "velocity_fpm": 1432.0,
///   "friction_in_wc_per_100ft": 0.27,
///   "velocity_pressure_in_wc": 0.1278,
///   "friction_loss_in_wc": 0.0686,
///   "validation": { "is_valid": true, "errors": [], "warnings": [], "suggestions": [] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentResult {
    pub label: String,

    /// Mean velocity (fpm), whole number
    pub velocity_fpm: f64,

    /// Wright friction rate (in.wc per 100 ft)
    pub friction_in_wc_per_100ft: f64,

    /// Velocity pressure (in.wc)
    pub velocity_pressure_in_wc: f64,

    /// Friction loss across this segment's length (in.wc)
    ///
    /// Computed from the unrounded friction rate.
    pub friction_loss_in_wc: f64,

    pub validation: ValidationReport,
}

impl SegmentResult {
    /// Display strings for a results table: (label, formatted value)
    pub fn display_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Velocity", format_calculation_result(self.velocity_fpm, "fpm", 0)),
            ("Friction", format_calculation_result(self.friction_in_wc_per_100ft, "in.wc/100 ft", 2)),
            ("Velocity pressure", format_calculation_result(self.velocity_pressure_in_wc, "in.wc", 4)),
            ("Run loss", format_calculation_result(self.friction_loss_in_wc, "in.wc", 4)),
        ]
    }
}

impl CalculationEngine {
    /// Compute velocity, friction, pressure and validation for a segment.
    pub fn analyze_segment(&self, input: &DuctSegmentInput) -> CalcResult<SegmentResult> {
        input.validate()?;

        let velocity = self.calculate_velocity(input.airflow_cfm, input.width_in)?;
        let friction = self.calculate_friction(velocity, input.width_in, input.length_ft)?;
        let pressure = self.calculate_pressure(velocity)?;

        let raw_rate = if velocity == 0.0 {
            0.0
        } else {
            self.friction_rate_unrounded(velocity, input.width_in)
        };
        let friction_loss = round_to(friction_loss_over_run(raw_rate, input.length_ft), 4);

        let mut validation = self.validate_calculation_results(velocity, input.width_in);
        if !input.material.on_wright_basis() {
            validation.push_warning(format!(
                "Friction assumes galvanized steel; {} will run higher",
                input.material.display_name()
            ));
        }

        tracing::debug!(
            label = %input.label,
            velocity,
            friction,
            pressure,
            friction_loss,
            "segment analyzed"
        );
        if velocity > self.config.max_recommended_velocity_fpm {
            tracing::warn!(label = %input.label, velocity, "segment velocity above recommended maximum");
        }

        Ok(SegmentResult {
            label: input.label.clone(),
            velocity_fpm: velocity,
            friction_in_wc_per_100ft: friction,
            velocity_pressure_in_wc: pressure,
            friction_loss_in_wc: friction_loss,
            validation,
        })
    }

    /// Analyze several segments, stopping at the first invalid one.
    pub fn analyze_segments(&self, inputs: &[DuctSegmentInput]) -> CalcResult<Vec<SegmentResult>> {
        inputs.iter().map(|input| self.analyze_segment(input)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> CalculationEngine {
        CalculationEngine::default()
    }

    #[test]
    fn test_reference_segment() {
        let result = engine()
            .analyze_segment(&DuctSegmentInput::new("S-1", 8.0, 500.0, 25.0))
            .unwrap();
        assert_eq!(result.label, "S-1");
        assert_eq!(result.velocity_fpm, 1432.0);
        assert_eq!(result.friction_in_wc_per_100ft, engine().calculate_friction(1432.0, 8.0, 25.0).unwrap());
        assert_eq!(result.velocity_pressure_in_wc, engine().calculate_pressure(1432.0).unwrap());
        assert!(result.validation.is_clean());
    }

    #[test]
    fn test_run_loss_scales_with_length() {
        let e = engine();
        let short = e.analyze_segment(&DuctSegmentInput::new("a", 10.0, 800.0, 10.0)).unwrap();
        let long = e.analyze_segment(&DuctSegmentInput::new("b", 10.0, 800.0, 100.0)).unwrap();
        assert_eq!(short.friction_in_wc_per_100ft, long.friction_in_wc_per_100ft);
        assert!((long.friction_loss_in_wc - 10.0 * short.friction_loss_in_wc).abs() < 0.0005);
        // 100 ft of run equals the per-100-ft rate
        assert!((long.friction_loss_in_wc - long.friction_in_wc_per_100ft).abs() < 0.006);
    }

    #[test]
    fn test_zero_airflow_segment() {
        let result = engine().analyze_segment(&DuctSegmentInput::new("idle", 12.0, 0.0, 40.0)).unwrap();
        assert_eq!(result.velocity_fpm, 0.0);
        assert_eq!(result.friction_in_wc_per_100ft, 0.0);
        assert_eq!(result.velocity_pressure_in_wc, 0.0);
        assert_eq!(result.friction_loss_in_wc, 0.0);
    }

    #[test]
    fn test_invalid_length() {
        let err = engine()
            .analyze_segment(&DuctSegmentInput::new("bad", 8.0, 500.0, 0.0))
            .unwrap_err();
        assert_eq!(err.field(), Some("length_ft"));
    }

    #[test]
    fn test_over_velocity_segment_has_suggestion() {
        let result = engine().analyze_segment(&DuctSegmentInput::new("hot", 8.0, 700.0, 20.0)).unwrap();
        assert!(result.velocity_fpm > 1500.0);
        assert_eq!(result.validation.warnings.len(), 1);
        assert_eq!(result.validation.suggestions.len(), 1);
    }

    #[test]
    fn test_rough_material_warns() {
        let input = DuctSegmentInput::new("flex", 8.0, 300.0, 12.0).with_material(DuctMaterial::FlexibleDuct);
        let result = engine().analyze_segment(&input).unwrap();
        assert!(result.validation.is_valid);
        assert_eq!(result.validation.warnings.len(), 1);
        assert!(result.validation.warnings[0].contains("Flexible Duct"));
    }

    #[test]
    fn test_analyze_segments_stops_at_error() {
        let inputs = vec![
            DuctSegmentInput::new("ok", 8.0, 500.0, 25.0),
            DuctSegmentInput::new("bad", -8.0, 500.0, 25.0),
        ];
        let err = engine().analyze_segments(&inputs).unwrap_err();
        assert_eq!(err.field(), Some("width_in"));
        assert_eq!(engine().analyze_segments(&inputs[..1]).unwrap().len(), 1);
    }

    #[test]
    fn test_input_json_defaults_material() {
        let json = r#"{"label":"S-2","width_in":10.0,"airflow_cfm":600.0,"length_ft":30.0}"#;
        let input: DuctSegmentInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.material, DuctMaterial::GalvanizedSteel);
    }

    #[test]
    fn test_result_serialization() {
        let result = engine().analyze_segment(&DuctSegmentInput::new("S-1", 8.0, 500.0, 25.0)).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("velocity_fpm"));
        assert!(json.contains("friction_loss_in_wc"));
        let roundtrip: SegmentResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }

    #[test]
    fn test_display_rows() {
        let result = engine().analyze_segment(&DuctSegmentInput::new("S-1", 8.0, 500.0, 25.0)).unwrap();
        let rows = result.display_rows();
        assert_eq!(rows[0], ("Velocity", "1,432 fpm".to_string()));
        assert!(rows[1].1.ends_with(" in.wc/100 ft"));
    }
}
