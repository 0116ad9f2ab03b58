//! # Velocity, Friction and Pressure
//!
//! The three formula operations. Each validates its inputs, evaluates the
//! unrounded formula from [`equations::duct`](crate::equations::duct), and
//! rounds once at the end:
//!
//! | Quantity | Unit | Decimals |
//! |----------|------|----------|
//! | Velocity | fpm | 0 |
//! | Friction rate | in.wc / 100 ft | 2 |
//! | Velocity pressure | in.wc | 4 |

use crate::equations::duct::{
    airflow_cfm, equivalent_round_diameter_in, flow_area_sqft, velocity_fpm, velocity_pressure_in_wc,
    wright_friction_rate,
};
use crate::errors::{require_finite_result, require_non_negative, require_positive, CalcResult};
use crate::format::round_to;

use super::CalculationEngine;

impl CalculationEngine {
    /// Circular-equivalent flow area (ft²) of a square duct side.
    pub fn flow_area_sqft(&self, width_in: f64) -> f64 {
        flow_area_sqft(width_in, self.config.sq_in_per_sq_ft)
    }

    /// Airflow (CFM) implied by `velocity` in a duct of side `width_in`.
    pub fn recovered_airflow_cfm(&self, velocity: f64, width_in: f64) -> f64 {
        airflow_cfm(velocity, self.flow_area_sqft(width_in))
    }

    /// Velocity (fpm) of `cfm` through a square duct of side `width` (in).
    ///
    /// Rounded to a whole number; 0 for zero airflow.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when `cfm` is negative, `width` is not positive, or the
    /// pair overflows to a non-finite velocity.
    ///
    /// ```rust
    /// use duct_core::calculations::CalculationEngine;
    ///
    /// let engine = CalculationEngine::default();
    /// assert_eq!(engine.calculate_velocity(500.0, 8.0).unwrap(), 1432.0);
    /// assert!(engine.calculate_velocity(-1.0, 8.0).is_err());
    /// ```
    pub fn calculate_velocity(&self, cfm: f64, width: f64) -> CalcResult<f64> {
        require_non_negative("cfm", cfm)?;
        require_positive("width", width)?;
        if cfm == 0.0 {
            return Ok(0.0);
        }
        let velocity = round_to(velocity_fpm(cfm, self.flow_area_sqft(width)), 0);
        require_finite_result("cfm", cfm, velocity)
    }

    /// Friction rate (in.wc per 100 ft) at `velocity` in a square duct.
    ///
    /// Airflow is recovered from velocity and width with the same area
    /// formula as [`calculate_velocity`](Self::calculate_velocity), then fed
    /// through the Huebscher diameter and the Wright equation. `length` must
    /// be positive but does not scale the result: this is a rate. Loss over
    /// the actual run is reported by segment analysis.
    pub fn calculate_friction(&self, velocity: f64, width: f64, length: f64) -> CalcResult<f64> {
        require_non_negative("velocity", velocity)?;
        require_positive("width", width)?;
        require_positive("length", length)?;
        if velocity == 0.0 {
            return Ok(0.0);
        }
        let friction = round_to(self.friction_rate_unrounded(velocity, width), 2);
        require_finite_result("velocity", velocity, friction)
    }

    /// Velocity pressure (in.wc): (V / 4005)², rounded to 4 decimals.
    pub fn calculate_pressure(&self, velocity: f64) -> CalcResult<f64> {
        require_non_negative("velocity", velocity)?;
        if velocity == 0.0 {
            return Ok(0.0);
        }
        let pressure = round_to(velocity_pressure_in_wc(velocity, self.config.velocity_pressure_constant), 4);
        require_finite_result("velocity", velocity, pressure)
    }

    /// Unchecked, unrounded friction rate
    pub(crate) fn friction_rate_unrounded(&self, velocity: f64, width: f64) -> f64 {
        let cfm = self.recovered_airflow_cfm(velocity, width);
        let diameter = equivalent_round_diameter_in(width, width, &self.config.equivalent_diameter);
        wright_friction_rate(cfm, diameter, &self.config.wright)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::errors::CalcError;

    fn engine() -> CalculationEngine {
        CalculationEngine::default()
    }

    fn reason(err: CalcError) -> (String, String) {
        match err {
            CalcError::InvalidInput { field, reason, .. } => (field, reason),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_velocity_reference_fixture() {
        assert_eq!(engine().calculate_velocity(500.0, 8.0).unwrap(), 1432.0);
    }

    #[test]
    fn test_velocity_zero_airflow() {
        for w in [4.0, 8.0, 13.5, 36.0] {
            assert_eq!(engine().calculate_velocity(0.0, w).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_velocity_rejects_bad_inputs() {
        let (field, why) = reason(engine().calculate_velocity(-1.0, 8.0).unwrap_err());
        assert_eq!(field, "cfm");
        assert_eq!(why, "must be non-negative");

        let (field, why) = reason(engine().calculate_velocity(500.0, 0.0).unwrap_err());
        assert_eq!(field, "width");
        assert_eq!(why, "must be greater than zero");

        assert!(engine().calculate_velocity(500.0, -8.0).is_err());
        assert!(engine().calculate_velocity(f64::NAN, 8.0).is_err());
        assert!(engine().calculate_velocity(500.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_velocity_is_whole_number() {
        let v = engine().calculate_velocity(777.7, 11.0).unwrap();
        assert_eq!(v, v.round());
    }

    #[test]
    fn test_friction_reference_values() {
        // 8" at 1000 fpm: 0.1385 -> 0.14
        assert_eq!(engine().calculate_friction(1000.0, 8.0, 10.0).unwrap(), 0.14);
        // doubling velocity scales by 2^1.9
        assert_eq!(engine().calculate_friction(2000.0, 8.0, 10.0).unwrap(), 0.52);
    }

    #[test]
    fn test_friction_zero_velocity() {
        assert_eq!(engine().calculate_friction(0.0, 8.0, 10.0).unwrap(), 0.0);
    }

    #[test]
    fn test_friction_ignores_length() {
        let short = engine().calculate_friction(1200.0, 10.0, 1.0).unwrap();
        let long = engine().calculate_friction(1200.0, 10.0, 500.0).unwrap();
        assert_eq!(short, long);
    }

    #[test]
    fn test_friction_monotonic() {
        let e = engine();
        let mut last = 0.0;
        for v in [500.0, 1000.0, 1500.0, 2000.0, 3000.0] {
            let f = e.calculate_friction(v, 8.0, 20.0).unwrap();
            assert!(f > last, "friction at {} fpm = {} not above {}", v, f, last);
            last = f;
        }

        let mut last = f64::INFINITY;
        for w in [6.0, 10.0, 16.0, 24.0] {
            let f = e.calculate_friction(3000.0, w, 20.0).unwrap();
            assert!(f < last, "friction at {}\" = {} not below {}", w, f, last);
            last = f;
        }
    }

    #[test]
    fn test_friction_distinct_errors() {
        let e = engine();
        assert_eq!(reason(e.calculate_friction(-1.0, 8.0, 10.0).unwrap_err()).0, "velocity");
        assert_eq!(reason(e.calculate_friction(1000.0, 0.0, 10.0).unwrap_err()).0, "width");
        let (field, why) = reason(e.calculate_friction(1000.0, 8.0, 0.0).unwrap_err());
        assert_eq!(field, "length");
        assert_eq!(why, "must be greater than zero");
    }

    #[test]
    fn test_pressure_values() {
        let e = engine();
        let p1 = e.calculate_pressure(1000.0).unwrap();
        assert!((p1 - 0.06).abs() < 0.005, "Pv = {}", p1);
        assert_eq!(p1, 0.0623);

        let p2 = e.calculate_pressure(2000.0).unwrap();
        assert!((p2 - 4.0 * p1).abs() < 0.001, "Pv(2000) = {} vs 4 x {}", p2, p1);

        assert_eq!(e.calculate_pressure(0.0).unwrap(), 0.0);
        assert_eq!(e.calculate_pressure(4005.0).unwrap(), 1.0);
    }

    #[test]
    fn test_pressure_rejects_negative() {
        assert_eq!(reason(engine().calculate_pressure(-5.0).unwrap_err()).0, "velocity");
    }

    #[test]
    fn test_overflowing_inputs_are_rejected() {
        let e = engine();
        let (field, why) = reason(e.calculate_velocity(1.0e307, 1.0e-10).unwrap_err());
        assert_eq!(field, "cfm");
        assert_eq!(why, "is too large to produce a finite result");

        assert_eq!(reason(e.calculate_friction(1.0e200, 8.0, 1.0).unwrap_err()).0, "velocity");
        assert_eq!(reason(e.calculate_pressure(1.0e200).unwrap_err()).0, "velocity");
    }

    #[test]
    fn test_custom_config_changes_results() {
        let cfg = EngineConfig {
            velocity_pressure_constant: 1000.0,
            ..EngineConfig::default()
        };
        let e = CalculationEngine::new(cfg).unwrap();
        assert_eq!(e.calculate_pressure(1000.0).unwrap(), 1.0);
    }
}
