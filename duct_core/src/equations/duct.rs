//! # Duct Airflow Formulas
//!
//! Unrounded, unchecked formulas for air moving through a straight duct.
//! Range checks and rounding happen one level up, in
//! [`calculations`](crate::calculations); keep these as plain arithmetic.
//!
//! ## Notation
//!
//! - `w` = square duct side (in)
//! - `A` = circular-equivalent flow area (in² or ft²)
//! - `Q` = airflow (CFM)
//! - `V` = velocity (fpm)
//! - `De` = equivalent round diameter (in)
//!
//! ## References
//!
//! - ASHRAE Handbook - Fundamentals, Chapter 21: Duct Design
//! - Huebscher, "Friction Equivalents for Round, Square and Rectangular Ducts" (1948)

use std::f64::consts::PI;

use crate::config::{EquivalentDiameterCoefficients, WrightCoefficients};

// =============================================================================
// FLOW AREA
// =============================================================================

/// Circular-equivalent flow area of a square duct side `w`.
///
/// The engine treats the side as a diameter: A = w² × π / 4.
///
/// ```rust
/// use duct_core::equations::duct::circular_equivalent_area_sqin;
///
/// let a = circular_equivalent_area_sqin(8.0);
/// assert!((a - 50.265).abs() < 0.001);
/// ```
#[inline]
pub fn circular_equivalent_area_sqin(width_in: f64) -> f64 {
    width_in * width_in * PI / 4.0
}

/// Flow area in square feet.
#[inline]
pub fn flow_area_sqft(width_in: f64, sq_in_per_sq_ft: f64) -> f64 {
    circular_equivalent_area_sqin(width_in) / sq_in_per_sq_ft
}

// =============================================================================
// CONTINUITY
// =============================================================================

/// V = Q / A
#[inline]
pub fn velocity_fpm(airflow_cfm: f64, area_sqft: f64) -> f64 {
    airflow_cfm / area_sqft
}

/// Q = V × A
#[inline]
pub fn airflow_cfm(velocity_fpm: f64, area_sqft: f64) -> f64 {
    velocity_fpm * area_sqft
}

// =============================================================================
// FRICTION
// =============================================================================

/// Huebscher equivalent round diameter of an `a` × `b` rectangular duct.
///
/// De = C × (a·b)^p / (a+b)^q, with C = 1.30, p = 0.625, q = 0.25 for the
/// standard coefficients. For a square duct pass the side twice.
///
/// ```rust
/// use duct_core::config::EquivalentDiameterCoefficients;
/// use duct_core::equations::duct::equivalent_round_diameter_in;
///
/// let de = equivalent_round_diameter_in(8.0, 8.0, &EquivalentDiameterCoefficients::default());
/// assert!((de - 8.745).abs() < 0.01);
/// ```
#[inline]
pub fn equivalent_round_diameter_in(a_in: f64, b_in: f64, k: &EquivalentDiameterCoefficients) -> f64 {
    k.coefficient * (a_in * b_in).powf(k.area_exponent) / (a_in + b_in).powf(k.perimeter_exponent)
}

/// Wright friction rate, in.wc per 100 ft of straight galvanized duct.
///
/// f = 0.109136 × Q^1.9 / De^5.02
#[inline]
pub fn wright_friction_rate(airflow_cfm: f64, diameter_in: f64, k: &WrightCoefficients) -> f64 {
    k.coefficient * airflow_cfm.powf(k.airflow_exponent) / diameter_in.powf(k.diameter_exponent)
}

/// Friction loss over a run: Δp = f × L / 100
#[inline]
pub fn friction_loss_over_run(friction_rate_per_100ft: f64, length_ft: f64) -> f64 {
    friction_rate_per_100ft * length_ft / 100.0
}

// =============================================================================
// PRESSURE
// =============================================================================

/// Velocity pressure of standard air: Pv = (V / 4005)²
#[inline]
pub fn velocity_pressure_in_wc(velocity_fpm: f64, constant: f64) -> f64 {
    let ratio = velocity_fpm / constant;
    ratio * ratio
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_flow_area() {
        // 8" side: 50.265 in², 0.34907 ft²
        let a = flow_area_sqft(8.0, 144.0);
        assert!(approx_eq(a, 0.349066, 1e-6), "A = {}", a);
    }

    #[test]
    fn test_continuity_inverse() {
        let area = flow_area_sqft(12.0, 144.0);
        let v = velocity_fpm(900.0, area);
        assert!(approx_eq(airflow_cfm(v, area), 900.0, 1e-9));
    }

    #[test]
    fn test_square_equivalent_diameter() {
        // Square duct: De = 1.30 × w^1.25 / (2w)^0.25, about 1.093 w
        let k = EquivalentDiameterCoefficients::default();
        let de = equivalent_round_diameter_in(12.0, 12.0, &k);
        assert!(approx_eq(de / 12.0, 1.0932, 1e-3), "De = {}", de);
    }

    #[test]
    fn test_rectangular_equivalent_diameter_is_symmetric() {
        let k = EquivalentDiameterCoefficients::default();
        let de1 = equivalent_round_diameter_in(12.0, 8.0, &k);
        let de2 = equivalent_round_diameter_in(8.0, 12.0, &k);
        assert!(approx_eq(de1, de2, 1e-12));
    }

    #[test]
    fn test_wright_friction_rate() {
        // 8" square at 1000 fpm: Q = 349 CFM, De = 8.745" -> about 0.14 in.wc/100 ft
        let k = WrightCoefficients::default();
        let cfm = airflow_cfm(1000.0, flow_area_sqft(8.0, 144.0));
        let de = equivalent_round_diameter_in(8.0, 8.0, &EquivalentDiameterCoefficients::default());
        let f = wright_friction_rate(cfm, de, &k);
        assert!(approx_eq(f, 0.1385, 0.002), "f = {}", f);
    }

    #[test]
    fn test_friction_loss_over_run() {
        assert!(approx_eq(friction_loss_over_run(0.12, 50.0), 0.06, 1e-12));
    }

    #[test]
    fn test_velocity_pressure() {
        assert!(approx_eq(velocity_pressure_in_wc(4005.0, 4005.0), 1.0, 1e-12));
        assert!(approx_eq(velocity_pressure_in_wc(1000.0, 4005.0), 0.06234, 1e-5));
    }
}
