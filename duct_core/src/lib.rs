//! # duct_core - HVAC Duct Calculation Engine
//!
//! `duct_core` is the computational heart of Ductwise. A drawing layer hands
//! it a segment's width, airflow and length; it returns velocity, friction
//! rate, velocity pressure and threshold warnings. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over an immutable [`EngineConfig`]
//! - **Two result shapes**: `CalcResult<f64>` for formulas, [`ValidationReport`] for UI feedback
//! - **Rich Errors**: Structured error types naming the offending field
//!
//! ## Quick Start
//!
//! ```rust
//! use duct_core::calculations::{calculate_pressure, calculate_velocity, validate_calculation_results};
//! use duct_core::format::format_calculation_result;
//!
//! let velocity = calculate_velocity(700.0, 8.0).unwrap();
//! let pressure = calculate_pressure(velocity).unwrap();
//! println!("{}", format_calculation_result(velocity, "fpm", 0));
//! println!("{}", format_calculation_result(pressure, "in.wc", 4));
//!
//! let report = validate_calculation_results(velocity, 8.0);
//! assert_eq!(report.warnings.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The engine: velocity, friction, pressure, sizing, validation, segments
//! - [`config`] - Physical constants and the standard width table
//! - [`equations`] - Raw formulas and the equation registry
//! - [`format`] - Display formatting
//! - [`materials`] - Duct material annotation
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod config;
pub mod equations;
pub mod errors;
pub mod format;
pub mod materials;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    analyze_segment, calculate_friction, calculate_pressure, calculate_velocity, standard_engine,
    suggest_optimal_width, suggest_width, validate_calculation_results, CalculationEngine, DuctSegmentInput,
    SegmentResult, ValidationReport,
};
pub use config::{EngineConfig, MAX_RECOMMENDED_VELOCITY_FPM, STANDARD_WIDTHS_IN};
pub use errors::{CalcError, CalcResult};
pub use format::format_calculation_result;
pub use materials::DuctMaterial;
