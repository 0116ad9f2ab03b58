//! # Duct Equations
//!
//! Fundamental airflow formulas, kept apart from the rounding and validation
//! in [`calculations`](crate::calculations) so they can be checked against the
//! references directly.
//!
//! ## Modules
//!
//! - [`duct`] - Flow area, continuity, equivalent diameter, friction, velocity pressure
//! - [`registry`] - Equation metadata for the audit document
//!
//! ## References
//!
//! - ASHRAE Handbook - Fundamentals, Chapter 21: Duct Design
//! - SMACNA HVAC Systems Duct Design

pub mod duct;
pub mod registry;

pub use duct::{
    airflow_cfm,
    circular_equivalent_area_sqin,
    equivalent_round_diameter_in,
    flow_area_sqft,
    friction_loss_over_run,
    velocity_fpm,
    velocity_pressure_in_wc,
    wright_friction_rate,
};

pub use registry::{
    generate_equations_markdown,
    Equation,
    EquationCategory,
    EquationMetadata,
    Reference,
    Variable,
    ALL_EQUATIONS,
};
