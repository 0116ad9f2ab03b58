//! # Equation Registry
//!
//! Central registry of the duct formulas used by the engine. Each equation has
//! metadata (formula, reference, variables, assumptions, source location) so
//! the math can be audited in one place.
//!
//! ## Usage
//!
//! ```rust
//! use duct_core::equations::registry::Equation;
//!
//! let meta = Equation::WrightFrictionRate.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Source of a formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reference {
    /// ASHRAE Handbook - Fundamentals
    AshraeFundamentals { year: u16, chapter: u8 },
    /// Huebscher equivalent diameter paper
    Huebscher { year: u16 },
    /// SMACNA HVAC Systems Duct Design
    Smacna { edition: u8 },
    /// Conservation of mass / basic fluid mechanics
    Physics,
}

impl Reference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            Reference::AshraeFundamentals { year, chapter } => {
                format!("ASHRAE Fundamentals {}, Ch. {}", year, chapter)
            }
            Reference::Huebscher { year } => format!("Huebscher ({})", year),
            Reference::Smacna { edition } => format!("SMACNA Duct Design, {}ed", edition),
            Reference::Physics => "Fundamental Fluid Mechanics".to_string(),
        }
    }
}

// ============================================================================
// Categories
// ============================================================================

/// Grouping used when listing equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    Geometry,
    Airflow,
    Friction,
    Pressure,
    Sizing,
}

impl EquationCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Geometry => "Geometry",
            EquationCategory::Airflow => "Airflow",
            EquationCategory::Friction => "Friction",
            EquationCategory::Pressure => "Pressure",
            EquationCategory::Sizing => "Sizing",
        }
    }

    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Geometry => 1,
            EquationCategory::Airflow => 2,
            EquationCategory::Friction => 3,
            EquationCategory::Pressure => 4,
            EquationCategory::Sizing => 5,
        }
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    pub symbol: &'static str,
    pub description: &'static str,
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

/// Complete metadata for one formula.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// What the equation calculates
    pub description: &'static str,
    /// Plain-text formula
    pub formula_plain: &'static str,
    pub reference: Reference,
    pub variables: Vec<Variable>,
    pub assumptions: Vec<&'static str>,
    pub category: EquationCategory,
    /// Source file implementing the equation
    pub source_module: &'static str,
    /// Function implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// Every formula used by the duct engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// A = w²π/4
    CircularEquivalentArea,
    /// V = Q/A
    DuctVelocity,
    /// Q = V·A
    RecoveredAirflow,
    /// De = 1.30(ab)^0.625/(a+b)^0.25
    EquivalentRoundDiameter,
    /// f = 0.109136 Q^1.9 / De^5.02
    WrightFrictionRate,
    /// Δp = f·L/100
    FrictionLossOverRun,
    /// Pv = (V/4005)²
    VelocityPressure,
    /// Smallest larger standard width meeting the target velocity
    StandardWidthSelection,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::CircularEquivalentArea => EquationMetadata {
                name: "Circular-Equivalent Flow Area",
                description: "Flow area of a duct whose side is treated as a round diameter",
                formula_plain: "A = w^2 * pi / 4 / 144",
                reference: Reference::Physics,
                variables: vec![
                    Variable::new("A", "Flow area", "ft^2"),
                    Variable::new("w", "Duct side (width)", "in"),
                ],
                assumptions: vec!["Square duct, width used as diameter", "144 in^2 per ft^2"],
                category: EquationCategory::Geometry,
                source_module: "equations/duct.rs",
                source_function: "flow_area_sqft",
            },

            Equation::DuctVelocity => EquationMetadata {
                name: "Duct Velocity",
                description: "Mean air velocity from airflow and flow area",
                formula_plain: "V = Q / A",
                reference: Reference::Physics,
                variables: vec![
                    Variable::new("V", "Velocity", "fpm"),
                    Variable::new("Q", "Airflow", "CFM"),
                    Variable::new("A", "Flow area", "ft^2"),
                ],
                assumptions: vec!["Incompressible flow", "Rounded to whole fpm"],
                category: EquationCategory::Airflow,
                source_module: "calculations/airflow.rs",
                source_function: "calculate_velocity",
            },

            Equation::RecoveredAirflow => EquationMetadata {
                name: "Recovered Airflow",
                description: "Airflow implied by a velocity in a duct of known width",
                formula_plain: "Q = V * A",
                reference: Reference::Physics,
                variables: vec![
                    Variable::new("Q", "Airflow", "CFM"),
                    Variable::new("V", "Velocity", "fpm"),
                ],
                assumptions: vec!["Same flow area as the velocity formula"],
                category: EquationCategory::Airflow,
                source_module: "equations/duct.rs",
                source_function: "airflow_cfm",
            },

            Equation::EquivalentRoundDiameter => EquationMetadata {
                name: "Equivalent Round Diameter",
                description: "Round duct with the same friction loss as a rectangular duct",
                formula_plain: "De = 1.30 * (a*b)^0.625 / (a+b)^0.25",
                reference: Reference::Huebscher { year: 1948 },
                variables: vec![
                    Variable::new("De", "Equivalent diameter", "in"),
                    Variable::new("a", "Duct side", "in"),
                    Variable::new("b", "Duct side", "in"),
                ],
                assumptions: vec!["Square duct: a = b = w"],
                category: EquationCategory::Friction,
                source_module: "equations/duct.rs",
                source_function: "equivalent_round_diameter_in",
            },

            Equation::WrightFrictionRate => EquationMetadata {
                name: "Wright Friction Rate",
                description: "Friction loss per 100 ft of straight duct",
                formula_plain: "f = 0.109136 * Q^1.9 / De^5.02",
                reference: Reference::AshraeFundamentals { year: 2021, chapter: 21 },
                variables: vec![
                    Variable::new("f", "Friction rate", "in.wc/100 ft"),
                    Variable::new("Q", "Airflow", "CFM"),
                    Variable::new("De", "Equivalent diameter", "in"),
                ],
                assumptions: vec![
                    "Galvanized steel, standard air",
                    "Rate only: not scaled by segment length",
                    "Rounded to 2 decimals",
                ],
                category: EquationCategory::Friction,
                source_module: "calculations/airflow.rs",
                source_function: "calculate_friction",
            },

            Equation::FrictionLossOverRun => EquationMetadata {
                name: "Friction Loss Over Run",
                description: "Friction loss across a segment of known length",
                formula_plain: "dP = f * L / 100",
                reference: Reference::Smacna { edition: 1 },
                variables: vec![
                    Variable::new("dP", "Friction loss", "in.wc"),
                    Variable::new("f", "Friction rate", "in.wc/100 ft"),
                    Variable::new("L", "Segment length", "ft"),
                ],
                assumptions: vec!["Straight duct, no fittings", "Rounded to 4 decimals"],
                category: EquationCategory::Friction,
                source_module: "calculations/segment.rs",
                source_function: "analyze_segment",
            },

            Equation::VelocityPressure => EquationMetadata {
                name: "Velocity Pressure",
                description: "Dynamic pressure of moving standard air",
                formula_plain: "Pv = (V / 4005)^2",
                reference: Reference::AshraeFundamentals { year: 2021, chapter: 21 },
                variables: vec![
                    Variable::new("Pv", "Velocity pressure", "in.wc"),
                    Variable::new("V", "Velocity", "fpm"),
                ],
                assumptions: vec!["Standard air density 0.075 lb/ft^3", "Rounded to 4 decimals"],
                category: EquationCategory::Pressure,
                source_module: "calculations/airflow.rs",
                source_function: "calculate_pressure",
            },

            Equation::StandardWidthSelection => EquationMetadata {
                name: "Standard Width Selection",
                description: "Smallest standard width above the current one that brings velocity to target",
                formula_plain: "w' = min { w in W : w > w0, Q / A(w) <= V_target }",
                reference: Reference::Smacna { edition: 1 },
                variables: vec![
                    Variable::new("w0", "Current width", "in"),
                    Variable::new("W", "Standard width table", "in"),
                    Variable::new("V_target", "Target velocity", "fpm"),
                ],
                assumptions: vec!["Falls back to the largest standard width"],
                category: EquationCategory::Sizing,
                source_module: "calculations/sizing.rs",
                source_function: "suggest_optimal_width",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// All categories in display order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![Geometry, Airflow, Friction, Pressure, Sizing];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::CircularEquivalentArea,
    Equation::DuctVelocity,
    Equation::RecoveredAirflow,
    Equation::EquivalentRoundDiameter,
    Equation::WrightFrictionRate,
    Equation::FrictionLossOverRun,
    Equation::VelocityPressure,
    Equation::StandardWidthSelection,
];

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the equations reference document.
///
/// ```rust
/// use duct_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Ductwise Equations Reference"));
/// assert!(markdown.contains("Wright Friction Rate"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(
        r#"# Ductwise Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

Every formula used by the duct calculation engine, with its reference,
source location and assumptions.

## Units

| Quantity | Unit |
|----------|------|
| Width | in |
| Length | ft |
| Airflow | CFM |
| Velocity | fpm |
| Friction rate | in.wc per 100 ft |
| Pressure | in.wc |

---

"#,
    );

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`](src/{})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}
