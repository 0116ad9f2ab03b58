//! # Engine Configuration
//!
//! Physical constants and the standard duct width table used by the
//! calculation engine. The defaults are exported as constants so display
//! layers can show them without recomputing anything.
//!
//! A configuration can also be read from TOML. Any key left out keeps its
//! standard value:
//!
//! ```rust
//! use duct_core::config::EngineConfig;
//!
//! let cfg = EngineConfig::from_toml_str(r#"
//!     max_recommended_velocity_fpm = 1200.0
//!     standard_widths_in = [6.0, 8.0, 10.0, 12.0]
//! "#).unwrap();
//!
//! assert_eq!(cfg.max_recommended_velocity_fpm, 1200.0);
//! assert_eq!(cfg.velocity_pressure_constant, 4005.0);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Standard Constants
// ============================================================================

/// Velocity above which a segment is flagged (fpm)
pub const MAX_RECOMMENDED_VELOCITY_FPM: f64 = 1500.0;

/// Velocity the width suggestion aims for when no target is given (fpm)
pub const DEFAULT_TARGET_VELOCITY_FPM: f64 = 1500.0;

/// Wright friction equation leading coefficient
pub const WRIGHT_COEFFICIENT: f64 = 0.109136;

/// Wright friction equation airflow exponent
pub const WRIGHT_AIRFLOW_EXPONENT: f64 = 1.9;

/// Wright friction equation diameter exponent
pub const WRIGHT_DIAMETER_EXPONENT: f64 = 5.02;

/// Huebscher equivalent-diameter coefficient
pub const EQUIVALENT_DIAMETER_COEFFICIENT: f64 = 1.30;

/// Huebscher exponent on the (a·b) area term
pub const EQUIVALENT_DIAMETER_AREA_EXPONENT: f64 = 0.625;

/// Huebscher exponent on the (a+b) perimeter term
pub const EQUIVALENT_DIAMETER_PERIMETER_EXPONENT: f64 = 0.25;

/// Standard-air velocity pressure constant: Pv = (V / 4005)²
pub const VELOCITY_PRESSURE_CONSTANT: f64 = 4005.0;

/// Square inches per square foot
pub const SQ_IN_PER_SQ_FT: f64 = 144.0;

/// Standard square duct sizes available for suggestion (inches, ascending)
pub const STANDARD_WIDTHS_IN: [f64; 17] = [
    4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0, 26.0, 28.0, 30.0, 32.0, 34.0, 36.0,
];

// ============================================================================
// Coefficient Groups
// ============================================================================

/// Coefficients of the Wright friction-loss equation
/// `f = C × Q^a / D^b` (in.wc per 100 ft, Q in CFM, D in inches).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrightCoefficients {
    pub coefficient: f64,
    pub airflow_exponent: f64,
    pub diameter_exponent: f64,
}

impl Default for WrightCoefficients {
    fn default() -> Self {
        Self {
            coefficient: WRIGHT_COEFFICIENT,
            airflow_exponent: WRIGHT_AIRFLOW_EXPONENT,
            diameter_exponent: WRIGHT_DIAMETER_EXPONENT,
        }
    }
}

/// Coefficients of the Huebscher equivalent round diameter
/// `De = C × (a·b)^p / (a+b)^q`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquivalentDiameterCoefficients {
    pub coefficient: f64,
    pub area_exponent: f64,
    pub perimeter_exponent: f64,
}

impl Default for EquivalentDiameterCoefficients {
    fn default() -> Self {
        Self {
            coefficient: EQUIVALENT_DIAMETER_COEFFICIENT,
            area_exponent: EQUIVALENT_DIAMETER_AREA_EXPONENT,
            perimeter_exponent: EQUIVALENT_DIAMETER_PERIMETER_EXPONENT,
        }
    }
}

// ============================================================================
// Engine Configuration
// ============================================================================

/// Immutable configuration closed over by a [`CalculationEngine`].
///
/// [`CalculationEngine`]: crate::calculations::CalculationEngine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Velocity above which validation warns (fpm)
    pub max_recommended_velocity_fpm: f64,

    /// Target used by `suggest_width` (fpm)
    pub default_target_velocity_fpm: f64,

    /// Velocity pressure constant (4005 for standard air)
    pub velocity_pressure_constant: f64,

    /// Area conversion factor from in² to ft²
    pub sq_in_per_sq_ft: f64,

    /// Ascending list of standard duct widths (inches)
    pub standard_widths_in: Vec<f64>,

    /// Wright friction equation coefficients
    pub wright: WrightCoefficients,

    /// Huebscher equivalent diameter coefficients
    pub equivalent_diameter: EquivalentDiameterCoefficients,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_recommended_velocity_fpm: MAX_RECOMMENDED_VELOCITY_FPM,
            default_target_velocity_fpm: DEFAULT_TARGET_VELOCITY_FPM,
            velocity_pressure_constant: VELOCITY_PRESSURE_CONSTANT,
            sq_in_per_sq_ft: SQ_IN_PER_SQ_FT,
            standard_widths_in: STANDARD_WIDTHS_IN.to_vec(),
            wright: WrightCoefficients::default(),
            equivalent_diameter: EquivalentDiameterCoefficients::default(),
        }
    }
}

impl EngineConfig {
    /// The standard-air, galvanized-steel configuration.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> CalcResult<Self> {
        let cfg: EngineConfig = toml::from_str(content).map_err(|e| CalcError::serialization(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a configuration file (TOML) from disk.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        let cfg = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), widths = cfg.standard_widths_in.len(), "loaded engine config");
        Ok(cfg)
    }

    /// Render the configuration as TOML (for writing a starter file).
    pub fn to_toml_string(&self) -> CalcResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::serialization(e.to_string()))
    }

    /// Largest standard width, if the table is non-empty
    pub fn largest_standard_width(&self) -> Option<f64> {
        self.standard_widths_in.last().copied()
    }

    /// Check that every constant is usable.
    pub fn validate(&self) -> CalcResult<()> {
        let positives = [
            ("max_recommended_velocity_fpm", self.max_recommended_velocity_fpm),
            ("default_target_velocity_fpm", self.default_target_velocity_fpm),
            ("wright.coefficient", self.wright.coefficient),
            ("wright.airflow_exponent", self.wright.airflow_exponent),
            ("wright.diameter_exponent", self.wright.diameter_exponent),
            ("equivalent_diameter.coefficient", self.equivalent_diameter.coefficient),
            ("velocity_pressure_constant", self.velocity_pressure_constant),
            ("sq_in_per_sq_ft", self.sq_in_per_sq_ft),
        ];
        for (field, value) in positives {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_config(field, format!("must be a positive number, got {value}")));
            }
        }

        if self.standard_widths_in.is_empty() {
            return Err(CalcError::invalid_config("standard_widths_in", "must list at least one width"));
        }
        if self.standard_widths_in.iter().any(|w| !w.is_finite() || *w <= 0.0) {
            return Err(CalcError::invalid_config("standard_widths_in", "widths must be positive numbers"));
        }
        if self.standard_widths_in.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(CalcError::invalid_config("standard_widths_in", "widths must be strictly ascending"));
        }
        Ok(())
    }
}
