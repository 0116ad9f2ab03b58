//! # Duct Materials
//!
//! Material annotation carried by a drawn segment. The friction formula is the
//! Wright fit for galvanized steel; other materials are accepted but flagged.

use serde::{Deserialize, Serialize};

/// Duct construction material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DuctMaterial {
    #[default]
    #[serde(rename = "galvanized-steel")]
    GalvanizedSteel,
    #[serde(rename = "aluminum")]
    Aluminum,
    #[serde(rename = "stainless-steel")]
    StainlessSteel,
    #[serde(rename = "fiberglass-duct-board")]
    FiberglassDuctBoard,
    #[serde(rename = "flexible-duct")]
    FlexibleDuct,
}

impl DuctMaterial {
    /// All materials for UI selection
    pub const ALL: [DuctMaterial; 5] = [
        DuctMaterial::GalvanizedSteel,
        DuctMaterial::Aluminum,
        DuctMaterial::StainlessSteel,
        DuctMaterial::FiberglassDuctBoard,
        DuctMaterial::FlexibleDuct,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            DuctMaterial::GalvanizedSteel => "Galvanized Steel",
            DuctMaterial::Aluminum => "Aluminum",
            DuctMaterial::StainlessSteel => "Stainless Steel",
            DuctMaterial::FiberglassDuctBoard => "Fiberglass Duct Board",
            DuctMaterial::FlexibleDuct => "Flexible Duct",
        }
    }

    /// Short identifier, matching the serialized form
    pub fn code(&self) -> &'static str {
        match self {
            DuctMaterial::GalvanizedSteel => "galvanized-steel",
            DuctMaterial::Aluminum => "aluminum",
            DuctMaterial::StainlessSteel => "stainless-steel",
            DuctMaterial::FiberglassDuctBoard => "fiberglass-duct-board",
            DuctMaterial::FlexibleDuct => "flexible-duct",
        }
    }

    /// Look up a material by code or display name (case-insensitive)
    pub fn from_name(name: &str) -> Option<DuctMaterial> {
        let wanted = name.trim();
        DuctMaterial::ALL
            .iter()
            .copied()
            .find(|m| m.code().eq_ignore_ascii_case(wanted) || m.display_name().eq_ignore_ascii_case(wanted))
    }

    /// Whether the Wright friction fit (galvanized steel) describes this material.
    ///
    /// Aluminum and stainless are smooth sheet metal close to the galvanized
    /// roughness; duct board and flex are markedly rougher.
    pub fn on_wright_basis(&self) -> bool {
        matches!(
            self,
            DuctMaterial::GalvanizedSteel | DuctMaterial::Aluminum | DuctMaterial::StainlessSteel
        )
    }
}

impl std::fmt::Display for DuctMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(DuctMaterial::from_name("aluminum"), Some(DuctMaterial::Aluminum));
        assert_eq!(DuctMaterial::from_name("Flexible Duct"), Some(DuctMaterial::FlexibleDuct));
        assert_eq!(DuctMaterial::from_name(" GALVANIZED-STEEL "), Some(DuctMaterial::GalvanizedSteel));
        assert_eq!(DuctMaterial::from_name("cardboard"), None);
    }

    #[test]
    fn test_serialized_form_matches_code() {
        for m in DuctMaterial::ALL {
            let json = serde_json::to_string(&m).unwrap();
            assert_eq!(json, format!("\"{}\"", m.code()));
        }
    }

    #[test]
    fn test_wright_basis() {
        assert!(DuctMaterial::default().on_wright_basis());
        assert!(!DuctMaterial::FlexibleDuct.on_wright_basis());
    }
}
