//! Parse profiles
//!
//! Controls how strictly a payload is validated. The lenient profile accepts
//! payloads without a checksum; strict requires tag 63.

use crate::error::BrCodeError;
use serde::{Deserialize, Serialize};

/// GUI of the PIX arrangement in a merchant account template.
pub const PIX_GUI: &str = "BR.GOV.BCB.PIX";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseProfile {
    /// Profile name (e.g., "lenient@1.0", "strict@1.0")
    pub name: String,

    /// Fail when tag 63 is absent instead of skipping the checksum
    pub require_checksum: bool,

    /// Arrangement GUI that carries the PIX key (case-insensitive)
    pub pix_gui: String,
}

impl ParseProfile {
    pub fn lenient() -> Self {
        Self {
            name: "lenient@1.0".to_string(),
            require_checksum: false,
            pix_gui: PIX_GUI.to_string(),
        }
    }

    pub fn strict() -> Self {
        Self {
            name: "strict@1.0".to_string(),
            require_checksum: true,
            pix_gui: PIX_GUI.to_string(),
        }
    }

    /// Load profile from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, BrCodeError> {
        serde_yaml::from_str(yaml).map_err(|e| BrCodeError::Profile(e.to_string()))
    }

    /// Get profile by mode name
    pub fn for_mode(mode: &str) -> Self {
        match mode {
            "strict" => Self::strict(),
            _ => Self::lenient(),
        }
    }
}

impl Default for ParseProfile {
    fn default() -> Self {
        Self::lenient()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        let profile = ParseProfile::default();
        assert!(!profile.require_checksum);
        assert_eq!(profile.pix_gui, PIX_GUI);
    }

    #[test]
    fn test_for_mode() {
        assert!(ParseProfile::for_mode("strict").require_checksum);
        assert!(!ParseProfile::for_mode("lenient").require_checksum);
        assert_eq!(ParseProfile::for_mode("unknown"), ParseProfile::lenient());
    }

    #[test]
    fn test_from_yaml_fills_missing_fields() {
        let profile = ParseProfile::from_yaml("name: acquirer\nrequire_checksum: true\n").unwrap();
        assert_eq!(profile.name, "acquirer");
        assert!(profile.require_checksum);
        assert_eq!(profile.pix_gui, PIX_GUI);
    }

    #[test]
    fn test_from_yaml_rejects_bad_types() {
        let err = ParseProfile::from_yaml("require_checksum: sometimes").unwrap_err();
        assert!(matches!(err, BrCodeError::Profile(_)));
    }
}
