//! Data Model: PayloadType, ParsedBrCode
use serde::{Deserialize, Serialize};

/// Point of initiation value (tag 01) marking a single-use payload.
pub const DYNAMIC_POINT_OF_INITIATION: &str = "12";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayloadType {
    /// Reusable code; tag 01 absent or anything other than `12`
    Static,
    /// Single-use code; tag 01 = `12`
    Dynamic,
}

impl PayloadType {
    pub fn from_point_of_initiation(value: Option<&str>) -> Self {
        match value {
            Some(DYNAMIC_POINT_OF_INITIATION) => Self::Dynamic,
            _ => Self::Static,
        }
    }
}

/// Fields extracted from one BR Code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedBrCode {
    /// Input with all whitespace removed
    pub raw: String,
    #[serde(rename = "type")]
    pub payload_type: PayloadType,
    /// Tag 00
    pub payload_format_indicator: String,
    /// Tag 01
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub point_of_initiation_method: Option<String>,
    /// Tag 52
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub merchant_category_code: Option<String>,
    /// Tag 53 (ISO 4217 numeric, `986` for BRL)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub transaction_currency: Option<String>,
    /// Tag 54
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub transaction_amount: Option<f64>,
    /// Tag 58
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub country_code: Option<String>,
    /// Tag 59
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub merchant_name: Option<String>,
    /// Tag 60
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub merchant_city: Option<String>,
    /// Tag 61
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub postal_code: Option<String>,
    /// Tag 62, sub-tag 05
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub txid: Option<String>,
    /// Sub-tag 01 of the PIX merchant account template
    pub pix_key: String,
    /// Sub-tag 02 of the PIX merchant account template
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub info_adicional: Option<String>,
    /// Tag 63, uppercased
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub crc: Option<String>,
}

impl ParsedBrCode {
    pub fn is_dynamic(&self) -> bool {
        self.payload_type == PayloadType::Dynamic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(PayloadType::from_point_of_initiation(Some("12")), PayloadType::Dynamic);
        assert_eq!(PayloadType::from_point_of_initiation(Some("11")), PayloadType::Static);
        assert_eq!(PayloadType::from_point_of_initiation(Some("")), PayloadType::Static);
        assert_eq!(PayloadType::from_point_of_initiation(None), PayloadType::Static);
    }

    #[test]
    fn test_payload_type_wire_names() {
        assert_eq!(serde_json::to_string(&PayloadType::Static).unwrap(), "\"STATIC\"");
        assert_eq!(serde_json::to_string(&PayloadType::Dynamic).unwrap(), "\"DYNAMIC\"");
    }
}
