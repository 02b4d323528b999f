//! PII module - findings produced by the detection pipeline
//!
//! Findings arrive verbatim from a CSV export and are never mutated; the
//! parser that loads them lives in `recordsdesk-pii`.

use serde::{Deserialize, Serialize};

/// Fixed enumeration of PII categories the detector reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    /// Social security number
    Ssn,
    /// Email address
    Email,
    /// Phone number
    Phone,
    /// Street address
    Address,
    /// Person name
    Name,
    /// Date of birth
    DateOfBirth,
    /// Driver's license number
    DriversLicense,
    /// Bank or card account number
    FinancialAccount,
}

impl PiiCategory {
    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PiiCategory::Ssn => "ssn",
            PiiCategory::Email => "email",
            PiiCategory::Phone => "phone",
            PiiCategory::Address => "address",
            PiiCategory::Name => "name",
            PiiCategory::DateOfBirth => "date_of_birth",
            PiiCategory::DriversLicense => "drivers_license",
            PiiCategory::FinancialAccount => "financial_account",
        }
    }

    /// Parse a category from a CSV field
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ssn" => Some(PiiCategory::Ssn),
            "email" => Some(PiiCategory::Email),
            "phone" => Some(PiiCategory::Phone),
            "address" => Some(PiiCategory::Address),
            "name" => Some(PiiCategory::Name),
            "date_of_birth" => Some(PiiCategory::DateOfBirth),
            "drivers_license" => Some(PiiCategory::DriversLicense),
            "financial_account" => Some(PiiCategory::FinancialAccount),
            _ => None,
        }
    }
}

/// Page-coordinate bounding box of a finding, in PDF points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Box width
    pub width: f64,
    /// Box height
    pub height: f64,
}

/// A single detected instance of PII at a page location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiiFinding {
    /// Record the finding belongs to
    pub record_id: String,
    /// File the finding was detected in
    pub file_name: String,
    /// Page number within the file (1-based)
    pub page_number: u32,
    /// Detected category
    pub category: PiiCategory,
    /// Detector confidence in [0, 1]
    pub confidence: f64,
    /// Location of the match on the page
    pub bbox: BoundingBox,
    /// The matched text itself
    pub text: String,
    /// Detector's free-text reasoning
    pub reasoning: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for cat in [
            PiiCategory::Ssn,
            PiiCategory::Email,
            PiiCategory::Phone,
            PiiCategory::Address,
            PiiCategory::Name,
            PiiCategory::DateOfBirth,
            PiiCategory::DriversLicense,
            PiiCategory::FinancialAccount,
        ] {
            assert_eq!(PiiCategory::parse(cat.as_str()), Some(cat));
        }
    }

    #[test]
    fn test_category_parse_unknown() {
        assert_eq!(PiiCategory::parse("passport"), None);
        assert_eq!(PiiCategory::parse(""), None);
    }
}
