use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of product families the works can assemble.
///
/// A family groups the variants that are produced together: swapping the
/// family swaps the whole product pair, never one half of it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleFamily {
    #[serde(rename = "modern")]
    Modern,
    #[serde(rename = "offroad")]
    Offroad,
}

impl VehicleFamily {
    /// Every supported family, in showroom tour order.
    pub const ALL: [VehicleFamily; 2] = [VehicleFamily::Modern, VehicleFamily::Offroad];

    /// Resolves a family from its name, ignoring case and surrounding
    /// whitespace.
    ///
    /// # Arguments
    /// * `name` - Family name, e.g. `"modern"` or `"OFFROAD"`
    ///
    /// # Returns
    /// * `Some(VehicleFamily)` - Matching family
    /// * `None` - No family by that name; a normal negative lookup
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "modern" => Some(Self::Modern),
            "offroad" => Some(Self::Offroad),
            _ => None,
        }
    }

    /// Returns the canonical lowercase family name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Offroad => "offroad",
        }
    }

    /// Comma-separated list of every supported family name, for messages.
    pub fn known_names() -> String {
        Self::ALL.map(|family| family.name()).join(", ")
    }
}

impl fmt::Display for VehicleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
