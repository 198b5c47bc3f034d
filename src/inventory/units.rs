// ABOUTME: Quantity formats and unit conversion for fridge ingredients
// ABOUTME: Converts display quantities to base units and formats them back for display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use ymeal_core::constants::units::{
    GRAMS_PER_KG, ML_PER_CL, STEP_CENTILITERS, STEP_COUNT, STEP_DEFAULT, STEP_KILOGRAMS,
};

/// Display unit of an inventory entry
///
/// Quantities are always stored in the base unit of the format's dimension
/// (units, grams or milliliters). The format only decides how the stored
/// amount is rendered and how big one adjustment step is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum QuantityFormat {
    /// Whole items, stored as a count
    #[default]
    #[serde(rename = "Nombre")]
    Count,
    /// Weight in grams (base unit)
    #[serde(rename = "Grammes")]
    Grams,
    /// Weight displayed in kilograms, stored in grams
    #[serde(rename = "Kilogrammes")]
    Kilograms,
    /// Volume in milliliters (base unit)
    #[serde(rename = "Millilitres")]
    Milliliters,
    /// Volume displayed in centiliters, stored in milliliters
    #[serde(rename = "Centilitres")]
    Centiliters,
}

/// Physical dimension shared by formats that can be summed together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitDimension {
    /// Counted items
    Count,
    /// Weight
    Mass,
    /// Volume
    Volume,
}

impl QuantityFormat {
    /// Every supported format, in presentation order
    pub const ALL: [Self; 5] = [
        Self::Count,
        Self::Grams,
        Self::Kilograms,
        Self::Milliliters,
        Self::Centiliters,
    ];

    /// Multiplier from a displayed amount to the stored base amount
    #[must_use]
    pub const fn base_factor(&self) -> f64 {
        match self {
            Self::Kilograms => GRAMS_PER_KG,
            Self::Centiliters => ML_PER_CL,
            Self::Count | Self::Grams | Self::Milliliters => 1.0,
        }
    }

    /// Dimension of the base unit this format stores in
    #[must_use]
    pub const fn dimension(&self) -> UnitDimension {
        match self {
            Self::Count => UnitDimension::Count,
            Self::Grams | Self::Kilograms => UnitDimension::Mass,
            Self::Milliliters | Self::Centiliters => UnitDimension::Volume,
        }
    }

    /// Whether base amounts of `other` can be added to base amounts of `self`
    #[must_use]
    pub fn is_compatible_with(&self, other: Self) -> bool {
        self.dimension() == other.dimension()
    }

    /// Get the abbreviation for display
    #[must_use]
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::Count => "x",
            Self::Grams => "g",
            Self::Kilograms => "kg",
            Self::Milliliters => "ml",
            Self::Centiliters => "cl",
        }
    }

    /// Persisted label of this format
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Count => "Nombre",
            Self::Grams => "Grammes",
            Self::Kilograms => "Kilogrammes",
            Self::Milliliters => "Millilitres",
            Self::Centiliters => "Centilitres",
        }
    }

    /// Parse a persisted label or a unit abbreviation, case-insensitively
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|format| {
            format.label().to_lowercase() == normalized || format.abbreviation() == normalized
        })
    }
}

impl Display for QuantityFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// Convert a displayed quantity into the base unit of `format`
///
/// No rounding is applied; fractional inputs are preserved.
///
/// ```rust
/// use ymeal::inventory::units::{convert_to_base, QuantityFormat};
///
/// assert_eq!(convert_to_base(1.5, QuantityFormat::Kilograms), 1500.0);
/// assert_eq!(convert_to_base(25.0, QuantityFormat::Centiliters), 250.0);
/// assert_eq!(convert_to_base(3.0, QuantityFormat::Count), 3.0);
/// ```
#[must_use]
pub fn convert_to_base(quantity: f64, format: QuantityFormat) -> f64 {
    quantity * format.base_factor()
}

/// Convert a base amount back to the displayed unit of `format` without rounding
#[must_use]
pub fn convert_from_base(base_amount: f64, format: QuantityFormat) -> f64 {
    base_amount / format.base_factor()
}

/// Render a base amount in the display unit of `format`
///
/// Kilograms keep two decimals; every other format is shown as a whole number.
///
/// ```rust
/// use ymeal::inventory::units::{display_quantity, QuantityFormat};
///
/// assert_eq!(display_quantity(1500.0, QuantityFormat::Kilograms), "1.50 kg");
/// assert_eq!(display_quantity(500.0, QuantityFormat::Milliliters), "500 ml");
/// assert_eq!(display_quantity(2.0, QuantityFormat::Count), "2 x");
/// ```
#[must_use]
pub fn display_quantity(base_amount: f64, format: QuantityFormat) -> String {
    let shown = convert_from_base(base_amount, format);
    match format {
        QuantityFormat::Kilograms => format!("{shown:.2} {}", format.abbreviation()),
        QuantityFormat::Count
        | QuantityFormat::Grams
        | QuantityFormat::Milliliters
        | QuantityFormat::Centiliters => {
            // round() first so halves go away from zero instead of to even
            format!("{:.0} {}", shown.round(), format.abbreviation())
        }
    }
}

/// Increment/decrement granularity of `format`, in base units
#[must_use]
pub const fn step_for(format: QuantityFormat) -> f64 {
    match format {
        QuantityFormat::Count => STEP_COUNT,
        QuantityFormat::Centiliters => STEP_CENTILITERS,
        QuantityFormat::Kilograms => STEP_KILOGRAMS,
        QuantityFormat::Grams | QuantityFormat::Milliliters => STEP_DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        assert!(QuantityFormat::Grams.is_compatible_with(QuantityFormat::Kilograms));
        assert!(QuantityFormat::Centiliters.is_compatible_with(QuantityFormat::Milliliters));
        assert!(!QuantityFormat::Count.is_compatible_with(QuantityFormat::Grams));
        assert!(!QuantityFormat::Milliliters.is_compatible_with(QuantityFormat::Grams));
    }

    #[test]
    fn test_centiliters_display_drops_decimals() {
        assert_eq!(display_quantity(250.0, QuantityFormat::Centiliters), "25 cl");
        assert_eq!(display_quantity(256.0, QuantityFormat::Centiliters), "26 cl");
    }

    #[test]
    fn test_from_str_lossy() {
        assert_eq!(
            QuantityFormat::from_str_lossy("kilogrammes"),
            Some(QuantityFormat::Kilograms)
        );
        assert_eq!(
            QuantityFormat::from_str_lossy("ML"),
            Some(QuantityFormat::Milliliters)
        );
        assert_eq!(QuantityFormat::from_str_lossy("cups"), None);
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&QuantityFormat::Milliliters).unwrap();
        assert_eq!(json, "\"Millilitres\"");
        let parsed: QuantityFormat = serde_json::from_str("\"Kilogrammes\"").unwrap();
        assert_eq!(parsed, QuantityFormat::Kilograms);
    }
}
