// ============================================================================
// Package Value Objects
// Physical measurements and consolidation preferences supplied by callers
// ============================================================================

use crate::numeric::{mul_or_overflow, PricingError, PricingResult};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Centimeters per inch
pub const CM_PER_INCH: Decimal = Decimal::from_parts(254, 0, 0, false, 2);

// ============================================================================
// Units
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LengthUnit {
    #[default]
    Cm,
    In,
}

impl LengthUnit {
    /// Factor converting one unit of `self` into centimeters
    pub fn to_cm_factor(self) -> Decimal {
        match self {
            LengthUnit::Cm => Decimal::ONE,
            LengthUnit::In => CM_PER_INCH,
        }
    }
}

/// Unit of every weight the engine reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WeightUnit {
    #[default]
    Kg,
}

// ============================================================================
// Dimensions
// ============================================================================

/// Outer box measurements of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    pub length: Decimal,
    pub width: Decimal,
    pub height: Decimal,
    #[cfg_attr(feature = "serde", serde(default))]
    pub unit: LengthUnit,
}

impl Dimensions {
    pub fn new(length: Decimal, width: Decimal, height: Decimal, unit: LengthUnit) -> Self {
        Self {
            length,
            width,
            height,
            unit,
        }
    }

    /// Measurements in centimeters
    pub fn cm(length: Decimal, width: Decimal, height: Decimal) -> Self {
        Self::new(length, width, height, LengthUnit::Cm)
    }

    /// Measurements in inches
    pub fn inches(length: Decimal, width: Decimal, height: Decimal) -> Self {
        Self::new(length, width, height, LengthUnit::In)
    }

    /// Reject any side that is zero or negative.
    pub fn validate(&self) -> PricingResult<()> {
        for (axis, value) in [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ] {
            if value <= Decimal::ZERO {
                return Err(PricingError::InvalidDimension { axis, value });
            }
        }
        Ok(())
    }

    /// The same box expressed in centimeters.
    ///
    /// # Errors
    /// `Overflow` if a side no longer fits once converted.
    pub fn to_centimeters(&self) -> PricingResult<Self> {
        let factor = self.unit.to_cm_factor();
        Ok(Self::cm(
            mul_or_overflow("length", self.length, factor)?,
            mul_or_overflow("width", self.width, factor)?,
            mul_or_overflow("height", self.height, factor)?,
        ))
    }

    /// Volume in cubic centimeters
    pub fn volume_cm3(&self) -> PricingResult<Decimal> {
        let cm = self.to_centimeters()?;
        let face = mul_or_overflow("volume", cm.length, cm.width)?;
        mul_or_overflow("volume", face, cm.height)
    }
}

// ============================================================================
// Consolidation Preferences
// ============================================================================

/// Optional services attached to a consolidation request.
///
/// Flags are independent; any combination is valid. Basic packaging photos
/// are always free and have no flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConsolidationPreferences {
    /// Strip original retailer packaging (free)
    pub remove_packaging: bool,
    /// Add bubble wrap and reinforced corners
    pub add_protection: bool,
    /// Photograph contents after unpacking
    pub request_unpacked_photos: bool,
}

impl ConsolidationPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remove_packaging(mut self, enabled: bool) -> Self {
        self.remove_packaging = enabled;
        self
    }

    pub fn with_protection(mut self, enabled: bool) -> Self {
        self.add_protection = enabled;
        self
    }

    pub fn with_unpacked_photos(mut self, enabled: bool) -> Self {
        self.request_unpacked_photos = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_convert_to_centimeters() {
        let dims = Dimensions::inches(Decimal::from(10), Decimal::from(5), Decimal::ONE);
        let cm = dims.to_centimeters().unwrap();
        assert_eq!(cm.unit, LengthUnit::Cm);
        assert_eq!(cm.length, Decimal::new(254, 1));
        assert_eq!(cm.width, Decimal::new(127, 1));
        assert_eq!(cm.height, Decimal::new(254, 2));
    }

    #[test]
    fn test_centimeters_unchanged() {
        let dims = Dimensions::cm(Decimal::from(30), Decimal::from(20), Decimal::from(15));
        assert_eq!(dims.to_centimeters(), Ok(dims));
        assert_eq!(dims.volume_cm3(), Ok(Decimal::from(9000)));
    }

    #[test]
    fn test_oversized_box_reports_overflow() {
        let side = Decimal::from(10_000_000_000i64);
        assert_eq!(
            Dimensions::cm(side, side, side).volume_cm3(),
            Err(PricingError::Overflow { quantity: "volume" })
        );
        assert_eq!(
            Dimensions::inches(Decimal::MAX, Decimal::ONE, Decimal::ONE).to_centimeters(),
            Err(PricingError::Overflow { quantity: "length" })
        );
    }

    #[test]
    fn test_validate_rejects_non_positive_sides() {
        let dims = Dimensions::cm(Decimal::from(30), Decimal::ZERO, Decimal::from(15));
        assert_eq!(
            dims.validate(),
            Err(PricingError::InvalidDimension {
                axis: "width",
                value: Decimal::ZERO
            })
        );

        let dims = Dimensions::cm(Decimal::from(30), Decimal::from(20), Decimal::from(-1));
        assert!(matches!(
            dims.validate(),
            Err(PricingError::InvalidDimension { axis: "height", .. })
        ));
    }

    #[test]
    fn test_preferences_builder() {
        let prefs = ConsolidationPreferences::new()
            .with_protection(true)
            .with_unpacked_photos(true);
        assert!(prefs.add_protection);
        assert!(prefs.request_unpacked_photos);
        assert!(!prefs.remove_packaging);
    }
}
