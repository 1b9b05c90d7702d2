// ============================================================================
// Dimensional & Billable Weight Calculator
// ============================================================================

use crate::domain::{Dimensions, PricingConstants, WeightResult, WeightUnit};
use crate::numeric::{ceil_to_tenth, div_or_overflow, PricingError, PricingResult};
use rust_decimal::Decimal;

/// Volumetric weight in kilograms, rounded up to one decimal place.
///
/// Inch measurements are converted to centimeters before applying
/// `l × w × h / divisor`.
///
/// # Errors
/// `InvalidDimension` if any side is zero or negative, `Overflow` if the
/// box is too large to measure.
pub fn compute_dimensional_weight(
    constants: &PricingConstants,
    dims: &Dimensions,
) -> PricingResult<Decimal> {
    dims.validate()?;
    let raw = div_or_overflow(
        "dimensional weight",
        dims.volume_cm3()?,
        constants.dimensional_weight_divisor,
    )?;
    Ok(ceil_to_tenth(raw))
}

/// Weight the carrier will charge for: the larger of actual and volumetric.
///
/// # Errors
/// `InvalidWeight` for a non-positive actual weight, `InvalidDimension` for
/// a non-positive side.
pub fn compute_billable_weight(
    constants: &PricingConstants,
    actual_weight: Decimal,
    dims: &Dimensions,
) -> PricingResult<WeightResult> {
    if actual_weight <= Decimal::ZERO {
        return Err(PricingError::InvalidWeight {
            value: actual_weight,
        });
    }

    let dimensional_weight = compute_dimensional_weight(constants, dims)?;

    Ok(WeightResult {
        actual_weight,
        dimensional_weight,
        billable_weight: actual_weight.max(dimensional_weight),
        unit: WeightUnit::Kg,
    })
}
