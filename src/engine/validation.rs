// ============================================================================
// Request Validation
// Checks for the request-handling layer, run before pricing
// ============================================================================
//
// The calculators clamp counts instead of failing; handlers that want to
// reject bad input outright call these first.

use crate::numeric::{PricingError, PricingResult};
use rust_decimal::Decimal;

/// Accept a package count from a request, rejecting negatives.
pub fn validate_package_count(count: i64) -> PricingResult<u32> {
    u32::try_from(count).map_err(|_| PricingError::InvalidPackageCount { count })
}

/// Accept a declared value from a request, rejecting negatives.
pub fn validate_declared_value(value: Decimal) -> PricingResult<Decimal> {
    if value < Decimal::ZERO {
        return Err(PricingError::InvalidDeclaredValue { value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_count() {
        assert_eq!(validate_package_count(0), Ok(0));
        assert_eq!(validate_package_count(4), Ok(4));
        assert_eq!(
            validate_package_count(-1),
            Err(PricingError::InvalidPackageCount { count: -1 })
        );
    }

    #[test]
    fn test_declared_value() {
        assert_eq!(
            validate_declared_value(Decimal::from(120)),
            Ok(Decimal::from(120))
        );
        assert!(validate_declared_value(Decimal::new(-1, 2)).is_err());
    }
}
