// ============================================================================
// Photo Request Cost Calculator
// Tiered per-photo pricing with a billing ceiling
// ============================================================================

use crate::domain::{PhotoRequestCost, PricingConstants};
use crate::numeric::clamp_count;
use rust_decimal::Decimal;

/// Price a standalone photo request.
///
/// The photo count is clamped into `[0, max_additional_photos]` before
/// pricing; excess photos are silently not billed. The first photo carries
/// the setup cost, each further photo is cheaper.
pub fn compute_photo_request_cost(
    constants: &PricingConstants,
    photo_count: i64,
    include_information: bool,
) -> PhotoRequestCost {
    let billed = clamp_count(photo_count, constants.max_additional_photos);
    if i64::from(billed) != photo_count {
        tracing::debug!(
            requested = photo_count,
            billed,
            "photo count clamped to billable range"
        );
    }

    let photos_cost = match billed {
        0 => Decimal::ZERO,
        n => {
            constants.first_photo_fee
                + Decimal::from(n - 1) * constants.additional_photo_fee
        }
    };

    let information_cost = if include_information {
        constants.information_request_fee
    } else {
        Decimal::ZERO
    };

    PhotoRequestCost::new(billed, photos_cost, information_cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constants() -> PricingConstants {
        PricingConstants::standard()
    }

    #[test]
    fn test_no_photos_no_information() {
        let cost = compute_photo_request_cost(&constants(), 0, false);
        assert_eq!(cost.photos_cost, Decimal::ZERO);
        assert_eq!(cost.information_cost, Decimal::ZERO);
        assert_eq!(cost.total, Decimal::ZERO);
    }

    #[test]
    fn test_tiered_photo_pricing() {
        assert_eq!(
            compute_photo_request_cost(&constants(), 1, false).photos_cost,
            Decimal::from(40)
        );
        assert_eq!(
            compute_photo_request_cost(&constants(), 3, false).photos_cost,
            Decimal::from(60)
        );
    }

    #[test]
    fn test_excess_photos_are_clamped() {
        let capped = compute_photo_request_cost(&constants(), 15, false);
        let max = compute_photo_request_cost(&constants(), 10, false);
        assert_eq!(capped, max);
        assert_eq!(capped.photo_count, 10);
        assert_eq!(capped.photos_cost, Decimal::from(130));
    }

    #[test]
    fn test_negative_count_bills_nothing() {
        let cost = compute_photo_request_cost(&constants(), -2, false);
        assert_eq!(cost.photo_count, 0);
        assert_eq!(cost.total, Decimal::ZERO);
    }

    #[test]
    fn test_information_request() {
        let cost = compute_photo_request_cost(&constants(), 2, true);
        assert_eq!(cost.photos_cost, Decimal::from(50));
        assert_eq!(cost.information_cost, Decimal::from(30));
        assert_eq!(cost.total, Decimal::from(80));
    }
}
