// ============================================================================
// Consolidation Cost Calculator
// Per-package fee with a cap, plus optional service surcharges
// ============================================================================

use crate::domain::{ConsolidationPreferences, CostBreakdown, PricingConstants};
use rust_decimal::Decimal;

/// Price a consolidation of `package_count` packages.
///
/// The per-package part is capped at `max_consolidation_fee`, so combining
/// many packages never becomes prohibitively expensive. Negative counts are
/// clamped to zero rather than rejected.
///
/// # Example
/// ```text
/// 3 packages, no extras   -> base 150, total 150
/// 10 packages, protection -> base 250 (capped), protection 50, total 300
/// ```
pub fn compute_consolidation_cost(
    constants: &PricingConstants,
    package_count: i64,
    preferences: &ConsolidationPreferences,
) -> CostBreakdown {
    let base = consolidation_base_fee(constants, package_count);

    let protection = if preferences.add_protection {
        constants.extra_protection_fee
    } else {
        Decimal::ZERO
    };

    let photos = if preferences.request_unpacked_photos {
        constants.unpacked_photos_fee
    } else {
        Decimal::ZERO
    };

    CostBreakdown::new(base, protection, photos)
}

/// Capped per-package fee, without any preference surcharge.
pub(crate) fn consolidation_base_fee(constants: &PricingConstants, package_count: i64) -> Decimal {
    if package_count < 0 {
        tracing::warn!(package_count, "negative package count clamped to zero");
    }
    let count = Decimal::from(package_count.max(0));
    count
        .saturating_mul(constants.fee_per_package)
        .min(constants.max_consolidation_fee)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constants() -> PricingConstants {
        PricingConstants::standard()
    }

    #[test]
    fn test_base_fee_per_package() {
        let cost = compute_consolidation_cost(&constants(), 3, &ConsolidationPreferences::new());
        assert_eq!(cost.base, Decimal::from(150));
        assert_eq!(cost.protection, Decimal::ZERO);
        assert_eq!(cost.photos, Decimal::ZERO);
        assert_eq!(cost.total, Decimal::from(150));
    }

    #[test]
    fn test_base_fee_is_capped() {
        let cost = compute_consolidation_cost(&constants(), 10, &ConsolidationPreferences::new());
        assert_eq!(cost.base, Decimal::from(250));

        let cost = compute_consolidation_cost(&constants(), 5, &ConsolidationPreferences::new());
        assert_eq!(cost.base, Decimal::from(250));

        let cost = compute_consolidation_cost(&constants(), i64::MAX, &ConsolidationPreferences::new());
        assert_eq!(cost.base, Decimal::from(250));
    }

    #[test]
    fn test_huge_fee_saturates_before_cap() {
        let steep = constants().with_consolidation_fees(Decimal::MAX, Decimal::MAX);
        let cost = compute_consolidation_cost(&steep, 3, &ConsolidationPreferences::new());
        assert_eq!(cost.base, Decimal::MAX);
    }

    #[test]
    fn test_zero_and_negative_counts() {
        let prefs = ConsolidationPreferences::new();
        assert_eq!(
            compute_consolidation_cost(&constants(), 0, &prefs).base,
            Decimal::ZERO
        );
        assert_eq!(
            compute_consolidation_cost(&constants(), -7, &prefs).total,
            Decimal::ZERO
        );
    }

    #[test]
    fn test_preference_surcharges() {
        let prefs = ConsolidationPreferences::new()
            .with_protection(true)
            .with_unpacked_photos(true)
            .with_remove_packaging(true);
        let cost = compute_consolidation_cost(&constants(), 2, &prefs);

        assert_eq!(cost.base, Decimal::from(100));
        assert_eq!(cost.protection, Decimal::from(50));
        assert_eq!(cost.photos, Decimal::from(30));
        assert_eq!(cost.total, Decimal::from(180));
    }

    #[test]
    fn test_remove_packaging_is_free() {
        let prefs = ConsolidationPreferences::new().with_remove_packaging(true);
        let cost = compute_consolidation_cost(&constants(), 2, &prefs);
        assert_eq!(cost.total, Decimal::from(100));
    }
}
