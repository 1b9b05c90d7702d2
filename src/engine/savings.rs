// ============================================================================
// Consolidation Savings Estimator
// ============================================================================

use super::consolidation::consolidation_base_fee;
use crate::domain::{Currency, PricingConstants, SavingsEstimate};
use crate::numeric::non_negative;
use rust_decimal::Decimal;

/// Estimate how much consolidating `package_count` packages saves compared
/// with shipping them one by one.
///
/// Shipping separately costs a flat amount per package; the consolidated
/// shipment is a capped linear function of total weight. The consolidation
/// fee is the bare base fee, with no preference surcharge. Savings are
/// floored at zero, so a single package reports no savings rather than a
/// loss. Negative counts and weights are treated as zero, and a total weight
/// too large to represent prices at the consolidated cap.
///
/// # Example
/// ```text
/// 5 packages of 2 kg: separate 1750, consolidated 650, fee 250 -> savings 850
/// ```
pub fn estimate_consolidation_savings(
    constants: &PricingConstants,
    package_count: i64,
    avg_weight_per_package: Decimal,
) -> SavingsEstimate {
    let model = &constants.savings;
    let count = Decimal::from(package_count.max(0));

    let separate_shipping_cost = count.saturating_mul(model.separate_cost_per_package);

    let consolidated_shipping_cost = count
        .checked_mul(non_negative(avg_weight_per_package))
        .and_then(|total_weight| total_weight.checked_mul(model.consolidated_cost_per_kg))
        .and_then(|weight_cost| weight_cost.checked_add(model.consolidated_base_cost))
        .map_or(model.consolidated_cost_cap, |cost| {
            cost.min(model.consolidated_cost_cap)
        });

    let consolidation_fee = consolidation_base_fee(constants, package_count);

    let consolidated_total = consolidated_shipping_cost.saturating_add(consolidation_fee);
    let total_savings = non_negative(separate_shipping_cost.saturating_sub(consolidated_total));

    SavingsEstimate {
        separate_shipping_cost,
        consolidated_shipping_cost,
        consolidation_fee,
        total_savings,
        currency: Currency::SETTLEMENT,
    }
}

/// Same as [`estimate_consolidation_savings`] with the model's default
/// average package weight.
pub fn estimate_consolidation_savings_default(
    constants: &PricingConstants,
    package_count: i64,
) -> SavingsEstimate {
    estimate_consolidation_savings(
        constants,
        package_count,
        constants.savings.default_avg_weight_kg,
    )
}
