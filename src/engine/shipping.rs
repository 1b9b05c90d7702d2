// ============================================================================
// Carrier Shipping Cost Estimator
// Chargeable weight × base rate × carrier markup
// ============================================================================

use super::insurance::compute_insurance_cost_with_rates;
use super::weight::{compute_billable_weight, compute_dimensional_weight};
use crate::domain::{Carrier, Dimensions, PricingConstants, ShipmentQuote, ShipmentRequest};
use crate::interfaces::{ExchangeRateProvider, FixedExchangeRate};
use crate::numeric::{mul_or_overflow, round_to_unit, PricingError, PricingResult};
use rust_decimal::Decimal;

/// Estimate the carrier cost of one parcel, in whole dirhams.
///
/// Unknown carriers are priced at the fallback multiplier instead of being
/// rejected, since this is an estimate and not a binding quote.
///
/// # Example
/// ```text
/// 1 kg, 30x20x15 cm, DHL -> max(1, 1.8) * 50 * 1.20 = 108
/// ```
///
/// # Errors
/// `InvalidWeight` or `InvalidDimension` on non-positive measurements,
/// `Overflow` when the cost leaves the decimal range.
pub fn compute_shipping_cost(
    constants: &PricingConstants,
    weight: Decimal,
    dims: &Dimensions,
    carrier: Carrier,
) -> PricingResult<Decimal> {
    if weight <= Decimal::ZERO {
        return Err(PricingError::InvalidWeight { value: weight });
    }
    let chargeable = weight.max(compute_dimensional_weight(constants, dims)?);
    price_chargeable_weight(constants, chargeable, carrier)
}

fn price_chargeable_weight(
    constants: &PricingConstants,
    chargeable_weight: Decimal,
    carrier: Carrier,
) -> PricingResult<Decimal> {
    if !carrier.is_known() {
        tracing::debug!("unknown carrier, using fallback multiplier");
    }
    let base_cost = mul_or_overflow("shipping cost", chargeable_weight, constants.base_rate_per_kg)?;
    let marked_up = mul_or_overflow(
        "shipping cost",
        base_cost,
        constants.carrier_rates.multiplier(carrier),
    )?;
    Ok(round_to_unit(marked_up))
}

/// Quote a shipment with the table's fixed exchange rate.
pub fn quote_shipment(
    constants: &PricingConstants,
    request: &ShipmentRequest,
) -> PricingResult<ShipmentQuote> {
    let rates = FixedExchangeRate::from_constants(constants);
    quote_shipment_with_rates(constants, &rates, request)
}

/// Combine billable weight, carrier cost and optional insurance into a
/// single settlement amount, the way the shipment handler persists it.
pub fn quote_shipment_with_rates(
    constants: &PricingConstants,
    rates: &dyn ExchangeRateProvider,
    request: &ShipmentRequest,
) -> PricingResult<ShipmentQuote> {
    let weight = compute_billable_weight(constants, request.weight, &request.dimensions)?;
    let shipping_cost =
        price_chargeable_weight(constants, weight.billable_weight, request.carrier)?;

    let insurance = request
        .declared_value
        .map(|declared| {
            compute_insurance_cost_with_rates(constants, rates, declared.amount, declared.currency)
        })
        .transpose()?;

    ShipmentQuote::new(request.carrier, weight, shipping_cost, insurance)
}
