// ============================================================================
// Insurance Quote Calculator
// Free coverage up to a threshold, then a premium per started 100 USD
// ============================================================================

use crate::domain::{Currency, InsuranceQuote, PricingConstants};
use crate::interfaces::{ExchangeRateProvider, FixedExchangeRate};
use crate::numeric::{mul_or_overflow, started_brackets, PricingError, PricingResult};
use rust_decimal::Decimal;

/// Width of one insurance bracket in USD
const BRACKET_USD: Decimal = Decimal::ONE_HUNDRED;

/// Quote insurance using the table's fixed MAD/USD rate.
///
/// See [`compute_insurance_cost_with_rates`].
pub fn compute_insurance_cost(
    constants: &PricingConstants,
    declared_value: Decimal,
    currency: Currency,
) -> PricingResult<InsuranceQuote> {
    let rates = FixedExchangeRate::from_constants(constants);
    compute_insurance_cost_with_rates(constants, &rates, declared_value, currency)
}

/// Quote insurance for a declared value.
///
/// The value is normalized to USD first. Anything up to
/// `free_coverage_usd` is covered for free; above it, each started 100 USD
/// bracket of the excess costs `insurance_cost_per_100_usd`. The premium is
/// always expressed in the settlement currency, whatever the input currency.
///
/// # Example
/// ```text
/// 100 USD -> 0
/// 150 USD -> ceil(50 / 100)  * 5 = 5
/// 250 USD -> ceil(150 / 100) * 5 = 10
/// ```
///
/// # Errors
/// `InvalidDeclaredValue` for a negative value, `InvalidConfig` when the
/// rate provider reports a non-positive rate for a MAD value, `Overflow` if
/// the normalized value leaves the decimal range.
pub fn compute_insurance_cost_with_rates(
    constants: &PricingConstants,
    rates: &dyn ExchangeRateProvider,
    declared_value: Decimal,
    currency: Currency,
) -> PricingResult<InsuranceQuote> {
    if declared_value < Decimal::ZERO {
        return Err(PricingError::InvalidDeclaredValue {
            value: declared_value,
        });
    }

    let value_usd = rates.to_usd(declared_value, currency)?;
    let free_coverage = constants.free_coverage_usd;

    if value_usd <= free_coverage {
        return Ok(InsuranceQuote {
            declared_value_usd: value_usd,
            free_coverage_usd: free_coverage,
            insured_amount_usd: value_usd,
            cost: Decimal::ZERO,
            currency: Currency::SETTLEMENT,
        });
    }

    let covered = mul_or_overflow("insured amount", value_usd, constants.max_coverage_multiplier)?;
    let insured = value_usd.min(covered);
    let taxable_excess = insured - free_coverage;
    let cost = mul_or_overflow(
        "insurance premium",
        started_brackets(taxable_excess, BRACKET_USD),
        constants.insurance_cost_per_100_usd,
    )?;

    tracing::debug!(
        %value_usd,
        %cost,
        rate_source = rates.name(),
        "insurance premium computed"
    );

    Ok(InsuranceQuote {
        declared_value_usd: value_usd,
        free_coverage_usd: free_coverage,
        insured_amount_usd: insured,
        cost,
        currency: Currency::SETTLEMENT,
    })
}
