// ============================================================================
// Exchange Rate Interface
// Defines the contract for converting between USD and MAD
// ============================================================================

use crate::domain::{Currency, PricingConstants};
use crate::numeric::{div_or_overflow, mul_or_overflow, PricingError, PricingResult};
use rust_decimal::Decimal;

/// Source of the MAD/USD conversion rate.
///
/// The engine ships with [`FixedExchangeRate`]; a live provider can be
/// plugged in without touching any calculator.
pub trait ExchangeRateProvider: Send + Sync {
    /// Dirhams per US dollar. Must be positive.
    fn mad_per_usd(&self) -> Decimal;

    /// Get the provider name for logging
    fn name(&self) -> &str;

    /// The provider's rate, rejected as `InvalidConfig` unless positive
    fn checked_rate(&self) -> PricingResult<Decimal> {
        let rate = self.mad_per_usd();
        if rate <= Decimal::ZERO {
            return Err(PricingError::InvalidConfig {
                reason: format!("{} exchange rate must be positive, got {}", self.name(), rate),
            });
        }
        Ok(rate)
    }

    /// Express `amount` in US dollars
    fn to_usd(&self, amount: Decimal, currency: Currency) -> PricingResult<Decimal> {
        match currency {
            Currency::Usd => Ok(amount),
            Currency::Mad => div_or_overflow("USD amount", amount, self.checked_rate()?),
        }
    }

    /// Express `amount` in dirhams
    fn to_mad(&self, amount: Decimal, currency: Currency) -> PricingResult<Decimal> {
        match currency {
            Currency::Usd => mul_or_overflow("MAD amount", amount, self.checked_rate()?),
            Currency::Mad => Ok(amount),
        }
    }
}

/// Constant rate taken from the pricing table. An approximation, not live FX.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedExchangeRate {
    mad_per_usd: Decimal,
}

impl FixedExchangeRate {
    pub fn new(mad_per_usd: Decimal) -> Self {
        Self { mad_per_usd }
    }

    pub fn from_constants(constants: &PricingConstants) -> Self {
        Self::new(constants.mad_per_usd)
    }
}

impl ExchangeRateProvider for FixedExchangeRate {
    fn mad_per_usd(&self) -> Decimal {
        self.mad_per_usd
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
