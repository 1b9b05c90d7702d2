// ============================================================================
// Quote Value Objects
// Outputs of the pricing calculators
// ============================================================================

use super::{Carrier, Currency, Dimensions, WeightUnit};
use crate::numeric::{add_or_overflow, PricingResult};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Consolidation fee split into its components.
///
/// `total` is always `base + protection + photos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CostBreakdown {
    /// Per-package fee after the cap
    pub base: Decimal,
    /// Extra protection surcharge
    pub protection: Decimal,
    /// Unpacked photos surcharge
    pub photos: Decimal,
    pub total: Decimal,
    pub currency: Currency,
}

impl CostBreakdown {
    pub(crate) fn new(base: Decimal, protection: Decimal, photos: Decimal) -> Self {
        Self {
            base,
            protection,
            photos,
            total: base + protection + photos,
            currency: Currency::SETTLEMENT,
        }
    }
}

/// Price of a standalone photo/information request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhotoRequestCost {
    /// Number of photos actually billed after clamping
    pub photo_count: u32,
    pub photos_cost: Decimal,
    pub information_cost: Decimal,
    pub total: Decimal,
    pub currency: Currency,
}

impl PhotoRequestCost {
    pub(crate) fn new(photo_count: u32, photos_cost: Decimal, information_cost: Decimal) -> Self {
        Self {
            photo_count,
            photos_cost,
            information_cost,
            total: photos_cost + information_cost,
            currency: Currency::SETTLEMENT,
        }
    }
}

/// Insurance premium for a declared value.
///
/// Amounts suffixed `_usd` are in US dollars; `cost` is in the settlement
/// currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InsuranceQuote {
    pub declared_value_usd: Decimal,
    pub free_coverage_usd: Decimal,
    pub insured_amount_usd: Decimal,
    pub cost: Decimal,
    pub currency: Currency,
}

impl InsuranceQuote {
    /// True when the whole declared value sits inside free coverage
    pub fn is_free(&self) -> bool {
        self.cost.is_zero()
    }
}

/// Actual, volumetric and billable weight of one package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightResult {
    pub actual_weight: Decimal,
    pub dimensional_weight: Decimal,
    /// `max(actual_weight, dimensional_weight)`
    pub billable_weight: Decimal,
    pub unit: WeightUnit,
}

impl WeightResult {
    /// True when volume, not mass, drives the bill
    pub fn is_volumetric(&self) -> bool {
        self.dimensional_weight > self.actual_weight
    }
}

/// Estimated savings of consolidating versus shipping packages one by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SavingsEstimate {
    pub separate_shipping_cost: Decimal,
    pub consolidated_shipping_cost: Decimal,
    pub consolidation_fee: Decimal,
    /// Never negative
    pub total_savings: Decimal,
    pub currency: Currency,
}

// ============================================================================
// Shipment Quote
// ============================================================================

/// Declared value attached to a shipment for insurance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeclaredValue {
    pub amount: Decimal,
    pub currency: Currency,
}

impl DeclaredValue {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

/// Everything the shipment creation handler knows about an outbound parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShipmentRequest {
    pub carrier: Carrier,
    /// Actual weight in kilograms
    pub weight: Decimal,
    pub dimensions: Dimensions,
    /// None when the customer declined insurance
    pub declared_value: Option<DeclaredValue>,
}

impl ShipmentRequest {
    pub fn new(carrier: Carrier, weight: Decimal, dimensions: Dimensions) -> Self {
        Self {
            carrier,
            weight,
            dimensions,
            declared_value: None,
        }
    }

    pub fn with_declared_value(mut self, amount: Decimal, currency: Currency) -> Self {
        self.declared_value = Some(DeclaredValue::new(amount, currency));
        self
    }
}

/// Shipping cost and insurance combined into one settlement amount.
///
/// `total` is `shipping_cost` plus the insurance premium, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShipmentQuote {
    pub carrier: Carrier,
    pub weight: WeightResult,
    pub shipping_cost: Decimal,
    pub insurance: Option<InsuranceQuote>,
    pub total: Decimal,
    pub currency: Currency,
}

impl ShipmentQuote {
    pub(crate) fn new(
        carrier: Carrier,
        weight: WeightResult,
        shipping_cost: Decimal,
        insurance: Option<InsuranceQuote>,
    ) -> PricingResult<Self> {
        let premium = insurance.map_or(Decimal::ZERO, |quote| quote.cost);
        Ok(Self {
            carrier,
            weight,
            shipping_cost,
            insurance,
            total: add_or_overflow("shipment total", shipping_cost, premium)?,
            currency: Currency::SETTLEMENT,
        })
    }
}
