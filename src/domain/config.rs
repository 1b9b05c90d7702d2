// ============================================================================
// Pricing Configuration
// The single constants table every calculator reads from
// ============================================================================

use super::Carrier;
use crate::numeric::{PricingError, PricingResult};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Carrier Rates
// ============================================================================

/// Markup applied on top of the base per-kg rate, per carrier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarrierRates {
    pub dhl: Decimal,
    pub fedex: Decimal,
    pub ups: Decimal,
    pub aramex: Decimal,
    /// Used for carriers without a dedicated rate
    pub fallback: Decimal,
}

impl CarrierRates {
    pub fn multiplier(&self, carrier: Carrier) -> Decimal {
        match carrier {
            Carrier::Dhl => self.dhl,
            Carrier::FedEx => self.fedex,
            Carrier::Ups => self.ups,
            Carrier::Aramex => self.aramex,
            Carrier::Unknown => self.fallback,
        }
    }

    fn validate(&self) -> PricingResult<()> {
        for (name, value) in [
            ("dhl", self.dhl),
            ("fedex", self.fedex),
            ("ups", self.ups),
            ("aramex", self.aramex),
            ("fallback", self.fallback),
        ] {
            if value <= Decimal::ZERO {
                return Err(invalid(format!(
                    "carrier multiplier for {} must be positive",
                    name
                )));
            }
        }
        Ok(())
    }
}

impl Default for CarrierRates {
    fn default() -> Self {
        Self {
            dhl: Decimal::new(120, 2),
            fedex: Decimal::new(115, 2),
            ups: Decimal::new(118, 2),
            aramex: Decimal::ONE,
            fallback: Decimal::ONE,
        }
    }
}

// ============================================================================
// Savings Model
// ============================================================================

/// Flat-rate model behind the consolidation savings estimate.
///
/// Consolidated cost is `consolidated_base_cost + weight * consolidated_cost_per_kg`,
/// capped at `consolidated_cost_cap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SavingsModel {
    pub separate_cost_per_package: Decimal,
    pub consolidated_base_cost: Decimal,
    pub consolidated_cost_per_kg: Decimal,
    pub consolidated_cost_cap: Decimal,
    pub default_avg_weight_kg: Decimal,
}

impl SavingsModel {
    fn validate(&self) -> PricingResult<()> {
        for (name, value) in [
            ("separate_cost_per_package", self.separate_cost_per_package),
            ("consolidated_base_cost", self.consolidated_base_cost),
            ("consolidated_cost_per_kg", self.consolidated_cost_per_kg),
            ("consolidated_cost_cap", self.consolidated_cost_cap),
        ] {
            if value < Decimal::ZERO {
                return Err(invalid(format!("{} cannot be negative", name)));
            }
        }
        if self.default_avg_weight_kg <= Decimal::ZERO {
            return Err(invalid("default_avg_weight_kg must be positive"));
        }
        Ok(())
    }
}

impl Default for SavingsModel {
    fn default() -> Self {
        Self {
            separate_cost_per_package: Decimal::from(350),
            consolidated_base_cost: Decimal::from(450),
            consolidated_cost_per_kg: Decimal::from(20),
            consolidated_cost_cap: Decimal::from(1500),
            default_avg_weight_kg: Decimal::TWO,
        }
    }
}

// ============================================================================
// Complete Pricing Constants
// ============================================================================

/// Every number the pricing engine depends on.
///
/// Monetary amounts are in MAD unless the field name ends in `_usd`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PricingConstants {
    /// Consolidation fee per package
    pub fee_per_package: Decimal,

    /// Ceiling on the per-package part of a consolidation
    pub max_consolidation_fee: Decimal,

    /// Surcharge for photos of unpacked contents
    pub unpacked_photos_fee: Decimal,

    /// Surcharge for extra protective packing
    pub extra_protection_fee: Decimal,

    /// Price of the first photo in a photo request
    pub first_photo_fee: Decimal,

    /// Price of each photo after the first
    pub additional_photo_fee: Decimal,

    /// Price of a written information request
    pub information_request_fee: Decimal,

    /// Photos beyond this count are not billed
    pub max_additional_photos: u32,

    /// Declared value covered at no cost
    pub free_coverage_usd: Decimal,

    /// Premium per started 100 USD above free coverage
    pub insurance_cost_per_100_usd: Decimal,

    /// Share of the declared value that can be insured
    pub max_coverage_multiplier: Decimal,

    /// Volumetric divisor (cm³ per kg)
    pub dimensional_weight_divisor: Decimal,

    /// Fixed conversion rate, not a live quote
    pub mad_per_usd: Decimal,

    /// Carrier base rate per billable kilogram
    pub base_rate_per_kg: Decimal,

    pub carrier_rates: CarrierRates,

    pub savings: SavingsModel,
}

impl PricingConstants {
    /// Production pricing table
    pub fn standard() -> Self {
        Self {
            fee_per_package: Decimal::from(50),
            max_consolidation_fee: Decimal::from(250),
            unpacked_photos_fee: Decimal::from(30),
            extra_protection_fee: Decimal::from(50),
            first_photo_fee: Decimal::from(40),
            additional_photo_fee: Decimal::from(10),
            information_request_fee: Decimal::from(30),
            max_additional_photos: 10,
            free_coverage_usd: Decimal::ONE_HUNDRED,
            insurance_cost_per_100_usd: Decimal::from(5),
            max_coverage_multiplier: Decimal::ONE,
            dimensional_weight_divisor: Decimal::from(5000),
            mad_per_usd: Decimal::TEN,
            base_rate_per_kg: Decimal::from(50),
            carrier_rates: CarrierRates::default(),
            savings: SavingsModel::default(),
        }
    }

    /// Builder method: Set consolidation fee per package and its cap
    pub fn with_consolidation_fees(mut self, per_package: Decimal, cap: Decimal) -> Self {
        self.fee_per_package = per_package;
        self.max_consolidation_fee = cap;
        self
    }

    /// Builder method: Set photo pricing tiers
    pub fn with_photo_fees(mut self, first: Decimal, additional: Decimal, max_photos: u32) -> Self {
        self.first_photo_fee = first;
        self.additional_photo_fee = additional;
        self.max_additional_photos = max_photos;
        self
    }

    /// Builder method: Set the fixed MAD/USD rate
    pub fn with_mad_per_usd(mut self, rate: Decimal) -> Self {
        self.mad_per_usd = rate;
        self
    }

    /// Builder method: Set the volumetric divisor
    pub fn with_dimensional_divisor(mut self, divisor: Decimal) -> Self {
        self.dimensional_weight_divisor = divisor;
        self
    }

    /// Builder method: Replace the carrier rate table
    pub fn with_carrier_rates(mut self, rates: CarrierRates) -> Self {
        self.carrier_rates = rates;
        self
    }

    /// Builder method: Replace the savings model
    pub fn with_savings_model(mut self, savings: SavingsModel) -> Self {
        self.savings = savings;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> PricingResult<()> {
        for (name, value) in [
            ("fee_per_package", self.fee_per_package),
            ("max_consolidation_fee", self.max_consolidation_fee),
            ("unpacked_photos_fee", self.unpacked_photos_fee),
            ("extra_protection_fee", self.extra_protection_fee),
            ("first_photo_fee", self.first_photo_fee),
            ("additional_photo_fee", self.additional_photo_fee),
            ("information_request_fee", self.information_request_fee),
            ("free_coverage_usd", self.free_coverage_usd),
            ("insurance_cost_per_100_usd", self.insurance_cost_per_100_usd),
            ("base_rate_per_kg", self.base_rate_per_kg),
        ] {
            if value < Decimal::ZERO {
                return Err(invalid(format!("{} cannot be negative", name)));
            }
        }

        if self.mad_per_usd <= Decimal::ZERO {
            return Err(invalid("mad_per_usd must be positive"));
        }
        if self.dimensional_weight_divisor <= Decimal::ZERO {
            return Err(invalid("dimensional_weight_divisor must be positive"));
        }
        if self.max_coverage_multiplier <= Decimal::ZERO {
            return Err(invalid("max_coverage_multiplier must be positive"));
        }

        self.carrier_rates.validate()?;
        self.savings.validate()?;

        Ok(())
    }

    /// Parse a JSON constants document and validate it.
    ///
    /// Fields missing from the document keep their [`PricingConstants::standard`] value.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> PricingResult<Self> {
        let constants: Self =
            serde_json::from_str(json).map_err(|e| PricingError::ConfigParse {
                reason: e.to_string(),
            })?;
        constants.validate()?;
        Ok(constants)
    }
}

impl Default for PricingConstants {
    fn default() -> Self {
        Self::standard()
    }
}

fn invalid(reason: impl Into<String>) -> PricingError {
    PricingError::InvalidConfig {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_valid() {
        let constants = PricingConstants::standard();
        assert!(constants.validate().is_ok());
        assert_eq!(constants.fee_per_package, Decimal::from(50));
        assert_eq!(constants.max_consolidation_fee, Decimal::from(250));
        assert_eq!(constants.max_additional_photos, 10);
        assert_eq!(constants, PricingConstants::default());
    }

    #[test]
    fn test_builder_pattern() {
        let constants = PricingConstants::standard()
            .with_consolidation_fees(Decimal::from(60), Decimal::from(300))
            .with_mad_per_usd(Decimal::new(985, 2));

        assert_eq!(constants.fee_per_package, Decimal::from(60));
        assert_eq!(constants.max_consolidation_fee, Decimal::from(300));
        assert_eq!(constants.mad_per_usd, Decimal::new(985, 2));
        assert!(constants.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let zero_rate = PricingConstants::standard().with_mad_per_usd(Decimal::ZERO);
        assert!(matches!(
            zero_rate.validate(),
            Err(PricingError::InvalidConfig { .. })
        ));

        let zero_divisor = PricingConstants::standard().with_dimensional_divisor(Decimal::ZERO);
        assert!(zero_divisor.validate().is_err());

        let negative_fee = PricingConstants::standard()
            .with_consolidation_fees(Decimal::from(-1), Decimal::from(250));
        assert!(negative_fee.validate().is_err());

        let bad_carrier = PricingConstants::standard().with_carrier_rates(CarrierRates {
            ups: Decimal::ZERO,
            ..CarrierRates::default()
        });
        assert!(bad_carrier.validate().is_err());
    }

    #[test]
    fn test_carrier_multipliers() {
        let rates = CarrierRates::default();
        assert_eq!(rates.multiplier(Carrier::Dhl), Decimal::new(12, 1));
        assert_eq!(rates.multiplier(Carrier::FedEx), Decimal::new(115, 2));
        assert_eq!(rates.multiplier(Carrier::Ups), Decimal::new(118, 2));
        assert_eq!(rates.multiplier(Carrier::Aramex), Decimal::ONE);
        assert_eq!(rates.multiplier(Carrier::Unknown), Decimal::ONE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_overrides_only_given_fields() {
        let constants = PricingConstants::from_json_str(
            r#"{ "fee_per_package": "45", "carrier_rates": { "dhl": "1.25" } }"#,
        )
        .unwrap();

        assert_eq!(constants.fee_per_package, Decimal::from(45));
        assert_eq!(constants.max_consolidation_fee, Decimal::from(250));
        assert_eq!(constants.carrier_rates.dhl, Decimal::new(125, 2));
        assert_eq!(constants.carrier_rates.fedex, Decimal::new(115, 2));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_rejects_invalid_documents() {
        assert!(matches!(
            PricingConstants::from_json_str("{ not json"),
            Err(PricingError::ConfigParse { .. })
        ));
        assert!(matches!(
            PricingConstants::from_json_str(r#"{ "mad_per_usd": "0" }"#),
            Err(PricingError::InvalidConfig { .. })
        ));
    }
}
