// ============================================================================
// Parcel Pricing Library
// Deterministic pricing for package forwarding and consolidation
// ============================================================================

//! # Parcel Pricing
//!
//! The single source of truth for every amount a package-forwarding service
//! bills: consolidation fees, photo requests, insurance premiums, billable
//! weight and carrier shipping estimates.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** so server billing and client previews agree to the last digit
//! - **One constants table** injected into every calculator, reloadable as a whole
//! - **Explicit rounding rules**: weights and insurance brackets round up, carrier costs round to nearest
//! - **Pluggable exchange rates** behind [`interfaces::ExchangeRateProvider`]
//!
//! ## Example
//!
//! ```rust
//! use parcel_pricing::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let engine = PricingEngine::standard();
//!
//! // Consolidate three packages with extra protection
//! let prefs = ConsolidationPreferences::new().with_protection(true);
//! let cost = engine.consolidation_cost(3, &prefs);
//! assert_eq!(cost.total, Decimal::from(200));
//!
//! // Ship a 1 kg shoebox with DHL, insured for 250 USD
//! let dims = Dimensions::cm(Decimal::from(30), Decimal::from(20), Decimal::from(15));
//! let request = ShipmentRequest::new(Carrier::Dhl, Decimal::ONE, dims)
//!     .with_declared_value(Decimal::from(250), Currency::Usd);
//! let quote = engine.quote_shipment(&request).unwrap();
//! assert_eq!(quote.weight.billable_weight, Decimal::new(18, 1));
//! assert_eq!(quote.total, Decimal::from(118));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Carrier, CarrierRates, ConsolidationPreferences, CostBreakdown, Currency, DeclaredValue,
        Dimensions, InsuranceQuote, LengthUnit, PhotoRequestCost, PricingConstants,
        SavingsEstimate, SavingsModel, ShipmentQuote, ShipmentRequest, WeightResult, WeightUnit,
    };
    pub use crate::engine::{
        compute_billable_weight, compute_consolidation_cost, compute_dimensional_weight,
        compute_insurance_cost, compute_photo_request_cost, compute_shipping_cost,
        estimate_consolidation_savings, estimate_consolidation_savings_default, quote_shipment,
        PricingEngine,
    };
    pub use crate::interfaces::{ExchangeRateProvider, FixedExchangeRate};
    pub use crate::numeric::{PricingError, PricingResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_consolidation_checkout_flow() {
        let engine = PricingEngine::standard();
        let dims = Dimensions::inches(Decimal::from(16), Decimal::from(12), Decimal::from(10));

        // Preview before submission
        let savings = engine.consolidation_savings_default(4);
        assert!(savings.total_savings > Decimal::ZERO);

        // Consolidation request
        let prefs = ConsolidationPreferences::new()
            .with_remove_packaging(true)
            .with_unpacked_photos(true);
        let consolidation = engine.consolidation_cost(4, &prefs);
        assert_eq!(consolidation.base, Decimal::from(200));
        assert_eq!(consolidation.total, Decimal::from(230));

        // Outbound shipment
        let request = ShipmentRequest::new(Carrier::parse("ups"), Decimal::from(6), dims)
            .with_declared_value(Decimal::from(4000), Currency::Mad);
        let quote = engine.quote_shipment(&request).unwrap();

        // 40.64 * 30.48 * 25.4 / 5000 = 6.29... -> 6.3 kg billable
        assert_eq!(quote.weight.dimensional_weight, Decimal::new(63, 1));
        assert_eq!(quote.weight.billable_weight, Decimal::new(63, 1));
        // 6.3 * 50 * 1.18 = 371.7
        assert_eq!(quote.shipping_cost, Decimal::from(372));
        // 4000 MAD = 400 USD -> 3 brackets above free coverage
        let insurance = quote.insurance.unwrap();
        assert_eq!(insurance.cost, Decimal::from(15));
        assert_eq!(quote.total, Decimal::from(387));
    }

    #[test]
    fn test_preview_matches_engine() {
        // The free functions and the engine must agree for the same table
        let engine = PricingEngine::standard();
        let constants = engine.snapshot();
        let prefs = ConsolidationPreferences::new().with_protection(true);

        assert_eq!(
            compute_consolidation_cost(&constants, 7, &prefs),
            engine.consolidation_cost(7, &prefs)
        );
        assert_eq!(
            compute_photo_request_cost(&constants, 4, true),
            engine.photo_request_cost(4, true)
        );
        assert_eq!(
            compute_insurance_cost(&constants, Decimal::from(320), Currency::Usd),
            engine.insurance_cost(Decimal::from(320), Currency::Usd)
        );
        assert_eq!(
            estimate_consolidation_savings(&constants, 6, Decimal::new(15, 1)),
            engine.consolidation_savings(6, Decimal::new(15, 1))
        );
    }

    #[test]
    fn test_invalid_package_data_surfaces() {
        let engine = PricingEngine::standard();
        let dims = Dimensions::cm(Decimal::from(30), Decimal::ZERO, Decimal::from(15));
        let request = ShipmentRequest::new(Carrier::Dhl, Decimal::ONE, dims);

        assert!(matches!(
            engine.quote_shipment(&request),
            Err(PricingError::InvalidDimension { axis: "width", .. })
        ));
    }
}
