// ============================================================================
// Pricing Engine
// Shared entry point owning the live constants table
// ============================================================================

use super::{
    compute_billable_weight, compute_consolidation_cost, compute_dimensional_weight,
    compute_insurance_cost_with_rates, compute_photo_request_cost, compute_shipping_cost,
    estimate_consolidation_savings, estimate_consolidation_savings_default,
    quote_shipment_with_rates,
};
use crate::domain::{
    Carrier, ConsolidationPreferences, CostBreakdown, Currency, Dimensions, InsuranceQuote,
    PhotoRequestCost, PricingConstants, SavingsEstimate, ShipmentQuote, ShipmentRequest,
    WeightResult,
};
use crate::interfaces::{ExchangeRateProvider, FixedExchangeRate};
use crate::numeric::PricingResult;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Pricing engine shared by the request handlers and the quote preview.
///
/// Every call prices against one snapshot of the constants table; `reload`
/// swaps the whole table at once, so a call never sees half of an update.
pub struct PricingEngine {
    /// Current constants table
    constants: RwLock<Arc<PricingConstants>>,

    /// Exchange rate source, None means the table's fixed rate
    rates: Option<Arc<dyn ExchangeRateProvider>>,
}

impl PricingEngine {
    /// Create a new pricing engine from a validated table
    pub fn new(constants: PricingConstants) -> PricingResult<Self> {
        constants.validate()?;
        Ok(Self {
            constants: RwLock::new(Arc::new(constants)),
            rates: None,
        })
    }

    /// Engine over the production table
    pub fn standard() -> Self {
        Self {
            constants: RwLock::new(Arc::new(PricingConstants::standard())),
            rates: None,
        }
    }

    /// Use `provider` instead of the table's fixed MAD/USD rate
    pub fn with_rate_provider(mut self, provider: Arc<dyn ExchangeRateProvider>) -> Self {
        self.rates = Some(provider);
        self
    }

    /// Current constants table
    pub fn snapshot(&self) -> Arc<PricingConstants> {
        self.constants.read().clone()
    }

    /// Replace the constants table as a whole. The old table stays in
    /// place if the new one fails validation.
    pub fn reload(&self, constants: PricingConstants) -> PricingResult<()> {
        constants.validate()?;
        *self.constants.write() = Arc::new(constants);
        tracing::info!("pricing constants reloaded");
        Ok(())
    }

    fn with_rates<T>(
        &self,
        constants: &PricingConstants,
        f: impl FnOnce(&dyn ExchangeRateProvider) -> T,
    ) -> T {
        match &self.rates {
            Some(provider) => f(provider.as_ref()),
            None => f(&FixedExchangeRate::from_constants(constants)),
        }
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Consolidation fee for `package_count` packages
    pub fn consolidation_cost(
        &self,
        package_count: i64,
        preferences: &ConsolidationPreferences,
    ) -> CostBreakdown {
        let cost = compute_consolidation_cost(&self.snapshot(), package_count, preferences);
        tracing::debug!(
            package_count,
            base = %cost.base,
            total = %cost.total,
            "consolidation cost computed"
        );
        cost
    }

    /// Price of a photo request, with or without an information request
    pub fn photo_request_cost(&self, photo_count: i64, include_information: bool) -> PhotoRequestCost {
        let cost = compute_photo_request_cost(&self.snapshot(), photo_count, include_information);
        tracing::debug!(
            photo_count = cost.photo_count,
            include_information,
            total = %cost.total,
            "photo request cost computed"
        );
        cost
    }

    /// Insurance premium, converting MAD values through the rate provider
    pub fn insurance_cost(
        &self,
        declared_value: Decimal,
        currency: Currency,
    ) -> PricingResult<InsuranceQuote> {
        let constants = self.snapshot();
        self.with_rates(&constants, |rates| {
            compute_insurance_cost_with_rates(&constants, rates, declared_value, currency)
        })
    }

    /// Volumetric weight of a box
    pub fn dimensional_weight(&self, dims: &Dimensions) -> PricingResult<Decimal> {
        compute_dimensional_weight(&self.snapshot(), dims)
    }

    /// Larger of actual and volumetric weight
    pub fn billable_weight(
        &self,
        actual_weight: Decimal,
        dims: &Dimensions,
    ) -> PricingResult<WeightResult> {
        compute_billable_weight(&self.snapshot(), actual_weight, dims)
    }

    /// Carrier cost estimate in whole dirhams
    pub fn shipping_cost(
        &self,
        weight: Decimal,
        dims: &Dimensions,
        carrier: Carrier,
    ) -> PricingResult<Decimal> {
        let cost = compute_shipping_cost(&self.snapshot(), weight, dims, carrier)?;
        tracing::debug!(%carrier, %weight, %cost, "shipping cost estimated");
        Ok(cost)
    }

    /// Savings from consolidating packages of the given average weight
    pub fn consolidation_savings(
        &self,
        package_count: i64,
        avg_weight_per_package: Decimal,
    ) -> SavingsEstimate {
        estimate_consolidation_savings(&self.snapshot(), package_count, avg_weight_per_package)
    }

    /// Savings estimate at the table's default average package weight
    pub fn consolidation_savings_default(&self, package_count: i64) -> SavingsEstimate {
        estimate_consolidation_savings_default(&self.snapshot(), package_count)
    }

    /// Carrier cost plus optional insurance for one outbound shipment
    pub fn quote_shipment(&self, request: &ShipmentRequest) -> PricingResult<ShipmentQuote> {
        let constants = self.snapshot();
        let quote = self.with_rates(&constants, |rates| {
            quote_shipment_with_rates(&constants, rates, request)
        })?;
        tracing::debug!(
            carrier = %quote.carrier,
            shipping_cost = %quote.shipping_cost,
            total = %quote.total,
            "shipment quoted"
        );
        Ok(quote)
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::standard()
    }
}
