// ============================================================================
// Domain Models Module
// Value objects consumed and produced by the pricing engine
// ============================================================================

pub mod carrier;
pub mod config;
pub mod currency;
pub mod package;
pub mod quote;

pub use carrier::Carrier;
pub use config::{CarrierRates, PricingConstants, SavingsModel};
pub use currency::Currency;
pub use package::{ConsolidationPreferences, Dimensions, LengthUnit, WeightUnit, CM_PER_INCH};
pub use quote::{
    CostBreakdown, DeclaredValue, InsuranceQuote, PhotoRequestCost, SavingsEstimate,
    ShipmentQuote, ShipmentRequest, WeightResult,
};
