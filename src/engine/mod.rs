// ============================================================================
// Engine Module
// Contains the pricing business logic
// ============================================================================
//
// Each calculator is a pure function of the constants table and its inputs.
// PricingEngine wraps them around a reloadable table.

mod consolidation;
mod insurance;
mod photos;
mod pricing_engine;
mod savings;
mod shipping;
mod weight;

pub mod validation;

pub use consolidation::compute_consolidation_cost;
pub use insurance::{compute_insurance_cost, compute_insurance_cost_with_rates};
pub use photos::compute_photo_request_cost;
pub use pricing_engine::PricingEngine;
pub use savings::{estimate_consolidation_savings, estimate_consolidation_savings_default};
pub use shipping::{compute_shipping_cost, quote_shipment, quote_shipment_with_rates};
pub use validation::{validate_declared_value, validate_package_count};
pub use weight::{compute_billable_weight, compute_dimensional_weight};
