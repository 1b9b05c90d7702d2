// ============================================================================
// Numeric Module
// Error types and rounding rules shared by every calculator
// ============================================================================
//
// This module provides:
// - PricingError: Error kinds surfaced to callers
// - Rounding helpers: the single home of every rounding direction
// - Checked helpers: overflow surfaces as PricingError::Overflow, never a panic
//
// Design principles:
// - No floating-point operations, all amounts are rust_decimal::Decimal
// - Identical inputs give bit-identical outputs

mod checked;
mod errors;
mod rounding;

pub use checked::{add_or_overflow, div_or_overflow, mul_or_overflow};
pub use errors::{PricingError, PricingResult};
pub use rounding::{ceil_to_tenth, clamp_count, non_negative, round_to_unit, started_brackets};
