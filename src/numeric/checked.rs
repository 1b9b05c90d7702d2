// ============================================================================
// Checked Arithmetic
// Overflow-aware products and quotients for physical quantities
// ============================================================================

use super::{PricingError, PricingResult};
use rust_decimal::Decimal;

/// `lhs * rhs`, or `Overflow` naming the quantity being computed.
#[inline]
pub fn mul_or_overflow(
    quantity: &'static str,
    lhs: Decimal,
    rhs: Decimal,
) -> PricingResult<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or(PricingError::Overflow { quantity })
}

/// `lhs / rhs`, or `Overflow` naming the quantity being computed.
///
/// Division by zero is reported as an overflow too; callers validate their
/// divisors beforehand.
#[inline]
pub fn div_or_overflow(
    quantity: &'static str,
    lhs: Decimal,
    rhs: Decimal,
) -> PricingResult<Decimal> {
    lhs.checked_div(rhs)
        .ok_or(PricingError::Overflow { quantity })
}

/// `lhs + rhs`, or `Overflow` naming the quantity being computed.
#[inline]
pub fn add_or_overflow(
    quantity: &'static str,
    lhs: Decimal,
    rhs: Decimal,
) -> PricingResult<Decimal> {
    lhs.checked_add(rhs)
        .ok_or(PricingError::Overflow { quantity })
}
