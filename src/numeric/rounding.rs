// ============================================================================
// Rounding Rules
// One helper per rounding direction used by the pricing engine
// ============================================================================
//
// Weights round up, insurance brackets round up, final carrier costs round
// to the nearest whole unit. Every calculator goes through these helpers so
// the direction is decided in exactly one place.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round up to one decimal place: `ceil(value * 10) / 10`.
///
/// Rounds at the decimal scale directly, so it holds up to `Decimal::MAX`.
#[inline]
pub fn ceil_to_tenth(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::ToPositiveInfinity)
}

/// Round to the nearest whole unit, halves away from zero.
#[inline]
pub fn round_to_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Number of started brackets of `bracket_size` contained in `amount`.
///
/// A partial bracket counts as a full one. `bracket_size` must be positive.
#[inline]
pub fn started_brackets(amount: Decimal, bracket_size: Decimal) -> Decimal {
    if amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (amount / bracket_size).ceil()
}

/// Floor a decimal at zero.
#[inline]
pub fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Clamp a signed count into `[0, max]`.
#[inline]
pub fn clamp_count(count: i64, max: u32) -> u32 {
    count.clamp(0, i64::from(max)) as u32
}
