// ============================================================================
// Pricing Errors
// Error types for pricing and weight computations
// ============================================================================

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while pricing a request.
///
/// Count-based inputs never produce an error inside the engine (they are
/// clamped); physical inputs do, because a zero or negative measurement
/// points at corrupt package data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A length, width or height was zero or negative
    #[error("invalid dimension: {axis} must be positive, got {value}")]
    InvalidDimension { axis: &'static str, value: Decimal },

    /// An actual weight was zero or negative
    #[error("invalid weight: must be positive, got {value}")]
    InvalidWeight { value: Decimal },

    /// A negative or oversized package count reached a validator
    #[error("invalid package count: {count} is out of range")]
    InvalidPackageCount { count: i64 },

    /// A negative declared value reached the insurance calculator
    #[error("invalid declared value: must not be negative, got {value}")]
    InvalidDeclaredValue { value: Decimal },

    /// The constants table violates one of its invariants
    #[error("invalid pricing configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A constants document could not be parsed
    #[error("could not parse pricing configuration: {reason}")]
    ConfigParse { reason: String },

    /// An amount or measurement left the representable decimal range
    #[error("arithmetic overflow while computing {quantity}")]
    Overflow { quantity: &'static str },

    /// A currency code other than USD or MAD
    #[error("unsupported currency: {code}")]
    UnsupportedCurrency { code: String },
}

/// Result type alias for pricing operations
pub type PricingResult<T> = Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PricingError::InvalidDimension {
            axis: "height",
            value: Decimal::ZERO,
        };
        assert_eq!(
            err.to_string(),
            "invalid dimension: height must be positive, got 0"
        );

        let err = PricingError::InvalidPackageCount { count: -3 };
        assert_eq!(
            err.to_string(),
            "invalid package count: -3 is out of range"
        );

        let err = PricingError::Overflow { quantity: "volume" };
        assert_eq!(err.to_string(), "arithmetic overflow while computing volume");

        let err = PricingError::UnsupportedCurrency {
            code: "EUR".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported currency: EUR");
    }

    #[test]
    fn test_error_equality() {
        let a = PricingError::InvalidWeight {
            value: Decimal::ZERO,
        };
        assert_eq!(a.clone(), a);
        assert_ne!(
            a,
            PricingError::InvalidDeclaredValue {
                value: Decimal::ZERO
            }
        );
    }
}
