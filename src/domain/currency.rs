// ============================================================================
// Currency
// ============================================================================

use crate::numeric::PricingError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Currencies a declared value may be expressed in.
///
/// Every invoice is settled in [`Currency::SETTLEMENT`] regardless of the
/// currency the customer used for input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Currency {
    /// US dollar
    Usd,
    /// Moroccan dirham
    Mad,
}

impl Currency {
    /// Currency of every fee, premium and estimate produced by the engine
    pub const SETTLEMENT: Currency = Currency::Mad;

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Mad => "MAD",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::SETTLEMENT
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "MAD" => Ok(Currency::Mad),
            other => Err(PricingError::UnsupportedCurrency {
                code: other.to_string(),
            }),
        }
    }
}
