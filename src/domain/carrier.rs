// ============================================================================
// Carrier
// International carriers the service books shipments with
// ============================================================================

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outbound carrier.
///
/// Parsing never fails: a name that matches no known carrier becomes
/// [`Carrier::Unknown`], which is priced at the fallback multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum Carrier {
    Dhl,
    FedEx,
    Ups,
    /// Baseline carrier, no markup
    Aramex,
    Unknown,
}

impl Carrier {
    /// All carriers with a dedicated rate
    pub const KNOWN: [Carrier; 4] = [Carrier::Dhl, Carrier::FedEx, Carrier::Ups, Carrier::Aramex];

    /// Case-insensitive lookup, falling back to `Unknown`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dhl" => Carrier::Dhl,
            "fedex" | "fed-ex" => Carrier::FedEx,
            "ups" => Carrier::Ups,
            "aramex" => Carrier::Aramex,
            _ => Carrier::Unknown,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Carrier::Dhl => "DHL",
            Carrier::FedEx => "FedEx",
            Carrier::Ups => "UPS",
            Carrier::Aramex => "Aramex",
            Carrier::Unknown => "Unknown",
        }
    }

    pub fn is_known(self) -> bool {
        !matches!(self, Carrier::Unknown)
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Carrier {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Carrier::parse(s))
    }
}

impl From<String> for Carrier {
    fn from(name: String) -> Self {
        Carrier::parse(&name)
    }
}

impl From<Carrier> for String {
    fn from(carrier: Carrier) -> Self {
        carrier.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_carriers() {
        assert_eq!(Carrier::parse("DHL"), Carrier::Dhl);
        assert_eq!(Carrier::parse("fedex"), Carrier::FedEx);
        assert_eq!(Carrier::parse(" Ups "), Carrier::Ups);
        assert_eq!(Carrier::parse("ARAMEX"), Carrier::Aramex);
    }

    #[test]
    fn test_unknown_carrier_falls_back() {
        let carrier: Carrier = "Pigeon Post".parse().unwrap();
        assert_eq!(carrier, Carrier::Unknown);
        assert!(!carrier.is_known());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for carrier in Carrier::KNOWN {
            assert_eq!(Carrier::parse(&carrier.to_string()), carrier);
        }
    }
}
