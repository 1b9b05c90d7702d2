// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod exchange_rate;

pub use exchange_rate::{ExchangeRateProvider, FixedExchangeRate};
