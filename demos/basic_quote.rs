// ============================================================================
// Basic Quote Example
// ============================================================================

use parcel_pricing::prelude::*;
use rust_decimal::Decimal;

fn main() {
    #[cfg(feature = "logging")]
    parcel_pricing::utils::init_logging("parcel_pricing=debug");

    println!("=== Parcel Pricing Example ===\n");

    let engine = PricingEngine::standard();

    // Savings preview while the customer is still picking packages
    println!("Savings preview (2 kg average):");
    for count in 1i64..=6 {
        let estimate = engine.consolidation_savings_default(count);
        println!(
            "  {} package(s): separate {} / consolidated {} + fee {} -> save {} {}",
            count,
            estimate.separate_shipping_cost,
            estimate.consolidated_shipping_cost,
            estimate.consolidation_fee,
            estimate.total_savings,
            estimate.currency
        );
    }

    // Consolidation request
    println!("\n=== Consolidation ===");
    let prefs = ConsolidationPreferences::new()
        .with_remove_packaging(true)
        .with_protection(true);
    let cost = engine.consolidation_cost(4, &prefs);
    println!(
        "  base {} + protection {} + photos {} = {} {}",
        cost.base, cost.protection, cost.photos, cost.total, cost.currency
    );

    // Photo request
    println!("\n=== Photo Request ===");
    let photos = engine.photo_request_cost(3, true);
    println!(
        "  {} photo(s) {} + information {} = {} {}",
        photos.photo_count, photos.photos_cost, photos.information_cost, photos.total, photos.currency
    );

    // Shipment quotes across carriers
    println!("\n=== Shipment Quotes ===");
    let dims = Dimensions::inches(Decimal::from(16), Decimal::from(12), Decimal::from(10));
    for name in ["DHL", "FedEx", "UPS", "Aramex", "Local Courier"] {
        let request = ShipmentRequest::new(Carrier::parse(name), Decimal::from(6), dims)
            .with_declared_value(Decimal::from(4000), Currency::Mad);

        match engine.quote_shipment(&request) {
            Ok(quote) => {
                let premium = quote.insurance.map_or(Decimal::ZERO, |i| i.cost);
                println!(
                    "  {:<14} billable {} kg, shipping {} + insurance {} = {} {}",
                    name,
                    quote.weight.billable_weight,
                    quote.shipping_cost,
                    premium,
                    quote.total,
                    quote.currency
                );
            }
            Err(e) => println!("  {:<14} rejected: {}", name, e),
        }
    }

    // Corrupt package data is reported, not corrected
    println!("\n=== Invalid Package ===");
    let flat = Dimensions::cm(Decimal::from(30), Decimal::from(20), Decimal::ZERO);
    if let Err(e) = engine.billable_weight(Decimal::ONE, &flat) {
        println!("  {}", e);
    }
}
