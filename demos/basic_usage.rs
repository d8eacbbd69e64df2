//! Basic usage example for countries-rs
//!
//! This example demonstrates how to:
//! - Load the country dataset
//! - Look countries up by code and by name
//! - Compose currencies and subdivisions
//! - Handle "not found" results

use countries_core::prelude::*;

fn main() -> Result<()> {
    println!("=== countries-rs Basic Usage Example ===\n");

    println!("Loading country dataset...");
    let db = Dataset::load()?;
    let stats = db.stats();
    println!(
        "✓ Loaded {} countries, {} subdivisions, {} currencies\n",
        stats.countries, stats.subdivisions, stats.currencies
    );

    // Example 1: Code lookups
    println!("--- Example 1: Search by alpha-2 / alpha-3 ---");
    for code in ["US", "DEU", "ZZ"] {
        match db.search(code) {
            Some(c) => println!("{code}: {} ({} / {} / {})", c.name(), c.alpha2(), c.alpha3(), c.number()),
            None => println!("{code}: not found"),
        }
    }
    println!();

    // Example 2: Names and alternate names
    println!("--- Example 2: Find by name ---");
    for name in ["Poland", "Polonia", "poland"] {
        match db.find_by_name(name) {
            Some(c) => println!("{name:?} -> {}", c.alpha2()),
            None => println!("{name:?} -> not found (matching is exact)"),
        }
    }
    println!();

    // Example 3: Currency composition
    println!("--- Example 3: Currencies ---");
    for code in ["US", "NO", "AQ"] {
        if let Some(c) = db.search(code) {
            match c.currency()? {
                Some(cur) => println!("{}: {} {}", c.name(), cur.code(), cur.symbol()),
                None => println!("{}: no currency", c.name()),
            }
        }
    }
    let nok: Vec<_> = db.find_all_by_currency("NOK").iter().map(|c| c.alpha2()).collect();
    println!("NOK is used by: {}\n", nok.join(", "));

    // Example 4: Subdivisions
    println!("--- Example 4: Subdivisions ---");
    if let Some(us) = db.search("US") {
        let states = us.states();
        println!("Subdivisions in {}: {}", us.name(), states.len());
        for s in states.iter().take(5) {
            println!("- {} {}", s.full_code(), s.name());
        }
        println!("... and {} more", states.len() - 5);
    }
    if let Some(va) = db.search("VA") {
        println!("Subdivisions in {}: {}", va.name(), va.subdivisions().len());
    }

    Ok(())
}
