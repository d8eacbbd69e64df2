//! countries — Command-line interface for countries-core
//!
//! Inspect the ISO 3166 dataset from your terminal: look countries up by
//! code or name, list subdivisions, show currencies, and run the integrity
//! checks that the library performs at load time.
//!
//! Usage examples
//! --------------
//!
//! - Show details for a country by code (alpha-2 or alpha-3, any case)
//!   $ countries country us
//!   $ countries country deu
//!
//! - Exact name lookup (primary or alternate name)
//!   $ countries name "Polonia"
//!
//! - List subdivisions
//!   $ countries subdivisions US
//!
//! - Validate a custom dataset directory
//!   $ countries --data-dir ./my-data check
//!
//! Set `RUST_LOG=debug` to see what the loader is doing.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use countries_core::{Country, CountrySearch, Dataset};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let data_dir = args.data_dir.unwrap_or_else(Dataset::default_data_dir);
    let db = Dataset::load_from_dir(&data_dir)
        .with_context(|| format!("loading dataset from {}", data_dir.display()))?;
    tracing::debug!(dir = %data_dir.display(), "dataset loaded");

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Dataset statistics:");
                println!("  Countries: {}", stats.countries);
                println!("  Subdivisions: {}", stats.subdivisions);
                println!("  Currencies: {}", stats.currencies);
            }
        }

        Commands::Countries => {
            for c in db.countries() {
                println!("{} {} {}", c.alpha2(), c.alpha3(), c.name());
            }
        }

        Commands::Country { code } => match lookup(&db, &code) {
            Some(c) if args.json => println!("{}", serde_json::to_string_pretty(c.record())?),
            Some(c) => print_country(&c)?,
            None => eprintln!("No country found for: {code}"),
        },

        Commands::Name { name } => match db.find_by_name(&name) {
            Some(c) if args.json => println!("{}", serde_json::to_string_pretty(c.record())?),
            Some(c) => print_country(&c)?,
            None => eprintln!("No country named: {name}"),
        },

        Commands::Subdivisions { code } => match lookup(&db, &code) {
            Some(c) if args.json => {
                println!("{}", serde_json::to_string_pretty(c.subdivisions().as_slice())?)
            }
            Some(c) => {
                let subs = c.subdivisions();
                println!("Subdivisions of {} ({}):", c.name(), subs.len());
                for s in subs {
                    match s.category() {
                        Some(cat) => println!("- {} {} ({cat})", s.full_code(), s.name()),
                        None => println!("- {} {}", s.full_code(), s.name()),
                    }
                }
            }
            None => eprintln!("Country {code} not found"),
        },

        Commands::Currency { code } => match lookup(&db, &code) {
            Some(c) => match c.currency()? {
                Some(cur) if args.json => println!("{}", serde_json::to_string_pretty(cur)?),
                Some(cur) => {
                    println!("{} ({}) {}", cur.code(), cur.number(), cur.name());
                    println!("Symbol: {}", cur.symbol());
                    if let Some(sub) = cur.subunit() {
                        println!("Subunit: {} (1/{})", sub, cur.subunit_to_unit());
                    }
                    let users: Vec<_> = db
                        .find_all_by_currency(cur.code())
                        .iter()
                        .map(|c| c.alpha2())
                        .collect();
                    println!("Used by: {}", users.join(", "));
                }
                None => println!("{} has no currency", c.name()),
            },
            None => eprintln!("Country {code} not found"),
        },

        Commands::Region { region } => {
            let mut hits = db.find_all_by_region(&region);
            if hits.is_empty() {
                hits = db.find_all_by_subregion(&region);
            }
            if hits.is_empty() {
                println!("No countries in region: {region}");
            }
            for c in hits {
                println!("{} {} ({})", c.alpha2(), c.name(), c.subregion());
            }
        }

        Commands::Search { query } => {
            let hits = db.find_countries_by_substring(&query);
            if hits.is_empty() {
                println!("No countries matching: {query}");
            }
            for c in hits {
                println!("{} {}", c.alpha2(), c.name());
            }
        }

        Commands::Check => {
            // Duplicate codes and names already fail the load above.
            let issues = db.currency_issues();
            let names: usize = db.data().iter().map(|c| 1 + c.names.len()).sum();
            println!(
                "Checked {} countries, {} names, {} subdivisions, {} currencies",
                db.stats().countries,
                names,
                db.stats().subdivisions,
                db.stats().currencies
            );
            for issue in &issues {
                println!("- {issue}");
            }
            if !issues.is_empty() {
                bail!("{} integrity issue(s) found", issues.len());
            }
            println!("OK");
        }

        Commands::BuildCache { out } => {
            db.save_as(&out)
                .with_context(|| format!("writing snapshot to {}", out.display()))?;
            println!("Wrote {}", out.display());
        }
    }

    Ok(())
}

/// Code lookup with the case normalization the library leaves to callers.
fn lookup<'a>(db: &'a Dataset, code: &str) -> Option<Country<'a>> {
    db.search(&code.trim().to_ascii_uppercase())
}

fn print_country(c: &Country<'_>) -> anyhow::Result<()> {
    println!("Country: {}", c.name());
    if !c.names().is_empty() {
        println!("Also known as: {}", c.names().join(", "));
    }
    println!("Alpha-2: {}", c.alpha2());
    println!("Alpha-3: {}", c.alpha3());
    println!("Numeric: {}", c.number());
    println!("Region: {} / {}", c.region(), c.subregion());
    println!("Coordinates: {}, {}", c.latitude(), c.longitude());
    println!("Calling code: +{}", c.country_code());
    println!(
        "Prefixes: international {}, national {}",
        c.international_prefix(),
        c.national_prefix()
    );
    println!(
        "Number lengths: NDC {:?}, national {:?}",
        c.national_destination_code_lengths(),
        c.national_number_lengths()
    );
    match c.currency()? {
        Some(cur) => println!("Currency: {} ({})", cur.code(), cur.symbol()),
        None => println!("Currency: none"),
    }
    println!("Subdivisions: {}", c.subdivisions().len());
    Ok(())
}
