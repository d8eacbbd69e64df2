use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for countries-cli
#[derive(Debug, Parser)]
#[command(
    name = "countries",
    version,
    about = "CLI for querying and checking the ISO 3166 country dataset"
)]
pub struct CliArgs {
    /// Directory holding countries.json, subdivisions.json and currencies.json
    /// (default: the data directory bundled with countries-core)
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print records as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset contents
    Stats,

    /// List all countries
    Countries,

    /// Lookup a country by alpha-2 or alpha-3 code
    Country {
        /// Alpha-2 or alpha-3 code (e.g. DE, USA); upper-cased before lookup
        code: String,
    },

    /// Lookup a country by exact name or alternate name
    Name {
        /// Name as stored, e.g. "Poland" or "Polonia"
        name: String,
    },

    /// List the ISO 3166-2 subdivisions of a country
    Subdivisions {
        /// Alpha-2 or alpha-3 code of the country
        code: String,
    },

    /// Show the currency of a country
    Currency {
        /// Alpha-2 or alpha-3 code of the country
        code: String,
    },

    /// List countries in a region or subregion
    Region {
        /// Region ("Europe") or subregion ("Northern Europe")
        region: String,
    },

    /// Search names and alternate names for a substring (accent-insensitive)
    Search {
        query: String,
    },

    /// Run all dataset integrity checks
    Check,

    /// Write a binary snapshot of the dataset (gzip if the name ends in .gz)
    BuildCache {
        /// Output path, e.g. data/countries.bin
        out: PathBuf,
    },
}
