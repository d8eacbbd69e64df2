// crates/countries-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'json' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "json")]

use super::common_io::{locate, open_stream};
use super::{COUNTRIES_FILE, CURRENCIES_FILE, SUBDIVISIONS_FILE};
use crate::error::{CountryError, Result};
use crate::raw::RawDataset;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// The source files present in `dir`, in the order countries,
/// subdivisions, currencies.
pub fn source_files(dir: &Path) -> Vec<PathBuf> {
    [COUNTRIES_FILE, SUBDIVISIONS_FILE, CURRENCIES_FILE]
        .iter()
        .filter_map(|f| locate(dir, f))
        .collect()
}

/// Parses the three source tables in `dir`.
///
/// `countries.json` and `currencies.json` are required. A missing
/// `subdivisions.json` simply means no country has subdivisions.
pub fn read_raw_dir(dir: &Path) -> Result<RawDataset> {
    let countries_path = require(dir, COUNTRIES_FILE)?;
    let currencies_path = require(dir, CURRENCIES_FILE)?;

    let countries = read_table(&countries_path)?;
    let currencies = read_table(&currencies_path)?;
    let subdivisions = match locate(dir, SUBDIVISIONS_FILE) {
        Some(path) => read_table(&path)?,
        None => {
            tracing::debug!(dir = %dir.display(), "no subdivision table");
            Vec::new()
        }
    };

    Ok(RawDataset {
        countries,
        subdivisions,
        currencies,
    })
}

/// Reads one JSON table (plain or `.gz`).
pub fn read_table<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = open_stream(path)?;
    let table = serde_json::from_reader(reader)?;
    Ok(table)
}

fn require(dir: &Path, file: &str) -> Result<PathBuf> {
    locate(dir, file).ok_or_else(|| {
        CountryError::NotFound(format!("{file} not found in {}", dir.display()))
    })
}
