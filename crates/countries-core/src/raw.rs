// crates/countries-core/src/raw.rs

//! Raw table rows as they come from the source files.
//!
//! These mirror the external dataset one-to-one. They are also what a
//! binary snapshot stores, so loading a snapshot goes through the same
//! validation as loading JSON.

use serde::{Deserialize, Serialize};

/// Raw country row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRaw {
    pub alpha2: String,
    pub alpha3: String,
    pub number: String,
    pub name: String,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub national_destination_code_lengths: Vec<u8>,
    #[serde(default)]
    pub national_number_lengths: Vec<u8>,
    #[serde(default)]
    pub international_prefix: String,
    #[serde(default)]
    pub national_prefix: String,
    #[serde(default)]
    pub currency_code: Option<String>,
}

/// Raw subdivision row, e.g. `{ "code": "CA", "name": "California" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubdivisionRaw {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// All subdivisions of one country, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubdivisionGroupRaw {
    /// Alpha-2 code of the owning country.
    pub country: String,
    #[serde(default)]
    pub subdivisions: Vec<SubdivisionRaw>,
}

/// Raw ISO 4217 currency row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRaw {
    pub code: String,
    pub number: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub minor_unit: Option<u8>,
    #[serde(default)]
    pub subunit: Option<String>,
}

/// The three source tables together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDataset {
    pub countries: Vec<CountryRaw>,
    pub subdivisions: Vec<SubdivisionGroupRaw>,
    pub currencies: Vec<CurrencyRaw>,
}
