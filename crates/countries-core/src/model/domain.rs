// crates/countries-core/src/model/domain.rs
use crate::index::Indices;
use serde::Serialize;
use std::collections::HashMap;
use std::ops::Range;

/// The master dataset.
///
/// Countries, subdivisions and currencies live in flat vectors; every
/// country knows the contiguous range of its subdivisions. The struct is
/// built once (see [`Dataset::from_raw`]) and never mutated, so a shared
/// reference can be handed to any number of threads.
#[derive(Clone, Debug)]
pub struct Dataset {
    /// Country records in source order.
    pub(crate) countries: Vec<CountryRecord>,
    /// All subdivisions, grouped per country.
    pub(crate) subdivisions: Vec<Subdivision>,
    /// Currency records in source order.
    pub(crate) currencies: Vec<Currency>,

    /// Primary key: alpha-2 -> position in `countries`.
    pub(crate) by_alpha2: HashMap<String, u16>,
    /// Currency code -> position in `currencies`.
    pub(crate) currency_by_code: HashMap<String, u16>,

    /// Secondary lookups (alpha-3, names).
    pub(crate) index: Indices,
}

/// One ISO 3166-1 country row with its E.164 metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CountryRecord {
    pub alpha2: String,
    pub alpha3: String,
    /// ISO 3166-1 numeric code, zero padded ("040").
    pub number: String,
    pub name: String,
    /// Alternate (localized or common) names.
    pub names: Vec<String>,
    /// Degree/minute/hemisphere text, e.g. "38 00 N".
    pub latitude: String,
    pub longitude: String,
    pub region: String,
    pub subregion: String,

    // E.164
    pub country_code: String,
    pub national_destination_code_lengths: Vec<u8>,
    pub national_number_lengths: Vec<u8>,
    pub international_prefix: String,
    pub national_prefix: String,

    /// ISO 4217 code, absent for territories without a currency.
    pub currency_code: Option<String>,

    /// Range into the master `subdivisions` vector.
    #[serde(skip)]
    pub(crate) subdivisions_range: Range<u32>,
}

/// An ISO 3166-2 subdivision (state, province, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Subdivision {
    /// Row id of the owning country.
    #[serde(skip)]
    pub(crate) country_id: u16,
    pub code: String,      // e.g. "CA"
    pub full_code: String, // e.g. "US-CA"
    pub name: String,
    pub names: Vec<String>,
    pub category: Option<String>,
}

/// An ISO 4217 currency.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: String,
    /// ISO 4217 numeric code ("978").
    pub number: String,
    pub name: String,
    pub symbol: String,
    /// Number of decimal places; `None` for units without a minor unit.
    pub minor_unit: Option<u8>,
    pub subunit: Option<String>,
}
