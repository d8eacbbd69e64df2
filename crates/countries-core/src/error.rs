// crates/countries-core/src/error.rs

//! Error types for loading and composing the country dataset.
//!
//! "Not found" is never an error here: lookups return `Option`. Everything
//! below is either an I/O problem while reading the tables or a
//! data-integrity problem that makes the dataset unsafe to serve.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum CountryError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A source table could not be parsed.
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A binary snapshot could not be encoded or decoded.
    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    /// A dataset file is missing.
    #[error("not found: {0}")]
    NotFound(String),

    /// Two country records share an alpha-2 code.
    #[error("duplicate alpha-2 code {0}")]
    DuplicateAlpha2(String),

    /// Two country records share an alpha-3 code.
    #[error("duplicate alpha-3 code {code} (used by {first} and {second})")]
    DuplicateAlpha3 {
        code: String,
        first: String,
        second: String,
    },

    /// A name or alternate name is claimed by two countries.
    #[error("name {name:?} is used by both {first} and {second}")]
    DuplicateName {
        name: String,
        first: String,
        second: String,
    },

    /// Two currency records share a code.
    #[error("duplicate currency code {0}")]
    DuplicateCurrency(String),

    /// A subdivision code appears twice within one country.
    #[error("duplicate subdivision {country}-{code}")]
    DuplicateSubdivision { country: String, code: String },

    /// Subdivisions were supplied for a country that is not in the dataset.
    #[error("subdivisions reference unknown country {0}")]
    UnknownCountry(String),

    /// A country references a currency code absent from the currency table.
    #[error("country {country} references unknown currency {code}")]
    MissingCurrency { country: String, code: String },

    /// Structurally invalid data (bad code shapes, repeated groups, ...).
    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl CountryError {
    /// True for errors caused by the content of the dataset rather than by
    /// reading it.
    pub fn is_data_integrity(&self) -> bool {
        matches!(
            self,
            CountryError::DuplicateAlpha2(_)
                | CountryError::DuplicateAlpha3 { .. }
                | CountryError::DuplicateName { .. }
                | CountryError::DuplicateCurrency(_)
                | CountryError::DuplicateSubdivision { .. }
                | CountryError::UnknownCountry(_)
                | CountryError::MissingCurrency { .. }
                | CountryError::InvalidData(_)
        )
    }
}

/// A convenience `Result` type alias using the crate's `CountryError` type.
pub type Result<T> = std::result::Result<T, CountryError>;
