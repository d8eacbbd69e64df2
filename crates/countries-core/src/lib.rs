// crates/countries-core/src/lib.rs

//! # countries-core
//!
//! ISO 3166-1 country lookups with ISO 4217 currencies, E.164 telephone
//! metadata and ISO 3166-2 subdivisions.
//!
//! The dataset is loaded once, validated (unique codes and names), indexed
//! and then only read. Lookups return a lightweight [`Country`] view; its
//! currency and subdivisions are composed from side tables on access.
//!
//! The tables bundled under `data/` are a sample (35 countries, with
//! subdivisions for six of them), so codes such as `FI` are not found.
//! Point [`Dataset::load_from_dir`] at complete tables in the same format
//! for full coverage.
//!
//! ```no_run
//! use countries_core::{Country, CountrySearch, Dataset};
//!
//! # fn main() -> countries_core::Result<()> {
//! let us = Country::search("US")?.expect("bundled dataset has US");
//! assert_eq!(us.alpha3(), "USA");
//! assert_eq!(us.subdivisions().len(), 57);
//! assert_eq!(us.currency()?.map(|c| c.symbol()), Some("$"));
//!
//! let db = Dataset::load()?;
//! assert_eq!(db.find_by_name("Polonia").map(|c| c.alpha2()), Some("PL"));
//! # Ok(())
//! # }
//! ```
//!
//! Codes are matched case-sensitively against the stored upper-case form.
//! Normalize user input (`to_ascii_uppercase`) before calling.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod country;
mod currency;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod raw;
mod search;
pub mod subdivisions;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::country::Country;
pub use crate::error::{CountryError, Result};
pub use crate::model::{CountryRecord, Currency, Dataset, Subdivision};
pub use crate::subdivisions::Subdivisions;
// Export the Search Trait (Crucial for users!)
pub use crate::traits::{CountrySearch, NameMatch};

/// Bring common types and traits into scope.
pub mod prelude {
    pub use crate::{
        Country, CountryError, CountryRecord, CountrySearch, Currency, Dataset, DbStats,
        NameMatch, Result, Subdivision, Subdivisions,
    };
}
