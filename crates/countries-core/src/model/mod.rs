// crates/countries-core/src/model/mod.rs
pub mod convert;
pub mod domain;
mod store;

pub use domain::{CountryRecord, Currency, Dataset, Subdivision};
