// crates/countries-core/src/model/store.rs
use super::convert;
use super::domain::{CountryRecord, Currency, Dataset, Subdivision};
use crate::common::DbStats;
use crate::error::Result;
use crate::raw::RawDataset;
use crate::subdivisions::Subdivisions;

impl Dataset {
    /// Builds a validated dataset from already-parsed tables.
    pub fn from_raw(raw: RawDataset) -> Result<Self> {
        convert::from_raw(raw)
    }

    /// Reconstructs the raw tables this dataset was built from.
    pub fn to_raw(&self) -> RawDataset {
        convert::to_raw(self)
    }

    /// All country records, in source order.
    ///
    /// This is the diagnostic view used by integrity checks; normal
    /// callers go through the search methods.
    pub fn data(&self) -> &[CountryRecord] {
        &self.countries
    }

    /// The country record stored under `alpha2` (case-sensitive).
    pub fn record(&self, alpha2: &str) -> Option<&CountryRecord> {
        self.by_alpha2
            .get(alpha2)
            .map(|&id| &self.countries[id as usize])
    }

    /// Subdivisions of the country stored under `alpha2`.
    ///
    /// Empty (never an error) for unknown codes or countries without
    /// ISO 3166-2 entries.
    pub fn subdivisions_for(&self, alpha2: &str) -> Subdivisions<'_> {
        self.record(alpha2)
            .map(|c| self.subdivisions_of(c))
            .unwrap_or_default()
    }

    pub(crate) fn subdivisions_of(&self, record: &CountryRecord) -> Subdivisions<'_> {
        let range = &record.subdivisions_range;
        Subdivisions::new(&self.subdivisions[range.start as usize..range.end as usize])
    }

    /// The country owning a subdivision taken from this dataset.
    pub fn country_of(&self, subdivision: &Subdivision) -> Option<&CountryRecord> {
        self.countries.get(subdivision.country_id as usize)
    }

    /// The currency stored under `code`, e.g. "EUR".
    pub fn currency(&self, code: &str) -> Option<&Currency> {
        self.currency_by_code
            .get(code)
            .map(|&id| &self.currencies[id as usize])
    }

    /// All currency records, in source order.
    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    pub fn stats(&self) -> DbStats {
        DbStats {
            countries: self.countries.len(),
            subdivisions: self.subdivisions.len(),
            currencies: self.currencies.len(),
        }
    }
}
