// crates/countries-core/src/country.rs

//! The composed, read-only view of one country.

use crate::error::Result;
use crate::model::{CountryRecord, Currency, Dataset};
use crate::subdivisions::Subdivisions;
use crate::traits::CountrySearch;
use std::fmt;

/// A country as returned by the search methods.
///
/// `Country` does not own any data: it pairs a record with the dataset it
/// lives in, so the derived accessors ([`Country::currency`],
/// [`Country::subdivisions`]) can consult the side tables on demand. It is
/// `Copy` and cheap to pass around.
#[derive(Clone, Copy)]
pub struct Country<'a> {
    dataset: &'a Dataset,
    record: &'a CountryRecord,
}

impl Country<'static> {
    /// Code lookup on the process-wide dataset (alpha-2, then alpha-3).
    ///
    /// The outer `Result` only fails if the dataset itself cannot be
    /// loaded; an unknown code is `Ok(None)`.
    ///
    /// ```no_run
    /// use countries_core::Country;
    ///
    /// let us = Country::search("US")?.expect("bundled");
    /// assert_eq!(us.number(), "840");
    /// assert!(Country::search("ZZ")?.is_none());
    /// # Ok::<(), countries_core::CountryError>(())
    /// ```
    pub fn search(identifier: &str) -> Result<Option<Country<'static>>> {
        Ok(Dataset::load()?.search(identifier))
    }

    /// Exact name lookup on the process-wide dataset.
    pub fn find_by_name(name: &str) -> Result<Option<Country<'static>>> {
        Ok(Dataset::load()?.find_by_name(name))
    }
}

impl<'a> Country<'a> {
    pub(crate) fn new(dataset: &'a Dataset, record: &'a CountryRecord) -> Self {
        Self { dataset, record }
    }

    /// The backing record.
    pub fn record(&self) -> &'a CountryRecord {
        self.record
    }

    pub fn alpha2(&self) -> &'a str {
        &self.record.alpha2
    }

    pub fn alpha3(&self) -> &'a str {
        &self.record.alpha3
    }

    pub fn number(&self) -> &'a str {
        &self.record.number
    }

    pub fn name(&self) -> &'a str {
        &self.record.name
    }

    pub fn names(&self) -> &'a [String] {
        &self.record.names
    }

    pub fn latitude(&self) -> &'a str {
        &self.record.latitude
    }

    pub fn longitude(&self) -> &'a str {
        &self.record.longitude
    }

    pub fn region(&self) -> &'a str {
        &self.record.region
    }

    pub fn subregion(&self) -> &'a str {
        &self.record.subregion
    }

    /// E.164 country calling code without the `+`.
    pub fn country_code(&self) -> &'a str {
        &self.record.country_code
    }

    pub fn national_destination_code_lengths(&self) -> &'a [u8] {
        &self.record.national_destination_code_lengths
    }

    pub fn national_number_lengths(&self) -> &'a [u8] {
        &self.record.national_number_lengths
    }

    pub fn international_prefix(&self) -> &'a str {
        &self.record.international_prefix
    }

    pub fn national_prefix(&self) -> &'a str {
        &self.record.national_prefix
    }

    pub fn currency_code(&self) -> Option<&'a str> {
        self.record.currency_code.as_deref()
    }

    /// The full currency record.
    ///
    /// `Ok(None)` for territories without a currency. A currency code that
    /// is missing from the currency table is a data-integrity error.
    pub fn currency(&self) -> Result<Option<&'a Currency>> {
        match self.currency_code() {
            Some(code) => self.dataset.resolve_currency(self.alpha2(), code).map(Some),
            None => Ok(None),
        }
    }

    /// ISO 3166-2 subdivisions, empty if the country has none.
    pub fn subdivisions(&self) -> Subdivisions<'a> {
        self.dataset.subdivisions_of(self.record)
    }

    /// Alias for [`Country::subdivisions`].
    pub fn states(&self) -> Subdivisions<'a> {
        self.subdivisions()
    }
}

impl PartialEq for Country<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.record.alpha2 == other.record.alpha2
    }
}

impl Eq for Country<'_> {}

impl fmt::Debug for Country<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Country")
            .field("alpha2", &self.record.alpha2)
            .field("alpha3", &self.record.alpha3)
            .field("name", &self.record.name)
            .finish()
    }
}

impl fmt::Display for Country<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.record.name)
    }
}
