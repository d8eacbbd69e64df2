// crates/countries-core/src/traits.rs
use crate::country::Country;
use crate::text::fold_key;

/// An iterator over country views. `Box<dyn ...>` keeps the trait object
/// safe regardless of the backing storage.
pub type CountriesIter<'a> = Box<dyn Iterator<Item = Country<'a>> + 'a>;

/// Lookup operations over a loaded dataset.
///
/// The code and name lookups are exact and hash-indexed. The `find_all_*`
/// helpers and the substring search scan all countries and are meant for
/// listings, not hot paths.
///
/// # Example
///
/// ```no_run
/// use countries_core::{CountrySearch, Dataset};
///
/// let db = Dataset::load().unwrap();
///
/// let us = db.search("US").unwrap();
/// assert_eq!(us.alpha3(), "USA");
///
/// let pl = db.find_by_name("Polonia").unwrap();
/// assert_eq!(pl.alpha2(), "PL");
///
/// assert!(db.search("ZZ").is_none());
/// ```
pub trait CountrySearch {
    /// Exact alpha-2 lookup.
    ///
    /// Codes are stored upper case and compared case-sensitively; callers
    /// are expected to normalize input (`"us"` does not match).
    fn search_by_alpha2(&self, code: &str) -> Option<Country<'_>>;

    /// Exact alpha-3 lookup through the alpha-3 index. Same case rules as
    /// [`CountrySearch::search_by_alpha2`].
    fn search_by_alpha3(&self, code: &str) -> Option<Country<'_>>;

    /// Exact name lookup: primary names first, then alternate names.
    /// No case folding and no fuzzy matching.
    fn find_by_name(&self, name: &str) -> Option<Country<'_>>;

    /// Code lookup trying alpha-2 first, then alpha-3.
    fn search(&self, identifier: &str) -> Option<Country<'_>> {
        self.search_by_alpha2(identifier)
            .or_else(|| self.search_by_alpha3(identifier))
    }

    /// All countries in source order.
    fn countries(&self) -> CountriesIter<'_>;

    fn find_all_by_region(&self, region: &str) -> Vec<Country<'_>>;
    fn find_all_by_subregion(&self, subregion: &str) -> Vec<Country<'_>>;

    /// Countries using the given ISO 4217 currency (shared-currency zones
    /// return several).
    fn find_all_by_currency(&self, currency_code: &str) -> Vec<Country<'_>>;

    /// Countries sharing an E.164 calling code ("1" -> US, CA, PR, ...).
    /// A leading `+` is ignored.
    fn find_all_by_country_code(&self, country_code: &str) -> Vec<Country<'_>>;

    /// Accent- and case-insensitive substring search over names and
    /// alternate names.
    fn find_countries_by_substring(&self, substr: &str) -> Vec<Country<'_>>;
}

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Comparisons are accent-insensitive and case-insensitive via [`fold_key`].
///
/// # Examples
/// ```rust
/// use countries_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Österreich").is_named("osterreich"));
/// assert!(Place("Thüringen").name_contains("thur"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

impl NameMatch for crate::model::Subdivision {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Country<'_> {
    fn name_str(&self) -> &str {
        self.name()
    }
}
