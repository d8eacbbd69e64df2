// crates/countries-core/src/search.rs
use crate::country::Country;
use crate::model::Dataset;
use crate::text::fold_key;
use crate::traits::{CountriesIter, CountrySearch};

impl CountrySearch for Dataset {
    fn search_by_alpha2(&self, code: &str) -> Option<Country<'_>> {
        self.record(code).map(|r| Country::new(self, r))
    }

    fn search_by_alpha3(&self, code: &str) -> Option<Country<'_>> {
        // One indirection: alpha-3 -> alpha-2 -> record.
        let alpha2 = self.index.alpha2_for_alpha3(code)?;
        self.search_by_alpha2(alpha2)
    }

    fn find_by_name(&self, name: &str) -> Option<Country<'_>> {
        let alpha2 = self.index.alpha2_for_name(name)?;
        self.search_by_alpha2(alpha2)
    }

    fn countries(&self) -> CountriesIter<'_> {
        Box::new(self.countries.iter().map(move |r| Country::new(self, r)))
    }

    fn find_all_by_region(&self, region: &str) -> Vec<Country<'_>> {
        self.filter_countries(|c| c.region() == region)
    }

    fn find_all_by_subregion(&self, subregion: &str) -> Vec<Country<'_>> {
        self.filter_countries(|c| c.subregion() == subregion)
    }

    fn find_all_by_currency(&self, currency_code: &str) -> Vec<Country<'_>> {
        self.filter_countries(|c| c.currency_code() == Some(currency_code))
    }

    fn find_all_by_country_code(&self, country_code: &str) -> Vec<Country<'_>> {
        let code = country_code.trim().trim_start_matches('+');
        if code.is_empty() {
            return Vec::new();
        }
        self.filter_countries(|c| c.country_code() == code)
    }

    fn find_countries_by_substring(&self, substr: &str) -> Vec<Country<'_>> {
        let q = fold_key(substr.trim());
        if q.is_empty() {
            return Vec::new();
        }

        self.filter_countries(|c| {
            std::iter::once(c.name())
                .chain(c.names().iter().map(String::as_str))
                .any(|n| fold_key(n).contains(&q))
        })
    }
}

impl Dataset {
    // Linear scan is fine for a few hundred countries.
    fn filter_countries<F>(&self, mut pred: F) -> Vec<Country<'_>>
    where
        F: FnMut(&Country<'_>) -> bool,
    {
        self.countries
            .iter()
            .map(|r| Country::new(self, r))
            .filter(|c| pred(c))
            .collect()
    }
}
