// crates/countries-core/src/index.rs

//! # Secondary Indices
//!
//! Derived lookup tables built in one pass over the country records:
//!
//! - alpha-3 -> alpha-2
//! - primary name -> alpha-2
//! - alternate name -> alpha-2
//!
//! The indices are rebuilt from the records every time a [`Dataset`] is
//! constructed and are never modified afterwards. A key claimed by two
//! different countries is a data-integrity error; later entries never
//! overwrite earlier ones.
//!
//! [`Dataset`]: crate::Dataset

use crate::error::{CountryError, Result};
use crate::model::CountryRecord;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct Indices {
    alpha3: HashMap<String, String>,
    names: HashMap<String, String>,
    alternate_names: HashMap<String, String>,
}

impl Indices {
    /// Builds all secondary indices from the country records.
    ///
    /// A country may repeat its own name inside its alternate names; that
    /// is tolerated. The same string used by two countries is not.
    pub fn build(countries: &[CountryRecord]) -> Result<Self> {
        let mut index = Indices {
            alpha3: HashMap::with_capacity(countries.len()),
            names: HashMap::with_capacity(countries.len()),
            alternate_names: HashMap::with_capacity(countries.len() * 4),
        };
        // Every name string seen so far, with its owner.
        let mut owners: HashMap<&str, &str> = HashMap::new();

        for country in countries {
            let alpha2 = country.alpha2.as_str();

            match index.alpha3.entry(country.alpha3.clone()) {
                Entry::Occupied(e) => {
                    return Err(CountryError::DuplicateAlpha3 {
                        code: country.alpha3.clone(),
                        first: e.get().clone(),
                        second: alpha2.to_owned(),
                    });
                }
                Entry::Vacant(e) => {
                    e.insert(alpha2.to_owned());
                }
            }

            let all_names = std::iter::once(&country.name).chain(country.names.iter());
            for name in all_names {
                match owners.entry(name.as_str()) {
                    Entry::Occupied(e) if *e.get() == alpha2 => continue,
                    Entry::Occupied(e) => {
                        return Err(CountryError::DuplicateName {
                            name: name.clone(),
                            first: (*e.get()).to_owned(),
                            second: alpha2.to_owned(),
                        });
                    }
                    Entry::Vacant(e) => {
                        e.insert(alpha2);
                    }
                }
            }

            index.names.insert(country.name.clone(), alpha2.to_owned());
            for alt in &country.names {
                if *alt != country.name {
                    index.alternate_names.insert(alt.clone(), alpha2.to_owned());
                }
            }
        }

        tracing::debug!(
            alpha3 = index.alpha3.len(),
            names = index.names.len(),
            alternate_names = index.alternate_names.len(),
            "built country indices"
        );
        Ok(index)
    }

    pub fn alpha2_for_alpha3(&self, alpha3: &str) -> Option<&str> {
        self.alpha3.get(alpha3).map(String::as_str)
    }

    /// Exact primary-name match first, then exact alternate-name match.
    pub fn alpha2_for_name(&self, name: &str) -> Option<&str> {
        self.names
            .get(name)
            .or_else(|| self.alternate_names.get(name))
            .map(String::as_str)
    }

    /// Number of distinct name strings indexed (primary plus alternate).
    pub fn name_count(&self) -> usize {
        self.names.len() + self.alternate_names.len()
    }
}
