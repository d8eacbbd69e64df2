// crates/countries-core/src/subdivisions.rs

//! Per-country ISO 3166-2 subdivision collections.

use crate::model::Subdivision;
use crate::traits::NameMatch;

/// The subdivisions of one country, keyed by subdivision code.
///
/// A borrowed window into the dataset's master subdivision table. Order is
/// the source order; nothing is re-sorted. Countries without ISO 3166-2
/// entries get an empty collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Subdivisions<'a> {
    items: &'a [Subdivision],
}

impl<'a> Subdivisions<'a> {
    pub(crate) fn new(items: &'a [Subdivision]) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The subdivision with the given code ("CA", not "US-CA").
    ///
    /// Collections hold at most a few dozen entries; a linear scan is fine.
    pub fn get(&self, code: &str) -> Option<&'a Subdivision> {
        self.items.iter().find(|s| s.code == code)
    }

    pub fn contains_key(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Accent- and case-insensitive lookup on the canonical name.
    pub fn find_by_name(&self, name: &str) -> Option<&'a Subdivision> {
        self.items.iter().find(|s| s.is_named(name))
    }

    pub fn codes(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.items.iter().map(|s| s.code.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'a, Subdivision> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &'a [Subdivision] {
        self.items
    }
}

impl<'a> IntoIterator for Subdivisions<'a> {
    type Item = &'a Subdivision;
    type IntoIter = std::slice::Iter<'a, Subdivision>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Subdivision {
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Country-qualified code, e.g. "US-CA".
    pub fn full_code(&self) -> &str {
        &self.full_code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// "state", "province", "outlying area", ...
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(code: &str, name: &str) -> Subdivision {
        Subdivision {
            country_id: 0,
            code: code.into(),
            full_code: format!("DE-{code}"),
            name: name.into(),
            names: Vec::new(),
            category: Some("land".into()),
        }
    }

    #[test]
    fn keyed_access_and_order() {
        let items = vec![sub("BW", "Baden-Württemberg"), sub("BY", "Bayern")];
        let subs = Subdivisions::new(&items);

        assert_eq!(subs.len(), 2);
        assert_eq!(subs.get("BY").map(Subdivision::name), Some("Bayern"));
        assert!(subs.get("DE-BY").is_none());
        assert!(subs.contains_key("BW"));
        assert_eq!(subs.codes().collect::<Vec<_>>(), vec!["BW", "BY"]);
        assert_eq!(
            subs.find_by_name("baden-wurttemberg").map(Subdivision::full_code),
            Some("DE-BW")
        );
    }

    #[test]
    fn default_is_empty() {
        let subs = Subdivisions::default();
        assert!(subs.is_empty());
        assert_eq!(subs.into_iter().count(), 0);
    }

    #[cfg(feature = "json")]
    #[test]
    fn serialized_form_hides_row_ids() {
        let value = serde_json::to_value(sub("BY", "Bayern")).unwrap();
        assert_eq!(value["full_code"], "DE-BY");
        assert!(value.get("country_id").is_none());
    }
}
