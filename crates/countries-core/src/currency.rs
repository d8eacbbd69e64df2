// crates/countries-core/src/currency.rs

//! ISO 4217 currency records and their composition onto countries.

use crate::error::{CountryError, Result};
use crate::model::{Currency, Dataset};

impl Currency {
    /// Alphabetic code, e.g. "NOK".
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Numeric code, e.g. "578".
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn minor_unit(&self) -> Option<u8> {
        self.minor_unit
    }

    pub fn subunit(&self) -> Option<&str> {
        self.subunit.as_deref()
    }

    /// Minor units per major unit (100 for two decimals).
    ///
    /// Loaded tables never carry an exponent above 9; hand-built records
    /// with a larger one saturate at `u32::MAX`.
    pub fn subunit_to_unit(&self) -> u32 {
        self.minor_unit
            .map_or(1, |exp| 10u32.saturating_pow(u32::from(exp)))
    }
}

impl Dataset {
    /// Resolves a currency referenced by the country `alpha2`.
    pub(crate) fn resolve_currency(&self, alpha2: &str, code: &str) -> Result<&Currency> {
        self.currency(code)
            .ok_or_else(|| CountryError::MissingCurrency {
                country: alpha2.to_owned(),
                code: code.to_owned(),
            })
    }

    /// Every country whose currency code has no entry in the currency table.
    pub fn currency_issues(&self) -> Vec<CountryError> {
        self.countries
            .iter()
            .filter_map(|c| {
                let code = c.currency_code.as_deref()?;
                self.resolve_currency(&c.alpha2, code).err()
            })
            .collect()
    }

    /// Eagerly checks every currency reference, failing on the first
    /// dangling one.
    pub fn verify_currencies(&self) -> Result<()> {
        match self.currency_issues().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn currency(minor_unit: Option<u8>) -> Currency {
        Currency {
            code: "TST".into(),
            number: "000".into(),
            name: "Test".into(),
            symbol: "T".into(),
            minor_unit,
            subunit: None,
        }
    }

    #[test]
    fn subunit_to_unit_follows_minor_unit() {
        assert_eq!(currency(Some(2)).subunit_to_unit(), 100);
        assert_eq!(currency(Some(3)).subunit_to_unit(), 1000);
        assert_eq!(currency(Some(0)).subunit_to_unit(), 1);
        assert_eq!(currency(None).subunit_to_unit(), 1);
        assert_eq!(currency(Some(9)).subunit_to_unit(), 1_000_000_000);
        assert_eq!(currency(Some(10)).subunit_to_unit(), u32::MAX);
    }
}
