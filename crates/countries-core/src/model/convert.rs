// crates/countries-core/src/model/convert.rs
use crate::error::{CountryError, Result};
use crate::index::Indices;
use crate::model::domain::{CountryRecord, Currency, Dataset, Subdivision};
use crate::raw::{CountryRaw, CurrencyRaw, RawDataset, SubdivisionGroupRaw, SubdivisionRaw};
use std::collections::{HashMap, HashSet};

const MAX_MINOR_UNIT: u8 = 9;

/// **Standard Converter:** Raw tables -> validated, indexed [`Dataset`].
///
/// Fails on the first integrity problem found at load time: duplicate
/// alpha-2/alpha-3 codes, names shared between countries, duplicate
/// currency or subdivision codes, or subdivisions for unknown countries.
/// Currency references are resolved lazily and are checked separately by
/// [`Dataset::verify_currencies`].
pub fn from_raw(raw: RawDataset) -> Result<Dataset> {
    let RawDataset {
        countries: raw_countries,
        subdivisions: raw_groups,
        currencies: raw_currencies,
    } = raw;

    check_row_count(raw_countries.len(), "countries")?;
    check_row_count(raw_currencies.len(), "currencies")?;

    // 1. Currencies
    let mut currencies = Vec::with_capacity(raw_currencies.len());
    let mut currency_by_code = HashMap::with_capacity(raw_currencies.len());
    for cur in raw_currencies {
        if currency_by_code.contains_key(&cur.code) {
            return Err(CountryError::DuplicateCurrency(cur.code));
        }
        check_minor_unit(&cur)?;
        currency_by_code.insert(cur.code.clone(), currencies.len() as u16);
        currencies.push(currency_from_raw(cur));
    }

    // 2. Countries (subdivision ranges are filled in below)
    let mut countries = Vec::with_capacity(raw_countries.len());
    let mut by_alpha2 = HashMap::with_capacity(raw_countries.len());
    for c_raw in raw_countries {
        check_code(&c_raw.alpha2, 2, "alpha-2")?;
        check_code(&c_raw.alpha3, 3, "alpha-3")?;
        if by_alpha2.contains_key(&c_raw.alpha2) {
            return Err(CountryError::DuplicateAlpha2(c_raw.alpha2));
        }
        by_alpha2.insert(c_raw.alpha2.clone(), countries.len() as u16);
        countries.push(country_from_raw(c_raw));
    }

    // 3. Subdivisions, one contiguous block per country
    let mut subdivisions = Vec::new();
    let mut seen_groups = HashSet::new();
    for group in raw_groups {
        let SubdivisionGroupRaw {
            country,
            subdivisions: rows,
        } = group;
        let c_id = *by_alpha2
            .get(&country)
            .ok_or_else(|| CountryError::UnknownCountry(country.clone()))?;
        if !seen_groups.insert(c_id) {
            return Err(CountryError::InvalidData(format!(
                "subdivisions for {country} are listed more than once"
            )));
        }

        let start = subdivisions.len() as u32;
        let mut codes = HashSet::with_capacity(rows.len());
        for s_raw in rows {
            if !codes.insert(s_raw.code.clone()) {
                return Err(CountryError::DuplicateSubdivision {
                    country,
                    code: s_raw.code,
                });
            }
            subdivisions.push(subdivision_from_raw(c_id, &country, s_raw));
        }
        countries[c_id as usize].subdivisions_range = start..(subdivisions.len() as u32);
    }

    // 4. Secondary indices
    let index = Indices::build(&countries)?;

    tracing::info!(
        countries = countries.len(),
        subdivisions = subdivisions.len(),
        currencies = currencies.len(),
        "country dataset ready"
    );

    Ok(Dataset {
        countries,
        subdivisions,
        currencies,
        by_alpha2,
        currency_by_code,
        index,
    })
}

/// **Inverse Converter:** [`Dataset`] -> raw tables, e.g. for snapshots.
pub fn to_raw(db: &Dataset) -> RawDataset {
    let countries = db
        .countries
        .iter()
        .map(|c| CountryRaw {
            alpha2: c.alpha2.clone(),
            alpha3: c.alpha3.clone(),
            number: c.number.clone(),
            name: c.name.clone(),
            names: c.names.clone(),
            latitude: c.latitude.clone(),
            longitude: c.longitude.clone(),
            region: c.region.clone(),
            subregion: c.subregion.clone(),
            country_code: c.country_code.clone(),
            national_destination_code_lengths: c.national_destination_code_lengths.clone(),
            national_number_lengths: c.national_number_lengths.clone(),
            international_prefix: c.international_prefix.clone(),
            national_prefix: c.national_prefix.clone(),
            currency_code: c.currency_code.clone(),
        })
        .collect();

    let subdivisions = db
        .countries
        .iter()
        .filter(|c| !c.subdivisions_range.is_empty())
        .map(|c| SubdivisionGroupRaw {
            country: c.alpha2.clone(),
            subdivisions: db.subdivisions
                [c.subdivisions_range.start as usize..c.subdivisions_range.end as usize]
                .iter()
                .map(|s| SubdivisionRaw {
                    code: s.code.clone(),
                    name: s.name.clone(),
                    names: s.names.clone(),
                    category: s.category.clone(),
                })
                .collect(),
        })
        .collect();

    let currencies = db
        .currencies
        .iter()
        .map(|c| CurrencyRaw {
            code: c.code.clone(),
            number: c.number.clone(),
            name: c.name.clone(),
            symbol: c.symbol.clone(),
            minor_unit: c.minor_unit,
            subunit: c.subunit.clone(),
        })
        .collect();

    RawDataset {
        countries,
        subdivisions,
        currencies,
    }
}

// -----------------------------------------------------------------------------
// Row converters
// -----------------------------------------------------------------------------

fn country_from_raw(c: CountryRaw) -> CountryRecord {
    CountryRecord {
        alpha2: c.alpha2,
        alpha3: c.alpha3,
        number: c.number,
        name: c.name,
        names: c.names,
        latitude: c.latitude,
        longitude: c.longitude,
        region: c.region,
        subregion: c.subregion,
        country_code: c.country_code,
        national_destination_code_lengths: c.national_destination_code_lengths,
        national_number_lengths: c.national_number_lengths,
        international_prefix: c.international_prefix,
        national_prefix: c.national_prefix,
        currency_code: c.currency_code.filter(|code| !code.is_empty()),
        subdivisions_range: 0..0,
    }
}

fn subdivision_from_raw(country_id: u16, alpha2: &str, s: SubdivisionRaw) -> Subdivision {
    Subdivision {
        country_id,
        full_code: format!("{alpha2}-{}", s.code),
        code: s.code,
        name: s.name,
        names: s.names,
        category: s.category,
    }
}

fn currency_from_raw(c: CurrencyRaw) -> Currency {
    Currency {
        code: c.code,
        number: c.number,
        name: c.name,
        symbol: c.symbol,
        minor_unit: c.minor_unit,
        subunit: c.subunit,
    }
}

/// Row ids are `u16`; larger tables would alias records.
fn check_row_count(rows: usize, what: &str) -> Result<()> {
    if rows > u16::MAX as usize {
        return Err(CountryError::InvalidData(format!(
            "{rows} {what} exceed the supported maximum of {}",
            u16::MAX
        )));
    }
    Ok(())
}

/// ISO 4217 exponents are 0 to 4; anything past 9 cannot be a `u32` ratio.
fn check_minor_unit(cur: &CurrencyRaw) -> Result<()> {
    match cur.minor_unit {
        Some(exp) if exp > MAX_MINOR_UNIT => Err(CountryError::InvalidData(format!(
            "currency {} has minor unit {exp} (at most {MAX_MINOR_UNIT} supported)",
            cur.code
        ))),
        _ => Ok(()),
    }
}

/// Codes are stored upper case; lookups are case-sensitive against them.
fn check_code(code: &str, len: usize, what: &str) -> Result<()> {
    if code.len() == len && code.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(CountryError::InvalidData(format!(
            "{what} code {code:?} must be {len} upper-case ASCII letters"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(alpha2: &str, alpha3: &str, name: &str) -> CountryRaw {
        CountryRaw {
            alpha2: alpha2.into(),
            alpha3: alpha3.into(),
            number: "999".into(),
            name: name.into(),
            names: Vec::new(),
            latitude: String::new(),
            longitude: String::new(),
            region: String::new(),
            subregion: String::new(),
            country_code: String::new(),
            national_destination_code_lengths: Vec::new(),
            national_number_lengths: Vec::new(),
            international_prefix: String::new(),
            national_prefix: String::new(),
            currency_code: None,
        }
    }

    fn sub(code: &str, name: &str) -> SubdivisionRaw {
        SubdivisionRaw {
            code: code.into(),
            name: name.into(),
            names: Vec::new(),
            category: None,
        }
    }

    #[test]
    fn subdivisions_get_contiguous_ranges() {
        let raw = RawDataset {
            countries: vec![country("AA", "AAA", "Alpha"), country("BB", "BBB", "Beta")],
            subdivisions: vec![
                SubdivisionGroupRaw {
                    country: "BB".into(),
                    subdivisions: vec![sub("1", "One"), sub("2", "Two")],
                },
                SubdivisionGroupRaw {
                    country: "AA".into(),
                    subdivisions: vec![sub("X", "Ex")],
                },
            ],
            currencies: Vec::new(),
        };
        let db = from_raw(raw).unwrap();

        assert_eq!(db.countries[0].subdivisions_range, 2..3);
        assert_eq!(db.countries[1].subdivisions_range, 0..2);
        assert_eq!(db.subdivisions[0].full_code, "BB-1");
        assert_eq!(db.subdivisions[2].country_id, 0);
    }

    #[test]
    fn duplicate_alpha2_fails() {
        let raw = RawDataset {
            countries: vec![country("AA", "AAA", "Alpha"), country("AA", "ABA", "Beta")],
            ..Default::default()
        };
        assert!(matches!(from_raw(raw), Err(CountryError::DuplicateAlpha2(c)) if c == "AA"));
    }

    #[test]
    fn malformed_codes_fail() {
        let raw = RawDataset {
            countries: vec![country("aa", "AAA", "Alpha")],
            ..Default::default()
        };
        assert!(matches!(from_raw(raw), Err(CountryError::InvalidData(_))));

        let raw = RawDataset {
            countries: vec![country("AA", "AA", "Alpha")],
            ..Default::default()
        };
        assert!(matches!(from_raw(raw), Err(CountryError::InvalidData(_))));
    }

    #[test]
    fn repeated_subdivision_group_fails() {
        let group = SubdivisionGroupRaw {
            country: "AA".into(),
            subdivisions: vec![sub("1", "One")],
        };
        let raw = RawDataset {
            countries: vec![country("AA", "AAA", "Alpha")],
            subdivisions: vec![group.clone(), group],
            currencies: Vec::new(),
        };
        assert!(matches!(from_raw(raw), Err(CountryError::InvalidData(_))));
    }

    #[test]
    fn empty_currency_code_means_no_currency() {
        let mut c = country("AA", "AAA", "Alpha");
        c.currency_code = Some(String::new());
        let db = from_raw(RawDataset {
            countries: vec![c],
            ..Default::default()
        })
        .unwrap();
        assert_eq!(db.countries[0].currency_code, None);
    }

    #[test]
    fn to_raw_round_trips() {
        let raw = RawDataset {
            countries: vec![country("AA", "AAA", "Alpha")],
            subdivisions: vec![SubdivisionGroupRaw {
                country: "AA".into(),
                subdivisions: vec![sub("1", "One")],
            }],
            currencies: vec![CurrencyRaw {
                code: "AAD".into(),
                number: "001".into(),
                name: "Alpha Dollar".into(),
                symbol: "$".into(),
                minor_unit: Some(2),
                subunit: None,
            }],
        };
        let db = from_raw(raw.clone()).unwrap();
        assert_eq!(to_raw(&db), raw);
    }

    fn currency_row(code: &str, minor_unit: Option<u8>) -> CurrencyRaw {
        CurrencyRaw {
            code: code.into(),
            number: "999".into(),
            name: code.into(),
            symbol: "¤".into(),
            minor_unit,
            subunit: None,
        }
    }

    #[test]
    fn minor_unit_must_fit_a_ratio() {
        let raw = RawDataset {
            currencies: vec![currency_row("XAA", Some(9))],
            ..Default::default()
        };
        let db = from_raw(raw).unwrap();
        assert_eq!(db.currencies[0].subunit_to_unit(), 1_000_000_000);

        let raw = RawDataset {
            currencies: vec![currency_row("XAA", Some(10))],
            ..Default::default()
        };
        let err = from_raw(raw).unwrap_err();
        assert!(matches!(err, CountryError::InvalidData(ref msg) if msg.contains("XAA")));
        assert!(err.is_data_integrity());
    }

    #[test]
    fn oversized_currency_table_is_rejected() {
        let rows = u16::MAX as usize + 1;
        let raw = RawDataset {
            currencies: (0..rows)
                .map(|i| currency_row(&format!("C{i}"), Some(2)))
                .collect(),
            ..Default::default()
        };
        assert!(matches!(from_raw(raw), Err(CountryError::InvalidData(_))));

        let raw = RawDataset {
            currencies: (0..rows - 1)
                .map(|i| currency_row(&format!("C{i}"), Some(2)))
                .collect(),
            ..Default::default()
        };
        let db = from_raw(raw).unwrap();
        let last = format!("C{}", rows - 2);
        assert_eq!(db.currency(&last).map(|c| c.code.as_str()), Some(last.as_str()));
    }
}
