// crates/countries-core/src/text.rs

/// Convert a string into a folded key suitable for loose comparison.
///
/// This performs:
/// 1) Transliterate Unicode → ASCII (e.g. `Österreich` -> `Osterreich`)
/// 2) Normalize to lowercase
///
/// Only the convenience searches use folding. `find_by_name` and the code
/// lookups compare strings exactly.
///
/// # Examples
///
/// ```rust
/// use countries_core::text::fold_key;
///
/// assert_eq!(fold_key("Österreich"), "osterreich");
/// assert_eq!(fold_key("Łódzkie"), "lodzkie");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after folding with [`fold_key`].
///
/// ```rust
/// use countries_core::text::equals_folded;
///
/// assert!(equals_folded("Québec", "quebec"));
/// assert!(!equals_folded("Quebec", "Ontario"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
