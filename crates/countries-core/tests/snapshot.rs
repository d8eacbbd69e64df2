use countries_core::loader::{CACHE_FILE, COUNTRIES_FILE, CURRENCIES_FILE, SUBDIVISIONS_FILE};
use countries_core::{CountryError, CountrySearch, Dataset};
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

fn bundled() -> &'static Dataset {
    Dataset::load().expect("bundled dataset loads")
}

#[test]
fn snapshot_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("countries.bin");

    bundled().save_as(&path).unwrap();
    let db = Dataset::load_binary_file(&path).unwrap();

    assert_eq!(db.to_raw(), bundled().to_raw());
    assert_eq!(db.search("US").unwrap().subdivisions().len(), 57);
    assert_eq!(db.find_by_name("Polonia").unwrap().alpha2(), "PL");
}

#[cfg(feature = "compact")]
#[test]
fn gzip_snapshot_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("countries.bin.gz");

    bundled().save_as(&path).unwrap();
    let db = Dataset::load_binary_file(&path).unwrap();
    assert_eq!(db.stats(), bundled().stats());
}

#[test]
fn corrupt_snapshot_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("countries.bin");
    fs::write(&path, [0xff; 16]).unwrap();

    assert!(Dataset::load_binary_file(&path).is_err());
}

#[test]
fn missing_directory_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dataset::load_from_dir(dir.path().join("nowhere")).unwrap_err();
    assert!(matches!(err, CountryError::NotFound(_)));
}

#[cfg(feature = "json")]
#[test]
fn load_from_dir_reads_sources_and_prefers_fresh_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let src = Dataset::default_data_dir();
    for file in [COUNTRIES_FILE, SUBDIVISIONS_FILE, CURRENCIES_FILE] {
        fs::copy(src.join(file), dir.path().join(file)).unwrap();
    }

    let from_json = Dataset::load_from_dir(dir.path()).unwrap();
    assert_eq!(from_json.stats(), bundled().stats());

    // A snapshot written after the sources is used as-is.
    from_json.save_as(dir.path().join(CACHE_FILE)).unwrap();
    let from_cache = Dataset::load_from_dir(dir.path()).unwrap();
    assert_eq!(from_cache.to_raw(), from_json.to_raw());
}

#[cfg(feature = "json")]
#[test]
fn subdivision_table_is_optional() {
    let dir = tempfile::tempdir().unwrap();
    let src = Dataset::default_data_dir();
    for file in [COUNTRIES_FILE, CURRENCIES_FILE] {
        fs::copy(src.join(file), dir.path().join(file)).unwrap();
    }

    let db = Dataset::load_from_dir(dir.path()).unwrap();
    assert_eq!(db.stats().subdivisions, 0);
    assert!(db.search("US").unwrap().subdivisions().is_empty());
}

#[cfg(feature = "json")]
fn copy_sources(dir: &Path) {
    let src = Dataset::default_data_dir();
    for file in [COUNTRIES_FILE, SUBDIVISIONS_FILE, CURRENCIES_FILE] {
        fs::copy(src.join(file), dir.join(file)).unwrap();
    }
}

#[cfg(feature = "json")]
#[test]
fn unreadable_snapshot_falls_back_to_sources() {
    let dir = tempfile::tempdir().unwrap();
    copy_sources(dir.path());
    fs::write(dir.path().join(CACHE_FILE), b"not a snapshot").unwrap();

    let db = Dataset::load_from_dir(dir.path()).unwrap();
    assert_eq!(db.to_raw(), bundled().to_raw());
}

#[cfg(feature = "json")]
#[test]
fn stale_snapshot_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    copy_sources(dir.path());
    let cache = dir.path().join(CACHE_FILE);

    // A snapshot of different tables, so it is clear which one was read.
    let mut raw = bundled().to_raw();
    raw.countries.retain(|c| c.alpha2 != "FR");
    Dataset::from_raw(raw).unwrap().save_as(&cache).unwrap();
    assert!(Dataset::load_from_dir(dir.path()).unwrap().search("FR").is_none());

    fs::File::options()
        .write(true)
        .open(&cache)
        .unwrap()
        .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(1))
        .unwrap();

    let db = Dataset::load_from_dir(dir.path()).unwrap();
    assert_eq!(db.search("FR").map(|c| c.name()), Some("France"));
    assert_eq!(db.stats(), bundled().stats());
}

#[cfg(not(feature = "compact"))]
#[test]
fn gzip_save_without_compact_leaves_target_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("countries.bin.gz");
    fs::write(&path, b"previous").unwrap();

    assert!(bundled().save_as(&path).is_err());
    assert_eq!(fs::read(&path).unwrap(), b"previous");
}
