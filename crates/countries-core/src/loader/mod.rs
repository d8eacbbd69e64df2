// crates/countries-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, decompression) and delegates to the
//! parsers (binary snapshot vs JSON source tables). Whatever the source,
//! the result goes through [`Dataset::from_raw`], so every load path is
//! validated the same way.

use crate::error::Result;
use crate::model::Dataset;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

mod binary;
pub mod common_io;
#[cfg(feature = "json")]
pub mod json;

pub const COUNTRIES_FILE: &str = "countries.json";
pub const SUBDIVISIONS_FILE: &str = "subdivisions.json";
pub const CURRENCIES_FILE: &str = "currencies.json";
pub const CACHE_FILE: &str = "countries.bin";

// Single in-process dataset so the tables are parsed once per process.
static DATASET: OnceCell<Dataset> = OnceCell::new();

impl Dataset {
    /// The directory holding the bundled tables (`<crate>/data`).
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// The process-wide dataset, loaded from [`Dataset::default_data_dir`]
    /// on first use.
    ///
    /// A failed load is returned to the caller and retried on the next
    /// call; a half-built dataset is never stored.
    pub fn load() -> Result<&'static Dataset> {
        DATASET.get_or_try_init(|| Self::load_from_dir(Self::default_data_dir()))
    }

    /// **Smart Load:** uses a fresh binary snapshot if one sits next to the
    /// sources, otherwise parses the JSON tables.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let cache = common_io::locate(dir, CACHE_FILE);

        #[cfg(feature = "json")]
        {
            let sources = json::source_files(dir);
            match cache {
                Some(cache) if common_io::is_fresh(&cache, &sources) => {
                    match Self::load_binary_file(&cache) {
                        Ok(db) => {
                            tracing::debug!(path = %cache.display(), "loaded dataset snapshot");
                            return Ok(db);
                        }
                        Err(e) => {
                            tracing::warn!(path = %cache.display(), error = %e, "ignoring unreadable snapshot");
                        }
                    }
                }
                Some(cache) => {
                    tracing::warn!(path = %cache.display(), "snapshot is older than the source tables");
                }
                None => {}
            }

            tracing::debug!(dir = %dir.display(), "parsing JSON source tables");
            let raw = json::read_raw_dir(dir)?;
            Self::from_raw(raw)
        }

        #[cfg(not(feature = "json"))]
        {
            let cache = cache.ok_or_else(|| {
                crate::error::CountryError::NotFound(format!(
                    "{CACHE_FILE} not found in {} (enable the 'json' feature to read source tables)",
                    dir.display()
                ))
            })?;
            Self::load_binary_file(cache)
        }
    }
}
