// crates/countries-core/src/loader/common_io.rs
use crate::error::{CountryError, Result};
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a file, buffers it, and unwraps Gzip when the name ends in `.gz`.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        CountryError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(CountryError::InvalidData(format!(
            "{} is gzip compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Picks `<dir>/<file>` or, failing that, `<dir>/<file>.gz`.
pub fn locate(dir: &Path, file: &str) -> Option<PathBuf> {
    let plain = dir.join(file);
    if plain.is_file() {
        return Some(plain);
    }
    let gz = dir.join(format!("{file}.gz"));
    gz.is_file().then_some(gz)
}

/// True if `cache` exists and is at least as new as every source.
pub fn is_fresh(cache: &Path, sources: &[PathBuf]) -> bool {
    let cache_time = match fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    sources.iter().all(|src| {
        fs::metadata(src)
            .and_then(|m| m.modified())
            .map(|t| t <= cache_time)
            .unwrap_or(true)
    })
}
