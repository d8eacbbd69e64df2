// crates/countries-core/src/loader/binary.rs
use super::common_io::{is_gzip, open_stream};
use crate::error::Result;
use crate::model::Dataset;
use crate::raw::RawDataset;
use bincode::Options;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

/// Upper bound for decoded snapshots, so a corrupt length prefix cannot
/// trigger a huge allocation.
const SNAPSHOT_LIMIT: u64 = 64 * 1024 * 1024;

fn snapshot_options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(SNAPSHOT_LIMIT)
}

impl Dataset {
    /// Encodes the dataset's tables with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(snapshot_options().serialize(&self.to_raw())?)
    }

    /// Decodes a snapshot and rebuilds the dataset.
    ///
    /// The tables go through the same validation as a JSON load, so a
    /// snapshot can never smuggle in duplicate codes or names.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let raw: RawDataset = snapshot_options().deserialize(data)?;
        Self::from_raw(raw)
    }

    /// Writes a binary snapshot; gzip compressed if `path` ends in `.gz`.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let gzip = is_gzip(path);

        // Refuse before touching the target so an existing file survives.
        #[cfg(not(feature = "compact"))]
        if gzip {
            return Err(crate::error::CountryError::InvalidData(
                "Gzip requested but 'compact' disabled".into(),
            ));
        }

        let bytes = self.to_bytes()?;
        let mut writer = BufWriter::new(File::create(path)?);

        #[cfg(feature = "compact")]
        if gzip {
            let mut encoder = GzEncoder::new(writer, Compression::default());
            encoder.write_all(&bytes)?;
            encoder.finish()?.flush()?;
            tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote compressed dataset snapshot");
            return Ok(());
        }

        writer.write_all(&bytes)?;
        writer.flush()?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote dataset snapshot");
        Ok(())
    }

    /// Reads a snapshot written by [`Dataset::save_as`].
    pub fn load_binary_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut stream = open_stream(path.as_ref())?;
        let mut data = Vec::new();
        stream.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }
}
