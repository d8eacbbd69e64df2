use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the dataset.
///
/// Returned by [`Dataset::stats`](crate::Dataset::stats); the counts reflect
/// the tables as loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub countries: usize,
    pub subdivisions: usize,
    pub currencies: usize,
}
