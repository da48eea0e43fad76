/// Data layer: core types, loading, and peak finding.
///
/// Architecture:
/// ```text
///   instrument export (.csv)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  skip preamble → raw rows → MeasurementSet
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ MeasurementSet │  Vec<MeasurementRow>, file order
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   peak    │  linear scan → Option<PeakRecord>
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod peak;

use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading or parsing an instrument export.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// `row` is the 0-based index among the data rows (after the preamble).
    #[error("data row {row}, column {column}: '{text}' is not a number")]
    InvalidNumber {
        row: usize,
        column: usize,
        text: String,
    },
}
