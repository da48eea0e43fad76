//! Batch peak finder and scatter-plot renderer for spectrophotometer exports.
//!
//! Each `.csv` export in a directory is read (skipping the instrument
//! preamble), its absorbance peak is located, and a labelled scatter plot is
//! written to `<dir>/images/<title>.png`.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod plot;
pub mod prompt;

pub use app::{RunSummary, run};
pub use config::RunConfig;
pub use data::DataError;
pub use data::model::{MeasurementRow, MeasurementSet, PeakRecord};
pub use prompt::{ConsolePrompt, PathProvider, TitleProvider};
