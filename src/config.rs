use std::path::{Path, PathBuf};

use crate::data::loader::DEFAULT_HEADER_ROWS;

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Fixed knobs of a batch run. There is no config file; `Default` is what the
/// binary uses.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Preamble rows to skip in every export.
    pub header_rows: usize,
    /// File name extension (without the dot) of the exports. Case-sensitive.
    pub extension: String,
    /// Name of the output subdirectory created under the input directory.
    pub output_dir_name: String,
    /// Width and height of the rendered PNG in pixels.
    pub image_size: (u32, u32),
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            header_rows: DEFAULT_HEADER_ROWS,
            extension: "csv".to_string(),
            output_dir_name: "images".to_string(),
            image_size: (1000, 600),
        }
    }
}

impl RunConfig {
    /// `<input_dir>/<output_dir_name>`
    pub fn output_dir(&self, input_dir: &Path) -> PathBuf {
        input_dir.join(&self.output_dir_name)
    }

    /// Whether a file name belongs to an export, e.g. `scan.csv`.
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.ends_with(&format!(".{}", self.extension))
    }
}
