use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::config::RunConfig;
use crate::data::loader::load_measurements;
use crate::data::peak::find_peak;
use crate::plot::render_scatter;
use crate::prompt::{PathProvider, TitleProvider};

// ---------------------------------------------------------------------------
// Batch run
// ---------------------------------------------------------------------------

/// What a batch run did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Export files found in the input directory.
    pub discovered: usize,
    /// Images written, in processing order.
    pub saved: Vec<PathBuf>,
    /// Exports without a single reading; no image was written for them.
    pub skipped: Vec<PathBuf>,
}

/// Convert every export in the operator's directory into a scatter plot.
///
/// Files are processed one at a time in name order. Any read, parse or render
/// failure aborts the run; images already written stay on disk.
pub fn run<P, T, W>(
    config: &RunConfig,
    paths: &mut P,
    titles: &mut T,
    out: &mut W,
) -> Result<RunSummary>
where
    P: PathProvider + ?Sized,
    T: TitleProvider + ?Sized,
    W: Write + ?Sized,
{
    let input_dir = paths.input_dir()?;
    let files = discover_files(&input_dir, config)?;
    let output_dir = ensure_output_dir(&input_dir, config)?;

    writeln!(out, "Found {} file(s)", files.len())?;

    let mut summary = RunSummary {
        discovered: files.len(),
        ..RunSummary::default()
    };

    for file in files {
        let set = load_measurements(&file, config.header_rows)
            .with_context(|| format!("loading {}", file.display()))?;

        let Some(peak) = find_peak(&set.rows) else {
            warn!("{}: no absorbance readings, skipping", file.display());
            writeln!(
                out,
                "Skipping file {}: no absorbance readings found",
                file.display()
            )?;
            summary.skipped.push(file);
            continue;
        };

        writeln!(out, "Found file {}. {peak}", file.display())?;
        out.flush()?;

        let title = titles.graph_title(&file, &peak)?;
        let image_path = output_dir.join(format!("{title}.png"));

        render_scatter(&set, &peak.caption(&title), &image_path, config.image_size)
            .with_context(|| format!("rendering {}", image_path.display()))?;
        info!("saved {}", image_path.display());

        summary.saved.push(image_path);
    }

    if summary.discovered > 0 {
        writeln!(
            out,
            "Saved {} graph(s) to {}",
            summary.saved.len(),
            output_dir.display()
        )?;
    }

    Ok(summary)
}

/// Regular files in `dir` whose name ends with the export extension, sorted.
pub fn discover_files(dir: &Path, config: &RunConfig) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("reading directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("reading directory {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if config.matches(&name) {
            files.push(path);
        }
    }

    files.sort();
    debug!("discovered {} export(s) in {}", files.len(), dir.display());
    Ok(files)
}

/// Create `<dir>/images` if missing. Succeeds when it already exists.
pub fn ensure_output_dir(dir: &Path, config: &RunConfig) -> Result<PathBuf> {
    let output_dir = config.output_dir(dir);
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    Ok(output_dir)
}
