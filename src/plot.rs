use std::ops::Range;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result, bail};
use plotters::prelude::*;
use plotters::style::{FontStyle, register_font};

use crate::color::series_color;
use crate::data::model::MeasurementSet;

const FONT_FAMILY: &str = "sans-serif";
const FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Fraction of the data span added on each side of an axis.
const AXIS_PADDING: f64 = 0.05;

// ---------------------------------------------------------------------------
// Absorbance scatter plot
// ---------------------------------------------------------------------------

/// Render the readings as a scatter plot and write it to `path` as PNG.
///
/// The drawing area is dropped before returning, also on error.
pub fn render_scatter(
    set: &MeasurementSet,
    caption: &str,
    path: &Path,
    size: (u32, u32),
) -> Result<()> {
    ensure_font()?;

    let x_range = padded_range(set.wavelength_range());
    let y_range = padded_range(set.absorbance_range());

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (FONT_FAMILY, 24))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Wavelength (nm)")
        .y_desc("Absorbance")
        .axis_desc_style((FONT_FAMILY, 16))
        .draw()?;

    let color = series_color();
    chart
        .draw_series(set.points().map(|p| Circle::new(p, 3, color.filled())))?
        .label("Absorbance Data")
        .legend(move |(x, y)| Circle::new((x, y), 3, color.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT_FAMILY, 14))
        .draw()?;

    root.present()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Axis range spanning the data with some padding. A single value (or no
/// data) gets a unit margin instead.
fn padded_range(bounds: Option<(f64, f64)>) -> Range<f64> {
    let Some((lo, hi)) = bounds else {
        return 0.0..1.0;
    };
    let span = hi - lo;
    if span <= f64::EPSILON * hi.abs().max(1.0) {
        return (lo - 1.0)..(hi + 1.0);
    }
    let pad = span * AXIS_PADDING;
    (lo - pad)..(hi + pad)
}

/// The bitmap backend has no system font lookup; register the bundled face
/// once per process.
fn ensure_font() -> Result<()> {
    static REGISTERED: OnceLock<bool> = OnceLock::new();
    let ok = *REGISTERED
        .get_or_init(|| register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES).is_ok());
    if !ok {
        bail!("bundled chart font could not be loaded");
    }
    Ok(())
}
