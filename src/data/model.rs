use std::fmt;

// ---------------------------------------------------------------------------
// MeasurementRow – one (wavelength, absorbance) reading
// ---------------------------------------------------------------------------

/// A single reading from the instrument export: columns 0 and 1 of a data row.
///
/// The trimmed field text is kept next to the parsed values so reports show
/// the numbers exactly as the instrument wrote them (`0.9000`, `450.0`).
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRow {
    /// Wavelength in nm (x).
    pub wavelength: f64,
    /// Absorbance (y).
    pub absorbance: f64,
    pub wavelength_text: String,
    pub absorbance_text: String,
}

impl MeasurementRow {
    /// Reading built from values; the text is their shortest `f64` form.
    pub fn new(wavelength: f64, absorbance: f64) -> Self {
        Self {
            wavelength,
            absorbance,
            wavelength_text: wavelength.to_string(),
            absorbance_text: absorbance.to_string(),
        }
    }

    /// Reading as loaded from a file, keeping the source text.
    pub fn with_text(
        wavelength: f64,
        absorbance: f64,
        wavelength_text: &str,
        absorbance_text: &str,
    ) -> Self {
        Self {
            wavelength,
            absorbance,
            wavelength_text: wavelength_text.to_string(),
            absorbance_text: absorbance_text.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// MeasurementSet – all readings of one file, in file order
// ---------------------------------------------------------------------------

/// The parsed data rows of one export file, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementSet {
    pub rows: Vec<MeasurementRow>,
}

impl MeasurementSet {
    pub fn from_rows(rows: Vec<MeasurementRow>) -> Self {
        Self { rows }
    }

    /// Number of readings.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the set has no readings.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Readings as `(wavelength, absorbance)` points, ready for plotting.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.rows.iter().map(|r| (r.wavelength, r.absorbance))
    }

    /// `(min, max)` of the wavelength axis, or `None` for an empty set.
    pub fn wavelength_range(&self) -> Option<(f64, f64)> {
        min_max(self.rows.iter().map(|r| r.wavelength))
    }

    /// `(min, max)` of the absorbance axis, or `None` for an empty set.
    pub fn absorbance_range(&self) -> Option<(f64, f64)> {
        min_max(self.rows.iter().map(|r| r.absorbance))
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

// ---------------------------------------------------------------------------
// PeakRecord – the reading with maximum absorbance
// ---------------------------------------------------------------------------

/// The reading with the highest absorbance in a [`MeasurementSet`].
///
/// Reports and captions use the source text of the winning row.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakRecord {
    /// Position of the winning row within the set.
    pub index: usize,
    pub row: MeasurementRow,
}

impl PeakRecord {
    pub fn wavelength(&self) -> f64 {
        self.row.wavelength
    }

    pub fn absorbance(&self) -> f64 {
        self.row.absorbance
    }

    /// Chart caption: the operator's title followed by the peak.
    pub fn caption(&self, title: &str) -> String {
        format!(
            "{title} (Max absorption: {} at {}nm)",
            self.row.absorbance_text, self.row.wavelength_text
        )
    }
}

impl fmt::Display for PeakRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Max absorption: {} Wavelength: {}",
            self.row.absorbance_text, self.row.wavelength_text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peak(wavelength: f64, absorbance: f64) -> PeakRecord {
        PeakRecord {
            index: 0,
            row: MeasurementRow::new(wavelength, absorbance),
        }
    }

    #[test]
    fn display_uses_shortest_number_form() {
        assert_eq!(
            peak(450.0, 0.9).to_string(),
            "Max absorption: 0.9 Wavelength: 450"
        );
    }

    #[test]
    fn report_keeps_source_text() {
        let peak = PeakRecord {
            index: 1,
            row: MeasurementRow::with_text(450.0, 0.9, "450.0", "0.9000"),
        };
        assert_eq!(peak.to_string(), "Max absorption: 0.9000 Wavelength: 450.0");
        assert_eq!(
            peak.caption("Blank"),
            "Blank (Max absorption: 0.9000 at 450.0nm)"
        );
    }

    #[test]
    fn caption_appends_peak_to_title() {
        assert_eq!(
            peak(512.5, 1.25).caption("pH 7 Trial 1"),
            "pH 7 Trial 1 (Max absorption: 1.25 at 512.5nm)"
        );
    }

    #[test]
    fn ranges_ignore_non_finite_values() {
        let set = MeasurementSet::from_rows(vec![
            MeasurementRow::new(400.0, 0.2),
            MeasurementRow::new(f64::NAN, f64::INFINITY),
            MeasurementRow::new(380.0, 0.5),
        ]);
        assert_eq!(set.wavelength_range(), Some((380.0, 400.0)));
        assert_eq!(set.absorbance_range(), Some((0.2, 0.5)));
        assert_eq!(MeasurementSet::default().wavelength_range(), None);
    }
}
