use super::model::{MeasurementRow, PeakRecord};

/// Find the reading with the highest absorbance.
///
/// Ties keep the earliest reading. NaN absorbances never win. Returns `None`
/// when no reading qualifies.
pub fn find_peak(rows: &[MeasurementRow]) -> Option<PeakRecord> {
    let mut max_value = f64::NEG_INFINITY;
    let mut best = None;

    for (index, row) in rows.iter().enumerate() {
        if row.absorbance > max_value {
            max_value = row.absorbance;
            best = Some(index);
        }
    }
    best.map(|index| PeakRecord {
        index,
        row: rows[index].clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(points: &[(f64, f64)]) -> Vec<MeasurementRow> {
        points
            .iter()
            .map(|&(wl, abs)| MeasurementRow::new(wl, abs))
            .collect()
    }

    #[test]
    fn picks_maximum_absorbance() {
        let peak = find_peak(&rows(&[(400.0, 0.1), (450.0, 0.9), (500.0, 0.3)])).unwrap();
        assert_eq!(peak.index, 1);
        assert_eq!(peak.wavelength().to_string(), "450");
        assert_eq!(peak.absorbance().to_string(), "0.9");
    }

    #[test]
    fn ties_keep_earliest() {
        let peak = find_peak(&rows(&[(400.0, 0.5), (410.0, 0.7), (420.0, 0.7)])).unwrap();
        assert_eq!(peak.index, 1);
        assert_eq!(peak.wavelength(), 410.0);
    }

    #[test]
    fn negative_absorbance_still_found() {
        let peak = find_peak(&rows(&[(400.0, -0.3), (410.0, -0.1)])).unwrap();
        assert_eq!(peak.wavelength(), 410.0);
    }

    #[test]
    fn empty_or_nan_only_is_none() {
        assert_eq!(find_peak(&[]), None);
        assert_eq!(find_peak(&rows(&[(400.0, f64::NAN)])), None);
    }

    #[test]
    fn result_dominates_every_row() {
        let data = rows(&[
            (400.0, 0.12),
            (405.0, 0.48),
            (410.0, 0.33),
            (415.0, 0.48),
            (420.0, 0.05),
        ]);
        let peak = find_peak(&data).unwrap();
        assert!(data.iter().all(|r| r.absorbance <= peak.absorbance()));
        assert_eq!(peak.index, 1);
    }
}
