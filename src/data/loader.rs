use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::StringRecord;
use log::debug;

use super::DataError;
use super::model::{MeasurementRow, MeasurementSet};

/// Rows of instrument metadata preceding the readings in a GENESYS export.
pub const DEFAULT_HEADER_ROWS: usize = 7;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the readings of one export file.
///
/// Skips `header_rows` preamble rows, then parses columns 0 and 1 of every
/// remaining row as wavelength and absorbance.
pub fn load_measurements(path: &Path, header_rows: usize) -> Result<MeasurementSet, DataError> {
    let rows = read_rows(path, header_rows)?;
    parse_measurements(&rows)
}

/// Read a comma-delimited file and return every row after the preamble as raw
/// text fields.
///
/// The preamble is counted in physical lines, blank lines included. A file
/// with `header_rows` lines or fewer yields an empty vector.
pub fn read_rows(path: &Path, header_rows: usize) -> Result<Vec<StringRecord>, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_rows_from(file, header_rows).map_err(|source| DataError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse raw rows into a [`MeasurementSet`].
///
/// Rows with fewer than two fields are dropped. Fields are trimmed before
/// parsing, and the trimmed text is kept on the row; anything that is not a
/// number is an error.
pub fn parse_measurements(rows: &[StringRecord]) -> Result<MeasurementSet, DataError> {
    let mut readings = Vec::with_capacity(rows.len());

    for (row_no, record) in rows.iter().enumerate() {
        let (Some(wl), Some(abs)) = (record.get(0), record.get(1)) else {
            debug!("dropping data row {row_no}: {} field(s)", record.len());
            continue;
        };
        let (wl, abs) = (wl.trim(), abs.trim());
        readings.push(MeasurementRow::with_text(
            parse_field(wl, row_no, 0)?,
            parse_field(abs, row_no, 1)?,
            wl,
            abs,
        ));
    }

    Ok(MeasurementSet::from_rows(readings))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_rows_from<R: Read>(reader: R, header_rows: usize) -> Result<Vec<StringRecord>, csv::Error> {
    // The csv reader drops blank lines, so the preamble is skipped line by
    // line before it sees the input.
    let mut reader = BufReader::new(reader);
    let mut line = Vec::new();
    for _ in 0..header_rows {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(Vec::new());
        }
    }

    // Readings may carry trailing fields, so the reader must be flexible.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    reader.records().collect()
}

fn parse_field(text: &str, row: usize, column: usize) -> Result<f64, DataError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| DataError::InvalidNumber {
            row,
            column,
            text: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREAMBLE: &str = "\
GENESYS 30
Scan
Operator,lab
Date,2023-03-14
Start,400
End,500
Wavelength (nm),Absorbance
";

    fn rows_of(text: &str) -> Vec<StringRecord> {
        read_rows_from(text.as_bytes(), DEFAULT_HEADER_ROWS).unwrap()
    }

    #[test]
    fn fewer_than_header_rows_is_empty() {
        assert!(rows_of("a\nb\nc\n").is_empty());
        assert!(rows_of("").is_empty());
    }

    #[test]
    fn exactly_header_rows_is_empty() {
        assert!(rows_of(PREAMBLE).is_empty());
    }

    #[test]
    fn keeps_rows_after_preamble_in_order() {
        let text = format!("{PREAMBLE}400,0.1\n450,0.9\n500,0.3\n");
        let rows = rows_of(&text);
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "400");
        assert_eq!(&rows[1][1], "0.9");
        assert_eq!(&rows[2][0], "500");
    }

    #[test]
    fn blank_lines_count_toward_preamble() {
        let text = "GENESYS 30\n\nOperator,lab\nDate,2023-03-14\nStart,400\nEnd,500\n\
                    Wavelength (nm),Absorbance\n400,0.1\n450,0.9\n500,0.3\n";
        let rows = rows_of(text);
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "400");
        assert_eq!(&rows[2][1], "0.3");
    }

    #[test]
    fn keeps_field_text_as_written() {
        let text = format!("{PREAMBLE}400.0,0.1000\n450.0, 0.9000 \n500.0,-0.0000\n");
        let set = parse_measurements(&rows_of(&text)).unwrap();
        assert_eq!(set.rows[1].wavelength_text, "450.0");
        assert_eq!(set.rows[1].absorbance_text, "0.9000");
        assert_eq!(set.rows[2].absorbance_text, "-0.0000");
    }

    #[test]
    fn parses_rows_and_drops_short_ones() {
        let text = format!("{PREAMBLE}400, 0.1\nnote\n450,0.9,extra\n");
        let set = parse_measurements(&rows_of(&text)).unwrap();
        assert_eq!(
            set.rows,
            vec![MeasurementRow::new(400.0, 0.1), MeasurementRow::new(450.0, 0.9)]
        );
    }

    #[test]
    fn non_numeric_field_is_an_error() {
        let text = format!("{PREAMBLE}400,0.1\n450,n/a\n");
        let err = parse_measurements(&rows_of(&text)).unwrap_err();
        match err {
            DataError::InvalidNumber { row, column, text } => {
                assert_eq!((row, column), (1, 1));
                assert_eq!(text, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_rows(&dir.path().join("absent.csv"), DEFAULT_HEADER_ROWS).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.csv");
        std::fs::write(&path, format!("{PREAMBLE}400,0.1\n450,0.9\n")).unwrap();

        let set = load_measurements(&path, DEFAULT_HEADER_ROWS).unwrap();
        assert_eq!(set.len(), 2);
    }
}
