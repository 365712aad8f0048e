use crate::constants::{EXPECTED_X_HEADER, EXPECTED_Y_HEADER, ZONE_HEADER};
use crate::error::{CourtError, Result, check_lengths};
use crate::geometry::masks::Zone;

use csv::{ReaderBuilder, StringRecord, Trim, Writer};
use itertools::Itertools;
use std::io::{Read, Write};
use std::path::Path;

/// Parallel coordinate columns read from a point file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl PointSet {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }
}

/// Reads shot/tracking points from a CSV file with an `x,y` header
///
/// # Errors
/// Returns error if the file cannot be read or the CSV format is invalid
pub fn read_points_csv<P: AsRef<Path>>(path: P) -> Result<PointSet> {
    let file = std::fs::File::open(path)?;
    read_points_from_reader(file)
}

/// Read CSV with `x,y` format.
/// - extra columns after `y` are ignored
/// - blank rows are skipped
pub fn read_points_from_reader<R: Read>(reader: R) -> Result<PointSet> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true) // allow additional columns
        .from_reader(reader);

    validate_csv_headers(&mut rdr)?;

    let mut points = PointSet::default();
    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = i + 2; // CSV rows are 1-indexed, +1 for header

        if let Some((x, y)) = parse_record(&rec, row)? {
            points.push(x, y);
        }
    }

    Ok(points)
}

fn validate_csv_headers<R: Read>(csv_reader: &mut csv::Reader<R>) -> Result<()> {
    let headers = csv_reader
        .headers()
        .map_err(|e| CourtError::CsvHeader(format!("Failed to read headers: {}", e)))?;

    for (index, expected) in [EXPECTED_X_HEADER, EXPECTED_Y_HEADER].into_iter().enumerate() {
        let found = headers
            .get(index)
            .ok_or_else(|| CourtError::CsvHeader(format!("Missing {} column at index {}", expected, index)))?;
        if !found.eq_ignore_ascii_case(expected) {
            return Err(CourtError::CsvHeader(format!(
                "Expected '{}' in column {}, found '{}'",
                expected, index, found
            )));
        }
    }
    Ok(())
}

fn parse_record(rec: &StringRecord, row: usize) -> Result<Option<(f64, f64)>> {
    if rec.iter().all(|f| f.trim().is_empty()) {
        return Ok(None);
    }
    let x = parse_coordinate(get_column_value(rec, 0, row)?, row)?;
    let y = parse_coordinate(get_column_value(rec, 1, row)?, row)?;
    Ok(Some((x, y)))
}

fn get_column_value(record: &StringRecord, column_index: usize, row_number: usize) -> Result<&str> {
    record
        .get(column_index)
        .map(str::trim)
        .ok_or_else(|| CourtError::CsvRow {
            row: row_number,
            got: record.len(),
        })
}

fn parse_coordinate(value: &str, row_number: usize) -> Result<f64> {
    value.parse().map_err(|parse_error| CourtError::CoordinateParse {
        row: row_number,
        value: value.to_string(),
        source: parse_error,
    })
}

/// Writes `x,y,zone` rows, one per classified point
pub fn write_classified_csv<W: Write>(writer: W, points: &PointSet, zones: &[Zone]) -> Result<()> {
    check_lengths(&points.x, &points.y)?;
    if zones.len() != points.len() {
        return Err(CourtError::LengthMismatch {
            x_len: points.len(),
            y_len: zones.len(),
        });
    }

    let mut wtr = Writer::from_writer(writer);
    wtr.write_record([EXPECTED_X_HEADER, EXPECTED_Y_HEADER, ZONE_HEADER])?;
    for ((x, y), zone) in points.x.iter().zip_eq(&points.y).zip_eq(zones) {
        wtr.write_record([x.to_string(), y.to_string(), zone.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}
