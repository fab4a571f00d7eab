//! CSV price import — offline alternative to the Yahoo provider.
//!
//! Expects a header row naming a `date` column (YYYY-MM-DD) and an
//! `adj_close` column (`adjclose` and `close` are accepted aliases).
//! Non-numeric prices coerce to NaN — they are missing values, not
//! errors. Unparseable dates are an error: a row without a date cannot
//! be placed in the series at all.

use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;

use super::provider::{DataError, PriceProvider};
use crate::domain::{PricePoint, PriceSeries};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// File-based price source.
pub struct CsvImport {
    path: PathBuf,
}

impl CsvImport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse `date,adj_close` rows from any reader, keeping rows inside
    /// [start, end].
    fn parse_reader<R: io::Read>(
        reader: R,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>, DataError> {
        let mut rdr = csv::Reader::from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| DataError::Csv(e.to_string()))?
            .clone();
        let date_idx = find_column(&headers, &["date"])
            .ok_or_else(|| DataError::Csv("no 'date' column in header".into()))?;
        let price_idx = find_column(&headers, &["adj_close", "adjclose", "close"])
            .ok_or_else(|| DataError::Csv("no 'adj_close' column in header".into()))?;

        let mut points = Vec::new();
        for (row, record) in rdr.records().enumerate() {
            let record = record.map_err(|e| DataError::Csv(e.to_string()))?;

            let date_field = record.get(date_idx).unwrap_or("").trim();
            let date = NaiveDate::parse_from_str(date_field, DATE_FORMAT).map_err(|e| {
                DataError::Csv(format!("row {}: bad date '{date_field}': {e}", row + 2))
            })?;

            if date < start || date > end {
                continue;
            }

            let price = record
                .get(price_idx)
                .and_then(|s| s.trim().parse::<f64>().ok())
                .unwrap_or(f64::NAN);

            points.push(PricePoint::new(date, price));
        }

        Ok(points)
    }
}

fn find_column(headers: &csv::StringRecord, names: &[&str]) -> Option<usize> {
    for name in names {
        if let Some(idx) = headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
        {
            return Some(idx);
        }
    }
    None
}

impl PriceProvider for CsvImport {
    fn name(&self) -> &str {
        "csv_import"
    }

    fn fetch(
        &self,
        _symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, DataError> {
        let file = std::fs::File::open(&self.path)
            .map_err(|e| DataError::Csv(format!("{}: {e}", self.path.display())))?;
        let points = Self::parse_reader(io::BufReader::new(file), start, end)?;
        Ok(PriceSeries::new(points)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn parse(csv: &str) -> Vec<PricePoint> {
        CsvImport::parse_reader(csv.as_bytes(), d(2000, 1, 1), d(2100, 1, 1)).unwrap()
    }

    #[test]
    fn parses_date_and_adj_close() {
        let points = parse("date,adj_close\n2024-01-02,100.5\n2024-01-03,101.0\n");
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, d(2024, 1, 2));
        assert_eq!(points[0].price, 100.5);
    }

    #[test]
    fn header_aliases_and_case() {
        let points = parse("Date,Close\n2024-01-02,100.5\n");
        assert_eq!(points[0].price, 100.5);
    }

    #[test]
    fn non_numeric_price_coerces_to_nan() {
        let points = parse("date,adj_close\n2024-01-02,n/a\n2024-01-03,101.0\n");
        assert!(points[0].price.is_nan());
        assert_eq!(points[1].price, 101.0);
    }

    #[test]
    fn bad_date_is_an_error() {
        let err = CsvImport::parse_reader(
            "date,adj_close\nnot-a-date,100.0\n".as_bytes(),
            d(2000, 1, 1),
            d(2100, 1, 1),
        )
        .unwrap_err();
        assert!(matches!(err, DataError::Csv(_)));
    }

    #[test]
    fn rows_outside_range_are_dropped() {
        let csv = "date,adj_close\n2024-01-02,100.0\n2024-06-02,105.0\n2024-12-02,110.0\n";
        let points =
            CsvImport::parse_reader(csv.as_bytes(), d(2024, 5, 1), d(2024, 7, 1)).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, d(2024, 6, 2));
    }

    #[test]
    fn missing_price_column_is_an_error() {
        let err = CsvImport::parse_reader(
            "date,volume\n2024-01-02,123\n".as_bytes(),
            d(2000, 1, 1),
            d(2100, 1, 1),
        )
        .unwrap_err();
        assert!(matches!(err, DataError::Csv(_)));
    }
}
