//! CSV constituent list adapter.
//!
//! Reads the `Ticker` column of a headed CSV file. Other columns are
//! ignored, so an exported index constituents sheet can be used as-is.

use crate::domain::error::EqWeightError;
use crate::domain::ticker::Ticker;
use crate::ports::ticker_port::TickerPort;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

pub const TICKER_COLUMN: &str = "Ticker";

pub struct CsvTickerAdapter {
    path: PathBuf,
}

impl CsvTickerAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn list_error(&self, reason: String) -> EqWeightError {
        EqWeightError::TickerList {
            file: self.path.display().to_string(),
            reason,
        }
    }
}

impl TickerPort for CsvTickerAdapter {
    fn load_tickers(&self) -> Result<Vec<Ticker>, EqWeightError> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| self.list_error(format!("failed to read: {}", e)))?;

        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = rdr
            .headers()
            .map_err(|e| self.list_error(format!("CSV parse error: {}", e)))?;
        let column = headers
            .iter()
            .position(|h| h == TICKER_COLUMN)
            .ok_or_else(|| self.list_error(format!("missing {} column", TICKER_COLUMN)))?;

        let mut tickers = Vec::new();
        let mut seen = HashSet::new();

        for (row, result) in rdr.records().enumerate() {
            let record =
                result.map_err(|e| self.list_error(format!("CSV parse error: {}", e)))?;

            let raw = record.get(column).unwrap_or("");
            if raw.is_empty() {
                continue;
            }

            // +2: one for the header line, one for 1-based numbering
            let ticker: Ticker = raw
                .parse()
                .map_err(|e| self.list_error(format!("line {}: {}", row + 2, e)))?;

            if !seen.insert(ticker.clone()) {
                return Err(self.list_error(format!("duplicate ticker: {}", ticker)));
            }
            tickers.push(ticker);
        }

        Ok(tickers)
    }
}
