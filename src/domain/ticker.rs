//! Ticker symbols.

use std::fmt;
use std::str::FromStr;

/// An uppercase stock symbol such as `AAPL` or `BRK.B`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticker(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TickerError {
    #[error("empty ticker")]
    Empty,

    #[error("invalid character {ch:?} in ticker {symbol}")]
    InvalidChar { symbol: String, ch: char },
}

impl Ticker {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Ticker {
    type Err = TickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(TickerError::Empty);
        }
        let bad = symbol
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '.' || *c == '-'));
        if let Some(ch) = bad {
            return Err(TickerError::InvalidChar { symbol, ch });
        }
        Ok(Ticker(symbol))
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Joins tickers into the comma-separated form quote APIs expect.
pub fn join_symbols(tickers: &[Ticker]) -> String {
    tickers
        .iter()
        .map(Ticker::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
