//! Quote and position records.

use super::ticker::Ticker;

/// Latest market data for one ticker, as returned by a quote source.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub ticker: Ticker,
    pub price: f64,
    pub market_cap: f64,
}

/// One row of the recommended trades report.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub ticker: Ticker,
    pub price: f64,
    pub market_cap: f64,
    pub shares: u64,
}

impl Position {
    pub fn cost(&self) -> f64 {
        self.shares as f64 * self.price
    }
}
