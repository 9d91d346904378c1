#![allow(dead_code)]

use eqweight::domain::error::EqWeightError;
use eqweight::domain::portfolio_value::PortfolioValue;
pub use eqweight::domain::quote::{Position, Quote};
pub use eqweight::domain::ticker::Ticker;
use eqweight::ports::quote_port::QuotePort;
use eqweight::ports::report_port::ReportPort;
use eqweight::ports::value_port::PortfolioValuePort;
use eqweight::run_config::{RunConfig, build_run_config};
use eqweight::adapters::file_config_adapter::FileConfigAdapter;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::num::NonZeroUsize;

/// Serves fixed quotes and records every batch it is asked for.
pub struct MockQuotePort {
    pub quotes: HashMap<String, (f64, f64)>,
    pub fail_on_call: Option<usize>,
    pub calls: RefCell<Vec<Vec<String>>>,
}

impl MockQuotePort {
    pub fn new() -> Self {
        Self {
            quotes: HashMap::new(),
            fail_on_call: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_quote(mut self, symbol: &str, price: f64, market_cap: f64) -> Self {
        self.quotes.insert(symbol.to_string(), (price, market_cap));
        self
    }

    /// Makes the n-th request (0-based) fail as unreachable.
    pub fn failing_on_call(mut self, n: usize) -> Self {
        self.fail_on_call = Some(n);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl QuotePort for MockQuotePort {
    fn fetch_quotes(&self, symbols: &[Ticker]) -> Result<HashMap<Ticker, Quote>, EqWeightError> {
        let n = self.call_count();
        self.calls
            .borrow_mut()
            .push(symbols.iter().map(|t| t.to_string()).collect());

        if self.fail_on_call == Some(n) {
            return Err(EqWeightError::SourceUnavailable {
                reason: "connection refused".into(),
            });
        }

        Ok(symbols
            .iter()
            .filter_map(|t| {
                self.quotes.get(t.as_str()).map(|&(price, market_cap)| {
                    (
                        t.clone(),
                        Quote {
                            ticker: t.clone(),
                            price,
                            market_cap,
                        },
                    )
                })
            })
            .collect())
    }
}

/// Captures what would have been written.
pub struct MockReportPort {
    pub written: RefCell<Option<Vec<Position>>>,
}

impl MockReportPort {
    pub fn new() -> Self {
        Self {
            written: RefCell::new(None),
        }
    }

    pub fn positions(&self) -> Vec<Position> {
        self.written.borrow().clone().expect("report was not written")
    }

    pub fn was_written(&self) -> bool {
        self.written.borrow().is_some()
    }
}

impl ReportPort for MockReportPort {
    fn write(&self, positions: &[Position]) -> Result<(), EqWeightError> {
        *self.written.borrow_mut() = Some(positions.to_vec());
        Ok(())
    }

    fn destination(&self) -> String {
        "memory".to_string()
    }
}

/// Returns a fixed value, counting how often it was asked.
pub struct FixedValuePort {
    pub value: f64,
    pub reads: usize,
}

impl FixedValuePort {
    pub fn new(value: f64) -> Self {
        Self { value, reads: 0 }
    }
}

impl PortfolioValuePort for FixedValuePort {
    fn read_portfolio_value(&mut self) -> Result<PortfolioValue, EqWeightError> {
        self.reads += 1;
        PortfolioValue::new(self.value)
    }
}

pub fn tickers(symbols: &[&str]) -> Vec<Ticker> {
    symbols.iter().map(|s| s.parse().unwrap()).collect()
}

pub fn run_config_with_batch(size: usize) -> RunConfig {
    let mut cfg = build_run_config(&FileConfigAdapter::empty(), Some("test-token".into())).unwrap();
    cfg.batch_size = NonZeroUsize::new(size).unwrap();
    cfg
}

pub fn symbols(positions: &[Position]) -> Vec<&str> {
    positions.iter().map(|p| p.ticker.as_str()).collect()
}

pub fn shares(positions: &[Position]) -> Vec<u64> {
    positions.iter().map(|p| p.shares).collect()
}

/// Reads one XML part out of an xlsx archive.
pub fn workbook_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive.by_name(name).unwrap().read_to_string(&mut xml).unwrap();
    xml
}
