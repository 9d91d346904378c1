//! IEX Cloud batch quote adapter.
//!
//! One `GET {base_url}/stock/market/batch?types=quote&symbols=..&token=..`
//! per call. The response is an object keyed by symbol:
//!
//! ```json
//! { "AAPL": { "quote": { "latestPrice": 150.0, "marketCap": 2.4e12 } } }
//! ```

use std::collections::HashMap;
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::error::EqWeightError;
use crate::domain::quote::Quote;
use crate::domain::ticker::{Ticker, join_symbols};
use crate::ports::quote_port::QuotePort;

pub const DEFAULT_BASE_URL: &str = "https://sandbox.iexapis.com/stable";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct BatchEntry {
    quote: Option<IexQuote>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IexQuote {
    latest_price: Option<f64>,
    market_cap: Option<f64>,
}

pub struct IexCloudAdapter {
    client: Client,
    base_url: String,
    token: String,
}

impl IexCloudAdapter {
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self, EqWeightError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EqWeightError::SourceUnavailable {
                reason: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn batch_url(&self) -> String {
        format!("{}/stock/market/batch", self.base_url)
    }
}

impl QuotePort for IexCloudAdapter {
    fn fetch_quotes(&self, symbols: &[Ticker]) -> Result<HashMap<Ticker, Quote>, EqWeightError> {
        if symbols.is_empty() {
            return Ok(HashMap::new());
        }

        let joined = join_symbols(symbols);
        debug!("GET {}?types=quote&symbols={}&token=***", self.batch_url(), joined);

        let response = self
            .client
            .get(self.batch_url())
            .query(&[
                ("types", "quote"),
                ("symbols", joined.as_str()),
                ("token", self.token.as_str()),
            ])
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| EqWeightError::SourceUnavailable {
                reason: e.without_url().to_string(),
            })?;

        let body = response
            .text()
            .map_err(|e| EqWeightError::SourceUnavailable {
                reason: format!("failed to read response body: {}", e.without_url()),
            })?;

        parse_batch_response(&body, symbols)
    }
}

/// Decodes a batch body, requiring a complete quote for every requested symbol.
pub fn parse_batch_response(
    body: &str,
    symbols: &[Ticker],
) -> Result<HashMap<Ticker, Quote>, EqWeightError> {
    // Entries are decoded per requested symbol; unrequested ones may hold anything.
    let mut entries: HashMap<String, Value> =
        serde_json::from_str(body).map_err(|e| EqWeightError::MalformedResponse {
            symbol: join_symbols(symbols),
            reason: format!("invalid JSON: {}", e),
        })?;

    let malformed = |ticker: &Ticker, reason: &str| EqWeightError::MalformedResponse {
        symbol: ticker.to_string(),
        reason: reason.to_string(),
    };

    let mut quotes = HashMap::with_capacity(symbols.len());
    for ticker in symbols {
        let raw = entries
            .remove(ticker.as_str())
            .ok_or_else(|| malformed(ticker, "symbol missing from response"))?;
        let entry: BatchEntry = serde_json::from_value(raw)
            .map_err(|e| malformed(ticker, &format!("invalid entry: {}", e)))?;
        let quote = entry
            .quote
            .ok_or_else(|| malformed(ticker, "missing quote object"))?;

        let price = quote
            .latest_price
            .ok_or_else(|| malformed(ticker, "missing latestPrice"))?;
        let market_cap = quote
            .market_cap
            .ok_or_else(|| malformed(ticker, "missing marketCap"))?;
        if !market_cap.is_finite() || market_cap < 0.0 {
            return Err(malformed(ticker, "negative marketCap"));
        }

        quotes.insert(
            ticker.clone(),
            Quote {
                ticker: ticker.clone(),
                price,
                market_cap,
            },
        );
    }

    Ok(quotes)
}
