//! Fetching quotes for the whole constituent list, one batch at a time.

use std::num::NonZeroUsize;

use log::info;

use crate::domain::batch::{batch_count, batches};
use crate::domain::error::EqWeightError;
use crate::domain::quote::Quote;
use crate::domain::ticker::Ticker;
use crate::ports::quote_port::QuotePort;

/// Fetches every ticker through `port`, one request per batch, and returns
/// the quotes in the same order as `tickers`.
///
/// The first failing batch aborts the whole fetch.
pub fn fetch_quote_table(
    port: &dyn QuotePort,
    tickers: &[Ticker],
    batch_size: NonZeroUsize,
) -> Result<Vec<Quote>, EqWeightError> {
    let total = batch_count(tickers.len(), batch_size);
    let mut table = Vec::with_capacity(tickers.len());

    for (i, batch) in batches(tickers, batch_size).enumerate() {
        info!("Fetching batch {}/{} ({} symbols)", i + 1, total, batch.len());
        let mut quotes = port.fetch_quotes(batch)?;

        for ticker in batch {
            let quote = quotes
                .remove(ticker)
                .ok_or_else(|| EqWeightError::MalformedResponse {
                    symbol: ticker.to_string(),
                    reason: "symbol missing from response".into(),
                })?;
            table.push(quote);
        }
    }

    Ok(table)
}
