//! Quote source port.

use std::collections::HashMap;

use crate::domain::error::EqWeightError;
use crate::domain::quote::Quote;
use crate::domain::ticker::Ticker;

/// A provider of latest prices and market capitalisations.
pub trait QuotePort {
    /// Fetches one quote per requested symbol in a single request.
    ///
    /// Implementations fail with `SourceUnavailable` on transport errors and
    /// `MalformedResponse` when any requested symbol is missing a field.
    fn fetch_quotes(&self, symbols: &[Ticker]) -> Result<HashMap<Ticker, Quote>, EqWeightError>;
}
