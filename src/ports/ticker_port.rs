//! Constituent list port.

use crate::domain::error::EqWeightError;
use crate::domain::ticker::Ticker;

pub trait TickerPort {
    /// Loads the constituent list. Order is significant.
    fn load_tickers(&self) -> Result<Vec<Ticker>, EqWeightError>;
}
