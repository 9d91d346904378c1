//! Portfolio value input port.

use crate::domain::error::EqWeightError;
use crate::domain::portfolio_value::PortfolioValue;

pub trait PortfolioValuePort {
    /// Obtains the total to invest, or fails after the allowed retries.
    fn read_portfolio_value(&mut self) -> Result<PortfolioValue, EqWeightError>;
}
