//! Equal-weight share allocation.

use super::error::EqWeightError;
use super::portfolio_value::PortfolioValue;
use super::quote::{Position, Quote};
use super::ticker::Ticker;

/// Splits `total` evenly across `quotes` and converts each slice of the
/// budget into a whole number of shares, rounding down.
///
/// Output order matches input order. Fails on the first quote whose price
/// is zero, negative or not finite, or whose share count exceeds `u64`;
/// nothing is returned in that case.
///
/// The quotient is computed in binary floating point, so a budget of 0.70 at
/// a price of 0.10 floors to 6 rather than 7.
pub fn allocate(quotes: &[Quote], total: PortfolioValue) -> Result<Vec<Position>, EqWeightError> {
    if quotes.is_empty() {
        return Ok(Vec::new());
    }

    let budget = per_position_budget(total, quotes.len());

    quotes
        .iter()
        .map(|q| {
            if !q.price.is_finite() || q.price <= 0.0 {
                return Err(EqWeightError::InvalidPrice {
                    ticker: q.ticker.to_string(),
                    price: q.price,
                });
            }
            Ok(Position {
                ticker: q.ticker.clone(),
                price: q.price,
                market_cap: q.market_cap,
                shares: whole_shares(&q.ticker, budget / q.price)?,
            })
        })
        .collect()
}

/// `u64::MAX as f64` rounds up to 2^64; a finite budget over a positive
/// price is never NaN, so the only failure is reaching this limit.
const SHARE_LIMIT: f64 = u64::MAX as f64;

fn whole_shares(ticker: &Ticker, quotient: f64) -> Result<u64, EqWeightError> {
    let shares = quotient.floor();
    if shares >= SHARE_LIMIT {
        return Err(EqWeightError::ShareOverflow {
            ticker: ticker.to_string(),
            shares,
        });
    }
    Ok(shares as u64)
}

pub fn per_position_budget(total: PortfolioValue, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    total.get() / count as f64
}

#[derive(Debug, Clone, PartialEq)]
pub struct AllocationSummary {
    pub positions: usize,
    pub per_position_budget: f64,
    pub invested: f64,
    pub uninvested_cash: f64,
}

impl AllocationSummary {
    pub fn compute(positions: &[Position], total: PortfolioValue) -> Self {
        let invested: f64 = positions.iter().map(Position::cost).sum();
        AllocationSummary {
            positions: positions.len(),
            per_position_budget: per_position_budget(total, positions.len()),
            invested,
            uninvested_cash: total.get() - invested,
        }
    }
}
