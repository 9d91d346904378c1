//! Domain error types.

/// Top-level error type for eqweight.
#[derive(Debug, thiserror::Error)]
pub enum EqWeightError {
    #[error("invalid portfolio value {input:?}: {reason}")]
    InvalidPortfolioValue { input: String, reason: String },

    #[error("quote source unavailable: {reason}")]
    SourceUnavailable { reason: String },

    #[error("malformed quote response for {symbol}: {reason}")]
    MalformedResponse { symbol: String, reason: String },

    #[error("invalid price {price} for {ticker}: price must be positive")]
    InvalidPrice { ticker: String, price: f64 },

    #[error("share count {shares:e} for {ticker} does not fit in a whole-share quantity")]
    ShareOverflow { ticker: String, shares: f64 },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("ticker list error in {file}: {reason}")]
    TickerList { file: String, reason: String },

    #[error("report error: {reason}")]
    Report { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Every fatal error exits with the same failure status.
impl From<&EqWeightError> for std::process::ExitCode {
    fn from(_err: &EqWeightError) -> Self {
        std::process::ExitCode::FAILURE
    }
}
