//! Run configuration assembled from the config port and CLI overrides.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::iex_adapter::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::adapters::xlsx_report_adapter::{DEFAULT_COLUMN_WIDTH, DEFAULT_SHEET_NAME};
use crate::domain::batch::DEFAULT_BATCH_SIZE;
use crate::domain::error::EqWeightError;
use crate::ports::config_port::ConfigPort;

pub const TOKEN_ENV_VAR: &str = "IEX_CLOUD_API_TOKEN";
pub const DEFAULT_TICKERS_PATH: &str = "sp_500_stocks.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "recommended_trades.xlsx";

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub base_url: String,
    /// `None` until a token is configured; only a live fetch requires it.
    pub token: Option<String>,
    pub batch_size: NonZeroUsize,
    pub timeout: Duration,
    pub tickers_path: PathBuf,
    pub output_path: PathBuf,
    pub sheet_name: String,
    pub column_width: f64,
}

impl RunConfig {
    /// Replaces the configured paths with any given on the command line.
    pub fn with_overrides(mut self, tickers: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(path) = tickers {
            self.tickers_path = path;
        }
        if let Some(path) = output {
            self.output_path = path;
        }
        self
    }

    pub fn require_token(&self) -> Result<&str, EqWeightError> {
        self.token
            .as_deref()
            .ok_or_else(|| EqWeightError::ConfigMissing {
                section: "quote_source".into(),
                key: "token".into(),
            })
    }
}

fn invalid(section: &str, key: &str, reason: String) -> EqWeightError {
    EqWeightError::ConfigInvalid {
        section: section.into(),
        key: key.into(),
        reason,
    }
}

fn positive_usize(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
    default: usize,
) -> Result<NonZeroUsize, EqWeightError> {
    let value = config
        .get_usize(section, key, default)
        .map_err(|raw| invalid(section, key, format!("{raw:?} is not a whole number")))?;
    NonZeroUsize::new(value)
        .ok_or_else(|| invalid(section, key, format!("{key} must be at least 1")))
}

/// Builds the run configuration. `env_token` is consulted only when the
/// config has no `[quote_source] token`.
pub fn build_run_config(
    config: &dyn ConfigPort,
    env_token: Option<String>,
) -> Result<RunConfig, EqWeightError> {
    let batch_size = positive_usize(
        config,
        "quote_source",
        "batch_size",
        DEFAULT_BATCH_SIZE.get(),
    )?;
    let timeout_secs = positive_usize(
        config,
        "quote_source",
        "timeout_secs",
        DEFAULT_TIMEOUT_SECS as usize,
    )?;

    let column_width = config
        .get_double("report", "column_width", DEFAULT_COLUMN_WIDTH)
        .map_err(|raw| invalid("report", "column_width", format!("{raw:?} is not a number")))?;
    if !column_width.is_finite() || column_width <= 0.0 {
        return Err(invalid(
            "report",
            "column_width",
            "column_width must be positive".into(),
        ));
    }

    let base_url = config
        .get_string("quote_source", "base_url")
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(invalid(
            "quote_source",
            "base_url",
            "base_url must start with http:// or https://".into(),
        ));
    }

    let token = config
        .get_string("quote_source", "token")
        .or_else(|| env_token.filter(|t| !t.trim().is_empty()));

    Ok(RunConfig {
        base_url,
        token,
        batch_size,
        timeout: Duration::from_secs(timeout_secs.get() as u64),
        tickers_path: config
            .get_string("input", "tickers_path")
            .unwrap_or_else(|| DEFAULT_TICKERS_PATH.to_string())
            .into(),
        output_path: config
            .get_string("report", "output_path")
            .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string())
            .into(),
        sheet_name: config
            .get_string("report", "sheet_name")
            .unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string()),
        column_width,
    })
}
