//! INI file configuration adapter.

use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }

    /// A configuration with no keys; every lookup takes its default.
    pub fn empty() -> Self {
        Self { config: Ini::new() }
    }

    fn raw(&self, section: &str, key: &str) -> Option<String> {
        self.config
            .get(section, key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.raw(section, key)
    }

    fn get_usize(&self, section: &str, key: &str, default: usize) -> Result<usize, String> {
        match self.raw(section, key) {
            Some(v) => v.parse().map_err(|_| v),
            None => Ok(default),
        }
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> Result<f64, String> {
        match self.raw(section, key) {
            Some(v) => v.parse().map_err(|_| v),
            None => Ok(default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn from_string_parses_config() {
        let content = r#"
[quote_source]
base_url = https://cloud.iexapis.com/stable
token = pk_test

[report]
sheet_name = Recommended Trades
"#;
        let adapter = FileConfigAdapter::from_string(content).unwrap();
        assert_eq!(
            adapter.get_string("quote_source", "base_url"),
            Some("https://cloud.iexapis.com/stable".to_string())
        );
        assert_eq!(
            adapter.get_string("report", "sheet_name"),
            Some("Recommended Trades".to_string())
        );
    }

    #[test]
    fn get_string_returns_none_for_missing_key() {
        let adapter = FileConfigAdapter::from_string("[report]\ncolumn_width = 18\n").unwrap();
        assert_eq!(adapter.get_string("report", "missing"), None);
        assert_eq!(adapter.get_string("missing_section", "key"), None);
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let adapter = FileConfigAdapter::from_string("[quote_source]\ntoken =\n").unwrap();
        assert_eq!(adapter.get_string("quote_source", "token"), None);
    }

    #[test]
    fn get_usize_returns_value() {
        let adapter =
            FileConfigAdapter::from_string("[quote_source]\nbatch_size = 50\n").unwrap();
        assert_eq!(adapter.get_usize("quote_source", "batch_size", 100), Ok(50));
    }

    #[test]
    fn get_usize_returns_default_for_missing() {
        let adapter = FileConfigAdapter::from_string("[quote_source]\n").unwrap();
        assert_eq!(adapter.get_usize("quote_source", "batch_size", 100), Ok(100));
    }

    #[test]
    fn get_usize_reports_non_numeric() {
        let adapter =
            FileConfigAdapter::from_string("[quote_source]\nbatch_size = lots\n").unwrap();
        assert_eq!(
            adapter.get_usize("quote_source", "batch_size", 100),
            Err("lots".to_string())
        );
    }

    #[test]
    fn get_double_returns_value_and_default() {
        let adapter = FileConfigAdapter::from_string("[report]\ncolumn_width = 22.5\n").unwrap();
        assert_eq!(adapter.get_double("report", "column_width", 18.0), Ok(22.5));
        assert_eq!(adapter.get_double("report", "other", 18.0), Ok(18.0));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let adapter = FileConfigAdapter::empty();
        assert_eq!(adapter.get_string("quote_source", "token"), None);
        assert_eq!(adapter.get_usize("quote_source", "timeout_secs", 30), Ok(30));
    }

    #[test]
    fn from_file_reads_config() {
        let file = create_temp_config("[input]\ntickers_path = /data/sp_500_stocks.csv\n");
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(
            adapter.get_string("input", "tickers_path"),
            Some("/data/sp_500_stocks.csv".to_string())
        );
    }

    #[test]
    fn from_file_returns_error_for_missing_file() {
        let result = FileConfigAdapter::from_file("/nonexistent/path/eqweight.ini");
        assert!(result.is_err());
    }
}
