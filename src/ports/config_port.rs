//! Configuration access port.

/// Read-only view over sectioned `key = value` settings.
///
/// Typed getters fall back to `default` when the key is absent; a present
/// but unparseable value is reported as `Err` carrying the raw text so the
/// caller can name it in a config error.
pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_usize(&self, section: &str, key: &str, default: usize) -> Result<usize, String>;
    fn get_double(&self, section: &str, key: &str, default: f64) -> Result<f64, String>;
}
