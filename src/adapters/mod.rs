//! Concrete adapter implementations for ports.

pub mod console_prompt_adapter;
pub mod csv_adapter;
pub mod file_config_adapter;
pub mod iex_adapter;
pub mod xlsx_report_adapter;
