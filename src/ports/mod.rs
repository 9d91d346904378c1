//! Port traits between the domain and the outside world.

pub mod config_port;
pub mod quote_port;
pub mod report_port;
pub mod ticker_port;
pub mod value_port;
