//! Error module containing error types and result aliases

mod forecast_error;
mod parse_error;

pub use forecast_error::ForecastError;
pub use parse_error::ParseError;

/// Result type for forecast configuration operations
pub type Result<T> = std::result::Result<T, ForecastError>;
