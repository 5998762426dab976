use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("invalid input '{field}': {value}")]
    InvalidInput { field: &'static str, value: f64 },
}
