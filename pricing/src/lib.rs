pub mod analytic;
pub mod common;
pub mod error;

pub use analytic::black_scholes::{price, Valuation};
pub use common::models::{EuropeanOption, OptionType};
pub use error::PricingError;
