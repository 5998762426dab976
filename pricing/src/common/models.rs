use std::fmt;

use crate::error::PricingError;

/// Exercise style of the contract: a European call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    Call,
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// A plain European option contract; constructed per evaluation and discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EuropeanOption {
    /// the underlying asset's price at time t
    pub asset_price: f64,
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiration: f64,
    /// the annualized risk-free interest rate, continuously compounded
    pub rfr: f64,
    /// the annualized standard deviation of the underlying's returns
    pub vola: f64,
    /// call or put
    pub option_type: OptionType,
}

impl EuropeanOption {
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            vola,
            option_type,
        }
    }

    /// Check the pricing preconditions, reporting the first violated field.
    /// The volatility is only constrained before expiration; at `T = 0` the
    /// price no longer depends on it.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(self.asset_price.is_finite() && self.asset_price > 0.0) {
            return Err(PricingError::InvalidInput {
                field: "asset_price",
                value: self.asset_price,
            });
        }
        if !(self.strike.is_finite() && self.strike > 0.0) {
            return Err(PricingError::InvalidInput {
                field: "strike",
                value: self.strike,
            });
        }
        if !(self.time_to_expiration.is_finite() && self.time_to_expiration >= 0.0) {
            return Err(PricingError::InvalidInput {
                field: "time_to_expiration",
                value: self.time_to_expiration,
            });
        }
        if self.time_to_expiration > 0.0 && !(self.vola.is_finite() && self.vola > 0.0) {
            return Err(PricingError::InvalidInput {
                field: "vola",
                value: self.vola,
            });
        }
        if !self.rfr.is_finite() {
            return Err(PricingError::InvalidInput {
                field: "rfr",
                value: self.rfr,
            });
        }
        Ok(())
    }

    /// The payoff if the option expired now.
    pub fn intrinsic_value(&self) -> f64 {
        match self.option_type {
            OptionType::Call => (self.asset_price - self.strike).max(0.0),
            OptionType::Put => (self.strike - self.asset_price).max(0.0),
        }
    }

    pub fn discount_factor(&self) -> f64 {
        (-self.rfr * self.time_to_expiration).exp()
    }
}

impl fmt::Display for EuropeanOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "European {} option | S0 = ${} | K = ${} | T = {} {} | r = {}% | sigma = {}%",
            self.option_type,
            self.asset_price,
            self.strike,
            self.time_to_expiration,
            if self.time_to_expiration == 1.0 {
                "year"
            } else {
                "years"
            },
            self.rfr * 100.0,
            self.vola * 100.0
        )
    }
}
