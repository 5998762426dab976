use probability::distribution::{Distribution, Gaussian};

use crate::common::models::{EuropeanOption, OptionType};
use crate::error::PricingError;

pub(crate) fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

/// The outputs of a single Black-Scholes evaluation: the theoretical price,
/// the intermediate terms d1 / d2, and the option's delta
/// (N(d1) for a call, N(d1) - 1 for a put).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Valuation {
    pub price: f64,
    pub d1: f64,
    pub d2: f64,
    pub delta: f64,
}

fn d1_d2(option: &EuropeanOption) -> (f64, f64) {
    let sigma_exp = option.vola * option.time_to_expiration.sqrt();
    let d1 = ((option.asset_price / option.strike).ln()
        + (option.rfr + option.vola.powi(2) / 2.0) * option.time_to_expiration)
        / sigma_exp;
    (d1, d1 - sigma_exp)
}

/// At expiration the price collapses to the intrinsic value, and d1 / d2 are
/// no longer defined (sigma * sqrt(T) = 0). Report their moneyness limit and
/// the step-function delta instead of dividing by zero.
fn expired(option: &EuropeanOption) -> Valuation {
    let in_or_at_the_money = option.asset_price >= option.strike;
    let d = if in_or_at_the_money {
        f64::INFINITY
    } else {
        f64::NEG_INFINITY
    };
    let delta = match (option.option_type, in_or_at_the_money) {
        (OptionType::Call, true) => 1.0,
        (OptionType::Call, false) => 0.0,
        (OptionType::Put, true) => 0.0,
        (OptionType::Put, false) => -1.0,
    };
    Valuation {
        price: option.intrinsic_value(),
        d1: d,
        d2: d,
        delta,
    }
}

/// The theoretical value of a European option under Black-Scholes assumptions.
/// See https://en.wikipedia.org/wiki/Black-Scholes_model
///
/// Fails fast with [`PricingError::InvalidInput`] on the first violated
/// precondition (see [`EuropeanOption::validate`]); otherwise the evaluation
/// is a pure function of the inputs.
pub fn price(option: &EuropeanOption) -> Result<Valuation, PricingError> {
    option.validate()?;

    if option.time_to_expiration == 0.0 {
        return Ok(expired(option));
    }

    let (d1, d2) = d1_d2(option);
    let disc_strike = option.strike * option.discount_factor();
    let (price, delta) = match option.option_type {
        OptionType::Call => (
            cdf(d1) * option.asset_price - cdf(d2) * disc_strike,
            cdf(d1),
        ),
        OptionType::Put => (
            cdf(-d2) * disc_strike - cdf(-d1) * option.asset_price,
            cdf(d1) - 1.0,
        ),
    };

    Ok(Valuation {
        price,
        d1,
        d2,
        delta,
    })
}

/// The call price for the given parameters, whatever `option_type` says.
pub fn call(option: &EuropeanOption) -> Result<f64, PricingError> {
    let option = EuropeanOption {
        option_type: OptionType::Call,
        ..*option
    };
    price(&option).map(|valuation| valuation.price)
}

/// The put price for the given parameters, whatever `option_type` says.
pub fn put(option: &EuropeanOption) -> Result<f64, PricingError> {
    let option = EuropeanOption {
        option_type: OptionType::Put,
        ..*option
    };
    price(&option).map(|valuation| valuation.price)
}
