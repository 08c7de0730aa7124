use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::{Signed, Zero};

use super::value_objects::Price;

/// Converts a raw price into a decimal amount.
///
/// Strings may carry a leading `$` and surrounding whitespace. Anything that
/// does not parse to a non-negative number yields zero.
pub fn parse_price(price: &Price) -> BigDecimal {
    let parsed = match price {
        Price::Number(number) => BigDecimal::from_str(&number.to_string()).ok(),
        Price::Text(text) => {
            let trimmed = text.trim();
            let amount = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
            BigDecimal::from_str(amount).ok()
        }
    };

    match parsed {
        Some(value) if !value.is_negative() => value,
        _ => BigDecimal::zero(),
    }
}
