use bigdecimal::BigDecimal;

use crate::domain::product::pricing::parse_price;

use super::model::Cart;

/// Sum of the parsed price of every line. Not rounded.
pub fn compute_total(cart: &Cart) -> BigDecimal {
    cart.lines().iter().map(|line| parse_price(&line.price)).sum()
}
