use bigdecimal::{BigDecimal, RoundingMode};

/// Renders an amount as dollars with exactly two fractional digits.
pub fn format_money(amount: &BigDecimal) -> String {
    format!("${}", amount.with_scale_round(2, RoundingMode::HalfUp))
}
