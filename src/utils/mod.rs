use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Rounds a currency amount to cents.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp(2)
}
