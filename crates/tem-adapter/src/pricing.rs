/*
[INPUT]:  Order price, amount and duration; SUN and TRX amounts
[OUTPUT]: Order payment in SUN and unit conversions
[POS]:    Pricing layer - exact integer/decimal arithmetic used when sizing orders
[UPDATE]: When the market changes its payment formula or unit scale
*/

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::http::{Result, TemError};

/// One day in seconds; shorter orders are billed for an extra day
pub const SECONDS_PER_DAY: u64 = 86_400;

/// SUN in one TRX
pub const SUN_PER_TRX: u64 = 1_000_000;

/// Duration the market bills for.
///
/// Orders shorter than a day get one day added on top of their duration.
pub fn effective_duration(duration: u64) -> u64 {
    if duration < SECONDS_PER_DAY {
        duration + SECONDS_PER_DAY
    } else {
        duration
    }
}

/// Payment in SUN for renting `amount` resource units at `price` SUN per unit per day.
///
/// `ceil(price * amount * effective_duration / 86400)`, computed on `u128` so
/// nothing is lost to floating point. Fails only when the result does not fit
/// in a `u64`.
pub fn compute_order_payment(price: u64, amount: u64, duration: u64) -> Result<u64> {
    let day = u128::from(SECONDS_PER_DAY);
    let total = u128::from(price)
        .checked_mul(u128::from(amount))
        .and_then(|value| value.checked_mul(u128::from(effective_duration(duration))))
        .ok_or_else(|| payment_overflow(price, amount, duration))?;

    let payment = total / day + u128::from(total % day != 0);
    u64::try_from(payment).map_err(|_| payment_overflow(price, amount, duration))
}

fn payment_overflow(price: u64, amount: u64, duration: u64) -> TemError {
    TemError::validation(format!(
        "payment overflows for price={price} amount={amount} duration={duration}"
    ))
}

/// SUN to TRX, exact (no rounding).
pub fn sun_to_trx(sun: u64) -> Decimal {
    Decimal::from_i128_with_scale(i128::from(sun), 6).normalize()
}

/// TRX to SUN, truncating sub-SUN fractions toward zero.
pub fn trx_to_sun(trx: Decimal) -> Result<u64> {
    if trx.is_sign_negative() && !trx.is_zero() {
        return Err(TemError::validation(format!("negative TRX amount: {trx}")));
    }

    trx.checked_mul(Decimal::from(SUN_PER_TRX))
        .map(|sun| sun.trunc())
        .and_then(|sun| sun.to_u64())
        .ok_or_else(|| TemError::validation(format!("TRX amount out of range: {trx}")))
}
