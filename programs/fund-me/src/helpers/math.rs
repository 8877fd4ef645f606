use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::ErrorCode;

/// 10^exp as u128, failing instead of wrapping past 10^38
pub fn pow10(exp: u32) -> Result<u128> {
    10u128.checked_pow(exp).ok_or_else(|| error!(ErrorCode::MathOverflow))
}

/// Convert a base-currency amount into USD fixed-point (USD_DECIMALS)
///
/// Formula: usd = amount * price * 10^USD_DECIMALS / 10^(base_decimals + price_decimals)
///
/// The amount * price product always fits in u128 (both inputs are 64-bit), so
/// it is taken first and rescaled in a single step. When the source scale is
/// larger than the USD scale that step is one floor division: fractions of the
/// smallest USD unit are dropped, never rounded up.
pub fn convert_to_usd(
    amount: u64,
    price: u64,
    price_decimals: u8,
    base_decimals: u8,
) -> Result<u128> {
    let product = (amount as u128)
        .checked_mul(price as u128)
        .ok_or(ErrorCode::MathOverflow)?;

    let source_scale = base_decimals as u32 + price_decimals as u32;
    let target_scale = USD_DECIMALS as u32;

    #[cfg(feature = "verbose")]
    msg!("convert_to_usd: amount={}, price={}, source_scale={}", amount, price, source_scale);

    let usd = if source_scale >= target_scale {
        product / pow10(source_scale - target_scale)?
    } else {
        product
            .checked_mul(pow10(target_scale - source_scale)?)
            .ok_or(ErrorCode::MathOverflow)?
    };

    #[cfg(feature = "verbose")]
    msg!("convert_to_usd: usd={}", usd);

    Ok(usd)
}

/// Split a USD fixed-point value into whole dollars and cents for logs
pub fn format_usd(value: u128) -> (u128, u128) {
    let whole = value / ONE_USD;
    let cents = (value % ONE_USD) / (ONE_USD / 100);
    (whole, cents)
}
