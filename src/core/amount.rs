//! Converts between human readable decimal token amounts and integer base unit amounts.
//!
//! All scaling is done on the decimal text representation with exact integer arithmetic, i.e.,
//! floating point values are only used at the edges. `to_base_units(12.5, 24)` is exactly
//! `12_500_000_000_000_000_000_000_000`.

use crate::{core::U256, domain::TokenAmount, errors::amounts::*, errors::StakingError};

/// 10^38 is the largest power of ten that fits into a u128
pub const MAX_DECIMALS: u8 = 38;

/// returns the base unit amount that represents 1 whole token
pub fn one_token(decimals: u8) -> Option<TokenAmount> {
    if decimals > MAX_DECIMALS {
        return None;
    }
    Some(U256::exp10(decimals as usize).as_u128().into())
}

/// Multiplies the display amount by 10^decimals and truncates any fractional digits beyond the
/// token precision.
///
/// ## Errors
/// [StakingError::InvalidAmount] if the amount is negative, not finite, or too large to fit into
/// the base unit range
pub fn to_base_units(display_amount: f64, decimals: u8) -> Result<TokenAmount, StakingError> {
    if !display_amount.is_finite() {
        return Err(StakingError::InvalidAmount(NON_FINITE_AMOUNT));
    }
    if display_amount < 0.0 {
        return Err(StakingError::InvalidAmount(NEGATIVE_AMOUNT));
    }
    if display_amount == 0.0 {
        // also covers -0.0
        return Ok(TokenAmount(0));
    }
    // f64 Display never uses scientific notation and prints the shortest repr that round trips
    parse_display_amount(&display_amount.to_string(), decimals)
}

/// Divides the base unit amount by 10^decimals.
///
/// The result is the f64 closest to the exact decimal value.
pub fn to_display_amount(base_units: TokenAmount, decimals: u8) -> f64 {
    let text = format_display_amount(base_units, decimals);
    text.parse()
        .unwrap_or_else(|_| base_units.value() as f64 / 10f64.powi(decimals as i32))
}

/// Parses a plain decimal number, e.g., "12.5", ".5", "100", into base units.
/// Fractional digits beyond `decimals` are truncated.
///
/// ## Errors
/// [StakingError::InvalidAmount] if the text is not a non-negative decimal number or the scaled
/// value does not fit into the base unit range
pub fn parse_display_amount(amount: &str, decimals: u8) -> Result<TokenAmount, StakingError> {
    if decimals > MAX_DECIMALS {
        return Err(StakingError::InvalidAmount(DECIMALS_OUT_OF_RANGE));
    }
    let amount = amount.trim();
    if amount.starts_with('-') {
        return Err(StakingError::InvalidAmount(NEGATIVE_AMOUNT));
    }

    let (integer, fraction) = match amount.find('.') {
        Some(index) => (&amount[..index], &amount[index + 1..]),
        None => (amount, ""),
    };
    let is_digits = |text: &str| text.bytes().all(|b| b.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty()) || !is_digits(integer) || !is_digits(fraction)
    {
        return Err(StakingError::InvalidAmount(MALFORMED_AMOUNT));
    }

    let decimals = decimals as usize;
    let integer = if integer.is_empty() {
        U256::zero()
    } else {
        U256::from_dec_str(integer)
            .map_err(|_| StakingError::InvalidAmount(AMOUNT_OUT_OF_RANGE))?
    };
    let fraction = if fraction.len() > decimals {
        &fraction[..decimals]
    } else {
        fraction
    };
    let fraction = if fraction.is_empty() {
        U256::zero()
    } else {
        // right pad the fractional digits to the token precision
        let scale = U256::exp10(decimals - fraction.len());
        U256::from_dec_str(fraction)
            .map_err(|_| StakingError::InvalidAmount(MALFORMED_AMOUNT))?
            * scale
    };

    let value = integer
        .checked_mul(U256::exp10(decimals))
        .and_then(|value| value.checked_add(fraction))
        .filter(|value| *value <= U256::from(u128::MAX))
        .ok_or(StakingError::InvalidAmount(AMOUNT_OUT_OF_RANGE))?;
    Ok(value.as_u128().into())
}

/// Renders the exact decimal value of the base unit amount, e.g., "12.5".
/// Trailing fractional zeros are trimmed.
pub fn format_display_amount(base_units: TokenAmount, decimals: u8) -> String {
    let digits = base_units.value().to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }
    let digits = if digits.len() <= decimals {
        format!("{:0>width$}", digits, width = decimals + 1)
    } else {
        digits
    };
    let (integer, fraction) = digits.split_at(digits.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::near::YOCTO;
    use quickcheck_macros::quickcheck;

    #[test]
    fn to_base_units_is_exact() {
        assert_eq!(
            to_base_units(12.5, 24).unwrap(),
            TokenAmount(125 * YOCTO / 10)
        );
        assert_eq!(to_base_units(1.0, 24).unwrap(), TokenAmount(YOCTO));
        assert_eq!(to_base_units(0.1, 1).unwrap(), TokenAmount(1));
        assert_eq!(to_base_units(7.0, 0).unwrap(), TokenAmount(7));
    }

    #[test]
    fn to_base_units_truncates_excess_precision() {
        assert_eq!(to_base_units(1.999, 2).unwrap(), TokenAmount(199));
        assert_eq!(to_base_units(0.9, 0).unwrap(), TokenAmount(0));
    }

    #[test]
    fn to_base_units_rejects_invalid_amounts() {
        assert_eq!(
            to_base_units(-1.0, 24),
            Err(StakingError::InvalidAmount(NEGATIVE_AMOUNT))
        );
        assert_eq!(
            to_base_units(f64::NAN, 24),
            Err(StakingError::InvalidAmount(NON_FINITE_AMOUNT))
        );
        assert_eq!(
            to_base_units(f64::INFINITY, 24),
            Err(StakingError::InvalidAmount(NON_FINITE_AMOUNT))
        );
        // u128::MAX is ~3.4E38
        assert_eq!(
            to_base_units(1e15, 24),
            Err(StakingError::InvalidAmount(AMOUNT_OUT_OF_RANGE))
        );
        assert_eq!(to_base_units(-0.0, 24), Ok(TokenAmount(0)));
    }

    #[test]
    fn display_round_trip() {
        assert_eq!(to_display_amount(to_base_units(12.5, 24).unwrap(), 24), 12.5);
        assert_eq!(to_display_amount(to_base_units(0.3, 24).unwrap(), 24), 0.3);
        assert_eq!(to_display_amount(TokenAmount(YOCTO), 24), 1.0);
        assert_eq!(to_display_amount(TokenAmount(0), 24), 0.0);
    }

    #[test]
    fn parse_display_amount_formats() {
        assert_eq!(parse_display_amount("100", 2).unwrap(), TokenAmount(10_000));
        assert_eq!(parse_display_amount(".5", 2).unwrap(), TokenAmount(50));
        assert_eq!(parse_display_amount("5.", 2).unwrap(), TokenAmount(500));
        assert_eq!(parse_display_amount(" 1.25 ", 2).unwrap(), TokenAmount(125));
        for malformed in &["", ".", "1.2.3", "abc", "1e5", "+1", "1,000"] {
            assert_eq!(
                parse_display_amount(malformed, 2),
                Err(StakingError::InvalidAmount(MALFORMED_AMOUNT)),
                "{}",
                malformed
            );
        }
        assert_eq!(
            parse_display_amount("-5", 2),
            Err(StakingError::InvalidAmount(NEGATIVE_AMOUNT))
        );
        assert_eq!(
            parse_display_amount("1", MAX_DECIMALS + 1),
            Err(StakingError::InvalidAmount(DECIMALS_OUT_OF_RANGE))
        );
    }

    #[test]
    fn format_display_amount_trims_zeros() {
        assert_eq!(format_display_amount(TokenAmount(125 * YOCTO / 10), 24), "12.5");
        assert_eq!(format_display_amount(TokenAmount(1), 24), "0.000000000000000000000001");
        assert_eq!(format_display_amount(TokenAmount(3 * YOCTO), 24), "3");
        assert_eq!(format_display_amount(TokenAmount(0), 24), "0");
        assert_eq!(format_display_amount(TokenAmount(42), 0), "42");
    }

    #[test]
    fn one_token_per_decimals() {
        assert_eq!(one_token(24), Some(TokenAmount(YOCTO)));
        assert_eq!(one_token(0), Some(TokenAmount(1)));
        assert_eq!(one_token(MAX_DECIMALS + 1), None);
    }

    #[quickcheck]
    fn formatted_amounts_parse_back_exactly(base_units: u64, decimals: u8) -> bool {
        let decimals = decimals % (MAX_DECIMALS + 1);
        let amount = TokenAmount(base_units as u128);
        parse_display_amount(&format_display_amount(amount, decimals), decimals) == Ok(amount)
    }
}
