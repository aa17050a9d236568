//! Collateral rule: decides the billing tier at rental activation.

use crate::{errors::RentalError, RateTier, RentalConfig, BPS_DENOMINATOR};

/// Currency value of a token amount, rounded down.
pub fn token_value(tokens: i128, tokens_per_unit: i128) -> Result<i128, RentalError> {
    if tokens_per_unit <= 0 {
        return Err(RentalError::InvalidConfig);
    }
    Ok(tokens / tokens_per_unit)
}

/// Token amount worth exactly `value` units of currency.
pub fn tokens_for_value(value: i128, tokens_per_unit: i128) -> Result<i128, RentalError> {
    value
        .checked_mul(tokens_per_unit)
        .ok_or(RentalError::ArithmeticOverflow)
}

/// Settlement balance plus the currency value of custody tokens.
pub fn collateral_value(
    settlement_balance: i128,
    token_balance: i128,
    config: &RentalConfig,
) -> Result<i128, RentalError> {
    settlement_balance
        .checked_add(token_value(token_balance, config.tokens_per_unit)?)
        .ok_or(RentalError::ArithmeticOverflow)
}

pub fn evaluate(
    settlement_balance: i128,
    token_balance: i128,
    config: &RentalConfig,
) -> Result<RateTier, RentalError> {
    if collateral_value(settlement_balance, token_balance, config)? >= config.collateral_threshold {
        Ok(RateTier::Premium)
    } else {
        Ok(RateTier::Standard)
    }
}

/// Discounted per-second rate, rounded down.
pub fn premium_rate(config: &RentalConfig) -> Result<i128, RentalError> {
    config
        .standard_rate
        .checked_mul(config.premium_bps as i128)
        .map(|scaled| scaled / BPS_DENOMINATOR)
        .ok_or(RentalError::ArithmeticOverflow)
}

pub fn rate_for(tier: RateTier, config: &RentalConfig) -> Result<i128, RentalError> {
    match tier {
        RateTier::Standard => Ok(config.standard_rate),
        RateTier::Premium => premium_rate(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_config;

    #[test]
    fn threshold_is_inclusive() {
        let config = default_config();
        let threshold = config.collateral_threshold;

        assert_eq!(evaluate(threshold, 0, &config), Ok(RateTier::Premium));
        assert_eq!(evaluate(threshold - 1, 0, &config), Ok(RateTier::Standard));
    }

    #[test]
    fn tokens_count_at_conversion_factor() {
        let config = default_config();
        let tokens = config.collateral_threshold * config.tokens_per_unit;

        assert_eq!(evaluate(0, tokens, &config), Ok(RateTier::Premium));
        assert_eq!(evaluate(0, tokens - 1, &config), Ok(RateTier::Standard));
        assert_eq!(evaluate(1, tokens - 1, &config), Ok(RateTier::Premium));
    }

    #[test]
    fn mixed_collateral_below_threshold_is_standard() {
        let config = default_config();
        // 40_000 currency + 120_002 tokens (60_001 currency) = 100_001
        assert_eq!(evaluate(40_000, 120_002, &config), Ok(RateTier::Standard));
    }

    #[test]
    fn premium_rate_is_discounted() {
        let config = default_config();
        assert_eq!(premium_rate(&config), Ok(8_000));
        assert_eq!(rate_for(RateTier::Standard, &config), Ok(10_000));
        assert_eq!(rate_for(RateTier::Premium, &config), Ok(8_000));
    }

    #[test]
    fn token_value_rounds_down() {
        assert_eq!(token_value(5, 2), Ok(2));
        assert_eq!(token_value(5, 0), Err(RentalError::InvalidConfig));
        assert_eq!(tokens_for_value(i128::MAX, 2), Err(RentalError::ArithmeticOverflow));
    }
}
